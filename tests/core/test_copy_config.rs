//! Tests for the copy-config command
//!
//! The command is built directly from an option store and a recording
//! client factory, without going through the CLI adapter.

use crate::common::{credentials, CopyCall, RecordingFactory};
use indexcfg::core::copy_config::{CopyConfigCommand, CopyConfigRequest, CopyOutcome};
use indexcfg::core::options::APPLICATION_ID_OPTION;
use indexcfg::{IndexCfgError, ScopeTag};
use std::collections::HashMap;

fn request(from: Option<&str>, to: Option<&str>, flags: (bool, bool, bool)) -> CopyConfigRequest {
    CopyConfigRequest {
        from: from.map(str::to_string),
        to: to.map(str::to_string),
        settings: flags.0,
        synonyms: flags.1,
        rules: flags.2,
    }
}

// =============================================================================
// Credentials
// =============================================================================

#[tokio::test]
async fn test_empty_application_id_is_fatal_without_client() {
    let options = credentials("", "key");
    let factory = RecordingFactory::new();
    let command = CopyConfigCommand::new(&options, &factory);

    let result = command
        .execute(&request(Some("a"), Some("b"), (true, false, false)))
        .await;

    let err = result.unwrap_err();
    assert!(matches!(err, IndexCfgError::MissingCredentials));
    assert!(err.is_fatal());
    assert!(factory.created().is_empty(), "No client should be built");
    assert!(factory.calls().is_empty());
}

#[tokio::test]
async fn test_empty_api_key_is_fatal() {
    let options = credentials("APP", "");
    let factory = RecordingFactory::new();

    let err = CopyConfigCommand::new(&options, &factory)
        .execute(&request(Some("a"), Some("b"), (true, true, true)))
        .await
        .unwrap_err();

    assert_eq!(err.message(), "Missing App ID or API key");
    assert!(factory.created().is_empty());
}

#[tokio::test]
async fn test_unset_credentials_behave_like_empty() {
    let mut options = HashMap::new();
    options.insert(APPLICATION_ID_OPTION.to_string(), "APP".to_string());
    let factory = RecordingFactory::new();

    let err = CopyConfigCommand::new(&options, &factory)
        .execute(&request(Some("a"), Some("b"), (true, false, false)))
        .await
        .unwrap_err();

    assert!(err.is_fatal());
    assert!(factory.created().is_empty());
}

#[tokio::test]
async fn test_missing_credentials_checked_before_arguments() {
    let options = credentials("", "");
    let factory = RecordingFactory::new();

    let err = CopyConfigCommand::new(&options, &factory)
        .execute(&request(None, None, (false, false, false)))
        .await
        .unwrap_err();

    assert!(err.is_fatal());
    assert!(!err.is_invalid_argument());
}

// =============================================================================
// Index names
// =============================================================================

#[tokio::test]
async fn test_missing_to_is_invalid_argument() {
    let options = credentials("APP", "KEY");
    let factory = RecordingFactory::new();

    let err = CopyConfigCommand::new(&options, &factory)
        .execute(&request(Some("a"), None, (true, false, false)))
        .await
        .unwrap_err();

    assert!(err.is_invalid_argument());
    assert_eq!(err.message(), "--from and --to arguments are required");
    assert!(factory.calls().is_empty(), "No copy call on invalid arguments");
}

#[tokio::test]
async fn test_empty_from_is_invalid_argument() {
    let options = credentials("APP", "KEY");
    let factory = RecordingFactory::new();

    let err = CopyConfigCommand::new(&options, &factory)
        .execute(&request(Some(""), Some("b"), (false, true, false)))
        .await
        .unwrap_err();

    assert!(err.is_invalid_argument());
    assert!(factory.calls().is_empty());
}

#[tokio::test]
async fn test_zero_is_a_valid_index_name() {
    let options = credentials("APP", "KEY");
    let factory = RecordingFactory::new();

    let outcome = CopyConfigCommand::new(&options, &factory)
        .execute(&request(Some("0"), Some("0_copy"), (true, false, false)))
        .await
        .unwrap();

    assert_eq!(
        factory.calls(),
        vec![CopyCall {
            source: "0".to_string(),
            destination: "0_copy".to_string(),
            scope: vec![ScopeTag::Settings],
        }]
    );
    assert_eq!(outcome.message(), "Copied settings from 0 to 0_copy");
}

#[tokio::test]
async fn test_client_built_with_stored_credentials() {
    let options = credentials("APP", "KEY");
    let factory = RecordingFactory::new();

    CopyConfigCommand::new(&options, &factory)
        .execute(&request(Some("a"), Some("b"), (true, false, false)))
        .await
        .unwrap();

    assert_eq!(
        factory.created(),
        vec![("APP".to_string(), "KEY".to_string())]
    );
}

// =============================================================================
// Scope
// =============================================================================

#[tokio::test]
async fn test_settings_only() {
    let options = credentials("APP", "KEY");
    let factory = RecordingFactory::new();

    let outcome = CopyConfigCommand::new(&options, &factory)
        .execute(&request(
            Some("products_dev"),
            Some("products_prod"),
            (true, false, false),
        ))
        .await
        .unwrap();

    assert_eq!(
        factory.calls(),
        vec![CopyCall {
            source: "products_dev".to_string(),
            destination: "products_prod".to_string(),
            scope: vec![ScopeTag::Settings],
        }]
    );
    assert_eq!(
        outcome.message(),
        "Copied settings from products_dev to products_prod"
    );
}

#[tokio::test]
async fn test_synonyms_and_rules() {
    let options = credentials("APP", "KEY");
    let factory = RecordingFactory::new();

    let outcome = CopyConfigCommand::new(&options, &factory)
        .execute(&request(Some("a"), Some("b"), (false, true, true)))
        .await
        .unwrap();

    let calls = factory.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].scope, vec![ScopeTag::Synonyms, ScopeTag::Rules]);
    assert_eq!(outcome.message(), "Copied synonyms, rules from a to b");
}

#[tokio::test]
async fn test_no_flags_warns_without_call() {
    let options = credentials("APP", "KEY");
    let factory = RecordingFactory::new();

    let outcome = CopyConfigCommand::new(&options, &factory)
        .execute(&request(Some("a"), Some("b"), (false, false, false)))
        .await
        .unwrap();

    assert_eq!(outcome, CopyOutcome::NothingToCopy);
    assert_eq!(
        outcome.message(),
        "Nothing to copy, use --settings, --synonyms or --rules."
    );
    assert!(factory.calls().is_empty());
}

#[tokio::test]
async fn test_scope_matches_flags_in_check_order() {
    let options = credentials("APP", "KEY");

    for settings in [false, true] {
        for synonyms in [false, true] {
            for rules in [false, true] {
                let factory = RecordingFactory::new();
                let result = CopyConfigCommand::new(&options, &factory)
                    .execute(&request(Some("src"), Some("dst"), (settings, synonyms, rules)))
                    .await
                    .unwrap();

                let mut expected = Vec::new();
                if settings {
                    expected.push(ScopeTag::Settings);
                }
                if synonyms {
                    expected.push(ScopeTag::Synonyms);
                }
                if rules {
                    expected.push(ScopeTag::Rules);
                }

                let calls = factory.calls();
                if expected.is_empty() {
                    assert!(calls.is_empty());
                    assert_eq!(result, CopyOutcome::NothingToCopy);
                } else {
                    assert_eq!(calls.len(), 1, "Exactly one copy call");
                    assert_eq!(calls[0].scope, expected);
                    let message = result.message();
                    assert!(message.contains("from src to dst"));
                }
            }
        }
    }
}

// =============================================================================
// Client failures
// =============================================================================

#[tokio::test]
async fn test_client_failure_propagates_unchanged() {
    let options = credentials("APP", "KEY");
    let factory = RecordingFactory::failing(404, "Index does not exist");

    let err = CopyConfigCommand::new(&options, &factory)
        .execute(&request(Some("missing"), Some("b"), (true, false, false)))
        .await
        .unwrap_err();

    match err {
        IndexCfgError::Api { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Index does not exist");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(factory.calls().len(), 1, "No retry after a failure");
}
