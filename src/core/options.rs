//! Named option lookup
//!
//! Credentials are read by option name from an injected store rather
//! than from process-wide state. `Config` is the production store; tests
//! use a plain `HashMap`.

use std::collections::HashMap;

/// Option name holding the Algolia application ID
pub const APPLICATION_ID_OPTION: &str = "algolia_application_id";

/// Option name holding the Algolia API key
pub const API_KEY_OPTION: &str = "algolia_api_key";

/// Read-only store of named string options
pub trait OptionStore: Send + Sync {
    /// Look up an option, `None` if unset
    fn get_option(&self, name: &str) -> Option<String>;

    /// Look up an option, falling back to `default` if unset
    ///
    /// An unset option and an option set to `""` are indistinguishable
    /// to callers that pass `""` as the default.
    fn get_option_or(&self, name: &str, default: &str) -> String {
        self.get_option(name)
            .unwrap_or_else(|| default.to_string())
    }
}

impl OptionStore for HashMap<String, String> {
    fn get_option(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}
