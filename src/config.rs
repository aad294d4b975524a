use serde::{Deserialize, Serialize};

/// Switch integration settings.
///
/// Injected into the router at construction and read-only afterwards, so
/// unsynchronized concurrent reads are safe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwitchSettings {
    /// Route commits through the interoperability switch instead of
    /// delivering to a co-located FSP.
    #[serde(default)]
    pub integration_enabled: bool,

    /// Base URL of the switch API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Timeout applied to each switch request, in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for SwitchSettings {
    fn default() -> Self {
        Self {
            integration_enabled: false,
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_request_timeout() -> u64 {
    30
}
