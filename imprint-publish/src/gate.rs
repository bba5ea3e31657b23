//! Request access gate.
//!
//! A stateless predicate evaluated by the transport layer before a request
//! is allowed to reach the publish service. Not consulted by the service
//! itself.

use tracing::warn;

/// Configuration for the request gate.
#[derive(Debug, Clone)]
pub struct GateSettings {
    /// Whether the publishing endpoint is enabled at all.
    pub enabled: bool,
    /// Whether non-local callers are allowed.
    pub allow_remote_access: bool,
    /// Whether requests may carry a content-streaming payload.
    pub allow_streaming: bool,
}

impl Default for GateSettings {
    /// Everything off: the endpoint must be enabled explicitly.
    fn default() -> Self {
        Self {
            enabled: false,
            allow_remote_access: false,
            allow_streaming: false,
        }
    }
}

/// Transport-level facts about an incoming request.
#[derive(Debug, Clone)]
pub struct RequestMeta {
    /// Whether the request originates from the local machine.
    pub is_local: bool,
    /// The transport method (e.g. `"GET"`, `"POST"`).
    pub method: String,
}

/// Decides whether a request may reach the publish service.
#[derive(Debug, Clone)]
pub struct RequestGate {
    settings: GateSettings,
}

impl RequestGate {
    /// Creates a gate with the given settings.
    #[must_use]
    pub fn new(settings: GateSettings) -> Self {
        Self { settings }
    }

    /// Pure predicate over request metadata and configuration.
    ///
    /// Denies when the endpoint is disabled, when a remote caller arrives
    /// without remote access enabled, or when a streaming-capable method
    /// (`POST`) arrives without streaming enabled.
    #[must_use]
    pub fn is_allowed(&self, request: &RequestMeta) -> bool {
        if !self.settings.enabled {
            warn!("publishing endpoint is disabled");
            return false;
        }

        if !request.is_local && !self.settings.allow_remote_access {
            warn!("remote caller denied: remote access is not enabled");
            return false;
        }

        if request.method.eq_ignore_ascii_case("POST") && !self.settings.allow_streaming {
            warn!("streaming payload denied: streaming is not enabled");
            return false;
        }

        true
    }
}
