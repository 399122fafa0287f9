//! OctoPrint HTTP command channel
//!
//! Commands are posted one per request to `/api/printer/command`, which
//! OctoPrint forwards verbatim to the printer's serial line. The request
//! timeout bounds every call so an unreachable host cannot stall the panel.

use crate::channel::CommandChannel;
use printpanel_core::ChannelError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

const COMMAND_PATH: &str = "/api/printer/command";
const VERSION_PATH: &str = "/api/version";
const API_KEY_HEADER: &str = "X-Api-Key";

/// Connection parameters for an OctoPrint server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OctoPrintConfig {
    /// Server root, e.g. `http://127.0.0.1:5000`
    pub base_url: String,
    /// Application or user API key; empty disables the header
    pub api_key: String,
    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for OctoPrintConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            api_key: String::new(),
            timeout_ms: 5000,
        }
    }
}

/// Server version as reported by `/api/version`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerVersion {
    /// API version
    pub api: String,
    /// Server version
    pub server: String,
    /// Human readable server description
    #[serde(default)]
    pub text: String,
}

#[derive(Serialize)]
struct CommandRequest<'a> {
    commands: [&'a str; 1],
}

/// Blocking command channel backed by the OctoPrint REST API
pub struct OctoPrintChannel {
    agent: ureq::Agent,
    base_url: String,
    api_key: String,
    timeout_ms: u64,
}

impl OctoPrintChannel {
    /// Create a channel for the given server
    pub fn new(config: OctoPrintConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build();

        Self {
            agent,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            timeout_ms: config.timeout_ms,
        }
    }

    /// Server root this channel talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Query the server version, confirming the host is reachable
    pub fn server_version(&self) -> Result<ServerVersion, ChannelError> {
        let url = format!("{}{}", self.base_url, VERSION_PATH);
        let response = self
            .authorized(self.agent.get(&url))
            .call()
            .map_err(|e| self.map_error(e))?;

        let body = response.into_string().map_err(|e| ChannelError::Transport {
            reason: e.to_string(),
        })?;
        let version: ServerVersion =
            serde_json::from_str(&body).map_err(|e| ChannelError::Other {
                message: format!("Invalid version response: {}", e),
            })?;

        info!("Connected to OctoPrint {} (API {})", version.server, version.api);
        Ok(version)
    }

    fn authorized(&self, request: ureq::Request) -> ureq::Request {
        if self.api_key.is_empty() {
            request
        } else {
            request.set(API_KEY_HEADER, &self.api_key)
        }
    }

    fn map_error(&self, error: ureq::Error) -> ChannelError {
        match error {
            ureq::Error::Status(status, response) => {
                let message = response
                    .into_string()
                    .map(|body| body.trim().to_string())
                    .unwrap_or_default();
                ChannelError::Rejected { status, message }
            }
            ureq::Error::Transport(transport) => {
                if is_timeout(&transport) {
                    ChannelError::Timeout {
                        timeout_ms: self.timeout_ms,
                    }
                } else {
                    ChannelError::Transport {
                        reason: transport.to_string(),
                    }
                }
            }
        }
    }
}

impl CommandChannel for OctoPrintChannel {
    fn execute(&mut self, command: &str) -> Result<(), ChannelError> {
        let url = format!("{}{}", self.base_url, COMMAND_PATH);
        let body = serde_json::to_string(&CommandRequest {
            commands: [command],
        })
        .map_err(|e| ChannelError::Other {
            message: e.to_string(),
        })?;

        debug!("POST {} {}", url, body);
        self.authorized(self.agent.post(&url))
            .set("Content-Type", "application/json")
            .send_string(&body)
            .map_err(|e| self.map_error(e))?;

        Ok(())
    }

    fn name(&self) -> &str {
        "octoprint"
    }
}

fn is_timeout(transport: &ureq::Transport) -> bool {
    let mut source = std::error::Error::source(transport);
    while let Some(err) = source {
        if let Some(io) = err.downcast_ref::<std::io::Error>() {
            return matches!(
                io.kind(),
                std::io::ErrorKind::TimedOut | std::io::ErrorKind::WouldBlock
            );
        }
        source = err.source();
    }
    false
}
