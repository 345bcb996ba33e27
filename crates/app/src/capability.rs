//! Capability flags gating trading and market calls

use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::application::Application;
use crate::error::{Error, Result};

/// Feature switch checked before calling a collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    /// `TD_FUNC`: send, cancel, query
    Trading,
    /// `MD_FUNC`: subscribe
    Market,
}

impl Capability {
    /// Configuration key of the flag
    pub fn key(&self) -> &'static str {
        match self {
            Self::Trading => "TD_FUNC",
            Self::Market => "MD_FUNC",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Precondition check run before forwarding to a collaborator
pub struct CapabilityGate;

impl CapabilityGate {
    /// Fail with `CapabilityDisabled` unless the flag is on for `app`
    pub fn require(app: &Application, capability: Capability) -> Result<()> {
        if app.config().is_enabled(capability) {
            return Ok(());
        }
        warn!("[{}] {} is disabled, call refused", app.name(), capability);
        Err(Error::CapabilityDisabled(capability))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use hive_gateway::{ChannelPublisher, PaperConfig, PaperGateway};
    use std::sync::Arc;

    #[test]
    fn test_require_follows_config() {
        let config = AppConfig {
            md_func: true,
            ..Default::default()
        };
        let gateway = Arc::new(PaperGateway::new(
            PaperConfig::default(),
            ChannelPublisher::new(4),
        ));
        let app = Application::builder("md-only")
            .config(config)
            .market(gateway)
            .build()
            .unwrap();

        assert!(CapabilityGate::require(&app, Capability::Market).is_ok());
        assert!(matches!(
            CapabilityGate::require(&app, Capability::Trading),
            Err(Error::CapabilityDisabled(Capability::Trading))
        ));
    }

    #[test]
    fn test_display_is_config_key() {
        assert_eq!(Capability::Trading.to_string(), "TD_FUNC");
        assert_eq!(Capability::Market.to_string(), "MD_FUNC");
    }
}
