//! Bootstrap - paper application setup
//!
//! Builds the event channel, the paper interface on top of it and an
//! application registered as the current one.

use hive_app::{AppConfig, AppRegistry, Application, ConfigError};
use hive_core::Event;
use hive_gateway::{ChannelPublisher, PaperConfig, PaperGateway};
use log::{info, trace};
use std::sync::Arc;
use thiserror::Error;

const PAPER_INTERFACE: &str = "paper";

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Unsupported interface: {0}")]
    UnsupportedInterface(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    App(#[from] hive_app::Error),
}

/// Everything a running session needs a handle on
pub struct Bootstrap {
    pub registry: AppRegistry,
    pub app: Arc<Application>,
    pub gateway: Arc<PaperGateway>,
    /// Event channel the interface publishes on; subscribe before trading
    pub publisher: ChannelPublisher<Event>,
}

impl Bootstrap {
    /// Put an event on the bus next to what the interface publishes
    ///
    /// Returns whether anyone was listening.
    pub fn publish(&self, event: Event) -> bool {
        let kind = event.kind();
        match self.publisher.send(event) {
            Ok(_) => true,
            Err(_) => {
                trace!("No subscribers for {} event", kind);
                false
            }
        }
    }
}

/// Build and register a paper-traded application named `name`
pub fn bootstrap(name: &str, config: AppConfig) -> Result<Bootstrap, RunnerError> {
    if !config.interface.eq_ignore_ascii_case(PAPER_INTERFACE) {
        return Err(RunnerError::UnsupportedInterface(config.interface));
    }
    config.validate()?;

    let publisher = ChannelPublisher::new(config.event_capacity);
    let gateway = Arc::new(PaperGateway::new(PaperConfig::default(), publisher.clone()));
    let app = Application::builder(name)
        .config(config)
        .trader(gateway.clone())
        .market(gateway.clone())
        .build()?;

    let registry = AppRegistry::new();
    registry.register(app.clone())?;
    info!("Bootstrapped {} on the paper interface", name);

    Ok(Bootstrap {
        registry,
        app,
        gateway,
        publisher,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hive_core::AccountData;
    use hive_gateway::Subscriber;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rejects_unknown_interface() {
        let config = AppConfig {
            interface: "ctp".to_string(),
            ..AppConfig::enabled()
        };
        assert!(matches!(
            bootstrap("main", config),
            Err(RunnerError::UnsupportedInterface(name)) if name == "ctp"
        ));
    }

    #[test]
    fn test_rejects_zero_event_capacity() {
        let config = AppConfig {
            event_capacity: 0,
            ..AppConfig::enabled()
        };
        assert!(matches!(
            bootstrap("main", config),
            Err(RunnerError::Config(ConfigError::Invalid {
                key: "EVENT_CAPACITY",
                ..
            }))
        ));
    }

    #[test]
    fn test_publish_reports_listeners() {
        let session = bootstrap("main", AppConfig::enabled()).unwrap();
        let event = || Event::new(AccountData::new("paper", dec!(1)));
        assert!(!session.publish(event()));

        let mut listener = session.publisher.subscribe();
        assert!(session.publish(event()));
        assert!(listener.try_next().unwrap().is_some());
    }

    #[test]
    fn test_registers_as_current() {
        let session = bootstrap("main", AppConfig::enabled()).unwrap();
        assert_eq!(session.registry.current_name().as_deref(), Some("main"));
        assert_eq!(session.app.config().event_capacity, 10_000);
    }
}
