//! Application instances
//!
//! An `Application` is one running trading context: its configuration, its
//! trading/market collaborators and the extensions installed into it. It is
//! only handed out fully built, behind an `Arc`.

use dashmap::DashMap;
use hive_core::Event;
use hive_ports::{Market, Trader};
use log::{debug, info, warn};
use std::fmt;
use std::sync::Arc;

use crate::capability::Capability;
use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::extension::Deliver;

/// A failed delivery to one extension
#[derive(Debug)]
pub struct DeliveryFailure {
    pub extension: String,
    pub error: Error,
}

pub struct Application {
    name: String,
    config: AppConfig,
    extensions: DashMap<String, Arc<dyn Deliver>>,
    trader: Option<Arc<dyn Trader>>,
    market: Option<Arc<dyn Market>>,
}

impl Application {
    pub fn builder(name: impl Into<String>) -> ApplicationBuilder {
        ApplicationBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Trading collaborator
    pub fn trader(&self) -> Result<&Arc<dyn Trader>> {
        self.trader
            .as_ref()
            .ok_or(Error::MissingCollaborator(Capability::Trading))
    }

    /// Market collaborator
    pub fn market(&self) -> Result<&Arc<dyn Market>> {
        self.market
            .as_ref()
            .ok_or(Error::MissingCollaborator(Capability::Market))
    }

    /// Install an extension, returning the one it replaced
    pub(crate) fn insert_extension(&self, extension: Arc<dyn Deliver>) -> Option<Arc<dyn Deliver>> {
        debug!("[{}] Installing extension {}", self.name, extension.name());
        self.extensions
            .insert(extension.name().to_string(), extension)
    }

    pub fn extension(&self, name: &str) -> Option<Arc<dyn Deliver>> {
        self.extensions.get(name).map(|e| e.value().clone())
    }

    /// Installed extension names, sorted
    pub fn extension_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.extensions.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    pub fn remove_extension(&self, name: &str) -> Option<Arc<dyn Deliver>> {
        self.extensions.remove(name).map(|(_, e)| e)
    }

    /// Snapshot of the installed extensions
    ///
    /// Handlers run against the snapshot so they can install or remove
    /// extensions without holding a map lock.
    pub fn extension_handles(&self) -> Vec<Arc<dyn Deliver>> {
        self.extensions.iter().map(|e| e.value().clone()).collect()
    }

    /// Deliver `event` to one named extension
    pub fn deliver_to(&self, name: &str, event: &Event) -> Result<()> {
        let extension = self
            .extension(name)
            .ok_or_else(|| Error::UnknownExtension(name.to_string()))?;
        extension.deliver(event)
    }

    /// Deliver `event` to every extension
    ///
    /// A failing extension does not stop delivery to the others; failures
    /// are returned to the caller.
    pub fn deliver_all(&self, event: &Event) -> Vec<DeliveryFailure> {
        let mut failures = Vec::new();
        for extension in self.extension_handles() {
            if let Err(error) = extension.deliver(event) {
                warn!(
                    "[{}] {} failed on {} event: {}",
                    self.name,
                    extension.name(),
                    event.kind(),
                    error
                );
                failures.push(DeliveryFailure {
                    extension: extension.name().to_string(),
                    error,
                });
            }
        }
        failures
    }
}

impl fmt::Debug for Application {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Application")
            .field("name", &self.name)
            .field("config", &self.config)
            .field("extensions", &self.extension_names())
            .field("trader", &self.trader.as_ref().map(|t| t.name().to_string()))
            .field("market", &self.market.as_ref().map(|m| m.name().to_string()))
            .finish()
    }
}

/// Builder for `Application`
pub struct ApplicationBuilder {
    name: String,
    config: AppConfig,
    trader: Option<Arc<dyn Trader>>,
    market: Option<Arc<dyn Market>>,
}

impl ApplicationBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            config: AppConfig::default(),
            trader: None,
            market: None,
        }
    }

    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    pub fn trader(mut self, trader: Arc<dyn Trader>) -> Self {
        self.trader = Some(trader);
        self
    }

    pub fn market(mut self, market: Arc<dyn Market>) -> Self {
        self.market = Some(market);
        self
    }

    /// Finish the application
    ///
    /// Every enabled capability needs its collaborator.
    pub fn build(self) -> Result<Arc<Application>> {
        if self.config.td_func && self.trader.is_none() {
            return Err(Error::MissingCollaborator(Capability::Trading));
        }
        if self.config.md_func && self.market.is_none() {
            return Err(Error::MissingCollaborator(Capability::Market));
        }

        info!(
            "Application {} built (TD_FUNC={}, MD_FUNC={}, interface={})",
            self.name, self.config.td_func, self.config.md_func, self.config.interface
        );
        Ok(Arc::new(Application {
            name: self.name,
            config: self.config,
            extensions: DashMap::new(),
            trader: self.trader,
            market: self.market,
        }))
    }
}
