//! Application registry
//!
//! Holds every running `Application` by name plus the distinguished
//! *current* one. It is a context value shared through an `Arc`, not a
//! global: registration and removal happen at startup/shutdown, lookups
//! happen everywhere.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use log::info;
use std::sync::{Arc, PoisonError, RwLock};

use crate::application::Application;
use crate::error::{Error, Result};
use crate::signals::Monitors;

/// Sentinel name selecting the current application
pub const CURRENT_APP: &str = "current_app";

/// Which application a call applies to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppTarget {
    Current,
    Named(String),
}

impl From<&str> for AppTarget {
    fn from(name: &str) -> Self {
        if name == CURRENT_APP {
            AppTarget::Current
        } else {
            AppTarget::Named(name.to_string())
        }
    }
}

impl From<String> for AppTarget {
    fn from(name: String) -> Self {
        if name == CURRENT_APP {
            AppTarget::Current
        } else {
            AppTarget::Named(name)
        }
    }
}

impl From<&Arc<Application>> for AppTarget {
    fn from(app: &Arc<Application>) -> Self {
        AppTarget::Named(app.name().to_string())
    }
}

/// Registry of running applications
pub struct AppRegistry {
    instances: DashMap<String, Arc<Application>>,
    current: RwLock<Option<Arc<Application>>>,
    monitors: Monitors,
}

impl Default for AppRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl AppRegistry {
    pub fn new() -> Self {
        Self {
            instances: DashMap::new(),
            current: RwLock::new(None),
            monitors: Monitors::default(),
        }
    }

    /// Monitoring signals emitted by the facade
    pub fn monitors(&self) -> &Monitors {
        &self.monitors
    }

    /// Register a fully built application
    ///
    /// The first application registered becomes current.
    pub fn register(&self, app: Arc<Application>) -> Result<()> {
        match self.instances.entry(app.name().to_string()) {
            Entry::Occupied(entry) => return Err(Error::DuplicateName(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(app.clone());
            }
        }
        info!("Application {} registered", app.name());

        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        if current.is_none() {
            info!("Application {} is now current", app.name());
            *current = Some(app);
        }
        Ok(())
    }

    /// Make a registered application the current one
    pub fn set_current(&self, name: &str) -> Result<()> {
        let app = self.lookup(name)?;
        info!("Application {} is now current", name);
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Some(app);
        Ok(())
    }

    pub fn current_name(&self) -> Option<String> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|app| app.name().to_string())
    }

    /// Resolve a target to its application
    pub fn resolve(&self, target: impl Into<AppTarget>) -> Result<Arc<Application>> {
        match target.into() {
            AppTarget::Current => self
                .current
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
                .ok_or(Error::NoCurrentContext),
            AppTarget::Named(name) => self.lookup(&name),
        }
    }

    fn lookup(&self, name: &str) -> Result<Arc<Application>> {
        self.instances
            .get(name)
            .map(|app| app.value().clone())
            .ok_or_else(|| Error::UnknownApplication(name.to_string()))
    }

    /// Tear an application down
    ///
    /// Unsets current if it pointed at the removed instance.
    pub fn remove(&self, name: &str) -> Option<Arc<Application>> {
        let (_, app) = self.instances.remove(name)?;

        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        if current.as_ref().is_some_and(|c| Arc::ptr_eq(c, &app)) {
            *current = None;
        }
        info!("Application {} removed", name);
        Some(app)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.instances.iter().map(|a| a.key().clone()).collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(name: &str) -> Arc<Application> {
        Application::builder(name).build().unwrap()
    }

    #[test]
    fn test_sentinel_maps_to_current() {
        assert_eq!(AppTarget::from("current_app"), AppTarget::Current);
        assert_eq!(
            AppTarget::from("acct-1"),
            AppTarget::Named("acct-1".to_string())
        );
        assert_eq!(AppTarget::from(CURRENT_APP.to_string()), AppTarget::Current);
    }

    #[test]
    fn test_first_registration_becomes_current() {
        let registry = AppRegistry::new();
        assert!(matches!(
            registry.resolve(CURRENT_APP),
            Err(Error::NoCurrentContext)
        ));

        let first = app("first");
        registry.register(first.clone()).unwrap();
        registry.register(app("second")).unwrap();

        assert_eq!(registry.current_name().as_deref(), Some("first"));
        assert!(Arc::ptr_eq(&registry.resolve(CURRENT_APP).unwrap(), &first));
        assert_eq!(registry.names(), vec!["first", "second"]);
    }

    #[test]
    fn test_current_is_stable_until_switched() {
        let registry = AppRegistry::new();
        registry.register(app("a")).unwrap();
        registry.register(app("b")).unwrap();

        let one = registry.resolve(AppTarget::Current).unwrap();
        let two = registry.resolve(AppTarget::Current).unwrap();
        assert!(Arc::ptr_eq(&one, &two));

        registry.set_current("b").unwrap();
        assert_eq!(registry.resolve(CURRENT_APP).unwrap().name(), "b");
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let registry = AppRegistry::new();
        let original = app("dup");
        registry.register(original.clone()).unwrap();

        assert!(matches!(
            registry.register(app("dup")),
            Err(Error::DuplicateName(name)) if name == "dup"
        ));
        assert!(Arc::ptr_eq(&registry.resolve("dup").unwrap(), &original));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unknown_application() {
        let registry = AppRegistry::new();
        registry.register(app("known")).unwrap();

        assert!(matches!(
            registry.resolve("unknown"),
            Err(Error::UnknownApplication(name)) if name == "unknown"
        ));
        assert!(matches!(
            registry.set_current("unknown"),
            Err(Error::UnknownApplication(_))
        ));
    }

    #[test]
    fn test_remove_clears_current() {
        let registry = AppRegistry::new();
        registry.register(app("a")).unwrap();
        registry.register(app("b")).unwrap();

        // Removing a non-current app leaves current alone
        assert!(registry.remove("b").is_some());
        assert_eq!(registry.current_name().as_deref(), Some("a"));

        assert!(registry.remove("a").is_some());
        assert_eq!(registry.current_name(), None);
        assert!(registry.is_empty());
        assert!(registry.remove("a").is_none());
    }
}
