//! Application layer errors

use hive_core::{CoreError, EventKind};
use hive_ports::GatewayError;
use thiserror::Error;

use crate::capability::Capability;
use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Application already registered: {0}")]
    DuplicateName(String),

    #[error("Unknown application: {0}")]
    UnknownApplication(String),

    #[error("No current application")]
    NoCurrentContext,

    #[error("{0} is disabled")]
    CapabilityDisabled(Capability),

    #[error("Extension {extension} does not implement on_{kind}")]
    NotImplemented { extension: String, kind: EventKind },

    #[error("Unknown extension: {0}")]
    UnknownExtension(String),

    #[error("{0} is enabled but no collaborator was provided")]
    MissingCollaborator(Capability),

    #[error("Unknown query kind: {0:?}")]
    UnknownQuery(String),

    #[error("Extension {extension} failed: {reason}")]
    Handler { extension: String, reason: String },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl Error {
    /// Failure raised by an extension's own handler logic
    pub fn handler(extension: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Handler {
            extension: extension.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
