//! Trading facade
//!
//! Every call resolves its target application, checks the capability the
//! call needs, emits its monitoring signal, then forwards to the
//! collaborator. Collaborator results and errors come back unchanged.

use hive_core::{CancelRequest, OrderRequest};
use log::debug;
use std::fmt;
use std::str::FromStr;

use crate::capability::{Capability, CapabilityGate};
use crate::error::{Error, Result};
use crate::registry::{AppRegistry, AppTarget};

/// What `query` asks the trading interface for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Position,
    Account,
}

impl QueryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Position => "position",
            Self::Account => "account",
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueryKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "position" => Ok(Self::Position),
            "account" => Ok(Self::Account),
            _ => Err(Error::UnknownQuery(s.to_string())),
        }
    }
}

/// Send an order, returning the interface-assigned order ID
pub fn send_order(
    registry: &AppRegistry,
    request: &OrderRequest,
    target: impl Into<AppTarget>,
) -> Result<String> {
    let app = registry.resolve(target)?;
    CapabilityGate::require(&app, Capability::Trading)?;
    registry.monitors().send.emit(request);

    debug!(
        "[{}] send {} {} {} {} @ {}",
        app.name(),
        request.local_symbol(),
        request.direction,
        request.offset,
        request.volume,
        request.price
    );
    Ok(app.trader()?.send_order(request)?)
}

/// Cancel a working order
pub fn cancel_order(
    registry: &AppRegistry,
    request: &CancelRequest,
    target: impl Into<AppTarget>,
) -> Result<()> {
    let app = registry.resolve(target)?;
    CapabilityGate::require(&app, Capability::Trading)?;
    registry.monitors().cancel.emit(request);

    debug!("[{}] cancel {}", app.name(), request.order_id);
    Ok(app.trader()?.cancel_order(request)?)
}

/// Subscribe to market data for `symbol`
pub fn subscribe(registry: &AppRegistry, symbol: &str, target: impl Into<AppTarget>) -> Result<()> {
    let app = registry.resolve(target)?;
    CapabilityGate::require(&app, Capability::Market)?;

    debug!("[{}] subscribe {}", app.name(), symbol);
    Ok(app.market()?.subscribe(symbol)?)
}

/// Ask for positions (`"position"`) or funds (`"account"`)
///
/// Results arrive as events. Any other discriminator is `UnknownQuery`.
pub fn query(registry: &AppRegistry, kind: &str, target: impl Into<AppTarget>) -> Result<()> {
    let app = registry.resolve(target)?;
    CapabilityGate::require(&app, Capability::Trading)?;

    let trader = app.trader()?;
    match kind.parse::<QueryKind>()? {
        QueryKind::Position => trader.query_position()?,
        QueryKind::Account => trader.query_account()?,
    }
    Ok(())
}
