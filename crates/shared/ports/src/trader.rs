use hive_core::{CancelRequest, OrderRequest};

use crate::error::GatewayResult;

/// Port for the trading interface
///
/// All calls are synchronous request/response. Query results arrive later
/// as events (position, account), not as return values.
pub trait Trader: Send + Sync {
    /// Submit an order, returning the interface-assigned order ID
    fn send_order(&self, request: &OrderRequest) -> GatewayResult<String>;

    /// Cancel a working order
    fn cancel_order(&self, request: &CancelRequest) -> GatewayResult<()>;

    /// Ask for a position snapshot
    fn query_position(&self) -> GatewayResult<()>;

    /// Ask for an account snapshot
    fn query_account(&self) -> GatewayResult<()>;

    /// Interface name for logging
    fn name(&self) -> &str {
        "Trader"
    }
}
