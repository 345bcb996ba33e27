use crate::error::GatewayResult;

/// Port for the market data interface
pub trait Market: Send + Sync {
    /// Subscribe to ticks for an instrument
    fn subscribe(&self, symbol: &str) -> GatewayResult<()>;

    /// Interface name for logging
    fn name(&self) -> &str {
        "Market"
    }
}
