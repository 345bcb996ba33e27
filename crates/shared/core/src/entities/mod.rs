mod account;
mod bar;
mod contract;
mod direction;
mod exchange;
mod offset;
mod order;
mod order_type;
mod position;
mod shared;
mod status;
mod tick;
mod trade;

pub use account::AccountData;
pub use bar::BarData;
pub use contract::ContractData;
pub use direction::Direction;
pub use exchange::Exchange;
pub use offset::Offset;
pub use order::OrderData;
pub use order_type::OrderType;
pub use position::PositionData;
pub use shared::SharedData;
pub use status::Status;
pub use tick::TickData;
pub use trade::TradeData;
