//! Event kind → handler routing, one table per extension type

use hive_core::{CoreError, Event, EventData, EventKind};
use log::debug;

use super::Extension;
use crate::error::Result;

/// Handler entry: routes a payload to one `on_*` method of `E`
pub type Handler<E> = fn(&E, &EventData) -> Result<()>;

/// Immutable mapping from every `EventKind` to a handler of `E`
///
/// Indexed by `EventKind::index()`, so lookup is a bounds-free array read
/// and every kind of the closed enumeration has exactly one entry.
pub struct DispatchTable<E> {
    handlers: [Handler<E>; EventKind::COUNT],
}

impl<E: Extension> DispatchTable<E> {
    /// Build the table binding each kind to `E`'s `on_*` method
    pub fn build() -> Self {
        // Same order as EventKind::ALL
        let handlers: [Handler<E>; EventKind::COUNT] = [
            route_tick::<E>,
            route_bar::<E>,
            route_order::<E>,
            route_trade::<E>,
            route_position::<E>,
            route_account::<E>,
            route_contract::<E>,
            route_shared::<E>,
        ];
        Self { handlers }
    }

    /// Build the table for a type being declared, logging the declaration
    pub fn register(type_name: &str) -> Self {
        debug!("Registering extension type {}", type_name);
        Self::build()
    }

    pub fn handler(&self, kind: EventKind) -> Handler<E> {
        self.handlers[kind.index()]
    }

    /// Whether both tables bind every kind to the same function
    pub fn same_bindings(&self, other: &Self) -> bool {
        self.handlers
            .iter()
            .zip(other.handlers.iter())
            .all(|(a, b)| std::ptr::fn_addr_eq(*a, *b))
    }

    /// Invoke the handler for `event`'s kind with its payload
    pub fn dispatch(&self, extension: &E, event: &Event) -> Result<()> {
        (self.handler(event.kind()))(extension, event.data())
    }
}

macro_rules! route {
    ($fn_name:ident, $variant:ident, $method:ident) => {
        fn $fn_name<E: Extension>(extension: &E, data: &EventData) -> Result<()> {
            match data {
                EventData::$variant(payload) => extension.$method(payload),
                other => Err(CoreError::PayloadMismatch {
                    kind: EventKind::$variant,
                    payload: other.kind(),
                }
                .into()),
            }
        }
    };
}

route!(route_tick, Tick, on_tick);
route!(route_bar, Bar, on_bar);
route!(route_order, Order, on_order);
route!(route_trade, Trade, on_trade);
route!(route_position, Position, on_position);
route!(route_account, Account, on_account);
route!(route_contract, Contract, on_contract);
route!(route_shared, Shared, on_shared);
