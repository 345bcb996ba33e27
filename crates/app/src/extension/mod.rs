//! Extensions - pluggable handlers for typed trading events
//!
//! An extension type overrides the `on_*` handlers it cares about. Every
//! handler it leaves alone fails with `NotImplemented` when an event of that
//! kind reaches it: delivering to a handler nobody wrote is a wiring bug and
//! is reported, never skipped.
//!
//! Each concrete type is declared once with [`register_extension!`], which
//! builds its [`DispatchTable`] the first time it is needed and keeps it in a
//! type-level static shared by every instance and thread.
//!
//! [`register_extension!`]: crate::register_extension

mod dispatch;

pub use dispatch::{DispatchTable, Handler};

use hive_core::{
    AccountData, BarData, ContractData, Event, EventKind, OrderData, PositionData, SharedData,
    TickData, TradeData,
};
use log::debug;
use std::sync::{Arc, PoisonError, RwLock, Weak};

use crate::application::Application;
use crate::error::{Error, Result};

/// Name and owning-application link every extension carries
///
/// The link is weak: the application owns its extensions, not the reverse.
#[derive(Debug)]
pub struct ExtensionBase {
    name: String,
    app: RwLock<Weak<Application>>,
}

impl ExtensionBase {
    /// Create an extension not yet bound to an application
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            app: RwLock::new(Weak::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Owning application, if bound and still alive
    pub fn app(&self) -> Option<Arc<Application>> {
        self.app
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .upgrade()
    }

    fn bind(&self, app: &Arc<Application>) {
        *self.app.write().unwrap_or_else(PoisonError::into_inner) = Arc::downgrade(app);
    }
}

fn not_implemented(extension: &str, kind: EventKind) -> Error {
    Error::NotImplemented {
        extension: extension.to_string(),
        kind,
    }
}

/// Extension trait - implement this for your event handler
///
/// Handlers take `&self` because events may be delivered from several
/// threads at once; keep mutable state behind interior mutability.
pub trait Extension: Send + Sync + 'static {
    fn base(&self) -> &ExtensionBase;

    /// Unique key within the owning application
    fn name(&self) -> &str {
        self.base().name()
    }

    /// Owning application, if bound and still alive
    fn app(&self) -> Option<Arc<Application>> {
        self.base().app()
    }

    fn on_tick(&self, _tick: &TickData) -> Result<()> {
        Err(not_implemented(self.name(), EventKind::Tick))
    }

    fn on_bar(&self, _bar: &BarData) -> Result<()> {
        Err(not_implemented(self.name(), EventKind::Bar))
    }

    fn on_order(&self, _order: &OrderData) -> Result<()> {
        Err(not_implemented(self.name(), EventKind::Order))
    }

    fn on_trade(&self, _trade: &TradeData) -> Result<()> {
        Err(not_implemented(self.name(), EventKind::Trade))
    }

    fn on_position(&self, _position: &PositionData) -> Result<()> {
        Err(not_implemented(self.name(), EventKind::Position))
    }

    fn on_account(&self, _account: &AccountData) -> Result<()> {
        Err(not_implemented(self.name(), EventKind::Account))
    }

    fn on_contract(&self, _contract: &ContractData) -> Result<()> {
        Err(not_implemented(self.name(), EventKind::Contract))
    }

    fn on_shared(&self, _shared: &SharedData) -> Result<()> {
        Err(not_implemented(self.name(), EventKind::Shared))
    }
}

/// A declared extension type with its dispatch table
///
/// Implemented by [`register_extension!`](crate::register_extension); a
/// second declaration of the same type is a conflicting impl.
pub trait ExtensionType: Extension + Sized {
    fn dispatch_table() -> &'static DispatchTable<Self>;
}

/// Type-erased delivery entry point used by applications and dispatchers
pub trait Deliver: Extension {
    /// Route `event` to the matching `on_*` handler
    fn deliver(&self, event: &Event) -> Result<()>;
}

impl<E: ExtensionType> Deliver for E {
    fn deliver(&self, event: &Event) -> Result<()> {
        E::dispatch_table().dispatch(self, event)
    }
}

/// Bind `extension` to `app` and install it under its name
///
/// Replaces any extension already installed under the same name.
pub fn init_app<E: ExtensionType>(extension: &Arc<E>, app: &Arc<Application>) {
    extension.base().bind(app);
    let handle: Arc<dyn Deliver> = extension.clone();
    if app.insert_extension(handle).is_some() {
        debug!(
            "[{}] Extension {} replaced by a newer registration",
            app.name(),
            extension.name()
        );
    }
}

/// Construct-and-install shorthand for [`init_app`]
pub fn attach<E: ExtensionType>(extension: E, app: &Arc<Application>) -> Arc<E> {
    let extension = Arc::new(extension);
    init_app(&extension, app);
    extension
}

/// Declare a concrete extension type
///
/// Implements [`ExtensionType`] for the type, storing its dispatch table in
/// a static built on first use. Works for concrete (non-generic) types.
#[macro_export]
macro_rules! register_extension {
    ($ty:ty) => {
        impl $crate::extension::ExtensionType for $ty {
            fn dispatch_table() -> &'static $crate::extension::DispatchTable<Self> {
                static TABLE: ::std::sync::OnceLock<$crate::extension::DispatchTable<$ty>> =
                    ::std::sync::OnceLock::new();
                TABLE.get_or_init(|| {
                    $crate::extension::DispatchTable::register(::std::stringify!($ty))
                })
            }
        }
    };
}
