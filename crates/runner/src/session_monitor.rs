//! Session monitor extension
//!
//! Logs every event it sees. Market data stamped outside the trading
//! session is counted and reported, never dropped silently.

use hive_app::{Extension, ExtensionBase, Result, register_extension};
use hive_core::{
    AccountData, BarData, ContractData, OrderData, PositionData, SharedData, TickData, TradeData,
    is_in_session,
};
use log::{debug, info, warn};
use std::sync::atomic::{AtomicU64, Ordering};

pub struct SessionMonitor {
    base: ExtensionBase,
    in_session: AtomicU64,
    off_session: AtomicU64,
}

impl SessionMonitor {
    pub fn new(name: &str) -> Self {
        Self {
            base: ExtensionBase::new(name),
            in_session: AtomicU64::new(0),
            off_session: AtomicU64::new(0),
        }
    }

    /// Market data events stamped inside the session window
    pub fn in_session(&self) -> u64 {
        self.in_session.load(Ordering::Relaxed)
    }

    /// Market data events stamped outside the session window
    pub fn off_session(&self) -> u64 {
        self.off_session.load(Ordering::Relaxed)
    }

    fn count(&self, what: &str, local_symbol: &str, time: chrono::NaiveTime) {
        if is_in_session(time) {
            self.in_session.fetch_add(1, Ordering::Relaxed);
        } else {
            self.off_session.fetch_add(1, Ordering::Relaxed);
            warn!(
                "[{}] {} for {} at {} is outside the trading session",
                self.name(),
                what,
                local_symbol,
                time
            );
        }
    }
}

impl Extension for SessionMonitor {
    fn base(&self) -> &ExtensionBase {
        &self.base
    }

    fn on_tick(&self, tick: &TickData) -> Result<()> {
        self.count("tick", &tick.local_symbol(), tick.datetime.time());
        debug!("[{}] tick {} {}", self.name(), tick.local_symbol(), tick.last_price);
        Ok(())
    }

    fn on_bar(&self, bar: &BarData) -> Result<()> {
        self.count("bar", &bar.local_symbol(), bar.datetime.time());
        debug!("[{}] bar {} close {}", self.name(), bar.local_symbol(), bar.close);
        Ok(())
    }

    fn on_order(&self, order: &OrderData) -> Result<()> {
        info!(
            "[{}] order {} {} {:?} traded {}/{}",
            self.name(),
            order.order_id,
            order.local_symbol(),
            order.status,
            order.traded,
            order.volume
        );
        Ok(())
    }

    fn on_trade(&self, trade: &TradeData) -> Result<()> {
        info!(
            "[{}] trade {} {} {} @ {}",
            self.name(),
            trade.local_symbol(),
            trade.direction,
            trade.volume,
            trade.price
        );
        Ok(())
    }

    fn on_position(&self, position: &PositionData) -> Result<()> {
        info!(
            "[{}] position {} {} {}",
            self.name(),
            position.local_symbol(),
            position.direction,
            position.volume
        );
        Ok(())
    }

    fn on_account(&self, account: &AccountData) -> Result<()> {
        info!(
            "[{}] account {} balance {} available {}",
            self.name(),
            account.account_id,
            account.balance,
            account.available()
        );
        Ok(())
    }

    fn on_contract(&self, contract: &ContractData) -> Result<()> {
        debug!("[{}] contract {}", self.name(), contract.local_symbol());
        Ok(())
    }

    fn on_shared(&self, shared: &SharedData) -> Result<()> {
        debug!(
            "[{}] shared {} ({} values)",
            self.name(),
            shared.local_symbol,
            shared.values.len()
        );
        Ok(())
    }
}

register_extension!(SessionMonitor);
