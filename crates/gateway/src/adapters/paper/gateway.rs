//! In-process trading and market interface
//!
//! Accepts orders, cancels and queries through the `Trader` / `Market`
//! ports and answers with events on a `ChannelPublisher<Event>`:
//! - `send_order` → `OrderData` (Submitting, then NotTraded)
//! - `cancel_order` → `OrderData` (Cancelled)
//! - `query_account` → `AccountData`
//! - `query_position` → one `PositionData` per tracked position
//! - `fill` → `TradeData` plus the updated `OrderData`

use chrono::{Local, NaiveDateTime};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use hive_core::{
    AccountData, CancelRequest, Direction, Event, OrderData, OrderRequest, PositionData, Status,
    TradeData,
};
use hive_ports::{GatewayError, GatewayResult, Market, Trader};
use log::{debug, info, trace};
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicBool, Ordering};
use uuid::Uuid;

use crate::transport::channel::ChannelPublisher;

/// Paper account settings
#[derive(Debug, Clone)]
pub struct PaperConfig {
    pub account_id: String,
    pub initial_balance: Decimal,
}

impl Default for PaperConfig {
    fn default() -> Self {
        Self {
            account_id: "paper".to_string(),
            initial_balance: Decimal::from(1_000_000),
        }
    }
}

/// Paper trading interface
pub struct PaperGateway {
    config: PaperConfig,
    publisher: ChannelPublisher<Event>,
    connected: AtomicBool,
    /// Orders by interface-assigned ID
    orders: DashMap<String, OrderData>,
    /// Positions by (local symbol, direction)
    positions: DashMap<(String, Direction), PositionData>,
    subscriptions: DashMap<String, NaiveDateTime>,
}

impl PaperGateway {
    /// Create a connected paper interface publishing on `publisher`
    pub fn new(config: PaperConfig, publisher: ChannelPublisher<Event>) -> Self {
        info!("Paper gateway ready for account {}", config.account_id);
        Self {
            config,
            publisher,
            connected: AtomicBool::new(true),
            orders: DashMap::new(),
            positions: DashMap::new(),
            subscriptions: DashMap::new(),
        }
    }

    /// Simulate a connection drop or reconnect
    pub fn set_connected(&self, connected: bool) {
        self.connected.store(connected, Ordering::SeqCst);
        info!(
            "Paper gateway {}",
            if connected { "connected" } else { "disconnected" }
        );
    }

    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    /// Snapshot of one order
    pub fn order(&self, order_id: &str) -> Option<OrderData> {
        self.orders.get(order_id).map(|o| o.clone())
    }

    /// Snapshot of every order seen so far
    pub fn orders(&self) -> Vec<OrderData> {
        self.orders.iter().map(|o| o.value().clone()).collect()
    }

    /// Symbols subscribed so far
    pub fn subscriptions(&self) -> Vec<String> {
        let mut symbols: Vec<String> = self.subscriptions.iter().map(|s| s.key().clone()).collect();
        symbols.sort();
        symbols
    }

    /// Seed or overwrite a position
    pub fn set_position(&self, position: PositionData) {
        self.positions
            .insert((position.local_symbol(), position.direction), position);
    }

    /// Fill part or all of a working order at `price`
    pub fn fill(&self, order_id: &str, volume: Decimal, price: Decimal) -> GatewayResult<TradeData> {
        self.ensure_connected()?;

        let mut order = self
            .orders
            .get_mut(order_id)
            .ok_or_else(|| GatewayError::UnknownOrder(order_id.to_string()))?;
        if !order.is_active() {
            return Err(GatewayError::Rejected(format!(
                "order {} is {:?}",
                order_id, order.status
            )));
        }
        if volume <= Decimal::ZERO || volume > order.remaining() {
            return Err(GatewayError::Rejected(format!(
                "fill volume {} outside (0, {}]",
                volume,
                order.remaining()
            )));
        }

        let trade = TradeData {
            symbol: order.symbol.clone(),
            exchange: order.exchange,
            order_id: order.order_id.clone(),
            trade_id: Uuid::new_v4().simple().to_string(),
            direction: order.direction,
            offset: order.offset,
            price,
            volume,
            time: now(),
        };
        // Position first: a rejected fill leaves the order untouched
        self.apply_trade(&trade)?;

        order.traded += volume;
        order.status = if order.remaining().is_zero() {
            Status::AllTraded
        } else {
            Status::PartTraded
        };
        order.time = trade.time;
        let order_snapshot = order.clone();
        drop(order);

        self.publish(Event::new(trade.clone()));
        self.publish(Event::new(order_snapshot));
        Ok(trade)
    }

    fn apply_trade(&self, trade: &TradeData) -> GatewayResult<()> {
        // Opening adds to the traded direction, closing reduces the opposite one
        let direction = if trade.offset.is_close() {
            trade.direction.opposite()
        } else {
            trade.direction
        };

        match self.positions.entry((trade.local_symbol(), direction)) {
            Entry::Occupied(mut held) => {
                let updated = accumulate(held.get(), trade)?;
                held.insert(updated);
            }
            Entry::Vacant(slot) => {
                let flat = PositionData::new(&trade.symbol, trade.exchange, direction);
                slot.insert(accumulate(&flat, trade)?);
            }
        }
        Ok(())
    }

    fn ensure_connected(&self) -> GatewayResult<()> {
        if self.is_connected() {
            Ok(())
        } else {
            Err(GatewayError::NotConnected)
        }
    }

    fn publish(&self, event: Event) {
        let kind = event.kind();
        if self.publisher.send(event).is_err() {
            trace!("No subscribers for {} event", kind);
        }
    }
}

impl Trader for PaperGateway {
    fn send_order(&self, request: &OrderRequest) -> GatewayResult<String> {
        self.ensure_connected()?;
        if request.volume <= Decimal::ZERO {
            return Err(GatewayError::Rejected(format!(
                "volume must be positive, got {}",
                request.volume
            )));
        }
        if notional(request.price, request.volume).is_none() {
            return Err(GatewayError::Rejected(format!(
                "notional of {} @ {} overflows",
                request.volume, request.price
            )));
        }

        let order_id = Uuid::new_v4().simple().to_string();
        let mut order = request.to_order_data(&order_id, now());
        debug!(
            "Order {} accepted: {} {} {} @ {}",
            order_id,
            request.local_symbol(),
            request.direction,
            request.volume,
            request.price
        );

        self.publish(Event::new(order.clone()));
        order.status = Status::NotTraded;
        self.orders.insert(order_id.clone(), order.clone());
        self.publish(Event::new(order));

        Ok(order_id)
    }

    fn cancel_order(&self, request: &CancelRequest) -> GatewayResult<()> {
        self.ensure_connected()?;

        let mut order = self
            .orders
            .get_mut(&request.order_id)
            .ok_or_else(|| GatewayError::UnknownOrder(request.order_id.clone()))?;
        if !order.is_active() {
            return Err(GatewayError::Rejected(format!(
                "order {} is {:?}",
                request.order_id, order.status
            )));
        }

        order.status = Status::Cancelled;
        order.time = now();
        let snapshot = order.clone();
        drop(order);

        debug!("Order {} cancelled", request.order_id);
        self.publish(Event::new(snapshot));
        Ok(())
    }

    fn query_position(&self) -> GatewayResult<()> {
        self.ensure_connected()?;
        let positions: Vec<PositionData> =
            self.positions.iter().map(|p| p.value().clone()).collect();
        for position in positions {
            self.publish(Event::new(position));
        }
        Ok(())
    }

    fn query_account(&self) -> GatewayResult<()> {
        self.ensure_connected()?;
        let frozen = self
            .orders
            .iter()
            .filter(|o| o.is_active())
            .try_fold(Decimal::ZERO, |total, o| {
                notional(o.price, o.remaining()).and_then(|n| total.checked_add(n))
            })
            .ok_or_else(|| GatewayError::Rejected("frozen funds overflow".to_string()))?;
        let mut account = AccountData::new(&self.config.account_id, self.config.initial_balance);
        account.frozen = frozen;
        self.publish(Event::new(account));
        Ok(())
    }

    fn name(&self) -> &str {
        "paper"
    }
}

impl Market for PaperGateway {
    fn subscribe(&self, symbol: &str) -> GatewayResult<()> {
        self.ensure_connected()?;
        self.subscriptions.insert(symbol.to_string(), now());
        debug!("Subscribed to {}", symbol);
        Ok(())
    }

    fn name(&self) -> &str {
        "paper"
    }
}

/// Position after `trade`, with an average open price over the whole holding
fn accumulate(position: &PositionData, trade: &TradeData) -> GatewayResult<PositionData> {
    let mut next = position.clone();
    if trade.offset.is_close() {
        next.volume = (position.volume - trade.volume).max(Decimal::ZERO);
        return Ok(next);
    }

    let volume = position.volume.checked_add(trade.volume);
    let cost = position
        .price
        .checked_mul(position.volume)
        .zip(trade.notional())
        .and_then(|(held, added)| held.checked_add(added));
    let averaged = cost
        .zip(volume)
        .and_then(|(cost, volume)| Some((cost.checked_div(volume)?, volume)));
    let (price, volume) = averaged.ok_or_else(|| {
        GatewayError::Rejected(format!(
            "position in {} overflows at {} @ {}",
            trade.local_symbol(),
            trade.volume,
            trade.price
        ))
    })?;

    next.price = price;
    next.volume = volume;
    Ok(next)
}

fn notional(price: Decimal, volume: Decimal) -> Option<Decimal> {
    price.checked_mul(volume)
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
