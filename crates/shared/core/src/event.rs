//! Typed events delivered to extensions
//!
//! An `Event` pairs an `EventKind` with the payload of that kind. The pair
//! is only constructible through checked constructors, so a delivered event
//! never carries a payload of another kind.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::entities::{
    AccountData, BarData, ContractData, OrderData, PositionData, SharedData, TickData, TradeData,
};
use crate::error::{CoreError, CoreResult};
use crate::values::Timestamp;

/// Closed set of event kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Tick,
    Bar,
    Order,
    Trade,
    Position,
    Account,
    Contract,
    Shared,
}

impl EventKind {
    pub const COUNT: usize = 8;

    /// Every kind, in `index()` order
    pub const ALL: [EventKind; Self::COUNT] = [
        EventKind::Tick,
        EventKind::Bar,
        EventKind::Order,
        EventKind::Trade,
        EventKind::Position,
        EventKind::Account,
        EventKind::Contract,
        EventKind::Shared,
    ];

    /// Dense index in `0..COUNT`
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Topic name used on the event bus
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tick => "tick",
            Self::Bar => "bar",
            Self::Order => "order",
            Self::Trade => "trade",
            Self::Position => "position",
            Self::Account => "account",
            Self::Contract => "contract",
            Self::Shared => "shared",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| CoreError::UnhandledEventKind(s.to_string()))
    }
}

/// Payload of an event, one variant per kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventData {
    Tick(TickData),
    Bar(BarData),
    Order(OrderData),
    Trade(TradeData),
    Position(PositionData),
    Account(AccountData),
    Contract(ContractData),
    Shared(SharedData),
}

impl EventData {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Tick(_) => EventKind::Tick,
            Self::Bar(_) => EventKind::Bar,
            Self::Order(_) => EventKind::Order,
            Self::Trade(_) => EventKind::Trade,
            Self::Position(_) => EventKind::Position,
            Self::Account(_) => EventKind::Account,
            Self::Contract(_) => EventKind::Contract,
            Self::Shared(_) => EventKind::Shared,
        }
    }

    /// Exchange time carried by the payload, if it has one
    pub fn timestamp(&self) -> Option<Timestamp> {
        match self {
            Self::Tick(t) => Some(t.datetime),
            Self::Bar(b) => Some(b.datetime),
            Self::Order(o) => Some(o.time),
            Self::Trade(t) => Some(t.time),
            Self::Shared(s) => Some(s.datetime),
            Self::Position(_) | Self::Account(_) | Self::Contract(_) => None,
        }
    }
}

macro_rules! impl_from_payload {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for EventData {
                fn from(data: $ty) -> Self {
                    EventData::$variant(data)
                }
            }
        )*
    };
}

impl_from_payload! {
    Tick => TickData,
    Bar => BarData,
    Order => OrderData,
    Trade => TradeData,
    Position => PositionData,
    Account => AccountData,
    Contract => ContractData,
    Shared => SharedData,
}

/// Event delivered to extensions
///
/// Serialized as its payload alone; the kind is re-derived on the way in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "EventData", into = "EventData")]
pub struct Event {
    kind: EventKind,
    data: EventData,
}

impl Event {
    /// Wrap a payload; the kind is derived from it
    pub fn new(data: impl Into<EventData>) -> Self {
        let data = data.into();
        Self {
            kind: data.kind(),
            data,
        }
    }

    /// Pair an explicit kind with a payload, rejecting mismatches
    pub fn from_parts(kind: EventKind, data: EventData) -> CoreResult<Self> {
        if data.kind() != kind {
            return Err(CoreError::PayloadMismatch {
                kind,
                payload: data.kind(),
            });
        }
        Ok(Self { kind, data })
    }

    /// Build an event from a bus topic name (`"tick"`, `"order"`, ...)
    pub fn from_topic(topic: &str, data: EventData) -> CoreResult<Self> {
        let kind = topic.parse::<EventKind>()?;
        Self::from_parts(kind, data)
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn data(&self) -> &EventData {
        &self.data
    }

    pub fn into_data(self) -> EventData {
        self.data
    }
}

impl From<EventData> for Event {
    fn from(data: EventData) -> Self {
        Event::new(data)
    }
}

impl From<Event> for EventData {
    fn from(event: Event) -> Self {
        event.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Exchange;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn tick() -> TickData {
        let time = NaiveDate::from_ymd_opt(2020, 7, 1)
            .unwrap()
            .and_hms_opt(21, 5, 0)
            .unwrap();
        TickData::new("rb2010", Exchange::Shfe, time, dec!(3500))
    }

    #[test]
    fn test_kind_indices_are_dense() {
        for (i, kind) in EventKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn test_topic_names_parse_back() {
        for kind in EventKind::ALL {
            assert_eq!(kind.as_str().parse::<EventKind>().unwrap(), kind);
        }
        assert_eq!(
            "quote".parse::<EventKind>().unwrap_err(),
            CoreError::UnhandledEventKind("quote".to_string())
        );
    }

    #[test]
    fn test_new_derives_kind() {
        let event = Event::new(tick());
        assert_eq!(event.kind(), EventKind::Tick);
        assert!(event.data().timestamp().is_some());
    }

    #[test]
    fn test_from_parts_rejects_mismatch() {
        let err = Event::from_parts(EventKind::Bar, tick().into()).unwrap_err();
        assert_eq!(
            err,
            CoreError::PayloadMismatch {
                kind: EventKind::Bar,
                payload: EventKind::Tick
            }
        );
    }

    #[test]
    fn test_from_topic() {
        let event = Event::from_topic("tick", tick().into()).unwrap();
        assert_eq!(event.kind(), EventKind::Tick);

        assert!(matches!(
            Event::from_topic("eTick", tick().into()),
            Err(CoreError::UnhandledEventKind(_))
        ));
    }
}
