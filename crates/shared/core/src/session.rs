//! Trading session windows for domestic futures
//!
//! Day session: 09:00 through 15:00 inclusive.
//! Night session wraps midnight: from 21:00, until 02:30 inclusive.

use chrono::NaiveTime;

use crate::error::{CoreError, CoreResult};
use crate::event::EventData;

/// Session boundaries
pub struct SessionWindow;

impl SessionWindow {
    pub const DAY_START: NaiveTime = hm(9, 0);
    pub const DAY_END: NaiveTime = hm(15, 0);
    pub const NIGHT_START: NaiveTime = hm(21, 0);
    pub const NIGHT_END: NaiveTime = hm(2, 30);

    /// Check that a payload's exchange time falls inside a session
    ///
    /// Only timestamped payloads (tick, bar, order, trade, shared) can be
    /// checked; the others fail with `TypeMismatch`.
    pub fn validate(data: &EventData) -> CoreResult<bool> {
        let timestamp = data.timestamp().ok_or(CoreError::TypeMismatch {
            expected: "timestamped payload",
            found: data.kind().as_str(),
        })?;
        Ok(is_in_session(timestamp.time()))
    }
}

const fn hm(hour: u32, min: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(hour, min, 0) {
        Some(t) => t,
        None => panic!("invalid session boundary"),
    }
}

/// Returns true if `t` falls in the day or the night session
pub fn is_in_session(t: NaiveTime) -> bool {
    let day = t >= SessionWindow::DAY_START && t <= SessionWindow::DAY_END;
    let night = t >= SessionWindow::NIGHT_START || t <= SessionWindow::NIGHT_END;
    day || night
}
