//! Bookable half-hour time slots for a calendar day.
//!
//! The generator is pure: `now` is an explicit argument so behavior is
//! reproducible in tests without touching the system clock.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::DomainError;

pub const SLOT_MINUTES: u32 = 30;

/// One bookable slot: `value` is the machine token (`"9:30"`, 24h, hour not
/// zero-padded) and `label` the 12-hour display string (`"9:30 AM"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct TimeSlot {
    pub value: String,
    pub label: String,
}

/// Daily booking window in whole hours. Slots run from `opens_at:00` up to
/// and including `closes_at:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessWindow {
    opens_at: u32,
    closes_at: u32,
}

impl BusinessWindow {
    pub fn new(opens_at: u32, closes_at: u32) -> Result<Self, DomainError> {
        if opens_at > 23 || closes_at > 23 {
            return Err(DomainError::ValidationError(format!(
                "business hours {opens_at}..{closes_at} are outside 0..23"
            )));
        }
        if closes_at <= opens_at {
            return Err(DomainError::ValidationError(format!(
                "closing hour {closes_at} must be after opening hour {opens_at}"
            )));
        }
        Ok(Self { opens_at, closes_at })
    }

    pub fn opens_at(&self) -> u32 {
        self.opens_at
    }

    pub fn closes_at(&self) -> u32 {
        self.closes_at
    }
}

/// The 8:00-18:00 reference window used when no garage is selected.
impl Default for BusinessWindow {
    fn default() -> Self {
        Self {
            opens_at: 8,
            closes_at: 18,
        }
    }
}

/// All bookable slots on `selected`, spaced every [`SLOT_MINUTES`] minutes.
///
/// A future day starts at the opening hour. The current day starts at `now`
/// rounded up to the next slot boundary (never earlier than opening). A past
/// day, or a same-day query after the last slot, yields an empty list and the
/// caller prompts for a different date. The 30-day booking horizon is the
/// caller's concern, not enforced here.
pub fn available_slots(
    selected: NaiveDate,
    now: NaiveDateTime,
    window: BusinessWindow,
) -> Vec<TimeSlot> {
    let today = now.date();
    if selected < today {
        return Vec::new();
    }

    let mut start = window.opens_at * 60;
    if selected == today {
        let (hour, minute) = round_up_to_slot(now.hour(), now.minute());
        start = start.max(hour * 60 + minute);
    }

    let end = window.closes_at * 60;
    let mut slots = Vec::new();
    let mut at = start;
    while at <= end {
        slots.push(TimeSlot {
            value: slot_token(at / 60, at % 60),
            label: display_label(at / 60, at % 60),
        });
        at += SLOT_MINUTES;
    }
    slots
}

/// Rounds a clock time up to the next slot boundary. A minute of exactly
/// zero is already on a boundary and stays put.
fn round_up_to_slot(hour: u32, minute: u32) -> (u32, u32) {
    if minute == 0 {
        (hour, 0)
    } else if minute <= SLOT_MINUTES {
        (hour, SLOT_MINUTES)
    } else {
        (hour + 1, 0)
    }
}

fn slot_token(hour: u32, minute: u32) -> String {
    format!("{hour}:{minute:02}")
}

fn display_label(hour: u32, minute: u32) -> String {
    let meridiem = if hour >= 12 { "PM" } else { "AM" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{display_hour}:{minute:02} {meridiem}")
}

/// Parses a slot token back into `(hour, minute)`. The token grammar is the
/// exact output of the generator: 24h hour, zero-padded minutes on a slot
/// boundary.
pub fn parse_slot_token(token: &str) -> Result<(u32, u32), DomainError> {
    let invalid = || DomainError::ValidationError(format!("invalid time slot token: {token}"));

    let (hour_part, minute_part) = token.split_once(':').ok_or_else(invalid)?;
    let hour: u32 = hour_part.parse().map_err(|_| invalid())?;
    let minute: u32 = minute_part.parse().map_err(|_| invalid())?;

    if minute_part.len() != 2 || hour > 23 || minute > 59 || minute % SLOT_MINUTES != 0 {
        return Err(invalid());
    }
    Ok((hour, minute))
}
