//! Two-state appointment booking flow.
//!
//! Collecting (initial) -> Confirmed (terminal). Confirmation succeeds only
//! when both the date and time fields are non-empty; otherwise nothing
//! happens - no error is surfaced. Once confirmed, the state is terminal
//! for the session: there is no edit or cancel path.

use serde::Serialize;

/// Booking form state for one session.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct BookingState {
    pub date: String,
    pub time: String,
    pub confirmed: bool,
}

impl BookingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the requested date. Ignored once confirmed.
    pub fn set_date(&mut self, date: impl Into<String>) {
        if !self.confirmed {
            self.date = date.into();
        }
    }

    /// Update the requested time. Ignored once confirmed.
    pub fn set_time(&mut self, time: impl Into<String>) {
        if !self.confirmed {
            self.time = time.into();
        }
    }

    /// Attempt to confirm the booking.
    ///
    /// Returns `true` only on the transition into the confirmed state;
    /// an incomplete form or an already-confirmed booking returns `false`
    /// and leaves the state as it was.
    pub fn confirm(&mut self) -> bool {
        if self.confirmed || self.date.is_empty() || self.time.is_empty() {
            return false;
        }
        self.confirmed = true;
        true
    }
}
