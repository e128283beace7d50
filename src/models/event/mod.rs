// Event module
// Domain calendar event owned by the external event store

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque, unique event identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(Uuid);

impl EventId {
    /// Generate a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A time-bound calendar event.
///
/// Instances are supplied by the external store and mutated only by
/// replacement, never in place. Invariant: `from < to`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: EventId,
    pub owner_id: String,
    pub name: String,
    pub from: DateTime<Local>,
    pub to: DateTime<Local>,
}

impl CalendarEvent {
    /// Create a new event with required fields.
    ///
    /// # Arguments
    /// * `owner_id` - Identifier of the owning user
    /// * `name` - Event name (required, non-empty)
    /// * `from` - Event start time
    /// * `to` - Event end time
    ///
    /// # Returns
    /// Returns `Result<CalendarEvent, String>` with validation
    ///
    /// # Examples
    /// ```
    /// use booking_grid::models::event::CalendarEvent;
    /// use chrono::Local;
    ///
    /// let from = Local::now();
    /// let to = from + chrono::Duration::hours(1);
    /// let event = CalendarEvent::new("user-1", "Team Meeting", from, to).unwrap();
    /// ```
    pub fn new(
        owner_id: impl Into<String>,
        name: impl Into<String>,
        from: DateTime<Local>,
        to: DateTime<Local>,
    ) -> Result<Self, String> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err("Event name cannot be empty".to_string());
        }

        if to <= from {
            return Err("Event end time must be after start time".to_string());
        }

        Ok(Self {
            id: EventId::new(),
            owner_id: owner_id.into(),
            name,
            from,
            to,
        })
    }

    /// Propose a replacement of this event with new start and end times.
    /// The identity and ownership are preserved.
    pub fn with_times(
        &self,
        from: DateTime<Local>,
        to: DateTime<Local>,
    ) -> Result<Self, String> {
        if to <= from {
            return Err("Event end time must be after start time".to_string());
        }
        Ok(Self {
            from,
            to,
            ..self.clone()
        })
    }

    /// Get the duration of the event.
    pub fn duration(&self) -> chrono::Duration {
        self.to - self.from
    }

    /// Event duration in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        self.duration().num_minutes()
    }
}
