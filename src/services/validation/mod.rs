//! Validation pipeline.
//!
//! Ordered predicates gating every committed mutation. Each validator sees
//! the candidate event and a context holding the current event set with the
//! edited event excluded; the pipeline short-circuits on the first failure.

use chrono::{DateTime, Local};

use crate::models::config::{CalendarConfig, ValidatorFn};
use crate::models::event::{CalendarEvent, EventId};

/// Context handed to validators and the read-only policy.
pub struct ValidationContext<'a> {
    /// Current event set. During candidate validation the event being
    /// edited is excluded, so validators never compare a candidate with
    /// its own previous version.
    pub events: &'a [CalendarEvent],
    /// The wall-clock instant the check runs at.
    pub now: DateTime<Local>,
}

impl<'a> ValidationContext<'a> {
    pub fn new(events: &'a [CalendarEvent]) -> Self {
        Self {
            events,
            now: Local::now(),
        }
    }

    pub fn at(events: &'a [CalendarEvent], now: DateTime<Local>) -> Self {
        Self { events, now }
    }
}

/// Run the configured pipeline against an edit candidate.
///
/// `events` is the full current set; the candidate's own id is filtered out
/// before validators see it. Returns `true` when every validator accepts.
pub fn validate_candidate(
    config: &CalendarConfig,
    candidate: &CalendarEvent,
    events: &[CalendarEvent],
) -> bool {
    validate_candidate_at(config, candidate, events, Local::now())
}

/// Same as [`validate_candidate`] with an explicit `now`, so policies like
/// no-editing-into-the-past stay deterministic under test.
pub fn validate_candidate_at(
    config: &CalendarConfig,
    candidate: &CalendarEvent,
    events: &[CalendarEvent],
    now: DateTime<Local>,
) -> bool {
    let others = exclude_event(events, candidate.id);
    let ctx = ValidationContext::at(&others, now);

    for (index, validator) in config.validators.iter().enumerate() {
        if !validator(candidate, &ctx) {
            log::debug!(
                "validator {} rejected candidate {} ({} - {})",
                index,
                candidate.id,
                candidate.from,
                candidate.to
            );
            return false;
        }
    }
    true
}

/// Evaluate the read-only policy for an event against the current set.
pub fn is_read_only(config: &CalendarConfig, event: &CalendarEvent, events: &[CalendarEvent]) -> bool {
    let ctx = ValidationContext::new(events);
    (config.read_only)(event, &ctx)
}

fn exclude_event(events: &[CalendarEvent], id: EventId) -> Vec<CalendarEvent> {
    events.iter().filter(|e| e.id != id).cloned().collect()
}

/// Validator: the candidate's `[from, to)` interval must not intersect any
/// other event's. Boundary touching is allowed.
pub fn no_overlap() -> ValidatorFn {
    Box::new(|candidate, ctx| {
        ctx.events
            .iter()
            .all(|other| candidate.to <= other.from || candidate.from >= other.to)
    })
}

/// Validator: the candidate must start in the future.
pub fn not_in_past() -> ValidatorFn {
    Box::new(|candidate, ctx| candidate.from > ctx.now)
}
