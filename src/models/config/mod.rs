// Calendar configuration
// Immutable per calendar session; policy hooks gate editing

use crate::models::event::CalendarEvent;
use crate::services::validation::ValidationContext;

/// Read-only policy hook: `true` means no gesture may start on the event.
pub type ReadOnlyFn = Box<dyn Fn(&CalendarEvent, &ValidationContext<'_>) -> bool>;

/// A single validation predicate run against an edit candidate.
pub type ValidatorFn = Box<dyn Fn(&CalendarEvent, &ValidationContext<'_>) -> bool>;

/// Default cell height in pixels (one hour of grid).
pub const DEFAULT_CELL_HEIGHT: f32 = 48.0;

/// Configuration of a calendar session.
///
/// All options are optional; defaults are `start_hour = 0`, `end_hour = 24`,
/// `cell_height = 48.0`, an always-editable read-only policy, and no
/// validators.
pub struct CalendarConfig {
    /// First visible hour of the day, in `[0, 24)`.
    pub start_hour: u32,
    /// Hour the visible range ends at, in `(start_hour, 24]`.
    pub end_hour: u32,
    /// Pixel height of one hour cell.
    pub cell_height: f32,
    /// Per-event read-only policy, checked before any gesture starts.
    pub read_only: ReadOnlyFn,
    /// Ordered validators run against every edit candidate.
    pub validators: Vec<ValidatorFn>,
}

impl CalendarConfig {
    /// Create a builder for constructing a configuration.
    pub fn builder() -> CalendarConfigBuilder {
        CalendarConfigBuilder::new()
    }

    /// Number of visible hours.
    pub fn visible_hour_count(&self) -> u32 {
        self.end_hour - self.start_hour
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            start_hour: 0,
            end_hour: 24,
            cell_height: DEFAULT_CELL_HEIGHT,
            read_only: Box::new(|_, _| false),
            validators: Vec::new(),
        }
    }
}

impl std::fmt::Debug for CalendarConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalendarConfig")
            .field("start_hour", &self.start_hour)
            .field("end_hour", &self.end_hour)
            .field("cell_height", &self.cell_height)
            .field("validators", &self.validators.len())
            .finish()
    }
}

/// Builder for a [`CalendarConfig`] with validated bounds.
pub struct CalendarConfigBuilder {
    start_hour: u32,
    end_hour: u32,
    cell_height: f32,
    read_only: ReadOnlyFn,
    validators: Vec<ValidatorFn>,
}

impl CalendarConfigBuilder {
    pub fn new() -> Self {
        let defaults = CalendarConfig::default();
        Self {
            start_hour: defaults.start_hour,
            end_hour: defaults.end_hour,
            cell_height: defaults.cell_height,
            read_only: defaults.read_only,
            validators: defaults.validators,
        }
    }

    /// Set the visible time range, e.g. `(7, 22)` for 07:00-22:00.
    pub fn time_range(mut self, start_hour: u32, end_hour: u32) -> Self {
        self.start_hour = start_hour;
        self.end_hour = end_hour;
        self
    }

    /// Set the pixel height of one hour cell.
    pub fn cell_height(mut self, cell_height: f32) -> Self {
        self.cell_height = cell_height;
        self
    }

    /// Set the read-only policy called for every event.
    pub fn read_only<F>(mut self, policy: F) -> Self
    where
        F: Fn(&CalendarEvent, &ValidationContext<'_>) -> bool + 'static,
    {
        self.read_only = Box::new(policy);
        self
    }

    /// Append a validator to the ordered pipeline.
    pub fn validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&CalendarEvent, &ValidationContext<'_>) -> bool + 'static,
    {
        self.validators.push(Box::new(validator));
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<CalendarConfig, String> {
        if self.start_hour >= 24 {
            return Err("start_hour must be in [0, 24)".to_string());
        }
        if self.end_hour > 24 || self.end_hour <= self.start_hour {
            return Err("end_hour must be in (start_hour, 24]".to_string());
        }
        if !(self.cell_height > 0.0) {
            return Err("cell_height must be positive".to_string());
        }

        Ok(CalendarConfig {
            start_hour: self.start_hour,
            end_hour: self.end_hour,
            cell_height: self.cell_height,
            read_only: self.read_only,
            validators: self.validators,
        })
    }
}

impl Default for CalendarConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
