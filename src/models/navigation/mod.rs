// Navigation state
// Upstream "current date + view" input that yields the visible date columns

use chrono::{Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Which grid layout is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarView {
    Week,
    Day,
}

/// Current navigation position of the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    pub date: NaiveDate,
    pub view: CalendarView,
}

impl NavigationState {
    pub fn new(date: NaiveDate, view: CalendarView) -> Self {
        Self { date, view }
    }

    /// Today in week view.
    pub fn today() -> Self {
        Self {
            date: Local::now().date_naive(),
            view: CalendarView::Week,
        }
    }

    /// Apply a navigation action, producing the next state.
    pub fn dispatch(self, action: NavigationAction) -> Self {
        let step = match self.view {
            CalendarView::Week => 7,
            CalendarView::Day => 1,
        };
        match action {
            NavigationAction::Next => Self {
                date: self.date + Days::new(step),
                ..self
            },
            NavigationAction::Prev => Self {
                date: self.date - Days::new(step),
                ..self
            },
            NavigationAction::Today => Self {
                date: Local::now().date_naive(),
                ..self
            },
            NavigationAction::SetView(view) => Self { view, ..self },
        }
    }
}

/// Navigation actions dispatched by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    Next,
    Prev,
    Today,
    SetView(CalendarView),
}
