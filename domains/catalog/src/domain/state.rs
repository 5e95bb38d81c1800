//! Selection state machine and per-session view state
//!
//! The selection tracks which project, if any, is open in the detail view.
//! `PortfolioView` pairs it with the active filter and is the single owner
//! of both; every mutation goes through `&mut self`.

use std::sync::Arc;

pub use portfolio_common::StateError;

use super::entities::{Catalog, Project, ProjectId};
use super::filter::{filter, ActiveFilter};

// ============================================================================
// Selection State Machine
// ============================================================================

/// Detail view states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectionState {
    #[default]
    Closed,
    Open(ProjectId),
}

impl SelectionState {
    pub fn project_id(&self) -> Option<ProjectId> {
        match self {
            SelectionState::Closed => None,
            SelectionState::Open(id) => Some(*id),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, SelectionState::Open(_))
    }
}

impl std::fmt::Display for SelectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Closed => write!(f, "closed"),
            Self::Open(id) => write!(f, "open({})", id),
        }
    }
}

/// Events that drive the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    /// A project card was activated
    Select(ProjectId),
    /// The detail view's close button was pressed
    Close,
    /// The active filter changed
    FilterChanged,
}

impl std::fmt::Display for SelectionEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Select(id) => write!(f, "select({})", id),
            Self::Close => write!(f, "close"),
            Self::FilterChanged => write!(f, "filter_changed"),
        }
    }
}

/// Selection state machine
pub struct SelectionStateMachine;

impl SelectionStateMachine {
    /// Compute the next state. Every (state, event) pair is defined.
    pub fn transition(current: SelectionState, event: SelectionEvent) -> SelectionState {
        match (current, event) {
            (_, SelectionEvent::Select(id)) => SelectionState::Open(id),
            (_, SelectionEvent::Close) | (_, SelectionEvent::FilterChanged) => {
                SelectionState::Closed
            }
        }
    }

    /// Apply an event in place, reporting whether the state changed
    pub fn apply(state: &mut SelectionState, event: SelectionEvent) -> bool {
        let next = Self::transition(*state, event);
        let changed = next != *state;
        if changed {
            tracing::debug!(from = %state, to = %next, event = %event, "Selection transition");
        }
        *state = next;
        changed
    }
}

// ============================================================================
// Portfolio View
// ============================================================================

/// Active filter plus selection for one browsing session
#[derive(Debug, Clone)]
pub struct PortfolioView {
    catalog: Arc<Catalog>,
    active_filter: ActiveFilter,
    selection: SelectionState,
}

impl PortfolioView {
    /// Start a session showing the whole catalog with nothing selected
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            active_filter: ActiveFilter::All,
            selection: SelectionState::Closed,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn active_filter(&self) -> &ActiveFilter {
        &self.active_filter
    }

    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    /// Projects visible under the active filter, in catalog order
    pub fn filtered(&self) -> Vec<&Project> {
        filter(&self.catalog, &self.active_filter)
    }

    /// The project open in the detail view
    pub fn selected(&self) -> Option<&Project> {
        self.selection
            .project_id()
            .and_then(|id| self.catalog.get(id))
    }

    /// Switch the filter. Always closes the detail view.
    pub fn change_filter(&mut self, filter: ActiveFilter) {
        tracing::debug!(from = %self.active_filter, to = %filter, "Filter changed");
        self.active_filter = filter;
        SelectionStateMachine::apply(&mut self.selection, SelectionEvent::FilterChanged);
    }

    /// Open a project in the detail view.
    ///
    /// Only projects in the current filtered set can be opened. Returns
    /// whether the selection changed.
    pub fn select(&mut self, id: ProjectId) -> Result<bool, StateError> {
        let visible = self
            .catalog
            .get(id)
            .is_some_and(|project| self.active_filter.matches(project));

        if !visible {
            return Err(StateError::GuardFailed(format!(
                "Project {} is not in the current filter",
                id
            )));
        }

        Ok(SelectionStateMachine::apply(
            &mut self.selection,
            SelectionEvent::Select(id),
        ))
    }

    /// Close the detail view
    pub fn close(&mut self) -> bool {
        SelectionStateMachine::apply(&mut self.selection, SelectionEvent::Close)
    }
}

// ============================================================================
// Tests
// ============================================================================
