//! Contact domain layer: entities, submission state machine, form state

pub mod entities;
pub mod form;
pub mod state;
