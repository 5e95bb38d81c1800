//! Catalog domain layer: entities, filtering, selection state, view composition

pub mod entities;
pub mod filter;
pub mod site;
pub mod state;
pub mod view;
