//! HTTP handlers for the Catalog domain

pub mod page;
pub mod projects;
