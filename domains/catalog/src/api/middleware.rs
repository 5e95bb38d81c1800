//! Catalog domain state

use std::sync::Arc;

use crate::domain::entities::Catalog;
use crate::domain::site::SiteContent;

/// Application state for the Catalog domain
#[derive(Clone)]
pub struct CatalogState {
    pub catalog: Arc<Catalog>,
    pub site: Arc<SiteContent>,
}

impl CatalogState {
    pub fn new(catalog: Catalog, site: SiteContent) -> Self {
        Self {
            catalog: Arc::new(catalog),
            site: Arc::new(site),
        }
    }
}
