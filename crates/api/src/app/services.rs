use std::sync::Arc;

use catalog_items::Catalog;

/// Application services handed to request handlers.
///
/// Constructed once at startup and passed through an `Extension` — handlers
/// never reach for globals. The catalog is read-only, so sharing it is just
/// an `Arc` with no locking.
#[derive(Debug, Clone)]
pub struct AppServices {
    catalog: Arc<Catalog>,
}

impl AppServices {
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

/// Wire up the service state: the seeded catalog.
pub fn build_services() -> AppServices {
    AppServices {
        catalog: Arc::new(Catalog::seeded()),
    }
}
