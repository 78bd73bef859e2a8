use std::sync::Arc;

use inspeksi_core::{application::InspeksiService, domain::import_cache::store::ImportCache};

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: InspeksiService,
    pub import_cache: Arc<ImportCache>,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: InspeksiService) -> Self {
        Self {
            args,
            service,
            import_cache: Arc::new(ImportCache::with_default_ttl()),
        }
    }
}
