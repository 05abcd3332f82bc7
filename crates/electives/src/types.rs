/// Shared server state
use crate::catalog::Catalog;
use crate::config::ServerConfig;

/// State handed to every request handler. The catalog is loaded once at
/// start-up and never mutated afterwards.
pub struct WrapperState {
    pub catalog: Catalog,
    pub config: ServerConfig,
}

impl WrapperState {
    pub fn new(catalog: Catalog, config: ServerConfig) -> Self {
        Self { catalog, config }
    }
}
