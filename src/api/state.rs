use std::sync::Arc;

use crate::config::Config;
use crate::ledger::OpLogStore;
use crate::observability::Metrics;
use crate::service::MathService;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub service: Arc<MathService>,
    pub store: Arc<OpLogStore>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(config: Config, service: MathService, store: OpLogStore) -> Self {
        Self {
            config: Arc::new(config),
            service: Arc::new(service),
            store: Arc::new(store),
            metrics: Arc::new(Metrics::new()),
        }
    }
}
