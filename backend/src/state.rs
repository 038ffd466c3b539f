use std::sync::Arc;

use crate::{config::Config, repositories::AdminDataSource, services::SessionRegistry};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub data: Arc<dyn AdminDataSource>,
    pub sessions: SessionRegistry,
}

impl AppState {
    pub fn new(config: Config, data: Arc<dyn AdminDataSource>) -> Self {
        Self {
            config,
            data,
            sessions: SessionRegistry::new(),
        }
    }
}
