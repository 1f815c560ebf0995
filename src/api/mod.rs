use std::sync::Arc;

pub mod qr;

use crate::config::Config;
use crate::services::QrService;

#[derive(Clone)]
pub struct AppState {
    pub qr_service: Arc<QrService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(qr_service: Arc<QrService>, config: Arc<Config>) -> Self {
        Self {
            qr_service,
            config,
        }
    }
}
