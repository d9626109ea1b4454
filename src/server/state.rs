use std::sync::Arc;

use anyhow::Result;

use crate::config::Settings;
use crate::delivery::create_delivery_client;
use crate::dispatch::{default_registry, Dispatcher};

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub dispatcher: Arc<Dispatcher>,
}

impl AppState {
    /// Build the shared state. Fails if the static category set is
    /// broken; the process must not start with a broken registry.
    pub fn new(settings: Settings) -> Result<Self> {
        let registry = Arc::new(default_registry()?);
        let delivery = create_delivery_client(&settings.fcm);
        let dispatcher = Arc::new(Dispatcher::new(registry, delivery));

        Ok(Self {
            settings: Arc::new(settings),
            dispatcher,
        })
    }
}
