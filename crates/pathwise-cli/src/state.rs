//! Application state wiring the controller to the HTTP backend.
//!
//! The controller is generic over [`Backend`]; AppState pins it to the
//! concrete infra implementation.
//!
//! [`Backend`]: pathwise_core::backend::Backend

use std::path::PathBuf;

use pathwise_core::controller::Controller;
use pathwise_infra::config::{load_client_config, resolve_data_dir};
use pathwise_infra::http::HttpBackend;
use pathwise_types::config::ClientConfig;

pub type ConcreteController = Controller<HttpBackend>;

pub struct AppState {
    pub controller: ConcreteController,
    pub config: ClientConfig,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Load config and build the controller. `base_url` overrides the
    /// config file.
    pub async fn init(base_url: Option<String>) -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        let mut config = load_client_config(&data_dir).await;
        if let Some(url) = base_url {
            config.base_url = url;
        }

        let backend = HttpBackend::new(&config)?;
        tracing::debug!(base_url = backend.base_url(), "Backend configured");
        let controller = Controller::new(backend, config.timing);

        Ok(Self {
            controller,
            config,
            data_dir,
        })
    }
}
