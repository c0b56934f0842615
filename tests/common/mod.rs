//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use postal_rest::config::ServiceConfig;
use postal_rest::engine::{
    AddressEngine, EngineError, ExpandOptions, LabeledComponent, ParserOptions,
};
use postal_rest::{HttpServer, Shutdown};

/// Start the service on an ephemeral port. Returns the bound address and the
/// shutdown handle keeping the server alive.
pub async fn start_service(
    config: ServiceConfig,
    engine: Arc<dyn AddressEngine>,
) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let server = HttpServer::new(config, engine);

    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    (addr, shutdown)
}

/// Default config with auth switched off, for tests that are not about auth.
pub fn open_config() -> ServiceConfig {
    let mut config = ServiceConfig::default();
    config.auth.enabled = false;
    config
}

/// Engine that replays fixed parser output, for driving the translation
/// layer end-to-end with exact component lists.
pub struct ScriptedEngine {
    pub components: Vec<LabeledComponent>,
}

impl AddressEngine for ScriptedEngine {
    fn expand(&self, address: &str, _options: &ExpandOptions) -> Result<Vec<String>, EngineError> {
        Ok(vec![address.to_lowercase()])
    }

    fn parse(
        &self,
        _address: &str,
        _options: &ParserOptions,
    ) -> Result<Vec<LabeledComponent>, EngineError> {
        Ok(self.components.clone())
    }
}
