//! HTTP server core implementation

use crate::config::{Config, ServerConfig};
use crate::core::keys::KeyManager;
use crate::notifications::create_sink;
use crate::server::routes;
use crate::server::state::AppState;
use crate::storage::create_store;
use crate::utils::error::{KeygateError, Result};
use actix_web::{
    App, HttpServer as ActixHttpServer,
    middleware::{DefaultHeaders, Logger},
    web,
};
use tracing::info;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server, connecting to the configured store
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let store = create_store(config.storage()).await?;
        let sink = create_sink(config.notifications())?;
        info!("Key notifications go to the {} sink", sink.name());

        let keys = KeyManager::new(store, sink);
        let state = AppState::new(config.clone(), keys);

        Ok(Self {
            config: config.server().clone(),
            state,
        })
    }

    /// Create the Actix-web application
    pub fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(state)
            .wrap(Logger::default())
            .wrap(DefaultHeaders::new().add(("Server", "keygate")))
            .configure(routes::health::configure_routes)
            .configure(routes::keys::configure_routes)
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();

        info!("Starting HTTP server on {}", bind_addr);

        let state = web::Data::new(self.state);

        let mut server = ActixHttpServer::new(move || Self::create_app(state.clone()));
        if let Some(workers) = self.config.workers {
            server = server.workers(workers);
        }

        let server = server
            .bind(&bind_addr)
            .map_err(|e| Self::format_bind_error(e, &bind_addr))?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| KeygateError::internal(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    fn format_bind_error(e: std::io::Error, bind_addr: &str) -> KeygateError {
        match e.kind() {
            std::io::ErrorKind::AddrInUse => KeygateError::internal(format!(
                "Address {} is already in use; set KEYGATE_PORT or --port to choose another",
                bind_addr
            )),
            std::io::ErrorKind::PermissionDenied => KeygateError::internal(format!(
                "Permission denied binding {}",
                bind_addr
            )),
            _ => KeygateError::internal(format!("Failed to bind {}: {}", bind_addr, e)),
        }
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
