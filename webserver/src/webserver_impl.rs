//! Main webserver implementation
//!
//! This module contains the WebServer struct that owns the interaction state
//! and the injected services, and builds the router serving every fragment
//! endpoint.

use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::{LatencyProfile, ServerConfig};
use crate::core::{ContactDirectory, InteractionState};
use crate::error::{WebServerError, WebServerResult};
use crate::traits::{MarkupSanitizer, UserDirectory};
use crate::web::handlers;

/// Main webserver struct with dependency injection
pub struct WebServer<D, S>
where
    D: UserDirectory,
    S: MarkupSanitizer,
{
    config: Arc<ServerConfig>,
    state: Arc<InteractionState>,
    contacts: Arc<ContactDirectory>,
    user_directory: Arc<D>,
    sanitizer: Arc<S>,
}

impl<D, S> Clone for WebServer<D, S>
where
    D: UserDirectory,
    S: MarkupSanitizer,
{
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            state: self.state.clone(),
            contacts: self.contacts.clone(),
            user_directory: self.user_directory.clone(),
            sanitizer: self.sanitizer.clone(),
        }
    }
}

impl<D, S> WebServer<D, S>
where
    D: UserDirectory + 'static,
    S: MarkupSanitizer + 'static,
{
    /// Create a new webserver with dependency injection
    pub fn new(config: ServerConfig, user_directory: D, sanitizer: S) -> Self {
        Self {
            config: Arc::new(config),
            state: Arc::new(InteractionState::new()),
            contacts: Arc::new(ContactDirectory::builtin()),
            user_directory: Arc::new(user_directory),
            sanitizer: Arc::new(sanitizer),
        }
    }

    /// Replace the local contact directory
    pub fn with_contacts(mut self, contacts: ContactDirectory) -> Self {
        self.contacts = Arc::new(contacts);
        self
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            // Live values
            .route("/poll", get(handlers::live::poll::<D, S>))
            .route("/weather", get(handlers::live::weather::<D, S>))
            // Slow backend and external data
            .route("/users", get(handlers::users::list_users::<D, S>))
            .route("/convert", post(handlers::convert::convert::<D, S>))
            // Search
            .route("/search", post(handlers::search::search_contacts::<D, S>))
            .route("/search/api", post(handlers::search::search_directory::<D, S>))
            // Forms
            .route("/contact/email", post(handlers::contact::validate_email))
            .route("/profile/:id", put(handlers::profile::update_profile::<D, S>))
            // Health check
            .route("/health", get(handlers::live::health::<D, S>))
            // Front-end assets
            .fallback_service(ServeDir::new(&self.config.static_dir))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive())
                    .into_inner(),
            )
            .with_state(self.clone())
    }

    /// Start the webserver and serve until Ctrl+C
    pub async fn run(&self) -> WebServerResult<()> {
        let router = self.build_router();
        let bind_address = self.config.bind_address();

        let listener = tokio::net::TcpListener::bind(bind_address)
            .await
            .map_err(|e| WebServerError::ServerStartup(format!("Failed to bind to {bind_address}: {e}")))?;

        tracing::info!("🌐 Fragment server listening on http://{}", bind_address);
        tracing::info!("📁 Serving static assets from {}", self.config.static_dir.display());
        tracing::info!("📡 User directory at {}", self.config.users_endpoint);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn latency(&self) -> LatencyProfile {
        self.config.latency
    }

    /// Shared interaction state (poll counter and temperature)
    pub fn state(&self) -> &Arc<InteractionState> {
        &self.state
    }

    pub fn contacts(&self) -> &ContactDirectory {
        &self.contacts
    }

    pub fn user_directory(&self) -> &D {
        &self.user_directory
    }

    pub fn sanitizer(&self) -> &S {
        &self.sanitizer
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => shared::logging::log_shutdown("Received Ctrl+C signal"),
        Err(err) => shared::logging::log_error("Signal handling", &err),
    }
}
