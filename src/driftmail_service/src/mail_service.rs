use axum::{
    Router,
    routing::{get, post},
};
use driftmail_adapters::http::routes::{list_domains, login, logout, register};
use driftmail_core::{IdentityBackend, LinkedAccountStore, MailboxProvider};
use tokio::net::TcpListener;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// Main account service wiring the route handlers to the injected ports.
pub struct DriftmailService {
    router: Router,
}

impl DriftmailService {
    /// Create a new DriftmailService with the provided clients and store
    ///
    /// # Arguments
    /// * `mailbox_provider` - Client for the temporary-mailbox provider (must be Clone)
    /// * `identity_backend` - Client for the user-identity backend (must be Clone)
    /// * `linked_account_store` - Store for user-to-mailbox links (must be Clone)
    /// * `redirect_to` - Confirmation redirect handed to the identity backend
    /// * `assets_dir` - Directory the UI shell is served from
    ///
    /// # Note on Architecture
    /// Adapters implement Clone via internal connection pools for thread-safe
    /// sharing. Each route is given its specific state requirements.
    pub fn new<M, I, L>(
        mailbox_provider: M,
        identity_backend: I,
        linked_account_store: L,
        redirect_to: String,
        assets_dir: String,
    ) -> Self
    where
        M: MailboxProvider + Clone + 'static,
        I: IdentityBackend + Clone + 'static,
        L: LinkedAccountStore + Clone + 'static,
    {
        let assets_service =
            ServeDir::new(assets_dir.clone()).fallback(ServeFile::new(assets_dir + "/index.html"));

        let router = Router::new()
            // Domain listing only needs the mailbox provider
            .route("/domains", get(list_domains::<M>))
            .with_state(mailbox_provider.clone())
            // Register needs both clients, the link store, and the redirect
            .route("/register", post(register::<M, I, L>))
            .with_state((
                mailbox_provider.clone(),
                identity_backend.clone(),
                linked_account_store,
                redirect_to,
            ))
            // Login needs both clients
            .route("/login", post(login::<M, I>))
            .with_state((mailbox_provider, identity_backend.clone()))
            // Logout only needs the identity backend
            .route("/logout", post(logout::<I>))
            .with_state(identity_backend)
            .fallback_service(assets_service);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the service into a router that can be served or nested into
    /// another application
    pub fn into_router(self) -> Router {
        self.with_trace_layer().router
    }

    /// Run the account service as a standalone server
    ///
    /// # Arguments
    /// * `listener` - TCP listener to bind the server to
    pub async fn run_standalone(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let router = self.into_router();

        tracing::info!("Account service listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
