//! Serving host.
//!
//! Builds an axum router from a completed mount registry and binds the
//! process listener. Binding happens only after the registry is complete,
//! so every mounted route is visible from the first accepted connection.

use std::net::SocketAddr;

use axum::Router;
use tower_http::services::ServeDir;

use jungle_pipeline::MountRegistry;

use crate::port::Listener;

/// Errors that can occur with the serving host.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("{0} requires elevated privileges")]
    BindPrivileged(String),

    #[error("{0} is already in use")]
    BindInUse(String),

    #[error("Failed to bind {bind}: {message}")]
    BindError { bind: String, message: String },

    #[error("Server error: {0}")]
    Serve(String),
}

impl ServerError {
    /// Bind failures the process should report and exit `1` on.
    pub fn is_fatal_bind(&self) -> bool {
        matches!(
            self,
            ServerError::BindPrivileged(_) | ServerError::BindInUse(_)
        )
    }
}

/// Build the router serving every mounted workspace directory.
///
/// `index.html` is the implicit root of each prefix; MIME types, caching
/// headers, and 404 handling come from `ServeDir`.
pub fn build_router(registry: &MountRegistry) -> Router {
    let mut router = Router::new();

    for mount in registry.entries() {
        router = router.nest_service(&mount.route, ServeDir::new(&mount.dir));
    }

    router
}

/// Serving host around a completed registry.
pub struct ServingHost {
    registry: MountRegistry,
}

impl ServingHost {
    /// Create a host for a registry the pipeline finished filling.
    pub fn new(registry: MountRegistry) -> Self {
        Self { registry }
    }

    /// Bind the listener and serve until the process exits.
    pub async fn serve(self, listener: Listener) -> Result<(), ServerError> {
        let app = build_router(&self.registry);

        match listener {
            Listener::Tcp(port) => {
                let bind = format!("Port {port}");
                let addr = SocketAddr::from(([0, 0, 0, 0], port));

                let tcp = tokio::net::TcpListener::bind(addr)
                    .await
                    .map_err(|e| bind_error(&bind, e))?;

                let bound = tcp.local_addr().map(|a| a.port()).unwrap_or(port);
                tracing::info!("Server listening on port {bound}");

                axum::serve(tcp, app)
                    .await
                    .map_err(|e| ServerError::Serve(e.to_string()))
            }
            Listener::Pipe(path) => {
                let bind = format!("Pipe {path}");

                let unix = tokio::net::UnixListener::bind(&path)
                    .map_err(|e| bind_error(&bind, e))?;

                tracing::info!("Server listening on pipe {path}");

                axum::serve(unix, app)
                    .await
                    .map_err(|e| ServerError::Serve(e.to_string()))
            }
        }
    }
}

fn bind_error(bind: &str, e: std::io::Error) -> ServerError {
    match e.kind() {
        std::io::ErrorKind::PermissionDenied => ServerError::BindPrivileged(bind.to_string()),
        std::io::ErrorKind::AddrInUse => ServerError::BindInUse(bind.to_string()),
        _ => ServerError::BindError {
            bind: bind.to_string(),
            message: e.to_string(),
        },
    }
}
