//! HTTP server and route handlers.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::config::ServiceConfig;

/// Reported in `/info`.
pub const LANGUAGE: &str = "Rust";

/// Reported in `/info`.
pub const FRAMEWORK: &str = "axum";

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),

    #[error("Server error: {0}")]
    ServeError(String),
}

/// Body of `GET /`.
#[derive(Debug, Serialize)]
pub struct Greeting {
    pub message: String,
    pub description: String,
    pub environment: String,
    pub timestamp: String,
    pub version: String,
}

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub service: String,
    pub timestamp: String,
}

/// Body of `GET /info`.
#[derive(Debug, Serialize)]
pub struct Info {
    pub name: String,
    pub description: String,
    pub environment: String,
    pub language: &'static str,
    pub framework: &'static str,
    pub version: String,
}

type SharedConfig = Arc<ServiceConfig>;

/// Build the service router.
pub fn router(config: ServiceConfig) -> Router {
    Router::new()
        .route("/", get(greeting_handler))
        .route("/health", get(health_handler))
        .route("/info", get(info_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(config))
}

/// Template example service.
pub struct Service {
    config: ServiceConfig,
}

impl Service {
    /// Create a new service.
    pub fn new(config: ServiceConfig) -> Self {
        Self { config }
    }

    /// Address the service listens on.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.config.port))
    }

    /// Serve until Ctrl-C.
    pub async fn start(self) -> Result<(), ServerError> {
        let addr = self.addr();

        tracing::info!("{}", "=".repeat(50));
        tracing::info!("{} starting...", self.config.name);
        tracing::info!("Environment: {}", self.config.environment);
        tracing::info!("Port: {}", self.config.port);
        tracing::info!("Health check: http://localhost:{}/health", self.config.port);
        tracing::info!("Info: http://localhost:{}/info", self.config.port);
        tracing::info!("{}", "=".repeat(50));

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        axum::serve(listener, router(self.config))
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ServerError::ServeError(e.to_string()))?;

        tracing::info!("Server stopped");

        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

/// Current time as RFC 3339, taken fresh for every response.
fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

async fn greeting_handler(State(config): State<SharedConfig>) -> Json<Greeting> {
    Json(Greeting {
        message: format!("¡Hola Mundo desde {}!", config.name),
        description: config.description.clone(),
        environment: config.environment.clone(),
        timestamp: timestamp(),
        version: config.version.clone(),
    })
}

async fn health_handler(State(config): State<SharedConfig>) -> Json<Health> {
    Json(Health {
        status: "healthy",
        service: config.name.clone(),
        timestamp: timestamp(),
    })
}

async fn info_handler(State(config): State<SharedConfig>) -> Json<Info> {
    Json(Info {
        name: config.name.clone(),
        description: config.description.clone(),
        environment: config.environment.clone(),
        language: LANGUAGE,
        framework: FRAMEWORK,
        version: config.version.clone(),
    })
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use chrono::DateTime;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;

    fn test_config() -> ServiceConfig {
        ServiceConfig {
            name: "orders-api".to_string(),
            description: "Order intake".to_string(),
            environment: "staging".to_string(),
            ..Default::default()
        }
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = router(test_config())
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn listens_on_all_interfaces() {
        let service = Service::new(ServiceConfig {
            port: 9123,
            ..Default::default()
        });

        assert_eq!(service.addr().to_string(), "0.0.0.0:9123");
    }

    #[tokio::test]
    async fn greeting_reports_config() {
        let (status, body) = get_json("/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "¡Hola Mundo desde orders-api!");
        assert_eq!(body["description"], "Order intake");
        assert_eq!(body["environment"], "staging");
        assert_eq!(body["version"], "1.0.0");
        assert!(DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap()).is_ok());
    }

    #[tokio::test]
    async fn health_is_healthy_with_fresh_timestamps() {
        let (status, first) = get_json("/health").await;
        tokio::time::sleep(Duration::from_secs(1)).await;
        let (_, second) = get_json("/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(first["status"], "healthy");
        assert_eq!(first["service"], "orders-api");

        let t1 = DateTime::parse_from_rfc3339(first["timestamp"].as_str().unwrap()).unwrap();
        let t2 = DateTime::parse_from_rfc3339(second["timestamp"].as_str().unwrap()).unwrap();
        assert!(t2 > t1);
    }

    #[tokio::test]
    async fn info_ignores_query_parameters() {
        let (status, plain) = get_json("/info").await;
        let (_, with_query) = get_json("/info?language=python&framework=flask").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(plain["language"], "Rust");
        assert_eq!(plain["framework"], "axum");
        assert_eq!(plain["name"], "orders-api");
        assert_eq!(plain, with_query);
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let response = router(test_config())
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
