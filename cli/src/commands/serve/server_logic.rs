//! # NetSight HTTP Server Implementation
//!
//! File: cli/src/commands/serve/server_logic.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/netsight
//!
//! **DISCLAIMER:** This repository is in the early phases of being rewritten
//! and is not suitable for production development yet.
//!
//! ## Overview
//!
//! This module implements the HTTP layer of the `netsight serve` command:
//! the router, the four request handlers, and the JSON wire types they
//! return. The handlers are thin glue over `common::network` - all of the
//! timing- and concurrency-sensitive logic lives there, not here.
//!
//! Routes:
//! - `GET /` - HTML index page listing the endpoints
//! - `GET /api/network/status` - quick overview, local host only
//! - `GET /api/network/scan` - full sweep of the 50-host scan window
//! - `POST /api/device/ping` - probe one address given as `{"ip": "..."}`
//!
//! ## Architecture
//!
//! The server implementation uses Axum and follows these steps:
//! 1. Build the router with `create_app` - an explicit `Router` object, no
//!    global handler registry - including trace and CORS middleware
//! 2. Bind the listener to the configured address
//! 3. Serve with graceful shutdown handlers (Ctrl+C / SIGTERM)
//!
//! Handler errors become JSON `{"error": ...}` bodies with the appropriate
//! status code; no request failure ever takes the listener down.
//!
//! ## Examples
//!
//! Basic usage from the command handler:
//!
//! ```rust
//! // Load configuration
//! let config = config::load_and_merge_config(args)?;
//!
//! // Run the server
//! server_logic::run_server(config).await?;
//! ```
//!
use super::config::ServerConfig;
use crate::common::network::{discovery, probe, scan};
use crate::common::network::probe::{Device, DeviceStatus};
use crate::core::error::Result;
use anyhow::Context;
use axum::extract::rejection::JsonRejection;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{http::StatusCode, Json, Router};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, Level};

/// The index page served at `/`, pointing readers at the API endpoints.
const INDEX_HTML: &str = r#"<html>
<head><title>Network Status API</title></head>
<body>
    <h1>Network Status API</h1>
    <ul>
        <li><a href="/api/network/status">GET /api/network/status</a> - Quick network overview</li>
        <li><a href="/api/network/scan">GET /api/network/scan</a> - Full network scan (may take time)</li>
        <li>POST /api/device/ping - Ping specific device</li>
    </ul>
</body>
</html>
"#;

/// # Network Status (`NetworkStatus`)
///
/// The aggregate response of the status and scan endpoints: the host's own
/// address and subnet plus the device list appropriate to the endpoint.
/// Assembled once per request; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkStatus {
    pub local_ip: String,
    pub subnet: String,
    pub device_count: usize,
    pub devices: Vec<Device>,
}

/// Request body for `POST /api/device/ping`.
#[derive(Debug, Deserialize)]
struct PingRequest {
    #[serde(default)]
    ip: String,
}

/// JSON error body: `{"error": "..."}`.
#[derive(Debug, Serialize, Deserialize)]
struct ErrorBody {
    error: String,
}

/// # API Error (`ApiError`)
///
/// Handler-level error carrying the status code and the message for the
/// JSON error body. Converting into a `Response` keeps the handlers free to
/// use `?` while every failure path still produces `{"error": msg}`.
struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// 500 with a generic message; the underlying cause goes to the log,
    /// not the wire.
    fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }

    /// 400 for requests the caller must fix.
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { error: self.message })).into_response()
    }
}

/// # Run HTTP Server (`run_server`)
///
/// Initializes and starts the main Axum HTTP server according to the
/// provided configuration.
///
/// ## Process:
/// 1. Creates the application router via `create_app`.
/// 2. Prints the startup banner with the endpoint list.
/// 3. Binds a `TcpListener` to the configured address.
/// 4. Serves the application with graceful shutdown handling via
///    `shutdown_signal` (Ctrl+C or SIGTERM).
///
/// The configured port is part of the API's contract, so an occupied port is
/// a startup error here rather than a reason to drift to a neighboring port.
///
/// ## Arguments
///
/// * `config`: The `ServerConfig` containing port, host, and CORS settings.
///
/// ## Returns
///
/// * `Result<()>`: `Ok(())` when the server runs until clean shutdown.
///
/// ## Errors
///
/// Returns an error if binding the listener fails (e.g., port in use,
/// permissions) or the server encounters a fatal error during operation.
pub async fn run_server(config: ServerConfig) -> Result<()> {
    let addr = SocketAddr::new(config.host, config.port);

    // Create the Axum application router with all routes and middleware.
    let app = create_app(&config);

    // Display detailed server information to the user upon startup.
    println!("\n=================================================================");
    println!("🛰️  Starting Network Status API on {}", addr);
    println!("🌐 Local URL:         http://localhost:{}", addr.port());
    println!("🔒 CORS enabled:      {}", config.enable_cors);
    println!("Endpoints:");
    println!("  GET  /api/network/status - Get quick network overview");
    println!("  GET  /api/network/scan   - Scan network for devices");
    println!("  POST /api/device/ping    - Ping specific device (JSON: {{\"ip\": \"192.168.1.1\"}})");
    println!("=================================================================\n");

    info!("Starting server on {}", addr);
    println!("Server starting! Press Ctrl+C to stop.");

    // Bind the TCP listener to the configured socket address.
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind TCP listener to address {}", addr))?;

    // Start the Axum server, serving the application (`app`) using the listener.
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?; // Propagate any server errors.

    println!("\nServer shutdown complete.");
    Ok(())
}

/// # Handle Shutdown Signal (`shutdown_signal`)
///
/// Creates a future that resolves when a shutdown signal (Ctrl+C or SIGTERM
/// on Unix) is received. This is used by `axum::serve`'s
/// `with_graceful_shutdown` method to allow the server to stop accepting new
/// connections and finish processing existing requests before exiting.
///
/// ## Returns
///
/// * `impl Future<Output = ()>`: A future that completes when either Ctrl+C
///   is detected or a SIGTERM signal is received (on Unix systems).
async fn shutdown_signal() {
    // Future that completes when Ctrl+C is pressed.
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        info!("Received Ctrl+C, initiating graceful shutdown...");
    };

    // Future that completes when SIGTERM is received (Unix-specific).
    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("Received SIGTERM, initiating graceful shutdown...");
            }
            Err(e) => {
                error!(
                    "Failed to install SIGTERM handler: {}. Shutdown on SIGTERM might not work.",
                    e
                );
                // Keep the future pending indefinitely if the handler fails.
                std::future::pending::<()>().await;
            }
        }
    };

    // On non-Unix platforms, SIGTERM handling is not applicable, so create a future that never completes.
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    // Wait for either Ctrl+C or SIGTERM to occur.
    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// # Create Axum Application (`create_app`)
///
/// Constructs and configures the main Axum `Router` instance: the four API
/// routes plus tracing and CORS middleware. The router is an explicit object
/// handed to `axum::serve` by the caller - handlers are never registered
/// through shared global state, which keeps them testable in isolation.
///
/// ## Arguments
///
/// * `config`: A reference to the `ServerConfig` (CORS enablement flag).
///
/// ## Returns
///
/// * `Router`: The fully configured Axum `Router` ready to be served.
pub fn create_app(config: &ServerConfig) -> Router {
    // Configure the CORS middleware layer based on the config flag.
    let cors_layer = if config.enable_cors {
        info!("CORS middleware enabled (permissive).");
        CorsLayer::permissive()
    } else {
        info!("CORS middleware disabled.");
        CorsLayer::new() // Effectively a no-op layer.
    };

    // Configure the tracing middleware for logging HTTP requests and responses.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::default().include_headers(true))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // Build the main router. Method routers give non-matching verbs a 405
    // (e.g. GET on the ping route) without extra handling here.
    Router::new()
        .route("/", get(handle_index))
        .route("/api/network/status", get(handle_network_status))
        .route("/api/network/scan", get(handle_network_scan))
        .route("/api/device/ping", post(handle_device_ping))
        // Apply middleware layers.
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer) // Apply tracing first.
                .layer(cors_layer), // Then apply CORS.
        )
}

/// # Index Handler (`handle_index`)
///
/// Serves the static HTML index page listing the API endpoints.
async fn handle_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// # Network Status Handler (`handle_network_status`)
///
/// `GET /api/network/status` - the quick overview. Resolves the local
/// address and subnet and reports the local host as the single, always
/// online device. No probing takes place on this path.
///
/// Fails with 500 and a generic message when no usable local IPv4 address
/// exists; the cause is logged server-side.
async fn handle_network_status() -> std::result::Result<Json<NetworkStatus>, ApiError> {
    let local_ip = discovery::local_ipv4().map_err(|e| {
        error!("Failed to get local IP: {:?}", e);
        ApiError::internal("Failed to get local IP")
    })?;
    let subnet = discovery::subnet_of(&local_ip);

    // The local host is reported as a regular device entry: online now,
    // hostname resolved best-effort like any probed device.
    let hostname = probe::reverse_lookup(&local_ip)
        .await
        .unwrap_or_else(|| local_ip.clone());
    let local_device = Device {
        ip: local_ip.clone(),
        hostname,
        status: DeviceStatus::Online,
        last_seen: probe::now_rfc3339(),
    };

    Ok(Json(NetworkStatus {
        local_ip,
        subnet,
        device_count: 1,
        devices: vec![local_device],
    }))
}

/// # Network Scan Handler (`handle_network_scan`)
///
/// `GET /api/network/scan` - the full sweep. Resolves the local address,
/// runs the concurrent 50-host scan, and reports the online devices in
/// completion order. The response is not sent until every probe in the
/// window has finished, so this endpoint may take around a second.
async fn handle_network_scan() -> std::result::Result<Json<NetworkStatus>, ApiError> {
    let local_ip = discovery::local_ipv4().map_err(|e| {
        error!("Failed to get local IP: {:?}", e);
        ApiError::internal("Failed to get local IP")
    })?;
    let subnet = discovery::subnet_of(&local_ip);

    let devices = scan::scan_subnet(&local_ip).await;

    Ok(Json(NetworkStatus {
        local_ip,
        subnet,
        device_count: devices.len(),
        devices,
    }))
}

/// # Device Ping Handler (`handle_device_ping`)
///
/// `POST /api/device/ping` - probe one address. The body must be JSON with a
/// non-empty `ip` field; anything else is a 400 with a JSON error object.
/// The address itself is not validated here - a malformed address simply
/// probes as offline, which is the caller-visible contract.
async fn handle_device_ping(
    payload: std::result::Result<Json<PingRequest>, JsonRejection>,
) -> std::result::Result<Json<Device>, ApiError> {
    // Any extraction failure (no body, malformed JSON, wrong content type)
    // collapses to the same 400.
    let Json(request) = payload.map_err(|_| ApiError::bad_request("Invalid request body"))?;

    if request.ip.is_empty() {
        return Err(ApiError::bad_request("IP address is required"));
    }

    Ok(Json(probe::probe(&request.ip).await))
}

// --- Unit Tests ---
