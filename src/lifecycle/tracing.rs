//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! Log lines use a compact format that hides the crate/module prefix (`with_target(false)`);
//! the actor tags its events with an `entity_type` field instead. The filter comes from
//! `RUST_LOG` when it parses, and otherwise from the level passed in by the caller
//! (`--log-level`).
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: Startup, shutdown, and final store size
//! - **Store Operations**: Create, Get, List, Update, Delete with the product id
//! - **Client Calls**: `#[instrument]` spans around each `ProductClient` call
//! - **HTTP Requests**: one span per request from `tower_http::trace::TraceLayer`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show full payloads with debug logs
//! RUST_LOG=debug cargo run
//!
//! # Only the HTTP layer
//! RUST_LOG=tower_http=debug cargo run
//! ```
//!
//! **With `RUST_LOG=debug`**:
//!
//! ```text
//! DEBUG Create entity_type="Product" params=ProductCreate { name: "Lamp", description: "", price: 19.5, stock: 3.0 }
//! INFO Created entity_type="Product" id=1 size=1
//! DEBUG Get entity_type="Product" id=7 found=false
//! ```
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Call once, before anything logs.
pub fn setup_tracing(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact()
        .init();
}
