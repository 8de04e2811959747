//! Tracing and logging setup.

/// Initializes the tracing/logging infrastructure for the application.
///
/// This sets up structured logging using the `tracing` crate with:
/// - **Environment-based filtering**: controlled via the `RUST_LOG` variable
/// - **Pretty formatting**: human-readable output with timestamps and levels
/// - **Span tracking**: hierarchical context for the request-issuing services
///
/// # Environment Variables
///
/// Set `RUST_LOG` to control log verbosity:
/// - `RUST_LOG=info` - show info, warn, and error messages
/// - `RUST_LOG=debug` - show debug and above
/// - `RUST_LOG=ims_client=debug` - debug only for this crate
///
/// # Example
///
/// ```ignore
/// setup_tracing();
/// tracing::info!("client started");
/// ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
