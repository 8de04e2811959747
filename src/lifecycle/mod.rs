//! Runtime wiring and lifecycle management.
//!
//! This module contains the infrastructure around the workflow services:
//!
//! - **Application wiring**: building the transport, session, and services
//!   and connecting them to the navigation/notification collaborators
//! - **Navigation signals**: the narrow contract the screen stack exposes
//! - **Observability setup**: initializing tracing and logging
//!
//! # Main Components
//!
//! - [`ImsApp`] - the orchestrator owning all services
//! - [`Navigator`] / [`Screen`] - the navigation collaborator
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure

pub mod app;
pub mod navigation;
pub mod tracing;

pub use self::app::*;
pub use self::navigation::*;
pub use self::tracing::*;
