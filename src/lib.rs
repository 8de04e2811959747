//! # IMS Client
//!
//! > **The client-side workflow of an inventory management system.**
//!
//! This crate implements the logic a mobile or desktop front end needs to
//! drive an inventory management API: logging in, registering accounts,
//! loading a filtered product snapshot, and resolving stock transactions
//! (collect, add stock, donate) plus admin actions (archive toggle,
//! permanent delete) against a remote HTTP server.
//!
//! ## Design Philosophy
//!
//! ### Why a transport trait?
//!
//! Every service in this crate talks to the server through the
//! [`Transport`](transport::Transport) trait rather than a concrete HTTP
//! client. This gives us:
//! - **Testability**: the whole workflow runs against
//!   [`MockTransport`](transport::MockTransport) with scripted responses.
//! - **Isolation**: validation logic never depends on `reqwest` types.
//! - **One seam**: bearer-token attachment lives in one place
//!   ([`HttpTransport`](transport::HttpTransport)), not sprinkled across
//!   call sites.
//!
//! ### Validate at construction
//!
//! The three stock actions are a tagged union,
//! [`StockAction`](inventory::StockAction), with one validating constructor
//! per variant. If a `StockAction` exists, its inputs already passed local
//! validation; the resolver only has to check snapshot preconditions
//! (does the sku exist, is there stock left) before issuing the mutation.
//! Invalid input never reaches the network.
//!
//! ### Explicit session context
//!
//! The bearer token is held in an explicit [`Session`](transport::Session)
//! handle with `set_token`/`clear` operations, shared by clone with the
//! transport. There is no hidden global default header.
//!
//! ## Module Tour
//!
//! ### 1. The Seam ([`transport`])
//! The [`Transport`](transport::Transport) trait, its `reqwest`-backed
//! implementation, the [`Session`](transport::Session) token context, and
//! the mock used by every test.
//!
//! ### 2. The Data ([`model`])
//! Wire and domain types: [`Product`](model::Product) with quantity-key
//! normalization, credentials, token and registration payloads.
//!
//! ### 3. The Core ([`inventory`])
//! The snapshot loader and the transaction resolver, the only part of the
//! system with real branching. Start here if you want the interesting bits.
//!
//! ### 4. The Edges ([`session`], [`register`], [`admin`])
//! Token exchange, account registration, and confirmation-gated admin
//! mutations.
//!
//! ### 5. The Glue ([`dashboard`], [`lifecycle`])
//! Form state, notification fan-out, and the [`ImsApp`](lifecycle::ImsApp)
//! orchestrator that wires everything together.
//!
//! ## Quick Start
//!
//! ```ignore
//! let navigator = Arc::new(MyNavigator::new());
//! let notifier = Arc::new(MyNotifier::new());
//! let mut app = ImsApp::new("http://localhost:8000", navigator, notifier);
//!
//! app.login("alice", "hunter2").await;
//! app.dashboard.refresh().await;
//! app.dashboard.set_sku_input("TOOL-00042");
//! app.dashboard.submit_stock_action().await;
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod admin;
pub mod dashboard;
pub mod inventory;
pub mod lifecycle;
pub mod model;
pub mod register;
pub mod session;
pub mod transport;
