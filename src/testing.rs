//! Testing utilities for parsed configurations
//!
//! # Parser Testing Guidelines
//!
//! Parser tests should use two tools together:
//!
//! 1. **[Fixtures](fixtures::Fixtures)** for configuration sources kept under
//!    `tests/fixtures/`, so that a sample is written (and reviewed) once.
//! 2. **[assert_servers]** for verifying the parsed model with a fluent API.
//!
//! Asserting only counts is not informative. Check the fields a test is about,
//! down to the routes:
//!
//! ```rust-example
//! use servconf::testing::{assert_servers, fixtures::Fixtures};
//!
//! let servers = Fixtures::parse("basic");
//!
//! assert_servers(&servers).server_count(1).server(0, |server| {
//!     server
//!         .port(8080)
//!         .name("example.com")
//!         .route_count(1)
//!         .route(0, |route| {
//!             route.path("/static").index_file("static.html");
//!         });
//! });
//! ```
//!
//! Inline sources are fine for small, targeted cases (one directive, one edge
//! case), where a fixture file would hide what is being tested.

pub mod assertions;
pub mod fixtures;

pub use assertions::{assert_servers, RouteAssertion, ServerAssertion, ServersAssertion};
pub use fixtures::Fixtures;
