//! Config model
//!
//! The entities populated by the parser: one [`ServerBlock`] per `server { ... }`
//! section, owning one [`Route`] per nested `location <path> { ... }` section.
//! Routes are held by value; there is no back reference from a route to its
//! server.

pub mod route;
pub mod server;

pub use route::{Redirect, Route};
pub use server::ServerBlock;
