//! # routeprobe-core
//!
//! Core contracts for the routeprobe route assertion toolkit.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! routing engine adapters that only need to speak the probe/match contract
//! without pulling in the verification machinery of `routeprobe-std`.
//!
//! # Two Facets
//!
//! routeprobe drives an existing routing engine with a synthetic request and
//! asserts on what comes back. The contracts for both sides live here.
//!
//! ## Probe Construction ([`RouteProbe`], [`RequestContext`])
//!
//! A [`RouteProbe`] is a minimal test double carrying an application-relative
//! URL and an optional HTTP method. Engines consume it through the
//! [`RequestContext`] trait and never see anything else.
//!
//! ## Match Verification ([`RouteMatch`], [`Controller`], [`ArgExpr`])
//!
//! A [`RouteEngine`] answers a probe with an optional [`RouteMatch`]: a bag of
//! loosely-typed [`RouteValues`] plus a [`RouteHandler`]. The expected side is
//! described statically through [`Controller`] descriptors and per-argument
//! [`ArgExpr`] shapes, which `routeprobe-std` compares against the match.
//!
//! # Error Types
//!
//! - [`RouteAssertionError`] - Every assertion failure
//! - [`RouteTableError`] - Reference engine construction errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod arg;
mod controller;
mod engine;
mod error;
mod probe;
mod route_match;
mod values;

// Re-exports
pub use arg::{ArgExpr, ArgValue, Resolver, RouteArg};
pub use controller::{ActionDescriptor, Controller, ParamDescriptor};
pub use engine::RouteEngine;
pub use error::{RouteAssertionError, RouteTableError, display_optional};
pub use probe::{RequestContext, RouteProbe};
pub use route_match::{RouteHandler, RouteMatch};
pub use values::{RouteValues, get_value, keys_match};
