//! # routeprobe-std
//!
//! Standard implementations for the routeprobe route assertion toolkit.
//!
//! This crate provides:
//! - **Expected calls**: [`ExpectedCall`] and the one-shot argument evaluator
//! - **Verification**: [`Verifier`], the controller/action/parameter comparison
//! - **Fluent assertions**: [`RouteEngineExt`], [`RouteMatchExt`]
//! - **Reference engines**: [`HashMapEngine`], plus `MatchitEngine` and
//!   `PhfEngine` behind their features
//! - **Testing doubles**: [`testing::RecordingEngine`], [`testing::FixedEngine`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core contracts
pub use routeprobe_core;

// Modules
pub mod engines;
pub mod expected;
pub mod fluent;
pub mod lookup;
pub mod testing;
pub mod verify;

pub use engines::{HashMapEngine, HashMapEngineBuilder, MethodFilter, RouteTableBuilder};
pub use expected::{ExpectedCall, Resolution, evaluate};
pub use fluent::{RouteEngineExt, RouteMatchExt};
pub use lookup::resolve;
pub use verify::Verifier;

#[cfg(feature = "matchit")]
pub use engines::{MatchitEngine, MatchitEngineBuilder};

#[cfg(feature = "phf")]
pub use engines::{PhfEngine, StaticRoute};
