//! # routeprobe - Route Assertions for Web Application Tests
//!
//! `routeprobe` answers one question inside a unit test: does this URL reach
//! this controller action with these arguments? It drives your routing engine
//! with a synthetic request and compares the returned route values against an
//! expected call written as ordinary Rust.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use routeprobe::prelude::*;
//!
//! pub struct ProductsController;
//!
//! #[routeprobe::controller]
//! impl ProductsController {
//!     pub fn show(&self, id: i32) {}
//!     pub fn list(&self, page: Option<u32>) {}
//! }
//!
//! let mut builder = HashMapEngine::builder();
//! builder.route("~/products/3", RouteValues::new()
//!     .with("controller", "Products")
//!     .with("action", "show")
//!     .with("id", "3"))?;
//! let engine = builder.build()?;
//!
//! engine
//!     .route("~/products/3")
//!     .assert_maps_to(expect_call!(ProductsController::show(3)));
//! ```
//!
//! ## Comparison Rules
//!
//! - The `Controller` suffix of the type name is stripped before comparing
//! - Route value keys are case-insensitive; controller and action values are not
//! - A nullable parameter treats a missing value and `""` as the same
//! - Parameters expected as dates compare by parsed instant, not by text
//!
//! # Features
//!
//! | Feature | Effect |
//! |---------|--------|
//! | `macros` (default) | `#[controller]` and `expect_call!` |
//! | `tracing` | Trace-level events for each verification step |
//! | `matchit` | `MatchitEngine` with `{param}` templates |
//! | `phf` | `PhfEngine` over compile-time maps |

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Generated code names `::routeprobe`, which must also resolve in this crate.
extern crate self as routeprobe;

pub use routeprobe_core::{
    // Controller descriptors
    ActionDescriptor,
    // Argument shapes
    ArgExpr,
    ArgValue,
    Controller,
    ParamDescriptor,
    // Probe
    RequestContext,
    Resolver,
    RouteArg,
    // Errors
    RouteAssertionError,
    // Engine contract
    RouteEngine,
    RouteHandler,
    RouteMatch,
    RouteProbe,
    RouteTableError,
    RouteValues,
    display_optional,
    get_value,
    keys_match,
};

pub use routeprobe_std::{
    // Expected calls
    ExpectedCall,
    // Reference engines
    HashMapEngine,
    HashMapEngineBuilder,
    MethodFilter,
    Resolution,
    // Fluent assertions
    RouteEngineExt,
    RouteMatchExt,
    RouteTableBuilder,
    // Verification
    Verifier,
    evaluate,
    resolve,
};

#[cfg(feature = "matchit")]
pub use routeprobe_std::{MatchitEngine, MatchitEngineBuilder};

#[cfg(feature = "phf")]
pub use routeprobe_std::{PhfEngine, StaticRoute};

/// Reference engine implementations.
pub mod engines {
    #![allow(clippy::wildcard_imports)]
    pub use routeprobe_std::engines::*;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use routeprobe_std::testing::*;
}

/// Prelude module - common imports for routeprobe.
///
/// # Usage
///
/// ```rust,ignore
/// use routeprobe::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        ArgExpr,
        Controller,
        ExpectedCall,
        HashMapEngine,
        MethodFilter,
        RouteAssertionError,
        RouteEngine,
        // Extension traits
        RouteEngineExt,
        RouteMatch,
        RouteMatchExt,
        RouteProbe,
        RouteTableBuilder,
        RouteValues,
        Verifier,
    };

    #[cfg(feature = "macros")]
    pub use crate::{controller, expect_call};
}

#[cfg(feature = "macros")]
pub use routeprobe_macros::{controller, expect_call};

pub use chrono;
pub use http;

#[cfg(feature = "phf")]
pub use phf;
