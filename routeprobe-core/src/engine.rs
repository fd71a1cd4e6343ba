//! # Routing Engine Contract
//!
//! routeprobe does not route anything itself. A [`RouteEngine`] is whatever
//! owns the route table; it is passed explicitly to every lookup, so there is
//! no process-wide registry to set up or tear down between tests.

use crate::{probe::RequestContext, route_match::RouteMatch};
use std::sync::Arc;

/// An external routing engine.
///
/// Returning `None` is the ordinary "no route matched" outcome, not an error.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a routing engine",
    label = "missing `RouteEngine` implementation",
    note = "Implement `RouteEngine` to let routeprobe drive your route table."
)]
pub trait RouteEngine {
    /// Match a request against the route table.
    fn match_route(&self, request: &dyn RequestContext) -> Option<RouteMatch>;
}

impl<T: RouteEngine + ?Sized> RouteEngine for &T {
    fn match_route(&self, request: &dyn RequestContext) -> Option<RouteMatch> {
        (**self).match_route(request)
    }
}

impl<T: RouteEngine + ?Sized> RouteEngine for Box<T> {
    fn match_route(&self, request: &dyn RequestContext) -> Option<RouteMatch> {
        (**self).match_route(request)
    }
}

impl<T: RouteEngine + ?Sized> RouteEngine for Arc<T> {
    fn match_route(&self, request: &dyn RequestContext) -> Option<RouteMatch> {
        (**self).match_route(request)
    }
}
