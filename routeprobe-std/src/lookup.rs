//! Route lookup.

use routeprobe_core::{RouteEngine, RouteMatch, RouteProbe};

/// Ask `engine` to match `probe`.
///
/// `None` is the valid "no route matched" outcome; assertions built on top of
/// this report it as [`NoRouteMatched`](routeprobe_core::RouteAssertionError::NoRouteMatched).
pub fn resolve<E: RouteEngine + ?Sized>(engine: &E, probe: &RouteProbe) -> Option<RouteMatch> {
    let matched = engine.match_route(probe);
    #[cfg(feature = "tracing")]
    {
        tracing::debug!(
            url = probe.url(),
            method = ?probe.method(),
            matched = matched.is_some(),
            "resolved route probe"
        );
    }
    matched
}
