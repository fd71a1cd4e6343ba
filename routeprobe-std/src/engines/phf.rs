//! PHF-based engine implementation.
//!
//! Provides compile-time perfect hash map routing over exact paths.
//! This engine is immutable and must be constructed with a static map reference.

use routeprobe_core::{RequestContext, RouteEngine, RouteMatch, RouteValues};

/// A route fixed at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticRoute {
    values: &'static [(&'static str, &'static str)],
    ignore: bool,
}

impl StaticRoute {
    /// A route producing `values`.
    pub const fn new(values: &'static [(&'static str, &'static str)]) -> Self {
        Self {
            values,
            ignore: false,
        }
    }

    /// An ignored route.
    pub const fn ignored() -> Self {
        Self {
            values: &[],
            ignore: true,
        }
    }

    fn to_match(self) -> RouteMatch {
        if self.ignore {
            RouteMatch::stop_routing()
        } else {
            RouteMatch::new(self.values.iter().copied().collect::<RouteValues>())
        }
    }
}

/// An engine based on `phf::Map`, keyed by path (e.g. `/products`).
///
/// Method constraints are not supported.
pub struct PhfEngine {
    map: &'static phf::Map<&'static str, StaticRoute>,
}

impl PhfEngine {
    /// Create a new engine from a static PHF map.
    pub const fn new(map: &'static phf::Map<&'static str, StaticRoute>) -> Self {
        Self { map }
    }
}

impl RouteEngine for PhfEngine {
    fn match_route(&self, request: &dyn RequestContext) -> Option<RouteMatch> {
        self.map.get(request.path()).map(|route| route.to_match())
    }
}

// Note: RouteTableBuilder is not implemented for PhfEngine because PHF maps
// are constructed at compile time, not runtime.

#[cfg(test)]
mod tests {
    use super::*;
    use routeprobe_core::RouteProbe;

    static ROUTES: phf::Map<&'static str, StaticRoute> = phf::phf_map! {
        "/about" => StaticRoute::new(&[("controller", "Home"), ("action", "about")]),
        "/robots.txt" => StaticRoute::ignored(),
    };

    #[test]
    fn test_phf_engine() {
        let engine = PhfEngine::new(&ROUTES);

        let route = engine.match_route(&RouteProbe::new("~/about")).unwrap();
        assert_eq!(route.value("Action"), Some("about"));
        assert!(engine
            .match_route(&RouteProbe::new("~/robots.txt"))
            .unwrap()
            .handler()
            .is_stop_routing());
        assert!(engine.match_route(&RouteProbe::new("~/contact")).is_none());
    }
}
