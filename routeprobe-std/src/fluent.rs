//! # Fluent Assertions
//!
//! Extension traits that read like the test they appear in:
//!
//! ```rust,ignore
//! engine
//!     .route("~/products/3")
//!     .assert_maps_to(expect_call!(ProductsController::show(3)))
//!     .assert_value("format", "html");
//!
//! engine.assert_ignored("~/favicon.ico");
//! ```
//!
//! Every `assert_*` method has a `check_*` twin returning the
//! [`RouteAssertionError`] instead of panicking. Both hand back the
//! [`RouteMatch`] on success so further assertions can be chained.

use crate::{expected::ExpectedCall, lookup::resolve, verify::Verifier};
use http::Method;
use routeprobe_core::{Controller, RouteAssertionError, RouteEngine, RouteMatch, RouteProbe};

#[track_caller]
fn pass_or_panic(result: Result<RouteMatch, RouteAssertionError>) -> RouteMatch {
    match result {
        Ok(route) => route,
        Err(err) => panic!("{err}"),
    }
}

/// Probing and engine-level assertions for any [`RouteEngine`].
pub trait RouteEngineExt: RouteEngine {
    /// Match `url` without constraining the HTTP method.
    fn route(&self, url: &str) -> Option<RouteMatch> {
        resolve(self, &RouteProbe::new(url))
    }

    /// Match `url` as a request with `method`.
    fn route_with_method(&self, url: &str, method: Method) -> Option<RouteMatch> {
        resolve(self, &RouteProbe::new(url).with_method(method))
    }

    /// Check that `url` resolves to the stop-routing handler.
    fn check_ignored(&self, url: &str) -> Result<RouteMatch, RouteAssertionError> {
        self.route(url).check_ignored()
    }

    /// Assert that `url` resolves to the stop-routing handler.
    #[track_caller]
    fn assert_ignored(&self, url: &str) -> RouteMatch {
        pass_or_panic(self.check_ignored(url))
    }

    /// Check that no route matches `url`.
    fn check_not_found(&self, url: &str) -> Result<(), RouteAssertionError> {
        match self.route(url) {
            None => Ok(()),
            Some(_) => Err(RouteAssertionError::UnexpectedMatch {
                url: url.to_owned(),
            }),
        }
    }

    /// Assert that no route matches `url`.
    #[track_caller]
    fn assert_not_found(&self, url: &str) {
        if let Err(err) = self.check_not_found(url) {
            panic!("{err}");
        }
    }
}

impl<E: RouteEngine + ?Sized> RouteEngineExt for E {}

/// Assertions on the result of a route lookup.
///
/// Implemented for [`RouteMatch`] (chained assertions) and
/// `Option<RouteMatch>` (the direct result of [`RouteEngineExt::route`]).
pub trait RouteMatchExt: Sized {
    /// Borrow the match, if there is one.
    fn as_route_match(&self) -> Option<&RouteMatch>;

    /// Take the match, if there is one.
    fn into_route_match(self) -> Option<RouteMatch>;

    /// Check controller, action and bound parameters with a custom verifier.
    fn check_maps_to_with(
        self,
        verifier: &Verifier,
        expected: ExpectedCall<'_>,
    ) -> Result<RouteMatch, RouteAssertionError> {
        verifier.verify(self.as_route_match(), expected)?;
        self.into_route_match()
            .ok_or(RouteAssertionError::NoRouteMatched)
    }

    /// Check controller, action and bound parameters.
    fn check_maps_to(self, expected: ExpectedCall<'_>) -> Result<RouteMatch, RouteAssertionError> {
        self.check_maps_to_with(&Verifier::default(), expected)
    }

    /// Assert controller, action and bound parameters.
    #[track_caller]
    fn assert_maps_to(self, expected: ExpectedCall<'_>) -> RouteMatch {
        pass_or_panic(self.check_maps_to(expected))
    }

    /// Check only the controller.
    fn check_maps_to_controller<C: Controller>(self) -> Result<RouteMatch, RouteAssertionError> {
        Verifier::default().verify_controller::<C>(self.as_route_match())?;
        self.into_route_match()
            .ok_or(RouteAssertionError::NoRouteMatched)
    }

    /// Assert only the controller.
    #[track_caller]
    fn assert_maps_to_controller<C: Controller>(self) -> RouteMatch {
        pass_or_panic(self.check_maps_to_controller::<C>())
    }

    /// Check one route value by case-insensitive key.
    fn check_value(self, key: &str, expected: &str) -> Result<RouteMatch, RouteAssertionError> {
        let route = self
            .into_route_match()
            .ok_or(RouteAssertionError::NoRouteMatched)?;
        let actual = route.value(key);
        if actual == Some(expected) {
            Ok(route)
        } else {
            Err(RouteAssertionError::ParameterMismatch {
                parameter: key.to_owned(),
                expected: Some(expected.to_owned()),
                actual: actual.map(str::to_owned),
            })
        }
    }

    /// Assert one route value by case-insensitive key.
    #[track_caller]
    fn assert_value(self, key: &str, expected: &str) -> RouteMatch {
        pass_or_panic(self.check_value(key, expected))
    }

    /// Check that the match is the stop-routing handler.
    fn check_ignored(self) -> Result<RouteMatch, RouteAssertionError> {
        Verifier::default().verify_ignored(self.as_route_match())?;
        self.into_route_match()
            .ok_or(RouteAssertionError::NoRouteMatched)
    }
}

impl RouteMatchExt for RouteMatch {
    fn as_route_match(&self) -> Option<&RouteMatch> {
        Some(self)
    }

    fn into_route_match(self) -> Option<RouteMatch> {
        Some(self)
    }
}

impl RouteMatchExt for Option<RouteMatch> {
    fn as_route_match(&self) -> Option<&RouteMatch> {
        self.as_ref()
    }

    fn into_route_match(self) -> Option<RouteMatch> {
        self
    }
}
