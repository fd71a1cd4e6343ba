//! # Match Verification
//!
//! [`Verifier`] compares a [`RouteMatch`] against an [`ExpectedCall`].
//!
//! Checks run controller, then action, then parameters left to right. The
//! first failure is returned and nothing after it runs.
//!
//! # Configuration
//!
//! | Option | Default | Effect |
//! |--------|---------|--------|
//! | [`controller_suffix`](Verifier::controller_suffix) | `"Controller"` | Stripped from the controller type name |
//! | [`lenient_arguments`](Verifier::lenient_arguments) | off | Unresolvable argument shapes compare as null instead of failing |

mod params;

pub use params::{check_parameter, parse_route_date};

use crate::expected::{ExpectedCall, Resolution, evaluate};
use routeprobe_core::{ArgValue, Controller, RouteAssertionError, RouteMatch};

/// The default suffix stripped from controller type names.
pub const CONTROLLER_SUFFIX: &str = "Controller";

/// Compares route matches against expected calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verifier {
    controller_suffix: &'static str,
    lenient_arguments: bool,
}

impl Default for Verifier {
    fn default() -> Self {
        Self {
            controller_suffix: CONTROLLER_SUFFIX,
            lenient_arguments: false,
        }
    }
}

impl Verifier {
    /// A verifier with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different suffix when deriving controller names.
    pub fn controller_suffix(mut self, suffix: &'static str) -> Self {
        self.controller_suffix = suffix;
        self
    }

    /// Compare unresolvable argument shapes as null instead of failing.
    pub fn lenient_arguments(mut self) -> Self {
        self.lenient_arguments = true;
        self
    }

    /// Derive the route controller name from a controller type name.
    ///
    /// `ProductsController` becomes `Products`. Names without the suffix are
    /// returned unchanged.
    pub fn controller_name<'n>(&self, type_name: &'n str) -> &'n str {
        type_name
            .strip_suffix(self.controller_suffix)
            .unwrap_or(type_name)
    }

    /// Verify controller, action and every bound parameter.
    pub fn verify(
        &self,
        route: Option<&RouteMatch>,
        expected: ExpectedCall<'_>,
    ) -> Result<(), RouteAssertionError> {
        let result = self.verify_call(route, expected);
        #[cfg(feature = "tracing")]
        if let Err(err) = &result {
            tracing::debug!(error = %err, "route verification failed");
        }
        result
    }

    fn verify_call(
        &self,
        route: Option<&RouteMatch>,
        expected: ExpectedCall<'_>,
    ) -> Result<(), RouteAssertionError> {
        let route = route.ok_or(RouteAssertionError::NoRouteMatched)?;
        self.check_controller(route, expected.controller_type())?;

        let action = expected.action()?;
        let actual_action = route.value("action");
        #[cfg(feature = "tracing")]
        tracing::trace!(expected = action.name(), actual = ?actual_action, "checking action");
        if actual_action != Some(action.name()) {
            return Err(RouteAssertionError::ActionMismatch {
                expected: action.name().to_owned(),
                actual: actual_action.map(str::to_owned),
            });
        }

        let params = action.params();
        if expected.arg_count() > params.len() {
            return Err(RouteAssertionError::ArgumentCountMismatch {
                action: action.method().to_owned(),
                expected: params.len(),
                actual: expected.arg_count(),
            });
        }

        // Zip stops at the shorter side; trailing parameters are unbound.
        for (param, arg) in params.iter().zip(expected.into_args()) {
            let value = match evaluate(arg) {
                Resolution::Value(value) => value,
                Resolution::Unbound => continue,
                Resolution::Unresolved { .. } if self.lenient_arguments => ArgValue::Null,
                Resolution::Unresolved { expression } => {
                    return Err(RouteAssertionError::UnresolvedArgument {
                        parameter: param.name().to_owned(),
                        expression,
                    });
                }
            };
            let actual = route.value(param.name());
            #[cfg(feature = "tracing")]
            tracing::trace!(parameter = param.name(), expected = %value, actual = ?actual, "checking parameter");
            check_parameter(param, &value, actual)?;
        }

        Ok(())
    }

    /// Verify only the controller.
    pub fn verify_controller<C: Controller>(
        &self,
        route: Option<&RouteMatch>,
    ) -> Result<(), RouteAssertionError> {
        let route = route.ok_or(RouteAssertionError::NoRouteMatched)?;
        self.check_controller(route, C::TYPE_NAME)
    }

    /// Verify that the route is handled by the stop-routing sentinel.
    pub fn verify_ignored(&self, route: Option<&RouteMatch>) -> Result<(), RouteAssertionError> {
        let route = route.ok_or(RouteAssertionError::NoRouteMatched)?;
        if route.handler().is_stop_routing() {
            Ok(())
        } else {
            Err(RouteAssertionError::NotIgnored)
        }
    }

    // The lookup ignores case; the comparison itself does not.
    fn check_controller(
        &self,
        route: &RouteMatch,
        type_name: &str,
    ) -> Result<(), RouteAssertionError> {
        let expected = self.controller_name(type_name);
        let actual = route.value("controller");
        #[cfg(feature = "tracing")]
        tracing::trace!(expected, actual = ?actual, "checking controller");
        if actual == Some(expected) {
            Ok(())
        } else {
            Err(RouteAssertionError::ControllerMismatch {
                expected: expected.to_owned(),
                actual: actual.map(str::to_owned),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use routeprobe_core::{
        ActionDescriptor, ArgExpr, ParamDescriptor, RouteHandler, RouteValues,
    };

    struct ProductsController;

    impl Controller for ProductsController {
        const TYPE_NAME: &'static str = "ProductsController";
        const ACTIONS: &'static [ActionDescriptor] = &[
            ActionDescriptor::new("show", &[ParamDescriptor::new("id", "i32", false)]),
            ActionDescriptor::new(
                "page",
                &[
                    ParamDescriptor::new("category", "String", false),
                    ParamDescriptor::new("page", "Option<u32>", true),
                ],
            ),
        ];
    }

    fn products(action: &str) -> RouteValues {
        RouteValues::new()
            .with("controller", "Products")
            .with("action", action)
    }

    fn show(id: i32) -> ExpectedCall<'static> {
        ExpectedCall::for_controller::<ProductsController>("show").arg(ArgExpr::literal(&id))
    }

    #[test]
    fn test_full_match() {
        let route = RouteMatch::new(products("show").with("id", "3"));
        assert!(Verifier::new().verify(Some(&route), show(3)).is_ok());
    }

    #[test]
    fn test_no_route() {
        assert_eq!(
            Verifier::new().verify(None, show(3)),
            Err(RouteAssertionError::NoRouteMatched)
        );
    }

    #[test]
    fn test_controller_suffix_is_stripped() {
        let verifier = Verifier::new();
        assert_eq!(verifier.controller_name("ProductsController"), "Products");
        assert_eq!(verifier.controller_name("Home"), "Home");

        for actual in ["Product", "ProductsController"] {
            let route = RouteMatch::new(
                RouteValues::new().with("controller", actual).with("action", "show"),
            );
            assert_eq!(
                verifier.verify_controller::<ProductsController>(Some(&route)),
                Err(RouteAssertionError::ControllerMismatch {
                    expected: "Products".into(),
                    actual: Some(actual.into()),
                })
            );
        }
    }

    #[test]
    fn test_controller_comparison_is_case_sensitive() {
        let route = RouteMatch::new(
            RouteValues::new().with("CONTROLLER", "products").with("action", "show"),
        );
        let err = Verifier::new()
            .verify_controller::<ProductsController>(Some(&route))
            .unwrap_err();
        assert!(matches!(err, RouteAssertionError::ControllerMismatch { .. }));
    }

    #[test]
    fn test_custom_suffix() {
        let route = RouteMatch::new(products("show"));
        let verifier = Verifier::new().controller_suffix("sController");
        assert!(verifier.verify_controller::<ProductsController>(Some(&route)).is_err());
        assert_eq!(verifier.controller_name("ProductsController"), "Product");
    }

    #[test]
    fn test_action_mismatch_stops_before_parameters() {
        let route = RouteMatch::new(products("list").with("id", "999"));
        assert_eq!(
            Verifier::new().verify(Some(&route), show(3)),
            Err(RouteAssertionError::ActionMismatch {
                expected: "show".into(),
                actual: Some("list".into()),
            })
        );
    }

    #[test]
    fn test_parameter_mismatch() {
        let route = RouteMatch::new(products("show").with("id", "4"));
        assert_eq!(
            Verifier::new().verify(Some(&route), show(3)),
            Err(RouteAssertionError::ParameterMismatch {
                parameter: "id".into(),
                expected: Some("3".into()),
                actual: Some("4".into()),
            })
        );
    }

    #[test]
    fn test_first_parameter_failure_wins() {
        let route = RouteMatch::new(products("page").with("category", "toys").with("page", "2"));
        let expected = ExpectedCall::for_controller::<ProductsController>("page")
            .arg(ArgExpr::literal("books"))
            .arg(ArgExpr::literal(&Some(9u32)));

        let err = Verifier::new().verify(Some(&route), expected).unwrap_err();
        assert!(matches!(
            err,
            RouteAssertionError::ParameterMismatch { ref parameter, .. } if parameter == "category"
        ));
    }

    #[test]
    fn test_unbound_and_missing_parameters_are_skipped() {
        let route = RouteMatch::new(products("page").with("category", "toys").with("page", "2"));

        let expected = ExpectedCall::for_controller::<ProductsController>("page")
            .arg(ArgExpr::unbound())
            .arg(ArgExpr::literal(&2));
        assert!(Verifier::new().verify(Some(&route), expected).is_ok());

        let expected =
            ExpectedCall::for_controller::<ProductsController>("page").arg(ArgExpr::literal("toys"));
        assert!(Verifier::new().verify(Some(&route), expected).is_ok());
    }

    #[test]
    fn test_too_many_arguments() {
        let route = RouteMatch::new(products("show").with("id", "3"));
        let expected = show(3).arg(ArgExpr::literal(&4));
        assert_eq!(
            Verifier::new().verify(Some(&route), expected),
            Err(RouteAssertionError::ArgumentCountMismatch {
                action: "show".into(),
                expected: 1,
                actual: 2,
            })
        );
    }

    #[test]
    fn test_opaque_argument_strict_and_lenient() {
        let route = RouteMatch::new(products("page").with("category", "toys"));
        let opaque = || {
            ExpectedCall::for_controller::<ProductsController>("page")
                .arg(ArgExpr::literal("toys"))
                .arg(ArgExpr::opaque("page_of(x)"))
        };

        assert_eq!(
            Verifier::new().verify(Some(&route), opaque()),
            Err(RouteAssertionError::UnresolvedArgument {
                parameter: "page".into(),
                expression: "page_of(x)".into(),
            })
        );
        assert!(Verifier::new().lenient_arguments().verify(Some(&route), opaque()).is_ok());
    }

    #[test]
    fn test_verify_ignored() {
        let ignored = RouteMatch::stop_routing();
        let endpoint = RouteMatch::new(products("show")).with_handler(RouteHandler::endpoint("mvc"));

        assert!(Verifier::new().verify_ignored(Some(&ignored)).is_ok());
        assert_eq!(
            Verifier::new().verify_ignored(Some(&endpoint)),
            Err(RouteAssertionError::NotIgnored)
        );
        assert_eq!(
            Verifier::new().verify_ignored(None),
            Err(RouteAssertionError::NoRouteMatched)
        );
    }
}
