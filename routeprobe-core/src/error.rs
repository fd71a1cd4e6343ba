//! Error types for routeprobe.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`RouteAssertionError`] - Every way a route assertion can fail
//! - [`RouteTableError`] - Errors building a reference route table

use thiserror::Error;

/// Render an optional route value for diagnostics.
pub fn display_optional(value: Option<&str>) -> &str {
    value.unwrap_or("(null)")
}

/// A failed route assertion.
///
/// Every check fails fast: the first mismatch is reported and the remaining
/// checks of that assertion do not run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteAssertionError {
    /// The engine returned no match.
    #[error("The URL did not match any route.")]
    NoRouteMatched,

    /// The `controller` route value differs from the expected controller.
    #[error("Expected controller `{expected}`, but was `{}`.", display_optional(.actual.as_deref()))]
    ControllerMismatch {
        /// Controller name derived from the expected type.
        expected: String,
        /// The `controller` route value.
        actual: Option<String>,
    },

    /// The `action` route value differs from the expected action.
    #[error("Expected action `{expected}`, but was `{}`.", display_optional(.actual.as_deref()))]
    ActionMismatch {
        /// The expected action name.
        expected: String,
        /// The `action` route value.
        actual: Option<String>,
    },

    /// A parameter route value differs from the expected argument.
    #[error(
        "Parameter `{parameter}`: expected `{}`, but was `{}`.",
        display_optional(.expected.as_deref()),
        display_optional(.actual.as_deref())
    )]
    ParameterMismatch {
        /// The parameter name.
        parameter: String,
        /// The resolved expected value.
        expected: Option<String>,
        /// The route value.
        actual: Option<String>,
    },

    /// The matched handler is not the stop-routing sentinel.
    #[error("Expected a stop-routing handler, but wasn't.")]
    NotIgnored,

    /// A route matched where none was expected.
    #[error("Expected no route to match `{url}`, but one did.")]
    UnexpectedMatch {
        /// The probed URL.
        url: String,
    },

    /// The expected call names a method the controller does not describe.
    #[error("Controller `{controller}` has no action method `{action}`.")]
    UnknownAction {
        /// The controller type name.
        controller: String,
        /// The method name.
        action: String,
    },

    /// The expected call supplies the wrong number of arguments.
    #[error("Action `{action}` takes {expected} argument(s), but {actual} were supplied.")]
    ArgumentCountMismatch {
        /// The method name.
        action: String,
        /// Number of formal parameters.
        expected: usize,
        /// Number of supplied arguments.
        actual: usize,
    },

    /// An argument expression has a shape whose value cannot be resolved.
    #[error("Cannot resolve the expected value of parameter `{parameter}` from `{expression}`.")]
    UnresolvedArgument {
        /// The parameter name.
        parameter: String,
        /// The expression as written.
        expression: String,
    },
}

/// Errors building a reference route table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteTableError {
    /// A route was registered twice.
    #[error("duplicate route: {0}")]
    DuplicateRoute(String),

    /// The route template was rejected by the backend.
    #[error("invalid route template `{template}`: {reason}")]
    InvalidTemplate {
        /// The template.
        template: String,
        /// Backend message.
        reason: String,
    },
}
