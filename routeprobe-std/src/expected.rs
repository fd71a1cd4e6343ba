//! # Expected Calls
//!
//! An [`ExpectedCall`] is the statically described outcome a test expects:
//! "this controller, this action method, these arguments". It is usually
//! produced by `expect_call!`, which records each argument's expression shape,
//! but can be assembled by hand:
//!
//! ```rust,ignore
//! let expected = ExpectedCall::for_controller::<ProductsController>("show")
//!     .arg(ArgExpr::literal(&3));
//! ```
//!
//! The descriptor lookup is deferred to verification so that a misspelled
//! method surfaces as an ordinary assertion failure.

use routeprobe_core::{ActionDescriptor, ArgExpr, ArgValue, Controller, RouteAssertionError};
use std::borrow::Cow;

/// The outcome of evaluating one argument expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The expression produced a value.
    Value(ArgValue),
    /// The parameter is not bound by the expected call and is not checked.
    Unbound,
    /// The expression shape has no resolvable value.
    Unresolved {
        /// The expression as written.
        expression: String,
    },
}

/// Evaluate an argument expression exactly once.
///
/// Conversions are unwrapped first, so `Some(x)` resolves through `x`.
/// Literals are used directly; field reads and constructions run their
/// resolver; any other shape is reported as [`Resolution::Unresolved`].
pub fn evaluate(expr: ArgExpr<'_>) -> Resolution {
    match expr {
        ArgExpr::Convert(inner) => evaluate(*inner),
        ArgExpr::Literal(value) => Resolution::Value(value),
        ArgExpr::FieldAccess { read, .. } => Resolution::Value(read()),
        ArgExpr::Constructed { build, .. } => Resolution::Value(build()),
        ArgExpr::Opaque { source } => Resolution::Unresolved {
            expression: source.into_owned(),
        },
        ArgExpr::Unbound => Resolution::Unbound,
    }
}

/// An expected controller action invocation.
#[derive(Debug)]
pub struct ExpectedCall<'a> {
    controller: &'static str,
    actions: &'static [ActionDescriptor],
    method: Cow<'static, str>,
    args: Vec<ArgExpr<'a>>,
}

impl<'a> ExpectedCall<'a> {
    /// Expect a call to `method` on `C`, with the given arguments in order.
    pub fn new<C: Controller>(method: impl Into<Cow<'static, str>>, args: Vec<ArgExpr<'a>>) -> Self {
        Self {
            controller: C::TYPE_NAME,
            actions: C::ACTIONS,
            method: method.into(),
            args,
        }
    }

    /// Expect a call to `method` on `C`; add arguments with [`arg`](Self::arg).
    pub fn for_controller<C: Controller>(method: impl Into<Cow<'static, str>>) -> Self {
        Self::new::<C>(method, Vec::new())
    }

    /// Append the next positional argument.
    pub fn arg(mut self, arg: ArgExpr<'a>) -> Self {
        self.args.push(arg);
        self
    }

    /// The expected controller's type name.
    pub fn controller_type(&self) -> &'static str {
        self.controller
    }

    /// The expected method name.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Number of supplied arguments.
    pub fn arg_count(&self) -> usize {
        self.args.len()
    }

    /// Find the descriptor of the expected method.
    pub fn action(&self) -> Result<&'static ActionDescriptor, RouteAssertionError> {
        self.actions
            .iter()
            .find(|a| a.method() == self.method)
            .ok_or_else(|| RouteAssertionError::UnknownAction {
                controller: self.controller.to_owned(),
                action: self.method.to_string(),
            })
    }

    pub(crate) fn into_args(self) -> Vec<ArgExpr<'a>> {
        self.args
    }
}
