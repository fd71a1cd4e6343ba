//! The answer a routing engine gives to a probe.

use crate::values::RouteValues;
use std::borrow::Cow;

/// The handler a matched route dispatches to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RouteHandler {
    /// The engine deliberately ignores the URL; no controller runs.
    StopRouting,
    /// A regular endpoint, identified by name.
    Endpoint(Cow<'static, str>),
}

impl RouteHandler {
    /// A regular endpoint handler.
    pub fn endpoint(name: impl Into<Cow<'static, str>>) -> Self {
        RouteHandler::Endpoint(name.into())
    }

    /// Returns true for the stop-routing sentinel.
    pub fn is_stop_routing(&self) -> bool {
        matches!(self, RouteHandler::StopRouting)
    }
}

impl Default for RouteHandler {
    fn default() -> Self {
        RouteHandler::Endpoint(Cow::Borrowed("mvc"))
    }
}

/// A route matched by an engine.
///
/// Read-only from the point of view of the assertions; engines build it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteMatch {
    values: RouteValues,
    handler: RouteHandler,
}

impl RouteMatch {
    /// A match dispatching to the default endpoint handler.
    pub fn new(values: RouteValues) -> Self {
        Self {
            values,
            handler: RouteHandler::default(),
        }
    }

    /// A match carrying the stop-routing sentinel.
    pub fn stop_routing() -> Self {
        Self {
            values: RouteValues::new(),
            handler: RouteHandler::StopRouting,
        }
    }

    /// Replace the handler.
    pub fn with_handler(mut self, handler: RouteHandler) -> Self {
        self.handler = handler;
        self
    }

    /// The route values.
    pub fn values(&self) -> &RouteValues {
        &self.values
    }

    /// The matched handler.
    pub fn handler(&self) -> &RouteHandler {
        &self.handler
    }

    /// Case-insensitive shorthand for `self.values().get(key)`.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key)
    }
}
