//! Testing utilities for routeprobe.
//!
//! This module provides engine doubles for exercising assertions without a
//! real route table.
//!
//! # Features
//!
//! - [`FixedEngine`]: Answers every probe with the same configured result
//! - [`RecordingEngine`]: Records every probe it sees and delegates to an inner engine

use routeprobe_core::{RequestContext, RouteEngine, RouteMatch, RouteProbe};
use std::sync::{Arc, Mutex, PoisonError};

// ============================================================================
// Fixed Engine
// ============================================================================

/// An engine that returns the same result for every probe.
///
/// # Example
///
/// ```rust,ignore
/// let engine = FixedEngine::matching(RouteMatch::stop_routing());
/// engine.assert_ignored("~/anything");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FixedEngine {
    result: Option<RouteMatch>,
}

impl FixedEngine {
    /// Always match with `route`.
    pub fn matching(route: RouteMatch) -> Self {
        Self {
            result: Some(route),
        }
    }

    /// Never match.
    pub fn unmatched() -> Self {
        Self { result: None }
    }
}

impl RouteEngine for FixedEngine {
    fn match_route(&self, _request: &dyn RequestContext) -> Option<RouteMatch> {
        self.result.clone()
    }
}

// ============================================================================
// Recording Engine
// ============================================================================

/// An engine wrapper that records every probe it receives.
///
/// Clones share the same record, so a clone can be handed to the code under
/// test while the original is inspected afterwards.
///
/// # Example
///
/// ```rust,ignore
/// let engine = RecordingEngine::new(table);
/// engine.route_with_method("~/products", Method::POST);
///
/// assert_eq!(engine.probes()[0].method(), Some("POST"));
/// ```
pub struct RecordingEngine<E> {
    inner: E,
    probes: Arc<Mutex<Vec<RouteProbe>>>,
}

impl<E> RecordingEngine<E> {
    /// Wrap `inner`.
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            probes: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// The probes seen so far, in order.
    pub fn probes(&self) -> Vec<RouteProbe> {
        self.probes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of probes seen.
    pub fn count(&self) -> usize {
        self.probes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Forget recorded probes.
    pub fn clear(&self) {
        self.probes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// The wrapped engine.
    pub fn inner(&self) -> &E {
        &self.inner
    }
}

impl<E: Clone> Clone for RecordingEngine<E> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            probes: self.probes.clone(),
        }
    }
}

impl<E: RouteEngine> RouteEngine for RecordingEngine<E> {
    fn match_route(&self, request: &dyn RequestContext) -> Option<RouteMatch> {
        self.probes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RouteProbe::from_context(request));
        self.inner.match_route(request)
    }
}
