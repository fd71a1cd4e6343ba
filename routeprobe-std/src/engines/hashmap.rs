//! HashMap-based engine implementation.
//!
//! This is the default engine that requires no external dependencies.

use super::{MethodFilter, RouteEntry, RouteTableBuilder, RouteTarget, push_entry, select_entry};
use routeprobe_core::{RequestContext, RouteEngine, RouteMatch, RouteTableError, RouteValues};
use std::{collections::HashMap, iter};

/// Paths compare case-insensitively and ignore a trailing slash.
fn normalize(path: &str) -> String {
    let path = path.strip_prefix('~').unwrap_or(path);
    let trimmed = path.trim_end_matches('/');
    let mut key = String::with_capacity(trimmed.len() + 1);
    if !trimmed.starts_with('/') {
        key.push('/');
    }
    key.push_str(&trimmed.to_lowercase());
    key
}

/// An engine backed by `HashMap`, matching exact paths.
#[derive(Debug, Clone, Default)]
pub struct HashMapEngine {
    routes: HashMap<String, Vec<RouteEntry>>,
}

impl HashMapEngine {
    /// Start building an engine.
    pub fn builder() -> HashMapEngineBuilder {
        HashMapEngineBuilder::default()
    }

    /// Number of registered paths.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether no paths are registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl RouteEngine for HashMapEngine {
    fn match_route(&self, request: &dyn RequestContext) -> Option<RouteMatch> {
        let entries = self.routes.get(&normalize(request.path()))?;
        select_entry(entries, request.http_method()).map(|e| e.to_match(iter::empty()))
    }
}

/// Builder for [`HashMapEngine`].
#[derive(Debug, Default)]
pub struct HashMapEngineBuilder {
    routes: HashMap<String, Vec<RouteEntry>>,
    allow_duplicates: bool,
}

impl HashMapEngineBuilder {
    /// Allow duplicate registrations (later registrations override earlier ones).
    pub fn allow_duplicates(mut self) -> Self {
        self.allow_duplicates = true;
        self
    }

    fn insert(
        &mut self,
        path: &str,
        methods: MethodFilter,
        target: RouteTarget,
    ) -> Result<(), RouteTableError> {
        let key = normalize(path);
        let entries = self.routes.entry(key.clone()).or_default();
        push_entry(
            entries,
            &key,
            RouteEntry { methods, target },
            self.allow_duplicates,
        )
    }
}

impl RouteTableBuilder for HashMapEngineBuilder {
    type Engine = HashMapEngine;

    fn route_with_methods(
        &mut self,
        template: &str,
        methods: MethodFilter,
        values: RouteValues,
    ) -> Result<(), RouteTableError> {
        self.insert(template, methods, RouteTarget::Values(values))
    }

    fn ignore(&mut self, template: &str) -> Result<(), RouteTableError> {
        self.insert(template, MethodFilter::all(), RouteTarget::Ignore)
    }

    fn build(self) -> Result<Self::Engine, RouteTableError> {
        Ok(HashMapEngine {
            routes: self.routes,
        })
    }
}
