//! Matchit-based engine implementation.
//!
//! Provides parameter and catch-all templates (e.g. `/products/{id}`,
//! `/files/{*path}`). Captured parameters become route values, layered over
//! the values registered with the route.

use super::{MethodFilter, RouteEntry, RouteTableBuilder, RouteTarget, push_entry, select_entry};
use matchit::{Match, Router as InnerRouter};
use routeprobe_core::{RequestContext, RouteEngine, RouteMatch, RouteTableError, RouteValues};

/// An engine based on `matchit`.
pub struct MatchitEngine {
    router: InnerRouter<Vec<RouteEntry>>,
}

impl MatchitEngine {
    /// Start building an engine.
    pub fn builder() -> MatchitEngineBuilder {
        MatchitEngineBuilder::default()
    }
}

impl RouteEngine for MatchitEngine {
    fn match_route(&self, request: &dyn RequestContext) -> Option<RouteMatch> {
        let Match { value, params } = self.router.at(request.path()).ok()?;
        select_entry(value, request.http_method()).map(|e| e.to_match(params.iter()))
    }
}

/// Builder for [`MatchitEngine`].
///
/// Registrations are grouped per template and handed to `matchit` on
/// [`build`](RouteTableBuilder::build), so template conflicts surface there.
#[derive(Debug, Default)]
pub struct MatchitEngineBuilder {
    templates: Vec<(String, Vec<RouteEntry>)>,
}

impl MatchitEngineBuilder {
    fn insert(
        &mut self,
        template: &str,
        methods: MethodFilter,
        target: RouteTarget,
    ) -> Result<(), RouteTableError> {
        let template = template.strip_prefix('~').unwrap_or(template);
        let index = match self.templates.iter().position(|(t, _)| t == template) {
            Some(index) => index,
            None => {
                self.templates.push((template.to_owned(), Vec::new()));
                self.templates.len() - 1
            }
        };
        let (key, entries) = &mut self.templates[index];
        push_entry(entries, key, RouteEntry { methods, target }, false)
    }
}

impl RouteTableBuilder for MatchitEngineBuilder {
    type Engine = MatchitEngine;

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
        let mut router = InnerRouter::new();
        for (template, entries) in self.templates {
            router
                .insert(template.clone(), entries)
                .map_err(|e| RouteTableError::InvalidTemplate {
                    template,
                    reason: e.to_string(),
                })?;
        }
        Ok(MatchitEngine { router })
    }
}
