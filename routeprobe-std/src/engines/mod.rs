//! # Reference Engines
//!
//! routeprobe treats the routing engine as a black box. These adapters wrap
//! existing lookup structures so tests have a concrete route table to probe:
//!
//! | Engine | Backend | Templates |
//! |--------|---------|-----------|
//! | [`HashMapEngine`] | `HashMap` | Exact paths only |
//! | `MatchitEngine` | `matchit` (feature `matchit`) | `{param}` and `{*rest}` |
//! | `PhfEngine` | `phf` (feature `phf`) | Exact paths, fixed at compile time |
//!
//! Every engine supports ignore entries, which answer with the stop-routing
//! sentinel, and per-route [`MethodFilter`]s. A probe without a method is
//! never rejected by a filter.

mod hashmap;
#[cfg(feature = "matchit")]
mod matchit;
#[cfg(feature = "phf")]
mod phf;

pub use hashmap::{HashMapEngine, HashMapEngineBuilder};
#[cfg(feature = "matchit")]
pub use self::matchit::{MatchitEngine, MatchitEngineBuilder};
#[cfg(feature = "phf")]
pub use self::phf::{PhfEngine, StaticRoute};

use bitflags::bitflags;
use routeprobe_core::{RouteMatch, RouteTableError, RouteValues};

bitflags! {
    /// The HTTP methods a route accepts.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MethodFilter: u16 {
        /// `GET`
        const GET = 1 << 0;
        /// `POST`
        const POST = 1 << 1;
        /// `PUT`
        const PUT = 1 << 2;
        /// `DELETE`
        const DELETE = 1 << 3;
        /// `PATCH`
        const PATCH = 1 << 4;
        /// `HEAD`
        const HEAD = 1 << 5;
        /// `OPTIONS`
        const OPTIONS = 1 << 6;
        /// `TRACE`
        const TRACE = 1 << 7;
        /// `CONNECT`
        const CONNECT = 1 << 8;
    }
}

impl MethodFilter {
    /// The flag for a canonical method name.
    pub fn from_method(method: &str) -> Option<Self> {
        Some(match method {
            "GET" => Self::GET,
            "POST" => Self::POST,
            "PUT" => Self::PUT,
            "DELETE" => Self::DELETE,
            "PATCH" => Self::PATCH,
            "HEAD" => Self::HEAD,
            "OPTIONS" => Self::OPTIONS,
            "TRACE" => Self::TRACE,
            "CONNECT" => Self::CONNECT,
            _ => return None,
        })
    }

    /// Whether a request with `method` passes this filter.
    ///
    /// No method always passes. Extension methods only pass a filter that
    /// accepts every method.
    pub fn accepts(&self, method: Option<&str>) -> bool {
        match method {
            None => true,
            Some(m) => match Self::from_method(m) {
                Some(flag) => self.contains(flag),
                None => self.is_all(),
            },
        }
    }
}

/// What a registered route resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RouteTarget {
    Values(RouteValues),
    Ignore,
}

/// One registration under a path or template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RouteEntry {
    pub(crate) methods: MethodFilter,
    pub(crate) target: RouteTarget,
}

impl RouteEntry {
    /// Build the match for this entry, layering captured parameters over the
    /// registered defaults.
    pub(crate) fn to_match<'p>(&self, params: impl IntoIterator<Item = (&'p str, &'p str)>) -> RouteMatch {
        match &self.target {
            RouteTarget::Ignore => RouteMatch::stop_routing(),
            RouteTarget::Values(defaults) => {
                let mut values = defaults.clone();
                values.extend(params);
                RouteMatch::new(values)
            }
        }
    }
}

/// Add `entry` to the registrations of one path.
///
/// Overlapping method filters are rejected unless duplicates are allowed, in
/// which case the newest registration wins.
pub(crate) fn push_entry(
    entries: &mut Vec<RouteEntry>,
    key: &str,
    entry: RouteEntry,
    allow_duplicates: bool,
) -> Result<(), RouteTableError> {
    if entries.iter().any(|e| e.methods.intersects(entry.methods)) {
        if !allow_duplicates {
            return Err(RouteTableError::DuplicateRoute(key.to_owned()));
        }
        entries.insert(0, entry);
    } else {
        entries.push(entry);
    }
    Ok(())
}

/// The first registration accepting `method`.
pub(crate) fn select_entry<'e>(entries: &'e [RouteEntry], method: Option<&str>) -> Option<&'e RouteEntry> {
    entries.iter().find(|e| e.methods.accepts(method))
}

/// Common construction interface of the reference engines.
///
/// This trait allows tests to fill different engines through one helper.
pub trait RouteTableBuilder: Default {
    /// The engine this builder produces.
    type Engine;

    /// Register a route accepting every method.
    fn route(&mut self, template: &str, values: RouteValues) -> Result<(), RouteTableError> {
        self.route_with_methods(template, MethodFilter::all(), values)
    }

    /// Register a route accepting only `methods`.
    fn route_with_methods(
        &mut self,
        template: &str,
        methods: MethodFilter,
        values: RouteValues,
    ) -> Result<(), RouteTableError>;

    /// Register an ignored route.
    fn ignore(&mut self, template: &str) -> Result<(), RouteTableError>;

    /// Build the engine, consuming the builder.
    fn build(self) -> Result<Self::Engine, RouteTableError>;
}
