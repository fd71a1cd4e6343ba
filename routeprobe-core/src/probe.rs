//! # Probe Construction
//!
//! The synthetic request handed to a routing engine.
//!
//! A routing engine only needs two things from a request to match it: the
//! application-relative path and the HTTP method. [`RequestContext`] is that
//! contract, and [`RouteProbe`] is the one in-memory implementation tests use.
//! No URL validation happens here; an invalid URL simply fails to match
//! downstream.

use http::Method;

/// What a routing engine may read from a request.
pub trait RequestContext {
    /// The application-relative path, as supplied (e.g. `~/products/3`).
    fn app_relative_path(&self) -> &str;

    /// The HTTP method in canonical uppercase form, if the request carries one.
    ///
    /// `None` means matching must not be constrained by method.
    fn http_method(&self) -> Option<&str>;

    /// The path with the application-root marker removed.
    ///
    /// `~/products/3` becomes `/products/3`; `~` alone and the empty string
    /// become `/`. Paths without the marker are returned unchanged.
    fn path(&self) -> &str {
        let raw = self.app_relative_path();
        let path = raw.strip_prefix('~').unwrap_or(raw);
        if path.is_empty() { "/" } else { path }
    }
}

/// A minimal request carrying a URL and an optional method.
///
/// Created and discarded within a single assertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteProbe {
    url: String,
    method: Option<String>,
}

impl RouteProbe {
    /// Probe `url` without constraining the HTTP method.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: None,
        }
    }

    /// Attach an HTTP method, stored in its canonical uppercase form.
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = Some(method.as_str().to_ascii_uppercase());
        self
    }

    /// Snapshot any request context into an owned probe.
    pub fn from_context(request: &dyn RequestContext) -> Self {
        Self {
            url: request.app_relative_path().to_owned(),
            method: request.http_method().map(str::to_owned),
        }
    }

    /// The URL as supplied.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The attached method, if any.
    pub fn method(&self) -> Option<&str> {
        self.method.as_deref()
    }
}

impl RequestContext for RouteProbe {
    fn app_relative_path(&self) -> &str {
        &self.url
    }

    fn http_method(&self) -> Option<&str> {
        self.method.as_deref()
    }
}
