//! # Expected Arguments
//!
//! An expected action call is compared against string route values, so every
//! typed argument is first reduced to an [`ArgValue`] through [`RouteArg`].
//!
//! Arguments are not reduced eagerly. Each one is captured as an [`ArgExpr`]
//! that remembers the *shape* of the expression the test author wrote
//! (literal, field access, construction, conversion) together with a one-shot
//! resolver. The resolver is `FnOnce`, so a parameter's expected value can be
//! produced at most once.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use std::{borrow::Cow, fmt};

/// A resolved expected value, ready to be compared with a route value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    /// No value.
    Null,
    /// Any value compared through its string form.
    Text(String),
    /// A date/time value, compared as a date/time rather than as text.
    DateTime(NaiveDateTime),
}

impl ArgValue {
    /// Reduce a typed argument.
    pub fn of<A: RouteArg + ?Sized>(arg: &A) -> Self {
        arg.to_arg_value()
    }

    /// Whether this is [`ArgValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, ArgValue::Null)
    }

    /// The string form used for comparison; `None` for null.
    pub fn to_text(&self) -> Option<Cow<'_, str>> {
        match self {
            ArgValue::Null => None,
            ArgValue::Text(s) => Some(Cow::Borrowed(s)),
            ArgValue::DateTime(dt) => Some(Cow::Owned(dt.to_string())),
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_text() {
            Some(text) => f.write_str(&text),
            None => f.write_str("(null)"),
        }
    }
}

/// A type that can appear as an action argument.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be compared with a route value",
    label = "this argument type does not implement `RouteArg`",
    note = "implement `RouteArg` to reduce the value to text or a date"
)]
pub trait RouteArg {
    /// Reduce the value to something comparable with a route value.
    fn to_arg_value(&self) -> ArgValue;
}

macro_rules! impl_route_arg_display {
    ($($T:ty),+ $(,)?) => {
        $(
            impl RouteArg for $T {
                fn to_arg_value(&self) -> ArgValue {
                    ArgValue::Text(self.to_string())
                }
            }
        )+
    };
}

impl_route_arg_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, str,
    String,
);

impl RouteArg for Cow<'_, str> {
    fn to_arg_value(&self) -> ArgValue {
        ArgValue::Text(self.to_string())
    }
}

impl<T: RouteArg> RouteArg for Option<T> {
    fn to_arg_value(&self) -> ArgValue {
        match self {
            Some(v) => v.to_arg_value(),
            None => ArgValue::Null,
        }
    }
}

impl<T: RouteArg + ?Sized> RouteArg for &T {
    fn to_arg_value(&self) -> ArgValue {
        (**self).to_arg_value()
    }
}

impl<T: RouteArg + ?Sized> RouteArg for Box<T> {
    fn to_arg_value(&self) -> ArgValue {
        (**self).to_arg_value()
    }
}

impl RouteArg for NaiveDateTime {
    fn to_arg_value(&self) -> ArgValue {
        ArgValue::DateTime(*self)
    }
}

impl RouteArg for NaiveDate {
    fn to_arg_value(&self) -> ArgValue {
        ArgValue::DateTime(self.and_time(NaiveTime::MIN))
    }
}

/// Reduced to its UTC instant. Route values without an offset are read as
/// UTC, so a `DateTime<Local>` only matches them when the local offset is zero.
impl<Tz: TimeZone> RouteArg for DateTime<Tz> {
    fn to_arg_value(&self) -> ArgValue {
        ArgValue::DateTime(self.naive_utc())
    }
}

/// One-shot resolver of an expected value.
pub type Resolver<'a> = Box<dyn FnOnce() -> ArgValue + 'a>;

/// The shape of an argument expression in an expected call.
pub enum ArgExpr<'a> {
    /// A literal constant, already resolved.
    Literal(ArgValue),
    /// A variable, constant or field read such as `self.product.id`.
    FieldAccess {
        /// The expression as written.
        path: Cow<'static, str>,
        /// Reads the value.
        read: Resolver<'a>,
    },
    /// A constructor call, struct literal or builder chain.
    Constructed {
        /// The expression as written.
        source: Cow<'static, str>,
        /// Builds the value.
        build: Resolver<'a>,
    },
    /// A conversion wrapping another expression (`Some(x)`, `&x`, `x as T`).
    Convert(Box<ArgExpr<'a>>),
    /// Any other expression shape; it has no resolvable value.
    Opaque {
        /// The expression as written.
        source: Cow<'static, str>,
    },
    /// The parameter is deliberately left unchecked.
    Unbound,
}

impl<'a> ArgExpr<'a> {
    /// A literal argument.
    pub fn literal<A: RouteArg + ?Sized>(value: &A) -> Self {
        ArgExpr::Literal(ArgValue::of(value))
    }

    /// The literal `None`.
    pub fn null() -> Self {
        ArgExpr::Literal(ArgValue::Null)
    }

    /// A field or variable read.
    pub fn field(
        path: impl Into<Cow<'static, str>>,
        read: impl FnOnce() -> ArgValue + 'a,
    ) -> Self {
        ArgExpr::FieldAccess {
            path: path.into(),
            read: Box::new(read),
        }
    }

    /// A constructed value.
    pub fn constructed(
        source: impl Into<Cow<'static, str>>,
        build: impl FnOnce() -> ArgValue + 'a,
    ) -> Self {
        ArgExpr::Constructed {
            source: source.into(),
            build: Box::new(build),
        }
    }

    /// A conversion of `inner`.
    pub fn convert(inner: ArgExpr<'a>) -> Self {
        ArgExpr::Convert(Box::new(inner))
    }

    /// An expression whose value cannot be resolved.
    pub fn opaque(source: impl Into<Cow<'static, str>>) -> Self {
        ArgExpr::Opaque {
            source: source.into(),
        }
    }

    /// Leave the parameter unchecked.
    pub fn unbound() -> Self {
        ArgExpr::Unbound
    }

    /// Strip any number of conversion wrappers.
    pub fn unwrap_conversions(self) -> Self {
        let mut expr = self;
        while let ArgExpr::Convert(inner) = expr {
            expr = *inner;
        }
        expr
    }

    /// The expression as written, where one is recorded.
    pub fn source(&self) -> Option<&str> {
        match self {
            ArgExpr::FieldAccess { path, .. } => Some(path),
            ArgExpr::Constructed { source, .. } | ArgExpr::Opaque { source } => Some(source),
            ArgExpr::Convert(inner) => inner.source(),
            ArgExpr::Literal(_) | ArgExpr::Unbound => None,
        }
    }
}

impl fmt::Debug for ArgExpr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgExpr::Literal(v) => f.debug_tuple("Literal").field(v).finish(),
            ArgExpr::FieldAccess { path, .. } => {
                f.debug_struct("FieldAccess").field("path", path).finish_non_exhaustive()
            }
            ArgExpr::Constructed { source, .. } => f
                .debug_struct("Constructed")
                .field("source", source)
                .finish_non_exhaustive(),
            ArgExpr::Convert(inner) => f.debug_tuple("Convert").field(inner).finish(),
            ArgExpr::Opaque { source } => f.debug_struct("Opaque").field("source", source).finish(),
            ArgExpr::Unbound => f.write_str("Unbound"),
        }
    }
}
