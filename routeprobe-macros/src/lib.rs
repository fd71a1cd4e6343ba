//! Procedural macros for routeprobe.
//!
//! - `#[controller]` - Records the actions of a controller `impl` block
//! - `expect_call!` - Captures an expected action call with its argument shapes

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::ToTokens;

mod controller;
mod expect;

/// Render tokens the way they were most likely written.
///
/// `proc_macro2` separates every token with a space; this removes the spaces
/// around punctuation so `self . id` reads `self.id` in diagnostics.
pub(crate) fn render(tokens: impl ToTokens) -> String {
    let raw = tokens.to_token_stream().to_string();
    let mut out = String::with_capacity(raw.len());
    let chars: Vec<char> = raw.chars().collect();
    for (i, &c) in chars.iter().enumerate() {
        if c == ' ' {
            let prev = if i > 0 { chars[i - 1] } else { ' ' };
            let next = chars.get(i + 1).copied().unwrap_or(' ');
            let glue_after = matches!(prev, '.' | ':' | '<' | '&' | '(' | '[');
            let glue_before = matches!(next, '.' | ':' | '<' | '>' | ',' | '(' | ')' | '[' | ']' | '?' | '!');
            if glue_after || glue_before {
                continue;
            }
        }
        out.push(c);
    }
    out
}

/// Error tokens for a span, in the form every macro here returns.
pub(crate) fn compile_error(tokens: impl ToTokens, message: &str) -> TokenStream2 {
    syn::Error::new_spanned(tokens, message).to_compile_error()
}

/// Attribute macro recording the actions of a controller.
///
/// Apply it to an inherent `impl` block. Every `pub` method taking `self`
/// becomes an action; its parameters are recorded in declaration order,
/// parameters typed `Option<_>` as nullable.
///
/// # Attributes
///
/// - `#[controller(name = "ProductsController")]` - Override the type name
///   (the `Controller` suffix is still stripped when comparing)
/// - `#[action(name = "Show")]` on a method - Override the action route name
/// - `#[action(skip)]` on a method - Do not treat the method as an action
///
/// # Example
///
/// ```rust,ignore
/// pub struct ProductsController;
///
/// #[routeprobe::controller]
/// impl ProductsController {
///     pub fn show(&self, id: i32) {}
///     pub fn list(&self, page: Option<u32>) {}
/// }
/// ```
#[proc_macro_attribute]
pub fn controller(attr: TokenStream, item: TokenStream) -> TokenStream {
    controller::controller_impl(attr, item)
}

/// Capture an expected controller action call.
///
/// The argument is written as a call of the action method through its
/// controller type. Arguments are type-checked against the method signature
/// but never evaluated more than once, and only when the assertion runs.
/// `_` leaves a parameter unchecked.
///
/// # Example
///
/// ```rust,ignore
/// engine
///     .route("~/products/3")
///     .assert_maps_to(expect_call!(ProductsController::show(3)));
///
/// engine
///     .route("~/products")
///     .assert_maps_to(expect_call!(ProductsController::list(None)));
/// ```
#[proc_macro]
pub fn expect_call(input: TokenStream) -> TokenStream {
    expect::expect_call_impl(input)
}

#[cfg(test)]
mod tests {
    use super::render;
    use quote::quote;

    #[test]
    fn test_render_compacts_punctuation() {
        assert_eq!(render(quote!(self.product.id)), "self.product.id");
        assert_eq!(render(quote!(Option<NaiveDate>)), "Option<NaiveDate>");
        assert_eq!(render(quote!(Product::new(3, 4))), "Product::new(3, 4)");
        assert_eq!(render(quote!(id as i64)), "id as i64");
    }
}
