//! The `expect_call!` macro.
//!
//! The call is never evaluated as written. Instead each argument expression is
//! classified by its shape and turned into an `ArgExpr` whose resolver runs
//! only when the assertion is checked. A closure that is never invoked calls
//! the controller's hidden check function so the arguments are still
//! type-checked against the action signature.

use crate::{compile_error, render};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Expr, ExprCall, ExprPath, Lit, PathArguments, UnOp, ext::IdentExt, parse_macro_input};

/// Implementation of the `expect_call!` macro.
pub fn expect_call_impl(input: TokenStream) -> TokenStream {
    let expr = parse_macro_input!(input as Expr);
    expand(&expr).into()
}

fn expand(expr: &Expr) -> TokenStream2 {
    let Expr::Call(ExprCall { func, args, .. }) = expr else {
        return compile_error(expr, "expected a call such as `Controller::action(args)`");
    };
    let Expr::Path(ExprPath { qself: None, path, .. }) = &**func else {
        return compile_error(func, "expected a `Controller::action` path");
    };
    if path.segments.len() < 2 {
        return compile_error(path, "expected a `Controller::action` path");
    }

    let mut controller = path.clone();
    let Some(action) = controller.segments.pop().map(|pair| pair.into_value()) else {
        return compile_error(path, "expected a `Controller::action` path");
    };
    // Drop the trailing `::` left behind by the pop.
    if let Some(last) = controller.segments.pop() {
        controller.segments.push(last.into_value());
    }

    let method_name = action.ident.unraw().to_string();
    let check_ident = format_ident!("__routeprobe_check_{}", method_name);
    let turbofish = match &action.arguments {
        PathArguments::AngleBracketed(generics) => Some(quote! { #generics }),
        _ => None,
    };

    let checks = args.iter().map(type_check);
    let shapes = args.iter().map(|arg| classify(arg, arg));

    quote! {
        {
            let _ = || {
                #controller::#check_ident #turbofish (#(#checks),*);
            };
            ::routeprobe::ExpectedCall::new::<#controller>(#method_name, ::std::vec![#(#shapes),*])
        }
    }
}

/// The argument handed to the hidden check function.
///
/// `_` and string literals, bare or inside `Some(..)`, are not checked: the
/// former has no value and the latter would rarely match a `String` parameter
/// by reference.
fn type_check(arg: &Expr) -> TokenStream2 {
    if is_unchecked(arg) {
        quote! { ::core::option::Option::None }
    } else {
        quote! { ::core::option::Option::Some(&(#arg)) }
    }
}

fn is_unchecked(arg: &Expr) -> bool {
    match strip_parens(arg) {
        Expr::Infer(_) => true,
        Expr::Lit(lit) => matches!(lit.lit, Lit::Str(_)),
        Expr::Call(call) => some_payload(call).is_some_and(is_unchecked),
        _ => false,
    }
}

fn strip_parens(expr: &Expr) -> &Expr {
    match expr {
        Expr::Paren(inner) => strip_parens(&inner.expr),
        Expr::Group(inner) => strip_parens(&inner.expr),
        other => other,
    }
}

/// Whether a method chain starts from a constructed value.
fn is_constructed_root(expr: &Expr) -> bool {
    match strip_parens(expr) {
        Expr::Call(_) | Expr::Struct(_) | Expr::Lit(_) => true,
        Expr::MethodCall(call) => is_constructed_root(&call.receiver),
        _ => false,
    }
}

fn is_none(path: &ExprPath) -> bool {
    path.qself.is_none() && path.path.is_ident("None")
}

fn some_payload(call: &ExprCall) -> Option<&Expr> {
    match &*call.func {
        Expr::Path(path) if path.qself.is_none() && path.path.is_ident("Some") => {
            (call.args.len() == 1).then(|| &call.args[0])
        }
        _ => None,
    }
}

/// Build the `ArgExpr` for `shape`, reading its value through `value`.
///
/// The two differ only below a cast, where the shape is the operand but the
/// value must still be the converted one.
fn classify(shape: &Expr, value: &Expr) -> TokenStream2 {
    let source = render(shape);
    match shape {
        Expr::Infer(_) => quote! { ::routeprobe::ArgExpr::unbound() },
        Expr::Paren(inner) => classify(&inner.expr, value),
        Expr::Group(inner) => classify(&inner.expr, value),
        Expr::Lit(_) => quote! { ::routeprobe::ArgExpr::literal(&(#value)) },
        Expr::Unary(unary) if matches!(unary.op, UnOp::Neg(_)) && is_literal(&unary.expr) => {
            quote! { ::routeprobe::ArgExpr::literal(&(#value)) }
        }
        Expr::Path(path) if is_none(path) => quote! { ::routeprobe::ArgExpr::null() },
        Expr::Path(_) | Expr::Field(_) => quote! {
            ::routeprobe::ArgExpr::field(#source, || ::routeprobe::ArgValue::of(&(#value)))
        },
        Expr::Call(call) => match some_payload(call) {
            Some(inner) => {
                let inner = classify(inner, inner);
                quote! { ::routeprobe::ArgExpr::convert(#inner) }
            }
            None => constructed(&source, value),
        },
        Expr::Reference(reference) => {
            let inner = classify(&reference.expr, &reference.expr);
            quote! { ::routeprobe::ArgExpr::convert(#inner) }
        }
        Expr::Cast(cast) => {
            let inner = classify(&cast.expr, value);
            quote! { ::routeprobe::ArgExpr::convert(#inner) }
        }
        Expr::Struct(_) => constructed(&source, value),
        Expr::MethodCall(call) if is_constructed_root(&call.receiver) => {
            constructed(&source, value)
        }
        _ => quote! { ::routeprobe::ArgExpr::opaque(#source) },
    }
}

fn is_literal(expr: &Expr) -> bool {
    matches!(strip_parens(expr), Expr::Lit(_))
}

fn constructed(source: &str, value: &Expr) -> TokenStream2 {
    quote! {
        ::routeprobe::ArgExpr::constructed(#source, || ::routeprobe::ArgValue::of(&(#value)))
    }
}
