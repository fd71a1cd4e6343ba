//! Controller-related macros.
//!
//! This module contains:
//! - `#[controller]` - Attribute macro emitting a `Controller` implementation
//!   and a hidden argument-checking function per action

use crate::{compile_error, render};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    Attribute, FnArg, Ident, ImplItem, ImplItemFn, ItemImpl, LitStr, Pat, Token, Type,
    Visibility,
    ext::IdentExt,
    parse::{Parse, ParseStream},
    parse_macro_input,
};

/// Arguments for the `#[controller]` macro.
pub(crate) struct ControllerArgs {
    pub name: Option<String>,
}

impl Parse for ControllerArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut name = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "name" => {
                    let lit: LitStr = input.parse()?;
                    name = Some(lit.value());
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute: {}", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(ControllerArgs { name })
    }
}

/// Arguments of a method-level `#[action(...)]` attribute.
#[derive(Default)]
struct ActionArgs {
    name: Option<String>,
    skip: bool,
}

impl Parse for ActionArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut args = ActionArgs::default();

        while !input.is_empty() {
            let ident: Ident = input.parse()?;

            match ident.to_string().as_str() {
                "skip" => args.skip = true,
                "name" => {
                    input.parse::<Token![=]>()?;
                    let lit: LitStr = input.parse()?;
                    args.name = Some(lit.value());
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute: {}", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(args)
    }
}

/// Remove `#[action(...)]` from `attrs` and parse it.
fn take_action_args(attrs: &mut Vec<Attribute>) -> syn::Result<ActionArgs> {
    let mut args = ActionArgs::default();
    let mut result = Ok(());
    attrs.retain(|attr| {
        if !attr.path().is_ident("action") {
            return true;
        }
        match attr.parse_args::<ActionArgs>() {
            Ok(parsed) => args = parsed,
            Err(e) => result = Err(e),
        }
        false
    });
    result.map(|()| args)
}

/// Whether a declared type is `Option<_>`, looking through parentheses.
fn is_option(ty: &Type) -> bool {
    match ty {
        Type::Paren(inner) => is_option(&inner.elem),
        Type::Group(inner) => is_option(&inner.elem),
        Type::Path(path) if path.qself.is_none() => path
            .path
            .segments
            .last()
            .is_some_and(|seg| seg.ident == "Option"),
        _ => false,
    }
}

/// Descriptor and check-function tokens for one action method.
struct Action {
    descriptor: TokenStream2,
    check_fn: TokenStream2,
}

fn describe_action(method: &ImplItemFn, route_name: Option<String>) -> syn::Result<Action> {
    let method_name = method.sig.ident.unraw().to_string();
    let route_name = route_name.unwrap_or_else(|| method_name.clone());

    let mut params = Vec::new();
    let mut check_types = Vec::new();
    for arg in &method.sig.inputs {
        let FnArg::Typed(pat_type) = arg else {
            continue;
        };
        let name = match &*pat_type.pat {
            Pat::Ident(pat_ident) => pat_ident.ident.unraw().to_string(),
            other => {
                return Err(syn::Error::new_spanned(
                    other,
                    "action parameters must be plain identifiers",
                ));
            }
        };
        let ty = &pat_type.ty;
        let type_name = render(ty);
        let nullable = is_option(ty);

        params.push(quote! {
            ::routeprobe::ParamDescriptor::new(#name, #type_name, #nullable)
        });
        check_types.push(quote! { ::core::option::Option<&#ty> });
    }

    let check_ident = format_ident!("__routeprobe_check_{}", method_name);
    let generics = &method.sig.generics;
    let where_clause = &method.sig.generics.where_clause;

    Ok(Action {
        descriptor: quote! {
            ::routeprobe::ActionDescriptor::renamed(#method_name, #route_name, &[#(#params),*])
        },
        check_fn: quote! {
            #[doc(hidden)]
            #[allow(non_snake_case, dead_code, clippy::too_many_arguments)]
            pub fn #check_ident #generics (#(_: #check_types),*) #where_clause {}
        },
    })
}

/// Implementation of the `#[controller]` macro.
pub fn controller_impl(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as ControllerArgs);
    let mut input = parse_macro_input!(item as ItemImpl);

    match expand(&args, &mut input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(args: &ControllerArgs, input: &mut ItemImpl) -> syn::Result<TokenStream2> {
    if let Some((_, path, _)) = &input.trait_ {
        return Err(syn::Error::new_spanned(
            path,
            "#[controller] must be applied to an inherent impl block",
        ));
    }

    let type_name = match (&args.name, &*input.self_ty) {
        (Some(name), _) => name.clone(),
        (None, Type::Path(path)) => match path.path.segments.last() {
            Some(seg) => seg.ident.unraw().to_string(),
            None => return Ok(compile_error(&input.self_ty, "expected a controller type")),
        },
        (None, other) => {
            return Err(syn::Error::new_spanned(
                other,
                "#[controller] requires a named type; use #[controller(name = \"...\")]",
            ));
        }
    };

    let mut actions = Vec::new();
    for item in &mut input.items {
        let ImplItem::Fn(method) = item else {
            continue;
        };
        let action_args = take_action_args(&mut method.attrs)?;
        let is_action = matches!(method.vis, Visibility::Public(_))
            && method.sig.receiver().is_some()
            && !action_args.skip;
        if is_action {
            actions.push(describe_action(method, action_args.name)?);
        }
    }

    let self_ty = &input.self_ty;
    let (impl_generics, _, where_clause) = input.generics.split_for_impl();
    let descriptors = actions.iter().map(|a| &a.descriptor);
    let check_fns = actions.iter().map(|a| &a.check_fn);

    Ok(quote! {
        #input

        impl #impl_generics ::routeprobe::Controller for #self_ty #where_clause {
            const TYPE_NAME: &'static str = #type_name;
            const ACTIONS: &'static [::routeprobe::ActionDescriptor] = &[#(#descriptors),*];
        }

        impl #impl_generics #self_ty #where_clause {
            #(#check_fns)*
        }
    })
}
