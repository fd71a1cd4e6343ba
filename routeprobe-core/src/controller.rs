//! Static descriptions of controllers and their actions.
//!
//! These are normally emitted by the `#[controller]` attribute from
//! `routeprobe-macros`, which records each action's formal parameters at
//! compile time. They can be written by hand for controllers the macro cannot
//! see.

/// A formal parameter of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamDescriptor {
    name: &'static str,
    type_name: &'static str,
    nullable: bool,
}

impl ParamDescriptor {
    /// Describe a parameter.
    pub const fn new(name: &'static str, type_name: &'static str, nullable: bool) -> Self {
        Self {
            name,
            type_name,
            nullable,
        }
    }

    /// The parameter name, which is also the route-value key.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The declared type, as written in source.
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Whether the declared type is `Option<_>`.
    pub const fn is_nullable(&self) -> bool {
        self.nullable
    }
}

/// An action method of a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionDescriptor {
    method: &'static str,
    name: &'static str,
    params: &'static [ParamDescriptor],
}

impl ActionDescriptor {
    /// Describe an action whose route name equals its method name.
    pub const fn new(method: &'static str, params: &'static [ParamDescriptor]) -> Self {
        Self {
            method,
            name: method,
            params,
        }
    }

    /// Describe an action whose route name differs from its method name.
    pub const fn renamed(
        method: &'static str,
        name: &'static str,
        params: &'static [ParamDescriptor],
    ) -> Self {
        Self {
            method,
            name,
            params,
        }
    }

    /// The Rust method name.
    pub const fn method(&self) -> &'static str {
        self.method
    }

    /// The expected value of the `action` route value.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Formal parameters in declaration order.
    pub const fn params(&self) -> &'static [ParamDescriptor] {
        self.params
    }
}

/// A controller type that routes can dispatch to.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a routeprobe controller",
    label = "missing `Controller` implementation",
    note = "Annotate the controller's `impl` block with `#[routeprobe::controller]`."
)]
pub trait Controller {
    /// The controller's type name, e.g. `"ProductsController"`.
    const TYPE_NAME: &'static str;

    /// The controller's actions.
    const ACTIONS: &'static [ActionDescriptor];

    /// Find an action by its Rust method name.
    fn action(method: &str) -> Option<&'static ActionDescriptor> {
        Self::ACTIONS.iter().find(|a| a.method == method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ProductsController;

    impl Controller for ProductsController {
        const TYPE_NAME: &'static str = "ProductsController";
        const ACTIONS: &'static [ActionDescriptor] = &[
            ActionDescriptor::new("show", &[ParamDescriptor::new("id", "i32", false)]),
            ActionDescriptor::renamed("list_all", "List", &[]),
        ];
    }

    #[test]
    fn test_action_lookup_by_method() {
        let show = ProductsController::action("show").unwrap();
        assert_eq!(show.name(), "show");
        assert_eq!(show.params()[0].name(), "id");

        let list = ProductsController::action("list_all").unwrap();
        assert_eq!(list.name(), "List");

        assert!(ProductsController::action("List").is_none());
    }
}
