#![allow(dead_code)]

use routeprobe_core::{ActionDescriptor, Controller, ParamDescriptor, RouteValues};

// ============================================================================
// Hand-written Controller Descriptors
// ============================================================================

pub struct OrdersController;

impl Controller for OrdersController {
    const TYPE_NAME: &'static str = "OrdersController";
    const ACTIONS: &'static [ActionDescriptor] = &[
        ActionDescriptor::new("index", &[]),
        ActionDescriptor::new(
            "by_status",
            &[
                ParamDescriptor::new("status", "String", false),
                ParamDescriptor::new("placed", "Option<NaiveDate>", true),
            ],
        ),
        ActionDescriptor::renamed("detail", "Detail", &[ParamDescriptor::new("id", "u64", false)]),
    ];
}

/// Registered under a custom suffix.
pub struct OrdersEndpoint;

impl Controller for OrdersEndpoint {
    const TYPE_NAME: &'static str = "OrdersEndpoint";
    const ACTIONS: &'static [ActionDescriptor] = &[ActionDescriptor::new("index", &[])];
}

pub fn orders(action: &str) -> RouteValues {
    RouteValues::new()
        .with("controller", "Orders")
        .with("action", action)
}
