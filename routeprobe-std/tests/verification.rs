mod common;

use chrono::NaiveDate;
use common::{OrdersController, OrdersEndpoint, orders};
use routeprobe_core::{ArgExpr, RouteAssertionError, RouteMatch};
use routeprobe_std::{
    ExpectedCall, HashMapEngine, RouteEngineExt, RouteMatchExt, RouteTableBuilder, Verifier,
};

fn engine() -> HashMapEngine {
    let mut builder = HashMapEngine::builder();
    builder.route("~/orders", orders("index")).unwrap();
    builder
        .route(
            "~/orders/open",
            orders("by_status").with("status", "open").with("placed", ""),
        )
        .unwrap();
    builder
        .route(
            "~/orders/open/2024-02-29",
            orders("by_status")
                .with("status", "open")
                .with("placed", "2024-02-29"),
        )
        .unwrap();
    builder
        .route("~/orders/17", orders("Detail").with("ID", "17"))
        .unwrap();
    builder.build().unwrap()
}

fn by_status<'a>(status: &'a str, placed: ArgExpr<'a>) -> ExpectedCall<'a> {
    ExpectedCall::for_controller::<OrdersController>("by_status")
        .arg(ArgExpr::literal(status))
        .arg(placed)
}

#[test]
fn test_hand_written_descriptors() {
    let engine = engine();

    engine
        .route("~/orders")
        .assert_maps_to(ExpectedCall::for_controller::<OrdersController>("index"));
    engine
        .route("~/orders/open")
        .assert_maps_to(by_status("open", ArgExpr::null()));
}

#[test]
fn test_nullable_date_argument() {
    let placed = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
    engine()
        .route("~/orders/open/2024-02-29")
        .assert_maps_to(by_status("open", ArgExpr::convert(ArgExpr::literal(&placed))));

    let err = engine()
        .route("~/orders/open")
        .check_maps_to(by_status("open", ArgExpr::literal(&placed)))
        .unwrap_err();
    assert_eq!(
        err,
        RouteAssertionError::ParameterMismatch {
            parameter: "placed".into(),
            expected: Some("2024-02-29 00:00:00".into()),
            actual: Some(String::new()),
        }
    );
}

#[test]
fn test_fewer_arguments_leave_parameters_unchecked() {
    let expected =
        ExpectedCall::for_controller::<OrdersController>("by_status").arg(ArgExpr::literal("open"));
    engine()
        .route("~/orders/open/2024-02-29")
        .assert_maps_to(expected);
}

#[test]
fn test_parameter_keys_ignore_case() {
    let expected =
        ExpectedCall::for_controller::<OrdersController>("detail").arg(ArgExpr::literal(&17u64));
    engine().route("~/orders/17").assert_maps_to(expected);
}

#[test]
fn test_field_resolver() {
    struct Order {
        id: u64,
    }
    let order = Order { id: 17 };

    let expected = ExpectedCall::for_controller::<OrdersController>("detail").arg(ArgExpr::field(
        "order.id",
        || routeprobe_core::ArgValue::of(&order.id),
    ));
    engine().route("~/orders/17").assert_maps_to(expected);
}

#[test]
fn test_custom_controller_suffix() {
    let route = RouteMatch::new(orders("index"));
    let expected = ExpectedCall::for_controller::<OrdersEndpoint>("index");

    assert!(route.clone().check_maps_to(ExpectedCall::for_controller::<OrdersEndpoint>("index")).is_err());
    route
        .check_maps_to_with(&Verifier::new().controller_suffix("Endpoint"), expected)
        .unwrap();
}
