#![allow(dead_code)]

use routeprobe::chrono::NaiveDate;
use routeprobe::{MethodFilter, RouteTableBuilder, RouteValues, controller};

// ============================================================================
// Test Controllers
// ============================================================================

pub struct ProductsController;

#[controller]
impl ProductsController {
    pub fn index(&self) {}

    pub fn show(&self, id: i32) {
        let _ = id;
    }

    pub fn list(&self, category: String, page: Option<u32>) {
        let _ = (category, page);
    }

    pub fn archive(&self, day: NaiveDate) {
        let _ = day;
    }

    pub fn since(&self, day: Option<NaiveDate>) {
        let _ = day;
    }

    #[action(name = "Search")]
    pub fn search(&self, query: String, filter: Filter) {
        let _ = (query, filter);
    }

    pub fn create(&self) {}

    pub fn destroy(&self, id: i32) {
        let _ = id;
    }
}

/// Controller registered under a type name without the conventional suffix.
pub struct Home;

#[controller]
impl Home {
    pub fn index(&self) {}
}

/// A search filter reaching the route as its `Display` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub min_price: u32,
}

impl Filter {
    pub fn new(min_price: u32) -> Self {
        Self { min_price }
    }

    pub fn with_min_price(mut self, min_price: u32) -> Self {
        self.min_price = min_price;
        self
    }
}

impl routeprobe::RouteArg for Filter {
    fn to_arg_value(&self) -> routeprobe::ArgValue {
        routeprobe::ArgValue::Text(format!("min:{}", self.min_price))
    }
}

/// A fixture exposing values through fields.
pub struct Fixture {
    pub product: Product,
}

pub struct Product {
    pub id: i32,
    pub name: String,
}

impl Product {
    pub fn id(&self) -> i32 {
        self.id
    }
}

// ============================================================================
// Route Table
// ============================================================================

pub fn products(action: &str) -> RouteValues {
    RouteValues::new()
        .with("controller", "Products")
        .with("action", action)
}

/// Fill any reference engine with the exact-path route table used across tests.
pub fn route_table<B: RouteTableBuilder>() -> B::Engine {
    let mut builder = B::default();
    builder.route("~/products", products("index")).unwrap();
    builder
        .route("~/products/3", products("show").with("id", "3"))
        .unwrap();
    builder
        .route(
            "~/products/books",
            products("list").with("category", "books").with_null("page"),
        )
        .unwrap();
    builder
        .route(
            "~/products/books/page-empty",
            products("list").with("category", "books").with("page", ""),
        )
        .unwrap();
    builder
        .route(
            "~/products/books/page-5",
            products("list").with("category", "books").with("page", "5"),
        )
        .unwrap();
    builder
        .route(
            "~/archive/2020-01-01",
            products("archive").with("day", "2020-01-01"),
        )
        .unwrap();
    builder
        .route("~/archive/latest", products("since").with("day", ""))
        .unwrap();
    builder
        .route(
            "~/search",
            products("Search")
                .with("query", "lamp")
                .with("filter", "min:10"),
        )
        .unwrap();
    builder
        .route_with_methods("~/products/new", MethodFilter::POST, products("create"))
        .unwrap();
    builder
        .route_with_methods(
            "~/products/7",
            MethodFilter::DELETE,
            products("destroy").with("id", "7"),
        )
        .unwrap();
    builder
        .route(
            "~/",
            RouteValues::new()
                .with("controller", "Home")
                .with("action", "index"),
        )
        .unwrap();
    builder
        .route(
            "~/lowercase",
            RouteValues::new()
                .with("controller", "products")
                .with("action", "index"),
        )
        .unwrap();
    builder.ignore("~/favicon.ico").unwrap();
    builder.build().unwrap()
}
