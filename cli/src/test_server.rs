//! In-process fake backend for transport and command tests.
//!
//! Products: `1` Lamp (stock 3), `2` Chair (stock 0), `3` Desk (stock 1, but
//! buying it fails with `{"error":"Out of stock"}`). `admin@shop.test` / `pw`
//! signs in as admin with token `abc`; bearer routes reject anything else.
//! Registering `taken@shop.test` conflicts.

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use storefront::Product;

type Catalog = Arc<Mutex<Vec<Product>>>;
type Reply = (StatusCode, Json<Value>);

fn seed() -> Vec<Product> {
    vec![
        Product { id: 1, name: "Lamp".to_owned(), price: 20.0, stock: 3 },
        Product { id: 2, name: "Chair".to_owned(), price: 45.5, stock: 0 },
        Product { id: 3, name: "Desk".to_owned(), price: 120.0, stock: 1 },
    ]
}

fn error(status: StatusCode, message: &str) -> Reply {
    (status, Json(json!({ "error": message })))
}

fn ok() -> Reply {
    (StatusCode::OK, Json(json!({})))
}

fn authorized(headers: &HeaderMap) -> bool {
    headers.get("authorization").and_then(|v| v.to_str().ok()) == Some("Bearer abc")
}

async fn list(State(catalog): State<Catalog>) -> Json<Vec<Product>> {
    Json(catalog.lock().unwrap().clone())
}

async fn register(Json(body): Json<Value>) -> Reply {
    if body["email"] == "taken@shop.test" {
        return error(StatusCode::CONFLICT, "Email already registered");
    }
    (StatusCode::CREATED, Json(json!({})))
}

async fn login(Json(body): Json<Value>) -> Reply {
    if body["email"] == "admin@shop.test" && body["password"] == "pw" {
        return (StatusCode::OK, Json(json!({ "token": "abc", "role": "admin" })));
    }
    error(StatusCode::UNAUTHORIZED, "Invalid credentials")
}

async fn create(State(catalog): State<Catalog>, headers: HeaderMap, Json(body): Json<Value>) -> Reply {
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "Unauthorized");
    }
    let mut products = catalog.lock().unwrap();
    let id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
    products.push(Product {
        id,
        name: body["name"].as_str().unwrap_or_default().to_owned(),
        price: body["price"].as_f64().unwrap_or_default(),
        stock: body["stock"].as_i64().unwrap_or_default(),
    });
    (StatusCode::CREATED, Json(json!({ "id": id })))
}

async fn remove(State(catalog): State<Catalog>, headers: HeaderMap, Path(id): Path<i64>) -> Reply {
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "Unauthorized");
    }
    catalog.lock().unwrap().retain(|p| p.id != id);
    ok()
}

async fn buy(State(catalog): State<Catalog>, headers: HeaderMap, Path(id): Path<i64>) -> Reply {
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "Unauthorized");
    }
    if id == 3 {
        return error(StatusCode::BAD_REQUEST, "Out of stock");
    }
    let mut products = catalog.lock().unwrap();
    match products.iter_mut().find(|p| p.id == id) {
        Some(p) => {
            p.stock -= 1;
            ok()
        }
        None => error(StatusCode::NOT_FOUND, "Product not found"),
    }
}

/// Start the fake backend on an ephemeral port and return its base URL.
pub async fn spawn() -> String {
    let catalog: Catalog = Arc::new(Mutex::new(seed()));
    let app = Router::new()
        .route("/products", get(list).post(create))
        .route("/products/{id}", delete(remove))
        .route("/buy/{id}", post(buy))
        .route("/register", post(register))
        .route("/login", post(login))
        .with_state(catalog);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}
