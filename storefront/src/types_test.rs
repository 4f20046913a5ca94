use super::*;

fn product(stock: i64) -> Product {
    Product { id: 7, name: "Keyboard".to_owned(), price: 49.5, stock }
}

// =============================================================================
// Product
// =============================================================================

#[test]
fn product_with_stock_is_purchasable() {
    assert!(!product(3).is_sold_out());
}

#[test]
fn product_with_zero_stock_is_sold_out() {
    assert!(product(0).is_sold_out());
}

#[test]
fn product_with_negative_stock_is_sold_out() {
    assert!(product(-1).is_sold_out());
}

#[test]
fn price_label_uses_shortest_decimal_form() {
    assert_eq!(product(1).price_label(), "$49.5");
    let whole = Product { price: 10.0, ..product(1) };
    assert_eq!(whole.price_label(), "$10");
}

#[test]
fn product_deserializes_backend_json() {
    let json = r#"{"id":1,"name":"Mouse","price":19.99,"stock":0}"#;
    let parsed: Product = serde_json::from_str(json).expect("product");
    assert_eq!(parsed.id, 1);
    assert_eq!(parsed.name, "Mouse");
    assert!(parsed.is_sold_out());
}

// =============================================================================
// Credentials
// =============================================================================

#[test]
fn credentials_trim_email() {
    let creds = Credentials::new("  a@b.com ", "secret").expect("credentials");
    assert_eq!(creds.email, "a@b.com");
    assert_eq!(creds.password, "secret");
}

#[test]
fn credentials_require_email() {
    assert_eq!(Credentials::new("   ", "secret"), Err(ActionError::Invalid("Email is required.")));
}

#[test]
fn credentials_require_password() {
    assert_eq!(Credentials::new("a@b.com", ""), Err(ActionError::Invalid("Password is required.")));
}

#[test]
fn credentials_serialize_as_email_password() {
    let creds = Credentials::new("a@b.com", "pw").expect("credentials");
    let json = serde_json::to_value(&creds).expect("json");
    assert_eq!(json, serde_json::json!({ "email": "a@b.com", "password": "pw" }));
}

// =============================================================================
// NewProduct
// =============================================================================

#[test]
fn new_product_parses_form_fields() {
    let parsed = NewProduct::parse(" Lamp ", "12.5", " 4 ").expect("product");
    assert_eq!(parsed, NewProduct { name: "Lamp".to_owned(), price: 12.5, stock: 4 });
}

#[test]
fn new_product_rejects_blank_name() {
    assert_eq!(
        NewProduct::parse("", "1", "1"),
        Err(ActionError::Invalid("Product name is required."))
    );
}

#[test]
fn new_product_rejects_bad_price() {
    for price in ["", "abc", "-1", "NaN", "inf"] {
        assert_eq!(
            NewProduct::parse("Lamp", price, "1"),
            Err(ActionError::Invalid("Price must be a non-negative number.")),
            "price {price:?}"
        );
    }
}

#[test]
fn new_product_rejects_bad_stock() {
    for stock in ["", "1.5", "-2", "many"] {
        assert_eq!(
            NewProduct::parse("Lamp", "1", stock),
            Err(ActionError::Invalid("Stock must be a non-negative whole number.")),
            "stock {stock:?}"
        );
    }
}

#[test]
fn new_product_accepts_zero_stock_and_price() {
    assert!(NewProduct::new("Freebie", 0.0, 0).is_ok());
}
