use super::*;

fn product(stock: i64) -> Product {
    Product { id: 4, name: "Desk".to_owned(), price: 120.0, stock }
}

#[test]
fn buy_label_reflects_stock() {
    assert_eq!(buy_label(&product(2)), "Buy Now");
    assert_eq!(buy_label(&product(0)), "Sold Out");
}

#[test]
fn card_class_marks_sold_out() {
    assert_eq!(card_class(&product(2)), "card product-card");
    assert_eq!(card_class(&product(0)), "card product-card out-of-stock");
}

#[test]
fn card_key_changes_when_stock_changes() {
    assert_ne!(card_key(&product(2)), card_key(&product(1)));
}

#[test]
fn card_key_stable_for_identical_product() {
    assert_eq!(card_key(&product(2)), card_key(&product(2)));
}
