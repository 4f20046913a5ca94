use super::*;

fn product(id: ProductId, stock: i64) -> Product {
    Product { id, name: format!("p{id}"), price: 1.0, stock }
}

#[test]
fn catalog_starts_empty_and_unloaded() {
    let state = CatalogState::default();
    assert!(state.products.is_empty());
    assert!(!state.loaded);
}

#[test]
fn replace_swaps_whole_list() {
    let mut state = CatalogState::default();
    state.replace(vec![product(1, 1), product(2, 2)]);
    state.replace(vec![product(3, 0)]);
    assert_eq!(state.products, vec![product(3, 0)]);
    assert!(state.loaded);
}

#[test]
fn apply_refreshed_list_shows_latest_server_state() {
    let mut state = CatalogState::default();
    state.replace(vec![product(1, 2)]);
    state.apply(Some(vec![product(1, 1)]));
    assert_eq!(state.find(1).map(|p| p.stock), Some(1));
}

#[test]
fn apply_failed_refresh_keeps_stale_list() {
    let mut state = CatalogState::default();
    state.replace(vec![product(1, 2)]);
    state.apply(None);
    assert_eq!(state.products, vec![product(1, 2)]);
}

#[test]
fn find_missing_id_is_none() {
    assert!(CatalogState::default().find(9).is_none());
}
