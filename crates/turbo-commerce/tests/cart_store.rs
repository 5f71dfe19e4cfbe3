//! Cart store scenarios across sessions and storage media.

use turbo_cache::{FileStore, KvStore, MemoryStore};
use turbo_commerce::prelude::*;

fn product(id: &str, price: f64) -> ProductDescriptor {
    ProductDescriptor::new(id, format!("Product {}", id), price, format!("{}.jpg", id))
}

#[test]
fn test_repeated_adds_merge_into_one_line() {
    for n in 1..=5_i64 {
        let storage = MemoryStore::new();
        let mut cart = CartStore::new(&storage, &CartConfig::default());
        for _ in 0..n {
            cart.add(&product("a", 1.0));
        }
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.get(&ProductId::new("a")).unwrap().quantity(), Some(n));
    }
}

#[test]
fn test_non_positive_quantity_leaves_line_unchanged() {
    let storage = MemoryStore::new();
    let mut cart = CartStore::new(&storage, &CartConfig::default());
    cart.add(&product("a", 2.0));
    cart.add(&product("b", 3.0));
    cart.set_quantity(&ProductId::new("b"), 4);
    let before = cart.state().clone();

    for q in [0, -1, i64::MIN] {
        cart.set_quantity(&ProductId::new("a"), q);
        cart.set_quantity(&ProductId::new("b"), q);
    }
    assert_eq!(cart.state(), &before);
}

#[test]
fn test_remove_twice_is_idempotent() {
    let storage = MemoryStore::new();
    let mut cart = CartStore::new(&storage, &CartConfig::default());
    cart.add(&product("a", 1.0));
    cart.add(&product("b", 1.0));

    assert!(cart.remove(&ProductId::new("a")));
    let after_first = cart.state().clone();
    assert!(!cart.remove(&ProductId::new("a")));
    assert_eq!(cart.state(), &after_first);
    assert_eq!(cart.line_count(), 1);
}

#[test]
fn test_clear_then_hydrate_is_empty() {
    let storage = MemoryStore::new();
    let mut cart = CartStore::new(&storage, &CartConfig::default());
    cart.add(&product("a", 1.0));
    cart.clear();
    assert!(!storage.exists("cart").unwrap());

    let mut next_session = CartStore::new(&storage, &CartConfig::default());
    assert_eq!(next_session.hydrate(), Hydration::Empty);
    assert!(next_session.is_empty());
}

#[test]
fn test_set_all_persist_hydrate_round_trip() {
    let mut odd = LineItem::new(2, "Odd", "odd.jpg", 0.0).with_quantity(3);
    odd.unit_price = Numeric::from("bad");
    let items = vec![
        LineItem::new("z", "Zed", "z.jpg", 12.5).with_quantity(2),
        odd,
        LineItem::new(1, "One", "1.jpg", 0.1),
    ];

    let storage = MemoryStore::new();
    let mut cart = CartStore::new(&storage, &CartConfig::default());
    cart.set_all(items.clone());
    assert!(cart.persist());

    let mut restored = CartStore::new(&storage, &CartConfig::default());
    assert_eq!(restored.hydrate(), Hydration::Restored { lines: 3 });
    assert_eq!(restored.items(), items.as_slice());
}

#[test]
fn test_total_skips_bad_price() {
    let storage = MemoryStore::with_slot(
        "cart",
        r#"[
            {"productId": "x", "title": "X", "image": "", "unitPrice": 10, "quantity": 2},
            {"productId": "y", "title": "Y", "image": "", "unitPrice": "bad", "quantity": 3}
        ]"#,
    );
    let mut cart = CartStore::new(&storage, &CartConfig::default());
    cart.hydrate();

    assert_eq!(cart.total_price(), Money::new(2000, Currency::USD));
    assert_eq!(cart.total_price().to_decimal(), 20.0);
}

#[test]
fn test_null_price_line_survives_hydrate() {
    let storage = MemoryStore::with_slot(
        "cart",
        r#"[
            {"productId": "x", "title": "X", "image": "", "unitPrice": 10, "quantity": 2},
            {"productId": "y", "title": "Y", "image": "", "unitPrice": null, "quantity": 1}
        ]"#,
    );
    let mut cart = CartStore::new(&storage, &CartConfig::default());

    assert_eq!(cart.hydrate(), Hydration::Restored { lines: 2 });
    assert_eq!(cart.line_count(), 2);
    assert_eq!(cart.unit_count(), 3);
    assert_eq!(cart.total_price().amount_cents, 2000);
}

#[test]
fn test_sub_cent_price_totals_exactly() {
    let storage = MemoryStore::new();
    let mut cart = CartStore::new(&storage, &CartConfig::default());
    cart.hydrate();

    cart.add(&product("p", 0.125));
    assert!(cart.set_quantity(&ProductId::new("p"), 8));
    assert_eq!(cart.total_price().amount_cents, 100);
}

#[test]
fn test_add_add_add_scenario() {
    let storage = MemoryStore::new();
    let mut cart = CartStore::new(&storage, &CartConfig::default());
    cart.hydrate();

    cart.add(&product("a", 9.99));
    cart.add(&product("a", 9.99));
    cart.add(&product("b", 5.0));

    let lines: Vec<_> = cart
        .items()
        .iter()
        .map(|i| (i.product_id.to_string(), i.quantity()))
        .collect();
    assert_eq!(
        lines,
        vec![("a".to_string(), Some(2)), ("b".to_string(), Some(1))]
    );
    assert_eq!(cart.line_count(), 2);
    assert_eq!(cart.unit_count(), 3);
    assert_eq!(cart.total_price().amount_cents, 2498);
    assert_eq!(cart.total_price().display(), "$24.98");

    // the slot mirrors memory after every mutation
    let stored = parse_cart_snapshot(&storage.get("cart").unwrap().unwrap()).unwrap();
    assert_eq!(stored, cart.items());
}

#[test]
fn test_not_json_hydrates_empty() {
    let storage = MemoryStore::with_slot("cart", "not-json");
    let mut cart = CartStore::new(&storage, &CartConfig::default());
    assert_eq!(cart.hydrate(), Hydration::Malformed);
    assert!(cart.is_empty());
    assert_eq!(cart.total_price().amount_cents, 0);
}

#[test]
fn test_cart_survives_restart_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let config = CartConfig::default().with_namespace("storefront");

    {
        let storage = FileStore::open(dir.path()).unwrap();
        let mut cart = CartStore::new(storage, &config);
        cart.hydrate();
        cart.add(&product("a", 3.0));
        cart.add(&product("b", 4.0));
        cart.set_quantity(&ProductId::new("b"), 5);
        cart.remove(&ProductId::new("a"));
    }

    let storage = FileStore::open(dir.path()).unwrap();
    let mut cart = CartStore::new(storage, &config);
    assert_eq!(cart.hydrate(), Hydration::Restored { lines: 1 });
    assert_eq!(cart.unit_count(), 5);
    assert_eq!(cart.total_price().amount_cents, 2000);

    cart.clear();
    assert!(!cart.storage().exists("storefront:cart").unwrap());
}

#[test]
fn test_last_writer_wins_between_sessions() {
    let storage = MemoryStore::new();
    let mut first = CartStore::new(&storage, &CartConfig::default());
    let mut second = CartStore::new(&storage, &CartConfig::default());
    first.hydrate();
    second.hydrate();

    first.add(&product("a", 1.0));
    second.add(&product("b", 1.0));

    let mut reader = CartStore::new(&storage, &CartConfig::default());
    reader.hydrate();
    assert_eq!(reader.line_count(), 1);
    assert!(reader.get(&ProductId::new("b")).is_some());
}

#[test]
fn test_add_from_catalog() {
    let catalog = StaticCatalog::from_json(
        r#"[{"id": 1, "title": "Backpack", "price": 109.95, "image": "bag.jpg", "category": "bags"}]"#,
    )
    .unwrap();
    let storage = MemoryStore::new();
    let mut cart = CartStore::new(&storage, &CartConfig::default());

    let product = catalog.fetch_by_id(&ProductId::from(1)).unwrap();
    let line = cart.add(&product);
    assert_eq!(line.title, "Backpack");
    assert_eq!(line.image, "bag.jpg");
    assert_eq!(cart.total_price().display(), "$109.95");
}
