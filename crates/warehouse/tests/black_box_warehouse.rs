//! Black-box tests driving the warehouse through its public API only,
//! the way an embedding application would.

use std::sync::Arc;
use std::thread;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use warehouse_catalog::Warehouse;
use warehouse_categories::CategoryRegistry;
use warehouse_core::ProductId;
use warehouse_products::{ElectronicsProduct, FoodProduct, Product};

fn id(n: u128) -> ProductId {
    ProductId::from_uuid(Uuid::from_u128(n))
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn electronics(
    n: u128,
    name: &str,
    category: &str,
    weight: Decimal,
    registry: &CategoryRegistry,
) -> Product {
    ElectronicsProduct::new(
        id(n),
        name,
        registry.of(category).unwrap(),
        Decimal::from(499),
        12,
        weight,
    )
    .unwrap()
    .into()
}

fn food(
    n: u128,
    name: &str,
    category: &str,
    expiry: NaiveDate,
    weight: Decimal,
    registry: &CategoryRegistry,
) -> Product {
    FoodProduct::new(
        id(n),
        name,
        registry.of(category).unwrap(),
        Decimal::from(5),
        expiry,
        weight,
    )
    .unwrap()
    .into()
}

#[test]
fn expired_view_contains_exactly_the_expired_food() {
    let registry = CategoryRegistry::new();
    let warehouse = Warehouse::new();
    let today = date(2026, 8, 6);

    warehouse
        .add(food(1, "Old milk", "dairy", date(2026, 8, 1), Decimal::from(1), &registry))
        .unwrap();
    warehouse
        .add(food(2, "Fresh milk", "dairy", date(2026, 9, 1), Decimal::from(1), &registry))
        .unwrap();
    warehouse
        .add(food(3, "Yogurt", "dairy", today, Decimal::from(1), &registry))
        .unwrap();
    warehouse
        .add(electronics(4, "Laptop", "electronics", Decimal::from(2), &registry))
        .unwrap();

    let expired = warehouse.expired_products_on(today);
    let expired_ids: Vec<ProductId> = expired.iter().map(Product::id).collect();

    // Expired on the expiry date itself, never before; electronics carry no
    // expiry capability at all.
    assert_eq!(expired_ids, vec![id(1), id(3)]);
}

#[test]
fn shippable_view_reports_the_documented_costs() {
    let registry = CategoryRegistry::new();
    let warehouse = Warehouse::new();

    warehouse
        .add(electronics(1, "Server", "electronics", Decimal::from(6), &registry))
        .unwrap();
    warehouse
        .add(electronics(2, "Tablet", "electronics", Decimal::from(3), &registry))
        .unwrap();
    warehouse
        .add(food(3, "Cheese", "dairy", date(2026, 12, 1), Decimal::from(2), &registry))
        .unwrap();

    let shippable = warehouse.shippable_products();
    assert_eq!(shippable.len(), 3);

    let costs: Vec<Decimal> = shippable
        .iter()
        .map(|p| p.shippable().unwrap().shipping_cost())
        .collect();
    assert_eq!(
        costs,
        vec![Decimal::from(768), Decimal::from(237), Decimal::from(100)]
    );
}

#[test]
fn grouping_merges_case_variant_categories() {
    let registry = CategoryRegistry::new();
    let warehouse = Warehouse::new();

    warehouse
        .add(food(1, "Apple", "fruit", date(2026, 12, 1), Decimal::from(1), &registry))
        .unwrap();
    warehouse
        .add(food(2, "Banana", "Fruit", date(2026, 12, 1), Decimal::from(1), &registry))
        .unwrap();
    warehouse
        .add(food(3, "Carrot", "veg", date(2026, 12, 1), Decimal::from(1), &registry))
        .unwrap();

    let groups = warehouse.grouped_by_category();
    assert_eq!(groups.len(), 2);

    let fruit = &groups[&registry.of("Fruit").unwrap()];
    let fruit_names: Vec<&str> = fruit.iter().map(Product::name).collect();
    assert_eq!(fruit_names, vec!["Apple", "Banana"]);

    let veg = &groups[&registry.of("Veg").unwrap()];
    assert_eq!(veg.len(), 1);
    assert_eq!(veg[0].name(), "Carrot");
}

#[test]
fn views_preserve_insertion_order() {
    let registry = CategoryRegistry::new();
    let warehouse = Warehouse::new();

    for n in 0..10u128 {
        warehouse
            .add(electronics(n, &format!("Device {n}"), "electronics", Decimal::from(1), &registry))
            .unwrap();
    }

    let order: Vec<ProductId> = warehouse.products().iter().map(Product::id).collect();
    let expected: Vec<ProductId> = (0..10u128).map(id).collect();
    assert_eq!(order, expected);

    let shippable_order: Vec<ProductId> =
        warehouse.shippable_products().iter().map(Product::id).collect();
    assert_eq!(shippable_order, expected);
}

#[test]
fn concurrent_adds_land_exactly_once_each() {
    let registry = Arc::new(CategoryRegistry::new());
    let warehouse = Arc::new(Warehouse::new());

    let handles: Vec<_> = (0..8u128)
        .map(|worker| {
            let registry = Arc::clone(&registry);
            let warehouse = Arc::clone(&warehouse);
            thread::spawn(move || {
                for n in 0..50u128 {
                    let product = electronics(
                        worker * 1_000 + n,
                        "Device",
                        "electronics",
                        Decimal::from(1),
                        &registry,
                    );
                    warehouse.add(product).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(warehouse.len(), 8 * 50);
    for worker in 0..8u128 {
        for n in 0..50u128 {
            assert!(warehouse.product_by_id(id(worker * 1_000 + n)).is_some());
        }
    }
}

#[test]
fn readers_and_writers_interleave_safely() {
    let registry = Arc::new(CategoryRegistry::new());
    let warehouse = Arc::new(Warehouse::new());

    let writer = {
        let registry = Arc::clone(&registry);
        let warehouse = Arc::clone(&warehouse);
        thread::spawn(move || {
            for n in 0..200u128 {
                warehouse
                    .add(electronics(n, "Device", "electronics", Decimal::from(1), &registry))
                    .unwrap();
            }
        })
    };

    let reader = {
        let warehouse = Arc::clone(&warehouse);
        thread::spawn(move || {
            // Every snapshot must be internally consistent: ids unique,
            // count monotone within the snapshot.
            for _ in 0..200 {
                let snapshot = warehouse.products();
                let mut ids: Vec<ProductId> = snapshot.iter().map(Product::id).collect();
                let count = ids.len();
                ids.sort_by_key(|i| *i.as_uuid());
                ids.dedup();
                assert_eq!(ids.len(), count);
            }
        })
    };

    writer.join().unwrap();
    reader.join().unwrap();
    assert_eq!(warehouse.len(), 200);
}
