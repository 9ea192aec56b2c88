//! End-to-end scenarios for the staff order board: matching, ranking, and
//! orchestration against scripted geocoder behavior.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;

use hotplate_core::{NO_DATA, OrderId, OrderStatus, PaymentMethod, ProductId, RestaurantId};
use hotplate_dispatch::geo::GeoCache;
use hotplate_dispatch::matching::{rank, suitable_restaurants};
use hotplate_dispatch::mocks::{InMemoryGeoPointStore, MockGeocoder};
use hotplate_dispatch::models::{Catalog, MenuEntry, Order, OrderItem, Restaurant};
use hotplate_dispatch::services::build_order_board;

const ORDER_ADDRESS: &str = "Москва, Красная площадь, 1";

fn restaurant(id: i32, name: &str, address: &str) -> Restaurant {
    Restaurant {
        id: RestaurantId::new(id),
        name: name.to_string(),
        address: address.to_string(),
        contact_phone: None,
    }
}

fn entry(restaurant_id: i32, product_id: i32, availability: bool) -> MenuEntry {
    MenuEntry {
        restaurant_id: RestaurantId::new(restaurant_id),
        product_id: ProductId::new(product_id),
        availability,
    }
}

fn order(id: i32, product_ids: &[i32], provider: Option<RestaurantId>) -> Order {
    Order {
        id: OrderId::new(id),
        firstname: "Пётр".to_string(),
        lastname: "Смирнов".to_string(),
        phonenumber: "+79993334455".to_string(),
        address: ORDER_ADDRESS.to_string(),
        status: OrderStatus::New,
        comment: String::new(),
        registered_at: Utc::now(),
        called_at: None,
        delivered_at: None,
        payment: PaymentMethod::Electronic,
        provider,
        items: product_ids
            .iter()
            .map(|&product_id| OrderItem {
                product_id: ProductId::new(product_id),
                price: Decimal::new(50000, 2),
                quantity: 1,
            })
            .collect(),
    }
}

fn geo_with(geocoder: &MockGeocoder) -> GeoCache {
    GeoCache::new(
        Arc::new(InMemoryGeoPointStore::new()),
        Arc::new(geocoder.clone()),
    )
}

// =============================================================================
// Matching Scenarios
// =============================================================================

#[test]
fn test_scenario_only_restaurant_with_available_pizza_matches() {
    // R1 has Pizza available, R2 lists it as unavailable.
    let catalog = Catalog {
        restaurants: vec![restaurant(1, "R1", "a"), restaurant(2, "R2", "b")],
        products: Vec::new(),
        menu: vec![entry(1, 10, true), entry(2, 10, false)],
    };

    let matched = suitable_restaurants(&catalog, &order(1, &[10], None));
    let names: Vec<&str> = matched.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["R1"]);
}

#[test]
fn test_scenario_empty_order_matches_all_restaurants() {
    let catalog = Catalog {
        restaurants: vec![
            restaurant(1, "R1", "a"),
            restaurant(2, "R2", "b"),
            restaurant(3, "R3", "c"),
        ],
        products: Vec::new(),
        menu: vec![entry(1, 10, true)],
    };

    assert_eq!(suitable_restaurants(&catalog, &order(1, &[], None)).len(), 3);
}

// =============================================================================
// Ranking Scenarios
// =============================================================================

#[tokio::test]
async fn test_scenario_resolved_candidate_precedes_failed_one() {
    // Order resolves to the Kremlin; R1 is ~1.7 km away; R2's address fails
    // to geocode and must come last with the unknown label.
    let geocoder = MockGeocoder::new()
        .with_match(ORDER_ADDRESS, ORDER_ADDRESS, 55.75, 37.62)
        .with_match("ул. Арбат, 1", "Россия, Москва, улица Арбат, 1", 55.76, 37.60)
        .with_failure("испорченный адрес");
    let geo = geo_with(&geocoder);

    let near = restaurant(1, "R1", "ул. Арбат, 1");
    let broken = restaurant(2, "R2", "испорченный адрес");
    let ranked = rank(&geo, ORDER_ADDRESS, vec![&broken, &near])
        .await
        .expect("store never fails");

    assert_eq!(ranked.len(), 2);
    let first = ranked.first().expect("two entries");
    let second = ranked.get(1).expect("two entries");
    assert_eq!(first.restaurant.name, "R1");
    let km = first.distance_km.expect("resolved distance");
    assert!(km > 1.4 && km < 1.9, "got {km} km");
    assert_eq!(second.restaurant.name, "R2");
    assert_eq!(second.distance_label(), NO_DATA);
}

#[tokio::test]
async fn test_scenario_order_address_failure_labels_all_unknown() {
    let geocoder = MockGeocoder::new()
        .with_failure(ORDER_ADDRESS)
        .with_match("a", "a", 55.75, 37.62)
        .with_match("b", "b", 55.76, 37.60);
    let geo = geo_with(&geocoder);

    let r1 = restaurant(1, "Zulu", "a");
    let r2 = restaurant(2, "Alpha", "b");
    let ranked = rank(&geo, ORDER_ADDRESS, vec![&r1, &r2])
        .await
        .expect("store never fails");

    // Original candidate order preserved, every label unknown.
    let names: Vec<&str> = ranked.iter().map(|r| r.restaurant.name.as_str()).collect();
    assert_eq!(names, vec!["Zulu", "Alpha"]);
    assert!(ranked.iter().all(|r| r.distance_label() == NO_DATA));
}

// =============================================================================
// Orchestration Scenarios
// =============================================================================

#[tokio::test]
async fn test_scenario_assigned_provider_returns_empty_pairing() {
    let geocoder = MockGeocoder::new();
    let geo = geo_with(&geocoder);
    let catalog = Catalog {
        restaurants: vec![restaurant(1, "R1", "a")],
        products: Vec::new(),
        menu: vec![entry(1, 10, true)],
    };

    let orders = vec![order(1, &[10], Some(RestaurantId::new(1)))];
    let board = build_order_board(&geo, &catalog, &orders)
        .await
        .expect("store never fails");

    assert_eq!(board.len(), 1);
    assert!(board.first().expect("one order").restaurants.is_empty());
    assert_eq!(geocoder.call_count(), 0);
}

#[tokio::test]
async fn test_board_preserves_active_order_enumeration() {
    let geocoder = MockGeocoder::new()
        .with_match(ORDER_ADDRESS, ORDER_ADDRESS, 55.75, 37.62)
        .with_match("a", "a", 55.751, 37.62);
    let geo = geo_with(&geocoder);
    let catalog = Catalog {
        restaurants: vec![restaurant(1, "R1", "a")],
        products: Vec::new(),
        menu: vec![entry(1, 10, true), entry(1, 20, true)],
    };

    let orders = vec![
        order(3, &[10], None),
        order(1, &[10, 20], None),
        order(2, &[10], Some(RestaurantId::new(1))),
    ];
    let board = build_order_board(&geo, &catalog, &orders)
        .await
        .expect("store never fails");

    let ids: Vec<i32> = board.iter().map(|f| f.order.id.as_i32()).collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

#[tokio::test]
async fn test_board_serializes_with_labels_and_cost() {
    let geocoder = MockGeocoder::new()
        .with_match(ORDER_ADDRESS, ORDER_ADDRESS, 55.75, 37.62)
        .with_match("a", "a", 55.768, 37.62); // ~2 km north
    let geo = geo_with(&geocoder);
    let catalog = Catalog {
        restaurants: vec![restaurant(1, "R1", "a")],
        products: Vec::new(),
        menu: vec![entry(1, 10, true)],
    };

    let orders = vec![order(1, &[10], None)];
    let board = build_order_board(&geo, &catalog, &orders)
        .await
        .expect("store never fails");

    let json = serde_json::to_value(&board).expect("serializes");
    let first = json.get(0).expect("one entry");
    assert_eq!(
        first
            .pointer("/restaurants/0/distance")
            .and_then(|v| v.as_str()),
        Some("2.00 км.")
    );
    // Decimal costs serialize as strings.
    assert_eq!(
        first.pointer("/order/cost").and_then(|v| v.as_str()),
        Some("500.00")
    );
}
