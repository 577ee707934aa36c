//! Tests for the shop collection queries, run against the sample fixture

use std::collections::HashSet;

use rstest::{fixture, rstest};

use koans::application::services::FixtureService;
use koans::domain::{City, Customer, Order, Product, Shop};
use koans::util::testing;

#[fixture]
fn shop() -> Shop {
    testing::init_test_setup();
    FixtureService::sample().expect("sample shop parses")
}

fn names<'a>(customers: impl IntoIterator<Item = &'a Customer>) -> Vec<&'a str> {
    customers.into_iter().map(|c| c.name.as_str()).collect()
}

fn customer<'a>(shop: &'a Shop, name: &str) -> &'a Customer {
    shop.customer(name).expect("customer in sample shop")
}

// ============================================================
// toSet, filter, map
// ============================================================

#[rstest]
fn given_shop_when_set_of_customers_then_all_distinct(shop: Shop) {
    let customers = shop.set_of_customers();
    assert_eq!(customers.len(), 7);
    assert_eq!(customers[0].name, "Lucas");
}

#[test]
fn given_duplicate_customer_when_set_of_customers_then_listed_once() {
    let ann = Customer::new("Ann", City::new("Oslo"), vec![]);
    let shop = Shop::new("dup", vec![ann.clone(), ann]);
    assert_eq!(shop.set_of_customers().len(), 1);
}

#[rstest]
fn given_shop_when_cities_then_first_seen_order(shop: Shop) {
    let cities: Vec<&str> = shop
        .cities_customers_are_from()
        .into_iter()
        .map(City::name)
        .collect();
    assert_eq!(
        cities,
        vec!["Canberra", "Vancouver", "Budapest", "Ankara", "Tokyo"]
    );
}

#[rstest]
fn given_city_when_customers_from_then_only_that_city(shop: Shop) {
    assert_eq!(
        names(shop.customers_from(&City::new("Tokyo"))),
        vec!["Asuka", "Riku"]
    );
    assert!(shop.customers_from(&City::new("Bangkok")).is_empty());
}

// ============================================================
// all, any, count, find
// ============================================================

#[rstest]
#[case("Tokyo", false, true, 2, Some("Asuka"))]
#[case("Vancouver", false, true, 1, Some("Nathan"))]
#[case("Bangkok", false, false, 0, None)]
fn given_city_when_predicates_then_expected(
    shop: Shop,
    #[case] city: &str,
    #[case] all: bool,
    #[case] any: bool,
    #[case] count: usize,
    #[case] first: Option<&str>,
) {
    let city = City::new(city);
    assert_eq!(shop.all_customers_are_from(&city), all);
    assert_eq!(shop.has_customer_from(&city), any);
    assert_eq!(shop.count_customers_from(&city), count);
    assert_eq!(
        shop.find_any_customer_from(&city).map(|c| c.name.as_str()),
        first
    );
}

#[test]
fn given_single_city_shop_when_all_from_then_true() {
    let oslo = City::new("Oslo");
    let shop = Shop::new(
        "s",
        vec![
            Customer::new("A", oslo.clone(), vec![]),
            Customer::new("B", oslo.clone(), vec![]),
        ],
    );
    assert!(shop.all_customers_are_from(&oslo));
}

// ============================================================
// flatMap
// ============================================================

#[rstest]
fn given_customer_when_ordered_products_then_deduplicated(shop: Shop) {
    let lucas = customer(&shop, "Lucas");
    let products: Vec<&str> = lucas
        .ordered_products()
        .into_iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(products, vec!["ReSharper", "DotMemory", "DotTrace"]);
}

#[rstest]
fn given_shop_when_all_ordered_products_then_union_of_customers(shop: Shop) {
    let all: HashSet<&Product> = shop.all_ordered_products().into_iter().collect();
    let union: HashSet<&Product> = shop
        .customers
        .iter()
        .flat_map(|c| c.ordered_products())
        .collect();

    assert_eq!(all, union);
    assert_eq!(shop.all_ordered_products().len(), 7);
    assert_eq!(shop.all_ordered_products(), shop.all_ordered_products());
}

// ============================================================
// max, sort, sum
// ============================================================

#[rstest]
fn given_shop_when_customer_with_max_orders_then_reka(shop: Shop) {
    let best = shop.customer_with_max_orders().expect("non-empty shop");
    assert_eq!(best.name, "Reka");
    assert_eq!(best.orders.len(), 3);
}

#[rstest]
fn given_customer_when_most_expensive_product_then_highest_price(shop: Shop) {
    let product = customer(&shop, "Lucas")
        .most_expensive_ordered_product()
        .expect("lucas ordered something");
    assert_eq!(product, &Product::new("DotTrace", 159.0));

    assert!(customer(&shop, "Cooper")
        .most_expensive_ordered_product()
        .is_none());
}

#[rstest]
fn given_shop_when_sorted_by_order_count_then_stable_ascending(shop: Shop) {
    assert_eq!(
        names(shop.customers_sorted_by_order_count()),
        vec!["Cooper", "Nathan", "Bajram", "Asuka", "Lucas", "Riku", "Reka"]
    );
}

#[rstest]
#[case("Lucas", 586.0)]
#[case("Riku", 297.0)]
#[case("Reka", 597.0)]
#[case("Cooper", 0.0)]
fn given_customer_when_total_order_price_then_counts_duplicates(
    shop: Shop,
    #[case] name: &str,
    #[case] expected: f64,
) {
    let total = customer(&shop, name).total_order_price();
    assert!((total - expected).abs() < 1e-9, "{name}: {total}");
}

// ============================================================
// groupBy
// ============================================================

#[rstest]
fn given_shop_when_grouping_by_city_then_partitions_customers(shop: Shop) {
    let groups = shop.group_customers_by_city();

    let grouped: Vec<(&str, Vec<&str>)> = groups
        .iter()
        .map(|(city, customers)| (city.name(), names(customers.iter().copied())))
        .collect();
    assert_eq!(
        grouped,
        vec![
            ("Canberra", vec!["Lucas", "Cooper"]),
            ("Vancouver", vec!["Nathan"]),
            ("Budapest", vec!["Reka"]),
            ("Ankara", vec!["Bajram"]),
            ("Tokyo", vec!["Asuka", "Riku"]),
        ]
    );

    // exhaustive and disjoint
    let total: usize = groups.iter().map(|(_, members)| members.len()).sum();
    assert_eq!(total, shop.customers.len());
    for (city, members) in &groups {
        assert!(members.iter().all(|c| &c.city == *city));
    }
}

#[test]
fn given_interleaved_cities_when_grouping_then_keeps_first_seen_order() {
    let shop = Shop::new(
        "s",
        vec![
            Customer::new("A", City::new("X"), vec![]),
            Customer::new("B", City::new("Y"), vec![]),
            Customer::new("C", City::new("X"), vec![Order::new(vec![])]),
        ],
    );

    let groups = shop.group_customers_by_city();

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].0.name(), "X");
    assert_eq!(names(groups[0].1.iter().copied()), vec!["A", "C"]);
}
