//! Shop graph and read-only collection queries over it.
//!
//! "Set" results are returned as vectors deduplicated in first-seen order,
//! so output is deterministic for a given fixture.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Customers grouped by city, in first-seen city order.
pub type CityGroups<'a> = Vec<(&'a City, Vec<&'a Customer>)>;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct City(pub String);

impl City {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Product {
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

// Prices compare by bit pattern so that Eq and Hash stay consistent.
impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.price.to_bits() == other.price.to_bits()
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.price.to_bits().hash(state);
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' for {:.1}", self.name, self.price)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Order {
    pub products: Vec<Product>,
    #[serde(default = "delivered_by_default")]
    pub is_delivered: bool,
}

fn delivered_by_default() -> bool {
    true
}

impl Order {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            is_delivered: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Customer {
    pub name: String,
    pub city: City,
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl Customer {
    pub fn new(name: impl Into<String>, city: City, orders: Vec<Order>) -> Self {
        Self {
            name: name.into(),
            city,
            orders,
        }
    }

    /// All products this customer has ordered, each listed once.
    pub fn ordered_products(&self) -> Vec<&Product> {
        self.all_products().unique().collect()
    }

    /// Most expensive product across all orders; the first one wins a tie.
    pub fn most_expensive_ordered_product(&self) -> Option<&Product> {
        first_max_by(self.all_products(), |a, b| a.price.total_cmp(&b.price))
    }

    /// Sum of prices over all orders, counting repeated products each time.
    pub fn total_order_price(&self) -> f64 {
        self.all_products().map(|p| p.price).sum()
    }

    fn all_products(&self) -> impl Iterator<Item = &Product> {
        self.orders.iter().flat_map(|order| order.products.iter())
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} from {}", self.name, self.city)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Shop {
    pub name: String,
    #[serde(default)]
    pub customers: Vec<Customer>,
}

impl Shop {
    pub fn new(name: impl Into<String>, customers: Vec<Customer>) -> Self {
        Self {
            name: name.into(),
            customers,
        }
    }

    /// Look up a customer by exact name.
    pub fn customer(&self, name: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.name == name)
    }

    pub fn set_of_customers(&self) -> Vec<&Customer> {
        self.customers.iter().unique().collect()
    }

    pub fn cities_customers_are_from(&self) -> Vec<&City> {
        self.customers.iter().map(|c| &c.city).unique().collect()
    }

    pub fn customers_from(&self, city: &City) -> Vec<&Customer> {
        self.customers.iter().filter(|c| &c.city == city).collect()
    }

    /// True for an empty shop.
    pub fn all_customers_are_from(&self, city: &City) -> bool {
        self.customers.iter().all(|c| &c.city == city)
    }

    pub fn has_customer_from(&self, city: &City) -> bool {
        self.customers.iter().any(|c| &c.city == city)
    }

    pub fn count_customers_from(&self, city: &City) -> usize {
        self.customers.iter().filter(|c| &c.city == city).count()
    }

    pub fn find_any_customer_from(&self, city: &City) -> Option<&Customer> {
        self.customers.iter().find(|c| &c.city == city)
    }

    /// Products ordered by at least one customer, each listed once.
    pub fn all_ordered_products(&self) -> Vec<&Product> {
        self.customers
            .iter()
            .flat_map(|c| c.ordered_products())
            .unique()
            .collect()
    }

    /// Customer with the most orders; the first one wins a tie.
    pub fn customer_with_max_orders(&self) -> Option<&Customer> {
        first_max_by(self.customers.iter(), |a, b| {
            a.orders.len().cmp(&b.orders.len())
        })
    }

    /// Stable ascending sort by number of orders.
    pub fn customers_sorted_by_order_count(&self) -> Vec<&Customer> {
        self.customers
            .iter()
            .sorted_by_key(|c| c.orders.len())
            .collect()
    }

    pub fn group_customers_by_city(&self) -> CityGroups<'_> {
        self.cities_customers_are_from()
            .into_iter()
            .map(|city| (city, self.customers_from(city)))
            .collect()
    }
}

/// Arg-max keeping the earliest element among equals.
/// `Iterator::max_by` keeps the last one, which is not what callers expect.
fn first_max_by<T, F>(items: impl Iterator<Item = T>, mut compare: F) -> Option<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    items.reduce(|best, item| {
        if compare(&item, &best) == Ordering::Greater {
            item
        } else {
            best
        }
    })
}
