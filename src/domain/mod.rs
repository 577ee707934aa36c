//! Domain layer: entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod calendar;
pub mod error;
pub mod idioms;
pub mod shop;

pub use calendar::{
    is_gregorian_leap_day, is_leap_day, Date, DateIter, DateRange, RepeatedTimeInterval,
    TimeInterval,
};
pub use error::{DomainError, DomainResult};
pub use shop::{City, CityGroups, Customer, Order, Product, Shop};
