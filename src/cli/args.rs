//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::domain::{Date, RepeatedTimeInterval};

/// Calendar dates, shop collection queries and small idiom exercises
#[derive(Parser, Debug)]
#[command(name = "koans")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ~/.config/koans/koans.toml)
    #[arg(long, global = true, env = "KOANS_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Shop fixture file (default: built-in sample shop)
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub fixture: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare, range and shift calendar dates
    Date {
        #[command(subcommand)]
        command: DateCommands,
    },

    /// Query customers, orders and products of a shop fixture
    Shop {
        #[command(subcommand)]
        command: ShopCommands,
    },

    /// Small idiom exercises
    Idioms {
        #[command(subcommand)]
        command: IdiomCommands,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum DateCommands {
    /// Order two dates
    Compare {
        /// First date (YYYY-MM-DD)
        first: Date,
        /// Second date (YYYY-MM-DD)
        second: Date,
    },

    /// Check whether a date lies in a closed range
    Contains {
        /// Date to check
        date: Date,
        /// Range start (inclusive)
        first: Date,
        /// Range end (inclusive)
        last: Date,
    },

    /// List every day of a closed range
    Iter {
        /// Range start (inclusive)
        first: Date,
        /// Range end (inclusive)
        last: Date,
    },

    /// Add intervals to a date, left to right
    Add {
        /// Start date
        date: Date,
        /// Intervals such as `year`, `week*3`, `day*-1`
        #[arg(required = true)]
        intervals: Vec<RepeatedTimeInterval>,
    },

    /// Check whether a date is 29 February of a leap year
    Leap {
        /// Date to check
        date: Date,
    },
}

#[derive(Subcommand, Debug)]
pub enum ShopCommands {
    /// List distinct customers
    Customers,

    /// List distinct cities customers are from
    Cities,

    /// List customers from a city
    From {
        /// City name
        city: String,
    },

    /// All/any/count/find queries for a city
    Check {
        /// City name
        city: String,
    },

    /// Products ordered by one customer, or by anyone
    Products {
        /// Customer name (default: all customers)
        customer: Option<String>,
    },

    /// Customer with the most orders
    #[command(name = "max-orders")]
    MaxOrders,

    /// Most expensive product a customer ordered
    #[command(name = "most-expensive")]
    MostExpensive {
        /// Customer name
        customer: String,
    },

    /// Customers sorted by ascending order count
    Sorted,

    /// Total price of everything a customer ordered
    Total {
        /// Customer name
        customer: String,
    },

    /// Customers grouped by city
    Group,
}

#[derive(Subcommand, Debug)]
pub enum IdiomCommands {
    /// Count invocations of a callable counter
    Invoke {
        /// Number of invocations
        #[arg(short, long, default_value_t = 2)]
        times: u32,
    },

    /// Build a rational number
    Rational {
        numerator: i32,
        /// Denominator (default: 1)
        denominator: Option<i32>,
    },

    /// Match text against the `13 JUN 1992` date pattern
    Pattern {
        text: String,
    },

    /// Check for an even number
    Even {
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<i32>,
    },

    /// Sort numbers descending
    Sort {
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<i32>,
    },

    /// Join options as `[a, b, c]`
    Join {
        options: Vec<String>,
    },

    /// Render names with defaulted options
    Defaults,

    /// List sample people
    People,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config paths
    Path,

    /// Create config template
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
}
