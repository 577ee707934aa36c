//! Small idiom exercises: call counting, conversions, defaults, sorting.

use std::fmt;
use std::sync::OnceLock;

use itertools::Itertools;
use regex::Regex;

/// Counts how often it has been invoked.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Invokable {
    number_of_invocations: u32,
}

impl Invokable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one invocation. Returns `self` so calls can be chained.
    pub fn invoke(&mut self) -> &mut Self {
        self.number_of_invocations += 1;
        self
    }

    pub fn number_of_invocations(&self) -> u32 {
        self.number_of_invocations
    }
}

pub fn invoke_twice(invokable: &mut Invokable) -> &mut Invokable {
    invokable.invoke().invoke()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RationalNumber {
    pub numerator: i32,
    pub denominator: i32,
}

impl RationalNumber {
    pub const fn new(numerator: i32, denominator: i32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }
}

impl fmt::Display for RationalNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl From<i32> for RationalNumber {
    fn from(n: i32) -> Self {
        RationalNumber::new(n, 1)
    }
}

impl From<(i32, i32)> for RationalNumber {
    fn from((numerator, denominator): (i32, i32)) -> Self {
        RationalNumber::new(numerator, denominator)
    }
}

/// `.r()` conversion on integers and integer pairs.
pub trait ToRational {
    fn r(self) -> RationalNumber;
}

impl ToRational for i32 {
    fn r(self) -> RationalNumber {
        self.into()
    }
}

impl ToRational for (i32, i32) {
    fn r(self) -> RationalNumber {
        self.into()
    }
}

/// `["1", "A"]` → `"[1, A]"`.
pub fn join_options<S: AsRef<str>>(options: &[S]) -> String {
    format!("[{}]", options.iter().map(AsRef::<str>::as_ref).join(", "))
}

/// Name/number rendering with defaulted options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    pub number: i32,
    pub to_upper_case: bool,
}

impl Default for Greeting {
    fn default() -> Self {
        Self {
            number: 42,
            to_upper_case: false,
        }
    }
}

impl Greeting {
    pub fn number(mut self, number: i32) -> Self {
        self.number = number;
        self
    }

    pub fn upper_case(mut self) -> Self {
        self.to_upper_case = true;
        self
    }

    pub fn render(&self, name: &str) -> String {
        let name = if self.to_upper_case {
            name.to_uppercase()
        } else {
            name.to_string()
        };
        format!("{}{}", name, self.number)
    }
}

/// `["a42", "b1", "C42", "D2"]`
pub fn use_foo() -> Vec<String> {
    vec![
        Greeting::default().render("a"),
        Greeting::default().number(1).render("b"),
        Greeting::default().upper_case().render("c"),
        Greeting::default().number(2).upper_case().render("d"),
    ]
}

pub fn contains_even(numbers: &[i32]) -> bool {
    numbers.iter().any(|n| n % 2 == 0)
}

const MONTH: &str = "(JAN|FEB|MAR|APR|MAY|JUN|JUL|AUG|SEP|OCT|NOV|DEC)";

/// Matches a whole `13 JUN 1992` style date.
pub fn date_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(&format!(r"^\d{{2}} {} \d{{4}}$", MONTH)).expect("static date pattern")
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

pub fn get_people() -> Vec<Person> {
    vec![
        Person {
            name: "Alice".into(),
            age: 29,
        },
        Person {
            name: "Bob".into(),
            age: 31,
        },
    ]
}

/// Descending sort through an explicit comparator.
pub fn sorted_descending_by_comparator(mut numbers: Vec<i32>) -> Vec<i32> {
    numbers.sort_by(|a, b| b.cmp(a));
    numbers
}

/// Descending sort through a reversed key.
pub fn sorted_descending(numbers: Vec<i32>) -> Vec<i32> {
    numbers
        .into_iter()
        .sorted_by_key(|n| std::cmp::Reverse(*n))
        .collect()
}
