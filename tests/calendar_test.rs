//! Tests for the calendar date value: ordering, ranges, iteration, intervals

use rstest::rstest;

use koans::domain::{
    is_gregorian_leap_day, is_leap_day, Date, DateRange, DomainError, RepeatedTimeInterval,
    TimeInterval,
};

fn d(year: i32, month: u32, day: u32) -> Date {
    Date::new(year, month, day)
}

fn sample_dates() -> Vec<Date> {
    vec![
        d(2017, 1, 27),
        d(2017, 2, 2),
        d(2016, 12, 31),
        d(2017, 1, 27),
        d(2018, 1, 1),
        d(2017, 12, 1),
        d(1900, 2, 28),
    ]
}

// ============================================================
// Ordering
// ============================================================

#[test]
fn given_sample_dates_when_comparing_then_order_is_total() {
    let dates = sample_dates();
    for a in &dates {
        for b in &dates {
            // antisymmetry
            if a <= b && b <= a {
                assert_eq!(a, b);
            }
            for c in &dates {
                if a <= b && b <= c {
                    assert!(a <= c, "{} <= {} <= {} but not {} <= {}", a, b, c, a, c);
                }
            }
        }
    }
}

#[rstest]
#[case(d(2019, 1, 13), d(2019, 1, 10), false)]
#[case(d(2019, 1, 10), d(2019, 1, 13), true)]
#[case(d(2018, 12, 31), d(2019, 1, 1), true)]
#[case(d(2019, 2, 1), d(2019, 1, 31), false)]
#[case(d(2019, 1, 1), d(2019, 1, 1), false)]
fn given_two_dates_when_is_before_then_lexicographic(
    #[case] first: Date,
    #[case] second: Date,
    #[case] expected: bool,
) {
    assert_eq!(first.is_before(&second), expected);
}

// ============================================================
// Ranges
// ============================================================

#[rstest]
#[case(d(2019, 7, 6), true)]
#[case(d(2019, 1, 1), false)]
#[case(d(2019, 2, 10), true)]
#[case(d(2020, 1, 1), true)]
#[case(d(2020, 1, 2), false)]
fn given_range_when_contains_then_inclusive_on_both_ends(
    #[case] date: Date,
    #[case] expected: bool,
) {
    let range = DateRange::new(d(2019, 2, 10), d(2020, 1, 1));
    assert_eq!(range.contains(&date), expected);
    assert_eq!(date.in_range(d(2019, 2, 10), d(2020, 1, 1)), expected);
}

#[test]
fn given_sample_dates_when_contains_then_matches_bounds_check() {
    let dates = sample_dates();
    for s in &dates {
        for e in &dates {
            let range = s.range_to(*e);
            for x in &dates {
                assert_eq!(range.contains(x), s <= x && x <= e);
            }
        }
    }
}

#[test]
fn given_std_range_when_converting_then_same_bounds() {
    let range: DateRange = (d(2017, 2, 10)..=d(2018, 1, 1)).into();
    assert_eq!(range, DateRange::new(d(2017, 2, 10), d(2018, 1, 1)));
    assert!(!range.contains(&d(2017, 1, 1)));
    assert!(range.contains(&d(2017, 7, 6)));
}

// ============================================================
// Iteration
// ============================================================

#[test]
fn given_range_across_month_end_when_iterating_then_yields_each_day() {
    let range = d(2017, 1, 27).range_to(d(2017, 2, 2));

    let days: Vec<Date> = range.iter().collect();

    assert_eq!(
        days,
        vec![
            d(2017, 1, 27),
            d(2017, 1, 28),
            d(2017, 1, 29),
            d(2017, 1, 30),
            d(2017, 1, 31),
            d(2017, 2, 1),
            d(2017, 2, 2),
        ]
    );
}

#[test]
fn given_range_when_iterating_twice_then_restarts_from_start() {
    let range = d(2017, 1, 27).range_to(d(2017, 2, 2));

    let first: Vec<Date> = (&range).into_iter().collect();
    let second: Vec<Date> = range.iter().collect();

    assert_eq!(first, second);
    assert_eq!(first.len(), 7);
}

#[test]
fn given_leap_year_february_when_iterating_then_includes_29th() {
    let days: Vec<Date> = d(2016, 2, 27).range_to(d(2016, 3, 1)).iter().collect();
    assert_eq!(days.len(), 4);
    assert!(days.contains(&d(2016, 2, 29)));

    let days: Vec<Date> = d(2017, 2, 27).range_to(d(2017, 3, 1)).iter().collect();
    assert_eq!(days.len(), 3);
}

#[test]
fn given_year_end_when_iterating_then_rolls_into_next_year() {
    let days: Vec<Date> = d(2016, 12, 31).range_to(d(2017, 1, 1)).iter().collect();
    assert_eq!(days, vec![d(2016, 12, 31), d(2017, 1, 1)]);
}

#[test]
fn given_single_day_or_inverted_range_when_iterating_then_one_or_none() {
    assert_eq!(d(2017, 5, 5).range_to(d(2017, 5, 5)).iter().count(), 1);
    assert_eq!(d(2017, 5, 6).range_to(d(2017, 5, 5)).iter().count(), 0);
}

#[test]
fn given_invalid_start_when_iterating_then_yields_it_and_stops() {
    let days: Vec<Date> = d(2017, 2, 30).range_to(d(2017, 3, 5)).iter().collect();
    assert_eq!(days, vec![d(2017, 2, 30)]);
}

// ============================================================
// Intervals
// ============================================================

#[test]
fn given_date_when_adding_year_then_next_year() {
    assert_eq!(d(2017, 1, 27) + TimeInterval::Year, d(2018, 1, 27));
}

#[test]
fn given_date_when_adding_week_then_seven_days_later() {
    assert_eq!(d(2017, 1, 27) + TimeInterval::Week, d(2017, 2, 3));
}

#[test]
fn given_date_when_adding_year_and_week_then_both_apply() {
    assert_eq!(
        d(2017, 1, 27) + TimeInterval::Year + TimeInterval::Week,
        d(2018, 2, 3)
    );
}

#[test]
fn given_repeated_intervals_when_adding_in_any_order_then_same_result() {
    let start = d(2017, 1, 27);

    let forward = start + TimeInterval::Year * 2 + TimeInterval::Week * 3 + TimeInterval::Day * 5;
    let backward = start + TimeInterval::Day * 5 + TimeInterval::Week * 3 + TimeInterval::Year * 2;

    assert_eq!(forward, d(2019, 2, 22));
    assert_eq!(backward, forward);
}

#[rstest]
#[case(TimeInterval::Day)]
#[case(TimeInterval::Week)]
#[case(TimeInterval::Year)]
fn given_zero_count_when_adding_then_identity(#[case] interval: TimeInterval) {
    let date = d(2017, 1, 27);
    assert_eq!(date.add_interval(interval, 0), Ok(date));
}

#[rstest]
#[case(TimeInterval::Day, -27, d(2016, 12, 31))]
#[case(TimeInterval::Week, -1, d(2017, 1, 20))]
#[case(TimeInterval::Year, -1, d(2016, 1, 27))]
fn given_negative_count_when_adding_then_moves_backwards(
    #[case] interval: TimeInterval,
    #[case] count: i32,
    #[case] expected: Date,
) {
    assert_eq!(d(2017, 1, 27).add_interval(interval, count), Ok(expected));
}

#[test]
fn given_leap_day_when_adding_year_then_clamps_to_feb_28() {
    assert_eq!(
        d(2016, 2, 29).add_interval(TimeInterval::Year, 1),
        Ok(d(2017, 2, 28))
    );
    assert_eq!(
        d(2016, 2, 29).add_interval(TimeInterval::Year, 4),
        Ok(d(2020, 2, 29))
    );
}

#[test]
fn given_invalid_date_when_adding_then_error_not_panic() {
    let result = d(2017, 2, 30).checked_add(TimeInterval::Day * 1);
    assert!(matches!(result, Err(DomainError::InvalidDate { .. })));
}

#[test]
fn given_huge_count_when_adding_years_then_out_of_range() {
    let result = d(2017, 1, 1).add_interval(TimeInterval::Year, i32::MAX);
    assert!(matches!(result, Err(DomainError::DateOutOfRange { .. })));
}

#[rstest]
#[case("year", TimeInterval::Year, 1)]
#[case("week*3", TimeInterval::Week, 3)]
#[case("Day*-2", TimeInterval::Day, -2)]
fn given_interval_text_when_parsing_then_builds_repeated_interval(
    #[case] text: &str,
    #[case] interval: TimeInterval,
    #[case] count: i32,
) {
    assert_eq!(
        text.parse::<RepeatedTimeInterval>(),
        Ok(RepeatedTimeInterval::new(interval, count))
    );
}

#[rstest]
#[case("month")]
#[case("week*")]
#[case("*3")]
fn given_bad_interval_text_when_parsing_then_error(#[case] text: &str) {
    assert!(matches!(
        text.parse::<RepeatedTimeInterval>(),
        Err(DomainError::InvalidInterval(_))
    ));
}

#[rstest]
#[case(d(-1, 1, 1))]
#[case(d(-44, 3, 15))]
#[case(d(-12345, 12, 31))]
#[case(d(0, 2, 29))]
#[case(d(987, 3, 4))]
#[case(d(2017, 1, 27))]
fn given_date_when_displayed_then_parses_back(#[case] date: Date) {
    assert_eq!(date.to_string().parse::<Date>(), Ok(date));
}

#[test]
fn given_interval_into_negative_years_when_printed_then_parses_back() {
    let shifted = d(1, 1, 1)
        .add_interval(TimeInterval::Year, -2)
        .expect("within range");

    assert_eq!(shifted.to_string(), "-001-01-01");
    assert_eq!(shifted.to_string().parse::<Date>(), Ok(shifted));
}

// ============================================================
// Leap day
// ============================================================

#[rstest]
#[case(d(2018, 2, 29), false, false)]
#[case(d(2000, 2, 29), true, true)]
#[case(d(2016, 2, 29), true, true)]
#[case(d(2016, 2, 28), false, false)]
// year % 4 predicate misclassifies non-leap century years
#[case(d(1900, 2, 29), true, false)]
#[case(d(2100, 2, 29), true, false)]
fn given_date_when_checking_leap_day_then_both_predicates_agree_except_centuries(
    #[case] date: Date,
    #[case] inherited: bool,
    #[case] gregorian: bool,
) {
    assert_eq!(is_leap_day(&date), inherited);
    assert_eq!(is_gregorian_leap_day(&date), gregorian);
}
