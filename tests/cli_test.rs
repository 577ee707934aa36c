//! Argument parsing tests for the CLI

use clap::Parser;

use koans::cli::args::{Commands, DateCommands, IdiomCommands, ShopCommands};
use koans::cli::Cli;
use koans::domain::{Date, TimeInterval};

#[test]
fn given_date_add_args_when_parsing_then_intervals_in_order() {
    let cli = Cli::try_parse_from(["koans", "date", "add", "2017-01-27", "year*2", "week*3", "day"])
        .expect("valid args");

    match cli.command {
        Some(Commands::Date {
            command: DateCommands::Add { date, intervals },
        }) => {
            assert_eq!(date, Date::new(2017, 1, 27));
            assert_eq!(intervals.len(), 3);
            assert_eq!(intervals[0], TimeInterval::Year * 2);
            assert_eq!(intervals[2], TimeInterval::Day * 1);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn given_bad_date_when_parsing_then_rejected() {
    let result = Cli::try_parse_from(["koans", "date", "leap", "29-02-2000x"]);
    assert!(result.is_err());
}

#[test]
fn given_global_fixture_flag_after_subcommand_when_parsing_then_set() {
    let cli = Cli::try_parse_from(["koans", "shop", "group", "--fixture", "shop.toml", "-vv"])
        .expect("valid args");

    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.fixture.as_deref(), Some(std::path::Path::new("shop.toml")));
    assert!(matches!(
        cli.command,
        Some(Commands::Shop {
            command: ShopCommands::Group
        })
    ));
}

#[test]
fn given_negative_numbers_when_parsing_sort_then_accepted() {
    let cli = Cli::try_parse_from(["koans", "idioms", "sort", "3", "-1", "2"]).expect("valid args");

    match cli.command {
        Some(Commands::Idioms {
            command: IdiomCommands::Sort { numbers },
        }) => assert_eq!(numbers, vec![3, -1, 2]),
        other => panic!("unexpected command: {other:?}"),
    }
}
