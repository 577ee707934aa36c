//! Command dispatch: one handler per subcommand.

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use termtree::Tree;
use tracing::{debug, instrument};

use crate::application::services::FixtureService;
use crate::application::ApplicationResult;
use crate::cli::args::{Cli, Commands, ConfigCommands, DateCommands, IdiomCommands, ShopCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::domain::idioms::{
    contains_even, date_pattern, get_people, join_options, sorted_descending, use_foo,
    Invokable, RationalNumber,
};
use crate::domain::{is_gregorian_leap_day, is_leap_day, City, Date, RepeatedTimeInterval, Shop};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::traits::{FileSystem, RealFileSystem};
use crate::infrastructure::InfraError;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let Some(command) = &cli.command else {
        return Err(CliError::Usage(
            "no command given, see `koans --help`".to_string(),
        ));
    };

    if let Commands::Completion { shell } = command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(*shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    // init writes the config file that load_settings would otherwise require
    if let Commands::Config {
        command: ConfigCommands::Init { force },
    } = command
    {
        return init_config(&RealFileSystem, cli, *force);
    }

    let container = ServiceContainer::new(load_settings(cli)?);
    if !container.settings.color {
        colored::control::set_override(false);
    }

    match command {
        Commands::Date { command } => execute_date(command),
        Commands::Shop { command } => execute_shop(&container, command),
        Commands::Idioms { command } => execute_idioms(command),
        Commands::Config { command } => execute_config(&container, cli, command),
        Commands::Completion { .. } => Ok(()),
    }
}

/// Config file/env layers, then the `--fixture` flag on top.
fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(fixture) = &cli.fixture {
        settings.fixture = Some(fixture.clone());
    }
    debug!("settings: {:?}", settings);
    Ok(settings)
}

// ============================================================
// date
// ============================================================

#[instrument]
fn execute_date(command: &DateCommands) -> CliResult<()> {
    match command {
        DateCommands::Compare { first, second } => {
            output::action("order", &format!("{:?}", first.cmp(second)));
            output::verdict(first.is_before(second), &format!("{} < {}", first, second));
            output::verdict(second.is_before(first), &format!("{} < {}", second, first));
        }
        DateCommands::Contains { date, first, last } => {
            output::verdict(
                date.in_range(*first, *last),
                &format!("{} in [{}, {}]", date, first, last),
            );
        }
        DateCommands::Iter { first, last } => {
            for day in first.range_to(*last).iter() {
                output::info(&day);
            }
        }
        DateCommands::Add { date, intervals } => {
            let result = add_all(*date, intervals)?;
            output::info(&result);
        }
        DateCommands::Leap { date } => {
            output::verdict(is_leap_day(date), &format!("{} is a leap day (year % 4)", date));
            output::verdict(
                is_gregorian_leap_day(date),
                &format!("{} is a leap day (gregorian)", date),
            );
        }
    }
    Ok(())
}

fn add_all(date: Date, intervals: &[RepeatedTimeInterval]) -> CliResult<Date> {
    let mut current = date;
    for repeated in intervals {
        current = current.checked_add(*repeated)?;
        debug!("add_all: +{} -> {}", repeated, current);
    }
    Ok(current)
}

// ============================================================
// shop
// ============================================================

#[instrument(skip(container))]
fn execute_shop(container: &ServiceContainer, command: &ShopCommands) -> CliResult<()> {
    let shop = container.shop()?;
    let width = container.settings.separator_width;

    output::separator(width);
    run_shop_query(&shop, command)?;
    output::separator(width);
    Ok(())
}

fn run_shop_query(shop: &Shop, command: &ShopCommands) -> ApplicationResult<()> {
    match command {
        ShopCommands::Customers => {
            for customer in shop.set_of_customers() {
                output::info(customer);
            }
        }
        ShopCommands::Cities => {
            for city in shop.cities_customers_are_from() {
                output::info(city);
            }
        }
        ShopCommands::From { city } => {
            for customer in shop.customers_from(&City::new(city.as_str())) {
                output::info(customer);
            }
        }
        ShopCommands::Check { city } => {
            let city = City::new(city.as_str());
            output::verdict(
                shop.all_customers_are_from(&city),
                &format!("all customers are from {}", city),
            );
            output::verdict(
                shop.has_customer_from(&city),
                &format!("some customer is from {}", city),
            );
            output::action("count", &shop.count_customers_from(&city));
            match shop.find_any_customer_from(&city) {
                Some(customer) => output::action("found", customer),
                None => output::action("found", "none"),
            }
        }
        ShopCommands::Products { customer } => {
            let products = match customer {
                Some(name) => FixtureService::require_customer(shop, name)?.ordered_products(),
                None => shop.all_ordered_products(),
            };
            for product in products {
                output::info(product);
            }
        }
        ShopCommands::MaxOrders => match shop.customer_with_max_orders() {
            Some(customer) => output::info(&format!(
                "{} ({} orders)",
                customer,
                customer.orders.len()
            )),
            None => output::info("none"),
        },
        ShopCommands::MostExpensive { customer } => {
            let customer = FixtureService::require_customer(shop, customer)?;
            match customer.most_expensive_ordered_product() {
                Some(product) => output::info(product),
                None => output::info("none"),
            }
        }
        ShopCommands::Sorted => {
            for customer in shop.customers_sorted_by_order_count() {
                output::info(&format!("{} ({} orders)", customer, customer.orders.len()));
            }
        }
        ShopCommands::Total { customer } => {
            let customer = FixtureService::require_customer(shop, customer)?;
            output::action(&customer.name, &format!("{:.1}", customer.total_order_price()));
        }
        ShopCommands::Group => {
            let tree = Tree::new(shop.name.clone()).with_leaves(
                shop.group_customers_by_city()
                    .into_iter()
                    .map(|(city, customers)| {
                        Tree::new(city.to_string())
                            .with_leaves(customers.into_iter().map(|c| c.name.clone()))
                    }),
            );
            output::info(&tree);
        }
    }
    Ok(())
}

// ============================================================
// idioms
// ============================================================

#[instrument]
fn execute_idioms(command: &IdiomCommands) -> CliResult<()> {
    match command {
        IdiomCommands::Invoke { times } => {
            let mut invokable = Invokable::new();
            for _ in 0..*times {
                invokable.invoke();
            }
            output::action("invocations", &invokable.number_of_invocations());
        }
        IdiomCommands::Rational {
            numerator,
            denominator,
        } => {
            let rational = match denominator {
                Some(d) => RationalNumber::from((*numerator, *d)),
                None => RationalNumber::from(*numerator),
            };
            output::info(&rational);
        }
        IdiomCommands::Pattern { text } => {
            output::verdict(date_pattern().is_match(text), text);
        }
        IdiomCommands::Even { numbers } => {
            output::verdict(
                contains_even(numbers),
                &format!("{:?} contains an even number", numbers),
            );
        }
        IdiomCommands::Sort { numbers } => {
            output::info(&format!("{:?}", sorted_descending(numbers.clone())));
        }
        IdiomCommands::Join { options } => {
            output::info(&join_options(options));
        }
        IdiomCommands::Defaults => {
            output::info(&join_options(&use_foo()));
        }
        IdiomCommands::People => {
            for person in get_people() {
                output::detail(&format!("{} ({})", person.name, person.age));
            }
        }
    }
    Ok(())
}

// ============================================================
// config
// ============================================================

#[instrument(skip(container, cli))]
fn execute_config(
    container: &ServiceContainer,
    cli: &Cli,
    command: &ConfigCommands,
) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::info(&container.settings.to_toml()?);
        }
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => output::action("global", &path.display()),
                None => output::action("global", "unavailable"),
            }
            if let Some(path) = &cli.config {
                output::action("explicit", &path.display());
            }
        }
        ConfigCommands::Init { force } => {
            init_config(container.fs.as_ref(), cli, *force)?;
        }
    }
    Ok(())
}

#[instrument(skip(fs, cli))]
fn init_config(fs: &dyn FileSystem, cli: &Cli, force: bool) -> CliResult<()> {
    let path = cli
        .config
        .clone()
        .or_else(global_config_path)
        .ok_or_else(|| CliError::Usage("cannot determine config directory".into()))?;
    if fs.exists(&path) && !force {
        return Err(CliError::InvalidArgs(format!(
            "config already exists: {} (use --force)",
            path.display()
        )));
    }
    fs.ensure_parent(&path)
        .and_then(|_| fs.write(&path, &Settings::template()))
        .map_err(|e| InfraError::io(format!("write {}", path.display()), e))?;
    output::success(&format!("created {}", path.display()));
    Ok(())
}
