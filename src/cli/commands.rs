//! Command handlers: parse per-command flags, query the engine, render.

use chrono::NaiveDate;
use serde::Serialize;

use crate::cli::{flag_value, output, CliError, CliSession, CommandResult, COMMANDS};
use crate::core::services::{SortBy, TransactionQuery};
use crate::domain::{DateRange, GoalStatus, Period};
use crate::errors::InsightsError;

pub fn profile(session: &mut CliSession, args: &[String]) -> CommandResult {
    let json = session.json();
    let engine = session.engine()?;
    let customer_id = requested_customer(args, engine);
    let profile = engine.profile(&customer_id);
    if json {
        return print_json(profile);
    }

    output::section("Customer Profile");
    output::info(format!("Name:         {} <{}>", profile.name, profile.email));
    output::info(format!("Customer id:  {}", profile.customer_id));
    output::info(format!("Account type: {}", profile.account_type));
    output::info(format!("Joined:       {}", profile.join_date));
    output::info(format!(
        "Total spent:  {:.2} {}",
        profile.total_spent, profile.currency
    ));
    Ok(())
}

pub fn summary(session: &mut CliSession, args: &[String]) -> CommandResult {
    let period = parse_period(args)?;
    let json = session.json();
    let engine = session.engine()?;
    let customer_id = requested_customer(args, engine);
    let currency = engine.dataset().profile.currency.clone();
    let summary = engine.spending_summary(&customer_id, period);
    if json {
        return print_json(&summary);
    }

    output::section(format!("Spending Summary ({period})"));
    output::info(format!(
        "Total spent:      {:.2} {currency}",
        summary.total_spent
    ));
    output::info(format!("Transactions:     {}", summary.transaction_count));
    output::info(format!(
        "Average amount:   {:.2} {currency}",
        summary.average_transaction
    ));
    output::info(format!("Top category:     {}", summary.top_category));
    output::info(format!(
        "vs previous:      spend {:+.1}%, transactions {:+.1}%",
        summary.compared_to_previous.spent_change, summary.compared_to_previous.transaction_change
    ));
    Ok(())
}

pub fn categories(session: &mut CliSession, args: &[String]) -> CommandResult {
    let period = parse_period(args)?;
    let custom_range = parse_custom_range(args)?;
    let json = session.json();
    let engine = session.engine()?;
    let customer_id = requested_customer(args, engine);
    let currency = engine.dataset().profile.currency.clone();
    let breakdown = engine.spending_by_category(&customer_id, period, custom_range);
    if json {
        return print_json(&breakdown);
    }

    output::section(format!(
        "Spending by Category ({} to {})",
        breakdown.date_range.start_date, breakdown.date_range.end_date
    ));
    if breakdown.categories.is_empty() {
        output::warning("No transactions in this range.");
        return Ok(());
    }
    for category in &breakdown.categories {
        output::info(format!(
            "{:<16} {:>10.2} {currency}  {:>5.1}%  ({} transactions)",
            category.name, category.amount, category.percentage, category.transaction_count
        ));
    }
    output::info(format!(
        "{:<16} {:>10.2} {currency}",
        "Total", breakdown.total_amount
    ));
    Ok(())
}

pub fn trends(session: &mut CliSession, args: &[String]) -> CommandResult {
    let months = parse_number::<u32>(args, "--months")?;
    let json = session.json();
    let engine = session.engine()?;
    let customer_id = requested_customer(args, engine);
    let currency = engine.dataset().profile.currency.clone();
    let trends = engine.spending_trends(&customer_id, months);
    if json {
        return print_json(&trends);
    }

    output::section("Monthly Trends");
    if trends.trends.is_empty() {
        output::warning("No trend history available.");
        return Ok(());
    }
    for trend in &trends.trends {
        output::info(format!(
            "{}  {:>10.2} {currency}  {:>3} transactions  avg {:>8.2}",
            trend.month, trend.total_spent, trend.transaction_count, trend.average_transaction
        ));
    }
    Ok(())
}

pub fn transactions(session: &mut CliSession, args: &[String]) -> CommandResult {
    let query = TransactionQuery {
        category: flag_value(args, "--category").map(str::to_string),
        start_date: parse_date(args, "--start")?,
        end_date: parse_date(args, "--end")?,
        sort_by: parse_sort(args)?,
        limit: parse_number::<usize>(args, "--limit")?,
        offset: parse_number::<usize>(args, "--offset")?.unwrap_or(0),
    };
    let json = session.json();
    let engine = session.engine()?;
    let customer_id = requested_customer(args, engine);
    let currency = engine.dataset().profile.currency.clone();
    let page = engine.transactions(&customer_id, &query);
    if json {
        return print_json(&page);
    }

    output::section("Transactions");
    for txn in &page.transactions {
        output::info(format!(
            "{}  {:<22} {:<14} {:>9.2} {currency}  {}",
            txn.date.format("%Y-%m-%d"),
            txn.merchant,
            txn.category,
            txn.amount,
            txn.payment_method
        ));
    }
    let shown = page.transactions.len();
    let pagination = &page.pagination;
    output::info(format!(
        "Showing {shown} of {} (offset {})",
        pagination.total, pagination.offset
    ));
    if pagination.has_more {
        output::info(format!(
            "More available: rerun with --offset {}",
            pagination.offset + pagination.limit
        ));
    }
    Ok(())
}

pub fn goals(session: &mut CliSession, args: &[String]) -> CommandResult {
    let json = session.json();
    let engine = session.engine()?;
    let customer_id = requested_customer(args, engine);
    let currency = engine.dataset().profile.currency.clone();
    let response = engine.goals(&customer_id);
    if json {
        return print_json(&response);
    }

    output::section("Budget Goals");
    if response.goals.is_empty() {
        output::warning("No goals configured.");
        return Ok(());
    }
    for goal in &response.goals {
        let line = format!(
            "{:<16} {:>8.2} / {:>8.2} {currency}  {:>5.1}% used, {} days left",
            goal.category,
            goal.current_spent,
            goal.monthly_budget,
            goal.percentage_used,
            goal.days_remaining
        );
        match goal.status {
            GoalStatus::OnTrack => output::success(line),
            GoalStatus::Warning => output::warning(line),
        }
    }
    Ok(())
}

pub fn filters(session: &mut CliSession, args: &[String]) -> CommandResult {
    let json = session.json();
    let engine = session.engine()?;
    let customer_id = requested_customer(args, engine);
    let catalog = engine.filters(&customer_id);
    if json {
        return print_json(&catalog);
    }

    output::section("Categories");
    for category in &catalog.categories {
        output::info(format!(
            "{:<16} {}  {}",
            category.name, category.color, category.icon
        ));
    }
    output::section("Date Range Presets");
    for preset in &catalog.date_range_presets {
        output::info(format!("{:<6} {}", preset.value, preset.label));
    }
    Ok(())
}

pub fn help(_session: &mut CliSession, _args: &[String]) -> CommandResult {
    output::section("Available commands");
    for entry in COMMANDS {
        output::info(format!("{:<14} {}", entry.name, entry.description));
        output::info(format!("{:<14} usage: {}", "", entry.usage));
    }
    output::info("\nGlobal flags: --data <path> (dataset file), --json (raw output)");
    Ok(())
}

pub fn version(_session: &mut CliSession, _args: &[String]) -> CommandResult {
    output::info(format!("insights_core v{}", env!("CARGO_PKG_VERSION")));
    Ok(())
}

fn requested_customer(args: &[String], engine: &crate::core::engine::InsightsEngine) -> String {
    flag_value(args, "--customer")
        .map(str::to_string)
        .unwrap_or_else(|| engine.dataset().profile.customer_id.clone())
}

fn print_json<T: Serialize>(value: &T) -> CommandResult {
    let json = serde_json::to_string_pretty(value).map_err(InsightsError::from)?;
    println!("{json}");
    Ok(())
}

fn parse_period(args: &[String]) -> Result<Period, CliError> {
    match flag_value(args, "--period") {
        Some(token) => token
            .parse()
            .map_err(|err: crate::domain::ParsePeriodError| {
                CliError::InvalidArguments(err.to_string())
            }),
        None => Ok(Period::default()),
    }
}

fn parse_sort(args: &[String]) -> Result<SortBy, CliError> {
    match flag_value(args, "--sort") {
        Some(token) => token
            .parse()
            .map_err(|err: crate::core::services::ParseSortByError| {
                CliError::InvalidArguments(err.to_string())
            }),
        None => Ok(SortBy::default()),
    }
}

fn parse_date(args: &[String], name: &str) -> Result<Option<NaiveDate>, CliError> {
    flag_value(args, name)
        .map(|raw| {
            raw.parse::<NaiveDate>().map_err(|_| {
                CliError::InvalidArguments(format!("{name} expects YYYY-MM-DD, got `{raw}`"))
            })
        })
        .transpose()
}

fn parse_number<T: std::str::FromStr>(args: &[String], name: &str) -> Result<Option<T>, CliError> {
    flag_value(args, name)
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|_| CliError::InvalidArguments(format!("{name} must be numeric, got `{raw}`")))
        })
        .transpose()
}

/// Custom breakdown range: both endpoints or neither, validated order.
fn parse_custom_range(args: &[String]) -> Result<Option<DateRange>, CliError> {
    let start = parse_date(args, "--start")?;
    let end = parse_date(args, "--end")?;
    match (start, end) {
        (Some(start), Some(end)) => DateRange::new(start, end)
            .map(Some)
            .map_err(|err| CliError::InvalidArguments(err.to_string())),
        (None, None) => Ok(None),
        _ => Err(CliError::InvalidArguments(
            "--start and --end must be supplied together".into(),
        )),
    }
}
