use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use crate::util::resolve_window_days;
use anyhow::Result;
use clap::Args;
use satchel_core::time::local_today;
use satchel_core::DATE_FORMAT;

#[derive(Debug, Args)]
pub struct SearchArgs {
    pub term: String,
}

#[derive(Debug, Args)]
pub struct SmartSearchArgs {
    pub term: String,
    /// Maximum number of results
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Debug, Args)]
pub struct BirthdaysArgs {
    /// Window in days; birthdays exactly this many days away are excluded
    #[arg(long)]
    pub days: Option<i64>,
}

pub fn search(ctx: &mut Context<'_>, args: SearchArgs) -> Result<()> {
    if args.term.trim().is_empty() {
        return Err(invalid_input("search term cannot be empty"));
    }
    let results = ctx.contacts.search(&args.term);
    if ctx.json {
        print_json(&results)?;
        return Ok(());
    }

    if results.is_empty() {
        println!("no contacts match {}", args.term);
        return Ok(());
    }
    for record in results {
        println!("{}", record);
    }
    Ok(())
}

pub fn smart_search(ctx: &mut Context<'_>, args: SmartSearchArgs) -> Result<()> {
    if args.term.trim().is_empty() {
        return Err(invalid_input("search term cannot be empty"));
    }
    let limit = args.limit.unwrap_or(ctx.config.smart_search_limit);
    let results = ctx.contacts.smart_search(&args.term, limit);
    if ctx.json {
        print_json(&results)?;
        return Ok(());
    }

    if results.is_empty() {
        println!("no contacts match {}", args.term);
        return Ok(());
    }
    for record in results {
        println!("{}", record);
    }
    Ok(())
}

pub fn birthdays(ctx: &mut Context<'_>, args: BirthdaysArgs) -> Result<()> {
    let days = resolve_window_days(args.days, ctx.config.upcoming_days)?;
    let upcoming = ctx.contacts.upcoming_birthdays(local_today(), days);
    if ctx.json {
        print_json(&upcoming)?;
        return Ok(());
    }

    if upcoming.is_empty() {
        println!("no upcoming birthdays");
        return Ok(());
    }
    for entry in upcoming {
        println!("{}: {}", entry.date.format(DATE_FORMAT), entry.name);
    }
    Ok(())
}
