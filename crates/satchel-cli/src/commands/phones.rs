use crate::commands::contacts::report_updated;
use crate::commands::Context;
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Subcommand)]
pub enum PhoneCommand {
    /// Add a phone number to a contact
    Add(PhoneAddArgs),
    /// Remove a phone number from a contact
    Rm(PhoneRmArgs),
    /// Replace a phone number, keeping its position
    Edit(PhoneEditArgs),
}

#[derive(Debug, Args)]
pub struct PhoneAddArgs {
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Args)]
pub struct PhoneRmArgs {
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Args)]
pub struct PhoneEditArgs {
    pub name: String,
    pub old: String,
    pub new: String,
}

pub fn add_phone(ctx: &mut Context<'_>, args: PhoneAddArgs) -> Result<()> {
    let record = ctx.contacts.find_mut(&args.name)?;
    record.add_phone(&args.phone)?;
    report_updated(ctx.json, record)
}

pub fn remove_phone(ctx: &mut Context<'_>, args: PhoneRmArgs) -> Result<()> {
    let record = ctx.contacts.find_mut(&args.name)?;
    record.remove_phone(&args.phone)?;
    report_updated(ctx.json, record)
}

pub fn edit_phone(ctx: &mut Context<'_>, args: PhoneEditArgs) -> Result<()> {
    let record = ctx.contacts.find_mut(&args.name)?;
    record.edit_phone(&args.old, &args.new)?;
    report_updated(ctx.json, record)
}
