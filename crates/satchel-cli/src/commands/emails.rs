use crate::commands::contacts::report_updated;
use crate::commands::Context;
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Subcommand)]
pub enum EmailCommand {
    /// Add an email address to a contact
    Add(EmailAddArgs),
    /// Remove an email address from a contact
    Rm(EmailRmArgs),
    /// Replace an email address, keeping its position
    Edit(EmailEditArgs),
}

#[derive(Debug, Args)]
pub struct EmailAddArgs {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Args)]
pub struct EmailRmArgs {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Args)]
pub struct EmailEditArgs {
    pub name: String,
    pub old: String,
    pub new: String,
}

pub fn add_email(ctx: &mut Context<'_>, args: EmailAddArgs) -> Result<()> {
    let record = ctx.contacts.find_mut(&args.name)?;
    record.add_email(&args.email)?;
    report_updated(ctx.json, record)
}

pub fn remove_email(ctx: &mut Context<'_>, args: EmailRmArgs) -> Result<()> {
    let record = ctx.contacts.find_mut(&args.name)?;
    record.remove_email(&args.email)?;
    report_updated(ctx.json, record)
}

pub fn edit_email(ctx: &mut Context<'_>, args: EmailEditArgs) -> Result<()> {
    let record = ctx.contacts.find_mut(&args.name)?;
    record.edit_email(&args.old, &args.new)?;
    report_updated(ctx.json, record)
}
