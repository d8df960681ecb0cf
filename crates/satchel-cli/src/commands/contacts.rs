use crate::commands::{print_json, Context};
use anyhow::Result;
use clap::Args;
use satchel_core::Record;

#[derive(Debug, Args)]
pub struct AddContactArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long, value_name = "PHONE")]
    pub phone: Vec<String>,
    #[arg(long, value_name = "EMAIL")]
    pub email: Vec<String>,
    #[arg(long, value_name = "DD.MM.YYYY")]
    pub birthday: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    pub name: String,
}

#[derive(Debug, Args)]
pub struct ListArgs {}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    pub name: String,
}

#[derive(Debug, Args)]
pub struct SetBirthdayArgs {
    pub name: String,
    pub date: String,
}

#[derive(Debug, Args)]
pub struct RmBirthdayArgs {
    pub name: String,
}

#[derive(Debug, Args)]
pub struct SetAddressArgs {
    pub name: String,
    pub address: String,
}

#[derive(Debug, Args)]
pub struct RmAddressArgs {
    pub name: String,
}

pub fn add_contact(ctx: &mut Context<'_>, args: AddContactArgs) -> Result<()> {
    // Build the whole record before touching the book: a validation failure
    // part-way through must not insert a partial contact.
    let mut record = Record::new(&args.name)?;
    for phone in &args.phone {
        record.add_phone(phone)?;
    }
    for email in &args.email {
        record.add_email(email)?;
    }
    if let Some(birthday) = args.birthday.as_deref() {
        record.set_birthday(birthday)?;
    }
    if let Some(address) = args.address.as_deref() {
        record.set_address(address)?;
    }

    let created = record.clone();
    ctx.contacts.add_record(record)?;

    if ctx.json {
        print_json(&created)?;
    } else {
        println!("added {}", created);
    }
    Ok(())
}

pub fn show_contact(ctx: &mut Context<'_>, args: ShowArgs) -> Result<()> {
    let record = ctx.contacts.find(&args.name)?;
    if ctx.json {
        print_json(record)?;
    } else {
        println!("{}", record);
    }
    Ok(())
}

pub fn list_contacts(ctx: &mut Context<'_>, _args: ListArgs) -> Result<()> {
    if ctx.json {
        let records: Vec<_> = ctx.contacts.iter().collect();
        print_json(&records)?;
        return Ok(());
    }

    if ctx.contacts.is_empty() {
        println!("no contacts");
        return Ok(());
    }
    for record in ctx.contacts.iter() {
        println!("{}", record);
    }
    Ok(())
}

pub fn delete_contact(ctx: &mut Context<'_>, args: DeleteArgs) -> Result<()> {
    let removed = ctx.contacts.delete(&args.name)?;
    if ctx.json {
        print_json(&removed)?;
    } else {
        println!("deleted {}", removed.name());
    }
    Ok(())
}

pub fn set_birthday(ctx: &mut Context<'_>, args: SetBirthdayArgs) -> Result<()> {
    let record = ctx.contacts.find_mut(&args.name)?;
    record.set_birthday(&args.date)?;
    report_updated(ctx.json, record)
}

pub fn rm_birthday(ctx: &mut Context<'_>, args: RmBirthdayArgs) -> Result<()> {
    let record = ctx.contacts.find_mut(&args.name)?;
    record.remove_birthday();
    report_updated(ctx.json, record)
}

pub fn set_address(ctx: &mut Context<'_>, args: SetAddressArgs) -> Result<()> {
    let record = ctx.contacts.find_mut(&args.name)?;
    record.set_address(&args.address)?;
    report_updated(ctx.json, record)
}

pub fn rm_address(ctx: &mut Context<'_>, args: RmAddressArgs) -> Result<()> {
    let record = ctx.contacts.find_mut(&args.name)?;
    record.remove_address();
    report_updated(ctx.json, record)
}

pub(crate) fn report_updated(json: bool, record: &Record) -> Result<()> {
    if json {
        print_json(record)?;
    } else {
        println!("updated {}", record);
    }
    Ok(())
}
