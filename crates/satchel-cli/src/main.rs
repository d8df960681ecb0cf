mod commands;
mod error;
mod util;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{contacts, emails, notes, phones, search, seed, tags, Context};
use crate::error::{exit_code_for, report_error};
use satchel_config as config;
use satchel_store::paths;

#[derive(Debug, Parser)]
#[command(name = "satchel", version, about = "satchel CLI")]
struct Cli {
    /// Snapshot file override
    #[arg(long, global = true)]
    data_path: Option<PathBuf>,
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(name = "add-contact")]
    AddContact(contacts::AddContactArgs),
    Show(contacts::ShowArgs),
    List(contacts::ListArgs),
    Delete(contacts::DeleteArgs),
    #[command(name = "set-birthday")]
    SetBirthday(contacts::SetBirthdayArgs),
    #[command(name = "rm-birthday")]
    RmBirthday(contacts::RmBirthdayArgs),
    #[command(name = "set-address")]
    SetAddress(contacts::SetAddressArgs),
    #[command(name = "rm-address")]
    RmAddress(contacts::RmAddressArgs),
    #[command(subcommand)]
    Phone(phones::PhoneCommand),
    #[command(subcommand)]
    Email(emails::EmailCommand),
    Search(search::SearchArgs),
    #[command(name = "smart-search")]
    SmartSearch(search::SmartSearchArgs),
    Birthdays(search::BirthdaysArgs),
    #[command(name = "add-note")]
    AddNote(notes::AddNoteArgs),
    #[command(name = "show-note")]
    ShowNote(notes::ShowNoteArgs),
    #[command(name = "list-notes")]
    ListNotes(notes::ListNotesArgs),
    #[command(name = "delete-note")]
    DeleteNote(notes::DeleteNoteArgs),
    #[command(name = "set-text")]
    SetText(notes::SetTextArgs),
    #[command(name = "set-reminder")]
    SetReminder(notes::SetReminderArgs),
    #[command(name = "clear-reminder")]
    ClearReminder(notes::ClearReminderArgs),
    Reminders(notes::RemindersArgs),
    #[command(subcommand)]
    Tag(tags::TagCommand),
    Seed(seed::SeedArgs),
}

impl Command {
    /// Read-only commands skip the snapshot rewrite.
    fn mutates(&self) -> bool {
        !matches!(
            self,
            Command::Show(_)
                | Command::List(_)
                | Command::Search(_)
                | Command::SmartSearch(_)
                | Command::Birthdays(_)
                | Command::ShowNote(_)
                | Command::ListNotes(_)
                | Command::Reminders(_)
                | Command::Tag(tags::TagCommand::Ls(_))
                | Command::Tag(tags::TagCommand::Notes(_))
        )
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        data_path,
        config: config_path,
        json,
        verbose,
        command,
    } = cli;

    let app_config = config::load(config_path).with_context(|| "load config")?;
    let snapshot_path =
        paths::resolve_snapshot_path(data_path).with_context(|| "resolve data path")?;
    if verbose {
        debug!(path = %snapshot_path.display(), "snapshot path resolved");
    }

    let mut snapshot = satchel_store::load(&snapshot_path)
        .with_context(|| format!("load snapshot {}", snapshot_path.display()))?;

    // The snapshot is saved only after the handler succeeds: a failed or
    // interrupted command leaves the stored state exactly as it was.
    let mutates = command.mutates();
    {
        let mut ctx = Context {
            contacts: &mut snapshot.contacts,
            notes: &mut snapshot.notes,
            json,
            config: &app_config,
        };

        match command {
            Command::AddContact(args) => contacts::add_contact(&mut ctx, args)?,
            Command::Show(args) => contacts::show_contact(&mut ctx, args)?,
            Command::List(args) => contacts::list_contacts(&mut ctx, args)?,
            Command::Delete(args) => contacts::delete_contact(&mut ctx, args)?,
            Command::SetBirthday(args) => contacts::set_birthday(&mut ctx, args)?,
            Command::RmBirthday(args) => contacts::rm_birthday(&mut ctx, args)?,
            Command::SetAddress(args) => contacts::set_address(&mut ctx, args)?,
            Command::RmAddress(args) => contacts::rm_address(&mut ctx, args)?,
            Command::Phone(cmd) => match cmd {
                phones::PhoneCommand::Add(args) => phones::add_phone(&mut ctx, args)?,
                phones::PhoneCommand::Rm(args) => phones::remove_phone(&mut ctx, args)?,
                phones::PhoneCommand::Edit(args) => phones::edit_phone(&mut ctx, args)?,
            },
            Command::Email(cmd) => match cmd {
                emails::EmailCommand::Add(args) => emails::add_email(&mut ctx, args)?,
                emails::EmailCommand::Rm(args) => emails::remove_email(&mut ctx, args)?,
                emails::EmailCommand::Edit(args) => emails::edit_email(&mut ctx, args)?,
            },
            Command::Search(args) => search::search(&mut ctx, args)?,
            Command::SmartSearch(args) => search::smart_search(&mut ctx, args)?,
            Command::Birthdays(args) => search::birthdays(&mut ctx, args)?,
            Command::AddNote(args) => notes::add_note(&mut ctx, args)?,
            Command::ShowNote(args) => notes::show_note(&mut ctx, args)?,
            Command::ListNotes(args) => notes::list_notes(&mut ctx, args)?,
            Command::DeleteNote(args) => notes::delete_note(&mut ctx, args)?,
            Command::SetText(args) => notes::set_text(&mut ctx, args)?,
            Command::SetReminder(args) => notes::set_reminder(&mut ctx, args)?,
            Command::ClearReminder(args) => notes::clear_reminder(&mut ctx, args)?,
            Command::Reminders(args) => notes::reminders(&mut ctx, args)?,
            Command::Tag(cmd) => match cmd {
                tags::TagCommand::Add(args) => tags::add_tag(&mut ctx, args)?,
                tags::TagCommand::Rm(args) => tags::remove_tag(&mut ctx, args)?,
                tags::TagCommand::Ls(args) => tags::list_tags(&mut ctx, args)?,
                tags::TagCommand::Notes(args) => tags::list_notes_by_tag(&mut ctx, args)?,
            },
            Command::Seed(args) => seed::seed(&mut ctx, args)?,
        }
    }

    if mutates {
        satchel_store::save(&snapshot_path, &snapshot)
            .with_context(|| format!("save snapshot {}", snapshot_path.display()))?;
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();
}
