use crate::commands::{print_json, Context};
use crate::util::resolve_window_days;
use anyhow::Result;
use clap::Args;
use satchel_core::time::{local_today, now_utc};
use satchel_core::Note;

#[derive(Debug, Args)]
pub struct AddNoteArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub text: Option<String>,
    #[arg(long, value_name = "TAG")]
    pub tag: Vec<String>,
    #[arg(long, value_name = "DD.MM.YYYY")]
    pub remind: Option<String>,
}

#[derive(Debug, Args)]
pub struct ShowNoteArgs {
    pub title: String,
}

#[derive(Debug, Args)]
pub struct ListNotesArgs {}

#[derive(Debug, Args)]
pub struct DeleteNoteArgs {
    pub title: String,
}

#[derive(Debug, Args)]
pub struct SetTextArgs {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Args)]
pub struct SetReminderArgs {
    pub title: String,
    pub date: String,
}

#[derive(Debug, Args)]
pub struct ClearReminderArgs {
    pub title: String,
}

#[derive(Debug, Args)]
pub struct RemindersArgs {
    /// Window in days; the bounds are inclusive
    #[arg(long)]
    pub days: Option<i64>,
}

pub fn add_note(ctx: &mut Context<'_>, args: AddNoteArgs) -> Result<()> {
    // Same rule as contacts: assemble fully before inserting.
    let mut note = Note::new(&args.title, now_utc())?;
    if let Some(text) = args.text.as_deref() {
        note.set_text(text)?;
    }
    for tag in &args.tag {
        note.add_tag(tag)?;
    }
    if let Some(remind) = args.remind.as_deref() {
        note.set_reminder(remind, local_today())?;
    }

    let created = note.clone();
    ctx.notes.add_note(note)?;

    if ctx.json {
        print_json(&created)?;
    } else {
        println!("added {}", created);
    }
    Ok(())
}

pub fn show_note(ctx: &mut Context<'_>, args: ShowNoteArgs) -> Result<()> {
    let note = ctx.notes.find(&args.title)?;
    if ctx.json {
        print_json(note)?;
    } else {
        println!("{}", note);
    }
    Ok(())
}

pub fn list_notes(ctx: &mut Context<'_>, _args: ListNotesArgs) -> Result<()> {
    if ctx.json {
        let notes: Vec<_> = ctx.notes.iter().collect();
        print_json(&notes)?;
        return Ok(());
    }

    if ctx.notes.is_empty() {
        println!("no notes");
        return Ok(());
    }
    for note in ctx.notes.iter() {
        println!("{}", note);
    }
    Ok(())
}

pub fn delete_note(ctx: &mut Context<'_>, args: DeleteNoteArgs) -> Result<()> {
    let removed = ctx.notes.delete(&args.title)?;
    if ctx.json {
        print_json(&removed)?;
    } else {
        println!("deleted {}", removed.title());
    }
    Ok(())
}

pub fn set_text(ctx: &mut Context<'_>, args: SetTextArgs) -> Result<()> {
    let note = ctx.notes.find_mut(&args.title)?;
    note.set_text(&args.text)?;
    report_updated(ctx.json, note)
}

pub fn set_reminder(ctx: &mut Context<'_>, args: SetReminderArgs) -> Result<()> {
    let note = ctx.notes.find_mut(&args.title)?;
    note.set_reminder(&args.date, local_today())?;
    report_updated(ctx.json, note)
}

pub fn clear_reminder(ctx: &mut Context<'_>, args: ClearReminderArgs) -> Result<()> {
    let note = ctx.notes.find_mut(&args.title)?;
    note.clear_reminder();
    report_updated(ctx.json, note)
}

pub fn reminders(ctx: &mut Context<'_>, args: RemindersArgs) -> Result<()> {
    let days = resolve_window_days(args.days, ctx.config.upcoming_days)?;
    let due = ctx.notes.upcoming_reminders(local_today(), days);
    if ctx.json {
        print_json(&due)?;
        return Ok(());
    }

    if due.is_empty() {
        println!("no upcoming reminders");
        return Ok(());
    }
    for note in due {
        println!("{}", note);
    }
    Ok(())
}

pub(crate) fn report_updated(json: bool, note: &Note) -> Result<()> {
    if json {
        print_json(note)?;
    } else {
        println!("updated {}", note);
    }
    Ok(())
}
