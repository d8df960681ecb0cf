use crate::commands::notes::report_updated;
use crate::commands::{print_json, Context};
use anyhow::Result;
use clap::{ArgAction, Args, Subcommand};

#[derive(Debug, Subcommand)]
pub enum TagCommand {
    /// Add a tag to a note
    Add(TagAddArgs),
    /// Remove a tag from a note
    Rm(TagRmArgs),
    /// List all distinct tags across all notes
    Ls(TagLsArgs),
    /// List notes carrying a tag
    Notes(TagNotesArgs),
}

#[derive(Debug, Args)]
pub struct TagAddArgs {
    pub title: String,
    pub tag: String,
}

#[derive(Debug, Args)]
pub struct TagRmArgs {
    pub title: String,
    pub tag: String,
}

#[derive(Debug, Args)]
pub struct TagLsArgs {}

#[derive(Debug, Args)]
pub struct TagNotesArgs {
    pub tag: String,
    /// Sort the matching notes by title
    #[arg(long, action = ArgAction::SetTrue)]
    pub sort: bool,
}

pub fn add_tag(ctx: &mut Context<'_>, args: TagAddArgs) -> Result<()> {
    let note = ctx.notes.find_mut(&args.title)?;
    note.add_tag(&args.tag)?;
    report_updated(ctx.json, note)
}

pub fn remove_tag(ctx: &mut Context<'_>, args: TagRmArgs) -> Result<()> {
    let note = ctx.notes.find_mut(&args.title)?;
    note.remove_tag(&args.tag)?;
    report_updated(ctx.json, note)
}

pub fn list_tags(ctx: &mut Context<'_>, _args: TagLsArgs) -> Result<()> {
    let tags = ctx.notes.all_tags();
    if ctx.json {
        print_json(&tags)?;
        return Ok(());
    }

    if tags.is_empty() {
        println!("no tags");
        return Ok(());
    }
    for tag in tags {
        println!("{}", tag);
    }
    Ok(())
}

pub fn list_notes_by_tag(ctx: &mut Context<'_>, args: TagNotesArgs) -> Result<()> {
    let notes = if args.sort {
        ctx.notes.sort_by_tag(&args.tag)?
    } else {
        ctx.notes.search_by_tag(&args.tag)?
    };
    if ctx.json {
        print_json(&notes)?;
        return Ok(());
    }

    if notes.is_empty() {
        println!("no notes tagged {}", args.tag.trim().to_lowercase());
        return Ok(());
    }
    for note in notes {
        println!("{}", note);
    }
    Ok(())
}
