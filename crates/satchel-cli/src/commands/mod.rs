use anyhow::Result;
use satchel_config::AppConfig;
use satchel_core::{AddressBook, NotesBook};
use serde::Serialize;
use std::io::{self, Write};

pub mod contacts;
pub mod emails;
pub mod notes;
pub mod phones;
pub mod search;
pub mod seed;
pub mod tags;

pub struct Context<'a> {
    pub contacts: &'a mut AddressBook,
    pub notes: &'a mut NotesBook,
    pub json: bool,
    pub config: &'a AppConfig,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
