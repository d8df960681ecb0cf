use crate::commands::{print_json, Context};
use anyhow::Result;
use chrono::Duration;
use clap::Args;
use rand::seq::SliceRandom;
use rand::Rng;
use satchel_core::time::{local_today, now_utc};
use satchel_core::{Note, Record, Tag, DATE_FORMAT};

#[derive(Debug, Args)]
pub struct SeedArgs {
    /// Number of demo contacts to add
    #[arg(long, default_value_t = 10)]
    pub contacts: usize,
    /// Number of demo notes to add
    #[arg(long, default_value_t = 0)]
    pub notes: usize,
}

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Barbara", "Dennis", "Donald", "Edsger", "Grace", "John", "Katherine", "Ken",
    "Leslie", "Margaret", "Niklaus", "Radia", "Tony",
];

const LAST_NAMES: &[&str] = &[
    "Hopper", "Turing", "Liskov", "Ritchie", "Knuth", "Dijkstra", "Kernighan", "Johnson",
    "Hamilton", "Thompson", "Lamport", "Wirth", "Perlman", "Hoare", "Backus",
];

const STREETS: &[&str] = &[
    "Maple Street", "Oak Avenue", "Cedar Lane", "Elm Road", "Birch Court", "Willow Drive",
];

const CITIES: &[&str] = &["Springfield", "Riverton", "Fairview", "Lakewood", "Ashland"];

const DOMAINS: &[&str] = &["example.com", "mail.org", "post.net"];

const TAGS: &[&str] = &["work", "home", "ideas", "urgent", "travel", "books"];

const TITLE_VERBS: &[&str] = &["Plan", "Review", "Draft", "Organize", "Research"];

const TITLE_TOPICS: &[&str] = &[
    "weekend trip", "reading list", "garden layout", "budget", "meetup talk", "kitchen remodel",
];

const NOTE_TEXTS: &[&str] = &[
    "collect the open questions before Friday",
    "compare at least three options and pick one",
    "ask around for recommendations first",
    "rough outline is done, needs a second pass",
    "waiting on replies, follow up next week",
];

/// Generates demo data through the same constructors and books as human
/// input; nothing is force-inserted past validation.
pub fn seed(ctx: &mut Context<'_>, args: SeedArgs) -> Result<()> {
    let mut rng = rand::thread_rng();
    let today = local_today();

    let mut added_contacts = 0usize;
    while added_contacts < args.contacts {
        let mut name = random_name(&mut rng);
        if ctx.contacts.contains(&name) {
            name = format!("{} {}", name, rng.gen_range(2..10_000));
            if ctx.contacts.contains(&name) {
                continue;
            }
        }

        let mut record = Record::new(&name)?;
        for _ in 0..rng.gen_range(0..=3) {
            let phone = random_phone(&mut rng);
            if record.find_phone(&phone).is_err() {
                record.add_phone(&phone)?;
            }
        }
        if rng.gen_bool(0.7) {
            record.set_birthday(&random_birthday(&mut rng))?;
        }
        if rng.gen_bool(0.7) {
            record.add_email(&random_email(&mut rng, &name))?;
        }
        if rng.gen_bool(0.7) {
            record.set_address(&random_address(&mut rng))?;
        }

        ctx.contacts.add_record(record)?;
        added_contacts += 1;
    }

    let mut added_notes = 0usize;
    while added_notes < args.notes {
        let mut title = random_title(&mut rng);
        if ctx.notes.contains(&title) {
            title = format!("{} {}", title, rng.gen_range(2..10_000));
            if ctx.notes.contains(&title) {
                continue;
            }
        }

        let mut note = Note::new(&title, now_utc())?;
        note.set_text(random_text(&mut rng))?;
        for _ in 0..rng.gen_range(0..=2) {
            let raw = TAGS.choose(&mut rng).expect("tag pool is not empty");
            let tag = Tag::new(raw)?;
            if !note.has_tag(&tag) {
                note.add_tag(raw)?;
            }
        }
        if rng.gen_bool(0.5) {
            let date = today + Duration::days(rng.gen_range(1..=60));
            note.set_reminder(&date.format(DATE_FORMAT).to_string(), today)?;
        }

        ctx.notes.add_note(note)?;
        added_notes += 1;
    }

    if ctx.json {
        print_json(&serde_json::json!({
            "contacts": added_contacts,
            "notes": added_notes,
        }))?;
    } else {
        println!("added {} contacts and {} notes", added_contacts, added_notes);
    }
    Ok(())
}

fn random_name(rng: &mut impl Rng) -> String {
    let first = FIRST_NAMES.choose(rng).expect("name pool is not empty");
    let last = LAST_NAMES.choose(rng).expect("name pool is not empty");
    format!("{} {}", first, last)
}

fn random_phone(rng: &mut impl Rng) -> String {
    (0..10)
        .map(|_| char::from(b'0' + rng.gen_range(0u8..10)))
        .collect()
}

fn random_birthday(rng: &mut impl Rng) -> String {
    format!(
        "{:02}.{:02}.{}",
        rng.gen_range(1u32..=28),
        rng.gen_range(1u32..=12),
        rng.gen_range(1950i32..=2005)
    )
}

fn random_email(rng: &mut impl Rng, name: &str) -> String {
    let local = name.to_lowercase().replace(' ', ".");
    let domain = DOMAINS.choose(rng).expect("domain pool is not empty");
    format!("{}@{}", local, domain)
}

fn random_address(rng: &mut impl Rng) -> String {
    format!(
        "{} {}, {}",
        rng.gen_range(1..=200),
        STREETS.choose(rng).expect("street pool is not empty"),
        CITIES.choose(rng).expect("city pool is not empty")
    )
}

fn random_title(rng: &mut impl Rng) -> String {
    format!(
        "{} {}",
        TITLE_VERBS.choose(rng).expect("verb pool is not empty"),
        TITLE_TOPICS.choose(rng).expect("topic pool is not empty")
    )
}

fn random_text(rng: &mut impl Rng) -> &'static str {
    NOTE_TEXTS.choose(rng).expect("text pool is not empty")
}
