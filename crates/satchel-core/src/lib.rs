pub mod book;
pub mod domain;
pub mod dto;
pub mod error;
pub mod rules;
pub mod time;

pub use book::{AddressBook, NotesBook};
pub use domain::*;
pub use dto::UpcomingBirthday;
pub use error::{CoreError, CoreErrorKind};
pub use rules::*;
