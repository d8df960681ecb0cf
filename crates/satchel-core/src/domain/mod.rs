pub mod address;
pub mod birthday;
pub mod email;
pub mod name;
pub mod note;
pub mod phone;
pub mod record;
pub mod reminder;
pub mod tag;
pub mod text;
pub mod title;

pub use address::Address;
pub use birthday::{Birthday, DATE_FORMAT};
pub use email::Email;
pub use name::ContactName;
pub use note::Note;
pub use phone::Phone;
pub use record::Record;
pub use reminder::Reminder;
pub use tag::Tag;
pub use text::NoteText;
pub use title::Title;
