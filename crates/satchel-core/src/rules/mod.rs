pub mod dates;
pub mod matching;

pub use dates::{days_until, is_leap_year, next_occurrence, validate_window_days};
pub use matching::{name_similarity, SIMILARITY_THRESHOLD};
