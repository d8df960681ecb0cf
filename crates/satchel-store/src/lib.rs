pub mod error;
pub mod paths;
pub mod snapshot;

pub use error::{StoreError, StoreErrorKind};
pub use snapshot::{load, save, Snapshot};
