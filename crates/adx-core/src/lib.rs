pub mod driver;
pub use driver::Driver;

mod error;
pub use error::{Error, IntoError, Violation};

pub mod schema;
pub use schema::{MappingEntry, MappingId, MappingKind, TableMapping};

/// A Result type alias that uses the crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
