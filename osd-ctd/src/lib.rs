pub mod error;
pub mod profile;
pub mod station;

pub use error::{IndexLoadError, ProfileParseError};
