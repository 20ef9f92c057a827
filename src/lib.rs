pub mod categories;
pub mod error;
pub mod fetch;
pub mod generate;
pub mod output;
pub mod pipeline;
pub mod transform;
pub mod version;

pub use categories::CategorySet;
pub use error::Error;
pub use version::UnicodeVersion;
