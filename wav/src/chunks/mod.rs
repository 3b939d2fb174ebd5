pub mod data;
pub mod fmt;

pub use data::DataChunk;
pub use fmt::FormatChunk;
