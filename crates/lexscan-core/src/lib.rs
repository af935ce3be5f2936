pub mod config;
pub mod logging;

pub mod dictionary;
pub mod error;
pub mod fetch;
pub mod pipeline;
pub mod scan;
pub mod writer;

pub use error::LexscanError;
