pub mod error;
pub mod galaxy;
pub mod types;
