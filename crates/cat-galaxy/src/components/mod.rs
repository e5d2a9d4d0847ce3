pub mod body;
pub mod label;
pub mod sprite;
