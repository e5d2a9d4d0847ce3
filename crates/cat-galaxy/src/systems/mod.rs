pub mod animation;
pub mod interaction;
pub mod labels;
pub mod raycast;
pub mod render;
