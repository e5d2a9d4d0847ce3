pub mod camera;
pub mod instance;
pub mod traits;

pub use camera::{CameraUniform, PerspectiveCamera, Ray};
pub use instance::{RenderBuffer, SpriteInstance, StarVertex};
pub use traits::{FrameData, Renderer, StarStyle};
