pub mod api;
pub mod assets;
pub mod components;
pub mod core;
pub mod input;
pub mod page;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::error::GalaxyError;
pub use api::galaxy::{GalaxyConfig, GalaxyContext};
pub use api::types::{BodyId, GalaxyEvent, Viewport};
pub use assets::manifest::AssetManifest;
pub use components::body::{BodyDesc, OrbitingBody};
pub use components::label::{Label, LabelLayer};
pub use components::sprite::{Color, SpriteComponent};
pub use core::rng::Rng;
pub use core::scene::{SceneGraph, Sun};
pub use core::starfield::Starfield;
pub use input::queue::{InputEvent, InputQueue};
pub use page::{PageConfig, ScrollReveal, Typewriter};
pub use renderer::camera::{CameraUniform, PerspectiveCamera};
pub use renderer::instance::{RenderBuffer, SpriteInstance, StarVertex};
pub use renderer::traits::{FrameData, Renderer, StarStyle};
