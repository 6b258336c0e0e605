//! OpenGL course exercises: triangles from vertex buffers, mouse driven
//! instancing, sprite sheet animation with sub-UV addressing and a color
//! matching game.
//!
//! The animation model, timing and game rules are plain Rust and tested
//! without a GL context. [`render`] and [`window`] hold the GLFW/GL side used
//! by the programs in `src/bin`.

pub mod clock;
pub mod color_match;
pub mod error;
pub mod input;
pub mod render;
pub mod sprite_sheet;
pub mod transform;
pub mod triangles;
pub mod window;

pub use error::{Error, Result};
pub use sprite_sheet::{AnimatedSprite, FrameRegion, FrameStepping, SpriteSheet};
