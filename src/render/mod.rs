//! GL resource owners and the adapters that draw the library's state.
//!
//! Every type here deletes its GL object on drop, so it must be dropped while
//! the context that created it is still current.

pub mod flat_renderer;
pub mod mesh;
pub mod shader;
pub mod sprite_renderer;
pub mod texture;
pub mod texture_cache;

pub use flat_renderer::FlatRenderer;
pub use mesh::Mesh;
pub use shader::ShaderProgram;
pub use sprite_renderer::SpriteRenderer;
pub use texture::{Texture, TextureConfig, TextureFilter, TextureWrap};
pub use texture_cache::TextureCache;
