use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use log::debug;

use crate::error::Result;
use crate::render::texture::{Texture, TextureConfig};

/// Loads each image once. Sprites borrow from the returned textures.
pub struct TextureCache {
    texture_cache: HashMap<PathBuf, Rc<Texture>>,
}

impl TextureCache {
    pub fn new() -> Self {
        TextureCache {
            texture_cache: HashMap::new(),
        }
    }

    pub fn get_or_load(&mut self, texture_path: impl AsRef<Path>, texture_config: &TextureConfig) -> Result<Rc<Texture>> {
        let texture_path = texture_path.as_ref();
        match self.texture_cache.get(texture_path) {
            None => {
                let texture = Rc::new(Texture::load(texture_path, texture_config)?);
                self.texture_cache.insert(texture_path.to_path_buf(), texture.clone());
                Ok(texture)
            }
            Some(texture) => {
                debug!("texture cache hit: {:?}", texture_path);
                Ok(texture.clone())
            }
        }
    }
}

impl Default for TextureCache {
    fn default() -> Self {
        TextureCache::new()
    }
}
