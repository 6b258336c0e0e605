use std::ffi::c_void;
use std::path::{Path, PathBuf};

use gl::types::{GLint, GLuint};
use log::info;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureFilter {
    Linear,
    Nearest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureWrap {
    ClampToEdge,
    Repeat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureConfig {
    /// Flip rows on load so row 0 of the image lands at the top of texture space.
    pub flip_v: bool,
    pub filter: TextureFilter,
    pub wrap: TextureWrap,
}

impl Default for TextureConfig {
    fn default() -> Self {
        TextureConfig {
            flip_v: true,
            filter: TextureFilter::Linear,
            wrap: TextureWrap::ClampToEdge,
        }
    }
}

/// A 2D RGBA texture with mipmaps. The GL object is deleted when this is dropped.
#[derive(Debug)]
pub struct Texture {
    pub id: GLuint,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl Texture {
    pub fn load(path: impl AsRef<Path>, config: &TextureConfig) -> Result<Texture> {
        let path = path.as_ref();
        let mut image = image::open(path)?;
        if config.flip_v {
            image = image.flipv();
        }
        let rgba = image.into_rgba8();
        let (width, height) = rgba.dimensions();

        let (min_filter, mag_filter) = match config.filter {
            TextureFilter::Linear => (gl::LINEAR_MIPMAP_LINEAR, gl::LINEAR),
            TextureFilter::Nearest => (gl::NEAREST_MIPMAP_NEAREST, gl::NEAREST),
        };
        let wrap = match config.wrap {
            TextureWrap::ClampToEdge => gl::CLAMP_TO_EDGE,
            TextureWrap::Repeat => gl::REPEAT,
        };

        let mut id: GLuint = 0;
        unsafe {
            gl::GenTextures(1, &mut id);
            gl::BindTexture(gl::TEXTURE_2D, id);
            gl::TexImage2D(
                gl::TEXTURE_2D,
                0,
                gl::RGBA as GLint,
                width as GLint,
                height as GLint,
                0,
                gl::RGBA,
                gl::UNSIGNED_BYTE,
                rgba.as_raw().as_ptr() as *const c_void,
            );
            gl::GenerateMipmap(gl::TEXTURE_2D);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_S, wrap as GLint);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_T, wrap as GLint);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MIN_FILTER, min_filter as GLint);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MAG_FILTER, mag_filter as GLint);
            gl::BindTexture(gl::TEXTURE_2D, 0);
        }

        info!("loaded texture {:?} ({}x{})", path, width, height);
        Ok(Texture {
            id,
            path: path.to_path_buf(),
            width,
            height,
        })
    }

    pub fn bind(&self, unit: u32) {
        unsafe {
            gl::ActiveTexture(gl::TEXTURE0 + unit);
            gl::BindTexture(gl::TEXTURE_2D, self.id);
        }
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteTextures(1, &self.id);
        }
    }
}
