use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("GLFW initialisation failed: {0}")]
    Glfw(String),

    #[error("Failed to create GLFW window")]
    WindowCreation,

    #[error("{stage} shader compilation failed:\n{log}")]
    ShaderCompile { stage: &'static str, log: String },

    #[error("Shader program link failed:\n{0}")]
    ShaderLink(String),

    #[error("String contains an interior nul byte: {0:?}")]
    NulString(String),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Sprite sheet needs at least one row and one column, got {rows}x{columns}")]
    EmptyGrid { rows: u32, columns: u32 },

    #[error("Palette needs at least one color")]
    EmptyPalette,

    #[error("Frame duration must be a positive number of seconds, got {0}")]
    InvalidFrameDuration(f32),
}

pub type Result<T> = std::result::Result<T, Error>;
