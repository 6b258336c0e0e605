use glam::{Mat4, Vec4};

use crate::error::Result;
use crate::render::mesh::Mesh;
use crate::render::shader::ShaderProgram;
use crate::render::texture::Texture;
use crate::sprite_sheet::AnimatedSprite;
use crate::transform::SpriteTransform;

const SPRITE_VERT: &str = r#"
#version 330 core
layout(location = 0) in vec2 aPos;
layout(location = 1) in vec2 aUV;
uniform mat4 projection;
uniform mat4 model;
uniform vec2 texScale;
uniform vec2 texOffset;
out vec2 UV;
void main() {
    UV = aUV * texScale + texOffset;
    gl_Position = projection * model * vec4(aPos, 0.0, 1.0);
}
"#;

const SPRITE_FRAG: &str = r#"
#version 330 core
in vec2 UV;
out vec4 Frag;
uniform sampler2D spriteTex;
uniform bool u_outline;
uniform vec4 u_outlineColor;
void main() {
    if (u_outline) {
        Frag = u_outlineColor;
    } else {
        Frag = texture(spriteTex, UV);
    }
}
"#;

/// Draws animated sprites as textured quads, sampling only the current frame.
pub struct SpriteRenderer {
    shader: ShaderProgram,
    quad: Mesh,
    outline: Mesh,
}

impl SpriteRenderer {
    pub fn new(projection: &Mat4) -> Result<Self> {
        let shader = ShaderProgram::new(SPRITE_VERT, SPRITE_FRAG)?;
        shader.use_program();
        shader.set_mat4("projection", projection);
        shader.set_int("spriteTex", 0);
        shader.set_bool("u_outline", false);

        Ok(SpriteRenderer {
            shader,
            quad: Mesh::sprite_quad(),
            outline: Mesh::outline_loop(),
        })
    }

    pub fn begin(&self) {
        self.shader.use_program();
        self.shader.set_bool("u_outline", false);
        unsafe {
            gl::PolygonMode(gl::FRONT_AND_BACK, gl::FILL);
        }
    }

    pub fn draw(&self, sprite: &AnimatedSprite<Texture>, transform: &SpriteTransform) {
        let region = sprite.frame_region();
        self.shader.set_mat4("model", &transform.model_matrix());
        self.shader.set_vec2("texScale", &region.scale);
        self.shader.set_vec2("texOffset", &region.offset);
        sprite.atlas().bind(0);
        self.quad.draw();
    }

    /// Outlines each transform's quad in `color`, then restores textured drawing.
    pub fn draw_outlines(&self, transforms: &[SpriteTransform], color: &Vec4) {
        self.shader.use_program();
        self.shader.set_bool("u_outline", true);
        self.shader.set_vec4("u_outlineColor", color);
        unsafe {
            gl::LineWidth(2.0);
        }
        for transform in transforms {
            self.shader.set_mat4("model", &transform.model_matrix());
            self.outline.draw();
        }
        self.shader.set_bool("u_outline", false);
        unsafe {
            gl::BindVertexArray(0);
        }
    }
}
