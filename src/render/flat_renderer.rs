use glam::{Mat4, Vec4};

use crate::error::Result;
use crate::render::mesh::Mesh;
use crate::render::shader::ShaderProgram;

const FLAT_VERT: &str = r#"
#version 330 core
layout(location = 0) in vec3 position;
uniform mat4 projection;
uniform mat4 model;
void main() {
    gl_Position = projection * model * vec4(position, 1.0);
}
"#;

const FLAT_FRAG: &str = r#"
#version 330 core
uniform vec4 inputColor;
out vec4 fragColor;
void main() {
    fragColor = inputColor;
}
"#;

/// Solid color geometry with a model and projection matrix.
pub struct FlatRenderer {
    shader: ShaderProgram,
}

impl FlatRenderer {
    pub fn new(projection: &Mat4) -> Result<Self> {
        let shader = ShaderProgram::new(FLAT_VERT, FLAT_FRAG)?;
        shader.use_program();
        shader.set_mat4("projection", projection);
        shader.set_mat4("model", &Mat4::IDENTITY);
        Ok(FlatRenderer { shader })
    }

    pub fn begin(&self) {
        self.shader.use_program();
    }

    pub fn draw(&self, mesh: &Mesh, model: &Mat4, color: &Vec4) {
        self.shader.set_mat4("model", model);
        self.shader.set_vec4("inputColor", color);
        mesh.draw();
    }
}
