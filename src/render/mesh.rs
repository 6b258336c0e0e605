use std::ffi::c_void;
use std::mem::size_of;

use gl::types::{GLenum, GLint, GLsizei, GLsizeiptr, GLuint};
use glam::Vec2;

pub const SIZE_OF_FLOAT: usize = size_of::<f32>();

#[rustfmt::skip]
pub const SPRITE_QUAD: [f32; 24] = [
    // pos          // uv
    -0.5,  0.5,     0.0, 1.0,
     0.5, -0.5,     1.0, 0.0,
    -0.5, -0.5,     0.0, 0.0,
    -0.5,  0.5,     0.0, 1.0,
     0.5,  0.5,     1.0, 1.0,
     0.5, -0.5,     1.0, 0.0,
];

#[rustfmt::skip]
pub const OUTLINE_LOOP: [f32; 8] = [
    -0.5,  0.5,
     0.5,  0.5,
     0.5, -0.5,
    -0.5, -0.5,
];

/// Unit square anchored at its bottom left corner.
#[rustfmt::skip]
pub const COLOR_QUAD: [f32; 18] = [
    0.0, 0.0, 0.0,
    1.0, 0.0, 0.0,
    1.0, 1.0, 0.0,
    0.0, 0.0, 0.0,
    1.0, 1.0, 0.0,
    0.0, 1.0, 0.0,
];

#[rustfmt::skip]
pub const DEFAULT_TRIANGLE: [f32; 9] = [
    -0.5, -0.5, 0.0,
     0.5, -0.5, 0.0,
     0.0,  0.5, 0.0,
];

/// Interleaved float vertices in one VAO/VBO pair, released on drop.
pub struct Mesh {
    pub vao: GLuint,
    pub vbo: GLuint,
    pub vertex_count: GLsizei,
    pub mode: GLenum,
}

impl Mesh {
    /// `layout` lists the component count of each attribute, bound to locations 0, 1, ...
    pub fn new(vertices: &[f32], layout: &[i32], mode: GLenum) -> Mesh {
        let floats_per_vertex: i32 = layout.iter().sum();
        let stride = floats_per_vertex as usize * SIZE_OF_FLOAT;

        let mut vao: GLuint = 0;
        let mut vbo: GLuint = 0;
        unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::GenBuffers(1, &mut vbo);
            gl::BindVertexArray(vao);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                (vertices.len() * SIZE_OF_FLOAT) as GLsizeiptr,
                vertices.as_ptr() as *const c_void,
                gl::STATIC_DRAW,
            );

            let mut offset = 0usize;
            for (location, &size) in layout.iter().enumerate() {
                gl::VertexAttribPointer(
                    location as GLuint,
                    size as GLint,
                    gl::FLOAT,
                    gl::FALSE,
                    stride as GLsizei,
                    (offset * SIZE_OF_FLOAT) as *const c_void,
                );
                gl::EnableVertexAttribArray(location as GLuint);
                offset += size as usize;
            }

            gl::BindBuffer(gl::ARRAY_BUFFER, 0);
            gl::BindVertexArray(0);
        }

        Mesh {
            vao,
            vbo,
            vertex_count: (vertices.len() / floats_per_vertex.max(1) as usize) as GLsizei,
            mode,
        }
    }

    pub fn sprite_quad() -> Mesh {
        Mesh::new(&SPRITE_QUAD, &[2, 2], gl::TRIANGLES)
    }

    pub fn outline_loop() -> Mesh {
        Mesh::new(&OUTLINE_LOOP, &[2], gl::LINE_LOOP)
    }

    pub fn color_quad() -> Mesh {
        Mesh::new(&COLOR_QUAD, &[3], gl::TRIANGLES)
    }

    pub fn triangle(vertices: [Vec2; 3]) -> Mesh {
        let data: Vec<f32> = vertices.iter().flat_map(|v| [v.x, v.y, 0.0]).collect();
        Mesh::new(&data, &[3], gl::TRIANGLES)
    }

    pub fn draw(&self) {
        unsafe {
            gl::BindVertexArray(self.vao);
            gl::DrawArrays(self.mode, 0, self.vertex_count);
        }
    }
}

impl Drop for Mesh {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteVertexArrays(1, &self.vao);
            gl::DeleteBuffers(1, &self.vbo);
        }
    }
}
