use std::ffi::CString;
use std::ptr;

use gl::types::{GLchar, GLenum, GLint, GLuint};
use glam::{Mat4, Vec2, Vec3, Vec4};
use log::debug;

use crate::error::{Error, Result};

/// A linked GLSL program. The GL object is deleted when this is dropped.
pub struct ShaderProgram {
    pub id: GLuint,
}

impl ShaderProgram {
    pub fn new(vertex_source: &str, fragment_source: &str) -> Result<Self> {
        let vertex = compile(gl::VERTEX_SHADER, "Vertex", vertex_source)?;
        let fragment = match compile(gl::FRAGMENT_SHADER, "Fragment", fragment_source) {
            Ok(fragment) => fragment,
            Err(e) => {
                unsafe { gl::DeleteShader(vertex) };
                return Err(e);
            }
        };

        let id = unsafe {
            let id = gl::CreateProgram();
            gl::AttachShader(id, vertex);
            gl::AttachShader(id, fragment);
            gl::LinkProgram(id);
            gl::DeleteShader(vertex);
            gl::DeleteShader(fragment);
            id
        };
        // dropped on the error path below
        let program = ShaderProgram { id };

        let mut success: GLint = 0;
        unsafe {
            gl::GetProgramiv(id, gl::LINK_STATUS, &mut success);
        }
        if success == 0 {
            return Err(Error::ShaderLink(program_info_log(id)));
        }

        debug!("linked shader program {}", id);
        Ok(program)
    }

    pub fn use_program(&self) {
        unsafe {
            gl::UseProgram(self.id);
        }
    }

    /// Location of a uniform, -1 when the program has none by that name.
    pub fn uniform_location(&self, name: &str) -> GLint {
        match CString::new(name) {
            Ok(c_name) => unsafe { gl::GetUniformLocation(self.id, c_name.as_ptr()) },
            Err(_) => -1,
        }
    }

    pub fn set_bool(&self, name: &str, value: bool) {
        self.set_int(name, value as i32);
    }

    pub fn set_int(&self, name: &str, value: i32) {
        unsafe {
            gl::Uniform1i(self.uniform_location(name), value);
        }
    }

    pub fn set_float(&self, name: &str, value: f32) {
        unsafe {
            gl::Uniform1f(self.uniform_location(name), value);
        }
    }

    pub fn set_vec2(&self, name: &str, value: &Vec2) {
        unsafe {
            gl::Uniform2f(self.uniform_location(name), value.x, value.y);
        }
    }

    pub fn set_vec3(&self, name: &str, value: &Vec3) {
        unsafe {
            gl::Uniform3f(self.uniform_location(name), value.x, value.y, value.z);
        }
    }

    pub fn set_vec4(&self, name: &str, value: &Vec4) {
        unsafe {
            gl::Uniform4f(self.uniform_location(name), value.x, value.y, value.z, value.w);
        }
    }

    pub fn set_mat4(&self, name: &str, matrix: &Mat4) {
        let columns = matrix.to_cols_array();
        unsafe {
            gl::UniformMatrix4fv(self.uniform_location(name), 1, gl::FALSE, columns.as_ptr());
        }
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteProgram(self.id);
        }
    }
}

fn compile(kind: GLenum, stage: &'static str, source: &str) -> Result<GLuint> {
    let c_source = CString::new(source).map_err(|_| Error::NulString(format!("{stage} shader source")))?;
    unsafe {
        let shader = gl::CreateShader(kind);
        gl::ShaderSource(shader, 1, &c_source.as_ptr(), ptr::null());
        gl::CompileShader(shader);

        let mut success: GLint = 0;
        gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut success);
        if success == 0 {
            let log = shader_info_log(shader);
            gl::DeleteShader(shader);
            return Err(Error::ShaderCompile { stage, log });
        }
        Ok(shader)
    }
}

fn shader_info_log(shader: GLuint) -> String {
    unsafe {
        let mut length: GLint = 0;
        gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut length);
        let mut buffer = vec![0u8; length.max(1) as usize];
        gl::GetShaderInfoLog(shader, length, ptr::null_mut(), buffer.as_mut_ptr() as *mut GLchar);
        trim_log(buffer)
    }
}

fn program_info_log(program: GLuint) -> String {
    unsafe {
        let mut length: GLint = 0;
        gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut length);
        let mut buffer = vec![0u8; length.max(1) as usize];
        gl::GetProgramInfoLog(program, length, ptr::null_mut(), buffer.as_mut_ptr() as *mut GLchar);
        trim_log(buffer)
    }
}

fn trim_log(mut buffer: Vec<u8>) -> String {
    if let Some(end) = buffer.iter().position(|&b| b == 0) {
        buffer.truncate(end);
    }
    String::from_utf8_lossy(&buffer).trim_end().to_string()
}
