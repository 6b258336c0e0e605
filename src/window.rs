use std::ffi::CStr;
use std::os::raw::c_char;

use glam::Vec2;
use glfw::{Action, Context, Key, WindowEvent};
use log::{error, info};

use crate::error::{Error, Result};
use crate::triangles::window_to_world;

fn error_callback(err: glfw::Error, description: String) {
    error!("GLFW error {:?}: {:?}", err, description);
}

pub fn init_glfw() -> Result<glfw::Glfw> {
    glfw::init(error_callback).map_err(|e| Error::Glfw(format!("{:?}", e)))
}

/// Requests a core profile context of the given version.
pub fn core_profile_hints(glfw: &mut glfw::Glfw, major: u32, minor: u32) {
    glfw.window_hint(glfw::WindowHint::ContextVersion(major, minor));
    glfw.window_hint(glfw::WindowHint::OpenGlProfile(glfw::OpenGlProfileHint::Core));
    #[cfg(target_os = "macos")]
    glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));
}

/// Makes the window's context current and loads the GL function pointers through it.
pub fn load_gl(window: &mut glfw::Window) {
    window.make_current();
    gl::load_with(|symbol| window.get_proc_address(symbol) as *const _);
    let (width, height) = window.get_framebuffer_size();
    unsafe {
        gl::Viewport(0, 0, width, height);
    }
}

pub fn log_renderer_info() {
    let read = |name| unsafe {
        let ptr = gl::GetString(name);
        if ptr.is_null() {
            return String::from("unknown");
        }
        CStr::from_ptr(ptr as *const c_char).to_string_lossy().into_owned()
    };
    info!("Renderer: {}", read(gl::RENDERER));
    info!("OpenGL version supported {}", read(gl::VERSION));
}

/// Cursor position in world space, origin bottom left.
pub fn cursor_world(window: &glfw::Window) -> Vec2 {
    let (_, height) = window.get_size();
    window_to_world(window.get_cursor_pos(), height as f32)
}

/// Window events shared by every program: ESC closes, resizes update the viewport.
/// Returns true when the event was consumed.
pub fn handle_common_event(window: &mut glfw::Window, event: &WindowEvent) -> bool {
    match event {
        WindowEvent::Key(Key::Escape, _, Action::Press, _) => {
            window.set_should_close(true);
            true
        }
        WindowEvent::FramebufferSize(width, height) => {
            unsafe {
                gl::Viewport(0, 0, *width, *height);
            }
            true
        }
        _ => false,
    }
}
