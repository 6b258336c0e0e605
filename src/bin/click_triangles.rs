//! Each click adds a vertex, every three vertices become a triangle.

use gl_sprite_course::render::{FlatRenderer, Mesh};
use gl_sprite_course::transform::ortho_bottom_left;
use gl_sprite_course::triangles::{Palette, TriangleAssembler};
use gl_sprite_course::window::{core_profile_hints, cursor_world, handle_common_event, init_glfw, load_gl, log_renderer_info};
use gl_sprite_course::{Error, Result};
use glam::{Mat4, Vec4};
use glfw::{Action, Context, MouseButton, WindowEvent};
use log::{debug, info};

const SCR_WIDTH: u32 = 800;
const SCR_HEIGHT: u32 = 600;

fn main() -> Result<()> {
    pretty_env_logger::init();

    let mut glfw = init_glfw()?;
    core_profile_hints(&mut glfw, 3, 3);

    let (mut window, events) = glfw
        .create_window(SCR_WIDTH, SCR_HEIGHT, "Click -> Vertex -> Triangle", glfw::WindowMode::Windowed)
        .ok_or(Error::WindowCreation)?;
    window.set_key_polling(true);
    window.set_mouse_button_polling(true);
    window.set_framebuffer_size_polling(true);
    load_gl(&mut window);
    log_renderer_info();

    let renderer = FlatRenderer::new(&ortho_bottom_left(SCR_WIDTH as f32, SCR_HEIGHT as f32))?;
    let mut assembler = TriangleAssembler::new(Palette::primary());
    let mut triangles: Vec<(Mesh, Vec4)> = vec![];

    while !window.should_close() {
        glfw.poll_events();
        for (_, event) in glfw::flush_messages(&events) {
            if handle_common_event(&mut window, &event) {
                continue;
            }
            if let WindowEvent::MouseButton(MouseButton::Button1, Action::Press, _) = event {
                let point = cursor_world(&window);
                debug!("vertex at {}, {}", point.x, point.y);
                if let Some(triangle) = assembler.push_vertex(point) {
                    info!("triangle #{} {:?}", triangles.len() + 1, triangle.vertices);
                    triangles.push((Mesh::triangle(triangle.vertices), triangle.color.extend(1.0)));
                }
            }
        }

        unsafe {
            gl::ClearColor(0.1, 0.1, 0.1, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }

        renderer.begin();
        for (mesh, color) in &triangles {
            renderer.draw(mesh, &Mat4::IDENTITY, color);
        }

        window.swap_buffers();
    }

    Ok(())
}
