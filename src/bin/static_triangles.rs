use gl_sprite_course::render::{FlatRenderer, Mesh};
use gl_sprite_course::window::{core_profile_hints, handle_common_event, init_glfw, load_gl, log_renderer_info};
use gl_sprite_course::{Error, Result};
use glam::{vec2, vec4, Mat4, Vec2};
use glfw::Context;

const SCR_WIDTH: u32 = 800;
const SCR_HEIGHT: u32 = 600;

// Normalized device coordinates
const TRIANGLES: [[Vec2; 3]; 5] = [
    [vec2(-0.8, -0.8), vec2(-0.6, -0.2), vec2(-0.4, -0.8)],
    [vec2(-0.2, -0.8), vec2(0.0, -0.2), vec2(0.2, -0.8)],
    [vec2(0.4, -0.8), vec2(0.6, -0.2), vec2(0.8, -0.8)],
    [vec2(-0.8, 0.2), vec2(-0.6, 0.8), vec2(-0.4, 0.2)],
    [vec2(0.4, 0.2), vec2(0.6, 0.8), vec2(0.8, 0.2)],
];

fn main() -> Result<()> {
    pretty_env_logger::init();

    let mut glfw = init_glfw()?;
    core_profile_hints(&mut glfw, 3, 3);

    let (mut window, events) = glfw
        .create_window(SCR_WIDTH, SCR_HEIGHT, "Static Triangles", glfw::WindowMode::Windowed)
        .ok_or(Error::WindowCreation)?;
    window.set_key_polling(true);
    window.set_framebuffer_size_polling(true);
    load_gl(&mut window);
    log_renderer_info();

    let renderer = FlatRenderer::new(&Mat4::IDENTITY)?;
    let meshes: Vec<Mesh> = TRIANGLES.iter().map(|vertices| Mesh::triangle(*vertices)).collect();
    let color = vec4(0.2, 0.6, 1.0, 1.0);

    while !window.should_close() {
        glfw.poll_events();
        for (_, event) in glfw::flush_messages(&events) {
            handle_common_event(&mut window, &event);
        }

        unsafe {
            gl::ClearColor(0.1, 0.1, 0.1, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }

        renderer.begin();
        for mesh in &meshes {
            renderer.draw(mesh, &Mat4::IDENTITY, &color);
        }

        window.swap_buffers();
    }

    Ok(())
}
