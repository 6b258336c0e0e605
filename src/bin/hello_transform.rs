use gl_sprite_course::clock::FrameClock;
use gl_sprite_course::render::mesh::DEFAULT_TRIANGLE;
use gl_sprite_course::render::{FlatRenderer, Mesh};
use gl_sprite_course::transform::{ortho_bottom_left, pulse_color, pulse_model};
use gl_sprite_course::window::{core_profile_hints, handle_common_event, init_glfw, load_gl, log_renderer_info};
use gl_sprite_course::{Error, Result};
use glfw::Context;

const SCR_WIDTH: u32 = 800;
const SCR_HEIGHT: u32 = 600;

fn main() -> Result<()> {
    pretty_env_logger::init();

    let mut glfw = init_glfw()?;
    core_profile_hints(&mut glfw, 3, 3);

    let (mut window, events) = glfw
        .create_window(SCR_WIDTH, SCR_HEIGHT, "Hello Transform", glfw::WindowMode::Windowed)
        .ok_or(Error::WindowCreation)?;
    window.set_key_polling(true);
    window.set_framebuffer_size_polling(true);
    load_gl(&mut window);
    log_renderer_info();

    let renderer = FlatRenderer::new(&ortho_bottom_left(SCR_WIDTH as f32, SCR_HEIGHT as f32))?;
    let triangle = Mesh::new(&DEFAULT_TRIANGLE, &[3], gl::TRIANGLES);
    let clock = FrameClock::new();

    while !window.should_close() {
        glfw.poll_events();
        for (_, event) in glfw::flush_messages(&events) {
            handle_common_event(&mut window, &event);
        }

        let time = clock.elapsed();

        unsafe {
            gl::ClearColor(0.0, 0.0, 0.0, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }

        renderer.begin();
        renderer.draw(&triangle, &pulse_model(time), &pulse_color(time));

        window.swap_buffers();
    }

    Ok(())
}
