use gl_sprite_course::clock::{FrameClock, TitleCountdown};
use gl_sprite_course::render::mesh::DEFAULT_TRIANGLE;
use gl_sprite_course::render::{FlatRenderer, Mesh};
use gl_sprite_course::window::{core_profile_hints, handle_common_event, init_glfw, load_gl, log_renderer_info};
use gl_sprite_course::{Error, Result};
use glam::{vec4, Mat4};
use glfw::Context;

const SCR_WIDTH: u32 = 800;
const SCR_HEIGHT: u32 = 600;
const TITLE: &str = "Hello Triangle";

fn main() -> Result<()> {
    pretty_env_logger::init();

    let mut glfw = init_glfw()?;
    core_profile_hints(&mut glfw, 3, 3);
    glfw.window_hint(glfw::WindowHint::Samples(Some(8)));

    let (mut window, events) = glfw
        .create_window(SCR_WIDTH, SCR_HEIGHT, TITLE, glfw::WindowMode::Windowed)
        .ok_or(Error::WindowCreation)?;
    window.set_key_polling(true);
    window.set_framebuffer_size_polling(true);
    load_gl(&mut window);
    log_renderer_info();

    // triangle is already in clip space
    let renderer = FlatRenderer::new(&Mat4::IDENTITY)?;
    let triangle = Mesh::new(&DEFAULT_TRIANGLE, &[3], gl::TRIANGLES);

    let mut clock = FrameClock::new();
    let mut title_countdown = TitleCountdown::new(0.1);

    while !window.should_close() {
        let delta_time = clock.tick();
        if let Some(fps) = title_countdown.update(delta_time) {
            window.set_title(&format!("{TITLE}\tFPS {fps:.2}"));
        }

        glfw.poll_events();
        for (_, event) in glfw::flush_messages(&events) {
            handle_common_event(&mut window, &event);
        }

        unsafe {
            gl::ClearColor(0.0, 0.0, 0.0, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }

        renderer.begin();
        renderer.draw(&triangle, &Mat4::IDENTITY, &vec4(0.0, 0.0, 1.0, 1.0));

        window.swap_buffers();
    }

    Ok(())
}
