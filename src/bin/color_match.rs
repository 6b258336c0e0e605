//! Click a rectangle to remove it along with every rectangle of a similar color.

use gl_sprite_course::color_match::{ColorGrid, GridConfig};
use gl_sprite_course::render::{FlatRenderer, Mesh};
use gl_sprite_course::transform::ortho_bottom_left;
use gl_sprite_course::window::{core_profile_hints, cursor_world, handle_common_event, init_glfw, load_gl, log_renderer_info};
use gl_sprite_course::{Error, Result};
use glam::Mat4;
use glfw::{Action, Context, MouseButton, WindowEvent};
use log::info;

fn main() -> Result<()> {
    pretty_env_logger::init();

    let config = GridConfig::default();
    let mut grid = ColorGrid::random(config, &mut rand::thread_rng());

    let mut glfw = init_glfw()?;
    core_profile_hints(&mut glfw, 3, 3);

    let (mut window, events) = glfw
        .create_window(
            config.window_size.x as u32,
            config.window_size.y as u32,
            &grid.title(),
            glfw::WindowMode::Windowed,
        )
        .ok_or(Error::WindowCreation)?;
    window.set_key_polling(true);
    window.set_mouse_button_polling(true);
    window.set_framebuffer_size_polling(true);
    load_gl(&mut window);
    log_renderer_info();

    let renderer = FlatRenderer::new(&ortho_bottom_left(config.window_size.x, config.window_size.y))?;
    let quad = Mesh::color_quad();
    let cell_scale = Mat4::from_scale(config.cell_size().extend(1.0));

    while !window.should_close() && !grid.is_over() {
        glfw.poll_events();
        for (_, event) in glfw::flush_messages(&events) {
            if handle_common_event(&mut window, &event) {
                continue;
            }
            if let WindowEvent::MouseButton(MouseButton::Button1, Action::Press, _) = event {
                let Some(report) = grid.pick(cursor_world(&window)) else {
                    continue;
                };
                info!(
                    "click #{}: removed {} rectangles (threshold={})",
                    report.attempt,
                    report.removed.len(),
                    config.threshold
                );
                for removal in &report.removed {
                    let cell = &grid.cells()[removal.index];
                    info!(
                        "  - index {} at ({}, {}) color ({}, {}, {}) dist={}",
                        removal.index,
                        cell.position.x,
                        cell.position.y,
                        cell.color.x,
                        cell.color.y,
                        cell.color.z,
                        removal.distance
                    );
                }
                window.set_title(&grid.title());
            }
        }

        unsafe {
            gl::ClearColor(0.15, 0.15, 0.15, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }

        renderer.begin();
        for cell in grid.cells().iter().filter(|cell| cell.alive) {
            let model = Mat4::from_translation(cell.position.extend(0.0)) * cell_scale;
            renderer.draw(&quad, &model, &cell.color.extend(1.0));
        }

        window.swap_buffers();
    }

    println!();
    println!("=== Game Over ===");
    println!("Final Score: {}", grid.score());
    println!("Attempts Used: {} / {}", grid.attempts(), config.max_attempts);

    Ok(())
}
