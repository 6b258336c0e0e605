//! Left click places a copy of one shared triangle under the cursor.
//!
//! Run with `--pastel` for larger upside-down triangles colored from a
//! pastel palette, with the origin in the top left corner.

use gl_sprite_course::render::{FlatRenderer, Mesh};
use gl_sprite_course::transform::{ortho_bottom_left, ortho_top_left, SpriteTransform};
use gl_sprite_course::triangles::{InstanceStyle, Instancer, Origin};
use gl_sprite_course::window::{core_profile_hints, handle_common_event, init_glfw, load_gl, log_renderer_info};
use gl_sprite_course::{Error, Result};
use glfw::{Action, Context, MouseButton, WindowEvent};
use log::info;

const SCR_WIDTH: u32 = 800;
const SCR_HEIGHT: u32 = 600;

fn main() -> Result<()> {
    pretty_env_logger::init();

    let style = if std::env::args().skip(1).any(|arg| arg == "--pastel") {
        InstanceStyle::pastel()
    } else {
        InstanceStyle::random()
    };

    let mut glfw = init_glfw()?;
    core_profile_hints(&mut glfw, 3, 3);

    let (mut window, events) = glfw
        .create_window(SCR_WIDTH, SCR_HEIGHT, "Click Instancing", glfw::WindowMode::Windowed)
        .ok_or(Error::WindowCreation)?;
    window.set_key_polling(true);
    window.set_mouse_button_polling(true);
    window.set_framebuffer_size_polling(true);
    load_gl(&mut window);
    log_renderer_info();

    let projection = match style.origin {
        Origin::BottomLeft => ortho_bottom_left(SCR_WIDTH as f32, SCR_HEIGHT as f32),
        Origin::TopLeft => ortho_top_left(SCR_WIDTH as f32, SCR_HEIGHT as f32),
    };
    let renderer = FlatRenderer::new(&projection)?;
    let triangle = Mesh::triangle(style.vertices);

    let mut rng = rand::thread_rng();
    let mut instancer = Instancer::new(style, &mut rng);

    while !window.should_close() {
        glfw.poll_events();
        for (_, event) in glfw::flush_messages(&events) {
            if handle_common_event(&mut window, &event) {
                continue;
            }
            if let WindowEvent::MouseButton(MouseButton::Button1, Action::Press, _) = event {
                let (_, height) = window.get_size();
                let instance = instancer.click(window.get_cursor_pos(), height as f32, &mut rng);
                info!("click at {}, {}", instance.position.x, instance.position.y);
            }
        }

        unsafe {
            gl::ClearColor(0.1, 0.1, 0.1, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }

        renderer.begin();
        for instance in instancer.instances() {
            let placement = SpriteTransform {
                position: instance.position,
                scale: style.size,
                rotation_degrees: style.rotation_degrees,
            };
            renderer.draw(&triangle, &placement.model_matrix(), &instance.color.extend(1.0));
        }

        window.swap_buffers();
    }

    Ok(())
}
