//! Textured background with two animated sprite strips.

use gl_sprite_course::clock::FrameClock;
use gl_sprite_course::render::{SpriteRenderer, TextureCache, TextureConfig};
use gl_sprite_course::transform::{ortho_bottom_left, SpriteTransform};
use gl_sprite_course::window::{core_profile_hints, handle_common_event, init_glfw, load_gl, log_renderer_info};
use gl_sprite_course::{AnimatedSprite, Error, Result, SpriteSheet};
use glam::{vec2, vec4};
use glfw::Context;

const SCR_WIDTH: f32 = 800.0;
const SCR_HEIGHT: f32 = 600.0;

const BACKGROUND: &str = "resources/background.png";
const SPRITE_1: &str = "resources/sprite1.png";
const SPRITE_2: &str = "resources/sprite2.png";

fn main() -> Result<()> {
    pretty_env_logger::init();

    let mut glfw = init_glfw()?;
    core_profile_hints(&mut glfw, 3, 3);

    let (mut window, events) = glfw
        .create_window(SCR_WIDTH as u32, SCR_HEIGHT as u32, "Texture Mapping", glfw::WindowMode::Windowed)
        .ok_or(Error::WindowCreation)?;
    window.set_key_polling(true);
    window.set_framebuffer_size_polling(true);
    load_gl(&mut window);
    log_renderer_info();

    let renderer = SpriteRenderer::new(&ortho_bottom_left(SCR_WIDTH, SCR_HEIGHT))?;

    let mut texture_cache = TextureCache::new();
    let texture_config = TextureConfig::default();
    let background_texture = texture_cache.get_or_load(BACKGROUND, &texture_config)?;
    let sprite_1_texture = texture_cache.get_or_load(SPRITE_1, &texture_config)?;
    let sprite_2_texture = texture_cache.get_or_load(SPRITE_2, &texture_config)?;

    let background = AnimatedSprite::new(&*background_texture, SpriteSheet::strip(1, 1.0)?);
    let mut sprite_1 = AnimatedSprite::new(&*sprite_1_texture, SpriteSheet::strip(6, 0.1)?);
    let mut sprite_2 = AnimatedSprite::new(&*sprite_2_texture, SpriteSheet::strip(9, 0.1)?);

    let background_placement = SpriteTransform::fullscreen(SCR_WIDTH, SCR_HEIGHT);
    let sprite_1_placement = SpriteTransform::new(vec2(200.0, 50.0), vec2(96.0, 96.0));
    let sprite_2_placement = SpriteTransform::new(vec2(600.0, 50.0), vec2(96.0, 96.0));
    let outline_color = vec4(1.0, 1.0, 1.0, 1.0);

    unsafe {
        gl::Enable(gl::BLEND);
        gl::BlendFunc(gl::SRC_ALPHA, gl::ONE_MINUS_SRC_ALPHA);
    }

    let mut clock = FrameClock::new();

    while !window.should_close() {
        let delta_time = clock.tick();

        glfw.poll_events();
        for (_, event) in glfw::flush_messages(&events) {
            handle_common_event(&mut window, &event);
        }

        sprite_1.advance(delta_time);
        sprite_2.advance(delta_time);

        unsafe {
            gl::ClearColor(0.0, 0.0, 0.0, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }

        renderer.begin();
        renderer.draw(&background, &background_placement);
        renderer.draw(&sprite_1, &sprite_1_placement);
        renderer.draw(&sprite_2, &sprite_2_placement);

        renderer.draw_outlines(&[background_placement, sprite_1_placement, sprite_2_placement], &outline_color);

        window.swap_buffers();
    }

    Ok(())
}
