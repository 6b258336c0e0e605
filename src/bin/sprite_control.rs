//! WASD moves a character over a textured background. The character plays
//! its walk strip while any movement key is held and its idle strip otherwise.

use gl_sprite_course::clock::FrameClock;
use gl_sprite_course::input::MovementKeys;
use gl_sprite_course::render::{SpriteRenderer, Texture, TextureCache, TextureConfig};
use gl_sprite_course::transform::{ortho_bottom_left, SpriteTransform};
use gl_sprite_course::window::{core_profile_hints, handle_common_event, init_glfw, load_gl, log_renderer_info};
use gl_sprite_course::{AnimatedSprite, Error, Result, SpriteSheet};
use glam::{vec2, vec4};
use glfw::{Action, Context, Key};
use log::debug;

const SCR_WIDTH: f32 = 800.0;
const SCR_HEIGHT: f32 = 600.0;

// Player
const PLAYER_SPEED: f32 = 200.0; // pixels per second
const PLAYER_SIZE: f32 = 64.0;

// Sprite sheets
const BACKGROUND: &str = "resources/background.png";
const IDLE_SHEET: &str = "resources/Gangsters/Idle.png";
const WALK_SHEET: &str = "resources/Gangsters/Walk.png";
const IDLE_FRAMES: u32 = 7;
const IDLE_FRAME_TIME: f32 = 0.12;
const WALK_FRAMES: u32 = 10;
const WALK_FRAME_TIME: f32 = 0.10;

fn movement_keys(window: &glfw::Window) -> MovementKeys {
    let held = |key| window.get_key(key) == Action::Press;
    MovementKeys {
        up: held(Key::W),
        down: held(Key::S),
        left: held(Key::A),
        right: held(Key::D),
    }
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let mut glfw = init_glfw()?;
    core_profile_hints(&mut glfw, 3, 3);

    let (mut window, events) = glfw
        .create_window(SCR_WIDTH as u32, SCR_HEIGHT as u32, "Sprite Control", glfw::WindowMode::Windowed)
        .ok_or(Error::WindowCreation)?;
    window.set_key_polling(true);
    window.set_framebuffer_size_polling(true);
    load_gl(&mut window);
    log_renderer_info();

    let renderer = SpriteRenderer::new(&ortho_bottom_left(SCR_WIDTH, SCR_HEIGHT))?;

    let mut texture_cache = TextureCache::new();
    let texture_config = TextureConfig::default();
    let background_texture = texture_cache.get_or_load(BACKGROUND, &texture_config)?;
    let idle_texture = texture_cache.get_or_load(IDLE_SHEET, &texture_config)?;
    let walk_texture = texture_cache.get_or_load(WALK_SHEET, &texture_config)?;

    let background = AnimatedSprite::new(&*background_texture, SpriteSheet::strip(1, 1.0)?);
    let mut idle = AnimatedSprite::new(&*idle_texture, SpriteSheet::strip(IDLE_FRAMES, IDLE_FRAME_TIME)?);
    let mut walk = AnimatedSprite::new(&*walk_texture, SpriteSheet::strip(WALK_FRAMES, WALK_FRAME_TIME)?);

    let background_placement = SpriteTransform::fullscreen(SCR_WIDTH, SCR_HEIGHT);
    let mut player_placement = SpriteTransform::new(vec2(400.0, 300.0), vec2(PLAYER_SIZE, PLAYER_SIZE));
    let outline_color = vec4(1.0, 1.0, 1.0, 1.0);

    unsafe {
        gl::Enable(gl::BLEND);
        gl::BlendFunc(gl::SRC_ALPHA, gl::ONE_MINUS_SRC_ALPHA);
    }

    let mut clock = FrameClock::new();
    let mut was_moving = false;

    while !window.should_close() {
        let delta_time = clock.tick();

        glfw.poll_events();
        for (_, event) in glfw::flush_messages(&events) {
            handle_common_event(&mut window, &event);
        }

        let keys = movement_keys(&window);
        let moving = keys.any_held();
        if moving != was_moving {
            debug!("player {}", if moving { "walking" } else { "idle" });
            was_moving = moving;
        }

        // diagonals are not normalized
        player_placement.position += keys.direction() * PLAYER_SPEED * delta_time;

        let player: &mut AnimatedSprite<Texture> = if moving { &mut walk } else { &mut idle };
        player.advance(delta_time);

        unsafe {
            gl::ClearColor(0.0, 0.0, 0.0, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }

        renderer.begin();
        renderer.draw(&background, &background_placement);
        renderer.draw(player, &player_placement);

        renderer.draw_outlines(&[background_placement, player_placement], &outline_color);

        window.swap_buffers();
    }

    Ok(())
}
