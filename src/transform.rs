use glam::{vec2, vec3, vec4, Mat4, Vec2, Vec4};

/// Where and how large a quad is drawn. Owned by the program, not the sprite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteTransform {
    pub position: Vec2,
    pub scale: Vec2,
    pub rotation_degrees: f32,
}

impl SpriteTransform {
    pub fn new(position: Vec2, scale: Vec2) -> Self {
        SpriteTransform {
            position,
            scale,
            rotation_degrees: 0.0,
        }
    }

    /// Quad filling a `width x height` window, centred on it.
    pub fn fullscreen(width: f32, height: f32) -> Self {
        SpriteTransform::new(vec2(width * 0.5, height * 0.5), vec2(width, height))
    }

    pub fn model_matrix(&self) -> Mat4 {
        let mut model = Mat4::from_translation(self.position.extend(0.0));
        model *= Mat4::from_rotation_z(self.rotation_degrees.to_radians());
        model *= Mat4::from_scale(self.scale.extend(1.0));
        model
    }
}

/// Pixel projection with the origin in the bottom left corner.
pub fn ortho_bottom_left(width: f32, height: f32) -> Mat4 {
    Mat4::orthographic_rh_gl(0.0, width, 0.0, height, -1.0, 1.0)
}

/// Pixel projection with the origin in the top left corner, matching GLFW cursor coordinates.
pub fn ortho_top_left(width: f32, height: f32) -> Mat4 {
    Mat4::orthographic_rh_gl(0.0, width, height, 0.0, -1.0, 1.0)
}

/// Spinning triangle that grows and shrinks with `|cos t|`.
pub fn pulse_model(time: f32) -> Mat4 {
    let size = time.cos().abs() * 300.0;
    let mut model = Mat4::from_translation(vec3(400.0, 300.0, 0.0));
    model *= Mat4::from_rotation_z(time);
    model *= Mat4::from_scale(vec3(size, size, 1.0));
    model
}

pub fn pulse_color(time: f32) -> Vec4 {
    vec4(0.0, 0.0, time.cos().abs(), 1.0)
}
