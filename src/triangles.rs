use glam::{vec2, vec3, Vec2, Vec3};
use rand::Rng;

use crate::error::{Error, Result};

/// Converts a GLFW cursor position (origin top left) to world space with the origin bottom left.
pub fn window_to_world(cursor: (f64, f64), window_height: f32) -> Vec2 {
    vec2(cursor.0 as f32, window_height - cursor.1 as f32)
}

/// Colors handed out in order, wrapping at the end.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<Vec3>,
    next: usize,
}

impl Palette {
    pub fn new(colors: Vec<Vec3>) -> Result<Self> {
        if colors.is_empty() {
            return Err(Error::EmptyPalette);
        }
        Ok(Palette::from_colors(colors))
    }

    // callers guarantee at least one color
    fn from_colors(colors: Vec<Vec3>) -> Self {
        Palette { colors, next: 0 }
    }

    pub fn primary() -> Self {
        Palette::from_colors(vec![
            vec3(1.0, 0.0, 0.0),
            vec3(0.0, 1.0, 0.0),
            vec3(0.0, 0.0, 1.0),
            vec3(1.0, 1.0, 0.0),
            vec3(1.0, 0.0, 1.0),
            vec3(0.0, 1.0, 1.0),
        ])
    }

    pub fn pastel() -> Self {
        let rgb: [[f32; 3]; 10] = [
            [200.0, 191.0, 231.0],
            [174.0, 217.0, 224.0],
            [181.0, 234.0, 215.0],
            [255.0, 241.0, 182.0],
            [255.0, 188.0, 188.0],
            [246.0, 193.0, 199.0],
            [255.0, 216.0, 190.0],
            [220.0, 198.0, 224.0],
            [208.0, 230.0, 165.0],
            [183.0, 201.0, 226.0],
        ];
        Palette::from_colors(rgb.iter().map(|c| Vec3::from_array(*c) / 255.0).collect())
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn next_color(&mut self) -> Vec3 {
        let color = self.colors[self.next];
        self.next = (self.next + 1) % self.colors.len();
        color
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColoredTriangle {
    pub vertices: [Vec2; 3],
    pub color: Vec3,
}

/// Turns every three clicked points into a triangle.
#[derive(Debug)]
pub struct TriangleAssembler {
    pending: Vec<Vec2>,
    palette: Palette,
}

impl TriangleAssembler {
    pub fn new(palette: Palette) -> Self {
        TriangleAssembler {
            pending: Vec::with_capacity(3),
            palette,
        }
    }

    pub fn pending(&self) -> &[Vec2] {
        &self.pending
    }

    pub fn push_vertex(&mut self, point: Vec2) -> Option<ColoredTriangle> {
        self.pending.push(point);
        if self.pending.len() < 3 {
            return None;
        }
        let triangle = ColoredTriangle {
            vertices: [self.pending[0], self.pending[1], self.pending[2]],
            color: self.palette.next_color(),
        };
        self.pending.clear();
        Some(triangle)
    }
}

/// A copy of the shared default triangle placed at a clicked point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleInstance {
    pub position: Vec2,
    pub color: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    BottomLeft,
    TopLeft,
}

/// Look of the click-instanced triangles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstanceStyle {
    /// Vertices of the shared triangle, in model space.
    pub vertices: [Vec2; 3],
    pub size: Vec2,
    pub rotation_degrees: f32,
    pub origin: Origin,
    /// Pick colors from the pastel palette instead of at random.
    pub use_palette: bool,
    /// Instance placed at this point before any click.
    pub initial: Option<Vec2>,
}

impl InstanceStyle {
    pub fn random() -> Self {
        InstanceStyle {
            vertices: [vec2(-0.1, -0.1), vec2(0.1, -0.1), vec2(0.0, 0.1)],
            size: vec2(300.0, 300.0),
            rotation_degrees: 0.0,
            origin: Origin::BottomLeft,
            use_palette: false,
            initial: None,
        }
    }

    pub fn pastel() -> Self {
        InstanceStyle {
            vertices: [vec2(-0.5, -0.5), vec2(0.5, -0.5), vec2(0.0, 0.5)],
            size: vec2(100.0, 100.0),
            rotation_degrees: 180.0,
            origin: Origin::TopLeft,
            use_palette: true,
            initial: Some(vec2(400.0, 300.0)),
        }
    }
}

/// Places a triangle instance at every click.
#[derive(Debug)]
pub struct Instancer {
    style: InstanceStyle,
    palette: Palette,
    instances: Vec<TriangleInstance>,
}

impl Instancer {
    pub fn new<R: Rng>(style: InstanceStyle, rng: &mut R) -> Self {
        let mut instancer = Instancer {
            style,
            palette: Palette::pastel(),
            instances: vec![],
        };
        if let Some(position) = style.initial {
            instancer.place(position, rng);
        }
        instancer
    }

    pub fn style(&self) -> &InstanceStyle {
        &self.style
    }

    pub fn instances(&self) -> &[TriangleInstance] {
        &self.instances
    }

    /// Adds an instance under the cursor, given in GLFW window coordinates.
    pub fn click<R: Rng>(&mut self, cursor: (f64, f64), window_height: f32, rng: &mut R) -> TriangleInstance {
        let position = match self.style.origin {
            Origin::BottomLeft => window_to_world(cursor, window_height),
            Origin::TopLeft => vec2(cursor.0 as f32, cursor.1 as f32),
        };
        self.place(position, rng)
    }

    fn place<R: Rng>(&mut self, position: Vec2, rng: &mut R) -> TriangleInstance {
        let color = if self.style.use_palette {
            self.palette.next_color()
        } else {
            vec3(rng.gen(), rng.gen(), rng.gen())
        };
        let instance = TriangleInstance { position, color };
        self.instances.push(instance);
        instance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn cursor_y_is_flipped() {
        assert_eq!(window_to_world((10.0, 0.0), 600.0), vec2(10.0, 600.0));
        assert_eq!(window_to_world((800.0, 600.0), 600.0), vec2(800.0, 0.0));
    }

    #[test]
    fn palette_wraps_around() {
        let mut palette = Palette::primary();
        let first = palette.next_color();
        for _ in 1..palette.len() {
            palette.next_color();
        }
        assert_eq!(palette.next_color(), first);
    }

    #[test]
    fn empty_palettes_are_rejected() {
        assert!(matches!(Palette::new(vec![]), Err(Error::EmptyPalette)));

        let mut single = Palette::new(vec![vec3(0.5, 0.5, 0.5)]).unwrap();
        assert_eq!(single.next_color(), vec3(0.5, 0.5, 0.5));
        assert_eq!(single.next_color(), vec3(0.5, 0.5, 0.5));
    }

    #[test]
    fn pastel_palette_is_normalized() {
        let mut palette = Palette::pastel();
        assert_eq!(palette.len(), 10);
        for _ in 0..palette.len() {
            let color = palette.next_color();
            assert!(color.min_element() >= 0.0 && color.max_element() <= 1.0);
        }
    }

    #[test]
    fn every_third_vertex_closes_a_triangle() {
        let mut assembler = TriangleAssembler::new(Palette::primary());
        assert_eq!(assembler.push_vertex(vec2(0.0, 0.0)), None);
        assert_eq!(assembler.push_vertex(vec2(1.0, 0.0)), None);
        assert_eq!(assembler.pending().len(), 2);

        let first = assembler.push_vertex(vec2(0.0, 1.0)).unwrap();
        assert_eq!(first.vertices, [vec2(0.0, 0.0), vec2(1.0, 0.0), vec2(0.0, 1.0)]);
        assert_eq!(first.color, vec3(1.0, 0.0, 0.0));
        assert!(assembler.pending().is_empty());

        assembler.push_vertex(vec2(5.0, 5.0));
        assembler.push_vertex(vec2(6.0, 5.0));
        let second = assembler.push_vertex(vec2(5.0, 6.0)).unwrap();
        assert_eq!(second.color, vec3(0.0, 1.0, 0.0));
    }

    #[test]
    fn random_style_places_instances_in_world_space() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut instancer = Instancer::new(InstanceStyle::random(), &mut rng);
        assert!(instancer.instances().is_empty());

        let instance = instancer.click((100.0, 100.0), 600.0, &mut rng);
        assert_eq!(instance.position, vec2(100.0, 500.0));
        assert!(instance.color.min_element() >= 0.0 && instance.color.max_element() < 1.0);
        assert_eq!(instancer.instances().len(), 1);
    }

    #[test]
    fn pastel_style_starts_centred_and_cycles_colors() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut instancer = Instancer::new(InstanceStyle::pastel(), &mut rng);
        assert_eq!(instancer.instances().len(), 1);
        assert_eq!(instancer.instances()[0].position, vec2(400.0, 300.0));

        let mut palette = Palette::pastel();
        palette.next_color();
        let clicked = instancer.click((100.0, 100.0), 600.0, &mut rng);
        assert_eq!(clicked.position, vec2(100.0, 100.0));
        assert_eq!(clicked.color, palette.next_color());
    }
}
