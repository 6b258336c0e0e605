//! Rules of the color match game.
//!
//! The window is tiled with randomly colored rectangles. Clicking one removes
//! it together with every other rectangle whose color lies within a fixed
//! RGB distance of it. Each click costs an attempt and every removed
//! rectangle scores a point.

use glam::{vec2, vec3, Vec2, Vec3};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    pub columns: usize,
    pub rows: usize,
    pub window_size: Vec2,
    pub max_attempts: u32,
    /// Largest Euclidean RGB distance still counted as the same color.
    pub threshold: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            columns: 8,
            rows: 6,
            window_size: vec2(800.0, 600.0),
            max_attempts: 10,
            threshold: 0.25,
        }
    }
}

impl GridConfig {
    pub fn cell_size(&self) -> Vec2 {
        vec2(
            self.window_size.x / self.columns as f32,
            self.window_size.y / self.rows as f32,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    /// Bottom left corner in window pixels.
    pub position: Vec2,
    pub color: Vec3,
    pub alive: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Removal {
    pub index: usize,
    pub distance: f32,
}

/// Outcome of one counted click.
#[derive(Debug, Clone, PartialEq)]
pub struct PickReport {
    pub attempt: u32,
    pub picked: usize,
    pub removed: Vec<Removal>,
}

#[derive(Debug, Clone)]
pub struct ColorGrid {
    config: GridConfig,
    cells: Vec<Cell>,
    score: u32,
    attempts: u32,
}

impl ColorGrid {
    pub fn random<R: Rng>(config: GridConfig, rng: &mut R) -> Self {
        let colors = (0..config.columns * config.rows)
            .map(|_| vec3(rng.gen(), rng.gen(), rng.gen()))
            .collect::<Vec<_>>();
        ColorGrid::from_colors(config, &colors)
    }

    /// Builds the grid row by row from the bottom, taking colors in order.
    /// Cells without a color are black.
    pub fn from_colors(config: GridConfig, colors: &[Vec3]) -> Self {
        let cell_size = config.cell_size();
        let mut cells = Vec::with_capacity(config.columns * config.rows);
        for y in 0..config.rows {
            for x in 0..config.columns {
                let color = colors.get(cells.len()).copied().unwrap_or(Vec3::ZERO);
                cells.push(Cell {
                    position: vec2(x as f32 * cell_size.x, y as f32 * cell_size.y),
                    color,
                    alive: true,
                });
            }
        }
        ColorGrid {
            config,
            cells,
            score: 0,
            attempts: 0,
        }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.alive).count()
    }

    /// Index of the cell under `point`, in window pixels with the origin bottom left.
    pub fn cell_at(&self, point: Vec2) -> Option<usize> {
        if point.x < 0.0 || point.y < 0.0 {
            return None;
        }
        let cell_size = self.config.cell_size();
        let column = (point.x / cell_size.x) as usize;
        let row = (point.y / cell_size.y) as usize;
        if column >= self.config.columns || row >= self.config.rows {
            return None;
        }
        Some(row * self.config.columns + column)
    }

    /// Clicks at `point`. Returns `None` when the click is not counted.
    pub fn pick(&mut self, point: Vec2) -> Option<PickReport> {
        if self.attempts >= self.config.max_attempts {
            return None;
        }
        let picked = self.cell_at(point)?;
        if !self.cells[picked].alive {
            return None;
        }

        let chosen = self.cells[picked].color;
        let threshold = self.config.threshold;
        let mut removed = vec![];
        for (index, cell) in self.cells.iter_mut().enumerate() {
            if !cell.alive {
                continue;
            }
            let distance = cell.color.distance(chosen);
            if distance <= threshold {
                cell.alive = false;
                removed.push(Removal { index, distance });
            }
        }

        self.score += removed.len() as u32;
        self.attempts += 1;

        Some(PickReport {
            attempt: self.attempts,
            picked,
            removed,
        })
    }

    pub fn is_over(&self) -> bool {
        self.attempts >= self.config.max_attempts || self.cells.iter().all(|cell| !cell.alive)
    }

    pub fn title(&self) -> String {
        format!(
            "Color Match - Score: {}   Attempts: {}/{}",
            self.score, self.attempts, self.config.max_attempts
        )
    }
}
