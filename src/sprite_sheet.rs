//! Frame timing and sub-UV addressing for sprite sheet animation.
//!
//! A sprite sheet is one texture holding a `rows x columns` grid of equally
//! sized frames. Each row is an animation strip (idle, walk, ...), each column
//! one frame of that strip. [`AnimatedSprite`] tracks which strip is playing
//! and which frame is showing, and turns that into a [`FrameRegion`] the
//! renderer uses to remap texture coordinates onto the current frame.
//!
//! Nothing here touches the graphics API, so the whole animation model can be
//! exercised without a GL context.

use glam::{vec2, Vec2};

use crate::error::{Error, Result};

/// Grid layout and frame duration of a sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteSheet {
    num_rows: u32,
    num_columns: u32,
    time_per_sprite: f32,
}

impl SpriteSheet {
    pub fn new(num_rows: u32, num_columns: u32, time_per_sprite: f32) -> Result<Self> {
        if num_rows == 0 || num_columns == 0 {
            return Err(Error::EmptyGrid {
                rows: num_rows,
                columns: num_columns,
            });
        }
        if !time_per_sprite.is_finite() || time_per_sprite <= 0.0 {
            return Err(Error::InvalidFrameDuration(time_per_sprite));
        }
        Ok(SpriteSheet {
            num_rows,
            num_columns,
            time_per_sprite,
        })
    }

    /// Single row sheet, the common layout for one animation per image.
    pub fn strip(num_columns: u32, time_per_sprite: f32) -> Result<Self> {
        SpriteSheet::new(1, num_columns, time_per_sprite)
    }

    pub fn num_rows(&self) -> u32 {
        self.num_rows
    }

    pub fn num_columns(&self) -> u32 {
        self.num_columns
    }

    pub fn time_per_sprite(&self) -> f32 {
        self.time_per_sprite
    }

    /// Size of one frame in normalized texture coordinates.
    pub fn frame_scale(&self) -> Vec2 {
        vec2(1.0 / self.num_columns as f32, 1.0 / self.num_rows as f32)
    }
}

/// How [`AnimatedSprite::advance`] handles a delta spanning several frames.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FrameStepping {
    /// Show at most one new frame per call. Whole frames beyond that are dropped.
    #[default]
    SingleStep,
    /// Skip ahead by as many frames as the delta covers.
    CatchUp,
}

/// Sub-rectangle of the atlas holding the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRegion {
    pub scale: Vec2,
    pub offset: Vec2,
}

impl FrameRegion {
    /// Remaps a full-texture coordinate onto the frame.
    pub fn apply(&self, uv: Vec2) -> Vec2 {
        uv * self.scale + self.offset
    }
}

/// Playback state of one sprite over a borrowed atlas.
///
/// The atlas is whatever the caller uses to identify the image (a GL texture
/// in the programs, anything at all in tests). It is only borrowed, so it must
/// outlive the sprite.
#[derive(Debug)]
pub struct AnimatedSprite<'a, A> {
    atlas: &'a A,
    sheet: SpriteSheet,
    stepping: FrameStepping,
    current_row: u32,
    current_column: u32,
    accumulated_time: f32,
}

impl<'a, A> AnimatedSprite<'a, A> {
    pub fn new(atlas: &'a A, sheet: SpriteSheet) -> Self {
        AnimatedSprite {
            atlas,
            sheet,
            stepping: FrameStepping::default(),
            current_row: 0,
            current_column: 0,
            accumulated_time: 0.0,
        }
    }

    pub fn with_stepping(mut self, stepping: FrameStepping) -> Self {
        self.stepping = stepping;
        self
    }

    pub fn atlas(&self) -> &'a A {
        self.atlas
    }

    pub fn sheet(&self) -> &SpriteSheet {
        &self.sheet
    }

    pub fn stepping(&self) -> FrameStepping {
        self.stepping
    }

    pub fn current_row(&self) -> u32 {
        self.current_row
    }

    pub fn current_column(&self) -> u32 {
        self.current_column
    }

    pub fn accumulated_time(&self) -> f32 {
        self.accumulated_time
    }

    /// Switches to another animation strip, restarting it from its first frame.
    ///
    /// Rows outside the sheet are ignored, and selecting the strip that is
    /// already playing does not restart it.
    pub fn select_animation(&mut self, row: i32) {
        if row < 0 || row as u32 >= self.sheet.num_rows {
            return;
        }
        let row = row as u32;
        if row == self.current_row {
            return;
        }
        self.current_row = row;
        self.current_column = 0;
        self.accumulated_time = 0.0;
    }

    /// Advances playback by `dt` seconds. Negative and non-finite deltas count
    /// as zero.
    pub fn advance(&mut self, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 || self.sheet.num_columns <= 1 {
            return;
        }

        let duration = self.sheet.time_per_sprite;
        let columns = self.sheet.num_columns;
        self.accumulated_time += dt;

        match self.stepping {
            FrameStepping::SingleStep => {
                if self.accumulated_time >= duration {
                    self.current_column = (self.current_column + 1) % columns;
                    self.accumulated_time -= duration;
                    if self.accumulated_time >= duration {
                        self.accumulated_time %= duration;
                    }
                }
            }
            FrameStepping::CatchUp => {
                if self.accumulated_time >= duration {
                    // the division can round below 1 right at the boundary
                    let steps = (self.accumulated_time / duration).floor().max(1.0);
                    let skipped = (steps as u64 % columns as u64) as u32;
                    self.current_column = (self.current_column + skipped) % columns;
                    // exact, so the remainder always lands in [0, duration)
                    self.accumulated_time %= duration;
                }
            }
        }
    }

    /// Texture-space scale and offset of the frame currently showing.
    ///
    /// Rows are counted from the top of the image while texture coordinates
    /// start at the bottom, hence the inverted row in `offset.y`.
    pub fn frame_region(&self) -> FrameRegion {
        let scale = self.sheet.frame_scale();
        let offset = vec2(
            self.current_column as f32 * scale.x,
            (self.sheet.num_rows - 1 - self.current_row) as f32 * scale.y,
        );
        FrameRegion { scale, offset }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn sprite(atlas: &(), rows: u32, columns: u32, duration: f32) -> AnimatedSprite<'_, ()> {
        AnimatedSprite::new(atlas, SpriteSheet::new(rows, columns, duration).unwrap())
    }

    fn state<A>(sprite: &AnimatedSprite<A>) -> (u32, u32, f32) {
        (sprite.current_row(), sprite.current_column(), sprite.accumulated_time())
    }

    //=====================================================================
    // Construction
    //=====================================================================

    #[test]
    fn rejects_empty_grids() {
        assert!(matches!(SpriteSheet::new(0, 4, 0.1), Err(Error::EmptyGrid { rows: 0, columns: 4 })));
        assert!(matches!(SpriteSheet::new(2, 0, 0.1), Err(Error::EmptyGrid { rows: 2, columns: 0 })));
    }

    #[test]
    fn rejects_non_positive_or_non_finite_durations() {
        for duration in [0.0, -0.5, f32::NAN, f32::INFINITY] {
            assert!(
                matches!(SpriteSheet::new(1, 4, duration), Err(Error::InvalidFrameDuration(_))),
                "accepted {duration}"
            );
        }
    }

    #[test]
    fn starts_on_first_frame_of_first_strip() {
        let atlas = ();
        let sprite = sprite(&atlas, 3, 5, 0.1);
        assert_eq!(state(&sprite), (0, 0, 0.0));
        assert_eq!(sprite.stepping(), FrameStepping::SingleStep);
    }

    //=====================================================================
    // select_animation
    //=====================================================================

    #[test]
    fn selecting_a_row_restarts_that_strip() {
        let atlas = ();
        let mut sprite = sprite(&atlas, 2, 10, 0.1);
        sprite.advance(0.1);
        sprite.advance(0.05);
        assert_eq!(sprite.current_column(), 1);

        sprite.select_animation(1);
        assert_eq!(state(&sprite), (1, 0, 0.0));
    }

    #[test]
    fn out_of_range_rows_are_ignored() {
        let atlas = ();
        let mut sprite = sprite(&atlas, 2, 10, 0.1);
        sprite.advance(0.1);
        sprite.advance(0.03);
        let before = state(&sprite);

        for row in [-1, 2, 7, i32::MIN, i32::MAX] {
            sprite.select_animation(row);
            assert_eq!(state(&sprite), before, "row {row} changed state");
        }
    }

    #[test]
    fn reselecting_current_row_keeps_playback() {
        let atlas = ();
        let mut sprite = sprite(&atlas, 2, 10, 0.1);
        sprite.select_animation(1);
        sprite.advance(0.1);
        sprite.advance(0.04);
        let before = state(&sprite);

        sprite.select_animation(1);
        assert_eq!(state(&sprite), before);
    }

    //=====================================================================
    // advance
    //=====================================================================

    #[test]
    fn seven_frame_strip_cycles_in_order() {
        let atlas = ();
        let mut sprite = sprite(&atlas, 1, 7, 0.12);

        let mut observed = Vec::new();
        for _ in 0..7 {
            sprite.advance(0.12);
            observed.push(sprite.current_column());
        }
        assert_eq!(observed, vec![1, 2, 3, 4, 5, 6, 0]);
    }

    #[test]
    fn partial_deltas_accumulate_until_a_frame_elapses() {
        let atlas = ();
        let mut sprite = sprite(&atlas, 1, 4, 0.5);
        sprite.advance(0.25);
        assert_eq!(sprite.current_column(), 0);
        assert!((sprite.accumulated_time() - 0.25).abs() < EPSILON);

        sprite.advance(0.25);
        assert_eq!(sprite.current_column(), 1);
        assert!(sprite.accumulated_time().abs() < EPSILON);
    }

    #[test]
    fn single_step_shows_one_frame_per_call_and_drops_the_rest() {
        let atlas = ();
        let mut sprite = sprite(&atlas, 1, 8, 0.1);
        sprite.advance(0.35);
        assert_eq!(sprite.current_column(), 1);
        assert!(sprite.accumulated_time() < 0.1);
        assert!((sprite.accumulated_time() - 0.05).abs() < 1e-5);
    }

    #[test]
    fn catch_up_skips_every_elapsed_frame() {
        let atlas = ();
        let mut sprite = sprite(&atlas, 1, 8, 0.25).with_stepping(FrameStepping::CatchUp);
        sprite.advance(1.0);
        assert_eq!(sprite.current_column(), 4);
        assert!(sprite.accumulated_time() < 0.25);

        // wraps around the strip
        sprite.advance(1.25);
        assert_eq!(sprite.current_column(), 1);
    }

    #[test]
    fn huge_deltas_keep_the_remainder_below_one_frame() {
        let atlas = ();
        for mode in [FrameStepping::SingleStep, FrameStepping::CatchUp] {
            let mut sprite = sprite(&atlas, 1, 7, 0.3).with_stepping(mode);
            for dt in [3.3e7, 1.0e9, 12_345.678, f32::MAX] {
                sprite.advance(dt);
                assert!(sprite.accumulated_time() >= 0.0, "{mode:?} dt {dt}");
                assert!(sprite.accumulated_time() < 0.3, "{mode:?} dt {dt}: {}", sprite.accumulated_time());
                assert!(sprite.current_column() < 7);
            }
        }
    }

    #[test]
    fn single_column_never_moves() {
        let atlas = ();
        let mut sprite = sprite(&atlas, 3, 1, 0.1);
        for dt in [0.0, 0.05, 0.1, 1.0, 42.0] {
            sprite.advance(dt);
            assert_eq!(sprite.current_column(), 0);
        }
        assert_eq!(sprite.accumulated_time(), 0.0);
    }

    #[test]
    fn negative_and_nan_deltas_count_as_zero() {
        let atlas = ();
        let mut sprite = sprite(&atlas, 1, 4, 0.1);
        sprite.advance(0.05);
        sprite.advance(-3.0);
        sprite.advance(f32::NAN);
        assert_eq!(sprite.current_column(), 0);
        assert!((sprite.accumulated_time() - 0.05).abs() < EPSILON);
    }

    #[test]
    fn infinite_deltas_count_as_zero_and_playback_continues() {
        let atlas = ();
        for mode in [FrameStepping::SingleStep, FrameStepping::CatchUp] {
            let mut sprite = sprite(&atlas, 1, 7, 0.12).with_stepping(mode);
            sprite.advance(f32::INFINITY);
            sprite.advance(f32::NEG_INFINITY);
            assert_eq!(state(&sprite), (0, 0, 0.0), "{mode:?}");

            sprite.advance(0.12);
            sprite.advance(0.12);
            assert_eq!(sprite.current_column(), 2, "{mode:?}");
            assert!(!sprite.accumulated_time().is_nan());
        }
    }

    //=====================================================================
    // frame_region
    //=====================================================================

    #[test]
    fn region_after_third_frame_of_strip() {
        let atlas = ();
        let mut sprite = sprite(&atlas, 1, 7, 0.12);
        for _ in 0..3 {
            sprite.advance(0.12);
        }
        let region = sprite.frame_region();
        assert!(region.scale.abs_diff_eq(vec2(1.0 / 7.0, 1.0), EPSILON));
        assert!(region.offset.abs_diff_eq(vec2(3.0 / 7.0, 0.0), EPSILON));
    }

    #[test]
    fn rows_map_top_down_onto_bottom_up_texture_space() {
        let atlas = ();
        let mut sprite = sprite(&atlas, 2, 10, 0.1);

        sprite.select_animation(1);
        assert_eq!(sprite.frame_region().offset.y, 0.0);

        sprite.select_animation(0);
        assert_eq!(sprite.frame_region().offset.y, 0.5);
        assert_eq!(sprite.current_column(), 0);
    }

    #[test]
    fn region_maps_unit_square_onto_the_frame() {
        let atlas = ();
        let mut sprite = sprite(&atlas, 4, 4, 0.1);
        sprite.select_animation(2);
        sprite.advance(0.1);

        let region = sprite.frame_region();
        assert!(region.apply(Vec2::ZERO).abs_diff_eq(vec2(0.25, 0.25), EPSILON));
        assert!(region.apply(Vec2::ONE).abs_diff_eq(vec2(0.5, 0.5), EPSILON));
    }

    #[test]
    fn atlas_is_borrowed_not_copied() {
        let atlas = String::from("resources/sprite1.png");
        let sprite = AnimatedSprite::new(&atlas, SpriteSheet::strip(6, 0.1).unwrap());
        assert!(std::ptr::eq(sprite.atlas(), &atlas));
    }
}
