use gl_sprite_course::{AnimatedSprite, FrameStepping, SpriteSheet};
use proptest::prelude::*;

fn sheet(rows: u32, columns: u32, duration: f32) -> SpriteSheet {
    SpriteSheet::new(rows, columns, duration).unwrap()
}

fn stepping() -> impl Strategy<Value = FrameStepping> {
    prop_oneof![Just(FrameStepping::SingleStep), Just(FrameStepping::CatchUp)]
}

// mostly frame-sized steps, plus the odd huge or non-finite jump
fn delta() -> impl Strategy<Value = f32> {
    prop_oneof![
        8 => -1.0f32..5.0,
        1 => 5.0f32..1.0e9,
        1 => prop_oneof![Just(f32::INFINITY), Just(f32::NEG_INFINITY), Just(f32::NAN), Just(f32::MAX)],
    ]
}

proptest! {
    #[test]
    fn selecting_a_valid_row_points_at_its_first_frame(
        rows in 2u32..16,
        columns in 1u32..16,
        pick in 0u32..16,
        warmup in prop::collection::vec(0.0f32..0.5, 0..8),
    ) {
        let row = pick % rows;
        let atlas = ();
        let mut sprite = AnimatedSprite::new(&atlas, sheet(rows, columns, 0.1));
        // start from a different row so the selection is a real switch
        sprite.select_animation(((row + 1) % rows) as i32);
        for dt in warmup {
            sprite.advance(dt);
        }
        sprite.select_animation(row as i32);

        let region = sprite.frame_region();
        let expected = (rows - 1 - row) as f32 * (1.0 / rows as f32);
        prop_assert!((region.offset.y - expected).abs() < 1e-6);
        prop_assert_eq!(sprite.current_column(), 0);
        prop_assert_eq!(region.offset.x, 0.0);
    }

    #[test]
    fn out_of_range_rows_never_change_state(
        rows in 1u32..16,
        columns in 1u32..16,
        deltas in prop::collection::vec(0.0f32..0.5, 0..8),
        row in prop_oneof![i32::MIN..0i32, 16i32..i32::MAX],
    ) {
        let atlas = ();
        let mut sprite = AnimatedSprite::new(&atlas, sheet(rows, columns, 0.1));
        for dt in deltas {
            sprite.advance(dt);
        }
        let before = (sprite.current_row(), sprite.current_column(), sprite.accumulated_time());
        sprite.select_animation(row);
        prop_assert_eq!(before, (sprite.current_row(), sprite.current_column(), sprite.accumulated_time()));
    }

    #[test]
    fn reselecting_the_current_row_is_a_no_op(
        rows in 1u32..16,
        columns in 2u32..16,
        deltas in prop::collection::vec(0.0f32..0.5, 1..8),
    ) {
        let atlas = ();
        let mut sprite = AnimatedSprite::new(&atlas, sheet(rows, columns, 0.1));
        sprite.select_animation((rows - 1) as i32);
        for dt in deltas {
            sprite.advance(dt);
        }
        let before = (sprite.current_row(), sprite.current_column(), sprite.accumulated_time());
        sprite.select_animation(sprite.current_row() as i32);
        prop_assert_eq!(before, (sprite.current_row(), sprite.current_column(), sprite.accumulated_time()));
    }

    #[test]
    fn one_frame_per_step_cycles_back_to_the_start(
        columns in 1u32..32,
        duration in prop_oneof![Just(0.05f32), Just(0.1), Just(0.125), Just(0.25), Just(0.5), Just(1.0)],
        mode in stepping(),
    ) {
        let atlas = ();
        let mut sprite = AnimatedSprite::new(&atlas, sheet(1, columns, duration)).with_stepping(mode);
        let start = sprite.current_column();
        for _ in 0..columns {
            sprite.advance(duration);
        }
        prop_assert_eq!(sprite.current_column(), start);
    }

    #[test]
    fn playback_state_stays_in_bounds(
        rows in 1u32..8,
        columns in 1u32..16,
        duration in 0.01f32..1.0,
        mode in stepping(),
        steps in prop::collection::vec((delta(), prop::option::of(-2i32..10)), 0..64),
    ) {
        let atlas = ();
        let mut sprite = AnimatedSprite::new(&atlas, sheet(rows, columns, duration)).with_stepping(mode);
        for (dt, row) in steps {
            if let Some(row) = row {
                sprite.select_animation(row);
            }
            sprite.advance(dt);
            prop_assert!(sprite.current_row() < rows);
            prop_assert!(sprite.current_column() < columns);
            prop_assert!(sprite.accumulated_time() >= 0.0);
            prop_assert!(sprite.accumulated_time() < duration);

            let region = sprite.frame_region();
            prop_assert!(region.offset.x >= 0.0 && region.offset.x + region.scale.x <= 1.0 + 1e-5);
            prop_assert!(region.offset.y >= 0.0 && region.offset.y + region.scale.y <= 1.0 + 1e-5);
        }
    }

    #[test]
    fn single_column_sheets_never_animate(
        rows in 1u32..8,
        deltas in prop::collection::vec(-1.0f32..10.0, 0..32),
    ) {
        let atlas = ();
        let mut sprite = AnimatedSprite::new(&atlas, sheet(rows, 1, 0.1));
        for dt in deltas {
            sprite.advance(dt);
            prop_assert_eq!(sprite.current_column(), 0);
        }
    }
}
