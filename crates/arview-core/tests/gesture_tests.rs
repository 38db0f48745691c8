// Gesture classification driven through the viewer's touch entry points.

mod support;

use arview_core::{GestureKind, GestureSession, DRAG_SENSITIVITY, SCALE_MAX, SCALE_MIN};
use glam::Vec2;
use rand::prelude::*;
use support::*;

#[test]
fn drag_is_anchored_to_session_start() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let mut v = active_viewer();
        let start = Vec2::new(rng.gen_range(0.0..400.0), rng.gen_range(0.0..800.0));
        v.on_touch_start(&[start]);

        let mut last = start;
        for _ in 0..rng.gen_range(1..40) {
            last = Vec2::new(rng.gen_range(0.0..400.0), rng.gen_range(0.0..800.0));
            v.on_touch_move(&[last]);
        }

        let expected = (last - start) * DRAG_SENSITIVITY;
        let t = v.target().get();
        assert!(approx(t.position_x, expected.x), "x {} vs {}", t.position_x, expected.x);
        assert!(approx(t.position_z, expected.y), "z {} vs {}", t.position_z, expected.y);
    }
}

#[test]
fn second_drag_starts_from_previous_target() {
    let mut v = active_viewer();
    v.on_touch_start(&pts(&[(100.0, 100.0)]));
    v.on_touch_move(&pts(&[(200.0, 100.0)]));
    v.on_touch_end(&[]);
    let after_first = v.target().get().position_x;
    assert!(approx(after_first, 100.0 * DRAG_SENSITIVITY));

    v.on_touch_start(&pts(&[(10.0, 10.0)]));
    v.on_touch_move(&pts(&[(60.0, 10.0)]));
    assert!(approx(v.target().get().position_x, after_first + 50.0 * DRAG_SENSITIVITY));
}

#[test]
fn pinch_scale_stays_within_bounds() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut v = active_viewer();
    v.on_touch_start(&pts(&[(0.0, 0.0), (100.0, 0.0)]));
    for _ in 0..500 {
        let d = rng.gen_range(0.0..5000.0_f32);
        let a = rng.gen_range(-3.2..3.2_f32);
        v.on_touch_move(&[Vec2::ZERO, Vec2::new(d * a.cos(), d * a.sin())]);
        let s = v.target().get().scale;
        assert!((SCALE_MIN..=SCALE_MAX).contains(&s), "scale {s} out of range");
    }
}

#[test]
fn pinch_spread_from_100_to_150_gives_scale_1_5() {
    let mut v = active_viewer();
    v.on_touch_start(&pts(&[(0.0, 0.0), (100.0, 0.0)]));
    v.on_touch_move(&pts(&[(0.0, 0.0), (150.0, 0.0)]));
    assert!(approx(v.target().get().scale, 1.5));
}

#[test]
fn thirty_degree_twist_rotates_fifteen() {
    let mut v = active_viewer();
    v.on_touch_start(&pts(&[(0.0, 0.0), (100.0, 0.0)]));
    let a = 30.0_f32.to_radians();
    v.on_touch_move(&[Vec2::ZERO, Vec2::new(100.0 * a.cos(), 100.0 * a.sin())]);
    assert!(approx(v.target().get().rotation_deg, 15.0));
}

#[test]
fn twist_across_branch_cut_does_not_jump() {
    let mut v = active_viewer();
    // finger line pointing left (180 degrees), then just past it
    v.on_touch_start(&pts(&[(100.0, 0.0), (0.0, 0.0)]));
    v.on_touch_move(&pts(&[(100.0, 0.0), (0.0, -2.0)]));
    let r = v.target().get().rotation_deg;
    assert!(r.abs() < 1.0, "rotation jumped to {r}");
}

#[test]
fn second_finger_discards_drag() {
    let mut v = active_viewer();
    v.on_touch_start(&pts(&[(0.0, 0.0)]));
    v.on_touch_move(&pts(&[(40.0, 0.0)]));
    let before = *v.target().get();

    v.on_touch_start(&pts(&[(40.0, 0.0), (140.0, 0.0)]));
    assert_eq!(v.gestures().kind(), GestureKind::DualPinchRotate);
    // moving both fingers together must not be read as a drag
    v.on_touch_move(&pts(&[(240.0, 0.0), (340.0, 0.0)]));
    let after = v.target().get();
    assert_eq!(after.position_x, before.position_x);
    assert_eq!(after.position_z, before.position_z);
    assert!(approx(after.scale, 1.0));
}

#[test]
fn pinch_to_single_finger_reseeds_drag_without_jump() {
    let mut v = active_viewer();
    v.on_touch_start(&pts(&[(0.0, 0.0)]));
    v.on_touch_move(&pts(&[(100.0, 0.0)]));
    v.on_touch_start(&pts(&[(100.0, 0.0), (200.0, 0.0)]));
    v.on_touch_move(&pts(&[(100.0, 0.0), (300.0, 0.0)]));
    let at_lift = *v.target().get();

    v.on_touch_end(&pts(&[(300.0, 0.0)]));
    match v.gestures().session() {
        Some(GestureSession::Drag {
            start,
            reference_position,
        }) => {
            assert_eq!(*start, Vec2::new(300.0, 0.0));
            assert_eq!(*reference_position, at_lift.position());
        }
        other => panic!("expected drag session, got {other:?}"),
    }

    // the remaining finger continues from where it is, not from the pinch anchor
    v.on_touch_move(&pts(&[(300.0, 0.0)]));
    assert_eq!(*v.target().get(), at_lift);
    v.on_touch_move(&pts(&[(320.0, 0.0)]));
    assert!(approx(
        v.target().get().position_x,
        at_lift.position_x + 20.0 * DRAG_SENSITIVITY
    ));
    assert_eq!(v.target().get().rotation_deg, at_lift.rotation_deg);
}

#[test]
fn gestures_never_touch_current_or_surface() {
    let mut v = active_viewer();
    let writes = v.surface().transform_writes();
    v.on_touch_start(&pts(&[(0.0, 0.0), (100.0, 0.0)]));
    v.on_touch_move(&pts(&[(0.0, 0.0), (250.0, 40.0)]));
    v.on_touch_end(&pts(&[(0.0, 0.0)]));
    v.on_touch_move(&pts(&[(50.0, 80.0)]));
    assert!(v.current().get().is_identity());
    assert_eq!(v.surface().transform_writes(), writes);
}

#[test]
fn touches_outside_ar_are_ignored() {
    let mut v = viewer(true, Default::default());
    v.on_touch_start(&pts(&[(0.0, 0.0)]));
    v.on_touch_move(&pts(&[(300.0, 300.0)]));
    assert!(v.target().get().is_identity());
    assert_eq!(v.gestures().kind(), GestureKind::None);
}
