use crate::*;

use sideswipe::{CarouselOptions, GestureState, ParentScroll, ScrollSurface};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn tween_samples_endpoints_and_eases_monotonically() {
    for easing in [
        Easing::Linear,
        Easing::SmoothStep,
        Easing::EaseOutCubic,
        Easing::EaseInOutCubic,
    ] {
        let t = Tween::new(100.0, 400.0, 1000, 200, easing);
        assert_eq!(t.sample(1000), 100.0);
        assert_eq!(t.sample(1200), 400.0);
        assert_eq!(t.sample(5000), 400.0);
        assert!(t.is_done(1200));
        assert!(!t.is_done(1199));

        let mut last = t.sample(1000);
        for now in (1000..=1200).step_by(10) {
            let v = t.sample(now);
            assert!(v >= last);
            last = v;
        }
    }
}

#[test]
fn tween_handles_negative_offsets_and_zero_duration() {
    let t = Tween::new(10.0, -30.0, 0, 0, Easing::Linear);
    assert_eq!(t.duration_ms, 1);
    assert_eq!(t.sample(1), -30.0);

    let t = Tween::new(0.0, -100.0, 0, 100, Easing::Linear);
    assert_close(t.sample(25), -25.0);
}

#[test]
fn tween_toward_continues_an_interrupted_snap() {
    let running = Tween::new(0.0, 300.0, 0, 100, Easing::Linear);

    let t = Tween::toward(Some(&running), 999.0, 600.0, 40, 100, Easing::Linear);
    assert_close(t.from, 120.0);
    assert_eq!(t.start_ms, 40);

    // A finished snap no longer owns the position.
    let t = Tween::toward(Some(&running), 310.0, 0.0, 150, 100, Easing::Linear);
    assert_eq!(t.from, 310.0);
    let t = Tween::toward(None, 5.0, 0.0, 150, 100, Easing::Linear);
    assert_eq!(t.from, 5.0);
}

#[test]
fn tween_frame_reports_landing() {
    let t = Tween::new(0.0, 100.0, 0, 100, Easing::EaseOutCubic);
    let mid = t.frame(50);
    assert_close(mid.offset, 87.5);
    assert!(!mid.done);
    assert_eq!(t.frame(100), TweenFrame { offset: 100.0, done: true });
    assert_eq!(t.progress(25), 0.25);
}

#[test]
fn surface_immediate_scroll_cancels_animation() {
    let mut s = TweenSurface::new(0.0).with_animation(100, Easing::Linear);
    s.scroll_to_offset(300.0, true);
    assert!(s.is_animating());
    assert_close(s.tick(50).unwrap(), 150.0);

    s.scroll_to_offset(42.0, false);
    assert!(!s.is_animating());
    assert_eq!(s.position(), 42.0);
    assert_eq!(s.tick(60), None);
}

#[test]
fn surface_latest_animated_call_wins() {
    let mut s = TweenSurface::new(0.0).with_animation(100, Easing::Linear);
    s.scroll_to_offset(300.0, true);
    let mid = s.tick(50).unwrap();

    s.scroll_to_offset(600.0, true);
    let tween = *s.tween().unwrap();
    assert_eq!(tween.from, mid);
    assert_eq!(tween.to, 600.0);
    assert_eq!(tween.start_ms, 50);

    assert_eq!(s.tick(150), Some(600.0));
    assert!(!s.is_animating());
    assert_eq!(s.tick(160), None);
}

#[test]
fn surface_clock_never_runs_backwards() {
    let mut s = TweenSurface::default();
    s.set_now(100);
    s.set_now(40);
    assert_eq!(s.now_ms(), 100);
}

#[test]
fn pointer_tracks_deltas_from_press_point() {
    let mut p = PointerTracker::new();
    assert_eq!(p.move_to(1.0, 1.0, 5), None);

    assert_eq!(p.down(100.0, 50.0, 0), GestureState::default());
    let g = p.move_to(80.0, 53.0, 10).unwrap();
    assert_eq!(g.dx, -20.0);
    assert_eq!(g.dy, 3.0);
    assert_close(g.vx, -2.0);
    assert!(p.is_active());
}

#[test]
fn pointer_velocity_is_smoothed_and_kept_on_lift() {
    let mut p = PointerTracker::new();
    p.down(0.0, 0.0, 0);
    p.move_to(-20.0, 0.0, 10);
    assert_close(p.move_to(-40.0, 0.0, 20).unwrap().vx, -2.0);
    assert_close(p.move_to(-40.0, 0.0, 30).unwrap().vx, -1.4);

    let g = p.up(-40.0, 0.0, 40).unwrap();
    assert_close(g.vx, -1.4);
    assert_eq!(g.dx, -40.0);
    assert!(!p.is_active());
    assert_eq!(p.gesture(), None);
}

#[test]
fn pointer_velocity_restarts_after_long_pause() {
    let mut p = PointerTracker::new();
    p.down(0.0, 0.0, 0);
    p.move_to(-50.0, 0.0, 10);
    let g = p.move_to(-60.0, 0.0, 10 + MAX_SAMPLE_GAP_MS + 90).unwrap();
    assert_close(g.vx, -10.0 / (MAX_SAMPLE_GAP_MS + 90) as f64);
}

#[test]
fn shared_parent_scroll_exposes_flag() {
    let mut parent = SharedParentScroll::new();
    let flag = parent.flag();
    assert!(ParentScroll::is_enabled(&parent));

    parent.disable();
    assert!(!flag.load(core::sync::atomic::Ordering::Acquire));
    parent.enable();
    assert!(flag.load(core::sync::atomic::Ordering::Acquire));
}

#[test]
fn controller_swipe_snaps_to_next_item() {
    let mut c = Controller::standalone(CarouselOptions::new(5, 300.0));

    c.on_pointer_down(400.0, 0.0, 0);
    assert_close(c.on_pointer_move(398.0, 0.0, 16).unwrap(), -11.98);
    assert!(c.carousel().is_dragging());
    assert_close(c.on_pointer_move(250.0, 0.0, 100).unwrap(), 210.02);

    assert_eq!(c.on_pointer_up(250.0, 0.0, 116), Some(1));
    assert!(c.is_animating());
    assert_eq!(c.carousel().current_index(), 1);

    let mut last = c.tick(116).unwrap();
    assert_close(last, 210.02);
    for now in (132..366).step_by(16) {
        let off = c.tick(now).unwrap();
        assert!(off >= last);
        last = off;
    }
    assert_close(c.tick(366).unwrap(), 285.02);
    assert!(!c.is_animating());
    assert_eq!(c.tick(400), None);

    let carousel = c.carousel();
    assert_close(carousel.scroll_position(), 285.02);
    assert_eq!(carousel.progress(), carousel.scroll_position() / 300.0);
}

#[test]
fn controller_ignores_moves_below_capture_sensitivity() {
    let mut c = Controller::standalone(CarouselOptions::new(5, 300.0));
    c.on_pointer_down(100.0, 0.0, 0);
    assert_eq!(c.on_pointer_move(100.5, 30.0, 16), None);
    assert!(!c.carousel().is_dragging());
    assert_eq!(c.on_pointer_up(100.5, 30.0, 32), None);
    assert_eq!(c.carousel().current_index(), 0);
}

#[test]
fn controller_locks_shared_parent_for_the_gesture() {
    let parent = SharedParentScroll::new();
    let flag = parent.flag();
    let mut c = Controller::new(CarouselOptions::new(5, 300.0), parent);

    c.on_pointer_down(200.0, 0.0, 0);
    c.on_pointer_move(190.0, 0.0, 16);
    assert!(!flag.load(core::sync::atomic::Ordering::Acquire));
    c.on_pointer_move(150.0, 0.0, 32);
    assert!(!flag.load(core::sync::atomic::Ordering::Acquire));

    c.on_pointer_up(150.0, 0.0, 48);
    assert!(flag.load(core::sync::atomic::Ordering::Acquire));
}

#[test]
fn controller_termination_hands_gesture_over() {
    let options = CarouselOptions::new(5, 300.0)
        .with_initial_index(2)
        .with_should_release(|g: &GestureState| g.dy.abs() > g.dx.abs());
    let mut c = Controller::new(options, SharedParentScroll::new());

    c.on_pointer_down(200.0, 0.0, 0);
    c.on_pointer_move(180.0, 0.0, 16);
    assert!(!c.request_termination(20));
    assert!(c.carousel().is_dragging());

    c.on_pointer_move(180.0, 60.0, 32);
    assert!(c.request_termination(40));
    assert!(!c.carousel().is_dragging());
    assert!(!c.pointer().is_active());
    assert!(ParentScroll::is_enabled(c.carousel().parent()));
    assert_eq!(c.on_pointer_up(180.0, 60.0, 48), None);
    assert_eq!(c.carousel().current_index(), 2);
}

#[test]
fn controller_imposed_index_animates_to_compensated_offset() {
    let mut c = Controller::standalone(CarouselOptions::new(5, 300.0));
    c.set_index(3, 0);
    assert_eq!(c.carousel().current_index(), 3);
    assert!(c.is_animating());

    c.tick(DEFAULT_DURATION_MS);
    assert!(!c.is_animating());
    // 900 - (300 * 0.0666 - (3 * 10 + 5))
    assert_close(c.carousel().scroll_position(), 915.02);
}

#[test]
fn controller_starts_at_initial_index_position() {
    let c = Controller::standalone(CarouselOptions::new(5, 300.0).with_initial_index(4));
    assert_eq!(c.carousel().surface().position(), 1200.0);
    assert_eq!(c.carousel().scroll_position(), 1200.0);
}

fn swipe(c: &mut Controller, from_x: f64, to_x: f64, start_ms: u64) -> Option<usize> {
    c.on_pointer_down(from_x, 0.0, start_ms);
    c.on_pointer_move(from_x - 4.0, 0.0, start_ms + 16);
    c.on_pointer_move(to_x, 0.0, start_ms + 32);
    c.on_pointer_up(to_x, 0.0, start_ms + 48)
}

#[test]
fn controller_set_index_applies_every_request() {
    let mut c = Controller::standalone(CarouselOptions::new(5, 300.0));
    c.set_index(3, 0);
    assert_eq!(c.carousel().current_index(), 3);

    assert_eq!(swipe(&mut c, 400.0, 250.0, 300), Some(4));

    c.set_index(3, 400);
    assert_eq!(c.carousel().current_index(), 3);
    c.tick(400 + DEFAULT_DURATION_MS);
    assert_close(c.carousel().scroll_position(), 915.02);
}

#[test]
fn controller_set_index_prop_only_reacts_to_changes() {
    let mut c = Controller::standalone(CarouselOptions::new(5, 300.0).with_initial_index(1));
    c.set_index_prop(Some(1), 0);
    assert!(!c.is_animating());

    assert_eq!(swipe(&mut c, 400.0, 250.0, 0), Some(2));
    c.set_index_prop(Some(1), 100);
    assert_eq!(c.carousel().current_index(), 2);

    c.set_index_prop(Some(0), 200);
    assert_eq!(c.carousel().current_index(), 0);
}

#[test]
fn controller_set_index_during_drag_is_queued() {
    let mut c = Controller::standalone(CarouselOptions::new(5, 300.0));
    c.on_pointer_down(400.0, 0.0, 0);
    c.on_pointer_move(390.0, 0.0, 16);
    c.set_index(4, 20);
    assert_eq!(c.carousel().current_index(), 0);
    assert_eq!(c.carousel().pending_index(), Some(4));

    c.on_pointer_up(390.0, 0.0, 32);
    assert_eq!(c.carousel().current_index(), 4);
}
