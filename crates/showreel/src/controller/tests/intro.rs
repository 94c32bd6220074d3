use super::*;
use crate::controller::intro::IntroReel;

#[test]
fn intro_lands_on_slide_zero_and_unlocks() {
    let (mut c, _media) = controller(5);
    assert!(c.is_animating());
    assert!(!c.gestures_enabled());

    run_intro(&mut c);

    assert_eq!(c.current_index(), 0);
    assert!(!c.is_animating());
    assert!(c.gestures_enabled());
    assert_eq!(active_count(&c), 1);
    assert!(c.slide(0).active);
    assert!(!c.stage().loader_visible);
    assert_eq!(c.stage().logo_opacity, 1.0);
}

#[test]
fn intro_runs_only_once() {
    let (mut c, _media) = controller(4);
    let rejections = record_rejections(&mut c);

    c.start_intro();
    c.start_intro();
    settle(&mut c);
    c.start_intro();

    assert_eq!(
        rejections.borrow().as_slice(),
        &[RejectedOp::IntroReplay, RejectedOp::IntroReplay]
    );
    assert_eq!(c.current_index(), 0);
    assert!(!c.is_animating());
}

#[test]
fn frame_target_formula() {
    // N=5, loops=6: the sweep counts 0..=29.
    assert_eq!(IntroReel::total_frames(5, 6), 29.0);
    assert_eq!(IntroReel::total_frames(1, 6), 5.0);
}

#[test]
fn sweep_highlights_exactly_one_slide() {
    let (mut c, _media) = controller(5);
    c.start_intro();

    // Sample mid-sweep: one slide promoted, the rest transparent.
    for _ in 0..20 {
        c.tick(DT);
        let lit = c.slides().iter().filter(|s| s.opacity >= 1.0).count();
        assert_eq!(lit, 1);
        assert!(c.stage().loader_visible);
    }
}

#[test]
fn cosmetic_ramps_settle_to_neutral() {
    let (mut c, _media) = controller(3);
    c.start_intro();
    c.tick(DT);
    assert!(c.stage().blur > 0.0);
    assert!(c.stage().container_stretch > 1.0);

    settle(&mut c);
    assert_eq!(c.stage().blur, 0.0);
    assert_eq!(c.stage().container_stretch, 1.0);
    assert_eq!(c.stage().container_scale, 1.0);
}

#[test]
fn neighbors_are_pre_staged_during_the_settle() {
    let (mut c, _media) = controller(5);
    c.start_intro();

    // Tick until the sweep hands off (loader goes away) but the settle is
    // still in flight.
    for _ in 0..10_000 {
        c.tick(DT);
        if !c.stage().loader_visible {
            break;
        }
    }
    assert!(c.is_animating());
    assert_eq!(c.slide(0).y_percent, 0.0);
    assert_eq!(c.slide(0).z_index, 2);
    assert_eq!(c.slide(4).y_percent, -100.0);
    assert_eq!(c.slide(1).y_percent, 100.0);
    // Non-neighbors are faded out.
    assert_eq!(c.slide(2).opacity, 0.0);
    assert_eq!(c.slide(3).opacity, 0.0);
}

#[test]
fn media_wait_timeout_starts_the_intro_anyway() {
    let (mut c, _media) = controller(3);
    // No notify_media_ready: liveness comes from the bounded wait.
    for _ in 0..41 {
        c.tick(DT);
    }
    assert!(c.intro_has_played());

    settle(&mut c);
    assert_eq!(c.current_index(), 0);
    assert!(!c.is_animating());
}

#[test]
fn media_ready_skips_the_wait() {
    let (mut c, _media) = controller(3);
    c.notify_media_ready();
    c.tick(DT);
    assert!(c.intro_has_played());
}

#[test]
fn skip_intro_goes_straight_to_rest_state() {
    let (mut c, mut media) = controller(3);
    c.skip_intro();

    assert!(c.intro_has_played());
    assert!(!c.is_animating());
    assert!(c.gestures_enabled());
    assert_eq!(c.current_index(), 0);
    assert!(c.slide(0).active);
    assert!(!c.stage().loader_visible);

    // Still a one-shot.
    let rejections = record_rejections(&mut c);
    c.skip_intro();
    assert_eq!(rejections.borrow().as_slice(), &[RejectedOp::IntroReplay]);

    // And the show is immediately navigable.
    c.goto(1, Direction::Forward, &mut media);
    settle(&mut c);
    assert_eq!(c.current_index(), 1);
}

#[test]
fn intro_works_with_a_single_slide() {
    let (mut c, _media) = controller(1);
    run_intro(&mut c);
    assert_eq!(c.current_index(), 0);
    assert!(c.slide(0).active);
    assert!(!c.is_animating());
}
