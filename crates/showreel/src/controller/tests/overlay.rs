use super::*;
use crate::gesture::NavIntent;

#[test]
fn open_then_close_round_trip() {
    let (mut c, _media) = controller(3);
    run_intro(&mut c);

    c.open_overlay();
    assert!(c.is_animating());
    assert!(!c.gestures_enabled());
    settle(&mut c);
    assert!(c.overlay_open());
    assert_eq!(c.stage().overlay_offset, 0.0);
    assert!(!c.gestures_enabled());

    c.close_overlay();
    settle(&mut c);
    assert!(!c.overlay_open());
    assert_eq!(c.stage().overlay_offset, 100.0);
    assert!(!c.is_animating());
    assert!(c.gestures_enabled());
}

#[test]
fn open_while_already_animating_open_is_a_noop() {
    let (mut c, _media) = controller(3);
    run_intro(&mut c);
    let rejections = record_rejections(&mut c);

    c.open_overlay();
    c.tick(DT);
    c.open_overlay();

    settle(&mut c);
    assert!(c.overlay_open());
    assert_eq!(rejections.borrow().as_slice(), &[RejectedOp::OverlayOpen]);
}

#[test]
fn open_mid_slide_transition_is_rejected() {
    let (mut c, mut media) = controller(3);
    run_intro(&mut c);
    let rejections = record_rejections(&mut c);

    c.navigate(NavIntent::Advance, &mut media);
    c.tick(DT);
    c.open_overlay();

    settle(&mut c);
    assert!(!c.overlay_open());
    assert_eq!(c.stage().overlay_offset, 100.0);
    assert_eq!(c.current_index(), 1);
    assert_eq!(rejections.borrow().as_slice(), &[RejectedOp::OverlayOpen]);
}

#[test]
fn navigation_is_rejected_while_the_overlay_animates() {
    let (mut c, mut media) = controller(3);
    run_intro(&mut c);
    let rejections = record_rejections(&mut c);

    c.open_overlay();
    c.tick(DT);
    c.navigate(NavIntent::Advance, &mut media);

    settle(&mut c);
    assert_eq!(c.current_index(), 0);
    assert_eq!(rejections.borrow().as_slice(), &[RejectedOp::Navigate]);
}

#[test]
fn gestures_cannot_navigate_behind_an_open_overlay() {
    let (mut c, mut media) = controller(3);
    run_intro(&mut c);

    c.open_overlay();
    settle(&mut c);
    assert!(c.overlay_open());
    assert!(!c.is_animating());

    c.feed_scroll(-80.0, false, &mut media);
    assert!(!c.is_animating());
    assert_eq!(c.current_index(), 0);
}

#[test]
fn close_when_not_open_is_a_noop() {
    let (mut c, _media) = controller(3);
    run_intro(&mut c);
    let rejections = record_rejections(&mut c);

    c.close_overlay();
    assert!(!c.is_animating());
    assert_eq!(rejections.borrow().as_slice(), &[RejectedOp::OverlayClose]);
}

#[test]
fn overlay_is_locked_out_until_the_intro_finishes() {
    let (mut c, _media) = controller(3);
    let rejections = record_rejections(&mut c);

    c.open_overlay();
    assert!(!c.overlay_open());
    assert_eq!(rejections.borrow().as_slice(), &[RejectedOp::OverlayOpen]);

    run_intro(&mut c);
    c.open_overlay();
    settle(&mut c);
    assert!(c.overlay_open());
}
