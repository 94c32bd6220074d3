use super::*;

#[test]
fn toggle_plays_then_pauses_the_current_slide() {
    let (mut c, mut media) = controller(3);
    run_intro(&mut c);

    c.toggle_media(0, &mut media);
    assert!(c.slide(0).playing);
    assert_eq!(media.plays, 1);
    assert!(!media.is_paused(0));

    c.toggle_media(0, &mut media);
    assert!(!c.slide(0).playing);
    assert!(media.is_paused(0));
}

#[test]
fn toggle_is_gated_on_current_slide_lock_and_intro() {
    let (mut c, mut media) = controller(3);
    let rejections = record_rejections(&mut c);

    // Before the intro: the lock is pre-acquired.
    c.toggle_media(0, &mut media);
    run_intro(&mut c);

    // Wrong slide.
    c.toggle_media(1, &mut media);

    // Mid-transition.
    c.goto(1, Direction::Forward, &mut media);
    c.toggle_media(1, &mut media);
    settle(&mut c);

    assert_eq!(
        rejections.borrow().as_slice(),
        &[
            RejectedOp::MediaToggle,
            RejectedOp::MediaToggle,
            RejectedOp::MediaToggle
        ]
    );
    assert_eq!(media.plays, 0);
    assert!(!c.slide(0).playing);
    assert!(!c.slide(1).playing);
}

#[test]
fn play_failure_is_logged_not_surfaced() {
    let (mut c, mut media) = controller(3);
    run_intro(&mut c);
    media.fail_play = true;

    c.toggle_media(0, &mut media);
    // The flag never sticks when playback refuses to start.
    assert!(!c.slide(0).playing);
    assert!(!c.is_animating());
}

#[test]
fn slide_without_media_toggles_nothing() {
    let mut c = ShowController::new(2, IntroConfig::default(), GestureConfig::default());
    let mut media = FakeMedia::without_media(2);
    run_intro(&mut c);

    c.toggle_media(0, &mut media);
    assert!(!c.slide(0).playing);
    assert_eq!(media.plays, 0);
}
