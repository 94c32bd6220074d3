mod intro;
mod media;
mod overlay;

use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::gesture::GestureConfig;
use crate::media::MediaDeck;

/// Fixed test tick; small enough to hit every sub-step window.
const DT: f32 = 0.05;

/// Media stub: records commands, playback succeeds unless told otherwise.
struct FakeMedia {
    has_media: Vec<bool>,
    paused: Vec<bool>,
    fail_play: bool,
    plays: usize,
    pauses: usize,
    rewinds: usize,
}

impl FakeMedia {
    fn new(slide_count: usize) -> Self {
        Self {
            has_media: vec![true; slide_count],
            paused: vec![true; slide_count],
            fail_play: false,
            plays: 0,
            pauses: 0,
            rewinds: 0,
        }
    }

    fn without_media(slide_count: usize) -> Self {
        Self {
            has_media: vec![false; slide_count],
            ..Self::new(slide_count)
        }
    }
}

impl MediaDeck for FakeMedia {
    fn has_media(&self, index: usize) -> bool {
        self.has_media.get(index).copied().unwrap_or(false)
    }

    fn play(&mut self, index: usize) -> anyhow::Result<()> {
        if self.fail_play {
            anyhow::bail!("autoplay blocked");
        }
        self.plays += 1;
        self.paused[index] = false;
        Ok(())
    }

    fn pause(&mut self, index: usize) {
        self.pauses += 1;
        self.paused[index] = true;
    }

    fn rewind(&mut self, index: usize) {
        self.rewinds += 1;
        self.paused[index] = true;
    }

    fn is_paused(&self, index: usize) -> bool {
        self.paused.get(index).copied().unwrap_or(true)
    }

    fn snapshot(&self, _index: usize) -> Option<image::RgbaImage> {
        None
    }
}

fn controller(slide_count: usize) -> (ShowController, FakeMedia) {
    let c = ShowController::new(
        slide_count,
        IntroConfig::default(),
        GestureConfig::default(),
    );
    (c, FakeMedia::new(slide_count))
}

/// Tick until the controller goes idle. Panics if it never does.
fn settle(c: &mut ShowController) {
    for _ in 0..10_000 {
        c.tick(DT);
        if !c.is_animating() {
            return;
        }
    }
    panic!("controller never settled");
}

/// Run the intro to completion.
fn run_intro(c: &mut ShowController) {
    c.notify_media_ready();
    settle(c);
    assert!(c.intro_has_played());
}

/// Install a hook that records every rejected operation.
fn record_rejections(c: &mut ShowController) -> Rc<RefCell<Vec<RejectedOp>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    c.set_reject_hook(move |op| sink.borrow_mut().push(op));
    log
}

/// Number of slides currently flagged active.
fn active_count(c: &ShowController) -> usize {
    c.slides().iter().filter(|s| s.active).count()
}
