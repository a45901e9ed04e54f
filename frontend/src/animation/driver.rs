use log::debug;

use super::frame::Frame;
use super::timeline::StaggerTimeline;
use super::trigger::{Geometry, ScrollTrigger};

// A gap longer than this between animation frames (background tab, debugger)
// advances the playhead by LAG_STEP instead of jumping.
const LAG_THRESHOLD: f64 = 0.5;
const LAG_STEP: f64 = 1.0 / 30.0;

/// Binds one scroll trigger to one timeline.
///
/// Fed element geometry on scroll and timestamps on animation frames. Once
/// detached every callback is ignored, so a late frame queued before
/// teardown cannot move the playhead.
#[derive(Debug, Clone)]
pub struct RevealDriver {
    trigger: ScrollTrigger,
    timeline: StaggerTimeline,
    attached: bool,
    last_timestamp: Option<f64>,
}

impl RevealDriver {
    pub fn new(trigger: ScrollTrigger, timeline: StaggerTimeline) -> Self {
        Self {
            trigger,
            timeline,
            attached: true,
            last_timestamp: None,
        }
    }

    pub fn timeline(&self) -> &StaggerTimeline {
        &self.timeline
    }

    pub fn frames(&self) -> Vec<Frame> {
        self.timeline.frames()
    }

    /// Returns whether animation frames are needed to move the playhead.
    pub fn on_scroll(&mut self, geometry: &Geometry) -> bool {
        if !self.attached {
            return false;
        }
        for event in self.trigger.update(geometry) {
            let action = self.trigger.actions().action_for(event);
            debug!("scroll trigger {:?} -> {:?}", event, action);
            self.timeline.apply(action);
        }
        self.timeline.is_playing()
    }

    /// `timestamp` is in milliseconds, as passed to `requestAnimationFrame`
    /// callbacks. Returns whether another frame should be requested.
    pub fn on_animation_frame(&mut self, timestamp: f64) -> bool {
        if !self.attached {
            return false;
        }
        let dt = match self.last_timestamp {
            Some(last) => {
                let dt = (timestamp - last) / 1000.0;
                if dt > LAG_THRESHOLD { LAG_STEP } else { dt }
            }
            None => 0.0,
        };
        let running = self.timeline.tick(dt);
        self.last_timestamp = running.then_some(timestamp);
        running
    }

    pub fn detach(&mut self) {
        if self.attached {
            debug!("scroll trigger detached in state {:?}", self.timeline.state());
        }
        self.attached = false;
        self.last_timestamp = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::timeline::RevealState;
    use crate::config::REVIEW_REVEAL;

    fn at(top: f64) -> Geometry {
        Geometry { top, height: 1200.0, viewport_height: 800.0 }
    }

    fn run(driver: &mut RevealDriver, from_ms: f64, to_ms: f64) {
        let mut t = from_ms;
        while t <= to_ms && driver.on_animation_frame(t) {
            t += 16.0;
        }
    }

    fn driver() -> RevealDriver {
        REVIEW_REVEAL.driver(3).unwrap()
    }

    #[test]
    fn nothing_moves_before_the_trigger_point() {
        let mut driver = driver();
        assert!(!driver.on_scroll(&at(800.0)));
        assert!(!driver.on_animation_frame(0.0));
        assert_eq!(driver.timeline().state(), RevealState::Hidden);
        assert!(driver.frames().iter().all(|f| f.opacity == 0.0 && f.y == 100.0));
    }

    #[test]
    fn entering_the_band_reveals_every_card() {
        let mut driver = driver();
        driver.on_scroll(&at(800.0));
        assert!(driver.on_scroll(&at(400.0)));
        run(&mut driver, 0.0, 3000.0);
        assert_eq!(driver.timeline().state(), RevealState::Revealed);
        assert!(driver.frames().iter().all(|f| *f == Frame::VISIBLE));
    }

    #[test]
    fn each_card_starts_point_two_seconds_after_the_previous() {
        let mut driver = driver();
        driver.on_scroll(&at(400.0));
        driver.on_animation_frame(1000.0);
        driver.on_animation_frame(1400.0);

        let timeline = driver.timeline();
        assert!((timeline.time() - 0.4).abs() < 1e-9);
        for i in 1..3 {
            let gap = timeline.start_time(i) - timeline.start_time(i - 1);
            assert!((gap - 0.2).abs() < 1e-9);
        }
        let frames = driver.frames();
        assert!(frames[0].opacity > frames[1].opacity);
        assert!(frames[1].opacity > 0.0);
        assert_eq!(frames[2].opacity, 0.0);
    }

    #[test]
    fn scrolling_back_before_completion_reverses() {
        let mut driver = driver();
        driver.on_scroll(&at(400.0));
        run(&mut driver, 0.0, 500.0);
        assert_eq!(driver.timeline().state(), RevealState::Revealing);

        assert!(driver.on_scroll(&at(700.0)));
        assert_eq!(driver.timeline().state(), RevealState::Reversing);
        run(&mut driver, 600.0, 3000.0);
        assert_eq!(driver.timeline().state(), RevealState::Hidden);

        // Re-entering replays forward.
        driver.on_scroll(&at(300.0));
        run(&mut driver, 4000.0, 8000.0);
        assert_eq!(driver.timeline().state(), RevealState::Revealed);
    }

    #[test]
    fn leaving_past_the_end_keeps_cards_revealed() {
        let mut driver = driver();
        driver.on_scroll(&at(400.0));
        run(&mut driver, 0.0, 3000.0);
        assert!(!driver.on_scroll(&at(-1000.0)));
        assert!(!driver.on_scroll(&at(-200.0)));
        assert_eq!(driver.timeline().state(), RevealState::Revealed);
    }

    #[test]
    fn long_frame_gaps_are_smoothed() {
        let mut driver = driver();
        driver.on_scroll(&at(400.0));
        driver.on_animation_frame(0.0);
        driver.on_animation_frame(10_000.0);
        assert!((driver.timeline().time() - LAG_STEP).abs() < 1e-9);
    }

    #[test]
    fn detached_driver_ignores_callbacks() {
        let mut driver = driver();
        driver.on_scroll(&at(400.0));
        driver.on_animation_frame(0.0);
        driver.on_animation_frame(100.0);
        let before = driver.frames();

        driver.detach();
        assert!(!driver.on_animation_frame(200.0));
        assert!(!driver.on_scroll(&at(900.0)));
        assert_eq!(driver.frames(), before);
    }
}
