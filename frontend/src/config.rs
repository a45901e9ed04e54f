use log::Level;

use crate::animation::driver::RevealDriver;
use crate::animation::frame::Frame;
use crate::animation::timeline::{StaggerTimeline, Tween};
use crate::animation::trigger::ScrollTrigger;
use crate::animation::AnimationError;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose trigger logging when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Scroll-triggered staggered entrance for a group of cards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    pub start: &'static str,
    pub end: &'static str,
    pub toggle_actions: &'static str,
    pub ease: &'static str,
    pub duration: f64,
    pub stagger: f64,
    pub from: Frame,
    pub to: Frame,
}

impl RevealConfig {
    pub fn driver(&self, count: usize) -> Result<RevealDriver, AnimationError> {
        let trigger = ScrollTrigger::new(
            self.start.parse()?,
            self.end.parse()?,
            self.toggle_actions.parse()?,
        );
        let tween = Tween {
            from: self.from,
            to: self.to,
            duration: self.duration,
            ease: self.ease.parse()?,
        };
        Ok(RevealDriver::new(trigger, StaggerTimeline::new(tween, self.stagger, count)))
    }
}

pub const REVIEW_REVEAL: RevealConfig = RevealConfig {
    start: "top center+=100",
    end: "bottom center",
    toggle_actions: "play none none reverse",
    ease: "power4.out",
    duration: 1.0,
    stagger: 0.2,
    from: Frame::hidden(100.0),
    to: Frame::VISIBLE,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::timeline::RevealState;

    #[test]
    fn review_reveal_parses() {
        let driver = REVIEW_REVEAL.driver(3).unwrap();
        assert_eq!(driver.timeline().state(), RevealState::Hidden);
        assert!((driver.timeline().total_duration() - 1.4).abs() < 1e-9);
    }

    #[test]
    fn bad_strings_surface_as_errors() {
        let broken = RevealConfig { ease: "bouncy", ..REVIEW_REVEAL };
        assert_eq!(
            broken.driver(3).unwrap_err(),
            AnimationError::UnknownEase("bouncy".to_string())
        );
        let broken = RevealConfig { start: "top", ..REVIEW_REVEAL };
        assert!(matches!(broken.driver(3), Err(AnimationError::MalformedPosition(_))));
    }
}
