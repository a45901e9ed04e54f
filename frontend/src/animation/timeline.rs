use super::ease::Ease;
use super::frame::Frame;
use super::trigger::ToggleAction;

/// A from→to tween shared by every target of a staggered timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: Frame,
    pub to: Frame,
    /// Seconds.
    pub duration: f64,
    pub ease: Ease,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Revealing,
    Revealed,
    Reversing,
}

/// Staggered tween over `count` targets driven by an explicit playhead.
///
/// Target `i` starts `i * stagger` seconds after target 0. The playhead
/// only moves in `tick`, so the whole timeline is deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct StaggerTimeline {
    tween: Tween,
    stagger: f64,
    count: usize,
    time: f64,
    direction: Direction,
    playing: bool,
}

impl StaggerTimeline {
    pub fn new(tween: Tween, stagger: f64, count: usize) -> Self {
        Self {
            tween,
            stagger: stagger.max(0.0),
            count,
            time: 0.0,
            direction: Direction::Forward,
            playing: false,
        }
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Offset of target `index` from the start of the timeline.
    pub fn start_time(&self, index: usize) -> f64 {
        self.stagger * index as f64
    }

    pub fn total_duration(&self) -> f64 {
        match self.count {
            0 => 0.0,
            n => self.start_time(n - 1) + self.tween.duration,
        }
    }

    /// Linear progress of target `index`, before easing.
    pub fn progress_of(&self, index: usize) -> f64 {
        if self.time >= self.total_duration() {
            return 1.0;
        }
        let local = self.time - self.start_time(index);
        if self.tween.duration <= 0.0 {
            return if local >= 0.0 { 1.0 } else { 0.0 };
        }
        (local / self.tween.duration).clamp(0.0, 1.0)
    }

    pub fn frame(&self, index: usize) -> Frame {
        let eased = self.tween.ease.apply(self.progress_of(index));
        self.tween.from.lerp(&self.tween.to, eased)
    }

    pub fn frames(&self) -> Vec<Frame> {
        (0..self.count).map(|i| self.frame(i)).collect()
    }

    pub fn state(&self) -> RevealState {
        match (self.playing, self.direction) {
            (true, Direction::Forward) => RevealState::Revealing,
            (true, Direction::Backward) => RevealState::Reversing,
            // Idle timelines rest at one end of the playhead.
            (false, _) if self.time <= 0.0 => RevealState::Hidden,
            (false, _) => RevealState::Revealed,
        }
    }

    pub fn play(&mut self) {
        self.direction = Direction::Forward;
        self.playing = self.time < self.total_duration();
    }

    pub fn reverse(&mut self) {
        self.direction = Direction::Backward;
        self.playing = self.time > 0.0;
    }

    pub fn apply(&mut self, action: ToggleAction) {
        match action {
            ToggleAction::Play => self.play(),
            ToggleAction::Reverse => self.reverse(),
            ToggleAction::None => {}
        }
    }

    /// Advances the playhead by `dt` seconds. Returns whether the timeline
    /// still needs ticking.
    pub fn tick(&mut self, dt: f64) -> bool {
        if !self.playing || dt <= 0.0 {
            return self.playing;
        }
        let total = self.total_duration();
        match self.direction {
            Direction::Forward => {
                self.time = (self.time + dt).min(total);
                self.playing = self.time < total;
            }
            Direction::Backward => {
                self.time = (self.time - dt).max(0.0);
                self.playing = self.time > 0.0;
            }
        }
        self.playing
    }
}
