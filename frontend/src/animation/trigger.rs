use std::str::FromStr;

use super::AnimationError;

/// A point along one axis: `fraction` of the extent plus a pixel offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub fraction: f64,
    pub pixels: f64,
}

impl Anchor {
    pub const fn new(fraction: f64, pixels: f64) -> Self {
        Self { fraction, pixels }
    }

    pub fn resolve(&self, extent: f64) -> f64 {
        self.fraction * extent + self.pixels
    }
}

impl FromStr for Anchor {
    type Err = AnimationError;

    /// Accepts `top`, `center` or `bottom`, optionally followed by a pixel
    /// offset such as `+=100` or `-=20px`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (base, offset) = match s.find("+=").or_else(|| s.find("-=")) {
            Some(at) => {
                let sign = if s[at..].starts_with('-') { -1.0 } else { 1.0 };
                let digits = s[at + 2..].trim();
                let amount = digits
                    .strip_suffix("px")
                    .unwrap_or(digits)
                    .parse::<f64>()
                    .map_err(|_| AnimationError::MalformedOffset(s.to_string()))?;
                (&s[..at], sign * amount)
            }
            None => (s, 0.0),
        };

        let fraction = match base {
            "top" => 0.0,
            "center" => 0.5,
            "bottom" => 1.0,
            other => return Err(AnimationError::UnknownEdge(other.to_string())),
        };
        Ok(Anchor::new(fraction, offset))
    }
}

/// Where a trigger element meets a line in the viewport, e.g.
/// `"top center+=100"`: the element's top reaches 100px below the
/// viewport's vertical center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerPosition {
    pub element: Anchor,
    pub viewport: Anchor,
}

impl TriggerPosition {
    /// True once scrolling has carried the element point up to or past the
    /// viewport line.
    pub fn passed(&self, geometry: &Geometry) -> bool {
        let element_point = geometry.top + self.element.resolve(geometry.height);
        let viewport_line = self.viewport.resolve(geometry.viewport_height);
        element_point <= viewport_line
    }
}

impl FromStr for TriggerPosition {
    type Err = AnimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(element), Some(viewport), None) => Ok(TriggerPosition {
                element: element.parse()?,
                viewport: viewport.parse()?,
            }),
            _ => Err(AnimationError::MalformedPosition(s.to_string())),
        }
    }
}

/// Trigger element box in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Distance from the viewport top to the element top; negative once
    /// the element top has scrolled out above the viewport.
    pub top: f64,
    pub height: f64,
    pub viewport_height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    Play,
    Reverse,
    None,
}

impl FromStr for ToggleAction {
    type Err = AnimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "play" => ToggleAction::Play,
            "reverse" => ToggleAction::Reverse,
            "none" => ToggleAction::None,
            other => return Err(AnimationError::UnknownToggleAction(other.to_string())),
        })
    }
}

/// Actions for enter, leave, enter-back and leave-back, in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleActions {
    pub on_enter: ToggleAction,
    pub on_leave: ToggleAction,
    pub on_enter_back: ToggleAction,
    pub on_leave_back: ToggleAction,
}

impl ToggleActions {
    pub fn action_for(&self, event: TriggerEvent) -> ToggleAction {
        match event {
            TriggerEvent::Enter => self.on_enter,
            TriggerEvent::Leave => self.on_leave,
            TriggerEvent::EnterBack => self.on_enter_back,
            TriggerEvent::LeaveBack => self.on_leave_back,
        }
    }
}

impl FromStr for ToggleActions {
    type Err = AnimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let actions = s
            .split_whitespace()
            .map(str::parse::<ToggleAction>)
            .collect::<Result<Vec<ToggleAction>, _>>()?;
        match actions.as_slice() {
            &[on_enter, on_leave, on_enter_back, on_leave_back] => Ok(ToggleActions {
                on_enter,
                on_leave,
                on_enter_back,
                on_leave_back,
            }),
            other => Err(AnimationError::ToggleActionCount(other.len())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Before,
    Active,
    After,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerEvent {
    Enter,
    Leave,
    EnterBack,
    LeaveBack,
}

/// Tracks which side of the start/end band the trigger element is on and
/// reports the crossings.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollTrigger {
    start: TriggerPosition,
    end: TriggerPosition,
    actions: ToggleActions,
    phase: Phase,
}

impl ScrollTrigger {
    pub fn new(start: TriggerPosition, end: TriggerPosition, actions: ToggleActions) -> Self {
        Self { start, end, actions, phase: Phase::Before }
    }

    pub fn actions(&self) -> &ToggleActions {
        &self.actions
    }

    pub fn phase_at(&self, geometry: &Geometry) -> Phase {
        if !self.start.passed(geometry) {
            Phase::Before
        } else if !self.end.passed(geometry) {
            Phase::Active
        } else {
            Phase::After
        }
    }

    /// Moves to the phase for `geometry` and returns the crossings in the
    /// order they happened. A jump over the whole band reports both.
    pub fn update(&mut self, geometry: &Geometry) -> Vec<TriggerEvent> {
        let next = self.phase_at(geometry);
        let events = match (self.phase, next) {
            (Phase::Before, Phase::Active) => vec![TriggerEvent::Enter],
            (Phase::Before, Phase::After) => vec![TriggerEvent::Enter, TriggerEvent::Leave],
            (Phase::Active, Phase::After) => vec![TriggerEvent::Leave],
            (Phase::Active, Phase::Before) => vec![TriggerEvent::LeaveBack],
            (Phase::After, Phase::Active) => vec![TriggerEvent::EnterBack],
            (Phase::After, Phase::Before) => vec![TriggerEvent::EnterBack, TriggerEvent::LeaveBack],
            _ => Vec::new(),
        };
        self.phase = next;
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reviews_trigger() -> ScrollTrigger {
        ScrollTrigger::new(
            "top center+=100".parse().unwrap(),
            "bottom center".parse().unwrap(),
            "play none none reverse".parse().unwrap(),
        )
    }

    // 800px viewport, 1200px tall section.
    fn at(top: f64) -> Geometry {
        Geometry { top, height: 1200.0, viewport_height: 800.0 }
    }

    #[test]
    fn parses_anchor_forms() {
        assert_eq!("top".parse::<Anchor>().unwrap(), Anchor::new(0.0, 0.0));
        assert_eq!("center+=100".parse::<Anchor>().unwrap(), Anchor::new(0.5, 100.0));
        assert_eq!("bottom-=20px".parse::<Anchor>().unwrap(), Anchor::new(1.0, -20.0));
    }

    #[test]
    fn rejects_bad_anchors() {
        assert_eq!(
            "middle".parse::<Anchor>(),
            Err(AnimationError::UnknownEdge("middle".to_string()))
        );
        assert!(matches!("center+=lots".parse::<Anchor>(), Err(AnimationError::MalformedOffset(_))));
        assert!(matches!("80%".parse::<Anchor>(), Err(AnimationError::UnknownEdge(_))));
        assert!(matches!(
            "top".parse::<TriggerPosition>(),
            Err(AnimationError::MalformedPosition(_))
        ));
        assert!(matches!(
            "top center bottom".parse::<TriggerPosition>(),
            Err(AnimationError::MalformedPosition(_))
        ));
    }

    #[test]
    fn parses_toggle_actions() {
        let actions: ToggleActions = "play none none reverse".parse().unwrap();
        assert_eq!(actions.action_for(TriggerEvent::Enter), ToggleAction::Play);
        assert_eq!(actions.action_for(TriggerEvent::Leave), ToggleAction::None);
        assert_eq!(actions.action_for(TriggerEvent::EnterBack), ToggleAction::None);
        assert_eq!(actions.action_for(TriggerEvent::LeaveBack), ToggleAction::Reverse);

        assert_eq!(
            "play none".parse::<ToggleActions>(),
            Err(AnimationError::ToggleActionCount(2))
        );
        assert_eq!(
            "play none none rewind".parse::<ToggleActions>(),
            Err(AnimationError::UnknownToggleAction("rewind".to_string()))
        );
        assert!(matches!(
            "play pause none reverse".parse::<ToggleActions>(),
            Err(AnimationError::UnknownToggleAction(_))
        ));
    }

    #[test]
    fn start_line_is_100px_below_center() {
        let trigger = reviews_trigger();
        assert_eq!(trigger.phase_at(&at(500.1)), Phase::Before);
        assert_eq!(trigger.phase_at(&at(500.0)), Phase::Active);
        // Bottom edge (top + 1200) reaches the center at top == -800.
        assert_eq!(trigger.phase_at(&at(-799.0)), Phase::Active);
        assert_eq!(trigger.phase_at(&at(-800.0)), Phase::After);
    }

    #[test]
    fn scrolling_down_then_back_up() {
        let mut trigger = reviews_trigger();
        assert!(trigger.update(&at(900.0)).is_empty());
        assert_eq!(trigger.update(&at(450.0)), vec![TriggerEvent::Enter]);
        assert!(trigger.update(&at(0.0)).is_empty());
        assert_eq!(trigger.update(&at(-900.0)), vec![TriggerEvent::Leave]);
        assert_eq!(trigger.update(&at(-300.0)), vec![TriggerEvent::EnterBack]);
        assert_eq!(trigger.update(&at(700.0)), vec![TriggerEvent::LeaveBack]);
        assert!(trigger.update(&at(900.0)).is_empty());
    }

    #[test]
    fn jumping_over_the_band_reports_both_crossings() {
        let mut trigger = reviews_trigger();
        assert_eq!(
            trigger.update(&at(-2000.0)),
            vec![TriggerEvent::Enter, TriggerEvent::Leave]
        );
        assert_eq!(
            trigger.update(&at(2000.0)),
            vec![TriggerEvent::EnterBack, TriggerEvent::LeaveBack]
        );
    }
}
