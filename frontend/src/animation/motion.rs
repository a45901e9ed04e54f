use gloo_timers::callback::Timeout;
use yew::prelude::*;

use super::frame::Frame;

// Delay before switching from the initial to the animated frame, long
// enough for the browser to paint the initial frame first.
const ENTER_DELAY_MS: u32 = 20;

const TWEEN_TIMING: &str = "ease-out";

// Envelope fraction at which a spring counts as settled.
const SETTLE_TOLERANCE: f64 = 0.02;
const SPRING_SAMPLES: usize = 40;

/// Damped harmonic spring, parameterised like framer-motion springs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Spring {
    pub const fn new(stiffness: f64) -> Self {
        Spring { stiffness, damping: 10.0, mass: 1.0 }
    }

    pub const fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Seconds until the oscillation stays within 2% of the target.
    pub fn settle_duration(&self) -> f64 {
        let zeta = self.damping_ratio();
        let omega = self.natural_frequency();
        let decay = if zeta < 1.0 {
            zeta * omega
        } else {
            omega * (zeta - (zeta * zeta - 1.0).sqrt())
        };
        if decay <= 0.0 {
            return 1.0;
        }
        -SETTLE_TOLERANCE.ln() / decay
    }

    /// Normalised step response: 0 at rest, 1 at the target, overshooting
    /// above 1 when underdamped.
    pub fn position(&self, t: f64) -> f64 {
        let zeta = self.damping_ratio();
        let omega = self.natural_frequency();
        if zeta < 1.0 {
            let damped = omega * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * omega * t).exp();
            1.0 - envelope * ((damped * t).cos() + (zeta * omega / damped) * (damped * t).sin())
        } else if (zeta - 1.0).abs() < 1e-9 {
            1.0 - (-omega * t).exp() * (1.0 + omega * t)
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -omega * (zeta - root);
            let r2 = -omega * (zeta + root);
            1.0 + (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r1 - r2)
        }
    }

    /// CSS `linear()` easing sampled from the step response over
    /// `settle_duration`.
    pub fn css_easing(&self) -> String {
        let duration = self.settle_duration();
        let points = (0..=SPRING_SAMPLES)
            .map(|i| {
                if i == SPRING_SAMPLES {
                    return "1".to_string();
                }
                let t = duration * i as f64 / SPRING_SAMPLES as f64;
                format!("{:.4}", self.position(t))
            })
            .collect::<Vec<_>>();
        format!("linear({})", points.join(", "))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    Tween { duration: f64, delay: f64 },
    Spring(Spring),
}

impl Transition {
    pub const fn tween(duration: f64) -> Self {
        Transition::Tween { duration, delay: 0.0 }
    }

    pub const fn delayed(self, delay: f64) -> Self {
        match self {
            Transition::Tween { duration, .. } => Transition::Tween { duration, delay },
            spring => spring,
        }
    }

    /// CSS `transition` value covering opacity and transform.
    pub fn css(&self) -> String {
        let (duration, delay, timing) = match self {
            Transition::Tween { duration, delay } => (*duration, *delay, TWEEN_TIMING.to_string()),
            Transition::Spring(spring) => (spring.settle_duration(), 0.0, spring.css_easing()),
        };
        ["opacity", "transform"]
            .iter()
            .map(|property| format!("{property} {duration:.3}s {timing} {delay:.3}s"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for Transition {
    fn default() -> Self {
        Transition::tween(0.3)
    }
}

#[derive(Properties, PartialEq)]
pub struct MotionProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(Frame::VISIBLE)]
    pub initial: Frame,
    #[prop_or(Frame::VISIBLE)]
    pub animate: Frame,
    #[prop_or_default]
    pub transition: Transition,
    #[prop_or_default]
    pub while_hover: Option<Frame>,
    #[prop_or_default]
    pub hover_transition: Transition,
    #[prop_or_default]
    pub children: Children,
}

/// A `div` that transitions from `initial` to `animate` once mounted and
/// towards `while_hover` while the pointer is over it.
#[function_component(Motion)]
pub fn motion(props: &MotionProps) -> Html {
    let entered = use_state(|| props.initial == props.animate);
    let hovered = use_state(|| false);
    let hover_engaged = use_state(|| false);

    {
        let entered = entered.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = (!*entered).then(|| {
                    let entered = entered.setter();
                    Timeout::new(ENTER_DELAY_MS, move || entered.set(true))
                });
                move || drop(timeout)
            },
            (),
        );
    }

    let frame = match (*hovered, props.while_hover) {
        (true, Some(hover)) => hover,
        _ if *entered => props.animate,
        _ => props.initial,
    };
    let transition = if *hover_engaged {
        props.hover_transition
    } else {
        props.transition
    };
    let style = format!("{} transition: {};", frame.style(), transition.css());

    let (onmouseenter, onmouseleave) = if props.while_hover.is_some() {
        let enter = {
            let hovered = hovered.clone();
            let hover_engaged = hover_engaged.clone();
            Callback::from(move |_: MouseEvent| {
                hover_engaged.set(true);
                hovered.set(true);
            })
        };
        let leave = {
            let hovered = hovered.clone();
            Callback::from(move |_: MouseEvent| hovered.set(false))
        };
        (Some(enter), Some(leave))
    } else {
        (None, None)
    };

    html! {
        <div class={props.class.clone()} {style} {onmouseenter} {onmouseleave}>
            { for props.children.iter() }
        </div>
    }
}
