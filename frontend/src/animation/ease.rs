use std::str::FromStr;

use super::AnimationError;

/// Easing curve mapping linear progress in `[0, 1]` to eased progress.
///
/// Parsed from GSAP names: `none`, `power0`..`power4`, with an optional
/// `.out` suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    Linear,
    /// Decelerating curve `1 - (1 - p)^(power + 1)`, `power` in 1..=4.
    PowerOut(u8),
}

impl Ease {
    pub fn apply(&self, progress: f64) -> f64 {
        let p = progress.clamp(0.0, 1.0);
        match *self {
            Ease::Linear => p,
            Ease::PowerOut(power) => 1.0 - (1.0 - p).powi(i32::from(power) + 1),
        }
    }
}

impl FromStr for Ease {
    type Err = AnimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let family = name.strip_suffix(".out").unwrap_or(name);
        match family {
            "none" | "linear" | "power0" => Ok(Ease::Linear),
            "power1" => Ok(Ease::PowerOut(1)),
            "power2" => Ok(Ease::PowerOut(2)),
            "power3" => Ok(Ease::PowerOut(3)),
            "power4" => Ok(Ease::PowerOut(4)),
            _ => Err(AnimationError::UnknownEase(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_power_names() {
        assert_eq!("power4.out".parse::<Ease>(), Ok(Ease::PowerOut(4)));
        assert_eq!("power2".parse::<Ease>(), Ok(Ease::PowerOut(2)));
        assert_eq!("power0.out".parse::<Ease>(), Ok(Ease::Linear));
        assert_eq!("none".parse::<Ease>(), Ok(Ease::Linear));
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(
            "elastic.out".parse::<Ease>(),
            Err(AnimationError::UnknownEase("elastic.out".to_string()))
        );
        assert!(matches!("power4.in".parse::<Ease>(), Err(AnimationError::UnknownEase(_))));
        assert!(matches!("power5".parse::<Ease>(), Err(AnimationError::UnknownEase(_))));
    }

    #[test]
    fn power_out_decelerates() {
        let ease = Ease::PowerOut(4);
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
        assert!((ease.apply(0.5) - (1.0 - 0.5f64.powi(5))).abs() < 1e-12);
        assert!(ease.apply(0.25) > 0.25);
        assert_eq!(ease.apply(1.7), 1.0);
        assert_eq!(Ease::Linear.apply(0.3), 0.3);
    }
}
