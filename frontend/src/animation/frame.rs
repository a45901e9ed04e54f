/// Animatable visual state of one element.
///
/// `y` is a vertical offset in pixels, positive values push the element down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub opacity: f64,
    pub y: f64,
    pub scale: f64,
}

impl Frame {
    pub const VISIBLE: Frame = Frame { opacity: 1.0, y: 0.0, scale: 1.0 };

    pub const fn hidden(y: f64) -> Self {
        Frame { opacity: 0.0, y, scale: 1.0 }
    }

    pub const fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub const fn with_y(mut self, y: f64) -> Self {
        self.y = y;
        self
    }

    pub fn lerp(&self, to: &Frame, t: f64) -> Frame {
        Frame {
            opacity: self.opacity + (to.opacity - self.opacity) * t,
            y: self.y + (to.y - self.y) * t,
            scale: self.scale + (to.scale - self.scale) * t,
        }
    }

    /// Inline `style` declarations for this frame.
    pub fn style(&self) -> String {
        format!(
            "opacity: {}; transform: translateY({}px) scale({});",
            round(self.opacity),
            round(self.y),
            round(self.scale)
        )
    }
}

impl Default for Frame {
    fn default() -> Self {
        Frame::VISIBLE
    }
}

// Keeps inline styles short and stable between renders.
fn round(v: f64) -> f64 {
    let r = (v * 1000.0).round() / 1000.0;
    if r == 0.0 { 0.0 } else { r }
}
