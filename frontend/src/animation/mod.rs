//! Scroll-triggered and mount-time animation for the landing sections.
//!
//! Everything except `binding` and `motion` is plain state with no browser
//! access, so it can be driven from tests as well as from window callbacks.

pub mod binding;
pub mod driver;
pub mod ease;
pub mod frame;
pub mod motion;
pub mod timeline;
pub mod trigger;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnimationError {
    #[error("unknown ease `{0}`")]
    UnknownEase(String),

    #[error("unknown edge keyword `{0}`")]
    UnknownEdge(String),

    #[error("malformed offset `{0}`")]
    MalformedOffset(String),

    #[error("trigger position `{0}` needs an element edge and a viewport edge")]
    MalformedPosition(String),

    #[error("unknown toggle action `{0}`")]
    UnknownToggleAction(String),

    #[error("expected 4 toggle actions, got {0}")]
    ToggleActionCount(usize),
}
