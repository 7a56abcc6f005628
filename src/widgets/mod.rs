//! Page widgets built on the navigation controller
//!
//! Each widget pairs a static content list with its own cursor, drag
//! session and (for the hero) auto-advance timer. Construction is the mount
//! step and dropping the widget is the unmount step, so no widget can outlive
//! its timer or leak ticks into a later instance.
//!
//! | Widget | Mode | Driven by |
//! |---|---|---|
//! | [`HeroSlideshow`] | Wrap | auto-advance timer |
//! | [`PhotoGallery`] | Wrap | prev/next buttons, thumbnails, touch swipe, zoom view |
//! | [`ActivismTimeline`] | Clamp | pointer drag, hover on year chips |
//!
//! [`ProfileAnimation`] has no cursor; it animates the guide portrait only
//! while the pointer hovers it.

pub mod gallery;
pub mod hero;
pub mod profile;
pub mod timeline;

use crate::navigation::{SequenceError, TimerError};

pub use gallery::PhotoGallery;
pub use hero::HeroSlideshow;
pub use profile::{ProfileAnimation, ProfileParams};
pub use timeline::ActivismTimeline;

// Widget errors
#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    #[error("Invalid widget content: {0}")]
    Sequence(#[from] SequenceError),

    #[error("Auto-advance error: {0}")]
    Timer(#[from] TimerError),
}
