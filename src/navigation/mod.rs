//! Navigation controller shared by every carousel-like widget
//!
//! Three layers, each owned per widget instance:
//!
//! 1. [`sequence`] - bounded index with Wrap or Clamp transition policy
//! 2. [`drag`] - pointer/touch drag recognizer committing ±1 steps
//! 3. [`timer`] - fixed-period auto-advance bound to widget lifetime
//!
//! # Architecture
//!
//! ```text
//! Input layer ──► DragNavigator ──► SequenceCursor ──► IndexChange ──► Presentation
//!                                        ▲
//! AutoAdvanceTimer ──(tick)──────────────┘
//! ```
//!
//! Nothing here knows about images, layout or DOM-like concerns; the
//! presentation layer hands in an item count and receives indices back.

pub mod drag;
pub mod sequence;
pub mod timer;

pub use drag::{DragNavigator, DragSession, GestureSample, InputSource, ThresholdConfig};
pub use sequence::{
    ChangeCause, Direction, IndexChange, NavigationMode, SequenceCursor, SequenceError,
};
pub use timer::{AutoAdvanceTimer, Idle, Running, TimerError};
