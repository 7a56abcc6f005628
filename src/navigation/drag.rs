//! Drag gesture recognizer
//!
//! Turns a stream of horizontal pointer/touch samples into discrete
//! advance/retreat commits on an owned [`SequenceCursor`].
//!
//! ```text
//! start(x) ──► move(x) ──► move(x) ──► end()
//!              │            │
//!              └─ |startX - x| > threshold ─► commit ±1, startX = x
//! ```
//!
//! Every commit re-arms the session at the current position, so one long
//! drag walks across several items instead of stopping after the first.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

use super::sequence::{ChangeCause, Direction, IndexChange, NavigationMode, SequenceCursor};

/// Minimum net horizontal displacement needed before a drag commits
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdConfig {
    pub pixels: f32,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self { pixels: 50.0 }
    }
}

// Where a sample came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputSource {
    #[default]
    Mouse,
    Touch,
    Pen,
}

/// One observed horizontal coordinate of a pointer or touch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    pub position_x: f32,
    pub source: InputSource,
    pub timestamp: DateTime<Local>,
}

impl GestureSample {
    pub fn new(position_x: f32, source: InputSource) -> Self {
        Self {
            position_x,
            source,
            timestamp: Local::now(),
        }
    }
}

/// The single drag slot of a widget.
///
/// A later `start` overwrites an earlier one; concurrent drags on the same
/// widget are not tracked separately.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragSession {
    pub start_x: f32,
    pub active: bool,
}

type IndexListener = Box<dyn FnMut(&IndexChange) + Send>;

/// Drag-to-navigate controller owning its cursor and drag session.
///
/// None of the operations fail: calls that arrive out of order (a `move`
/// without a `start`, an out-of-range direct selection) are dropped, since
/// native event delivery order cannot be fully controlled by callers.
pub struct DragNavigator {
    cursor: SequenceCursor,
    threshold: ThresholdConfig,
    session: DragSession,
    listener: Option<IndexListener>,
}

impl fmt::Debug for DragNavigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragNavigator")
            .field("cursor", &self.cursor)
            .field("threshold", &self.threshold)
            .field("session", &self.session)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}

impl DragNavigator {
    pub fn new(cursor: SequenceCursor, threshold: ThresholdConfig) -> Self {
        debug!(
            "Creating DragNavigator over {} items ({:?}, threshold {}px)",
            cursor.count(),
            cursor.mode(),
            threshold.pixels
        );
        Self {
            cursor,
            threshold,
            session: DragSession::default(),
            listener: None,
        }
    }

    /// Registers the `onIndexChange` callback, replacing any previous one
    pub fn on_index_change<F>(&mut self, listener: F)
    where
        F: FnMut(&IndexChange) + Send + 'static,
    {
        self.listener = Some(Box::new(listener));
    }

    pub fn index(&self) -> usize {
        self.cursor.index()
    }

    pub fn count(&self) -> usize {
        self.cursor.count()
    }

    pub fn mode(&self) -> NavigationMode {
        self.cursor.mode()
    }

    pub fn threshold(&self) -> ThresholdConfig {
        self.threshold
    }

    pub fn session(&self) -> DragSession {
        self.session
    }

    /// True while a drag session is active; hover selection is suppressed then
    pub fn is_dragging(&self) -> bool {
        self.session.active
    }

    pub fn start(&mut self, position_x: f32) {
        if self.session.active {
            debug!(
                "Drag restarted at {} while a session from {} was still active",
                position_x, self.session.start_x
            );
        } else {
            debug!("Drag started at {}", position_x);
        }
        self.session = DragSession {
            start_x: position_x,
            active: true,
        };
    }

    pub fn move_to(&mut self, position_x: f32) -> Option<IndexChange> {
        if !self.session.active {
            warn!("Ignoring drag move to {} without an active session", position_x);
            return None;
        }

        let diff = self.session.start_x - position_x;
        if diff.abs() <= self.threshold.pixels {
            return None;
        }

        // Pointer travelled left of the start point -> next item
        let direction = if diff > 0.0 {
            Direction::Advance
        } else {
            Direction::Retreat
        };

        // Every threshold crossing re-arms, even when Clamp drops the step
        self.session.start_x = position_x;
        let change = self
            .cursor
            .step(direction.delta(), ChangeCause::Drag(direction))?;
        debug!(
            "Drag committed {:?} to index {}, re-armed at {}",
            direction, change.current, position_x
        );
        self.emit(change)
    }

    pub fn sample(&mut self, sample: &GestureSample) -> Option<IndexChange> {
        self.move_to(sample.position_x)
    }

    pub fn end(&mut self) {
        if self.session.active {
            debug!("Drag ended, last anchor {}", self.session.start_x);
        }
        self.session.active = false;
    }

    /// Direct hover/chip selection, only honoured while no drag is running
    pub fn select_direct(&mut self, index: usize) -> Option<IndexChange> {
        if self.session.active {
            debug!("Ignoring direct selection of {} during an active drag", index);
            return None;
        }
        let change = self.cursor.select(index)?;
        self.emit(change)
    }

    /// One-step navigation from buttons, independent of any drag session
    pub fn navigate(&mut self, direction: Direction) -> Option<IndexChange> {
        let change = self
            .cursor
            .step(direction.delta(), ChangeCause::Button(direction))?;
        self.emit(change)
    }

    fn emit(&mut self, change: IndexChange) -> Option<IndexChange> {
        if let Some(listener) = self.listener.as_mut() {
            listener(&change);
        }
        Some(change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn navigator(count: usize, mode: NavigationMode) -> DragNavigator {
        DragNavigator::new(
            SequenceCursor::new(count, mode).unwrap(),
            ThresholdConfig::default(),
        )
    }

    #[test]
    fn small_moves_do_not_commit() {
        let mut nav = navigator(5, NavigationMode::Wrap);
        nav.start(200.0);
        assert_eq!(nav.move_to(160.0), None);
        assert_eq!(nav.move_to(250.0), None);
        assert_eq!(nav.index(), 0);
    }

    #[test]
    fn dragging_right_retreats() {
        let mut nav = navigator(5, NavigationMode::Wrap);
        nav.start(100.0);
        let change = nav.move_to(160.0).unwrap();
        assert_eq!(change.cause, ChangeCause::Drag(Direction::Retreat));
        assert_eq!(nav.index(), 4);
    }

    #[test]
    fn restart_overwrites_the_anchor() {
        let mut nav = navigator(5, NavigationMode::Wrap);
        nav.start(100.0);
        nav.start(300.0);
        assert_eq!(nav.session().start_x, 300.0);
        assert_eq!(nav.move_to(260.0), None);
    }

    #[test]
    fn end_keeps_anchor_but_deactivates() {
        let mut nav = navigator(5, NavigationMode::Wrap);
        nav.start(120.0);
        nav.end();
        assert_eq!(
            nav.session(),
            DragSession {
                start_x: 120.0,
                active: false
            }
        );
        assert_eq!(nav.move_to(0.0), None);
    }

    #[test]
    fn clamp_boundary_drop_still_rearms() {
        let mut nav = navigator(3, NavigationMode::Clamp);
        nav.start(100.0);
        assert_eq!(nav.move_to(200.0), None);
        assert_eq!(nav.session().start_x, 200.0);
        assert_eq!(nav.index(), 0);
    }

    #[test]
    fn reversing_after_dropped_step_measures_from_new_anchor() {
        let mut nav = DragNavigator::new(
            SequenceCursor::with_initial(17, NavigationMode::Clamp, 16).unwrap(),
            ThresholdConfig::default(),
        );
        nav.start(500.0);
        assert_eq!(nav.move_to(400.0), None);
        assert_eq!(nav.session().start_x, 400.0);

        let change = nav.move_to(460.0).unwrap();
        assert_eq!((change.previous, change.current), (16, 15));
    }

    #[test]
    fn listener_sees_every_commit() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();

        let mut nav = navigator(4, NavigationMode::Wrap);
        nav.on_index_change(move |change| sink.lock().unwrap().push(change.current));

        nav.navigate(Direction::Advance);
        nav.start(300.0);
        nav.move_to(240.0);
        nav.end();
        nav.select_direct(0);

        assert_eq!(*seen.lock().unwrap(), vec![1, 2, 0]);
    }

    #[test]
    fn sample_uses_the_horizontal_coordinate() {
        let mut nav = navigator(4, NavigationMode::Wrap);
        nav.start(100.0);
        let sample = GestureSample::new(20.0, InputSource::Touch);
        assert_eq!(nav.sample(&sample).map(|c| c.current), Some(1));
    }
}
