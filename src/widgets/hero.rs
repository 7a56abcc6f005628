use std::fmt;
use tokio::sync::mpsc;
use tokio::time::Duration;
use tracing::{debug, info, warn};

use super::WidgetError;
use crate::navigation::{
    AutoAdvanceTimer, ChangeCause, IndexChange, NavigationMode, Running, SequenceCursor,
};
use crate::persistence::HeroSlide;

const TICK_BUFFER: usize = 100;

/// Full-width slideshow that advances on a fixed period.
///
/// Ticks are produced on the timer task and applied to the cursor by
/// [`HeroSlideshow::poll`] on the owning thread, so the cursor itself is
/// never shared. The slideshow has no drag input and no pause; it keeps
/// cycling while dialogs are open over it.
pub struct HeroSlideshow {
    slides: Vec<HeroSlide>,
    cursor: SequenceCursor,
    timer: AutoAdvanceTimer<Running>,
    tick_receiver: mpsc::Receiver<u64>,
}

impl fmt::Debug for HeroSlideshow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeroSlideshow")
            .field("slides", &self.slides.len())
            .field("cursor", &self.cursor)
            .field("period", &self.timer.period())
            .finish()
    }
}

impl HeroSlideshow {
    /// Mounts the slideshow at slide 0 and starts its timer
    pub fn mount(slides: Vec<HeroSlide>, period: Duration) -> Result<Self, WidgetError> {
        let cursor = SequenceCursor::new(slides.len(), NavigationMode::Wrap)?;

        let (tick_sender, tick_receiver) = mpsc::channel(TICK_BUFFER);
        let timer = AutoAdvanceTimer::create(period)?.start(move |tick| {
            if let Err(e) = tick_sender.try_send(tick) {
                warn!("Dropping hero tick {}: {}", tick, e);
            }
        })?;

        info!(
            "Hero slideshow mounted with {} slides, advancing every {:?}",
            slides.len(),
            period
        );
        Ok(Self {
            slides,
            cursor,
            timer,
            tick_receiver,
        })
    }

    /// Applies every tick received since the last poll, one wrap-advance each
    pub fn poll(&mut self) -> Vec<IndexChange> {
        let mut changes = Vec::new();
        while let Ok(tick) = self.tick_receiver.try_recv() {
            debug!("Applying hero tick {}", tick);
            if let Some(change) = self.cursor.advance(ChangeCause::Tick) {
                changes.push(change);
            }
        }
        changes
    }

    pub fn index(&self) -> usize {
        self.cursor.index()
    }

    pub fn count(&self) -> usize {
        self.cursor.count()
    }

    pub fn period(&self) -> Duration {
        self.timer.period()
    }

    pub fn current(&self) -> &HeroSlide {
        &self.slides[self.cursor.index()]
    }

    pub fn slides(&self) -> &[HeroSlide] {
        &self.slides
    }

    /// Stops the timer and discards the cursor.
    ///
    /// Dropping the slideshow has the same effect; this form just logs it.
    pub fn unmount(self) {
        let idle = self.timer.stop();
        info!(
            "Hero slideshow unmounted at slide {} (timer cancelled: {})",
            self.cursor.index(),
            idle.is_cancelled()
        );
    }
}
