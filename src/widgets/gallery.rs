use tracing::{debug, info};

use super::WidgetError;
use crate::navigation::{
    Direction, DragNavigator, GestureSample, IndexChange, InputSource, NavigationMode,
    SequenceCursor, ThresholdConfig,
};
use crate::persistence::GalleryPhoto;

/// Photo gallery with prev/next buttons, touch swipe and a zoomed view.
///
/// Every path wraps around at both ends. Swipes only react to touch input;
/// mouse and pen drags are left to the presentation layer (text selection,
/// scrolling) and never move the gallery.
#[derive(Debug)]
pub struct PhotoGallery {
    photos: Vec<GalleryPhoto>,
    navigator: DragNavigator,
    zoomed: bool,
}

impl PhotoGallery {
    pub fn mount(photos: Vec<GalleryPhoto>, threshold: ThresholdConfig) -> Result<Self, WidgetError> {
        let cursor = SequenceCursor::new(photos.len(), NavigationMode::Wrap)?;
        info!("Photo gallery mounted with {} photos", photos.len());
        Ok(Self {
            photos,
            navigator: DragNavigator::new(cursor, threshold),
            zoomed: false,
        })
    }

    pub fn next(&mut self) -> Option<IndexChange> {
        self.navigator.navigate(Direction::Advance)
    }

    pub fn previous(&mut self) -> Option<IndexChange> {
        self.navigator.navigate(Direction::Retreat)
    }

    /// Thumbnail click: jumps straight to `index` unless a swipe is running
    pub fn select(&mut self, index: usize) -> Option<IndexChange> {
        self.navigator.select_direct(index)
    }

    pub fn touch_start(&mut self, sample: &GestureSample) {
        if sample.source != InputSource::Touch {
            debug!("Gallery ignores {:?} drag start", sample.source);
            return;
        }
        self.navigator.start(sample.position_x);
    }

    pub fn touch_move(&mut self, sample: &GestureSample) -> Option<IndexChange> {
        if sample.source != InputSource::Touch {
            return None;
        }
        self.navigator.sample(sample)
    }

    pub fn touch_end(&mut self) {
        self.navigator.end();
    }

    /// Opens the zoomed view on `index`; out-of-range indices are ignored
    pub fn open_zoom(&mut self, index: usize) -> Option<IndexChange> {
        if index >= self.photos.len() {
            debug!("Ignoring zoom request for photo {}", index);
            return None;
        }
        let change = self.navigator.select_direct(index);
        self.zoomed = self.navigator.index() == index;
        change
    }

    pub fn close_zoom(&mut self) {
        self.zoomed = false;
    }

    pub fn is_zoomed(&self) -> bool {
        self.zoomed
    }

    pub fn zoom_next(&mut self) -> Option<IndexChange> {
        if !self.zoomed {
            return None;
        }
        self.next()
    }

    pub fn zoom_previous(&mut self) -> Option<IndexChange> {
        if !self.zoomed {
            return None;
        }
        self.previous()
    }

    pub fn index(&self) -> usize {
        self.navigator.index()
    }

    pub fn count(&self) -> usize {
        self.navigator.count()
    }

    pub fn is_swiping(&self) -> bool {
        self.navigator.is_dragging()
    }

    pub fn current(&self) -> &GalleryPhoto {
        &self.photos[self.navigator.index()]
    }

    pub fn photos(&self) -> &[GalleryPhoto] {
        &self.photos
    }
}
