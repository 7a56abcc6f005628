use tracing::info;

use super::WidgetError;
use crate::navigation::{
    DragNavigator, IndexChange, NavigationMode, SequenceCursor, ThresholdConfig,
};
use crate::persistence::TimelineEntry;

/// Year-by-year activism timeline.
///
/// Navigation never wraps: dragging past the first or last year is dropped.
/// Hovering a year chip selects it directly unless a drag is in progress.
#[derive(Debug)]
pub struct ActivismTimeline {
    entries: Vec<TimelineEntry>,
    navigator: DragNavigator,
}

impl ActivismTimeline {
    pub fn mount(
        entries: Vec<TimelineEntry>,
        threshold: ThresholdConfig,
        initial_index: usize,
    ) -> Result<Self, WidgetError> {
        let cursor =
            SequenceCursor::with_initial(entries.len(), NavigationMode::Clamp, initial_index)?;
        info!(
            "Timeline mounted with {} entries at index {}",
            entries.len(),
            initial_index
        );
        Ok(Self {
            entries,
            navigator: DragNavigator::new(cursor, threshold),
        })
    }

    pub fn pointer_down(&mut self, position_x: f32) {
        self.navigator.start(position_x);
    }

    pub fn pointer_move(&mut self, position_x: f32) -> Option<IndexChange> {
        self.navigator.move_to(position_x)
    }

    pub fn pointer_up(&mut self) {
        self.navigator.end();
    }

    pub fn hover_entry(&mut self, index: usize) -> Option<IndexChange> {
        self.navigator.select_direct(index)
    }

    pub fn is_dragging(&self) -> bool {
        self.navigator.is_dragging()
    }

    pub fn index(&self) -> usize {
        self.navigator.index()
    }

    pub fn count(&self) -> usize {
        self.navigator.count()
    }

    pub fn current(&self) -> &TimelineEntry {
        &self.entries[self.navigator.index()]
    }

    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(count: usize) -> Vec<TimelineEntry> {
        (0..count)
            .map(|i| TimelineEntry {
                year: 2008 + i as u16,
                title: format!("Event {i}"),
                summary: String::new(),
            })
            .collect()
    }

    #[test]
    fn starts_at_caller_supplied_entry() {
        let timeline = ActivismTimeline::mount(entries(17), ThresholdConfig::default(), 5).unwrap();
        assert_eq!(timeline.index(), 5);
        assert_eq!(timeline.current().year, 2013);
    }

    #[test]
    fn initial_entry_out_of_range_is_rejected() {
        assert!(matches!(
            ActivismTimeline::mount(entries(3), ThresholdConfig::default(), 3),
            Err(WidgetError::Sequence(_))
        ));
    }

    #[test]
    fn hover_is_suppressed_while_dragging() {
        let mut timeline =
            ActivismTimeline::mount(entries(17), ThresholdConfig::default(), 0).unwrap();

        timeline.pointer_down(300.0);
        assert_eq!(timeline.hover_entry(8), None);
        assert_eq!(timeline.index(), 0);

        timeline.pointer_up();
        assert_eq!(timeline.hover_entry(8).map(|c| c.current), Some(8));
    }

    #[test]
    fn dragging_past_the_last_year_holds() {
        let mut timeline =
            ActivismTimeline::mount(entries(2), ThresholdConfig::default(), 0).unwrap();

        timeline.pointer_down(300.0);
        assert!(timeline.pointer_move(240.0).is_some());
        assert_eq!(timeline.pointer_move(180.0), None);
        assert_eq!(timeline.index(), 1);
        timeline.pointer_up();
    }
}
