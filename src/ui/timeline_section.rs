use eframe::egui::{self, Button, Sense, Ui};
use tracing::debug;

use super::common::{paint_picture, pointer_phases, section_frame, PointerPhase, UiColors};
use crate::persistence::SiteConfig;
use crate::widgets::{ActivismTimeline, WidgetError};

/// Activism timeline: draggable strip plus hoverable year chips
pub struct TimelineSection {
    timeline: ActivismTimeline,
}

impl TimelineSection {
    pub fn mount(config: &SiteConfig) -> Result<Self, WidgetError> {
        let timeline = ActivismTimeline::mount(
            config.content.timeline.clone(),
            config.navigation.threshold(),
            config.navigation.timeline_initial_index,
        )?;
        Ok(Self { timeline })
    }

    pub fn render(&mut self, ui: &mut Ui) {
        let width = ui.available_width();
        ui.heading("Our campaigns");

        // Year chips, hover selects unless a drag is running
        let mut hovered = None;
        ui.horizontal_wrapped(|ui| {
            for (i, entry) in self.timeline.entries().iter().enumerate() {
                let chip = Button::new(entry.year.to_string()).selected(i == self.timeline.index());
                if ui.add(chip).hovered() {
                    hovered = Some(i);
                }
            }
        });
        if let Some(i) = hovered {
            if let Some(change) = self.timeline.hover_entry(i) {
                debug!("Timeline hover selected {}", change.current);
            }
        }

        let (_, response) =
            ui.allocate_exact_size(egui::vec2(width, 220.0), Sense::click_and_drag());
        for phase in pointer_phases(&response) {
            match phase {
                PointerPhase::Down(x) => self.timeline.pointer_down(x),
                PointerPhase::Move(x) => {
                    if let Some(change) = self.timeline.pointer_move(x) {
                        debug!("Timeline dragged to {}", change.current);
                    }
                }
                PointerPhase::Up => self.timeline.pointer_up(),
            }
        }

        let entry = self.timeline.current();
        paint_picture(
            ui,
            &response,
            &format!("{} · {}", entry.year, entry.title),
            "drag to move through the years",
            self.timeline.index(),
        );

        section_frame(ui).show(ui, |ui| {
            ui.set_min_width(width - 20.0);
            ui.colored_label(UiColors::SAND, entry.title.as_str());
            ui.label(entry.summary.as_str());
        });
    }
}
