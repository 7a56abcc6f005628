use eframe::egui::{self, Align, Button, Sense, Ui};
use tracing::debug;

use super::common::{input_source, paint_picture, pointer_phases, PointerPhase};
use crate::navigation::GestureSample;
use crate::persistence::SiteConfig;
use crate::widgets::{PhotoGallery, WidgetError};

/// Swipeable photo gallery with a zoom window
pub struct GallerySection {
    gallery: PhotoGallery,
    // Thumbnail last scrolled into view
    active_thumbnail: Option<usize>,
}

impl GallerySection {
    pub fn mount(config: &SiteConfig) -> Result<Self, WidgetError> {
        let gallery =
            PhotoGallery::mount(config.content.gallery.clone(), config.navigation.threshold())?;
        Ok(Self {
            gallery,
            active_thumbnail: None,
        })
    }

    pub fn render(&mut self, ui: &mut Ui) {
        let width = ui.available_width();
        let source = input_source(ui);

        ui.horizontal(|ui| {
            ui.heading("Gallery");
            ui.label(format!(
                "{} / {}",
                self.gallery.index() + 1,
                self.gallery.count()
            ));
        });

        let (_, response) =
            ui.allocate_exact_size(egui::vec2(width, 360.0), Sense::click_and_drag());

        for phase in pointer_phases(&response) {
            match phase {
                PointerPhase::Down(x) => self.gallery.touch_start(&GestureSample::new(x, source)),
                PointerPhase::Move(x) => {
                    if let Some(change) = self.gallery.touch_move(&GestureSample::new(x, source)) {
                        debug!("Swiped to photo {}", change.current);
                    }
                }
                PointerPhase::Up => self.gallery.touch_end(),
            }
        }
        if response.clicked() {
            self.gallery.open_zoom(self.gallery.index());
        }

        let photo = self.gallery.current();
        paint_picture(ui, &response, &photo.caption, &photo.image, self.gallery.index());

        ui.horizontal(|ui| {
            if ui.button("◀ Previous").clicked() {
                self.gallery.previous();
            }
            if ui.button("Next ▶").clicked() {
                self.gallery.next();
            }
            if ui.button("Zoom").clicked() {
                self.gallery.open_zoom(self.gallery.index());
            }
        });

        self.render_thumbnails(ui);
        self.render_zoom(ui.ctx());
    }

    fn render_thumbnails(&mut self, ui: &mut Ui) {
        let active = self.gallery.index();
        let mut clicked = None;

        egui::ScrollArea::horizontal()
            .id_salt("gallery_thumbnails")
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    for i in 0..self.gallery.count() {
                        let thumb = ui.add(Button::new((i + 1).to_string()).selected(i == active));
                        if thumb.clicked() {
                            clicked = Some(i);
                        }
                        if i == active && self.active_thumbnail != Some(active) {
                            thumb.scroll_to_me(Some(Align::Center));
                        }
                    }
                });
            });
        self.active_thumbnail = Some(active);

        if let Some(i) = clicked {
            if let Some(change) = self.gallery.select(i) {
                debug!("Thumbnail selected photo {}", change.current);
            }
        }
    }

    fn render_zoom(&mut self, ctx: &egui::Context) {
        if !self.gallery.is_zoomed() {
            return;
        }

        let mut open = true;
        egui::Window::new("Photo")
            .open(&mut open)
            .collapsible(false)
            .resizable(true)
            .default_size(egui::vec2(720.0, 520.0))
            .show(ctx, |ui| {
                let (_, response) =
                    ui.allocate_exact_size(egui::vec2(ui.available_width(), 440.0), Sense::hover());
                let photo = self.gallery.current();
                paint_picture(ui, &response, &photo.caption, &photo.image, self.gallery.index());

                ui.horizontal(|ui| {
                    if ui.button("◀").clicked() {
                        self.gallery.zoom_previous();
                    }
                    if ui.button("▶").clicked() {
                        self.gallery.zoom_next();
                    }
                    if ui.button("Close").clicked() {
                        self.gallery.close_zoom();
                    }
                });
            });

        if !open {
            self.gallery.close_zoom();
        }
    }
}
