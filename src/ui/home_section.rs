use eframe::egui::{self, Align2, Color32, FontId, Sense, Stroke, Ui};
use tokio::time::Duration;
use tracing::debug;

use super::common::{paint_picture, position_dots, section_frame, UiColors};
use crate::persistence::SiteConfig;
use crate::widgets::{HeroSlideshow, ProfileAnimation, ProfileParams, WidgetError};

/// Hero slideshow plus the campaign narrative
pub struct HomeSection {
    hero: HeroSlideshow,
    campaign: Vec<String>,
    portrait: ProfileAnimation,
}

impl HomeSection {
    pub fn mount(config: &SiteConfig) -> Result<Self, WidgetError> {
        let hero = HeroSlideshow::mount(
            config.content.hero.clone(),
            Duration::from_millis(config.navigation.auto_advance_ms),
        )?;
        Ok(Self {
            hero,
            campaign: config.content.campaign.clone(),
            portrait: ProfileAnimation::new(),
        })
    }

    pub fn unmount(self) {
        self.hero.unmount();
    }

    pub fn render(&mut self, ui: &mut Ui) {
        for change in self.hero.poll() {
            debug!("Hero now showing slide {}", change.current);
        }

        let width = ui.available_width();
        let (_, response) = ui.allocate_exact_size(egui::vec2(width, 320.0), Sense::hover());
        let slide = self.hero.current();
        paint_picture(ui, &response, &slide.caption, &slide.image, self.hero.index());

        ui.vertical_centered(|ui| {
            position_dots(ui, self.hero.index(), self.hero.count());
        });

        ui.add_space(8.0);
        section_frame(ui).show(ui, |ui| {
            ui.set_min_width(width - 20.0);
            ui.horizontal(|ui| {
                self.render_portrait(ui);
                ui.heading("Protecting the coast, one walk at a time");
            });
            for paragraph in &self.campaign {
                ui.label(paragraph);
                ui.add_space(4.0);
            }
        });
    }

    fn render_portrait(&mut self, ui: &mut Ui) {
        let (rect, response) = ui.allocate_exact_size(egui::vec2(120.0, 120.0), Sense::hover());
        let time = ui.input(|i| i.time);
        let params = self.portrait.update(response.hovered(), time);
        paint_portrait(ui, rect, &params);
    }
}

fn paint_portrait(ui: &Ui, rect: egui::Rect, params: &ProfileParams) {
    let painter = ui.painter();
    let center = rect.center();
    let radius = rect.width() / 2.0 - 8.0;

    let shadow = Color32::from_black_alpha((params.shadow_opacity * 255.0) as u8);
    painter.circle_filled(center, radius + params.shadow_intensity / 6.0, shadow);

    let shade = (40.0 * params.image_contrast) as u8;
    let face = Color32::from_rgb(
        UiColors::SHALLOWS.r().saturating_add(shade),
        UiColors::SHALLOWS.g(),
        UiColors::SHALLOWS.b(),
    );
    painter.circle_filled(center, radius * params.image_scale.min(1.2) * 0.92, face);
    painter.circle_filled(
        center,
        radius,
        Color32::from_black_alpha((params.overlay_opacity * 255.0) as u8),
    );
    painter.circle_stroke(
        center,
        radius * params.border_scale,
        Stroke::new(4.0, params.border_color()),
    );
    painter.text(
        center + egui::vec2(params.image_rotate, 0.0),
        Align2::CENTER_CENTER,
        "Your guide",
        FontId::proportional(14.0),
        Color32::WHITE,
    );
}
