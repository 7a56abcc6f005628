//! # UI Common Components and Utilities
//!
//! Shared pieces of the desktop shell: the section state machine, the color
//! palette, and the input-layer mapping that turns egui pointer responses
//! into the horizontal samples the navigation widgets consume.
//!
//! ## Input Mapping
//! egui reports drags per widget [`Response`]. [`pointer_phases`] reduces a
//! response to down/move/up phases carrying only the pointer's x coordinate,
//! and [`input_source`] tells touch apart from mouse input so the gallery can
//! restrict swiping to touch screens.

use eframe::egui::{self, Align2, Color32, CornerRadius, FontId, Frame, Response, Stroke, Ui};

use crate::navigation::InputSource;

/// Page section currently shown in the central panel.
///
/// Switching sections unmounts the previous section's widgets, which stops
/// their timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Hero slideshow and campaign narrative
    Home,
    /// Photo gallery with swipe and zoom
    Gallery,
    /// Activism timeline
    Timeline,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Home, Section::Gallery, Section::Timeline];

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Gallery => "Gallery",
            Section::Timeline => "Timeline",
        }
    }
}

/// Coastal palette used across all sections.
pub struct UiColors;

impl UiColors {
    /// Deep sea background for image placeholders
    pub const SEA: Color32 = Color32::from_rgb(18, 52, 71);

    /// Lighter water tone for inactive indicators
    pub const SHALLOWS: Color32 = Color32::from_rgb(60, 120, 140);

    /// Sand accent for active indicators and chips
    pub const SAND: Color32 = Color32::from_rgb(222, 196, 140);

    pub const BORDER: Color32 = Color32::from_rgb(60, 60, 60);

    /// Successful booking status (green)
    pub const ACTIVE: Color32 = Color32::from_rgb(50, 200, 20);

    /// Failed booking status (red)
    pub const INACTIVE: Color32 = Color32::from_rgb(200, 50, 20);
}

/// One step of a pointer drag over a widget
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerPhase {
    Down(f32),
    Move(f32),
    Up,
}

/// Reduces a drag-sensing response to the phases seen this frame
pub fn pointer_phases(response: &Response) -> Vec<PointerPhase> {
    let mut phases = Vec::new();
    let x = response.interact_pointer_pos().map(|pos| pos.x);

    if response.drag_started() {
        if let Some(x) = x {
            phases.push(PointerPhase::Down(x));
        }
    } else if response.dragged() {
        if let Some(x) = x {
            phases.push(PointerPhase::Move(x));
        }
    }
    if response.drag_stopped() {
        phases.push(PointerPhase::Up);
    }
    phases
}

pub fn input_source(ui: &Ui) -> InputSource {
    if ui.input(|i| i.any_touches()) {
        InputSource::Touch
    } else {
        InputSource::Mouse
    }
}

/// Paints an image placeholder with its caption and file name
pub fn paint_picture(ui: &Ui, response: &Response, caption: &str, image: &str, tint: usize) {
    let painter = ui.painter();
    let shade = (tint % 6) as u8 * 12;
    let fill = Color32::from_rgb(
        UiColors::SEA.r() + shade,
        UiColors::SEA.g() + shade,
        UiColors::SEA.b() + shade,
    );
    painter.rect_filled(response.rect, CornerRadius::same(4), fill);
    painter.text(
        response.rect.center(),
        Align2::CENTER_CENTER,
        caption,
        FontId::proportional(24.0),
        Color32::WHITE,
    );
    painter.text(
        response.rect.center_bottom() - egui::vec2(0.0, 16.0),
        Align2::CENTER_BOTTOM,
        image,
        FontId::monospace(12.0),
        UiColors::SAND,
    );
}

/// Row of position dots under a carousel
pub fn position_dots(ui: &mut Ui, index: usize, count: usize) {
    ui.horizontal(|ui| {
        for i in 0..count {
            let color = if i == index {
                UiColors::SAND
            } else {
                UiColors::SHALLOWS
            };
            ui.colored_label(color, "●");
        }
    });
}

pub fn section_frame(ui: &Ui) -> Frame {
    Frame::new()
        .stroke(Stroke::new(1.0, UiColors::BORDER))
        .fill(ui.visuals().extreme_bg_color)
        .corner_radius(2)
        .inner_margin(6)
}
