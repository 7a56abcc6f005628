//! # Tidewalk Desktop Shell
//!
//! An eframe/egui rendition of the single-page site: hero slideshow and
//! campaign narrative, photo gallery, activism timeline and the booking
//! dialog. It is the presentation and input layer around the navigation
//! widgets and contains no navigation logic of its own.
//!
//! ## Layout
//! The shell keeps a three-panel layout:
//! - **Top Panel**: section buttons and the "Book a walk" button
//! - **Central Panel**: the mounted section
//! - **Bottom Panel**: status of the last booking inquiry
//!
//! ## Mount Lifecycle
//! Only the visible section is mounted. Switching sections unmounts the old
//! one (stopping the hero timer) and mounts the new one from the site config,
//! so a section always starts fresh the way a re-rendered page section does.
//!
//! ## Frame Rate
//! Repaints are requested every `1000 / fps` ms so timer-driven slides show
//! up without user input.

pub mod booking_dialog;
pub mod common;
pub mod gallery_section;
pub mod home_section;
pub mod timeline_section;

use eframe::egui::{self, Button, Vec2};
use std::time::Duration;
use tracing::{error, info};

use crate::booking::BookingHandle;
use crate::persistence::SiteConfig;
use crate::widgets::WidgetError;

use self::booking_dialog::BookingDialog;
use self::common::{Section, UiColors};
use self::gallery_section::GallerySection;
use self::home_section::HomeSection;
use self::timeline_section::TimelineSection;

// The section currently owning widgets
enum MountedSection {
    Home(HomeSection),
    Gallery(GallerySection),
    Timeline(TimelineSection),
    Failed(String),
}

impl MountedSection {
    fn mount(section: Section, config: &SiteConfig) -> Self {
        let mounted: Result<Self, WidgetError> = match section {
            Section::Home => HomeSection::mount(config).map(MountedSection::Home),
            Section::Gallery => GallerySection::mount(config).map(MountedSection::Gallery),
            Section::Timeline => TimelineSection::mount(config).map(MountedSection::Timeline),
        };

        mounted.unwrap_or_else(|e| {
            error!("Failed to mount {:?}: {}", section, e);
            MountedSection::Failed(e.to_string())
        })
    }

    fn unmount(self) {
        if let MountedSection::Home(home) = self {
            home.unmount();
        }
    }
}

/// Root eframe application
pub struct SiteUI {
    config: SiteConfig,
    section: Section,
    mounted: Option<MountedSection>,
    booking: BookingDialog,
}

impl SiteUI {
    pub fn new(cc: &eframe::CreationContext<'_>, config: SiteConfig, booking: BookingHandle) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        let dialog = BookingDialog::new(
            booking,
            config.content.hikes.clone(),
            config.content.tour_types.clone(),
            config.booking.max_group_size,
        );
        let mounted = MountedSection::mount(Section::Home, &config);

        SiteUI {
            config,
            section: Section::Home,
            mounted: Some(mounted),
            booking: dialog,
        }
    }

    fn switch_to(&mut self, section: Section) {
        if section == self.section {
            return;
        }
        info!("Switching section {:?} -> {:?}", self.section, section);
        if let Some(previous) = self.mounted.take() {
            previous.unmount();
        }
        self.mounted = Some(MountedSection::mount(section, &self.config));
        self.section = section;
    }

    fn repaint_interval(&self) -> Duration {
        let fps = u64::from(self.config.ui.fps.max(1));
        Duration::from_millis(1000 / fps)
    }
}

impl eframe::App for SiteUI {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.request_repaint_after(self.repaint_interval());

        egui::TopBottomPanel::top("top_panel")
            .show_separator_line(false)
            .show(ctx, |ui| {
                let width = ui.available_width() - 60.0;
                ui.horizontal_centered(|ui| {
                    for section in Section::ALL {
                        let button = Button::new(section.label())
                            .selected(section == self.section)
                            .min_size(Vec2 {
                                x: width / 5.0,
                                y: 24.0,
                            });
                        if ui.add(button).clicked() {
                            self.switch_to(section);
                        }
                    }
                    ui.add_space(20.0);
                    if ui
                        .add(Button::new("Book a walk").min_size(Vec2 {
                            x: width / 5.0,
                            y: 24.0,
                        }))
                        .clicked()
                    {
                        self.booking.open();
                    }
                });
            });

        egui::TopBottomPanel::bottom("bottom_panel")
            .show_separator_line(false)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| match self.booking.status() {
                    Some(status) => {
                        let color = if status.success {
                            UiColors::ACTIVE
                        } else {
                            UiColors::INACTIVE
                        };
                        ui.colored_label(color, status.message.as_deref().unwrap_or_default());
                    }
                    None if self.booking.is_sending() => {
                        ui.label("Sending booking inquiry…");
                    }
                    None => {
                        ui.label("Small-group coastline walks");
                    }
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match self.mounted.as_mut() {
                Some(MountedSection::Home(home)) => home.render(ui),
                Some(MountedSection::Gallery(gallery)) => gallery.render(ui),
                Some(MountedSection::Timeline(timeline)) => timeline.render(ui),
                Some(MountedSection::Failed(reason)) => {
                    ui.colored_label(UiColors::INACTIVE, format!("Section unavailable: {}", reason));
                }
                None => {}
            });
        });

        self.booking.render(ctx);
    }
}
