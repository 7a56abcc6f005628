use eframe::egui::{self, ComboBox, DragValue, TextEdit, Ui};
use tokio::sync::oneshot::{self, error::TryRecvError};
use tracing::{info, warn};

use super::common::UiColors;
use crate::booking::{BookingError, BookingHandle, BookingKind, BookingOutcome, BookingRequest};

/// Booking inquiry form shown as a window over the page.
///
/// The hero slideshow underneath keeps running while this is open.
pub struct BookingDialog {
    open: bool,
    handle: BookingHandle,
    hikes: Vec<String>,
    tour_types: Vec<String>,
    max_group_size: u32,

    name: String,
    email: String,
    message: String,
    kind: BookingKind,
    selection: String,
    group_size: u32,

    pending: Option<oneshot::Receiver<BookingOutcome>>,
    status: Option<BookingOutcome>,
}

impl BookingDialog {
    pub fn new(
        handle: BookingHandle,
        hikes: Vec<String>,
        tour_types: Vec<String>,
        max_group_size: u32,
    ) -> Self {
        Self {
            open: false,
            handle,
            selection: hikes.first().cloned().unwrap_or_default(),
            hikes,
            tour_types,
            max_group_size,
            name: String::new(),
            email: String::new(),
            message: String::new(),
            kind: BookingKind::Hike,
            group_size: 1,
            pending: None,
            status: None,
        }
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Last status message for the bottom panel
    pub fn status(&self) -> Option<&BookingOutcome> {
        self.status.as_ref()
    }

    pub fn is_sending(&self) -> bool {
        self.pending.is_some()
    }

    /// Picks up a finished submission, if any
    pub fn poll(&mut self) {
        let Some(receiver) = self.pending.as_mut() else {
            return;
        };

        match receiver.try_recv() {
            Ok(outcome) => {
                if outcome.success {
                    self.name.clear();
                    self.email.clear();
                    self.message.clear();
                }
                self.status = Some(outcome);
                self.pending = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Closed) => {
                warn!("Booking worker dropped the response channel");
                self.status = Some(BookingOutcome::failed(&BookingError::ChannelError(
                    "response channel closed".to_string(),
                )));
                self.pending = None;
            }
        }
    }

    pub fn render(&mut self, ctx: &egui::Context) {
        self.poll();
        if !self.open {
            return;
        }

        let mut open = self.open;
        egui::Window::new("Book a walk")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| self.render_form(ui));
        self.open = open;
    }

    fn render_form(&mut self, ui: &mut Ui) {
        egui::Grid::new("booking_form")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label("Name");
                ui.add(TextEdit::singleline(&mut self.name).hint_text("Your name"));
                ui.end_row();

                ui.label("Email");
                ui.add(TextEdit::singleline(&mut self.email).hint_text("you@example.org"));
                ui.end_row();

                ui.label("Booking");
                let previous_kind = self.kind;
                ui.horizontal(|ui| {
                    ui.radio_value(&mut self.kind, BookingKind::Hike, "Hike");
                    ui.radio_value(&mut self.kind, BookingKind::Tour, "Tour");
                });
                ui.end_row();

                let options = match self.kind {
                    BookingKind::Hike => &self.hikes,
                    BookingKind::Tour => &self.tour_types,
                };
                if self.kind != previous_kind {
                    self.selection = options.first().cloned().unwrap_or_default();
                }

                ui.label(match self.kind {
                    BookingKind::Hike => "Hike",
                    BookingKind::Tour => "Tour type",
                });
                ComboBox::from_id_salt("booking_selection")
                    .selected_text(self.selection.as_str())
                    .show_ui(ui, |ui| {
                        for option in options {
                            ui.selectable_value(&mut self.selection, option.clone(), option.as_str());
                        }
                    });
                ui.end_row();

                ui.label("People");
                ui.add(DragValue::new(&mut self.group_size).range(1..=self.max_group_size));
                ui.end_row();
            });

        ui.label("Message");
        ui.add(
            TextEdit::multiline(&mut self.message)
                .desired_rows(4)
                .hint_text("Dates, questions, accessibility needs"),
        );

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            let send = ui.add_enabled(!self.is_sending(), egui::Button::new("Send inquiry"));
            if send.clicked() {
                self.submit();
            }
            if self.is_sending() {
                ui.spinner();
            }
        });

        if let Some(status) = &self.status {
            let color = if status.success {
                UiColors::ACTIVE
            } else {
                UiColors::INACTIVE
            };
            if let Some(message) = &status.message {
                ui.colored_label(color, message.as_str());
            }
        }
    }

    fn submit(&mut self) {
        let request = BookingRequest::new(
            self.name.clone(),
            self.email.clone(),
            self.message.clone(),
            self.kind,
            self.selection.clone(),
            self.group_size,
        );

        // Validate locally first so the visitor gets instant feedback
        if let Err(e) = request.validate(self.max_group_size) {
            self.status = Some(BookingOutcome::failed(&e));
            return;
        }

        match self.handle.submit(request) {
            Ok(receiver) => {
                info!("Booking inquiry submitted");
                self.status = None;
                self.pending = Some(receiver);
            }
            Err(e) => {
                warn!("Could not submit booking: {}", e);
                self.status = Some(BookingOutcome::failed(&e));
            }
        }
    }
}
