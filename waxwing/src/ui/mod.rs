use std::time::Duration;

mod style;
mod track_row;

pub use style::Style;

use egui::{
    CentralPanel, Context, FontDefinitions, Frame, Margin, RichText, ScrollArea, TopBottomPanel,
    Visuals,
};

use crate::{App, config::Config};

pub struct UiState {
    /// The collection identifier field: the routing-context analogue.
    pub collection_input: String,
}

pub fn initialize(
    cc: &eframe::CreationContext<'_>,
    config: &Config,
    collection_input: String,
) -> UiState {
    cc.egui_ctx.set_visuals(Visuals::dark());
    cc.egui_ctx.style_mut(|style| {
        style.visuals.panel_fill = config.style.background();
        style.visuals.override_text_color = Some(config.style.text());
    });

    // Add Phosphor regular icons as fallback
    let mut fonts = FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
    cc.egui_ctx.set_fonts(fonts);

    UiState { collection_input }
}

impl App {
    pub fn render(&mut self, ctx: &Context) {
        // The playback thread reports natural preview end; this clears the
        // active slot so no row stays marked.
        self.logic.process_playback_events();

        if let Some(message) = self.alert.read().unwrap().clone() {
            let mut open = true;
            egui::Window::new("Error").open(&mut open).show(ctx, |ui| {
                ui.label(RichText::new(message));
            });
            if !open {
                *self.alert.write().unwrap() = None;
            }
        }

        TopBottomPanel::top("collection_bar")
            .frame(
                Frame::default()
                    .inner_margin(Margin::symmetric(8, 4))
                    .fill(self.config.style.background()),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(format!("{} Album", egui_phosphor::regular::VINYL_RECORD));
                    let response = ui.text_edit_singleline(&mut self.ui_state.collection_input);
                    let submitted = response.lost_focus()
                        && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if ui.button("Look up").clicked() || submitted {
                        let collection_id = self.ui_state.collection_input.trim();
                        if !collection_id.is_empty() {
                            self.logic.set_collection(collection_id);
                        }
                    }
                });
            });

        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(8))
                    .fill(self.config.style.background()),
            )
            .show(ctx, |ui| {
                if self.logic.is_querying() {
                    ui.vertical_centered(|ui| {
                        ui.add(egui::Spinner::new().size(32.0));
                    });
                }

                let mut clicked_track = None;
                {
                    let state = self.logic.get_state();
                    let state = state.read().unwrap();
                    let active_url = state
                        .active_preview
                        .as_ref()
                        .map(|preview| preview.preview_url.clone());

                    ScrollArea::vertical().show(ui, |ui| {
                        for track in &state.tracks {
                            let playing =
                                active_url.as_deref() == Some(track.preview_url.as_str());
                            let row =
                                track_row::ui(track, ui, &self.config.style, playing);
                            if row.clicked {
                                clicked_track = Some(track.clone());
                            }
                        }
                    });
                }
                if let Some(track) = clicked_track {
                    self.logic.toggle_preview(&track);
                }
            });

        // Async completions don't wake the UI; poll at the configured rate.
        ctx.request_repaint_after(Duration::from_secs_f32(self.config.general.repaint_secs));
    }
}
