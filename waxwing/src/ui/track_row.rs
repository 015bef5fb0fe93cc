use waxwing_itunes::Track;

use crate::ui::style::{self, Style};

pub struct TrackRowResponse {
    pub clicked: bool,
}

/// One clickable row: track number, title, artist in parentheses. The row
/// whose preview occupies the active slot gets the accent colour, a speaker
/// glyph, and a spinner.
pub fn ui(track: &Track, ui: &mut egui::Ui, style: &Style, playing: bool) -> TrackRowResponse {
    let row_height = ui.text_style_height(&egui::TextStyle::Body) + 4.0;
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), row_height),
        egui::Sense::click(),
    );

    let text_y = rect.top() + 2.0;
    let font_id = egui::TextStyle::Body.resolve(ui.style());

    // Draw track number (right-aligned in 32px column)
    let number_x = rect.left() + 32.0;
    ui.painter().text(
        egui::pos2(number_x, text_y),
        egui::Align2::RIGHT_TOP,
        track.track_number.to_string(),
        font_id.clone(),
        style.track_number(),
    );

    // Draw track title
    let title_x = number_x + 8.0; // Small gap after track number
    let title_color = if response.hovered() {
        style.track_name_hovered()
    } else if playing {
        style.track_name_playing()
    } else {
        style.track_name()
    };
    let title = if playing {
        format!("{} {}", egui_phosphor::regular::SPEAKER_HIGH, track.track_name)
    } else {
        track.track_name.clone()
    };
    ui.painter().text(
        egui::pos2(title_x, text_y),
        egui::Align2::LEFT_TOP,
        title,
        font_id.clone(),
        title_color,
    );

    // Draw artist (right-aligned), leaving room for the spinner when playing
    let artist_right = rect.right() - if playing { row_height + 8.0 } else { 0.0 };
    ui.painter().text(
        egui::pos2(artist_right, text_y),
        egui::Align2::RIGHT_TOP,
        format!("({})", track.artist_name),
        font_id,
        style::string_to_colour(&track.artist_name).into(),
    );

    if playing {
        let spinner_rect = egui::Rect::from_center_size(
            egui::pos2(rect.right() - row_height / 2.0, rect.center().y),
            egui::vec2(row_height - 6.0, row_height - 6.0),
        );
        egui::Spinner::new()
            .color(style.track_name_playing())
            .paint_at(ui, spinner_rect);
    }

    TrackRowResponse {
        clicked: response.clicked(),
    }
}
