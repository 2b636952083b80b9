use eframe::egui;

use crate::hud::color::Argb;
use crate::hud::widget::{DrawCommand, TextAnchor};

/// Glyph height of the design font at scale 1; text font sizes are
/// this times the command's scale factor.
const TEXT_FONT_HEIGHT: f32 = 9.0;

/// Translate overlay draw commands into egui painter calls. This is the
/// only place the pixel-space command list meets a concrete renderer.
pub fn paint_commands(painter: &egui::Painter, commands: &[DrawCommand]) {
    for command in commands {
        match command {
            DrawCommand::FillRect { rect, color } => {
                let rect = egui::Rect::from_min_size(
                    egui::pos2(rect.x as f32, rect.y as f32),
                    egui::vec2(rect.width as f32, rect.height as f32),
                );
                painter.rect_filled(rect, 0.0, to_color32(*color));
            }
            DrawCommand::Text {
                center_x,
                center_y,
                scale,
                anchor,
                text,
                color,
            } => {
                let center = egui::pos2(*center_x as f32, *center_y as f32);
                // A one-scaled-pixel gap separates stacked lines.
                let (pos, align) = match anchor {
                    TextAnchor::Center => (center, egui::Align2::CENTER_CENTER),
                    TextAnchor::AboveCenter => (
                        egui::pos2(center.x, center.y - scale),
                        egui::Align2::CENTER_BOTTOM,
                    ),
                    TextAnchor::BelowCenter => (
                        egui::pos2(center.x, center.y + scale),
                        egui::Align2::CENTER_TOP,
                    ),
                };
                painter.text(
                    pos,
                    align,
                    text,
                    egui::FontId::proportional(TEXT_FONT_HEIGHT * scale),
                    to_color32(*color),
                );
            }
        }
    }
}

pub fn to_color32(color: Argb) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}
