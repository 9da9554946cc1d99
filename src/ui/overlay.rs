use egui::{Context, RichText};

use crate::scene::PointerState;
use crate::ui::theme::{overlay_fill, overlay_text};

pub struct OverlayInfo {
    pub fps: f32,
    pub is_dark: bool,
    pub pointer: PointerState,
    pub spin: f32,
    pub surface_size: (u32, u32),
}

pub fn draw_stats_overlay(ctx: &Context, info: &OverlayInfo) {
    let text = overlay_text(info.is_dark);

    egui::Area::new(egui::Id::new("stats_overlay"))
        .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(12.0, -12.0))
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::default()
                .fill(overlay_fill(info.is_dark))
                .rounding(6.0)
                .inner_margin(10.0)
                .show(ui, |ui| {
                    ui.style_mut().override_font_id =
                        Some(egui::FontId::new(11.0, egui::FontFamily::Monospace));
                    ui.label(RichText::new(format!("{:.0} fps", info.fps)).color(text));
                    let (width, height) = info.surface_size;
                    ui.label(
                        RichText::new(format!(
                            "{}x{} | theme: {}",
                            width,
                            height,
                            if info.is_dark { "dark" } else { "light" }
                        ))
                        .color(text),
                    );
                    ui.label(
                        RichText::new(format!(
                            "pointer: ({:+.3}, {:+.3}) | spin: {:.3} rad",
                            info.pointer.mouse_x, info.pointer.mouse_y, info.spin
                        ))
                        .color(text),
                    );
                });
        });
}
