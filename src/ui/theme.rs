use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};
use winit::window::Theme;

pub const DARK_SURFACE: u32 = 0x0a0a0a;
pub const LIGHT_SURFACE: u32 = 0xf0f0f0;

pub const OVERLAY_DARK_FILL: Color32 = Color32::from_black_alpha(180);
pub const OVERLAY_LIGHT_FILL: Color32 = Color32::from_rgba_premultiplied(200, 200, 200, 200);
pub const TEXT_ON_DARK: Color32 = Color32::from_rgb(168, 168, 171);
pub const TEXT_ON_LIGHT: Color32 = Color32::from_rgb(60, 60, 66);
pub const BORDER_SUBTLE: Color32 = Color32::from_rgba_premultiplied(50, 51, 113, 77);

/// Mesh and background colors for one color scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub mesh: u32,
    pub background: u32,
}

pub fn palette(is_dark: bool) -> Palette {
    if is_dark {
        Palette {
            mesh: DARK_SURFACE,
            background: DARK_SURFACE,
        }
    } else {
        Palette {
            mesh: LIGHT_SURFACE,
            background: LIGHT_SURFACE,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ThemePreference {
    /// Follow the system color scheme.
    #[default]
    Auto,
    Dark,
    Light,
}

/// Decides the color scheme from the user's preference and the system theme.
pub struct ThemeWatcher {
    preference: ThemePreference,
}

impl ThemeWatcher {
    pub fn new(preference: ThemePreference) -> Self {
        Self { preference }
    }

    /// `None` means the system reported no preference, which reads as light.
    pub fn is_dark(&self, system: Option<Theme>) -> bool {
        match self.preference {
            ThemePreference::Dark => true,
            ThemePreference::Light => false,
            ThemePreference::Auto => system == Some(Theme::Dark),
        }
    }

    pub fn follows_system(&self) -> bool {
        self.preference == ThemePreference::Auto
    }
}

pub fn overlay_fill(is_dark: bool) -> Color32 {
    if is_dark { OVERLAY_DARK_FILL } else { OVERLAY_LIGHT_FILL }
}

pub fn overlay_text(is_dark: bool) -> Color32 {
    if is_dark { TEXT_ON_DARK } else { TEXT_ON_LIGHT }
}

pub fn apply_theme(ctx: &egui::Context, is_dark: bool) {
    let mut style = Style::default();

    let mut visuals = if is_dark {
        Visuals::dark()
    } else {
        Visuals::light()
    };
    visuals.override_text_color = Some(overlay_text(is_dark));
    visuals.window_rounding = Rounding::same(6.0);
    visuals.window_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    style.visuals = visuals;

    style.spacing.item_spacing = egui::vec2(8.0, 4.0);

    style
        .text_styles
        .insert(TextStyle::Body, FontId::new(12.0, FontFamily::Proportional));
    style
        .text_styles
        .insert(TextStyle::Monospace, FontId::new(11.0, FontFamily::Monospace));

    ctx.set_style(style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_lookup() {
        assert_eq!(
            palette(true),
            Palette {
                mesh: 0x0a0a0a,
                background: 0x0a0a0a
            }
        );
        assert_eq!(
            palette(false),
            Palette {
                mesh: 0xf0f0f0,
                background: 0xf0f0f0
            }
        );
    }

    #[test]
    fn auto_follows_system() {
        let watcher = ThemeWatcher::new(ThemePreference::Auto);
        assert!(watcher.follows_system());
        assert!(watcher.is_dark(Some(Theme::Dark)));
        assert!(!watcher.is_dark(Some(Theme::Light)));
        assert!(!watcher.is_dark(None));
    }

    #[test]
    fn pinned_preference_ignores_system() {
        let dark = ThemeWatcher::new(ThemePreference::Dark);
        assert!(!dark.follows_system());
        assert!(dark.is_dark(Some(Theme::Light)));

        let light = ThemeWatcher::new(ThemePreference::Light);
        assert!(!light.is_dark(Some(Theme::Dark)));
    }
}
