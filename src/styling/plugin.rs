use bevy::color::palettes::css;
use bevy::prelude::*;
use bevy_egui::egui::Visuals;

pub struct StylingPlugin;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Resource)]
pub struct Theme {
    pub dark_mode: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self { dark_mode: true }
    }
}

impl Theme {
    pub fn ui_visuals(&self) -> Visuals {
        if self.dark_mode {
            Visuals::dark()
        } else {
            Visuals::light()
        }
    }

    pub fn background_color(&self) -> Color {
        if self.dark_mode {
            Color::srgb(0.15, 0.15, 0.15)
        } else {
            Color::WHITE
        }
    }

    pub fn ball_color(&self) -> Color {
        Color::Srgba(css::ORANGE_RED)
    }

    pub fn floor_minor_line_color(&self) -> Color {
        if self.dark_mode {
            Color::srgb(0.1, 0.1, 0.1)
        } else {
            Color::srgb(0.7, 0.7, 0.7)
        }
    }

    pub fn floor_major_line_color(&self) -> Color {
        Color::srgb(0.25, 0.25, 0.25)
    }

    pub fn drag_line_color(&self) -> LinearRgba {
        if self.dark_mode {
            LinearRgba::WHITE
        } else {
            LinearRgba::BLACK
        }
    }

    pub fn prediction_line_color(&self) -> LinearRgba {
        Color::Srgba(css::GOLD).to_linear()
    }

    pub fn aim_marker_color(&self) -> Color {
        Color::Srgba(css::LIME)
    }
}

impl Plugin for StylingPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Theme::default())
            .add_systems(Update, super::dark_mode::update_dark_mode);
    }
}
