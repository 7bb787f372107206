//! Theme-derived colors for the sphere renderer.
//!
//! The widget samples the page theme once at mount and bakes it into a
//! `Palette`; a theme change tears the widget down and rebuilds it, so none
//! of these values ever change over the life of a GPU state.

/// Page theme sampled at mount time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    #[inline]
    pub fn from_dark_flag(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    #[inline]
    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }
}

/// Resolved colors for one theme.
///
/// GPU colors are linear (the surface format is sRGB, so the hardware
/// re-encodes on write); `label_text_css` feeds the 2D canvas rasterizer and
/// stays a CSS color string.
#[derive(Clone, Debug)]
pub struct Palette {
    pub wire_rgba: [f32; 4],
    pub marker_rgba: [f32; 4],
    pub label_text_css: &'static str,
}

// Emerald accent, sRGB bytes of #10b981
const ACCENT_SRGB: [f32; 3] = [16.0 / 255.0, 185.0 / 255.0, 129.0 / 255.0];
const WIRE_ALPHA: f32 = 0.2;

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        let accent = [
            srgb_to_linear(ACCENT_SRGB[0]),
            srgb_to_linear(ACCENT_SRGB[1]),
            srgb_to_linear(ACCENT_SRGB[2]),
        ];
        Self {
            wire_rgba: [accent[0], accent[1], accent[2], WIRE_ALPHA],
            marker_rgba: [accent[0], accent[1], accent[2], 1.0],
            label_text_css: match theme {
                Theme::Dark => "#ffffff",
                Theme::Light => "#000000",
            },
        }
    }
}

/// Standard sRGB electro-optical transfer function.
#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
