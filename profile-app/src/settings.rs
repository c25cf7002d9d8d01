//! Display settings shared by every screen: font scaling and the colour
//! palette. Values are exposed to the page as CSS custom properties.

use serde::{Deserialize, Serialize};

pub const SCALE_MIN: u32 = 50;
pub const SCALE_MAX: u32 = 200;
pub const SCALE_STEP: u32 = 5;
pub const SCALE_DEFAULT: u32 = 100;

/// Title, label and body sizes in px at 100% scale.
const BASE_FONT_SIZES: [u32; 3] = [18, 16, 14];

const SETTINGS_KEY: &str = "profile-app-settings";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub c1: String,
    pub c2: String,
    pub c3: String,
    pub c4: String,
    pub c5: String,
    pub c6: String,
    pub c7: String,
    pub c8: String,
    pub c9: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            c1: "#FFFFFF".to_string(),
            c2: "#F5F5F5".to_string(),
            c3: "#000000".to_string(),
            c4: "#333333".to_string(),
            c5: "#777777".to_string(),
            c6: "#AAAAAA".to_string(),
            c7: "#007BFF".to_string(),
            c8: "#FF6347".to_string(),
            c9: "#28a745".to_string(),
        }
    }
}

impl Palette {
    fn entries(&self) -> [(&'static str, &str); 9] {
        [
            ("c1", &self.c1),
            ("c2", &self.c2),
            ("c3", &self.c3),
            ("c4", &self.c4),
            ("c5", &self.c5),
            ("c6", &self.c6),
            ("c7", &self.c7),
            ("c8", &self.c8),
            ("c9", &self.c9),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontWeights {
    pub fw1: String,
    pub fw2: String,
    pub fw3: String,
}

impl Default for FontWeights {
    fn default() -> Self {
        Self {
            fw1: "bold".to_string(),
            fw2: "600".to_string(),
            fw3: "500".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Slider position in percent.
    pub font_scale: u32,
    pub fs1: u32,
    pub fs2: u32,
    pub fs3: u32,
    pub weights: FontWeights,
    pub palette: Palette,
}

impl Default for AppSettings {
    fn default() -> Self {
        let [fs1, fs2, fs3] = BASE_FONT_SIZES;
        Self {
            font_scale: SCALE_DEFAULT,
            fs1,
            fs2,
            fs3,
            weights: FontWeights::default(),
            palette: Palette::default(),
        }
    }
}

/// Clamp to the slider range and snap to its step.
pub fn normalize_scale(value: u32) -> u32 {
    let clamped = value.clamp(SCALE_MIN, SCALE_MAX);
    let offset = clamped - SCALE_MIN;
    let snapped = SCALE_MIN + (offset + SCALE_STEP / 2) / SCALE_STEP * SCALE_STEP;
    snapped.min(SCALE_MAX)
}

/// `round(scale * base / 100)`, halves rounding up.
pub fn scaled_size(scale: u32, base: u32) -> u32 {
    (scale * base + 50) / 100
}

impl AppSettings {
    /// Slider is moving: track the position without resizing text yet.
    pub fn set_scale_preview(&mut self, value: u32) {
        self.font_scale = normalize_scale(value);
    }

    /// Slider was released: resize all three text sizes.
    pub fn commit_scale(&mut self, value: u32) {
        self.font_scale = normalize_scale(value);
        let [b1, b2, b3] = BASE_FONT_SIZES;
        self.fs1 = scaled_size(self.font_scale, b1);
        self.fs2 = scaled_size(self.font_scale, b2);
        self.fs3 = scaled_size(self.font_scale, b3);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Inline style declaring every setting as a CSS variable.
    pub fn css_variables(&self) -> String {
        let mut css = format!(
            "--fs1: {}px; --fs2: {}px; --fs3: {}px; --fw1: {}; --fw2: {}; --fw3: {};",
            self.fs1, self.fs2, self.fs3, self.weights.fw1, self.weights.fw2, self.weights.fw3
        );
        for (name, value) in self.palette.entries() {
            css.push_str(&format!(" --{name}: {value};"));
        }
        css
    }

    /// Snap a restored scale and derive the font sizes from it, whatever
    /// sizes were stored alongside.
    fn sanitized(mut self) -> Self {
        let scale = self.font_scale;
        self.commit_scale(scale);
        self
    }
}

pub fn get_cached_settings() -> Option<AppSettings> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(SETTINGS_KEY).ok().flatten())
        .and_then(|raw| serde_json::from_str::<AppSettings>(&raw).ok())
        .map(AppSettings::sanitized)
}

pub fn set_cached_settings(settings: &AppSettings) {
    let Ok(raw) = serde_json::to_string(settings) else {
        return;
    };

    if let Some(storage) =
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    {
        let _ = storage.set_item(SETTINGS_KEY, &raw);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_base_sizes() {
        let settings = AppSettings::default();
        assert_eq!(settings.font_scale, 100);
        assert_eq!((settings.fs1, settings.fs2, settings.fs3), (18, 16, 14));
        assert_eq!(settings.palette.c7, "#007BFF");
        assert_eq!(settings.weights.fw1, "bold");
    }

    #[test]
    fn preview_moves_slider_only() {
        let mut settings = AppSettings::default();
        settings.set_scale_preview(150);
        assert_eq!(settings.font_scale, 150);
        assert_eq!(settings.fs1, 18);
    }

    #[test]
    fn commit_rescales_fonts() {
        let mut settings = AppSettings::default();
        settings.commit_scale(150);
        assert_eq!((settings.fs1, settings.fs2, settings.fs3), (27, 24, 21));

        settings.commit_scale(55);
        // 9.9, 8.8 and 7.7 rounded
        assert_eq!((settings.fs1, settings.fs2, settings.fs3), (10, 9, 8));
    }

    #[test]
    fn scale_is_clamped_and_snapped() {
        assert_eq!(normalize_scale(0), 50);
        assert_eq!(normalize_scale(500), 200);
        assert_eq!(normalize_scale(102), 100);
        assert_eq!(normalize_scale(103), 105);
        assert_eq!(normalize_scale(199), 200);
    }

    #[test]
    fn scaled_size_rounds_half_up() {
        assert_eq!(scaled_size(75, 14), 11);
        assert_eq!(scaled_size(125, 18), 23);
        assert_eq!(scaled_size(50, 14), 7);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut settings = AppSettings::default();
        settings.commit_scale(200);
        settings.palette.c1 = "#123456".to_string();
        settings.reset();
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn css_variables_cover_sizes_and_palette() {
        let mut settings = AppSettings::default();
        settings.commit_scale(200);
        let css = settings.css_variables();
        assert!(css.contains("--fs1: 36px;"));
        assert!(css.contains("--fw2: 600;"));
        assert!(css.contains("--c9: #28a745;"));
    }

    #[test]
    fn cached_settings_round_trip_through_json() {
        let mut settings = AppSettings::default();
        settings.commit_scale(120);
        let raw = serde_json::to_string(&settings).unwrap();
        let back: AppSettings = serde_json::from_str(&raw).unwrap();
        assert_eq!(back.sanitized(), settings);
    }

    #[test]
    fn restored_sizes_follow_restored_scale() {
        let mut stored = AppSettings::default();
        stored.font_scale = 148;
        stored.fs1 = 99;
        stored.fs2 = 1;
        stored.fs3 = 0;

        let restored = stored.sanitized();

        assert_eq!(restored.font_scale, 150);
        assert_eq!((restored.fs1, restored.fs2, restored.fs3), (27, 24, 21));
    }
}
