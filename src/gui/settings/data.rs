use std::path::PathBuf;

use serde::{
    Deserialize,
    Serialize,
};

use crate::speech::SpeechSettings;

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsData {
    pub dark_mode: bool,
    pub speech: SpeechSettings,
    pub font_path: Option<PathBuf>, // CJK font to register with egui
    pub last_deck: Option<PathBuf>,
    pub ink_width: f32,
    pub ghost_alpha: u8,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self {
            dark_mode: true,
            speech: SpeechSettings::default(),
            font_path: None,
            last_deck: None,
            ink_width: 6.0,
            ghost_alpha: 60,
        }
    }
}
