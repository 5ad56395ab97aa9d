use serde::{
    Deserialize,
    Serialize,
};

pub const fn default_speech_command() -> &'static str {
    #[cfg(target_os = "macos")]
    return "say";
    #[cfg(not(target_os = "macos"))]
    return "espeak-ng";
}

fn default_speech_args() -> Vec<String> {
    #[cfg(target_os = "macos")]
    return vec!["-v".to_string(), "Tingting".to_string()];
    #[cfg(not(target_os = "macos"))]
    return vec!["-v".to_string(), "cmn".to_string()];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechSettings {
    pub enabled: bool,
    pub command: String,
    pub args: Vec<String>, // Passed before the text, e.g. a voice selection
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            command: default_speech_command().to_string(),
            args: default_speech_args(),
        }
    }
}
