mod command;
pub mod types;

pub use command::CommandSpeaker;
pub use types::SpeechSettings;

use crate::core::XieziError;

/// Pronunciation playback capability.
///
/// `speak` only starts playback and never waits for it. Starting a new
/// utterance cancels the one in flight.
pub trait Speaker {
    fn speak(&mut self, text: &str) -> Result<(), XieziError>;

    fn stop(&mut self) {}

    fn is_available(&self) -> bool {
        true
    }
}

/// Speaker used when audio is muted or no backend exists.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSpeaker;

impl Speaker for NullSpeaker {
    fn speak(&mut self, _text: &str) -> Result<(), XieziError> {
        Ok(())
    }

    fn is_available(&self) -> bool {
        false
    }
}

/// Builds the speaker the settings ask for.
pub fn from_settings(settings: &SpeechSettings, muted: bool) -> Box<dyn Speaker> {
    if muted || !settings.enabled || settings.command.trim().is_empty() {
        log::info!("[Speech] Audio disabled");
        return Box::new(NullSpeaker);
    }
    Box::new(CommandSpeaker::new(settings.command.clone(), settings.args.clone()))
}

impl<S: Speaker + ?Sized> Speaker for Box<S> {
    fn speak(&mut self, text: &str) -> Result<(), XieziError> {
        (**self).speak(text)
    }

    fn stop(&mut self) {
        (**self).stop()
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_muted_settings_give_null_speaker() {
        let speaker = from_settings(&SpeechSettings::default(), true);
        assert!(!speaker.is_available());

        let disabled = SpeechSettings { enabled: false, ..SpeechSettings::default() };
        assert!(!from_settings(&disabled, false).is_available());

        let blank = SpeechSettings { command: "  ".to_string(), ..SpeechSettings::default() };
        assert!(!from_settings(&blank, false).is_available());
    }

    #[test]
    fn test_null_speaker_accepts_everything() {
        let mut speaker = NullSpeaker;
        assert!(speaker.speak("nǐ hǎo").is_ok());
        speaker.stop();
    }
}
