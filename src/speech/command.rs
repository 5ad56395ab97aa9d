use std::process::{
    Child,
    Command,
    Stdio,
};

use super::Speaker;
use crate::core::XieziError;

/// Speaks through an external text-to-speech program such as `espeak-ng`.
pub struct CommandSpeaker {
    command: String,
    args: Vec<String>,
    in_flight: Option<Child>,
}

impl CommandSpeaker {
    pub fn new(command: String, args: Vec<String>) -> Self {
        Self { command, args, in_flight: None }
    }

    pub fn is_speaking(&mut self) -> bool {
        self.reap_finished();
        self.in_flight.is_some()
    }

    /// Drops the handle of an utterance that already ended on its own.
    fn reap_finished(&mut self) {
        let finished = match self.in_flight.as_mut() {
            Some(child) => !matches!(child.try_wait(), Ok(None)),
            None => false,
        };
        if finished {
            self.in_flight = None;
        }
    }
}

impl Speaker for CommandSpeaker {
    fn speak(&mut self, text: &str) -> Result<(), XieziError> {
        self.reap_finished();
        self.stop();

        let text = text.trim();
        if text.is_empty() {
            return Ok(());
        }

        let child = Command::new(&self.command)
            .args(&self.args)
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                XieziError::Speech(format!("Failed to start {}: {}", self.command, e))
            })?;

        log::debug!("[Speech] {} speaking {:?} (pid {})", self.command, text, child.id());
        self.in_flight = Some(child);
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(mut child) = self.in_flight.take() {
            if let Ok(None) = child.try_wait() {
                if let Err(e) = child.kill() {
                    log::warn!("[Speech] Failed to stop previous utterance: {}", e);
                }
            }
            // Reap so no zombie is left behind
            let _ = child.wait();
        }
    }
}

impl Drop for CommandSpeaker {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_an_error() {
        let mut speaker = CommandSpeaker::new("xiezi-no-such-tts-binary".to_string(), Vec::new());
        let result = speaker.speak("nǐ hǎo");
        assert!(matches!(result, Err(XieziError::Speech(_))));
        assert!(!speaker.is_speaking());
    }

    #[test]
    fn test_blank_text_spawns_nothing() {
        let mut speaker = CommandSpeaker::new("xiezi-no-such-tts-binary".to_string(), Vec::new());
        assert!(speaker.speak("   ").is_ok());
        assert!(!speaker.is_speaking());
    }

    #[cfg(unix)]
    #[test]
    fn test_finished_utterance_is_reaped() {
        let mut speaker = CommandSpeaker::new("true".to_string(), Vec::new());
        speaker.speak("done").unwrap();

        let deadline = std::time::Instant::now() + std::time::Duration::from_secs(5);
        while speaker.is_speaking() && std::time::Instant::now() < deadline {
            std::thread::sleep(std::time::Duration::from_millis(10));
        }
        assert!(!speaker.is_speaking());
        assert!(speaker.in_flight.is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_new_request_replaces_in_flight() {
        let mut speaker = CommandSpeaker::new("sleep".to_string(), Vec::new());
        speaker.speak("5").unwrap();
        assert!(speaker.is_speaking());
        let first = speaker.in_flight.as_ref().map(|c| c.id());

        speaker.speak("5").unwrap();
        let second = speaker.in_flight.as_ref().map(|c| c.id());
        assert_ne!(first, second);

        speaker.stop();
        assert!(!speaker.is_speaking());
    }
}
