//! Turn loop of a practice session.
//!
//! Grading goes to the queue first, then the surface is reset for whatever
//! card is current afterwards. Revealing shows the ghosts and asks the
//! speaker for the pronunciation. Speaker failures are logged and dropped.

use log::{
    info,
    warn,
};
use rand::Rng;

use super::{
    canvas::{
        InkPoint,
        PointerPhase,
    },
    models::{
        QueueItem,
        VocabularyRecord,
    },
    scheduler::PracticeQueue,
    surface::{
        Direction,
        MultiSlotSurface,
        SlotState,
    },
};
use crate::speech::Speaker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub graded: usize,
    pub correct: usize,
    pub incorrect: usize,
}

/// What the host should render right now.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionView<'a> {
    Card {
        item: &'a QueueItem,
        slots: SlotState,
        remaining: usize,
    },
    Done {
        stats: SessionStats,
        deck_size: usize,
    },
}

pub struct SessionController<S: Speaker, R: Rng> {
    records: Vec<VocabularyRecord>,
    queue: PracticeQueue,
    surface: MultiSlotSurface,
    speaker: S,
    rng: R,
    stats: SessionStats,
}

impl<S: Speaker, R: Rng> SessionController<S, R> {
    pub fn new(records: Vec<VocabularyRecord>, speaker: S, rng: R) -> Self {
        let mut session = Self {
            records,
            queue: PracticeQueue::default(),
            surface: MultiSlotSurface::new(),
            speaker,
            rng,
            stats: SessionStats::default(),
        };
        session.restart();
        session
    }

    pub fn grade(&mut self, grade: Grade) {
        if self.queue.is_exhausted() {
            return;
        }

        match grade {
            Grade::Correct => {
                self.queue.advance_on_correct();
                self.stats.correct += 1;
            }
            Grade::Incorrect => {
                self.queue.advance_on_incorrect();
                self.stats.incorrect += 1;
            }
        }
        self.stats.graded += 1;

        self.sync_surface();
        if self.queue.is_exhausted() {
            info!(
                "[Session] Finished: {} graded, {} correct, {} incorrect",
                self.stats.graded, self.stats.correct, self.stats.incorrect
            );
        }
    }

    pub fn reveal(&mut self) {
        let Some(item) = self.queue.current() else {
            return;
        };
        let text = if item.pronunciation.trim().is_empty() {
            item.front_text.clone()
        } else {
            item.pronunciation.clone()
        };

        self.surface.set_ghost_visible(true);
        self.speak(&text);
    }

    pub fn hide(&mut self) {
        self.surface.set_ghost_visible(false);
    }

    pub fn toggle_reveal(&mut self) {
        if self.surface.ghost_visible() {
            self.hide();
        } else {
            self.reveal();
        }
    }

    /// Plays the pronunciation again, only while the answer is shown.
    pub fn replay_pronunciation(&mut self) {
        if !self.surface.ghost_visible() {
            return;
        }
        let pronunciation = self.queue.current().map(|item| item.pronunciation.trim().to_string());
        if let Some(text) = pronunciation.filter(|text| !text.is_empty()) {
            self.speak(&text);
        }
    }

    pub fn navigate(&mut self, direction: Direction) {
        self.surface.navigate(direction);
    }

    pub fn pointer(&mut self, phase: PointerPhase, point: InkPoint) {
        if self.queue.is_exhausted() {
            return;
        }
        self.surface.pointer(phase, point);
    }

    pub fn clear_active_slot(&mut self) {
        self.surface.clear_active();
    }

    pub fn restart(&mut self) {
        self.queue.restart(&self.records, &mut self.rng);
        self.stats = SessionStats::default();
        self.sync_surface();
        info!("[Session] Started with {} cards", self.queue.len());
    }

    /// Swaps in a new deck and starts over.
    pub fn load_deck(&mut self, records: Vec<VocabularyRecord>) {
        self.records = records;
        self.restart();
    }

    pub fn view(&self) -> SessionView<'_> {
        match self.queue.current() {
            Some(item) => SessionView::Card {
                item,
                slots: self.surface.state(),
                remaining: self.queue.remaining(),
            },
            None => SessionView::Done { stats: self.stats, deck_size: self.records.len() },
        }
    }

    pub fn is_done(&self) -> bool {
        self.queue.is_exhausted()
    }

    pub fn current(&self) -> Option<&QueueItem> {
        self.queue.current()
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn queue(&self) -> &PracticeQueue {
        &self.queue
    }

    pub fn surface(&self) -> &MultiSlotSurface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut MultiSlotSurface {
        &mut self.surface
    }

    pub fn speaker(&self) -> &S {
        &self.speaker
    }

    /// Replaces the playback backend, silencing the old one first.
    pub fn set_speaker(&mut self, speaker: S) {
        self.speaker.stop();
        self.speaker = speaker;
    }

    pub fn records(&self) -> &[VocabularyRecord] {
        &self.records
    }

    fn sync_surface(&mut self) {
        let front = self.queue.current().map(|item| item.front_text.as_str()).unwrap_or("");
        self.surface.reset_for_new_card(front);
    }

    fn speak(&mut self, text: &str) {
        if let Err(e) = self.speaker.speak(text) {
            warn!("[Session] Pronunciation playback failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{
        rngs::StdRng,
        SeedableRng,
    };

    use super::*;
    use crate::core::{
        models::ItemTag,
        XieziError,
    };

    #[derive(Default)]
    struct RecordingSpeaker {
        spoken: Vec<String>,
        fail: bool,
    }

    impl Speaker for RecordingSpeaker {
        fn speak(&mut self, text: &str) -> Result<(), XieziError> {
            if self.fail {
                return Err(XieziError::Speech("no audio device".to_string()));
            }
            self.spoken.push(text.to_string());
            Ok(())
        }
    }

    fn records() -> Vec<VocabularyRecord> {
        vec![
            VocabularyRecord::new("你好", "nǐ hǎo", "hello"),
            VocabularyRecord::new("谢谢", "xièxie", "thanks"),
            VocabularyRecord::new("水", "shuǐ", "water"),
        ]
    }

    fn session(speaker: RecordingSpeaker) -> SessionController<RecordingSpeaker, StdRng> {
        SessionController::new(records(), speaker, StdRng::seed_from_u64(11))
    }

    #[test]
    fn test_reveal_shows_ghosts_and_speaks() {
        let mut session = session(RecordingSpeaker::default());
        let expected = session.current().unwrap().pronunciation.clone();
        assert!(!session.surface().ghost_visible());

        session.reveal();

        assert!(session.surface().ghost_visible());
        assert_eq!(session.speaker().spoken, vec![expected]);
    }

    #[test]
    fn test_speech_failure_does_not_block_reveal() {
        let mut session = session(RecordingSpeaker { fail: true, ..Default::default() });
        session.reveal();
        assert!(session.surface().ghost_visible());

        session.grade(Grade::Correct);
        assert_eq!(session.queue().position(), 1);
    }

    #[test]
    fn test_grading_resets_surface_for_next_card() {
        let mut session = session(RecordingSpeaker::default());
        session.navigate(Direction::Right);
        session.pointer(PointerPhase::Down, InkPoint::new(1.0, 1.0));
        session.pointer(PointerPhase::Move, InkPoint::new(4.0, 4.0));
        session.reveal();

        session.grade(Grade::Incorrect);

        let next = session.current().unwrap().front_text.clone();
        let expected: [String; 4] = crate::core::segment(&next, 4).try_into().unwrap();
        let surface = session.surface();
        assert_eq!(surface.active_slot_index(), 0);
        assert!(!surface.ghost_visible());
        assert!((0..4).all(|i| !surface.slot(i).unwrap().has_ink()));
        assert_eq!(surface.state().display_units, expected);
    }

    #[test]
    fn test_hide_keeps_ink() {
        let mut session = session(RecordingSpeaker::default());
        session.pointer(PointerPhase::Down, InkPoint::new(1.0, 1.0));
        session.toggle_reveal();
        session.toggle_reveal();

        assert!(!session.surface().ghost_visible());
        assert!(session.surface().slot(0).unwrap().has_ink());
        assert_eq!(session.speaker().spoken.len(), 1);
    }

    #[test]
    fn test_replay_only_while_revealed() {
        let mut session = session(RecordingSpeaker::default());
        session.replay_pronunciation();
        assert!(session.speaker().spoken.is_empty());

        session.reveal();
        session.replay_pronunciation();
        assert_eq!(session.speaker().spoken.len(), 2);
    }

    #[test]
    fn test_empty_deck_starts_done() {
        let mut session =
            SessionController::new(Vec::new(), RecordingSpeaker::default(), StdRng::seed_from_u64(0));
        assert!(session.is_done());
        assert_eq!(
            session.view(),
            SessionView::Done { stats: SessionStats::default(), deck_size: 0 }
        );

        session.reveal();
        session.grade(Grade::Incorrect);
        assert!(session.speaker().spoken.is_empty());
        assert_eq!(session.queue().len(), 0);
    }

    #[test]
    fn test_done_then_restart() {
        let mut session = session(RecordingSpeaker::default());
        session.grade(Grade::Incorrect);
        while !session.is_done() {
            session.grade(Grade::Correct);
        }

        assert_eq!(session.stats(), SessionStats { graded: 5, correct: 4, incorrect: 1 });
        assert!(matches!(session.view(), SessionView::Done { deck_size: 3, .. }));

        // Grading once done changes nothing
        session.grade(Grade::Correct);
        assert_eq!(session.stats().graded, 5);

        session.restart();
        assert!(!session.is_done());
        assert_eq!(session.queue().len(), 3);
        assert_eq!(session.stats(), SessionStats::default());
        assert!(session.queue().items().iter().all(|item| item.tag == ItemTag::None));
    }

    #[test]
    fn test_load_deck_replaces_records() {
        let mut session = session(RecordingSpeaker::default());
        session.load_deck(vec![VocabularyRecord::new("山", "shān", "mountain")]);

        assert_eq!(session.records().len(), 1);
        match session.view() {
            SessionView::Card { item, slots, remaining } => {
                assert_eq!(item.front_text, "山");
                assert_eq!(slots.display_units[0], "山");
                assert_eq!(remaining, 1);
            }
            other => panic!("Expected a card, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_pronunciation_speaks_front_text() {
        let mut session = SessionController::new(
            vec![VocabularyRecord::new("山", "", "mountain")],
            RecordingSpeaker::default(),
            StdRng::seed_from_u64(0),
        );
        session.reveal();
        assert_eq!(session.speaker().spoken, vec!["山".to_string()]);
    }
}
