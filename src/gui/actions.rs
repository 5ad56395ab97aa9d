use crate::core::{
    Direction,
    Grade,
    InkPoint,
    PointerPhase,
};

// A simple ui action queue system so we don't need to pass mutable references to ui functions
#[derive(Debug, Clone)]
pub enum UiAction {
    // Card
    ToggleReveal,
    ReplayPronunciation,
    Grade(Grade),
    Restart,

    // Slots
    Navigate(Direction),
    SelectSlot(usize),
    Pointer { phase: PointerPhase, point: InkPoint },
    ClearSlot,

    // Deck
    OpenDeck,
    UseSampleDeck,

    // Settings
    SetDarkMode(bool),
    SetAudio(bool),
}

pub struct ActionQueue {
    actions: Vec<UiAction>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self { actions: Vec::new() }
    }

    pub fn push(&mut self, action: UiAction) {
        self.actions.push(action);
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, UiAction> {
        self.actions.drain(..)
    }
}

impl Default for ActionQueue {
    fn default() -> Self {
        Self::new()
    }
}
