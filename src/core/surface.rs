//! Four drawing slots for one card, plus which one is active.

use log::debug;

use super::{
    canvas::{
        CanvasSlot,
        InkPoint,
        PointerPhase,
    },
    segmenter::segment,
};

pub const SLOT_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Snapshot of the surface a host needs to render one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotState {
    pub active_slot_index: usize,
    pub ghost_visible: bool,
    pub display_units: [String; SLOT_COUNT],
}

#[derive(Debug, Default)]
pub struct MultiSlotSurface {
    slots: [CanvasSlot; SLOT_COUNT],
    active: usize,
    ghost_visible: bool,
    units: [String; SLOT_COUNT],
}

impl MultiSlotSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn navigate(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.navigate_left(),
            Direction::Right => self.navigate_right(),
        }
    }

    pub fn navigate_left(&mut self) {
        self.active = (self.active + SLOT_COUNT - 1) % SLOT_COUNT;
    }

    pub fn navigate_right(&mut self) {
        self.active = (self.active + 1) % SLOT_COUNT;
    }

    /// Makes `index` the active slot. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < SLOT_COUNT {
            self.active = index;
        }
    }

    pub fn reset_for_new_card(&mut self, front_text: &str) {
        let units = segment(front_text, SLOT_COUNT);
        for (target, unit) in self.units.iter_mut().zip(units) {
            *target = unit;
        }
        for slot in &mut self.slots {
            slot.clear();
        }
        self.active = 0;
        self.ghost_visible = false;
        debug!("[Surface] reset for {:?} -> {:?}", front_text, self.units);
    }

    /// Shows or hides ghosts. Ink and the active slot are left alone.
    pub fn set_ghost_visible(&mut self, visible: bool) {
        self.ghost_visible = visible;
    }

    pub fn clear_active(&mut self) {
        self.slots[self.active].clear();
    }

    /// Routes a pointer event to the active slot.
    pub fn pointer(&mut self, phase: PointerPhase, point: InkPoint) {
        self.slots[self.active].handle_pointer(phase, point);
    }

    /// Ghost text for a slot, or `None` when nothing should be drawn.
    pub fn ghost_for(&self, index: usize) -> Option<&str> {
        let unit = self.units.get(index)?;
        if self.ghost_visible && !unit.is_empty() {
            Some(unit.as_str())
        } else {
            None
        }
    }

    pub fn active_slot_index(&self) -> usize {
        self.active
    }

    pub fn ghost_visible(&self) -> bool {
        self.ghost_visible
    }

    pub fn slot(&self, index: usize) -> Option<&CanvasSlot> {
        self.slots.get(index)
    }

    pub fn state(&self) -> SlotState {
        SlotState {
            active_slot_index: self.active,
            ghost_visible: self.ghost_visible,
            display_units: self.units.clone(),
        }
    }
}
