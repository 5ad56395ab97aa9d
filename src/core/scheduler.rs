//! Practice queue and the reinsertion rules applied on grading.
//!
//! The queue only changes through [`PracticeQueue::advance_on_correct`],
//! [`PracticeQueue::advance_on_incorrect`] and [`PracticeQueue::restart`].
//! Each runs to completion under `&mut self`, so a reader holding `&self`
//! never observes a half-spliced queue.

use log::debug;
use rand::{
    seq::SliceRandom,
    Rng,
};

use super::models::{
    ItemTag,
    QueueItem,
    SourceId,
    VocabularyRecord,
};

/// How many cards ahead of the cursor a missed item comes back.
pub const SHORT_REINSERT_OFFSET: usize = 4;

#[derive(Debug, Default)]
pub struct PracticeQueue {
    items: Vec<QueueItem>,
    position: usize,
}

impl PracticeQueue {
    /// Queue with one item per record in shuffled order.
    pub fn new<R: Rng + ?Sized>(records: &[VocabularyRecord], rng: &mut R) -> Self {
        let mut queue = Self::default();
        queue.restart(records, rng);
        queue
    }

    /// Queue that keeps the records in the given order.
    pub fn from_ordered(records: &[VocabularyRecord]) -> Self {
        let items = records
            .iter()
            .enumerate()
            .map(|(index, record)| QueueItem::from_record(SourceId(index), record))
            .collect();
        Self { items, position: 0 }
    }

    pub fn current(&self) -> Option<&QueueItem> {
        self.items.get(self.position)
    }

    pub fn advance_on_correct(&mut self) {
        if self.is_exhausted() {
            return;
        }
        self.position += 1;
    }

    /// Schedules two more attempts of the current item and moves past it.
    ///
    /// The short retry is clamped against the length before the end copy is
    /// appended.
    pub fn advance_on_incorrect(&mut self) {
        let Some(current) = self.current() else {
            return;
        };
        let short = current.reinserted(ItemTag::ScheduledShort);
        let end = current.reinserted(ItemTag::ScheduledEnd);

        let short_index = (self.position + SHORT_REINSERT_OFFSET).min(self.items.len());
        self.items.insert(short_index, short);
        self.items.push(end);
        debug!(
            "[Scheduler] missed {:?} at {}: retry at {}, final retry at {}",
            self.items[self.position].front_text,
            self.position,
            short_index,
            self.items.len() - 1
        );

        self.position += 1;
    }

    pub fn restart<R: Rng + ?Sized>(&mut self, records: &[VocabularyRecord], rng: &mut R) {
        let mut items: Vec<QueueItem> = records
            .iter()
            .enumerate()
            .map(|(index, record)| QueueItem::from_record(SourceId(index), record))
            .collect();
        items.shuffle(rng);

        self.items = items;
        self.position = 0;
    }

    pub fn is_exhausted(&self) -> bool {
        self.position >= self.items.len()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.items.len() - self.position
    }

    pub fn items(&self) -> &[QueueItem] {
        &self.items
    }
}
