use serde::{
    Deserialize,
    Serialize,
};
use uuid::Uuid;

/// One vocabulary entry as supplied by a deck.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VocabularyRecord {
    pub front_text: String,    // Characters the learner writes
    pub pronunciation: String, // Reading, also what gets spoken
    pub meaning: String,       // Gloss shown on the card
}

impl VocabularyRecord {
    pub fn new(
        front_text: impl Into<String>,
        pronunciation: impl Into<String>,
        meaning: impl Into<String>,
    ) -> Self {
        Self {
            front_text: front_text.into(),
            pronunciation: pronunciation.into(),
            meaning: meaning.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(Uuid);

impl ItemId {
    pub fn fresh() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Position of the record in the deck the session was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourceId(pub usize);

/// Why an item sits in the queue. Provenance only, never read by the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ItemTag {
    #[default]
    None,
    ScheduledShort,
    ScheduledEnd,
}

impl ItemTag {
    pub fn label(&self) -> &'static str {
        match self {
            ItemTag::None => "",
            ItemTag::ScheduledShort => "retry",
            ItemTag::ScheduledEnd => "final retry",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueItem {
    pub item_id: ItemId,
    pub source_id: SourceId,
    pub front_text: String,
    pub pronunciation: String,
    pub meaning: String,
    pub tag: ItemTag,
}

impl QueueItem {
    pub fn from_record(source_id: SourceId, record: &VocabularyRecord) -> Self {
        Self {
            item_id: ItemId::fresh(),
            source_id,
            front_text: record.front_text.clone(),
            pronunciation: record.pronunciation.clone(),
            meaning: record.meaning.clone(),
            tag: ItemTag::None,
        }
    }

    /// Copy of this item with a new identity, used for reinsertion.
    pub fn reinserted(&self, tag: ItemTag) -> Self {
        Self { item_id: ItemId::fresh(), tag, ..self.clone() }
    }
}
