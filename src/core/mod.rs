pub mod canvas;
pub mod errors;
pub mod ghost_fit;
pub mod models;
pub mod scheduler;
pub mod segmenter;
pub mod session;
pub mod surface;

pub use canvas::{
    CanvasSlot,
    InkPoint,
    InkStroke,
    PointerPhase,
};
pub use errors::XieziError;
pub use ghost_fit::{
    fit_size,
    MIN_FONT_PX,
};
pub use models::{
    ItemId,
    ItemTag,
    QueueItem,
    SourceId,
    VocabularyRecord,
};
pub use scheduler::PracticeQueue;
pub use segmenter::segment;
pub use session::{
    Grade,
    SessionController,
    SessionStats,
    SessionView,
};
pub use surface::{
    Direction,
    MultiSlotSurface,
    SlotState,
    SLOT_COUNT,
};
