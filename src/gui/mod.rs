pub mod actions;
pub mod app;
pub mod card_panel;
pub mod notice_modal;
pub mod settings;
pub mod slot_canvas;
pub mod theme;
pub mod top_bar;

pub use app::{
    LaunchOptions,
    TrainerApp,
};
