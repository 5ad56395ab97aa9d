use eframe::egui::{
    self,
    RichText,
};

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    settings::SettingsData,
    slot_canvas::SlotCanvas,
    theme::Theme,
};
use crate::core::{
    Direction,
    Grade,
    ItemTag,
    MultiSlotSurface,
    QueueItem,
    SessionStats,
    SLOT_COUNT,
};

const MAX_SLOT_SIDE: f32 = 220.0;
const MIN_SLOT_SIDE: f32 = 80.0;

pub struct CardPanel<'a> {
    pub item: &'a QueueItem,
    pub surface: &'a MultiSlotSurface,
    pub remaining: usize,
    pub stats: SessionStats,
}

impl CardPanel<'_> {
    pub fn show(
        self,
        ui: &mut egui::Ui,
        theme: &Theme,
        settings: &SettingsData,
        actions: &mut ActionQueue,
    ) {
        let ctx = ui.ctx().clone();
        let revealed = self.surface.ghost_visible();

        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                ui.label(format!("Card {} · {} left", self.stats.graded + 1, self.remaining));
                if self.item.tag != ItemTag::None {
                    ui.label(RichText::new(self.item.tag.label()).color(theme.accent(&ctx)));
                }
            });

            ui.add_space(12.0);
            ui.label(RichText::new(&self.item.meaning).size(28.0));

            let pronunciation = if revealed { self.item.pronunciation.as_str() } else { "· · ·" };
            ui.label(theme.heading(&ctx, pronunciation).size(20.0));
            ui.add_space(16.0);

            let spacing = ui.spacing().item_spacing.x;
            let side = ((ui.available_width() - spacing * (SLOT_COUNT as f32 - 1.0))
                / SLOT_COUNT as f32)
                .clamp(MIN_SLOT_SIDE, MAX_SLOT_SIDE);

            let row_width = side * SLOT_COUNT as f32 + spacing * (SLOT_COUNT as f32 - 1.0);
            ui.allocate_ui_with_layout(
                egui::vec2(row_width, side),
                egui::Layout::left_to_right(egui::Align::Center),
                |ui| {
                    for index in 0..SLOT_COUNT {
                        let Some(slot) = self.surface.slot(index) else {
                            continue;
                        };
                        SlotCanvas {
                            index,
                            slot,
                            ghost: self.surface.ghost_for(index),
                            active: index == self.surface.active_slot_index(),
                            side,
                            ink_width: settings.ink_width,
                            ghost_alpha: settings.ghost_alpha,
                        }
                        .show(ui, theme, actions);
                    }
                },
            );

            ui.add_space(10.0);
            ui.horizontal(|ui| {
                if ui.button("◀").on_hover_text("Previous slot (←)").clicked() {
                    actions.push(UiAction::Navigate(Direction::Left));
                }
                ui.label(format!("{} / {}", self.surface.active_slot_index() + 1, SLOT_COUNT));
                if ui.button("▶").on_hover_text("Next slot (→)").clicked() {
                    actions.push(UiAction::Navigate(Direction::Right));
                }
                ui.add_space(12.0);
                if ui.button("Erase").on_hover_text("Clear the active slot (Delete)").clicked() {
                    actions.push(UiAction::ClearSlot);
                }
            });

            ui.add_space(16.0);
            ui.horizontal(|ui| {
                let reveal_text = if revealed { "Hide Answer" } else { "Show Answer" };
                if ui.button(reveal_text).on_hover_text("Space").clicked() {
                    actions.push(UiAction::ToggleReveal);
                }
                if revealed && ui.button("🔊").on_hover_text("Play pronunciation").clicked() {
                    actions.push(UiAction::ReplayPronunciation);
                }

                ui.add_space(24.0);
                let incorrect = egui::Button::new(
                    RichText::new("✗ Incorrect").color(theme.incorrect(&ctx)),
                );
                if ui.add(incorrect).on_hover_text("1").clicked() {
                    actions.push(UiAction::Grade(Grade::Incorrect));
                }
                let correct =
                    egui::Button::new(RichText::new("✓ Correct").color(theme.correct(&ctx)));
                if ui.add(correct).on_hover_text("2").clicked() {
                    actions.push(UiAction::Grade(Grade::Correct));
                }
            });
        });
    }
}

pub fn show_done(
    ui: &mut egui::Ui,
    theme: &Theme,
    stats: SessionStats,
    deck_size: usize,
    actions: &mut ActionQueue,
) {
    let ctx = ui.ctx().clone();
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        if deck_size == 0 {
            ui.label(theme.heading(&ctx, "This deck has no cards").size(26.0));
            ui.add_space(8.0);
            ui.label("Open a CSV deck from the File menu or switch to the sample deck.");
        } else {
            ui.label(theme.heading(&ctx, "Session complete").size(26.0));
            ui.add_space(12.0);
            ui.label(format!("{} cards in deck · {} gradings", deck_size, stats.graded));
            ui.label(
                RichText::new(format!("✓ {} correct", stats.correct)).color(theme.correct(&ctx)),
            );
            ui.label(
                RichText::new(format!("✗ {} incorrect", stats.incorrect))
                    .color(theme.incorrect(&ctx)),
            );
        }

        ui.add_space(20.0);
        if ui.button("Restart").on_hover_text("R").clicked() {
            actions.push(UiAction::Restart);
        }
    });
}
