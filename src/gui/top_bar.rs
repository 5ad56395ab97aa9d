use eframe::egui;

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    settings::SettingsData,
};

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        settings: &SettingsData,
        deck_label: &str,
        audio_available: bool,
        muted: bool,
        actions: &mut ActionQueue,
    ) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Deck…").clicked() {
                        actions.push(UiAction::OpenDeck);
                    }
                    if ui.button("Sample Deck").clicked() {
                        actions.push(UiAction::UseSampleDeck);
                    }
                    if ui.button("Restart Session").clicked() {
                        actions.push(UiAction::Restart);
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    let mut dark_mode = settings.dark_mode;
                    if ui.checkbox(&mut dark_mode, "Dark mode").changed() {
                        actions.push(UiAction::SetDarkMode(dark_mode));
                    }
                    let mut audio = settings.speech.enabled && !muted;
                    let toggle = ui
                        .add_enabled(!muted, egui::Checkbox::new(&mut audio, "Pronunciation audio"))
                        .on_disabled_hover_text("Muted with --mute for this run");
                    if toggle.changed() {
                        actions.push(UiAction::SetAudio(audio));
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Self::show_status_indicators(ui, audio_available);
                    ui.add_space(8.0);
                    ui.small(deck_label);
                });
            });
        });
    }

    fn show_status_indicators(ui: &mut egui::Ui, audio_available: bool) {
        let audio_color = if audio_available {
            egui::Color32::from_rgb(0, 200, 0)
        } else {
            egui::Color32::from_rgb(200, 80, 80)
        };

        let audio_tooltip =
            if audio_available { "Pronunciation audio on" } else { "Pronunciation audio off" };
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.small(egui::RichText::new("●").color(audio_color)).on_hover_text(audio_tooltip);
            ui.small("Audio").on_hover_text(audio_tooltip);
        });
    }
}
