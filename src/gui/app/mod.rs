mod fonts;

use std::{
    mem,
    path::{
        Path,
        PathBuf,
    },
};

use eframe::egui;
use rand::{
    rngs::StdRng,
    SeedableRng,
};

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    card_panel::{
        show_done,
        CardPanel,
    },
    notice_modal::NoticeModal,
    settings::{
        SettingsData,
        SETTINGS_FILE,
    },
    theme::{
        set_theme,
        Theme,
    },
    top_bar::TopBar,
};
use crate::{
    core::{
        Direction,
        Grade,
        SessionController,
        SessionView,
        VocabularyRecord,
    },
    deck,
    persistence::{
        load_json_or_default,
        save_json,
    },
    speech::{
        self,
        Speaker,
        SpeechSettings,
    },
};

/// Startup choices that override the stored settings for one run.
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    pub deck: Option<PathBuf>,
    pub seed: Option<u64>,
    pub mute: bool,
}

pub struct TrainerApp {
    session: SessionController<Box<dyn Speaker>, StdRng>,
    deck_label: String,

    // Configuration
    settings_data: SettingsData,
    muted: bool,

    // UI State
    theme: Theme,
    actions: ActionQueue,
    notice: NoticeModal,
}

impl TrainerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, launch: LaunchOptions) -> Self {
        let mut settings_data = load_json_or_default::<SettingsData>(SETTINGS_FILE);
        let mut notice = NoticeModal::new();

        fonts::setup_fonts(&cc.egui_ctx, settings_data.font_path.as_deref());

        let theme = Theme::dracula();
        set_theme(&cc.egui_ctx, &theme);
        cc.egui_ctx.set_theme(if settings_data.dark_mode {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });

        let from_cli = launch.deck.is_some();
        let (records, deck_label) = match launch.deck.or_else(|| settings_data.last_deck.clone()) {
            Some(path) => match deck::load_csv(&path) {
                Ok(records) => {
                    if from_cli {
                        settings_data.last_deck = Some(path.clone());
                    }
                    (records, deck_name(&path))
                }
                Err(e) => {
                    log::warn!("[Deck] Failed to load {}: {}", path.display(), e);
                    notice.show_notice(format!(
                        "Could not load {}: {}\nUsing the sample deck instead.",
                        path.display(),
                        e
                    ));
                    (deck::sample_deck(), "Sample deck".to_string())
                }
            },
            None => (deck::sample_deck(), "Sample deck".to_string()),
        };

        let rng = match launch.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let speaker = speech::from_settings(&settings_data.speech, launch.mute);
        let session = SessionController::new(records, speaker, rng);

        let app = Self {
            session,
            deck_label,
            settings_data,
            muted: launch.mute,
            theme,
            actions: ActionQueue::new(),
            notice,
        };
        if from_cli {
            app.save_settings();
        }
        app
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        if self.notice.is_open() {
            return;
        }

        let done = self.session.is_done();
        let actions = &mut self.actions;
        ctx.input_mut(|i| {
            if done {
                if i.key_pressed(egui::Key::R) {
                    actions.push(UiAction::Restart);
                }
                return;
            }

            if i.key_pressed(egui::Key::ArrowLeft) {
                actions.push(UiAction::Navigate(Direction::Left));
            }
            if i.key_pressed(egui::Key::ArrowRight) {
                actions.push(UiAction::Navigate(Direction::Right));
            }
            // Consumed so a focused button does not also fire
            if i.consume_key(egui::Modifiers::NONE, egui::Key::Space) {
                actions.push(UiAction::ToggleReveal);
            }
            if i.key_pressed(egui::Key::Num1) {
                actions.push(UiAction::Grade(Grade::Incorrect));
            }
            if i.key_pressed(egui::Key::Num2) {
                actions.push(UiAction::Grade(Grade::Correct));
            }
            if i.key_pressed(egui::Key::Delete) {
                actions.push(UiAction::ClearSlot);
            }
        });
    }

    fn handle_file_drops(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input_mut(|i| mem::take(&mut i.raw.dropped_files));
        if let Some(path) = dropped
            .iter()
            .filter_map(|f| f.path.as_deref())
            .find(|p| p.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("csv")))
        {
            self.open_deck(path.to_path_buf());
        }
    }

    fn process_actions(&mut self, ctx: &egui::Context) {
        let actions: Vec<UiAction> = self.actions.drain().collect();
        for action in actions {
            match action {
                UiAction::ToggleReveal => self.session.toggle_reveal(),
                UiAction::ReplayPronunciation => self.session.replay_pronunciation(),
                UiAction::Grade(grade) => self.session.grade(grade),
                UiAction::Restart => self.session.restart(),
                UiAction::Navigate(direction) => self.session.navigate(direction),
                UiAction::SelectSlot(index) => self.session.surface_mut().select(index),
                UiAction::Pointer { phase, point } => self.session.pointer(phase, point),
                UiAction::ClearSlot => self.session.clear_active_slot(),
                UiAction::OpenDeck => {
                    if let Some(path) =
                        rfd::FileDialog::new().add_filter("CSV deck", &["csv", "txt"]).pick_file()
                    {
                        self.open_deck(path);
                    }
                }
                UiAction::UseSampleDeck => {
                    self.replace_deck(deck::sample_deck(), "Sample deck".to_string());
                    self.settings_data.last_deck = None;
                    self.save_settings();
                }
                UiAction::SetDarkMode(dark_mode) => {
                    self.settings_data.dark_mode = dark_mode;
                    ctx.set_theme(if dark_mode { egui::Theme::Dark } else { egui::Theme::Light });
                    self.save_settings();
                }
                UiAction::SetAudio(enabled) => {
                    if !apply_audio_toggle(&mut self.settings_data.speech, enabled, self.muted) {
                        continue;
                    }
                    self.session.set_speaker(speech::from_settings(
                        &self.settings_data.speech,
                        self.muted,
                    ));
                    self.save_settings();
                }
            }
        }
    }

    fn open_deck(&mut self, path: PathBuf) {
        match deck::load_csv(&path) {
            Ok(records) => {
                self.replace_deck(records, deck_name(&path));
                self.settings_data.last_deck = Some(path);
                self.save_settings();
            }
            Err(e) => {
                log::warn!("[Deck] Failed to load {}: {}", path.display(), e);
                self.notice.show_notice(format!("Could not load {}: {}", path.display(), e));
            }
        }
    }

    fn replace_deck(&mut self, records: Vec<VocabularyRecord>, label: String) {
        self.session.load_deck(records);
        self.deck_label = label;
    }

    fn save_settings(&self) {
        if let Err(e) = save_json(&self.settings_data, SETTINGS_FILE) {
            log::warn!("[Settings] Failed to save settings: {}", e);
        }
    }
}

/// `--mute` pins audio off for the run, so the stored preference is left alone.
fn apply_audio_toggle(speech: &mut SpeechSettings, enabled: bool, muted: bool) -> bool {
    if muted {
        return false;
    }
    speech.enabled = enabled;
    true
}

fn deck_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| "Unknown deck".to_string())
}

impl eframe::App for TrainerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_file_drops(ctx);
        self.handle_keys(ctx);

        TopBar::show(
            ctx,
            &self.settings_data,
            &self.deck_label,
            self.session.speaker().is_available(),
            self.muted,
            &mut self.actions,
        );

        egui::CentralPanel::default().show(ctx, |ui| match self.session.view() {
            SessionView::Card { item, remaining, .. } => {
                CardPanel {
                    item,
                    surface: self.session.surface(),
                    remaining,
                    stats: self.session.stats(),
                }
                .show(ui, &self.theme, &self.settings_data, &mut self.actions);
            }
            SessionView::Done { stats, deck_size } => {
                show_done(ui, &self.theme, stats, deck_size, &mut self.actions);
            }
        });

        self.notice.show(ctx);
        self.process_actions(ctx);
    }
}
