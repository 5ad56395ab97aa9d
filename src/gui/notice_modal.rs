use eframe::egui;

pub struct NoticeModal {
    open: bool,
    message: String,
}

impl NoticeModal {
    pub fn new() -> Self {
        Self { open: false, message: String::new() }
    }

    pub fn show_notice(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        if !self.open {
            return;
        }

        let modal = egui::Modal::new(egui::Id::new("notice_modal")).show(ctx, |ui| {
            ui.set_width(380.0);
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("ℹ").size(24.0).color(egui::Color32::LIGHT_BLUE));
                ui.label(egui::RichText::new(&self.message).size(14.0));
            });

            ui.add_space(15.0);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("OK").clicked() {
                    ui.close();
                }
            });
        });

        if modal.should_close() {
            self.open = false;
            self.message.clear();
        }
    }
}

impl Default for NoticeModal {
    fn default() -> Self {
        Self::new()
    }
}
