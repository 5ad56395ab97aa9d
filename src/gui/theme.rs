use eframe::egui::{
    self,
    style::{
        Selection,
        WidgetVisuals,
        Widgets,
    },
    Color32,
    RichText,
    Stroke,
    Visuals,
};

#[derive(Clone)]
pub struct Theme {
    dark: ThemeDetails,
    light: ThemeDetails,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dracula()
    }
}

impl Theme {
    pub fn dracula() -> Self {
        Theme { dark: ThemeDetails::dracula(), light: ThemeDetails::dracula_light() }
    }

    fn details(&self, ctx: &egui::Context) -> &ThemeDetails {
        if ctx.style().visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.details(ctx).purple)
    }

    pub fn ink(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).foreground
    }

    /// Faint reference color for ghost characters.
    pub fn ghost(&self, ctx: &egui::Context, alpha: u8) -> Color32 {
        let base = self.details(ctx).comment;
        Color32::from_rgba_unmultiplied(base.r(), base.g(), base.b(), alpha)
    }

    pub fn slot_fill(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).background_darker
    }

    pub fn slot_outline(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).background_lighter
    }

    pub fn active_outline(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).cyan
    }

    pub fn guide(&self, ctx: &egui::Context) -> Color32 {
        blend_colors(self.details(ctx).background_darker, self.details(ctx).comment, 0.25)
    }

    pub fn correct(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).green
    }

    pub fn incorrect(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).red
    }

    pub fn accent(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).orange
    }
}

#[derive(Clone)]
pub struct ThemeDetails {
    background: Color32,
    foreground: Color32,
    selection: Color32,
    comment: Color32,
    red: Color32,
    orange: Color32,
    green: Color32,
    purple: Color32,
    cyan: Color32,
    background_darker: Color32,
    background_dark: Color32,
    background_light: Color32,
    background_lighter: Color32,
}

impl ThemeDetails {
    //Colors from:
    //https://github.com/ShabbirHasan1/egui_dracula/blob/master/src/lib.rs
    fn dracula() -> Self {
        Self {
            background: Color32::from_rgb(0x28, 0x2a, 0x36),
            foreground: Color32::from_rgb(0xf8, 0xf8, 0xf2),
            selection: Color32::from_rgb(0x44, 0x47, 0x5a),
            comment: Color32::from_rgb(0x62, 0x72, 0xa4),
            red: Color32::from_rgb(0xff, 0x55, 0x55),
            orange: Color32::from_rgb(0xff, 0xb8, 0x6c),
            green: Color32::from_rgb(0x50, 0xfa, 0x7b),
            purple: Color32::from_rgb(189, 147, 249),
            cyan: Color32::from_rgb(139, 233, 253),
            background_darker: Color32::from_rgb(25, 26, 33),
            background_dark: Color32::from_rgb(33, 35, 53),
            background_light: Color32::from_rgb(52, 54, 66),
            background_lighter: Color32::from_rgb(66, 69, 80),
        }
    }

    fn dracula_light() -> Self {
        Self {
            background: Color32::from_rgb(248, 248, 242),
            foreground: Color32::from_rgb(40, 42, 54),
            selection: Color32::from_rgb(200, 200, 220),
            comment: Color32::from_rgb(120, 130, 160),
            red: Color32::from_rgb(200, 80, 80),
            orange: Color32::from_rgb(220, 150, 90),
            green: Color32::from_rgb(60, 170, 100),
            purple: Color32::from_rgb(150, 120, 220),
            cyan: Color32::from_rgb(80, 190, 230),
            background_darker: Color32::from_rgb(255, 255, 255), // Paper for the slots
            background_dark: Color32::from_rgb(245, 245, 240),
            background_light: Color32::from_rgb(235, 235, 230),
            background_lighter: Color32::from_rgb(210, 210, 205),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

pub fn blend_colors(color_a: Color32, color_b: Color32, t: f32) -> Color32 {
    let blend_channel = |a: u8, b: u8| ((1.0 - t) * (a as f32) + t * (b as f32)).round() as u8;
    Color32::from_rgba_unmultiplied(
        blend_channel(color_a.r(), color_b.r()),
        blend_channel(color_a.g(), color_b.g()),
        blend_channel(color_a.b(), color_b.b()),
        blend_channel(color_a.a(), color_b.a()),
    )
}

fn widget(theme: &ThemeDetails, bg_fill: Color32, outline: Color32, base: WidgetVisuals) -> WidgetVisuals {
    WidgetVisuals {
        bg_fill,
        weak_bg_fill: bg_fill,
        bg_stroke: Stroke { color: outline, ..base.bg_stroke },
        fg_stroke: Stroke { color: theme.foreground, ..base.fg_stroke },
        ..base
    }
}

fn set_theme_variant(ctx: &egui::Context, theme: &ThemeDetails, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            widgets: Widgets {
                noninteractive: widget(
                    theme,
                    theme.background,
                    theme.background_dark,
                    default.widgets.noninteractive,
                ),
                inactive: widget(
                    theme,
                    theme.background_light,
                    theme.background_dark,
                    default.widgets.inactive,
                ),
                hovered: widget(theme, theme.selection, theme.cyan, default.widgets.hovered),
                active: widget(theme, theme.selection, theme.cyan, default.widgets.active),
                open: widget(theme, theme.background_dark, theme.purple, default.widgets.open),
            },
            selection: Selection {
                bg_fill: theme.selection,
                stroke: Stroke { color: theme.foreground, ..default.selection.stroke },
            },
            hyperlink_color: theme.cyan,
            extreme_bg_color: theme.background_darker,
            error_fg_color: theme.red,
            warn_fg_color: theme.orange,
            window_fill: theme.background,
            panel_fill: theme.background_dark,
            ..default
        },
    );
}
