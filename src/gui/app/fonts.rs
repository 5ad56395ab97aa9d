use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
    sync::Arc,
};

use eframe::egui;

const CJK_FONT_NAME: &str = "cjk";

fn system_font_candidates() -> Vec<PathBuf> {
    #[cfg(target_os = "macos")]
    let candidates = [
        "/System/Library/Fonts/PingFang.ttc",
        "/System/Library/Fonts/STHeiti Light.ttc",
        "/Library/Fonts/Arial Unicode.ttf",
    ];
    #[cfg(target_os = "windows")]
    let candidates = [
        r"C:\Windows\Fonts\msyh.ttc",
        r"C:\Windows\Fonts\simhei.ttf",
        r"C:\Windows\Fonts\simsun.ttc",
    ];
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let candidates = [
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
    ];

    candidates.iter().map(PathBuf::from).collect()
}

/// Registers a CJK-capable font ahead of egui's defaults.
///
/// The configured font wins; otherwise the first system font found is used.
/// Returns the path that was loaded, if any.
pub fn setup_fonts(ctx: &egui::Context, configured: Option<&Path>) -> Option<PathBuf> {
    let candidates = configured.map(Path::to_path_buf).into_iter().chain(system_font_candidates());

    for path in candidates {
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(_) => continue,
        };

        let mut fonts = egui::FontDefinitions::default();
        fonts
            .font_data
            .insert(CJK_FONT_NAME.to_owned(), Arc::new(egui::FontData::from_owned(bytes)));
        fonts
            .families
            .entry(egui::FontFamily::Proportional)
            .or_default()
            .insert(0, CJK_FONT_NAME.to_owned());
        fonts.families.entry(egui::FontFamily::Monospace).or_default().push(CJK_FONT_NAME.to_owned());
        ctx.set_fonts(fonts);

        log::info!("[Fonts] Using {}", path.display());
        return Some(path);
    }

    log::warn!("[Fonts] No CJK font found; set font_path in settings.json");
    None
}
