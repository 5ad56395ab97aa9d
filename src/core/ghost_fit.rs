pub const MIN_FONT_PX: u32 = 12;
const SHRINK_STEP_PX: u32 = 2;

/// Largest font size (in whole pixels) at which `unit` fits inside the box.
///
/// Starts from the inner square of the box and shrinks in 2px steps until
/// the measured width and the size itself fit the padded box. Never goes
/// below [`MIN_FONT_PX`].
pub fn fit_size<F>(mut measure_width: F, unit: &str, box_w: f32, box_h: f32, padding: f32) -> u32
where
    F: FnMut(&str, f32) -> f32,
{
    let inner_w = box_w - 2.0 * padding;
    let inner_h = box_h - 2.0 * padding;

    let initial = inner_w.min(inner_h).floor();
    let mut size = if initial.is_finite() && initial > MIN_FONT_PX as f32 {
        initial as u32
    } else {
        MIN_FONT_PX
    };

    if unit.is_empty() {
        return size;
    }

    while size > MIN_FONT_PX
        && (measure_width(unit, size as f32) > inner_w || size as f32 > inner_h)
    {
        size = size.saturating_sub(SHRINK_STEP_PX).max(MIN_FONT_PX);
    }

    size
}
