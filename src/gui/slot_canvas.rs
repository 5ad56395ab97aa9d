//! egui rendering and pointer capture for one drawing slot.

use eframe::egui::{
    self,
    Align2,
    FontId,
    Pos2,
    Rect,
    Sense,
    Shape,
    Stroke,
    StrokeKind,
};

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    theme::Theme,
};
use crate::core::{
    fit_size,
    CanvasSlot,
    InkPoint,
    PointerPhase,
};

const CORNER_RADIUS: f32 = 6.0;
const GHOST_PADDING: f32 = 10.0;

pub struct SlotCanvas<'a> {
    pub index: usize,
    pub slot: &'a CanvasSlot,
    pub ghost: Option<&'a str>,
    pub active: bool,
    pub side: f32,
    pub ink_width: f32,
    pub ghost_alpha: u8,
}

impl SlotCanvas<'_> {
    pub fn show(self, ui: &mut egui::Ui, theme: &Theme, actions: &mut ActionQueue) {
        let (response, painter) =
            ui.allocate_painter(egui::vec2(self.side, self.side), Sense::click_and_drag());
        let rect = response.rect;
        let ctx = ui.ctx().clone();

        painter.rect_filled(rect, CORNER_RADIUS, theme.slot_fill(&ctx));
        paint_guides(&painter, rect, theme.guide(&ctx));

        if let Some(unit) = self.ghost {
            let size = fit_size(
                |text, size| {
                    ui.fonts(|fonts| {
                        fonts
                            .layout_no_wrap(
                                text.to_string(),
                                FontId::proportional(size),
                                egui::Color32::WHITE,
                            )
                            .size()
                            .x
                    })
                },
                unit,
                rect.width(),
                rect.height(),
                GHOST_PADDING,
            );
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                unit,
                FontId::proportional(size as f32),
                theme.ghost(&ctx, self.ghost_alpha),
            );
        }

        let ink = Stroke::new(self.ink_width, theme.ink(&ctx));
        for stroke in self.slot.strokes() {
            let points: Vec<Pos2> = stroke.points().iter().map(|p| to_screen(rect, *p)).collect();
            match points.as_slice() {
                [] => {}
                [dot] => {
                    painter.circle_filled(*dot, self.ink_width / 2.0, ink.color);
                }
                _ => {
                    painter.add(Shape::line(points, ink));
                }
            }
        }

        let outline = if self.active {
            Stroke::new(2.5, theme.active_outline(&ctx))
        } else {
            Stroke::new(1.0, theme.slot_outline(&ctx))
        };
        painter.rect_stroke(rect, CORNER_RADIUS, outline, StrokeKind::Inside);

        self.capture_pointer(ui, &response, rect, actions);
    }

    // egui folds touch into pointer events, so a finger is seen exactly once here.
    fn capture_pointer(
        &self,
        ui: &egui::Ui,
        response: &egui::Response,
        rect: Rect,
        actions: &mut ActionQueue,
    ) {
        let pressed = ui.input(|i| i.pointer.primary_pressed());
        let pos = response.interact_pointer_pos();

        match pos {
            Some(pos) if response.is_pointer_button_down_on() => {
                let point = to_local(rect, pos);
                if pressed && rect.contains(pos) {
                    if !self.active {
                        actions.push(UiAction::SelectSlot(self.index));
                    }
                    actions.push(UiAction::Pointer { phase: PointerPhase::Down, point });
                } else if self.slot.is_drawing() && self.active {
                    let phase =
                        if rect.contains(pos) { PointerPhase::Move } else { PointerPhase::Leave };
                    actions.push(UiAction::Pointer { phase, point });
                }
            }
            _ => {
                if self.slot.is_drawing() && self.active {
                    let point = pos.map(|p| to_local(rect, p)).unwrap_or(InkPoint::new(0.0, 0.0));
                    actions.push(UiAction::Pointer { phase: PointerPhase::Up, point });
                }
            }
        }
    }
}

/// Dashed centre cross, the usual practice-grid guide.
fn paint_guides(painter: &egui::Painter, rect: Rect, color: egui::Color32) {
    let stroke = Stroke::new(1.0, color);
    let center = rect.center();
    painter.extend(Shape::dashed_line(
        &[Pos2::new(rect.left(), center.y), Pos2::new(rect.right(), center.y)],
        stroke,
        6.0,
        4.0,
    ));
    painter.extend(Shape::dashed_line(
        &[Pos2::new(center.x, rect.top()), Pos2::new(center.x, rect.bottom())],
        stroke,
        6.0,
        4.0,
    ));
}

fn to_local(rect: Rect, pos: Pos2) -> InkPoint {
    InkPoint::new(pos.x - rect.min.x, pos.y - rect.min.y)
}

fn to_screen(rect: Rect, point: InkPoint) -> Pos2 {
    Pos2::new(rect.min.x + point.x, rect.min.y + point.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(slot: &CanvasSlot, active: bool) -> Vec<UiAction> {
        let ctx = egui::Context::default();
        let theme = Theme::dracula();
        let mut actions = ActionQueue::new();

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                SlotCanvas {
                    index: 2,
                    slot,
                    ghost: Some("字"),
                    active,
                    side: 120.0,
                    ink_width: 6.0,
                    ghost_alpha: 60,
                }
                .show(ui, &theme, &mut actions);
            });
        });

        actions.drain().collect()
    }

    #[test]
    fn test_single_point_stroke_paints_as_dot() {
        let mut slot = CanvasSlot::new();
        slot.begin_stroke(InkPoint::new(30.0, 30.0));
        slot.end_stroke();

        assert!(render(&slot, true).is_empty());
    }

    #[test]
    fn test_released_pointer_ends_open_stroke() {
        let mut slot = CanvasSlot::new();
        slot.begin_stroke(InkPoint::new(10.0, 10.0));
        slot.extend_stroke(InkPoint::new(40.0, 40.0));

        let actions = render(&slot, true);
        assert_eq!(actions.len(), 1);
        assert!(matches!(actions[0], UiAction::Pointer { phase: PointerPhase::Up, .. }));

        // Inactive slots never report pointer phases
        assert!(render(&slot, false).is_empty());
    }
}
