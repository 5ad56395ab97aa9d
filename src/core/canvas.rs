//! Ink layer of a single drawing slot.
//!
//! A slot only keeps what it needs to repaint the current ink. Ghost text is
//! not stored here; the owning surface derives it from the current card each
//! time it is drawn.

/// Point in slot-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InkPoint {
    pub x: f32,
    pub y: f32,
}

impl InkPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InkStroke {
    points: Vec<InkPoint>,
}

impl InkStroke {
    pub fn points(&self) -> &[InkPoint] {
        &self.points
    }

    /// Consecutive point pairs, drawn as connected line segments.
    pub fn segments(&self) -> impl Iterator<Item = (InkPoint, InkPoint)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

/// Pointer gesture phases. Touch input is delivered through the same phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Leave,
}

#[derive(Debug, Default)]
pub struct CanvasSlot {
    strokes: Vec<InkStroke>,
    drawing: bool,
}

impl CanvasSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_pointer(&mut self, phase: PointerPhase, point: InkPoint) {
        match phase {
            PointerPhase::Down => self.begin_stroke(point),
            PointerPhase::Move => self.extend_stroke(point),
            PointerPhase::Up | PointerPhase::Leave => self.end_stroke(),
        }
    }

    pub fn begin_stroke(&mut self, point: InkPoint) {
        self.strokes.push(InkStroke { points: vec![point] });
        self.drawing = true;
    }

    /// Moves without a preceding pointer-down are ignored.
    pub fn extend_stroke(&mut self, point: InkPoint) {
        if !self.drawing {
            return;
        }
        if let Some(stroke) = self.strokes.last_mut() {
            if stroke.points.last() != Some(&point) {
                stroke.points.push(point);
            }
        }
    }

    pub fn end_stroke(&mut self) {
        self.drawing = false;
    }

    /// Erases all ink and abandons any stroke in progress.
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.drawing = false;
    }

    pub fn has_ink(&self) -> bool {
        !self.strokes.is_empty()
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn strokes(&self) -> &[InkStroke] {
        &self.strokes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> InkPoint {
        InkPoint::new(x, y)
    }

    #[test]
    fn test_stroke_lifecycle() {
        let mut slot = CanvasSlot::new();
        assert!(!slot.has_ink());

        slot.handle_pointer(PointerPhase::Down, p(0.0, 0.0));
        slot.handle_pointer(PointerPhase::Move, p(5.0, 0.0));
        slot.handle_pointer(PointerPhase::Move, p(5.0, 5.0));
        assert!(slot.is_drawing());
        slot.handle_pointer(PointerPhase::Up, p(5.0, 5.0));

        assert!(!slot.is_drawing());
        assert_eq!(slot.strokes().len(), 1);
        let segments: Vec<_> = slot.strokes()[0].segments().collect();
        assert_eq!(segments, vec![(p(0.0, 0.0), p(5.0, 0.0)), (p(5.0, 0.0), p(5.0, 5.0))]);
    }

    #[test]
    fn test_move_without_down_is_ignored() {
        let mut slot = CanvasSlot::new();
        slot.handle_pointer(PointerPhase::Move, p(1.0, 1.0));
        assert!(!slot.has_ink());

        slot.begin_stroke(p(0.0, 0.0));
        slot.handle_pointer(PointerPhase::Leave, p(9.0, 9.0));
        slot.extend_stroke(p(3.0, 3.0));
        assert_eq!(slot.strokes()[0].points(), &[p(0.0, 0.0)]);
    }

    #[test]
    fn test_repeated_point_not_duplicated() {
        let mut slot = CanvasSlot::new();
        slot.begin_stroke(p(2.0, 2.0));
        slot.extend_stroke(p(2.0, 2.0));
        slot.extend_stroke(p(4.0, 2.0));
        assert_eq!(slot.strokes()[0].points().len(), 2);
    }

    #[test]
    fn test_clear_abandons_stroke_in_progress() {
        let mut slot = CanvasSlot::new();
        slot.begin_stroke(p(0.0, 0.0));
        slot.extend_stroke(p(1.0, 1.0));
        slot.clear();

        assert!(!slot.has_ink());
        assert!(!slot.is_drawing());

        // Continuing the old gesture must not resurrect ink
        slot.extend_stroke(p(2.0, 2.0));
        assert!(!slot.has_ink());
    }
}
