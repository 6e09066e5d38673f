//! Drag-to-resize height of the floating chat panel.
//!
//! The grip sits on the panel's top edge, so dragging upward grows it.

pub const DEFAULT_PANEL_HEIGHT: f64 = 420.0;
pub const MIN_PANEL_HEIGHT: f64 = 300.0;
pub const MAX_PANEL_HEIGHT: f64 = 700.0;

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragStart {
    pointer_y: f64,
    height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelResize {
    height: f64,
    drag: Option<DragStart>,
}

impl Default for PanelResize {
    fn default() -> Self {
        Self {
            height: DEFAULT_PANEL_HEIGHT,
            drag: None,
        }
    }
}

impl PanelResize {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn begin(&mut self, pointer_y: f64) {
        self.drag = Some(DragStart {
            pointer_y,
            height: self.height,
        });
    }

    /// Update the height for a pointer move. Moves outside a drag are ignored.
    pub fn drag_to(&mut self, pointer_y: f64) -> f64 {
        if let Some(start) = self.drag {
            let delta = start.pointer_y - pointer_y;
            self.height = (start.height + delta).clamp(MIN_PANEL_HEIGHT, MAX_PANEL_HEIGHT);
        }
        self.height
    }

    pub fn end(&mut self) {
        self.drag = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_up_grows() {
        let mut panel = PanelResize::new();
        panel.begin(500.0);
        assert_eq!(panel.drag_to(400.0), 520.0);
        panel.end();
        assert!(!panel.is_dragging());
        assert_eq!(panel.height(), 520.0);
    }

    #[test]
    fn test_height_is_clamped() {
        let mut panel = PanelResize::new();
        panel.begin(500.0);
        assert_eq!(panel.drag_to(-1000.0), MAX_PANEL_HEIGHT);
        assert_eq!(panel.drag_to(2000.0), MIN_PANEL_HEIGHT);
    }

    #[test]
    fn test_moves_without_drag_are_ignored() {
        let mut panel = PanelResize::new();
        assert_eq!(panel.drag_to(0.0), DEFAULT_PANEL_HEIGHT);
    }

    #[test]
    fn test_second_drag_starts_from_current_height() {
        let mut panel = PanelResize::new();
        panel.begin(500.0);
        panel.drag_to(450.0);
        panel.end();
        panel.begin(300.0);
        assert_eq!(panel.drag_to(290.0), 480.0);
    }
}
