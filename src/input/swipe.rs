//! Drag gestures: a left-button press/release pair becomes a direction.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::game::Direction;

/// Terminal columns per grid cell; the renderer draws each cell two wide
const COLUMNS_PER_CELL: f64 = 2.0;

/// Direction of a drag by its dominant axis. Ties go to the vertical axis.
pub fn classify_swipe(dx: f64, dy: f64) -> Direction {
    if dx.abs() > dy.abs() {
        if dx > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if dy > 0.0 {
        Direction::Down
    } else {
        Direction::Up
    }
}

/// What a mouse event meant for the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Button went down; counts as the "first touch" start signal
    Press,
    /// Button released after moving
    Swipe(Direction),
    /// Button released where it went down
    Tap,
}

#[derive(Debug, Default)]
pub struct SwipeTracker {
    origin: Option<(u16, u16)>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_mouse_event(&mut self, event: MouseEvent) -> Option<Gesture> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.origin = Some((event.column, event.row));
                Some(Gesture::Press)
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let (column, row) = self.origin.take()?;
                let dx = (f64::from(event.column) - f64::from(column)) / COLUMNS_PER_CELL;
                let dy = f64::from(event.row) - f64::from(row);
                if dx == 0.0 && dy == 0.0 {
                    Some(Gesture::Tap)
                } else {
                    Some(Gesture::Swipe(classify_swipe(dx, dy)))
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_classify_dominant_axis() {
        assert_eq!(classify_swipe(5.0, 1.0), Direction::Right);
        assert_eq!(classify_swipe(-5.0, 1.0), Direction::Left);
        assert_eq!(classify_swipe(1.0, 5.0), Direction::Down);
        assert_eq!(classify_swipe(1.0, -5.0), Direction::Up);
    }

    #[test]
    fn test_classify_tie_is_vertical() {
        assert_eq!(classify_swipe(3.0, 3.0), Direction::Down);
        assert_eq!(classify_swipe(3.0, -3.0), Direction::Up);
    }

    #[test]
    fn test_drag_right() {
        let mut tracker = SwipeTracker::new();
        let down = MouseEventKind::Down(MouseButton::Left);
        let up = MouseEventKind::Up(MouseButton::Left);

        assert_eq!(tracker.handle_mouse_event(mouse(down, 10, 10)), Some(Gesture::Press));
        assert_eq!(
            tracker.handle_mouse_event(mouse(up, 20, 12)),
            Some(Gesture::Swipe(Direction::Right))
        );
    }

    #[test]
    fn test_column_scaling() {
        let mut tracker = SwipeTracker::new();
        let down = MouseEventKind::Down(MouseButton::Left);
        let up = MouseEventKind::Up(MouseButton::Left);

        // 6 columns is 3 cells, less than 4 rows
        tracker.handle_mouse_event(mouse(down, 10, 10));
        assert_eq!(
            tracker.handle_mouse_event(mouse(up, 16, 6)),
            Some(Gesture::Swipe(Direction::Up))
        );
    }

    #[test]
    fn test_tap_and_stray_release() {
        let mut tracker = SwipeTracker::new();
        let down = MouseEventKind::Down(MouseButton::Left);
        let up = MouseEventKind::Up(MouseButton::Left);

        tracker.handle_mouse_event(mouse(down, 4, 4));
        assert_eq!(tracker.handle_mouse_event(mouse(up, 4, 4)), Some(Gesture::Tap));
        // No press recorded
        assert_eq!(tracker.handle_mouse_event(mouse(up, 9, 4)), None);
        assert_eq!(
            tracker.handle_mouse_event(mouse(MouseEventKind::Moved, 1, 1)),
            None
        );
    }
}
