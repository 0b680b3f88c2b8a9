//! Column focus tracking.
//!
//! The tracker maps directional keys to focus changes between columns and
//! stays quiet while a drag gesture is in progress, so arrow keys are left to
//! the drag surface.

use log::*;

/// Directional intent decoded from a key press.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum NavKey {
    Left,
    Right,
    Other,
}

/// Whether focus navigation is currently allowed.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    DragActive,
}

/// Rendering collaborator that owns the real input focus.
///
pub trait FocusSurface<H> {
    /// Place input focus on the designated focusable element of a column.
    fn focus(&mut self, index: usize, handle: &H);
}

/// Tracks which column has focus.
///
/// `current` always names an existing column while there are columns.
#[derive(Debug, Clone)]
pub struct ColumnFocusTracker<H> {
    columns: Vec<H>,
    current: usize,
    phase: DragPhase,
}

impl<H> ColumnFocusTracker<H> {
    pub fn new(columns: Vec<H>) -> Self {
        ColumnFocusTracker {
            columns,
            current: 0,
            phase: DragPhase::Idle,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_column(&self) -> Option<&H> {
        self.columns.get(self.current)
    }

    pub fn columns(&self) -> &[H] {
        &self.columns
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Replace the column handles, keeping `current` in range.
    ///
    pub fn set_columns(&mut self, columns: Vec<H>) {
        self.columns = columns;
        self.current = self.current.min(self.columns.len().saturating_sub(1));
    }

    /// Focus the first column once handles are available.
    ///
    pub fn initial_focus(&mut self, surface: &mut impl FocusSurface<H>) {
        if let Some(first) = self.columns.first() {
            surface.focus(0, first);
            self.current = 0;
        }
    }

    /// Handle a directional key. Returns true if focus moved.
    ///
    pub fn on_key(&mut self, key: NavKey, surface: &mut impl FocusSurface<H>) -> bool {
        if self.phase == DragPhase::DragActive {
            debug!("Ignoring {:?} while a drag is active", key);
            return false;
        }

        let target = match key {
            NavKey::Right if self.current + 1 < self.columns.len() => self.current + 1,
            NavKey::Left if self.current > 0 => self.current - 1,
            _ => return false,
        };

        surface.focus(target, &self.columns[target]);
        self.current = target;
        true
    }

    pub fn on_drag_start(&mut self) {
        self.phase = DragPhase::DragActive;
    }

    pub fn on_drag_end(&mut self) {
        self.phase = DragPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        focused: Vec<(usize, &'static str)>,
    }

    impl FocusSurface<&'static str> for Recorder {
        fn focus(&mut self, index: usize, handle: &&'static str) {
            self.focused.push((index, *handle));
        }
    }

    fn tracker() -> ColumnFocusTracker<&'static str> {
        ColumnFocusTracker::new(vec!["a", "b", "c"])
    }

    #[test]
    fn test_initial_focus() {
        let mut surface = Recorder::default();
        let mut tracker = tracker();
        tracker.initial_focus(&mut surface);
        assert_eq!(tracker.current_index(), 0);
        assert_eq!(surface.focused, vec![(0, "a")]);
        assert_eq!(tracker.phase(), DragPhase::Idle);
    }

    #[test]
    fn test_right_right_left() {
        let mut surface = Recorder::default();
        let mut tracker = tracker();
        tracker.initial_focus(&mut surface);
        assert!(tracker.on_key(NavKey::Right, &mut surface));
        assert!(tracker.on_key(NavKey::Right, &mut surface));
        assert!(tracker.on_key(NavKey::Left, &mut surface));
        assert_eq!(tracker.current_index(), 1);
        assert_eq!(tracker.current_column(), Some(&"b"));
        assert_eq!(surface.focused, vec![(0, "a"), (1, "b"), (2, "c"), (1, "b")]);
    }

    #[test]
    fn test_no_wraparound() {
        let mut surface = Recorder::default();
        let mut tracker = tracker();
        assert!(!tracker.on_key(NavKey::Left, &mut surface));
        assert_eq!(tracker.current_index(), 0);

        tracker.on_key(NavKey::Right, &mut surface);
        tracker.on_key(NavKey::Right, &mut surface);
        assert!(!tracker.on_key(NavKey::Right, &mut surface));
        assert_eq!(tracker.current_index(), 2);
        assert_eq!(surface.focused.len(), 2);
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut surface = Recorder::default();
        let mut tracker = tracker();
        assert!(!tracker.on_key(NavKey::Other, &mut surface));
        assert!(surface.focused.is_empty());
    }

    #[test]
    fn test_navigation_suspended_while_dragging() {
        let mut surface = Recorder::default();
        let mut tracker = tracker();
        tracker.on_drag_start();
        assert_eq!(tracker.phase(), DragPhase::DragActive);
        assert!(!tracker.on_key(NavKey::Right, &mut surface));
        assert!(!tracker.on_key(NavKey::Left, &mut surface));
        assert_eq!(tracker.current_index(), 0);
        assert!(surface.focused.is_empty());

        tracker.on_drag_end();
        assert!(tracker.on_key(NavKey::Right, &mut surface));
        assert_eq!(tracker.current_index(), 1);
    }

    #[test]
    fn test_zero_columns_is_noop() {
        let mut surface = Recorder::default();
        let mut tracker: ColumnFocusTracker<&'static str> = ColumnFocusTracker::new(vec![]);
        tracker.initial_focus(&mut surface);
        assert!(!tracker.on_key(NavKey::Right, &mut surface));
        assert!(!tracker.on_key(NavKey::Left, &mut surface));
        assert!(surface.focused.is_empty());
        assert_eq!(tracker.current_column(), None);
    }

    #[test]
    fn test_set_columns_clamps_current() {
        let mut surface = Recorder::default();
        let mut tracker = tracker();
        tracker.on_key(NavKey::Right, &mut surface);
        tracker.on_key(NavKey::Right, &mut surface);
        tracker.set_columns(vec!["a", "b"]);
        assert_eq!(tracker.current_index(), 1);
        tracker.set_columns(vec![]);
        assert_eq!(tracker.current_index(), 0);
        assert!(!tracker.on_key(NavKey::Left, &mut surface));
        assert!(!tracker.on_key(NavKey::Right, &mut surface));
    }
}
