//! Half-hour slot sequence and the dual-cursor visible-window selector.

use std::fmt;

use super::time::{TimeOfDay, MINUTES_PER_DAY};

/// Minutes between consecutive slot labels and calendar rows.
pub const SLOT_INTERVAL: u16 = 30;

/// Number of half-hour labels spanning 00:00 through 23:30.
pub const SLOT_COUNT: usize = (MINUTES_PER_DAY / SLOT_INTERVAL) as usize;

const DEFAULT_START_MINUTES: u16 = 480; // 08:00
const DEFAULT_END_MINUTES: u16 = 1020; // 17:00

/// The currently selected start/end bounds of the calendar's rendered rows.
///
/// `start` is inclusive, `end` exclusive; `start < end` always holds for
/// windows produced by a [`RangeSelector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleWindow {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl VisibleWindow {
    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes().saturating_sub(self.start.minutes())
    }
}

impl fmt::Display for VisibleWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Which spinner cursor an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Start,
    End,
}

/// Direction of a single spinner step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Forward,
    Backward,
}

/// The fixed ordered sequence of half-hour labels both cursors move over.
#[derive(Debug, Clone)]
pub struct TimeSlots {
    slots: Vec<TimeOfDay>,
}

impl TimeSlots {
    /// Builds the 48-entry 00:00-23:30 sequence.
    pub fn new() -> Self {
        let slots = (0..MINUTES_PER_DAY)
            .step_by(SLOT_INTERVAL as usize)
            .map(|m| TimeOfDay::from_minutes(m).expect("slot minutes below 1440"))
            .collect();
        Self { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<TimeOfDay> {
        self.slots.get(index).copied()
    }

    /// Index of the label with the given minute value, if present.
    pub fn position_of(&self, minutes: u16) -> Option<usize> {
        self.slots.iter().position(|t| t.minutes() == minutes)
    }
}

impl Default for TimeSlots {
    fn default() -> Self {
        Self::new()
    }
}

type RedrawFn = Box<dyn FnMut(VisibleWindow) + Send>;

/// Dual-cursor selector over the half-hour labels.
///
/// Holds one cursor for the visible start and one for the visible end of the
/// calendar window and keeps `start < end` at all times: a step that would
/// collide nudges the opposing cursor one slot (end forward, start backward),
/// and is refused outright when the opposing cursor is already pinned at its
/// bound. Every effective step invokes the redraw callback with the new
/// window.
pub struct RangeSelector {
    slots: TimeSlots,
    start_index: usize,
    end_index: usize,
    on_change: Option<RedrawFn>,
}

impl RangeSelector {
    /// Creates a selector with the start cursor on the 08:00 label and the
    /// end cursor on 17:00, falling back to index 0 if a label is absent.
    pub fn new() -> Self {
        let slots = TimeSlots::new();
        let start_index = slots.position_of(DEFAULT_START_MINUTES).unwrap_or(0);
        let end_index = slots.position_of(DEFAULT_END_MINUTES).unwrap_or(0);
        Self {
            slots,
            start_index,
            end_index,
            on_change: None,
        }
    }

    /// Registers the callback invoked after every effective step.
    pub fn set_on_change(&mut self, callback: RedrawFn) {
        self.on_change = Some(callback);
    }

    pub fn start_index(&self) -> usize {
        self.start_index
    }

    pub fn end_index(&self) -> usize {
        self.end_index
    }

    /// The currently selected window.
    pub fn window(&self) -> VisibleWindow {
        VisibleWindow {
            start: self
                .slots
                .get(self.start_index)
                .expect("start cursor in bounds"),
            end: self.slots.get(self.end_index).expect("end cursor in bounds"),
        }
    }

    /// Textual form of the active start label.
    pub fn visible_start(&self, postfix: bool) -> String {
        self.window().start.format(postfix)
    }

    /// Textual form of the active end label.
    pub fn visible_end(&self, postfix: bool) -> String {
        self.window().end.format(postfix)
    }

    /// Steps the named cursor one slot in the given direction.
    pub fn step(&mut self, cursor: Cursor, direction: StepDirection) -> Option<VisibleWindow> {
        match cursor {
            Cursor::Start => self.step_start(direction),
            Cursor::End => self.step_end(direction),
        }
    }

    /// Moves the start cursor one slot. A step beyond either end of the
    /// sequence is a no-op. A forward step that would reach the end cursor
    /// forces the end cursor one slot forward; if the end cursor is already
    /// at the last slot the step is refused so `start < end` survives.
    ///
    /// Returns the new window when the cursor moved, `None` on a no-op.
    pub fn step_start(&mut self, direction: StepDirection) -> Option<VisibleWindow> {
        let candidate = match direction {
            StepDirection::Forward => {
                if self.start_index + 1 >= self.slots.len() {
                    return None;
                }
                self.start_index + 1
            }
            StepDirection::Backward => {
                if self.start_index == 0 {
                    return None;
                }
                self.start_index - 1
            }
        };

        if candidate >= self.end_index {
            if self.end_index + 1 >= self.slots.len() {
                return None;
            }
            self.end_index += 1;
        }

        self.start_index = candidate;
        Some(self.redraw())
    }

    /// Moves the end cursor one slot; symmetric to [`Self::step_start`], with
    /// the start cursor forced backward on collision (floored at 0).
    pub fn step_end(&mut self, direction: StepDirection) -> Option<VisibleWindow> {
        let candidate = match direction {
            StepDirection::Forward => {
                if self.end_index + 1 >= self.slots.len() {
                    return None;
                }
                self.end_index + 1
            }
            StepDirection::Backward => {
                if self.end_index == 0 {
                    return None;
                }
                self.end_index - 1
            }
        };

        if candidate <= self.start_index {
            if self.start_index == 0 {
                return None;
            }
            self.start_index -= 1;
        }

        self.end_index = candidate;
        Some(self.redraw())
    }

    /// Places the start cursor directly on `index`, keeping `start < end`.
    pub fn set_start_index(&mut self, index: usize) -> bool {
        if index >= self.slots.len() || index >= self.end_index {
            return false;
        }
        self.start_index = index;
        self.redraw();
        true
    }

    /// Places the end cursor directly on `index`, keeping `start < end`.
    pub fn set_end_index(&mut self, index: usize) -> bool {
        if index >= self.slots.len() || index <= self.start_index {
            return false;
        }
        self.end_index = index;
        self.redraw();
        true
    }

    fn redraw(&mut self) -> VisibleWindow {
        let window = self.window();
        if let Some(callback) = self.on_change.as_mut() {
            callback(window);
        }
        window
    }
}

impl Default for RangeSelector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn slot_sequence_covers_the_day() {
        let slots = TimeSlots::new();
        assert_eq!(slots.len(), SLOT_COUNT);
        assert_eq!(slots.get(0).unwrap().to_24h(), "00:00");
        assert_eq!(slots.get(47).unwrap().to_24h(), "23:30");
        assert_eq!(slots.position_of(480), Some(16));
    }

    #[test]
    fn defaults_to_eight_to_five() {
        let selector = RangeSelector::new();
        assert_eq!(selector.visible_start(false), "08:00");
        assert_eq!(selector.visible_end(false), "17:00");
        assert_eq!(selector.visible_start(true), "08:00 AM");
        assert_eq!(selector.visible_end(true), "05:00 PM");
    }

    #[test]
    fn boundary_steps_are_no_ops() {
        let mut selector = RangeSelector::new();
        assert!(selector.set_end_index(47));
        for _ in 0..SLOT_COUNT {
            selector.step_end(StepDirection::Forward);
        }
        assert_eq!(selector.end_index(), 47);

        assert!(selector.set_start_index(0));
        assert!(selector.step_start(StepDirection::Backward).is_none());
        assert_eq!(selector.start_index(), 0);
    }

    #[test]
    fn start_collision_forces_exactly_one_end_step() {
        let mut selector = RangeSelector::new();
        assert!(selector.set_start_index(33));
        // end sits at 34 (17:00); stepping start onto it pushes end to 35
        let window = selector.step_start(StepDirection::Forward).unwrap();
        assert_eq!(selector.start_index(), 34);
        assert_eq!(selector.end_index(), 35);
        assert!(window.start < window.end);
    }

    #[test]
    fn end_collision_forces_exactly_one_start_step() {
        let mut selector = RangeSelector::new();
        assert!(selector.set_end_index(17));
        // start sits at 16 (08:00); stepping end onto it pushes start to 15
        selector.step_end(StepDirection::Backward).unwrap();
        assert_eq!(selector.end_index(), 16);
        assert_eq!(selector.start_index(), 15);
    }

    #[test]
    fn invariant_holds_across_a_full_forward_sweep() {
        let mut selector = RangeSelector::new();
        while selector.step_start(StepDirection::Forward).is_some() {
            assert!(selector.start_index() < selector.end_index());
        }
        // Pinned at the top: start at 46, end at 47, and further steps refuse.
        assert_eq!(selector.start_index(), 46);
        assert_eq!(selector.end_index(), 47);
        assert!(selector.step_start(StepDirection::Forward).is_none());
    }

    #[test]
    fn invariant_holds_across_a_full_backward_sweep() {
        let mut selector = RangeSelector::new();
        while selector.step_end(StepDirection::Backward).is_some() {
            assert!(selector.start_index() < selector.end_index());
        }
        assert_eq!(selector.start_index(), 0);
        assert_eq!(selector.end_index(), 1);
        assert!(selector.step_end(StepDirection::Backward).is_none());
    }

    #[test]
    fn effective_steps_fire_the_redraw_callback() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);

        let mut selector = RangeSelector::new();
        selector.set_on_change(Box::new(move |window| {
            assert!(window.start < window.end);
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        selector.step_start(StepDirection::Forward);
        selector.step_end(StepDirection::Backward);
        assert_eq!(fired.load(Ordering::SeqCst), 2);

        // A refused step must not redraw.
        selector.set_start_index(0);
        let before = fired.load(Ordering::SeqCst);
        assert!(selector.step_start(StepDirection::Backward).is_none());
        assert_eq!(fired.load(Ordering::SeqCst), before);
    }

    #[test]
    fn direct_placement_rejects_invariant_violations() {
        let mut selector = RangeSelector::new();
        assert!(!selector.set_start_index(34)); // equals end
        assert!(!selector.set_start_index(48)); // out of bounds
        assert!(!selector.set_end_index(16)); // equals start
        assert!(selector.set_start_index(10));
        assert!(selector.set_end_index(20));
    }
}
