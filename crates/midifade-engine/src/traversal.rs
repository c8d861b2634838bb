//! Bidirectional walk over one fade table.

use midifade_curve::CurveTable;
use serde::{Deserialize, Serialize};

/// Which endpoint a traversal is approaching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FadeDirection {
    /// Walk the ascending sequence toward `to_value`.
    #[default]
    Forward,
    /// Walk the descending sequence toward `from_value`.
    Backward,
}

impl FadeDirection {
    #[inline]
    fn lane(self) -> usize {
        match self {
            FadeDirection::Forward => 0,
            FadeDirection::Backward => 1,
        }
    }
}

/// One in-flight or idle fade bound to one [`CurveTable`].
///
/// The traversal is a cursor state machine: a periodic driver calls
/// [`advance()`](FadeTraversal::advance) once per tick while the traversal is
/// active, and discrete key events steer it through
/// [`start()`](FadeTraversal::start), [`reverse()`](FadeTraversal::reverse)
/// and [`toggle_active()`](FadeTraversal::toggle_active).
///
/// Change detection happens on quantized integers: consecutive ticks whose
/// table entries round to the same MIDI value produce exactly one emission.
/// The two walk directions round differently: the ascending walk floors, the
/// descending walk ceils while running out and floors while unwinding.
/// Shared table entries therefore never oscillate between the directions.
#[derive(Debug, Clone)]
pub struct FadeTraversal {
    table: CurveTable,
    direction: FadeDirection,
    active: bool,
    finished: bool,
    reversing: bool,
    index: usize,
    /// Last quantized value reported per direction lane, seeded one unit
    /// outside the lane's starting value so the first sample always emits.
    last_emitted: [i16; 2],
    current_value: u8,
}

impl FadeTraversal {
    /// Create an idle traversal over `table`, primed to walk `direction`
    /// when it first becomes active.
    pub fn new(table: CurveTable, direction: FadeDirection) -> Self {
        let last_emitted = [
            i16::from(table.from_value()) - 1,
            i16::from(table.to_value()) + 1,
        ];
        let current_value = match direction {
            FadeDirection::Forward => table.from_value(),
            FadeDirection::Backward => table.to_value(),
        };
        Self {
            table,
            direction,
            active: false,
            finished: false,
            reversing: false,
            index: 0,
            last_emitted,
            current_value,
        }
    }

    /// Step the traversal by one tick.
    ///
    /// Returns the newly quantized value when this tick changed the output,
    /// `None` when the tick was absorbed: a duplicate sample, an inactive
    /// traversal, or a silent unwind completion.
    pub fn advance(&mut self) -> Option<u8> {
        if !self.active {
            return None;
        }
        if self.reversing {
            self.unwind_step()
        } else {
            self.run_step()
        }
    }

    /// Cursor walking up toward the far end of the current sequence.
    fn run_step(&mut self) -> Option<u8> {
        let dir = self.direction;
        if self.index == self.table.sample_count() {
            // Snap to the target endpoint and fold back to idle.
            let target = match dir {
                FadeDirection::Forward => self.table.to_value(),
                FadeDirection::Backward => self.table.from_value(),
            };
            self.index = 0;
            self.reset_lane(dir);
            self.current_value = target;
            self.active = false;
            self.finished = true;
            return Some(target);
        }

        let sample = self.sequence(dir)[self.index];
        let quantized = match dir {
            FadeDirection::Forward => sample.floor() as i16,
            FadeDirection::Backward => sample.ceil() as i16,
        };
        if quantized != self.last_emitted[dir.lane()] {
            self.last_emitted[dir.lane()] = quantized;
            self.current_value = quantized as u8;
            self.index += 1;
            Some(self.current_value)
        } else {
            self.index += 1;
            None
        }
    }

    /// Cursor walking back down toward the start of the current sequence.
    fn unwind_step(&mut self) -> Option<u8> {
        let dir = self.direction;
        if self.index == 0 {
            self.reset_lane(dir);
            self.active = false;
            self.reversing = false;
            self.finished = true;
            return match dir {
                // A forward fade unwinds silently; a backward fade re-emits
                // its start value on completion.
                FadeDirection::Forward => None,
                FadeDirection::Backward => {
                    self.current_value = self.table.to_value();
                    Some(self.current_value)
                }
            };
        }

        let quantized = self.sequence(dir)[self.index].floor() as i16;
        if quantized != self.last_emitted[dir.lane()] {
            self.last_emitted[dir.lane()] = quantized;
            self.current_value = quantized as u8;
            self.index -= 1;
            Some(self.current_value)
        } else {
            self.index -= 1;
            None
        }
    }

    /// Arm an idle traversal: cursor to the near end, duplicate suppression
    /// reseeded so the first sample emits.
    ///
    /// Ignored while a fade is running; the running fade keeps its direction
    /// and cursor.
    pub fn start(&mut self, direction: FadeDirection) {
        if self.active {
            return;
        }
        self.direction = direction;
        self.active = true;
        self.reversing = false;
        self.index = 0;
        self.reset_lane(direction);
    }

    /// Unwind toward the start of the current sequence.
    ///
    /// On a running fade this takes effect on the next tick. On an idle one
    /// the cursor jumps to the far end first, so a release can fade back
    /// from the full value even if the fade never ran forward.
    pub fn reverse(&mut self) {
        if !self.active {
            self.index = self.table.sample_count();
            self.active = true;
        }
        self.reversing = true;
    }

    /// Flip the running state. Exactly one flip per call, nothing else
    /// changes; the cursor stays where it is.
    pub fn toggle_active(&mut self) {
        self.active = !self.active;
    }

    /// Edge-triggered completion flag: reads true once per completed
    /// traversal, then clears.
    pub fn take_finished(&mut self) -> bool {
        std::mem::take(&mut self.finished)
    }

    #[inline]
    fn sequence(&self, direction: FadeDirection) -> &[f64] {
        match direction {
            FadeDirection::Forward => self.table.ascending(),
            FadeDirection::Backward => self.table.descending(),
        }
    }

    #[inline]
    fn reset_lane(&mut self, direction: FadeDirection) {
        self.last_emitted[direction.lane()] = match direction {
            FadeDirection::Forward => i16::from(self.table.from_value()) - 1,
            FadeDirection::Backward => i16::from(self.table.to_value()) + 1,
        };
    }

    /// The table this traversal walks.
    #[inline]
    pub fn table(&self) -> &CurveTable {
        &self.table
    }

    #[inline]
    pub fn direction(&self) -> FadeDirection {
        self.direction
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn is_reversing(&self) -> bool {
        self.reversing
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Current cursor position into the active sequence.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Last quantized value produced.
    #[inline]
    pub fn current_value(&self) -> u8 {
        self.current_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use midifade_curve::CurveShape;

    /// 100 ms linear 0..=127 fade at 10 ms ticks: N = 10, step 12.7.
    fn full_span() -> FadeTraversal {
        let table = CurveTable::new(0, 127, 100.0, CurveShape::Linear, 10.0).unwrap();
        FadeTraversal::new(table, FadeDirection::Forward)
    }

    /// Coarse 0..=5 table over the same grid: adjacent entries share floors.
    fn coarse() -> FadeTraversal {
        let table = CurveTable::new(0, 5, 100.0, CurveShape::Linear, 10.0).unwrap();
        FadeTraversal::new(table, FadeDirection::Forward)
    }

    fn drain(traversal: &mut FadeTraversal, ticks: usize) -> Vec<u8> {
        (0..ticks).filter_map(|_| traversal.advance()).collect()
    }

    #[test]
    fn test_idle_traversal_ignores_ticks() {
        let mut t = full_span();
        assert_eq!(t.advance(), None);
        assert_eq!(t.index(), 0);
        assert!(!t.is_finished());
    }

    #[test]
    fn test_forward_run_emits_floor_steps_then_snaps() {
        let mut t = full_span();
        t.start(FadeDirection::Forward);

        let emitted = drain(&mut t, 11);
        assert_eq!(emitted, vec![0, 12, 25, 38, 50, 63, 76, 88, 101, 114, 127]);
        assert!(t.take_finished());
        assert!(!t.is_active());
        assert_eq!(t.current_value(), 127);
        assert_eq!(t.index(), 0);
    }

    #[test]
    fn test_finished_flag_is_edge_triggered() {
        let mut t = full_span();
        t.start(FadeDirection::Forward);
        drain(&mut t, 11);

        assert!(t.take_finished());
        assert!(!t.take_finished());
    }

    #[test]
    fn test_backward_run_uses_ceil() {
        let mut t = full_span();
        t.start(FadeDirection::Backward);

        let emitted = drain(&mut t, 11);
        assert_eq!(
            emitted,
            vec![127, 115, 102, 89, 77, 64, 51, 39, 26, 13, 0]
        );
        assert!(t.take_finished());
        assert_eq!(t.current_value(), 0);
    }

    #[test]
    fn test_duplicate_samples_are_suppressed() {
        let mut t = coarse();
        t.start(FadeDirection::Forward);

        // Table entries 0, 0.5, 1.0, ... floor pairwise to the same value.
        let per_tick: Vec<Option<u8>> = (0..11).map(|_| t.advance()).collect();
        assert_eq!(
            per_tick,
            vec![
                Some(0),
                None,
                Some(1),
                None,
                Some(2),
                None,
                Some(3),
                None,
                Some(4),
                None,
                Some(5),
            ]
        );
        assert!(t.take_finished());
    }

    #[test]
    fn test_suppressed_tick_leaves_current_value_alone() {
        let mut t = coarse();
        t.start(FadeDirection::Forward);
        t.advance();
        let before = t.current_value();
        assert_eq!(t.advance(), None);
        assert_eq!(t.current_value(), before);
    }

    #[test]
    fn test_reverse_after_completion_descends_without_reemitting_start() {
        let mut t = full_span();
        t.start(FadeDirection::Forward);
        drain(&mut t, 11);
        t.take_finished();

        t.reverse();
        assert!(t.is_active());
        assert!(t.is_reversing());
        assert_eq!(t.index(), 10);

        let emitted = drain(&mut t, 11);
        // Unwinds through the same floors, but completion is silent for a
        // forward fade: 0 never reappears.
        assert_eq!(emitted, vec![127, 114, 101, 88, 76, 63, 50, 38, 25, 12]);
        assert!(t.take_finished());
        assert!(!t.is_active());
        assert!(!t.is_reversing());
    }

    #[test]
    fn test_backward_reversal_reemits_start_value() {
        let mut t = full_span();
        t.start(FadeDirection::Backward);
        drain(&mut t, 11);
        t.take_finished();

        t.reverse();
        let emitted = drain(&mut t, 11);
        // Floors of the descending sequence on the way back up, and the
        // start value 127 is re-emitted on completion.
        assert_eq!(emitted, vec![0, 12, 25, 38, 50, 63, 76, 88, 101, 114, 127]);
        assert!(t.take_finished());
        assert_eq!(t.current_value(), 127);
    }

    #[test]
    fn test_mid_flight_reversal_unwinds_from_cursor() {
        let mut t = full_span();
        t.start(FadeDirection::Forward);
        let forward = drain(&mut t, 4);
        assert_eq!(forward, vec![0, 12, 25, 38]);

        t.reverse();
        let back = drain(&mut t, 5);
        assert_eq!(back, vec![50, 38, 25, 12]);
        assert!(t.take_finished());
    }

    #[test]
    fn test_restart_reproduces_identical_output() {
        let mut t = full_span();
        t.start(FadeDirection::Forward);
        let first = drain(&mut t, 11);
        t.take_finished();

        t.start(FadeDirection::Forward);
        let second = drain(&mut t, 11);
        assert_eq!(first, second);
    }

    #[test]
    fn test_start_while_active_is_ignored() {
        let mut t = full_span();
        t.start(FadeDirection::Forward);
        drain(&mut t, 3);
        let index = t.index();

        t.start(FadeDirection::Backward);
        assert_eq!(t.direction(), FadeDirection::Forward);
        assert_eq!(t.index(), index);
    }

    #[test]
    fn test_toggle_pauses_and_resumes_in_place() {
        let mut t = full_span();
        t.start(FadeDirection::Forward);
        let head = drain(&mut t, 3);

        t.toggle_active();
        assert!(!t.is_active());
        assert_eq!(t.advance(), None);

        t.toggle_active();
        let tail = drain(&mut t, 8);

        let mut joined = head;
        joined.extend(tail);
        assert_eq!(joined, vec![0, 12, 25, 38, 50, 63, 76, 88, 101, 114, 127]);
        assert!(t.take_finished());
    }

    #[test]
    fn test_reverse_from_idle_unwinds_from_far_end() {
        let mut t = full_span();
        t.reverse();
        assert!(t.is_active());
        assert_eq!(t.index(), t.table().sample_count());

        let emitted = drain(&mut t, 11);
        assert_eq!(emitted, vec![127, 114, 101, 88, 76, 63, 50, 38, 25, 12]);
        assert!(t.take_finished());
    }

    #[test]
    fn test_exponential_trajectory_reaches_endpoints() {
        let table =
            CurveTable::new(20, 100, 100.0, CurveShape::Exponential(0.02), 10.0).unwrap();
        let mut t = FadeTraversal::new(table, FadeDirection::Forward);
        t.start(FadeDirection::Forward);

        let emitted = drain(&mut t, 11);
        assert_eq!(emitted.first(), Some(&20));
        assert_eq!(emitted.last(), Some(&100));
        assert!(emitted.windows(2).all(|w| w[0] < w[1]));
        assert!(t.take_finished());
    }

    #[test]
    fn test_new_traversal_reports_its_starting_endpoint() {
        let forward = full_span();
        assert_eq!(forward.current_value(), 0);

        let table = CurveTable::new(0, 127, 100.0, CurveShape::Linear, 10.0).unwrap();
        let backward = FadeTraversal::new(table, FadeDirection::Backward);
        assert_eq!(backward.current_value(), 127);
    }
}
