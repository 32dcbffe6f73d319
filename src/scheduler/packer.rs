use crate::core::models::{Task, TimeWindow};
use crate::scheduler::result::{ScheduledTask, SkipReason};

/// Working state for one owner window during a single scheduling pass.
/// Free time is always the tail `[next_start, window.end)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowState {
    pub window_index: usize,
    pub window: TimeWindow,
    pub next_start: u32,
    pub remaining_minutes: u32,
}

impl WindowState {
    pub fn new(window_index: usize, window: TimeWindow) -> Self {
        Self {
            window_index,
            window,
            next_start: window.start_offset(),
            remaining_minutes: window.duration_minutes(),
        }
    }

    /// One state per window, indexed like the owner's windows.
    pub fn for_windows(windows: &[TimeWindow]) -> Vec<Self> {
        windows
            .iter()
            .enumerate()
            .map(|(i, w)| Self::new(i, *w))
            .collect()
    }

    pub fn fits(&self, minutes: u32) -> bool {
        self.remaining_minutes >= minutes
    }

    /// Carve `task` off the head of the free tail. Caller checks `fits`.
    fn claim(&mut self, task: &Task) -> ScheduledTask {
        let placed = ScheduledTask::new(task.clone(), self.window_index, self.next_start);
        self.next_start += task.duration_minutes();
        self.remaining_minutes -= task.duration_minutes();
        placed
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackOutcome {
    Placed(ScheduledTask),
    Skipped(SkipReason),
}

/// Observer to capture placement decisions (e.g., for logging).
pub trait ScheduleObserver {
    fn task_placed(&self, placed: &ScheduledTask, window: &WindowState);
    fn task_skipped(&self, task: &Task, reason: &SkipReason);
}

pub trait WindowPacker {
    /// Pick the window that should receive `need` minutes.
    fn select_window_idx(&self, windows: &[WindowState], need: u32) -> Option<usize>;

    /// Template Method: select, claim, classify misses, notify.
    fn pack(
        &self,
        task: &Task,
        windows: &mut [WindowState],
        observer: &dyn ScheduleObserver,
    ) -> PackOutcome {
        match self.select_window_idx(windows, task.duration_minutes()) {
            Some(idx) => {
                let state = &mut windows[idx];
                let placed = state.claim(task);
                observer.task_placed(&placed, state);
                PackOutcome::Placed(placed)
            }
            None => {
                let reason = classify_skip(task, windows);
                observer.task_skipped(task, &reason);
                PackOutcome::Skipped(reason)
            }
        }
    }
}

/// Split a miss into "could never fit" vs "room was taken earlier".
pub fn classify_skip(task: &Task, windows: &[WindowState]) -> SkipReason {
    let Some(longest_window) = windows.iter().map(|w| w.window.duration_minutes()).max() else {
        return SkipReason::NoWindows;
    };
    if task.duration_minutes() > longest_window {
        return SkipReason::ExceedsEveryWindow { longest_window };
    }
    let largest_remaining = windows
        .iter()
        .map(|w| w.remaining_minutes)
        .max()
        .unwrap_or(0);
    SkipReason::CapacityConsumed { largest_remaining }
}

/// First window in index order with enough room, even when a later one
/// would fit tighter.
pub struct FirstFitPacker;

impl WindowPacker for FirstFitPacker {
    fn select_window_idx(&self, windows: &[WindowState], need: u32) -> Option<usize> {
        windows.iter().position(|w| w.fits(need))
    }
}
