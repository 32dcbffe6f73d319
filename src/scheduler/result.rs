use crate::core::models::Task;
use crate::extensions::chrono::{format_offset, split_offset};
use serde::Serialize;
use std::fmt;

/// One placement: `task` occupies `[start, end)` inside the owner's window
/// at `window_index` (0-based, in the owner's window order).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduledTask {
    pub task: Task,
    pub window_index: usize,
    pub start_hour: u32,
    pub start_minute: u32,
    pub end_hour: u32,
    pub end_minute: u32,
}

impl ScheduledTask {
    pub(crate) fn new(task: Task, window_index: usize, start_offset: u32) -> Self {
        let end_offset = start_offset + task.duration_minutes();
        let (start_hour, start_minute) = split_offset(start_offset);
        let (end_hour, end_minute) = split_offset(end_offset);
        Self {
            task,
            window_index,
            start_hour,
            start_minute,
            end_hour,
            end_minute,
        }
    }

    pub fn start_offset(&self) -> u32 {
        self.start_hour * 60 + self.start_minute
    }

    pub fn end_offset(&self) -> u32 {
        self.end_hour * 60 + self.end_minute
    }

    pub fn duration_minutes(&self) -> u32 {
        self.end_offset() - self.start_offset()
    }

    /// e.g. `9:05-9:35`
    pub fn time_range_string(&self) -> String {
        format!(
            "{}-{}",
            format_offset(self.start_offset()),
            format_offset(self.end_offset())
        )
    }

    /// 1-based label for display, e.g. `Window 1`.
    pub fn window_display(&self) -> String {
        format!("Window {}", self.window_index + 1)
    }
}

/// Why a task ended up in the skipped list. Skipping is a normal outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    /// The owner has no windows at all.
    NoWindows,
    /// Longer than every window's full duration; no ordering could place it.
    ExceedsEveryWindow { longest_window: u32 },
    /// Would fit an empty window, but higher-priority tasks used the room.
    CapacityConsumed { largest_remaining: u32 },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoWindows => write!(f, "no availability windows"),
            SkipReason::ExceedsEveryWindow { longest_window } => write!(
                f,
                "longer than every window (longest is {longest_window} min)"
            ),
            SkipReason::CapacityConsumed { largest_remaining } => write!(
                f,
                "higher-priority tasks used the room (at most {largest_remaining} min left in any window)"
            ),
        }
    }
}

/// Everything one scheduling run produced.
///
/// `scheduled_tasks` is in scheduling (priority) order, not start-time
/// order. `skipped_tasks` is in priority order and `skip_reasons[i]`
/// explains `skipped_tasks[i]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleResult {
    pub scheduled_tasks: Vec<ScheduledTask>,
    pub skipped_tasks: Vec<Task>,
    pub skip_reasons: Vec<SkipReason>,
    /// Minutes still free in each window after placement, by window index.
    pub remaining_minutes: Vec<u32>,
    pub total_scheduled_minutes: u32,
    pub total_available_minutes: u32,
    pub explanation: String,
}

impl ScheduleResult {
    /// Share of available minutes that were scheduled, 0.0 when nothing was
    /// available.
    pub fn utilization_percentage(&self) -> f64 {
        utilization_percentage(self.total_scheduled_minutes, self.total_available_minutes)
    }

    pub fn summary(&self) -> String {
        let rule = "=".repeat(50);
        let mut lines = vec![rule.clone(), "SCHEDULE SUMMARY".to_string(), rule.clone()];

        lines.push(format!("\nScheduled Tasks: {}", self.scheduled_tasks.len()));
        for st in &self.scheduled_tasks {
            lines.push(format!(
                "  - [{}] {}: {} ({} min)",
                st.task.priority(),
                st.task.title(),
                st.time_range_string(),
                st.task.duration_minutes()
            ));
        }

        lines.push(format!("\nSkipped Tasks: {}", self.skipped_tasks.len()));
        for task in &self.skipped_tasks {
            lines.push(format!(
                "  - [{}] {}: {} min",
                task.priority(),
                task.title(),
                task.duration_minutes()
            ));
        }

        lines.push("\nTime Utilization:".to_string());
        lines.push(format!(
            "  Used: {} / {} minutes ({:.1}%)",
            self.total_scheduled_minutes,
            self.total_available_minutes,
            self.utilization_percentage()
        ));

        lines.push("\nExplanation:".to_string());
        for line in self.explanation.lines() {
            if line.is_empty() {
                lines.push(String::new());
            } else {
                lines.push(format!("  {line}"));
            }
        }
        lines.push(rule);

        lines.join("\n")
    }
}

pub(crate) fn utilization_percentage(scheduled: u32, available: u32) -> f64 {
    if available == 0 {
        return 0.0;
    }
    f64::from(scheduled) / f64::from(available) * 100.0
}
