use crate::core::models::{Pet, Task};
use crate::scheduler::result::{ScheduledTask, SkipReason, utilization_percentage};

pub const NO_TASKS: &str = "No tasks to schedule.";
pub const NO_WINDOWS: &str = "No availability windows provided. All tasks skipped.";

/// Builds the human-readable rationale attached to a `ScheduleResult`.
/// Display text only; callers must read decisions from the structured
/// fields instead.
pub struct ExplanationBuilder<'a> {
    pet: &'a Pet,
    has_windows: bool,
    detailed_skip_reasons: bool,
    lines: Vec<String>,
}

impl<'a> ExplanationBuilder<'a> {
    pub fn new(pet: &'a Pet, has_windows: bool) -> Self {
        Self {
            pet,
            has_windows,
            detailed_skip_reasons: false,
            lines: Vec::new(),
        }
    }

    pub fn with_detailed_skip_reasons(mut self, detailed: bool) -> Self {
        self.detailed_skip_reasons = detailed;
        self
    }

    pub fn build(
        mut self,
        scheduled: &[ScheduledTask],
        skipped: &[Task],
        reasons: &[SkipReason],
        scheduled_minutes: u32,
        available_minutes: u32,
    ) -> String {
        self.lines.push(format!(
            "Schedule generated for {} the {}.",
            self.pet.name(),
            self.pet.species()
        ));
        self.lines.push(String::new());

        if scheduled.is_empty() && skipped.is_empty() {
            self.lines.push(NO_TASKS.to_string());
        } else if !self.has_windows {
            self.lines.push(NO_WINDOWS.to_string());
            self.lines.push(String::new());
            self.push_skipped(skipped, reasons);
        } else {
            self.push_strategy();
            self.push_scheduled(scheduled);
            self.lines.push(String::new());
            self.push_skipped(skipped, reasons);
        }

        self.lines.push(String::new());
        self.lines.push(format!(
            "Utilization: {} / {} minutes ({:.1}%)",
            scheduled_minutes,
            available_minutes,
            utilization_percentage(scheduled_minutes, available_minutes)
        ));

        self.lines.join("\n")
    }

    fn push_strategy(&mut self) {
        self.lines.push("Scheduling Strategy:".to_string());
        self.lines.push(
            "- Tasks were scheduled in priority order (5=highest, 1=lowest); equal priorities keep their input order"
                .to_string(),
        );
        self.lines.push(
            "- Each task was placed in the earliest availability window with enough time left"
                .to_string(),
        );
        self.lines.push(String::new());
    }

    fn push_scheduled(&mut self, scheduled: &[ScheduledTask]) {
        if scheduled.is_empty() {
            self.lines.push("Successfully Scheduled: 0 tasks".to_string());
            return;
        }
        self.lines.push(format!(
            "Successfully Scheduled: {} task(s)",
            scheduled.len()
        ));
        for st in scheduled {
            self.lines.push(format!(
                "  • [Priority {}] {} at {} in {} ({} min)",
                st.task.priority(),
                st.task.title(),
                st.time_range_string(),
                st.window_display(),
                st.task.duration_minutes()
            ));
        }
    }

    fn push_skipped(&mut self, skipped: &[Task], reasons: &[SkipReason]) {
        if skipped.is_empty() {
            self.lines
                .push("Skipped Tasks: None - all tasks were successfully scheduled!".to_string());
            return;
        }
        self.lines
            .push(format!("Skipped Tasks: {} task(s)", skipped.len()));
        self.lines
            .push("The following tasks could not fit in the available time windows:".to_string());
        for (task, reason) in skipped.iter().zip(reasons) {
            let why = if self.detailed_skip_reasons {
                reason.to_string()
            } else {
                format!(
                    "no window had {} minutes remaining",
                    task.duration_minutes()
                )
            };
            self.lines.push(format!(
                "  • [Priority {}] {} ({} min needed): {}",
                task.priority(),
                task.title(),
                task.duration_minutes(),
                why
            ));
        }
    }
}
