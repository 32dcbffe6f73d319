use crate::core::models::{Owner, Pet, Task};
use crate::logging::{LogTarget, Logger};
use crate::scheduler::comparator::{PriorityDescComparator, order_tasks};
use crate::scheduler::explanation::ExplanationBuilder;
use crate::scheduler::packer::{
    FirstFitPacker, PackOutcome, ScheduleObserver, WindowPacker, WindowState,
};

pub mod comparator;
pub mod explanation;
pub mod packer;
pub mod result;
#[cfg(test)]
mod tests;

pub use result::{ScheduleResult, ScheduledTask, SkipReason};

struct LoggerObserver {
    logger: Logger,
}

impl ScheduleObserver for LoggerObserver {
    fn task_placed(&self, placed: &ScheduledTask, window: &WindowState) {
        self.logger.info(
            format!(
                "Task '{}' placed in {} at {} ({} min left in window)",
                placed.task.title(),
                placed.window_display(),
                placed.time_range_string(),
                window.remaining_minutes
            ),
            LogTarget::FileOnly,
        );
    }

    fn task_skipped(&self, task: &Task, reason: &SkipReason) {
        self.logger.info(
            format!("Task '{}' skipped: {}", task.title(), reason),
            LogTarget::FileOnly,
        );
    }
}

/// Places one owner's tasks into their availability windows.
///
/// Tasks are tried in priority order (ties keep input order) and each goes
/// into the first window with enough time left. Inputs are validated when
/// they are built, so scheduling itself cannot fail: tasks that do not fit
/// are reported in the result's skipped list.
pub struct Scheduler {
    owner: Owner,
    pet: Pet,
    tasks: Vec<Task>,
    detailed_skip_reasons: bool,
    packer: Box<dyn WindowPacker + Send + Sync>,
    observer: LoggerObserver,
}

impl Scheduler {
    pub fn new(owner: Owner, pet: Pet, tasks: Vec<Task>) -> Self {
        Self {
            owner,
            pet,
            tasks,
            detailed_skip_reasons: false,
            packer: Box::new(FirstFitPacker),
            observer: LoggerObserver {
                logger: Logger::quiet(),
            },
        }
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.observer = LoggerObserver { logger };
        self
    }

    /// Name the specific reason for each skip in the explanation instead of
    /// the generic "no window had N minutes remaining".
    pub fn with_detailed_skip_reasons(mut self, detailed: bool) -> Self {
        self.detailed_skip_reasons = detailed;
        self
    }

    pub fn owner(&self) -> &Owner {
        &self.owner
    }

    pub fn pet(&self) -> &Pet {
        &self.pet
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Pure function of the constructed inputs; every call returns the same
    /// result.
    pub fn generate_schedule(&self) -> ScheduleResult {
        let logger = &self.observer.logger;
        logger.info(
            format!(
                "Scheduling {} task(s) for {} across {} window(s)",
                self.tasks.len(),
                self.pet.name(),
                self.owner.windows().len()
            ),
            LogTarget::FileOnly,
        );

        let ordered = order_tasks(&self.tasks, &PriorityDescComparator);
        let mut windows = WindowState::for_windows(self.owner.windows());
        for w in &windows {
            logger.debug(format!(
                "Window {} {}: {} min free",
                w.window_index + 1,
                w.window,
                w.remaining_minutes
            ));
        }

        let mut scheduled_tasks = Vec::new();
        let mut skipped_tasks = Vec::new();
        let mut skip_reasons = Vec::new();

        for task in ordered {
            match self.packer.pack(task, &mut windows, &self.observer) {
                PackOutcome::Placed(placed) => scheduled_tasks.push(placed),
                PackOutcome::Skipped(reason) => {
                    skipped_tasks.push(task.clone());
                    skip_reasons.push(reason);
                }
            }
        }

        let total_scheduled_minutes: u32 = scheduled_tasks
            .iter()
            .map(|st| st.task.duration_minutes())
            .sum();
        let total_available_minutes = self.owner.total_available_minutes();

        let explanation = ExplanationBuilder::new(&self.pet, !self.owner.windows().is_empty())
            .with_detailed_skip_reasons(self.detailed_skip_reasons)
            .build(
                &scheduled_tasks,
                &skipped_tasks,
                &skip_reasons,
                total_scheduled_minutes,
                total_available_minutes,
            );

        logger.info(
            format!(
                "Finished scheduling: {} placed, {} skipped, {}/{} min used",
                scheduled_tasks.len(),
                skipped_tasks.len(),
                total_scheduled_minutes,
                total_available_minutes
            ),
            LogTarget::FileOnly,
        );

        ScheduleResult {
            scheduled_tasks,
            skipped_tasks,
            skip_reasons,
            remaining_minutes: windows.iter().map(|w| w.remaining_minutes).collect(),
            total_scheduled_minutes,
            total_available_minutes,
            explanation,
        }
    }
}
