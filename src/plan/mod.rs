pub mod models;

use std::fs;
use std::path::Path;

use crate::core::models::{Owner, Pet, Task, TimeWindow};
use crate::errors::{Error, Result};
use crate::scheduler::Scheduler;

pub use models::{OwnerEntry, PetEntry, PlanFile, TaskEntry};

/// Validated inputs for one scheduling request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub owner: Owner,
    pub pet: Pet,
    pub tasks: Vec<Task>,
}

impl Plan {
    pub fn into_scheduler(self) -> Scheduler {
        Scheduler::new(self.owner, self.pet, self.tasks)
    }
}

impl PlanFile {
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            Error::parse(format!("Failed to read plan '{}': {}", path.display(), e))
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Run every domain constructor once. The first failure wins, and task
    /// errors are prefixed with the task's position.
    pub fn build(&self) -> Result<Plan> {
        let windows = self
            .owner
            .windows
            .iter()
            .map(|w| TimeWindow::try_from_str(w))
            .collect::<Result<Vec<_>>>()?;
        let owner = Owner::new(self.owner.name.as_str(), windows)?;
        let pet = Pet::new(self.pet.name.as_str(), self.pet.species.as_str())?;

        let tasks = self
            .tasks
            .iter()
            .enumerate()
            .map(|(i, t)| {
                Task::new(t.title.as_str(), t.duration_minutes, t.priority).map_err(|e| match e {
                    Error::Validation(msg) => Error::validation(format!("task {}: {}", i + 1, msg)),
                    other => other,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Plan { owner, pet, tasks })
    }
}
