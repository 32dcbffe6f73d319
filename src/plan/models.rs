use serde::{Deserialize, Serialize};

/// Raw plan file contents. Nothing here is validated; `PlanFile::build`
/// turns it into domain objects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanFile {
    pub owner: OwnerEntry,
    pub pet: PetEntry,
    #[serde(default)]
    pub tasks: Vec<TaskEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerEntry {
    pub name: String,
    /// `"H:MM-H:MM"` strings, in window-index order.
    #[serde(default)]
    pub windows: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetEntry {
    pub name: String,
    pub species: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskEntry {
    pub title: String,
    pub duration_minutes: u32,
    pub priority: u8,
}
