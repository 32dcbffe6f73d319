use crate::core::models::Task;
use std::cmp::Ordering;

pub trait TaskOrderComparator {
    fn cmp(&self, a: &Task, b: &Task) -> Ordering;
}

// Priority desc only. Equal priorities compare Equal so the stable sort
// below keeps them in input order.
pub struct PriorityDescComparator;
impl TaskOrderComparator for PriorityDescComparator {
    fn cmp(&self, a: &Task, b: &Task) -> Ordering {
        b.priority().cmp(&a.priority())
    }
}

/// Borrowed view of `tasks` in placement order. `sort_by` is stable, which
/// is what keeps ties in their original relative order.
pub fn order_tasks<'a>(tasks: &'a [Task], cmp: &dyn TaskOrderComparator) -> Vec<&'a Task> {
    let mut ordered: Vec<&Task> = tasks.iter().collect();
    ordered.sort_by(|a, b| cmp.cmp(a, b));
    ordered
}
