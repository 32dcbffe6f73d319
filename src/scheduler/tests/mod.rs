
use crate::core::models::{Owner, Pet, Task, TimeWindow};
use crate::scheduler::Scheduler;

pub(super) fn window(sh: u32, sm: u32, eh: u32, em: u32) -> TimeWindow {
    TimeWindow::new(sh, sm, eh, em).unwrap()
}

pub(super) fn task(title: &str, minutes: u32, priority: u8) -> Task {
    Task::new(title, minutes, priority).unwrap()
}

pub(super) fn owner(windows: Vec<TimeWindow>) -> Owner {
    Owner::new("Jordan", windows).unwrap()
}

pub(super) fn mochi() -> Pet {
    Pet::new("Mochi", "dog").unwrap()
}

pub(super) fn scheduler(windows: Vec<TimeWindow>, tasks: Vec<Task>) -> Scheduler {
    Scheduler::new(owner(windows), mochi(), tasks)
}

pub(super) fn titles<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Vec<&'a str> {
    tasks.into_iter().map(Task::title).collect()
}
