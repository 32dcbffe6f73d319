
use crate::core::models::{Owner, Pet, Task, TimeWindow};
use crate::scheduler::{ScheduleResult, Scheduler};

/// One 9:00-10:00 window, a walk that fits and a bath that loses the room.
fn sample() -> (Owner, ScheduleResult) {
    let owner = Owner::new("Jordan", vec![TimeWindow::new(9, 0, 10, 0).unwrap()]).unwrap();
    let tasks = vec![
        Task::new("Bath", 30, 3).unwrap(),
        Task::new("Walk", 45, 5).unwrap(),
    ];
    let result = Scheduler::new(owner.clone(), Pet::new("Mochi", "dog").unwrap(), tasks)
        .generate_schedule();
    (owner, result)
}
