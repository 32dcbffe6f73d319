use pawpal::config::Config;
use pawpal::logging::Logger;
use pawpal::plan::PlanFile;
use pawpal::scheduler::SkipReason;

use crate::common::{DAILY_PLAN, make_temp_dir, write_config, write_plan};

#[test]
fn daily_plan_from_file_schedules_by_priority() {
    let dir = make_temp_dir("pawpal-sched");
    let path = write_plan(&dir, DAILY_PLAN);

    let result = PlanFile::load_from(&path)
        .unwrap()
        .build()
        .unwrap()
        .into_scheduler()
        .generate_schedule();

    let placed: Vec<(&str, String)> = result
        .scheduled_tasks
        .iter()
        .map(|st| (st.task.title(), st.time_range_string()))
        .collect();
    assert_eq!(
        placed,
        vec![
            ("Morning walk", "6:00-6:30".to_string()),
            ("Breakfast", "6:30-6:45".to_string()),
            ("Medication", "6:45-6:50".to_string()),
            ("Evening walk", "6:50-7:35".to_string()),
            ("Training", "17:00-17:30".to_string()),
            ("Grooming", "17:30-18:15".to_string()),
            ("Playtime", "18:15-19:15".to_string()),
        ]
    );
    assert!(result.skipped_tasks.is_empty());
    assert_eq!(result.remaining_minutes, vec![25, 105]);
    assert_eq!(result.total_scheduled_minutes, 230);
    assert_eq!(result.total_available_minutes, 360);
}

#[test]
fn config_drives_detailed_skip_text() {
    let dir = make_temp_dir("pawpal-sched");
    let cfg = Config::load_from(write_config(&dir, false, true)).unwrap();
    let plan = PlanFile::from_json(
        r#"{
          "owner": { "name": "Sam", "windows": ["9:00-9:30"] },
          "pet": { "name": "Biscuit", "species": "cat" },
          "tasks": [
            { "title": "Vet visit", "duration_minutes": 90, "priority": 5 },
            { "title": "Feed", "duration_minutes": 10, "priority": 4 }
          ]
        }"#,
    )
    .unwrap()
    .build()
    .unwrap();

    let logger = Logger::new();
    logger.set_file_logging_enabled(cfg.file_logging_enabled());
    let result = plan
        .into_scheduler()
        .with_logger(logger)
        .with_detailed_skip_reasons(cfg.detailed_skip_reasons())
        .generate_schedule();

    assert_eq!(
        result.skip_reasons,
        vec![SkipReason::ExceedsEveryWindow { longest_window: 30 }]
    );
    assert!(
        result
            .explanation
            .contains("Vet visit (90 min needed): longer than every window (longest is 30 min)")
    );
}
