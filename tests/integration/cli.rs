use std::fs;

use crate::common::{
    DAILY_PLAN, log_files, make_temp_dir, run, stderr_of, stdout_of, write_config, write_plan,
};

#[test]
fn prints_tables_and_explanation() {
    let dir = make_temp_dir("pawpal-cli");
    write_plan(&dir, DAILY_PLAN);

    let output = run(&dir, &["--plan", "plan.json"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("SCHEDULED TASKS"));
    assert!(stdout.contains("17:30-18:15"));
    assert!(stdout.contains("Schedule generated for Mochi the dog."));
    assert!(stdout.contains("Utilization: 230 / 360 minutes (63.9%)"));
    assert!(!stdout.contains('\x1B'), "piped output must not be colored");
}

#[test]
fn json_output_is_structured() {
    let dir = make_temp_dir("pawpal-cli");
    write_plan(&dir, DAILY_PLAN);

    let output = run(&dir, &["--plan", "plan.json", "--json"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let value: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();

    assert_eq!(value["scheduled_tasks"].as_array().unwrap().len(), 7);
    assert_eq!(value["scheduled_tasks"][0]["task"]["title"], "Morning walk");
    assert_eq!(value["scheduled_tasks"][4]["window_index"], 1);
    assert_eq!(value["remaining_minutes"], serde_json::json!([25, 105]));
    assert_eq!(value["total_available_minutes"], 360);
}

#[test]
fn show_config_prints_config_table() {
    let dir = make_temp_dir("pawpal-cli");
    write_plan(&dir, DAILY_PLAN);
    write_config(&dir, false, true);

    let output = run(
        &dir,
        &["--plan", "plan.json", "--config", "config.json", "--show-config"],
    );
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("CONFIG"));
    assert!(stdout.contains("DETAILED_SKIP_REASONS"));
    assert!(stdout.find("CONFIG").unwrap() < stdout.find("SCHEDULED TASKS").unwrap());
}

#[test]
fn file_logging_follows_config() {
    let dir = make_temp_dir("pawpal-cli");
    write_plan(&dir, DAILY_PLAN);

    let output = run(&dir, &["--plan", "plan.json"]);
    assert!(output.status.success());
    let logs = log_files(&dir);
    assert_eq!(logs.len(), 1);
    let content = fs::read_to_string(&logs[0]).unwrap();
    assert!(content.contains("Task 'Morning walk' placed in Window 1 at 6:00-6:30"));
    assert!(content.contains("Finished scheduling: 7 placed, 0 skipped, 230/360 min used"));

    let quiet_dir = make_temp_dir("pawpal-cli");
    write_plan(&quiet_dir, DAILY_PLAN);
    write_config(&quiet_dir, false, false);
    let output = run(&quiet_dir, &["--plan", "plan.json", "--config", "config.json"]);
    assert!(output.status.success());
    assert!(log_files(&quiet_dir).is_empty());
}

#[test]
fn missing_plan_flag_exits_with_usage() {
    let dir = make_temp_dir("pawpal-cli");
    let output = run(&dir, &[]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr_of(&output);
    assert!(stderr.contains("Missing required --plan"));
    assert!(stderr.contains("Usage: pawpal"));
    assert!(stdout_of(&output).is_empty());
}

#[test]
fn invalid_plans_exit_nonzero() {
    let dir = make_temp_dir("pawpal-cli");

    write_plan(&dir, &DAILY_PLAN.replace("17:00-21:00", "7:30-9:00"));
    let output = run(&dir, &["--plan", "plan.json"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Availability windows overlap"));

    write_plan(&dir, &DAILY_PLAN.replace("6:00-8:00", "8:00-6:00"));
    let output = run(&dir, &["--plan", "plan.json"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Validation error"));

    let output = run(&dir, &["--plan", "nope.json"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Failed to read plan"));
}

#[test]
fn missing_config_file_is_reported() {
    let dir = make_temp_dir("pawpal-cli");
    write_plan(&dir, DAILY_PLAN);
    let output = run(&dir, &["--plan", "plan.json", "--config", "absent.json"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Configuration file 'absent.json' not found."));
}
