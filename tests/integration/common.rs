use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn binary_path() -> String {
    let raw = PathBuf::from(env!("CARGO_BIN_EXE_pawpal"));
    if raw.is_absolute() {
        return raw.to_string_lossy().to_string();
    }
    let from_manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(&raw);
    if from_manifest.exists() {
        return from_manifest.to_string_lossy().to_string();
    }
    raw.to_string_lossy().to_string()
}

static COUNTER: AtomicUsize = AtomicUsize::new(0);

pub fn make_temp_dir(prefix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "{prefix}-{}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    let _ = fs::create_dir_all(&dir);
    dir
}

pub const DAILY_PLAN: &str = r#"{
  "owner": { "name": "Jordan", "windows": ["6:00-8:00", "17:00-21:00"] },
  "pet": { "name": "Mochi", "species": "dog" },
  "tasks": [
    { "title": "Morning walk", "duration_minutes": 30, "priority": 5 },
    { "title": "Breakfast", "duration_minutes": 15, "priority": 5 },
    { "title": "Medication", "duration_minutes": 5, "priority": 4 },
    { "title": "Evening walk", "duration_minutes": 45, "priority": 4 },
    { "title": "Training", "duration_minutes": 30, "priority": 3 },
    { "title": "Grooming", "duration_minutes": 45, "priority": 2 },
    { "title": "Playtime", "duration_minutes": 60, "priority": 2 }
  ]
}"#;

pub fn write_plan(dir: &Path, json: &str) -> PathBuf {
    let path = dir.join("plan.json");
    fs::write(&path, json).unwrap();
    path
}

pub fn write_config(dir: &Path, file_logging: bool, detailed: bool) -> PathBuf {
    let flag = |b: bool| if b { "True" } else { "False" };
    let cfg = format!(
        r#"{{
      "file_logging_enabled": {{ "value": "{}", "description": "file logging" }},
      "detailed_skip_reasons": {{ "value": "{}", "description": "skip reasons" }}
    }}"#,
        flag(file_logging),
        flag(detailed)
    );
    let path = dir.join("config.json");
    fs::write(&path, cfg).unwrap();
    path
}

/// Run the binary inside `dir` with `--logs <dir>/logs` appended.
pub fn run(dir: &Path, args: &[&str]) -> Output {
    let logs = dir.join("logs");
    Command::new(binary_path())
        .current_dir(dir)
        .args(args)
        .arg("--logs")
        .arg(&logs)
        .output()
        .expect("failed to spawn binary")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

pub fn log_files(dir: &Path) -> Vec<PathBuf> {
    fs::read_dir(dir.join("logs"))
        .map(|entries| entries.filter_map(|e| e.ok().map(|e| e.path())).collect())
        .unwrap_or_default()
}
