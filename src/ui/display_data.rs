use crate::config::Config;
use crate::core::models::TimeWindow;
use crate::scheduler::ScheduleResult;
use crate::ui::ansi::{FG_LIGHT_GRAY, FG_YELLOW, STYLE_BOLD, STYLE_RESET};

pub const SCHEDULED_HEADERS: [&str; 6] = ["#", "TIME", "WINDOW", "TASK", "PRIORITY", "MIN"];
pub const SKIPPED_HEADERS: [&str; 4] = ["TASK", "PRIORITY", "MIN", "REASON"];
pub const WINDOW_HEADERS: [&str; 4] = ["WINDOW", "TIME", "USED", "LEFT"];
pub const CONFIG_HEADERS: [&str; 4] = ["ID", "KEY", "DESCRIPTION", "VALUE"];

/// Turns results into table rows. Cells are plain strings unless `color`
/// is on, in which case they may carry SGR sequences; `TablePrinter` pads
/// by visible width either way.
#[derive(Debug, Default, Clone)]
pub struct DisplayDataBuilder {
    color: bool,
}

impl DisplayDataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn scheduled_rows(&self, result: &ScheduleResult) -> Vec<Vec<String>> {
        result
            .scheduled_tasks
            .iter()
            .enumerate()
            .map(|(i, st)| {
                let style = self.priority_style(st.task.priority());
                vec![
                    (i + 1).to_string(),
                    st.time_range_string(),
                    st.window_display(),
                    self.paint(style, st.task.title()),
                    self.paint(style, &st.task.priority().to_string()),
                    st.duration_minutes().to_string(),
                ]
            })
            .collect()
    }

    pub fn skipped_rows(&self, result: &ScheduleResult) -> Vec<Vec<String>> {
        result
            .skipped_tasks
            .iter()
            .zip(&result.skip_reasons)
            .map(|(task, reason)| {
                vec![
                    self.paint(Some(FG_LIGHT_GRAY), task.title()),
                    task.priority().to_string(),
                    task.duration_minutes().to_string(),
                    reason.to_string(),
                ]
            })
            .collect()
    }

    /// One row per owner window; `windows` must be the owner's windows the
    /// result was produced from.
    pub fn window_rows(
        &self,
        windows: &[TimeWindow],
        result: &ScheduleResult,
    ) -> Vec<Vec<String>> {
        windows
            .iter()
            .zip(&result.remaining_minutes)
            .enumerate()
            .map(|(i, (w, left))| {
                vec![
                    format!("Window {}", i + 1),
                    w.to_string(),
                    (w.duration_minutes() - left).to_string(),
                    left.to_string(),
                ]
            })
            .collect()
    }

    pub fn config_rows(&self, config: &Config) -> Vec<Vec<String>> {
        config
            .rows()
            .iter()
            .enumerate()
            .map(|(i, (k, d, v))| vec![i.to_string(), k.clone(), d.clone(), v.clone()])
            .collect()
    }

    fn priority_style(&self, priority: u8) -> Option<&'static str> {
        match priority {
            5 => Some(STYLE_BOLD),
            4 => Some(FG_YELLOW),
            _ => None,
        }
    }

    fn paint(&self, style: Option<&str>, s: &str) -> String {
        match style {
            Some(code) if self.color => format!("{code}{s}{STYLE_RESET}"),
            _ => s.to_string(),
        }
    }
}
