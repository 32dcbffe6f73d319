use crate::config::Config;
use crate::core::models::Owner;
use crate::scheduler::ScheduleResult;
use crate::ui::display_data::{
    CONFIG_HEADERS, DisplayDataBuilder, SCHEDULED_HEADERS, SKIPPED_HEADERS, WINDOW_HEADERS,
};
use crate::ui::table_printer::TablePrinter;
use crate::ui::width_util::WidthUtil;
use std::io;
use std::io::Write;

const NO_SCHEDULED: &str = "No tasks scheduled.";
const NO_SKIPPED: &str = "No tasks skipped.";
const NO_WINDOWS: &str = "No availability windows.";

struct Section {
    title: &'static str,
    headers: &'static [&'static str],
    rows: Vec<Vec<String>>,
    empty_msg: &'static str,
}

const NUMERIC_COLUMNS: [&str; 5] = ["#", "PRIORITY", "MIN", "USED", "LEFT"];

#[derive(Debug, Clone)]
pub struct DisplayManager {
    pub printer: TablePrinter,
    pub util: WidthUtil,
    pub data: DisplayDataBuilder,
}

impl Default for DisplayManager {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayManager {
    pub fn new() -> Self {
        Self {
            printer: TablePrinter::new().with_right_aligned(&NUMERIC_COLUMNS),
            util: WidthUtil::default(),
            data: DisplayDataBuilder::new(),
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.data = self.data.with_color(color);
        self
    }

    pub fn display_config_centered(&self, config: &Config) -> usize {
        let rows = self.data.config_rows(config);
        let table_w = self
            .printer
            .compute_table_width(&CONFIG_HEADERS, &rows)
            .max(self.util.visible_width("CONFIG"));

        let pad = self.util.center_pad(table_w);
        let printer = self.printer.with_left_pad(pad);

        printer.print_table(
            "Config",
            &CONFIG_HEADERS,
            &rows,
            Some("No config items found."),
            Some(table_w),
        );
        table_w
    }

    /// Placements, skips and window usage, then the explanation text. Every
    /// table shares one width so the stack lines up.
    pub fn render_schedule<W: Write>(
        &self,
        owner: &Owner,
        result: &ScheduleResult,
        out: &mut W,
    ) -> io::Result<()> {
        let sections = self.schedule_sections(owner, result);
        let max_width = self.schedule_max_width(&sections);

        self.printer.render_banner("Schedule", max_width, out)?;
        for s in &sections {
            let empty = if s.rows.is_empty() {
                Some(s.empty_msg)
            } else {
                None
            };
            self.printer
                .render_table(s.title, s.headers, &s.rows, empty, Some(max_width), out)?;
        }

        writeln!(out)?;
        writeln!(out, "{}", result.explanation)
    }

    /// Same as `render_schedule`, centred on the terminal.
    pub fn display_schedule_centered(&self, owner: &Owner, result: &ScheduleResult) {
        let sections = self.schedule_sections(owner, result);
        let pad = self.util.center_pad(self.schedule_max_width(&sections));
        let centered = Self {
            printer: self.printer.with_left_pad(pad),
            ..self.clone()
        };
        let mut stdout = io::stdout();
        let _ = centered.render_schedule(owner, result, &mut stdout);
    }

    fn schedule_sections(&self, owner: &Owner, result: &ScheduleResult) -> Vec<Section> {
        vec![
            Section {
                title: "Scheduled Tasks",
                headers: &SCHEDULED_HEADERS,
                rows: self.data.scheduled_rows(result),
                empty_msg: NO_SCHEDULED,
            },
            Section {
                title: "Skipped Tasks",
                headers: &SKIPPED_HEADERS,
                rows: self.data.skipped_rows(result),
                empty_msg: NO_SKIPPED,
            },
            Section {
                title: "Windows",
                headers: &WINDOW_HEADERS,
                rows: self.data.window_rows(owner.windows(), result),
                empty_msg: NO_WINDOWS,
            },
        ]
    }

    fn schedule_max_width(&self, sections: &[Section]) -> usize {
        let mut max_width = self.util.visible_width("SCHEDULE");
        for s in sections {
            let table_w = self.printer.compute_table_width(s.headers, &s.rows);
            let title_w = self.util.visible_width(s.title);
            let empty_w = if s.rows.is_empty() {
                self.util.visible_width(s.empty_msg)
            } else {
                0
            };
            max_width = max_width.max(table_w.max(title_w).max(empty_w));
        }
        max_width
    }
}
