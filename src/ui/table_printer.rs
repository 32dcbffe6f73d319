use crate::ui::width_util::WidthUtil;
use std::io::Write;

const COLUMN_GAP: &str = " | ";

/// Column alignment. Columns whose header is listed in
/// `TablePrinter::with_right_aligned` are padded on the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone, Default)]
pub struct TablePrinter {
    util: WidthUtil,
    left_pad: usize,
    right_aligned: Vec<&'static str>,
}

impl TablePrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a clone that indents every printed line by `pad` spaces.
    pub fn with_left_pad(&self, pad: usize) -> Self {
        let mut c = self.clone();
        c.left_pad = pad;
        c
    }

    pub fn with_right_aligned(mut self, headers: &[&'static str]) -> Self {
        self.right_aligned = headers.to_vec();
        self
    }

    fn align_for(&self, header: &str) -> Align {
        if self.right_aligned.iter().any(|h| *h == header) {
            Align::Right
        } else {
            Align::Left
        }
    }

    fn write_indented<W: Write + ?Sized>(&self, out: &mut W, s: &str) -> std::io::Result<()> {
        writeln!(out, "{}{s}", " ".repeat(self.left_pad))
    }

    fn write_rule<W: Write + ?Sized>(
        &self,
        out: &mut W,
        ch: char,
        width: usize,
    ) -> std::io::Result<()> {
        let line = ch.to_string().repeat(width.max(1));
        self.write_indented(out, &line)
    }

    pub fn render_banner<W: Write + ?Sized>(
        &self,
        title: &str,
        width: usize,
        out: &mut W,
    ) -> std::io::Result<()> {
        let w = width.max(self.util.visible_width(title));
        self.write_rule(out, '=', w)?;
        self.write_indented(out, &title.to_uppercase())?;
        self.write_rule(out, '=', w)
    }

    pub fn compute_table_width<T: AsRef<str>>(&self, headers: &[&str], rows: &[Vec<T>]) -> usize {
        let col_widths = self.compute_col_widths(headers, rows);
        Self::natural_width(&col_widths)
    }

    pub fn print_table<T: AsRef<str>>(
        &self,
        table_name: &str,
        headers: &[&str],
        rows: &[Vec<T>],
        empty_message: Option<&str>,
        min_width: Option<usize>,
    ) {
        let mut stdout = std::io::stdout();
        let _ = self.render_table(
            table_name,
            headers,
            rows,
            empty_message,
            min_width,
            &mut stdout,
        );
    }

    /// Render into any writer (used by tests to capture output).
    pub fn render_table<T: AsRef<str>, W: Write + ?Sized>(
        &self,
        table_name: &str,
        headers: &[&str],
        rows: &[Vec<T>],
        empty_message: Option<&str>,
        min_width: Option<usize>,
        out: &mut W,
    ) -> std::io::Result<()> {
        let col_widths = self.compute_col_widths(headers, rows);
        let total_width = Self::natural_width(&col_widths).max(min_width.unwrap_or(0));

        if let (true, Some(msg)) = (rows.is_empty(), empty_message) {
            let width = total_width
                .max(self.util.visible_width(table_name))
                .max(self.util.visible_width(msg));
            self.write_title(out, table_name, width)?;
            self.write_indented(out, msg)?;
            return self.write_rule(out, '-', width);
        }

        self.write_title(out, table_name, total_width)?;
        let aligns: Vec<Align> = headers.iter().map(|h| self.align_for(h)).collect();
        self.write_indented(out, &self.build_line(headers, &col_widths, &aligns))?;
        self.write_rule(out, '-', total_width)?;
        for row in rows {
            self.write_indented(out, &self.build_line(row.as_slice(), &col_widths, &aligns))?;
        }
        self.write_rule(out, '-', total_width)
    }

    fn write_title<W: Write + ?Sized>(
        &self,
        out: &mut W,
        table_name: &str,
        width: usize,
    ) -> std::io::Result<()> {
        self.write_indented(out, &table_name.to_uppercase())?;
        self.write_rule(out, '-', width)
    }

    fn compute_col_widths<T: AsRef<str>>(&self, headers: &[&str], rows: &[Vec<T>]) -> Vec<usize> {
        let mut col_widths: Vec<usize> =
            headers.iter().map(|h| self.util.visible_width(h)).collect();
        for r in rows {
            for (w, cell) in col_widths.iter_mut().zip(r) {
                *w = (*w).max(self.util.visible_width(cell.as_ref()));
            }
        }
        col_widths
    }

    fn natural_width(col_widths: &[usize]) -> usize {
        if col_widths.is_empty() {
            0
        } else {
            col_widths.iter().sum::<usize>() + (col_widths.len() - 1) * COLUMN_GAP.len()
        }
    }

    // Trailing padding on the last left-aligned column is trimmed.
    fn build_line<T: AsRef<str>>(
        &self,
        cells: &[T],
        col_widths: &[usize],
        aligns: &[Align],
    ) -> String {
        let line = cells
            .iter()
            .zip(col_widths.iter().zip(aligns))
            .map(|(cell, (&w, align))| match align {
                Align::Left => self.util.pad_visible(cell.as_ref(), w),
                Align::Right => self.util.pad_visible_left(cell.as_ref(), w),
            })
            .collect::<Vec<_>>()
            .join(COLUMN_GAP);
        line.trim_end().to_string()
    }
}
