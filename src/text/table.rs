//! Column-aligned table layout for printer lines.
//!
//! Cells are padded by display width, not byte or char count, so columns
//! that mix CJK and ASCII text still line up on screen. Each row becomes one
//! line, ready to hand to [`DiffPrinter::set_lines`](crate::DiffPrinter::set_lines).

use super::width::WidthMode;

/// Layout parameters for [`TableLayout::format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    /// Spaces appended after every padded cell.
    pub gutter: usize,
    /// How cell widths are measured.
    pub width_mode: WidthMode,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            gutter: 2,
            width_mode: WidthMode::Ranges,
        }
    }
}

impl TableLayout {
    /// Widest cell per column. Rows may be ragged.
    pub fn column_widths<R, S>(&self, rows: &[R]) -> Vec<usize>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut widths: Vec<usize> = Vec::with_capacity(16);
        for row in rows {
            let row = row.as_ref();
            if row.len() > widths.len() {
                widths.resize(row.len(), 0);
            }
            for (col, cell) in row.iter().enumerate() {
                let width = self.width_mode.str_width(cell.as_ref());
                widths[col] = widths[col].max(width);
            }
        }
        widths
    }

    /// Lay out `rows` into one line each.
    ///
    /// With `col_widths` set to `None` the widths are computed from the data.
    /// A cell wider than its column is emitted as-is without padding; a column
    /// with no supplied width is sized to the cell itself.
    pub fn format<R, S>(&self, rows: &[R], col_widths: Option<&[usize]>) -> Vec<String>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let computed;
        let widths = if let Some(widths) = col_widths {
            widths
        } else {
            computed = self.column_widths(rows);
            computed.as_slice()
        };

        rows.iter()
            .map(|row| {
                let mut line = String::with_capacity(100);
                for (col, cell) in row.as_ref().iter().enumerate() {
                    let cell = cell.as_ref();
                    let width = self.width_mode.str_width(cell);
                    let column = widths.get(col).copied().unwrap_or(width);
                    line.push_str(cell);
                    if width <= column {
                        line.push_str(&" ".repeat(column - width + self.gutter));
                    }
                }
                line
            })
            .collect()
    }
}

/// Lay out `rows` with the default two-space gutter and range width table.
///
/// ```
/// use diffprint::format_table;
///
/// let lines = format_table(&[vec!["名称", "进度"], vec!["a", "50%"]], None);
/// assert_eq!(lines, vec!["名称  进度  ", "a     50%   "]);
/// ```
pub fn format_table<R, S>(rows: &[R], col_widths: Option<&[usize]>) -> Vec<String>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    TableLayout::default().format(rows, col_widths)
}
