//! ASCII table writer
//!
//! Renders one bordered table per scheme group. The line structure is
//! load-bearing for the pointer-offset space: top border, header row,
//! separator, then exactly one line per data row, then the bottom border.

/// A bordered text table
pub struct AsciiTable {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl AsciiTable {
    /// Number of lines a table emits before its first data row
    pub const HEADER_LINES: usize = 3;

    /// Create a table with the given header cells
    pub fn new(header: Vec<String>) -> Self {
        Self {
            header,
            rows: Vec::new(),
        }
    }

    /// Append one data row
    pub fn add_row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Render to lines: border, header, border, rows, border
    pub fn render(&self) -> Vec<String> {
        let column_count = self
            .rows
            .iter()
            .map(|r| r.len())
            .chain(std::iter::once(self.header.len()))
            .max()
            .unwrap_or(0);

        // Column widths from header and cell contents (in characters)
        let mut widths = vec![0usize; column_count];
        for (i, cell) in self.header.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let border = border_line(&widths);

        let mut lines = Vec::with_capacity(self.rows.len() + 4);
        lines.push(border.clone());
        lines.push(cell_line(&self.header, &widths));
        lines.push(border.clone());
        for row in &self.rows {
            lines.push(cell_line(row, &widths));
        }
        lines.push(border);
        lines
    }
}

fn border_line(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

fn cell_line(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (i, width) in widths.iter().enumerate() {
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        let pad = width.saturating_sub(cell.chars().count());
        line.push(' ');
        line.push_str(cell);
        line.push_str(&" ".repeat(pad));
        line.push_str(" |");
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_line_structure() {
        let mut table = AsciiTable::new(strings(&["Site", "Pwd"]));
        table.add_row(strings(&["github.com", "********"]));
        table.add_row(strings(&["gitlab.com", "********"]));

        let lines = table.render();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with('+'));
        assert!(lines[1].contains("Site"));
        assert_eq!(lines[0], lines[2]);
        assert_eq!(lines[0], lines[5]);
        // First data row lands exactly HEADER_LINES after the table start
        assert!(lines[AsciiTable::HEADER_LINES].contains("github.com"));
    }

    #[test]
    fn test_rendered_output() {
        let mut table = AsciiTable::new(strings(&["Site", "Pwd"]));
        table.add_row(strings(&["github.com", "********"]));

        let lines = table.render();
        assert_eq!(lines[0], "+------------+----------+");
        assert_eq!(lines[1], "| Site       | Pwd      |");
        assert_eq!(lines[3], "| github.com | ******** |");
    }

    #[test]
    fn test_all_lines_same_width() {
        let mut table = AsciiTable::new(strings(&["A", "Long header"]));
        table.add_row(strings(&["a longer cell", "x"]));

        let lines = table.render();
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
    }

    #[test]
    fn test_short_row_padded() {
        let mut table = AsciiTable::new(strings(&["A", "B"]));
        table.add_row(strings(&["only"]));

        let lines = table.render();
        assert_eq!(lines.len(), 5);
        assert!(lines[3].starts_with("| only |"));
    }

    #[test]
    fn test_unicode_widths_use_chars() {
        let mut table = AsciiTable::new(strings(&["名前"]));
        table.add_row(strings(&["ab"]));

        let lines = table.render();
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
    }

    #[test]
    fn test_empty_table_still_renders_frame() {
        let table = AsciiTable::new(Vec::new());
        let lines = table.render();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "+");
    }
}
