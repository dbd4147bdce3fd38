/// Gap between aligned columns.
const COLUMN_PADDING: usize = 2;

/// Row-oriented table whose columns are aligned on their widest cell.
///
/// Every column except the last is padded to its widest cell plus
/// [`COLUMN_PADDING`] spaces; the last column is never padded.
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row<S: Into<String>>(&mut self, cells: impl IntoIterator<Item = S>) {
        self.rows
            .push(cells.into_iter().map(Into::into).collect());
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (idx, cell) in row.iter().enumerate() {
                let len = cell.chars().count();
                match widths.get_mut(idx) {
                    Some(width) => *width = (*width).max(len),
                    None => widths.push(len),
                }
            }
        }
        widths
    }

    /// Renders the header and rows, one line each.
    pub fn render(&self) -> Vec<String> {
        let widths = self.column_widths();
        std::iter::once(&self.headers)
            .chain(self.rows.iter())
            .map(|cells| render_line(cells, &widths))
            .collect()
    }
}

fn render_line(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::new();
    for (idx, cell) in cells.iter().enumerate() {
        if idx + 1 == cells.len() {
            line.push_str(cell);
        } else {
            let width = widths.get(idx).copied().unwrap_or(0) + COLUMN_PADDING;
            line.push_str(&format!("{cell:<width$}"));
        }
    }
    line
}
