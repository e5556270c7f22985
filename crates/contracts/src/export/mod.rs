//! Export boundary: the currently filtered table rows serialized into a
//! spreadsheet (CSV) or a tabular PDF. Both builders are pure; the
//! frontend only turns the resulting bytes into a browser download.

pub mod csv;
pub mod pdf;

/// A page's table, ready for export: one row per record, columns
/// matching the visible table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDocument {
    pub title: String,
    /// Print date shown under the title, YYYY-MM-DD.
    pub printed_at: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableDocument {
    pub fn new(
        title: impl Into<String>,
        printed_at: impl Into<String>,
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    ) -> Self {
        Self {
            title: title.into(),
            printed_at: printed_at.into(),
            headers,
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// `Laporan_<Page>_<YYYY-MM-DD>.<ext>`
pub fn report_filename(page: &str, date: &str, extension: &str) -> String {
    format!("Laporan_{}_{}.{}", page.replace(' ', ""), date, extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_strips_spaces() {
        assert_eq!(
            report_filename("Quality Control", "2023-11-22", "csv"),
            "Laporan_QualityControl_2023-11-22.csv"
        );
    }
}
