//! CSV rendering for the spreadsheet export.
//!
//! Semicolon-separated with a UTF-8 BOM so spreadsheet applications open
//! the file with the right encoding and column split.

use super::TableDocument;

const SEPARATOR: char = ';';

/// Render the document as CSV text. The title is not embedded; the file
/// name carries it.
pub fn render(document: &TableDocument) -> Result<String, String> {
    if document.is_empty() {
        return Err("Tidak ada data untuk diekspor".to_string());
    }

    let mut out = String::new();
    out.push('\u{FEFF}');

    push_row(&mut out, &document.headers);
    for row in &document.rows {
        push_row(&mut out, row);
    }
    Ok(out)
}

fn push_row(out: &mut String, cells: &[String]) {
    let escaped: Vec<String> = cells.iter().map(|cell| escape_cell(cell)).collect();
    out.push_str(&escaped.join(&SEPARATOR.to_string()));
    out.push('\n');
}

/// Quote cells containing the separator, quotes or line breaks; double
/// any embedded quotes.
fn escape_cell(cell: &str) -> String {
    if cell.contains(SEPARATOR) || cell.contains('"') || cell.contains('\n') || cell.contains('\r')
    {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(rows: Vec<Vec<String>>) -> TableDocument {
        TableDocument::new(
            "Inventory",
            "2023-11-22",
            vec!["ID".into(), "Nama".into()],
            rows,
        )
    }

    #[test]
    fn renders_bom_headers_and_rows() {
        let text = render(&doc(vec![vec!["1".into(), "Rel Kereta".into()]])).unwrap();
        assert!(text.starts_with('\u{FEFF}'));
        assert_eq!(text.trim_start_matches('\u{FEFF}'), "ID;Nama\n1;Rel Kereta\n");
    }

    #[test]
    fn escapes_separator_and_quotes() {
        assert_eq!(escape_cell("a;b"), "\"a;b\"");
        assert_eq!(escape_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_cell("plain"), "plain");
    }

    #[test]
    fn empty_document_is_an_error() {
        assert!(render(&doc(vec![])).is_err());
    }
}
