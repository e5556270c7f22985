//! Tabular PDF rendering: title, print date, then a grid of rows,
//! paginated on A4. Built entirely in memory with `lopdf`.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use super::TableDocument;

const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;
const MARGIN: f32 = 40.0;
const TITLE_SIZE: f32 = 16.0;
const BODY_SIZE: f32 = 8.0;
const ROW_HEIGHT: f32 = 14.0;

/// Render the document to PDF bytes.
pub fn render(document: &TableDocument) -> Result<Vec<u8>, String> {
    if document.is_empty() {
        return Err("Tidak ada data untuk diekspor".to_string());
    }
    let mut pdf = build(document);
    let mut bytes = Vec::new();
    pdf.save_to(&mut bytes)
        .map_err(|e| format!("Gagal menulis PDF: {e}"))?;
    Ok(bytes)
}

/// Assemble the lopdf document. Separate from [`render`] so tests can
/// inspect the page tree without reparsing bytes.
pub fn build(document: &TableDocument) -> Document {
    let mut pdf = Document::with_version("1.5");
    let pages_id = pdf.new_object_id();
    let font_id = pdf.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let font_bold_id = pdf.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
    });
    let resources_id = pdf.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
            "F2" => font_bold_id,
        },
    });

    let column_width =
        (PAGE_WIDTH - 2.0 * MARGIN) / document.headers.len().max(1) as f32;

    let mut kids: Vec<Object> = Vec::new();
    for (index, rows) in paginate(document).into_iter().enumerate() {
        let first = index == 0;
        let content = page_content(document, &rows, column_width, first);
        let content_id = pdf.add_object(Stream::new(
            dictionary! {},
            content.encode().unwrap_or_default(),
        ));
        let page_id = pdf.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    pdf.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
        }),
    );
    let catalog_id = pdf.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    pdf.trailer.set("Root", catalog_id);
    pdf.compress();
    pdf
}

/// Rows per page: the first page loses space to the title block.
fn paginate(document: &TableDocument) -> Vec<Vec<Vec<String>>> {
    let body_top_first = PAGE_HEIGHT - MARGIN - 50.0;
    let body_top_rest = PAGE_HEIGHT - MARGIN;
    let usable = |top: f32| ((top - MARGIN) / ROW_HEIGHT) as usize - 1; // minus header row

    let mut pages = Vec::new();
    let mut remaining: &[Vec<String>] = &document.rows;
    let mut first = true;
    while !remaining.is_empty() {
        let capacity = usable(if first { body_top_first } else { body_top_rest }).max(1);
        let take = capacity.min(remaining.len());
        pages.push(remaining[..take].to_vec());
        remaining = &remaining[take..];
        first = false;
    }
    pages
}

fn page_content(
    document: &TableDocument,
    rows: &[Vec<String>],
    column_width: f32,
    first_page: bool,
) -> Content {
    let mut ops = Vec::new();
    let mut y = PAGE_HEIGHT - MARGIN;

    if first_page {
        text(&mut ops, "F2", TITLE_SIZE, MARGIN, y, &document.title);
        y -= 20.0;
        text(
            &mut ops,
            "F1",
            BODY_SIZE + 2.0,
            MARGIN,
            y,
            &format!("Tanggal Cetak: {}", document.printed_at),
        );
        y -= 30.0;
    }

    // header row in bold, with a rule underneath
    for (col, header) in document.headers.iter().enumerate() {
        text(
            &mut ops,
            "F2",
            BODY_SIZE,
            MARGIN + column_width * col as f32,
            y,
            header,
        );
    }
    let rule_y = y - 4.0;
    ops.push(Operation::new(
        "m",
        vec![MARGIN.into(), rule_y.into()],
    ));
    ops.push(Operation::new(
        "l",
        vec![(PAGE_WIDTH - MARGIN).into(), rule_y.into()],
    ));
    ops.push(Operation::new("S", vec![]));
    y -= ROW_HEIGHT;

    for row in rows {
        for (col, cell) in row.iter().enumerate() {
            text(
                &mut ops,
                "F1",
                BODY_SIZE,
                MARGIN + column_width * col as f32,
                y,
                cell,
            );
        }
        y -= ROW_HEIGHT;
    }

    Content { operations: ops }
}

fn text(ops: &mut Vec<Operation>, font: &str, size: f32, x: f32, y: f32, value: &str) {
    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new("Tf", vec![font.into(), size.into()]));
    ops.push(Operation::new("Td", vec![x.into(), y.into()]));
    ops.push(Operation::new(
        "Tj",
        vec![Object::string_literal(value)],
    ));
    ops.push(Operation::new("ET", vec![]));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(row_count: usize) -> TableDocument {
        let rows = (0..row_count)
            .map(|i| vec![i.to_string(), format!("Item {i}")])
            .collect();
        TableDocument::new(
            "Laporan Inventory Barang",
            "2023-11-22",
            vec!["ID".into(), "Nama Barang".into()],
            rows,
        )
    }

    #[test]
    fn small_table_fits_on_one_page() {
        let pdf = build(&doc(10));
        assert_eq!(pdf.get_pages().len(), 1);
    }

    #[test]
    fn long_table_paginates() {
        let pdf = build(&doc(200));
        assert!(pdf.get_pages().len() > 1);
    }

    #[test]
    fn render_produces_pdf_magic_bytes() {
        let bytes = render(&doc(3)).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));
    }

    #[test]
    fn empty_table_is_an_error() {
        assert!(render(&doc(0)).is_err());
    }
}
