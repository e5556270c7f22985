use contracts::export::{csv, pdf, report_filename, TableDocument};
use leptos::prelude::*;

use crate::shared::download;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;

/// Excel/PDF export pair shown in a page header. The page supplies a
/// builder returning its currently visible rows.
#[component]
pub fn ExportButtons(
    /// Page name used in the report filename.
    page: &'static str,
    builder: Callback<(), TableDocument>,
) -> impl IntoView {
    let toasts = use_toasts();

    let export_csv = move |_| {
        let document = builder.run(());
        match csv::render(&document) {
            Ok(text) => {
                let filename = report_filename(page, &document.printed_at, "csv");
                match download::download_text(&filename, "text/csv;charset=utf-8;", &text) {
                    Ok(()) => toasts.success(format!("{filename} diunduh")),
                    Err(err) => toasts.error(err),
                }
            }
            Err(err) => toasts.error(err),
        }
    };

    let export_pdf = move |_| {
        let document = builder.run(());
        match pdf::render(&document) {
            Ok(bytes) => {
                let filename = report_filename(page, &document.printed_at, "pdf");
                match download::download_bytes(&filename, "application/pdf", &bytes) {
                    Ok(()) => toasts.success(format!("{filename} diunduh")),
                    Err(err) => toasts.error(err),
                }
            }
            Err(err) => toasts.error(err),
        }
    };

    view! {
        <button class="btn btn--secondary" on:click=export_csv title="Ekspor ke Excel">
            {icon("download")}
            " Excel"
        </button>
        <button class="btn btn--secondary" on:click=export_pdf title="Ekspor ke PDF">
            {icon("file-text")}
            " PDF"
        </button>
    }
}
