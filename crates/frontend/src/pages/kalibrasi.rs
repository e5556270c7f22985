//! Instrument calibration tasks. Unlike the other pages this list is
//! persisted: it is loaded from browser storage on mount and written
//! back after every change.

use contracts::domain::kalibrasi::{
    CalibrationDraft, CalibrationStatus, CalibrationTask, MAX_PROGRESS_STEPS,
};
use contracts::export::TableDocument;
use contracts::list::{self, filter_list, next_numeric_id};
use contracts::repo::RecordRepository;
use leptos::prelude::*;

use crate::shared::components::{ConfirmDialog, ExportButtons, Modal, ProgressBar, SearchInput};
use crate::shared::date_utils::today;
use crate::shared::icons::icon;
use crate::shared::storage::BrowserStorageRepository;
use crate::shared::toast::use_toasts;

#[component]
pub fn KalibrasiPage() -> impl IntoView {
    let toasts = use_toasts();
    let tasks = RwSignal::new(BrowserStorageRepository.load());
    let filter = RwSignal::new(String::new());

    let dialog_open = RwSignal::new(false);
    let editing = RwSignal::new(None::<i64>);
    let draft = RwSignal::new(CalibrationDraft::default());
    let form_error = RwSignal::new(None::<String>);
    let confirm_open = RwSignal::new(false);
    let delete_target = RwSignal::new(None::<i64>);

    let visible = Memo::new(move |_| filter_list(&tasks.get(), &filter.get()));

    let persist = move |list: &[CalibrationTask]| {
        if let Err(err) = BrowserStorageRepository.save(list) {
            toasts.error(format!("Gagal menyimpan: {err}"));
        }
    };

    let open_create = move |_| {
        editing.set(None);
        draft.set(CalibrationDraft {
            status: CalibrationStatus::BelumDimulai.label().to_string(),
            progress: "0".to_string(),
            ..Default::default()
        });
        form_error.set(None);
        dialog_open.set(true);
    };

    let save = move |_| {
        let id = editing
            .get_untracked()
            .unwrap_or_else(|| next_numeric_id(&tasks.get_untracked()));
        match draft.get_untracked().validate(id) {
            Ok(record) => {
                let updated = if editing.get_untracked().is_some() {
                    list::update(tasks.get_untracked(), record)
                } else {
                    list::create(tasks.get_untracked(), record)
                };
                persist(&updated);
                tasks.set(updated);
                toasts.success("Jadwal kalibrasi disimpan");
                dialog_open.set(false);
            }
            Err(err) => form_error.set(Some(err.to_string())),
        }
    };

    let confirm_delete = Callback::new(move |()| {
        if let Some(id) = delete_target.get_untracked() {
            let updated = list::delete(tasks.get_untracked(), &id);
            persist(&updated);
            tasks.set(updated);
            toasts.success("Jadwal kalibrasi dihapus");
        }
    });

    let build_export = Callback::new(move |()| {
        let rows = visible
            .get_untracked()
            .iter()
            .map(|task| {
                vec![
                    task.id.to_string(),
                    task.name.clone(),
                    task.status.label().to_string(),
                    format!("{}/{}", task.progress, MAX_PROGRESS_STEPS),
                    task.due_date.clone(),
                ]
            })
            .collect();
        TableDocument::new(
            "Laporan Kalibrasi Alat",
            today(),
            vec![
                "ID".into(),
                "Nama Alat".into(),
                "Status".into(),
                "Langkah".into(),
                "Jatuh Tempo".into(),
            ],
            rows,
        )
    });

    let dialog_title = Signal::derive(move || {
        if editing.get().is_some() {
            "Edit Jadwal Kalibrasi".to_string()
        } else {
            "Tambah Jadwal Kalibrasi".to_string()
        }
    });

    view! {
        <div class="page">
            <div class="page-header">
                <div class="page-header__titles">
                    <h2 class="page-header__title">"Kalibrasi Alat"</h2>
                    <p class="page-header__subtitle">"Jadwal kalibrasi instrumen ukur"</p>
                </div>
                <div class="page-header__actions">
                    <SearchInput value=filter placeholder="Cari alat..." />
                    <ExportButtons page="Kalibrasi" builder=build_export />
                    <button class="btn btn--primary" on:click=open_create>
                        {icon("plus")}
                        " Tambah"
                    </button>
                </div>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Nama Alat"</th>
                        <th>"Status"</th>
                        <th>"Langkah"</th>
                        <th>"Jatuh Tempo"</th>
                        <th>"Aksi"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || visible.get().into_iter().map(|task| {
                            let id = task.id;
                            let percent = task.progress * (100 / MAX_PROGRESS_STEPS);
                            let edit = {
                                let task = task.clone();
                                move |_| {
                                    editing.set(Some(task.id));
                                    draft.set(CalibrationDraft::from_task(&task));
                                    form_error.set(None);
                                    dialog_open.set(true);
                                }
                            };
                            let ask_delete = move |_| {
                                delete_target.set(Some(id));
                                confirm_open.set(true);
                            };
                            view! {
                                <tr>
                                    <td>{task.id}</td>
                                    <td>{task.name.clone()}</td>
                                    <td>
                                        <span class=format!("chip chip--{}", status_class(task.status))>
                                            {task.status.label()}
                                        </span>
                                    </td>
                                    <td class="data-table__progress">
                                        <ProgressBar percent=Signal::derive(move || percent) />
                                        <span class="data-table__steps">
                                            {format!("{}/{}", task.progress, MAX_PROGRESS_STEPS)}
                                        </span>
                                    </td>
                                    <td>{task.due_date.clone()}</td>
                                    <td class="data-table__actions">
                                        <button class="btn-icon" on:click=edit title="Edit">
                                            {icon("pencil")}
                                        </button>
                                        <button class="btn-icon btn-icon--danger" on:click=ask_delete title="Hapus">
                                            {icon("trash")}
                                        </button>
                                    </td>
                                </tr>
                            }
                    }).collect_view()}
                </tbody>
            </table>

            <Modal open=dialog_open title=dialog_title>
                <div class="form">
                    <label class="form__label">"Nama Alat"</label>
                    <input
                        class="form__input"
                        prop:value=move || draft.get().name
                        on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                    />

                    <label class="form__label">"Status"</label>
                    <select
                        class="form__select"
                        prop:value=move || draft.get().status
                        on:change=move |ev| draft.update(|d| d.status = event_target_value(&ev))
                    >
                        {CalibrationStatus::all().into_iter().map(|status| view! {
                            <option value=status.label()>{status.label()}</option>
                        }).collect_view()}
                    </select>

                    <label class="form__label">
                        {format!("Langkah Selesai (0-{MAX_PROGRESS_STEPS})")}
                    </label>
                    <input
                        class="form__input"
                        type="number"
                        prop:value=move || draft.get().progress
                        on:input=move |ev| draft.update(|d| d.progress = event_target_value(&ev))
                    />

                    <label class="form__label">"Jatuh Tempo"</label>
                    <input
                        class="form__input"
                        type="date"
                        prop:value=move || draft.get().due_date
                        on:input=move |ev| draft.update(|d| d.due_date = event_target_value(&ev))
                    />

                    {move || form_error.get().map(|message| view! {
                        <div class="form__error">{message}</div>
                    })}

                    <div class="modal__actions">
                        <button class="btn btn--secondary" on:click=move |_| dialog_open.set(false)>
                            "Batal"
                        </button>
                        <button class="btn btn--primary" on:click=save>"Simpan"</button>
                    </div>
                </div>
            </Modal>

            <ConfirmDialog
                open=confirm_open
                message=Signal::derive(|| "Hapus jadwal kalibrasi ini?".to_string())
                on_confirm=confirm_delete
            />
        </div>
    }
}

fn status_class(status: CalibrationStatus) -> &'static str {
    match status {
        CalibrationStatus::BelumDimulai => "warning",
        CalibrationStatus::DalamProses => "info",
        CalibrationStatus::Selesai => "success",
    }
}
