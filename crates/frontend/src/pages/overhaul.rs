//! Overhaul Point: rolling-stock overhaul jobs with a work-history
//! timeline per job.

use contracts::domain::overhaul::{self, OverhaulDraft, OverhaulJob, OverhaulStatus};
use contracts::export::TableDocument;
use contracts::list::{self, filter_list, next_numeric_id};
use leptos::prelude::*;

use crate::shared::components::{ConfirmDialog, ExportButtons, Modal, ProgressBar, SearchInput};
use crate::shared::date_utils::{now_timestamp, today};
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;

#[component]
pub fn OverhaulPage() -> impl IntoView {
    let toasts = use_toasts();
    let jobs = RwSignal::new(overhaul::seed());
    let filter = RwSignal::new(String::new());

    let dialog_open = RwSignal::new(false);
    let editing = RwSignal::new(None::<i64>);
    let draft = RwSignal::new(OverhaulDraft::default());
    let form_error = RwSignal::new(None::<String>);

    let history_open = RwSignal::new(false);
    let history_id = RwSignal::new(None::<i64>);
    let history_input = RwSignal::new(String::new());

    let confirm_open = RwSignal::new(false);
    let delete_target = RwSignal::new(None::<i64>);

    let visible = Memo::new(move |_| filter_list(&jobs.get(), &filter.get()));

    let history_job = Memo::new(move |_| {
        history_id
            .get()
            .and_then(|id| jobs.get().into_iter().find(|job: &OverhaulJob| job.id == id))
    });

    let open_create = move |_| {
        editing.set(None);
        draft.set(OverhaulDraft {
            status: OverhaulStatus::Pending.label().to_string(),
            ..Default::default()
        });
        form_error.set(None);
        dialog_open.set(true);
    };

    let save = move |_| {
        let (id, history) = match editing.get_untracked() {
            Some(id) => {
                let history = jobs
                    .get_untracked()
                    .iter()
                    .find(|job| job.id == id)
                    .map(|job| job.history.clone())
                    .unwrap_or_default();
                (id, history)
            }
            None => (next_numeric_id(&jobs.get_untracked()), Vec::new()),
        };
        match draft.get_untracked().validate(id, history) {
            Ok(record) => {
                if editing.get_untracked().is_some() {
                    jobs.set(list::update(jobs.get_untracked(), record));
                    toasts.success("Pekerjaan overhaul diperbarui");
                } else {
                    jobs.set(list::create(jobs.get_untracked(), record));
                    toasts.success("Pekerjaan overhaul ditambahkan");
                }
                dialog_open.set(false);
            }
            Err(err) => form_error.set(Some(err.to_string())),
        }
    };

    let add_history = move |_| {
        let Some(id) = history_id.get_untracked() else {
            return;
        };
        let description = history_input.get_untracked().trim().to_string();
        if description.is_empty() {
            toasts.error("Catatan riwayat tidak boleh kosong");
            return;
        }
        jobs.update(|list| {
            if let Some(job) = list.iter_mut().find(|job| job.id == id) {
                job.add_history(now_timestamp(), description);
            }
        });
        history_input.set(String::new());
        toasts.success("Riwayat dicatat");
    };

    let confirm_delete = Callback::new(move |()| {
        if let Some(id) = delete_target.get_untracked() {
            jobs.set(list::delete(jobs.get_untracked(), &id));
            toasts.success("Pekerjaan overhaul dihapus");
        }
    });

    let build_export = Callback::new(move |()| {
        let rows = visible
            .get_untracked()
            .iter()
            .map(|job| {
                vec![
                    job.id.to_string(),
                    job.name.clone(),
                    job.location.clone(),
                    job.status.label().to_string(),
                    job.estimate_date.clone(),
                    format!("{}%", job.progress),
                ]
            })
            .collect();
        TableDocument::new(
            "Laporan Overhaul Point",
            today(),
            vec![
                "ID".into(),
                "Nama".into(),
                "Lokasi".into(),
                "Status".into(),
                "Estimasi".into(),
                "Progres".into(),
            ],
            rows,
        )
    });

    let dialog_title = Signal::derive(move || {
        if editing.get().is_some() {
            "Edit Pekerjaan Overhaul".to_string()
        } else {
            "Tambah Pekerjaan Overhaul".to_string()
        }
    });
    let history_title = Signal::derive(move || {
        history_job
            .get()
            .map(|job| format!("Riwayat - {}", job.name))
            .unwrap_or_default()
    });

    view! {
        <div class="page">
            <div class="page-header">
                <div class="page-header__titles">
                    <h2 class="page-header__title">"Overhaul Point"</h2>
                    <p class="page-header__subtitle">"Perbaikan besar sarana dan prasarana"</p>
                </div>
                <div class="page-header__actions">
                    <SearchInput value=filter placeholder="Cari pekerjaan..." />
                    <ExportButtons page="Overhaul" builder=build_export />
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
                        <th>"Nama"</th>
                        <th>"Lokasi"</th>
                        <th>"Status"</th>
                        <th>"Estimasi"</th>
                        <th>"Progres"</th>
                        <th>"Aksi"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || visible.get().into_iter().map(|job| {
                            let id = job.id;
                            let progress = job.progress;
                            let edit = {
                                let job = job.clone();
                                move |_| {
                                    editing.set(Some(job.id));
                                    draft.set(OverhaulDraft::from_job(&job));
                                    form_error.set(None);
                                    dialog_open.set(true);
                                }
                            };
                            let open_history = move |_| {
                                history_id.set(Some(id));
                                history_input.set(String::new());
                                history_open.set(true);
                            };
                            let ask_delete = move |_| {
                                delete_target.set(Some(id));
                                confirm_open.set(true);
                            };
                            view! {
                                <tr>
                                    <td>{job.id}</td>
                                    <td>{job.name.clone()}</td>
                                    <td>{job.location.clone()}</td>
                                    <td>
                                        <span class=format!("chip chip--{}", status_class(job.status))>
                                            {job.status.label()}
                                        </span>
                                    </td>
                                    <td>{job.estimate_date.clone()}</td>
                                    <td class="data-table__progress">
                                        <ProgressBar percent=Signal::derive(move || progress) />
                                    </td>
                                    <td class="data-table__actions">
                                        <button class="btn-icon" on:click=open_history title="Riwayat">
                                            {icon("clock")}
                                        </button>
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
                    <label class="form__label">"Nama"</label>
                    <input
                        class="form__input"
                        prop:value=move || draft.get().name
                        on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                    />

                    <label class="form__label">"Lokasi"</label>
                    <input
                        class="form__input"
                        prop:value=move || draft.get().location
                        on:input=move |ev| draft.update(|d| d.location = event_target_value(&ev))
                    />

                    <label class="form__label">"Status"</label>
                    <select
                        class="form__select"
                        prop:value=move || draft.get().status
                        on:change=move |ev| draft.update(|d| d.status = event_target_value(&ev))
                    >
                        {OverhaulStatus::all().into_iter().map(|status| view! {
                            <option value=status.label()>{status.label()}</option>
                        }).collect_view()}
                    </select>

                    <label class="form__label">"Estimasi Selesai"</label>
                    <input
                        class="form__input"
                        type="date"
                        prop:value=move || draft.get().estimate_date
                        on:input=move |ev| draft.update(|d| d.estimate_date = event_target_value(&ev))
                    />

                    <label class="form__label">"Progres (%)"</label>
                    <input
                        class="form__input"
                        type="number"
                        prop:value=move || draft.get().progress
                        on:input=move |ev| draft.update(|d| d.progress = event_target_value(&ev))
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

            <Modal open=history_open title=history_title>
                {move || history_job.get().map(|job| view! {
                    <div class="detail">
                        <ul class="timeline">
                            {job.history.iter().map(|entry| view! {
                                <li class="timeline__entry">
                                    <span class="timeline__date">{entry.timestamp.clone()}</span>
                                    <span>{entry.description.clone()}</span>
                                </li>
                            }).collect_view()}
                        </ul>

                        <div class="form__row">
                            <input
                                class="form__input"
                                placeholder="Catatan pekerjaan..."
                                prop:value=move || history_input.get()
                                on:input=move |ev| history_input.set(event_target_value(&ev))
                            />
                            <button class="btn btn--primary" on:click=add_history>"Catat"</button>
                        </div>
                    </div>
                })}
            </Modal>

            <ConfirmDialog
                open=confirm_open
                message=Signal::derive(|| "Hapus pekerjaan overhaul ini?".to_string())
                on_confirm=confirm_delete
            />
        </div>
    }
}

fn status_class(status: OverhaulStatus) -> &'static str {
    match status {
        OverhaulStatus::Pending => "warning",
        OverhaulStatus::Proses => "info",
        OverhaulStatus::Selesai => "success",
    }
}
