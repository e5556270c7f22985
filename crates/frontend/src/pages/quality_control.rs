//! Quality control: the sortable results table across the four
//! departments, with rework routing for failed batches.

use contracts::domain::quality::{self, Department, QcDraft, QcEntry, QcStatus};
use contracts::export::TableDocument;
use contracts::list::{
    self, filter_list, matches_dropdown, next_prefixed_id, sort_indicator, sort_list,
};
use leptos::prelude::*;

use crate::shared::components::{ConfirmDialog, ExportButtons, Modal, SearchInput, StatCard};
use crate::shared::date_utils::today;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;

const ALL_DEPARTMENTS: &str = "Semua";

const COLUMNS: [(&str, &str); 6] = [
    ("id", "ID"),
    ("product", "Produk"),
    ("batch", "Batch"),
    ("tested", "Diuji"),
    ("passed", "Lulus"),
    ("date", "Tanggal"),
];

#[component]
pub fn QualityControlPage() -> impl IntoView {
    let toasts = use_toasts();
    let entries = RwSignal::new(quality::seed());
    let filter = RwSignal::new(String::new());
    let department_filter = RwSignal::new(ALL_DEPARTMENTS.to_string());
    let sort_field = RwSignal::new("id".to_string());
    let ascending = RwSignal::new(true);

    let dialog_open = RwSignal::new(false);
    let draft = RwSignal::new(QcDraft::default());
    let form_error = RwSignal::new(None::<String>);
    let confirm_open = RwSignal::new(false);
    let delete_target = RwSignal::new(None::<String>);

    let visible = Memo::new(move |_| {
        let selected = department_filter.get();
        let chosen = (selected != ALL_DEPARTMENTS).then_some(selected);
        let mut rows: Vec<QcEntry> = filter_list(&entries.get(), &filter.get())
            .into_iter()
            .filter(|entry| matches_dropdown(entry.department.label(), chosen.as_deref()))
            .collect();
        sort_list(&mut rows, &sort_field.get(), ascending.get());
        rows
    });

    let average_pass_rate = Signal::derive(move || {
        let rows = visible.get();
        if rows.is_empty() {
            return "0%".to_string();
        }
        let sum: u32 = rows.iter().map(|entry| u32::from(entry.pass_rate())).sum();
        format!("{}%", sum / rows.len() as u32)
    });
    let failed = Signal::derive(move || {
        visible
            .get()
            .iter()
            .filter(|entry| entry.status == QcStatus::TidakLulus)
            .count()
            .to_string()
    });
    let total = Signal::derive(move || visible.get().len().to_string());

    let toggle_sort = move |field: &'static str| {
        if sort_field.get_untracked() == field {
            ascending.update(|asc| *asc = !*asc);
        } else {
            sort_field.set(field.to_string());
            ascending.set(true);
        }
    };

    let open_create = move |_| {
        draft.set(QcDraft {
            status: QcStatus::DalamProses.label().to_string(),
            department: Department::Production.label().to_string(),
            ..Default::default()
        });
        form_error.set(None);
        dialog_open.set(true);
    };

    let save = move |_| {
        let current = draft.get_untracked();
        let Some(department) = Department::parse(current.department.trim()) else {
            form_error.set(Some("Kolom 'department' wajib diisi".to_string()));
            return;
        };
        let id = next_prefixed_id(department.id_prefix(), &entries.get_untracked());
        match current.validate(id) {
            Ok(record) => {
                entries.set(list::create(entries.get_untracked(), record));
                toasts.success("Hasil uji ditambahkan");
                dialog_open.set(false);
            }
            Err(err) => form_error.set(Some(err.to_string())),
        }
    };

    let send_for_repair = move |id: String| {
        entries.update(|list| {
            if let Some(entry) = list.iter_mut().find(|entry| entry.id == id) {
                entry.send_for_repair();
            }
        });
        toasts.info("Batch dikirim untuk perbaikan");
    };

    let confirm_delete = Callback::new(move |()| {
        if let Some(id) = delete_target.get_untracked() {
            entries.set(list::delete(entries.get_untracked(), &id));
            toasts.success("Hasil uji dihapus");
        }
    });

    let build_export = Callback::new(move |()| {
        let rows = visible
            .get_untracked()
            .iter()
            .map(|entry| {
                vec![
                    entry.id.clone(),
                    entry.product.clone(),
                    entry.batch.clone(),
                    entry.department.label().to_string(),
                    entry.tested.to_string(),
                    entry.passed.to_string(),
                    format!("{}%", entry.pass_rate()),
                    entry.status.label().to_string(),
                    entry.date.clone(),
                ]
            })
            .collect();
        TableDocument::new(
            "Laporan Quality Control",
            today(),
            vec![
                "ID".into(),
                "Produk".into(),
                "Batch".into(),
                "Departemen".into(),
                "Diuji".into(),
                "Lulus".into(),
                "Tingkat Lulus".into(),
                "Status".into(),
                "Tanggal".into(),
            ],
            rows,
        )
    });

    view! {
        <div class="page">
            <div class="page-header">
                <div class="page-header__titles">
                    <h2 class="page-header__title">"Quality Control"</h2>
                    <p class="page-header__subtitle">"Hasil uji mutu seluruh departemen"</p>
                </div>
                <div class="page-header__actions">
                    <SearchInput value=filter placeholder="Cari produk atau batch..." />
                    <ExportButtons page="Quality Control" builder=build_export />
                    <button class="btn btn--primary" on:click=open_create>
                        {icon("plus")}
                        " Tambah"
                    </button>
                </div>
            </div>

            <div class="stat-grid">
                <StatCard label="Total Hasil Uji" value=total />
                <StatCard label="Rata-rata Tingkat Lulus" value=average_pass_rate />
                <StatCard label="Tidak Lulus" value=failed />
            </div>

            <div class="tab-bar">
                <button
                    class=move || tab_class(&department_filter.get(), ALL_DEPARTMENTS)
                    on:click=move |_| department_filter.set(ALL_DEPARTMENTS.to_string())
                >
                    {ALL_DEPARTMENTS}
                    <span class="tab__count">{move || entries.get().len()}</span>
                </button>
                {Department::all().into_iter().map(|department| view! {
                    <button
                        class=move || tab_class(&department_filter.get(), department.label())
                        on:click=move |_| department_filter.set(department.label().to_string())
                    >
                        {department.label()}
                        <span class="tab__count">
                            {move || quality::by_department(&entries.get(), department).len()}
                        </span>
                    </button>
                }).collect_view()}
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        {COLUMNS.into_iter().map(|(field, label)| {
                            view! {
                                <th
                                    class="data-table__sortable"
                                    on:click=move |_| toggle_sort(field)
                                >
                                    {label}
                                    {move || sort_indicator(&sort_field.get(), field, ascending.get())}
                                </th>
                            }
                        }).collect_view()}
                        <th>"Departemen"</th>
                        <th>"Status"</th>
                        <th>"Aksi"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || visible.get().into_iter().map(|entry| {
                            let id = entry.id.clone();
                            let repair_id = entry.id.clone();
                            let can_repair = entry.status == QcStatus::TidakLulus;
                            let ask_delete = {
                                let id = id.clone();
                                move |_| {
                                    delete_target.set(Some(id.clone()));
                                    confirm_open.set(true);
                                }
                            };
                            view! {
                                <tr>
                                    <td>{entry.id.clone()}</td>
                                    <td>{entry.product.clone()}</td>
                                    <td>{entry.batch.clone()}</td>
                                    <td>{entry.tested}</td>
                                    <td>{format!("{} ({}%)", entry.passed, entry.pass_rate())}</td>
                                    <td>{entry.date.clone()}</td>
                                    <td>{entry.department.label()}</td>
                                    <td>
                                        <span class=format!("chip chip--{}", status_class(entry.status))>
                                            {entry.status.label()}
                                        </span>
                                    </td>
                                    <td class="data-table__actions">
                                        {can_repair.then(|| {
                                            let repair_id = repair_id.clone();
                                            view! {
                                                <button
                                                    class="btn-icon"
                                                    title="Kirim untuk perbaikan"
                                                    on:click=move |_| send_for_repair(repair_id.clone())
                                                >
                                                    {icon("wrench")}
                                                </button>
                                            }
                                        })}
                                        <button class="btn-icon btn-icon--danger" on:click=ask_delete title="Hapus">
                                            {icon("trash")}
                                        </button>
                                    </td>
                                </tr>
                            }
                    }).collect_view()}
                </tbody>
            </table>

            <Modal open=dialog_open title=Signal::derive(|| "Tambah Hasil Uji".to_string())>
                <div class="form">
                    <label class="form__label">"Produk"</label>
                    <input
                        class="form__input"
                        prop:value=move || draft.get().product
                        on:input=move |ev| draft.update(|d| d.product = event_target_value(&ev))
                    />

                    <label class="form__label">"Batch"</label>
                    <input
                        class="form__input"
                        prop:value=move || draft.get().batch
                        on:input=move |ev| draft.update(|d| d.batch = event_target_value(&ev))
                    />

                    <label class="form__label">"Departemen"</label>
                    <select
                        class="form__select"
                        prop:value=move || draft.get().department
                        on:change=move |ev| draft.update(|d| d.department = event_target_value(&ev))
                    >
                        {Department::all().into_iter().map(|department| view! {
                            <option value=department.label()>{department.label()}</option>
                        }).collect_view()}
                    </select>

                    <div class="form__row">
                        <div>
                            <label class="form__label">"Jumlah Diuji"</label>
                            <input
                                class="form__input"
                                type="number"
                                prop:value=move || draft.get().tested
                                on:input=move |ev| draft.update(|d| d.tested = event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label class="form__label">"Jumlah Lulus"</label>
                            <input
                                class="form__input"
                                type="number"
                                prop:value=move || draft.get().passed
                                on:input=move |ev| draft.update(|d| d.passed = event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <label class="form__label">"Status"</label>
                    <select
                        class="form__select"
                        prop:value=move || draft.get().status
                        on:change=move |ev| draft.update(|d| d.status = event_target_value(&ev))
                    >
                        {[QcStatus::Lulus, QcStatus::TidakLulus, QcStatus::DalamProses, QcStatus::DalamPerbaikan]
                            .into_iter()
                            .map(|status| view! {
                                <option value=status.label()>{status.label()}</option>
                            })
                            .collect_view()}
                    </select>

                    <label class="form__label">"Tanggal Uji"</label>
                    <input
                        class="form__input"
                        type="date"
                        prop:value=move || draft.get().date
                        on:input=move |ev| draft.update(|d| d.date = event_target_value(&ev))
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
                message=Signal::derive(|| "Hapus hasil uji ini?".to_string())
                on_confirm=confirm_delete
            />
        </div>
    }
}

fn tab_class(selected: &str, label: &str) -> &'static str {
    if selected == label {
        "tab tab--active"
    } else {
        "tab"
    }
}

fn status_class(status: QcStatus) -> &'static str {
    match status {
        QcStatus::Lulus => "success",
        QcStatus::TidakLulus => "danger",
        QcStatus::DalamProses => "info",
        QcStatus::DalamPerbaikan => "warning",
    }
}
