//! Personnel records.

use contracts::domain::personalia::{self, Employee, EmployeeDraft, EmployeeStatus};
use contracts::export::TableDocument;
use contracts::list::{self, filter_list, matches_dropdown, next_numeric_id};
use leptos::prelude::*;

use crate::shared::components::{ConfirmDialog, ExportButtons, Modal, SearchInput};
use crate::shared::date_utils::today;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;

const ALL_STATUSES: &str = "Semua";

#[component]
pub fn PersonaliaPage() -> impl IntoView {
    let toasts = use_toasts();
    let employees = RwSignal::new(personalia::seed());
    let filter = RwSignal::new(String::new());
    let status_filter = RwSignal::new(ALL_STATUSES.to_string());

    let dialog_open = RwSignal::new(false);
    let editing = RwSignal::new(None::<i64>);
    let draft = RwSignal::new(EmployeeDraft::default());
    let form_error = RwSignal::new(None::<String>);
    let confirm_open = RwSignal::new(false);
    let delete_target = RwSignal::new(None::<i64>);

    let visible = Memo::new(move |_| {
        let selected = status_filter.get();
        let chosen = (selected != ALL_STATUSES).then_some(selected);
        filter_list(&employees.get(), &filter.get())
            .into_iter()
            .filter(|employee| matches_dropdown(employee.status.label(), chosen.as_deref()))
            .collect::<Vec<Employee>>()
    });

    let open_create = move |_| {
        editing.set(None);
        draft.set(EmployeeDraft {
            status: EmployeeStatus::Aktif.label().to_string(),
            ..Default::default()
        });
        form_error.set(None);
        dialog_open.set(true);
    };

    let save = move |_| {
        let id = editing
            .get_untracked()
            .unwrap_or_else(|| next_numeric_id(&employees.get_untracked()));
        match draft.get_untracked().validate(id) {
            Ok(record) => {
                if editing.get_untracked().is_some() {
                    employees.set(list::update(employees.get_untracked(), record));
                    toasts.success("Data pegawai diperbarui");
                } else {
                    employees.set(list::create(employees.get_untracked(), record));
                    toasts.success("Pegawai ditambahkan");
                }
                dialog_open.set(false);
            }
            Err(err) => form_error.set(Some(err.to_string())),
        }
    };

    let confirm_delete = Callback::new(move |()| {
        if let Some(id) = delete_target.get_untracked() {
            employees.set(list::delete(employees.get_untracked(), &id));
            toasts.success("Pegawai dihapus");
        }
    });

    let build_export = Callback::new(move |()| {
        let rows = visible
            .get_untracked()
            .iter()
            .map(|employee| {
                vec![
                    employee.nip.clone(),
                    employee.jabatan.clone(),
                    employee.divisi.clone(),
                    employee.lokasi.clone(),
                    employee.status.label().to_string(),
                    employee.join_date.clone(),
                    employee.phone_number.clone(),
                ]
            })
            .collect();
        TableDocument::new(
            "Laporan Personalia",
            today(),
            vec![
                "NIP".into(),
                "Jabatan".into(),
                "Divisi".into(),
                "Lokasi".into(),
                "Status".into(),
                "Tanggal Masuk".into(),
                "Telepon".into(),
            ],
            rows,
        )
    });

    let dialog_title = Signal::derive(move || {
        if editing.get().is_some() {
            "Edit Pegawai".to_string()
        } else {
            "Tambah Pegawai".to_string()
        }
    });

    view! {
        <div class="page">
            <div class="page-header">
                <div class="page-header__titles">
                    <h2 class="page-header__title">"Personalia"</h2>
                    <p class="page-header__subtitle">"Data pegawai Balai Yasa"</p>
                </div>
                <div class="page-header__actions">
                    <SearchInput value=filter placeholder="Cari NIP, jabatan, divisi..." />
                    <select
                        class="form__select"
                        on:change=move |ev| status_filter.set(event_target_value(&ev))
                    >
                        <option value=ALL_STATUSES>{ALL_STATUSES}</option>
                        {EmployeeStatus::all().into_iter().map(|status| view! {
                            <option value=status.label()>{status.label()}</option>
                        }).collect_view()}
                    </select>
                    <ExportButtons page="Personalia" builder=build_export />
                    <button class="btn btn--primary" on:click=open_create>
                        {icon("plus")}
                        " Tambah"
                    </button>
                </div>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"NIP"</th>
                        <th>"Jabatan"</th>
                        <th>"Divisi"</th>
                        <th>"Lokasi"</th>
                        <th>"Status"</th>
                        <th>"Tanggal Masuk"</th>
                        <th>"Telepon"</th>
                        <th>"Aksi"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || visible.get().into_iter().map(|employee| {
                            let id = employee.id;
                            let edit = {
                                let employee = employee.clone();
                                move |_| {
                                    editing.set(Some(employee.id));
                                    draft.set(EmployeeDraft::from_employee(&employee));
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
                                    <td>{employee.nip.clone()}</td>
                                    <td>{employee.jabatan.clone()}</td>
                                    <td>{employee.divisi.clone()}</td>
                                    <td>{employee.lokasi.clone()}</td>
                                    <td>
                                        <span class=format!("chip chip--{}", status_class(employee.status))>
                                            {employee.status.label()}
                                        </span>
                                    </td>
                                    <td>{employee.join_date.clone()}</td>
                                    <td>{employee.phone_number.clone()}</td>
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
                    <label class="form__label">"NIP"</label>
                    <input
                        class="form__input"
                        prop:value=move || draft.get().nip
                        on:input=move |ev| draft.update(|d| d.nip = event_target_value(&ev))
                    />

                    <div class="form__row">
                        <div>
                            <label class="form__label">"Jabatan"</label>
                            <input
                                class="form__input"
                                prop:value=move || draft.get().jabatan
                                on:input=move |ev| draft.update(|d| d.jabatan = event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label class="form__label">"Divisi"</label>
                            <input
                                class="form__input"
                                prop:value=move || draft.get().divisi
                                on:input=move |ev| draft.update(|d| d.divisi = event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <label class="form__label">"Lokasi"</label>
                    <input
                        class="form__input"
                        prop:value=move || draft.get().lokasi
                        on:input=move |ev| draft.update(|d| d.lokasi = event_target_value(&ev))
                    />

                    <label class="form__label">"Status"</label>
                    <select
                        class="form__select"
                        prop:value=move || draft.get().status
                        on:change=move |ev| draft.update(|d| d.status = event_target_value(&ev))
                    >
                        {EmployeeStatus::all().into_iter().map(|status| view! {
                            <option value=status.label()>{status.label()}</option>
                        }).collect_view()}
                    </select>

                    <label class="form__label">"Tanggal Masuk"</label>
                    <input
                        class="form__input"
                        type="date"
                        prop:value=move || draft.get().join_date
                        on:input=move |ev| draft.update(|d| d.join_date = event_target_value(&ev))
                    />

                    <div class="form__row">
                        <div>
                            <label class="form__label">"Nomor Darurat"</label>
                            <input
                                class="form__input"
                                prop:value=move || draft.get().urgent_number
                                on:input=move |ev| draft.update(|d| d.urgent_number = event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label class="form__label">"Telepon"</label>
                            <input
                                class="form__input"
                                prop:value=move || draft.get().phone_number
                                on:input=move |ev| draft.update(|d| d.phone_number = event_target_value(&ev))
                            />
                        </div>
                    </div>

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
                message=Signal::derive(|| "Hapus data pegawai ini?".to_string())
                on_confirm=confirm_delete
            />
        </div>
    }
}

fn status_class(status: EmployeeStatus) -> &'static str {
    match status {
        EmployeeStatus::Aktif => "success",
        EmployeeStatus::Cuti => "warning",
        EmployeeStatus::NonAktif => "danger",
    }
}
