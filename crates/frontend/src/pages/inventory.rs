//! Warehouse inventory: searchable table with a status filter,
//! create/edit dialog and delete confirmation.

use contracts::domain::inventory::{self, InventoryDraft, InventoryItem, InventoryStatus};
use contracts::export::TableDocument;
use contracts::list::{self, filter_list, matches_dropdown, next_numeric_id};
use leptos::prelude::*;

use crate::shared::components::{ConfirmDialog, ExportButtons, Modal, SearchInput};
use crate::shared::date_utils::today;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;

const ALL_STATUSES: &str = "Semua";

#[component]
pub fn InventoryPage() -> impl IntoView {
    let toasts = use_toasts();
    let items = RwSignal::new(inventory::seed());
    let filter = RwSignal::new(String::new());
    let status_filter = RwSignal::new(ALL_STATUSES.to_string());

    let dialog_open = RwSignal::new(false);
    let editing = RwSignal::new(None::<i64>);
    let draft = RwSignal::new(InventoryDraft::default());
    let form_error = RwSignal::new(None::<String>);
    let confirm_open = RwSignal::new(false);
    let delete_target = RwSignal::new(None::<i64>);

    let visible = Memo::new(move |_| {
        let selected = status_filter.get();
        let chosen = (selected != ALL_STATUSES).then_some(selected);
        filter_list(&items.get(), &filter.get())
            .into_iter()
            .filter(|item| matches_dropdown(item.status.label(), chosen.as_deref()))
            .collect::<Vec<InventoryItem>>()
    });

    let open_create = move |_| {
        editing.set(None);
        draft.set(InventoryDraft {
            status: InventoryStatus::Tersedia.label().to_string(),
            ..Default::default()
        });
        form_error.set(None);
        dialog_open.set(true);
    };

    let save = move |_| {
        let id = editing
            .get_untracked()
            .unwrap_or_else(|| next_numeric_id(&items.get_untracked()));
        match draft.get_untracked().validate(id) {
            Ok(record) => {
                if editing.get_untracked().is_some() {
                    items.set(list::update(items.get_untracked(), record));
                    toasts.success("Barang berhasil diperbarui");
                } else {
                    items.set(list::create(items.get_untracked(), record));
                    toasts.success("Barang berhasil ditambahkan");
                }
                dialog_open.set(false);
            }
            Err(err) => form_error.set(Some(err.to_string())),
        }
    };

    let confirm_delete = Callback::new(move |()| {
        if let Some(id) = delete_target.get_untracked() {
            items.set(list::delete(items.get_untracked(), &id));
            toasts.success("Barang berhasil dihapus");
        }
    });

    let build_export = Callback::new(move |()| {
        let rows = visible
            .get_untracked()
            .iter()
            .map(|item| {
                vec![
                    item.id.to_string(),
                    item.name.clone(),
                    item.item_code.clone(),
                    item.quantity.to_string(),
                    item.location.clone(),
                    item.status.label().to_string(),
                ]
            })
            .collect();
        TableDocument::new(
            "Laporan Inventory Barang",
            today(),
            vec![
                "ID".into(),
                "Nama Barang".into(),
                "Kode Barang".into(),
                "Jumlah".into(),
                "Lokasi".into(),
                "Status".into(),
            ],
            rows,
        )
    });

    let dialog_title = Signal::derive(move || {
        if editing.get().is_some() {
            "Edit Barang".to_string()
        } else {
            "Tambah Barang".to_string()
        }
    });

    view! {
        <div class="page">
            <div class="page-header">
                <div class="page-header__titles">
                    <h2 class="page-header__title">"Inventory Barang"</h2>
                    <p class="page-header__subtitle">"Stok barang gudang Balai Yasa"</p>
                </div>
                <div class="page-header__actions">
                    <SearchInput value=filter placeholder="Cari barang..." />
                    <select
                        class="form__select"
                        on:change=move |ev| status_filter.set(event_target_value(&ev))
                    >
                        <option value=ALL_STATUSES>{ALL_STATUSES}</option>
                        {InventoryStatus::all().into_iter().map(|status| view! {
                            <option value=status.label()>{status.label()}</option>
                        }).collect_view()}
                    </select>
                    <ExportButtons page="Inventory" builder=build_export />
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
                        <th>"Nama Barang"</th>
                        <th>"Kode"</th>
                        <th>"Jumlah"</th>
                        <th>"Lokasi"</th>
                        <th>"Status"</th>
                        <th>"Aksi"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || visible.get().into_iter().map(|item| {
                            let id = item.id;
                            let edit = {
                                let item = item.clone();
                                move |_| {
                                    editing.set(Some(item.id));
                                    draft.set(InventoryDraft::from_item(&item));
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
                                    <td>{item.id}</td>
                                    <td>{item.name.clone()}</td>
                                    <td>{item.item_code.clone()}</td>
                                    <td>{item.quantity}</td>
                                    <td>{item.location.clone()}</td>
                                    <td>
                                        <span class=format!("chip chip--{}", status_class(item.status))>
                                            {item.status.label()}
                                        </span>
                                    </td>
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
                    <label class="form__label">"Nama Barang"</label>
                    <input
                        class="form__input"
                        prop:value=move || draft.get().name
                        on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                    />

                    <label class="form__label">"Kode Barang (kosongkan untuk otomatis)"</label>
                    <input
                        class="form__input"
                        prop:value=move || draft.get().item_code
                        on:input=move |ev| draft.update(|d| d.item_code = event_target_value(&ev))
                    />

                    <label class="form__label">"Jumlah"</label>
                    <input
                        class="form__input"
                        type="number"
                        prop:value=move || draft.get().quantity
                        on:input=move |ev| draft.update(|d| d.quantity = event_target_value(&ev))
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
                        {InventoryStatus::all().into_iter().map(|status| view! {
                            <option value=status.label()>{status.label()}</option>
                        }).collect_view()}
                    </select>

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
                message=Signal::derive(|| "Hapus barang ini dari inventory?".to_string())
                on_confirm=confirm_delete
            />
        </div>
    }
}

fn status_class(status: InventoryStatus) -> &'static str {
    match status {
        InventoryStatus::Tersedia => "success",
        InventoryStatus::Limit => "warning",
        InventoryStatus::TidakTersedia => "danger",
        InventoryStatus::Diproduksi => "info",
        InventoryStatus::Perbaikan => "warning",
    }
}
