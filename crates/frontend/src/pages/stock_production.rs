//! Production stock levels with the recent-activity feed.

use contracts::domain::stock::{self, StockDraft, StockStatus};
use contracts::export::TableDocument;
use contracts::list::{self, filter_list, next_numeric_id};
use leptos::prelude::*;

use crate::shared::components::{ConfirmDialog, ExportButtons, Modal, SearchInput, StatCard};
use crate::shared::date_utils::today;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;

#[component]
pub fn StockProductionPage() -> impl IntoView {
    let toasts = use_toasts();
    let items = RwSignal::new(stock::seed());
    let activities = stock::seed_activities();
    let filter = RwSignal::new(String::new());

    let dialog_open = RwSignal::new(false);
    let editing = RwSignal::new(None::<i64>);
    let draft = RwSignal::new(StockDraft::default());
    let form_error = RwSignal::new(None::<String>);
    let confirm_open = RwSignal::new(false);
    let delete_target = RwSignal::new(None::<i64>);

    let visible = Memo::new(move |_| filter_list(&items.get(), &filter.get()));

    let total = Signal::derive(move || items.get().len().to_string());
    let low = Signal::derive(move || {
        items
            .get()
            .iter()
            .filter(|item| item.status == StockStatus::Menipis)
            .count()
            .to_string()
    });
    let empty = Signal::derive(move || {
        items
            .get()
            .iter()
            .filter(|item| item.status == StockStatus::Habis)
            .count()
            .to_string()
    });

    let open_create = move |_| {
        editing.set(None);
        draft.set(StockDraft {
            status: StockStatus::Aman.label().to_string(),
            ..Default::default()
        });
        form_error.set(None);
        dialog_open.set(true);
    };

    let save = move |_| {
        let id = editing
            .get_untracked()
            .unwrap_or_else(|| next_numeric_id(&items.get_untracked()));
        match draft.get_untracked().validate(id, &today()) {
            Ok(record) => {
                if editing.get_untracked().is_some() {
                    items.set(list::update(items.get_untracked(), record));
                    toasts.success("Stok berhasil diperbarui");
                } else {
                    items.set(list::create(items.get_untracked(), record));
                    toasts.success("Stok berhasil ditambahkan");
                }
                dialog_open.set(false);
            }
            Err(err) => form_error.set(Some(err.to_string())),
        }
    };

    let confirm_delete = Callback::new(move |()| {
        if let Some(id) = delete_target.get_untracked() {
            items.set(list::delete(items.get_untracked(), &id));
            toasts.success("Stok berhasil dihapus");
        }
    });

    let build_export = Callback::new(move |()| {
        let rows = visible
            .get_untracked()
            .iter()
            .map(|item| {
                vec![
                    item.id.to_string(),
                    item.item_name.clone(),
                    item.quantity.to_string(),
                    item.location.clone(),
                    item.status.label().to_string(),
                    item.last_update.clone(),
                ]
            })
            .collect();
        TableDocument::new(
            "Laporan Stock Production",
            today(),
            vec![
                "ID".into(),
                "Nama Item".into(),
                "Jumlah".into(),
                "Lokasi".into(),
                "Status".into(),
                "Update Terakhir".into(),
            ],
            rows,
        )
    });

    let dialog_title = Signal::derive(move || {
        if editing.get().is_some() {
            "Edit Stok".to_string()
        } else {
            "Tambah Stok".to_string()
        }
    });

    view! {
        <div class="page">
            <div class="page-header">
                <div class="page-header__titles">
                    <h2 class="page-header__title">"Stock Production"</h2>
                    <p class="page-header__subtitle">"Stok hasil produksi per gudang"</p>
                </div>
                <div class="page-header__actions">
                    <SearchInput value=filter placeholder="Cari item..." />
                    <ExportButtons page="Stock Production" builder=build_export />
                    <button class="btn btn--primary" on:click=open_create>
                        {icon("plus")}
                        " Tambah"
                    </button>
                </div>
            </div>

            <div class="stat-grid">
                <StatCard label="Total Item" value=total />
                <StatCard label="Stok Menipis" value=low />
                <StatCard label="Stok Habis" value=empty />
            </div>

            <div class="split-layout">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Nama Item"</th>
                            <th>"Jumlah"</th>
                            <th>"Lokasi"</th>
                            <th>"Status"</th>
                            <th>"Update Terakhir"</th>
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
                                        draft.set(StockDraft::from_item(&item));
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
                                        <td>{item.item_name.clone()}</td>
                                        <td>{item.quantity}</td>
                                        <td>{item.location.clone()}</td>
                                        <td>
                                            <span class=format!("chip chip--{}", status_class(item.status))>
                                                {item.status.label()}
                                            </span>
                                        </td>
                                        <td>{item.last_update.clone()}</td>
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

                <aside class="activity-panel">
                    <h3 class="activity-panel__title">"Aktivitas Terkini"</h3>
                    <ul class="activity-panel__list">
                        {activities.into_iter().map(|activity| view! {
                            <li class="activity-panel__entry">
                                {icon("clock")}
                                <div>
                                    <div>{activity.action}</div>
                                    <div class="activity-panel__time">{activity.time}</div>
                                </div>
                            </li>
                        }).collect_view()}
                    </ul>
                </aside>
            </div>

            <Modal open=dialog_open title=dialog_title>
                <div class="form">
                    <label class="form__label">"Nama Item"</label>
                    <input
                        class="form__input"
                        prop:value=move || draft.get().item_name
                        on:input=move |ev| draft.update(|d| d.item_name = event_target_value(&ev))
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
                        {StockStatus::all().into_iter().map(|status| view! {
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
                message=Signal::derive(|| "Hapus item stok ini?".to_string())
                on_confirm=confirm_delete
            />
        </div>
    }
}

fn status_class(status: StockStatus) -> &'static str {
    match status {
        StockStatus::Aman => "success",
        StockStatus::Menipis => "warning",
        StockStatus::Habis => "danger",
    }
}
