//! Production orders: order cards, a multi-part create dialog with
//! personnel and bill-of-materials entry, and a progress log per order.

use contracts::domain::produksi::{
    self, Material, ProductionDraft, ProductionOrder, ProductionStatus, ProgressEntry,
};
use contracts::export::TableDocument;
use contracts::list::{self, filter_list, next_prefixed_id};
use leptos::prelude::*;

use crate::shared::components::{ConfirmDialog, ExportButtons, Modal, ProgressBar, SearchInput};
use crate::shared::date_utils::today;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;

#[component]
pub fn ProduksiPage() -> impl IntoView {
    let toasts = use_toasts();
    let orders = RwSignal::new(produksi::seed());
    let filter = RwSignal::new(String::new());

    let dialog_open = RwSignal::new(false);
    let draft = RwSignal::new(ProductionDraft::default());
    let form_error = RwSignal::new(None::<String>);

    // personnel / material entry rows inside the dialog
    let person_input = RwSignal::new(String::new());
    let mat_name = RwSignal::new(String::new());
    let mat_qty = RwSignal::new(String::new());
    let mat_harga = RwSignal::new(String::new());
    let mat_satuan = RwSignal::new(String::new());

    let detail_open = RwSignal::new(false);
    let detail_id = RwSignal::new(None::<String>);
    let progress_completed = RwSignal::new(String::new());
    let progress_notes = RwSignal::new(String::new());

    let confirm_open = RwSignal::new(false);
    let delete_target = RwSignal::new(None::<String>);

    let visible = Memo::new(move |_| filter_list(&orders.get(), &filter.get()));

    // the open detail always reflects the current list state
    let detail = Memo::new(move |_| {
        detail_id.get().and_then(|id| {
            orders
                .get()
                .into_iter()
                .find(|order: &ProductionOrder| order.id == id)
        })
    });

    let open_create = move |_| {
        draft.set(ProductionDraft::default());
        person_input.set(String::new());
        mat_name.set(String::new());
        mat_qty.set(String::new());
        mat_harga.set(String::new());
        mat_satuan.set(String::new());
        form_error.set(None);
        dialog_open.set(true);
    };

    let add_person = move |_| {
        let name = person_input.get_untracked().trim().to_string();
        if name.is_empty() {
            return;
        }
        draft.update(|d| d.personnel.push(name));
        person_input.set(String::new());
    };

    let add_material = move |_| {
        let name = mat_name.get_untracked().trim().to_string();
        let satuan = mat_satuan.get_untracked().trim().to_string();
        let qty = mat_qty.get_untracked().trim().parse::<u32>();
        let harga = mat_harga.get_untracked().trim().parse::<u64>();
        match (name.is_empty(), qty, harga) {
            (false, Ok(qty), Ok(harga)) => {
                draft.update(|d| {
                    d.materials.push(Material {
                        name,
                        qty,
                        harga,
                        satuan,
                    })
                });
                mat_name.set(String::new());
                mat_qty.set(String::new());
                mat_harga.set(String::new());
                mat_satuan.set(String::new());
            }
            _ => toasts.error("Material membutuhkan nama, jumlah dan harga yang valid"),
        }
    };

    let save = move |_| {
        let id = next_prefixed_id("PRD", &orders.get_untracked());
        match draft.get_untracked().validate(id) {
            Ok(record) => {
                orders.set(list::create(orders.get_untracked(), record));
                toasts.success("Pekerjaan produksi ditambahkan");
                dialog_open.set(false);
            }
            Err(err) => form_error.set(Some(err.to_string())),
        }
    };

    let add_progress = move |_| {
        let Some(id) = detail_id.get_untracked() else {
            return;
        };
        let Ok(completed) = progress_completed.get_untracked().trim().parse::<u32>() else {
            toasts.error("Jumlah selesai harus berupa angka");
            return;
        };
        orders.update(|list| {
            if let Some(order) = list.iter_mut().find(|order| order.id == id) {
                order.progress.push(ProgressEntry {
                    date: today(),
                    completed,
                    notes: progress_notes.get_untracked().trim().to_string(),
                });
                order.completed = completed.min(order.target);
                if order.completed == order.target {
                    order.status = ProductionStatus::Selesai;
                }
            }
        });
        progress_completed.set(String::new());
        progress_notes.set(String::new());
        toasts.success("Progres dicatat");
    };

    let confirm_delete = Callback::new(move |()| {
        if let Some(id) = delete_target.get_untracked() {
            orders.set(list::delete(orders.get_untracked(), &id));
            toasts.success("Pekerjaan produksi dihapus");
        }
    });

    let build_export = Callback::new(move |()| {
        let rows = visible
            .get_untracked()
            .iter()
            .map(|order| {
                vec![
                    order.id.clone(),
                    order.name.clone(),
                    order.target.to_string(),
                    order.completed.to_string(),
                    format!("{}%", order.percent_complete()),
                    order.status.label().to_string(),
                    order.start_date.clone(),
                    order.end_date.clone(),
                ]
            })
            .collect();
        TableDocument::new(
            "Laporan Produksi",
            today(),
            vec![
                "ID".into(),
                "Nama".into(),
                "Target".into(),
                "Selesai".into(),
                "Progres".into(),
                "Status".into(),
                "Mulai".into(),
                "Target Selesai".into(),
            ],
            rows,
        )
    });

    let detail_title =
        Signal::derive(move || detail.get().map(|order| order.name).unwrap_or_default());

    view! {
        <div class="page">
            <div class="page-header">
                <div class="page-header__titles">
                    <h2 class="page-header__title">"Produksi"</h2>
                    <p class="page-header__subtitle">"Pekerjaan produksi beserta material dan progres"</p>
                </div>
                <div class="page-header__actions">
                    <SearchInput value=filter placeholder="Cari pekerjaan..." />
                    <ExportButtons page="Produksi" builder=build_export />
                    <button class="btn btn--primary" on:click=open_create>
                        {icon("plus")}
                        " Pekerjaan Baru"
                    </button>
                </div>
            </div>

            <div class="card-grid">
                {move || visible.get().into_iter().map(|order| {
                        let id = order.id.clone();
                        let percent = order.percent_complete();
                        let open_detail = {
                            let id = id.clone();
                            move |_| {
                                detail_id.set(Some(id.clone()));
                                progress_completed.set(String::new());
                                progress_notes.set(String::new());
                                detail_open.set(true);
                            }
                        };
                        let ask_delete = {
                            let id = id.clone();
                            move |_| {
                                delete_target.set(Some(id.clone()));
                                confirm_open.set(true);
                            }
                        };
                        view! {
                            <div class="card">
                                <div class="card__header">
                                    <span class="card__id">{order.id.clone()}</span>
                                    <span class=format!("chip chip--{}", chip_class(order.status))>
                                        {order.status.label()}
                                    </span>
                                </div>
                                <h3 class="card__title">{order.name.clone()}</h3>
                                <p class="card__meta">
                                    {format!("{} / {} unit | Rp {}", order.completed, order.target, order.material_cost())}
                                </p>
                                <ProgressBar percent=Signal::derive(move || percent) />
                                <div class="card__actions">
                                    <button class="btn btn--secondary" on:click=open_detail>"Detail"</button>
                                    <button class="btn-icon btn-icon--danger" on:click=ask_delete title="Hapus">
                                        {icon("trash")}
                                    </button>
                                </div>
                            </div>
                        }
                }).collect_view()}
            </div>

            <Modal open=dialog_open title=Signal::derive(|| "Pekerjaan Produksi Baru".to_string())>
                <div class="form">
                    <label class="form__label">"Nama Pekerjaan"</label>
                    <input
                        class="form__input"
                        prop:value=move || draft.get().name
                        on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                    />

                    <label class="form__label">"Target (unit)"</label>
                    <input
                        class="form__input"
                        type="number"
                        prop:value=move || draft.get().target
                        on:input=move |ev| draft.update(|d| d.target = event_target_value(&ev))
                    />

                    <div class="form__row">
                        <div>
                            <label class="form__label">"Tanggal Mulai"</label>
                            <input
                                class="form__input"
                                type="date"
                                prop:value=move || draft.get().start_date
                                on:input=move |ev| draft.update(|d| d.start_date = event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label class="form__label">"Target Selesai"</label>
                            <input
                                class="form__input"
                                type="date"
                                prop:value=move || draft.get().end_date
                                on:input=move |ev| draft.update(|d| d.end_date = event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <label class="form__label">"Personel"</label>
                    <div class="form__row">
                        <input
                            class="form__input"
                            prop:value=move || person_input.get()
                            on:input=move |ev| person_input.set(event_target_value(&ev))
                        />
                        <button class="btn btn--secondary" on:click=add_person>"Tambah"</button>
                    </div>
                    <div class="chip-row">
                        {move || draft.get().personnel.iter().enumerate().map(|(index, person)| {
                            let remove = move |_| draft.update(|d| { d.personnel.remove(index); });
                            view! {
                                <span class="chip chip--info">
                                    {person.clone()}
                                    <button class="chip__remove" on:click=remove>{icon("x")}</button>
                                </span>
                            }
                        }).collect_view()}
                    </div>

                    <label class="form__label">"Material"</label>
                    <div class="form__row">
                        <input class="form__input" placeholder="Nama"
                            prop:value=move || mat_name.get()
                            on:input=move |ev| mat_name.set(event_target_value(&ev)) />
                        <input class="form__input" type="number" placeholder="Jumlah"
                            prop:value=move || mat_qty.get()
                            on:input=move |ev| mat_qty.set(event_target_value(&ev)) />
                        <input class="form__input" type="number" placeholder="Harga satuan"
                            prop:value=move || mat_harga.get()
                            on:input=move |ev| mat_harga.set(event_target_value(&ev)) />
                        <input class="form__input" placeholder="Satuan"
                            prop:value=move || mat_satuan.get()
                            on:input=move |ev| mat_satuan.set(event_target_value(&ev)) />
                        <button class="btn btn--secondary" on:click=add_material>"Tambah"</button>
                    </div>
                    <ul class="material-list">
                        {move || draft.get().materials.iter().enumerate().map(|(index, material)| {
                            let remove = move |_| draft.update(|d| { d.materials.remove(index); });
                            view! {
                                <li class="material-list__entry">
                                    {format!("{} - {} {} @ Rp {}", material.name, material.qty, material.satuan, material.harga)}
                                    <button class="chip__remove" on:click=remove>{icon("x")}</button>
                                </li>
                            }
                        }).collect_view()}
                    </ul>

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

            <Modal open=detail_open title=detail_title>
                {move || detail.get().map(|order| view! {
                    <div class="detail">
                        <p class="detail__line">
                            {format!("Periode: {} s/d {}", order.start_date, order.end_date)}
                        </p>
                        <p class="detail__line">
                            {format!("Personel: {}", order.personnel.join(", "))}
                        </p>

                        <h4>"Material"</h4>
                        <ul class="material-list">
                            {order.materials.iter().map(|material| view! {
                                <li class="material-list__entry">
                                    {format!("{} - {} {} @ Rp {}", material.name, material.qty, material.satuan, material.harga)}
                                </li>
                            }).collect_view()}
                        </ul>
                        <p class="detail__line">
                            {format!("Total biaya material: Rp {}", order.material_cost())}
                        </p>

                        <h4>"Log Progres"</h4>
                        <ul class="timeline">
                            {order.progress.iter().map(|entry| view! {
                                <li class="timeline__entry">
                                    <span class="timeline__date">{entry.date.clone()}</span>
                                    <span>{format!("{} unit - {}", entry.completed, entry.notes)}</span>
                                </li>
                            }).collect_view()}
                        </ul>

                        <div class="form__row">
                            <input
                                class="form__input"
                                type="number"
                                placeholder="Total unit selesai"
                                prop:value=move || progress_completed.get()
                                on:input=move |ev| progress_completed.set(event_target_value(&ev))
                            />
                            <input
                                class="form__input"
                                placeholder="Catatan"
                                prop:value=move || progress_notes.get()
                                on:input=move |ev| progress_notes.set(event_target_value(&ev))
                            />
                            <button class="btn btn--primary" on:click=add_progress>"Catat"</button>
                        </div>
                    </div>
                })}
            </Modal>

            <ConfirmDialog
                open=confirm_open
                message=Signal::derive(|| "Hapus pekerjaan produksi ini?".to_string())
                on_confirm=confirm_delete
            />
        </div>
    }
}

fn chip_class(status: ProductionStatus) -> &'static str {
    match status {
        ProductionStatus::DalamProses => "info",
        ProductionStatus::Selesai => "success",
        ProductionStatus::Tertunda => "warning",
    }
}
