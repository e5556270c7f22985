//! Landing page: production overview cards with a simulated live feed.

use contracts::domain::produksi::{self, ProductionOrder, ProductionStatus};
use contracts::list::filter_list;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::shared::components::{Modal, ProgressBar, SearchInput, StatCard};

struct RefreshConfig {
    interval_ms: i32,
    /// Chance that a tick actually mutates anything.
    trigger_probability: f64,
    /// Upper bound on how many units a tick adds to one order.
    max_step_units: u32,
}

const REFRESH: RefreshConfig = RefreshConfig {
    interval_ms: 30_000,
    trigger_probability: 0.4,
    max_step_units: 5,
};

/// One simulated refresh: sometimes bump a random in-progress order.
fn simulate_tick(orders: RwSignal<Vec<ProductionOrder>>) {
    if js_sys::Math::random() > REFRESH.trigger_probability {
        return;
    }
    orders.update(|list| {
        let candidates: Vec<usize> = list
            .iter()
            .enumerate()
            .filter(|(_, order)| {
                order.status == ProductionStatus::DalamProses && order.completed < order.target
            })
            .map(|(index, _)| index)
            .collect();
        if candidates.is_empty() {
            return;
        }
        let pick = candidates
            [(js_sys::Math::random() * candidates.len() as f64) as usize % candidates.len()];
        let bump = 1 + (js_sys::Math::random() * REFRESH.max_step_units as f64) as u32;
        let order = &mut list[pick];
        order.completed = (order.completed + bump).min(order.target);
        if order.completed == order.target {
            order.status = ProductionStatus::Selesai;
        }
    });
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let orders = RwSignal::new(produksi::seed());
    let filter = RwSignal::new(String::new());
    let selected = RwSignal::new(None::<ProductionOrder>);
    let detail_open = RwSignal::new(false);

    let interval_id = {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            simulate_tick(orders);
        }) as Box<dyn Fn()>);
        let id = web_sys::window().and_then(|window| {
            window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    closure.as_ref().unchecked_ref::<js_sys::Function>(),
                    REFRESH.interval_ms,
                )
                .ok()
        });
        closure.forget();
        id
    };
    on_cleanup(move || {
        if let (Some(window), Some(id)) = (web_sys::window(), interval_id) {
            window.clear_interval_with_handle(id);
        }
    });

    let visible = Memo::new(move |_| filter_list(&orders.get(), &filter.get()));

    let total = Signal::derive(move || orders.get().len().to_string());
    let in_progress = Signal::derive(move || {
        orders
            .get()
            .iter()
            .filter(|order| order.status == ProductionStatus::DalamProses)
            .count()
            .to_string()
    });
    let average = Signal::derive(move || {
        let list = orders.get();
        if list.is_empty() {
            return "0%".to_string();
        }
        let sum: u32 = list
            .iter()
            .map(|order| u32::from(order.percent_complete()))
            .sum();
        format!("{}%", sum / list.len() as u32)
    });

    let detail_title =
        Signal::derive(move || selected.get().map(|order| order.name).unwrap_or_default());

    view! {
        <div class="page">
            <div class="page-header">
                <div class="page-header__titles">
                    <h2 class="page-header__title">"Dashboard Produksi"</h2>
                    <p class="page-header__subtitle">"Pantauan pekerjaan produksi Balai Yasa"</p>
                </div>
                <div class="page-header__actions">
                    <SearchInput value=filter placeholder="Cari pekerjaan..." debounce_ms=500 />
                </div>
            </div>

            <div class="stat-grid">
                <StatCard label="Total Pekerjaan" value=total />
                <StatCard label="Dalam Proses" value=in_progress />
                <StatCard label="Rata-rata Progres" value=average />
            </div>

            <div class="card-grid">
                {move || visible.get().into_iter().map(|order| {
                        let percent = order.percent_complete();
                        let status = order.status.label();
                        let open = {
                            let order = order.clone();
                            move |_| {
                                selected.set(Some(order.clone()));
                                detail_open.set(true);
                            }
                        };
                        view! {
                            <div class="card card--clickable" on:click=open>
                                <div class="card__header">
                                    <span class="card__id">{order.id.clone()}</span>
                                    <span class=format!("chip chip--{}", chip_class(order.status))>
                                        {status}
                                    </span>
                                </div>
                                <h3 class="card__title">{order.name.clone()}</h3>
                                <p class="card__meta">
                                    {format!("{} / {} unit", order.completed, order.target)}
                                </p>
                                <ProgressBar percent=Signal::derive(move || percent) />
                            </div>
                        }
                }).collect_view()}
            </div>

            <Modal open=detail_open title=detail_title>
                {move || selected.get().map(|order| view! {
                    <div class="detail">
                        <p class="detail__line">
                            {format!("Periode: {} s/d {}", order.start_date, order.end_date)}
                        </p>
                        <p class="detail__line">
                            {format!("Personel: {}", order.personnel.join(", "))}
                        </p>
                        <p class="detail__line">
                            {format!("Biaya material: Rp {}", order.material_cost())}
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
                    </div>
                })}
            </Modal>
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
