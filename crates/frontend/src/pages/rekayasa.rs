//! Engineering projects with their assigned teams.

use contracts::domain::rekayasa::{self, EngineeringProject, ProjectDraft, ProjectStatus};
use contracts::export::TableDocument;
use contracts::list::{self, filter_list, next_numeric_id};
use leptos::prelude::*;

use crate::shared::components::{ConfirmDialog, ExportButtons, Modal, ProgressBar, SearchInput};
use crate::shared::date_utils::today;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;

#[component]
pub fn RekayasaPage() -> impl IntoView {
    let toasts = use_toasts();
    let projects = RwSignal::new(rekayasa::seed());
    let filter = RwSignal::new(String::new());

    let dialog_open = RwSignal::new(false);
    let editing = RwSignal::new(None::<i64>);
    let draft = RwSignal::new(ProjectDraft::default());
    let form_error = RwSignal::new(None::<String>);
    let team_input = RwSignal::new(String::new());

    let confirm_open = RwSignal::new(false);
    let delete_target = RwSignal::new(None::<i64>);

    let visible = Memo::new(move |_| filter_list(&projects.get(), &filter.get()));

    let open_create = move |_| {
        editing.set(None);
        draft.set(ProjectDraft {
            status: ProjectStatus::Perancangan.label().to_string(),
            progress: "0".to_string(),
            ..Default::default()
        });
        team_input.set(String::new());
        form_error.set(None);
        dialog_open.set(true);
    };

    let add_member = move |_| {
        let member = team_input.get_untracked().trim().to_string();
        if member.is_empty() {
            return;
        }
        draft.update(|d| d.team.push(member));
        team_input.set(String::new());
    };

    let save = move |_| {
        let id = editing
            .get_untracked()
            .unwrap_or_else(|| next_numeric_id(&projects.get_untracked()));
        match draft.get_untracked().validate(id) {
            Ok(record) => {
                if editing.get_untracked().is_some() {
                    projects.set(list::update(projects.get_untracked(), record));
                    toasts.success("Proyek rekayasa diperbarui");
                } else {
                    projects.set(list::create(projects.get_untracked(), record));
                    toasts.success("Proyek rekayasa ditambahkan");
                }
                dialog_open.set(false);
            }
            Err(err) => form_error.set(Some(err.to_string())),
        }
    };

    let confirm_delete = Callback::new(move |()| {
        if let Some(id) = delete_target.get_untracked() {
            projects.set(list::delete(projects.get_untracked(), &id));
            toasts.success("Proyek rekayasa dihapus");
        }
    });

    let build_export = Callback::new(move |()| {
        let rows = visible
            .get_untracked()
            .iter()
            .map(|project: &EngineeringProject| {
                vec![
                    project.id.to_string(),
                    project.name.clone(),
                    project.status.label().to_string(),
                    project.deadline.clone(),
                    format!("{}%", project.progress),
                    project.team.join(", "),
                ]
            })
            .collect();
        TableDocument::new(
            "Laporan Rekayasa",
            today(),
            vec![
                "ID".into(),
                "Nama Proyek".into(),
                "Status".into(),
                "Deadline".into(),
                "Progres".into(),
                "Tim".into(),
            ],
            rows,
        )
    });

    let dialog_title = Signal::derive(move || {
        if editing.get().is_some() {
            "Edit Proyek".to_string()
        } else {
            "Proyek Baru".to_string()
        }
    });

    view! {
        <div class="page">
            <div class="page-header">
                <div class="page-header__titles">
                    <h2 class="page-header__title">"Rekayasa"</h2>
                    <p class="page-header__subtitle">"Proyek pengembangan dan rekayasa teknik"</p>
                </div>
                <div class="page-header__actions">
                    <SearchInput value=filter placeholder="Cari proyek atau tim..." />
                    <ExportButtons page="Rekayasa" builder=build_export />
                    <button class="btn btn--primary" on:click=open_create>
                        {icon("plus")}
                        " Proyek Baru"
                    </button>
                </div>
            </div>

            <div class="card-grid">
                {move || visible.get().into_iter().map(|project| {
                        let id = project.id;
                        let progress = project.progress;
                        let edit = {
                            let project = project.clone();
                            move |_| {
                                editing.set(Some(project.id));
                                draft.set(ProjectDraft::from_project(&project));
                                team_input.set(String::new());
                                form_error.set(None);
                                dialog_open.set(true);
                            }
                        };
                        let ask_delete = move |_| {
                            delete_target.set(Some(id));
                            confirm_open.set(true);
                        };
                        view! {
                            <div class="card">
                                <div class="card__header">
                                    <span class=format!("chip chip--{}", status_class(project.status))>
                                        {project.status.label()}
                                    </span>
                                    <div class="card__actions">
                                        <button class="btn-icon" on:click=edit title="Edit">
                                            {icon("pencil")}
                                        </button>
                                        <button class="btn-icon btn-icon--danger" on:click=ask_delete title="Hapus">
                                            {icon("trash")}
                                        </button>
                                    </div>
                                </div>
                                <h3 class="card__title">{project.name.clone()}</h3>
                                <p class="card__meta">{format!("Deadline: {}", project.deadline)}</p>
                                <ProgressBar percent=Signal::derive(move || progress) />
                                <div class="chip-row">
                                    {project.team.iter().map(|member| view! {
                                        <span class="chip chip--info">{member.clone()}</span>
                                    }).collect_view()}
                                </div>
                            </div>
                        }
                }).collect_view()}
            </div>

            <Modal open=dialog_open title=dialog_title>
                <div class="form">
                    <label class="form__label">"Nama Proyek"</label>
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
                        {ProjectStatus::all().into_iter().map(|status| view! {
                            <option value=status.label()>{status.label()}</option>
                        }).collect_view()}
                    </select>

                    <label class="form__label">"Deadline"</label>
                    <input
                        class="form__input"
                        type="date"
                        prop:value=move || draft.get().deadline
                        on:input=move |ev| draft.update(|d| d.deadline = event_target_value(&ev))
                    />

                    <label class="form__label">"Progres (%)"</label>
                    <input
                        class="form__input"
                        type="number"
                        prop:value=move || draft.get().progress
                        on:input=move |ev| draft.update(|d| d.progress = event_target_value(&ev))
                    />

                    <label class="form__label">"Tim"</label>
                    <div class="form__row">
                        <input
                            class="form__input"
                            prop:value=move || team_input.get()
                            on:input=move |ev| team_input.set(event_target_value(&ev))
                        />
                        <button class="btn btn--secondary" on:click=add_member>"Tambah"</button>
                    </div>
                    <div class="chip-row">
                        {move || draft.get().team.iter().enumerate().map(|(index, member)| {
                            let remove = move |_| draft.update(|d| { d.team.remove(index); });
                            view! {
                                <span class="chip chip--info">
                                    {member.clone()}
                                    <button class="chip__remove" on:click=remove>{icon("x")}</button>
                                </span>
                            }
                        }).collect_view()}
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
                message=Signal::derive(|| "Hapus proyek rekayasa ini?".to_string())
                on_confirm=confirm_delete
            />
        </div>
    }
}

fn status_class(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Perancangan => "warning",
        ProjectStatus::Pengembangan => "info",
        ProjectStatus::Pengujian => "info",
        ProjectStatus::Selesai => "success",
    }
}
