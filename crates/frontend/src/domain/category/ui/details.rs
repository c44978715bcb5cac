use contracts::domain::category::CategoryDto;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::category::api;
use crate::shared::icons::icon;

#[component]
pub fn CategoryDetails<F1, F2>(dto: CategoryDto, on_saved: F1, on_cancel: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let is_edit = dto.id.is_some();
    let id = dto.id;

    let name = RwSignal::new(dto.name.clone());
    let description = RwSignal::new(dto.description.clone());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        let dto = CategoryDto {
            id,
            name: name.get(),
            description: description.get(),
        };
        if let Err(e) = dto.validate() {
            set_error.set(Some(e));
            return;
        }

        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::save_category(&dto).await {
                Ok(()) => on_saved(),
                Err(e) => {
                    set_error.set(Some(e));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_cancel()>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">
                        {if is_edit { "Edit Category" } else { "Add Category" }}
                    </h2>
                    <button class="icon-button" on:click=move |_| on_cancel()>{icon("x")}</button>
                </div>

                <div class="modal-body">
                    {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                    <div class="form__group">
                        <label for="category-name">"Name *"</label>
                        <input
                            id="category-name"
                            type="text"
                            required
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form__group">
                        <label for="category-description">"Description"</label>
                        <textarea
                            id="category-description"
                            rows="3"
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="modal-footer">
                    <button
                        class="button button--secondary"
                        on:click=move |_| on_cancel()
                        disabled=move || saving.get()
                    >
                        "Cancel"
                    </button>
                    <button
                        class="button button--primary"
                        on:click=on_save
                        disabled=move || saving.get()
                    >
                        {icon("save")}
                        {move || if saving.get() {
                            "Saving..."
                        } else if is_edit {
                            "Save Changes"
                        } else {
                            "Add Category"
                        }}
                    </button>
                </div>
            </div>
        </div>
    }
}
