use contracts::domain::supplier::SupplierDto;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::supplier::api;
use crate::shared::icons::icon;

#[component]
pub fn SupplierDetails<F1, F2>(dto: SupplierDto, on_saved: F1, on_cancel: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let is_edit = dto.id.is_some();
    let id = dto.id;

    let name = RwSignal::new(dto.name.clone());
    let contact_name = RwSignal::new(dto.contact_name.clone());
    let email = RwSignal::new(dto.email.clone());
    let phone = RwSignal::new(dto.phone.clone());
    let address = RwSignal::new(dto.address.clone());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        let dto = SupplierDto {
            id,
            name: name.get(),
            contact_name: contact_name.get(),
            email: email.get(),
            phone: phone.get(),
            address: address.get(),
        };
        if let Err(e) = dto.validate() {
            set_error.set(Some(e));
            return;
        }

        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::save_supplier(&dto).await {
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
                        {if is_edit { "Edit Supplier" } else { "Add Supplier" }}
                    </h2>
                    <button class="icon-button" on:click=move |_| on_cancel()>{icon("x")}</button>
                </div>

                <div class="modal-body">
                    {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                    <div class="form__group">
                        <label for="supplier-name">"Company Name *"</label>
                        <input
                            id="supplier-name"
                            type="text"
                            required
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form__group">
                        <label for="supplier-contact">"Contact Name"</label>
                        <input
                            id="supplier-contact"
                            type="text"
                            prop:value=move || contact_name.get()
                            on:input=move |ev| contact_name.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form__row">
                        <div class="form__group">
                            <label for="supplier-email">"Email"</label>
                            <input
                                id="supplier-email"
                                type="email"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form__group">
                            <label for="supplier-phone">"Phone"</label>
                            <input
                                id="supplier-phone"
                                type="tel"
                                prop:value=move || phone.get()
                                on:input=move |ev| phone.set(event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <div class="form__group">
                        <label for="supplier-address">"Address"</label>
                        <textarea
                            id="supplier-address"
                            rows="2"
                            prop:value=move || address.get()
                            on:input=move |ev| address.set(event_target_value(&ev))
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
                            "Add Supplier"
                        }}
                    </button>
                </div>
            </div>
        </div>
    }
}
