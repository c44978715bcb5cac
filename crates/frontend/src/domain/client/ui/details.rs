use contracts::domain::client::ClientDto;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::client::api;
use crate::shared::icons::icon;

#[component]
pub fn ClientDetails<F1, F2>(dto: ClientDto, on_saved: F1, on_cancel: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let is_edit = dto.id.is_some();
    let id = dto.id;

    let name = RwSignal::new(dto.name.clone());
    let contact_phone = RwSignal::new(dto.contact_phone.clone());
    let contact_email = RwSignal::new(dto.contact_email.clone());
    let address = RwSignal::new(dto.address.clone());
    let is_credit_client = RwSignal::new(dto.is_credit_client);
    let credit_limit = RwSignal::new(
        dto.credit_limit
            .map(|v| v.to_string())
            .unwrap_or_default(),
    );
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        let dto = ClientDto {
            id,
            name: name.get(),
            contact_phone: contact_phone.get(),
            contact_email: contact_email.get(),
            address: address.get(),
            is_credit_client: is_credit_client.get(),
            credit_limit: credit_limit.get().trim().parse::<f64>().ok(),
        };
        if let Err(e) = dto.validate() {
            set_error.set(Some(e));
            return;
        }

        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::save_client(&dto).await {
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
                        {if is_edit { "Edit Client" } else { "Add Client" }}
                    </h2>
                    <button class="icon-button" on:click=move |_| on_cancel()>{icon("x")}</button>
                </div>

                <div class="modal-body">
                    {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                    <div class="form__group">
                        <label for="client-name">"Name *"</label>
                        <input
                            id="client-name"
                            type="text"
                            required
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form__row">
                        <div class="form__group">
                            <label for="client-phone">"Phone"</label>
                            <input
                                id="client-phone"
                                type="tel"
                                prop:value=move || contact_phone.get()
                                on:input=move |ev| contact_phone.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form__group">
                            <label for="client-email">"Email"</label>
                            <input
                                id="client-email"
                                type="email"
                                prop:value=move || contact_email.get()
                                on:input=move |ev| contact_email.set(event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <div class="form__group">
                        <label for="client-address">"Address"</label>
                        <textarea
                            id="client-address"
                            rows="2"
                            prop:value=move || address.get()
                            on:input=move |ev| address.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form__group form__group--inline">
                        <input
                            id="client-credit"
                            type="checkbox"
                            prop:checked=move || is_credit_client.get()
                            on:change=move |ev| is_credit_client.set(event_target_checked(&ev))
                        />
                        <label for="client-credit">"Credit client"</label>
                    </div>

                    <Show when=move || is_credit_client.get()>
                        <div class="form__group">
                            <label for="client-credit-limit">"Credit Limit *"</label>
                            <input
                                id="client-credit-limit"
                                type="number"
                                step="0.01"
                                min="0"
                                prop:value=move || credit_limit.get()
                                on:input=move |ev| credit_limit.set(event_target_value(&ev))
                            />
                        </div>
                    </Show>
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
                            "Add Client"
                        }}
                    </button>
                </div>
            </div>
        </div>
    }
}
