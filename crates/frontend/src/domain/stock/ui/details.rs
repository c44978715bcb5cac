use contracts::domain::stock::StockDto;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::stock::api;
use crate::shared::icons::icon;
use crate::shared::store::use_store;

#[component]
pub fn StockDetails<F1, F2>(dto: StockDto, on_saved: F1, on_cancel: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let store = use_store();
    let is_edit = dto.id.is_some();
    let id = dto.id;

    let product_id = RwSignal::new(dto.product_id);
    let supplier_id = RwSignal::new(dto.supplier_id);
    let quantity = RwSignal::new(dto.quantity.to_string());
    let cost_price = RwSignal::new(
        dto.cost_price
            .map(|v| v.to_string())
            .unwrap_or_default(),
    );
    let selling_price = RwSignal::new(dto.selling_price.to_string());
    let location = RwSignal::new(dto.location.clone());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        let dto = StockDto {
            id,
            product_id: product_id.get(),
            supplier_id: supplier_id.get(),
            quantity: quantity.get().trim().parse::<i32>().unwrap_or(0),
            cost_price: cost_price.get().trim().parse::<f64>().ok(),
            selling_price: selling_price.get().trim().parse::<f64>().unwrap_or(0.0),
            location: location.get(),
        };
        if let Err(e) = dto.validate() {
            set_error.set(Some(e));
            return;
        }

        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::save_stock(&dto).await {
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
                        {if is_edit { "Edit Stock" } else { "Add Stock" }}
                    </h2>
                    <button class="icon-button" on:click=move |_| on_cancel()>{icon("x")}</button>
                </div>

                <div class="modal-body">
                    {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                    <div class="form__group">
                        <label for="stock-product">"Product *"</label>
                        <select
                            id="stock-product"
                            required
                            on:change=move |ev| {
                                product_id.set(event_target_value(&ev).parse::<i64>().ok())
                            }
                        >
                            <option value="" selected=move || product_id.get().is_none()>
                                "Select Product"
                            </option>
                            {move || store.products.get().into_iter().map(|p| {
                                let pid = p.id;
                                view! {
                                    <option
                                        value=pid.to_string()
                                        selected=move || product_id.get() == Some(pid)
                                    >
                                        {p.name}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="form__group">
                        <label for="stock-supplier">"Supplier"</label>
                        <select
                            id="stock-supplier"
                            on:change=move |ev| {
                                supplier_id.set(event_target_value(&ev).parse::<i64>().ok())
                            }
                        >
                            <option value="" selected=move || supplier_id.get().is_none()>
                                "Select Supplier"
                            </option>
                            {move || store.suppliers.get().into_iter().map(|s| {
                                let sid = s.id;
                                view! {
                                    <option
                                        value=sid.to_string()
                                        selected=move || supplier_id.get() == Some(sid)
                                    >
                                        {s.name}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="form__row">
                        <div class="form__group">
                            <label for="stock-quantity">"Quantity *"</label>
                            <input
                                id="stock-quantity"
                                type="number"
                                min="0"
                                required
                                prop:value=move || quantity.get()
                                on:input=move |ev| quantity.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form__group">
                            <label for="stock-location">"Location"</label>
                            <input
                                id="stock-location"
                                type="text"
                                prop:value=move || location.get()
                                on:input=move |ev| location.set(event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <div class="form__row">
                        <div class="form__group">
                            <label for="stock-cost-price">"Cost Price"</label>
                            <input
                                id="stock-cost-price"
                                type="number"
                                step="0.01"
                                min="0"
                                prop:value=move || cost_price.get()
                                on:input=move |ev| cost_price.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form__group">
                            <label for="stock-selling-price">"Selling Price *"</label>
                            <input
                                id="stock-selling-price"
                                type="number"
                                step="0.01"
                                min="0"
                                required
                                prop:value=move || selling_price.get()
                                on:input=move |ev| selling_price.set(event_target_value(&ev))
                            />
                        </div>
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
                            "Add Stock"
                        }}
                    </button>
                </div>
            </div>
        </div>
    }
}
