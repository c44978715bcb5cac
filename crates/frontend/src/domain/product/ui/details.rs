use contracts::domain::product::ProductDto;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::product::api;
use crate::shared::icons::icon;
use crate::shared::store::use_store;

/// Modal form for creating or editing a product. Closes (via `on_saved`)
/// only after the server accepts the submission.
#[component]
pub fn ProductDetails<F1, F2>(dto: ProductDto, on_saved: F1, on_cancel: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let store = use_store();
    let is_edit = dto.id.is_some();
    let id = dto.id;

    let name = RwSignal::new(dto.name.clone());
    let sku = RwSignal::new(dto.sku.clone());
    let description = RwSignal::new(dto.description.clone());
    let price = RwSignal::new(dto.price.to_string());
    let quantity = RwSignal::new(dto.quantity.to_string());
    let category_id = RwSignal::new(dto.category_id);
    let supplier_id = RwSignal::new(dto.supplier_id);
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        let dto = ProductDto {
            id,
            name: name.get(),
            sku: sku.get(),
            description: description.get(),
            price: price.get().trim().parse::<f64>().unwrap_or(0.0),
            quantity: quantity.get().trim().parse::<i32>().unwrap_or(0),
            category_id: category_id.get(),
            supplier_id: supplier_id.get(),
        };
        if let Err(e) = dto.validate() {
            set_error.set(Some(e));
            return;
        }

        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::save_product(&dto).await {
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
                        {if is_edit { "Edit Product" } else { "Add Product" }}
                    </h2>
                    <button class="icon-button" on:click=move |_| on_cancel()>{icon("x")}</button>
                </div>

                <div class="modal-body">
                    {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                    <div class="form__group">
                        <label for="product-name">"Name *"</label>
                        <input
                            id="product-name"
                            type="text"
                            required
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form__group">
                        <label for="product-sku">"SKU"</label>
                        <input
                            id="product-sku"
                            type="text"
                            prop:value=move || sku.get()
                            on:input=move |ev| sku.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form__group">
                        <label for="product-description">"Description"</label>
                        <textarea
                            id="product-description"
                            rows="3"
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form__row">
                        <div class="form__group">
                            <label for="product-price">"Price"</label>
                            <input
                                id="product-price"
                                type="number"
                                step="0.01"
                                min="0"
                                prop:value=move || price.get()
                                on:input=move |ev| price.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form__group">
                            <label for="product-quantity">"Quantity"</label>
                            <input
                                id="product-quantity"
                                type="number"
                                min="0"
                                prop:value=move || quantity.get()
                                on:input=move |ev| quantity.set(event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <div class="form__group">
                        <label for="product-category">"Category"</label>
                        <select
                            id="product-category"
                            on:change=move |ev| {
                                category_id.set(event_target_value(&ev).parse::<i64>().ok())
                            }
                        >
                            <option value="" selected=move || category_id.get().is_none()>
                                "Select Category"
                            </option>
                            {move || store.categories.get().into_iter().map(|c| {
                                let cid = c.id;
                                view! {
                                    <option
                                        value=cid.to_string()
                                        selected=move || category_id.get() == Some(cid)
                                    >
                                        {c.name}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="form__group">
                        <label for="product-supplier">"Supplier"</label>
                        <select
                            id="product-supplier"
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
                            "Add Product"
                        }}
                    </button>
                </div>
            </div>
        </div>
    }
}
