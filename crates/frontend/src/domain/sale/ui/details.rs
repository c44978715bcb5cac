use contracts::domain::sale::{compute_total, SaleDto, SaleItemDto};
use contracts::domain::stock::Stock;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::sale::api;
use crate::shared::format::format_amount;
use crate::shared::icons::icon;
use crate::shared::list_utils::product_name;
use crate::shared::store::use_store;
use crate::system::auth::context::use_auth;

/// One editable line of the sale form. The signals are shared with the
/// row's inputs; the key only drives keyed rendering.
#[derive(Clone, Copy, PartialEq)]
struct LineForm {
    key: u64,
    stock_id: RwSignal<Option<i64>>,
    quantity: RwSignal<String>,
}

impl LineForm {
    fn new(key: u64) -> Self {
        Self {
            key,
            stock_id: RwSignal::new(None),
            quantity: RwSignal::new("1".to_string()),
        }
    }
}

fn selling_price(stocks: &[Stock], id: Option<i64>) -> f64 {
    id.and_then(|id| stocks.iter().find(|s| s.id == id))
        .map(|s| s.selling_price)
        .unwrap_or(0.0)
}

const PAYMENT_METHODS: [&str; 4] = ["cash", "card", "transfer", "credit"];

/// Modal form recording a new sale: client, payment method, dynamic line
/// items against stock, a percentage discount and a live total preview.
/// Sales are immutable once recorded, so there is no edit mode.
#[component]
pub fn SaleDetails<F1, F2>(on_saved: F1, on_cancel: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let store = use_store();
    let (auth_state, _) = use_auth();
    let user_id = auth_state.get_untracked().user.map(|u| u.id);

    let client_id = RwSignal::new(None::<i64>);
    let payment_method = RwSignal::new("cash".to_string());
    let discount = RwSignal::new("0".to_string());
    let items: RwSignal<Vec<LineForm>> = RwSignal::new(vec![LineForm::new(0)]);
    let next_key = StoredValue::new(1u64);
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let add_line = move |_| {
        let key = next_key.get_value();
        next_key.set_value(key + 1);
        items.update(|list| list.push(LineForm::new(key)));
    };

    let remove_line = move |key: u64| {
        items.update(|list| list.retain(|line| line.key != key));
    };

    // Client-side preview of what the server will store in totalAmount.
    let total = move || {
        let stocks = store.stocks.get();
        let lines: Vec<(f64, i32)> = items
            .get()
            .iter()
            .map(|line| {
                let price = selling_price(&stocks, line.stock_id.get());
                let qty = line.quantity.get().trim().parse::<i32>().unwrap_or(0);
                (price, qty)
            })
            .collect();
        let discount = discount.get().trim().parse::<f64>().unwrap_or(0.0);
        compute_total(&lines, discount)
    };

    let on_save = move |_| {
        let mut dto_items = Vec::new();
        for line in items.get_untracked() {
            let Some(stock_id) = line.stock_id.get_untracked() else {
                set_error.set(Some("Select a product for every line".to_string()));
                return;
            };
            dto_items.push(SaleItemDto {
                stock_id,
                quantity: line.quantity.get_untracked().trim().parse::<i32>().unwrap_or(0),
            });
        }

        let dto = SaleDto {
            client_id: client_id.get_untracked(),
            user_id,
            discount_applied: discount.get_untracked().trim().parse::<f64>().unwrap_or(0.0),
            payment_method: payment_method.get_untracked(),
            items: dto_items,
        };
        if let Err(e) = dto.validate() {
            set_error.set(Some(e));
            return;
        }

        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::create_sale(&dto).await {
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
            <div class="modal modal--wide" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">"New Sale"</h2>
                    <button class="icon-button" on:click=move |_| on_cancel()>{icon("x")}</button>
                </div>

                <div class="modal-body">
                    {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                    <div class="form__row">
                        <div class="form__group">
                            <label for="sale-client">"Client *"</label>
                            <select
                                id="sale-client"
                                required
                                on:change=move |ev| {
                                    client_id.set(event_target_value(&ev).parse::<i64>().ok())
                                }
                            >
                                <option value="" selected=move || client_id.get().is_none()>
                                    "Select Client"
                                </option>
                                {move || store.clients.get().into_iter().map(|c| {
                                    let cid = c.id;
                                    view! {
                                        <option
                                            value=cid.to_string()
                                            selected=move || client_id.get() == Some(cid)
                                        >
                                            {c.name}
                                        </option>
                                    }
                                }).collect_view()}
                            </select>
                        </div>
                        <div class="form__group">
                            <label for="sale-payment">"Payment Method *"</label>
                            <select
                                id="sale-payment"
                                required
                                on:change=move |ev| payment_method.set(event_target_value(&ev))
                            >
                                {PAYMENT_METHODS.into_iter().map(|method| view! {
                                    <option
                                        value=method
                                        selected=move || payment_method.get() == method
                                    >
                                        {method.to_string()}
                                    </option>
                                }).collect_view()}
                            </select>
                        </div>
                    </div>

                    <div class="sale-items">
                        <div class="sale-items__header">
                            <label>"Items *"</label>
                            <button class="button button--secondary" on:click=add_line>
                                {icon("plus")}
                                "Add Item"
                            </button>
                        </div>

                        <For
                            each=move || items.get()
                            key=|line| line.key
                            children=move |line| {
                                let subtotal = Signal::derive(move || {
                                    let price = selling_price(&store.stocks.get(), line.stock_id.get());
                                    let qty = line.quantity.get().trim().parse::<i32>().unwrap_or(0);
                                    price * qty as f64
                                });
                                let line_key = line.key;
                                view! {
                                    <div class="sale-items__row">
                                        <select
                                            class="sale-items__stock"
                                            on:change=move |ev| {
                                                line.stock_id.set(event_target_value(&ev).parse::<i64>().ok())
                                            }
                                        >
                                            <option value="" selected=move || line.stock_id.get().is_none()>
                                                "Select Stock Item"
                                            </option>
                                            {move || {
                                                let products = store.products.get();
                                                store.stocks.get().into_iter().map(|s| {
                                                    let sid = s.id;
                                                    let name = match &s.product_name {
                                                        Some(n) if !n.trim().is_empty() => n.clone(),
                                                        _ => product_name(&products, s.product_id),
                                                    };
                                                    let label = format!(
                                                        "{} - ${} ({} available)",
                                                        name,
                                                        format_amount(s.selling_price),
                                                        s.quantity,
                                                    );
                                                    view! {
                                                        <option
                                                            value=sid.to_string()
                                                            selected=move || line.stock_id.get() == Some(sid)
                                                        >
                                                            {label}
                                                        </option>
                                                    }
                                                }).collect_view()
                                            }}
                                        </select>
                                        <input
                                            class="sale-items__quantity"
                                            type="number"
                                            min="1"
                                            prop:value=move || line.quantity.get()
                                            on:input=move |ev| line.quantity.set(event_target_value(&ev))
                                        />
                                        <span class="sale-items__subtotal">
                                            {move || format!("${}", format_amount(subtotal.get()))}
                                        </span>
                                        <button
                                            class="icon-button icon-button--danger"
                                            title="Remove"
                                            on:click=move |_| remove_line(line_key)
                                        >
                                            {icon("delete")}
                                        </button>
                                    </div>
                                }
                            }
                        />
                    </div>

                    <div class="form__row">
                        <div class="form__group">
                            <label for="sale-discount">"Discount (%)"</label>
                            <input
                                id="sale-discount"
                                type="number"
                                min="0"
                                max="100"
                                step="0.1"
                                prop:value=move || discount.get()
                                on:input=move |ev| discount.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form__group">
                            <label>"Total"</label>
                            <div class="sale-total">
                                {move || format!("${}", format_amount(total()))}
                            </div>
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
                        {move || if saving.get() { "Saving..." } else { "Record Sale" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stock(id: i64, selling_price: f64) -> Stock {
        Stock {
            id,
            product_id: 1,
            supplier_id: None,
            quantity: 10,
            cost_price: None,
            selling_price,
            location: None,
            product_name: None,
            supplier_name: None,
        }
    }

    #[test]
    fn unknown_stock_prices_at_zero() {
        let stocks = vec![stock(1, 100.0), stock(2, 50.0)];
        assert_eq!(selling_price(&stocks, Some(2)), 50.0);
        assert_eq!(selling_price(&stocks, Some(99)), 0.0);
        assert_eq!(selling_price(&stocks, None), 0.0);
    }
}
