use contracts::domain::client::Client;
use contracts::domain::sale::Sale;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::client::api as client_api;
use crate::domain::product::api as product_api;
use crate::domain::sale::api;
use crate::domain::sale::ui::details::SaleDetails;
use crate::domain::stock::api as stock_api;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::date_utils::format_datetime;
use crate::shared::dialog;
use crate::shared::format::{format_order_id, format_price};
use crate::shared::icons::icon;
use crate::shared::list_utils::client_name;
use crate::shared::store::use_store;
use crate::shared::toast::use_toasts;

#[derive(Clone, Debug, PartialEq)]
pub struct SaleRow {
    pub id: i64,
    pub order: String,
    pub client: String,
    pub items: String,
    pub total: String,
    pub date: String,
    pub payment_method: String,
}

impl SaleRow {
    pub fn build(sale: &Sale, clients: &[Client]) -> Self {
        let client = match &sale.client_name {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => client_name(clients, sale.client_id),
        };
        Self {
            id: sale.id,
            order: format_order_id(sale.id),
            client,
            items: format!("{} items", sale.items.len()),
            total: format_price(sale.total_amount),
            date: format_datetime(&sale.sale_date),
            payment_method: sale.payment_method.clone(),
        }
    }
}

#[component]
pub fn SalesPage() -> impl IntoView {
    let store = use_store();
    let toasts = use_toasts();
    let (error, set_error) = signal::<Option<String>>(None);
    let (show_form, set_show_form) = signal(false);

    let load = move || {
        spawn_local(async move {
            match api::fetch_sales().await {
                Ok(list) => {
                    store.sales.set(list);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("failed to load sales: {e}");
                    set_error.set(Some(e));
                }
            }
        });
        // Clients resolve the buyer column; stock and products feed the
        // line-item picker in the create form.
        spawn_local(async move {
            match client_api::fetch_clients().await {
                Ok(list) => store.clients.set(list),
                Err(e) => log::warn!("failed to load clients: {e}"),
            }
        });
        spawn_local(async move {
            match stock_api::fetch_stocks().await {
                Ok(list) => store.stocks.set(list),
                Err(e) => log::warn!("failed to load stock: {e}"),
            }
        });
        spawn_local(async move {
            match product_api::fetch_products().await {
                Ok(list) => store.products.set(list),
                Err(e) => log::warn!("failed to load products: {e}"),
            }
        });
    };

    load();

    let rows = move || {
        let clients = store.clients.get();
        store
            .sales
            .get()
            .iter()
            .map(|s| SaleRow::build(s, &clients))
            .collect::<Vec<_>>()
    };

    let on_delete = move |id: i64| {
        if !dialog::confirm("Are you sure you want to delete this sale?") {
            return;
        }
        spawn_local(async move {
            match api::delete_sale(id).await {
                Ok(()) => {
                    toasts.success("Sale deleted successfully");
                    load();
                }
                Err(e) => toasts.error(e),
            }
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| set_show_form.set(true)
                    >
                        {icon("plus")}
                        "New Sale"
                    </button>
                    <button class="button button--secondary" on:click=move |_| load()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="table-wrapper">
                <table class="table table--striped">
                    <thead>
                        <tr>
                            <th class="table__header-cell">"Order"</th>
                            <th class="table__header-cell">"Client"</th>
                            <th class="table__header-cell">"Items"</th>
                            <th class="table__header-cell">"Total"</th>
                            <th class="table__header-cell">"Date"</th>
                            <th class="table__header-cell">"Payment"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = rows();
                            if rows.is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="7">
                                            <EmptyState
                                                icon_name="cart"
                                                title="No sales yet"
                                                hint="Sales will appear here once recorded"
                                            />
                                        </td>
                                    </tr>
                                }.into_any()
                            } else {
                                rows.into_iter().map(|row| {
                                    let delete_id = row.id;
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell"><strong>{row.order}</strong></td>
                                            <td class="table__cell">{row.client}</td>
                                            <td class="table__cell">{row.items}</td>
                                            <td class="table__cell">{row.total}</td>
                                            <td class="table__cell">{row.date}</td>
                                            <td class="table__cell">{row.payment_method}</td>
                                            <td class="table__cell table__cell--actions">
                                                <button
                                                    class="icon-button icon-button--danger"
                                                    title="Delete"
                                                    on:click=move |_| on_delete(delete_id)
                                                >
                                                    {icon("delete")}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view().into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>

            <Show when=move || show_form.get()>
                <SaleDetails
                    on_saved=move || {
                        set_show_form.set(false);
                        load();
                    }
                    on_cancel=move || set_show_form.set(false)
                />
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use contracts::domain::sale::SaleItem;

    fn sale() -> Sale {
        Sale {
            id: 7,
            client_id: 3,
            client_name: None,
            user_id: None,
            sale_date: NaiveDateTime::parse_from_str("2024-01-15T10:30:00", "%Y-%m-%dT%H:%M:%S")
                .unwrap(),
            total_amount: 135.0,
            discount_applied: 10.0,
            payment_method: "card".into(),
            items: vec![
                SaleItem {
                    stock_id: 1,
                    product_name: None,
                    quantity_sold: 1,
                    unit_price_at_sale: 100.0,
                    subtotal: None,
                },
                SaleItem {
                    stock_id: 2,
                    product_name: None,
                    quantity_sold: 1,
                    unit_price_at_sale: 50.0,
                    subtotal: None,
                },
            ],
        }
    }

    #[test]
    fn row_formats_order_total_and_date() {
        let row = SaleRow::build(&sale(), &[]);
        assert_eq!(row.order, "#0007");
        assert_eq!(row.total, "$135.00");
        assert_eq!(row.items, "2 items");
        assert_eq!(row.date, "2024-01-15 10:30");
        assert_eq!(row.client, "-");
    }

    #[test]
    fn embedded_client_name_wins_over_lookup() {
        let mut s = sale();
        s.client_name = Some("Walk-in".into());
        assert_eq!(SaleRow::build(&s, &[]).client, "Walk-in");
    }
}
