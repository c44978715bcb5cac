use contracts::domain::product::Product;
use contracts::domain::stock::{Stock, StockDto};
use contracts::domain::supplier::Supplier;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::product::api as product_api;
use crate::domain::stock::api;
use crate::domain::stock::ui::details::StockDetails;
use crate::domain::supplier::api as supplier_api;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::dialog;
use crate::shared::format::{format_price, stock_level};
use crate::shared::icons::icon;
use crate::shared::list_utils::{or_dash, product_name, supplier_name};
use crate::shared::store::use_store;
use crate::shared::toast::use_toasts;

/// Table row with names resolved from the embedded fields when the server
/// sent them, otherwise from the cached reference lists.
#[derive(Clone, Debug, PartialEq)]
pub struct StockRow {
    pub id: i64,
    pub product: String,
    pub supplier: String,
    pub quantity: i32,
    pub location: String,
    pub cost_price: String,
    pub selling_price: String,
    pub status: &'static str,
    pub status_class: &'static str,
}

impl StockRow {
    pub fn build(s: &Stock, products: &[Product], suppliers: &[Supplier]) -> Self {
        let level = stock_level(s.quantity);
        let product = match &s.product_name {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => product_name(products, s.product_id),
        };
        let supplier = match &s.supplier_name {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => supplier_name(suppliers, s.supplier_id),
        };
        Self {
            id: s.id,
            product,
            supplier,
            quantity: s.quantity,
            location: or_dash(&s.location),
            cost_price: s
                .cost_price
                .map(format_price)
                .unwrap_or_else(|| "-".to_string()),
            selling_price: format_price(s.selling_price),
            status: level.label(),
            status_class: level.badge_class(),
        }
    }
}

#[component]
pub fn StockPage() -> impl IntoView {
    let store = use_store();
    let toasts = use_toasts();
    let (error, set_error) = signal::<Option<String>>(None);
    let form: RwSignal<Option<StockDto>> = RwSignal::new(None);

    let load = move || {
        spawn_local(async move {
            match api::fetch_stocks().await {
                Ok(list) => {
                    store.stocks.set(list);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("failed to load stock: {e}");
                    set_error.set(Some(e));
                }
            }
        });
        spawn_local(async move {
            match product_api::fetch_products().await {
                Ok(list) => store.products.set(list),
                Err(e) => log::warn!("failed to load products: {e}"),
            }
        });
        spawn_local(async move {
            match supplier_api::fetch_suppliers().await {
                Ok(list) => store.suppliers.set(list),
                Err(e) => log::warn!("failed to load suppliers: {e}"),
            }
        });
    };

    load();

    let rows = move || {
        let products = store.products.get();
        let suppliers = store.suppliers.get();
        store
            .stocks
            .get()
            .iter()
            .map(|s| StockRow::build(s, &products, &suppliers))
            .collect::<Vec<_>>()
    };

    let low_stock_count = move || {
        store
            .stocks
            .get()
            .iter()
            .filter(|s| s.quantity < 10)
            .count()
    };

    let on_edit = move |id: i64| {
        let stock = store.stocks.get_untracked().into_iter().find(|s| s.id == id);
        if let Some(s) = stock {
            form.set(Some(StockDto::from_record(&s)));
        }
    };

    let on_delete = move |id: i64| {
        if !dialog::confirm("Are you sure you want to delete this stock item?") {
            return;
        }
        spawn_local(async move {
            match api::delete_stock(id).await {
                Ok(()) => {
                    toasts.success("Stock item deleted successfully");
                    load();
                }
                Err(e) => toasts.error(e),
            }
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__toolbar">
                    <span class="badge badge--warning">
                        {move || format!("{} low stock", low_stock_count())}
                    </span>
                </div>
                <div class="page__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| form.set(Some(StockDto::default()))
                    >
                        {icon("plus")}
                        "Add Stock"
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
                            <th class="table__header-cell">"Product"</th>
                            <th class="table__header-cell">"Supplier"</th>
                            <th class="table__header-cell">"Quantity"</th>
                            <th class="table__header-cell">"Location"</th>
                            <th class="table__header-cell">"Cost"</th>
                            <th class="table__header-cell">"Selling Price"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = rows();
                            if rows.is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="8">
                                            <EmptyState
                                                icon_name="inventory"
                                                title="No stock items found"
                                                hint="Add your first stock item to track inventory"
                                            />
                                        </td>
                                    </tr>
                                }.into_any()
                            } else {
                                rows.into_iter().map(|row| {
                                    let edit_id = row.id;
                                    let delete_id = row.id;
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell"><strong>{row.product}</strong></td>
                                            <td class="table__cell">{row.supplier}</td>
                                            <td class="table__cell">{row.quantity}</td>
                                            <td class="table__cell">{row.location}</td>
                                            <td class="table__cell">{row.cost_price}</td>
                                            <td class="table__cell">{row.selling_price}</td>
                                            <td class="table__cell">
                                                <span class=row.status_class>{row.status}</span>
                                            </td>
                                            <td class="table__cell table__cell--actions">
                                                <button
                                                    class="icon-button"
                                                    title="Edit"
                                                    on:click=move |_| on_edit(edit_id)
                                                >
                                                    {icon("edit")}
                                                </button>
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

            {move || form.get().map(|dto| view! {
                <StockDetails
                    dto=dto
                    on_saved=move || {
                        form.set(None);
                        load();
                    }
                    on_cancel=move || form.set(None)
                />
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stock(quantity: i32) -> Stock {
        Stock {
            id: 1,
            product_id: 9,
            supplier_id: None,
            quantity,
            cost_price: None,
            selling_price: 25.0,
            location: None,
            product_name: None,
            supplier_name: None,
        }
    }

    #[test]
    fn status_follows_quantity_thresholds() {
        assert_eq!(StockRow::build(&stock(0), &[], &[]).status, "Out of Stock");
        assert_eq!(StockRow::build(&stock(5), &[], &[]).status, "Low Stock");
        assert_eq!(StockRow::build(&stock(50), &[], &[]).status, "In Stock");
    }

    #[test]
    fn unknown_product_reads_dash() {
        let row = StockRow::build(&stock(3), &[], &[]);
        assert_eq!(row.product, "-");
        assert_eq!(row.cost_price, "-");
        assert_eq!(row.selling_price, "$25.00");
    }

    #[test]
    fn embedded_name_wins_over_lookup() {
        let mut s = stock(3);
        s.product_name = Some("Embedded".into());
        let row = StockRow::build(&s, &[], &[]);
        assert_eq!(row.product, "Embedded");
    }
}
