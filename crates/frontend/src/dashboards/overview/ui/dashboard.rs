use contracts::dashboard::DashboardStats;
use contracts::domain::product::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::overview::api;
use crate::domain::category::api as category_api;
use crate::domain::client::api as client_api;
use crate::domain::product::api as product_api;
use crate::domain::sale::api as sale_api;
use crate::domain::stock::api as stock_api;
use crate::domain::supplier::api as supplier_api;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::stat_card::StatCard;
use crate::shared::format::{format_price, stock_level};
use crate::shared::icons::icon;
use crate::shared::store::{use_store, AppStore};

/// How many of the embedded products make it into the recent table.
const RECENT_LIMIT: usize = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct RecentProductRow {
    pub id: i64,
    pub name: String,
    pub price: String,
    pub quantity: i32,
    pub status: &'static str,
    pub status_class: &'static str,
}

impl RecentProductRow {
    fn build(p: &Product) -> Self {
        let level = stock_level(p.quantity);
        Self {
            id: p.id,
            name: p.name.clone(),
            price: format_price(p.price),
            quantity: p.quantity,
            status: level.label(),
            status_class: level.badge_class(),
        }
    }
}

/// First [`RECENT_LIMIT`] products of the payload, in server order.
pub fn recent_rows(products: &[Product]) -> Vec<RecentProductRow> {
    products
        .iter()
        .take(RECENT_LIMIT)
        .map(RecentProductRow::build)
        .collect()
}

/// Kick off one independent load per resource. Each task writes only its
/// own signal, so a failing resource leaves the others untouched and its
/// own list at the previous value.
fn refresh_store(store: AppStore) {
    spawn_local(async move {
        match product_api::fetch_products().await {
            Ok(list) => store.products.set(list),
            Err(e) => log::warn!("failed to load products: {e}"),
        }
    });
    spawn_local(async move {
        match category_api::fetch_categories().await {
            Ok(list) => store.categories.set(list),
            Err(e) => log::warn!("failed to load categories: {e}"),
        }
    });
    spawn_local(async move {
        match supplier_api::fetch_suppliers().await {
            Ok(list) => store.suppliers.set(list),
            Err(e) => log::warn!("failed to load suppliers: {e}"),
        }
    });
    spawn_local(async move {
        match stock_api::fetch_stocks().await {
            Ok(list) => store.stocks.set(list),
            Err(e) => log::warn!("failed to load stock: {e}"),
        }
    });
    spawn_local(async move {
        match client_api::fetch_clients().await {
            Ok(list) => store.clients.set(list),
            Err(e) => log::warn!("failed to load clients: {e}"),
        }
    });
    spawn_local(async move {
        match sale_api::fetch_sales().await {
            Ok(list) => store.sales.set(list),
            Err(e) => log::warn!("failed to load sales: {e}"),
        }
    });
}

fn stat_value<F>(stats: ReadSignal<Option<DashboardStats>>, f: F) -> Signal<String>
where
    F: Fn(&DashboardStats) -> String + Send + Sync + 'static,
{
    Signal::derive(move || {
        stats
            .get()
            .as_ref()
            .map(&f)
            .unwrap_or_else(|| "—".to_string())
    })
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = use_store();
    let (stats, set_stats) = signal::<Option<DashboardStats>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    let load = move || {
        spawn_local(async move {
            match api::fetch_dashboard().await {
                Ok(payload) => {
                    set_stats.set(Some(payload));
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("failed to load dashboard: {e}");
                    set_error.set(Some(e));
                }
            }
        });
        // Warm the per-resource caches so section switches render
        // immediately.
        refresh_store(store);
    };

    load();

    let rows = move || {
        stats
            .get()
            .map(|s| recent_rows(&s.products))
            .unwrap_or_default()
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__actions">
                    <button class="button button--secondary" on:click=move |_| load()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="stat-grid">
                <StatCard
                    label="Products"
                    icon_name="products"
                    value=stat_value(stats, |s| s.total_products.to_string())
                />
                <StatCard
                    label="Categories"
                    icon_name="tag"
                    value=stat_value(stats, |s| s.total_categories.to_string())
                />
                <StatCard
                    label="Suppliers"
                    icon_name="suppliers"
                    value=stat_value(stats, |s| s.total_suppliers.to_string())
                />
                <StatCard
                    label="Stock Items"
                    icon_name="inventory"
                    value=stat_value(stats, |s| s.total_stock_items.to_string())
                />
                <StatCard
                    label="Clients"
                    icon_name="customers"
                    value=stat_value(stats, |s| s.total_clients.to_string())
                />
                <StatCard
                    label="Sales"
                    icon_name="cart"
                    value=stat_value(stats, |s| s.total_sales.to_string())
                />
                <StatCard
                    label="Inventory Value"
                    icon_name="money"
                    value=stat_value(stats, |s| format_price(s.total_inventory_value))
                    subtitle="at cost price"
                />
                <StatCard
                    label="Potential Sales"
                    icon_name="money"
                    value=stat_value(stats, |s| format_price(s.potential_sales_value))
                    subtitle="at selling price"
                />
                <StatCard
                    label="Low Stock"
                    icon_name="alert"
                    value=stat_value(stats, |s| s.low_stock_items.to_string())
                    subtitle="items below 10 units"
                />
            </div>

            <div class="panel">
                <h2 class="panel__title">"Recent Products"</h2>
                <div class="table-wrapper">
                    <table class="table table--striped">
                        <thead>
                            <tr>
                                <th class="table__header-cell">"Name"</th>
                                <th class="table__header-cell">"Price"</th>
                                <th class="table__header-cell">"Quantity"</th>
                                <th class="table__header-cell">"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let rows = rows();
                                if rows.is_empty() {
                                    view! {
                                        <tr>
                                            <td colspan="4">
                                                <EmptyState
                                                    icon_name="products"
                                                    title="No products yet"
                                                    hint="Recently added products show up here"
                                                />
                                            </td>
                                        </tr>
                                    }.into_any()
                                } else {
                                    rows.into_iter().map(|row| view! {
                                        <tr class="table__row">
                                            <td class="table__cell"><strong>{row.name}</strong></td>
                                            <td class="table__cell">{row.price}</td>
                                            <td class="table__cell">{row.quantity}</td>
                                            <td class="table__cell">
                                                <span class=row.status_class>{row.status}</span>
                                            </td>
                                        </tr>
                                    }).collect_view().into_any()
                                }
                            }}
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, quantity: i32) -> Product {
        Product {
            id,
            name: format!("Product {id}"),
            sku: None,
            description: None,
            price: 10.0,
            quantity,
            category_id: None,
            supplier_id: None,
        }
    }

    #[test]
    fn recent_table_caps_at_five_rows() {
        let products: Vec<Product> = (1..=8).map(|id| product(id, 20)).collect();
        let rows = recent_rows(&products);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].id, 1);
        assert_eq!(rows[4].id, 5);
    }

    #[test]
    fn rows_carry_status_badges() {
        let rows = recent_rows(&[product(1, 0), product(2, 5), product(3, 50)]);
        assert_eq!(rows[0].status, "Out of Stock");
        assert_eq!(rows[1].status, "Low Stock");
        assert_eq!(rows[2].status, "In Stock");
        assert_eq!(rows[0].price, "$10.00");
    }

    #[test]
    fn empty_payload_projects_to_no_rows() {
        assert!(recent_rows(&[]).is_empty());
    }
}
