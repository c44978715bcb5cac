use contracts::domain::category::Category;
use contracts::domain::product::{Product, ProductDto};
use contracts::domain::supplier::Supplier;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::category::api as category_api;
use crate::domain::product::api;
use crate::domain::product::ui::details::ProductDetails;
use crate::domain::supplier::api as supplier_api;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::dialog;
use crate::shared::format::{format_price, stock_level};
use crate::shared::icons::icon;
use crate::shared::list_utils::{category_name, supplier_name};
use crate::shared::store::use_store;
use crate::shared::toast::use_toasts;

/// One rendered table row, foreign keys already resolved to display text.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductRow {
    pub id: i64,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub supplier: String,
    pub price: String,
    pub quantity: i32,
    pub status: &'static str,
    pub status_class: &'static str,
}

impl ProductRow {
    pub fn build(p: &Product, categories: &[Category], suppliers: &[Supplier]) -> Self {
        let level = stock_level(p.quantity);
        Self {
            id: p.id,
            name: p.name.clone(),
            sku: p
                .sku
                .clone()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| "N/A".to_string()),
            category: category_name(categories, p.category_id),
            supplier: supplier_name(suppliers, p.supplier_id),
            price: format_price(p.price),
            quantity: p.quantity,
            status: level.label(),
            status_class: level.badge_class(),
        }
    }
}

fn matches_search(p: &Product, query: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }
    let q = query.to_lowercase();
    p.name.to_lowercase().contains(&q)
        || p.sku.as_deref().unwrap_or("").to_lowercase().contains(&q)
}

#[component]
pub fn ProductsPage() -> impl IntoView {
    let store = use_store();
    let toasts = use_toasts();
    let (error, set_error) = signal::<Option<String>>(None);
    let (search, set_search) = signal(String::new());
    let (category_filter, set_category_filter) = signal::<Option<i64>>(None);
    // None = modal closed; a dto without id = create, with id = edit.
    let form: RwSignal<Option<ProductDto>> = RwSignal::new(None);

    let load = move || {
        spawn_local(async move {
            match api::fetch_products().await {
                Ok(list) => {
                    store.products.set(list);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("failed to load products: {e}");
                    set_error.set(Some(e));
                }
            }
        });
        // Reference lists for the category/supplier columns and selects.
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
    };

    load();

    let rows = move || {
        let categories = store.categories.get();
        let suppliers = store.suppliers.get();
        let query = search.get();
        let filter = category_filter.get();
        store
            .products
            .get()
            .iter()
            .filter(|p| matches_search(p, &query))
            .filter(|p| filter.map_or(true, |id| p.category_id == Some(id)))
            .map(|p| ProductRow::build(p, &categories, &suppliers))
            .collect::<Vec<_>>()
    };

    let on_edit = move |id: i64| {
        let product = store.products.get_untracked().into_iter().find(|p| p.id == id);
        if let Some(p) = product {
            form.set(Some(ProductDto::from_record(&p)));
        }
    };

    let on_delete = move |id: i64| {
        if !dialog::confirm("Are you sure you want to delete this product?") {
            return;
        }
        spawn_local(async move {
            match api::delete_product(id).await {
                Ok(()) => {
                    toasts.success("Product deleted successfully");
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
                    <div class="search-box">
                        {icon("search")}
                        <input
                            type="text"
                            placeholder="Search by name or SKU..."
                            prop:value=move || search.get()
                            on:input=move |ev| set_search.set(event_target_value(&ev))
                        />
                    </div>
                    <select
                        class="select"
                        on:change=move |ev| {
                            set_category_filter.set(event_target_value(&ev).parse::<i64>().ok())
                        }
                    >
                        <option value="">"All Categories"</option>
                        {move || store.categories.get().into_iter().map(|c| view! {
                            <option value=c.id.to_string()>{c.name}</option>
                        }).collect_view()}
                    </select>
                </div>
                <div class="page__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| form.set(Some(ProductDto::default()))
                    >
                        {icon("plus")}
                        "Add Product"
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
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"SKU"</th>
                            <th class="table__header-cell">"Category"</th>
                            <th class="table__header-cell">"Supplier"</th>
                            <th class="table__header-cell">"Price"</th>
                            <th class="table__header-cell">"Quantity"</th>
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
                                                icon_name="products"
                                                title="No products found"
                                                hint="Add your first product to get started"
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
                                            <td class="table__cell"><strong>{row.name}</strong></td>
                                            <td class="table__cell">{row.sku}</td>
                                            <td class="table__cell">{row.category}</td>
                                            <td class="table__cell">{row.supplier}</td>
                                            <td class="table__cell">{row.price}</td>
                                            <td class="table__cell">{row.quantity}</td>
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
                <ProductDetails
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

    fn product(name: &str, quantity: i32) -> Product {
        Product {
            id: 1,
            name: name.into(),
            sku: None,
            description: None,
            price: 0.0,
            quantity,
            category_id: None,
            supplier_id: None,
        }
    }

    #[test]
    fn row_resolves_missing_category_to_uncategorized() {
        let row = ProductRow::build(&product("Widget", 5), &[], &[]);
        assert_eq!(row.category, "Uncategorized");
        assert_eq!(row.supplier, "-");
        assert_eq!(row.quantity, 5);
        assert_eq!(row.status, "Low Stock");
    }

    #[test]
    fn row_uses_na_for_blank_sku() {
        let mut p = product("Widget", 20);
        let row = ProductRow::build(&p, &[], &[]);
        assert_eq!(row.sku, "N/A");

        p.sku = Some("W-1".into());
        let row = ProductRow::build(&p, &[], &[]);
        assert_eq!(row.sku, "W-1");
    }

    #[test]
    fn empty_list_projects_to_no_rows() {
        let products: Vec<Product> = Vec::new();
        let rows: Vec<ProductRow> = products
            .iter()
            .map(|p| ProductRow::build(p, &[], &[]))
            .collect();
        assert!(rows.is_empty());
    }

    #[test]
    fn search_matches_name_or_sku() {
        let mut p = product("Blue Widget", 1);
        p.sku = Some("BW-42".into());
        assert!(matches_search(&p, "widget"));
        assert!(matches_search(&p, "bw-42"));
        assert!(matches_search(&p, ""));
        assert!(!matches_search(&p, "gadget"));
    }
}
