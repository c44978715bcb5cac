use contracts::domain::category::{Category, CategoryDto};
use contracts::domain::product::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::category::api;
use crate::domain::category::ui::details::CategoryDetails;
use crate::domain::product::api as product_api;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::dialog;
use crate::shared::icons::icon;
use crate::shared::store::use_store;
use crate::shared::toast::use_toasts;

/// Card projection with the product count resolved from the product list.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryCard {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub product_count: usize,
}

impl CategoryCard {
    pub fn build(c: &Category, products: &[Product]) -> Self {
        Self {
            id: c.id,
            name: c.name.clone(),
            description: c
                .description
                .clone()
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| "No description".to_string()),
            product_count: products
                .iter()
                .filter(|p| p.category_id == Some(c.id))
                .count(),
        }
    }
}

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let store = use_store();
    let toasts = use_toasts();
    let (error, set_error) = signal::<Option<String>>(None);
    let form: RwSignal<Option<CategoryDto>> = RwSignal::new(None);

    let load = move || {
        spawn_local(async move {
            match api::fetch_categories().await {
                Ok(list) => {
                    store.categories.set(list);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("failed to load categories: {e}");
                    set_error.set(Some(e));
                }
            }
        });
        // Products feed the per-card counts.
        spawn_local(async move {
            match product_api::fetch_products().await {
                Ok(list) => store.products.set(list),
                Err(e) => log::warn!("failed to load products: {e}"),
            }
        });
    };

    load();

    let cards = move || {
        let products = store.products.get();
        store
            .categories
            .get()
            .iter()
            .map(|c| CategoryCard::build(c, &products))
            .collect::<Vec<_>>()
    };

    let on_edit = move |id: i64| {
        let category = store
            .categories
            .get_untracked()
            .into_iter()
            .find(|c| c.id == id);
        if let Some(c) = category {
            form.set(Some(CategoryDto::from_record(&c)));
        }
    };

    let on_delete = move |id: i64| {
        if !dialog::confirm("Are you sure you want to delete this category?") {
            return;
        }
        spawn_local(async move {
            match api::delete_category(id).await {
                Ok(()) => {
                    toasts.success("Category deleted successfully");
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
                        on:click=move |_| form.set(Some(CategoryDto::default()))
                    >
                        {icon("plus")}
                        "Add Category"
                    </button>
                    <button class="button button--secondary" on:click=move |_| load()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="card-grid">
                {move || {
                    let cards = cards();
                    if cards.is_empty() {
                        view! {
                            <EmptyState
                                icon_name="tag"
                                title="No categories found"
                                hint="Add your first category to organize products"
                            />
                        }.into_any()
                    } else {
                        cards.into_iter().map(|card| {
                            let edit_id = card.id;
                            let delete_id = card.id;
                            view! {
                                <div class="category-card">
                                    <div class="category-card__icon">{icon("tag")}</div>
                                    <h3 class="category-card__name">{card.name}</h3>
                                    <p class="category-card__description">{card.description}</p>
                                    <div class="category-card__footer">
                                        <span class="category-card__count">
                                            {icon("products")}
                                            {format!("{} products", card.product_count)}
                                        </span>
                                        <div class="category-card__actions">
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
                                        </div>
                                    </div>
                                </div>
                            }
                        }).collect_view().into_any()
                    }
                }}
            </div>

            {move || form.get().map(|dto| view! {
                <CategoryDetails
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

    #[test]
    fn card_counts_products_in_the_category() {
        let category = Category {
            id: 1,
            name: "Electronics".into(),
            description: None,
        };
        let products = vec![
            Product {
                id: 1,
                name: "A".into(),
                sku: None,
                description: None,
                price: 0.0,
                quantity: 0,
                category_id: Some(1),
                supplier_id: None,
            },
            Product {
                id: 2,
                name: "B".into(),
                sku: None,
                description: None,
                price: 0.0,
                quantity: 0,
                category_id: Some(2),
                supplier_id: None,
            },
        ];
        let card = CategoryCard::build(&category, &products);
        assert_eq!(card.product_count, 1);
        assert_eq!(card.description, "No description");
    }
}
