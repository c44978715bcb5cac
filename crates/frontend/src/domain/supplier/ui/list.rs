use contracts::domain::supplier::{Supplier, SupplierDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::supplier::api;
use crate::domain::supplier::ui::details::SupplierDetails;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::dialog;
use crate::shared::icons::icon;
use crate::shared::list_utils::{initials, or_na};
use crate::shared::store::use_store;
use crate::shared::toast::use_toasts;

/// Card projection with `"N/A"` placeholders for missing contact fields.
#[derive(Clone, Debug, PartialEq)]
pub struct SupplierCard {
    pub id: i64,
    pub name: String,
    pub initials: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl SupplierCard {
    pub fn build(s: &Supplier) -> Self {
        Self {
            id: s.id,
            name: s.name.clone(),
            initials: initials(&s.name),
            contact_name: or_na(&s.contact_name),
            email: or_na(&s.email),
            phone: or_na(&s.phone),
            address: or_na(&s.address),
        }
    }
}

#[component]
pub fn SuppliersPage() -> impl IntoView {
    let store = use_store();
    let toasts = use_toasts();
    let (error, set_error) = signal::<Option<String>>(None);
    let form: RwSignal<Option<SupplierDto>> = RwSignal::new(None);

    let load = move || {
        spawn_local(async move {
            match api::fetch_suppliers().await {
                Ok(list) => {
                    store.suppliers.set(list);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("failed to load suppliers: {e}");
                    set_error.set(Some(e));
                }
            }
        });
    };

    load();

    let cards = move || {
        store
            .suppliers
            .get()
            .iter()
            .map(SupplierCard::build)
            .collect::<Vec<_>>()
    };

    let on_edit = move |id: i64| {
        let supplier = store
            .suppliers
            .get_untracked()
            .into_iter()
            .find(|s| s.id == id);
        if let Some(s) = supplier {
            form.set(Some(SupplierDto::from_record(&s)));
        }
    };

    let on_delete = move |id: i64| {
        if !dialog::confirm("Are you sure you want to delete this supplier?") {
            return;
        }
        spawn_local(async move {
            match api::delete_supplier(id).await {
                Ok(()) => {
                    toasts.success("Supplier deleted successfully");
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
                        on:click=move |_| form.set(Some(SupplierDto::default()))
                    >
                        {icon("plus")}
                        "Add Supplier"
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
                                icon_name="suppliers"
                                title="No suppliers found"
                                hint="Add your first supplier to manage inventory sources"
                            />
                        }.into_any()
                    } else {
                        cards.into_iter().map(|card| {
                            let edit_id = card.id;
                            let delete_id = card.id;
                            view! {
                                <div class="supplier-card">
                                    <div class="supplier-card__header">
                                        <div class="supplier-card__avatar">{card.initials}</div>
                                        <div class="supplier-card__info">
                                            <h3>{card.name}</h3>
                                            <p>{card.contact_name}</p>
                                        </div>
                                        <div class="supplier-card__actions">
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
                                    <div class="supplier-card__details">
                                        <span>{card.email}</span>
                                        <span>{card.phone}</span>
                                        <span>{card.address}</span>
                                    </div>
                                </div>
                            }
                        }).collect_view().into_any()
                    }
                }}
            </div>

            {move || form.get().map(|dto| view! {
                <SupplierDetails
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
    fn card_fills_missing_contacts_with_na() {
        let supplier = Supplier {
            id: 1,
            name: "Acme Trading".into(),
            contact_name: None,
            email: Some("sales@acme.test".into()),
            phone: None,
            address: None,
        };
        let card = SupplierCard::build(&supplier);
        assert_eq!(card.initials, "AT");
        assert_eq!(card.contact_name, "N/A");
        assert_eq!(card.email, "sales@acme.test");
        assert_eq!(card.phone, "N/A");
    }
}
