use contracts::domain::client::{Client, ClientDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::client::api;
use crate::domain::client::ui::details::ClientDetails;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::dialog;
use crate::shared::format::format_price;
use crate::shared::icons::icon;
use crate::shared::list_utils::or_dash;
use crate::shared::store::use_store;
use crate::shared::toast::use_toasts;

#[derive(Clone, Debug, PartialEq)]
pub struct ClientRow {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub credit: String,
    pub credit_class: &'static str,
}

impl ClientRow {
    pub fn build(c: &Client) -> Self {
        let (credit, credit_class) = if c.is_credit_client {
            (
                format!("Credit · {}", format_price(c.credit_limit.unwrap_or(0.0))),
                "badge badge--warning",
            )
        } else {
            ("Regular".to_string(), "badge badge--neutral")
        };
        Self {
            id: c.id,
            name: c.name.clone(),
            phone: or_dash(&c.contact_phone),
            email: or_dash(&c.contact_email),
            address: or_dash(&c.address),
            credit,
            credit_class,
        }
    }
}

#[component]
pub fn ClientsPage() -> impl IntoView {
    let store = use_store();
    let toasts = use_toasts();
    let (error, set_error) = signal::<Option<String>>(None);
    let form: RwSignal<Option<ClientDto>> = RwSignal::new(None);

    let load = move || {
        spawn_local(async move {
            match api::fetch_clients().await {
                Ok(list) => {
                    store.clients.set(list);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("failed to load clients: {e}");
                    set_error.set(Some(e));
                }
            }
        });
    };

    load();

    let rows = move || {
        store
            .clients
            .get()
            .iter()
            .map(ClientRow::build)
            .collect::<Vec<_>>()
    };

    let on_edit = move |id: i64| {
        let client = store.clients.get_untracked().into_iter().find(|c| c.id == id);
        if let Some(c) = client {
            form.set(Some(ClientDto::from_record(&c)));
        }
    };

    let on_delete = move |id: i64| {
        if !dialog::confirm("Are you sure you want to delete this client?") {
            return;
        }
        spawn_local(async move {
            match api::delete_client(id).await {
                Ok(()) => {
                    toasts.success("Client deleted successfully");
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
                        on:click=move |_| form.set(Some(ClientDto::default()))
                    >
                        {icon("plus")}
                        "Add Client"
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
                            <th class="table__header-cell">"Phone"</th>
                            <th class="table__header-cell">"Email"</th>
                            <th class="table__header-cell">"Address"</th>
                            <th class="table__header-cell">"Account"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = rows();
                            if rows.is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="6">
                                            <EmptyState
                                                icon_name="customers"
                                                title="No clients found"
                                                hint="Add your first client to record sales"
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
                                            <td class="table__cell">{row.phone}</td>
                                            <td class="table__cell">{row.email}</td>
                                            <td class="table__cell">{row.address}</td>
                                            <td class="table__cell">
                                                <span class=row.credit_class>{row.credit}</span>
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
                <ClientDetails
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
    fn credit_badge_reflects_account_kind() {
        let client = Client {
            id: 1,
            name: "Acme".into(),
            contact_phone: None,
            contact_email: None,
            address: None,
            is_credit_client: true,
            credit_limit: Some(1500.0),
        };
        let row = ClientRow::build(&client);
        assert_eq!(row.credit, "Credit · $1500.00");
        assert_eq!(row.phone, "-");

        let regular = Client {
            is_credit_client: false,
            credit_limit: None,
            ..client
        };
        assert_eq!(ClientRow::build(&regular).credit, "Regular");
    }
}
