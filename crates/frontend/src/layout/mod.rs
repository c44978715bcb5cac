pub mod header;
pub mod section;
pub mod sidebar;

use leptos::prelude::*;

use crate::dashboards::overview::ui::DashboardPage;
use crate::domain::category::ui::list::CategoriesPage;
use crate::domain::client::ui::list::ClientsPage;
use crate::domain::product::ui::list::ProductsPage;
use crate::domain::sale::ui::list::SalesPage;
use crate::domain::stock::ui::list::StockPage;
use crate::domain::supplier::ui::list::SuppliersPage;
use crate::shared::toast::ToastHost;
use header::Header;
use section::{use_section, Section};
use sidebar::Sidebar;

/// Main application shell: fixed sidebar on the left, header plus the one
/// visible section on the right.
///
/// ```text
/// +-----------+------------------------------+
/// |           |           Header             |
/// |  Sidebar  +------------------------------+
/// |           |           Content            |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let sections = use_section();

    view! {
        <div class="app-layout">
            <Sidebar />
            <div class="app-main">
                <Header />
                <main class="app-content">
                    {move || match sections.active.get() {
                        Section::Dashboard => view! { <DashboardPage /> }.into_any(),
                        Section::Products => view! { <ProductsPage /> }.into_any(),
                        Section::Categories => view! { <CategoriesPage /> }.into_any(),
                        Section::Suppliers => view! { <SuppliersPage /> }.into_any(),
                        Section::Stock => view! { <StockPage /> }.into_any(),
                        Section::Clients => view! { <ClientsPage /> }.into_any(),
                        Section::Sales => view! { <SalesPage /> }.into_any(),
                    }}
                </main>
            </div>
            <ToastHost />
        </div>
    }
}
