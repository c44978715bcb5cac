use leptos::prelude::*;

use contracts::domain::category::Category;
use contracts::domain::client::Client;
use contracts::domain::product::Product;
use contracts::domain::sale::Sale;
use contracts::domain::stock::Stock;
use contracts::domain::supplier::Supplier;

/// Client-side cache of every REST collection, provided app-wide via
/// context. Each signal holds the server's entire list for one resource
/// and is replaced wholesale after a load; nothing merges incrementally.
#[derive(Clone, Copy)]
pub struct AppStore {
    pub products: RwSignal<Vec<Product>>,
    pub categories: RwSignal<Vec<Category>>,
    pub suppliers: RwSignal<Vec<Supplier>>,
    pub stocks: RwSignal<Vec<Stock>>,
    pub clients: RwSignal<Vec<Client>>,
    pub sales: RwSignal<Vec<Sale>>,
}

impl AppStore {
    pub fn new() -> Self {
        Self {
            products: RwSignal::new(Vec::new()),
            categories: RwSignal::new(Vec::new()),
            suppliers: RwSignal::new(Vec::new()),
            stocks: RwSignal::new(Vec::new()),
            clients: RwSignal::new(Vec::new()),
            sales: RwSignal::new(Vec::new()),
        }
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_store() -> AppStore {
    use_context::<AppStore>().expect("AppStore not found in component tree")
}
