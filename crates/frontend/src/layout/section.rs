use leptos::prelude::*;

/// The dashboard sections. Exactly one is visible at a time; switching is
/// a synchronous signal write triggered by sidebar clicks.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Section {
    #[default]
    Dashboard,
    Products,
    Categories,
    Suppliers,
    Stock,
    Clients,
    Sales,
}

impl Section {
    pub fn title(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Products => "Products",
            Section::Categories => "Categories",
            Section::Suppliers => "Suppliers",
            Section::Stock => "Stock Management",
            Section::Clients => "Clients",
            Section::Sales => "Sales",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Products => "products",
            Section::Categories => "tag",
            Section::Suppliers => "suppliers",
            Section::Stock => "inventory",
            Section::Clients => "customers",
            Section::Sales => "cart",
        }
    }

    pub fn all() -> [Section; 7] {
        [
            Section::Dashboard,
            Section::Products,
            Section::Categories,
            Section::Suppliers,
            Section::Stock,
            Section::Clients,
            Section::Sales,
        ]
    }
}

#[derive(Clone, Copy)]
pub struct SectionContext {
    pub active: RwSignal<Section>,
}

impl SectionContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Section::default()),
        }
    }

    pub fn navigate(&self, section: Section) {
        self.active.set(section);
    }
}

impl Default for SectionContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_section() -> SectionContext {
    use_context::<SectionContext>().expect("SectionContext not found in component tree")
}
