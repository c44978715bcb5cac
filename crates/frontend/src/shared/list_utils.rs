//! Foreign-key display resolution against the cached lists.
//!
//! Plain linear scans; nothing here is indexed, which is fine at
//! dashboard scale.

use contracts::domain::category::Category;
use contracts::domain::client::Client;
use contracts::domain::product::Product;
use contracts::domain::supplier::Supplier;

pub fn category_name(categories: &[Category], id: Option<i64>) -> String {
    id.and_then(|id| categories.iter().find(|c| c.id == id))
        .map(|c| c.name.clone())
        .unwrap_or_else(|| "Uncategorized".to_string())
}

pub fn supplier_name(suppliers: &[Supplier], id: Option<i64>) -> String {
    id.and_then(|id| suppliers.iter().find(|s| s.id == id))
        .map(|s| s.name.clone())
        .unwrap_or_else(|| "-".to_string())
}

pub fn product_name(products: &[Product], id: i64) -> String {
    products
        .iter()
        .find(|p| p.id == id)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| "-".to_string())
}

pub fn client_name(clients: &[Client], id: i64) -> String {
    clients
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.name.clone())
        .unwrap_or_else(|| "-".to_string())
}

/// Up-to-two-letter initials for the supplier card avatar.
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect();
    if letters.is_empty() {
        "NA".to_string()
    } else {
        letters.to_uppercase()
    }
}

/// Optional contact field with the `"N/A"` placeholder.
pub fn or_na(value: &Option<String>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.clone(),
        _ => "N/A".to_string(),
    }
}

/// Optional table cell with the `"-"` placeholder.
pub fn or_dash(value: &Option<String>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.clone(),
        _ => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: i64, name: &str) -> Category {
        Category {
            id,
            name: name.into(),
            description: None,
        }
    }

    #[test]
    fn unknown_category_reads_uncategorized() {
        let categories = vec![category(1, "Electronics")];
        assert_eq!(category_name(&categories, Some(1)), "Electronics");
        assert_eq!(category_name(&categories, Some(99)), "Uncategorized");
        assert_eq!(category_name(&[], Some(1)), "Uncategorized");
        assert_eq!(category_name(&categories, None), "Uncategorized");
    }

    #[test]
    fn unknown_supplier_reads_dash() {
        assert_eq!(supplier_name(&[], Some(4)), "-");
        assert_eq!(supplier_name(&[], None), "-");
    }

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(initials("John Doe"), "JD");
        assert_eq!(initials("acme trading co"), "AT");
        assert_eq!(initials("Solo"), "S");
        assert_eq!(initials(""), "NA");
    }

    #[test]
    fn placeholders_for_blank_contacts() {
        assert_eq!(or_na(&None), "N/A");
        assert_eq!(or_na(&Some("  ".into())), "N/A");
        assert_eq!(or_na(&Some("a@b.c".into())), "a@b.c");
        assert_eq!(or_dash(&None), "-");
    }
}
