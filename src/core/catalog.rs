//! Static shop catalog.

use serde::Serialize;

/// One purchasable item. Immutable for the life of the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub name: &'static str,
    /// Price in cookies
    pub cost: u64,
    /// Cookies produced per tick by each owned unit
    pub value: u64,
}

/// The reference shop, in display order.
pub const ITEMS: [CatalogEntry; 3] = [
    CatalogEntry {
        id: "cursor",
        name: "Cursor",
        cost: 10,
        value: 1,
    },
    CatalogEntry {
        id: "grandma",
        name: "Grandma",
        cost: 100,
        value: 10,
    },
    CatalogEntry {
        id: "farm",
        name: "Farm",
        cost: 1000,
        value: 100,
    },
];

/// Looks up an entry by id.
pub fn find<'a>(catalog: &'a [CatalogEntry], id: &str) -> Option<&'a CatalogEntry> {
    catalog.iter().find(|entry| entry.id == id)
}

/// Most expensive entry that costs at most `cookies`.
pub fn most_expensive_affordable(catalog: &[CatalogEntry], cookies: u64) -> Option<&CatalogEntry> {
    catalog
        .iter()
        .filter(|entry| entry.cost <= cookies)
        .max_by_key(|entry| entry.cost)
}

/// Cheapest entry that costs at most `cookies`.
pub fn cheapest_affordable(catalog: &[CatalogEntry], cookies: u64) -> Option<&CatalogEntry> {
    catalog
        .iter()
        .filter(|entry| entry.cost <= cookies)
        .min_by_key(|entry| entry.cost)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_catalog_values() {
        assert_eq!(ITEMS.len(), 3);
        assert_eq!(ITEMS[0], find(&ITEMS, "cursor").copied().unwrap());
        assert_eq!(find(&ITEMS, "grandma").unwrap().cost, 100);
        assert_eq!(find(&ITEMS, "grandma").unwrap().value, 10);
        assert_eq!(find(&ITEMS, "farm").unwrap().cost, 1000);
        assert_eq!(find(&ITEMS, "farm").unwrap().value, 100);
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        for (i, a) in ITEMS.iter().enumerate() {
            for b in ITEMS.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_find_unknown_id() {
        assert!(find(&ITEMS, "factory").is_none());
        assert!(find(&[], "cursor").is_none());
    }

    #[test]
    fn test_affordable_selection() {
        assert_eq!(most_expensive_affordable(&ITEMS, 150).unwrap().id, "grandma");
        assert_eq!(cheapest_affordable(&ITEMS, 150).unwrap().id, "cursor");
        assert_eq!(most_expensive_affordable(&ITEMS, 1000).unwrap().id, "farm");
        assert!(most_expensive_affordable(&ITEMS, 9).is_none());
        assert!(cheapest_affordable(&ITEMS, 9).is_none());
    }
}
