//! Navigation model for the shell sidebar.
//!
//! The menu is a static declarative tree, depth two at most: top-level
//! entries navigate directly, group headers only toggle expansion and
//! carry their children. Active-route highlighting is a pure function so
//! it can be tested without a browser.

use once_cell::sync::Lazy;

/// How a leaf's path is compared against the current route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Path must equal the route exactly. Used for the home entry so that
    /// `/` does not light up on every route.
    Exact,
    /// Route must start with the path.
    Prefix,
}

/// A single entry in the sidebar tree.
///
/// A leaf has `path: Some(..)` and no children; a group header has
/// `path: None` and a non-empty `children` slice. Leaf paths are unique
/// across the whole tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub path: Option<&'static str>,
    pub label: &'static str,
    pub icon: &'static str,
    pub match_mode: MatchMode,
    pub children: &'static [NavItem],
}

impl NavItem {
    const fn leaf(path: &'static str, label: &'static str, icon: &'static str) -> Self {
        Self {
            path: Some(path),
            label,
            icon,
            match_mode: MatchMode::Prefix,
            children: &[],
        }
    }

    const fn group(
        label: &'static str,
        icon: &'static str,
        children: &'static [NavItem],
    ) -> Self {
        Self {
            path: None,
            label,
            icon,
            match_mode: MatchMode::Prefix,
            children,
        }
    }

    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }
}

static MANUFACTURING: [NavItem; 3] = [
    NavItem::leaf("/Produksi", "Produksi", "factory"),
    NavItem::leaf("/Overhaul", "Overhaul Point", "wrench"),
    NavItem::leaf("/Rekayasa", "Rekayasa", "settings"),
];

/// The sidebar menu, mirroring the maintenance organization's structure.
pub static MAIN_MENU: Lazy<Vec<NavItem>> = Lazy::new(|| {
    vec![
        NavItem {
            path: Some("/"),
            label: "Home",
            icon: "home",
            match_mode: MatchMode::Exact,
            children: &[],
        },
        NavItem::leaf("/StockProduction", "Stock Production", "storage"),
        NavItem::group("Manufacturing", "factory", &MANUFACTURING),
        NavItem::leaf("/Kalibrasi", "Kalibrasi", "science"),
        NavItem::leaf("/Inventory", "Inventory", "inventory"),
        NavItem::leaf("/Personalia", "Personalia", "people"),
        NavItem::leaf("/QualityControl", "Quality Control", "check"),
    ]
});

/// Whether a leaf path is active for the current route.
pub fn is_active(current_path: &str, item_path: &str, mode: MatchMode) -> bool {
    match mode {
        MatchMode::Exact => current_path == item_path,
        MatchMode::Prefix => current_path.starts_with(item_path),
    }
}

/// Whether a nav item (leaf or group) should be highlighted.
pub fn item_is_active(current_path: &str, item: &NavItem) -> bool {
    if let Some(path) = item.path {
        return is_active(current_path, path, item.match_mode);
    }
    item.children
        .iter()
        .any(|child| item_is_active(current_path, child))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// All leaves of the menu, in declaration order.
    fn leaves() -> Vec<&'static NavItem> {
        let mut out = Vec::new();
        for item in MAIN_MENU.iter() {
            if item.is_group() {
                out.extend(item.children.iter());
            } else {
                out.push(item);
            }
        }
        out
    }

    #[test]
    fn leaf_paths_are_unique() {
        let all = leaves();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.path, b.path);
            }
        }
    }

    #[test]
    fn exactly_one_leaf_active_per_route() {
        for route in [
            "/",
            "/StockProduction",
            "/Produksi",
            "/Overhaul",
            "/Rekayasa",
            "/Kalibrasi",
            "/Inventory",
            "/Personalia",
            "/QualityControl",
        ] {
            let active: Vec<_> = leaves()
                .into_iter()
                .filter(|item| item_is_active(route, item))
                .collect();
            assert_eq!(active.len(), 1, "route {route} lit {} leaves", active.len());
            assert_eq!(active[0].path, Some(route));
        }
    }

    #[test]
    fn produksi_activates_manufacturing_group_but_not_home() {
        let group = MAIN_MENU
            .iter()
            .find(|item| item.label == "Manufacturing")
            .unwrap();
        assert!(item_is_active("/Produksi", group));

        let home = MAIN_MENU.iter().find(|item| item.label == "Home").unwrap();
        assert!(!item_is_active("/Produksi", home));
        assert!(item_is_active("/", home));
    }

    #[test]
    fn prefix_match_covers_subroutes() {
        assert!(is_active("/Inventory/detail/3", "/Inventory", MatchMode::Prefix));
        assert!(!is_active("/Inventory/detail/3", "/", MatchMode::Exact));
    }
}
