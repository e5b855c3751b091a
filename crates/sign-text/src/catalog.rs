//! Curated font family catalog offered by front ends.
//!
//! Families resolve against the local font database; there is no network
//! dependency at this level. A family missing from the system simply falls
//! back per the store's resolution rules.

/// Family names surfaced in pickers, in display order.
pub const CURATED_FAMILIES: &[&str] = &[
    "Roboto",
    "Open Sans",
    "Lato",
    "Montserrat",
    "Oswald",
    "Source Code Pro",
    "Raleway",
    "PT Sans",
    "Merriweather",
    "Nunito",
    "Concert One",
    "Poiret One",
    "Playfair Display",
    "Slabo 27px",
    "Lora",
    "Ubuntu",
    "Arimo",
    "Noto Sans",
];

/// Case-insensitive substring filter, as used by search-as-you-type pickers.
pub fn filter_families(term: &str) -> Vec<&'static str> {
    let needle = term.to_lowercase();
    CURATED_FAMILIES
        .iter()
        .copied()
        .filter(|family| family.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_stable() {
        assert_eq!(CURATED_FAMILIES.len(), 18);
        assert_eq!(CURATED_FAMILIES[0], "Roboto");
    }

    #[test]
    fn filter_is_case_insensitive() {
        assert_eq!(filter_families("noto"), vec!["Noto Sans"]);
        assert_eq!(filter_families("SANS"), vec!["Open Sans", "PT Sans", "Noto Sans"]);
    }

    #[test]
    fn empty_term_returns_everything() {
        assert_eq!(filter_families("").len(), CURATED_FAMILIES.len());
    }
}
