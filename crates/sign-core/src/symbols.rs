//! The fixed, ordered symbol set used for batch export.

/// Marker symbols appended after the numeric range.
pub const MARKER_SYMBOLS: [&str; 2] = ["P", "L"];

/// Total entries in the set: −9..=99 plus the two markers.
pub const SYMBOL_COUNT: usize = 111;

/// Build the full set in export order: "-9" through "99" ascending, then
/// "P" and "L". The order is stable and defines batch output order and
/// artifact naming.
pub fn symbol_set() -> Vec<String> {
    let mut set: Vec<String> = (-9..=99).map(|n: i32| n.to_string()).collect();
    set.extend(MARKER_SYMBOLS.iter().map(|s| s.to_string()));
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_exactly_111_entries() {
        assert_eq!(symbol_set().len(), SYMBOL_COUNT);
    }

    #[test]
    fn numeric_range_is_ascending() {
        let set = symbol_set();
        assert_eq!(set[0], "-9");
        assert_eq!(set[9], "0");
        assert_eq!(set[108], "99");
        for (i, s) in set[..109].iter().enumerate() {
            assert_eq!(s.parse::<i32>().unwrap(), i as i32 - 9);
        }
    }

    #[test]
    fn markers_close_the_set() {
        let set = symbol_set();
        assert_eq!(&set[109..], ["P", "L"]);
    }

    #[test]
    fn entries_are_unique() {
        let set = symbol_set();
        let mut deduped = set.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), set.len());
    }
}
