//! Search and sort helpers shared by every list page.
use std::cmp::Ordering;

/// Row types that can be matched against a free-text search.
pub trait Searchable {
    /// Case-insensitive match against the row's searchable column.
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Row types that can be ordered by a named column.
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Stable sort by `field`.
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Rows matching `filter`. A blank filter keeps everything.
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    let filter = filter.trim();
    if filter.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .cloned()
        .collect()
}

/// Case-insensitive `contains`.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.trim().to_lowercase())
}

/// Case-insensitive string ordering.
pub fn cmp_ci(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Total order on floats for sortable numeric columns.
pub fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Sort indicator for a column header.
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        name: &'static str,
        price: f64,
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            contains_ci(self.name, filter)
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "price" => cmp_f64(self.price, other.price),
                _ => cmp_ci(self.name, other.name),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "tuerca", price: 0.2 },
            Row { name: "Arandela", price: 0.05 },
            Row { name: "Tornillo", price: 0.1 },
        ]
    }

    #[test]
    fn sorts_case_insensitively_both_ways() {
        let mut items = rows();
        sort_list(&mut items, "name", true);
        let names: Vec<_> = items.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Arandela", "Tornillo", "tuerca"]);

        sort_list(&mut items, "price", false);
        assert_eq!(items[0].name, "tuerca");
        assert_eq!(items[2].name, "Arandela");
    }

    #[test]
    fn filters_by_substring() {
        let items = rows();
        assert_eq!(filter_list(&items, "  ").len(), 3);
        let found = filter_list(&items, "TOR");
        assert_eq!(found, vec![Row { name: "Tornillo", price: 0.1 }]);
        assert!(filter_list(&items, "clavo").is_empty());
    }

    #[test]
    fn header_indicators() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "name", false), " ▼");
        assert_eq!(get_sort_indicator("name", "email", true), " ⇅");
        assert!(get_sort_class("name", "name").ends_with("--active"));
        assert_eq!(get_sort_class("name", "rol"), "table__sort-indicator");
    }
}
