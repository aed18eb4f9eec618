use crate::output::Tabular;
use comfy_table::{ContentArrangement, Table};

pub fn list<T: Tabular>(items: &[T]) -> String {
    if items.is_empty() {
        return "Nothing found.".to_string();
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(T::HEADERS.to_vec());
    for item in items {
        table.add_row(item.row());
    }

    format!("{}\n\n{} found", table, items.len())
}

/// A single resource, one field per line.
pub fn item<T: Tabular>(item: &T) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Field", "Value"]);
    for (header, value) in T::HEADERS.iter().zip(item.row()) {
        table.add_row(vec![header.to_string(), value]);
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fruit(&'static str, u32);

    impl Tabular for Fruit {
        const HEADERS: &'static [&'static str] = &["Name", "Count"];

        fn row(&self) -> Vec<String> {
            vec![self.0.to_string(), self.1.to_string()]
        }
    }

    #[test]
    fn list_shows_a_header_and_a_count() {
        let rendered = list(&[Fruit("apple", 3), Fruit("pear", 1)]);

        assert!(rendered.contains("Name"));
        assert!(rendered.contains("apple"));
        assert!(rendered.ends_with("2 found"));
    }

    #[test]
    fn empty_lists_have_no_table() {
        assert_eq!(list::<Fruit>(&[]), "Nothing found.");
    }

    #[test]
    fn item_lists_every_field() {
        let rendered = item(&Fruit("apple", 3));

        assert!(rendered.contains("Count"));
        assert!(rendered.contains("3"));
    }
}
