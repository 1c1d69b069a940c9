use super::models::CommandItem;

/// Returns the items whose label contains `query`, ignoring case, in their
/// original order. An empty query keeps everything.
#[must_use]
pub fn filter(items: &[CommandItem], query: &str) -> Vec<CommandItem> {
    if query.is_empty() {
        return items.to_vec();
    }

    let query_lower = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.label.to_lowercase().contains(&query_lower))
        .cloned()
        .collect()
}

/// Text shown in place of the result list when nothing matches.
#[must_use]
pub fn empty_state_message(query: &str) -> String {
    format!("No results found for \"{query}\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[CommandItem]) -> Vec<&str> {
        items.iter().map(|i| i.label.as_str()).collect()
    }

    fn fruit() -> Vec<CommandItem> {
        vec![
            CommandItem::new("1", "Apple"),
            CommandItem::new("2", "Banana"),
            CommandItem::new("3", "apricot"),
        ]
    }

    #[test]
    fn test_filter_is_case_insensitive_and_stable() {
        let result = filter(&fruit(), "ap");
        assert_eq!(labels(&result), vec!["Apple", "apricot"]);

        let result = filter(&fruit(), "AP");
        assert_eq!(labels(&result), vec!["Apple", "apricot"]);
    }

    #[test]
    fn test_empty_query_is_identity() {
        let items = fruit();
        assert_eq!(filter(&items, ""), items);
    }

    #[test]
    fn test_matches_inside_label() {
        let result = filter(&fruit(), "nan");
        assert_eq!(labels(&result), vec!["Banana"]);
    }

    #[test]
    fn test_no_match_returns_empty() {
        assert!(filter(&fruit(), "zzz_no_match").is_empty());
    }

    #[test]
    fn test_only_label_is_matched() {
        let items = vec![CommandItem::new("apple", "Cherry")
            .with_group("apple")
            .with_shortcut("a")];
        assert!(filter(&items, "apple").is_empty());
    }

    #[test]
    fn test_empty_state_echoes_query() {
        let msg = empty_state_message("zzz_no_match");
        assert_eq!(msg, "No results found for \"zzz_no_match\"");
    }
}
