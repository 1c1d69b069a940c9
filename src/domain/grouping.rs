use super::models::CommandItem;
use indexmap::IndexMap;

#[derive(Debug, Clone, PartialEq)]
pub struct GroupEntry<'a> {
    /// Position across all groups in display order; the cursor indexes this.
    pub global_index: usize,
    pub item: &'a CommandItem,
}

/// A display row: either a group header or one command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DisplayRow<'a> {
    Header(&'a str),
    Entry {
        global_index: usize,
        item: &'a CommandItem,
    },
}

/// Filtered commands partitioned by group, in first-seen group order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroupedCommands<'a> {
    groups: IndexMap<&'a str, Vec<GroupEntry<'a>>>,
    len: usize,
}

#[must_use]
pub fn group(filtered: &[CommandItem]) -> GroupedCommands<'_> {
    let mut groups: IndexMap<&str, Vec<&CommandItem>> = IndexMap::new();
    for item in filtered {
        groups.entry(item.group_name()).or_default().push(item);
    }

    // Global indices follow display order, which differs from `filtered`
    // when groups interleave.
    let mut next = 0;
    let groups = groups
        .into_iter()
        .map(|(name, items)| {
            let entries: Vec<GroupEntry<'_>> = items
                .into_iter()
                .map(|item| {
                    let entry = GroupEntry {
                        global_index: next,
                        item,
                    };
                    next += 1;
                    entry
                })
                .collect();
            (name, entries)
        })
        .collect();

    GroupedCommands { groups, len: next }
}

impl<'a> GroupedCommands<'a> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn group_names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.groups.keys().copied()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[GroupEntry<'a>]> {
        self.groups.get(name).map(Vec::as_slice)
    }

    /// Item at a flattened index.
    #[must_use]
    pub fn item_at(&self, global_index: usize) -> Option<&'a CommandItem> {
        self.groups
            .values()
            .flatten()
            .find(|e| e.global_index == global_index)
            .map(|e| e.item)
    }

    /// Items in display order, indexable by global index.
    #[must_use]
    pub fn flattened(&self) -> Vec<&'a CommandItem> {
        self.groups.values().flatten().map(|e| e.item).collect()
    }

    /// Flattened display order, each group preceded by its header.
    #[must_use]
    pub fn rows(&self) -> Vec<DisplayRow<'a>> {
        let mut rows = Vec::with_capacity(self.len + self.groups.len());
        for (name, entries) in &self.groups {
            rows.push(DisplayRow::Header(*name));
            rows.extend(entries.iter().map(|e| DisplayRow::Entry {
                global_index: e.global_index,
                item: e.item,
            }));
        }
        rows
    }

    /// Row position of the entry with the given global index.
    #[must_use]
    pub fn row_of(&self, global_index: usize) -> Option<usize> {
        self.rows().iter().position(|row| {
            matches!(row, DisplayRow::Entry { global_index: g, .. } if *g == global_index)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::DEFAULT_GROUP;

    fn ids(entries: &[GroupEntry<'_>]) -> Vec<String> {
        entries.iter().map(|e| e.item.id.0.clone()).collect()
    }

    #[test]
    fn test_groups_keep_first_seen_order() {
        let items = vec![
            CommandItem::new("1", "one").with_group("B"),
            CommandItem::new("2", "two").with_group("A"),
            CommandItem::new("3", "three").with_group("B"),
        ];
        let grouped = group(&items);

        assert_eq!(grouped.group_names().collect::<Vec<_>>(), vec!["B", "A"]);
        assert_eq!(ids(grouped.get("B").unwrap()), vec!["1", "3"]);
        assert_eq!(ids(grouped.get("A").unwrap()), vec!["2"]);
    }

    #[test]
    fn test_global_index_follows_display_order() {
        let items = vec![
            CommandItem::new("1", "one").with_group("B"),
            CommandItem::new("2", "two").with_group("A"),
            CommandItem::new("3", "three").with_group("B"),
        ];
        let grouped = group(&items);

        assert_eq!(grouped.len(), 3);
        assert_eq!(grouped.item_at(0).unwrap().id.0, "1");
        assert_eq!(grouped.item_at(1).unwrap().id.0, "3");
        assert_eq!(grouped.item_at(2).unwrap().id.0, "2");
        assert!(grouped.item_at(3).is_none());
    }

    #[test]
    fn test_missing_group_uses_default_label() {
        let items = vec![
            CommandItem::new("1", "one"),
            CommandItem::new("2", "two").with_group("Theme"),
        ];
        let grouped = group(&items);
        assert_eq!(
            grouped.group_names().collect::<Vec<_>>(),
            vec![DEFAULT_GROUP, "Theme"]
        );
    }

    #[test]
    fn test_rows_interleave_headers() {
        let items = vec![
            CommandItem::new("1", "one").with_group("B"),
            CommandItem::new("2", "two").with_group("A"),
        ];
        let grouped = group(&items);
        let rows = grouped.rows();

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], DisplayRow::Header("B"));
        assert!(matches!(rows[1], DisplayRow::Entry { global_index: 0, .. }));
        assert_eq!(rows[2], DisplayRow::Header("A"));
        assert_eq!(grouped.row_of(1), Some(3));
        assert_eq!(grouped.row_of(7), None);
    }

    #[test]
    fn test_empty_input() {
        let grouped = group(&[]);
        assert!(grouped.is_empty());
        assert!(grouped.rows().is_empty());
    }
}
