//! Category grouping for the tags source

/// Rows belonging to one tag category, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup {
    /// Category name (the value of column 0)
    pub category: String,
    /// Remaining columns of each row, category column stripped
    pub rows: Vec<Vec<String>>,
}

/// Partition rows by their first column.
///
/// Group order is first-seen order and rows keep their source order within
/// a group. The result is an ordered sequence, not a map: section order in
/// the generated document must be deterministic.
pub fn group_by_category(rows: &[Vec<String>]) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();

    for row in rows {
        let (category, rest) = match row.split_first() {
            Some((cat, rest)) => (cat.clone(), rest.to_vec()),
            None => (String::new(), Vec::new()),
        };

        match groups.iter_mut().find(|g| g.category == category) {
            Some(group) => group.rows.push(rest),
            None => groups.push(CategoryGroup {
                category,
                rows: vec![rest],
            }),
        }
    }

    groups
}
