//! Derived read model over a cached collection

use crate::resources::Resource;

/// Direction of the active sort
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction
    pub fn toggled(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Short display value
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

/// Category constraint applied to the projection
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Every record passes
    #[default]
    All,

    /// Only records carrying the given category tag pass
    Only(String),
}

impl CategoryFilter {
    /// Constrain to one category value
    pub fn only(value: &str) -> Self {
        CategoryFilter::Only(value.to_string())
    }

    /// Whether a record with the given category tag passes.
    ///
    /// Records without a tag never pass an `Only` constraint.
    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(value) => category == Some(value.as_str()),
        }
    }
}

/// Search, filter, and sort settings for one collection view
pub(crate) struct ViewQuery<R: Resource> {
    pub(crate) search: String,
    pub(crate) sort_field: R::SortField,
    pub(crate) direction: SortDirection,
    pub(crate) category: CategoryFilter,
}

impl<R: Resource> ViewQuery<R> {
    pub(crate) fn new() -> Self {
        Self {
            search: String::new(),
            sort_field: R::DEFAULT_SORT,
            direction: SortDirection::Ascending,
            category: CategoryFilter::All,
        }
    }

    /// Records passing search and category, ordered by the active sort.
    ///
    /// The sort is stable, so records the keys cannot distinguish keep their
    /// cache order.
    pub(crate) fn project<'a>(&self, records: &'a [R]) -> Vec<&'a R> {
        let needle = self.search.to_lowercase();
        let mut rows: Vec<&R> = records
            .iter()
            .filter(|record| self.category.matches(record.category()))
            .filter(|record| matches_search(*record, &needle))
            .collect();

        rows.sort_by(|a, b| {
            let ordering = a
                .sort_key(self.sort_field)
                .cmp(&b.sort_key(self.sort_field));
            match self.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
        rows
    }
}

/// Case-insensitive substring test over the record's searchable fields
fn matches_search<R: Resource>(record: &R, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    record
        .search_text()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}
