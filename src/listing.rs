//! Generic list/filter/detail-selection core shared by every browse page.
//!
//! Filtering is synchronous and recomputed on every input change; selection
//! always points at a member of the current filtered set or at nothing.

use crate::models::job::JobPosting;
use crate::models::misdeed::MisdeedRecord;

/// The searchable fields a record exposes to [`ListDetailView`].
pub trait Listable {
    fn id(&self) -> i64;
    fn title(&self) -> &str;
    /// Company name or posting username, whichever the record carries.
    fn author(&self) -> &str;
    fn location(&self) -> &str;
    fn category(&self) -> Option<&str>;
}

impl Listable for JobPosting {
    fn id(&self) -> i64 {
        self.id
    }
    fn title(&self) -> &str {
        &self.title
    }
    fn author(&self) -> &str {
        &self.company
    }
    fn location(&self) -> &str {
        &self.location
    }
    fn category(&self) -> Option<&str> {
        self.category.map(|c| c.as_str())
    }
}

impl Listable for MisdeedRecord {
    fn id(&self) -> i64 {
        self.id
    }
    fn title(&self) -> &str {
        &self.job_title
    }
    fn author(&self) -> &str {
        &self.company_name
    }
    fn location(&self) -> &str {
        &self.location
    }
    fn category(&self) -> Option<&str> {
        None
    }
}

/// A searchable list plus the record currently open in the detail pane.
#[derive(Debug, Clone)]
pub struct ListDetailView<T: Listable> {
    items: Vec<T>,
    search: String,
    location: String,
    category: Option<String>,
    visible: Vec<usize>,
    selected: Option<usize>,
}

impl<T: Listable> ListDetailView<T> {
    pub fn new(items: Vec<T>) -> Self {
        let mut view = Self {
            items,
            search: String::new(),
            location: String::new(),
            category: None,
            visible: Vec::new(),
            selected: None,
        };
        view.refilter();
        view
    }

    /// Free-text query matched against title and author.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
        self.refilter();
    }

    /// Free-text query matched against the location field.
    pub fn set_location(&mut self, query: impl Into<String>) {
        self.location = query.into();
        self.refilter();
    }

    /// Exact category filter; `None` or `"All"` clears it.
    pub fn set_category(&mut self, category: Option<&str>) {
        self.category = category
            .filter(|c| !c.is_empty() && *c != "All")
            .map(str::to_string);
        self.refilter();
    }

    /// Open a specific visible record in the detail pane. Selecting an id
    /// that is filtered out (or unknown) leaves the selection untouched.
    pub fn select(&mut self, id: i64) -> bool {
        let hit = self
            .visible
            .iter()
            .copied()
            .find(|&idx| self.items[idx].id() == id);
        match hit {
            Some(idx) => {
                self.selected = Some(idx);
                true
            }
            None => false,
        }
    }

    pub fn filtered(&self) -> impl Iterator<Item = &T> {
        self.visible.iter().map(move |&idx| &self.items[idx])
    }

    pub fn selected(&self) -> Option<&T> {
        self.selected.map(|idx| &self.items[idx])
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    /// An empty filtered set renders the explicit "no results" state.
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    fn refilter(&mut self) {
        self.visible = (0..self.items.len())
            .filter(|&idx| self.matches(&self.items[idx]))
            .collect();
        // Any filter change drops the old selection back to the first hit.
        self.selected = self.visible.first().copied();
    }

    fn matches(&self, item: &T) -> bool {
        let search_hit = self.search.is_empty()
            || contains_ci(item.title(), &self.search)
            || contains_ci(item.author(), &self.search);
        let location_hit =
            self.location.is_empty() || contains_ci(item.location(), &self.location);
        let category_hit = match &self.category {
            None => true,
            Some(wanted) => item.category() == Some(wanted.as_str()),
        };
        search_hit && location_hit && category_hit
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
