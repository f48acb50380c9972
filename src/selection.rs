//! Selection Tracker
//!
//! The current task is held as a catalog position. Any mutation that can
//! shift positions goes through [`Selection::preserve`], which re-finds the
//! selected task by id afterwards.

use crate::models::{Entity, Group};

/// Position of the selected group, `None` when nothing is selected
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    index: Option<usize>,
}

impl Selection {
    pub fn none() -> Self {
        Self { index: None }
    }

    /// Build from a catalog position, dropping positions past the end
    pub fn at(catalog: &[Group], index: usize) -> Self {
        Self { index: (index < catalog.len()).then_some(index) }
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Selected group, if the index still points into the catalog
    pub fn resolve<'a>(&self, catalog: &'a [Group]) -> Option<&'a Group> {
        self.index.and_then(|i| catalog.get(i))
    }

    pub fn selected_id<'a>(&self, catalog: &'a [Group]) -> Option<&'a str> {
        self.resolve(catalog).map(|g| g.id())
    }

    /// Select by id; an unknown id clears the selection
    pub fn select(&mut self, catalog: &[Group], id: &str) {
        self.index = catalog.iter().position(|g| g.id == id);
    }

    pub fn clear(&mut self) {
        self.index = None;
    }

    /// Run a catalog mutation, then re-resolve the selection by identity
    pub fn preserve<R>(&mut self, catalog: &mut Vec<Group>, mutation: impl FnOnce(&mut Vec<Group>) -> R) -> R {
        let selected = self.selected_id(catalog).map(str::to_owned);
        let result = mutation(catalog);
        match selected {
            Some(id) => self.select(catalog, &id),
            None => self.clear(),
        }
        result
    }
}
