// ── Dependent-field cascade ──
//
// A selector whose options depend on another selector's value (states
// depend on the chosen country). The child's selection never survives a
// parent change, even when the old value would still be valid.

use std::future::Future;

use crate::error::CoreError;

/// A dependent dropdown: scoped options plus the current selection.
#[derive(Debug, Clone)]
pub struct DependentField<T> {
    options: Vec<T>,
    selected: Option<String>,
}

impl<T> Default for DependentField<T> {
    fn default() -> Self {
        Self {
            options: Vec::new(),
            selected: None,
        }
    }
}

impl<T> DependentField<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(&self) -> &[T] {
        &self.options
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Pick one of the loaded options by id.
    pub fn select(&mut self, id: impl Into<String>) {
        self.selected = Some(id.into());
    }

    /// React to a parent-value change.
    ///
    /// The selection resets before anything else happens. An empty
    /// parent clears the options synchronously with no network call;
    /// otherwise `load` fetches the scoped collection, which replaces
    /// the options wholesale. Idempotent for a repeated parent id.
    pub async fn on_parent_change<F, Fut>(
        &mut self,
        parent_id: Option<&str>,
        load: F,
    ) -> Result<(), CoreError>
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<Vec<T>, CoreError>>,
    {
        self.selected = None;
        match parent_id {
            None | Some("") => {
                self.options.clear();
                Ok(())
            }
            Some(parent) => {
                self.options = load(parent.to_owned()).await?;
                Ok(())
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn states_for(parent: &str) -> Vec<String> {
        match parent {
            "c1" => vec!["Bavaria".to_owned(), "Hesse".to_owned()],
            "c2" => vec!["Occitanie".to_owned()],
            _ => Vec::new(),
        }
    }

    #[tokio::test]
    async fn parent_change_resets_selection_before_loading() {
        let mut field: DependentField<String> = DependentField::new();
        field
            .on_parent_change(Some("c1"), |p| async move { Ok(states_for(&p)) })
            .await
            .unwrap();
        field.select("Bavaria");

        // A change to another valid parent still drops the selection,
        // even when the loader itself fails.
        let result = field
            .on_parent_change(Some("c2"), |_| async move {
                Err(CoreError::fetch_failed("states"))
            })
            .await;
        assert!(result.is_err());
        assert!(field.selected().is_none());
    }

    #[tokio::test]
    async fn empty_parent_clears_without_network() {
        let mut field: DependentField<String> = DependentField::new();
        field
            .on_parent_change(Some("c1"), |p| async move { Ok(states_for(&p)) })
            .await
            .unwrap();
        assert_eq!(field.options().len(), 2);

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        field
            .on_parent_change(None, |p| async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(states_for(&p))
            })
            .await
            .unwrap();

        assert!(field.options().is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 0, "no loader call for empty parent");

        // Blank string counts as empty too.
        field
            .on_parent_change(Some(""), |p| async move { Ok(states_for(&p)) })
            .await
            .unwrap();
        assert!(field.options().is_empty());
    }

    #[tokio::test]
    async fn repeated_parent_is_idempotent() {
        let mut field: DependentField<String> = DependentField::new();
        for _ in 0..2 {
            field
                .on_parent_change(Some("c1"), |p| async move { Ok(states_for(&p)) })
                .await
                .unwrap();
        }
        assert_eq!(field.options(), ["Bavaria", "Hesse"]);
    }

    #[tokio::test]
    async fn options_replaced_wholesale_on_new_parent() {
        let mut field: DependentField<String> = DependentField::new();
        field
            .on_parent_change(Some("c1"), |p| async move { Ok(states_for(&p)) })
            .await
            .unwrap();
        field
            .on_parent_change(Some("c2"), |p| async move { Ok(states_for(&p)) })
            .await
            .unwrap();
        assert_eq!(field.options(), ["Occitanie"]);
    }
}
