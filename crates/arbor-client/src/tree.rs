//! Tree-view state and browsing.
//!
//! [`TreeState`] is the pure cache: expanded folder subtrees keyed by
//! folder id. [`TreeBrowser`] drives it through the API. Children are
//! fetched lazily on first expansion, and create/rename/delete refetch
//! only the affected subtree. There is no staleness protection beyond
//! that refetch.

use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use arbor_core::result::AppResult;
use arbor_entity::folder::{Folder, FolderNode};

use crate::api::ApiClient;

/// Client-side cache of the visible folder tree.
#[derive(Debug, Clone, Default)]
pub struct TreeState {
    roots: Vec<Folder>,
    children: HashMap<Uuid, Vec<Folder>>,
    expanded: HashSet<Uuid>,
}

impl TreeState {
    /// Creates an empty tree state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the root folder list.
    pub fn set_roots(&mut self, roots: Vec<Folder>) {
        self.roots = roots;
    }

    /// Root folders in insertion order.
    pub fn roots(&self) -> &[Folder] {
        &self.roots
    }

    /// Cached children of a folder, if fetched.
    pub fn cached_children(&self, id: Uuid) -> Option<&[Folder]> {
        self.children.get(&id).map(Vec::as_slice)
    }

    /// Stores the fetched children of a folder.
    pub fn set_children(&mut self, id: Uuid, children: Vec<Folder>) {
        self.children.insert(id, children);
    }

    /// Whether a folder is currently expanded.
    pub fn is_expanded(&self, id: Uuid) -> bool {
        self.expanded.contains(&id)
    }

    /// Marks a folder expanded. Returns `true` when its children still
    /// need to be fetched (first expansion, or expansion after
    /// invalidation).
    pub fn expand(&mut self, id: Uuid) -> bool {
        self.expanded.insert(id);
        !self.children.contains_key(&id)
    }

    /// Collapses a folder. Cached children are kept for the next
    /// expansion.
    pub fn collapse(&mut self, id: Uuid) {
        self.expanded.remove(&id);
    }

    /// Drops the cached children of a folder so the next expansion
    /// refetches them.
    pub fn invalidate(&mut self, id: Uuid) {
        self.children.remove(&id);
    }

    /// Drops the cache entries for a folder and every cached folder
    /// underneath it. Used after a delete.
    pub fn remove_subtree(&mut self, id: Uuid) {
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            self.expanded.remove(&current);
            if let Some(children) = self.children.remove(&current) {
                stack.extend(children.iter().map(|c| c.id));
            }
        }
    }

    /// Renders the expanded tree as indented text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("/\n");
        for root in &self.roots {
            render_into(self, root, 1, &mut out);
        }
        out
    }
}

/// Drives a [`TreeState`] through the REST API.
#[derive(Debug)]
pub struct TreeBrowser {
    client: ApiClient,
    state: TreeState,
}

impl TreeBrowser {
    /// Creates a browser over an API client.
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            state: TreeState::new(),
        }
    }

    /// Read access to the underlying state.
    pub fn state(&self) -> &TreeState {
        &self.state
    }

    /// Fetches the root folder list.
    pub async fn load_roots(&mut self) -> AppResult<()> {
        let roots = self.client.list_roots().await?;
        self.state.set_roots(roots);
        Ok(())
    }

    /// Expands a folder, fetching its children on first expansion.
    pub async fn expand(&mut self, id: Uuid) -> AppResult<()> {
        if self.state.expand(id) {
            let children = self.client.list_children(id).await?;
            self.state.set_children(id, children);
        }
        Ok(())
    }

    /// Opens a folder: fetches it together with its children in one call
    /// and caches the listing.
    pub async fn open(&mut self, id: Uuid) -> AppResult<Folder> {
        let fetched = self.client.get_folder(id).await?;
        self.state.expand(id);
        self.state.set_children(id, fetched.children);
        Ok(fetched.folder)
    }

    /// Toggles a folder between expanded and collapsed.
    pub async fn toggle(&mut self, id: Uuid) -> AppResult<()> {
        if self.state.is_expanded(id) {
            self.state.collapse(id);
            Ok(())
        } else {
            self.expand(id).await
        }
    }

    /// Entries visible under a parent: the root list, or that parent's
    /// cached children.
    pub fn entries(&self, parent: Option<Uuid>) -> &[Folder] {
        match parent {
            None => self.state.roots(),
            Some(id) => self.state.cached_children(id).unwrap_or(&[]),
        }
    }

    /// Refetches the listing a parent owns (roots for `None`).
    pub async fn refresh(&mut self, parent: Option<Uuid>) -> AppResult<()> {
        match parent {
            None => self.load_roots().await,
            Some(id) => {
                let children = self.client.list_children(id).await?;
                self.state.set_children(id, children);
                Ok(())
            }
        }
    }

    /// Creates a folder and refetches the affected subtree.
    pub async fn create(&mut self, name: &str, parent: Option<Uuid>) -> AppResult<Folder> {
        let folder = self.client.create_folder(name, parent).await?;
        self.refresh(parent).await?;
        Ok(folder)
    }

    /// Renames a folder and refetches the listing it appears in.
    pub async fn rename(
        &mut self,
        id: Uuid,
        name: &str,
        parent: Option<Uuid>,
    ) -> AppResult<Folder> {
        let folder = self.client.rename_folder(id, name).await?;
        self.refresh(parent).await?;
        Ok(folder)
    }

    /// Deletes a folder, drops its cached subtree, and refetches the
    /// listing it appeared in.
    pub async fn delete(&mut self, id: Uuid, parent: Option<Uuid>) -> AppResult<()> {
        self.client.delete_folder(id).await?;
        self.state.remove_subtree(id);
        self.refresh(parent).await
    }

    /// Fetches the full subtree rooted at a folder.
    pub async fn subtree(&self, id: Uuid) -> AppResult<FolderNode> {
        self.client.get_tree(id).await
    }

    /// Renders the expanded tree as indented text.
    pub fn render(&self) -> String {
        self.state.render()
    }
}

fn render_into(state: &TreeState, folder: &Folder, depth: usize, out: &mut String) {
    out.push_str(&"  ".repeat(depth));
    out.push_str("├── ");
    out.push_str(&folder.name);
    out.push_str("/\n");

    if state.is_expanded(folder.id) {
        if let Some(children) = state.cached_children(folder.id) {
            for child in children {
                render_into(state, child, depth + 1, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn folder(name: &str, parent_id: Option<Uuid>) -> Folder {
        Folder {
            id: Uuid::new_v4(),
            parent_id,
            name: name.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_expand_requests_fetch_only_on_cache_miss() {
        let mut state = TreeState::new();
        let root = folder("root", None);

        assert!(state.expand(root.id), "first expansion needs a fetch");
        state.set_children(root.id, vec![folder("child", Some(root.id))]);

        state.collapse(root.id);
        assert!(!state.expand(root.id), "cached children are reused");
    }

    #[test]
    fn test_invalidate_forces_refetch() {
        let mut state = TreeState::new();
        let root = folder("root", None);

        state.expand(root.id);
        state.set_children(root.id, vec![]);
        state.invalidate(root.id);

        assert!(state.expand(root.id));
    }

    #[test]
    fn test_remove_subtree_clears_nested_caches() {
        let mut state = TreeState::new();
        let root = folder("root", None);
        let child = folder("child", Some(root.id));
        let grandchild = folder("grandchild", Some(child.id));

        state.expand(root.id);
        state.set_children(root.id, vec![child.clone()]);
        state.expand(child.id);
        state.set_children(child.id, vec![grandchild.clone()]);
        state.expand(grandchild.id);
        state.set_children(grandchild.id, vec![]);

        state.remove_subtree(root.id);

        assert!(state.cached_children(root.id).is_none());
        assert!(state.cached_children(child.id).is_none());
        assert!(state.cached_children(grandchild.id).is_none());
        assert!(!state.is_expanded(child.id));
    }

    #[tokio::test]
    async fn test_toggle_works_from_cache_without_a_server() {
        let client = ApiClient::new(&arbor_core::config::ClientConfig::default())
            .expect("client should build");
        let root = folder("root", None);

        let mut browser = TreeBrowser {
            client,
            state: TreeState::new(),
        };
        browser.state.set_roots(vec![root.clone()]);
        browser.state.expand(root.id);
        browser.state.set_children(root.id, vec![]);

        browser.toggle(root.id).await.expect("collapse is local");
        assert!(!browser.state().is_expanded(root.id));

        browser.toggle(root.id).await.expect("cached expand is local");
        assert!(browser.state().is_expanded(root.id));
    }

    #[test]
    fn test_render_shows_only_expanded_children() {
        let mut state = TreeState::new();
        let root = folder("root", None);
        let child = folder("child", Some(root.id));

        state.set_roots(vec![root.clone()]);
        state.set_children(root.id, vec![child]);

        assert_eq!(state.render(), "/\n  ├── root/\n");

        state.expand(root.id);
        assert_eq!(state.render(), "/\n  ├── root/\n    ├── child/\n");
    }

    #[test]
    fn test_collapse_hides_children_without_dropping_cache() {
        let mut state = TreeState::new();
        let root = folder("root", None);

        state.expand(root.id);
        state.set_children(root.id, vec![folder("child", Some(root.id))]);
        state.collapse(root.id);

        assert!(!state.is_expanded(root.id));
        assert!(state.cached_children(root.id).is_some());
    }
}
