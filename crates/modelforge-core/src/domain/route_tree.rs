//! Flat URL-like paths → merged hierarchy.
//!
//! One segment walk serves two outputs:
//!
//! - [`build_tree`] keeps per-path metadata on a navigable [`RouteNode`]
//!   tree (documentation view, `modelforge routes`).
//! - [`materialize_files`] lowers the same tree into folders with one
//!   `page.tsx` per path (client code generation).
//!
//! ```text
//! /                      root (metadata attached here)
//! /dashboard/settings    dashboard/
//! /orders/[id]           ├── settings/   ← page.tsx
//!                        orders/
//!                        └── [id]/       ← page.tsx, dynamic
//! ```

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::{entities::file_tree::FileTreeItem, entities::system_model::Page};

/// File placed in each route folder.
pub const PAGE_FILE: &str = "page.tsx";

/// Non-empty `/`-separated segments of a path.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// `[id]` and `:id` are dynamic; everything else is literal.
pub fn is_dynamic_segment(segment: &str) -> bool {
    segment.starts_with('[') || segment.starts_with(':')
}

/// Canonical form used to compare paths (`/a/b/` and `a//b` are equal).
pub fn route_key(path: &str) -> String {
    segments(path).collect::<Vec<_>>().join("/")
}

/// One node of the route tree. The root has an empty segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteNode<M> {
    segment: String,
    dynamic: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<M>,
    children: Vec<RouteNode<M>>,
}

impl<M> RouteNode<M> {
    fn new(segment: &str) -> Self {
        Self {
            segment: segment.to_string(),
            dynamic: is_dynamic_segment(segment),
            metadata: None,
            children: Vec::new(),
        }
    }

    fn root() -> Self {
        Self::new("")
    }

    pub fn segment(&self) -> &str {
        &self.segment
    }

    pub fn is_root(&self) -> bool {
        self.segment.is_empty()
    }

    pub fn is_dynamic(&self) -> bool {
        self.dynamic
    }

    pub fn metadata(&self) -> Option<&M> {
        self.metadata.as_ref()
    }

    /// Children in first-insertion order.
    pub fn children(&self) -> &[RouteNode<M>] {
        &self.children
    }

    pub fn child(&self, segment: &str) -> Option<&RouteNode<M>> {
        self.children.iter().find(|c| c.segment == segment)
    }

    /// Number of nodes below this one.
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|c| 1 + c.descendant_count())
            .sum()
    }

    /// Depth-first, parents before children. The root is visited at depth 0.
    pub fn walk<F>(&self, mut visit: F)
    where
        F: FnMut(usize, &RouteNode<M>),
    {
        self.walk_inner(0, &mut visit);
    }

    fn walk_inner<F>(&self, depth: usize, visit: &mut F)
    where
        F: FnMut(usize, &RouteNode<M>),
    {
        visit(depth, self);
        for child in &self.children {
            child.walk_inner(depth + 1, visit);
        }
    }

    fn child_or_insert(&mut self, segment: &str) -> &mut RouteNode<M> {
        let index = match self.children.iter().position(|c| c.segment == segment) {
            Some(index) => index,
            None => {
                self.children.push(RouteNode::new(segment));
                self.children.len() - 1
            }
        };
        &mut self.children[index]
    }

    fn insert(&mut self, path: &str, metadata: M) {
        let mut node = self;
        for segment in segments(path) {
            node = node.child_or_insert(segment);
        }
        node.metadata = Some(metadata);
    }
}

/// Build the merged route tree. A repeated path replaces its metadata.
pub fn build_tree<P, M, I>(entries: I) -> RouteNode<M>
where
    P: AsRef<str>,
    I: IntoIterator<Item = (P, M)>,
{
    let mut root = RouteNode::root();
    for (path, metadata) in entries {
        root.insert(path.as_ref(), metadata);
    }
    root
}

/// Lower paths to folders, one [`PAGE_FILE`] per path.
///
/// The page file of a folder precedes its subfolders. The root path `/`
/// yields a page file at the top level of the returned forest.
pub fn materialize_files<'a, I, F>(paths: I, mut content_for: F) -> Vec<FileTreeItem>
where
    I: IntoIterator<Item = &'a str>,
    F: FnMut(&str) -> String,
{
    let root = build_tree(paths.into_iter().map(|p| (p, content_for(p))));
    lower(root)
}

fn lower(node: RouteNode<String>) -> Vec<FileTreeItem> {
    let mut items = Vec::with_capacity(node.children.len() + 1);
    if let Some(content) = node.metadata {
        items.push(FileTreeItem::file(PAGE_FILE, content, "typescript"));
    }
    for child in node.children {
        let name = child.segment.clone();
        items.push(FileTreeItem::folder(name, lower(child)));
    }
    items
}

/// Merge prototype pages with plain screens.
///
/// For a path present in both lists the prototype entry wins field by field
/// and the screen fills whatever it left unset. Screen-only paths follow the
/// prototype paths, in their original order.
pub fn merge_pages(prototype_pages: &[Page], screens: &[Page]) -> Vec<Page> {
    let mut merged = Vec::with_capacity(prototype_pages.len() + screens.len());
    let mut covered = HashSet::new();

    for page in prototype_pages {
        let key = route_key(&page.path);
        let merged_page = match screens.iter().find(|s| route_key(&s.path) == key) {
            Some(screen) => page.clone().fill_from(screen),
            None => page.clone(),
        };
        covered.insert(key);
        merged.push(merged_page);
    }

    merged.extend(
        screens
            .iter()
            .filter(|s| !covered.contains(&route_key(&s.path)))
            .cloned(),
    );

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(path: &str) -> Page {
        Page {
            path: path.into(),
            ..Page::default()
        }
    }

    #[test]
    fn shared_prefix_merges_into_one_subtree() {
        let tree = build_tree([("/a/b", 1), ("/a/c", 2)]);
        assert_eq!(tree.children().len(), 1);
        let a = tree.child("a").unwrap();
        let names: Vec<_> = a.children().iter().map(RouteNode::segment).collect();
        assert_eq!(names, vec!["b", "c"]);
        assert_eq!(a.metadata(), None);
        assert_eq!(a.child("c").unwrap().metadata(), Some(&2));
    }

    #[test]
    fn root_path_attaches_to_root() {
        let tree = build_tree([("/", "home")]);
        assert!(tree.is_root());
        assert_eq!(tree.metadata(), Some(&"home"));
        assert!(tree.children().is_empty());
    }

    #[test]
    fn dynamic_segments_are_flagged() {
        let tree = build_tree([("/users/[id]", ()), ("/posts/:slug", ())]);
        let users = tree.child("users").unwrap();
        assert!(!users.is_dynamic());
        assert!(users.child("[id]").unwrap().is_dynamic());
        assert!(tree.child("posts").unwrap().child(":slug").unwrap().is_dynamic());
    }

    #[test]
    fn empty_segments_are_dropped() {
        let tree = build_tree([("//a///b/", 0)]);
        assert_eq!(tree.descendant_count(), 2);
        assert_eq!(route_key("//a///b/"), "a/b");
    }

    #[test]
    fn repeated_path_replaces_metadata() {
        let tree = build_tree([("/x", 1), ("/x", 2)]);
        assert_eq!(tree.child("x").unwrap().metadata(), Some(&2));
        assert_eq!(tree.descendant_count(), 1);
    }

    #[test]
    fn walk_visits_parents_first() {
        let tree = build_tree([("/a/b", ()), ("/c", ())]);
        let mut seen = Vec::new();
        tree.walk(|depth, node| seen.push((depth, node.segment().to_string())));
        assert_eq!(
            seen,
            vec![
                (0, String::new()),
                (1, "a".into()),
                (2, "b".into()),
                (1, "c".into()),
            ]
        );
    }

    #[test]
    fn materialize_nests_pages() {
        let items = materialize_files(["/", "/dashboard/settings"], |p| format!("// {p}"));
        assert_eq!(items[0].name(), PAGE_FILE);
        assert_eq!(items[0].content(), Some("// /"));

        let dashboard = &items[1];
        assert_eq!(dashboard.name(), "dashboard");
        assert_eq!(dashboard.children().len(), 1);
        let settings = dashboard.child("settings").unwrap();
        assert_eq!(
            settings.child(PAGE_FILE).and_then(|f| f.content()),
            Some("// /dashboard/settings")
        );
    }

    #[test]
    fn materialize_repeated_path_replaces_content() {
        let mut n = 0;
        let items = materialize_files(["/a", "/a"], |_| {
            n += 1;
            n.to_string()
        });
        assert_eq!(items.len(), 1);
        let a = &items[0];
        assert_eq!(a.children().len(), 1);
        assert_eq!(a.child(PAGE_FILE).and_then(|f| f.content()), Some("2"));
    }

    #[test]
    fn materialize_nothing_is_empty() {
        assert!(materialize_files(std::iter::empty(), |_| String::new()).is_empty());
    }

    #[test]
    fn merge_prefers_prototype_and_fills_gaps() {
        let proto = Page {
            description: Some("from prototype".into()),
            ..page("/orders")
        };
        let screen = Page {
            description: Some("from screen".into()),
            layout: Some("table".into()),
            ..page("/orders/")
        };
        let merged = merge_pages(&[proto], &[screen]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].description(), "from prototype");
        assert_eq!(merged[0].layout.as_deref(), Some("table"));
        assert_eq!(merged[0].path, "/orders");
    }

    #[test]
    fn merge_appends_screen_only_paths_in_order() {
        let merged = merge_pages(&[page("/b")], &[page("/c"), page("/b"), page("/a")]);
        let paths: Vec<_> = merged.iter().map(|p| p.path.as_str()).collect();
        assert_eq!(paths, vec!["/b", "/c", "/a"]);
    }

    #[test]
    fn merge_falls_back_to_screens() {
        let merged = merge_pages(&[], &[page("/"), page("/x")]);
        assert_eq!(merged.len(), 2);
    }
}
