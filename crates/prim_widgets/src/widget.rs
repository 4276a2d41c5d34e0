//! Component model and render tree

use std::cell::{Ref as CellRef, RefCell};
use std::fmt;
use std::rc::Rc;

use prim_core::{ResolvedStyle, StyleProp};
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

use crate::statics::Statics;

new_key_type! {
    pub struct WidgetId;
}

/// Props that carry a `style` slot
pub trait Styled {
    fn style(&self) -> &StyleProp;

    fn style_mut(&mut self) -> &mut StyleProp;

    /// Builder-style style assignment
    fn with_style(mut self, style: impl Into<StyleProp>) -> Self
    where
        Self: Sized,
    {
        *self.style_mut() = style.into();
        self
    }
}

/// Something that renders into the tree.
///
/// `Instance` is what a [`Ref`] passed to `render` resolves to once the
/// component has rendered.
pub trait Component {
    type Props: Styled;
    type Instance;

    /// Name shown in debugging output
    fn display_name(&self) -> String;

    /// Static metadata attached to the component
    fn statics(&self) -> &Statics;

    fn render(
        &self,
        props: Self::Props,
        instance_ref: Option<&Ref<Self::Instance>>,
        tree: &mut RenderTree,
    ) -> WidgetId;
}

/// Shared handle to a rendered component's instance
pub struct Ref<T> {
    current: Rc<RefCell<Option<T>>>,
}

impl<T> Clone for Ref<T> {
    fn clone(&self) -> Self {
        Self {
            current: Rc::clone(&self.current),
        }
    }
}

impl<T> Default for Ref<T> {
    fn default() -> Self {
        Self {
            current: Rc::new(RefCell::new(None)),
        }
    }
}

impl<T> Ref<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an instance; called by the component that owns it
    pub fn set(&self, instance: T) {
        *self.current.borrow_mut() = Some(instance);
    }

    pub fn is_set(&self) -> bool {
        self.current.borrow().is_some()
    }

    /// Borrow the instance, if one is attached
    pub fn get(&self) -> Option<CellRef<'_, T>> {
        CellRef::filter_map(self.current.borrow(), Option::as_ref).ok()
    }

    /// Run `f` against the instance, if one is attached
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.current.borrow().as_ref().map(f)
    }

    /// Detach and return the instance
    pub fn take(&self) -> Option<T> {
        self.current.borrow_mut().take()
    }
}

impl<T: fmt::Debug> fmt::Debug for Ref<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Ref").field(&*self.current.borrow()).finish()
    }
}

/// A rendered element
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Node {
    /// Display name of the component that produced the node
    pub kind: String,
    /// Flattened style
    pub style: ResolvedStyle,
    pub text: Option<String>,
    pub parent: Option<WidgetId>,
    pub children: SmallVec<[WidgetId; 4]>,
}

impl Node {
    pub fn new(kind: impl Into<String>, style: &StyleProp) -> Self {
        Self {
            kind: kind.into(),
            style: style.resolve(),
            ..Default::default()
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

/// In-memory tree of rendered nodes
#[derive(Debug, Default)]
pub struct RenderTree {
    nodes: SlotMap<WidgetId, Node>,
    roots: Vec<WidgetId>,
}

impl RenderTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node without a parent
    pub fn insert(&mut self, node: Node) -> WidgetId {
        let id = self.nodes.insert(node);
        self.roots.push(id);
        id
    }

    /// Move `child` under `parent`.
    ///
    /// Returns `false` if either id is stale or if `child` is `parent` or one
    /// of its ancestors.
    pub fn append_child(&mut self, parent: WidgetId, child: WidgetId) -> bool {
        if !self.nodes.contains_key(parent) || !self.nodes.contains_key(child) {
            return false;
        }
        if self.is_ancestor_or_self(child, parent) {
            return false;
        }
        if let Some(previous) = self.nodes[child].parent.replace(parent) {
            self.nodes[previous].children.retain(|id| *id != child);
        }
        self.roots.retain(|id| *id != child);
        self.nodes[parent].children.push(child);
        true
    }

    fn is_ancestor_or_self(&self, candidate: WidgetId, mut id: WidgetId) -> bool {
        loop {
            if id == candidate {
                return true;
            }
            match self.nodes.get(id).and_then(|node| node.parent) {
                Some(parent) => id = parent,
                None => return false,
            }
        }
    }

    /// Render a component as a child of `parent`
    pub fn render_child<C: Component>(
        &mut self,
        parent: WidgetId,
        component: &C,
        props: C::Props,
        instance_ref: Option<&Ref<C::Instance>>,
    ) -> WidgetId {
        let child = component.render(props, instance_ref, self);
        self.append_child(parent, child);
        child
    }

    pub fn get(&self, id: WidgetId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Flattened style of a node
    pub fn style(&self, id: WidgetId) -> Option<&ResolvedStyle> {
        self.nodes.get(id).map(|node| &node.style)
    }

    pub fn children(&self, id: WidgetId) -> &[WidgetId] {
        self.nodes.get(id).map_or(&[][..], |node| node.children.as_slice())
    }

    pub fn roots(&self) -> &[WidgetId] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prim_core::{decl, StyleAttribute};

    #[test]
    fn test_append_child_reparents() {
        let mut tree = RenderTree::new();
        let a = tree.insert(Node::new("A", &StyleProp::None));
        let b = tree.insert(Node::new("B", &StyleProp::None));
        let c = tree.insert(Node::new("C", &StyleProp::None));

        assert!(tree.append_child(a, c));
        assert!(tree.append_child(b, c));
        assert!(tree.children(a).is_empty());
        assert_eq!(tree.children(b), &[c]);
        assert_eq!(tree.roots(), &[a, b]);
        assert!(!tree.append_child(c, c));
    }

    #[test]
    fn test_append_child_rejects_cycles() {
        let mut tree = RenderTree::new();
        let root = tree.insert(Node::new("Root", &StyleProp::None));
        let mid = tree.insert(Node::new("Mid", &StyleProp::None));
        let leaf = tree.insert(Node::new("Leaf", &StyleProp::None));
        assert!(tree.append_child(root, mid));
        assert!(tree.append_child(mid, leaf));

        assert!(!tree.append_child(leaf, root));
        assert!(!tree.append_child(leaf, mid));
        assert_eq!(tree.roots(), &[root]);
        assert_eq!(tree.get(root).unwrap().parent, None);
        assert_eq!(tree.children(leaf), &[] as &[WidgetId]);
    }

    #[test]
    fn test_node_resolves_style() {
        let style = StyleProp::inline([decl(StyleAttribute::Width, 10.0)]);
        let node = Node::new("View", &style).with_text("hi");
        assert_eq!(node.style.len(), 1);
        assert_eq!(node.text.as_deref(), Some("hi"));
    }

    #[test]
    fn test_ref_lifecycle() {
        let r: Ref<i32> = Ref::new();
        assert!(!r.is_set());
        assert_eq!(r.with(|n| n + 1), None);

        r.clone().set(41);
        assert_eq!(r.with(|n| n + 1), Some(42));
        assert_eq!(r.get().map(|n| *n), Some(41));
        assert_eq!(r.take(), Some(41));
        assert!(!r.is_set());
    }
}
