//! Host primitives: `View` and `Text`

use prim_core::StyleProp;

use crate::statics::Statics;
use crate::widget::{Component, Node, Ref, RenderTree, Styled, WidgetId};

/// Props of [`View`]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewProps {
    pub style: StyleProp,
    /// Identifier for locating the node in tests and tooling
    pub test_id: Option<String>,
}

impl ViewProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id = Some(id.into());
        self
    }
}

impl Styled for ViewProps {
    fn style(&self) -> &StyleProp {
        &self.style
    }

    fn style_mut(&mut self) -> &mut StyleProp {
        &mut self.style
    }
}

/// Instance a [`View`] ref resolves to
#[derive(Clone, Debug, PartialEq)]
pub struct ViewHandle {
    pub id: WidgetId,
    pub test_id: Option<String>,
}

/// Layout container
#[derive(Debug, Default)]
pub struct View {
    statics: Statics,
}

impl View {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component for View {
    type Props = ViewProps;
    type Instance = ViewHandle;

    fn display_name(&self) -> String {
        "View".to_string()
    }

    fn statics(&self) -> &Statics {
        &self.statics
    }

    fn render(
        &self,
        props: ViewProps,
        instance_ref: Option<&Ref<ViewHandle>>,
        tree: &mut RenderTree,
    ) -> WidgetId {
        let id = tree.insert(Node::new(self.display_name(), &props.style));
        if let Some(instance_ref) = instance_ref {
            instance_ref.set(ViewHandle {
                id,
                test_id: props.test_id,
            });
        }
        id
    }
}

/// Props of [`Text`]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextProps {
    pub style: StyleProp,
    pub content: String,
}

impl TextProps {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }
}

impl Styled for TextProps {
    fn style(&self) -> &StyleProp {
        &self.style
    }

    fn style_mut(&mut self) -> &mut StyleProp {
        &mut self.style
    }
}

/// Instance a [`Text`] ref resolves to
#[derive(Clone, Debug, PartialEq)]
pub struct TextHandle {
    pub id: WidgetId,
    pub content: String,
}

/// Text run
#[derive(Debug, Default)]
pub struct Text {
    statics: Statics,
}

impl Text {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component for Text {
    type Props = TextProps;
    type Instance = TextHandle;

    fn display_name(&self) -> String {
        "Text".to_string()
    }

    fn statics(&self) -> &Statics {
        &self.statics
    }

    fn render(
        &self,
        props: TextProps,
        instance_ref: Option<&Ref<TextHandle>>,
        tree: &mut RenderTree,
    ) -> WidgetId {
        let node = Node::new(self.display_name(), &props.style).with_text(props.content.clone());
        let id = tree.insert(node);
        if let Some(instance_ref) = instance_ref {
            instance_ref.set(TextHandle {
                id,
                content: props.content,
            });
        }
        id
    }
}
