use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use pretty_assertions::assert_eq;
use prim_core::{decl, Color, Signal, StyleAttribute, StyleProp, StyleValue, TokenTable};
use prim_theme::{ColorModes, Mode, PrimOptions, ScreenSizes, TokenConfig};
use prim_widgets::{
    configure_prim, primmed, Component, Node, PrimProvider, Ref, RenderTree, Statics, Styled,
    View, ViewProps,
};

const CORAL: Color = Color::rgb(1.0, 0.5, 0.31);

fn provider(mode: Mode, size: &str) -> (PrimProvider, Signal<Arc<str>>) {
    let tokens = TokenConfig {
        colors: ColorModes::new(
            TokenTable::from_pairs([("base", Color::WHITE), ("fg", Color::BLACK)]),
            TokenTable::from_pairs([("base", Color::BLACK), ("fg", Color::WHITE)]),
        ),
        screen_sizes: ScreenSizes::named(["se", "x", "tablet"]),
        spacing: TokenTable::from_pairs([("sm", 22.0), ("lg", 44.0)]),
        ..Default::default()
    };
    let size = Signal::new(Arc::<str>::from(size));
    let options = PrimOptions::with_signals(tokens, Signal::new(mode), size.clone());
    (configure_prim(options).unwrap(), size)
}

/// Text input whose instance exposes an imperative method
#[derive(Default)]
struct Input {
    statics: Statics,
}

#[derive(Default)]
struct InputProps {
    style: StyleProp,
}

impl Styled for InputProps {
    fn style(&self) -> &StyleProp {
        &self.style
    }

    fn style_mut(&mut self) -> &mut StyleProp {
        &mut self.style
    }
}

struct InputHandle {
    cursor: Rc<Cell<i32>>,
}

impl InputHandle {
    fn move_cursor(&self, position: i32) -> i32 {
        self.cursor.replace(position)
    }
}

impl Component for Input {
    type Props = InputProps;
    type Instance = InputHandle;

    fn display_name(&self) -> String {
        "Input".to_string()
    }

    fn statics(&self) -> &Statics {
        &self.statics
    }

    fn render(
        &self,
        props: InputProps,
        instance_ref: Option<&Ref<InputHandle>>,
        tree: &mut RenderTree,
    ) -> prim_widgets::WidgetId {
        if let Some(instance_ref) = instance_ref {
            instance_ref.set(InputHandle {
                cursor: Rc::new(Cell::new(0)),
            });
        }
        tree.insert(Node::new(self.display_name(), &props.style))
    }
}

#[test]
fn caller_style_wins_over_theme_style() {
    let (provider, _) = provider(Mode::Light, "se");
    let box_view = primmed(View::new(), |prim| {
        [&prim.bg["base"], &prim.w["lg"]].into()
    });

    let mut tree = RenderTree::new();
    let props = ViewProps::new().with_style(StyleProp::inline([decl(
        StyleAttribute::BackgroundColor,
        CORAL,
    )]));
    let id = provider.provide(|| box_view.render(props, None, &mut tree));

    let style = tree.style(id).unwrap();
    assert_eq!(
        style.get(StyleAttribute::BackgroundColor),
        Some(&StyleValue::Color(CORAL))
    );
    assert_eq!(style.get(StyleAttribute::Width), Some(&StyleValue::Number(44.0)));
}

#[test]
fn theme_style_applies_without_caller_style() {
    let (provider, _) = provider(Mode::Dark, "se");
    let label = primmed(View::new(), |prim| prim.bg["base"].clone().into());

    let mut tree = RenderTree::new();
    let id = provider.provide(|| label.render(ViewProps::new(), None, &mut tree));
    assert_eq!(
        tree.style(id).unwrap().get(StyleAttribute::BackgroundColor),
        Some(&StyleValue::Color(Color::BLACK))
    );
}

#[test]
fn inert_breakpoint_selections_are_no_ops() {
    let (provider, size) = provider(Mode::Light, "se");
    let panel = primmed(View::new(), |prim| {
        [&prim.breakpoint("tablet").p["sm"], &prim.breakpoint("se").p["lg"]].into()
    });

    let mut tree = RenderTree::new();
    let phone = provider.provide(|| panel.render(ViewProps::new(), None, &mut tree));
    assert_eq!(
        tree.style(phone).unwrap().get(StyleAttribute::Padding),
        Some(&StyleValue::Number(44.0))
    );

    size.set("tablet".into());
    let tablet = provider.provide(|| panel.render(ViewProps::new(), None, &mut tree));
    assert_eq!(
        tree.style(tablet).unwrap().get(StyleAttribute::Padding),
        Some(&StyleValue::Number(22.0))
    );

    size.set("x".into());
    let neither = provider.provide(|| panel.render(ViewProps::new(), None, &mut tree));
    assert!(tree.style(neither).unwrap().is_empty());
}

#[test]
fn refs_reach_the_wrapped_instance() {
    let (provider, _) = provider(Mode::Light, "se");
    let input = primmed(Input::default(), |prim| prim.text["fg"].clone().into());

    let mut tree = RenderTree::new();
    let input_ref = Ref::new();
    provider.provide(|| input.render(InputProps::default(), Some(&input_ref), &mut tree));

    assert!(input_ref.is_set());
    assert_eq!(input_ref.with(|handle| handle.move_cursor(42)), Some(0));
    assert_eq!(input_ref.with(|handle| handle.move_cursor(7)), Some(42));
}

#[test]
fn statics_are_hoisted_and_display_name_is_prefixed() {
    let target = Input {
        statics: Statics::new()
            .with("fragments", vec!["bg", "w"])
            .with("display_name", "CustomInput"),
    };
    let wrapped = primmed(target, |_| StyleProp::None);

    assert_eq!(wrapped.display_name(), "Primmed.Input");
    assert_eq!(
        wrapped.statics().get::<Vec<&str>>("fragments"),
        Some(&vec!["bg", "w"])
    );
    assert!(!wrapped.statics().contains("display_name"));
}

#[test]
fn wrappers_compose() {
    let (provider, _) = provider(Mode::Light, "se");
    let inner = primmed(View::new(), |prim| [&prim.w["sm"], &prim.bg["base"]].into());
    let outer = primmed(inner, |prim| prim.w["lg"].clone().into());
    assert_eq!(outer.display_name(), "Primmed.Primmed.View");

    let mut tree = RenderTree::new();
    let id = provider.provide(|| outer.render(ViewProps::new(), None, &mut tree));
    // The outer selection reaches the inner wrapper as caller style
    assert_eq!(
        tree.style(id).unwrap().get(StyleAttribute::Width),
        Some(&StyleValue::Number(44.0))
    );
}

#[test]
#[should_panic(expected = "outside a PrimProvider scope")]
fn rendering_outside_a_provider_panics() {
    let view = primmed(View::new(), |prim| prim.bg["base"].clone().into());
    view.render(ViewProps::new(), None, &mut RenderTree::new());
}
