//! Theme builder: token configuration to a complete fragment set
//!
//! [`build_fragment_set`] is pure. Given the same tokens and palette it
//! always produces a set of the same shape; the [`StyleSheet`] only decides
//! whether the fragments carry their declarations or come out inert.

use std::sync::Arc;

use prim_core::{
    expand, literals, relative_sizes, Category, Declaration, StyleAttribute, StyleFragment,
    StyleSheet, StyleValue, TokenTable, INERT,
};
use serde::Serialize;

use crate::config::TokenConfig;

/// Declares a fixed group of literal fragments.
///
/// Each field becomes a public [`StyleFragment`]; `build` creates them all
/// through a sheet and `get` looks one up by field name.
macro_rules! atom_group {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($field:ident => [$($attr:ident = $value:expr),+ $(,)?]),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, Serialize)]
        pub struct $name {
            $(pub $field: StyleFragment,)+
        }

        impl $name {
            pub fn build<S: StyleSheet + ?Sized>(sheet: &S) -> Self {
                Self {
                    $($field: sheet.create(vec![
                        $(Declaration::new(StyleAttribute::$attr, $value)),+
                    ]),)+
                }
            }

            /// Fragment by field name, inert if there is no such field
            pub fn get(&self, name: &str) -> &StyleFragment {
                match name {
                    $(stringify!($field) => &self.$field,)+
                    _ => &INERT,
                }
            }

            pub fn names() -> &'static [&'static str] {
                &[$(stringify!($field)),+]
            }

            pub fn iter(&self) -> impl Iterator<Item = (&'static str, &StyleFragment)> {
                [$((stringify!($field), &self.$field)),+].into_iter()
            }
        }
    };
}

const fn kw(keyword: &'static str) -> StyleValue {
    StyleValue::keyword(keyword)
}

atom_group! {
    /// Flex shorthand, direction, wrapping, grow and shrink
    FlexAtoms {
        one => [Flex = 1],
        row => [FlexDirection = kw("row")],
        row_r => [FlexDirection = kw("row-reverse")],
        col => [FlexDirection = kw("column")],
        col_r => [FlexDirection = kw("column-reverse")],
        wrap => [FlexWrap = kw("wrap")],
        no_wrap => [FlexWrap = kw("nowrap")],
        grow => [FlexGrow = 1],
        grow0 => [FlexGrow = 0],
        shrink => [FlexShrink = 1],
        shrink0 => [FlexShrink = 0],
    }
}

atom_group! {
    /// `alignItems`
    ItemsAtoms {
        stretch => [AlignItems = kw("stretch")],
        start => [AlignItems = kw("flex-start")],
        center => [AlignItems = kw("center")],
        end => [AlignItems = kw("flex-end")],
        baseline => [AlignItems = kw("baseline")],
    }
}

atom_group! {
    /// `alignSelf`
    SelfAtoms {
        auto => [AlignSelf = kw("auto")],
        start => [AlignSelf = kw("flex-start")],
        center => [AlignSelf = kw("center")],
        end => [AlignSelf = kw("flex-end")],
        stretch => [AlignSelf = kw("stretch")],
    }
}

atom_group! {
    /// `alignContent`
    ContentAtoms {
        center => [AlignContent = kw("center")],
        start => [AlignContent = kw("flex-start")],
        end => [AlignContent = kw("flex-end")],
        between => [AlignContent = kw("space-between")],
        around => [AlignContent = kw("space-around")],
        stretch => [AlignContent = kw("stretch")],
    }
}

atom_group! {
    /// `justifyContent`
    JustifyAtoms {
        start => [JustifyContent = kw("flex-start")],
        center => [JustifyContent = kw("center")],
        end => [JustifyContent = kw("flex-end")],
        between => [JustifyContent = kw("space-between")],
        around => [JustifyContent = kw("space-around")],
        evenly => [JustifyContent = kw("space-evenly")],
    }
}

atom_group! {
    OverflowAtoms {
        hidden => [Overflow = kw("hidden")],
        visible => [Overflow = kw("visible")],
        scroll => [Overflow = kw("scroll")],
    }
}

atom_group! {
    /// Zero insets. Edge helpers set only their own edge.
    InsetAtoms {
        zero => [Top = 0, Right = 0, Bottom = 0, Left = 0],
        x0 => [Left = 0, Right = 0],
        y0 => [Top = 0, Bottom = 0],
        top0 => [Top = 0],
        right0 => [Right = 0],
        bottom0 => [Bottom = 0],
        left0 => [Left = 0],
    }
}

/// Every fragment a theme exposes, grouped by category.
///
/// Token-driven categories are [`Category`] maps indexed by token name;
/// fixed vocabularies are atom groups with one field per fragment.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FragmentSet {
    pub flex: FlexAtoms,
    pub items: ItemsAtoms,
    pub align_self: SelfAtoms,
    pub content: ContentAtoms,
    pub justify: JustifyAtoms,
    pub overflow: OverflowAtoms,

    pub bg: Category,
    pub border: Category,
    pub border_top: Category,
    pub border_right: Category,
    pub border_bottom: Category,
    pub border_left: Category,

    pub font: Category,
    pub text: Category,

    pub p: Category,
    pub px: Category,
    pub py: Category,
    pub pt: Category,
    pub pr: Category,
    pub pb: Category,
    pub pl: Category,
    pub ps: Category,
    pub pe: Category,

    pub m: Category,
    pub mx: Category,
    pub my: Category,
    pub mt: Category,
    pub mr: Category,
    pub mb: Category,
    pub ml: Category,
    pub ms: Category,
    pub me: Category,

    pub w: Category,
    pub min_w: Category,
    pub max_w: Category,
    pub h: Category,
    pub min_h: Category,
    pub max_h: Category,

    pub rounded: Category,

    pub absolute: StyleFragment,
    pub relative: StyleFragment,

    pub z00: StyleFragment,
    pub z10: StyleFragment,
    pub z20: StyleFragment,
    pub z30: StyleFragment,
    pub z40: StyleFragment,
    pub z50: StyleFragment,

    pub inset: InsetAtoms,
    pub opacity: Category,
}

impl FragmentSet {
    /// Token-driven categories with their field names, in declaration order
    pub fn categories(&self) -> Vec<(&'static str, &Category)> {
        vec![
            ("bg", &self.bg),
            ("border", &self.border),
            ("border_top", &self.border_top),
            ("border_right", &self.border_right),
            ("border_bottom", &self.border_bottom),
            ("border_left", &self.border_left),
            ("font", &self.font),
            ("text", &self.text),
            ("p", &self.p),
            ("px", &self.px),
            ("py", &self.py),
            ("pt", &self.pt),
            ("pr", &self.pr),
            ("pb", &self.pb),
            ("pl", &self.pl),
            ("ps", &self.ps),
            ("pe", &self.pe),
            ("m", &self.m),
            ("mx", &self.mx),
            ("my", &self.my),
            ("mt", &self.mt),
            ("mr", &self.mr),
            ("mb", &self.mb),
            ("ml", &self.ml),
            ("ms", &self.ms),
            ("me", &self.me),
            ("w", &self.w),
            ("min_w", &self.min_w),
            ("max_w", &self.max_w),
            ("h", &self.h),
            ("min_h", &self.min_h),
            ("max_h", &self.max_h),
            ("rounded", &self.rounded),
            ("opacity", &self.opacity),
        ]
    }

    /// Category by field name
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories()
            .into_iter()
            .find(|(field, _)| *field == name)
            .map(|(_, category)| category)
    }

    /// Every fragment in the set, atom groups and single fragments included
    pub fn fragments(&self) -> impl Iterator<Item = &StyleFragment> {
        let singles = [
            &self.absolute,
            &self.relative,
            &self.z00,
            &self.z10,
            &self.z20,
            &self.z30,
            &self.z40,
            &self.z50,
        ];
        self.flex
            .iter()
            .chain(self.items.iter())
            .chain(self.align_self.iter())
            .chain(self.content.iter())
            .chain(self.justify.iter())
            .chain(self.overflow.iter())
            .chain(self.inset.iter())
            .map(|(_, fragment)| fragment)
            .chain(singles)
            .chain(
                self.categories()
                    .into_iter()
                    .flat_map(|(_, category)| category.iter().map(|(_, fragment)| fragment)),
            )
    }

    /// Total number of fragments
    pub fn len(&self) -> usize {
        self.fragments().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the set was built by a live sheet
    pub fn is_live(&self) -> bool {
        self.fragments().any(StyleFragment::is_live)
    }
}

/// Palette colors on a border side, then border widths on the same side.
/// A name in both tables keeps only the width.
fn border<S: StyleSheet + ?Sized>(
    sheet: &S,
    palette: &TokenTable,
    widths: &TokenTable,
    color: StyleAttribute,
    width: StyleAttribute,
) -> Category {
    expand(sheet, palette, color).merged(expand(sheet, widths, width))
}

/// Spacing tokens plus the `full` and `half` relative sizes
fn spaced<S: StyleSheet + ?Sized>(
    sheet: &S,
    spacing: &TokenTable,
    attribute: StyleAttribute,
) -> Category {
    expand(sheet, spacing, attribute).merged(relative_sizes(sheet, attribute))
}

fn text<S: StyleSheet + ?Sized>(sheet: &S, tokens: &TokenConfig, palette: &TokenTable) -> Category {
    use StyleAttribute::*;

    let fixed = literals(
        sheet,
        [
            ("left", vec![Declaration::new(TextAlign, kw("left"))]),
            ("center", vec![Declaration::new(TextAlign, kw("center"))]),
            ("right", vec![Declaration::new(TextAlign, kw("right"))]),
            ("justify", vec![Declaration::new(TextAlign, kw("justify"))]),
            (
                "underline",
                vec![
                    Declaration::new(TextDecorationStyle, kw("solid")),
                    Declaration::new(TextDecorationLine, kw("underline")),
                ],
            ),
            (
                "line_through",
                vec![
                    Declaration::new(TextDecorationStyle, kw("solid")),
                    Declaration::new(TextDecorationLine, kw("line-through")),
                ],
            ),
            ("no_underline", vec![Declaration::new(TextDecorationLine, kw("none"))]),
            ("uppercase", vec![Declaration::new(TextTransform, kw("uppercase"))]),
            ("lowercase", vec![Declaration::new(TextTransform, kw("lowercase"))]),
            ("capitalize", vec![Declaration::new(TextTransform, kw("capitalize"))]),
            ("no_text_transform", vec![Declaration::new(TextTransform, kw("none"))]),
        ],
    );
    let styles = literals(
        sheet,
        tokens
            .text_style_declarations()
            .map(|(name, declarations)| (Arc::clone(name), declarations)),
    );

    expand(sheet, &tokens.font_size, FontSize)
        .merged(expand(sheet, palette, Color))
        .merged(fixed)
        .merged(styles)
}

fn font<S: StyleSheet + ?Sized>(sheet: &S, weights: &TokenTable) -> Category {
    expand(sheet, weights, StyleAttribute::FontWeight).merged(literals(
        sheet,
        [
            ("italic", vec![Declaration::new(StyleAttribute::FontStyle, kw("italic"))]),
            ("normal", vec![Declaration::new(StyleAttribute::FontStyle, kw("normal"))]),
        ],
    ))
}

/// Build every fragment of a theme from the tokens and the palette of the
/// current mode.
pub fn build_fragment_set<S>(tokens: &TokenConfig, palette: &TokenTable, sheet: &S) -> FragmentSet
where
    S: StyleSheet + ?Sized,
{
    use StyleAttribute::*;

    let spacing = &tokens.spacing;
    let widths = &tokens.border_width;
    let z = |index: i32| sheet.create(vec![Declaration::new(ZIndex, index)]);

    FragmentSet {
        flex: FlexAtoms::build(sheet),
        items: ItemsAtoms::build(sheet),
        align_self: SelfAtoms::build(sheet),
        content: ContentAtoms::build(sheet),
        justify: JustifyAtoms::build(sheet),
        overflow: OverflowAtoms::build(sheet),

        bg: expand(sheet, palette, BackgroundColor),
        border: border(sheet, palette, widths, BorderColor, BorderWidth),
        border_top: border(sheet, palette, widths, BorderTopColor, BorderTopWidth),
        border_right: border(sheet, palette, widths, BorderRightColor, BorderRightWidth),
        border_bottom: border(sheet, palette, widths, BorderBottomColor, BorderBottomWidth),
        border_left: border(sheet, palette, widths, BorderLeftColor, BorderLeftWidth),

        font: font(sheet, &tokens.font_weight),
        text: text(sheet, tokens, palette),

        p: spaced(sheet, spacing, Padding),
        px: spaced(sheet, spacing, PaddingHorizontal),
        py: spaced(sheet, spacing, PaddingVertical),
        pt: spaced(sheet, spacing, PaddingTop),
        pr: spaced(sheet, spacing, PaddingRight),
        pb: spaced(sheet, spacing, PaddingBottom),
        pl: spaced(sheet, spacing, PaddingLeft),
        ps: spaced(sheet, spacing, PaddingStart),
        pe: spaced(sheet, spacing, PaddingEnd),

        m: spaced(sheet, spacing, Margin),
        mx: spaced(sheet, spacing, MarginHorizontal),
        my: spaced(sheet, spacing, MarginVertical),
        mt: spaced(sheet, spacing, MarginTop),
        mr: spaced(sheet, spacing, MarginRight),
        mb: spaced(sheet, spacing, MarginBottom),
        ml: spaced(sheet, spacing, MarginLeft),
        ms: spaced(sheet, spacing, MarginStart),
        me: spaced(sheet, spacing, MarginEnd),

        w: spaced(sheet, spacing, Width),
        min_w: spaced(sheet, spacing, MinWidth),
        max_w: spaced(sheet, spacing, MaxWidth),
        h: spaced(sheet, spacing, Height),
        min_h: spaced(sheet, spacing, MinHeight),
        max_h: spaced(sheet, spacing, MaxHeight),

        rounded: expand(sheet, &tokens.border_radius, BorderRadius),

        absolute: sheet.create(vec![Declaration::new(Position, kw("absolute"))]),
        relative: sheet.create(vec![Declaration::new(Position, kw("relative"))]),

        z00: z(0),
        z10: z(10),
        z20: z(20),
        z30: z(30),
        z40: z(40),
        z50: z(50),

        inset: InsetAtoms::build(sheet),
        opacity: expand(sheet, &tokens.opacity, Opacity),
    }
}
