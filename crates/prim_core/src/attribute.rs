//! Rendering attributes a style fragment can target

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::StyleError;

macro_rules! style_attributes {
    ($( $(#[$meta:meta])* $variant:ident => $name:literal, )*) => {
        /// A single rendering attribute, named the way the host style system
        /// names it (`width`, `backgroundColor`, ...).
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum StyleAttribute {
            $( $(#[$meta])* $variant, )*
        }

        impl StyleAttribute {
            /// Every attribute, in declaration order
            pub const ALL: &'static [StyleAttribute] = &[ $( StyleAttribute::$variant, )* ];

            /// Host style-system name of the attribute
            pub const fn name(self) -> &'static str {
                match self {
                    $( StyleAttribute::$variant => $name, )*
                }
            }
        }

        impl FromStr for StyleAttribute {
            type Err = StyleError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $name => Ok(StyleAttribute::$variant), )*
                    other => Err(StyleError::UnknownAttribute(other.to_string())),
                }
            }
        }
    };
}

style_attributes! {
    // Flex layout
    Flex => "flex",
    FlexDirection => "flexDirection",
    FlexWrap => "flexWrap",
    FlexGrow => "flexGrow",
    FlexShrink => "flexShrink",

    // Alignment
    AlignItems => "alignItems",
    AlignSelf => "alignSelf",
    AlignContent => "alignContent",
    JustifyContent => "justifyContent",
    Overflow => "overflow",

    // Background and borders
    BackgroundColor => "backgroundColor",
    BorderColor => "borderColor",
    BorderWidth => "borderWidth",
    BorderTopColor => "borderTopColor",
    BorderTopWidth => "borderTopWidth",
    BorderRightColor => "borderRightColor",
    BorderRightWidth => "borderRightWidth",
    BorderBottomColor => "borderBottomColor",
    BorderBottomWidth => "borderBottomWidth",
    BorderLeftColor => "borderLeftColor",
    BorderLeftWidth => "borderLeftWidth",
    BorderRadius => "borderRadius",

    // Typography
    FontFamily => "fontFamily",
    FontSize => "fontSize",
    FontStyle => "fontStyle",
    FontWeight => "fontWeight",
    LetterSpacing => "letterSpacing",
    LineHeight => "lineHeight",
    Color => "color",
    TextAlign => "textAlign",
    TextDecorationLine => "textDecorationLine",
    TextDecorationStyle => "textDecorationStyle",
    TextTransform => "textTransform",

    // Padding
    Padding => "padding",
    PaddingHorizontal => "paddingHorizontal",
    PaddingVertical => "paddingVertical",
    PaddingTop => "paddingTop",
    PaddingRight => "paddingRight",
    PaddingBottom => "paddingBottom",
    PaddingLeft => "paddingLeft",
    /// Leading edge, flips under right-to-left layout
    PaddingStart => "paddingStart",
    /// Trailing edge, flips under right-to-left layout
    PaddingEnd => "paddingEnd",

    // Margin
    Margin => "margin",
    MarginHorizontal => "marginHorizontal",
    MarginVertical => "marginVertical",
    MarginTop => "marginTop",
    MarginRight => "marginRight",
    MarginBottom => "marginBottom",
    MarginLeft => "marginLeft",
    MarginStart => "marginStart",
    MarginEnd => "marginEnd",

    // Sizing
    Width => "width",
    MinWidth => "minWidth",
    MaxWidth => "maxWidth",
    Height => "height",
    MinHeight => "minHeight",
    MaxHeight => "maxHeight",

    // Positioning
    Position => "position",
    ZIndex => "zIndex",
    Top => "top",
    Right => "right",
    Bottom => "bottom",
    Left => "left",

    Opacity => "opacity",
}

impl fmt::Display for StyleAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for StyleAttribute {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for StyleAttribute {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
