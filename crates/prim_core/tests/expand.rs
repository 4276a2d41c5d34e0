use pretty_assertions::assert_eq;
use prim_core::{
    decl, expand, literals, relative_sizes, Color, InertSheet, LiveSheet, StyleAttribute,
    StyleProp, StyleValue, TokenTable,
};

fn palette() -> TokenTable {
    TokenTable::from_pairs([
        ("base", Color::WHITE),
        ("fg", Color::BLACK),
        ("accent", Color::from_hex(0xFE640B)),
    ])
}

#[test]
fn every_token_gets_exactly_one_declaration() {
    let colors = palette();
    let bg = expand(&LiveSheet, &colors, StyleAttribute::BackgroundColor);

    assert_eq!(bg.len(), colors.len());
    for (name, value) in colors.iter() {
        let fragment = bg.get(name);
        assert_eq!(fragment.declarations().len(), 1);
        assert_eq!(fragment.get(StyleAttribute::BackgroundColor), Some(value));
    }
}

#[test]
fn expansion_keeps_token_order() {
    let spacing = TokenTable::from_pairs([("lg", 44.0), ("sm", 22.0), ("md", 33.0)]);
    let padding = expand(&LiveSheet, &spacing, StyleAttribute::Padding);
    let names: Vec<&str> = padding.names().map(|n| &**n).collect();
    assert_eq!(names, vec!["lg", "sm", "md"]);
}

#[test]
fn inert_sheet_yields_same_names_without_styles() {
    let colors = palette();
    let live = expand(&LiveSheet, &colors, StyleAttribute::Color);
    let inert = expand(&InertSheet, &colors, StyleAttribute::Color);

    let live_names: Vec<_> = live.names().collect();
    let inert_names: Vec<_> = inert.names().collect();
    assert_eq!(live_names, inert_names);
    assert!(inert.iter().all(|(_, fragment)| fragment.is_inert()));
    assert!(StyleProp::from(&inert["fg"]).resolve().is_empty());
}

#[test]
fn later_category_wins_on_collision() {
    let spacing = TokenTable::from_pairs([("full", 10.0), ("sm", 22.0)]);
    let width = expand(&LiveSheet, &spacing, StyleAttribute::Width)
        .merged(relative_sizes(&LiveSheet, StyleAttribute::Width));

    assert_eq!(width.len(), 3);
    assert_eq!(
        width["full"].get(StyleAttribute::Width),
        Some(&StyleValue::Percent(100.0))
    );
    assert_eq!(
        width["sm"].get(StyleAttribute::Width),
        Some(&StyleValue::Number(22.0))
    );
}

#[test]
fn list_resolution_is_left_to_right() {
    let colors = palette();
    let bg = expand(&LiveSheet, &colors, StyleAttribute::BackgroundColor);
    let card = literals(
        &LiveSheet,
        [(
            "card",
            vec![
                decl(StyleAttribute::BorderRadius, 12.0),
                decl(StyleAttribute::BackgroundColor, Color::BLACK),
            ],
        )],
    );

    let style = StyleProp::list([
        StyleProp::from(&card["card"]),
        StyleProp::from(&bg["accent"]),
        StyleProp::from(&bg["missing"]),
        StyleProp::None,
        StyleProp::list([StyleProp::inline([decl(StyleAttribute::Opacity, 0.5)])]),
    ])
    .resolve();

    assert_eq!(style.len(), 3);
    assert_eq!(
        style.get(StyleAttribute::BackgroundColor),
        Some(&StyleValue::Color(Color::from_hex(0xFE640B)))
    );
    assert_eq!(
        style.get(StyleAttribute::BorderRadius),
        Some(&StyleValue::Number(12.0))
    );
    assert_eq!(style.get(StyleAttribute::Opacity), Some(&StyleValue::Number(0.5)));
}

#[test]
fn unknown_names_select_the_inert_fragment() {
    let bg = expand(&LiveSheet, &palette(), StyleAttribute::BackgroundColor);
    assert!(bg["nope"].is_inert());
    assert!(bg.try_get("nope").is_none());
    assert!(!bg.contains("nope"));
}
