//! Integration tests for inline style and declaration list parsing.

use gcss::parser::units::{parse_length, parse_spacing};
use gcss::parser::{parse_declarations, parse_inline_style, parse_length_value};
use gcss::{BoxSizing, Display, GcssError, Length, Position, Spacing, StyleProps, Unit};

// ============================================================================
// LENGTHS
// ============================================================================

#[test]
fn test_length_px() {
    let (remaining, length) = parse_length("320px").unwrap();
    assert!(remaining.is_empty());
    assert_eq!(length.value, 320.0);
    assert_eq!(length.unit, Unit::Px);
}

#[test]
fn test_length_unitless_is_px() {
    let (_, length) = parse_length("17").unwrap();
    assert_eq!(length, Length::px(17.0));
}

#[test]
fn test_length_fraction() {
    let (_, length) = parse_length("247.5px").unwrap();
    assert_eq!(length.value, 247.5);
}

#[test]
fn test_length_percent_and_viewport() {
    assert_eq!(parse_length("100%").unwrap().1, Length::percent(100.0));
    assert_eq!(parse_length("50vw").unwrap().1.unit, Unit::ViewWidth);
    assert_eq!(parse_length("50vh").unwrap().1.unit, Unit::ViewHeight);
}

#[test]
fn test_length_auto() {
    let (_, length) = parse_length("auto").unwrap();
    assert!(length.is_auto());
}

#[test]
fn test_length_value_rejects_trailing_text() {
    let err = parse_length_value("width", "10px wide").unwrap_err();
    assert_eq!(
        err,
        GcssError::InvalidValue {
            property: "width".into(),
            value: "10px wide".into()
        }
    );
}

// ============================================================================
// SPACING
// ============================================================================

#[test]
fn test_spacing_single_value() {
    let (_, spacing) = parse_spacing("8px").unwrap();
    assert_eq!(spacing, Spacing::all(Length::px(8.0)));
}

#[test]
fn test_spacing_two_values() {
    let (_, spacing) = parse_spacing("5px 10px").unwrap();
    assert_eq!(spacing, Spacing::px(5.0, 10.0, 5.0, 10.0));
}

#[test]
fn test_spacing_four_values() {
    let (_, spacing) = parse_spacing("10px 10px 5px 10px").unwrap();
    assert_eq!(spacing, Spacing::px(10.0, 10.0, 5.0, 10.0));
}

// ============================================================================
// DECLARATION LISTS
// ============================================================================

#[test]
fn test_declarations_keep_order_and_trim() {
    let declarations = parse_declarations(" container : #gallery ;items-per-row:3").unwrap();
    assert_eq!(declarations.len(), 2);
    assert_eq!(declarations[0].property, "container");
    assert_eq!(declarations[0].value, "#gallery");
    assert_eq!(declarations[1].property, "items-per-row");
    assert_eq!(declarations[1].value, "3");
}

#[test]
fn test_declarations_tolerate_stray_semicolons() {
    let declarations = parse_declarations(";;width: 1px;; ;").unwrap();
    assert_eq!(declarations.len(), 1);
}

#[test]
fn test_declarations_property_names_are_lowercased() {
    let declarations = parse_declarations("Width: 1px").unwrap();
    assert_eq!(declarations[0].property, "width");
}

#[test]
fn test_declarations_empty_source() {
    assert!(parse_declarations("").unwrap().is_empty());
    assert!(parse_declarations("   ").unwrap().is_empty());
}

#[test]
fn test_declarations_missing_colon_is_syntax_error() {
    let result = parse_declarations("width 10px");
    assert!(matches!(result, Err(GcssError::InvalidSyntax(_))));
}

#[test]
fn test_declarations_missing_value_is_syntax_error() {
    let result = parse_declarations("width: ;");
    assert!(matches!(result, Err(GcssError::InvalidSyntax(_))));
}

// ============================================================================
// INLINE STYLES
// ============================================================================

#[test]
fn test_inline_style_reads_managed_properties() {
    let style = parse_inline_style(
        "position: absolute; display: block; box-sizing: border-box; width: 247.5px; \
         left: 0px; top: 180px; padding: 5px 10px 5px 10px",
    )
    .unwrap();

    assert_eq!(style.position, Some(Position::Absolute));
    assert_eq!(style.display, Some(Display::Block));
    assert_eq!(style.box_sizing, Some(BoxSizing::BorderBox));
    assert_eq!(style.width, Some(Length::px(247.5)));
    assert_eq!(style.left, Some(Length::px(0.0)));
    assert_eq!(style.top, Some(Length::px(180.0)));
    assert_eq!(style.padding, Some(Spacing::px(5.0, 10.0, 5.0, 10.0)));
    assert!(style.height.is_none());
}

#[test]
fn test_inline_style_skips_unmanaged_properties() {
    let style = parse_inline_style("color: red; border: 1px solid black").unwrap();
    assert!(style.is_empty());
}

#[test]
fn test_inline_style_detects_explicit_width() {
    let with_width = parse_inline_style("width: 960px; margin: 0 auto").unwrap();
    let without_width = parse_inline_style("margin: 0 auto").unwrap();

    assert!(with_width.declared().contains(StyleProps::WIDTH));
    assert!(!without_width.declared().contains(StyleProps::WIDTH));
}

#[test]
fn test_inline_style_keyword_is_case_insensitive() {
    let style = parse_inline_style("display: BLOCK").unwrap();
    assert_eq!(style.display, Some(Display::Block));
}

#[test]
fn test_inline_style_rejects_unknown_keyword() {
    let result = parse_inline_style("position: sticky");
    assert!(matches!(result, Err(GcssError::InvalidValue { .. })));
}
