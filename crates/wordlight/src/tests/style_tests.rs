//! Tests for [`HighlightStyle`] parsing.

use rstest::rstest;

use crate::{EngineError, HighlightStyle};

#[rstest]
#[case("yellow", (0xff, 0xff, 0x00))]
#[case("  Cyan ", (0x00, 0xff, 0xff))]
#[case("#ff8800", (0xff, 0x88, 0x00))]
#[case("#F80", (0xff, 0x88, 0x00))]
#[case("GREY", (0x80, 0x80, 0x80))]
fn parses_supported_colours(#[case] input: &str, #[case] expected: (u8, u8, u8)) {
    let style: HighlightStyle = input.parse().expect("colour parses");
    assert_eq!(style.rgb(), expected);
}

#[rstest]
#[case("chartreuse")]
#[case("#12345")]
#[case("#gg0000")]
#[case("#ü00")]
#[case("#+f+f+f")]
#[case("#+ff")]
#[case("")]
fn rejects_unknown_colours(#[case] input: &str) {
    let error = input
        .parse::<HighlightStyle>()
        .expect_err("colour should be rejected");
    assert!(matches!(error, EngineError::InvalidArgument { .. }));
}

#[test]
fn default_style_is_yellow() {
    assert_eq!(HighlightStyle::default().to_string(), "#ffff00");
}

#[test]
fn style_serde_round_trip() {
    let style = HighlightStyle::new(1, 2, 3);
    let json = serde_json::to_string(&style).expect("serialize");
    let deserialized: HighlightStyle = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(deserialized, style);
}
