//! Tests for [`TextBuffer`] and [`MarkBuffer`].

use crate::{
    DocumentEvent, DocumentSurface, EngineError, HighlightRange, HighlightRenderer,
    HighlightStyle, MarkBuffer, TextBuffer,
};

#[test]
fn edits_use_character_offsets() {
    let buffer = TextBuffer::new("grüße welt");
    let inserted = buffer.insert(6, "neue ").expect("insert");
    assert_eq!(inserted, DocumentEvent::Insert { offset: 6, length: 5 });
    assert_eq!(buffer.text(), "grüße neue welt");

    let removed = buffer.remove(0, 6).expect("remove");
    assert_eq!(removed, DocumentEvent::Remove { offset: 0, length: 6 });
    assert_eq!(buffer.text(), "neue welt");
    assert_eq!(buffer.char_len(), 9);
}

#[test]
fn edits_past_the_end_are_rejected() {
    let buffer = TextBuffer::new("abc");
    assert!(matches!(
        buffer.insert(4, "x"),
        Err(EngineError::InvalidArgument { .. })
    ));
    assert!(matches!(
        buffer.remove(2, 5),
        Err(EngineError::InvalidArgument { .. })
    ));
    assert_eq!(buffer.text(), "abc");
}

#[test]
fn set_text_reports_replace() {
    let buffer = TextBuffer::default();
    assert_eq!(buffer.set_text("fresh"), DocumentEvent::Replace);
    assert_eq!(DocumentEvent::Replace.offset(), None);
    assert_eq!(buffer.text(), "fresh");
}

#[test]
fn mark_buffer_rejects_ranges_past_its_length() {
    let mut marks = MarkBuffer::new(5);
    let style = HighlightStyle::default();
    marks
        .add_highlight(HighlightRange::new(0, 5), &style)
        .expect("range fits");
    let error = marks
        .add_highlight(HighlightRange::new(3, 6), &style)
        .expect_err("range exceeds length");
    assert_eq!(
        error,
        EngineError::range_out_of_bounds(HighlightRange::new(3, 6), 5)
    );
    assert_eq!(marks.marks().len(), 1);
}

#[test]
fn mark_buffer_remove_from_keeps_earlier_marks() {
    let mut marks = MarkBuffer::new(20);
    let style = HighlightStyle::default();
    for range in [HighlightRange::new(0, 3), HighlightRange::new(4, 7)] {
        marks.add_highlight(range, &style).expect("range fits");
    }
    marks.remove_from(4);
    assert_eq!(marks.marks().len(), 1);
    marks.remove_all();
    assert!(marks.marks().is_empty());
}

#[test]
fn range_slice_handles_multibyte_text() {
    let range = HighlightRange::new(1, 3);
    assert_eq!(range.slice("äöü"), Some("öü"));
    assert_eq!(HighlightRange::new(2, 5).slice("äöü"), None);
    assert_eq!(range.to_string(), "[1, 3)");
}
