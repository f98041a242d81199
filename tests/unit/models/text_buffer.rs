use crate::models::TextBuffer;

#[test]
fn line_reads_without_newline() {
    let buffer = TextBuffer::from_text("first\nsecond\n");
    assert_eq!(buffer.line(0).as_deref(), Some("first"));
    assert_eq!(buffer.line(1).as_deref(), Some("second"));
    assert_eq!(buffer.line(2).as_deref(), Some(""));
    assert_eq!(buffer.line(9), None);
}

#[test]
fn line_strips_crlf() {
    let buffer = TextBuffer::from_text("first\r\nsecond");
    assert_eq!(buffer.line(0).as_deref(), Some("first"));
    assert_eq!(buffer.line(1).as_deref(), Some("second"));
}

#[test]
fn set_line_replaces_only_that_line() {
    let mut buffer = TextBuffer::from_text("a\n![[pic.png]]\nc\n");
    assert!(buffer.set_line(1, "![[pic.png|100]]"));
    assert_eq!(buffer.text(), "a\n![[pic.png|100]]\nc\n");
}

#[test]
fn set_line_preserves_crlf_terminator() {
    let mut buffer = TextBuffer::from_text("a\r\nb\r\n");
    assert!(buffer.set_line(0, "edited"));
    assert_eq!(buffer.text(), "edited\r\nb\r\n");
}

#[test]
fn set_line_out_of_range_is_rejected() {
    let mut buffer = TextBuffer::from_text("only\n");
    assert!(!buffer.set_line(5, "nope"));
    assert_eq!(buffer.text(), "only\n");
}

#[test]
fn replace_all_swaps_content() {
    let mut buffer = TextBuffer::from_text("old");
    buffer.replace_all("new content");
    assert_eq!(buffer.text(), "new content");
}

#[test]
fn write_to_streams_full_content() {
    let buffer = TextBuffer::from_text("line one\nline two\n");
    let mut out = Vec::new();
    buffer.write_to(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "line one\nline two\n");
}

#[test]
fn cursor_round_trips() {
    let mut buffer = TextBuffer::from_text("a\nb\n");
    assert_eq!(buffer.cursor(), (0, 0));
    buffer.set_cursor(1, 3);
    assert_eq!(buffer.cursor(), (1, 3));
}
