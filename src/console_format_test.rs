/// Tests for console formatting module
///
/// These tests ensure layout primitives remain stable: wrapping,
/// column listing, padding, and span rendering.

#[cfg(test)]
mod tests {
    use crate::console_format::*;

    #[test]
    fn test_display_width_ascii() {
        assert_eq!(display_width("hello"), 5);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn test_display_width_unicode() {
        // Wide characters count double
        assert_eq!(display_width("拡張"), 4);
        assert_eq!(display_width("✓✓✓"), 3);
    }

    #[test]
    fn test_console_width_override() {
        set_console_width(100);
        assert_eq!(console_width(), 100);
        // Second set is ignored
        set_console_width(40);
        assert_eq!(console_width(), 100);
    }

    #[test]
    fn test_padder_aligns_to_longest() {
        let tokens = vec!["1.2".to_string(), "1.10.3".to_string()];
        let pad = padder(&tokens, 4);
        assert_eq!(pad("1.2"), "1.2       ");
        assert_eq!(pad("1.10.3"), "1.10.3    ");
    }

    #[test]
    fn test_padder_never_truncates() {
        let pad = padder(&["ab".to_string()], 0);
        assert_eq!(pad("abcdef"), "abcdef");
    }

    #[test]
    fn test_wrap_with_indent_hanging() {
        let lines = wrap_with_indent("one two three four five", 12, "", "    ");
        assert!(lines.len() > 1);
        assert!(!lines[0].starts_with(' '));
        for line in &lines {
            assert!(display_width(line) <= 12);
        }
        for cont in &lines[1..] {
            assert!(cont.starts_with("    "));
        }
    }

    #[test]
    fn test_wrap_preserving_newlines_keeps_paragraphs() {
        let text = "first paragraph\nsecond paragraph";
        let wrapped = wrap_preserving_newlines(text, 70, 4);
        assert_eq!(wrapped, "    first paragraph\n    second paragraph");
    }

    #[test]
    fn test_wrap_preserving_newlines_wraps_long_lines() {
        let text = "a a a a a a a a a a\nshort";
        let wrapped = wrap_preserving_newlines(text, 12, 4);
        let lines: Vec<&str> = wrapped.lines().collect();
        assert!(lines.len() > 2);
        assert_eq!(*lines.last().unwrap(), "    short");
        for line in lines {
            assert!(display_width(line) <= 12);
        }
    }

    #[test]
    fn test_colify_empty() {
        assert!(colify(&[], 4, 80).is_empty());
    }

    #[test]
    fn test_colify_single_column_when_tight() {
        let items: Vec<String> = ["alpha", "beta", "gamma"].iter().map(|s| s.to_string()).collect();
        let lines = colify(&items, 4, 10);
        assert_eq!(lines, vec!["    alpha", "    beta", "    gamma"]);
    }

    #[test]
    fn test_colify_column_major() {
        let items: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
        // col_width = 3, available = 12 -> 4 columns, but 4 items -> 1 row
        let lines = colify(&items, 0, 12);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0], "a  b  c  d");
    }

    #[test]
    fn test_colify_two_columns_reads_down() {
        let items: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        // col_width = 3, available = 6 -> 2 columns, 2 rows
        let lines = colify(&items, 0, 6);
        assert_eq!(lines, vec!["a  c", "b"]);
    }

    #[test]
    fn test_colify_no_trailing_spaces() {
        let items: Vec<String> = ["aa", "b"].iter().map(|s| s.to_string()).collect();
        let lines = colify(&items, 4, 10);
        for line in lines {
            assert_eq!(line, line.trim_end());
        }
    }

    #[test]
    fn test_report_writer_plain() {
        let mut buf = Vec::new();
        {
            let mut w = ReportWriter::new(&mut buf, false);
            w.line(&[Span::header("Tags:"), Span::plain(" none")]).unwrap();
        }
        assert_eq!(String::from_utf8(buf).unwrap(), "Tags: none\n");
    }

    #[test]
    fn test_report_writer_colors_emit_escapes() {
        let mut buf = Vec::new();
        {
            let mut w = ReportWriter::new(&mut buf, true);
            w.line(&[Span::new(Style::Version, "1.2.3")]).unwrap();
        }
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("\x1b["));
        assert!(out.contains("1.2.3"));
        assert!(out.ends_with("\x1b[0m\n"));
    }

    #[test]
    fn test_report_writer_plain_span_has_no_escapes() {
        let mut buf = Vec::new();
        {
            let mut w = ReportWriter::new(&mut buf, true);
            w.line(&[Span::plain("text")]).unwrap();
        }
        assert_eq!(String::from_utf8(buf).unwrap(), "text\n");
    }
}
