use super::{cursor::Cursor, kinds::InlineObject, span::Span, types::RichTextSegment};

/// Parses a rich-text value into literal runs and inline content item objects.
///
/// Objects that are not content item references (other `<object>` embeds,
/// missing codename) stay part of the surrounding literal text.
///
/// Malformed objects are tolerated: an unterminated start tag ends at the next
/// tag or at the end of the value, an unterminated quoted attribute value ends
/// at the next `>` or `<`, and a missing or unterminated `</object` closing tag
/// still yields a content item segment. Parsing never fails.
pub fn parse_rich_text(s: &str) -> Vec<RichTextSegment> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<RichTextSegment>, start: usize, end: usize) {
        if end > start {
            out.push(RichTextSegment::Text(Span { start, end }));
        }
    }

    while !cur.eof() {
        if let Some(segment) = try_parse_inline_object(&mut cur) {
            let span = segment.span();
            flush_text(&mut out, text_start, span.start);
            text_start = span.end;
            out.push(segment);
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

/// Codenames of all inline content item objects in `s`, in document order.
pub fn inline_codenames(s: &str) -> Vec<String> {
    parse_rich_text(s)
        .into_iter()
        .filter_map(|segment| match segment {
            RichTextSegment::ContentItem { codename, .. } => Some(codename),
            RichTextSegment::Text(_) => None,
        })
        .collect()
}

/// Attribute spans of one start tag.
struct Attribute {
    name: Span,
    value: Span,
}

/// Attempts to parse an inline content item object at the current position.
/// On failure, cursor position is restored.
fn try_parse_inline_object(cur: &mut Cursor<'_>) -> Option<RichTextSegment> {
    if !cur.starts_with_ignore_case(InlineObject::OPEN) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(InlineObject::OPEN.len());
    if !InlineObject::ends_tag_name(cur.peek()) {
        *cur = saved;
        return None;
    }

    let (attributes, self_closing) = parse_attributes(cur);
    let Some(codename) = content_item_codename(cur.s, &attributes) else {
        *cur = saved;
        return None;
    };

    if !self_closing {
        skip_closing_tag(cur);
    }

    Some(RichTextSegment::ContentItem {
        full: Span {
            start,
            end: cur.pos(),
        },
        codename,
    })
}

/// Reads attributes up to and including the end of the start tag. A tag that
/// is never closed ends before the next `<`, or at end of input.
fn parse_attributes(cur: &mut Cursor<'_>) -> (Vec<Attribute>, bool) {
    let mut attributes = vec![];

    loop {
        cur.skip_whitespace();
        match cur.peek() {
            None => return (attributes, false),
            Some(InlineObject::TAG_END) => {
                cur.bump();
                return (attributes, false);
            }
            Some(InlineObject::TAG_START) => return (attributes, false),
            Some(b'/') if cur.starts_with_ignore_case(InlineObject::SELF_CLOSE) => {
                cur.bump_n(InlineObject::SELF_CLOSE.len());
                return (attributes, true);
            }
            Some(_) => {}
        }

        let name_start = cur.eat_while(|b| {
            !b.is_ascii_whitespace()
                && b != b'='
                && b != b'/'
                && b != InlineObject::TAG_END
                && b != InlineObject::TAG_START
        });
        let name = Span {
            start: name_start,
            end: cur.pos(),
        };
        if name.is_empty() {
            // Stray `=` or `/`
            cur.bump();
            continue;
        }

        cur.skip_whitespace();
        let value = if cur.peek() == Some(b'=') {
            cur.bump();
            cur.skip_whitespace();
            parse_attribute_value(cur)
        } else {
            Span {
                start: cur.pos(),
                end: cur.pos(),
            }
        };
        attributes.push(Attribute { name, value });
    }
}

/// Quoted values run to the matching quote. An unterminated quoted value
/// stops before the next `>` or `<`, leaving the rest of the value to the
/// caller. Unquoted values stop at whitespace, `>` or `<`.
fn parse_attribute_value(cur: &mut Cursor<'_>) -> Span {
    let is_tag_delimiter = |b: u8| b == InlineObject::TAG_END || b == InlineObject::TAG_START;

    match cur.peek() {
        Some(quote @ (b'"' | b'\'')) => {
            cur.bump();
            let start = cur.eat_while(|b| b != quote && !is_tag_delimiter(b));
            let end = cur.pos();
            if cur.peek() == Some(quote) {
                cur.bump();
            }
            Span { start, end }
        }
        _ => {
            let start = cur.eat_while(|b| !b.is_ascii_whitespace() && !is_tag_delimiter(b));
            Span {
                start,
                end: cur.pos(),
            }
        }
    }
}

fn content_item_codename(s: &str, attributes: &[Attribute]) -> Option<String> {
    let attr = |wanted: &str| {
        attributes
            .iter()
            .find(|a| a.name.slice(s).eq_ignore_ascii_case(wanted))
            .map(|a| html_escape::decode_html_entities(a.value.slice(s)))
    };

    let object_type = attr(InlineObject::TYPE_ATTR)?;
    if !object_type.eq_ignore_ascii_case(InlineObject::TYPE_VALUE) {
        return None;
    }
    let data_type = attr(InlineObject::DATA_TYPE_ATTR)?;
    if !InlineObject::DATA_TYPES
        .iter()
        .any(|t| data_type.eq_ignore_ascii_case(t))
    {
        return None;
    }

    let codename = attr(InlineObject::CODENAME_ATTR)?;
    let codename = codename.trim();
    (!codename.is_empty()).then(|| codename.to_string())
}

/// Consumes `</object>` when it directly follows, tolerating a missing `>`.
///
/// Whitespace before the closing tag is the object's (empty) content and goes
/// with it. When no closing tag follows, the whitespace stays literal text.
fn skip_closing_tag(cur: &mut Cursor<'_>) {
    let saved = cur.clone();
    cur.skip_whitespace();
    if !cur.starts_with_ignore_case(InlineObject::CLOSE) {
        *cur = saved;
        return;
    }
    cur.bump_n(InlineObject::CLOSE.len());
    let before_end = cur.clone();
    cur.skip_whitespace();
    if cur.peek() == Some(InlineObject::TAG_END) {
        cur.bump();
    } else {
        *cur = before_end;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn object(codename: &str) -> String {
        format!(
            r#"<object type="application/kenticocloud" data-type="item" data-codename="{codename}"></object>"#
        )
    }

    /// Renders segments as `text` runs and `[codename]` markers.
    fn describe(s: &str) -> String {
        parse_rich_text(s)
            .iter()
            .map(|segment| match segment {
                RichTextSegment::Text(span) => span.slice(s).to_string(),
                RichTextSegment::ContentItem { codename, .. } => format!("[{codename}]"),
            })
            .collect()
    }

    #[test]
    fn parse_plain_markup() {
        let segments = parse_rich_text("<p>hello</p>");
        assert_eq!(
            segments,
            vec![RichTextSegment::Text(Span { start: 0, end: 12 })]
        );
    }

    #[test]
    fn parse_empty_value() {
        assert!(parse_rich_text("").is_empty());
    }

    #[test]
    fn parse_single_object() {
        let s = object("rt2");
        let segments = parse_rich_text(&s);
        assert_eq!(
            segments,
            vec![RichTextSegment::ContentItem {
                full: Span {
                    start: 0,
                    end: s.len()
                },
                codename: "rt2".into()
            }]
        );
    }

    #[test]
    fn objects_are_interleaved_with_text() {
        let s = format!("<p>a</p>{}<p>b</p>{}", object("one"), object("two"));
        assert_eq!(describe(&s), "<p>a</p>[one]<p>b</p>[two]");
    }

    #[test]
    fn closing_tag_without_final_bracket_is_tolerated() {
        let s = r#"<span>FirstRT</span><object type="application/kenticocloud" data-type="item" data-codename="rt2"></object"#;
        let segments = parse_rich_text(s);

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].span().slice(s), "<span>FirstRT</span>");
        match &segments[1] {
            RichTextSegment::ContentItem { full, codename } => {
                assert_eq!(codename, "rt2");
                assert_eq!(full.end, s.len());
            }
            other => panic!("expected ContentItem, got {other:?}"),
        }
    }

    #[test]
    fn missing_closing_tag_keeps_following_text() {
        let s = r#"<object type="application/kenticocloud" data-type="item" data-codename="x"><p>after</p>"#;
        assert_eq!(describe(s), "[x]<p>after</p>");
    }

    #[test]
    fn unterminated_start_tag_runs_to_end() {
        let s = r#"<p>before</p><object type="application/kenticocloud" data-type="item" data-codename="x""#;
        assert_eq!(describe(s), "<p>before</p>[x]");
    }

    #[test]
    fn unterminated_codename_quote_still_yields_codename() {
        let s = r#"<object type="application/kenticocloud" data-type="item" data-codename="x"#;
        assert_eq!(inline_codenames(s), vec!["x".to_string()]);
    }

    #[test]
    fn unterminated_codename_quote_keeps_following_text() {
        let s = r#"<p>a</p><object type="application/kenticocloud" data-type="item" data-codename="x></object><p>after</p>"#;

        assert_eq!(inline_codenames(s), vec!["x".to_string()]);
        assert_eq!(describe(s), "<p>a</p>[x]<p>after</p>");
    }

    #[test]
    fn start_tag_cut_short_by_next_tag() {
        let s = r#"<object type="application/kenticocloud" data-type="item" data-codename="x"<p>after</p>"#;
        assert_eq!(describe(s), "[x]<p>after</p>");
    }

    #[rstest]
    #[case::whitespace_content(
        "<object type=\"application/kenticocloud\" data-type=\"item\" data-codename=\"x\">\n  </object><p>b</p>",
        "[x]<p>b</p>"
    )]
    #[case::whitespace_without_closing_tag(
        "<object type=\"application/kenticocloud\" data-type=\"item\" data-codename=\"x\"> <p>b</p></object>",
        "[x] <p>b</p></object>"
    )]
    fn whitespace_before_closing_tag(#[case] s: &str, #[case] expected: &str) {
        assert_eq!(describe(s), expected);
    }

    #[test]
    fn malformed_object_does_not_hide_later_objects() {
        let s = format!(
            r#"<object type="application/kenticocloud" data-type="item" data-codename="a"></object{}"#,
            object("b")
        );
        assert_eq!(describe(&s), "[a][b]");
    }

    #[rstest]
    #[case::foreign_object(r#"<object type="video/mp4" data="x.mp4"></object>"#)]
    #[case::link_data_type(
        r#"<object type="application/kenticocloud" data-type="link" data-codename="x"></object>"#
    )]
    #[case::empty_codename(
        r#"<object type="application/kenticocloud" data-type="item" data-codename=""></object>"#
    )]
    #[case::no_codename(r#"<object type="application/kenticocloud" data-type="item"></object>"#)]
    #[case::longer_tag_name(
        r#"<objects type="application/kenticocloud" data-type="item" data-codename="x">"#
    )]
    fn non_content_item_objects_are_text(#[case] s: &str) {
        assert_eq!(
            parse_rich_text(s),
            vec![RichTextSegment::Text(Span {
                start: 0,
                end: s.len()
            })]
        );
    }

    #[rstest]
    #[case::single_quotes(
        "<object type='application/kenticocloud' data-type='item' data-codename='x'></object>"
    )]
    #[case::upper_case(
        r#"<OBJECT TYPE="application/kenticocloud" DATA-TYPE="item" DATA-CODENAME="x"></OBJECT>"#
    )]
    #[case::component(
        r#"<object type="application/kenticocloud" data-type="component" data-codename="x"></object>"#
    )]
    #[case::self_closing(
        r#"<object type="application/kenticocloud" data-type="item" data-codename="x" />"#
    )]
    #[case::attribute_order(
        r#"<object data-codename="x" data-type="item" type="application/kenticocloud"></object>"#
    )]
    #[case::spaced_closing(
        r#"<object type="application/kenticocloud" data-type="item" data-codename="x"> </object >"#
    )]
    fn object_variants_are_recognised(#[case] s: &str) {
        assert_eq!(describe(s), "[x]");
    }

    #[test]
    fn codename_entities_are_decoded() {
        let s = r#"<object type="application/kenticocloud" data-type="item" data-codename="a&amp;b"></object>"#;
        assert_eq!(inline_codenames(s), vec!["a&b".to_string()]);
    }

    #[test]
    fn multibyte_text_around_objects() {
        let s = format!("<p>Kávé ☕</p>{}<p>ő</p>", object("espresso"));
        assert_eq!(describe(&s), "<p>Kávé ☕</p>[espresso]<p>ő</p>");
    }
}
