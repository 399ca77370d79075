use content_outline::{extract, extract_bytes, extract_with_options, Error, Options};
use std::time::{Duration, Instant};

#[test]
fn extract_does_not_panic_on_malformed_html_unclosed_tags() {
    let outline = extract("<p>text<div>more<h2>Heading").unwrap();
    assert!(outline.content_root.is_none());
}

#[test]
fn extract_does_not_panic_on_malformed_html_invalid_nesting() {
    let html = "<h2><p></h2></p><article><h3><h4>x</h3></h4></article>";
    assert!(extract(html).is_ok());
}

#[test]
fn extract_recovers_unclosed_article() {
    let prose = "An article that never closes its tags. ".repeat(10);
    let html = format!("<html><body><article><h1>Open</h1><p>{prose}");
    let outline = extract(&html).unwrap();
    assert_eq!(outline.content_root.map(|r| r.tag).as_deref(), Some("article"));
    assert_eq!(outline.headings.len(), 1);
}

#[test]
fn extract_does_not_panic_on_broken_attributes() {
    assert!(extract("<div class=\"test id=broken><h2 id=>x</h2>").is_ok());
}

#[test]
fn extract_returns_empty_outline_for_empty_string() {
    let outline = extract("").unwrap();
    assert!(outline.content_root.is_none());
    assert!(outline.title.is_none());
    assert!(outline.is_empty());
}

#[test]
fn extract_handles_text_only_input() {
    let outline = extract(&"Plain text with no markup at all. ".repeat(50)).unwrap();
    assert!(outline.headings.is_empty());
}

#[test]
fn scripts_and_styles_do_not_count_as_content() {
    let code = "var x = 1; ".repeat(200);
    let html = format!("<div id='app'><script>{code}</script><style>{code}</style><h2>Loading</h2></div>");
    let outline = extract(&html).unwrap();
    assert!(outline.content_root.is_none());
}

#[test]
fn invalid_options_are_an_error() {
    let options = Options {
        max_link_density: f64::NAN,
        ..Options::default()
    };
    let result = extract_with_options("<article><h2>x</h2></article>", &options);
    assert!(matches!(result, Err(Error::InvalidOptions(_))));
}

#[test]
fn extract_bytes_decodes_declared_charset() {
    let mut html = b"<html><head><meta charset=\"windows-1252\"></head><body><article><h2>R\xE9sum\xE9</h2><p>".to_vec();
    html.extend_from_slice(&b"Text in a legacy single byte encoding. ".repeat(10));
    html.extend_from_slice(b"</p></article></body></html>");

    let outline = extract_bytes(&html).unwrap();
    assert_eq!(outline.headings[0].text, "Résumé");
    assert_eq!(outline.headings[0].anchor, "résumé");
}

#[test]
fn extract_bytes_survives_invalid_utf8() {
    let outline = extract_bytes(b"<article><h2>Bad \xFF\xFE bytes</h2></article>").unwrap();
    assert!(outline.headings.is_empty());
}

#[test]
fn deeply_nested_document_completes() {
    let depth = 500;
    let prose = "Deep text. ".repeat(40);
    let html = format!("{}<h2>Bottom</h2><p>{prose}</p>{}", "<div>".repeat(depth), "</div>".repeat(depth));

    let start = Instant::now();
    let outline = extract(&html).unwrap();
    assert!(start.elapsed() < Duration::from_secs(30));
    assert_eq!(outline.title.as_deref(), Some("Bottom"));
}

#[test]
fn many_headings_complete_quickly() {
    let sections: String = (0..300)
        .map(|i| format!("<h{}>Section {i}</h{}><p>Body of section {i} with a few words.</p>", i % 3 + 2, i % 3 + 2))
        .collect();
    let html = format!("<article>{sections}</article>");

    let start = Instant::now();
    let outline = extract(&html).unwrap();
    assert!(start.elapsed() < Duration::from_secs(30));
    assert_eq!(outline.headings.len(), 300);
    assert_eq!(outline.headings.iter().map(|h| h.indent_level).max(), Some(2));
}
