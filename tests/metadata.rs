//! Tests for metadata extraction
//!
//! The first paragraph of a document is its metadata when every line reads `key: value`.

use funyu::funyu::formats::{to_metadata_json, to_metadata_lines};
use funyu::funyu::testing::assert_ast;

#[test]
fn test_metadata_block() {
    let doc = funyu::parse("title: test\nauthor: MacRat\n\nthis is test of [[funyu]].\n").unwrap();

    assert_ast(&doc)
        .metadata_count(2)
        .metadata_keys(&["title", "author"])
        .metadata_entry("title", "test")
        .metadata_entry("author", "MacRat")
        .item_count(1)
        .item(0, |item| {
            item.assert_paragraph().text("this is test of [[funyu]].");
        });
}

#[test]
fn test_metadata_is_not_rendered() {
    let doc = funyu::parse("title: test\n\nthis is test of [[funyu]].\n").unwrap();

    assert_eq!(funyu::metadata(&doc).get("title"), Some("test"));
    assert_eq!(
        funyu::render_html(&doc),
        "<p>\nthis is test of <strong>funyu</strong>.<br>\n</p>\n"
    );
}

#[test]
fn test_one_plain_line_cancels_metadata() {
    let doc = funyu::parse("title: test\nnot metadata\n\nbody\n").unwrap();

    assert_ast(&doc)
        .no_metadata()
        .item_count(2)
        .item(0, |item| {
            item.assert_paragraph()
                .line(0, "title: test")
                .line(1, "not metadata");
        });
    assert!(funyu::render_html(&doc).starts_with("<p>\ntitle: test<br>\nnot metadata<br>\n</p>\n"));
}

#[test]
fn test_empty_key_is_not_metadata() {
    let doc = funyu::parse(": value\n").unwrap();

    assert_ast(&doc).no_metadata().item(0, |item| {
        item.assert_paragraph().text(": value");
    });
}

#[test]
fn test_only_first_block_is_metadata() {
    let doc = funyu::parse("intro\n\nkey: value\n").unwrap();

    assert_ast(&doc).no_metadata().item_count(2).item(1, |item| {
        item.assert_paragraph().text("key: value");
    });

    let doc = funyu::parse("-- section\n\tkey: value\n").unwrap();
    assert_ast(&doc).no_metadata().item_count(1);
}

#[test]
fn test_value_keeps_later_colons_and_is_trimmed() {
    let doc = funyu::parse("url:   http://blanktar.jp/blog/  \ntime: 12:30\n").unwrap();

    assert_ast(&doc)
        .item_count(0)
        .metadata_entry("url", "http://blanktar.jp/blog/")
        .metadata_entry("time", "12:30");
}

#[test]
fn test_duplicate_key_last_wins() {
    let doc = funyu::parse("a: 1\nb: 2\na: 3\n").unwrap();

    assert_ast(&doc)
        .metadata_keys(&["a", "b"])
        .metadata_entry("a", "3")
        .metadata_entry("b", "2");
}

#[test]
fn test_metadata_outputs() {
    let doc = funyu::parse("title: test\nauthor: MacRat\n").unwrap();

    assert_eq!(
        to_metadata_lines(doc.metadata()),
        "title: test\nauthor: MacRat\n"
    );
    insta::assert_snapshot!(to_metadata_json(doc.metadata()).unwrap(), @r#"
    {
      "title": "test",
      "author": "MacRat"
    }
    "#);
}
