//! Tests for section elements
//!
//! A section is a `-- title` line followed by its content one tab deeper. It closes at the first
//! non-blank line that is not indented below it.

use funyu::funyu::testing::{assert_ast, InlineExpectation};
use funyu::ParseOptions;

#[test]
fn test_section_with_paragraph() {
    let doc = funyu::parse("-- first section\n\thello\n").unwrap();

    assert_ast(&doc).item_count(1).item(0, |item| {
        item.assert_section()
            .title("first section")
            .child_count(1)
            .child(0, |child| {
                child.assert_paragraph().text("hello");
            });
    });
}

#[test]
fn test_section_closes_on_dedent() {
    let doc = funyu::parse("-- Title\n\tinner\n\n\tsecond\n\nafter\n").unwrap();

    assert_ast(&doc)
        .item_count(2)
        .item(0, |item| {
            item.assert_section()
                .title("Title")
                .child_count(2)
                .child(0, |child| {
                    child.assert_paragraph().text("inner");
                })
                .child(1, |child| {
                    child.assert_paragraph().text("second");
                });
        })
        .item(1, |item| {
            item.assert_paragraph().text("after");
        });
}

#[test]
fn test_nested_sections() {
    let source = "-- outer\n\tintro\n\t-- inner\n\t\tdeep\n\tback in outer\n-- sibling\n";
    let doc = funyu::parse(source).unwrap();

    assert_ast(&doc)
        .item_count(2)
        .item(0, |item| {
            item.assert_section()
                .title("outer")
                .child_count(3)
                .child(0, |child| {
                    child.assert_paragraph().text("intro");
                })
                .child(1, |child| {
                    child
                        .assert_section()
                        .title("inner")
                        .child_count(1)
                        .child(0, |deep| {
                            deep.assert_paragraph().text("deep");
                        });
                })
                .child(2, |child| {
                    child.assert_paragraph().text("back in outer");
                });
        })
        .item(1, |item| {
            item.assert_section().title("sibling").child_count(0);
        });
}

#[test]
fn test_dedent_closes_several_levels() {
    let doc = funyu::parse("-- a\n\t-- b\n\t\t-- c\n\t\t\tleaf\nroot\n").unwrap();

    assert_ast(&doc)
        .item_count(2)
        .item(0, |item| {
            item.assert_section().title("a").child(0, |b| {
                b.assert_section().title("b").child(0, |c| {
                    c.assert_section().title("c").child(0, |leaf| {
                        leaf.assert_paragraph().text("leaf");
                    });
                });
            });
        })
        .item(1, |item| {
            item.assert_paragraph().text("root");
        });
}

#[test]
fn test_section_title_inlines() {
    let doc = funyu::parse("-- about [[funyu]] and <<more>>\n").unwrap();

    assert_ast(&doc).item(0, |item| {
        item.assert_section()
            .title("about [[funyu]] and <<more>>")
            .title_inlines(|inlines| {
                inlines.exactly(&[
                    InlineExpectation::text("about "),
                    InlineExpectation::keyword_text("funyu"),
                    InlineExpectation::text(" and "),
                    InlineExpectation::emphasis_text("more"),
                ]);
            });
    });
}

#[test]
fn test_marker_requires_space() {
    let doc = funyu::parse("--not a section\n").unwrap();

    assert_ast(&doc).item(0, |item| {
        item.assert_paragraph().text("--not a section");
    });
}

#[test]
fn test_content_two_levels_deeper_fails() {
    let err = funyu::parse("-- s\n\t\ttoo deep\n").unwrap_err();

    assert_eq!(
        err,
        funyu::ParseError::UnexpectedIndent {
            line: 2,
            expected: 1,
            found: 2
        }
    );
}

#[test]
fn test_nesting_limit() {
    let source = "-- 1\n\t-- 2\n\t\t-- 3\n\t\t\ttext\n";
    let options = ParseOptions { max_depth: 2 };

    let err = funyu::parse_with(source, &options).unwrap_err();
    assert_eq!(err, funyu::ParseError::NestingTooDeep { line: 4, limit: 2 });

    let options = ParseOptions { max_depth: 3 };
    assert!(funyu::parse_with(source, &options).is_ok());
}
