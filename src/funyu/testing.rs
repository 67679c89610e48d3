//! Testing utilities for document assertions
//!
//! # Parser Testing Guidelines
//!
//! Document tests should check the shape and the content of the tree, not node counts alone.
//! Use [assert_ast](fn@assert_ast) and its fluent API instead of walking the tree by hand:
//!
//! ```rust-example
//! use funyu::funyu::testing::assert_ast;
//!
//! let doc = funyu::parse("-- Introduction\n\tWelcome to [[funyu]].\n")?;
//!
//! assert_ast(&doc)
//!     .item_count(1)
//!     .item(0, |item| {
//!         item.assert_section()
//!             .title("Introduction")
//!             .child_count(1)
//!             .child(0, |child| {
//!                 child.assert_paragraph()
//!                     .line_count(1)
//!                     .line_inlines(0, |inlines| {
//!                         inlines.starts_with(&[
//!                             InlineExpectation::text("Welcome to "),
//!                             InlineExpectation::keyword_text("funyu"),
//!                         ]);
//!                     });
//!             });
//!     });
//! ```
//!
//! Failure messages carry the path of the node (`items[0]::children[0]`), so a failing
//! assertion points at the node that differs.
//!
//! Rendered output (html, funyu markup) is tested with `insta` inline snapshots, and the
//! round-trip properties with `proptest`. See the `tests/` directory.

mod ast_assertions;
pub mod matchers;

pub use ast_assertions::{
    assert_ast, BlockAssertion, CodeBlockAssertion, DocumentAssertion, EmbeddedHtmlAssertion,
    InlineAssertion, InlineExpectation, ParagraphAssertion, PostScriptAssertion,
    SectionAssertion,
};
pub use matchers::TextMatch;
