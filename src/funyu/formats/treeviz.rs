//! Treeviz formatter for documents
//!
//! Treeviz is a visual representation of the tree, one line per node, which makes it quick to
//! scan. Nesting is drawn with box connectors and every node gets an icon and a label
//! (truncated to 30 characters).
//!
//! Example:
//!
//!     ⧉ Document (1 metadata entries, 2 blocks)
//!     ├─ § first section
//!     │ └─ ¶ 1 line(s): this is [[keyword]] te...
//!     │   └─ ↵ this is [[keyword]] text.
//!     └─ ✎ p.s. 2015-04-01
//!
//! Icons
//!     Document: ⧉
//!     Section: §
//!     PostScript: ✎
//!     Paragraph: ¶
//!     TextLine: ↵
//!     CodeBlock: 𝒱
//!     EmbeddedHtml: ‹›

use super::registry::{FormatError, Formatter};
use crate::funyu::ast::traits::truncate_label;
use crate::funyu::ast::{AstNode, Block, Document};

/// Get the icon for a node type
fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Document" => "⧉",
        "Section" => "§",
        "PostScript" => "✎",
        "Paragraph" => "¶",
        "TextLine" => "↵",
        "CodeBlock" => "𝒱",
        "EmbeddedHtml" => "‹›",
        _ => "○",
    }
}

/// One row of the tree: a node's icon, label and children.
struct TreeNode {
    node_type: &'static str,
    label: String,
    children: Vec<TreeNode>,
}

impl TreeNode {
    fn from_block(block: &Block) -> Self {
        let children = match block {
            Block::Paragraph(paragraph) => paragraph
                .lines
                .iter()
                .map(|line| TreeNode {
                    node_type: "TextLine",
                    label: line.as_string().to_string(),
                    children: Vec::new(),
                })
                .collect(),
            _ => block.children().iter().map(TreeNode::from_block).collect(),
        };
        TreeNode {
            node_type: block.node_type(),
            label: block.display_label(),
            children,
        }
    }
}

fn format_node(node: &TreeNode, prefix: &str, is_last: bool, output: &mut String) {
    let connector = if is_last { "└─" } else { "├─" };
    output.push_str(&format!(
        "{}{} {} {}\n",
        prefix,
        connector,
        get_icon(node.node_type),
        truncate_label(&node.label, 30)
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    format_children(&node.children, &child_prefix, output);
}

fn format_children(children: &[TreeNode], prefix: &str, output: &mut String) {
    for (i, child) in children.iter().enumerate() {
        format_node(child, prefix, i == children.len() - 1, output);
    }
}

pub fn to_treeviz_str(doc: &Document) -> String {
    let mut output = format!("{} {}\n", get_icon("Document"), doc.display_label());
    let children: Vec<TreeNode> = doc.blocks().iter().map(TreeNode::from_block).collect();
    format_children(&children, "", &mut output);
    output
}

/// Formatter implementation for treeviz format
pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_treeviz_str(doc))
    }

    fn description(&self) -> &str {
        "Visual tree representation with indentation and Unicode icons"
    }
}
