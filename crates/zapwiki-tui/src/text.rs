//! Plain-text layout of section payloads

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use zapwiki_content::ContentPayload;

/// Nesting below this depth is not displayed
const MAX_BLOCK_DEPTH: usize = 64;

const BULLET: &str = "• ";

/// Flatten a payload into display blocks, one per paragraph or list item
///
/// List items carry their marker (`• ` or `1. `) so callers can indent
/// continuation lines under it.
pub fn payload_blocks(payload: &ContentPayload) -> Vec<String> {
    let mut blocks = Vec::new();
    collect_blocks(payload, &mut blocks, 0);
    blocks
}

fn collect_blocks(payload: &ContentPayload, blocks: &mut Vec<String>, depth: usize) {
    if depth > MAX_BLOCK_DEPTH {
        return;
    }

    match payload {
        ContentPayload::Node(node) => match node.tag.as_str() {
            "ul" => {
                for child in &node.children {
                    push_block(blocks, format!("{}{}", BULLET, inline_text(child)));
                }
            }
            "ol" => {
                for (i, child) in node.children.iter().enumerate() {
                    push_block(blocks, format!("{}. {}", i + 1, inline_text(child)));
                }
            }
            "div" | "section" | "article" => {
                for child in &node.children {
                    collect_blocks(child, blocks, depth + 1);
                }
            }
            _ => push_block(blocks, inline_text(payload)),
        },
        _ => push_block(blocks, inline_text(payload)),
    }
}

fn push_block(blocks: &mut Vec<String>, block: String) {
    let block = block.trim();
    if !block.is_empty() {
        blocks.push(block.to_string());
    }
}

/// Concatenate all text of a payload, ignoring structure
pub fn inline_text(payload: &ContentPayload) -> String {
    let mut out = String::new();
    push_inline(payload, &mut out, 0);
    out
}

fn push_inline(payload: &ContentPayload, out: &mut String, depth: usize) {
    if depth > MAX_BLOCK_DEPTH {
        return;
    }

    match payload {
        ContentPayload::Text(text) => out.push_str(text),
        ContentPayload::Node(node) => {
            for child in &node.children {
                push_inline(child, out, depth + 1);
            }
        }
        ContentPayload::Opaque(value) => push_value(value, out, depth),
    }
}

fn push_value(value: &serde_json::Value, out: &mut String, depth: usize) {
    if depth > MAX_BLOCK_DEPTH {
        return;
    }

    match value {
        serde_json::Value::Null => {}
        serde_json::Value::String(s) => out.push_str(s),
        serde_json::Value::Bool(b) => out.push_str(&b.to_string()),
        serde_json::Value::Number(n) => out.push_str(&n.to_string()),
        serde_json::Value::Array(items) => {
            for item in items {
                push_value(item, out, depth + 1);
            }
        }
        serde_json::Value::Object(map) => {
            for item in map.values() {
                push_value(item, out, depth + 1);
            }
        }
    }
}

/// Width in columns of a block's list marker, or 0 for a paragraph
pub fn marker_width(block: &str) -> usize {
    if block.starts_with(BULLET) {
        return BULLET.width();
    }
    let digits = block.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 && block[digits..].starts_with(". ") {
        digits + 2
    } else {
        0
    }
}

/// Greedy word wrap measured in terminal columns
///
/// Continuation lines are prefixed with `indent` spaces. Words wider than a
/// line are split between characters. Always returns at least one line.
pub fn wrap(text: &str, width: usize, indent: usize) -> Vec<String> {
    let width = width.max(1);
    let indent = if indent >= width { 0 } else { indent };

    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        let gap = usize::from(line_width > 0 && !line.trim().is_empty());

        if line_width + gap + word_width <= width {
            if gap == 1 {
                line.push(' ');
            }
            line.push_str(word);
            line_width += gap + word_width;
            continue;
        }

        if !line.trim().is_empty() {
            lines.push(std::mem::take(&mut line));
            line = " ".repeat(indent);
            line_width = indent;
        }

        if line_width + word_width <= width {
            line.push_str(word);
            line_width += word_width;
            continue;
        }

        for c in word.chars() {
            let char_width = c.width().unwrap_or(0);
            if line_width + char_width > width && !line.trim().is_empty() {
                lines.push(std::mem::take(&mut line));
                line = " ".repeat(indent);
                line_width = indent;
            }
            line.push(c);
            line_width += char_width;
        }
    }

    if !line.trim().is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}
