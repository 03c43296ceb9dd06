//!
//! Normalizes a mask format before compilation.
//!
//! The format is split into free/`{}`/`[]` blocks. `[]` blocks that
//! mix character classes are divided into adjacent single-class
//! blocks, and within each block mandatory slot chars are reordered
//! before optional ones, so `a ([0909]) b` compiles as `a ([0099]) b`
//! and `[0000Aa]` as `[0000][Aa]`.
//!

use crate::FormatError;
use std::mem;

/// Sanitize a format string.
///
/// Fails on a `[` or `{` opening while the previous group of the
/// same kind is still open. An unclosed trailing group does not
/// error; the block splitter drops it.
pub(crate) fn sanitize(format: &str) -> Result<String, FormatError> {
    check_open_brackets(format)?;
    let blocks = divide_mixed_blocks(split_blocks(format));
    Ok(sort_blocks(blocks).concat())
}

/// Split into free-literal runs, `{}` blocks and `[]` blocks.
/// Escaped brackets don't delimit.
fn split_blocks(format: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut block = String::new();
    let mut escape = false;

    for c in format.chars() {
        if c == '\\' && !escape {
            escape = true;
            block.push(c);
            continue;
        }
        if (c == '[' || c == '{') && !escape && !block.is_empty() {
            blocks.push(mem::take(&mut block));
        }
        block.push(c);
        if (c == ']' || c == '}') && !escape {
            blocks.push(mem::take(&mut block));
        }
        escape = false;
    }
    if !block.is_empty() {
        blocks.push(block);
    }
    blocks
}

/// Split `[]` blocks mixing digit, letter and alphanumeric slots
/// into one block per class.
fn divide_mixed_blocks(blocks: Vec<String>) -> Vec<String> {
    let mut result = Vec::new();

    for block in blocks {
        if !block.starts_with('[') {
            result.push(block);
            continue;
        }
        let mut buf = String::new();
        for c in block.chars() {
            if c == '[' {
                buf.push(c);
                continue;
            }
            if c == ']' && !buf.ends_with('\\') {
                buf.push(c);
                result.push(mem::take(&mut buf));
                break;
            }
            if conflicts(&buf, c) {
                buf.push(']');
                result.push(mem::take(&mut buf));
                buf.push('[');
            }
            buf.push(c);
        }
    }

    result
}

/// Does the slot char belong to a different class than the chars
/// already in the block buffer.
fn conflicts(buf: &str, c: char) -> bool {
    match c {
        '0' | '9' => buf.contains(&['A', 'a', '-', '_'][..]),
        'A' | 'a' => buf.contains(&['0', '9', '-', '_'][..]),
        '-' | '_' => buf.contains(&['0', '9', 'A', 'a'][..]),
        _ => false,
    }
}

/// Reorder each `[]` block so mandatory slot chars come first.
fn sort_blocks(blocks: Vec<String>) -> Vec<String> {
    blocks
        .into_iter()
        .map(|block| {
            if !block.starts_with('[') {
                block
            } else if block.contains(&['0', '9'][..]) || block.contains(&['a', 'A'][..]) {
                sort_block(&block, false)
            } else {
                // _ sorts after -, map onto the letter pair first.
                sort_block(&block, true)
            }
        })
        .collect()
}

fn sort_block(block: &str, alnum: bool) -> String {
    let mut chars: Vec<char> = block
        .chars()
        .filter(|c| *c != '[' && *c != ']')
        .map(|c| match c {
            '_' if alnum => 'A',
            '-' if alnum => 'a',
            c => c,
        })
        .collect();
    chars.sort_unstable();

    let mut out = String::with_capacity(block.len());
    out.push('[');
    for c in chars {
        out.push(match c {
            'A' if alnum => '_',
            'a' if alnum => '-',
            c => c,
        });
    }
    out.push(']');
    out
}

/// Reject a second unescaped `[` or `{` before the previous one
/// closed.
fn check_open_brackets(format: &str) -> Result<(), FormatError> {
    let mut escape = false;
    let mut square = false;
    let mut curly = false;

    for c in format.chars() {
        match c {
            '\\' => {
                escape = !escape;
                continue;
            }
            '[' => {
                if square {
                    return Err(FormatError::NestedBrackets);
                }
                square = !escape;
            }
            ']' if !escape => square = false,
            '{' => {
                if curly {
                    return Err(FormatError::NestedBrackets);
                }
                curly = !escape;
            }
            '}' if !escape => curly = false,
            _ => {}
        }
        escape = false;
    }
    Ok(())
}
