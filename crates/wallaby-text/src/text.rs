//! Normalized visible-text collection.
//!
//! [CSS Text § 3 White Space Processing](https://www.w3.org/TR/css-text-3/#white-space-processing)
//!
//! The collector walks an element's subtree in document order, assembling
//! a list of lines: BR elements force a line break, block-level elements
//! pad a break before and after their content when the current line is
//! non-empty, and text from perceivable elements is appended with
//! whitespace runs collapsed to single spaces. NO-BREAK SPACE (U+00A0)
//! collapses like ordinary whitespace; the output never contains it.

use wallaby_dom::{DomTree, ElementKind, NodeId};
use wallaby_style::is_block_level;

use crate::error::TextError;
use crate::visibility::is_shown;

/// Extract the text a sighted user would perceive inside `root`.
///
/// Lines are joined with `\n`, each line is trimmed, and the result as a
/// whole is trimmed; a fully hidden subtree yields the empty string.
/// Purely a read in effect: the geometry probe's transient style writes
/// are restored before this function returns, leaving the tree
/// bit-identical to its input state.
///
/// # Errors
///
/// Returns [`TextError::InvalidArgument`] when `root` is not an element.
pub fn visible_text(tree: &mut DomTree, root: NodeId) -> Result<String, TextError> {
    if tree.as_element(root).is_none() {
        return Err(TextError::InvalidArgument(
            "visible text is only defined for elements".to_string(),
        ));
    }
    let mut lines = LineBuffer::default();
    collect_lines(tree, root, &mut lines)?;
    Ok(lines.finish())
}

/// Append the lines contributed by `id` and its subtree.
fn collect_lines(tree: &mut DomTree, id: NodeId, lines: &mut LineBuffer) -> Result<(), TextError> {
    if tree.as_element(id).is_some_and(|data| data.is_kind(ElementKind::Br)) {
        lines.break_line();
        return Ok(());
    }

    let block = is_block_level(tree, id);
    if block {
        lines.break_if_content();
    }

    // Perceivability of this element gates all its direct text children
    // equally; computed once, on first need.
    let mut shown: Option<bool> = None;
    for child in tree.children(id).to_vec() {
        if tree.as_element(child).is_some() {
            collect_lines(tree, child, lines)?;
        } else if let Some(raw) = tree.as_text(child).map(str::to_string) {
            let visible = match shown {
                Some(cached) => cached,
                None => {
                    let computed = is_shown(tree, id, true)?;
                    shown = Some(computed);
                    computed
                }
            };
            if visible {
                lines.append_collapsed(&raw);
            }
        }
    }

    if block {
        lines.break_if_content();
    }
    Ok(())
}

/// Characters that collapse during white-space processing.
///
/// [CSS Text § 4.1.1 Phase I](https://www.w3.org/TR/css-text-3/#white-space-phase-1)
///
/// Unicode whitespace plus NO-BREAK SPACE, which layout preserves but
/// extracted text normalizes away.
pub(crate) fn is_collapsible(c: char) -> bool {
    c.is_whitespace() || c == '\u{a0}'
}

/// Collapse every run of collapsible characters to a single ASCII space.
fn collapse_whitespace(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_run = false;
    for c in raw.chars() {
        if is_collapsible(c) {
            if !in_run {
                out.push(' ');
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

/// The lines under assembly: finished lines plus the one being appended to.
#[derive(Default)]
struct LineBuffer {
    done: Vec<String>,
    current: String,
}

impl LineBuffer {
    /// Finish the current line unconditionally (BR semantics).
    fn break_line(&mut self) {
        self.done.push(std::mem::take(&mut self.current));
    }

    /// Finish the current line only if it holds content (block padding).
    fn break_if_content(&mut self) {
        if !self.current.is_empty() {
            self.break_line();
        }
    }

    /// Append a text run, collapsed, suppressing a space that would
    /// duplicate one already ending the current line.
    fn append_collapsed(&mut self, raw: &str) {
        let collapsed = collapse_whitespace(raw);
        let run = if self.current.ends_with(' ') {
            collapsed.strip_prefix(' ').unwrap_or(&collapsed)
        } else {
            collapsed.as_str()
        };
        self.current.push_str(run);
    }

    /// Trim each line, join with newlines, and trim the whole.
    fn finish(mut self) -> String {
        self.break_line();
        let joined = self
            .done
            .iter()
            .map(|line| line.trim_matches(is_collapsible))
            .collect::<Vec<_>>()
            .join("\n");
        joined.trim_matches(is_collapsible).to_string()
    }
}
