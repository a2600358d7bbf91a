//! Line-by-line comparison of two document versions.
//!
//! Uses the `similar` crate (Myers diff algorithm) to align the lines of the
//! old and new document and emit one tagged entry per visited line.

use serde::{Deserialize, Serialize};
use similar::{ChangeTag, TextDiff};

use crate::error::{DiffError, DiffResult};

/// A single annotated line of diff output.
///
/// Serializes to the wire shape `{"type": "<tag>", "text": "<line>"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "text", rename_all = "lowercase")]
pub enum DiffLine {
    /// A line present in both versions.
    Unchanged(String),
    /// A line present only in the old version.
    Removed(String),
    /// A line present only in the new version.
    Added(String),
}

impl DiffLine {
    /// The line content, without any diff marker.
    pub fn text(&self) -> &str {
        match self {
            Self::Unchanged(t) | Self::Removed(t) | Self::Added(t) => t,
        }
    }
}

/// The result of comparing two documents line by line.
///
/// Entries appear in alignment order: concatenating the `unchanged` and
/// `removed` entries reproduces the old document's lines, and the `unchanged`
/// and `added` entries reproduce the new document's lines.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDiff {
    /// The annotated lines.
    pub lines: Vec<DiffLine>,
}

impl LineDiff {
    /// Returns `true` if the two documents had identical lines.
    pub fn is_identical(&self) -> bool {
        self.lines
            .iter()
            .all(|l| matches!(l, DiffLine::Unchanged(_)))
    }

    /// Number of lines added in the new version.
    pub fn additions(&self) -> usize {
        self.lines
            .iter()
            .filter(|l| matches!(l, DiffLine::Added(_)))
            .count()
    }

    /// Number of lines removed from the old version.
    pub fn deletions(&self) -> usize {
        self.lines
            .iter()
            .filter(|l| matches!(l, DiffLine::Removed(_)))
            .count()
    }

    /// Number of lines common to both versions.
    pub fn unchanged(&self) -> usize {
        self.lines
            .iter()
            .filter(|l| matches!(l, DiffLine::Unchanged(_)))
            .count()
    }
}

/// Compute a line-by-line diff between two documents.
///
/// Each input is split on `\n` boundaries (a preceding `\r` is stripped, so
/// CRLF documents compare equal to their LF form; an empty input has no
/// lines and a trailing terminator does not produce a phantom last line).
///
/// The Myers alignment visits the lines of both documents in order: shared
/// lines are emitted once as [`DiffLine::Unchanged`], and within a replaced
/// block removals are emitted before additions, each in source order. Output
/// is deterministic for fixed inputs.
///
/// This function is total: it never fails, and two empty documents produce
/// an empty result. Required-document validation lives in
/// [`compare_contracts`].
pub fn diff_lines(old: &str, new: &str) -> LineDiff {
    let old_lines: Vec<&str> = old.lines().collect();
    let new_lines: Vec<&str> = new.lines().collect();

    let diff = TextDiff::from_slices(&old_lines, &new_lines);

    let mut lines = Vec::with_capacity(old_lines.len().max(new_lines.len()));
    for change in diff.iter_all_changes() {
        let text = change.value().to_string();
        lines.push(match change.tag() {
            ChangeTag::Equal => DiffLine::Unchanged(text),
            ChangeTag::Delete => DiffLine::Removed(text),
            ChangeTag::Insert => DiffLine::Added(text),
        });
    }

    LineDiff { lines }
}

/// Validate and compare two contract documents.
///
/// Both documents are required: an empty string is rejected with
/// [`DiffError::EmptyDocument`] before the comparison runs. Whitespace-only
/// documents pass the check and compare normally.
pub fn compare_contracts(old: &str, new: &str) -> DiffResult<LineDiff> {
    if old.is_empty() || new.is_empty() {
        return Err(DiffError::EmptyDocument);
    }
    Ok(diff_lines(old, new))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn old_side(diff: &LineDiff) -> Vec<&str> {
        diff.lines
            .iter()
            .filter(|l| !matches!(l, DiffLine::Added(_)))
            .map(DiffLine::text)
            .collect()
    }

    fn new_side(diff: &LineDiff) -> Vec<&str> {
        diff.lines
            .iter()
            .filter(|l| !matches!(l, DiffLine::Removed(_)))
            .map(DiffLine::text)
            .collect()
    }

    #[test]
    fn identical_documents_all_unchanged() {
        let doc = "clause 1\nclause 2\nclause 3";
        let diff = diff_lines(doc, doc);
        assert!(diff.is_identical());
        assert_eq!(
            diff.lines,
            vec![
                DiffLine::Unchanged("clause 1".into()),
                DiffLine::Unchanged("clause 2".into()),
                DiffLine::Unchanged("clause 3".into()),
            ]
        );
    }

    #[test]
    fn append_only_change() {
        let diff = diff_lines("line1\nline2", "line1\nline2\nline3");
        assert_eq!(
            diff.lines,
            vec![
                DiffLine::Unchanged("line1".into()),
                DiffLine::Unchanged("line2".into()),
                DiffLine::Added("line3".into()),
            ]
        );
    }

    #[test]
    fn full_replacement_single_line() {
        let diff = diff_lines("old", "new");
        assert_eq!(diff.deletions(), 1);
        assert_eq!(diff.additions(), 1);
        assert_eq!(
            diff.lines,
            vec![DiffLine::Removed("old".into()), DiffLine::Added("new".into())]
        );
    }

    #[test]
    fn replaced_block_removals_before_additions() {
        let diff = diff_lines("intro\nold a\nold b\noutro", "intro\nnew a\nnew b\noutro");
        assert_eq!(
            diff.lines,
            vec![
                DiffLine::Unchanged("intro".into()),
                DiffLine::Removed("old a".into()),
                DiffLine::Removed("old b".into()),
                DiffLine::Added("new a".into()),
                DiffLine::Added("new b".into()),
                DiffLine::Unchanged("outro".into()),
            ]
        );
    }

    #[test]
    fn changes_interleave_around_alignment_points() {
        let diff = diff_lines("a\nx\nc\ny\ne", "a\nb\nc\nd\ne");
        // Each replaced region stays local to its surrounding unchanged lines.
        assert_eq!(
            diff.lines,
            vec![
                DiffLine::Unchanged("a".into()),
                DiffLine::Removed("x".into()),
                DiffLine::Added("b".into()),
                DiffLine::Unchanged("c".into()),
                DiffLine::Removed("y".into()),
                DiffLine::Added("d".into()),
                DiffLine::Unchanged("e".into()),
            ]
        );
    }

    #[test]
    fn reconstruction_of_both_sides() {
        let old = "preamble\nparty A\nparty B\nterm 1\nterm 2";
        let new = "preamble\nparty A\nparty C\nterm 2\nterm 3";
        let diff = diff_lines(old, new);
        assert_eq!(old_side(&diff), old.lines().collect::<Vec<_>>());
        assert_eq!(new_side(&diff), new.lines().collect::<Vec<_>>());
    }

    #[test]
    fn empty_documents_diff_to_nothing() {
        assert!(diff_lines("", "").lines.is_empty());
    }

    #[test]
    fn whitespace_only_document_is_a_line() {
        let diff = diff_lines(" ", " ");
        assert_eq!(diff.lines, vec![DiffLine::Unchanged(" ".into())]);
    }

    #[test]
    fn crlf_compares_equal_to_lf() {
        let diff = diff_lines("a\r\nb\r\n", "a\nb");
        assert!(diff.is_identical());
        assert_eq!(diff.unchanged(), 2);
    }

    #[test]
    fn trailing_newline_is_not_a_line() {
        let diff = diff_lines("a\nb\n", "a\nb");
        assert!(diff.is_identical());
    }

    #[test]
    fn deterministic_output() {
        let old = "one\ntwo\nthree\nfour";
        let new = "one\n2\nthree\n4\nfive";
        assert_eq!(diff_lines(old, new), diff_lines(old, new));
    }

    #[test]
    fn compare_rejects_empty_inputs() {
        assert_eq!(compare_contracts("", "text"), Err(DiffError::EmptyDocument));
        assert_eq!(compare_contracts("text", ""), Err(DiffError::EmptyDocument));
        assert_eq!(compare_contracts("", ""), Err(DiffError::EmptyDocument));
    }

    #[test]
    fn compare_accepts_whitespace_only() {
        let diff = compare_contracts(" ", "x").unwrap();
        assert_eq!(diff.deletions(), 1);
        assert_eq!(diff.additions(), 1);
    }

    #[test]
    fn wire_serialization_shape() {
        let json = serde_json::to_value(DiffLine::Added("term 3".into())).unwrap();
        assert_eq!(json, serde_json::json!({"type": "added", "text": "term 3"}));

        let line: DiffLine =
            serde_json::from_value(serde_json::json!({"type": "removed", "text": "term 1"}))
                .unwrap();
        assert_eq!(line, DiffLine::Removed("term 1".into()));
    }

    proptest! {
        #[test]
        fn reconstruction_holds_for_arbitrary_documents(
            old_lines in proptest::collection::vec("[abc ]{0,5}", 0..10),
            new_lines in proptest::collection::vec("[abc ]{0,5}", 0..10),
        ) {
            let old = old_lines.join("\n");
            let new = new_lines.join("\n");
            let diff = diff_lines(&old, &new);
            prop_assert_eq!(old_side(&diff), old.lines().collect::<Vec<_>>());
            prop_assert_eq!(new_side(&diff), new.lines().collect::<Vec<_>>());
        }
    }
}
