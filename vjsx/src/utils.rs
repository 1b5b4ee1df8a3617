//! Low-level node transforms shared by the children compiler and the props
//! builder.

use oxc::{
	ast::ast::IdentifierReference,
	semantic::{ReferenceId, Scoping},
};

/// Decodes HTML entities in a string value.
pub(crate) fn decode_entities(value: &str) -> String {
	let decoded = htmlentity::entity::decode(value.as_bytes()).bytes();
	String::from_utf8_lossy(decoded.as_ref()).into_owned()
}

/// Cleans a JSX text child according to JSX whitespace semantics.
///
/// Lines are split, interior indentation is stripped, surviving lines are
/// joined with single spaces, and HTML entities are decoded. Returns `None`
/// when nothing survives (whitespace-only text), in which case the child is
/// dropped.
pub(crate) fn clean_jsx_text(value: &str) -> Option<String> {
	let lines: Vec<&str> = value.split(['\n', '\r']).collect();
	let last_non_empty = lines
		.iter()
		.rposition(|line| line.chars().any(|c| c != ' ' && c != '\t'))?;

	let mut out = String::new();
	for (i, line) in lines.iter().enumerate() {
		let is_first = i == 0;
		let is_last = i == lines.len() - 1;

		let mut trimmed = line.replace('\t', " ");
		if !is_first {
			trimmed = trimmed.trim_start_matches(' ').to_string();
		}
		if !is_last {
			trimmed = trimmed.trim_end_matches(' ').to_string();
		}

		if !trimmed.is_empty() {
			out.push_str(&trimmed);
			if i != last_non_empty {
				out.push(' ');
			}
		}
	}

	if out.is_empty() {
		None
	} else {
		Some(decode_entities(&out))
	}
}

/// Enumerates the resolved reference sites of a bare identifier child.
///
/// The reference sites are recorded by the caller and handed to the host
/// pipeline, which owns the actual reactive-access rewrite; this pass only
/// triggers it.
pub(crate) fn reactive_reference_sites(
	scoping: &Scoping,
	ident: &IdentifierReference<'_>,
) -> Vec<ReferenceId> {
	let Some(reference_id) = ident.reference_id.get() else {
		return Vec::new();
	};
	let Some(symbol) = scoping.get_reference(reference_id).symbol_id() else {
		// Unresolved (global) identifier; nothing to walk.
		return Vec::new();
	};
	scoping.get_resolved_reference_ids(symbol).iter().copied().collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn whitespace_only_text_is_dropped() {
		assert_eq!(clean_jsx_text(" "), None);
		assert_eq!(clean_jsx_text("\n\t  \n"), None);
	}

	#[test]
	fn single_line_text_is_preserved() {
		assert_eq!(clean_jsx_text("hello world"), Some("hello world".into()));
	}

	#[test]
	fn multiline_indentation_is_collapsed() {
		assert_eq!(
			clean_jsx_text("\n\t\thello\n\t\tworld\n\t"),
			Some("hello world".into())
		);
	}

	#[test]
	fn entities_are_decoded() {
		assert_eq!(clean_jsx_text("a &amp; b"), Some("a & b".into()));
	}
}
