//! Fatal error taxonomy for the transform pass.
//!
//! The pass is all-or-nothing at file granularity: any of these errors aborts
//! the compilation of the whole file and the partially rewritten tree must be
//! discarded by the caller.

use oxc::{diagnostics::OxcDiagnostic, span::Span};

/// A fatal transform error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
	/// A children-list entry is of a kind the pass does not know how to
	/// compile. Carries the offending kind's name.
	UnsupportedChildKind {
		/// AST type name of the unsupported child node.
		kind: &'static str,
		/// Location of the offending node.
		span: Span,
	},
	/// A required runtime helper has no recorded local binding. This is an
	/// internal invariant violation in the import consolidator; it indicates
	/// a registry/binding mismatch.
	MissingHelperBinding {
		/// Symbol name of the helper that has no binding.
		helper: &'static str,
	},
}

impl TransformError {
	/// Converts this error into an [`OxcDiagnostic`] for display.
	#[must_use]
	pub fn into_diagnostic(self) -> OxcDiagnostic {
		match self {
			Self::UnsupportedChildKind { kind, span } => {
				OxcDiagnostic::error(format!("{kind} is not supported as a child node"))
					.with_label(span)
			}
			Self::MissingHelperBinding { helper } => {
				OxcDiagnostic::error(format!("cannot find a local binding for helper `{helper}`"))
			}
		}
	}
}

impl std::fmt::Display for TransformError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::UnsupportedChildKind { kind, .. } => {
				write!(f, "{kind} is not supported as a child node")
			}
			Self::MissingHelperBinding { helper } => {
				write!(f, "cannot find a local binding for helper `{helper}`")
			}
		}
	}
}

impl std::error::Error for TransformError {}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unsupported_child_kind_names_the_kind() {
		let err = TransformError::UnsupportedChildKind {
			kind: "JSXFragment",
			span: Span::new(0, 4),
		};
		assert_eq!(
			err.to_string(),
			"JSXFragment is not supported as a child node"
		);
	}

	#[test]
	fn missing_helper_binding_names_the_helper() {
		let err = TransformError::MissingHelperBinding {
			helper: "createVNode",
		};
		assert_eq!(
			err.to_string(),
			"cannot find a local binding for helper `createVNode`"
		);
	}
}
