//! Per-file compile state threaded through the whole pass.

use std::collections::HashSet;

use oxc::{
	semantic::{ReferenceId, SymbolId},
	span::Span,
};

use crate::{helpers::HelperRegistry, options::TransformOptions};

/// A lazily created module-level binding (namespace or default import).
pub(crate) struct ModuleBinding {
	/// Symbol bound by the import declaration emitted at the end of the pass.
	pub symbol: SymbolId,
	/// Reference shared by every reference site of the binding.
	pub reference: ReferenceId,
}

/// Mutable state scoped to one file's compilation.
///
/// Created once before traversal, mutated throughout, and discarded after the
/// import consolidator has run. Never accessed concurrently; the traversal is
/// strictly sequential.
pub(crate) struct CompileState<'a> {
	/// Immutable compiler options.
	pub options: TransformOptions<'a>,
	/// Lazily created runtime helper bindings.
	pub helpers: HelperRegistry,
	/// Namespace binding to the runtime module, created by the first
	/// fragment normalization and reused thereafter.
	pub vue_ns: Option<ModuleBinding>,
	/// Default-import binding for the props compatibility wrapper, created at
	/// most once when the `compatible_props` option is set.
	pub compat_props: Option<ModuleBinding>,
	/// Spans of elements whose per-node optimization was disabled upstream.
	pub bail_spans: HashSet<Span>,
	/// Reference sites of bare identifier children, collected for the host
	/// pipeline's reactive-access rewrite.
	pub reactive_references: Vec<ReferenceId>,
}

impl<'a> CompileState<'a> {
	/// Creates the state for one file from the host-supplied options.
	pub fn new(options: TransformOptions<'a>) -> Self {
		let bail_spans = options.bail_spans.iter().copied().collect();
		Self {
			options,
			helpers: HelperRegistry::default(),
			vue_ns: None,
			compat_props: None,
			bail_spans,
			reactive_references: Vec::new(),
		}
	}
}
