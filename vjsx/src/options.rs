//! Compiler options supplied by the host pipeline.

use oxc::span::Span;

use crate::constants::RUNTIME_MODULE;

/// Options for one run of [`transform`](crate::transform).
///
/// Read-only for the pass itself; the host pipeline builds one per file.
#[derive(Debug, Clone)]
pub struct TransformOptions<'a> {
	/// When set, elements are constructed with `createVNode` and annotated
	/// with patch flags and dynamic prop names; otherwise the short `h`
	/// constructor is used and no flags are emitted.
	pub optimize: bool,
	/// When set, every props argument is routed through a compatibility
	/// wrapper helper imported once per file.
	pub compatible_props: bool,
	/// Module specifier the runtime helpers are imported from.
	pub runtime_module: &'a str,
	/// Spans of elements whose per-node optimization has been disabled by an
	/// earlier pass. A listed element still compiles normally but its patch
	/// flag is forced to the bail sentinel.
	pub bail_spans: Vec<Span>,
}

impl Default for TransformOptions<'_> {
	fn default() -> Self {
		Self {
			optimize: false,
			compatible_props: false,
			runtime_module: RUNTIME_MODULE,
			bail_spans: Vec::new(),
		}
	}
}
