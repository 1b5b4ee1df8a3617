//! Runtime helper registry.
//!
//! Each compiled file gets one [`HelperRegistry`]. A helper binding is
//! created lazily the first time the compiler references the helper and is
//! reused for every subsequent reference, so the import consolidator can emit
//! exactly one import per helper at the end of the pass.

use std::collections::HashMap;

use oxc::{
	semantic::{NodeId, ReferenceFlags, ReferenceId, ScopeId, SymbolFlags, SymbolId},
	span::{Atom, Span},
};
use oxc_traverse::TraverseCtx;

/// The closed set of runtime helper symbols this pass can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Helper {
	/// Optimized vnode constructor, used when the `optimize` option is set.
	CreateVNode,
	/// Short vnode constructor alias, used when `optimize` is off.
	H,
	/// Wraps a cleaned text child in a text vnode.
	CreateTextVNode,
	/// Applies a directive list to a constructed vnode.
	WithDirectives,
	/// Resolves a directive by name at runtime.
	ResolveDirective,
}

impl Helper {
	/// The imported symbol name in the runtime module.
	#[must_use]
	pub fn name(self) -> &'static str {
		match self {
			Self::CreateVNode => "createVNode",
			Self::H => "h",
			Self::CreateTextVNode => "createTextVNode",
			Self::WithDirectives => "withDirectives",
			Self::ResolveDirective => "resolveDirective",
		}
	}

	/// The local identifier the helper is bound to in the compiled file.
	#[must_use]
	pub fn local(self) -> Atom<'static> {
		match self {
			Self::CreateVNode => Atom::new_const("_createVNode"),
			Self::H => Atom::new_const("_h"),
			Self::CreateTextVNode => Atom::new_const("_createTextVNode"),
			Self::WithDirectives => Atom::new_const("_withDirectives"),
			Self::ResolveDirective => Atom::new_const("_resolveDirective"),
		}
	}
}

/// A lazily created local binding for one helper.
pub(crate) struct HelperBinding {
	/// Symbol bound by the consolidated import declaration.
	pub symbol: SymbolId,
	/// Reference shared by every reference site of the helper.
	pub reference: ReferenceId,
}

/// Per-file mapping from helper to its local binding.
#[derive(Default)]
pub(crate) struct HelperRegistry {
	/// Helpers in first-use order; drives import specifier order.
	required: Vec<Helper>,
	/// Bindings keyed by helper.
	bindings: HashMap<Helper, HelperBinding>,
}

impl HelperRegistry {
	/// Returns the shared reference for `helper`, creating the symbol and
	/// reference on first use. The check-then-insert must stay a single
	/// sequential step; the traversal is single-threaded.
	pub fn resolve<'a>(
		&mut self,
		helper: Helper,
		root_scope: ScopeId,
		ctx: &mut TraverseCtx<'a>,
	) -> ReferenceId {
		if let Some(binding) = self.bindings.get(&helper) {
			return binding.reference;
		}

		let symbol = ctx.scoping_mut().create_symbol(
			Span::default(),
			helper.local().as_str(),
			SymbolFlags::Import,
			root_scope,
			NodeId::DUMMY,
		);
		let reference = ctx.create_reference(helper.local().as_str(), Some(symbol), ReferenceFlags::Read);

		self.required.push(helper);
		self.bindings.insert(helper, HelperBinding { symbol, reference });
		reference
	}

	/// Whether any helper has been referenced.
	pub fn is_empty(&self) -> bool {
		self.required.is_empty()
	}

	/// Helpers in first-use order.
	pub fn required(&self) -> &[Helper] {
		&self.required
	}

	/// The binding for `helper`, if one was created.
	pub fn binding(&self, helper: Helper) -> Option<&HelperBinding> {
		self.bindings.get(&helper)
	}

	/// Whether an imported-name/local-name pair exactly matches a registered
	/// binding. Used to drop redundant hand-written imports.
	pub fn matches_binding(&self, imported: &str, local: &str) -> bool {
		self.required
			.iter()
			.any(|helper| helper.name() == imported && helper.local().as_str() == local)
	}
}
