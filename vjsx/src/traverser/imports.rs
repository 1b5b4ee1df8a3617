//! Import consolidation: one canonical import statement per runtime module.
//!
//! Runs once per file after every node has been exited. Hand-written imports
//! that bind exactly one helper from the runtime module are removed, then a
//! single deduplicated import declaration binding every referenced helper is
//! inserted at the top of the program.

use std::cell::Cell;

use oxc::{
	allocator::Vec,
	ast::ast::{
		BindingIdentifier, IdentifierName, ImportDeclaration, ImportDeclarationSpecifier,
		ImportDefaultSpecifier, ImportNamespaceSpecifier, ImportOrExportKind, ImportSpecifier,
		ModuleExportName, Program, Statement, StringLiteral,
	},
	span::{Atom, Span},
};
use oxc_traverse::TraverseCtx;

use super::JsxTraverser;
use crate::{
	constants::{COMPAT_PROPS, COMPAT_PROPS_MODULE, VUE_NS},
	error::TransformError,
};

impl<'a> JsxTraverser<'a> {
	/// Rewrites the program's imports to the canonical consolidated form.
	pub(crate) fn finalize_imports(
		&mut self,
		program: &mut Program<'a>,
		ctx: &mut TraverseCtx<'a>,
	) -> Result<(), TransformError> {
		if self.state.helpers.is_empty()
			&& self.state.vue_ns.is_none()
			&& self.state.compat_props.is_none()
		{
			return Ok(());
		}

		self.remove_redundant_imports(program);

		// Insert at index 0 in reverse so the final order is the helper
		// import, then the namespace import, then the compat import.
		if let Some(compat) = &self.state.compat_props {
			let specifier = ImportDeclarationSpecifier::ImportDefaultSpecifier(ctx.alloc(
				ImportDefaultSpecifier {
					span: Span::empty(0),
					local: BindingIdentifier {
						span: Span::empty(0),
						name: COMPAT_PROPS,
						symbol_id: Cell::new(Some(compat.symbol)),
					},
				},
			));
			let import = self.import_statement(specifier, COMPAT_PROPS_MODULE, ctx);
			program.body.insert(0, import);
		}

		if let Some(ns) = &self.state.vue_ns {
			let specifier = ImportDeclarationSpecifier::ImportNamespaceSpecifier(ctx.alloc(
				ImportNamespaceSpecifier {
					span: Span::empty(0),
					local: BindingIdentifier {
						span: Span::empty(0),
						name: VUE_NS,
						symbol_id: Cell::new(Some(ns.symbol)),
					},
				},
			));
			let import =
				self.import_statement(specifier, self.state.options.runtime_module, ctx);
			program.body.insert(0, import);
		}

		if !self.state.helpers.is_empty() {
			let mut specifiers =
				Vec::with_capacity_in(self.state.helpers.required().len(), self.allocator);
			for helper in self.state.helpers.required() {
				let binding = self.state.helpers.binding(*helper).ok_or(
					TransformError::MissingHelperBinding { helper: helper.name() },
				)?;
				specifiers.push(ImportDeclarationSpecifier::ImportSpecifier(ctx.alloc(
					ImportSpecifier {
						span: Span::empty(0),
						imported: ModuleExportName::IdentifierName(IdentifierName {
							span: Span::empty(0),
							name: Atom::new_const(helper.name()),
						}),
						local: BindingIdentifier {
							span: Span::empty(0),
							name: helper.local(),
							symbol_id: Cell::new(Some(binding.symbol)),
						},
						import_kind: ImportOrExportKind::Value,
					},
				)));
			}

			program.body.insert(
				0,
				Statement::ImportDeclaration(ctx.alloc(ImportDeclaration {
					import_kind: ImportOrExportKind::Value,
					phase: None,
					span: Span::empty(0),
					specifiers: Some(specifiers),
					source: StringLiteral {
						span: Span::empty(0),
						value: Atom::from(self.state.options.runtime_module),
						raw: None,
						lossy: false,
					},
					with_clause: None,
				})),
			);
		}

		Ok(())
	}

	/// Drops every runtime-module import carrying exactly one named
	/// specifier that the consolidated import will re-bind.
	fn remove_redundant_imports(&self, program: &mut Program<'a>) {
		let mut i = 0;
		while i < program.body.len() {
			if self.is_redundant_import(&program.body[i]) {
				program.body.remove(i);
			} else {
				i += 1;
			}
		}
	}

	/// Whether a statement is a single-specifier import the registry covers.
	fn is_redundant_import(&self, statement: &Statement<'a>) -> bool {
		let Statement::ImportDeclaration(import) = statement else {
			return false;
		};
		if import.source.value.as_str() != self.state.options.runtime_module {
			return false;
		}
		let Some(specifiers) = &import.specifiers else {
			return false;
		};
		let [ImportDeclarationSpecifier::ImportSpecifier(specifier)] = specifiers.as_slice()
		else {
			return false;
		};
		self.state
			.helpers
			.matches_binding(specifier.imported.name().as_str(), specifier.local.name.as_str())
	}

	/// One import declaration with a single specifier.
	fn import_statement(
		&self,
		specifier: ImportDeclarationSpecifier<'a>,
		source: &'a str,
		ctx: &mut TraverseCtx<'a>,
	) -> Statement<'a> {
		Statement::ImportDeclaration(ctx.alloc(ImportDeclaration {
			import_kind: ImportOrExportKind::Value,
			phase: None,
			span: Span::empty(0),
			specifiers: Some(Vec::from_array_in([specifier], self.allocator)),
			source: StringLiteral {
				span: Span::empty(0),
				value: Atom::from(source),
				raw: None,
				lossy: false,
			},
			with_clause: None,
		}))
	}
}
