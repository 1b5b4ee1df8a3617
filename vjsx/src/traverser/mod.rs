//! The traverser that drives the pass over one file.

mod children;
mod element;
mod fragment;
mod imports;
mod oxc_impl;

use std::cell::Cell;

use oxc::{
	allocator::{Allocator, CloneIn, Vec},
	ast::ast::{
		Argument, CallExpression, Expression, IdentifierName, IdentifierReference,
		JSXMemberExpression, JSXMemberExpressionObject, StaticMemberExpression,
	},
	semantic::{NodeId, ReferenceFlags, ReferenceId, ScopeId, SymbolFlags},
	span::Span,
};
use oxc_traverse::TraverseCtx;

use crate::{
	constants::{COMPAT_PROPS_IDENT, VUE_NS_IDENT},
	error::TransformError,
	helpers::Helper,
	options::TransformOptions,
	state::{CompileState, ModuleBinding},
};

/// Traverser rewriting JSX nodes into vnode constructor calls.
pub(crate) struct JsxTraverser<'a> {
	/// Per-file compile state.
	pub state: CompileState<'a>,
	/// The file's root scope, where helper bindings are declared.
	pub root_scope: ScopeId,
	/// The underlying Bumpalo allocator.
	pub allocator: &'a Allocator,
	/// First fatal error, if any. Once set, every hook becomes a no-op and
	/// the whole file's compilation is aborted.
	pub fatal: Option<TransformError>,
}

impl<'a> JsxTraverser<'a> {
	/// Creates a traverser for one file.
	pub fn new_in(
		options: TransformOptions<'a>,
		root_scope: ScopeId,
		allocator: &'a Allocator,
	) -> Self {
		Self {
			state: CompileState::new(options),
			root_scope,
			allocator,
			fatal: None,
		}
	}

	/// An identifier expression referencing `helper`, binding it on first use.
	pub(crate) fn helper_expr(
		&mut self,
		helper: Helper,
		span: Span,
		ctx: &mut TraverseCtx<'a>,
	) -> Expression<'a> {
		let reference = self.state.helpers.resolve(helper, self.root_scope, ctx);
		Expression::Identifier(ctx.alloc(IdentifierReference {
			span,
			name: helper.local(),
			reference_id: Cell::new(Some(reference)),
		}))
	}

	/// A call to `helper` with the given arguments.
	pub(crate) fn helper_call(
		&mut self,
		helper: Helper,
		span: Span,
		arguments: Vec<'a, Argument<'a>>,
		ctx: &mut TraverseCtx<'a>,
	) -> Expression<'a> {
		let callee = self.helper_expr(helper, span, ctx);
		Expression::CallExpression(ctx.alloc(CallExpression {
			span,
			callee,
			type_arguments: None,
			arguments,
			optional: false,
			pure: false,
		}))
	}

	/// The namespace binding to the runtime module, created on the first
	/// fragment normalization and reused thereafter.
	pub(crate) fn vue_namespace(&mut self, ctx: &mut TraverseCtx<'a>) -> ReferenceId {
		if let Some(ns) = &self.state.vue_ns {
			return ns.reference;
		}

		let symbol = ctx.scoping_mut().create_symbol(
			Span::default(),
			VUE_NS_IDENT,
			SymbolFlags::Import,
			self.root_scope,
			NodeId::DUMMY,
		);
		let reference = ctx.create_reference(VUE_NS_IDENT, Some(symbol), ReferenceFlags::Read);
		self.state.vue_ns = Some(ModuleBinding { symbol, reference });
		reference
	}

	/// The props compatibility wrapper binding, created at most once per file.
	pub(crate) fn compat_props_reference(&mut self, ctx: &mut TraverseCtx<'a>) -> ReferenceId {
		if let Some(binding) = &self.state.compat_props {
			return binding.reference;
		}

		let symbol = ctx.scoping_mut().create_symbol(
			Span::default(),
			COMPAT_PROPS_IDENT,
			SymbolFlags::Import,
			self.root_scope,
			NodeId::DUMMY,
		);
		let reference = ctx.create_reference(COMPAT_PROPS_IDENT, Some(symbol), ReferenceFlags::Read);
		self.state.compat_props = Some(ModuleBinding { symbol, reference });
		reference
	}

	/// Converts a JSX member expression tag into a runtime expression.
	pub(crate) fn member_to_expression(
		&self,
		ctx: &mut TraverseCtx<'a>,
		member: &JSXMemberExpression<'a>,
	) -> Expression<'a> {
		let object = match &member.object {
			JSXMemberExpressionObject::ThisExpression(expr) => {
				Expression::ThisExpression(expr.clone_in(self.allocator))
			}
			JSXMemberExpressionObject::IdentifierReference(expr) => {
				Expression::Identifier(expr.clone_in(self.allocator))
			}
			JSXMemberExpressionObject::MemberExpression(inner) => {
				self.member_to_expression(ctx, inner)
			}
		};
		Expression::StaticMemberExpression(ctx.alloc(StaticMemberExpression {
			span: member.span,
			object,
			property: IdentifierName {
				span: member.property.span,
				name: member.property.name,
			},
			optional: false,
		}))
	}
}
