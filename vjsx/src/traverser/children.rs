//! Children compilation.
//!
//! Maps a JSX children list to an ordered argument-expression list with
//! per-kind dispatch. Children that compile to nothing (whitespace-only text,
//! empty expression containers) are dropped; surviving order is preserved.

use oxc::{
	allocator::{CloneIn, FromIn, Vec},
	ast::ast::{
		ArrayExpressionElement, Expression, JSXChild, JSXExpression, JSXText, SpreadElement,
		StringLiteral,
	},
	span::{Atom, Span},
};
use oxc_traverse::TraverseCtx;

use super::JsxTraverser;
use crate::{error::TransformError, helpers::Helper, utils};

/// One compiled child, as it will appear inside the children array.
pub(crate) enum ChildExpr<'a> {
	/// A plain element of the children array.
	Expr(Expression<'a>),
	/// A spread child, kept as a spread element of the children array.
	Spread {
		/// Location of the original spread child.
		span: Span,
		/// The spread target.
		argument: Expression<'a>,
	},
}

impl<'a> ChildExpr<'a> {
	/// Converts this child into an array-expression element.
	pub fn into_array_element(self, ctx: &mut TraverseCtx<'a>) -> ArrayExpressionElement<'a> {
		match self {
			Self::Expr(expr) => expr.into(),
			Self::Spread { span, argument } => {
				ArrayExpressionElement::SpreadElement(ctx.alloc(SpreadElement { span, argument }))
			}
		}
	}
}

impl<'a> JsxTraverser<'a> {
	/// Compiles a children list into an ordered expression list. Fails on the
	/// first child of an unsupported kind; the error aborts the whole file.
	pub(crate) fn compile_children(
		&mut self,
		children: &mut Vec<'a, JSXChild<'a>>,
		ctx: &mut TraverseCtx<'a>,
	) -> Result<std::vec::Vec<ChildExpr<'a>>, TransformError> {
		let mut compiled = std::vec::Vec::with_capacity(children.len());
		for child in children.iter_mut() {
			if let Some(expr) = self.compile_child(child, ctx)? {
				compiled.push(expr);
			}
		}
		Ok(compiled)
	}

	/// Compiles one child. `Ok(None)` means the child is dropped.
	fn compile_child(
		&mut self,
		child: &mut JSXChild<'a>,
		ctx: &mut TraverseCtx<'a>,
	) -> Result<Option<ChildExpr<'a>>, TransformError> {
		match child {
			JSXChild::Text(text) => Ok(self.compile_text_child(text, ctx)),
			JSXChild::ExpressionContainer(container) => {
				match &container.expression {
					JSXExpression::EmptyExpression(_) => Ok(None),
					// A `{' '}` container is whitespace like any other and is
					// dropped the same way text children are.
					JSXExpression::StringLiteral(literal)
						if utils::clean_jsx_text(literal.value.as_str()).is_none() =>
					{
						Ok(None)
					}
					JSXExpression::Identifier(ident) => {
						// A bare identifier child: record every reference site
						// of its binding for the host pipeline's
						// reactive-access rewrite.
						let sites = utils::reactive_reference_sites(ctx.scoping(), ident);
						self.state.reactive_references.extend(sites);
						Ok(Some(ChildExpr::Expr(
							container.expression.clone_in(self.allocator).into_expression(),
						)))
					}
					// Anything else passes through unchanged. This includes
					// the constructor calls that nested elements have already
					// been rewritten into by the time a parent collects its
					// children.
					_ => {
						Ok(Some(ChildExpr::Expr(
							container.expression.clone_in(self.allocator).into_expression(),
						)))
					}
				}
			}
			JSXChild::Spread(spread) => {
				Ok(Some(ChildExpr::Spread {
					span: spread.span,
					argument: spread.expression.clone_in(self.allocator),
				}))
			}
			JSXChild::Element(element) => {
				let expr = self.transform_jsx_element(element, ctx)?;
				Ok(Some(ChildExpr::Expr(expr)))
			}
			// Fragments are rewritten to elements pre-order; one surviving to
			// this point is unsupported input.
			JSXChild::Fragment(fragment) => {
				Err(TransformError::UnsupportedChildKind {
					kind: "JSXFragment",
					span: fragment.span,
				})
			}
		}
	}

	/// Compiles a text child into a `createTextVNode` call, or drops it when
	/// nothing survives whitespace cleaning.
	fn compile_text_child(
		&mut self,
		text: &JSXText<'a>,
		ctx: &mut TraverseCtx<'a>,
	) -> Option<ChildExpr<'a>> {
		let cleaned = utils::clean_jsx_text(text.value.as_str())?;
		let literal = Expression::StringLiteral(ctx.alloc(StringLiteral {
			span: text.span,
			value: Atom::from_in(cleaned.as_str(), self.allocator),
			raw: None,
			lossy: false,
		}));
		let call = self.helper_call(
			Helper::CreateTextVNode,
			text.span,
			Vec::from_array_in([literal.into()], self.allocator),
			ctx,
		);
		Some(ChildExpr::Expr(call))
	}
}
