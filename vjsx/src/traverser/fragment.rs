//! Fragment normalization.
//!
//! A fragment node is rewritten, pre-order, into an element node carrying the
//! same children and tagged with the two-part qualified name
//! `<namespace>.Fragment`. The produced element re-enters the same traversal,
//! so the element compiler never special-cases fragments.

use std::cell::Cell;

use oxc::{
	allocator::{Box, Vec},
	ast::ast::{
		IdentifierReference, JSXClosingElement, JSXElement, JSXElementName, JSXFragment,
		JSXIdentifier, JSXMemberExpression, JSXMemberExpressionObject, JSXOpeningElement,
	},
	span::{Atom, Span},
};
use oxc_traverse::TraverseCtx;

use super::JsxTraverser;
use crate::constants::{FRAGMENT, VUE_NS};

impl<'a> JsxTraverser<'a> {
	/// Rewrites `fragment` into an equivalent element node. The children are
	/// moved, not copied; the namespace binding is created on the first call
	/// per file and reused afterwards.
	pub(crate) fn fragment_to_element(
		&mut self,
		fragment: &mut JSXFragment<'a>,
		ctx: &mut TraverseCtx<'a>,
	) -> Box<'a, JSXElement<'a>> {
		let span = fragment.span;
		let children = std::mem::replace(&mut fragment.children, Vec::new_in(self.allocator));

		let opening_name = self.fragment_tag(span, ctx);
		let closing_name = self.fragment_tag(span, ctx);

		ctx.alloc(JSXElement {
			span,
			opening_element: ctx.alloc(JSXOpeningElement {
				span,
				name: opening_name,
				attributes: Vec::new_in(self.allocator),
				self_closing: false,
				type_arguments: None,
			}),
			closing_element: Some(ctx.alloc(JSXClosingElement {
				span,
				name: closing_name,
			})),
			children,
		})
	}

	/// The `<namespace>.Fragment` qualified tag name.
	fn fragment_tag(&mut self, span: Span, ctx: &mut TraverseCtx<'a>) -> JSXElementName<'a> {
		let reference = self.vue_namespace(ctx);
		JSXElementName::MemberExpression(ctx.alloc(JSXMemberExpression {
			span,
			object: JSXMemberExpressionObject::IdentifierReference(ctx.alloc(
				IdentifierReference {
					span,
					name: VUE_NS,
					reference_id: Cell::new(Some(reference)),
				},
			)),
			property: JSXIdentifier {
				span,
				name: Atom::new_const(FRAGMENT),
			},
		}))
	}
}
