use oxc::ast::ast::{Expression, JSXChild, JSXExpression, Program};
use oxc_traverse::{Traverse, TraverseCtx};

use super::JsxTraverser;

/// Fragments are normalized on enter so the rest of the pass only ever sees
/// elements; elements are compiled on exit so children are already calls when
/// their parent assembles its argument list. Once a fatal error latches every
/// hook becomes a no-op and the caller discards the file.
impl<'a> Traverse<'a> for JsxTraverser<'a> {
	fn enter_expression(&mut self, node: &mut Expression<'a>, ctx: &mut TraverseCtx<'a>) {
		if self.fatal.is_some() {
			return;
		}
		if let Expression::JSXFragment(fragment) = node {
			let element = self.fragment_to_element(fragment, ctx);
			*node = Expression::JSXElement(element);
		}
	}

	fn enter_jsx_child(&mut self, node: &mut JSXChild<'a>, ctx: &mut TraverseCtx<'a>) {
		if self.fatal.is_some() {
			return;
		}
		if let JSXChild::Fragment(fragment) = node {
			let element = self.fragment_to_element(fragment, ctx);
			*node = JSXChild::Element(element);
		}
	}

	fn enter_jsx_expression(&mut self, node: &mut JSXExpression<'a>, ctx: &mut TraverseCtx<'a>) {
		if self.fatal.is_some() {
			return;
		}
		if let JSXExpression::JSXFragment(fragment) = node {
			let element = self.fragment_to_element(fragment, ctx);
			*node = JSXExpression::JSXElement(element);
		}
	}

	fn exit_expression(&mut self, node: &mut Expression<'a>, ctx: &mut TraverseCtx<'a>) {
		if self.fatal.is_some() {
			return;
		}
		if let Expression::JSXElement(element) = node {
			match self.transform_jsx_element(element, ctx) {
				Ok(call) => *node = call,
				Err(error) => self.fatal = Some(error),
			}
		}
	}

	fn exit_jsx_expression(&mut self, node: &mut JSXExpression<'a>, ctx: &mut TraverseCtx<'a>) {
		if self.fatal.is_some() {
			return;
		}
		if let JSXExpression::JSXElement(element) = node {
			match self.transform_jsx_element(element, ctx) {
				Ok(call) => *node = call.into(),
				Err(error) => self.fatal = Some(error),
			}
		}
	}

	fn exit_program(&mut self, node: &mut Program<'a>, ctx: &mut TraverseCtx<'a>) {
		if self.fatal.is_some() {
			return;
		}
		if let Err(error) = self.finalize_imports(node, ctx) {
			self.fatal = Some(error);
		}
	}
}
