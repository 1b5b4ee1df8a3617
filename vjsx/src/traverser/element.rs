//! Element compilation: one JSX element becomes one vnode constructor call.

use std::cell::Cell;

use oxc::{
	allocator::Vec,
	ast::ast::{
		ArrayExpression, ArrowFunctionExpression, CallExpression, Expression,
		ExpressionStatement, FormalParameterKind, FormalParameters, FunctionBody,
		IdentifierReference, JSXElement, NumericLiteral, ObjectExpression, ObjectProperty,
		ObjectPropertyKind, PropertyKey, PropertyKind, SpreadElement, Statement, StringLiteral,
		UnaryExpression, UnaryOperator,
	},
	span::{Atom, Span},
	syntax::number::NumberBase,
};
use oxc_traverse::TraverseCtx;

use super::{JsxTraverser, children::ChildExpr};
use crate::{
	constants::{COMPAT_PROPS, DEFAULT_SLOT},
	error::TransformError,
	helpers::Helper,
	patch_flags,
	props::PropsDescriptor,
};

impl<'a> JsxTraverser<'a> {
	/// Compiles one element into its constructor call expression.
	///
	/// Children are compiled first so nested elements are already calls by
	/// the time the argument list is assembled. The produced call is
	/// `createVNode(...)` when the fast path is enabled and `h(...)`
	/// otherwise, optionally wrapped in `withDirectives`.
	pub(crate) fn transform_jsx_element(
		&mut self,
		node: &mut JSXElement<'a>,
		ctx: &mut TraverseCtx<'a>,
	) -> Result<Expression<'a>, TransformError> {
		let span = node.span;
		let children = self.compile_children(&mut node.children, ctx)?;
		let PropsDescriptor {
			tag,
			props,
			is_component,
			directives,
			patch_flag,
			dynamic_prop_names,
			slots,
		} = self.build_props(node, ctx)?;

		// A span listed in the bail set opts this one node out of the fast
		// path while the rest of the file keeps it.
		let use_optimize =
			self.state.options.optimize && !self.state.bail_spans.contains(&span);

		let props = if self.state.options.compatible_props {
			self.wrap_compat_props(props, span, ctx)
		} else {
			props
		};

		let mut arguments = Vec::with_capacity_in(5, self.allocator);
		arguments.push(tag.into());
		arguments.push(props.into());

		// The third argument carries children (native) or slots (component).
		// When there is nothing to pass it is omitted outright, and the
		// trailing flag arguments are omitted with it since they are
		// positional.
		if let Some(third) = self.children_argument(span, children, slots, is_component, ctx) {
			arguments.push(third.into());

			if self.state.options.optimize && patch_flag != 0 {
				let flag = if use_optimize { patch_flag } else { patch_flags::BAIL };
				arguments.push(self.flag_literal(flag, span, ctx).into());

				if !dynamic_prop_names.is_empty() {
					arguments
						.push(self.prop_names_literal(&dynamic_prop_names, span, ctx).into());
				}
			}
		}

		let helper = if self.state.options.optimize { Helper::CreateVNode } else { Helper::H };
		let mut call = self.helper_call(helper, span, arguments, ctx);

		if !directives.is_empty() {
			let entries = Expression::ArrayExpression(ctx.alloc(ArrayExpression {
				span,
				elements: Vec::from_iter_in(
					directives.into_iter().map(Into::into),
					self.allocator,
				),
				trailing_comma: None,
			}));
			call = self.helper_call(
				Helper::WithDirectives,
				span,
				Vec::from_array_in([call.into(), entries.into()], self.allocator),
				ctx,
			);
		}

		Ok(call)
	}

	/// The third constructor argument, or `None` when it must be omitted.
	///
	/// Components receive a slots object whose `default` slot is a thunk
	/// returning the children array; explicit `v-slots` entries are merged
	/// into it. Native elements receive the plain children array.
	fn children_argument(
		&mut self,
		span: Span,
		children: std::vec::Vec<ChildExpr<'a>>,
		slots: Option<Expression<'a>>,
		is_component: bool,
		ctx: &mut TraverseCtx<'a>,
	) -> Option<Expression<'a>> {
		let child_array = if children.is_empty() {
			None
		} else {
			let elements = Vec::from_iter_in(
				children.into_iter().map(|child| child.into_array_element(ctx)),
				self.allocator,
			);
			Some(Expression::ArrayExpression(ctx.alloc(ArrayExpression {
				span,
				elements,
				trailing_comma: None,
			})))
		};

		if !is_component {
			// Slots mean nothing on a native element; only children count.
			return child_array;
		}

		if child_array.is_none() && slots.is_none() {
			return None;
		}

		let mut properties = Vec::with_capacity_in(2, self.allocator);
		if let Some(child_array) = child_array {
			let thunk = self.slot_thunk(span, child_array, ctx);
			properties.push(ObjectPropertyKind::ObjectProperty(ctx.alloc(ObjectProperty {
				span,
				kind: PropertyKind::Init,
				key: PropertyKey::Identifier(ctx.alloc(IdentifierReference {
					span,
					name: Atom::new_const(DEFAULT_SLOT),
					reference_id: Cell::new(None),
				})),
				value: thunk,
				method: false,
				shorthand: false,
				computed: false,
			})));
		}

		match slots {
			None => {}
			// Literal slot objects merge in place; anything else is spread.
			Some(Expression::ObjectExpression(slot_obj)) => {
				for property in slot_obj.unbox().properties {
					properties.push(property);
				}
			}
			Some(other) => {
				properties.push(ObjectPropertyKind::SpreadProperty(ctx.alloc(SpreadElement {
					span,
					argument: other,
				})));
			}
		}

		Some(Expression::ObjectExpression(ctx.alloc(ObjectExpression {
			span,
			properties,
			trailing_comma: None,
		})))
	}

	/// A `() => [children]` thunk for the default slot.
	fn slot_thunk(
		&self,
		span: Span,
		child_array: Expression<'a>,
		ctx: &mut TraverseCtx<'a>,
	) -> Expression<'a> {
		Expression::ArrowFunctionExpression(ctx.alloc(ArrowFunctionExpression {
			span,
			expression: true,
			r#async: false,
			type_parameters: None,
			params: ctx.alloc(FormalParameters {
				span,
				kind: FormalParameterKind::ArrowFormalParameters,
				items: Vec::new_in(self.allocator),
				rest: None,
			}),
			return_type: None,
			body: ctx.alloc(FunctionBody {
				span,
				directives: Vec::new_in(self.allocator),
				statements: Vec::from_array_in(
					[Statement::ExpressionStatement(ctx.alloc(ExpressionStatement {
						span,
						expression: child_array,
					}))],
					self.allocator,
				),
			}),
			scope_id: Cell::new(None),
			pure: false,
		}))
	}

	/// Wraps a props expression in the compatibility helper call.
	fn wrap_compat_props(
		&mut self,
		props: Expression<'a>,
		span: Span,
		ctx: &mut TraverseCtx<'a>,
	) -> Expression<'a> {
		let reference = self.compat_props_reference(ctx);
		Expression::CallExpression(ctx.alloc(CallExpression {
			span,
			callee: Expression::Identifier(ctx.alloc(IdentifierReference {
				span,
				name: COMPAT_PROPS,
				reference_id: Cell::new(Some(reference)),
			})),
			type_arguments: None,
			arguments: Vec::from_array_in([props.into()], self.allocator),
			optional: false,
			pure: false,
		}))
	}

	/// A patch-flag literal; the bail sentinel is the only negative value.
	fn flag_literal(&self, flag: i32, span: Span, ctx: &mut TraverseCtx<'a>) -> Expression<'a> {
		let magnitude = Expression::NumericLiteral(ctx.alloc(NumericLiteral {
			span,
			value: f64::from(flag.unsigned_abs()),
			raw: None,
			base: NumberBase::Decimal,
		}));
		if flag >= 0 {
			magnitude
		} else {
			Expression::UnaryExpression(ctx.alloc(UnaryExpression {
				span,
				operator: UnaryOperator::UnaryNegation,
				argument: magnitude,
			}))
		}
	}

	/// The dynamic-prop-name array, in insertion order.
	fn prop_names_literal(
		&self,
		names: &[Atom<'a>],
		span: Span,
		ctx: &mut TraverseCtx<'a>,
	) -> Expression<'a> {
		let elements = Vec::from_iter_in(
			names.iter().map(|name| {
				Expression::StringLiteral(ctx.alloc(StringLiteral {
					span,
					value: *name,
					raw: None,
					lossy: false,
				}))
				.into()
			}),
			self.allocator,
		);
		Expression::ArrayExpression(ctx.alloc(ArrayExpression {
			span,
			elements,
			trailing_comma: None,
		}))
	}
}
