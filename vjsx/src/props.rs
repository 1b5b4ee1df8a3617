//! Props and directive extraction.
//!
//! Builds the [`PropsDescriptor`] for one element: the tag expression, the
//! props object (or a retained `null`), collected directive applications, the
//! computed patch flag, dynamic prop names, and the optional slots
//! descriptor.

use std::cell::Cell;

use oxc::{
	allocator::{CloneIn, FromIn, Vec},
	ast::ast::{
		ArrayExpression, BooleanLiteral, Expression, IdentifierReference, JSXAttribute,
		JSXAttributeItem, JSXAttributeName, JSXAttributeValue, JSXElement, JSXElementName,
		JSXExpression, NullLiteral, ObjectExpression, ObjectProperty, ObjectPropertyKind,
		PropertyKey, PropertyKind, SpreadElement, StringLiteral,
	},
	span::{Atom, Span},
};
use oxc_traverse::TraverseCtx;

use crate::{
	constants::{CLASS_ATTR, DIRECTIVE_PREFIX, KEY_ATTR, REF_ATTR, SLOTS_ATTR, STYLE_ATTR},
	error::TransformError,
	helpers::Helper,
	patch_flags,
	traverser::JsxTraverser,
};

/// Structured description of one element's tag, props and directives.
pub struct PropsDescriptor<'a> {
	/// Expression identifying the element type: a string literal for native
	/// tags, an identifier or member expression for components.
	pub tag: Expression<'a>,
	/// The props expression; a `null` literal when the element has none.
	/// `null` is a retained value, not an omitted argument.
	pub props: Expression<'a>,
	/// Whether the tag refers to a component rather than a native element.
	pub is_component: bool,
	/// Directive-application entries, in source order.
	pub directives: std::vec::Vec<Expression<'a>>,
	/// Patch-flag bitmask; 0 means no flag.
	pub patch_flag: i32,
	/// Dynamic prop names in insertion order, without duplicates.
	pub dynamic_prop_names: std::vec::Vec<Atom<'a>>,
	/// Named-slot content descriptor, when supplied via `v-slots`.
	pub slots: Option<Expression<'a>>,
}

/// Whether an attribute name is an event handler (`onX…`).
fn is_event(name: &str) -> bool {
	name.len() > 2
		&& name.starts_with("on")
		&& name[2..].chars().next().is_some_and(char::is_uppercase)
}

/// The attribute's name as a single atom, plus its span. Namespaced names
/// are flattened to `ns:name`.
fn attribute_name<'a>(
	name: &JSXAttributeName<'a>,
	traverser: &JsxTraverser<'a>,
) -> (Atom<'a>, Span) {
	match name {
		JSXAttributeName::Identifier(ident) => (ident.name, ident.span),
		JSXAttributeName::NamespacedName(ns) => {
			let flat = format!("{}:{}", ns.namespace.name, ns.name.name);
			(Atom::from_in(flat.as_str(), traverser.allocator), ns.span)
		}
	}
}

impl<'a> JsxTraverser<'a> {
	/// Builds the props descriptor for `node`.
	pub(crate) fn build_props(
		&mut self,
		node: &mut JSXElement<'a>,
		ctx: &mut TraverseCtx<'a>,
	) -> Result<PropsDescriptor<'a>, TransformError> {
		let span = node.span;
		let (tag, is_component) = self.element_tag(&node.opening_element.name, ctx);

		let mut properties: Vec<'a, ObjectPropertyKind<'a>> = Vec::new_in(self.allocator);
		let mut directives = std::vec::Vec::new();
		let mut dynamic_prop_names: std::vec::Vec<Atom<'a>> = std::vec::Vec::new();
		let mut patch_flag = 0i32;
		let mut slots = None;
		let mut has_spread = false;

		for item in node.opening_element.attributes.iter_mut() {
			match item {
				JSXAttributeItem::Attribute(attr) => {
					let (name, name_span) = attribute_name(&attr.name, self);

					if name.as_str() == SLOTS_ATTR {
						if let Some(JSXAttributeValue::ExpressionContainer(container)) =
							&attr.value
						{
							if !matches!(container.expression, JSXExpression::EmptyExpression(_)) {
								slots = Some(
									container
										.expression
										.clone_in(self.allocator)
										.into_expression(),
								);
							}
						}
						continue;
					}

					if let Some(directive) = name.as_str().strip_prefix(DIRECTIVE_PREFIX) {
						let (value, _) = self.attribute_value(attr, ctx)?;
						directives.push(self.directive_entry(directive, name_span, value, ctx));
						patch_flag |= patch_flags::NEED_PATCH;
						continue;
					}

					let (value, is_dynamic) = self.attribute_value(attr, ctx)?;

					if name.as_str() == REF_ATTR {
						patch_flag |= patch_flags::NEED_PATCH;
					} else if is_dynamic {
						match name.as_str() {
							CLASS_ATTR => patch_flag |= patch_flags::CLASS,
							STYLE_ATTR => patch_flag |= patch_flags::STYLE,
							KEY_ATTR => {}
							other if is_event(other) => {
								patch_flag |= patch_flags::HYDRATE_EVENTS;
								if !dynamic_prop_names.contains(&name) {
									dynamic_prop_names.push(name);
								}
							}
							_ => {
								patch_flag |= patch_flags::PROPS;
								if !dynamic_prop_names.contains(&name) {
									dynamic_prop_names.push(name);
								}
							}
						}
					}

					properties.push(ObjectPropertyKind::ObjectProperty(ctx.alloc(
						ObjectProperty {
							span: attr.span,
							kind: PropertyKind::Init,
							key: PropertyKey::StringLiteral(ctx.alloc(StringLiteral {
								span: name_span,
								value: name,
								raw: None,
								lossy: false,
							})),
							value,
							method: false,
							shorthand: false,
							computed: false,
						},
					)));
				}
				JSXAttributeItem::SpreadAttribute(spread) => {
					has_spread = true;
					properties.push(ObjectPropertyKind::SpreadProperty(ctx.alloc(
						SpreadElement {
							span: spread.span,
							argument: spread.argument.clone_in(self.allocator),
						},
					)));
				}
			}
		}

		if has_spread {
			// With a spread the prop set is unknowable statically; force a
			// full-props diff and drop the per-prop fast path.
			patch_flag |= patch_flags::FULL_PROPS;
			dynamic_prop_names.clear();
		}

		let props = if properties.is_empty() {
			Expression::NullLiteral(ctx.alloc(NullLiteral { span }))
		} else {
			Expression::ObjectExpression(ctx.alloc(ObjectExpression {
				span,
				properties,
				trailing_comma: None,
			}))
		};

		Ok(PropsDescriptor {
			tag,
			props,
			is_component,
			directives,
			patch_flag,
			dynamic_prop_names,
			slots,
		})
	}

	/// Resolves the tag expression and whether it names a component.
	fn element_tag(
		&mut self,
		name: &JSXElementName<'a>,
		ctx: &mut TraverseCtx<'a>,
	) -> (Expression<'a>, bool) {
		match name {
			JSXElementName::Identifier(ident) => {
				if ident.name.chars().next().is_some_and(char::is_uppercase) {
					(
						Expression::Identifier(ctx.alloc(IdentifierReference {
							span: ident.span,
							name: ident.name,
							reference_id: Cell::new(None),
						})),
						true,
					)
				} else {
					(self.tag_literal(ident.name, ident.span, ctx), false)
				}
			}
			JSXElementName::IdentifierReference(ident) => {
				if ident.name.chars().next().is_some_and(char::is_uppercase) {
					(Expression::Identifier(ident.clone_in(self.allocator)), true)
				} else {
					(self.tag_literal(ident.name, ident.span, ctx), false)
				}
			}
			JSXElementName::NamespacedName(ns) => {
				let flat = format!("{}:{}", ns.namespace.name, ns.name.name);
				let atom = Atom::from_in(flat.as_str(), self.allocator);
				(self.tag_literal(atom, ns.span, ctx), false)
			}
			JSXElementName::MemberExpression(member) => {
				(self.member_to_expression(ctx, member), true)
			}
			JSXElementName::ThisExpression(this) => {
				(Expression::ThisExpression(this.clone_in(self.allocator)), true)
			}
		}
	}

	/// A string-literal tag for native elements.
	fn tag_literal(
		&self,
		name: Atom<'a>,
		span: Span,
		ctx: &mut TraverseCtx<'a>,
	) -> Expression<'a> {
		Expression::StringLiteral(ctx.alloc(StringLiteral {
			span,
			value: name,
			raw: None,
			lossy: false,
		}))
	}

	/// Converts an attribute value to an expression, reporting whether the
	/// value is dynamic. A bare attribute becomes `true`.
	fn attribute_value(
		&mut self,
		attr: &mut JSXAttribute<'a>,
		ctx: &mut TraverseCtx<'a>,
	) -> Result<(Expression<'a>, bool), TransformError> {
		let span = attr.span;
		match &mut attr.value {
			None => {
				Ok((
					Expression::BooleanLiteral(ctx.alloc(BooleanLiteral { span, value: true })),
					false,
				))
			}
			Some(JSXAttributeValue::StringLiteral(lit)) => {
				Ok((Expression::StringLiteral(lit.clone_in(self.allocator)), false))
			}
			Some(JSXAttributeValue::ExpressionContainer(container)) => {
				match &container.expression {
					JSXExpression::EmptyExpression(_) => {
						Ok((
							Expression::BooleanLiteral(
								ctx.alloc(BooleanLiteral { span, value: true }),
							),
							false,
						))
					}
					expression => {
						Ok((expression.clone_in(self.allocator).into_expression(), true))
					}
				}
			}
			Some(JSXAttributeValue::Element(element)) => {
				Ok((self.transform_jsx_element(element, ctx)?, false))
			}
			Some(JSXAttributeValue::Fragment(fragment)) => {
				Err(TransformError::UnsupportedChildKind {
					kind: "JSXFragment",
					span: fragment.span,
				})
			}
		}
	}

	/// One directive-application entry: `[resolveDirective("name"), value]`.
	fn directive_entry(
		&mut self,
		directive: &'a str,
		span: Span,
		value: Expression<'a>,
		ctx: &mut TraverseCtx<'a>,
	) -> Expression<'a> {
		let name_literal = Expression::StringLiteral(ctx.alloc(StringLiteral {
			span,
			value: Atom::from(directive),
			raw: None,
			lossy: false,
		}));
		let resolve = self.helper_call(
			Helper::ResolveDirective,
			span,
			Vec::from_array_in([name_literal.into()], self.allocator),
			ctx,
		);
		Expression::ArrayExpression(ctx.alloc(ArrayExpression {
			span,
			elements: Vec::from_array_in([resolve.into(), value.into()], self.allocator),
			trailing_comma: None,
		}))
	}
}
