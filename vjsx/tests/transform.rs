//! End-to-end tests driving parse, semantic analysis, transform and codegen
//! over source strings.

use oxc::{
	allocator::Allocator,
	codegen::Codegen,
	semantic::SemanticBuilder,
	span::{SourceType, Span},
};
use vjsx::{TransformError, TransformOptions};

/// Compiles `source` and returns the generated code.
fn compile(source: &str, options: TransformOptions<'static>) -> Result<String, TransformError> {
	let allocator = Allocator::default();
	let parse_result = oxc::parser::Parser::new(&allocator, source, SourceType::jsx()).parse();
	assert!(!parse_result.panicked, "parser panicked on {source:?}");
	assert!(parse_result.errors.is_empty(), "parse errors: {:?}", parse_result.errors);

	let mut program = parse_result.program;
	let semantic = SemanticBuilder::new()
		.with_check_syntax_error(true)
		.build(&program);
	assert!(semantic.errors.is_empty(), "semantic errors: {:?}", semantic.errors);

	let scoping = semantic.semantic.into_scoping();
	vjsx::transform(&allocator, &mut program, scoping, options)?;

	Ok(Codegen::new().build(&program).code)
}

#[test]
fn childless_element_gets_two_arguments() {
	let code = compile("const a = <div />;", TransformOptions::default()).unwrap();
	assert!(code.contains("_h(\"div\", null)"), "{code}");
	assert!(code.contains("import { h as _h } from \"vue\";"), "{code}");
}

#[test]
fn static_and_dynamic_props_are_collected() {
	let code = compile(
		"const el = <div class={x} id=\"a\" hidden>{y} </div>;",
		TransformOptions::default(),
	)
	.unwrap();
	assert!(code.contains("\"class\": x"), "{code}");
	assert!(code.contains("\"id\": \"a\""), "{code}");
	assert!(code.contains("\"hidden\": true"), "{code}");
	// The trailing whitespace-only text child is dropped.
	assert!(code.contains("[y])"), "{code}");
}

#[test]
fn text_children_become_text_vnodes() {
	let code = compile("const a = <div>hello</div>;", TransformOptions::default()).unwrap();
	assert!(code.contains("_createTextVNode(\"hello\")"), "{code}");
	assert!(
		code.contains("createTextVNode as _createTextVNode"),
		"{code}"
	);
}

#[test]
fn no_flag_arguments_without_optimize() {
	let code = compile(
		"const a = <div id={x}>{y}</div>;",
		TransformOptions::default(),
	)
	.unwrap();
	assert!(code.contains("_h("), "{code}");
	assert!(!code.contains("_createVNode("), "{code}");
	assert!(!code.contains("[y], 8"), "{code}");
}

#[test]
fn optimize_emits_patch_flag_and_dynamic_prop_names() {
	let options = TransformOptions { optimize: true, ..TransformOptions::default() };
	let code = compile("const a = <div id={x}>{y}</div>;", options).unwrap();
	assert!(code.contains("_createVNode(\"div\""), "{code}");
	assert!(code.contains("[y], 8, [\"id\"])"), "{code}");
}

#[test]
fn listed_span_bails_out_of_the_fast_path() {
	let options = TransformOptions {
		optimize: true,
		bail_spans: vec![Span::new(10, 31)],
		..TransformOptions::default()
	};
	let code = compile("const a = <div id={x}>{y}</div>;", options).unwrap();
	assert!(code.contains("[y], -2, [\"id\"])"), "{code}");
	assert!(!code.contains(", 8,"), "{code}");
}

#[test]
fn childless_element_omits_flags_even_when_optimized() {
	let options = TransformOptions { optimize: true, ..TransformOptions::default() };
	let code = compile("const a = <div id={x} />;", options).unwrap();
	// No third argument, so the flag arguments are omitted with it.
	assert!(code.contains("_createVNode(\"div\", { \"id\": x });"), "{code}");
}

#[test]
fn fragments_share_one_namespace_import() {
	let code = compile(
		"const a = <><span /></>; const b = <></>;",
		TransformOptions::default(),
	)
	.unwrap();
	// The fragment tag is a member expression, so its children go through
	// the component slot path.
	assert!(
		code.contains("_h(_vue.Fragment, null, { default: () => [_h(\"span\", null)] })"),
		"{code}"
	);
	assert!(code.contains("_h(_vue.Fragment, null)"), "{code}");
	assert_eq!(code.matches("import * as _vue from \"vue\";").count(), 1, "{code}");
}

#[test]
fn component_children_become_a_default_slot() {
	let code = compile(
		"const a = <Comp><span /></Comp>;",
		TransformOptions::default(),
	)
	.unwrap();
	assert!(code.contains("_h(Comp, null, {"), "{code}");
	assert!(code.contains("default: () => [_h(\"span\", null)]"), "{code}");
}

#[test]
fn explicit_slots_merge_into_the_slot_object() {
	let code = compile(
		"const a = <Comp v-slots={{ footer: () => [] }}><span /></Comp>;",
		TransformOptions::default(),
	)
	.unwrap();
	assert!(code.contains("default: () => ["), "{code}");
	assert!(code.contains("footer: () => []"), "{code}");
}

#[test]
fn directives_wrap_the_constructor_call() {
	let code = compile(
		"const a = <input v-show={visible} />;",
		TransformOptions::default(),
	)
	.unwrap();
	assert!(code.contains("_withDirectives(_h(\"input\", null), ["), "{code}");
	assert!(code.contains("_resolveDirective(\"show\"), visible"), "{code}");
}

#[test]
fn directive_array_preserves_source_order() {
	let code = compile(
		"const el = <input v-show={visible} v-model={value} />;",
		TransformOptions::default(),
	)
	.unwrap();
	assert!(
		code.contains(
			"[[_resolveDirective(\"show\"), visible], [_resolveDirective(\"model\"), value]]"
		),
		"{code}"
	);
}

#[test]
fn slots_without_children_still_form_a_slot_object() {
	let code = compile(
		"const a = <Comp v-slots={mySlots} />;",
		TransformOptions::default(),
	)
	.unwrap();
	assert!(code.contains("_h(Comp, null, { ...mySlots })"), "{code}");
	assert!(!code.contains("default:"), "{code}");
}

#[test]
fn whitespace_only_string_containers_are_dropped() {
	let code = compile(
		"const el = <div class={x}>{a}{' '}</div>;",
		TransformOptions::default(),
	)
	.unwrap();
	assert!(code.contains("_h(\"div\", { \"class\": x }, [a])"), "{code}");
	assert!(!code.contains("\" \""), "{code}");
}

#[test]
fn spread_children_stay_spread() {
	let code = compile(
		"const a = <div>{...items}</div>;",
		TransformOptions::default(),
	)
	.unwrap();
	assert!(code.contains("[...items]"), "{code}");
}

#[test]
fn spread_attributes_become_object_spreads() {
	let options = TransformOptions { optimize: true, ..TransformOptions::default() };
	let code = compile("const a = <div id={x} {...rest}>{y}</div>;", options).unwrap();
	assert!(code.contains("...rest"), "{code}");
	// A spread forces the full-props flag and drops the per-prop name list.
	assert!(code.contains("[y], 24)"), "{code}");
	assert!(!code.contains("[\"id\"]"), "{code}");
}

#[test]
fn compat_props_wraps_every_props_argument() {
	let options = TransformOptions { compatible_props: true, ..TransformOptions::default() };
	let code = compile("const a = <div id={x} />;", options).unwrap();
	assert!(code.contains("_compatibleProps({ \"id\": x })"), "{code}");
	assert!(
		code.contains(
			"import _compatibleProps from \"@ant-design-vue/babel-helper-vue-compatible-props\";"
		),
		"{code}"
	);
}

#[test]
fn hand_written_helper_imports_are_consolidated() {
	let code = compile(
		"import { createTextVNode as _createTextVNode } from \"vue\";\nconst a = <div>hi</div>;",
		TransformOptions::default(),
	)
	.unwrap();
	assert_eq!(code.matches("createTextVNode as _createTextVNode").count(), 1, "{code}");
	assert_eq!(code.matches("from \"vue\"").count(), 1, "{code}");
}

#[test]
fn runtime_module_is_configurable() {
	let options =
		TransformOptions { runtime_module: "custom-runtime", ..TransformOptions::default() };
	let code = compile("const a = <div />;", options).unwrap();
	assert!(code.contains("import { h as _h } from \"custom-runtime\";"), "{code}");
}

#[test]
fn fragment_valued_attribute_is_a_fatal_error() {
	let result = compile("const a = <div thing=<></> />;", TransformOptions::default());
	assert!(matches!(
		result,
		Err(TransformError::UnsupportedChildKind { kind: "JSXFragment", .. })
	));
}

#[test]
fn bare_identifier_children_report_reactive_reference_sites() {
	let source = "let y = 1; const a = <div>{y}</div>; console.log(y);";
	let allocator = Allocator::default();
	let parse_result = oxc::parser::Parser::new(&allocator, source, SourceType::jsx()).parse();
	assert!(parse_result.errors.is_empty());

	let mut program = parse_result.program;
	let semantic = SemanticBuilder::new()
		.with_check_syntax_error(true)
		.build(&program);
	assert!(semantic.errors.is_empty());

	let scoping = semantic.semantic.into_scoping();
	let result =
		vjsx::transform(&allocator, &mut program, scoping, TransformOptions::default()).unwrap();
	// Both reads of `y` resolve to the same binding and are reported.
	assert!(result.reactive_references.len() >= 2, "{:?}", result.reactive_references.len());
}
