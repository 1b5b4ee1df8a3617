//! CLI for the VJSX compiler.
use std::{
	io::{Read, Write},
	sync::Arc,
};

use clap::Parser;
use oxc::{
	allocator::Allocator,
	codegen::{Codegen, CodegenOptions},
	diagnostics::Severity,
	mangler::{MangleOptions, MangleOptionsKeepNames},
	semantic::SemanticBuilder,
	span::SourceType,
};
use vjsx::TransformOptions;

/// The VJSX compiler.
#[derive(Debug, Parser)]
struct Args {
	/// Where to output the compiled file. Defaults to
	/// stdout; intermediate folders must exist
	#[arg(short = 'o', long = "output")]
	output: Option<String>,
	/// The module to import the vnode helpers from
	#[arg(short = 'i', long = "import", default_value = "vue")]
	import_from: String,
	/// Emit `createVNode` calls annotated with patch flags
	/// and dynamic prop names
	#[arg(short = 'O', long = "optimize")]
	optimize: bool,
	/// Route every props object through the compatibility
	/// wrapper helper
	#[arg(long = "compat-props")]
	compat_props: bool,
	/// Treat warnings as errors
	#[arg(short = 'W')]
	warnings_as_errors: bool,
	/// Don't minify the output
	#[arg(short = 'M', long = "no-minify")]
	no_minify: bool,
	/// Allow typescript syntax in the input
	#[arg(short = 'T', long = "typescript")]
	typescript: bool,
	/// The file to compile (defaults to stdin)
	entry_point: Option<String>,
}

fn main() {
	let args = Args::parse();

	let source = if let Some(ref entry) = args.entry_point {
		std::fs::read_to_string(entry).expect("failed to read entry point")
	} else {
		let mut str = String::with_capacity(4096);
		std::io::stdin()
			.read_to_string(&mut str)
			.expect("failed to read stdin");
		str
	};

	let source = Arc::new(source);
	let mut errors = 0;

	let allocator = Allocator::default();
	let source_type = if args.typescript { SourceType::tsx() } else { SourceType::jsx() };
	let parse_result = oxc::parser::Parser::new(&allocator, &source, source_type).parse();
	if parse_result.panicked || !parse_result.errors.is_empty() {
		if parse_result.errors.is_empty() {
			eprintln!("parser panicked, but emitted no errors");
			std::process::exit(1);
		} else {
			for mut error in parse_result.errors {
				if args.warnings_as_errors {
					error = error.with_severity(Severity::Error);
				}

				if error.severity == Severity::Error {
					errors += 1;
				}

				eprintln!("{:?}", error.with_source_code(Arc::clone(&source)));
			}
		}

		if errors > 0 {
			eprintln!("\nexiting due to {errors} errors");
			std::process::exit(1);
		}
	}

	let mut program = parse_result.program;

	let semantic = SemanticBuilder::new()
		.with_check_syntax_error(true)
		.build(&program);

	if !semantic.errors.is_empty() {
		errors = 0;
		for mut error in semantic.errors {
			if args.warnings_as_errors {
				error = error.with_severity(Severity::Error);
			}

			if error.severity == Severity::Error {
				errors += 1;
			}

			eprintln!("{:?}", error.with_source_code(Arc::clone(&source)));
		}
		if errors > 0 {
			eprintln!("\nexiting due to {errors} errors");
			std::process::exit(1);
		}
	}

	let scoping = semantic.semantic.into_scoping();
	let options = TransformOptions {
		optimize: args.optimize,
		compatible_props: args.compat_props,
		runtime_module: &args.import_from,
		..TransformOptions::default()
	};

	let result = match vjsx::transform(&allocator, &mut program, scoping, options) {
		Ok(result) => result,
		Err(error) => {
			eprintln!(
				"{:?}",
				error.into_diagnostic().with_source_code(Arc::clone(&source))
			);
			eprintln!("\nexiting due to 1 error");
			std::process::exit(1);
		}
	};

	let mut codegen_options = CodegenOptions::default();
	codegen_options.minify = !args.no_minify;
	codegen_options.comments = args.no_minify;

	let scoping = if args.no_minify {
		result.scoping
	} else {
		let semantic = SemanticBuilder::new()
			.with_check_syntax_error(false)
			.with_scope_tree_child_ids(true)
			.build(&program);

		assert!(semantic.errors.is_empty());

		let mut options = MangleOptions::default();
		options.keep_names = MangleOptionsKeepNames::all_false();
		options.top_level = true;

		oxc::mangler::Mangler::new()
			.with_options(options)
			.build_with_semantic(semantic.semantic, &program)
	};

	let generated = Codegen::new()
		.with_options(codegen_options)
		.with_scoping(Some(scoping))
		.build(&program);

	if let Some(output) = args.output {
		let mut fd = std::fs::File::create(&output).expect("failed to create output file");
		fd.write_all(generated.code.as_bytes())
			.expect("failed to write to output");
	} else {
		std::io::stdout()
			.write_all(generated.code.as_bytes())
			.expect("failed to write to stdout");
	}
}
