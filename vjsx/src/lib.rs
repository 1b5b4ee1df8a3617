//! VJSX compiles JSX syntax trees into Vue-style vnode constructor calls.
//!
//! The pass rewrites each JSX node in place: fragments become `_vue.Fragment`
//! elements, elements become `h`/`createVNode` call expressions, and every
//! runtime helper the rewrite referenced is bound by one consolidated import
//! statement at the top of the file.
//!
//! The entry point is [`transform`]; the host parses and runs semantic
//! analysis first, then hands the program over:
//!
//! ```ignore
//! let result = vjsx::transform(&allocator, &mut program, scoping, options)?;
//! ```

mod constants;
mod error;
mod helpers;
mod options;
pub mod patch_flags;
mod props;
mod state;
mod traverser;
mod utils;

use oxc::{
	allocator::Allocator,
	ast::ast::Program,
	semantic::{ReferenceId, Scoping},
};

pub use error::TransformError;
pub use options::TransformOptions;

use crate::traverser::JsxTraverser;

/// The outcome of one successful file transformation.
pub struct JsxTransformResult {
	/// The [`Scoping`] instance after transformation.
	pub scoping: Scoping,
	/// Reference sites of bindings used as bare identifier children. The
	/// host pipeline rewrites these for reactive access.
	pub reactive_references: Vec<ReferenceId>,
}

/// Transforms all JSX in `program`, in place.
///
/// On error the program is left partially rewritten and must be discarded;
/// errors are fatal at file granularity.
pub fn transform<'a>(
	allocator: &'a Allocator,
	program: &mut Program<'a>,
	scoping: Scoping,
	options: TransformOptions<'a>,
) -> Result<JsxTransformResult, TransformError> {
	let root_scope = scoping.root_scope_id();
	let mut traverser = JsxTraverser::new_in(options, root_scope, allocator);
	let scoping = oxc_traverse::traverse_mut(&mut traverser, allocator, program, scoping);

	if let Some(error) = traverser.fatal {
		return Err(error);
	}

	Ok(JsxTransformResult {
		scoping,
		reactive_references: traverser.state.reactive_references,
	})
}
