//! Patch-flag bitmask values attached to optimized vnode constructor calls.
//!
//! A patch flag is a hint to the runtime describing which parts of an element
//! may change between renders, so the patcher can take a fast path instead of
//! re-creating the node. [`BAIL`] is the sentinel meaning "do not fast-path;
//! treat as fully dynamic".

/// Element with dynamic text content.
pub const TEXT: i32 = 1;
/// Element with a dynamic `class` binding.
pub const CLASS: i32 = 1 << 1;
/// Element with a dynamic `style` binding.
pub const STYLE: i32 = 1 << 2;
/// Element with dynamic non-class/style props; paired with the
/// dynamic-prop-name list.
pub const PROPS: i32 = 1 << 3;
/// Element whose prop set cannot be known statically (spread attributes);
/// requires a full props diff.
pub const FULL_PROPS: i32 = 1 << 4;
/// Element with event listeners, which need to be attached during hydration.
pub const HYDRATE_EVENTS: i32 = 1 << 5;
/// Fragment whose children order never changes.
pub const STABLE_FRAGMENT: i32 = 1 << 6;
/// Fragment with keyed or partially keyed children.
pub const KEYED_FRAGMENT: i32 = 1 << 7;
/// Fragment with unkeyed children.
pub const UNKEYED_FRAGMENT: i32 = 1 << 8;
/// Element needing non-props patching, such as `ref` or directives.
pub const NEED_PATCH: i32 = 1 << 9;
/// Component with dynamic slots.
pub const DYNAMIC_SLOTS: i32 = 1 << 10;
/// Hoisted static node; never patched.
pub const HOISTED: i32 = -1;
/// Diffing bail sentinel; the node exits optimized mode entirely.
pub const BAIL: i32 = -2;
