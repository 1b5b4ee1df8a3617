//! Holds constant string values used throughout the VJSX compiler.
#![allow(clippy::missing_docs_in_private_items)]
use oxc::span::Atom;

pub const RUNTIME_MODULE: &str = "vue";
pub const COMPAT_PROPS_MODULE: &str = "@ant-design-vue/babel-helper-vue-compatible-props";

pub const VUE_NS_IDENT: &str = "_vue";
pub const COMPAT_PROPS_IDENT: &str = "_compatibleProps";

pub const FRAGMENT: &str = "Fragment";
pub const DEFAULT_SLOT: &str = "default";

pub const CLASS_ATTR: &str = "class";
pub const STYLE_ATTR: &str = "style";
pub const KEY_ATTR: &str = "key";
pub const REF_ATTR: &str = "ref";
pub const DIRECTIVE_PREFIX: &str = "v-";
pub const SLOTS_ATTR: &str = "v-slots";

pub const VUE_NS: Atom<'static> = Atom::new_const(VUE_NS_IDENT);
pub const COMPAT_PROPS: Atom<'static> = Atom::new_const(COMPAT_PROPS_IDENT);
