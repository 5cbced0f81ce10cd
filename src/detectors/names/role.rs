//! Name-based role classification for Vue identifiers.
//!
//! The miner has no structural metadata for bindings found outside the
//! `methods`/`computed`/`watch` blocks, so their role is guessed from the name.

use once_cell::sync::Lazy;
use std::collections::HashSet;

use super::config::VueRole;

/// Options API lifecycle hooks (Vue 2 and Vue 3)
pub const OPTIONS_LIFECYCLE_HOOKS: [&str; 15] = [
    "beforeCreate",
    "created",
    "beforeMount",
    "mounted",
    "beforeUpdate",
    "updated",
    "beforeUnmount",
    "unmounted",
    "beforeDestroy",
    "destroyed",
    "activated",
    "deactivated",
    "errorCaptured",
    "renderTracked",
    "renderTriggered",
];

/// Composition API lifecycle registration functions
pub const COMPOSITION_LIFECYCLE_HOOKS: [&str; 11] = [
    "onBeforeMount",
    "onMounted",
    "onBeforeUpdate",
    "onUpdated",
    "onBeforeUnmount",
    "onUnmounted",
    "onActivated",
    "onDeactivated",
    "onErrorCaptured",
    "onRenderTracked",
    "onRenderTriggered",
];

static LIFECYCLE_HOOKS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    OPTIONS_LIFECYCLE_HOOKS
        .iter()
        .chain(COMPOSITION_LIFECYCLE_HOOKS.iter())
        .copied()
        .collect()
});

const EVENT_HANDLER_PREFIXES: [&str; 2] = ["handle", "on"];
const ACCESSOR_PREFIXES: [&str; 5] = ["get", "set", "is", "has", "can"];

/// `true` for framework-reserved lifecycle names (both API styles).
pub fn is_lifecycle_hook(name: &str) -> bool {
    LIFECYCLE_HOOKS.contains(name)
}

/// Guess the role of a function-like binding from its name.
pub fn classify_role(name: &str) -> VueRole {
    if is_lifecycle_hook(name) {
        VueRole::Lifecycle
    } else if EVENT_HANDLER_PREFIXES.iter().any(|p| name.starts_with(p)) {
        VueRole::EventHandler
    } else if ACCESSOR_PREFIXES.iter().any(|p| name.starts_with(p)) {
        VueRole::Computed
    } else {
        VueRole::Method
    }
}
