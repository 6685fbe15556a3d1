//! Starter project and script generators for Godot, Unity and Phaser.
//!
//! Each ecosystem module turns a caller-supplied name (and, for scripts, a
//! template kind) into a [`ScaffoldPlan`]. Plans are pure data; the
//! [`ScaffoldWriter`] puts them on disk under the project root.
//!
//! Names are embedded verbatim. A name that is not a valid identifier in the
//! target language produces a script the engine will reject; checking that
//! is left to the caller.

pub mod godot;
mod plan;
pub mod phaser;
pub mod unity;

pub use plan::{PlanEntry, ScaffoldPlan, ScaffoldWriter};

/// Directory (relative to the project root) all generators write into.
pub const SRC_DIR: &str = "src";

/// Marker replaced by the caller-supplied name in templates.
const NAME_SLOT: &str = "{{name}}";

/// Substitute every name marker in `template`.
fn fill(template: &str, name: &str) -> String {
    template.replace(NAME_SLOT, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_replaces_every_slot() {
        assert_eq!(fill("{{name}} vs {{name}}", "Hero"), "Hero vs Hero");
    }

    #[test]
    fn test_fill_keeps_braces_verbatim() {
        assert_eq!(fill("class {{name}} { }", "A"), "class A { }");
    }
}
