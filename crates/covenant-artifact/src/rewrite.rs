//! Instruction token rewriting
//!
//! Exact-match substitution of instruction tokens. Only `asm` is touched;
//! function inputs and requirements pass through unchanged.

use crate::model::ArtifactFunction;

/// First character of every placeholder token
pub const PLACEHOLDER_PREFIX: char = '$';

/// Placeholder token for a parameter name (`"$" + name`)
#[inline]
#[must_use]
pub fn placeholder(name: &str) -> String {
    format!("{PLACEHOLDER_PREFIX}{name}")
}

/// Replace every token equal to `target` with `replacement`
///
/// Matching is exact string equality: a rewrite targeting `"$foobar"` never
/// touches `"$foo"`, and vice versa. Token order is preserved.
///
/// # Performance
/// O(n) where n = number of instruction tokens
#[must_use]
pub fn replace_token(function: &ArtifactFunction, target: &str, replacement: &str) -> ArtifactFunction {
    ArtifactFunction {
        name: function.name.clone(),
        function_inputs: function.function_inputs.clone(),
        require: function.require.clone(),
        asm: function
            .asm
            .iter()
            .map(|token| {
                if token == target {
                    replacement.to_string()
                } else {
                    token.clone()
                }
            })
            .collect(),
    }
}

/// Apply [`replace_token`] to every function
///
/// Functions that do not contain `target` are cloned as-is.
#[must_use]
pub fn rewrite_functions(
    functions: &[ArtifactFunction],
    target: &str,
    replacement: &str,
) -> Vec<ArtifactFunction> {
    functions
        .iter()
        .map(|f| {
            if f.contains_token(target) {
                replace_token(f, target, replacement)
            } else {
                f.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Parameter, Requirement};
    use covenant_primitive::PrimitiveType;
    use serde_json::json;

    fn function() -> ArtifactFunction {
        ArtifactFunction::new("f")
            .with_input(Parameter::new("$foo", PrimitiveType::Bytes))
            .with_requirement(Requirement(json!({"type": "output", "expected": "$foo"})))
            .with_asm(["$foo", "OP_SWAP", "$foobar", "$foo", "foo"])
    }

    #[test]
    fn placeholder_prefixes_dollar() {
        assert_eq!(placeholder("owner"), "$owner");
        assert_eq!(placeholder(""), "$");
    }

    #[test]
    fn replaces_every_exact_match() {
        let out = replace_token(&function(), "$foo", "00ff");
        assert_eq!(out.asm, vec!["00ff", "OP_SWAP", "$foobar", "00ff", "foo"]);
    }

    #[test]
    fn longer_target_leaves_prefix_token_alone() {
        let out = replace_token(&function(), "$foobar", "aa");
        assert_eq!(out.asm, vec!["$foo", "OP_SWAP", "aa", "$foo", "foo"]);
    }

    #[test]
    fn inputs_and_requirements_untouched() {
        let before = function();
        let out = replace_token(&before, "$foo", "00");
        assert_eq!(out.name, before.name);
        assert_eq!(out.function_inputs, before.function_inputs);
        assert_eq!(out.require, before.require);
    }

    #[test]
    fn no_match_is_identity() {
        let before = function();
        assert_eq!(replace_token(&before, "$missing", "00"), before);
    }

    #[test]
    fn rewrite_functions_visits_all() {
        let functions = vec![
            function(),
            ArtifactFunction::new("g").with_asm(["OP_1"]),
            ArtifactFunction::new("h").with_asm(["$foo"]),
        ];
        let out = rewrite_functions(&functions, "$foo", "$bar");
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].count_token("$bar"), 2);
        assert_eq!(out[1], functions[1]);
        assert_eq!(out[2].asm, vec!["$bar"]);
        assert!(functions[0].contains_token("$foo"));
    }
}
