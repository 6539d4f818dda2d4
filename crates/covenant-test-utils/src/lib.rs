//! Testing utilities for covenant workspace
//!
//! Shared fixtures and proptest strategies.

#![allow(missing_docs)]

use covenant_artifact::{export_artifact, Artifact, ArtifactFunction, Binding, Parameter};
use covenant_primitive::{Argument, PrimitiveType};
use proptest::prelude::*;
use serde_json::json;
use std::path::{Path, PathBuf};

/// Two number inputs `a`, `b`, referenced from two functions
pub fn pair_artifact() -> Artifact {
    Artifact::new("Pair")
        .with_constructor_input(Parameter::new("a", PrimitiveType::Number))
        .with_constructor_input(Parameter::new("b", PrimitiveType::Number))
        .with_function(ArtifactFunction::new("sum").with_asm(["$a", "$b", "OP_ADD", "OP_VERIFY"]))
        .with_function(ArtifactFunction::new("onlyA").with_asm(["$a", "OP_EQUAL"]))
}

/// Realistic timelocked vault with requirements and function inputs
pub fn vault_artifact() -> Artifact {
    Artifact::new("Vault")
        .with_constructor_input(Parameter::new("owner", PrimitiveType::XOnlyPubKey))
        .with_constructor_input(Parameter::new("recovery", PrimitiveType::XOnlyPubKey))
        .with_constructor_input(Parameter::new("delay", PrimitiveType::Number))
        .with_function(
            ArtifactFunction::new("spend")
                .with_input(Parameter::new("ownerSig", PrimitiveType::Signature))
                .with_requirement(json!({"type": "input", "atIndex": 0}))
                .with_asm(["$owner", "OP_CHECKSIG"]),
        )
        .with_function(
            ArtifactFunction::new("recover")
                .with_input(Parameter::new("recoverySig", PrimitiveType::Signature))
                .with_requirement(json!({"type": "older", "expected": "$delay"}))
                .with_asm([
                    "$delay",
                    "OP_CHECKSEQUENCEVERIFY",
                    "OP_DROP",
                    "$recovery",
                    "OP_CHECKSIG",
                ]),
        )
}

/// Export `artifact` as `dir/name`, returning the path
pub fn write_artifact(dir: &Path, name: &str, artifact: &Artifact) -> PathBuf {
    let path = dir.join(name);
    export_artifact(artifact, &path).unwrap();
    path
}

/// Name of the `i`-th generated constructor input
pub fn generated_name(i: usize) -> String {
    format!("p{i}")
}

/// Artifacts with 0..6 number inputs `p0, p1, ...`
///
/// Instructions mix placeholders, literals and near-miss decoys such as
/// `"$p0x"` and `"p0"`.
pub fn arb_artifact() -> impl Strategy<Value = Artifact> {
    (0usize..6).prop_flat_map(|inputs| {
        let mut vocabulary = vec![
            "OP_ADD".to_string(),
            "OP_CHECKSIG".to_string(),
            "$".to_string(),
        ];
        for i in 0..inputs {
            let name = generated_name(i);
            vocabulary.push(format!("${name}"));
            vocabulary.push(format!("${name}x"));
            vocabulary.push(name);
        }
        let body = prop::collection::vec(prop::sample::select(vocabulary), 0..12);
        prop::collection::vec(body, 0..4).prop_map(move |bodies| {
            let mut artifact = Artifact::new("Generated");
            for i in 0..inputs {
                artifact = artifact.with_constructor_input(Parameter::new(generated_name(i), PrimitiveType::Number));
            }
            for (i, asm) in bodies.into_iter().enumerate() {
                artifact = artifact.with_function(ArtifactFunction::new(format!("f{i}")).with_asm(asm));
            }
            artifact
        })
    })
}

/// A number value or a rename to a lowercase name (never a generated name)
pub fn arb_binding() -> impl Strategy<Value = Binding> {
    prop_oneof![
        any::<i64>().prop_map(|n| Binding::Value(Argument::Number(n))),
        "[a-z]{1,6}".prop_map(|new_name| Binding::Rename { new_name }),
    ]
}

/// Up to `max_len` optional bindings
pub fn arb_bindings(max_len: usize) -> impl Strategy<Value = Vec<Option<Binding>>> {
    prop::collection::vec(prop::option::of(arb_binding()), 0..=max_len)
}
