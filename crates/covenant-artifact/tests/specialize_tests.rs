//! End-to-end specialization scenarios.
//!
//! Each test drives the public binder API against fixture artifacts and
//! checks the whole resulting document, not just the touched fields.

use covenant_artifact::{
    encode_constructor_arg, rename_constructor_input, specialize, transform_artifact, Artifact,
    ArtifactFunction, BindError, Binding, Parameter, Requirement,
};
use covenant_primitive::{Argument, ArgumentEncoder, EncodeError, PrimitiveType, ScriptEncoder};
use covenant_test_utils::{pair_artifact, vault_artifact};
use mockall::mock;
use mockall::predicate::eq;
use pretty_assertions::assert_eq;
use serde_json::json;

mock! {
    pub Encoder {}

    impl ArgumentEncoder for Encoder {
        fn encode(&self, value: &Argument, ty: PrimitiveType) -> Result<Vec<u8>, EncodeError>;
    }
}

#[test]
fn empty_bindings_are_identity() {
    let original = vault_artifact();
    let out = specialize(&original, &[]).unwrap();
    assert_eq!(out, original);
}

#[test]
fn all_none_bindings_are_identity() {
    let original = vault_artifact();
    let out = specialize(&original, &[None, None, None]).unwrap();
    assert_eq!(out, original);
}

#[test]
fn encode_then_rename_uses_original_positions() {
    let out = specialize(
        &pair_artifact(),
        &[Some(Binding::value(5_i64)), Some(Binding::rename("bNew"))],
    )
    .unwrap();

    let expected = Artifact::new("Pair")
        .with_constructor_input(Parameter::new("bNew", PrimitiveType::Number))
        .with_function(ArtifactFunction::new("sum").with_asm(["05", "$bNew", "OP_ADD", "OP_VERIFY"]))
        .with_function(ArtifactFunction::new("onlyA").with_asm(["05", "OP_EQUAL"]));
    assert_eq!(out, expected);
}

#[test]
fn rename_then_encode_uses_original_positions() {
    let out = specialize(
        &pair_artifact(),
        &[Some(Binding::rename("first")), Some(Binding::value(-5_i64))],
    )
    .unwrap();

    assert_eq!(out.constructor_inputs, vec![Parameter::new("first", PrimitiveType::Number)]);
    assert_eq!(out.functions[0].asm, ["$first", "85", "OP_ADD", "OP_VERIFY"]);
    assert_eq!(out.functions[1].asm, ["$first", "OP_EQUAL"]);
}

#[test]
fn middle_input_bound_keeps_neighbours_in_order() {
    let out = specialize(&vault_artifact(), &[None, Some(Binding::Value(Argument::Bytes(vec![0x02; 32])))]).unwrap();

    let names: Vec<_> = out.constructor_inputs.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["owner", "delay"]);
    assert_eq!(out.functions[1].asm[3], "02".repeat(32));
}

#[test]
fn requirements_are_carried_verbatim() {
    let original = vault_artifact();
    let out = specialize(&original, &[None, None, Some(Binding::value(10_i64))]).unwrap();

    // "$delay" inside a requirement is data, not an instruction
    assert_eq!(
        out.functions[1].require,
        vec![Requirement(json!({"type": "older", "expected": "$delay"}))]
    );
    assert_eq!(out.functions[1].asm[0], "0a");
}

#[test]
fn missing_input_leaves_original_untouched() {
    let original = pair_artifact();
    let serialized = original.to_json_pretty().unwrap();

    let err = rename_constructor_input(&original, "c", "d").unwrap_err();
    assert_eq!(err, BindError::NotFound("c".to_string()));
    let err = encode_constructor_arg(&original, "c", &Argument::Number(1), &ScriptEncoder).unwrap_err();
    assert_eq!(err, BindError::NotFound("c".to_string()));

    assert_eq!(original.to_json_pretty().unwrap(), serialized);
}

#[test]
fn rename_onto_later_input_name_is_rejected() {
    let original = Artifact::new("Mixed")
        .with_constructor_input(Parameter::new("a", PrimitiveType::Bytes))
        .with_constructor_input(Parameter::new("b", PrimitiveType::Number))
        .with_function(ArtifactFunction::new("f").with_asm(["$a", "$b"]));

    let err = specialize(&original, &[Some(Binding::rename("b")), Some(Binding::value(5_i64))]).unwrap_err();
    assert_eq!(err, BindError::NameTaken("b".to_string()));

    let err = specialize(&original, &[Some(Binding::rename("b")), None]).unwrap_err();
    assert_eq!(err, BindError::NameTaken("b".to_string()));
}

#[test]
fn two_renames_onto_one_name_are_rejected() {
    let err = specialize(
        &pair_artifact(),
        &[Some(Binding::rename("shared")), Some(Binding::rename("shared"))],
    )
    .unwrap_err();
    assert_eq!(err, BindError::NameTaken("shared".to_string()));
}

#[test]
fn rename_onto_name_of_bound_input_is_allowed() {
    // `a` is gone once bound, so `b` may take its name
    let out = specialize(&pair_artifact(), &[Some(Binding::value(1_i64)), Some(Binding::rename("a"))]).unwrap();
    assert_eq!(out.constructor_inputs, vec![Parameter::new("a", PrimitiveType::Number)]);
    assert_eq!(out.functions[0].asm, ["01", "$a", "OP_ADD", "OP_VERIFY"]);
    assert_eq!(out.functions[1].asm, ["01", "OP_EQUAL"]);
}

#[test]
fn encoder_receives_declared_type_once_per_binding() {
    let mut encoder = MockEncoder::new();
    encoder
        .expect_encode()
        .with(eq(Argument::Number(7)), eq(PrimitiveType::Number))
        .times(1)
        .returning(|_, _| Ok(vec![0xc0, 0xde]));

    let out = transform_artifact(&pair_artifact(), &[None, Some(Binding::value(7_i64))], &encoder).unwrap();
    assert_eq!(out.functions[0].asm, ["$a", "c0de", "OP_ADD", "OP_VERIFY"]);
}

#[test]
fn encoder_error_propagates_verbatim_and_stops_the_fold() {
    let mut encoder = MockEncoder::new();
    encoder.expect_encode().times(1).returning(|_, ty| {
        Err(EncodeError::OutOfRange { ty, value: 99 })
    });

    let result = transform_artifact(
        &pair_artifact(),
        &[Some(Binding::value(99_i64)), Some(Binding::value(1_i64))],
        &encoder,
    );
    assert_eq!(
        result.unwrap_err(),
        BindError::Encoding(EncodeError::OutOfRange {
            ty: PrimitiveType::Number,
            value: 99
        })
    );
}

#[test]
fn encoder_is_not_called_for_renames_or_gaps() {
    let mut encoder = MockEncoder::new();
    encoder.expect_encode().never();

    let out = transform_artifact(&pair_artifact(), &[None, Some(Binding::rename("c"))], &encoder).unwrap();
    assert_eq!(out.constructor_inputs[1].name, "c");
}

#[test]
fn dyn_encoder_is_accepted() {
    let encoder: &dyn ArgumentEncoder = &ScriptEncoder;
    let out = transform_artifact(&pair_artifact(), &[Some(Binding::value(0_i64))], encoder).unwrap();
    // zero is the empty push
    assert_eq!(out.functions[1].asm, ["", "OP_EQUAL"]);
}
