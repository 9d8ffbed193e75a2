//! Serde serialization/deserialization tests
//!
//! Run with: cargo test --features serde --test serde_tests

#![cfg(feature = "serde")]

use fingroup::{Element, Group, IntegerResidue, Permutation};

#[test]
fn permutation_shape() {
    let p = Permutation::new(vec![0, 2, 1]).unwrap();
    let json = serde_json::to_string(&p).unwrap();
    assert_eq!(json, "[0,2,1]");
    let q: Permutation = serde_json::from_str(&json).unwrap();
    assert_eq!(p, q);
}

#[test]
fn permutation_rejects_non_bijection() {
    let result: Result<Permutation, _> = serde_json::from_str("[0,0,1]");
    assert!(result.is_err());
    let result: Result<Permutation, _> = serde_json::from_str("[0,3]");
    assert!(result.is_err());
}

#[test]
fn residue_shape() {
    let r = IntegerResidue::new(1, 2).unwrap();
    let json = serde_json::to_string(&r).unwrap();
    assert_eq!(json, r#"{"value":1,"modulus":2}"#);
}

#[test]
fn residue_reduces_and_rejects_zero_modulus() {
    let r: IntegerResidue = serde_json::from_str(r#"{"value":7,"modulus":3}"#).unwrap();
    assert_eq!(r.value(), 1);

    let result: Result<IntegerResidue, _> = serde_json::from_str(r#"{"value":0,"modulus":0}"#);
    assert!(result.is_err());
}

#[test]
fn element_variants_are_tagged() {
    let t = Element::Tuple(vec![
        IntegerResidue::new(1, 2).unwrap().into(),
        Permutation::new(vec![1, 0]).unwrap().into(),
    ]);
    let json = serde_json::to_string(&t).unwrap();
    assert_eq!(
        json,
        r#"{"Tuple":[{"IntegerResidue":{"value":1,"modulus":2}},{"Permutation":[1,0]}]}"#
    );
    let back: Element = serde_json::from_str(&json).unwrap();
    assert_eq!(t, back);
}

#[test]
fn product_carrier_survives_json() {
    let g = Group::product(&[Group::cyclic(2).unwrap(), Group::symmetric(3).unwrap()]).unwrap();
    let json = serde_json::to_string(g.elements()).unwrap();
    let back: Vec<Element> = serde_json::from_str(&json).unwrap();
    assert_eq!(back.as_slice(), g.elements());
}

#[test]
fn element_rejects_invalid_payload() {
    let result: Result<Element, _> = serde_json::from_str(r#"{"Permutation":[1,1]}"#);
    assert!(result.is_err());
}
