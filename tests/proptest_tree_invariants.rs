//! Property-based invariant tests for control-tree aggregation.
//!
//! 1. A composite is valid iff every descendant leaf is valid.
//! 2. A composite is touched iff at least one descendant leaf is touched.
//! 3. mark_all_as_touched touches every leaf without changing validity.
//! 4. reset restores the initial value, clears touched, and leaves validity
//!    equal to "no leaf has validators".
//! 5. A patch naming one child leaves every sibling untouched.

use proptest::prelude::*;
use reactive_forms_core::prelude::*;
use serde_json::json;

// ── Helpers ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Shape {
    Leaf { value: i64, min: Option<i64>, touched: bool },
    Group(Vec<Shape>),
    Array(Vec<Shape>),
}

fn shape_strategy() -> impl Strategy<Value = Shape> {
    let leaf = (-20i64..20, proptest::option::of(-20i64..20), any::<bool>())
        .prop_map(|(value, min, touched)| Shape::Leaf { value, min, touched });
    leaf.prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Shape::Group),
            prop::collection::vec(inner, 0..4).prop_map(Shape::Array),
        ]
    })
}

fn build(shape: &Shape) -> Node {
    match shape {
        Shape::Leaf { value, min, touched } => {
            let mut control =
                FormControl::with_validators(*value, min.map(|m| validators::min(m as f64)));
            if *touched {
                control.mark_as_touched();
            }
            control.into()
        }
        Shape::Group(children) => FormGroup::new(
            children.iter().enumerate().map(|(i, c)| (format!("f{}", i), build(c))),
        )
        .into(),
        Shape::Array(children) => FormArray::new(children.iter().map(build)).into(),
    }
}

/// (valid, touched, has_validators) for every leaf in the shape.
fn leaves(shape: &Shape, out: &mut Vec<(bool, bool, bool)>) {
    match shape {
        Shape::Leaf { value, min, touched } => {
            out.push((min.map_or(true, |m| *value >= m), *touched, min.is_some()))
        }
        Shape::Group(children) | Shape::Array(children) => {
            children.iter().for_each(|c| leaves(c, out))
        }
    }
}

fn leaf_states(shape: &Shape) -> Vec<(bool, bool, bool)> {
    let mut out = Vec::new();
    leaves(shape, &mut out);
    out
}

// ═════════════════════════════════════════════════════════════════════════
// 1-2. Aggregation
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn valid_iff_every_leaf_valid(shape in shape_strategy()) {
        let node = build(&shape);
        let expected = leaf_states(&shape).iter().all(|(valid, _, _)| *valid);
        prop_assert_eq!(node.valid(), expected, "shape={:?}", shape);
    }

    #[test]
    fn touched_iff_some_leaf_touched(shape in shape_strategy()) {
        let node = build(&shape);
        let expected = leaf_states(&shape).iter().any(|(_, touched, _)| *touched);
        prop_assert_eq!(node.touched(), expected, "shape={:?}", shape);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. mark_all_as_touched
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn mark_all_touches_every_leaf(shape in shape_strategy()) {
        let mut node = build(&shape);
        let valid_before = node.valid();
        node.mark_all_as_touched();

        let has_leaves = !leaf_states(&shape).is_empty();
        prop_assert_eq!(node.touched(), has_leaves);
        prop_assert_eq!(node.valid(), valid_before);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. reset
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn reset_restores_baseline(shape in shape_strategy(), patch in -50i64..50) {
        let mut node = build(&shape);
        let initial = node.value();

        // Overwrite every leaf with the same scalar, whatever the shape.
        let overwrite = overwrite_leaves(&initial, patch);
        node.patch_value(overwrite);
        node.reset();

        prop_assert_eq!(node.value(), initial);
        prop_assert!(!node.touched());
        prop_assert!(!node.dirty());
        let expected_valid = leaf_states(&shape).iter().all(|(_, _, has_validators)| !has_validators);
        prop_assert_eq!(node.valid(), expected_valid);
    }
}

fn overwrite_leaves(shape: &serde_json::Value, scalar: i64) -> serde_json::Value {
    match shape {
        serde_json::Value::Object(map) => serde_json::Value::Object(
            map.iter().map(|(k, v)| (k.clone(), overwrite_leaves(v, scalar))).collect(),
        ),
        serde_json::Value::Array(items) => {
            serde_json::Value::Array(items.iter().map(|v| overwrite_leaves(v, scalar)).collect())
        }
        _ => json!(scalar),
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Patch locality
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn patch_leaves_siblings_alone(
        children in prop::collection::vec(shape_strategy(), 1..5),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut group = match build(&Shape::Group(children.clone())) {
            Node::Group(group) => group,
            _ => unreachable!(),
        };
        let target = format!("f{}", pick.index(children.len()));
        let before: Vec<(String, serde_json::Value, bool)> = group
            .controls()
            .map(|(name, node)| (name.to_string(), node.value(), node.touched()))
            .collect();

        let mut patch = serde_json::Map::new();
        patch.insert(target.clone(), json!(999));
        group.patch_value(serde_json::Value::Object(patch));

        for (name, value, touched) in before {
            if name == target {
                continue;
            }
            let node = group.get(&name).unwrap();
            prop_assert_eq!(node.value(), value);
            prop_assert_eq!(node.touched(), touched);
        }
    }
}
