use glam::Vec3;

use crate::{
    AngleRange, Axis, Constraint, ConstraintKind, MixMode, Skeleton, TransformSpace,
    add_finger_constraints, add_rotation_limits, configure_ik, resolve_bone,
};

fn bone(skeleton: &mut Skeleton, name: &str, parent: Option<usize>) -> usize {
    let base = Vec3::new(0.0, 0.0, skeleton.len() as f32);
    skeleton
        .add_bone(name, base, base + Vec3::Z, parent)
        .unwrap()
}

#[test]
fn resolve_prefers_the_exact_name() {
    let mut skeleton = Skeleton::new();
    let exact = bone(&mut skeleton, "LowerArm_L", None);
    bone(&mut skeleton, "Alt_L_LowerArm", Some(exact));

    assert_eq!(resolve_bone(&skeleton, "LowerArm_L"), Some(exact));
}

#[test]
fn resolve_matches_unnormalized_side_infix_names() {
    let mut skeleton = Skeleton::new();
    let root = bone(&mut skeleton, "Root", None);
    let arm = bone(&mut skeleton, "J_Bip_L_LowerArm", Some(root));

    assert_eq!(resolve_bone(&skeleton, "LowerArm_L"), Some(arm));
}

#[test]
fn resolve_matches_suffix_for_sideless_names() {
    let mut skeleton = Skeleton::new();
    let root = bone(&mut skeleton, "Root", None);
    let head = bone(&mut skeleton, "J_Bip_C_Head", Some(root));

    assert_eq!(resolve_bone(&skeleton, "Head"), Some(head));
    assert_eq!(resolve_bone(&skeleton, "Chest"), None);
}

#[test]
fn resolve_falls_back_for_non_symmetric_sides() {
    let mut skeleton = Skeleton::new();
    let root = bone(&mut skeleton, "Root", None);
    let toe = bone(&mut skeleton, "Foot_Toe", Some(root));

    // "F" is not a symmetry side, so the bare "_Toe" suffix may match.
    assert_eq!(resolve_bone(&skeleton, "Toe_F"), Some(toe));
}

#[test]
fn configure_ik_applies_the_limb_table() {
    let mut skeleton = Skeleton::new();
    let root = bone(&mut skeleton, "Root", None);
    let upper = bone(&mut skeleton, "UpperArm_L", Some(root));
    let lower = bone(&mut skeleton, "LowerArm_L", Some(upper));

    let applied = configure_ik(&mut skeleton);
    assert_eq!(applied, 1);

    let Some(Constraint::InverseKinematics(ik)) = skeleton
        .bone(lower)
        .constraint(ConstraintKind::InverseKinematics)
    else {
        panic!("expected an IK constraint on the lower arm");
    };
    assert_eq!(ik.chain_count, 2);
    for axis in Axis::ALL {
        assert_eq!(*ik.lock.get(axis), matches!(axis, Axis::Y | Axis::Z));
        assert_eq!(*ik.use_limit.get(axis), axis == Axis::X);
    }
    assert_eq!(ik.limit.x, AngleRange::new(-2.61799, 0.0));
    assert_eq!(*ik.limit.get(Axis::Y), AngleRange::FULL);
    assert_eq!(*ik.limit.get(Axis::Z), AngleRange::FULL);
}

#[test]
fn configure_ik_reuses_the_unique_constraint() {
    let mut skeleton = Skeleton::new();
    let root = bone(&mut skeleton, "Root", None);
    let lower = bone(&mut skeleton, "LowerLeg_R", Some(root));

    configure_ik(&mut skeleton);
    configure_ik(&mut skeleton);

    assert_eq!(skeleton.bone(lower).constraints.len(), 1);
}

#[test]
fn finger_constraints_follow_the_parent_phalanx() {
    let mut skeleton = Skeleton::new();
    let hand = bone(&mut skeleton, "Hand_L", None);
    let index1 = bone(&mut skeleton, "Index1_L", Some(hand));
    let index2 = bone(&mut skeleton, "Index2_L", Some(index1));
    bone(&mut skeleton, "Index3_L", Some(index2));
    let thumb1 = bone(&mut skeleton, "Thumb1_L", Some(hand));
    let thumb2 = bone(&mut skeleton, "Thumb2_L", Some(thumb1));

    let applied = add_finger_constraints(&mut skeleton);
    assert_eq!(applied, 3);

    let Some(Constraint::CopyRotation(copy)) = skeleton
        .bone(index2)
        .constraint(ConstraintKind::CopyRotation)
    else {
        panic!("expected a copy-rotation constraint on Index2_L");
    };
    assert_eq!(copy.target_bone, "Index1_L");
    assert_eq!(copy.mix_mode, MixMode::Add);
    assert_eq!(copy.space, TransformSpace::Local);
    assert!(copy.enable.x && !copy.enable.y && !copy.enable.z);

    let Some(Constraint::CopyRotation(copy)) = skeleton
        .bone(thumb2)
        .constraint(ConstraintKind::CopyRotation)
    else {
        panic!("expected a copy-rotation constraint on Thumb2_L");
    };
    assert_eq!(copy.target_bone, "Thumb1_L");
    assert!(!copy.enable.x && !copy.enable.y && copy.enable.z);

    // First phalanges are driven by the user, not by a constraint.
    assert!(skeleton.bone(index1).constraints.is_empty());
}

#[test]
fn rotation_limits_expand_the_finger_wildcard() {
    let mut skeleton = Skeleton::new();
    let root = bone(&mut skeleton, "Root", None);
    let index1 = bone(&mut skeleton, "Index1_L", Some(root));
    let middle1 = bone(&mut skeleton, "Middle1_R", Some(root));
    let thumb1 = bone(&mut skeleton, "Thumb1_L", Some(root));
    let neck = bone(&mut skeleton, "Neck", Some(root));

    let applied = add_rotation_limits(&mut skeleton);
    assert_eq!(applied, 3);

    let Some(Constraint::LimitRotation(limit)) = skeleton
        .bone(index1)
        .constraint(ConstraintKind::LimitRotation)
    else {
        panic!("expected a limit-rotation constraint on Index1_L");
    };
    assert_eq!(limit.space, TransformSpace::Local);
    assert!(limit.use_transform_limit);
    assert_eq!(limit.limit.x, Some(AngleRange::new(-0.174533, 1.48353)));
    assert_eq!(limit.limit.y, None);

    assert!(
        skeleton
            .bone(middle1)
            .constraint(ConstraintKind::LimitRotation)
            .is_some()
    );
    assert!(
        skeleton
            .bone(neck)
            .constraint(ConstraintKind::LimitRotation)
            .is_some()
    );
    assert!(skeleton.bone(thumb1).constraints.is_empty());
}
