use crate::{
    AngleRange, FINGER_WILDCARD, FINGERS, IK_CONFIG, MixMode, PerAxis, ROTATION_LIMITS, Skeleton,
    TransformSpace,
};

/// Resolves a canonical `<Name>_<Side>` key against the actual skeleton.
///
/// Exact name first. A key without a side suffix matches any bone ending in
/// `_<name>`; otherwise a `_<side>_<name>` suffix match wins, with the bare
/// `_<name>` suffix as a fallback for non-L/R sides. Covers skeletons both
/// before and after name normalization.
pub fn resolve_bone(skeleton: &Skeleton, canonical: &str) -> Option<usize> {
    if let Some(index) = skeleton.bone_index(canonical) {
        return Some(index);
    }
    let find_suffix = |suffix: String| {
        skeleton
            .bones()
            .iter()
            .position(|bone| bone.name().ends_with(&suffix))
    };
    match canonical.rsplit_once('_') {
        None => find_suffix(format!("_{canonical}")),
        Some((name, side)) => {
            let fallback = if side != "L" && side != "R" {
                find_suffix(format!("_{name}"))
            } else {
                None
            };
            find_suffix(format!("_{side}_{name}")).or(fallback)
        }
    }
}

/// Applies [`IK_CONFIG`] to the skeleton, creating or updating the unique IK
/// constraint on each resolved bone. Unresolved entries are skipped. Returns
/// the number of bones configured.
pub fn configure_ik(skeleton: &mut Skeleton) -> usize {
    let mut applied = 0;
    for (canonical, params) in IK_CONFIG {
        let Some(index) = resolve_bone(skeleton, canonical) else {
            log::debug!("no bone matches IK entry '{canonical}', skipping");
            continue;
        };
        *skeleton.bone_mut(index).ik_mut() = params;
        log::debug!(
            "configured IK on '{}' (chain {})",
            skeleton.bone(index).name(),
            params.chain_count
        );
        applied += 1;
    }
    applied
}

/// Makes the two distal phalanges of every finger follow their parent's curl:
/// additive local-space rotation copy, twist axis excluded (X for thumbs, Z
/// for the rest). Returns the number of constraints applied.
pub fn add_finger_constraints(skeleton: &mut Skeleton) -> usize {
    let mut applied = 0;
    for finger in FINGERS {
        for phalanx in [2, 3] {
            for side in ["L", "R"] {
                let canonical = format!("{finger}{phalanx}_{side}");
                let Some(index) = resolve_bone(skeleton, &canonical) else {
                    continue;
                };
                let Some(parent) = skeleton.bone(index).parent() else {
                    continue;
                };
                let target = skeleton.bone(parent).name().to_string();

                let constraint = skeleton.bone_mut(index).copy_rotation_mut();
                constraint.target_bone = target;
                constraint.mix_mode = MixMode::Add;
                constraint.space = TransformSpace::Local;
                constraint.enable = if finger == "Thumb" {
                    PerAxis::new(false, false, true)
                } else {
                    PerAxis::new(true, false, false)
                };
                applied += 1;
            }
        }
    }
    applied
}

/// Applies [`ROTATION_LIMITS`], expanding the finger wildcard over the first
/// phalanx of every non-thumb finger on both sides. Returns the number of
/// constraints applied.
pub fn add_rotation_limits(skeleton: &mut Skeleton) -> usize {
    let mut applied = 0;
    for (key, limit) in ROTATION_LIMITS {
        if key == FINGER_WILDCARD {
            for finger in FINGERS {
                if finger == "Thumb" {
                    continue;
                }
                for side in ["L", "R"] {
                    let canonical = format!("{finger}1_{side}");
                    if let Some(index) = resolve_bone(skeleton, &canonical) {
                        apply_rotation_limit(skeleton, index, limit);
                        applied += 1;
                    }
                }
            }
            continue;
        }

        let Some(index) = resolve_bone(skeleton, key) else {
            log::debug!("no bone matches rotation-limit entry '{key}', skipping");
            continue;
        };
        apply_rotation_limit(skeleton, index, limit);
        applied += 1;
    }
    applied
}

fn apply_rotation_limit(
    skeleton: &mut Skeleton,
    index: usize,
    limit: PerAxis<Option<AngleRange>>,
) {
    let constraint = skeleton.bone_mut(index).limit_rotation_mut();
    constraint.space = TransformSpace::Local;
    constraint.use_transform_limit = true;
    constraint.limit = limit;
}
