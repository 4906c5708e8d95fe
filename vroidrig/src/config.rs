//! Static rig parameter tables, keyed by canonical `<Name>_<Side>` bone
//! names and resolved against the actual skeleton at apply time.

use crate::{AngleRange, InverseKinematics, PerAxis};

pub const FINGERS: [&str; 5] = ["Thumb", "Index", "Middle", "Ring", "Little"];

/// Table key expanded over the first phalanx of every non-thumb finger.
pub const FINGER_WILDCARD: &str = "<fingers>";

// Elbows and knees: two-bone chain, hinge on X only, no hyperextension.
const LIMB_BEND: InverseKinematics = InverseKinematics {
    chain_count: 2,
    lock: PerAxis::new(false, true, true),
    use_limit: PerAxis::new(true, false, false),
    limit: PerAxis::new(
        AngleRange::new(-2.61799, 0.0),
        AngleRange::FULL,
        AngleRange::FULL,
    ),
};

pub const IK_CONFIG: [(&str, InverseKinematics); 4] = [
    ("LowerArm_L", LIMB_BEND),
    ("LowerArm_R", LIMB_BEND),
    ("LowerLeg_L", LIMB_BEND),
    ("LowerLeg_R", LIMB_BEND),
];

// First phalanges curl on X; small negative allowance for splaying back.
const FINGER_CURL: PerAxis<Option<AngleRange>> = PerAxis::new(
    Some(AngleRange::new(-0.174533, 1.48353)),
    None,
    None,
);

pub const ROTATION_LIMITS: [(&str, PerAxis<Option<AngleRange>>); 3] = [
    (FINGER_WILDCARD, FINGER_CURL),
    (
        "Neck",
        PerAxis::new(
            Some(AngleRange::new(-0.610865, 0.610865)),
            None,
            Some(AngleRange::new(-0.610865, 0.610865)),
        ),
    ),
    (
        "Chest",
        PerAxis::new(
            Some(AngleRange::new(-0.349066, 0.349066)),
            None,
            Some(AngleRange::new(-0.349066, 0.349066)),
        ),
    ),
];
