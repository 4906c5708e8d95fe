use std::sync::OnceLock;

use glam::Vec3;
use regex::Regex;

use crate::Skeleton;

/// Substrings marking accessory bones that must stay out of connected chains.
const CONNECT_EXCEPTIONS: [&str; 8] = [
    "Sleeve", "Skirt", "Bust", "FaceEye", "HairJoint", "Tops", "Food", "Hood",
];

/// Limb bone prefixes mapped to the prefix of their natural child.
const LIMB_HIERARCHY: [(&str, &str); 4] = [
    ("UpperLeg", "LowerLeg"),
    ("LowerLeg", "Foot"),
    ("UpperArm", "LowerArm"),
    ("LowerArm", "Hand"),
];

/// Fraction of the root bone's length its tail is lowered by.
const ROOT_TAIL_DROP: f32 = 0.8;

fn finger_tip_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(?:Thumb|Index|Middle|Ring|Little)3_[RL]").unwrap())
}

fn toe_base_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^ToeBase_[LR]").unwrap())
}

fn is_exception(name: &str) -> bool {
    CONNECT_EXCEPTIONS.iter().any(|ex| name.contains(ex))
}

/// Picks the child a bone should chain into, detaching accessory children as
/// a side effect. `None` means the bone is left alone.
fn select_target(skeleton: &mut Skeleton, index: usize) -> Option<usize> {
    let bone = skeleton.bone(index);
    if bone.name() == "Head" || bone.children().is_empty() {
        return None;
    }
    let name = bone.name().to_string();
    let children = bone.children().to_vec();

    if children.len() > 1 {
        for &child in &children {
            if is_exception(skeleton.bone(child).name()) {
                skeleton.bone_mut(child).connected = false;
                log::debug!("detached accessory bone '{}'", skeleton.bone(child).name());
            }
        }
    }

    for (prefix, child_prefix) in LIMB_HIERARCHY {
        if name.starts_with(prefix) {
            let preferred = children
                .iter()
                .copied()
                .find(|&child| skeleton.bone(child).name().starts_with(child_prefix));
            return Some(preferred.unwrap_or(children[0]));
        }
    }

    if children.len() == 1 {
        return Some(children[0]);
    }
    children
        .iter()
        .copied()
        .find(|&child| !is_exception(skeleton.bone(child).name()))
}

fn process_bone(skeleton: &mut Skeleton, index: usize) -> bool {
    let Some(target) = select_target(skeleton, index) else {
        return false;
    };

    let target_head = skeleton.bone(target).head;
    skeleton.set_tail(index, target_head);

    // The root only gets its tail lowered below the hips; it never joins a
    // chain itself.
    if skeleton.bone(index).name().eq_ignore_ascii_case("root") {
        let drop = skeleton.bone(index).length() * ROOT_TAIL_DROP;
        skeleton.translate_tail(index, Vec3::new(0.0, 0.0, -drop));
        return false;
    }

    skeleton.connect(target);
    true
}

/// Walks the tree in import order, moving each bone's tail onto its chain
/// child's head and pinning the child there. Returns the number of
/// connections established.
pub fn connect_chains(skeleton: &mut Skeleton) -> usize {
    let mut connected = 0;
    for index in 0..skeleton.len() {
        if process_bone(skeleton, index) {
            connected += 1;
        }
    }
    adjust_fingertips_and_toes(skeleton);
    connected
}

// Imported fingertips and toes point in odd directions; restate them from the
// parent segment once every connection is in place.
fn adjust_fingertips_and_toes(skeleton: &mut Skeleton) {
    for index in 0..skeleton.len() {
        let bone = skeleton.bone(index);
        let &[child] = bone.children() else {
            continue;
        };
        let parent_direction = bone.tail - bone.head;
        let child_bone = skeleton.bone(child);

        if finger_tip_pattern().is_match(child_bone.name()) {
            let tail =
                child_bone.head + parent_direction.normalize_or_zero() * child_bone.length();
            skeleton.set_tail(child, tail);
        } else if toe_base_pattern().is_match(child_bone.name()) {
            let flat = (parent_direction * Vec3::new(1.0, 1.0, 0.0)).normalize_or_zero();
            let tail = child_bone.head + flat * (child_bone.length() / 2.0);
            skeleton.set_tail(child, tail);
        }
    }
}
