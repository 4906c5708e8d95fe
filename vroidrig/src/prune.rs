use std::collections::BTreeSet;

use crate::{MeshBinding, Skeleton, bone_has_effect};

/// A bone with no constraints and no mesh influence does nothing for the rig.
pub fn is_junk(skeleton: &Skeleton, index: usize, meshes: &[MeshBinding]) -> bool {
    let bone = skeleton.bone(index);
    !bone.has_constraints() && !bone_has_effect(bone.name(), meshes)
}

// Post-order walk. Returns whether the whole subtree was junk; a live bone
// anywhere below keeps every ancestor on its path.
fn junk_subtree(
    skeleton: &Skeleton,
    index: usize,
    meshes: &[MeshBinding],
    collected: &mut Vec<String>,
) -> bool {
    let junk = is_junk(skeleton, index, meshes);
    let children = skeleton.bone(index).children();
    if children.is_empty() {
        if junk {
            collected.push(skeleton.bone(index).name().to_string());
        }
        return junk;
    }

    let mut all_children_junk = true;
    for &child in children {
        if !junk_subtree(skeleton, child, meshes, collected) {
            all_children_junk = false;
        }
    }
    if junk && all_children_junk {
        collected.push(skeleton.bone(index).name().to_string());
        return true;
    }
    false
}

/// Names of every maximal all-junk subtree at or below `index`, deepest
/// first.
pub fn collect_junk_chain(
    skeleton: &Skeleton,
    index: usize,
    meshes: &[MeshBinding],
) -> Vec<String> {
    let mut collected = Vec::new();
    junk_subtree(skeleton, index, meshes, &mut collected);
    collected
}

/// Leaf bones with no mesh influence, whatever their constraints. The looser
/// test suits the tail ends left over after chain fixing.
pub fn collect_leaf_junk(skeleton: &Skeleton, meshes: &[MeshBinding]) -> Vec<String> {
    skeleton
        .bones()
        .iter()
        .filter(|bone| bone.children().is_empty() && !bone_has_effect(bone.name(), meshes))
        .map(|bone| bone.name().to_string())
        .collect()
}

/// Removes the named bones and, in lockstep, every same-named vertex group on
/// every mesh. Returns the number of bones removed.
pub fn delete_bones(
    skeleton: &mut Skeleton,
    meshes: &mut [MeshBinding],
    names: &BTreeSet<String>,
) -> usize {
    if names.is_empty() {
        return 0;
    }
    let removed = skeleton.remove_bones(names);
    for mesh in meshes.iter_mut() {
        for name in names {
            if mesh.remove_group(name) {
                log::debug!("removed vertex group '{name}' from mesh '{}'", mesh.name);
            }
        }
    }
    removed
}
