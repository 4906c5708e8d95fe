//! Host-facing entry points. The host resolves its active armature and
//! attached meshes into explicit arguments, toggles edit/pose modes around
//! the call, and shows the returned summary; everything in between happens
//! here.

use std::collections::BTreeSet;
use std::fmt;

use crate::{
    Error, IK_CONFIG, MeshBinding, Skeleton, collect_junk_chain, collect_leaf_junk,
    configure_ik, connect_chains, delete_bones, normalize_names,
};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixOutcome {
    pub renamed: usize,
    pub connected: usize,
    pub removed: usize,
}

impl fmt::Display for FixOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "armature fixed: {} bones renamed, {} chains connected, {} leaf bones removed",
            self.renamed, self.connected, self.removed
        )
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CleanupOutcome {
    pub removed: usize,
}

impl fmt::Display for CleanupOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "skeleton cleaned: {} junk bones removed", self.removed)
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IkOutcome {
    pub constrained: usize,
    pub skipped: usize,
}

impl fmt::Display for IkOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IK configured on {} bones ({} config entries unmatched)",
            self.constrained, self.skipped
        )
    }
}

/// Full repair pass: normalize names, connect chains, drop influence-free
/// leaf bones.
pub fn fix(skeleton: &mut Skeleton, meshes: &mut [MeshBinding]) -> Result<FixOutcome, Error> {
    skeleton.validate()?;
    let renamed = normalize_names(skeleton, meshes)?.len();
    let connected = connect_chains(skeleton);
    let junk: BTreeSet<String> = collect_leaf_junk(skeleton, meshes).into_iter().collect();
    let removed = delete_bones(skeleton, meshes, &junk);

    let outcome = FixOutcome {
        renamed,
        connected,
        removed,
    };
    log::info!("{outcome}");
    Ok(outcome)
}

/// Removes every maximal all-junk subtree, keeping any bone with a live
/// descendant.
pub fn cleanup(
    skeleton: &mut Skeleton,
    meshes: &mut [MeshBinding],
) -> Result<CleanupOutcome, Error> {
    skeleton.validate()?;
    let root = skeleton.root().ok_or(Error::NoRoot)?;
    let junk: BTreeSet<String> = collect_junk_chain(skeleton, root, meshes)
        .into_iter()
        .collect();
    let removed = delete_bones(skeleton, meshes, &junk);

    let outcome = CleanupOutcome { removed };
    log::info!("{outcome}");
    Ok(outcome)
}

/// Attaches the static IK configuration to the limb bones present in this
/// skeleton.
pub fn setup_ik(skeleton: &mut Skeleton) -> Result<IkOutcome, Error> {
    skeleton.validate()?;
    let constrained = configure_ik(skeleton);

    let outcome = IkOutcome {
        constrained,
        skipped: IK_CONFIG.len() - constrained,
    };
    log::info!("{outcome}");
    Ok(outcome)
}
