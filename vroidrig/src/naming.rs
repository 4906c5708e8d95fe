use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::{Error, MeshBinding, Skeleton};

// VRoid secondary (physics) bones: J_Sec_[<side>_]<name><order>?_[end_]<id>.
fn secondary_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^J_Sec_(?:(?P<side>[RL])_)?(?P<name>[A-Za-z]+)(?P<order>\d{1,2})?_(?:end_)?(?P<id>\d{2})")
            .unwrap()
    })
}

// VRoid biped bones: J_Bip_<side>_<name>, side C meaning center.
fn biped_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^J_Bip_(?P<side>[RLC])_(?P<name>\w+)").unwrap())
}

/// Symmetry name for a VRoid bone, or `None` when the name matches neither
/// convention.
fn simplified_name(original: &str) -> Option<String> {
    if let Some(caps) = secondary_pattern().captures(original) {
        let mut simplified = format!("{}{}", &caps["name"], &caps["id"]);
        if let Some(order) = caps.name("order") {
            simplified.push('_');
            simplified.push_str(order.as_str());
        }
        if let Some(side) = caps.name("side") {
            simplified.push('_');
            simplified.push_str(side.as_str());
        }
        return Some(simplified);
    }
    if let Some(caps) = biped_pattern().captures(original) {
        let name = &caps["name"];
        return Some(match &caps["side"] {
            "C" => name.to_string(),
            side => format!("{name}_{side}"),
        });
    }
    None
}

/// Rewrites VRoid bone names into `<Name>_<Side>` symmetry names and renames
/// matching vertex groups on every mesh.
///
/// The host does not reliably propagate bone renames into vertex-group names,
/// so the group pass is mandatory. Returns the old → new map; a rename that
/// collides with an existing bone name aborts with
/// [`Error::DuplicateBoneName`].
pub fn normalize_names(
    skeleton: &mut Skeleton,
    meshes: &mut [MeshBinding],
) -> Result<BTreeMap<String, String>, Error> {
    let mut renames = BTreeMap::new();
    for index in 0..skeleton.len() {
        let original = skeleton.bone(index).name().to_string();
        let Some(simplified) = simplified_name(&original) else {
            continue;
        };
        skeleton.rename(index, &simplified)?;
        log::debug!("renamed bone '{original}' -> '{simplified}'");
        renames.insert(original, simplified);
    }

    for mesh in meshes.iter_mut() {
        for (original, simplified) in &renames {
            if mesh.rename_group(original, simplified) {
                log::debug!(
                    "renamed vertex group '{original}' -> '{simplified}' on mesh '{}'",
                    mesh.name
                );
            }
        }
    }
    Ok(renames)
}
