use std::collections::HashMap;

/// Weights at or below this value do not count as influence.
pub const INFLUENCE_EPSILON: f32 = 0.001;

/// Vertex-group view of one mesh bound to the armature.
///
/// Group names mirror bone names; per-vertex weights reference groups by
/// index, the way the host stores deform weights. Group removal compacts the
/// index space like the host does, so stored vertex weights are remapped.
#[derive(Clone, Debug, Default)]
pub struct MeshBinding {
    pub name: String,
    groups: Vec<String>,
    group_index: HashMap<String, usize>,
    weights: Vec<Vec<(usize, f32)>>,
}

impl MeshBinding {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Adds a vertex group, or returns the existing group's index.
    pub fn add_group(&mut self, name: impl Into<String>) -> usize {
        let name = name.into();
        if let Some(&index) = self.group_index.get(&name) {
            return index;
        }
        let index = self.groups.len();
        self.group_index.insert(name.clone(), index);
        self.groups.push(name);
        index
    }

    pub fn group_index(&self, name: &str) -> Option<usize> {
        self.group_index.get(name).copied()
    }

    pub fn group_names(&self) -> &[String] {
        &self.groups
    }

    pub fn vertex_count(&self) -> usize {
        self.weights.len()
    }

    /// Appends a vertex with its `(group index, weight)` pairs.
    pub fn push_vertex(&mut self, groups: Vec<(usize, f32)>) {
        self.weights.push(groups);
    }

    /// Renames a vertex group. Returns false when `old` does not exist or
    /// `new` is already taken.
    pub fn rename_group(&mut self, old: &str, new: &str) -> bool {
        if self.group_index.contains_key(new) {
            return false;
        }
        let Some(index) = self.group_index.remove(old) else {
            return false;
        };
        self.groups[index] = new.to_string();
        self.group_index.insert(new.to_string(), index);
        true
    }

    /// Removes a vertex group and every weight referencing it, shifting
    /// later group indices down.
    pub fn remove_group(&mut self, name: &str) -> bool {
        let Some(removed) = self.group_index.remove(name) else {
            return false;
        };
        self.groups.remove(removed);
        for index in self.group_index.values_mut() {
            if *index > removed {
                *index -= 1;
            }
        }
        for vertex in &mut self.weights {
            vertex.retain(|&(group, _)| group != removed);
            for (group, _) in vertex.iter_mut() {
                if *group > removed {
                    *group -= 1;
                }
            }
        }
        true
    }

    fn any_weight_above(&self, group: usize, threshold: f32) -> bool {
        self.weights
            .iter()
            .any(|vertex| vertex.iter().any(|&(g, w)| g == group && w > threshold))
    }
}

/// True when any mesh has a vertex meaningfully weighted to the named bone.
///
/// Keyed by the bone's current name on purpose: caching by bone identity
/// across a rename pass reports influence for the wrong group.
pub fn bone_has_effect(bone_name: &str, meshes: &[MeshBinding]) -> bool {
    meshes.iter().any(|mesh| {
        mesh.group_index(bone_name)
            .is_some_and(|group| mesh.any_weight_above(group, INFLUENCE_EPSILON))
    })
}
