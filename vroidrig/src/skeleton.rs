use std::collections::{BTreeSet, HashMap};

use glam::Vec3;

use crate::{
    Constraint, ConstraintKind, CopyRotation, Error, InverseKinematics, LimitRotation,
};

/// A node in the armature tree.
///
/// Name, parent and child links are owned by the [`Skeleton`] arena; endpoints
/// and constraints are free to mutate. `connected` means the head is pinned to
/// the parent's tail — [`Skeleton::set_tail`] keeps pinned heads in sync.
#[derive(Clone, Debug)]
pub struct Bone {
    name: String,
    pub head: Vec3,
    pub tail: Vec3,
    parent: Option<usize>,
    children: Vec<usize>,
    pub connected: bool,
    pub constraints: Vec<Constraint>,
}

impl Bone {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    /// Child indices in tree order.
    pub fn children(&self) -> &[usize] {
        &self.children
    }

    pub fn length(&self) -> f32 {
        (self.tail - self.head).length()
    }

    pub fn has_constraints(&self) -> bool {
        !self.constraints.is_empty()
    }

    pub fn constraint(&self, kind: ConstraintKind) -> Option<&Constraint> {
        self.constraints.iter().find(|c| c.kind() == kind)
    }

    fn constraint_position(&mut self, kind: ConstraintKind, create: Constraint) -> usize {
        match self.constraints.iter().position(|c| c.kind() == kind) {
            Some(position) => position,
            None => {
                self.constraints.push(create);
                self.constraints.len() - 1
            }
        }
    }

    /// The bone's unique IK constraint, created on first access.
    pub fn ik_mut(&mut self) -> &mut InverseKinematics {
        let position = self.constraint_position(
            ConstraintKind::InverseKinematics,
            Constraint::InverseKinematics(InverseKinematics::default()),
        );
        match &mut self.constraints[position] {
            Constraint::InverseKinematics(ik) => ik,
            _ => unreachable!(),
        }
    }

    /// The bone's unique copy-rotation constraint, created on first access.
    pub fn copy_rotation_mut(&mut self) -> &mut CopyRotation {
        let position = self.constraint_position(
            ConstraintKind::CopyRotation,
            Constraint::CopyRotation(CopyRotation::default()),
        );
        match &mut self.constraints[position] {
            Constraint::CopyRotation(copy) => copy,
            _ => unreachable!(),
        }
    }

    /// The bone's unique limit-rotation constraint, created on first access.
    pub fn limit_rotation_mut(&mut self) -> &mut LimitRotation {
        let position = self.constraint_position(
            ConstraintKind::LimitRotation,
            Constraint::LimitRotation(LimitRotation::default()),
        );
        match &mut self.constraints[position] {
            Constraint::LimitRotation(limit) => limit,
            _ => unreachable!(),
        }
    }
}

/// Index-arena bone tree. Bones live in import order; names are unique.
#[derive(Clone, Debug, Default)]
pub struct Skeleton {
    bones: Vec<Bone>,
    index: HashMap<String, usize>,
}

impl Skeleton {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bones.is_empty()
    }

    /// Bones in arena (import) order.
    pub fn bones(&self) -> &[Bone] {
        &self.bones
    }

    pub fn bone(&self, index: usize) -> &Bone {
        &self.bones[index]
    }

    pub fn bone_mut(&mut self, index: usize) -> &mut Bone {
        &mut self.bones[index]
    }

    pub fn bone_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn bone_by_name(&self, name: &str) -> Option<&Bone> {
        self.bone_index(name).map(|index| &self.bones[index])
    }

    /// First bone without a parent.
    pub fn root(&self) -> Option<usize> {
        self.bones.iter().position(|bone| bone.parent.is_none())
    }

    pub fn add_bone(
        &mut self,
        name: impl Into<String>,
        head: Vec3,
        tail: Vec3,
        parent: Option<usize>,
    ) -> Result<usize, Error> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(Error::DuplicateBoneName { name });
        }
        if let Some(parent) = parent {
            if parent >= self.bones.len() {
                return Err(Error::UnknownParent {
                    bone: name,
                    index: parent,
                });
            }
        }

        let index = self.bones.len();
        self.index.insert(name.clone(), index);
        self.bones.push(Bone {
            name,
            head,
            tail,
            parent,
            children: Vec::new(),
            connected: false,
            constraints: Vec::new(),
        });
        if let Some(parent) = parent {
            self.bones[parent].children.push(index);
        }
        Ok(index)
    }

    pub fn rename(&mut self, index: usize, new_name: &str) -> Result<(), Error> {
        let old_name = self.bones[index].name.clone();
        if new_name == old_name {
            return Ok(());
        }
        if self.index.contains_key(new_name) {
            return Err(Error::DuplicateBoneName {
                name: new_name.to_string(),
            });
        }
        self.index.remove(&old_name);
        self.index.insert(new_name.to_string(), index);
        self.bones[index].name = new_name.to_string();
        Ok(())
    }

    /// Moves a bone's tail; heads of connected children follow, their tails
    /// stay put.
    pub fn set_tail(&mut self, index: usize, tail: Vec3) {
        self.bones[index].tail = tail;
        let children = self.bones[index].children.clone();
        for child in children {
            if self.bones[child].connected {
                self.bones[child].head = tail;
            }
        }
    }

    pub fn translate_tail(&mut self, index: usize, offset: Vec3) {
        let tail = self.bones[index].tail;
        self.set_tail(index, tail + offset);
    }

    /// Pins a bone's head to its parent's tail. Returns false for a root.
    pub fn connect(&mut self, child: usize) -> bool {
        let Some(parent) = self.bones[child].parent else {
            return false;
        };
        self.bones[child].head = self.bones[parent].tail;
        self.bones[child].connected = true;
        true
    }

    /// Removes every named bone. Surviving children are reparented to their
    /// nearest surviving ancestor and left disconnected. Returns the number
    /// of bones removed.
    pub fn remove_bones(&mut self, names: &BTreeSet<String>) -> usize {
        if names.is_empty() {
            return 0;
        }

        let keep: Vec<bool> = self
            .bones
            .iter()
            .map(|bone| !names.contains(&bone.name))
            .collect();
        let old_parent: Vec<Option<usize>> =
            self.bones.iter().map(|bone| bone.parent).collect();

        let mut remap: Vec<Option<usize>> = Vec::with_capacity(self.bones.len());
        let mut kept = 0;
        for &keep_bone in &keep {
            if keep_bone {
                remap.push(Some(kept));
                kept += 1;
            } else {
                remap.push(None);
            }
        }
        let removed = self.bones.len() - kept;
        if removed == 0 {
            return 0;
        }

        let surviving_ancestor = |start: Option<usize>| -> Option<usize> {
            let mut current = start;
            while let Some(index) = current {
                if keep[index] {
                    return Some(index);
                }
                current = old_parent[index];
            }
            None
        };

        let mut bones = Vec::with_capacity(kept);
        for (index, mut bone) in self.bones.drain(..).enumerate() {
            if !keep[index] {
                continue;
            }
            let ancestor = surviving_ancestor(old_parent[index]);
            if ancestor != old_parent[index] {
                bone.connected = false;
            }
            bone.parent = ancestor.map(|a| remap[a].expect("ancestor survives"));
            bone.children.clear();
            bones.push(bone);
        }
        for index in 0..bones.len() {
            if let Some(parent) = bones[index].parent {
                bones[parent].children.push(index);
            }
        }

        self.index = bones
            .iter()
            .enumerate()
            .map(|(index, bone)| (bone.name.clone(), index))
            .collect();
        self.bones = bones;
        removed
    }

    /// Checks the fatal structural invariants: exactly one root and acyclic
    /// parent links.
    pub fn validate(&self) -> Result<(), Error> {
        let mut root: Option<usize> = None;
        for (index, bone) in self.bones.iter().enumerate() {
            match bone.parent {
                None => match root {
                    None => root = Some(index),
                    Some(first) => {
                        return Err(Error::MultipleRoots {
                            first: self.bones[first].name.clone(),
                            second: bone.name.clone(),
                        });
                    }
                },
                Some(parent) if parent >= self.bones.len() => {
                    return Err(Error::UnknownParent {
                        bone: bone.name.clone(),
                        index: parent,
                    });
                }
                Some(_) => {}
            }
        }
        if root.is_none() {
            return Err(Error::NoRoot);
        }

        for (index, bone) in self.bones.iter().enumerate() {
            let mut steps = 0;
            let mut current = bone.parent;
            while let Some(parent) = current {
                steps += 1;
                if steps > self.bones.len() {
                    return Err(Error::HierarchyCycle {
                        name: self.bones[index].name.clone(),
                    });
                }
                current = self.bones[parent].parent;
            }
        }
        Ok(())
    }
}
