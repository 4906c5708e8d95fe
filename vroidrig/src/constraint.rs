use std::f32::consts::PI;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

/// One value per rotation axis.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerAxis<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> PerAxis<T> {
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    pub fn get(&self, axis: Axis) -> &T {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }

    pub fn set(&mut self, axis: Axis, value: T) {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
            Axis::Z => self.z = value,
        }
    }
}

impl<T: Copy> PerAxis<T> {
    pub const fn splat(value: T) -> Self {
        Self {
            x: value,
            y: value,
            z: value,
        }
    }
}

/// Inclusive rotation range in radians.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AngleRange {
    pub min: f32,
    pub max: f32,
}

impl AngleRange {
    pub const FULL: AngleRange = AngleRange { min: -PI, max: PI };

    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }
}

impl Default for AngleRange {
    fn default() -> Self {
        Self::FULL
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ConstraintKind {
    InverseKinematics,
    CopyRotation,
    LimitRotation,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MixMode {
    #[default]
    Replace,
    Add,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransformSpace {
    #[default]
    World,
    Local,
}

/// Inverse kinematics parameters for the bone ending an IK chain.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InverseKinematics {
    /// How many bones up the parent chain the solver may bend.
    pub chain_count: u32,
    pub lock: PerAxis<bool>,
    pub use_limit: PerAxis<bool>,
    pub limit: PerAxis<AngleRange>,
}

impl Default for InverseKinematics {
    fn default() -> Self {
        Self {
            chain_count: 0,
            lock: PerAxis::splat(false),
            use_limit: PerAxis::splat(false),
            limit: PerAxis::splat(AngleRange::FULL),
        }
    }
}

/// Copies another bone's rotation onto the owner, per enabled axis.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CopyRotation {
    pub target_bone: String,
    pub mix_mode: MixMode,
    pub space: TransformSpace,
    pub enable: PerAxis<bool>,
}

/// Clamps the owner's rotation; `None` leaves an axis unlimited.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LimitRotation {
    pub space: TransformSpace,
    pub use_transform_limit: bool,
    pub limit: PerAxis<Option<AngleRange>>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Constraint {
    InverseKinematics(InverseKinematics),
    CopyRotation(CopyRotation),
    LimitRotation(LimitRotation),
}

impl Constraint {
    pub fn kind(&self) -> ConstraintKind {
        match self {
            Constraint::InverseKinematics(_) => ConstraintKind::InverseKinematics,
            Constraint::CopyRotation(_) => ConstraintKind::CopyRotation,
            Constraint::LimitRotation(_) => ConstraintKind::LimitRotation,
        }
    }
}
