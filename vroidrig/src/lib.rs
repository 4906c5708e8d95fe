//! Skeleton normalization and auto-rigging for VRoid-style armatures.
//!
//! This crate is host-agnostic: DCC/editor integrations own selection, mode
//! switching and undo, and hand the core an explicit bone graph plus mesh
//! bindings. The three pipelines — [`fix`], [`cleanup`] and [`setup_ik`] —
//! rewrite VRoid naming conventions into `<Name>_<Side>` symmetry names,
//! connect bone chains, prune junk bones and attach limb IK.

#![forbid(unsafe_code)]

mod chains;
mod config;
mod constraint;
mod error;
mod mesh;
mod naming;
mod pipeline;
mod prune;
mod rig;
mod skeleton;

pub use chains::*;
pub use config::*;
pub use constraint::*;
pub use error::*;
pub use mesh::*;
pub use naming::*;
pub use pipeline::*;
pub use prune::*;
pub use rig::*;
pub use skeleton::*;





#[cfg(test)]
mod rig_tests;
