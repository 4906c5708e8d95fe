use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("duplicate bone name: {name}")]
    DuplicateBoneName { name: String },

    #[error("unknown parent index {index} for bone '{bone}'")]
    UnknownParent { bone: String, index: usize },

    #[error("skeleton has no root bone")]
    NoRoot,

    #[error("skeleton has multiple root bones: '{first}' and '{second}'")]
    MultipleRoots { first: String, second: String },

    #[error("cycle in bone hierarchy at '{name}'")]
    HierarchyCycle { name: String },
}
