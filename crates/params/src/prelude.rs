//! Re-exports of the parameter types.

pub use crate::{
    errors::ParamsError,
    operations::{ProtectedOp, ValidatorOpsParams},
};
