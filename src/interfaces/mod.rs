// ============================================================================
// Interfaces Module
// Operation vocabulary and result value contracts
// ============================================================================

mod operation;
mod value;

pub use operation::{Arity, Operation};
pub use value::Value;
