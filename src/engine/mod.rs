// ============================================================================
// Engine Module
// Dispatch from parsed operations to the numeric core
// ============================================================================

mod evaluator;

pub use evaluator::Evaluator;
