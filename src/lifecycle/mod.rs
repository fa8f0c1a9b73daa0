// Lifecycle module for batch status and progress derivation
//
// Status and progress are never stored. Both are recomputed from a batch's
// interval and an explicit evaluation instant on every call.

pub mod classifier;
pub mod progress;
pub mod states;

// Re-export main types for convenient access
pub use classifier::classify;
pub use progress::progress;
pub use states::BatchStatus;
