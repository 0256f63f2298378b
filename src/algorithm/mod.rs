/// Rotation search for edge-middle and corner cards
pub mod alignment;
/// Odometer over tied edge-middle rotations
pub mod ambiguity;
/// Searching on a worker thread
pub mod background;
/// Card relocation by target id order
pub mod mover;
/// Lazy Heap's-algorithm permutation generator
pub mod permutation;
/// Center promotion and outer-ring enumeration
pub mod rearrange;
/// Search state machine and report
pub mod solver;
