/// Seam carver that owns and shrinks a pixel grid
pub mod carver;
/// Per-pixel gradient energy with wraparound borders
pub mod energy;
/// Dynamic-programming seam search shared by both orientations
pub mod seam;
