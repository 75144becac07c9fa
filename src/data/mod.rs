//! Data layer: file loading, the normalization transform, and the dataset model.
//!
//! ```text
//!   sample.txt
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  read file → trimmed lines
//!   └──────────┘
//!        │
//!        ▼
//!   ┌────────────┐      ┌────────────┐
//!   │ TextDataset │ ◄──  │ normalizer │  normalize() per line
//!   └────────────┘      └────────────┘
//!     original_lines ∥ normalized_lines
//! ```

pub mod loader;
pub mod model;
pub mod normalizer;
