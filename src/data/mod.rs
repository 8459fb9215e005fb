/// Data layer: tokens, type detection, sorting, loading, generating, saving.
///
/// Architecture:
/// ```text
///   .txt file          generator
///       │                  │
///       ▼                  ▼
///   ┌──────────┐     ┌───────────┐
///   │  loader   │     │ generator │   → Vec<Token>
///   └──────────┘     └───────────┘
///             │        │
///             ▼        ▼
///        ┌──────────────────┐
///        │  detect  (+sort)  │   integer → float → text cascade
///        └──────────────────┘
///                 │
///                 ▼
///          ┌────────────┐
///          │ SortedData │   Integers | Floats | Text
///          └────────────┘
///                 │
///                 ▼
///           ┌──────────┐
///           │  writer   │   one rendered value per line
///           └──────────┘
/// ```

pub mod detect;
pub mod error;
pub mod generator;
pub mod loader;
pub mod model;
pub mod sort;
pub mod writer;

pub use detect::{detect_and_sort, detect_kind};
pub use error::{DataError, Result};
pub use generator::{generate, generate_with, DataKind, GENERATION_SIZES};
pub use loader::load_file;
pub use model::{join_tokens, split_tokens, SortedData, Token, ValueKind};
pub use sort::SortAlgorithm;
pub use writer::{save_file, save_lines, DEFAULT_OUTPUT_FILE};
