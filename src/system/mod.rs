// System Layer
pub mod classifier;
pub mod filesystem;

pub use classifier::{classify, ContentKind};
pub use filesystem::{FileSystem, RootEntry};
