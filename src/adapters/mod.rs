// Adapters layer: concrete render targets the fetcher can write into.

pub mod document;
pub mod file;
pub mod memory;

pub use document::Document;
pub use file::FileContainer;
pub use memory::MemoryContainer;
