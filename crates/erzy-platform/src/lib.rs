pub mod paths;
pub mod pointer;
pub mod storage;

pub use paths::{config_dir, config_file, data_dir, ensure_dirs, storage_file};
pub use pointer::{PointerEvent, PointerPhase, PointerSource};
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore};
