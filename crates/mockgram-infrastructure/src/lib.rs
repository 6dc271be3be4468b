pub mod config_service;
pub mod image_picker;
pub mod paths;
pub mod profile_repository;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::image_picker::FsImagePicker;
pub use crate::profile_repository::KeyValueProfileRepository;
pub use crate::storage::{FileKeyValueStore, MemoryKeyValueStore};
