pub mod in_memory_repository;
pub mod json_file_repository;

pub use in_memory_repository::InMemoryGameRepository;
pub use json_file_repository::JsonFileGameRepository;
