/// Adapters - concrete implementations of the port traits
///
/// These modules implement the port traits for specific backends and services.
pub mod memory;
pub mod openai;

pub use memory::InMemoryStorage;
pub use openai::OpenAIService;
