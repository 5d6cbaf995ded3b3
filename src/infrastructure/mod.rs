pub mod fixtures;
pub mod in_memory;
