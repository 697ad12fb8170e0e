pub mod atomic_writer;
pub mod json_file_store;

pub use atomic_writer::replace_file;
pub use json_file_store::{JsonFileStore, FORMAT_VERSION};
