// crates/infra/src/persistence.rs
pub mod file_reader;
pub mod file_writer;
pub mod text_store;

pub use file_reader::FileReader;
pub use file_writer::FileWriter;
pub use text_store::FsTextStore;
