mod reader;
pub mod worker;

pub use reader::{read_file, FileContent};
