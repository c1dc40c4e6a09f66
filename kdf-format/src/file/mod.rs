pub mod reader;
pub mod writer;

pub use self::reader::KeyedFileReader;
pub use self::writer::KeyedFileWriter;
