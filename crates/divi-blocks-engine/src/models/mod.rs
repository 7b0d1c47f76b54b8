pub mod node;
pub mod page;
pub mod source_file;

pub use node::{ButtonBlock, ColumnGroup, ColumnsBlock, ImageBlock, Node, RowGroup, TextBlock};
pub use page::PageDocument;
pub use source_file::SourceFile;
