pub mod archive;
pub mod assembler;
pub mod content;
pub mod pipeline;

pub use archive::{ArchiveWriter, JsonArchive};
pub use assembler::{AssembledTerm, EntryAssembler};
pub use pipeline::{run, BuildReport};
