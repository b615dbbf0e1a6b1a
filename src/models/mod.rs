pub mod port;
pub mod record;
pub mod status;

pub use port::Port;
pub use record::{ContainerRecord, RecordFields, RecordPatch};
pub use status::Status;
