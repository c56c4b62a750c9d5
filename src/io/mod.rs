pub mod message_io;
pub mod paths;
pub mod recovery;
