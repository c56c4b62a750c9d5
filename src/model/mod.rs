pub mod message;
pub mod recipient;

pub use message::*;
pub use recipient::*;
