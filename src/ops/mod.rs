pub mod compose;
pub mod letter;
pub mod send;
