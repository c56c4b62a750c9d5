pub mod pickup;
pub mod prompts;
pub mod templates;

pub use pickup::*;
pub use prompts::*;
pub use templates::*;
