mod message;
mod response;

pub use message::*;
pub use response::*;
