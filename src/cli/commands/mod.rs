pub mod bump;
pub mod check;
mod command_result;
pub mod init;

pub use command_result::*;
