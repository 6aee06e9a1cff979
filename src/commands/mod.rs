pub mod init;
pub mod status;

pub use init::*;
pub use status::*;
