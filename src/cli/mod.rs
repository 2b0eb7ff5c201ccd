mod root;
pub use root::{parse, Command, SessidCommand};

pub mod whoami;
