pub mod directories;
pub mod export;
pub mod logging;
