mod files;
mod logging;
mod paths;
mod throughput;

pub use files::*;
pub use logging::*;
pub use paths::*;
pub use throughput::*;
