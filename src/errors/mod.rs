mod builder;
mod reporter;

pub use builder::*;
pub use reporter::ErrorReporter;
