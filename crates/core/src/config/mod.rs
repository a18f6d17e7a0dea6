pub mod directives;
pub mod loader;
pub mod parser;

pub use directives::{AnalyzerOverrides, Directive, WordList};
pub use loader::{ConfigLoader, ConfigLoaderBuilder};
pub use parser::ConfigParser;
