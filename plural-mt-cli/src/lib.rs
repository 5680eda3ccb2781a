//! CLI library for testing purposes

pub mod commands;
pub mod config;
pub mod translators;
pub mod validation;

pub use commands::{ExamplesArgs, MessageSource, TranslateArgs, run_examples, run_translate};
pub use config::CliConfig;
pub use translators::{PseudoTranslator, TranslatorKind};
