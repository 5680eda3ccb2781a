//! Implementations of the `examples` and `translate` subcommands.
//!
//! Both return the text to print, so they can be exercised without a process.

use plural_mt::{
    CldrRuleProvider, PluralForms, PluralTranslation, PluralTranslationRequest,
    PluralTranslationSummary, TranslateOptions, source_examples_for,
};

use crate::{
    translators::TranslatorKind,
    validation::{ValidationContext, validate_context},
};

/// Where the source ICU message comes from.
#[derive(Debug, Clone)]
pub enum MessageSource {
    Text(String),
    File(String),
}

impl MessageSource {
    pub fn from_args(text: Option<String>, input: Option<String>) -> Result<Self, String> {
        match (text, input) {
            (Some(text), None) => Ok(MessageSource::Text(text)),
            (None, Some(path)) => Ok(MessageSource::File(path)),
            (Some(_), Some(_)) => Err("Use either --text or --input, not both".to_string()),
            (None, None) => Err("A source message is required (--text or --input)".to_string()),
        }
    }

    fn input_file(&self) -> Option<String> {
        match self {
            MessageSource::File(path) => Some(path.clone()),
            MessageSource::Text(_) => None,
        }
    }

    fn read(&self) -> Result<String, String> {
        match self {
            MessageSource::Text(text) => Ok(text.clone()),
            MessageSource::File(path) => std::fs::read_to_string(path)
                .map_err(|e| format!("Error reading {}: {}", path, e)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExamplesArgs {
    pub source_language: String,
    pub target_language: String,
    pub message: MessageSource,
    pub json: bool,
}

#[derive(Debug, Clone)]
pub struct TranslateArgs {
    pub source_language: String,
    pub target_language: String,
    pub message: MessageSource,
    pub translator: TranslatorKind,
    pub service: String,
    pub target_language_id: u64,
    pub options: TranslateOptions,
    pub json: bool,
}

/// Shows, per target plural category, the source text a translator should
/// look at.
pub fn run_examples(args: &ExamplesArgs) -> Result<String, String> {
    validate(&args.message, &args.source_language, &args.target_language)?;
    let text = args.message.read()?;
    let forms = PluralForms::from_icu(&text).map_err(|e| e.to_string())?;

    let examples = source_examples_for(
        &CldrRuleProvider,
        &args.source_language,
        &args.target_language,
        &forms,
    );

    if args.json {
        return serde_json::to_string_pretty(&examples)
            .map_err(|e| format!("Error serializing to JSON: {}", e));
    }
    Ok(examples
        .iter()
        .map(|(category, example)| format!("{}: {}", category, example))
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Translates the message with an offline translator.
pub fn run_translate(args: &TranslateArgs) -> Result<String, String> {
    validate(&args.message, &args.source_language, &args.target_language)?;
    let text = args.message.read()?;

    let translation = PluralTranslation::new(
        PluralTranslationRequest {
            source_text: &text,
            source_language: &args.source_language,
            target_language: &args.target_language,
            service: args.service.clone(),
            target_language_id: args.target_language_id,
        },
        &CldrRuleProvider,
        args.options.clone(),
    )
    .map_err(|e| e.to_string())?;

    let mut translator = args.translator.build();
    let result = translation.translate(translator.as_mut());
    if let Some(e) = &result.error {
        tracing::warn!(error = %e, "some plural forms failed to translate");
    }

    if args.json {
        return serde_json::to_string_pretty(&PluralTranslationSummary::from(&result))
            .map_err(|e| format!("Error serializing to JSON: {}", e));
    }
    Ok(result.translated_text)
}

fn validate(message: &MessageSource, source: &str, target: &str) -> Result<(), String> {
    let context = ValidationContext::new()
        .with_input_file(message.input_file())
        .with_source_language(source.to_string())
        .with_target_language(target.to_string());
    validate_context(&context)
}
