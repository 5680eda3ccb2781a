use std::path::Path;
use unic_langid::LanguageIdentifier;

/// Validation context shared by the `examples` and `translate` commands
#[derive(Debug, Default)]
pub struct ValidationContext {
    pub input_file: Option<String>,
    pub source_language: Option<String>,
    pub target_language: Option<String>,
}

impl ValidationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input_file(mut self, file: Option<String>) -> Self {
        self.input_file = file;
        self
    }

    pub fn with_source_language(mut self, lang: String) -> Self {
        self.source_language = Some(lang);
        self
    }

    pub fn with_target_language(mut self, lang: String) -> Self {
        self.target_language = Some(lang);
        self
    }
}

/// Validate file path exists and is readable
pub fn validate_file_path(path: &str) -> Result<(), String> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        return Err(format!("File does not exist: {}", path));
    }

    if !path_obj.is_file() {
        return Err(format!("Path is not a file: {}", path));
    }

    Ok(())
}

/// Validate language code format using unic-langid; `_` is accepted as a separator
pub fn validate_language_code(lang: &str) -> Result<(), String> {
    if lang.is_empty() {
        return Err("Language code cannot be empty".to_string());
    }

    match lang.replace('_', "-").parse::<LanguageIdentifier>() {
        Ok(_) => Ok(()),
        Err(_) => Err(format!(
            "Invalid language code format: {}. Expected valid BCP 47 language identifier",
            lang
        )),
    }
}

/// Validate a complete validation context
pub fn validate_context(context: &ValidationContext) -> Result<(), String> {
    if let Some(ref input) = context.input_file {
        validate_file_path(input).map_err(|e| format!("Input file validation failed: {}", e))?;
    }

    if let Some(ref lang) = context.source_language {
        validate_language_code(lang)
            .map_err(|e| format!("Source language validation failed: {}", e))?;
    }

    if let Some(ref lang) = context.target_language {
        validate_language_code(lang)
            .map_err(|e| format!("Target language validation failed: {}", e))?;
    }

    Ok(())
}
