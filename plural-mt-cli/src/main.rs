use std::path::PathBuf;

use clap::{Parser, Subcommand};
use plural_mt_cli::{
    CliConfig, ExamplesArgs, MessageSource, TranslateArgs, TranslatorKind, run_examples,
    run_translate,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML config file with default languages, translator and options
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log alignment and per-branch translation details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the source example text for each plural category of the target language.
    Examples {
        /// Source language code
        #[arg(long)]
        from: Option<String>,
        /// Target language code
        #[arg(long)]
        to: Option<String>,
        /// ICU plural message
        #[arg(short, long)]
        text: Option<String>,
        /// File containing the ICU plural message
        #[arg(short, long)]
        input: Option<String>,
        /// Print JSON instead of one line per category
        #[arg(long)]
        json: bool,
    },

    /// Translate an ICU plural message into the target language's plural categories.
    Translate {
        /// Source language code
        #[arg(long)]
        from: Option<String>,
        /// Target language code
        #[arg(long)]
        to: Option<String>,
        /// ICU plural message
        #[arg(short, long)]
        text: Option<String>,
        /// File containing the ICU plural message
        #[arg(short, long)]
        input: Option<String>,
        /// Offline translator to use
        #[arg(long, value_enum)]
        translator: Option<TranslatorKind>,
        /// Service name reported in the result
        #[arg(long)]
        service: Option<String>,
        /// Numeric id of the target language reported in the result
        #[arg(long, default_value_t = 0)]
        target_language_id: u64,
        /// Example number for a keyword form (e.g. `one`) the target language has no example for
        #[arg(long)]
        fallback_example: Option<i64>,
        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn required(
    value: Option<String>,
    fallback: &Option<String>,
    flag: &str,
) -> Result<String, String> {
    value
        .or_else(|| fallback.clone())
        .ok_or_else(|| format!("{} is required (flag or config file)", flag))
}

fn run(args: Args) -> Result<String, String> {
    let config = CliConfig::load(args.config.as_deref())?;

    match args.commands {
        Commands::Examples {
            from,
            to,
            text,
            input,
            json,
        } => run_examples(&ExamplesArgs {
            source_language: required(from, &config.source_language, "--from")?,
            target_language: required(to, &config.target_language, "--to")?,
            message: MessageSource::from_args(text, input)?,
            json,
        }),
        Commands::Translate {
            from,
            to,
            text,
            input,
            translator,
            service,
            target_language_id,
            fallback_example,
            json,
        } => {
            let translator = translator.or(config.translator).unwrap_or_default();
            let mut options = config.options.clone();
            if let Some(example) = fallback_example {
                options = options.with_fallback_example(example);
            }
            run_translate(&TranslateArgs {
                source_language: required(from, &config.source_language, "--from")?,
                target_language: required(to, &config.target_language, "--to")?,
                message: MessageSource::from_args(text, input)?,
                translator,
                service: service
                    .or_else(|| config.service.clone())
                    .unwrap_or_else(|| format!("{:?}", translator).to_lowercase()),
                target_language_id,
                options,
                json,
            })
        }
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
