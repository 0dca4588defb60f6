use std::process;

use pagesmith_core::{extract_html, strip_code_fences, ContentType, GenerationRequest};

use crate::config::Settings;
use crate::relay::relay;
use crate::serve::provider_from_settings;
use crate::{report_error, OutputFormat};

/// Options for the `pagesmith generate` command.
pub(crate) struct GenerateOptions {
    pub prompt: String,
    pub content_type: ContentType,
    pub raw: bool,
    pub output: OutputFormat,
    pub quiet: bool,
}

/// Run one generation and print the result.
pub(crate) fn cmd_generate(opts: GenerateOptions, settings: &Settings) {
    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            report_error(
                &format!("failed to create tokio runtime: {}", e),
                opts.output,
                opts.quiet,
            );
            process::exit(1);
        }
    };

    let provider = provider_from_settings(settings);
    let request = GenerationRequest::new(opts.prompt, opts.content_type);

    let mut result = match rt.block_on(relay(provider.as_deref(), &request)) {
        Ok(result) => result,
        Err(e) => {
            report_error(&e.to_string(), opts.output, opts.quiet);
            process::exit(1);
        }
    };

    if !opts.raw {
        result.content = match result.content_type {
            ContentType::Html => extract_html(&result.content).to_string(),
            ContentType::React => strip_code_fences(&result.content).to_string(),
        };
    }

    match opts.output {
        OutputFormat::Text => println!("{}", result.content),
        OutputFormat::Json => match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                report_error(
                    &format!("failed to serialize result: {}", e),
                    opts.output,
                    opts.quiet,
                );
                process::exit(1);
            }
        },
    }
}
