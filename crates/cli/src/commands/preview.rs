use std::path::Path;
use std::process;

use pagesmith_core::component::compiled_document;
use pagesmith_core::{
    render_component, render_preview, strip_code_fences, ContentType, ExternalTranspiler,
    PreviewRequest, Rendered, ThemeConfig,
};

use crate::{report_error, OutputFormat};

/// Options for the `pagesmith preview` command.
pub(crate) struct PreviewOptions<'a> {
    pub file: &'a Path,
    pub content_type: ContentType,
    pub theme: ThemeConfig,
    pub transpiler: Option<&'a str>,
    pub output: OutputFormat,
    pub quiet: bool,
}

/// Print the preview document for a file of markup.
pub(crate) fn cmd_preview(opts: PreviewOptions<'_>) {
    let content = match std::fs::read_to_string(opts.file) {
        Ok(s) => s,
        Err(e) => {
            let msg = format!("error reading '{}': {}", opts.file.display(), e);
            report_error(&msg, opts.output, opts.quiet);
            process::exit(1);
        }
    };

    if let Err(e) = opts.theme.validate() {
        report_error(&e.to_string(), opts.output, opts.quiet);
        process::exit(1);
    }

    let transpiler = opts
        .transpiler
        .and_then(ExternalTranspiler::from_command_line);

    match (opts.content_type, transpiler) {
        (ContentType::React, Some(transpiler)) => {
            let code = strip_code_fences(&content);
            match render_component(code, &opts.theme, &transpiler) {
                Rendered::Script(script) => print!("{}", compiled_document(&script)),
                Rendered::Failed { message, panel } => {
                    println!("{}", panel);
                    report_error(&message, opts.output, opts.quiet);
                    process::exit(1);
                }
            }
        }
        (content_type, _) => {
            let request = PreviewRequest {
                content,
                content_type,
                theme: opts.theme,
            };
            match render_preview(&request) {
                Ok(document) => print!("{}", document),
                Err(e) => {
                    report_error(&e.to_string(), opts.output, opts.quiet);
                    process::exit(1);
                }
            }
        }
    }
}
