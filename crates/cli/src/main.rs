mod commands;
mod config;
mod relay;
mod serve;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use pagesmith_core::{ContentType, Font, Theme, ThemeConfig, DEFAULT_PRIMARY_COLOR};

use crate::commands::generate::{cmd_generate, GenerateOptions};
use crate::commands::preview::{cmd_preview, PreviewOptions};
use crate::config::Settings;

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Generate web pages and React components from a prompt, and preview them.
#[derive(Parser)]
#[command(
    name = "pagesmith",
    version,
    about = "Generate and preview web pages with a hosted language model"
)]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port to listen on (defaults to $PORT, then 4000)
        #[arg(long)]
        port: Option<u16>,
        /// Origin allowed by CORS (defaults to $PAGESMITH_ALLOWED_ORIGIN)
        #[arg(long)]
        allowed_origin: Option<String>,
    },

    /// Send one prompt to the model and print the generated markup
    Generate {
        /// Description of the page or component
        prompt: String,
        /// What to generate (html or react)
        #[arg(long = "type", default_value = "html")]
        content_type: ContentType,
        /// Print the model's text as-is, without extraction
        #[arg(long)]
        raw: bool,
    },

    /// Print a themed preview document for a file of markup
    Preview {
        /// Path to the HTML or JSX file
        file: PathBuf,
        /// Kind of markup in the file (html or react)
        #[arg(long = "type", default_value = "html")]
        content_type: ContentType,
        /// Color scheme (light, dark or colorful)
        #[arg(long, default_value = "light")]
        theme: Theme,
        /// Font family (sans, serif or mono)
        #[arg(long, default_value = "sans")]
        font: Font,
        /// Primary color for buttons
        #[arg(long, default_value = DEFAULT_PRIMARY_COLOR)]
        color: String,
        /// Transpile React code with this command (e.g. "esbuild --loader=jsx")
        #[arg(long)]
        transpiler: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_filter = default_log_filter(&cli.command, cli.quiet);
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let mut settings = Settings::load();

    match cli.command {
        Commands::Serve {
            port,
            allowed_origin,
        } => {
            if let Some(port) = port {
                settings.port = port;
            }
            if let Some(origin) = allowed_origin {
                settings.allowed_origin = origin;
            }

            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    report_error(
                        &format!("failed to create tokio runtime: {}", e),
                        cli.output,
                        cli.quiet,
                    );
                    process::exit(1);
                }
            };
            if let Err(e) = rt.block_on(serve::start_server(settings)) {
                report_error(&format!("Server error: {}", e), cli.output, cli.quiet);
                process::exit(1);
            }
        }
        Commands::Generate {
            prompt,
            content_type,
            raw,
        } => {
            cmd_generate(
                GenerateOptions {
                    prompt,
                    content_type,
                    raw,
                    output: cli.output,
                    quiet: cli.quiet,
                },
                &settings,
            );
        }
        Commands::Preview {
            file,
            content_type,
            theme,
            font,
            color,
            transpiler,
        } => {
            cmd_preview(PreviewOptions {
                file: &file,
                content_type,
                theme: ThemeConfig::new(theme, font, color),
                transpiler: transpiler.as_deref(),
                output: cli.output,
                quiet: cli.quiet,
            });
        }
    }
}

/// Logger level used when `RUST_LOG` is unset: `info` for the server's
/// access log, `warn` for one-shot commands, `error` under `--quiet`.
fn default_log_filter(command: &Commands, quiet: bool) -> &'static str {
    match (command, quiet) {
        (_, true) => "error",
        (Commands::Serve { .. }, false) => "info",
        (_, false) => "warn",
    }
}

/// Report an error to stderr in the selected output format.
pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("error: {}", msg),
        OutputFormat::Json => eprintln!("{}", serde_json::json!({ "error": msg })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(args: &[&str]) -> Commands {
        let mut argv = vec!["pagesmith"];
        argv.extend_from_slice(args);
        Cli::parse_from(argv).command
    }

    #[test]
    fn serve_logs_at_info() {
        assert_eq!(default_log_filter(&command(&["serve"]), false), "info");
    }

    #[test]
    fn one_shot_commands_log_at_warn() {
        assert_eq!(default_log_filter(&command(&["generate", "a blog"]), false), "warn");
        assert_eq!(default_log_filter(&command(&["preview", "page.html"]), false), "warn");
    }

    #[test]
    fn quiet_logs_errors_only() {
        assert_eq!(default_log_filter(&command(&["serve"]), true), "error");
    }
}
