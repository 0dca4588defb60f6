//! Component rendering: turn a JSX snippet into a mountable React component.
//!
//! The pipeline is compose, transpile, execute. Composition happens here:
//! the snippet is wrapped in `GeneratedComponent`, a themed
//! `StyledContainer` is appended, and a mount statement targets the
//! `#react-preview` node. Transpilation goes through a [`Transpiler`]; the
//! browser-side path defers it to Babel standalone inside the preview
//! document. Execution only ever happens in the page.

use std::io::Write as _;
use std::process::{Command, Stdio};

use crate::error::RenderError;
use crate::types::ThemeConfig;

/// Id of the node the component is mounted into.
pub const MOUNT_NODE_ID: &str = "react-preview";

/// Delay before transpile-and-mount, letting the preview DOM settle.
pub const MOUNT_DELAY_MS: u32 = 100;

const REACT_UMD: &str = "https://unpkg.com/react@18/umd/react.development.js";
const REACT_DOM_UMD: &str = "https://unpkg.com/react-dom@18/umd/react-dom.development.js";
const BABEL_STANDALONE: &str = "https://unpkg.com/@babel/standalone/babel.min.js";
const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

// ── Composition ─────────────────────────────────────────────────────────────

/// How a snippet has to be wrapped to become a function body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentShape {
    /// Already contains a `return (...)` statement.
    ReturnBody,
    /// A bare JSX expression: starts with `<` and ends with `>`.
    BareMarkup,
    /// Anything else; rendered as children of a `<div>`.
    Fragment,
}

impl ComponentShape {
    pub fn classify(code: &str) -> Self {
        let code = code.trim();
        if code.contains("return") && code.contains('(') && code.contains(')') {
            ComponentShape::ReturnBody
        } else if code.starts_with('<') && code.ends_with('>') {
            ComponentShape::BareMarkup
        } else {
            ComponentShape::Fragment
        }
    }
}

/// Wrap `code` in a `GeneratedComponent` function definition.
pub fn wrap_component(code: &str) -> String {
    let code = code.trim();
    match ComponentShape::classify(code) {
        ComponentShape::ReturnBody => {
            format!("function GeneratedComponent() {{\n{}\n}}\n", code)
        }
        ComponentShape::BareMarkup => {
            format!("function GeneratedComponent() {{\n  return (\n{}\n  );\n}}\n", code)
        }
        ComponentShape::Fragment => {
            format!(
                "function GeneratedComponent() {{\n  return (\n<div>{}</div>\n  );\n}}\n",
                code
            )
        }
    }
}

/// Quote a string as a JavaScript string literal.
fn js_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

/// `StyledContainer` plus the statement mounting it into [`MOUNT_NODE_ID`].
pub fn container_source(config: &ThemeConfig) -> String {
    let mut style = vec![
        format!("fontFamily: {}", js_string(config.font.stack())),
        format!("backgroundColor: {}", js_string(config.theme.background())),
        format!("color: {}", js_string(config.theme.text_color())),
    ];
    if let Some(gradient) = config.theme.gradient() {
        style.push(format!("background: {}", js_string(gradient)));
    }
    style.push(format!(
        "\"--primary-color\": {}",
        js_string(&config.primary_color)
    ));
    style.push("minHeight: \"100%\"".to_string());
    style.push("padding: \"1rem\"".to_string());

    format!(
        "function StyledContainer() {{\n  \
           const containerStyle = {{\n    {}\n  }};\n\n  \
           return (\n    \
             <div style={{containerStyle}}>\n      \
               <GeneratedComponent />\n    \
             </div>\n  \
           );\n\
         }}\n\n\
         const container = document.getElementById({});\n\
         if (container) {{\n  \
           ReactDOM.createRoot(container).render(<StyledContainer />);\n\
         }}\n",
        style.join(",\n    "),
        js_string(MOUNT_NODE_ID)
    )
}

/// The full component source handed to the transpiler.
pub fn compose(code: &str, config: &ThemeConfig) -> String {
    format!("{}\n{}", wrap_component(code), container_source(config))
}

// ── Transpilation ───────────────────────────────────────────────────────────

/// Converts JSX source into directly executable script.
pub trait Transpiler {
    fn transpile(&self, source: &str) -> Result<String, RenderError>;
}

/// Leaves the source untouched; the preview page transpiles it with Babel.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeferredTranspiler;

impl Transpiler for DeferredTranspiler {
    fn transpile(&self, source: &str) -> Result<String, RenderError> {
        Ok(source.to_string())
    }
}

/// Runs an external command (e.g. `esbuild --loader=jsx`) that reads JSX on
/// stdin and writes script to stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalTranspiler {
    pub program: String,
    pub args: Vec<String>,
}

impl ExternalTranspiler {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Split a whitespace-separated command line. Returns `None` when empty.
    pub fn from_command_line(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self::new(program, parts.collect()))
    }
}

impl Transpiler for ExternalTranspiler {
    fn transpile(&self, source: &str) -> Result<String, RenderError> {
        let spawn_err = |err: std::io::Error| RenderError::Spawn {
            program: self.program.clone(),
            source: err,
        };

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(spawn_err)?;

        // Feed stdin from a separate thread so a large output cannot deadlock
        // against a full stdin pipe.
        let writer = child.stdin.take().map(|mut stdin| {
            let input = source.to_string();
            std::thread::spawn(move || stdin.write_all(input.as_bytes()))
        });

        let output = child.wait_with_output().map_err(spawn_err)?;

        if let Some(handle) = writer {
            // A transpiler that exits early closes the pipe; its exit status
            // below carries the real diagnosis.
            let _ = handle.join();
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let message = if stderr.is_empty() {
                format!("transpiler exited with {}", output.status)
            } else {
                stderr
            };
            return Err(RenderError::Transpile(message));
        }

        String::from_utf8(output.stdout).map_err(|_| RenderError::InvalidOutput)
    }
}

// ── Rendering ───────────────────────────────────────────────────────────────

/// Outcome of [`render_component`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    /// Executable script ready to run in the page.
    Script(String),
    /// Transpilation failed; `panel` is the HTML shown instead.
    Failed { message: String, panel: String },
}

impl Rendered {
    pub fn is_ok(&self) -> bool {
        matches!(self, Rendered::Script(_))
    }
}

/// Compose and transpile `code`, turning any failure into an error panel.
pub fn render_component(
    code: &str,
    config: &ThemeConfig,
    transpiler: &dyn Transpiler,
) -> Rendered {
    let source = compose(code, config);
    match transpiler.transpile(&source) {
        Ok(script) => Rendered::Script(script),
        Err(e) => {
            let message = e.to_string();
            Rendered::Failed {
                panel: error_panel(&message),
                message,
            }
        }
    }
}

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Inline panel showing a compile or runtime error message.
pub fn error_panel(message: &str) -> String {
    format!(
        "<div class=\"text-red-500 p-4\">\n  \
           <h3 class=\"font-bold mb-2\">Error compiling component:</h3>\n  \
           <pre class=\"bg-gray-800 p-3 rounded text-sm overflow-auto\">{}</pre>\n  \
           <p class=\"mt-3\">Try updating your code in the editor.</p>\n\
         </div>",
        escape_html(message)
    )
}

// ── Preview documents ───────────────────────────────────────────────────────

/// Embed `value` as a JS string literal inside a `<script>` element.
fn script_literal(value: &str) -> String {
    js_string(value)
        .replace("</", "<\\/")
        .replace("<!--", "<\\!--")
}

/// Browser-side twin of [`error_panel`], built with `textContent`.
const SHOW_ERROR_JS: &str = r#"function showError(err) {
    var root = document.getElementById("preview-root");
    if (!root) return;
    var panel = document.createElement("div");
    panel.className = "text-red-500 p-4";
    var title = document.createElement("h3");
    title.className = "font-bold mb-2";
    title.textContent = "Error compiling component:";
    var pre = document.createElement("pre");
    pre.className = "bg-gray-800 p-3 rounded text-sm overflow-auto";
    pre.textContent = err && err.message ? err.message : String(err);
    var hint = document.createElement("p");
    hint.className = "mt-3";
    hint.textContent = "Try updating your code in the editor.";
    panel.appendChild(title);
    panel.appendChild(pre);
    panel.appendChild(hint);
    root.replaceChildren(panel);
    console.error("Component compilation error:", err);
  }
  window.addEventListener("error", function (event) { showError(event.error || event.message); });"#;

fn document_shell(load_babel: bool, run: &str) -> String {
    let babel = if load_babel {
        format!("<script src=\"{}\"></script>\n", BABEL_STANDALONE)
    } else {
        String::new()
    };
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <script src=\"{tailwind}\"></script>\n\
         <script crossorigin src=\"{react}\"></script>\n\
         <script crossorigin src=\"{react_dom}\"></script>\n\
         {babel}\
         </head>\n\
         <body>\n\
         <div id=\"preview-root\" class=\"p-4 h-full w-full\"><div id=\"{mount}\"></div></div>\n\
         <script>\n\
         (function () {{\n  \
           {show_error}\n  \
           setTimeout(function () {{\n    \
             try {{\n\
         {run}\n    \
             }} catch (err) {{\n      \
               showError(err);\n    \
             }}\n  \
           }}, {delay});\n\
         }})();\n\
         </script>\n\
         </body>\n\
         </html>\n",
        tailwind = TAILWIND_CDN,
        react = REACT_UMD,
        react_dom = REACT_DOM_UMD,
        babel = babel,
        mount = MOUNT_NODE_ID,
        show_error = SHOW_ERROR_JS,
        run = run,
        delay = MOUNT_DELAY_MS,
    )
}

/// A standalone page that transpiles `code` with Babel and mounts it.
pub fn preview_document(code: &str, config: &ThemeConfig) -> String {
    let run = format!(
        "      var source = {};\n      \
         var compiled = Babel.transform(source, {{ presets: [\"react\", \"env\"] }}).code;\n      \
         new Function(\"React\", \"ReactDOM\", compiled)(React, ReactDOM);",
        script_literal(&compose(code, config))
    );
    document_shell(true, &run)
}

/// A standalone page that runs already-transpiled `script`.
pub fn compiled_document(script: &str) -> String {
    let run = format!(
        "      new Function(\"React\", \"ReactDOM\", {})(React, ReactDOM);",
        script_literal(script)
    );
    document_shell(false, &run)
}
