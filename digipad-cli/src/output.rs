use crate::error::CliError;
use clap::ValueEnum;
use digipad_core::PadBatch;
use std::fs;
use std::path::Path;

/// How a generated batch is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Plain text blocks separated by blank lines
    Text,
    /// A minimal HTML page with one block per pad
    Html,
}

/// Renders the batch in the requested format.
pub(crate) fn render(batch: &PadBatch, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => batch.to_string(),
        OutputFormat::Html => render_html(batch),
    }
}

fn render_html(batch: &PadBatch) -> String {
    let mut html = String::from("<html>\n");
    html.push_str("<head><title>OTP Generator</title></head>\n");
    html.push_str("<body>\n");
    for pad in batch {
        html.push_str("<div>\n");
        html.push_str(&pad.text().replace('\n', "<br>"));
        html.push_str("\n</div>\n<br>\n");
    }
    html.push_str("</body>\n");
    html.push_str("</html>");
    html
}

/// Prints `rendered` to stdout, or writes it to `path`.
///
/// Text written to a file ends with a newline; HTML is written as is.
pub(crate) fn emit(
    rendered: &str,
    format: OutputFormat,
    path: Option<&Path>,
) -> Result<(), CliError> {
    match path {
        None => {
            println!("{rendered}");
            Ok(())
        }
        Some(path) => {
            let contents = match format {
                OutputFormat::Text => format!("{rendered}\n"),
                OutputFormat::Html => rendered.to_string(),
            };
            fs::write(path, contents).map_err(CliError::io(path))
        }
    }
}
