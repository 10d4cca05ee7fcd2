// smart-linkify/src/commands/linkify.rs
//! The `linkify` command: rewrite input text into linked markup.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::io::{self, BufRead, Write};

use smart_linkify_core::{LinkifyEngine, LinkifyOptions};

use crate::cli::LinkifyCommand;
use crate::commands::options::resolve_options;
use crate::commands::read_input;

/// Runs the `linkify` command.
pub fn run_linkify(cmd: &LinkifyCommand) -> Result<()> {
    info!("Starting linkify operation.");
    let options = resolve_options(&cmd.options)?;

    let mut writer: Box<dyn Write> = match &cmd.output {
        Some(path) => {
            info!("Writing output to file: {}", path.display());
            Box::new(
                fs::File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?,
            )
        }
        None => Box::new(io::stdout().lock()),
    };

    if cmd.line_buffered && cmd.input_file.is_none() {
        linkify_lines(io::stdin().lock(), &mut writer, &options)?;
    } else {
        let input = read_input(cmd.input_file.as_deref())?;
        if cmd.line_buffered {
            linkify_lines(input.as_bytes(), &mut writer, &options)?;
        } else {
            let output = LinkifyEngine::new(&options).linkify(&input).context("Linkify failed")?;
            debug!("Input length: {}, output length: {}", input.len(), output.len());
            writer.write_all(output.as_bytes())?;
        }
    }
    writer.flush()?;
    info!("Linkify operation completed.");
    Ok(())
}

/// Linkifies each line independently, flushing after every line.
pub fn linkify_lines<R: BufRead, W: Write + ?Sized>(reader: R, writer: &mut W, options: &LinkifyOptions) -> Result<()> {
    let engine = LinkifyEngine::new(options);
    for (idx, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read input line")?;
        let output = engine
            .linkify(&line)
            .with_context(|| format!("Linkify failed on line {}", idx + 1))?;
        writeln!(writer, "{}", output)?;
        writer.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linkify_lines_handles_each_line() -> Result<()> {
        let input = "see a.io\nplain\nand b.io\n";
        let mut out = Vec::new();
        linkify_lines(input.as_bytes(), &mut out, &LinkifyOptions::default())?;
        let text = String::from_utf8(out)?;
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("see <a href=\"https://a.io\""));
        assert_eq!(lines[1], "plain");
        assert!(lines[2].contains("href=\"https://b.io\""));
        Ok(())
    }

    #[test]
    fn test_line_errors_name_the_line() {
        let options = LinkifyOptions { max_input_length: Some(5), ..Default::default() };
        let mut out = Vec::new();
        let err = linkify_lines("ok\nthis line is too long\n".as_bytes(), &mut out, &options).unwrap_err();
        assert!(format!("{:#}", err).contains("line 2"));
    }
}
