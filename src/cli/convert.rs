//! The conversion command.

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};

use super::Cli;
use crate::config::ConvertConfig;
use crate::convert::convert_file;
use crate::{debug, log};

/// Convert `cli.input` and write the result.
pub fn run_convert(cli: &Cli, config: &ConvertConfig) -> Result<()> {
    let output = match &cli.output {
        Some(path) => path.clone(),
        None => derive_output_path(&cli.input)?,
    };

    let summary = convert_file(&cli.input, &output, &config.convert_options())
        .with_context(|| format!("converting {}", cli.input.display()))?;

    debug!("convert"; "{} bytes written", summary.bytes);

    let clips = match summary.clip_regions {
        0 => String::new(),
        1 => " (1 clip path)".to_string(),
        n => format!(" ({n} clip paths)"),
    };
    log!("convert"; "{} -> {}{}", cli.input.display(), output.display(), clips);
    Ok(())
}

/// Replace the last three characters of the input file name with `svg`.
///
/// `icon.xml` -> `icon.svg`. Names too short to carry a 3-character
/// extension are rejected rather than producing a nonsense path.
pub fn derive_output_path(input: &Path) -> Result<PathBuf> {
    let Some(name) = input.file_name().and_then(|n| n.to_str()) else {
        bail!(
            "cannot derive an output path from `{}`, pass --output",
            input.display()
        );
    };

    let Some((cut, _)) = name.char_indices().rev().nth(2).filter(|(i, _)| *i > 0) else {
        bail!("input name `{name}` is too short to derive an output path, pass --output");
    };

    Ok(input.with_file_name(format!("{}svg", &name[..cut])))
}
