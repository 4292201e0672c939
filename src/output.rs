//! Output writers for generated values.

use clap::ValueEnum;
use mock_core::MockValue;
use std::io::Write;

/// Output format for generated values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON array
    #[default]
    Json,
    /// One compact JSON document per line
    Jsonl,
    /// YAML sequence
    Yaml,
}

/// Write values in the given format.
pub fn write_values<W: Write>(
    mut writer: W,
    values: Vec<MockValue>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let values: Vec<serde_json::Value> = values.into_iter().map(serde_json::Value::from).collect();

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, &values)?;
            writeln!(writer)?;
        }
        OutputFormat::Jsonl => {
            for value in &values {
                serde_json::to_writer(&mut writer, value)?;
                writeln!(writer)?;
            }
        }
        OutputFormat::Yaml => serde_yaml::to_writer(&mut writer, &values)?,
    }

    writer.flush()?;
    Ok(())
}
