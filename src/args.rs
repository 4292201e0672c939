//! CLI argument definitions.

use crate::output::OutputFormat;
use anyhow::Context;
use clap::Args;
use mock_core::{MockSchema, SeedValue};
use mock_generator::{GenerateOptions, LocaleSelector};
use mock_provider::generators::timestamp::parse_timestamp;
use mock_provider::{LocaleDefinition, Provider, DEFAULT_LOCALE};
use std::path::PathBuf;

/// Arguments of the `generate` command.
///
/// Flags take precedence over the settings in the schema file.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Path to schema YAML file
    #[arg(long, short = 's')]
    pub schema: PathBuf,

    /// Number of items to generate (default: schema file's count, then 1)
    #[arg(long, short = 'n')]
    pub count: Option<u64>,

    /// Seed for reproducible output; integers are used as is, other text is hashed
    #[arg(long, env = "SCHEMA_MOCK_SEED")]
    pub seed: Option<String>,

    /// Built-in locale code
    #[arg(long, env = "SCHEMA_MOCK_LOCALE")]
    pub locale: Option<String>,

    /// Custom locale definition YAML file
    #[arg(long, value_name = "PATH", conflicts_with = "locale")]
    pub locale_file: Option<PathBuf>,

    /// Anchor for past/recent/future dates (RFC 3339 or YYYY-MM-DD, default: start of today UTC)
    #[arg(long, value_name = "DATE")]
    pub reference_date: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

impl GenerateArgs {
    /// Options given on the command line. Unset options fall back to the
    /// schema file when the bound generator merges them.
    pub fn options(&self, schema: &MockSchema) -> anyhow::Result<GenerateOptions> {
        let mut options = GenerateOptions {
            count: self.count,
            seed: self.seed.as_deref().map(SeedValue::parse),
            locale: None,
        };

        let definition = match &self.locale_file {
            Some(path) => {
                let yaml = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read locale file: {path:?}"))?;
                let definition = LocaleDefinition::from_yaml(&yaml)
                    .with_context(|| format!("Invalid locale file: {path:?}"))?;
                Some(definition)
            }
            None => None,
        };

        match &self.reference_date {
            // A fixed reference date needs a pre-built provider
            Some(raw) => {
                let reference = parse_timestamp(raw)
                    .with_context(|| format!("Invalid reference date: {raw}"))?;
                let provider = match definition {
                    Some(definition) => Provider::from_definition(definition)?,
                    None => {
                        let code = self
                            .locale
                            .as_deref()
                            .or(schema.locale.as_deref())
                            .unwrap_or(DEFAULT_LOCALE);
                        Provider::for_locale(code)?
                    }
                };
                options.locale = Some(LocaleSelector::Provider(
                    provider.with_reference_date(reference),
                ));
            }
            None => {
                options.locale = match definition {
                    Some(definition) => Some(LocaleSelector::Definition(definition)),
                    None => self.locale.clone().map(LocaleSelector::Code),
                };
            }
        }

        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: GenerateArgs,
    }

    fn parse(argv: &[&str]) -> GenerateArgs {
        let mut full = vec!["schema-mock"];
        full.extend_from_slice(argv);
        TestCli::parse_from(full).args
    }

    fn schema() -> MockSchema {
        MockSchema::from_yaml("locale: fr\nschema: string\n").unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["--schema", "s.yaml"]);
        assert_eq!(args.format, OutputFormat::Json);
        assert!(args.output.is_none());

        let options = args.options(&schema()).unwrap();
        assert!(options.count.is_none());
        assert!(options.locale.is_none());
    }

    #[test]
    fn test_seed_parsing() {
        let args = parse(&["-s", "s.yaml", "--seed", "42", "-n", "3"]);
        let options = args.options(&schema()).unwrap();
        assert_eq!(options.seed, Some(SeedValue::Int(42)));
        assert_eq!(options.count, Some(3));

        let args = parse(&["-s", "s.yaml", "--seed", "demo"]);
        let options = args.options(&schema()).unwrap();
        assert_eq!(options.seed, Some(SeedValue::from("demo")));
    }

    #[test]
    fn test_reference_date_uses_schema_locale() {
        let args = parse(&["-s", "s.yaml", "--reference-date", "2024-03-01"]);
        let options = args.options(&schema()).unwrap();

        match options.locale {
            Some(LocaleSelector::Provider(provider)) => {
                assert_eq!(provider.locale_code(), "fr");
                assert_eq!(provider.reference_date().to_rfc3339(), "2024-03-01T00:00:00+00:00");
            }
            other => panic!("Expected provider selector, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_reference_date() {
        let args = parse(&["-s", "s.yaml", "--reference-date", "yesterday"]);
        assert!(args.options(&schema()).is_err());
    }

    #[test]
    fn test_format_flag() {
        let args = parse(&["-s", "s.yaml", "--format", "jsonl"]);
        assert_eq!(args.format, OutputFormat::Jsonl);
    }
}
