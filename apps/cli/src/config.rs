// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Configuration loaded from environment variables and command-line flags.

use crate::error::CliError;
use roominfo_core::{CatalogOptions, LengthUnit, DEFAULT_MIN_GROSS_AREA};
use std::path::PathBuf;

/// Run configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Internal length unit of the source model.
    pub unit: LengthUnit,
    /// Decimal places of exported values.
    pub decimals: u32,
    /// Reject rooms with mis-wound boundary rings.
    pub validate_winding: bool,
    /// Gross area under which a room is considered stale.
    pub min_gross_area: f64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration through a variable lookup, falling back to defaults.
    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            unit: var("ROOMINFO_LENGTH_UNIT")
                .and_then(|v| LengthUnit::from_name(&v))
                .unwrap_or_default(),
            decimals: var("ROOMINFO_DECIMALS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(3),
            validate_winding: var("ROOMINFO_VALIDATE_WINDING")
                .and_then(|v| parse_bool(&v))
                .unwrap_or(true),
            min_gross_area: var("ROOMINFO_MIN_GROSS_AREA")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_MIN_GROSS_AREA),
        }
    }

    /// Apply command-line overrides.
    pub fn with_args(mut self, args: &Args) -> Self {
        if let Some(unit) = args.unit {
            self.unit = unit;
        }
        if let Some(decimals) = args.decimals {
            self.decimals = decimals;
        }
        if args.no_winding_check {
            self.validate_winding = false;
        }
        self
    }

    pub fn catalog_options(&self) -> CatalogOptions {
        CatalogOptions {
            min_gross_area: self.min_gross_area,
            validate_winding: self.validate_winding,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Parsed command-line arguments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub unit: Option<LengthUnit>,
    pub decimals: Option<u32>,
    pub no_winding_check: bool,
}

/// What the command line asks for.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Run(Args),
}

/// Parse arguments (without the program name).
pub fn parse_args<I>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut parsed = Args::default();
    let mut input: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--output" | "-o" => {
                parsed.output = Some(PathBuf::from(next_value(&mut args, &arg)?));
            }
            "--unit" => {
                let value = next_value(&mut args, &arg)?;
                parsed.unit = Some(LengthUnit::from_name(&value).ok_or(CliError::InvalidValue {
                    option: arg.clone(),
                    value,
                })?);
            }
            "--decimals" => {
                let value = next_value(&mut args, &arg)?;
                parsed.decimals = Some(value.parse().map_err(|_| CliError::InvalidValue {
                    option: arg.clone(),
                    value: value.clone(),
                })?);
            }
            "--no-winding-check" => {
                parsed.no_winding_check = true;
            }
            other if other.starts_with('-') => {
                return Err(CliError::UnknownOption(other.to_string()));
            }
            _ if input.is_none() => {
                input = Some(PathBuf::from(&arg));
            }
            other => {
                return Err(CliError::UnknownOption(other.to_string()));
            }
        }
    }

    parsed.input = input.ok_or(CliError::MissingInput)?;
    Ok(Command::Run(parsed))
}

fn next_value<I>(args: &mut I, option: &str) -> Result<String, CliError>
where
    I: Iterator<Item = String>,
{
    args.next()
        .ok_or_else(|| CliError::MissingValue(option.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_vars(|_| None);
        assert_eq!(config.unit, LengthUnit::Feet);
        assert_eq!(config.decimals, 3);
        assert!(config.validate_winding);
        assert_eq!(config.min_gross_area, DEFAULT_MIN_GROSS_AREA);
    }

    #[test]
    fn test_config_from_vars() {
        let config = Config::from_vars(|key| match key {
            "ROOMINFO_LENGTH_UNIT" => Some("mm".into()),
            "ROOMINFO_DECIMALS" => Some("2".into()),
            "ROOMINFO_VALIDATE_WINDING" => Some("off".into()),
            "ROOMINFO_MIN_GROSS_AREA" => Some("not a number".into()),
            _ => None,
        });
        assert_eq!(config.unit, LengthUnit::Millimetre);
        assert_eq!(config.decimals, 2);
        assert!(!config.validate_winding);
        assert_eq!(config.min_gross_area, DEFAULT_MIN_GROSS_AREA);
    }

    #[test]
    fn test_parse_args() {
        let command = parse_args(args(&[
            "rooms.json",
            "--output",
            "out.json",
            "--unit",
            "metre",
            "--decimals",
            "1",
            "--no-winding-check",
        ]))
        .unwrap();

        let Command::Run(parsed) = command else {
            panic!("expected run command");
        };
        assert_eq!(parsed.input, PathBuf::from("rooms.json"));
        assert_eq!(parsed.output, Some(PathBuf::from("out.json")));
        assert_eq!(parsed.unit, Some(LengthUnit::Metre));

        let config = Config::from_vars(|_| None).with_args(&parsed);
        assert_eq!(config.unit, LengthUnit::Metre);
        assert_eq!(config.decimals, 1);
        assert!(!config.catalog_options().validate_winding);
    }

    #[test]
    fn test_parse_args_errors() {
        assert_eq!(parse_args(args(&[])), Err(CliError::MissingInput));
        assert_eq!(parse_args(args(&["-h"])), Ok(Command::Help));
        assert_eq!(
            parse_args(args(&["rooms.json", "--bogus"])),
            Err(CliError::UnknownOption("--bogus".into()))
        );
        assert_eq!(
            parse_args(args(&["rooms.json", "--unit"])),
            Err(CliError::MissingValue("--unit".into()))
        );
        assert!(matches!(
            parse_args(args(&["rooms.json", "--unit", "furlong"])),
            Err(CliError::InvalidValue { .. })
        ));
    }
}
