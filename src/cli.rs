use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value;
use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};
use usaddr_boundary as boundary;
use usaddr_entities::{
    address::{Address, Field, Format},
    state,
};

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "usaddr", version, about = "Render standardized US postal addresses")]
struct Cli {
    /// Configuration file (default: usaddr.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render addresses given as a JSON object or array
    Render {
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,
        /// Write all derived values as JSON
        #[arg(long)]
        json: bool,
        /// JSON input file, stdin if omitted or "-"
        input: Option<PathBuf>,
    },
    /// List the recognized address fields
    Fields,
    /// Look up a state or territory abbreviation
    Lookup { state: String },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Line1,
    Line2,
    Default,
}

impl From<FormatArg> for Format {
    fn from(from: FormatArg) -> Self {
        match from {
            FormatArg::Line1 => Self::Line1,
            FormatArg::Line2 => Self::Line2,
            FormatArg::Default => Self::Default,
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let cfg = Config::try_load_from_file_or_default(cli.config.as_ref())?;
    let mut out = io::stdout().lock();
    match cli.command {
        Command::Render {
            format,
            json,
            input,
        } => {
            let input = read_input(input.as_deref())?;
            let addresses = parse_addresses(&input)?;
            log::debug!("Read {} address(es)", addresses.len());
            if json {
                write_json(&mut out, &addresses)?;
            } else {
                let format = format.map(Into::into).unwrap_or(cfg.render.format);
                write_lines(&mut out, &addresses, format)?;
            }
        }
        Command::Fields => {
            for field in Field::all() {
                writeln!(out, "{field}")?;
            }
        }
        Command::Lookup { state: abbr } => {
            let Some(name) = state::name(&abbr) else {
                bail!("Unknown state abbreviation '{abbr}'");
            };
            let name = state::capitalize_first(name);
            match state::fips_code(&abbr) {
                Some(fips) => writeln!(out, "{name}\t{fips}")?,
                None => writeln!(out, "{name}")?,
            }
        }
    }
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Unable to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Unable to read stdin")?;
            Ok(buf)
        }
    }
}

fn parse_addresses(input: &str) -> Result<Vec<Address>> {
    let value: Value = serde_json::from_str(input).context("Invalid JSON input")?;
    let addresses: Vec<boundary::Address> = if value.is_array() {
        serde_json::from_value(value)
    } else {
        serde_json::from_value(value).map(|addr| vec![addr])
    }
    .context("Invalid address")?;
    let addresses: Vec<Address> = addresses.into_iter().map(Into::into).collect();
    for (i, addr) in addresses.iter().enumerate() {
        if addr.is_empty() {
            log::warn!("Address #{} has no fields set", i + 1);
        }
        if let Some(abbr) = addr.state.as_deref() {
            if state::name(abbr).is_none() {
                log::warn!("Unknown state abbreviation '{abbr}' in '{addr}'");
            }
        }
    }
    Ok(addresses)
}

fn write_lines<W: Write>(out: &mut W, addresses: &[Address], format: Format) -> Result<()> {
    for addr in addresses {
        writeln!(out, "{}", addr.render(format))?;
    }
    Ok(())
}

fn write_json<W: Write>(out: &mut W, addresses: &[Address]) -> Result<()> {
    let rendered: Vec<_> = addresses.iter().map(boundary::RenderedAddress::from).collect();
    serde_json::to_writer_pretty(&mut *out, &rendered)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use usaddr_entities::builders::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_format_argument() {
        let cli = Cli::try_parse_from(["usaddr", "render", "--format", "line1", "in.json"]).unwrap();
        let Command::Render { format, input, .. } = cli.command else {
            panic!("render command expected");
        };
        assert_eq!(Format::from(format.unwrap()), Format::Line1);
        assert_eq!(input.unwrap(), PathBuf::from("in.json"));
        assert!(Cli::try_parse_from(["usaddr", "render", "--format", "line3"]).is_err());
    }

    #[test]
    fn parse_single_object_and_array() {
        let one = parse_addresses(r#"{"number":"123","street":"Main"}"#).unwrap();
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].to_string(), "123 Main");

        let many = parse_addresses(r#"[{"street":"Main","street2":"Oak"},{"city":"Springfield"}]"#)
            .unwrap();
        assert_eq!(many.len(), 2);
        assert_eq!(many[0].to_string(), "Main and Oak");
        assert_eq!(many[1].to_string(), "Springfield");
    }

    #[test]
    fn reject_unknown_address_fields() {
        let err = parse_addresses(r#"{"number":"123","country":"US"}"#).unwrap_err();
        assert!(format!("{err:#}").contains("unknown field `country`"));
        assert!(parse_addresses("not json").is_err());
    }

    #[test]
    fn write_rendered_lines() {
        let addresses = parse_addresses(
            r#"[
                {"number":"123","street":"Main","street_type":"St","unit":"4B",
                 "city":"Springfield","state":"IL","postal_code":"62701"},
                {"city":"Springfield","state":"IL"}
            ]"#,
        )
        .unwrap();
        let mut out = Vec::new();
        write_lines(&mut out, &addresses, Format::Default).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "123 Main St # 4B, Springfield, IL 62701\nSpringfield, IL\n"
        );
        let mut out = Vec::new();
        write_lines(&mut out, &addresses, Format::Line1).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "123 Main St # 4B\n\n");
    }

    #[test]
    fn write_intersection_and_unit_lines() {
        let addresses = [
            Address::build()
                .street("Hollywood")
                .street_type("Blvd")
                .street2("Vine")
                .street_type2("St")
                .city("Los Angeles")
                .state("CA")
                .finish(),
            Address::build()
                .number("10")
                .street("Broadway")
                .street_type("St")
                .redundant_street_type(true)
                .unit_prefix("Ste")
                .unit("200")
                .finish(),
        ];
        let mut out = Vec::new();
        write_lines(&mut out, &addresses, Format::Line1).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Hollywood Blvd and Vine St\n10 Broadway Ste 200\n"
        );

        let mut out = Vec::new();
        write_json(&mut out, &addresses).unwrap();
        let value: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["intersection"], true);
        assert_eq!(value[1]["line1_without_unit"], "10 Broadway");
    }

    #[test]
    fn empty_objects_are_accepted() {
        let addresses = parse_addresses("[{}]").unwrap();
        assert!(addresses[0].is_empty());
        assert_eq!(addresses[0].to_string(), "");
    }

    #[test]
    fn write_rendered_json() {
        let addresses = parse_addresses(r#"{"street":"Main","state":"IL"}"#).unwrap();
        let mut out = Vec::new();
        write_json(&mut out, &addresses).unwrap();
        let value: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["full"], "Main, IL");
        assert_eq!(value[0]["state_name"], "Illinois");
        assert_eq!(value[0]["state_fips"], "17");
        assert_eq!(value[0]["intersection"], false);
    }
}
