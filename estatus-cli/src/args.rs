//! Command-line parsing.
//!
//! Flags accept both `--flag value` and `--flag=value`. `--sensu-debug`
//! may be given bare.

use std::path::PathBuf;

use estatus_core::config::{parse_bool, CliOverrides, OutputFormat};

pub const USAGE: &str = "\
Usage: entities-status [OPTIONS]

Summarise the status of every entity in a namespace from its events.

Options:
      --sensu-api-url <URL>        Backend API URL (defaults to $SENSU_API_URL)
  -n, --namespace <NAME>           Namespace to summarise (defaults to $SENSU_NAMESPACE)
      --sensu-access-token <TOKEN> Bearer token (defaults to $SENSU_ACCESS_TOKEN)
      --sensu-api-key <KEY>        API key (defaults to $SENSU_API_KEY)
      --sensu-user <USER>          Login user (defaults to $SENSU_USER)
      --sensu-password <PASSWORD>  Login password (defaults to $SENSU_PASSWORD)
      --sensu-format <FORMAT>      tabular, yaml or wrapped-json (defaults to $SENSU_FORMAT)
      --sensu-debug[=<BOOL>]       Enable debug logging (defaults to $SENSU_DEBUG)
      --page-size <N>              Events per page request (default 200)
      --max-pages <N>              Fail after N pages still return a cursor
      --timeout <SECS>             Per-request timeout (default: none)
      --filter <KEY=VALUE>         Extra query parameter, repeatable
  -c, --config <PATH>              Config file (default: ./entities-status.toml)
  -h, --help                       Print this help
  -V, --version                    Print the version
";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run(RunArgs),
    Help,
    Version,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunArgs {
    pub config_path: Option<PathBuf>,
    pub overrides: CliOverrides,
}

/// Parse arguments, WITHOUT the program name.
pub fn parse_args(args: &[&str]) -> Result<Command, String> {
    let mut run = RunArgs::default();
    let cli = &mut run.overrides;

    let mut i = 0;
    while i < args.len() {
        let (flag, inline) = match args[i].split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag, Some(value)),
            _ => (args[i], None),
        };
        let mut value = || -> Result<String, String> {
            match inline {
                Some(v) => Ok(v.to_string()),
                None => {
                    i += 1;
                    take_arg(args, i, flag)
                }
            }
        };

        match flag {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "--sensu-api-url" => cli.api_url = Some(value()?),
            "-n" | "--namespace" => cli.namespace = Some(value()?),
            "--sensu-access-token" => cli.access_token = Some(value()?),
            "--sensu-api-key" => cli.api_key = Some(value()?),
            "--sensu-user" => cli.user = Some(value()?),
            "--sensu-password" => cli.password = Some(value()?),
            "--sensu-format" => {
                let raw = value()?;
                cli.format = Some(raw.parse::<OutputFormat>()?);
            }
            "--sensu-debug" => {
                cli.debug = Some(match inline {
                    Some(v) => parse_bool(v)
                        .ok_or_else(|| format!("--sensu-debug expects a boolean, got '{v}'"))?,
                    None => true,
                });
            }
            "--page-size" => cli.page_size = Some(parse_number(&value()?, flag)?),
            "--max-pages" => cli.max_pages = Some(parse_number(&value()?, flag)?),
            "--timeout" => cli.timeout_secs = Some(parse_number(&value()?, flag)?),
            "--filter" => {
                let raw = value()?;
                let (key, val) = raw
                    .split_once('=')
                    .filter(|(key, _)| !key.is_empty())
                    .ok_or_else(|| format!("--filter expects KEY=VALUE, got '{raw}'"))?;
                cli.filters.push((key.to_string(), val.to_string()));
            }
            "-c" | "--config" => run.config_path = Some(PathBuf::from(value()?)),
            other => return Err(format!("Unknown argument: '{other}'")),
        }
        i += 1;
    }
    Ok(Command::Run(run))
}

fn take_arg(args: &[&str], index: usize, flag: &str) -> Result<String, String> {
    match args.get(index) {
        Some(v) => Ok((*v).to_string()),
        None => Err(format!("{flag} requires a value")),
    }
}

fn parse_number<N: std::str::FromStr>(raw: &str, flag: &str) -> Result<N, String> {
    raw.parse()
        .map_err(|_| format!("{flag} expects a non-negative integer, got '{raw}'"))
}
