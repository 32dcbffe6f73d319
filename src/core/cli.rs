use crate::errors::{Error, Result, require_parse};
use std::path::PathBuf;

pub const USAGE: &str =
    "Usage: pawpal --plan <plan.json> [--config <config.json>] [--logs <dir>] [--json] [--show-config]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub plan_path: PathBuf,
    pub config_path: Option<PathBuf>,
    pub logs_dir: PathBuf,
    pub json: bool,
    pub show_config: bool,
}

impl CliArgs {
    pub fn from_env() -> Result<Self> {
        Self::from_args(std::env::args().skip(1))
    }

    pub fn from_args<I>(mut args: I) -> Result<Self>
    where
        I: Iterator<Item = String>,
    {
        let mut plan_path = None;
        let mut config_path = None;
        let mut logs_dir = PathBuf::from("logs");
        let mut json = false;
        let mut show_config = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--plan" => plan_path = Some(Self::next_path(&mut args, "--plan")?),
                "--config" => config_path = Some(Self::next_path(&mut args, "--config")?),
                "--logs" => logs_dir = Self::next_path(&mut args, "--logs")?,
                "--json" => json = true,
                "--show-config" => show_config = true,
                _ => return Err(Error::parse(format!("Unknown argument: {arg}\n{USAGE}"))),
            }
        }

        Ok(Self {
            plan_path: require_parse(plan_path, format!("Missing required --plan\n{USAGE}"))?,
            config_path,
            logs_dir,
            json,
            show_config,
        })
    }

    fn next_path<I>(args: &mut I, flag: &str) -> Result<PathBuf>
    where
        I: Iterator<Item = String>,
    {
        require_parse(args.next().map(PathBuf::from), format!("Missing value for {flag}"))
    }
}
