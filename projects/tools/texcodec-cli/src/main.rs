#![allow(unexpected_cfgs)]
#![cfg(not(tarpaulin_include))]

mod commands;
mod error;
mod util;
use argh::FromArgs;
use core::error::Error;

#[derive(FromArgs, Debug)]
/// Texture container inspection and binary JSON conversion tool
struct TopLevel {
    /// log decoder diagnostics to stderr (RUST_LOG takes precedence)
    #[argh(switch, short = 'v')]
    verbose: bool,

    #[argh(subcommand)]
    command: Commands,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    Inspect(commands::inspect::InspectCmd),
    JsonToBjson(commands::bjson::JsonToBjsonCmd),
    BjsonToJson(commands::bjson::BjsonToJsonCmd),
    Validate(commands::bjson::ValidateCmd),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli: TopLevel = argh::from_env();
    util::init_logging(cli.verbose)?;

    match cli.command {
        Commands::Inspect(cmd) => {
            commands::inspect::handle_inspect_command(cmd)?;
        }
        Commands::JsonToBjson(cmd) => {
            commands::bjson::handle_json_to_bjson_command(cmd)?;
        }
        Commands::BjsonToJson(cmd) => {
            commands::bjson::handle_bjson_to_json_command(cmd)?;
        }
        Commands::Validate(cmd) => {
            commands::bjson::handle_validate_command(cmd)?;
        }
    }

    Ok(())
}
