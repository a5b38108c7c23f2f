use log::{error, info};
use std::process;

use sei_evm_parameters::{
    param_key_table, params::default_params, GenesisParams,
};

mod cli;

use cli::{CliArgs, Command};
use clap::Parser;

fn main() {
    env_logger::builder().format_timestamp_millis().init();

    let args = CliArgs::parse();
    if let Err(e) = run(args.command) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Defaults => {
            println!("{}", default_params());
        }
        Command::Validate { genesis } => {
            let params = GenesisParams::load(&genesis)?.into_params()?;
            info!("Genesis parameters in {} are valid", genesis.display());
            println!("{}", params);
        }
        Command::Keys => {
            let table = param_key_table();
            for key in table.keys() {
                if let Some(attribute) = table.attribute(key) {
                    let name = String::from_utf8_lossy(key);
                    println!("{}\t{}", name, attribute.kind);
                }
            }
        }
    }
    Ok(())
}
