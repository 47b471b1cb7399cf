use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;

use boatyard::utils::{logger, validation::Validate};
use boatyard::{billing, codec, CliConfig, FleetRepository, LocalStorage};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting boatyard");
    if config.verbose {
        tracing::debug!("CLI config: {config:?}");
    }

    if let Err(err) = config.validate() {
        tracing::error!("Configuration validation failed: {err}");
        eprintln!("{err}");
        std::process::exit(1);
    }

    let repository = FleetRepository::new(LocalStorage, config.data_file.clone());
    let mut fleet = repository.load();

    println!();
    println!("Welcome to the Boatyard Management System");
    println!("--------------------------------------------");
    println!();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let Some(choice) = prompt(
            &mut lines,
            "(I)nventory, (A)dd, (R)emove, (P)ayment, (M)onth, e(X)it : ",
        )?
        else {
            break;
        };

        match choice.trim().chars().next().map(|c| c.to_ascii_uppercase()) {
            Some('I') => {
                for vessel in fleet.vessels() {
                    println!("{vessel}");
                }
                println!();
            }
            Some('A') => {
                if let Some(line) =
                    prompt(&mut lines, "Please enter the boat data in CSV format : ")?
                {
                    if let Err(err) = codec::parse(&line).and_then(|vessel| fleet.insert(vessel)) {
                        println!("Error: {err}\n");
                    }
                }
            }
            Some('R') => {
                if let Some(name) = prompt(&mut lines, "Please enter the boat name : ")? {
                    if fleet.remove(&name).is_err() {
                        println!("No boat with that name\n");
                    }
                }
            }
            Some('P') => {
                if let Some(name) = prompt(&mut lines, "Please enter the boat name : ")? {
                    if fleet.position(&name).is_none() {
                        println!("No boat with that name\n");
                    } else if let Some(amount) =
                        prompt(&mut lines, "Please enter the amount to be paid : ")?
                    {
                        // Amounts read leniently, same as the data file numerics.
                        let amount: f64 = amount.trim().parse().unwrap_or(0.0);
                        if let Err(err) = billing::record_payment(&mut fleet, &name, amount) {
                            println!("Error: {err}\n");
                        }
                    }
                }
            }
            Some('M') => {
                billing::apply_monthly_charges(&mut fleet);
                println!();
            }
            Some('X') => break,
            Some(other) => println!("Invalid option {other}\n"),
            None => {}
        }
    }

    if let Err(err) = repository.save(&fleet) {
        tracing::error!("could not save {}: {err}", config.data_file);
        eprintln!("Error: could not save {}: {err}", config.data_file);
    }

    println!();
    println!("Exiting the Boatyard Management System");

    Ok(())
}

// Returns None on end of input, which ends the session the same way as 'X'.
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    message: &str,
) -> anyhow::Result<Option<String>> {
    print!("{message}");
    io::stdout().flush().context("failed to flush the prompt")?;
    lines.next().transpose().context("failed to read input")
}
