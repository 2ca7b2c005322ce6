use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::io::{self, BufRead, Write};

use marathon_registration::{
    config::app_config::{AppConfig, Cli},
    constants::RUST_LOG,
    handlers::modal_handler::{ModalReply, handle_command, handle_line},
    services::registration_service::RegistrationService,
    types::requests::form_command::FormCommand,
};

fn print_reply(out: &mut impl Write, reply: &ModalReply, as_json: bool) -> Result<()> {
    writeln!(out, "{}", reply.render(as_json)).context("Failed to write to stdout")
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(RUST_LOG.as_str()))
        .init();

    let config = AppConfig::from_cli(Cli::parse());
    let mut service = RegistrationService::new(config.load_messages());
    info!("🏃 Marathon registration starting ({:?})", config.lang);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let reply = handle_command(&mut service, FormCommand::Open);
    print_reply(&mut stdout, &reply, config.json_output)?;

    loop {
        if !config.json_output {
            write!(stdout, "> ").context("Failed to write prompt")?;
            stdout.flush().context("Failed to flush stdout")?;
        }

        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        if read == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let reply = handle_line(&mut service, &line);
        print_reply(&mut stdout, &reply, config.json_output)?;

        if reply.exit {
            break;
        }
    }

    info!("🏃 Marathon registration stopped");
    Ok(())
}
