use appointments::api::{CmdMessage, MessageLevel};
use appointments::context::{initialize, SchedulerContext};
use appointments::error::{Result, SchedulerError};
use appointments::format;
use clap::{CommandFactory, Parser};
use console::style;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod args;
use args::{Cli, Commands};

/// Env var holding a tracing filter directive, e.g. `debug`.
const LOG_ENV: &str = "APPOINTMENTS_LOG";

// The front end reads stdout and stderr as one blob, so every outcome,
// including usage and failures, is printed on stdout.
fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            print!("{}", e.render());
            let code = if e.use_stderr() { 2 } else { 0 };
            std::process::exit(code);
        }
    };

    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        match &e {
            SchedulerError::Usage(usage) => println!("{}", usage),
            other => println!("Error: {}", other),
        }
        std::process::exit(e.exit_code());
    }
}

/// Logging is off unless asked for: stderr output would end up in the
/// caller's result text.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"))
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        return Err(SchedulerError::Usage(
            Cli::command().render_help().to_string(),
        ));
    };

    let mut ctx = initialize(cli.home.as_deref(), cli.file.as_deref())?;

    match command {
        Commands::Add {
            client,
            service,
            staff,
            date,
            time,
        } => handle_add(&mut ctx, &client, &service, &staff, &date, &time),
        Commands::List { fragment } => handle_list(&ctx, fragment.as_deref()),
        Commands::Delete { client, date, time } => handle_delete(&mut ctx, &client, &date, &time),
    }
}

fn handle_add(
    ctx: &mut SchedulerContext,
    client: &str,
    service: &str,
    staff: &str,
    date: &str,
    time: &str,
) -> Result<()> {
    let result = ctx.api.add(client, service, staff, date, time)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &SchedulerContext, fragment: Option<&str>) -> Result<()> {
    let result = ctx.api.list(fragment)?;
    let listing = format::render_listing(&result.listed);
    println!("{}", listing.trim_end());
    Ok(())
}

fn handle_delete(ctx: &mut SchedulerContext, client: &str, date: &str, time: &str) -> Result<()> {
    let result = ctx.api.delete(client, date, time)?;
    print_messages(&result.messages);
    Ok(())
}

// console drops the styling when stdout is not a terminal, so piped output
// stays plain.
fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Success => println!("{}", style(&message.content).green()),
            MessageLevel::Warning => println!("{}", style(&message.content).yellow()),
        }
    }
}
