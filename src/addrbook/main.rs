use addrbook::api::{BookApi, CmdResult};
use addrbook::config::BookConfig;
use addrbook::error::{BookError, Result};
use addrbook::store::fs::FileStore;
use chrono::Local;
use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::args::{Cli, Commands, PhoneCommand};
use cli::print::{
    print_birthdays, print_config, print_contacts, print_messages, print_pages,
};

const HOME_ENV: &str = "ADDRBOOK_HOME";

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: BookApi<FileStore>,
    config: BookConfig,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Add {
            name,
            phones,
            birthday,
        }) => {
            let result = ctx.api.add_contact(&name, phones.as_slice(), birthday.as_deref())?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Show { name }) => {
            let result = ctx.api.show_contact(&name)?;
            print_contacts(&result.affected_contacts);
            Ok(())
        }
        Some(Commands::Delete { name }) => report(ctx.api.delete_contact(&name)?),
        Some(Commands::Phone { action }) => handle_phone(&mut ctx, action),
        Some(Commands::Birthday { name, date }) => report(ctx.api.set_birthday(&name, &date)?),
        Some(Commands::Days { name }) => {
            report(ctx.api.days_to_birthday(&name, Local::now().date_naive())?)
        }
        Some(Commands::Birthdays { days }) => handle_birthdays(&ctx, days),
        Some(Commands::List { page_size }) => handle_list(&ctx, page_size),
        Some(Commands::Search { term }) => {
            let result = ctx.api.search(&term)?;
            print_contacts(&result.affected_contacts);
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&ctx, None),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "addrbook=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "addrbook", "addrbook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| BookError::Config("Could not determine data dir".into()))
}

fn init_context() -> Result<AppContext> {
    let data_dir = data_dir()?;
    let config = BookConfig::load(&data_dir)?;
    let data_path = config.data_path(&data_dir);

    let api = BookApi::open(FileStore::new(data_path), data_dir)?;
    debug!(
        path = %api.store().path().display(),
        contacts = api.book().len(),
        "contact book loaded"
    );
    Ok(AppContext { api, config })
}

fn report(result: CmdResult) -> Result<()> {
    print_messages(&result.messages);
    Ok(())
}

fn handle_phone(ctx: &mut AppContext, action: PhoneCommand) -> Result<()> {
    let result = match action {
        PhoneCommand::Add { name, phone } => ctx.api.add_phone(&name, &phone)?,
        PhoneCommand::Edit { name, old, new } => ctx.api.edit_phone(&name, &old, &new)?,
        PhoneCommand::Remove { name, phone } => ctx.api.remove_phone(&name, &phone)?,
    };
    report(result)
}

fn handle_birthdays(ctx: &AppContext, days: Option<i64>) -> Result<()> {
    let within = days.unwrap_or(ctx.config.upcoming_days);
    let result = ctx
        .api
        .upcoming_birthdays(Local::now().date_naive(), within)?;
    print_birthdays(&result.birthdays);
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, page_size: Option<usize>) -> Result<()> {
    let result = ctx.api.list(page_size.unwrap_or(ctx.config.page_size))?;
    print_pages(&result.pages);
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let result = match (key.as_deref(), value.as_deref()) {
        (Some(key), Some(value)) => ctx.api.set_config(key, value)?,
        (key, _) => ctx.api.show_config(key)?,
    };
    print_config(&result.config_entries);
    print_messages(&result.messages);
    Ok(())
}
