use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use hms::api::{
    CmdMessage, CmdResult, ConfigAction, HmsApi, HmsPaths, MessageLevel, NewPatientInput, TableView,
};
use hms::config::HmsConfig;
use hms::error::{HmsError, Result};
use hms::model::TableKind;
use hms::store::Store;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands, DrugAction, PatientAction, RequestAction, StaffAction};

const DATA_DIR_ENV: &str = "HMS_DATA_DIR";
const LOG_ENV: &str = "HMS_LOG";

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir)?;
    let config = HmsConfig::load(&data_dir)?;
    let store = Store::open(&data_dir, &config)?;
    let mut api = HmsApi::new(store, HmsPaths { data_dir });

    let result = match cli.command {
        Commands::Init => api.init()?,
        Commands::List { table, sort } => api.list(&table, sort.as_deref())?,
        Commands::Search {
            table,
            column,
            value,
        } => api.search(&table, &column, &value)?,
        Commands::Remove { table, id } => api.remove(&table, id)?,
        Commands::Drug { action } => match action {
            DrugAction::Add { name, stock, alert } => api.add_drug(&name, stock, alert)?,
            DrugAction::Dispense { id, quantity } => api.dispense(id, quantity)?,
            DrugAction::Low => api.low_stock()?,
        },
        Commands::Request { action } => match action {
            RequestAction::New { drug_id, quantity } => {
                api.request_replenishment(drug_id, quantity)?
            }
            RequestAction::List { status } => api.list_requests(status.as_deref())?,
            RequestAction::Approve { id } => api.approve_request(id)?,
            RequestAction::Reject { id } => api.reject_request(id)?,
        },
        Commands::Patient { action } => match action {
            PatientAction::Register {
                name,
                dob,
                gender,
                blood_type,
                phone,
                email,
            } => api.register_patient(NewPatientInput {
                name,
                date_of_birth: dob,
                gender,
                blood_type,
                phone,
                email,
            })?,
            PatientAction::Show { id } => api.show_patient(id)?,
            PatientAction::Contact { id, phone, email } => api.update_contact(id, phone, email)?,
            PatientAction::Remove { id } => api.remove_patient(id)?,
        },
        Commands::Staff { action } => match action {
            StaffAction::Add {
                name,
                role,
                gender,
                age,
            } => api.add_staff(&name, &role, &gender, age)?,
            StaffAction::Remove { id } => api.remove_staff(id)?,
            StaffAction::List { role, sort } => api.list_staff(role.as_deref(), sort.as_deref())?,
        },
        Commands::Config { key, value } => {
            let action = match (key, value) {
                (None, _) => ConfigAction::ShowAll,
                (Some(key), None) => ConfigAction::ShowKey(key),
                (Some(key), Some(value)) => ConfigAction::Set(key, value),
            };
            let show_all = matches!(action, ConfigAction::ShowAll);
            let result = api.config(action)?;
            if show_all {
                if let Some(config) = &result.config {
                    print_config(config);
                }
            }
            result
        }
    };

    print_result(&result);
    Ok(())
}

fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "hms", "hms")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            HmsError::Api(format!(
                "Could not determine a data directory, pass --data-dir or set {}",
                DATA_DIR_ENV
            ))
        })
}

fn print_result(result: &CmdResult) {
    for view in &result.listed {
        print_table(view);
    }
    for path in &result.created_paths {
        println!("{}", path.display().to_string().dimmed());
    }
    print_messages(&result.messages);
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

fn print_config(config: &HmsConfig) {
    for kind in TableKind::ALL {
        println!("{}-file = {}", kind, config.file_name(kind));
    }
}

const COLUMN_GAP: usize = 2;

fn print_table(view: &TableView) {
    if view.rows.is_empty() {
        println!("No {} found.", view.kind);
        return;
    }

    let mut widths: Vec<usize> = view.headers.iter().map(|h| h.width()).collect();
    for row in &view.rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let header = format_line(&view.headers, &widths);
    println!("{}", header.bold());
    for row in &view.rows {
        println!("{}", format_line(row, &widths));
    }
}

fn format_line(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        line.push_str(cell);
        if i + 1 < cells.len() {
            let padding = width.saturating_sub(cell.width()) + COLUMN_GAP;
            line.push_str(&" ".repeat(padding));
        }
    }
    line
}
