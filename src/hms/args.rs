use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hms")]
#[command(about = "Hospital records kept in plain CSV tables", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the table files (defaults to $HMS_DATA_DIR, then the platform data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the data directory and empty table files
    Init,

    /// List a table (drugs, requests, patients, contacts, staff)
    #[command(alias = "ls")]
    List {
        table: String,

        /// Column to sort by
        #[arg(short, long)]
        sort: Option<String>,
    },

    /// Find entries whose column equals a value
    Search {
        table: String,
        column: String,
        value: String,
    },

    /// Remove an entry by id
    #[command(alias = "rm")]
    Remove { table: String, id: u32 },

    /// Drug inventory
    Drug {
        #[command(subcommand)]
        action: DrugAction,
    },

    /// Replenishment requests
    Request {
        #[command(subcommand)]
        action: RequestAction,
    },

    /// Patient records
    Patient {
        #[command(subcommand)]
        action: PatientAction,
    },

    /// Staff roster
    Staff {
        #[command(subcommand)]
        action: StaffAction,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g. drugs-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum DrugAction {
    /// Add a drug to the inventory
    Add {
        name: String,

        #[arg(long, default_value_t = 0)]
        stock: u32,

        /// Stock level at or below which the drug counts as low
        #[arg(long, default_value_t = 10)]
        alert: u32,
    },

    /// Dispense a quantity of a drug
    Dispense { id: u32, quantity: u32 },

    /// Show drugs at or below their alert level
    Low,
}

#[derive(Subcommand, Debug)]
pub enum RequestAction {
    /// Request replenishment of a drug
    New { drug_id: u32, quantity: u32 },

    /// List requests
    List {
        /// Only requests with this status (pending, approved, rejected)
        #[arg(long)]
        status: Option<String>,
    },

    /// Approve a pending request
    Approve { id: u32 },

    /// Reject a pending request
    Reject { id: u32 },
}

#[derive(Subcommand, Debug)]
pub enum PatientAction {
    /// Register a new patient
    Register {
        #[arg(long)]
        name: String,

        /// Date of birth, YYYY-MM-DD
        #[arg(long)]
        dob: String,

        #[arg(long)]
        gender: String,

        #[arg(long)]
        blood_type: String,

        #[arg(long, default_value = "")]
        phone: String,

        #[arg(long, default_value = "")]
        email: String,
    },

    /// Show a patient's record
    Show { id: u32 },

    /// Update a patient's contact information
    Contact {
        id: u32,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        email: Option<String>,
    },

    /// Remove a patient's record
    Remove { id: u32 },
}

#[derive(Subcommand, Debug)]
pub enum StaffAction {
    /// Add a staff member
    Add {
        name: String,

        #[arg(long)]
        role: String,

        #[arg(long)]
        gender: String,

        #[arg(long)]
        age: u8,
    },

    /// Remove a staff member
    Remove { id: u32 },

    /// List staff
    List {
        #[arg(long)]
        role: Option<String>,

        /// Column to sort by
        #[arg(short, long)]
        sort: Option<String>,
    },
}
