use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "addrbook", version)]
#[command(about = "Keep names, phone numbers and birthdays in one place", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a contact, replacing any contact with the same name
    #[command(alias = "a")]
    Add {
        name: String,

        /// Phone numbers (10 digits each)
        phones: Vec<String>,

        /// Birthday as dd-mm-yyyy
        #[arg(short, long)]
        birthday: Option<String>,
    },

    /// Show one contact
    #[command(alias = "v")]
    Show { name: String },

    /// Delete a contact
    #[command(alias = "rm")]
    Delete { name: String },

    /// Add, change or remove a phone number
    Phone {
        #[command(subcommand)]
        action: PhoneCommand,
    },

    /// Set a contact's birthday (dd-mm-yyyy)
    Birthday { name: String, date: String },

    /// Days until a contact's next birthday
    Days { name: String },

    /// Birthdays coming up soon
    Birthdays {
        /// How many days ahead to look
        #[arg(short, long)]
        days: Option<i64>,
    },

    /// List contacts page by page
    #[command(alias = "ls")]
    List {
        /// Contacts per page
        #[arg(short = 'n', long)]
        page_size: Option<usize>,
    },

    /// Find contacts by name or phone fragment
    Search { term: String },

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, page-size, upcoming-days)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum PhoneCommand {
    /// Add a phone number
    Add { name: String, phone: String },

    /// Replace a phone number
    Edit {
        name: String,
        old: String,
        new: String,
    },

    /// Remove a phone number
    #[command(alias = "rm")]
    Remove { name: String, phone: String },
}
