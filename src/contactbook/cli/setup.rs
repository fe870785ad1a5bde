use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "contactbook", bin_name = "contactbook", version)]
#[command(about = "Keep names, phone numbers, emails and addresses in one file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Operate on the per-user contact book instead of the current directory
    #[arg(short, long, global = true)]
    pub global: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    #[command(alias = "a")]
    Add {
        /// Name of the contact (must be unique)
        name: String,

        #[arg(short, long, default_value = "")]
        phone: String,

        #[arg(short, long, default_value = "")]
        email: String,

        #[arg(short, long, default_value = "")]
        address: String,
    },

    /// List all contacts
    #[command(alias = "ls")]
    List,

    /// Find a contact by its exact name
    #[command(alias = "s")]
    Search { name: String },

    /// Update a contact; omitted fields keep their current value
    #[command(alias = "u")]
    Update {
        /// Current name of the contact
        name: String,

        /// Rename the contact
        #[arg(short, long = "name", value_name = "NEW_NAME")]
        new_name: Option<String>,

        #[arg(short, long)]
        phone: Option<String>,

        #[arg(short, long)]
        email: Option<String>,

        #[arg(short, long)]
        address: Option<String>,
    },

    /// Delete a contact
    #[command(alias = "rm")]
    Delete {
        name: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (file-name, placeholder)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
