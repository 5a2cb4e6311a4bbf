use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roster", version)]
#[command(about = "Add, edit and delete student records", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the roster and its config (overrides ROSTER_HOME)
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all students
    #[command(alias = "ls")]
    List {
        /// Print the roster as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a student
    #[command(alias = "a")]
    Add {
        #[command(flatten)]
        fields: FormArgs,
    },

    /// Edit a student; fields not given keep their current value
    #[command(alias = "e")]
    Edit {
        /// Index of the student (as shown by `list`)
        index: usize,

        #[command(flatten)]
        fields: FormArgs,
    },

    /// Delete a student
    #[command(alias = "rm")]
    Delete {
        /// Index of the student (as shown by `list`)
        index: usize,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Validate fields without saving anything
    Check {
        #[command(flatten)]
        fields: FormArgs,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (storage-key, quota)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct FormArgs {
    /// Full name (letters and spaces)
    #[arg(long)]
    pub name: Option<String>,

    /// Student ID (digits)
    #[arg(long = "id", value_name = "ID")]
    pub student_id: Option<String>,

    /// Email address
    #[arg(long)]
    pub email: Option<String>,

    /// Contact number (at least 10 digits)
    #[arg(long)]
    pub contact: Option<String>,
}
