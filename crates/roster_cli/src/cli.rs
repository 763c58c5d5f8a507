//! Command-line argument definitions for `roster`.
//!
//! # Responsibility
//! - Declare global store/logging flags, each overridable by `ROSTER_*` env.
//! - Declare one subcommand per student service operation.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "Manage the university student roster.")]
pub struct Cli {
    /// Directory holding the SQLite database file.
    #[arg(long, global = true, env = "ROSTER_DATA_DIR", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Database name; the file is `<DIR>/<NAME>.sqlite3`.
    #[arg(long, global = true, env = "ROSTER_DB_NAME", value_name = "NAME")]
    pub database: Option<String>,

    /// Log level (trace|debug|info|warn|error).
    #[arg(long, global = true, env = "ROSTER_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long, global = true, env = "ROSTER_LOG_DIR", value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Register a new student.
    Add(AddArgs),
    /// Show one student by id.
    Get { id: i64 },
    /// Replace fields of an existing student.
    Update(UpdateArgs),
    /// Delete a student by id.
    Delete { id: i64 },
    /// List every student by id.
    List {
        #[arg(long, action = ArgAction::SetTrue)]
        json: bool,
    },
    /// Search students by part of their name.
    Search {
        term: String,
        #[arg(long, action = ArgAction::SetTrue)]
        json: bool,
    },
    /// List distinct courses.
    Courses,
    /// Insert the sample students, skipping emails already registered.
    Seed,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long, allow_negative_numbers = true)]
    pub age: i32,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub course: String,
    #[arg(long)]
    pub grade: Option<String>,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    pub id: i64,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    pub age: Option<i32>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub course: Option<String>,
    #[arg(long, conflicts_with = "clear_grade")]
    pub grade: Option<String>,
    /// Remove the stored grade.
    #[arg(long, action = ArgAction::SetTrue)]
    pub clear_grade: bool,
}
