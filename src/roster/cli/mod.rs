//! Command handlers for the roster CLI.
//!
//! Handlers translate arguments into API calls and results into terminal
//! output. Display indexes are 1-based; the API is 0-based.

pub mod render;

use crate::args::{Cli, Commands, FormArgs};
use directories::ProjectDirs;
use roster::api::{ConfigAction, RosterApi};
use roster::commands::CmdMessage;
use roster::config::RosterConfig;
use roster::error::{Result, RosterError};
use roster::model::StudentForm;
use roster::store::fs::FileStore;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

pub const HOME_ENV: &str = "ROSTER_HOME";

pub struct AppContext {
    pub api: RosterApi<FileStore>,
    pub data_dir: PathBuf,
}

pub fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "roster", "roster")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| RosterError::Config("Could not determine data directory".into()))
}

pub fn init_context(data_dir: PathBuf) -> Result<AppContext> {
    let config = RosterConfig::load(&data_dir)?;

    let mut store = FileStore::new(data_dir.clone());
    if let Some(quota) = config.quota() {
        store = store.with_quota(quota);
    }
    tracing::debug!(data_dir = %data_dir.display(), key = %config.storage_key, "opening roster");

    let api = RosterApi::open(store, config.storage_key);
    Ok(AppContext { api, data_dir })
}

pub fn dispatch(ctx: &mut AppContext, command: Option<Commands>) -> Result<()> {
    match command {
        Some(Commands::List { json }) => handle_list(ctx, json),
        Some(Commands::Add { fields }) => handle_add(ctx, fields),
        Some(Commands::Edit { index, fields }) => handle_edit(ctx, index, fields),
        Some(Commands::Delete { index, yes }) => handle_delete(ctx, index, yes),
        Some(Commands::Check { fields }) => handle_check(ctx, fields),
        Some(Commands::Config { key, value }) => handle_config(&ctx.data_dir, key, value),
        None => handle_list(ctx, false),
    }
}

fn handle_list(ctx: &mut AppContext, json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(ctx.api.students())?;
        println!("{}", out);
        return Ok(());
    }
    let result = ctx.api.list();
    println!("{}", render::roster_table(&result.listed_students));
    Ok(())
}

fn handle_add(ctx: &mut AppContext, fields: FormArgs) -> Result<()> {
    let form = apply_fields(StudentForm::default(), fields);
    let result = ctx.api.add(&form)?;
    render::print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, index: usize, fields: FormArgs) -> Result<()> {
    let position = to_position(index)?;
    let form = ctx
        .api
        .begin_edit(position)
        .map_err(|e| with_display_index(e, index))?;
    let form = apply_fields(form, fields);

    match ctx.api.update(&form) {
        Ok(result) => {
            render::print_messages(&result.messages);
            Ok(())
        }
        Err(e) => {
            ctx.api.cancel_edit();
            Err(e)
        }
    }
}

fn handle_delete(ctx: &mut AppContext, index: usize, yes: bool) -> Result<()> {
    let position = to_position(index)?;
    let student = ctx
        .api
        .get(position)
        .cloned()
        .ok_or_else(|| with_display_index(RosterError::NoSuchStudent(position), index))?;

    if !yes {
        let question = format!(
            "Delete record for \"{}\" (ID: {})?",
            student.name, student.student_id
        );
        if !confirm(&question)? {
            render::print_messages(&[CmdMessage::info("Deletion cancelled.")]);
            return Ok(());
        }
    }

    let result = ctx.api.delete(position)?;
    render::print_messages(&result.messages);
    Ok(())
}

fn handle_check(ctx: &mut AppContext, fields: FormArgs) -> Result<()> {
    let form = apply_fields(StudentForm::default(), fields);
    let result = ctx.api.check(&form)?;
    render::print_messages(&result.messages);
    Ok(())
}

/// Runs without opening the roster, so a broken config can still be repaired.
pub fn handle_config(data_dir: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = roster::commands::config::run(data_dir, action)?;
    if result.messages.is_empty() {
        if let Some(config) = &result.config {
            for line in render::config(config) {
                println!("{}", line);
            }
        }
    }
    render::print_messages(&result.messages);
    Ok(())
}

/// Overlays the given flags onto `form`, keeping values for omitted flags.
pub fn apply_fields(mut form: StudentForm, fields: FormArgs) -> StudentForm {
    if let Some(name) = fields.name {
        form.name = name;
    }
    if let Some(student_id) = fields.student_id {
        form.student_id = student_id;
    }
    if let Some(email) = fields.email {
        form.email = email;
    }
    if let Some(contact) = fields.contact {
        form.contact = contact;
    }
    form
}

fn to_position(display_index: usize) -> Result<usize> {
    display_index
        .checked_sub(1)
        .ok_or_else(|| RosterError::Api("Indexes start at 1".into()))
}

/// Reports a missing record by the index the user typed.
fn with_display_index(err: RosterError, display_index: usize) -> RosterError {
    match err {
        RosterError::NoSuchStudent(_) => {
            RosterError::Api(format!("No student at index {}", display_index))
        }
        other => other,
    }
}

fn confirm(question: &str) -> Result<bool> {
    print!("{} [y/N] ", question);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
