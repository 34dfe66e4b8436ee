//! Dispatch: parse arguments, open the note collection, call the API and print
//! the result. This is the only place that knows about stdout, stderr and the
//! process environment.

use super::render::{
    output_width, print_messages, render_config, render_empty_state, render_full_notes,
    render_note_list, render_tags,
};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use pocketnotes::api::{ConfigAction, NoteDraft, NoteEdit, NotesApi, NotesPaths};
use pocketnotes::config::NotesConfig;
use pocketnotes::error::{NotesError, Result};
use pocketnotes::session::Session;
use pocketnotes::store::fs::FileBackend;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DATA_DIR_ENV: &str = "POCKETNOTES_DATA_DIR";

struct AppContext {
    api: NotesApi<FileBackend>,
    preview_lines: usize,
    suggestion_limit: usize,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Create {
            title,
            content,
            tags,
        }) => handle_create(&mut ctx, title, content, tags),
        Some(Commands::List { search, tags }) => handle_list(&mut ctx, search, tags),
        Some(Commands::View { notes }) => handle_view(&ctx, notes),
        Some(Commands::Edit {
            note,
            title,
            content,
            tags,
            untag,
            clear_tags,
        }) => {
            let edit = NoteEdit {
                title,
                content,
                add_tags: tags,
                remove_tags: untag,
                clear_tags,
            };
            handle_edit(&mut ctx, note, edit)
        }
        Some(Commands::Delete { notes }) => handle_delete(&mut ctx, notes),
        Some(Commands::Tags { prefix }) => handle_tags(&ctx, prefix),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&mut ctx, None, Vec::new()),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A second init (e.g. from tests) is harmless, so the error is dropped
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn resolve_data_dir(flag: Option<&PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir.clone());
    }
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "pocketnotes", "pocketnotes")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| NotesError::Config("Could not determine a data directory".into()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli.data_dir.as_ref())?;
    let config = NotesConfig::load(&data_dir)?;
    debug!(dir = %data_dir.display(), file = %config.data_file, "opening notes");

    let backend = FileBackend::new(data_dir.clone()).with_data_file(&config.data_file);
    let session = Session::open(backend)?;

    Ok(AppContext {
        api: NotesApi::new(session, NotesPaths { data_dir }),
        preview_lines: config.preview_lines,
        suggestion_limit: config.suggestion_limit,
    })
}

fn handle_create(
    ctx: &mut AppContext,
    title: Vec<String>,
    content: Option<String>,
    tags: Vec<String>,
) -> Result<()> {
    let draft = NoteDraft {
        title: title.join(" "),
        content: content.unwrap_or_default(),
        tags,
    };
    let result = ctx.api.create_note(draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &mut AppContext, search: Option<String>, tags: Vec<String>) -> Result<()> {
    let query = search.unwrap_or_default();
    let result = ctx.api.list_notes(&query, &tags)?;

    match result.empty_state {
        Some(state) => print!("{}", render_empty_state(state)),
        None => print!(
            "{}",
            render_note_list(&result.listed_notes, ctx.preview_lines, output_width())
        ),
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, notes: Vec<String>) -> Result<()> {
    let result = ctx.api.view_notes(&notes)?;
    print!("{}", render_full_notes(&result.listed_notes));
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, note: String, edit: NoteEdit) -> Result<()> {
    let result = ctx.api.update_note(&note, edit)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, notes: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_notes(&notes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_tags(ctx: &AppContext, prefix: Option<String>) -> Result<()> {
    let result = match prefix {
        Some(prefix) => ctx.api.suggest_tags(&prefix, ctx.suggestion_limit)?,
        None => ctx.api.tags()?,
    };
    print!("{}", render_tags(&result.tags));
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let is_show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if is_show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }
    print_messages(&result.messages);
    Ok(())
}
