use anotis::application::NoteRepository;
use anotis::cli::{format_note_list, Cli, Commands};
use anotis::error::AnotisError;
use anotis::infrastructure::{Config, EditorSession, NoteStorage};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), AnotisError> {
    match cli.command {
        Commands::Config { key, value, list } => run_config(key, value, list),
        command => {
            let config = Config::load()?;
            let storage = NoteStorage::new(config.notes_dir());
            let mut repo = NoteRepository::new(storage);
            repo.load()?;

            run_note_command(command, &config, &mut repo)
        }
    }
}

fn run_note_command(
    command: Commands,
    config: &Config,
    repo: &mut NoteRepository,
) -> Result<(), AnotisError> {
    match command {
        Commands::List => {
            let notes = repo.list_notes()?;
            println!("{}", format_note_list(&notes).trim_end_matches('\n'));
            Ok(())
        }
        Commands::Show { title } => {
            let note = repo.get_by_title(&title)?;
            print!("{}", note.content);
            Ok(())
        }
        Commands::Save {
            title,
            content,
            previous,
        } => {
            let content = match content {
                Some(c) => c,
                None => read_stdin()?,
            };
            let saved = repo.save(&title, &content, previous.as_deref())?;
            println!("Saved note '{}'", saved);
            Ok(())
        }
        Commands::Open { title } => {
            // Create the note first if it doesn't exist yet
            let title = match repo.get_by_title(&title) {
                Ok(note) => note.title.clone(),
                Err(AnotisError::NotFound(_)) => repo.save(&title, "", None)?,
                Err(e) => return Err(e),
            };

            let path = repo.storage().note_path(&title);
            let editor = EditorSession::new(config.get_editor());
            editor.open(&path)?;
            Ok(())
        }
        Commands::Delete { title } => {
            repo.delete(&title)?;
            println!("Deleted note '{}'", title);
            Ok(())
        }
        Commands::Config { .. } => unreachable!("handled in run"),
    }
}

fn run_config(key: Option<String>, value: Option<String>, list: bool) -> Result<(), AnotisError> {
    let mut config = Config::load()?;

    if list {
        println!("notes_dir = {}", config.notes_dir.display());
        println!("editor = {}", config.editor);
        return Ok(());
    }

    let Some(key) = key else {
        println!("Usage: anotis config [--list | <key> [<value>]]");
        println!("Valid keys: notes_dir, editor");
        return Ok(());
    };

    if let Some(value) = value {
        match key.as_str() {
            "notes_dir" => config.notes_dir = PathBuf::from(&value),
            "editor" => config.editor = value.clone(),
            _ => return Err(AnotisError::Config(format!("Unknown config key: {}", key))),
        }
        config.save()?;
        println!("Set {} = {}", key, value);
    } else {
        match key.as_str() {
            "notes_dir" => println!("{}", config.notes_dir.display()),
            "editor" => println!("{}", config.editor),
            _ => return Err(AnotisError::Config(format!("Unknown config key: {}", key))),
        }
    }

    Ok(())
}

fn read_stdin() -> Result<String, AnotisError> {
    let mut content = String::new();
    std::io::stdin().read_to_string(&mut content)?;
    Ok(content)
}
