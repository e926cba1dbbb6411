/// CLI argument parsing and command handling.
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use crate::{color::Color, db, db::Storage, palette::Palette, types};

#[derive(Parser)]
#[command(
    name = "swatchr",
    version,
    about = "Swatchr - A terminal-based color palette generator"
)]
pub struct Cli {
    /// Database file; defaults to the user's data directory.
    #[arg(long, global = true, env = "SWATCHR_DB")]
    pub db: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a new random palette.
    Generate {
        #[arg(short = 's', long = "save")]
        save: bool,
    },
    /// List saved palettes.
    List,
    /// Save five colors as a palette.
    Save {
        #[arg(required = true, num_args = 1..)]
        colors: Vec<Color>,
    },
    /// Delete the saved palette at INDEX.
    Delete { index: usize },
    /// Show the active theme, or change it.
    Theme { mode: Option<ThemeArg> },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
    Toggle,
}

/// Execute a CLI command against `storage`.
pub fn run(command: Command, storage: &mut impl Storage) -> Result<()> {
    match command {
        Command::Generate { save } => handle_generate(save, storage)?,
        Command::List => handle_list(&*storage)?,
        Command::Save { colors } => handle_save(colors, storage)?,
        Command::Delete { index } => handle_delete(index, storage)?,
        Command::Theme { mode } => handle_theme(mode, storage)?,
    }
    Ok(())
}

fn handle_generate(save: bool, storage: &mut impl Storage) -> Result<()> {
    let palette = Palette::generate();
    println!("{}", format_palette(&palette));
    if save {
        report_save(db::save_palette(Some(&palette), storage)?);
    }
    Ok(())
}

fn handle_list(storage: &impl Storage) -> Result<()> {
    let palettes = db::load_palettes(storage)?;
    if palettes.is_empty() {
        println!("No saved palettes yet.");
        return Ok(());
    }
    for (index, palette) in palettes.iter().enumerate() {
        println!("{index:>3}  {}", format_palette(palette));
    }
    Ok(())
}

fn handle_save(colors: Vec<Color>, storage: &mut impl Storage) -> Result<()> {
    let palette = Palette::try_from(colors)?;
    report_save(db::save_palette(Some(&palette), storage)?);
    Ok(())
}

fn handle_delete(index: usize, storage: &mut impl Storage) -> Result<()> {
    let removed = db::delete_palette(index, storage)?;
    println!("Deleted {}", format_palette(&removed));
    Ok(())
}

fn handle_theme(mode: Option<ThemeArg>, storage: &mut impl Storage) -> Result<()> {
    let current = db::get_theme(&*storage)?;
    let next = match mode {
        None => {
            let theme = current.unwrap_or_else(types::Theme::system_preference);
            let source = if current.is_some() { "saved" } else { "system" };
            println!("{theme} ({source})");
            return Ok(());
        }
        Some(ThemeArg::Light) => types::Theme::Light,
        Some(ThemeArg::Dark) => types::Theme::Dark,
        Some(ThemeArg::Toggle) => current
            .unwrap_or_else(types::Theme::system_preference)
            .toggle(),
    };
    db::set_theme(next, storage)?;
    println!("{next}");
    Ok(())
}

fn report_save(outcome: types::SaveOutcome) {
    match outcome {
        types::SaveOutcome::Saved => println!("Palette saved!"),
        types::SaveOutcome::Duplicate => println!("This palette is already saved!"),
        types::SaveOutcome::Empty => println!("Generate a palette before saving!"),
    }
}

fn format_palette(palette: &Palette) -> String {
    palette
        .colors()
        .iter()
        .map(Color::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStorage;

    #[test]
    fn save_command_parses_colors() {
        let cli = Cli::try_parse_from([
            "swatchr", "save", "#a1b2c3", "#000000", "#FFFFFF", "#123abc", "#fedcba",
        ])
        .unwrap();
        let mut storage = MemoryStorage::default();
        run(cli.command.unwrap(), &mut storage).unwrap();

        let saved = db::load_palettes(&storage).unwrap();
        assert_eq!(
            format_palette(&saved[0]),
            "#a1b2c3 #000000 #ffffff #123abc #fedcba"
        );
    }

    #[test]
    fn invalid_color_is_a_parse_error() {
        assert!(Cli::try_parse_from(["swatchr", "save", "red"]).is_err());
    }

    #[test]
    fn save_with_wrong_count_fails() {
        let cli = Cli::try_parse_from(["swatchr", "save", "#a1b2c3", "#000000"]).unwrap();
        let mut storage = MemoryStorage::default();
        assert!(run(cli.command.unwrap(), &mut storage).is_err());
        assert!(db::load_palettes(&storage).unwrap().is_empty());
    }

    #[test]
    fn generate_save_then_delete() {
        let mut storage = MemoryStorage::default();
        run(Command::Generate { save: true }, &mut storage).unwrap();
        assert_eq!(db::load_palettes(&storage).unwrap().len(), 1);

        assert!(run(Command::Delete { index: 1 }, &mut storage).is_err());
        run(Command::Delete { index: 0 }, &mut storage).unwrap();
        assert!(db::load_palettes(&storage).unwrap().is_empty());
    }

    #[test]
    fn theme_command_sets_and_toggles() {
        let mut storage = MemoryStorage::default();
        run(Command::Theme { mode: Some(ThemeArg::Dark) }, &mut storage).unwrap();
        assert_eq!(db::get_theme(&storage).unwrap(), Some(types::Theme::Dark));

        run(Command::Theme { mode: Some(ThemeArg::Toggle) }, &mut storage).unwrap();
        assert_eq!(db::get_theme(&storage).unwrap(), Some(types::Theme::Light));
    }

    #[test]
    fn db_flag_is_global() {
        let cli = Cli::try_parse_from(["swatchr", "list", "--db", "/tmp/x.db"]).unwrap();
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/x.db")));
    }
}
