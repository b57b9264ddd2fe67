//! Terminal front end.
//!
//! Loads a catalog file, renders the first page, and then reads one command
//! per line from stdin. Commands are translated to library events; the
//! resulting actions are executed by a [`TerminalRenderer`] on stdout.
//!
//! # Usage
//!
//! ```text
//! bookconnect <catalog.json> [config.toml]
//! ```
//!
//! # Commands
//!
//! - `search`: Open the search form
//! - `search title=<text> author=<id> genre=<id>`: Filter the catalog
//!   (omitted fields match everything)
//! - `cancel`: Close the search form or the settings
//! - `more`: Reveal the next page
//! - `show <row>` / `show <id>`: Open a book's detail card
//! - `close`: Close the detail card
//! - `settings`: Open the theme settings
//! - `theme day|night`: Switch palette (`theme` alone toggles)
//! - `list`: Repaint the current list
//! - `help`: Print the command list
//! - `quit`: Exit

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use bookconnect::observability::init_tracing;
use bookconnect::ui::{dispatch, render, TerminalRenderer};
use bookconnect::{handle_event, initialize, AppState, Catalog, Config, Event, Overlay, ThemeMode};

const USAGE: &str = "usage: bookconnect <catalog.json> [config.toml]";

const HELP: &str = "\
commands:
  search                         open the search form
  search title=.. author=.. genre=..
                                 filter the catalog
  cancel                         close the search form or settings
  more                           reveal the next page
  show <row|id>                  open a book's details
  close                          close the details
  settings                       open the theme settings
  theme [day|night]              switch palette, or toggle it
  list                           repaint the list
  quit                           exit";

/// Terminal width when `COLUMNS` is unset or invalid.
const DEFAULT_COLUMNS: usize = 80;

/// Keys accepted by `search`.
const SEARCH_FIELDS: [&str; 3] = ["title", "author", "genre"];

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Event(Event),
    /// `theme` without a mode.
    ToggleTheme,
    /// `show <row>`, resolved against the visible previews.
    ShowRow(usize),
    List,
    Help,
    Quit,
    Cancel,
    Unknown(String),
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(catalog_path) = args.first() else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };

    match run(catalog_path, args.get(1).map(String::as_str)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "bookconnect exited with error");
            eprintln!("bookconnect: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(catalog_path: &str, config_path: Option<&str>) -> bookconnect::Result<()> {
    let mut config = match config_path {
        Some(path) => Config::from_file(bookconnect::infrastructure::expand_tilde(path))?,
        None => Config::default(),
    };
    if config.prefers_dark.is_none() {
        config.prefers_dark = bookconnect::infrastructure::terminal_prefers_dark();
    }
    init_tracing(&config);

    let catalog = Catalog::from_file(bookconnect::infrastructure::expand_tilde(catalog_path))?;
    let mut state = initialize(&config, catalog)?;

    let cols = std::env::var("COLUMNS")
        .ok()
        .and_then(|c| c.parse::<usize>().ok())
        .filter(|&c| c > 0)
        .unwrap_or(DEFAULT_COLUMNS);
    let mut renderer = TerminalRenderer::new(io::stdout(), state.theme.clone(), cols);

    let actions = handle_event(&mut state, &Event::Init)?;
    dispatch(&mut renderer, &actions)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let event = match parse_command(&line) {
            Command::Event(event) => event,
            Command::ToggleTheme => Event::ChangeTheme(state.theme_mode.toggled()),
            Command::ShowRow(row) => match row_id(&state, row) {
                Some(id) => Event::SelectPreview(id),
                None => {
                    eprintln!("no book at row {row}");
                    continue;
                }
            },
            Command::Cancel => match state.overlay {
                Some(Overlay::Settings) => Event::CancelSettings,
                Some(Overlay::Detail) => Event::CloseDetail,
                _ => Event::CancelSearch,
            },
            Command::List => {
                render(&state, &mut renderer)?;
                continue;
            }
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            Command::Quit => break,
            Command::Unknown(input) => {
                if !input.is_empty() {
                    eprintln!("unknown command: {input} (try `help`)");
                }
                continue;
            }
        };

        let actions = handle_event(&mut state, &event)?;
        dispatch(&mut renderer, &actions)?;
    }

    io::stdout().flush()?;
    Ok(())
}

/// Id of the book on 1-based `row` of the visible list.
fn row_id(state: &AppState, row: usize) -> Option<String> {
    let index = row.checked_sub(1)?;
    state.catalog.visible().get(index).map(|book| book.id.clone())
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    match (word, rest) {
        ("search" | "/", "") => Command::Event(Event::OpenSearch),
        ("search" | "/", fields) => Command::Event(Event::SubmitSearchForm(parse_fields(fields))),
        ("more" | "m", "") => Command::Event(Event::ShowMore),
        ("show" | "s", target) if !target.is_empty() => target
            .parse::<usize>()
            .map_or_else(|_| Command::Event(Event::SelectPreview(target.to_string())), Command::ShowRow),
        ("close", "") => Command::Event(Event::CloseDetail),
        ("cancel" | "esc", "") => Command::Cancel,
        ("settings", "") => Command::Event(Event::OpenSettings),
        ("theme", "") => Command::ToggleTheme,
        ("theme", mode) => mode
            .parse::<ThemeMode>()
            .map_or_else(|_| Command::Unknown(line.to_string()), |m| Command::Event(Event::ChangeTheme(m))),
        ("list" | "ls", "") => Command::List,
        ("help" | "?", "") => Command::Help,
        ("quit" | "q" | "exit", "") => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    }
}

/// Parses `key=value` pairs for the search fields. Any other word continues
/// the previous value, so `title=war and peace` and `title=a b=c` keep their
/// spaces.
fn parse_fields(input: &str) -> BTreeMap<String, String> {
    let mut fields = BTreeMap::new();
    let mut current: Option<String> = None;

    for word in input.split_whitespace() {
        let field = word
            .split_once('=')
            .map(|(key, value)| (key.to_lowercase(), value))
            .filter(|(key, _)| SEARCH_FIELDS.contains(&key.as_str()));

        if let Some((key, value)) = field {
            fields.insert(key.clone(), value.to_string());
            current = Some(key);
        } else if let Some(value) = current.as_ref().and_then(|key| fields.get_mut(key)) {
            if !value.is_empty() {
                value.push(' ');
            }
            value.push_str(word);
        }
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_fields_keep_spaces() {
        let fields = parse_fields("title=war and peace genre=fiction");
        assert_eq!(fields.get("title").map(String::as_str), Some("war and peace"));
        assert_eq!(fields.get("genre").map(String::as_str), Some("fiction"));
        assert!(!fields.contains_key("author"));
    }

    #[test]
    fn only_search_keys_start_a_field() {
        let fields = parse_fields("title=a b=c author=a1");
        assert_eq!(fields.get("title").map(String::as_str), Some("a b=c"));
        assert_eq!(fields.get("author").map(String::as_str), Some("a1"));
        assert_eq!(fields.len(), 2);

        let fields = parse_fields("TITLE=e=mc2 explained");
        assert_eq!(fields.get("title").map(String::as_str), Some("e=mc2 explained"));
    }

    #[test]
    fn bare_search_opens_form() {
        assert_eq!(parse_command("search"), Command::Event(Event::OpenSearch));
        assert!(matches!(
            parse_command("search author=a1"),
            Command::Event(Event::SubmitSearchForm(_))
        ));
    }

    #[test]
    fn show_accepts_row_or_id() {
        assert_eq!(parse_command("show 3"), Command::ShowRow(3));
        assert_eq!(
            parse_command("show book-7"),
            Command::Event(Event::SelectPreview("book-7".to_string()))
        );
        assert!(matches!(parse_command("show"), Command::Unknown(_)));
    }

    #[test]
    fn theme_requires_known_mode() {
        assert_eq!(
            parse_command("theme NIGHT"),
            Command::Event(Event::ChangeTheme(ThemeMode::Night))
        );
        assert!(matches!(parse_command("theme sepia"), Command::Unknown(_)));
        assert_eq!(parse_command("theme"), Command::ToggleTheme);
    }

    #[test]
    fn misc_commands() {
        assert_eq!(parse_command("  more "), Command::Event(Event::ShowMore));
        assert_eq!(parse_command("quit"), Command::Quit);
        assert_eq!(parse_command(""), Command::Unknown(String::new()));
    }
}
