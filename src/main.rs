use std::path::PathBuf;
use std::process;

use clap::Parser;

use palette_grid::config::Config;
use palette_grid::grid::EMPTY_PLACEHOLDER;
use palette_grid::models::ItemSource;
use palette_grid::{logging, tui, GridSelector, PaletteError, Result};

const HELP_TEXT: &str = r#"
  Keys
    ←/h  →/l  ↑/k  ↓/j   Move the cursor
    ctrl+c               Quit

  Items file
    A JSON array of objects with a "title" and an optional "body":
      [{"title": "staging", "body": "Shared staging cluster"}]

  Examples
    $ palette
    $ palette --items environments.json
    $ palette --items environments.json --print --width 60
    $ RUST_LOG=debug palette --log palette.log
"#;

/// Fallback size for `--print` when the terminal cannot be queried
const DEFAULT_PRINT_SIZE: (u16, u16) = (80, 24);

#[derive(Parser)]
#[command(
    name = "palette",
    version = env!("CARGO_PKG_VERSION"),
    about = "Keyboard-driven grid palette selector for the terminal",
    after_help = HELP_TEXT
)]
struct Cli {
    /// JSON file with the items to show (defaults to a built-in list)
    #[arg(short = 'i', long, value_name = "FILE")]
    items: Option<PathBuf>,

    /// Config file to use instead of ~/.palette.json
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Append log output to this file
    #[arg(long, value_name = "FILE")]
    log: Option<PathBuf>,

    /// Print the grid as text once and exit
    #[arg(short = 'p', long)]
    print: bool,

    /// Viewport width for --print
    #[arg(long, requires = "print")]
    width: Option<u16>,

    /// Viewport height for --print
    #[arg(long, requires = "print")]
    height: Option<u16>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log.as_deref())?;

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load_or_default(),
    };
    let source = match cli.items {
        Some(path) => ItemSource::File(path),
        None => ItemSource::Sample,
    };

    if cli.print {
        print_grid(&source, &config, cli.width, cli.height)
    } else {
        tui::run(source, config)
    }
}

/// Render the grid once to stdout, sized from the flags or the terminal
fn print_grid(
    source: &ItemSource,
    config: &Config,
    width: Option<u16>,
    height: Option<u16>,
) -> Result<()> {
    let (term_width, term_height) =
        crossterm::terminal::size().unwrap_or(DEFAULT_PRINT_SIZE);
    let width = width.unwrap_or(term_width);
    let height = height.unwrap_or(term_height);

    match GridSelector::with_options(source.load()?, width, height, config.grid_options()) {
        Ok(mut grid) => {
            grid.mark_ready();
            print!("{}", grid.render());
            Ok(())
        }
        Err(PaletteError::EmptyInput) => {
            println!("{}", EMPTY_PLACEHOLDER);
            Ok(())
        }
        Err(e) => Err(e),
    }
}
