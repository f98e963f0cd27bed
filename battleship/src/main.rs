use std::{
    fmt,
    io::{self, BufRead, Write},
};

use clap::{App, Arg};
use log::{info, LevelFilter};
use once_cell::sync::Lazy;
use regex::Regex;

use navalbattle::{
    board::{Board, Cell, Coordinate, ShotOutcome},
    game::{BoardView, Console, CoordinatePrompt, Event, Match, Rejection},
    player::Player,
    ships::{FleetComposition, Orientation, ShipClass},
};

/// Number of blank lines printed to hide the previous screen from the other player.
const CLEANING_LINES: usize = 200;

const SHIP_ART: &str = r#"
                                     |__
                                     |\/
                                     ---
                                     / | [
                              !      | |||
                            _/|     _/|-++'
                        +  +--|    |--|--|_ |-
                     { /|__|  |/\__|  |--- |||__/
                    +---------------___[}-_===_.'____                 /\
                ____`-' ||___-{]_| _[}-  |     |_[___\==--            \/   _
 __..._____--==/___]_|__|_____________________________[___\==--____,------' .7
|                                                                     BB-61/
 \_________________________________________________________________________|
"#;

fn main() -> io::Result<()> {
    let matches = App::new("Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Two-player hot-seat battleship on the command line.")
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .help("log match events to stderr; repeat for more detail"),
        )
        .get_matches();

    init_logging(matches.occurrences_of("verbose"));

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());
    match play(&mut input) {
        // Running out of input is how a player walks away from the table.
        Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
            println!();
            Ok(())
        }
        other => other,
    }
}

/// Install the logger. Verbosity only comes from the command line.
fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

/// Show the menu, then run a match if the players want one.
fn play<B: BufRead>(input: &mut InputReader<B>) -> io::Result<()> {
    if !main_menu(input)? {
        println!("Exiting...");
        return Ok(());
    }
    let first = read_name(input, 1)?;
    let second = read_name(input, 2)?;
    clear_screen();

    let mut game = Match::new(first, second, FleetComposition::standard());
    let summary = game.run(&mut TerminalConsole { input }, &mut rand::thread_rng())?;
    info!("{} won with {} points", summary.name, summary.score);
    Ok(())
}

/// Print the main menu. Returns true if the players chose to start a match. An empty line
/// counts as quitting.
fn main_menu<B: BufRead>(input: &mut InputReader<B>) -> io::Result<bool> {
    println!("Welcome to Battleship");
    println!("{}", SHIP_ART);
    println!("START (1)                QUIT (0)");
    input.read_input_lower(">", |choice| match choice {
        "1" | "start" => Some(true),
        "" | "0" | "quit" | "exit" => Some(false),
        _ => {
            println!("Invalid option.");
            None
        }
    })
}

/// Ask for the name of the `number`-th player.
fn read_name<B: BufRead>(input: &mut InputReader<B>, number: usize) -> io::Result<String> {
    println!("Enter the name of player {}", number);
    input.read_input("-->", |name| {
        if name.is_empty() {
            None
        } else {
            Some(name.to_owned())
        }
    })
}

/// Push the previous screen out of view.
fn clear_screen() {
    for _ in 0..CLEANING_LINES {
        println!();
    }
}

/// Parse a coordinate written as `x y` or `x,y`.
fn parse_coordinate(input: &str) -> Option<Coordinate> {
    static COORD: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^\(?\s*(?P<x>-?[0-9]+)(?:\s*,\s*|\s+)(?P<y>-?[0-9]+)\s*\)?$").unwrap()
    });
    let captures = COORD.captures(input)?;
    let x = captures.name("x")?.as_str().parse().ok()?;
    let y = captures.name("y")?.as_str().parse().ok()?;
    Some(Coordinate::new(x, y))
}

/// Parse an orientation from already-lowercased input.
fn parse_orientation(input: &str) -> Option<Orientation> {
    match input {
        "h" | "horizontal" | "right" | "r" => Some(Orientation::Horizontal),
        "v" | "vertical" | "down" | "d" => Some(Orientation::Vertical),
        _ => None,
    }
}

/// [`Console`] reading from an [`InputReader`] and printing to stdout.
struct TerminalConsole<'a, B> {
    input: &'a mut InputReader<B>,
}

impl<B: BufRead> Console for TerminalConsole<'_, B> {
    fn request_coordinate(&mut self, prompt: CoordinatePrompt<'_>) -> io::Result<Coordinate> {
        match prompt {
            CoordinatePrompt::Placement { class, .. } => println!(
                "Choose the position (x y) of your {} ({} cells):",
                class,
                class.len()
            ),
            CoordinatePrompt::Target { shooter, .. } => {
                println!("{}, choose your target (x y):", shooter.name())
            }
        }
        self.input.read_input("-->", |input| {
            let coord = parse_coordinate(input);
            if coord.is_none() {
                println!("You need to enter two numbers, like \"3 4\".");
            }
            coord
        })
    }

    fn request_orientation(&mut self, class: ShipClass) -> io::Result<Orientation> {
        println!("Choose the orientation of your {}:", class);
        println!("H = Horizontal\nV = Vertical");
        self.input.read_input_lower("-->", |input| {
            let orientation = parse_orientation(input);
            if orientation.is_none() {
                println!("Invalid option.");
            }
            orientation
        })
    }

    fn request_continue(&mut self) -> io::Result<()> {
        println!("Press Enter to continue.");
        self.input.read_input("", |_| Some(()))?;
        clear_screen();
        Ok(())
    }

    fn offer_random_fleet(&mut self, _player: &Player) -> io::Result<bool> {
        self.input
            .read_input_lower("Place your ships at random? (y/N)", |input| match input {
                "y" | "yes" => Some(true),
                "n" | "no" | "" => Some(false),
                _ => {
                    println!("Invalid option.");
                    None
                }
            })
    }

    fn show_board(&mut self, owner: &Player, view: BoardView) -> io::Result<()> {
        print!("{}", render_board(owner.board(), view));
        io::stdout().flush()
    }

    fn report(&mut self, event: Event<'_>) -> io::Result<()> {
        match event {
            Event::SetupStarted { player } => {
                println!("{}, it is your turn to place your ships.", player.name());
            }
            Event::FleetComplete { player } => {
                clear_screen();
                println!("This is your board, {}:", player.name());
                self.show_board(player, BoardView::Reveal)?;
                self.request_continue()?;
            }
            Event::RandomFleetRejected { reason, .. } => {
                println!("Could not place your ships at random ({}).", reason);
                println!("Place them yourself.");
            }
            Event::PlacementRejected { reason, .. } => match reason {
                Rejection::AlreadyOccupied => {
                    println!("There is already a ship at or next to that position!")
                }
                _ => println!("Invalid position for that ship!"),
            },
            Event::TurnStarted { shooter } => {
                clear_screen();
                println!("{}'s turn to shoot!", shooter.name());
            }
            Event::ShotRejected { reason, .. } => match reason {
                Rejection::AlreadyShot => println!("You already shot at that position!"),
                _ => println!("Invalid position for a shot!"),
            },
            Event::ShotResolved {
                defender, report, ..
            } => {
                match report.outcome.ship() {
                    None => println!("Splash! You hit water."),
                    Some(_) if matches!(report.outcome, ShotOutcome::Hit(_)) => {
                        println!("You hit a ship! (+{} points)", report.points)
                    }
                    Some(ship) => println!(
                        "You sank a {}! (+{} points)",
                        ship.class(),
                        report.points
                    ),
                }
                self.show_board(defender, BoardView::Hide)?;
            }
            Event::Finished { winner } => {
                println!("{} wins! ({} points)", winner.name(), winner.score());
            }
        }
        Ok(())
    }
}

/// What a single cell looks like on screen.
enum DisplayCell {
    Water,
    Buffer,
    BufferOrigin,
    Miss,
    Ship(ShipClass),
    /// Hit on a ship that is still afloat. The class is only known to the owner.
    Hit(Option<ShipClass>),
    Sunk(ShipClass),
}

impl DisplayCell {
    fn of(board: &Board, cell: &Cell, view: BoardView) -> Self {
        let class = cell
            .ship_index()
            .map(|idx| (board.ships()[idx].class(), board.is_sunk(idx)));
        match (class, cell.shot(), view) {
            (Some((class, true)), true, _) => DisplayCell::Sunk(class),
            (Some((class, false)), true, BoardView::Reveal) => DisplayCell::Hit(Some(class)),
            (Some((_, false)), true, BoardView::Hide) => DisplayCell::Hit(None),
            (None, true, _) => DisplayCell::Miss,
            (_, false, BoardView::Hide) => DisplayCell::Water,
            (Some((class, _)), false, BoardView::Reveal) => DisplayCell::Ship(class),
            (None, false, BoardView::Reveal) if cell.buffer_origin() => DisplayCell::BufferOrigin,
            (None, false, BoardView::Reveal) if cell.buffer() => DisplayCell::Buffer,
            (None, false, BoardView::Reveal) => DisplayCell::Water,
        }
    }
}

impl fmt::Display for DisplayCell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DisplayCell::Water => f.pad("~~"),
            DisplayCell::Buffer => f.pad(".."),
            DisplayCell::BufferOrigin => f.pad(".*"),
            DisplayCell::Miss => f.pad("x"),
            DisplayCell::Ship(class) => f.pad(class.abbrev()),
            DisplayCell::Hit(Some(class)) => f.pad(&format!("x{}", class.abbrev())),
            DisplayCell::Hit(None) => f.pad("##"),
            DisplayCell::Sunk(class) => f.pad(&format!("X{}", class.abbrev())),
        }
    }
}

/// Render the board as a grid with `x` across the top and `y` down the side.
fn render_board(board: &Board, view: BoardView) -> String {
    let mut out = String::from("   ");
    for x in 0..board.dimensions().width() {
        out += &format!("{:^4}", x);
    }
    out.push('\n');
    for (y, row) in board.rows().enumerate() {
        out += &format!("{:>2} ", y);
        for cell in row {
            out += &format!("{:^4}", DisplayCell::of(board, cell, view));
        }
        out.push('\n');
    }
    out
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Converts
    /// to ascii lower before running the checker.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Repeatedly tries to read input until the input checker returns `Some`.
    fn read_input<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line. Fails with
    /// `UnexpectedEof` once the input is exhausted.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        if !prompt.is_empty() {
            print!("{} ", prompt);
            io::stdout().flush()?;
        }
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            ));
        }
        Ok(())
    }
}
