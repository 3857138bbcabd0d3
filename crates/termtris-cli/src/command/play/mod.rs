use std::{
    cell::Cell,
    io::{self, Write},
    process::ExitCode,
    rc::Rc,
};

use anyhow::Context as _;
use ratatui_runtime::{Runtime, ScreenHost};
use termtris_engine::{DisplayOptions, GameSession, PieceSeed};

use self::screens::PlayScreen;

mod screens;

const BANNER: &str = "\
####### ######## ######## ########  ####  ######
  ##    ##          ##    ##     ##  ##  ##    ##
  ##    ##          ##    ##     ##  ##  ##
  ##    ######      ##    ########   ##   ######
  ##    ##          ##    ##   ##    ##        ##
  ##    ##          ##    ##    ##   ##  ##    ##
  ##    ########    ##    ##     ## ####  ######
";

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Seed for the piece sequence as 32 hex digits (random if omitted)
    #[clap(long, value_name = "HEX")]
    pub(crate) seed: Option<PieceSeed>,
    /// Start with the ghost piece hidden
    #[clap(long)]
    pub(crate) no_ghost: bool,
    /// Start in monochrome mode
    #[clap(long)]
    pub(crate) no_color: bool,
    /// Start with empty cells drawn as dots
    #[clap(long)]
    pub(crate) dots: bool,
    /// Ticks and frames per second
    #[clap(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..))]
    pub(crate) fps: u32,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            seed: None,
            no_ghost: false,
            no_color: false,
            dots: false,
            fps: 60,
        }
    }
}

impl PlayArg {
    fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            show_ghost: !self.no_ghost,
            use_color: !self.no_color,
            show_dots: self.dots,
        }
    }
}

/// How the terminal session ended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum PlayOutcome {
    /// Ctrl-C before the game-over screen was dismissed.
    #[default]
    Interrupted,
    /// The game-over screen was dismissed with a key press.
    Finished(GameSummary),
}

/// Final numbers of a game, printed after the terminal is restored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GameSummary {
    score: u64,
    level: u64,
    lines: u64,
    seed: PieceSeed,
}

impl GameSummary {
    pub(crate) fn new(session: &GameSession) -> Self {
        let stats = session.stats();
        Self {
            score: stats.score(),
            level: stats.level(),
            lines: stats.lines_cleared(),
            seed: session.seed(),
        }
    }
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<ExitCode> {
    let session = arg
        .seed
        .map_or_else(GameSession::new, GameSession::with_seed)
        .with_display_options(arg.display_options());
    let outcome = Rc::new(Cell::new(PlayOutcome::default()));

    let screen = PlayScreen::new(session, f64::from(arg.fps), Rc::clone(&outcome));
    let mut app = ScreenHost::new(Box::new(screen));
    Runtime::new()
        .run(&mut app)
        .context("failed to run the terminal session")?;

    match outcome.get() {
        PlayOutcome::Interrupted => Ok(ExitCode::FAILURE),
        PlayOutcome::Finished(summary) => {
            write_farewell(&mut io::stdout().lock(), &summary)
                .context("failed to write to stdout")?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn write_farewell(out: &mut impl Write, summary: &GameSummary) -> io::Result<()> {
    write!(out, "{BANNER}")?;
    writeln!(out, "THANKS FOR PLAYING!!!")?;
    writeln!(
        out,
        "Score: {}  Level: {}  Lines: {}  Seed: {}",
        summary.score, summary.level, summary.lines, summary.seed
    )?;
    out.flush()
}
