//! Lottery binary entry point
//!
//! Loads stored preferences, applies command line overrides, runs one draw and
//! prints the outcome.

use std::env;
use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use lottery::traits::{load_or_default, save_session};
use lottery::{DrawSession, LotteryConfig, LotteryResult, RealPreferenceStore};
use shared::{logging, session_debug, session_warn, DrawMode, DrawOutcome};

/// Draw internal skills for a player, a team, or from a custom list
#[derive(Parser)]
#[command(name = "lottery")]
#[command(about = "Randomly assigns internal skills to players")]
pub struct Args {
    /// Draw mode (single, team, custom); defaults to the stored mode
    #[arg(long)]
    pub mode: Option<DrawMode>,

    /// Team roster labels, comma separated
    #[arg(long, value_delimiter = ',')]
    pub members: Vec<String>,

    /// Number of healer skills required in a team draw
    #[arg(long)]
    pub healers: Option<usize>,

    /// Roster slots (0-based) that must receive a healer, comma separated
    #[arg(long, value_delimiter = ',')]
    pub pin: Vec<usize>,

    /// Allow the same skill to be assigned to several members
    /// (`--allow-repeat=false` turns a stored setting off)
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub allow_repeat: Option<bool>,

    /// Catalog ids to draw from, comma separated
    #[arg(long, value_delimiter = ',')]
    pub select: Vec<String>,

    /// Custom option label (repeatable)
    #[arg(long = "option")]
    pub options: Vec<String>,

    /// Preferences file (falls back to LOTTERY_PREFERENCES, then ./jx3-lottery-storage.json)
    #[arg(long)]
    pub preferences: Option<PathBuf>,

    /// Write the effective configuration back to the preferences file
    #[arg(long)]
    pub save: bool,

    /// Seed for a reproducible draw
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Args {
    /// Overlay command line choices on stored preferences
    fn apply(&self, config: &mut LotteryConfig) {
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if !self.members.is_empty() {
            config.members = self.members.clone();
        }
        if let Some(healers) = self.healers {
            config.healer_count = healers;
        }
        if !self.pin.is_empty() {
            config.pinned_healers = self.pin.iter().copied().collect();
        }
        if let Some(allow_repeat) = self.allow_repeat {
            config.allow_repeat = allow_repeat;
        }
        if !self.select.is_empty() {
            config.selected_ids = self.select.clone();
        }
        if !self.options.is_empty() {
            config.custom_options = self.options.clone();
        }
    }
}

fn print_outcome(outcome: Option<&DrawOutcome>) {
    let Some(outcome) = outcome else {
        println!("No result: please choose items first");
        return;
    };

    match outcome {
        DrawOutcome::Single(result) => println!("🎯 {}", result.name),
        DrawOutcome::Team(results) => {
            for result in results {
                let member = result.member.as_deref().unwrap_or("-");
                let marker = if result.is_healer() { " (healer)" } else { "" };
                println!("{member:<16} {}{marker}", result.name);
            }
        }
    }
}

#[tokio::main]
async fn main() -> LotteryResult<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    logging::init_tracing_with_level(Some(&args.log_level));

    let preferences_path = args
        .preferences
        .clone()
        .or_else(|| env::var("LOTTERY_PREFERENCES").ok().map(PathBuf::from));
    let store = match preferences_path {
        Some(path) => RealPreferenceStore::with_path(path),
        None => RealPreferenceStore::new(),
    };

    let mut config = load_or_default(&store).await?;
    args.apply(&mut config);
    config.validate()?;

    let mut session = DrawSession::new(config);
    logging::log_startup(session.id(), &format!("{} draw", session.config().mode));
    session_debug!(
        session.id(),
        preferences = %store.path().display(),
        seed = ?args.seed,
        "Configuration loaded"
    );
    if session.config().pinned_healers.len() > session.config().healer_count {
        session_warn!(
            session.id(),
            pinned = session.config().pinned_healers.len(),
            quota = session.config().healer_count,
            "More pinned slots than healers; extra slots are seated randomly"
        );
    }

    let outcome = match args.seed {
        Some(seed) => session.start_draw_with_rng(&mut StdRng::seed_from_u64(seed))?,
        None => session.start_draw()?,
    };
    // Nothing animates here, so the draw is over as soon as it is printed.
    session.finish_spin();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_outcome(outcome.as_ref());
    }

    if args.save {
        save_session(&store, &session).await?;
    }

    Ok(())
}
