//! Terminal shop runner (default binary).
//!
//! Each slot is bought with its keybind; gold trickles in over time.
//! It uses crossterm for input and the framebuffer renderer from `term`.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info, trace};
use tracing_subscriber::EnvFilter;

use tower_shop::config::{RunConfig, USAGE};
use tower_shop::core::{Buyer, Player, Shop, ShopSnapshot, SimpleRng};
use tower_shop::input::{action_for_key, should_quit};
use tower_shop::term::{FrameBuffer, ShopView, TermScene, TerminalRenderer, Viewport};
use tower_shop::types::{Keybind, ShopAction, TICK_MS};

const DEFAULT_LOG_FILTER: &str = "tower_shop=info,tower_shop_core=info";

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("{}", USAGE);
        return Ok(());
    }

    let config = RunConfig::load(&args)?;
    if let Some(path) = &config.log_path {
        init_logging(path)?;
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Log to a file: the terminal itself is in raw mode while the shop runs.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &RunConfig) -> Result<()> {
    let seed = config.seed_or_random();
    info!(
        seed,
        starting_gold = config.starting_gold,
        gold_per_second = config.gold_per_second,
        slots = config.keybinds.len(),
        "shop session started"
    );

    let mut shop = Shop::new(&config.keybinds, SimpleRng::new(seed), TermScene::new());
    shop.stock_all();
    let mut player = Player::new(config.starting_gold).with_income(config.gold_per_second);
    let keybinds: Vec<Keybind> = shop.keybinds().collect();

    let view = ShopView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = ShopSnapshot::default();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        shop.snapshot_into(&player, &mut snap);
        view.render_into(&snap, shop.presenter(), Viewport::new(w, h), &mut fb);
        let rows = term.present(&mut fb)?;
        if rows > 0 {
            trace!(rows, "frame presented");
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                // Ignore auto-repeat so a held key buys once.
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!(
                            gold = player.current_gold(),
                            items = player.inventory().len(),
                            "shop session ended"
                        );
                        return Ok(());
                    }
                    if let Some(action) = action_for_key(key, &keybinds) {
                        if action == ShopAction::Restart {
                            player.reset(config.starting_gold);
                            info!(gold = config.starting_gold, "player reset");
                        }
                        let bought = shop.apply(action, &mut player);
                        if let (ShopAction::Buy(keybind), None) = (action, bought) {
                            debug!(%keybind, "nothing bought");
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            player.accrue(elapsed.as_millis() as u32);
        }
    }
}
