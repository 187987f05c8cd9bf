//! Runner configuration.
//!
//! Built from defaults, then environment variables, then command-line flags;
//! later sources win.

use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};

use crate::types::{
    Keybind, DEFAULT_GOLD_PER_SECOND, DEFAULT_KEYBINDS, DEFAULT_STARTING_GOLD, MAX_SLOTS,
};

pub const USAGE: &str = "\
usage: tower-shop [--seed N] [--gold N] [--income N] [--keys ZXC] [--log PATH]

  --seed N     RNG seed (default: random)
  --gold N     starting gold
  --income N   passive gold per second
  --keys ZXC   one slot per key, left to right
  --log PATH   write tracing output to PATH (filter via RUST_LOG)

environment: TOWER_SHOP_SEED, TOWER_SHOP_GOLD, TOWER_SHOP_INCOME,
             TOWER_SHOP_KEYS, TOWER_SHOP_LOG_PATH";

/// Keys reserved by the runner itself.
const RESERVED_KEYS: [char; 1] = ['Q'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub seed: Option<u32>,
    pub starting_gold: u32,
    pub gold_per_second: u32,
    pub keybinds: Vec<Keybind>,
    pub log_path: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: None,
            starting_gold: DEFAULT_STARTING_GOLD,
            gold_per_second: DEFAULT_GOLD_PER_SECOND,
            keybinds: DEFAULT_KEYBINDS.iter().filter_map(|c| Keybind::new(*c)).collect(),
            log_path: None,
        }
    }
}

impl RunConfig {
    /// Environment first, then `args` on top.
    pub fn load(args: &[String]) -> Result<Self> {
        let mut config = Self::from_env()?;
        config.apply_args(args)?;
        Ok(config)
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let mut config = Self::default();
        if let Some(v) = get("TOWER_SHOP_SEED") {
            config.seed = Some(parse_number("TOWER_SHOP_SEED", &v)?);
        }
        if let Some(v) = get("TOWER_SHOP_GOLD") {
            config.starting_gold = parse_number("TOWER_SHOP_GOLD", &v)?;
        }
        if let Some(v) = get("TOWER_SHOP_INCOME") {
            config.gold_per_second = parse_number("TOWER_SHOP_INCOME", &v)?;
        }
        if let Some(v) = get("TOWER_SHOP_KEYS") {
            config.keybinds = parse_keybinds(&v).context("TOWER_SHOP_KEYS")?;
        }
        if let Some(v) = get("TOWER_SHOP_LOG_PATH") {
            config.log_path = Some(PathBuf::from(v));
        }
        Ok(config)
    }

    pub fn apply_args(&mut self, args: &[String]) -> Result<()> {
        let mut i = 0usize;
        while i < args.len() {
            let flag = args[i].as_str();
            let value = || {
                args.get(i + 1)
                    .ok_or_else(|| anyhow!("missing value for {}", flag))
            };
            match flag {
                "--seed" => self.seed = Some(parse_number(flag, value()?)?),
                "--gold" => self.starting_gold = parse_number(flag, value()?)?,
                "--income" => self.gold_per_second = parse_number(flag, value()?)?,
                "--keys" => self.keybinds = parse_keybinds(value()?).context("--keys")?,
                "--log" => self.log_path = Some(PathBuf::from(value()?)),
                other => bail!("unknown argument: {}", other),
            }
            i += 2;
        }
        Ok(())
    }

    /// The configured seed, or a fresh random one.
    pub fn seed_or_random(&self) -> u32 {
        self.seed.unwrap_or_else(rand::random)
    }
}

fn parse_number(name: &str, value: &str) -> Result<u32> {
    value
        .parse::<u32>()
        .map_err(|_| anyhow!("invalid value for {}: {}", name, value))
}

/// Parse a keybind list such as `"ZXC"` or `"z, x, c"`.
pub fn parse_keybinds(value: &str) -> Result<Vec<Keybind>> {
    let mut keys: Vec<Keybind> = Vec::new();
    for ch in value.chars().filter(|c| !c.is_whitespace() && *c != ',') {
        let key = Keybind::new(ch).ok_or_else(|| anyhow!("unsupported key: {:?}", ch))?;
        if RESERVED_KEYS.contains(&key.as_char()) {
            bail!("key {} is reserved", key);
        }
        if keys.contains(&key) {
            bail!("key {} bound twice", key);
        }
        keys.push(key);
    }
    if keys.is_empty() {
        bail!("at least one key is required");
    }
    if keys.len() > MAX_SLOTS {
        bail!("at most {} keys are supported, got {}", MAX_SLOTS, keys.len());
    }
    Ok(keys)
}
