//! Seed token resolution for the CLI.

use anyhow::{Result, bail};
use forfeit_game::decode_to_seed;
use std::collections::HashMap;

const DEFAULT_SEED: u64 = 1337;

/// Seed metadata carried through simulation and reporting.
#[derive(Debug, Clone)]
pub struct SeedInfo {
    pub seed: u64,
    /// Friendly share code, when the seed came from one.
    pub code: Option<String>,
}

impl SeedInfo {
    #[must_use]
    pub fn from_numeric(seed: u64) -> Self {
        Self { seed, code: None }
    }

    #[must_use]
    pub fn from_share_code(seed: u64, code: String) -> Self {
        Self {
            seed,
            code: Some(code),
        }
    }

    /// Label used in reports: the share code when known, the number otherwise.
    #[must_use]
    pub fn label(&self) -> String {
        self.code
            .clone()
            .unwrap_or_else(|| self.seed.to_string())
    }
}

/// Resolve a list of CLI seed arguments into canonical seed metadata.
///
/// Supports literal integers, `FW-` share codes, and the special keywords
/// `all` / `available` which expand to every share-code seed.
pub fn resolve_seed_inputs(tokens: &[String]) -> Result<Vec<SeedInfo>> {
    let mut pending: Vec<SeedInfo> = Vec::new();
    let mut request_all = false;

    for token in tokens {
        if token.is_empty() {
            continue;
        }

        if token.eq_ignore_ascii_case("all") || token.eq_ignore_ascii_case("available") {
            request_all = true;
            continue;
        }

        if let Ok(value) = token.parse::<i64>() {
            pending.push(SeedInfo::from_numeric(value.unsigned_abs()));
            continue;
        }

        if let Ok(value) = token.parse::<u64>() {
            pending.push(SeedInfo::from_numeric(value));
            continue;
        }

        if let Some(seed) = decode_to_seed(token) {
            pending.push(SeedInfo::from_share_code(seed, token.to_uppercase()));
            continue;
        }

        bail!("Unrecognized seed token: {token}");
    }

    if request_all {
        pending.extend(generate_all_share_code_seeds());
    }

    let mut deduped: Vec<SeedInfo> = Vec::new();
    let mut index: HashMap<u64, usize> = HashMap::new();

    for info in pending {
        if let Some(existing) = index.get(&info.seed) {
            let entry = &mut deduped[*existing];
            if entry.code.is_none() && info.code.is_some() {
                *entry = info;
            }
        } else {
            index.insert(info.seed, deduped.len());
            deduped.push(info);
        }
    }

    if deduped.is_empty() {
        deduped.push(SeedInfo::from_numeric(DEFAULT_SEED));
    }

    Ok(deduped)
}

fn generate_all_share_code_seeds() -> Vec<SeedInfo> {
    use forfeit_game::seed::WORD_LIST;

    let mut seeds = Vec::with_capacity(WORD_LIST.len() * 100);
    for word in WORD_LIST {
        for suffix in 0..100 {
            let code = format!("FW-{word}{suffix:02}");
            if let Some(seed) = decode_to_seed(&code) {
                seeds.push(SeedInfo::from_share_code(seed, code));
            }
        }
    }
    seeds
}
