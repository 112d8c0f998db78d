//! Typed runtime configuration, loaded from the environment (with optional
//! `.env` file support).

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::{errors::Error, Result};

pub const DEFAULT_XEPLIST_URL: &str = "https://xmpp.org/extensions/xeplist.xml";

#[derive(Clone, Debug)]
pub struct Config {
    /// Account address the session signs in with.
    pub jid: String,
    pub password: String,
    /// Rooms to join at startup. May be empty, in which case the bot only
    /// serves direct messages.
    pub rooms: Vec<String>,
    /// Nickname used inside rooms; also drives self-message suppression.
    pub nick: String,

    /// Where the extension document index is published.
    pub xeplist_url: String,
    /// Directory holding the cached index and its freshness state.
    pub xep_cache_dir: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));

        let jid = env_str("XMPP_JID").and_then(non_empty).ok_or_else(|| {
            Error::Config("XMPP_JID environment variable is required".to_string())
        })?;
        let password = env_str("XMPP_PASSWORD").and_then(non_empty).ok_or_else(|| {
            Error::Config("XMPP_PASSWORD environment variable is required".to_string())
        })?;
        let nick = env_str("XMPP_NICK").and_then(non_empty).ok_or_else(|| {
            Error::Config("XMPP_NICK environment variable is required".to_string())
        })?;

        let rooms = parse_csv(env_str("XMPP_ROOMS"));

        let xeplist_url = env_str("XEPLIST_URL")
            .and_then(non_empty)
            .unwrap_or_else(|| DEFAULT_XEPLIST_URL.to_string());
        let xep_cache_dir = env_str("XEP_CACHE_DIR")
            .and_then(non_empty)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("/tmp/xrb-xeps"));
        fs::create_dir_all(&xep_cache_dir)?;

        Ok(Self {
            jid,
            password,
            rooms,
            nick,
            xeplist_url,
            xep_cache_dir,
        })
    }
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn non_empty(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_csv(value: Option<String>) -> Vec<String> {
    value
        .map(|s| {
            s.split(',')
                .map(|part| part.trim().to_string())
                .filter(|part| !part.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

/// Minimal `.env` loader: `KEY=VALUE` lines, `#` comments. Variables already
/// present in the environment win.
fn load_dotenv_if_present(path: &Path) {
    let Ok(text) = fs::read_to_string(path) else {
        return;
    };
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() || env::var_os(key).is_some() {
            continue;
        }
        env::set_var(key, value.trim());
    }
}
