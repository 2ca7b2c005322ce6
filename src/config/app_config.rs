use clap::Parser;
use std::path::PathBuf;

use crate::{
    constants::{MARATHON_LANG, MARATHON_LOCALES_DIR},
    utils::locale_utils::{Lang, Messages},
};

#[derive(Debug, Parser)]
#[command(name = "marathon-registration", version, about = "Register for the CMU Marathon")]
pub struct Cli {
    /// Message language (en, th)
    #[arg(long)]
    pub lang: Option<String>,

    /// Directory holding <lang>/validation.json and <lang>/form.json
    #[arg(long)]
    pub locales_dir: Option<PathBuf>,

    /// Print every response as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub lang: Lang,
    pub locales_dir: PathBuf,
    pub json_output: bool,
}

impl AppConfig {
    /// Environment (after `.env`) first, CLI flags override.
    pub fn from_cli(cli: Cli) -> Self {
        let config = AppConfig {
            lang: Lang::from_code(cli.lang.as_deref().unwrap_or(MARATHON_LANG.as_str())),
            locales_dir: cli
                .locales_dir
                .unwrap_or_else(|| PathBuf::from(MARATHON_LOCALES_DIR.as_str())),
            json_output: cli.json,
        };

        log::debug!(
            "Config: lang={:?} locales_dir={:?} json={}",
            config.lang,
            config.locales_dir,
            config.json_output
        );
        config
    }

    pub fn load_messages(&self) -> Messages {
        Messages::load(&self.locales_dir, self.lang)
    }
}
