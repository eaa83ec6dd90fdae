use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_CONFIG_PATH: &str = "assets/config/demo.ron";

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "bird_sandbox", version, about = "2D physics sandbox: click to drop birds")]
pub struct Cli {
    /// Config layers applied in order over the built-in defaults (repeatable).
    /// Defaults to assets/config/demo.ron plus an optional demo.local.ron.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Vec<PathBuf>,
    /// Exit after this many seconds (overrides window.autoClose).
    #[arg(long = "auto-close", value_name = "SECS")]
    pub auto_close: Option<f32>,
}

impl Cli {
    /// Config files to layer, in order. Missing default layers are skipped silently;
    /// explicitly requested ones are kept so their read errors get reported.
    pub fn config_layers(&self) -> Vec<PathBuf> {
        if !self.config.is_empty() {
            return self.config.clone();
        }
        [DEFAULT_CONFIG_PATH, "assets/config/demo.local.ron"]
            .into_iter()
            .map(PathBuf::from)
            .filter(|p| p.exists())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeatable_config_keeps_order() {
        let cli = Cli::parse_from(["bird_sandbox", "--config", "a.ron", "--config", "b.ron"]);
        assert_eq!(
            cli.config_layers(),
            vec![PathBuf::from("a.ron"), PathBuf::from("b.ron")]
        );
        assert_eq!(cli.auto_close, None);
    }

    #[test]
    fn auto_close_parses_seconds() {
        let cli = Cli::parse_from(["bird_sandbox", "--auto-close", "2.5"]);
        assert_eq!(cli.auto_close, Some(2.5));
        assert!(cli.config.is_empty());
    }
}
