use clap::Parser;

use crate::ui::ThemePreference;

#[derive(Parser, Debug)]
#[command(name = "wavemesh", about = "Animated wave mesh background", version)]
pub struct Cli {
    /// Initial window width in physical pixels
    #[arg(long, default_value_t = 1600)]
    pub width: u32,

    /// Initial window height in physical pixels
    #[arg(long, default_value_t = 900)]
    pub height: u32,

    /// Color scheme; `auto` follows the system preference
    #[arg(long, value_enum, default_value_t = ThemePreference::Auto)]
    pub theme: ThemePreference,

    /// Present without waiting for vertical sync
    #[arg(long)]
    pub no_vsync: bool,

    /// Show the fps / pointer overlay
    #[arg(long)]
    pub stats: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn vsync(&self) -> bool {
        !self.no_vsync
    }

    /// `RUST_LOG` wins when set; otherwise `info`, or `debug` with `--verbose`.
    pub fn log_filter(&self) -> tracing_subscriber::EnvFilter {
        let fallback = if self.verbose { "debug" } else { "info" };
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["wavemesh"]).unwrap();
        assert_eq!((cli.width, cli.height), (1600, 900));
        assert_eq!(cli.theme, ThemePreference::Auto);
        assert!(cli.vsync());
        assert!(!cli.stats);
    }

    #[test]
    fn flags() {
        let cli = Cli::try_parse_from([
            "wavemesh", "--theme", "dark", "--no-vsync", "--stats", "--width", "640", "-v",
        ])
        .unwrap();
        assert_eq!(cli.theme, ThemePreference::Dark);
        assert!(!cli.vsync());
        assert!(cli.stats);
        assert!(cli.verbose);
        assert_eq!(cli.width, 640);
    }

    #[test]
    fn rejects_unknown_theme() {
        assert!(Cli::try_parse_from(["wavemesh", "--theme", "sepia"]).is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
