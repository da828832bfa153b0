use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "pomo")]
#[command(about = "A Pomodoro timer for your terminal")]
#[command(long_about = "pomo - A Pomodoro timer for your terminal

An interactive countdown timer that alternates between focus and break
sessions. Adjust the durations, press space, and get to work.

QUICK START:
  pomo                      Launch the timer
  pomo config show          Show current settings
  pomo config set --focus 50 --break 10
                            Change the default durations

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  pomo <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive timer
    ///
    /// Opens the full-screen timer. This is also what running plain
    /// 'pomo' does.
    ///
    /// # Keys
    ///
    ///   space      Start the timer, or pause/resume it
    ///   s          Stop the session and return to idle
    ///   Left/Right Adjust the focus duration (5 minute steps)
    ///   Down/Up    Adjust the break duration (1 minute steps)
    ///   q          Quit
    ///
    /// A new session always starts as a focus block; when it runs out,
    /// the timer rolls into a break and back again until stopped.
    #[command(alias = "t")]
    Tui,

    /// View or change configuration
    ///
    /// Settings live in ~/.pomo/config.yaml and seed the timer's
    /// durations on launch.
    ///
    /// # Examples
    ///
    ///   pomo config show
    ///   pomo config show -o json
    ///   pomo config set --focus 50
    ///   pomo config set --break 10 --sound false
    ///   pomo config path
    Config(ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// # Examples
    ///
    ///   pomo completions bash > /usr/local/etc/bash_completion.d/pomo
    ///   pomo completions zsh > ~/.zsh/completions/_pomo
    ///   pomo completions fish > ~/.config/fish/completions/pomo.fish
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for configuration.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Configuration subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,

    /// Change configuration values
    ///
    /// Only the flags you pass are changed; everything else is kept.
    /// Durations are validated against the timer's bounds
    /// (focus 5-60 minutes, break 1-15 minutes).
    Set {
        /// Focus duration in minutes
        #[arg(long)]
        focus: Option<u32>,

        /// Break duration in minutes
        #[arg(long = "break")]
        break_minutes: Option<u32>,

        /// Ring the terminal bell on session rollover
        #[arg(long)]
        sound: Option<bool>,
    },

    /// Print the config file path
    Path,
}
