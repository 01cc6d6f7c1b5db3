use clap::{Parser, Subcommand};

/// `incinerator` - Burn a heavy thought and read what is left in the ashes.
#[derive(Parser, Debug)]
#[command(name = "incinerator")]
#[command(version)]
#[command(about = "Burn a heavy thought and read what is left in the ashes.", long_about = None)]
pub struct Cli {
    /// Primary model for this run (overrides config)
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Fallback model tried after a transient failure; pass "" to disable
    #[arg(long, global = true)]
    pub fallback_model: Option<String>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive ritual (default)
    Ritual,

    /// Burn one thought and print the reply
    Burn {
        /// What you want to burn; read from stdin when omitted
        text: Option<String>,
    },

    /// Show the active configuration
    Status,

    /// Write a default config file if none exists
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}
