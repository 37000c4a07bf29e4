use clap::{Parser, Subcommand};

/// CDR Data Holder — Banking Resource API sandbox
#[derive(Parser)]
#[command(name = "resource-api", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the resource server
    Serve {
        /// Port to bind (overrides RESOURCE_API_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },
}
