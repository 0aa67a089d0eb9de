//! CLI argument parsing for harrier.

use camino::Utf8PathBuf;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "harrier")]
#[command(about = "Web dashboard for SLURM clusters")]
pub struct Args {
    /// Settings file with the scheduler base command
    #[arg(long, default_value = "config/settings.json")]
    pub settings: Utf8PathBuf,

    /// Port to listen on
    #[arg(long, env = "HARRIER_PORT")]
    pub port: u16,

    /// Address to bind
    #[arg(long, env = "HARRIER_BIND", default_value = "0.0.0.0")]
    pub bind: String,

    /// Node name used in the externally visible path prefix
    #[arg(long, env = "HARRIER_NODE")]
    pub node: Option<String>,
}

impl Args {
    /// Socket address to listen on.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }

    /// Externally visible path prefix: `/node/{node}/{port}` when a node
    /// name is set, empty when served directly.
    pub fn root_path(&self) -> String {
        match &self.node {
            Some(node) => format!("/node/{}/{}", node, self.port),
            None => String::new(),
        }
    }
}
