//! Console output for replies and failures

use async_trait::async_trait;
use colored::*;

use kriess_core::{KriessError, KriessResult, ReplySink};

/// Reply sink that prints to stdout
pub struct ConsoleSink;

#[async_trait]
impl ReplySink for ConsoleSink {
    async fn send(&self, channel_id: u64, content: String) -> KriessResult<()> {
        let channel = format!("#{}", channel_id);
        println!("{} {}", channel.cyan().bold(), content);
        Ok(())
    }
}

/// Print a failed command to stderr
pub fn report_failure(command: &str, err: &KriessError) {
    if err.is_user_error() {
        eprintln!("{} {}", "✗".yellow().bold(), err.to_string().yellow());
    } else {
        eprintln!(
            "{} {} {}",
            "✗".red().bold(),
            format!("{}:", command).red().bold(),
            err.to_string().red()
        );
    }
}
