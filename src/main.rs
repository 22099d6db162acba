// src/main.rs

use pghw_export_tools::cli;

fn main() -> anyhow::Result<()> {
    cli::run()
}
