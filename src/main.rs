//! oap-setup — wire Supabase authentication into OAP agent repositories

use clap::Parser;

use oap_setup::cli::Cli;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = cli.run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
