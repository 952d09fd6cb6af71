//! Prints a bcrypt hash suitable for the `passwordHash` field of a user
//! record.

use anyhow::Result;
use clap::Parser;
use run_tracker::auth::password::hash_password_with_cost;

#[derive(Parser, Debug)]
#[command(name = "hash-password", version, about = "Hash a password for the user dataset")]
struct Cli {
    /// Password to hash
    #[arg(env = "RUN_TRACKER_PASSWORD")]
    password: String,

    /// bcrypt cost factor
    #[arg(long, default_value_t = bcrypt::DEFAULT_COST)]
    cost: u32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let hashed = hash_password_with_cost(&cli.password, cli.cost)?;
    println!("{hashed}");
    Ok(())
}
