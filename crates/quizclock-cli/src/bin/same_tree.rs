//! same-tree — build two random trees and check whether they hold the
//! same values.

use std::process;
use std::sync::Arc;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use quizclock_tree::{same, Tree, MAX_K};

#[derive(Parser)]
#[command(
    name = "same-tree",
    version,
    about = "Walk two random trees concurrently and compare their values"
)]
struct Cli {
    /// Left tree holds k, 2k, ..., 10k
    #[arg(long, default_value = "1", value_parser = k_parser())]
    left: i64,

    /// Right tree holds k, 2k, ..., 10k
    #[arg(long, default_value = "1", value_parser = k_parser())]
    right: i64,

    /// Seed for tree shapes (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn k_parser() -> clap::builder::RangedI64ValueParser<i64> {
    clap::value_parser!(i64).range(-MAX_K..=MAX_K)
}

#[tokio::main]
async fn main() {
    quizclock_cli::logging::init();

    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // The clap range keeps both values within MAX_K, so neither build fails.
    let (Some(left), Some(right)) = (Tree::new(cli.left, &mut rng), Tree::new(cli.right, &mut rng))
    else {
        eprintln!("Error: k must be within ±{MAX_K}");
        process::exit(2);
    };
    let (left, right) = (Arc::new(left), Arc::new(right));

    println!("left:  {left}");
    println!("right: {right}");
    println!("Same: {}", same(left, right).await);
}
