//! Step a frangle through one sweep and print the eased values.
//!
//! Run with: RUST_LOG=frangle=debug cargo run --example sweep --features tracing -- 24 0.3

use frangle::{AngleLike, FrangleOptions};
use tracing_subscriber::EnvFilter;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("frangle=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let frames = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(24);
    let midpoint = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(0.5);

    let mut frangle = FrangleOptions::default()
        .with_frames(frames)
        .with_midpoint(midpoint)
        .build()?;

    println!("frame        t    degrees   polsin");
    for frame in 0..=frames {
        frangle.set_frame(frame);
        println!(
            "{frame:>5} {:>8.4} {:>10.4} {:>8.4}",
            frangle.t(),
            frangle.degrees(),
            frangle.polsin()
        );
    }
    Ok(())
}
