//! Generate a sample CSV for exercising the statistics pipeline:
//! two correlated features, a noisy linear target, and a sprinkling
//! of non-numeric placeholder cells.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};

fn main() -> anyhow::Result<()> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "data/sample.csv".to_string());
    let rows: usize = env::args()
        .nth(2)
        .and_then(|v| v.parse().ok())
        .unwrap_or(500);
    let seed: u64 = env::var("SEED")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(42);

    if let Some(parent) = std::path::Path::new(&path).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut out = BufWriter::new(File::create(&path)?);
    let mut rng = StdRng::seed_from_u64(seed);

    writeln!(out, "x1,x2,label,target")?;
    for i in 0..rows {
        let x1: f64 = rng.gen_range(-10.0..10.0);
        let x2 = 0.5 * x1 + rng.gen_range(-2.0..2.0);
        let noise: f64 = rng.gen_range(-1.0..1.0);
        let target = 3.0 * x1 - 1.5 * x2 + noise;
        // ~5% of rows carry a placeholder that fails numeric coercion
        if rng.gen_bool(0.05) {
            writeln!(out, "n/a,{:.4},row{},{:.4}", x2, i, target)?;
        } else {
            writeln!(out, "{:.4},{:.4},row{},{:.4}", x1, x2, i, target)?;
        }
    }
    out.flush()?;
    eprintln!("wrote {} rows to {}", rows, path);
    Ok(())
}
