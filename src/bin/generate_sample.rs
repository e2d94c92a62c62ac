//! Write a deterministic synthetic `spacex_launch_dash.csv` for offline runs:
//!
//!     cargo run --bin generate_sample -- data/spacex_launch_dash.csv --seed 7
//!     cargo run -- --data-source data/spacex_launch_dash.csv

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use launch_dash::data::model::{LaunchRecord, OUTCOME_FAILURE, OUTCOME_SUCCESS};
use launch_dash::data::site::LaunchSite;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.next_f64()
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// Booster generations in flight order:
/// (category, flights, payload range kg, success probability, pads used).
const ERAS: [(&str, u32, (f64, f64), f64, &[LaunchSite]); 5] = [
    ("v1.0", 5, (0.0, 700.0), 0.0, &[LaunchSite::Lc40]),
    ("v1.1", 15, (500.0, 4600.0), 0.15, &[LaunchSite::Lc40, LaunchSite::Slc4e]),
    (
        "FT",
        24,
        (1900.0, 9600.0),
        0.65,
        &[LaunchSite::Lc40, LaunchSite::Lc39a, LaunchSite::Slc4e],
    ),
    ("B4", 8, (2100.0, 6800.0), 0.6, &[LaunchSite::Lc39a, LaunchSite::Slc40]),
    ("B5", 4, (3600.0, 7000.0), 1.0, &[LaunchSite::Slc40, LaunchSite::Lc39a]),
];

#[derive(Parser, Debug)]
#[command(name = "generate_sample")]
#[command(about = "Write a synthetic SpaceX launch table as CSV")]
struct Args {
    /// Destination CSV file
    #[arg(default_value = "spacex_launch_dash.csv")]
    output: PathBuf,

    /// PRNG seed; the same seed always yields the same table
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn generate_records(seed: u64) -> Vec<LaunchRecord> {
    let mut rng = SimpleRng::new(seed);
    let mut records: Vec<LaunchRecord> = Vec::new();
    let mut flight_number = 0u32;

    for (category, flights, (min_kg, max_kg), p_success, pads) in ERAS {
        for _ in 0..flights {
            flight_number += 1;
            let site = *rng.pick(pads);
            // round to 10 kg like manifest figures
            let payload = (rng.uniform(min_kg, max_kg) / 10.0).round() * 10.0;
            let class = if rng.next_f64() < p_success {
                OUTCOME_SUCCESS
            } else {
                OUTCOME_FAILURE
            };

            records.push(LaunchRecord {
                flight_number,
                launch_site: site.dataset_name().to_string(),
                class,
                payload_mass_kg: payload,
                booster_version: Some(format!("F9 {category}  B{}", 1000 + flight_number)),
                booster_version_category: category.to_string(),
            });
        }
    }
    records
}

fn write_csv<W: io::Write>(records: &[LaunchRecord], out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for rec in records {
        writer.serialize(rec).context("writing launch record")?;
    }
    writer.flush().context("flushing CSV writer")?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let records = generate_records(args.seed);

    let file = std::fs::File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    write_csv(&records, file)?;

    let successes = records.iter().filter(|r| r.is_success()).count();
    println!(
        "Wrote {} launches ({successes} successful) to {}",
        records.len(),
        args.output.display()
    );
    Ok(())
}
