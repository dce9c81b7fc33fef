//! Oklab interpolation command

use super::{Output, parse_color, with_gamut};
use crate::InterpolateArgs;
use anyhow::Result;
use okgamut_color::{Gamut, interpolate};
use okgamut_core::Triplet;
use serde::Serialize;
use tracing::debug;

#[derive(Serialize)]
struct Record {
    gamut: &'static str,
    t: f64,
    color: [i32; 3],
}

pub fn run(args: InterpolateArgs, out: &Output) -> Result<()> {
    let positions = match args.at {
        Some(t) => vec![t],
        None => sample_positions(args.steps),
    };
    with_gamut!(args.gamut, G => mix::<G>(&args.start, &args.end, &positions, out))
}

/// `steps` evenly spaced positions from 0 to 1, both included.
fn sample_positions(steps: u32) -> Vec<f64> {
    let last = steps.saturating_sub(1).max(1);
    (0..steps).map(|i| f64::from(i) / f64::from(last)).collect()
}

fn mix<G: Gamut>(start: &str, end: &str, positions: &[f64], out: &Output) -> Result<()> {
    let c1 = parse_color::<G>(start)?;
    let c2 = parse_color::<G>(end)?;
    debug!(gamut = G::NAME, start = %c1, end = %c2, samples = positions.len(), "interpolating");

    let records: Vec<Record> = positions
        .iter()
        .map(|&t| Record {
            gamut: G::NAME,
            t,
            color: interpolate::<G, f64>(c1, c2, t).to_array(),
        })
        .collect();

    out.emit(&records, |r| {
        let color: Triplet<G, i32> = Triplet::from_array(r.color);
        format!("t={:.3}  {color}", r.t)
    })
}
