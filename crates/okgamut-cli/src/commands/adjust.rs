//! Lightness adjustment commands (darken, lighten)

use super::{Output, parse_colors, with_gamut};
use crate::AdjustArgs;
use anyhow::{Result, bail};
use okgamut_color::{Gamut, darken, lighten};
use okgamut_core::Triplet;
use serde::Serialize;

/// Which way lightness moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Darken,
    Lighten,
}

#[derive(Serialize)]
struct Record {
    gamut: &'static str,
    operation: &'static str,
    amount: f64,
    input: [i32; 3],
    output: [i32; 3],
}

pub fn run(args: AdjustArgs, direction: Direction, out: &Output) -> Result<()> {
    if !args.amount.is_finite() {
        bail!("amount must be a finite number, got {}", args.amount);
    }
    with_gamut!(args.gamut, G => adjust::<G>(&args.colors, args.amount, direction, out))
}

type Adjustment<G> = fn(Triplet<G, i32>, f64) -> Triplet<G, i32>;

fn adjust<G: Gamut>(
    colors: &[String],
    amount: f64,
    direction: Direction,
    out: &Output,
) -> Result<()> {
    let inputs = parse_colors::<G>(colors)?;
    let (operation, op): (&'static str, Adjustment<G>) = match direction {
        Direction::Darken => ("darken", darken::<G, f64>),
        Direction::Lighten => ("lighten", lighten::<G, f64>),
    };

    let records: Vec<Record> = inputs
        .iter()
        .map(|&input| Record {
            gamut: G::NAME,
            operation,
            amount,
            input: input.to_array(),
            output: op(input, amount).to_array(),
        })
        .collect();

    out.emit(&records, |r| {
        let input: Triplet<G, i32> = Triplet::from_array(r.input);
        let output: Triplet<G, i32> = Triplet::from_array(r.output);
        format!("{input} -> {output}")
    })
}
