//! Oklab inspection command
//!
//! Prints the Oklab and Oklch coordinates of device colors.

use super::{Output, parse_colors, with_gamut};
use crate::OklabArgs;
use anyhow::Result;
use okgamut_color::{Gamut, batch, oklab_to_oklch};
use okgamut_core::{Oklab, Oklch, Triplet};
use serde::Serialize;

#[derive(Serialize)]
struct Record {
    gamut: &'static str,
    input: [i32; 3],
    oklab: Triplet<Oklab, f64>,
    oklch: Oklch<f64>,
}

pub fn run(args: OklabArgs, out: &Output) -> Result<()> {
    with_gamut!(args.gamut, G => inspect::<G>(&args.colors, out))
}

fn inspect<G: Gamut>(colors: &[String], out: &Output) -> Result<()> {
    let inputs = parse_colors::<G>(colors)?;
    let labs = batch::device_to_oklab_par::<G, f64>(&inputs);

    let records: Vec<Record> = inputs
        .iter()
        .zip(labs)
        .map(|(input, oklab)| Record {
            gamut: G::NAME,
            input: input.to_array(),
            oklab,
            oklch: oklab_to_oklch(oklab),
        })
        .collect();

    out.emit(&records, |r| {
        let input: Triplet<G, i32> = Triplet::from_array(r.input);
        format!("{input}\n  {:.4}\n  {:.4}", r.oklab, r.oklch)
    })
}
