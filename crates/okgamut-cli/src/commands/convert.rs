//! Gamut conversion command
//!
//! Converts device colors between gamuts through Oklab. Several colors are
//! converted in parallel on the global rayon pool.

use super::{Output, parse_colors, with_gamut};
use crate::ConvertArgs;
use anyhow::Result;
use okgamut_color::{Gamut, MappingMode, batch};
use okgamut_core::{Real, Triplet};
use serde::Serialize;
use tracing::{debug, info};

#[derive(Serialize)]
struct Record {
    from: &'static str,
    to: &'static str,
    mapping: String,
    precision: &'static str,
    input: [i32; 3],
    output: [i32; 3],
    /// Whether the color fit the target gamut before any mapping.
    in_gamut: bool,
}

pub fn run(args: ConvertArgs, out: &Output) -> Result<()> {
    with_gamut!(args.from, Src => with_gamut!(args.to, Dst => {
        if args.single {
            convert::<Src, Dst, f32>(&args.colors, args.mapping, out)
        } else {
            convert::<Src, Dst, f64>(&args.colors, args.mapping, out)
        }
    }))
}

fn convert<Src: Gamut, Dst: Gamut, T: Real>(
    colors: &[String],
    mapping: MappingMode,
    out: &Output,
) -> Result<()> {
    let inputs = parse_colors::<Src>(colors)?;
    info!(
        from = Src::NAME,
        to = Dst::NAME,
        %mapping,
        precision = T::PRECISION,
        count = inputs.len(),
        "converting"
    );

    let records = records::<Src, Dst, T>(&inputs, mapping);
    out.emit(&records, |r| {
        let input: Triplet<Src, i32> = Triplet::from_array(r.input);
        let output: Triplet<Dst, i32> = Triplet::from_array(r.output);
        let note = if r.in_gamut { "" } else { "  (out of gamut)" };
        format!("{input} -> {output}{note}")
    })
}

fn records<Src: Gamut, Dst: Gamut, T: Real>(
    inputs: &[Triplet<Src, i32>],
    mapping: MappingMode,
) -> Vec<Record> {
    let labs = batch::device_to_oklab_par::<Src, T>(inputs);
    let outputs = batch::oklab_to_device_with_par::<Dst, T>(&labs, mapping);

    inputs
        .iter()
        .zip(labs.iter().zip(&outputs))
        .map(|(input, (&lab, output))| {
            let in_gamut = Dst::in_gamut(Dst::oklab_to_linear(lab));
            if !in_gamut {
                debug!(input = %input, oklab = %lab, mapped = %output, "out of gamut");
            }
            Record {
                from: Src::NAME,
                to: Dst::NAME,
                mapping: mapping.to_string(),
                precision: T::PRECISION,
                input: input.to_array(),
                output: output.to_array(),
                in_gamut,
            }
        })
        .collect()
}
