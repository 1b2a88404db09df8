//! Split/concat round-trip demo.
//!
//! Run with: cargo run --example split_concat_demo

use tenslice_core::{concat, split, split_by_lengths, CpuContext, SplitSpec, Tensor};

fn main() -> tenslice_core::Result<()> {
    let ctx = CpuContext::new();

    let input = Tensor::from_vec((0..24).map(|v| v as f32).collect::<Vec<f32>>(), &[2, 12])?;
    println!("input shape: {}", input.shape());

    // Equal split into three [2, 4] parts.
    let parts = split(&ctx, &input, 1, false, 3, &SplitSpec::Equal)?;
    for (i, part) in parts.iter().enumerate() {
        println!("part {i}: shape {}", part.shape());
    }

    // Concat records per-input sizes, which reverse it exactly.
    let refs: Vec<&Tensor> = parts.iter().collect();
    let (rejoined, sizes) = concat(&ctx, &refs, 1, false)?;
    println!(
        "rejoined shape: {}, recorded sizes: {:?}",
        rejoined.shape(),
        sizes.to_vec::<i32>()?
    );
    assert_eq!(rejoined, input);

    // Ragged split driven by a flat length list: groups of two lengths per
    // output give extents [5, 7].
    let lengths = Tensor::from_vec(vec![2i32, 3, 6, 1], &[4])?;
    let ragged = split_by_lengths(&ctx, &input, 1, &lengths, 2)?;
    println!(
        "ragged extents: [{}, {}]",
        ragged[0].shape()[1],
        ragged[1].shape()[1]
    );

    Ok(())
}
