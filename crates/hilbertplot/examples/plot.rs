//! Minimal Hilbert plot example: smooth a signal and map it onto a grid.

use hilbertplot::{
    error::Result,
    pipeline::{PlotConfig, PlotPipeline, SpectralFilter},
};

fn main() -> Result<()> {
    // A noisy ramp: 256 samples onto a 16x16 grid (order 4).
    let samples: Vec<f64> = (0..256)
        .map(|i| f64::from(i) / 256.0 + (f64::from(i) * 2.7).sin() * 0.1)
        .collect();

    let config = PlotConfig {
        spectral_filter: Some(SpectralFilter::LowPass(8)),
        ..PlotConfig::new(4)
    };

    let mut pipeline = PlotPipeline::new();
    let grid = pipeline.run(&config, &samples)?;

    println!("{}x{} grid, {} cells", grid.side(), grid.side(), grid.len());
    for y in 0..grid.side() {
        for x in 0..grid.side() {
            print!("{}", if *grid.value_at(x, y)? > 0.5 { '#' } else { '.' });
        }
        println!();
    }
    Ok(())
}
