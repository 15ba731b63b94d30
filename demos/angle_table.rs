//! Prints the series result next to the standard library's `acos` across the domain.
//! Shows where the truncated expansion stays exact and where it drifts near ±1.

use arcseries::{ArccosEngine, ArccosError};

fn main() -> Result<(), ArccosError> {
    println!("--- arcseries Example: series arccos vs f64::acos ---");

    let engine = ArccosEngine::new();

    println!("\n{:>10} {:>16} {:>16} {:>12} {:>6}", "x", "series", "f64::acos", "abs error", "terms");
    let inputs = [
        -1.0, -0.999, -0.99, -0.9, -0.5, -0.1, 0.0, 0.1, 0.5, 0.9, 0.99, 0.999, 1.0,
    ];
    for &x in &inputs {
        let series = engine.compute_arccos(x)?;
        let reference = x.acos();
        // Special cases never sum any terms.
        let terms = if x == 1.0 || x == -1.0 || x == 0.0 {
            0
        } else {
            engine.arcsin_expansion(x)?.terms
        };
        println!(
            "{:>10.3} {:>16.12} {:>16.12} {:>12.3e} {:>6}",
            x,
            series,
            reference,
            (series - reference).abs(),
            terms
        );
    }

    println!("\nNear ±1 the expansion is cut off long before it converges,");
    println!("so the error grows to a few hundredths of a radian.");

    match engine.compute_arccos(1.5) {
        Err(e) => println!("\narccos(1.5): {}", e),
        Ok(v) => println!("\narccos(1.5) unexpectedly returned {}", v),
    }

    Ok(())
}
