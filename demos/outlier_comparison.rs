//! Example: least squares versus RANSAC on a line with outliers
//!
//! Run with `RUST_LOG=linefit=debug` to see the RANSAC iterations.

use linefit::{append_fitted_columns, compare_fits, Column, FitStrategyChoice, RansacParameters, Table};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Least Squares vs RANSAC ===\n");

    let n_inliers = 60;
    let n_outliers = 15;
    let true_slope = 2.0;
    let true_intercept = -1.0;

    println!("True line: y = {:.2}x + {:.2}", true_slope, true_intercept);
    println!(
        "Generating {} inliers and {} outliers\n",
        n_inliers, n_outliers
    );

    let mut rng = StdRng::seed_from_u64(7);
    let mut xs = Vec::with_capacity(n_inliers + n_outliers);
    let mut ys = Vec::with_capacity(n_inliers + n_outliers);

    for i in 0..n_inliers {
        let x = (i as f64) * 0.1;
        xs.push(x);
        ys.push(true_slope * x + true_intercept + rng.gen_range(-0.1..0.1));
    }
    // Outliers well above the line
    for _ in 0..n_outliers {
        let x = rng.gen_range(0.0..6.0);
        xs.push(x);
        ys.push(true_slope * x + true_intercept + rng.gen_range(5.0..20.0));
    }

    let parameters = RansacParameters::new(200, 2, 0.3, 30).with_seed(42);
    let comparison = compare_fits(&xs, &ys, &parameters)?;

    println!("Least squares: {}", comparison.least_squares.model);
    println!(
        "  Residual over all {} points: {:.4}",
        xs.len(),
        comparison.least_squares.residual
    );

    match comparison.ransac.result() {
        Some(result) => {
            println!("RANSAC: {}", result.model);
            println!(
                "  {} inliers, residual {:.4}, {} of {} iterations accepted",
                result.inliers.len(),
                result.residual,
                result.accepted_iterations,
                result.iterations
            );
            if let Some(residual) = comparison.least_squares_consensus_residual {
                println!(
                    "  Least-squares residual over the same inliers: {:.4}",
                    residual
                );
            }
            println!(
                "  Error in slope: {:.4}, error in intercept: {:.4}",
                (result.model.slope() - true_slope).abs(),
                (result.model.intercept() - true_intercept).abs()
            );
        }
        None => println!(
            "RANSAC found no consensus in {} iterations",
            comparison.ransac.iterations()
        ),
    }

    // Same comparison, written back as fitted-value columns.
    let mut table = Table::new("synthetic line");
    table.append_column(Column::from_slice("x", &xs)?)?;
    table.append_column(Column::from_slice("y", &ys)?)?;
    let mut strategies = FitStrategyChoice::comparison_pair(parameters);
    append_fitted_columns(&mut table, 0, 1, &mut strategies)?;

    println!("\nFirst rows of \"{}\":", table.name());
    let headers: Vec<&str> = table.columns().iter().map(Column::header).collect();
    println!("  {}", headers.join(" | "));
    for row in 0..5 {
        let cells = (0..table.column_count())
            .map(|column| table.cell_value(row, column).map(|v| format!("{:.3}", v)))
            .collect::<Result<Vec<_>, _>>()?;
        println!("  {}", cells.join(" | "));
    }

    Ok(())
}
