use simple_ml::dataset::make_blobs;
use simple_ml::{LogisticRegression, Matrix, Point, Vector};
use ndarray::array;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    println!("=== Logistic Regression Example ===\n");

    // Two classes around (1, 1) and (4, 4)
    let centers: Vec<Point> = vec![array![1.0, 1.0], array![4.0, 4.0]];
    let points = make_blobs(&centers, 20, 1.2, 5)?;

    let rows: Vec<Vec<f64>> = points.iter().map(|p| p.to_vec()).collect();
    let x = Matrix::from_rows(&rows)?;
    let y: Vector = (0..points.len()).map(|i| (i / 20) as f64).collect();

    println!("Dataset: {} samples, {} features", x.rows(), x.cols());

    for &learning_rate in &[0.01, 0.1, 0.5] {
        let model = LogisticRegression::new()
            .learning_rate(learning_rate)
            .iterations(2000)
            .fit(&x, &y)?;
        println!(
            "learning_rate={:<5} weights={:.4} accuracy={:.3}",
            learning_rate,
            model.weights(),
            model.score(&x, &y)?
        );
    }

    let model = LogisticRegression::with_params(0.1, 2000).fit(&x, &y)?;
    println!("\nPredictions on new data:");
    for query in [array![0.5, 1.0], array![2.5, 2.5], array![5.0, 4.0]] {
        println!(
            "x={} -> class {} (p={:.3})",
            query,
            model.predict(&query)?,
            model.predict_proba(&query)?
        );
    }

    Ok(())
}
