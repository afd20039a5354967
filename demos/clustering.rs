use simple_ml::dataset::make_blobs;
use simple_ml::{KMeans, Point};
use ndarray::array;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    println!("=== K-Means Clustering ===\n");

    let centers: Vec<Point> = vec![array![2.0, 2.0], array![8.0, 8.0], array![2.0, 8.0]];
    let points = make_blobs(&centers, 30, 1.0, 42)?;
    println!("Dataset: {} samples around {} centers\n", points.len(), centers.len());

    for k in 1..=5 {
        let mut kmeans = KMeans::new(k).max_iterations(100).random_state(7);
        kmeans.fit(&points)?;
        println!(
            "k={}: inertia {:.4} after {} iterations",
            k,
            kmeans.inertia(&points)?,
            kmeans.n_iter()
        );
    }

    let mut kmeans = KMeans::new(3).random_state(7);
    kmeans.fit(&points)?;
    println!("\nCentroids for k=3:");
    for (i, centroid) in kmeans.centroids().iter().enumerate() {
        let members = kmeans
            .predict_many(&points)?
            .into_iter()
            .filter(|&label| label == i)
            .count();
        println!("  cluster {}: {:.3} ({} points)", i, centroid, members);
    }

    Ok(())
}
