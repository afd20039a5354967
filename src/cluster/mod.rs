//! Clustering algorithms for unsupervised learning.
//!
//! - `KMeans`: centroid-based partitional clustering
//!
//! # Examples
//!
//! ## K-Means Clustering
//! ```rust
//! use simple_ml::{KMeans, Point};
//! use ndarray::array;
//!
//! let points: Vec<Point> = vec![
//!     array![1.0, 1.0],
//!     array![1.5, 2.0],
//!     array![8.0, 8.0],
//!     array![8.5, 9.0],
//! ];
//!
//! let mut kmeans = KMeans::new(2).max_iterations(100).random_state(7);
//! kmeans.fit(&points).unwrap();
//!
//! let label = kmeans.predict(&array![8.2, 8.4]).unwrap();
//! println!("Cluster centers: {:?}", kmeans.centroids());
//! println!("Inertia: {:.4}", kmeans.inertia(&points).unwrap());
//! ```

mod kmeans;

pub use kmeans::{IndexSampler, KMeans};
