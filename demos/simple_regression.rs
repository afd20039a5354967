use std::process::ExitCode;

use simple_ml::dataset::load_xy_csv;
use simple_ml::{LinearRegression, MlError};

fn run(path: &str) -> Result<(), MlError> {
    let (x, y) = load_xy_csv(path)?;
    println!("Loaded {} samples from {}", x.len(), path);

    let model = LinearRegression::simple(&x, &y)?;
    println!("Intercept: {:.4}", model.intercept());
    println!("Slope: {:.4}", model.slope()?);
    println!("Prediction for x=5: {:.4}", model.predict(5.0)?);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/sample_data.csv".to_string());

    match run(&path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
