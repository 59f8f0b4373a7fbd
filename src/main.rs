fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let presenter = mandel_drift::PpmFilePresenter::new();
    let mut controller = mandel_drift::SnapshotController::new(presenter);

    controller.generate()?;
    controller.write("output/mandelbrot.ppm")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_returns_ok() {
        let result = main();

        assert!(result.is_ok());
    }
}
