//! Renders the pole-zero maps of three example filters to PNG files
//! under `temp/`.

use plotters::prelude::*;
use zplane::plot_z_plane;

const B1: [f64; 7] = [0.0725, 0.2200, 0.4085, 0.4883, 0.4085, 0.2200, 0.0725];
const A1: [f64; 7] = [1.0000, -0.5835, 1.7021, -0.8477, 0.8401, -0.2823, 0.0924];

const B2: [f64; 5] = [1.0000, 1.3000, 0.4900, -0.0130, -0.0290];
const A2: [f64; 5] = [1.0000, -0.4326, -1.6656, 0.1253, 0.2877];

const B3: [f64; 5] = [1.0000, -1.4000, 0.2400, 0.3340, -0.1305];
const A3: [f64; 5] = [1.0000, 0.5913, -0.6436, 0.3803, -1.0091];

fn main() -> anyhow::Result<()> {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Debug)
        .init()?;

    std::fs::create_dir_all("temp")?;

    render("temp/filter1.png", &B1, &A1, "Filter1", 0.0)?;
    render("temp/filter2.png", &B2, &A2, "Filter2", 1.0)?;
    render("temp/filter3.png", &B3, &A3, "Filter3", 1.0)?;

    Ok(())
}

fn render(path: &str, b: &[f64], a: &[f64], title: &str, scaling_factor: f64) -> anyhow::Result<()> {
    let root = BitMapBackend::new(path, (800, 800)).into_drawing_area();
    root.fill(&WHITE)?;
    plot_z_plane(b, a, title, scaling_factor, &root)?;
    root.present()?;
    log::info!("wrote {path}");
    Ok(())
}
