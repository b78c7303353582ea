use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use tracing_subscriber::EnvFilter;

use lotka_volterra::{integrator, SimConfig, Trajectory};

const TITLE: &str = "Lotka-Volterra Predator-Prey Model Simulation (Euler's Method)";

#[derive(Parser)]
#[command(name = "lv-viz")]
#[command(about = "Plot prey and predator populations over time")]
struct Cli {
    /// TOML file with any of: a, b, c, d, x0, y0, t0, t_end, h
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    let (params, initial, grid) = config.split()?;
    let trajectory = integrator::simulate(&params, &initial, &grid);

    let app = PopulationViz { trajectory };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1000.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(TITLE, options, Box::new(|_| Ok(Box::new(app))))
        .map_err(|e| anyhow!("viewer failed: {e}"))
}

struct PopulationViz {
    trajectory: Trajectory,
}

impl eframe::App for PopulationViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading(TITLE);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let prey: PlotPoints = self.trajectory.iter().map(|s| [s.time, s.prey()]).collect();
            let predators: PlotPoints =
                self.trajectory.iter().map(|s| [s.time, s.predator()]).collect();

            Plot::new("populations")
                .legend(Legend::default())
                .x_axis_label("Time")
                .y_axis_label("Population")
                .show_grid(true)
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new("Prey (x)", prey));
                    plot_ui.line(Line::new("Predators (y)", predators));
                });
        });
    }
}
