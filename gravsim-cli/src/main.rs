mod viewer;

use clap::{Parser, Subcommand};
use gravsim_core::diagnostics::{format_config_error, format_runtime_error};
use gravsim_core::{
    analyze_scenario, build_simulation_context, get_body_states, load_scenario, step_simulation,
    ScenarioConfig,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "gravsim")]
#[command(about = "gravsim - Newtonian N-body gravity simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scenario headlessly and print body states
    Run {
        /// Path to the scenario JSON file
        file: PathBuf,
        /// Override the number of steps
        #[arg(long)]
        steps: Option<u64>,
        /// Override the time step
        #[arg(long)]
        dt: Option<f64>,
        /// Print states every N steps (0 prints only the final state)
        #[arg(long, default_value_t = 0)]
        every: u64,
    },
    /// Check a scenario for configuration problems
    Check {
        /// Path to the scenario JSON file
        file: PathBuf,
    },
    /// Open an interactive viewer
    View {
        /// Path to the scenario JSON file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Run {
            file,
            steps,
            dt,
            every,
        } => run_file(&file, steps, dt, every),
        Commands::Check { file } => check_file(&file),
        Commands::View { file } => view_file(file),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load(file: &Path) -> Result<ScenarioConfig, String> {
    load_scenario(file).map_err(|e| format_config_error(&e, file.to_str()))
}

fn run_file(
    file: &Path,
    steps: Option<u64>,
    dt: Option<f64>,
    every: u64,
) -> Result<(), String> {
    let mut scenario = load(file)?;
    if let Some(steps) = steps {
        scenario.steps = steps;
    }
    if let Some(dt) = dt {
        scenario.dt = dt;
    }

    let diagnostics = analyze_scenario(&scenario);
    for diagnostic in diagnostics.iter() {
        eprintln!("{}", diagnostic);
    }
    if diagnostics.has_errors() {
        return Err(format!("{} rejected", file.display()));
    }

    let mut ctx = build_simulation_context(&scenario)
        .map_err(|e| format_config_error(&e, file.to_str()))?;

    while !ctx.is_finished() {
        step_simulation(&mut ctx).map_err(|e| format_runtime_error(&e))?;
        if every > 0 && ctx.current_step % every == 0 && !ctx.is_finished() {
            print_states(&ctx);
        }
    }

    print_states(&ctx);
    println!(
        "energy: initial = {:.9e}, final = {:.9e}, drift = {:.3e}",
        ctx.initial_energy,
        ctx.energy(),
        ctx.energy_drift()
    );
    Ok(())
}

fn print_states(ctx: &gravsim_core::SimulationContext) {
    println!("step {} (t = {})", ctx.current_step, ctx.elapsed);
    for state in get_body_states(ctx) {
        println!(
            "  {} pos = ({:.6e}, {:.6e}) vel = ({:.6e}, {:.6e})",
            state.name, state.pos.x, state.pos.y, state.vel.x, state.vel.y
        );
    }
}

fn check_file(file: &Path) -> Result<(), String> {
    let scenario = load(file)?;
    let diagnostics = analyze_scenario(&scenario);

    for diagnostic in diagnostics.iter() {
        println!("{}", diagnostic);
    }
    if diagnostics.has_errors() {
        return Err(format!(
            "{} has {} error(s)",
            file.display(),
            diagnostics.errors().count()
        ));
    }

    println!(
        "{}: {} bodies, ok ({} warning(s))",
        file.display(),
        scenario.bodies.len(),
        diagnostics.warnings().count()
    );
    Ok(())
}

fn view_file(file: PathBuf) -> Result<(), String> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "gravsim",
        options,
        Box::new(|cc| Ok(Box::new(viewer::ViewerApp::new(file, cc)))),
    )
    .map_err(|e| e.to_string())
}
