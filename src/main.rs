use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use cpu_scheduler_simulator::loader;
use cpu_scheduler_simulator::{SchedulingAlgorithm, Simulation, SimulationMetrics};

/// Argumentos ya validados del despachador.
struct CliArgs {
    algorithm: SchedulingAlgorithm,
    input: PathBuf,
    output: PathBuf,
}

/// Parseo de CLI: <algoritmo> <entrada> <salida> [quantum]
fn parse_args(args: &[String]) -> Result<CliArgs, String> {

    // Verifica que estén los tres argumentos obligatorios
    if args.len() < 4 {
        return Err("Faltan argumentos".to_string());
    }

    // El quantum es el único argumento opcional; solo rr lo usa
    let quantum = match args.get(4) {
        Some(token) => Some(
            token
                .parse::<i64>()
                .map_err(|_| format!("Quantum inválido: {}", token))?,
        ),
        None => None,
    };

    let algorithm =
        SchedulingAlgorithm::from_spec(&args[1], quantum).map_err(|e| e.to_string())?;

    Ok(CliArgs {
        algorithm,
        input: PathBuf::from(&args[2]),
        output: PathBuf::from(&args[3]),
    })
}

/// Elige el formato del reporte según la extensión del archivo de salida.
fn render_report(simulation: &Simulation, metrics: &SimulationMetrics, output: &Path) -> String {
    match output.extension().and_then(|ext| ext.to_str()) {
        Some("csv") => simulation.generate_csv_report(metrics),
        Some("json") => simulation.generate_json_report(metrics),
        _ => simulation.generate_report(metrics),
    }
}

fn usage(bin: &str) -> String {
    format!(
        "Uso:\n  {bin} fcfs entrada.txt salida.txt\n  {bin} sjf  entrada.txt salida.txt\n  {bin} rr   entrada.txt salida.txt <quantum>\n\
         Donde la entrada tiene una línea `id llegada rafaga` por proceso\n\
         (o un arreglo JSON si la extensión es .json); el formato de la\n\
         salida se elige por su extensión: .csv, .json o tabla de texto.",
        bin = bin
    )
}

fn main() {
    // ---------- CLI ----------
    let args: Vec<String> = env::args().collect();
    let bin = args.get(0).map(String::as_str).unwrap_or("cpu-scheduler-simulator");

    let cli = parse_args(&args).unwrap_or_else(|e| {
        eprintln!("{}\nError: {}", usage(bin), e);
        std::process::exit(1);
    });

    // ---------- CARGA DE LA TABLA ----------
    let processes = loader::load_from_path(&cli.input).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    println!(
        "=== Simulación de planificación de CPU ({}) ===",
        cli.algorithm
    );
    println!("Procesos cargados: {}", processes.len());

    // ---------- SIMULACIÓN ----------
    let mut simulation = Simulation::with_processes(processes, cli.algorithm);
    let metrics = simulation.run().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    // ---------- REPORTE ----------
    let report = render_report(&simulation, &metrics, &cli.output);
    fs::write(&cli.output, &report).unwrap_or_else(|e| {
        eprintln!("Error: No se pudo escribir {}: {}", cli.output.display(), e);
        std::process::exit(1);
    });

    println!("Orden de finalización: {}", metrics.completion_order.join(", "));
    println!("Tiempo promedio de espera:     {:.2}", metrics.average_waiting_time);
    println!("Tiempo promedio de turnaround: {:.2}", metrics.average_turnaround_time);
    println!("Reporte escrito en {}", cli.output.display());
}
