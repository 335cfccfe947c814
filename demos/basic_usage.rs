//! Ejemplo básico de uso del simulador de planificación de CPU

use std::num::NonZeroU32;

use cpu_scheduler_simulator::{config, SchedulingAlgorithm, Simulation};

fn main() {
    println!("=== Ejemplo: Uso Básico del Simulador ===\n");

    // Ejecutar simulación con FCFS
    println!("1. Ejecutando simulación con FCFS...");
    let mut fcfs_simulation = Simulation::new(SchedulingAlgorithm::fcfs());
    let fcfs_metrics = fcfs_simulation.run().expect("tabla de ejemplo no vacía");

    println!("\n--- Reporte FCFS ---");
    println!("{}", fcfs_simulation.generate_report(&fcfs_metrics));

    // Ejecutar simulación con SJF
    println!("2. Ejecutando simulación con SJF...");
    let mut sjf_simulation = Simulation::new(SchedulingAlgorithm::sjf());
    let sjf_metrics = sjf_simulation.run().expect("tabla de ejemplo no vacía");

    println!("\n--- Reporte SJF ---");
    println!("{}", sjf_simulation.generate_report(&sjf_metrics));

    // Ejecutar simulación con Round Robin
    let quantum = NonZeroU32::new(config::DEFAULT_QUANTUM).expect("quantum por defecto > 0");
    println!("3. Ejecutando simulación con Round Robin (quantum {})...", quantum);
    let mut rr_simulation = Simulation::new(SchedulingAlgorithm::round_robin(quantum));
    let rr_metrics = rr_simulation.run().expect("tabla de ejemplo no vacía");

    println!("\n--- Reporte Round Robin ---");
    println!("{}", rr_simulation.generate_report(&rr_metrics));

    // Comparación de resultados
    println!("\n=== Comparación de Algoritmos ===");
    println!("| Métrica                    | FCFS   | SJF    | Round Robin |");
    println!("|----------------------------|--------|--------|-------------|");
    println!(
        "| Tiempo promedio de espera  | {:>6.2} | {:>6.2} | {:>11.2} |",
        fcfs_metrics.average_waiting_time,
        sjf_metrics.average_waiting_time,
        rr_metrics.average_waiting_time
    );
    println!(
        "| Tiempo promedio turnaround | {:>6.2} | {:>6.2} | {:>11.2} |",
        fcfs_metrics.average_turnaround_time,
        sjf_metrics.average_turnaround_time,
        rr_metrics.average_turnaround_time
    );

    // Generar archivos CSV para análisis posterior
    std::fs::write("fcfs_results.csv", fcfs_simulation.generate_csv_report(&fcfs_metrics))
        .expect("No se pudo escribir archivo FCFS CSV");
    std::fs::write("rr_results.csv", rr_simulation.generate_csv_report(&rr_metrics))
        .expect("No se pudo escribir archivo RR CSV");

    println!("\nArchivos CSV generados:");
    println!("   - fcfs_results.csv");
    println!("   - rr_results.csv");
}
