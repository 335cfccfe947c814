//! # Simulador de Planificación de CPU
//!
//! Esta biblioteca implementa un simulador determinista y fuera de línea
//! de tres algoritmos clásicos de planificación de CPU, operando sobre una
//! tabla fija de procesos conocida por adelantado.
//!
//! ## Características principales
//!
//! - **Tres disciplinas de planificación**: FCFS (First-Come First-Served),
//!   SJF no preemptivo (Shortest-Job-First) y Round Robin con quantum
//!   configurable.
//! - **Reloj simulado discreto**: el tiempo avanza solo en pasos definidos
//!   por cada algoritmo; no hay ejecución real ni hilos, la simulación es
//!   completamente secuencial y de una sola pasada.
//! - **Métricas por proceso**: tiempos de finalización, turnaround y
//!   espera, más los promedios agregados de la corrida.
//! - **Reportes**: tabla de texto alineada, CSV y JSON (vía `serde`).
//!
//! ## Estructura del proyecto
//!
//! - `process`: Módulo que define el registro de proceso y su ciclo de vida
//! - `engines`: Módulo con los tres motores de planificación
//! - `scheduler`: Módulo que define la selección validada de algoritmo
//! - `simulation`: Módulo principal que coordina cada corrida
//! - `metrics`: Módulo para el cálculo de tiempos, promedios y reportes
//! - `loader`: Módulo de frontera que carga la tabla desde texto o JSON
//! - `error`: Módulo con la taxonomía de errores del simulador

pub mod engines;
pub mod error;
pub mod loader;
pub mod metrics;
pub mod process;
pub mod scheduler;
pub mod simulation;

// Re-exportar las estructuras principales para facilitar su uso
pub use error::SimulationError;
pub use metrics::{MetricsCalculator, SimulationMetrics};
pub use process::Process;
pub use scheduler::SchedulingAlgorithm;
pub use simulation::Simulation;

/// Configuración por defecto del simulador
pub mod config {
    use crate::process::Process;

    /// Quantum por defecto para Round Robin (en unidades de tiempo simulado)
    pub const DEFAULT_QUANTUM: u32 = 2;

    /// Tabla de procesos de ejemplo para demostraciones y pruebas
    pub fn sample_processes() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 5),
            Process::new("P2", 1, 3),
            Process::new("P3", 2, 8),
        ]
    }
}
