//! # Módulo de Simulación Principal
//!
//! Este módulo contiene el orquestador de una corrida: es el dueño de la
//! tabla de procesos, valida las precondiciones, resetea la tabla, la
//! entrega a exactamente un motor y agrega los resultados.

use std::mem;

use crate::config;
use crate::engines;
use crate::error::SimulationError;
use crate::metrics::{MetricsCalculator, SimulationMetrics};
use crate::process::Process;
use crate::scheduler::SchedulingAlgorithm;

/// Orquestador principal del simulador de planificación.
///
/// La `Simulation` coordina una corrida completa:
/// - Valida las precondiciones (tabla no vacía) antes de ejecutar
/// - Resetea la tabla a estado ejecutable en cada invocación
/// - Despacha el motor correspondiente al algoritmo elegido
/// - Calcula las métricas agregadas del resultado
///
/// La tabla es propiedad exclusiva de la simulación: cada motor la recibe
/// como valor, la puebla y la devuelve. No hay estado compartido.
pub struct Simulation {
    /// Tabla de procesos de la corrida
    processes: Vec<Process>,
    /// Algoritmo de planificación a utilizar
    algorithm: SchedulingAlgorithm,
    /// Calculadora de métricas para agregar resultados
    metrics_calculator: MetricsCalculator,
}

impl Simulation {
    /// Crea una nueva simulación sobre la tabla de ejemplo por defecto.
    ///
    /// # Arguments
    ///
    /// * `algorithm` - Algoritmo de planificación a utilizar
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cpu_scheduler_simulator::{Simulation, SchedulingAlgorithm};
    ///
    /// let simulation = Simulation::new(SchedulingAlgorithm::fcfs());
    /// ```
    pub fn new(algorithm: SchedulingAlgorithm) -> Self {
        Self::with_processes(config::sample_processes(), algorithm)
    }

    /// Crea una simulación sobre una tabla de procesos dada.
    ///
    /// # Arguments
    ///
    /// * `processes` - Tabla de procesos (normalmente salida del loader)
    /// * `algorithm` - Algoritmo de planificación a utilizar
    pub fn with_processes(processes: Vec<Process>, algorithm: SchedulingAlgorithm) -> Self {
        Self {
            processes,
            algorithm,
            metrics_calculator: MetricsCalculator::new(),
        }
    }

    /// Ejecuta la simulación completa y retorna las métricas resultantes.
    ///
    /// Implementa el ciclo completo de una corrida:
    /// 1. Verifica que la tabla no esté vacía
    /// 2. Resetea todos los procesos a estado ejecutable
    /// 3. Entrega la tabla al motor del algoritmo configurado
    /// 4. Agrega promedios y orden de finalización
    ///
    /// Puede invocarse varias veces sobre la misma simulación: el reset
    /// previo garantiza que cada corrida produce el mismo resultado que
    /// una tabla recién cargada.
    ///
    /// # Returns
    ///
    /// `SimulationMetrics` con la tabla poblada y las estadísticas, o
    /// `SimulationError::EmptyProcessSet` si no hay procesos
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cpu_scheduler_simulator::{Simulation, SchedulingAlgorithm};
    ///
    /// let mut simulation = Simulation::new(SchedulingAlgorithm::fcfs());
    /// let metrics = simulation.run().expect("tabla de ejemplo no vacía");
    /// println!("Espera promedio: {:.2}", metrics.average_waiting_time);
    /// ```
    pub fn run(&mut self) -> Result<SimulationMetrics, SimulationError> {
        if self.processes.is_empty() {
            return Err(SimulationError::EmptyProcessSet);
        }

        for process in self.processes.iter_mut() {
            process.reset();
        }

        let table = mem::take(&mut self.processes);
        self.processes = match self.algorithm {
            SchedulingAlgorithm::Fcfs => engines::fcfs(table),
            SchedulingAlgorithm::Sjf => engines::sjf(table),
            SchedulingAlgorithm::RoundRobin { quantum } => engines::round_robin(table, quantum),
        };

        Ok(self.metrics_calculator.summarize(&self.processes))
    }

    /// Genera un reporte detallado de los resultados.
    ///
    /// # Arguments
    ///
    /// * `metrics` - Métricas de la simulación
    ///
    /// # Returns
    ///
    /// String con el reporte formateado
    pub fn generate_report(&self, metrics: &SimulationMetrics) -> String {
        self.metrics_calculator.generate_report(metrics)
    }

    /// Genera un reporte en formato CSV.
    pub fn generate_csv_report(&self, metrics: &SimulationMetrics) -> String {
        self.metrics_calculator.generate_csv_report(metrics)
    }

    /// Genera un reporte en formato JSON.
    pub fn generate_json_report(&self, metrics: &SimulationMetrics) -> String {
        self.metrics_calculator.generate_json_report(metrics)
    }

    /// Algoritmo configurado para esta simulación.
    pub fn algorithm(&self) -> SchedulingAlgorithm {
        self.algorithm
    }

    /// Tabla de procesos, en el orden en que la dejó la última corrida.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }
}
