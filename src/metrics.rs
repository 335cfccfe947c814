//! # Módulo de Métricas y Reportes
//!
//! Este módulo contiene la calculadora de tiempos compartida por los tres
//! motores de planificación, el agregador de promedios y la generación de
//! reportes (tabla de texto, CSV y JSON) sobre una tabla ya simulada.

use serde::Serialize;

use crate::process::Process;

/// Deriva turnaround y espera para un proceso finalizado.
///
/// Función pura, reutilizada de forma idéntica por los tres motores en el
/// momento en que un proceso termina: `turnaround = completion - arrival`
/// y `waiting = turnaround - burst`. El invocador garantiza
/// `completion >= arrival + burst`; no hay condiciones de error.
///
/// # Arguments
///
/// * `arrival` - Tiempo de llegada del proceso
/// * `burst` - Ráfaga total de CPU del proceso
/// * `completion` - Instante simulado de finalización
///
/// # Returns
///
/// Tupla `(turnaround, waiting)`
pub fn completion_metrics(arrival: u32, burst: u32, completion: u32) -> (u32, u32) {
    let turnaround = completion - arrival;
    let waiting = turnaround - burst;
    (turnaround, waiting)
}

/// Métricas agregadas de una corrida completa de simulación.
///
/// Contiene la tabla tal como la dejó el motor elegido, los dos promedios
/// y el orden en que los procesos fueron terminando.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationMetrics {
    /// Tabla de procesos finalizados, en el orden en que la dejó el motor
    pub processes: Vec<Process>,
    /// Promedio aritmético de los tiempos de espera
    pub average_waiting_time: f64,
    /// Promedio aritmético de los tiempos de turnaround
    pub average_turnaround_time: f64,
    /// IDs de los procesos ordenados por instante de finalización
    pub completion_order: Vec<String>,
}

/// Calculadora de métricas para la simulación.
///
/// Proporciona el agregado de promedios sobre una tabla finalizada y la
/// generación de reportes formateados con los resultados.
pub struct MetricsCalculator;

impl MetricsCalculator {
    /// Crea una nueva instancia del calculador de métricas.
    pub fn new() -> Self {
        Self
    }

    /// Calcula las métricas agregadas de una tabla finalizada.
    ///
    /// El invocador garantiza al menos un proceso: con una tabla vacía los
    /// promedios no están definidos (la `Simulation` reporta
    /// `EmptyProcessSet` antes de llegar aquí).
    ///
    /// # Arguments
    ///
    /// * `processes` - Tabla de procesos ya simulada, no vacía
    ///
    /// # Returns
    ///
    /// `SimulationMetrics` con la tabla, los promedios y el orden de
    /// finalización
    pub fn summarize(&self, processes: &[Process]) -> SimulationMetrics {
        let count = processes.len() as f64;
        let total_waiting: u64 = processes.iter().map(|p| u64::from(p.waiting)).sum();
        let total_turnaround: u64 = processes.iter().map(|p| u64::from(p.turnaround)).sum();

        // Orden de finalización: por completion, con el orden de la tabla
        // como desempate
        let mut order: Vec<usize> = (0..processes.len()).collect();
        order.sort_by_key(|&idx| processes[idx].completion);
        let completion_order = order
            .into_iter()
            .map(|idx| processes[idx].id.clone())
            .collect();

        SimulationMetrics {
            processes: processes.to_vec(),
            average_waiting_time: total_waiting as f64 / count,
            average_turnaround_time: total_turnaround as f64 / count,
            completion_order,
        }
    }

    /// Genera el reporte de resultados como tabla de texto alineada.
    ///
    /// Una fila por proceso (en el orden en que el motor dejó la tabla)
    /// con la tupla (id, llegada, ráfaga, finalización, turnaround,
    /// espera), seguida de los dos promedios con dos decimales.
    ///
    /// # Arguments
    ///
    /// * `metrics` - Métricas de la simulación
    ///
    /// # Returns
    ///
    /// String con el reporte formateado
    pub fn generate_report(&self, metrics: &SimulationMetrics) -> String {
        let mut report = String::new();

        report.push_str(&format!("{:=^72}\n", "  RESULTADOS DE LA SIMULACION  "));
        report.push_str(&format!(
            "{:<8} {:>9} {:>9} {:>13} {:>13} {:>9}\n",
            "ID", "Llegada", "Rafaga", "Finalizacion", "Turnaround", "Espera"
        ));
        report.push_str(&format!("{:-<72}\n", ""));

        for process in &metrics.processes {
            report.push_str(&format!(
                "{:<8} {:>9} {:>9} {:>13} {:>13} {:>9}\n",
                process.id,
                process.arrival,
                process.burst,
                process.completion,
                process.turnaround,
                process.waiting
            ));
        }

        report.push_str(&format!("{:-<72}\n", ""));
        report.push_str(&format!(
            "Tiempo promedio de espera:     {:.2}\n",
            metrics.average_waiting_time
        ));
        report.push_str(&format!(
            "Tiempo promedio de turnaround: {:.2}\n",
            metrics.average_turnaround_time
        ));
        report.push_str(&format!(
            "Orden de finalizacion: {}\n",
            metrics.completion_order.join(", ")
        ));
        report.push_str(&format!("{:=<72}\n", ""));

        report
    }

    /// Genera un reporte resumido en formato CSV.
    ///
    /// # Arguments
    ///
    /// * `metrics` - Métricas de la simulación
    ///
    /// # Returns
    ///
    /// String con los datos en formato CSV
    pub fn generate_csv_report(&self, metrics: &SimulationMetrics) -> String {
        let mut csv = String::new();

        csv.push_str("ProcessID,Arrival,Burst,Completion,Turnaround,Waiting\n");
        for process in &metrics.processes {
            csv.push_str(&format!(
                "{},{},{},{},{},{}\n",
                process.id,
                process.arrival,
                process.burst,
                process.completion,
                process.turnaround,
                process.waiting
            ));
        }

        csv
    }

    /// Genera el reporte completo en formato JSON.
    ///
    /// Serializa la estructura `SimulationMetrics` completa (tabla,
    /// promedios y orden de finalización) con `serde_json`.
    ///
    /// # Arguments
    ///
    /// * `metrics` - Métricas de la simulación
    ///
    /// # Returns
    ///
    /// String con el documento JSON indentado
    pub fn generate_json_report(&self, metrics: &SimulationMetrics) -> String {
        serde_json::to_string_pretty(metrics)
            .unwrap_or_else(|_| String::from("{}"))
    }
}

impl Default for MetricsCalculator {
    fn default() -> Self {
        Self::new()
    }
}
