//! # Módulo de Procesos
//!
//! Este módulo define el registro de proceso que atraviesa el simulador:
//! sus datos de entrada (llegada y ráfaga) y los resultados calculados
//! por el motor de planificación (finalización, turnaround y espera).

use serde::Serialize;

use crate::metrics;

/// Representa un proceso dentro de una corrida de simulación.
///
/// Cada proceso mantiene su identificador, sus tiempos de entrada
/// (`arrival`, `burst`) y los campos de salida que el motor de
/// planificación completa al finalizar (`completion`, `turnaround`,
/// `waiting`). Los campos de salida valen cero hasta que `finished`
/// sea `true`; el campo `remaining` solo lo consume Round Robin,
/// los algoritmos no preemptivos lo dejan igual a `burst`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Process {
    /// Identificador corto del proceso (único dentro de la corrida)
    pub id: String,
    /// Instante simulado en que el proceso queda elegible para ejecutar
    pub arrival: u32,
    /// Tiempo total de CPU que el proceso necesita (siempre > 0)
    pub burst: u32,
    /// Tiempo de CPU que aún debe recibir; solo Round Robin lo decrementa
    pub remaining: u32,
    /// Instante simulado en que el proceso terminó toda su ráfaga
    pub completion: u32,
    /// `completion - arrival`
    pub turnaround: u32,
    /// `turnaround - burst`
    pub waiting: u32,
    /// `true` una vez que un motor registró la finalización del proceso
    pub finished: bool,
}

impl Process {
    /// Crea un nuevo proceso en estado ejecutable.
    ///
    /// # Arguments
    ///
    /// * `id` - Identificador corto del proceso
    /// * `arrival` - Tiempo de llegada simulado (no negativo)
    /// * `burst` - Tiempo total de CPU requerido (debe ser > 0)
    ///
    /// # Returns
    ///
    /// Un `Process` con `remaining = burst`, los campos de salida en cero
    /// y `finished = false`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cpu_scheduler_simulator::Process;
    ///
    /// let process = Process::new("P1", 0, 5);
    /// assert_eq!(process.remaining, 5);
    /// assert!(!process.finished);
    /// ```
    pub fn new(id: impl Into<String>, arrival: u32, burst: u32) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
            remaining: burst,
            completion: 0,
            turnaround: 0,
            waiting: 0,
            finished: false,
        }
    }

    /// Devuelve el proceso a su estado ejecutable inicial.
    ///
    /// Debe invocarse sobre toda la tabla antes de cada corrida de un
    /// algoritmo: restaura `remaining = burst`, limpia los campos de
    /// salida y baja la bandera `finished`. Correr un algoritmo sobre
    /// una tabla reseteada produce el mismo resultado que correrlo
    /// sobre una tabla recién cargada con los mismos valores.
    pub fn reset(&mut self) {
        self.remaining = self.burst;
        self.completion = 0;
        self.turnaround = 0;
        self.waiting = 0;
        self.finished = false;
    }

    /// Registra la finalización del proceso en el instante `clock`.
    ///
    /// Fija `completion`, deriva `turnaround` y `waiting` con la
    /// calculadora de tiempos compartida y marca el proceso como
    /// terminado. El motor que invoca garantiza
    /// `clock >= arrival + burst`.
    ///
    /// # Arguments
    ///
    /// * `clock` - Reloj simulado al momento de terminar la ráfaga
    pub fn complete_at(&mut self, clock: u32) {
        let (turnaround, waiting) = metrics::completion_metrics(self.arrival, self.burst, clock);
        self.completion = clock;
        self.turnaround = turnaround;
        self.waiting = waiting;
        self.finished = true;
    }

    /// Indica si el proceso ya puede ejecutar en el instante `clock`.
    pub fn has_arrived(&self, clock: u32) -> bool {
        self.arrival <= clock
    }

    /// Obtiene una representación string del estado actual del proceso.
    ///
    /// Útil para debugging del progreso de la tabla durante una corrida.
    ///
    /// # Returns
    ///
    /// String describiendo el estado actual del proceso
    pub fn status_summary(&self) -> String {
        if self.finished {
            format!(
                "Proceso {}: finalizado en t={} (espera {})",
                self.id, self.completion, self.waiting
            )
        } else {
            format!(
                "Proceso {}: pendiente (restante {} de {})",
                self.id, self.remaining, self.burst
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_process_is_runnable() {
        let process = Process::new("P1", 2, 7);
        assert_eq!(process.id, "P1");
        assert_eq!(process.arrival, 2);
        assert_eq!(process.burst, 7);
        assert_eq!(process.remaining, 7);
        assert_eq!(process.completion, 0);
        assert!(!process.finished);
    }

    #[test]
    fn test_complete_at_applies_timing() {
        let mut process = Process::new("P1", 2, 3);
        process.complete_at(9);

        assert!(process.finished);
        assert_eq!(process.completion, 9);
        assert_eq!(process.turnaround, 7);
        assert_eq!(process.waiting, 4);
    }

    #[test]
    fn test_reset_restores_runnable_state() {
        let mut process = Process::new("P1", 0, 4);
        process.remaining = 0;
        process.complete_at(10);

        process.reset();

        // Reset debe dejar el proceso igual que uno recién cargado
        assert_eq!(process, Process::new("P1", 0, 4));
    }

    #[test]
    fn test_has_arrived() {
        let process = Process::new("P1", 3, 1);
        assert!(!process.has_arrived(2));
        assert!(process.has_arrived(3));
        assert!(process.has_arrived(10));
    }
}
