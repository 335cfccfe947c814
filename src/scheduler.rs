//! # Módulo de Selección de Algoritmo
//!
//! Este módulo define el enum con los algoritmos de planificación
//! disponibles y la construcción validada a partir de la especificación
//! textual que entrega el despachador de línea de comandos.

use std::fmt;
use std::num::NonZeroU32;

use crate::error::SimulationError;

/// Algoritmos de planificación disponibles para la simulación.
///
/// Cada variante define una estrategia distinta para ordenar la ejecución
/// de la tabla de procesos:
/// - FCFS ejecuta en orden de llegada, sin interrupciones
/// - SJF elige siempre la ráfaga pendiente más corta, sin interrupciones
/// - Round Robin reparte la CPU en slices de tamaño `quantum`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchedulingAlgorithm {
    /// First-Come First-Served: no preemptivo, en orden de llegada.
    Fcfs,

    /// Shortest-Job-First: no preemptivo, menor ráfaga primero.
    ///
    /// Entre los procesos que ya llegaron se elige el de ráfaga más corta;
    /// una vez despachado, el proceso corre hasta completarse.
    Sjf,

    /// Round Robin: preemptivo con quantum fijo.
    ///
    /// Cada proceso recibe a lo sumo `quantum` unidades por despacho y, si
    /// no terminó, vuelve al final de la cola de listos.
    RoundRobin {
        /// Slice máximo de CPU por despacho
        quantum: NonZeroU32,
    },
}

impl SchedulingAlgorithm {
    /// Crea un nuevo algoritmo FCFS.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cpu_scheduler_simulator::SchedulingAlgorithm;
    ///
    /// let algorithm = SchedulingAlgorithm::fcfs();
    /// assert!(!algorithm.is_preemptive());
    /// ```
    pub fn fcfs() -> Self {
        Self::Fcfs
    }

    /// Crea un nuevo algoritmo SJF no preemptivo.
    pub fn sjf() -> Self {
        Self::Sjf
    }

    /// Crea un nuevo algoritmo Round Robin con el quantum especificado.
    ///
    /// # Arguments
    ///
    /// * `quantum` - Slice máximo de CPU por despacho
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::num::NonZeroU32;
    /// use cpu_scheduler_simulator::SchedulingAlgorithm;
    ///
    /// let quantum = NonZeroU32::new(2).unwrap();
    /// let algorithm = SchedulingAlgorithm::round_robin(quantum);
    /// assert!(algorithm.is_preemptive());
    /// ```
    pub fn round_robin(quantum: NonZeroU32) -> Self {
        Self::RoundRobin { quantum }
    }

    /// Construye el algoritmo a partir de la especificación del despachador.
    ///
    /// Toda la validación previa a la simulación vive acá: nombre
    /// desconocido, quantum ausente para `rr` y quantum no positivo se
    /// reportan como errores tipados antes de que ningún motor ejecute.
    /// El nombre se compara sin distinguir mayúsculas.
    ///
    /// # Arguments
    ///
    /// * `name` - Nombre del algoritmo: `fcfs`, `sjf` o `rr`
    /// * `quantum` - Quantum pedido (solo relevante para `rr`)
    ///
    /// # Returns
    ///
    /// El algoritmo validado, o el `SimulationError` correspondiente
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cpu_scheduler_simulator::{SchedulingAlgorithm, SimulationError};
    ///
    /// let rr = SchedulingAlgorithm::from_spec("rr", Some(2)).unwrap();
    /// assert!(rr.is_preemptive());
    ///
    /// let err = SchedulingAlgorithm::from_spec("rr", Some(0));
    /// assert_eq!(err, Err(SimulationError::NonPositiveQuantum(0)));
    /// ```
    pub fn from_spec(name: &str, quantum: Option<i64>) -> Result<Self, SimulationError> {
        match name.to_lowercase().as_str() {
            "fcfs" => Ok(Self::Fcfs),
            "sjf" => Ok(Self::Sjf),
            "rr" => {
                let requested = quantum.ok_or(SimulationError::MissingQuantum)?;
                let quantum = u32::try_from(requested)
                    .ok()
                    .and_then(NonZeroU32::new)
                    .ok_or(SimulationError::NonPositiveQuantum(requested))?;
                Ok(Self::RoundRobin { quantum })
            }
            _ => Err(SimulationError::InvalidAlgorithm(name.to_string())),
        }
    }

    /// Determina si el algoritmo puede interrumpir procesos en ejecución.
    pub fn is_preemptive(&self) -> bool {
        match self {
            Self::Fcfs | Self::Sjf => false,
            Self::RoundRobin { .. } => true,
        }
    }

    /// Obtiene el quantum configurado para Round Robin.
    ///
    /// # Returns
    ///
    /// `Some(quantum)` si es Round Robin, `None` para FCFS y SJF
    pub fn quantum(&self) -> Option<NonZeroU32> {
        match self {
            Self::Fcfs | Self::Sjf => None,
            Self::RoundRobin { quantum } => Some(*quantum),
        }
    }

    /// Obtiene una descripción textual del algoritmo.
    ///
    /// # Returns
    ///
    /// String describiendo el algoritmo y sus parámetros
    pub fn description(&self) -> String {
        match self {
            Self::Fcfs => "First-Come First-Served (no preemptivo)".to_string(),
            Self::Sjf => "Shortest-Job-First (no preemptivo)".to_string(),
            Self::RoundRobin { quantum } => {
                format!("Round Robin preemptivo (quantum: {})", quantum)
            }
        }
    }
}

impl fmt::Display for SchedulingAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fcfs => write!(f, "FCFS"),
            Self::Sjf => write!(f, "SJF"),
            Self::RoundRobin { quantum } => write!(f, "Round Robin (quantum {})", quantum),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fcfs_creation() {
        let algorithm = SchedulingAlgorithm::fcfs();
        assert_eq!(algorithm, SchedulingAlgorithm::Fcfs);
        assert!(!algorithm.is_preemptive());
        assert_eq!(algorithm.quantum(), None);
    }

    #[test]
    fn test_round_robin_creation() {
        let quantum = NonZeroU32::new(4).unwrap();
        let algorithm = SchedulingAlgorithm::round_robin(quantum);

        match algorithm {
            SchedulingAlgorithm::RoundRobin { quantum: q } => assert_eq!(q, quantum),
            _ => panic!("Expected RoundRobin variant"),
        }

        assert!(algorithm.is_preemptive());
        assert_eq!(algorithm.quantum(), Some(quantum));
    }

    #[test]
    fn test_from_spec_accepts_known_names() {
        assert_eq!(
            SchedulingAlgorithm::from_spec("fcfs", None),
            Ok(SchedulingAlgorithm::Fcfs)
        );
        assert_eq!(
            SchedulingAlgorithm::from_spec("SJF", None),
            Ok(SchedulingAlgorithm::Sjf)
        );
        assert_eq!(
            SchedulingAlgorithm::from_spec("rr", Some(3)),
            Ok(SchedulingAlgorithm::round_robin(NonZeroU32::new(3).unwrap()))
        );
    }

    #[test]
    fn test_from_spec_rejects_unknown_name() {
        assert_eq!(
            SchedulingAlgorithm::from_spec("mlfq", Some(2)),
            Err(SimulationError::InvalidAlgorithm("mlfq".to_string()))
        );
    }

    #[test]
    fn test_from_spec_requires_quantum_for_rr() {
        assert_eq!(
            SchedulingAlgorithm::from_spec("rr", None),
            Err(SimulationError::MissingQuantum)
        );
        assert_eq!(
            SchedulingAlgorithm::from_spec("rr", Some(0)),
            Err(SimulationError::NonPositiveQuantum(0))
        );
        assert_eq!(
            SchedulingAlgorithm::from_spec("rr", Some(-5)),
            Err(SimulationError::NonPositiveQuantum(-5))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", SchedulingAlgorithm::fcfs()), "FCFS");
        assert_eq!(format!("{}", SchedulingAlgorithm::sjf()), "SJF");

        let rr = SchedulingAlgorithm::round_robin(NonZeroU32::new(2).unwrap());
        assert_eq!(format!("{}", rr), "Round Robin (quantum 2)");
    }
}
