//! # Módulo de Errores
//!
//! Taxonomía de fallas del simulador. Todas se detectan antes de que un
//! motor comience a ejecutar; una vez iniciada la simulación no hay
//! condiciones de error posibles.

use std::error::Error;
use std::fmt;

/// Fallas reportables de una corrida de simulación.
///
/// Se devuelven al invocador antes de ejecutar motor alguno: nunca se
/// entregan resultados parciales.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// Nombre de algoritmo no reconocido por el despachador.
    InvalidAlgorithm(String),
    /// Se pidió Round Robin sin indicar quantum.
    MissingQuantum,
    /// El quantum pedido no es un entero positivo utilizable.
    NonPositiveQuantum(i64),
    /// La tabla de procesos está vacía: los promedios no están definidos.
    EmptyProcessSet,
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAlgorithm(name) => {
                write!(f, "Algoritmo desconocido: {} (use fcfs, sjf o rr)", name)
            }
            Self::MissingQuantum => {
                write!(f, "Round Robin requiere un quantum")
            }
            Self::NonPositiveQuantum(value) => {
                write!(f, "El quantum debe ser > 0 (se recibió {})", value)
            }
            Self::EmptyProcessSet => {
                write!(f, "No hay procesos cargados para simular")
            }
        }
    }
}

impl Error for SimulationError {}
