//! # Módulo de Motores de Planificación
//!
//! Este módulo implementa los tres motores de planificación del simulador:
//! FCFS, SJF no preemptivo y Round Robin. Cada motor recibe la tabla de
//! procesos como valor propio, la muta hasta que todos los procesos quedan
//! finalizados y la devuelve poblada. La validación (tabla no vacía,
//! quantum positivo) ocurre antes, en la `Simulation`: una vez iniciado,
//! un motor siempre termina.

use std::collections::VecDeque;
use std::num::NonZeroU32;

use crate::process::Process;

/// First-Come, First-Served: ejecución no preemptiva en orden de llegada.
///
/// Ordena la tabla por `arrival` ascendente (orden estable: los empates
/// conservan el orden de entrada) y ejecuta cada proceso hasta completarlo.
/// Si el reloj quedó atrás de la llegada del siguiente proceso, avanza
/// hasta esa llegada (hueco ocioso).
///
/// La tabla devuelta queda permanentemente reordenada por llegada, no en
/// el orden original de entrada; es una propiedad observable del motor.
///
/// # Arguments
///
/// * `processes` - Tabla de procesos en estado ejecutable
///
/// # Returns
///
/// La misma tabla, ordenada por llegada y con todos los procesos
/// finalizados
pub fn fcfs(mut processes: Vec<Process>) -> Vec<Process> {
    processes.sort_by_key(|process| process.arrival);

    let mut clock: u32 = 0;
    for process in processes.iter_mut() {
        if clock < process.arrival {
            clock = process.arrival;
        }
        clock += process.burst;
        process.complete_at(clock);
    }

    processes
}

/// Shortest-Job-First no preemptivo.
///
/// En cada punto de decisión recorre la tabla en orden de entrada y, entre
/// los procesos no finalizados con `arrival <= reloj`, elige el de menor
/// `burst`; los empates los gana el índice más bajo. El proceso elegido
/// corre su ráfaga completa sin interrupción. Si ningún proceso es
/// elegible, el reloj avanza exactamente una unidad (tick ocioso) y se
/// vuelve a examinar: no salta directo a la próxima llegada.
///
/// # Arguments
///
/// * `processes` - Tabla de procesos en estado ejecutable
///
/// # Returns
///
/// La misma tabla, en su orden de entrada, con todos los procesos
/// finalizados
pub fn sjf(mut processes: Vec<Process>) -> Vec<Process> {
    let total = processes.len();
    let mut clock: u32 = 0;
    let mut completed = 0;

    while completed < total {
        let mut chosen: Option<usize> = None;

        for (idx, process) in processes.iter().enumerate() {
            if process.finished || !process.has_arrived(clock) {
                continue;
            }
            // Solo una mejora estricta reemplaza al candidato: con ráfagas
            // iguales gana el primero encontrado en el recorrido
            match chosen {
                Some(best) if processes[best].burst <= process.burst => {}
                _ => chosen = Some(idx),
            }
        }

        match chosen {
            None => clock += 1,
            Some(idx) => {
                clock += processes[idx].burst;
                processes[idx].complete_at(clock);
                completed += 1;
            }
        }
    }

    processes
}

/// Round Robin con quantum fijo.
///
/// Mantiene una cola FIFO de índices con los procesos que ya llegaron y no
/// terminaron, más un vector de membresía que evita admitir dos veces el
/// mismo proceso (se marca en la primera admisión y no se limpia). En cada
/// paso:
///
/// 1. Admite, en orden de entrada, todo proceso elegible aún no admitido.
/// 2. Si la cola está vacía, avanza el reloj una unidad y reintenta.
/// 3. Desencola el frente y lo ejecuta `min(remaining, quantum)` unidades.
/// 4. Admite los procesos que llegaron durante el slice *antes* de
///    reencolar al proceso expropiado: las llegadas nuevas entran a la
///    cola por delante de su reingreso.
/// 5. Si `remaining` llegó a 0, registra la finalización; si no, el índice
///    vuelve al final de la cola.
///
/// # Arguments
///
/// * `processes` - Tabla de procesos en estado ejecutable
/// * `quantum` - Slice máximo de CPU por despacho (positivo por tipo)
///
/// # Returns
///
/// La misma tabla, en su orden de entrada, con todos los procesos
/// finalizados y `remaining` en 0
pub fn round_robin(mut processes: Vec<Process>, quantum: NonZeroU32) -> Vec<Process> {
    let quantum = quantum.get();
    let total = processes.len();
    let mut ready: VecDeque<usize> = VecDeque::new();
    let mut admitted = vec![false; total];
    let mut clock: u32 = 0;
    let mut completed = 0;

    while completed < total {
        admit_arrivals(&processes, &mut ready, &mut admitted, clock);

        let idx = match ready.pop_front() {
            Some(idx) => idx,
            None => {
                clock += 1;
                continue;
            }
        };

        let slice = processes[idx].remaining.min(quantum);
        processes[idx].remaining -= slice;
        clock += slice;

        // Las llegadas ocurridas durante el slice entran antes que el
        // reingreso del proceso expropiado
        admit_arrivals(&processes, &mut ready, &mut admitted, clock);

        if processes[idx].remaining == 0 {
            processes[idx].complete_at(clock);
            completed += 1;
        } else {
            ready.push_back(idx);
        }
    }

    processes
}

/// Encola, en orden de entrada, los procesos elegibles aún no admitidos.
fn admit_arrivals(
    processes: &[Process],
    ready: &mut VecDeque<usize>,
    admitted: &mut [bool],
    clock: u32,
) {
    for (idx, process) in processes.iter().enumerate() {
        if !process.finished && !admitted[idx] && process.has_arrived(clock) {
            admitted[idx] = true;
            ready.push_back(idx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 5),
            Process::new("P2", 1, 3),
            Process::new("P3", 2, 8),
        ]
    }

    fn by_id<'a>(processes: &'a [Process], id: &str) -> &'a Process {
        processes
            .iter()
            .find(|p| p.id == id)
            .expect("proceso presente en la tabla")
    }

    fn assert_timing_invariants(processes: &[Process]) {
        for process in processes {
            assert!(process.finished, "{} debe terminar", process.id);
            assert_eq!(process.turnaround, process.completion - process.arrival);
            assert_eq!(process.waiting, process.turnaround - process.burst);
        }
    }

    #[test]
    fn test_fcfs_reference_scenario() {
        let result = fcfs(sample_table());

        assert_timing_invariants(&result);
        assert_eq!(by_id(&result, "P1").completion, 5);
        assert_eq!(by_id(&result, "P2").completion, 8);
        assert_eq!(by_id(&result, "P3").completion, 16);
        assert_eq!(by_id(&result, "P1").waiting, 0);
        assert_eq!(by_id(&result, "P2").waiting, 4);
        assert_eq!(by_id(&result, "P3").waiting, 6);
    }

    #[test]
    fn test_fcfs_sorts_output_by_arrival() {
        let table = vec![
            Process::new("Tarde", 9, 2),
            Process::new("Temprano", 1, 2),
        ];
        let result = fcfs(table);

        // El motor reordena la tabla del invocador por llegada
        assert_eq!(result[0].id, "Temprano");
        assert_eq!(result[1].id, "Tarde");
    }

    #[test]
    fn test_fcfs_stable_on_equal_arrivals() {
        let table = vec![
            Process::new("A", 3, 4),
            Process::new("B", 3, 2),
            Process::new("C", 3, 1),
        ];
        let result = fcfs(table);

        // Con llegadas iguales se conserva el orden de entrada
        assert_eq!(result[0].id, "A");
        assert_eq!(result[1].id, "B");
        assert_eq!(result[2].id, "C");
        assert_eq!(result[0].completion, 7);
        assert_eq!(result[1].completion, 9);
        assert_eq!(result[2].completion, 10);
    }

    #[test]
    fn test_fcfs_idle_gap_advances_clock_to_arrival() {
        let table = vec![Process::new("P1", 0, 2), Process::new("P2", 10, 3)];
        let result = fcfs(table);

        // Hueco ocioso entre t=2 y t=10
        assert_eq!(by_id(&result, "P2").completion, 13);
        assert_eq!(by_id(&result, "P2").waiting, 0);
    }

    #[test]
    fn test_sjf_reference_scenario() {
        let result = sjf(sample_table());

        assert_timing_invariants(&result);
        // En t=0 solo P1 es elegible; en t=5 gana P2 (ráfaga 3) sobre P3
        assert_eq!(by_id(&result, "P1").completion, 5);
        assert_eq!(by_id(&result, "P2").completion, 8);
        assert_eq!(by_id(&result, "P3").completion, 16);
        assert_eq!(by_id(&result, "P1").waiting, 0);
        assert_eq!(by_id(&result, "P2").waiting, 4);
        assert_eq!(by_id(&result, "P3").waiting, 6);
    }

    #[test]
    fn test_sjf_keeps_input_order() {
        let result = sjf(sample_table());
        let ids: Vec<&str> = result.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["P1", "P2", "P3"]);
    }

    #[test]
    fn test_sjf_tie_goes_to_lower_index() {
        let table = vec![
            Process::new("X", 0, 4),
            Process::new("Y", 0, 4),
        ];
        let result = sjf(table);

        // Ráfagas iguales y ambos elegibles: gana el índice menor
        assert_eq!(by_id(&result, "X").completion, 4);
        assert_eq!(by_id(&result, "Y").completion, 8);
    }

    #[test]
    fn test_sjf_prefers_shortest_among_arrived() {
        let table = vec![
            Process::new("Largo", 0, 10),
            Process::new("Corto", 2, 1),
            Process::new("Medio", 2, 4),
        ];
        let result = sjf(table);

        // "Largo" ya corre en t=0; al terminar en t=10 gana "Corto"
        assert_eq!(by_id(&result, "Largo").completion, 10);
        assert_eq!(by_id(&result, "Corto").completion, 11);
        assert_eq!(by_id(&result, "Medio").completion, 15);
    }

    #[test]
    fn test_sjf_idle_ticks_until_first_arrival() {
        let table = vec![Process::new("P1", 7, 2)];
        let result = sjf(table);

        // El reloj avanza de a una unidad hasta t=7 y recién ahí despacha
        assert_eq!(result[0].completion, 9);
        assert_eq!(result[0].waiting, 0);
    }

    #[test]
    fn test_round_robin_reference_scenario() {
        let quantum = NonZeroU32::new(2).unwrap();
        let result = round_robin(sample_table(), quantum);

        assert_timing_invariants(&result);
        for process in &result {
            assert_eq!(process.remaining, 0);
        }
        // Interleaving con q=2: P2 termina en 9, P1 en 12, P3 en 16
        assert_eq!(by_id(&result, "P1").completion, 12);
        assert_eq!(by_id(&result, "P2").completion, 9);
        assert_eq!(by_id(&result, "P3").completion, 16);
        assert_eq!(by_id(&result, "P1").waiting, 7);
        assert_eq!(by_id(&result, "P2").waiting, 5);
        assert_eq!(by_id(&result, "P3").waiting, 6);
    }

    #[test]
    fn test_round_robin_new_arrival_enters_before_preempted() {
        // P2 llega exactamente cuando expira el primer slice de P1: debe
        // entrar a la cola antes que el reingreso de P1
        let table = vec![Process::new("P1", 0, 4), Process::new("P2", 2, 2)];
        let quantum = NonZeroU32::new(2).unwrap();
        let result = round_robin(table, quantum);

        assert_eq!(by_id(&result, "P2").completion, 4);
        assert_eq!(by_id(&result, "P1").completion, 6);
    }

    #[test]
    fn test_round_robin_large_quantum_matches_fcfs() {
        let quantum = NonZeroU32::new(20).unwrap();
        let rr = round_robin(sample_table(), quantum);
        let fc = fcfs(sample_table());

        // Con quantum >= ráfaga máxima, RR degenera en FCFS
        for process in &fc {
            assert_eq!(
                by_id(&rr, &process.id).completion,
                process.completion,
                "completion de {} debe coincidir",
                process.id
            );
        }
    }

    #[test]
    fn test_round_robin_idle_ticks_before_first_arrival() {
        let table = vec![Process::new("P1", 3, 2)];
        let quantum = NonZeroU32::new(1).unwrap();
        let result = round_robin(table, quantum);

        assert_eq!(result[0].completion, 5);
        assert_eq!(result[0].waiting, 0);
    }

    #[test]
    fn test_round_robin_quantum_one_alternates() {
        let table = vec![Process::new("A", 0, 2), Process::new("B", 0, 2)];
        let quantum = NonZeroU32::new(1).unwrap();
        let result = round_robin(table, quantum);

        // Alternancia A,B,A,B: A termina en 3, B en 4
        assert_eq!(by_id(&result, "A").completion, 3);
        assert_eq!(by_id(&result, "B").completion, 4);
    }
}
