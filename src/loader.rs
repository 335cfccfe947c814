//! # Módulo de Carga de Tablas
//!
//! Colaborador de frontera: lee la tabla de procesos desde una
//! representación plana de texto (una línea por proceso: `id llegada
//! rafaga`) o desde un archivo JSON, y garantiza que al núcleo solo le
//! lleguen registros bien formados.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::process::Process;

/// Registro de entrada tal como viene en un archivo JSON.
#[derive(Debug, Deserialize)]
struct ProcessRecord {
    id: String,
    arrival: u32,
    burst: u32,
}

/// Parsea una tabla de procesos desde su representación de texto plano.
///
/// Cada línea aporta un registro `id llegada rafaga` separado por espacios
/// en blanco. Se descartan sin error las líneas de comentario (prefijo
/// `#`), las líneas de menos de dos caracteres y cualquier línea mal
/// formada: menos de tres tokens, campos numéricos inválidos o ráfaga
/// igual a cero. El núcleo asume que todo registro recibido es válido.
///
/// # Arguments
///
/// * `contents` - Contenido completo del archivo de entrada
///
/// # Returns
///
/// Tabla de procesos en estado ejecutable, en el orden del archivo
///
/// # Examples
///
/// ```rust
/// use cpu_scheduler_simulator::loader;
///
/// let table = loader::parse_process_table("# comentario\nP1 0 5\nP2 1 3\n");
/// assert_eq!(table.len(), 2);
/// assert_eq!(table[0].id, "P1");
/// ```
pub fn parse_process_table(contents: &str) -> Vec<Process> {
    contents
        .lines()
        .filter(|line| !line.starts_with('#') && line.trim().len() >= 2)
        .filter_map(parse_record)
        .collect()
}

/// Parsea una línea `id llegada rafaga`; `None` si está mal formada.
fn parse_record(line: &str) -> Option<Process> {
    let mut tokens = line.split_whitespace();
    let id = tokens.next()?;
    let arrival: u32 = tokens.next()?.parse().ok()?;
    let burst: u32 = tokens.next()?.parse().ok()?;
    if burst == 0 {
        return None;
    }
    Some(Process::new(id, arrival, burst))
}

/// Parsea una tabla de procesos desde un documento JSON.
///
/// El documento debe ser un arreglo de objetos `{id, arrival, burst}`.
/// Igual que en el formato de texto, los registros con ráfaga cero se
/// descartan antes de llegar al núcleo.
///
/// # Arguments
///
/// * `contents` - Documento JSON completo
///
/// # Returns
///
/// Tabla de procesos, o un mensaje de error si el documento no decodifica
pub fn parse_json_table(contents: &str) -> Result<Vec<Process>, String> {
    let records: Vec<ProcessRecord> = serde_json::from_str(contents)
        .map_err(|e| format!("Entrada JSON inválida: {}", e))?;

    Ok(records
        .into_iter()
        .filter(|record| record.burst > 0)
        .map(|record| Process::new(record.id, record.arrival, record.burst))
        .collect())
}

/// Carga una tabla de procesos desde un archivo.
///
/// El formato se elige por la extensión: `.json` decodifica con serde,
/// cualquier otra extensión se trata como texto plano.
///
/// # Arguments
///
/// * `path` - Ruta del archivo de entrada
///
/// # Returns
///
/// Tabla de procesos, o un mensaje de error apto para mostrar al usuario
pub fn load_from_path(path: &Path) -> Result<Vec<Process>, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("No se pudo leer {}: {}", path.display(), e))?;

    if path.extension().and_then(|ext| ext.to_str()) == Some("json") {
        parse_json_table(&contents)
    } else {
        Ok(parse_process_table(&contents))
    }
}
