use serde::{Deserialize, Serialize};

/// Canonical column names for the indicator spreadsheet.
///
/// The defaults match the production sheet's Spanish headers; deployments
/// with a different sheet layout override them from a JSON config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMap {
    pub entity: String,
    pub activity: String,
    pub population: String,
    pub execution_date: String,
    pub summary: String,
    pub description: String,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            entity: "Entidad".to_string(),
            activity: "Actividad".to_string(),
            population: "Población impactada".to_string(),
            execution_date: "Fecha final de ejecución".to_string(),
            summary: "Resumen de actividades".to_string(),
            description: "Descripción de los compromisos".to_string(),
        }
    }
}

impl ColumnMap {
    /// The columns every record must carry to count as valid.
    pub fn required_fields(&self) -> Vec<String> {
        vec![
            self.entity.clone(),
            self.activity.clone(),
            self.execution_date.clone(),
            self.population.clone(),
        ]
    }
}
