//! Well-known column names and sentinel values for a member table.

use serde::{Deserialize, Serialize};

/// Column names and categorical sentinels the dashboard reads.
///
/// Defaults match the reference gym dataset; every field can be
/// overridden for tables with different headers or locales.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSchema {
    /// Numeric age column.
    pub age_col: String,
    /// Numeric body-mass-index column.
    pub bmi_col: String,
    /// Membership status column.
    pub status_col: String,
    /// Sentinel marking an active member in the status column.
    pub active_value: String,
    /// Membership plan column.
    pub membership_col: String,
    /// Training goal column.
    pub goal_col: String,
    /// Numeric visits-per-week column.
    pub visits_col: String,
    /// Numeric classes-per-month column.
    pub classes_col: String,
    /// Personal-trainer column.
    pub trainer_col: String,
    /// Sentinel marking "has a personal trainer".
    pub trainer_yes_value: String,
}

impl Default for TableSchema {
    fn default() -> Self {
        Self {
            age_col: "Age".to_string(),
            bmi_col: "BMI".to_string(),
            status_col: "Status".to_string(),
            active_value: "Ativo".to_string(),
            membership_col: "MembershipType".to_string(),
            goal_col: "Goal".to_string(),
            visits_col: "VisitsPerWeek".to_string(),
            classes_col: "ClassesPerMonth".to_string(),
            trainer_col: "PersonalTrainer".to_string(),
            trainer_yes_value: "Sim".to_string(),
        }
    }
}
