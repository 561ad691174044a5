use serde::Deserialize;
use survey_eval::survey::RowPolicy;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub row_policy: RowPolicy,
}
