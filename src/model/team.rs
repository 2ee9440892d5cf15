use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Team {
    pub id: i64,
    #[serde(default)]
    pub abbreviation: String,
    #[serde(default)]
    pub full_name: String,
    /// Short name, e.g. "Thunder".
    #[serde(default)]
    pub name: String,
}
