#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DifficultyAverage {
    pub avg: Option<f64>,
}
