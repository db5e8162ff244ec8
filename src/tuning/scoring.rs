use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScoringTuning {
    /// Points for shooting an enemy that sits in formation.
    pub formation: u32,

    /// Points for shooting an enemy mid-dive.
    pub diving: u32,

    /// Points for shooting an enemy still on its entrance path.
    pub entering: u32,

    /// Score at which the first extra life is granted.
    pub extra_life_first: u32,

    /// Threshold increment after each extra life.
    pub extra_life_step: u32,
}

impl Default for ScoringTuning {
    fn default() -> Self {
        Self {
            formation: 50,
            diving: 150,
            entering: 0,
            extra_life_first: 10_000,
            extra_life_step: 10_000,
        }
    }
}
