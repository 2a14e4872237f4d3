//! Factions.

use airops_core::params::SideParameters;

/// A faction: identity, display color and running score.
#[derive(Debug, Clone, PartialEq)]
pub struct Side {
    id: String,
    name: String,
    color: String,
    total_score: f64,
}

impl Side {
    pub fn new(params: SideParameters) -> Self {
        Self {
            id: params.id,
            name: params.name,
            color: params.color,
            total_score: params.total_score,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn total_score(&self) -> f64 {
        self.total_score
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    pub fn set_total_score(&mut self, score: f64) {
        self.total_score = score;
    }
}
