/// Outcome of evaluating a coordinate against the ring
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "status", rename_all = "snake_case")
)]
pub enum Evaluation {
    /// The coordinate lies inside the ring (the boundary counts as inside)
    Inside,
    /// The coordinate lies outside the ring
    Outside {
        /// Great-circle distance to the nearest boundary point in kilometers
        distance_km: f64,
    },
}

impl Evaluation {
    pub fn is_inside(&self) -> bool {
        matches!(self, Evaluation::Inside)
    }

    /// Distance to the ring in kilometers, `None` for inside coordinates
    pub fn distance_km(&self) -> Option<f64> {
        match self {
            Evaluation::Inside => None,
            Evaluation::Outside { distance_km } => Some(*distance_km),
        }
    }
}
