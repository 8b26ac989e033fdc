use serde::{Deserialize, Serialize};

/// Kind of maintenance a service log records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    #[default]
    Planned,
    Unplanned,
    Emergency,
}

impl ServiceType {
    /// All variants in display order
    pub const ALL: [ServiceType; 3] = [
        ServiceType::Planned,
        ServiceType::Unplanned,
        ServiceType::Emergency,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Planned => "planned",
            ServiceType::Unplanned => "unplanned",
            ServiceType::Emergency => "emergency",
        }
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ServiceType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ServiceType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown service type: {}", s))
    }
}
