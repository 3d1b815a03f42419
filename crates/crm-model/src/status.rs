use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Customer lifecycle status.
///
/// Import cells are matched case-insensitively; an empty cell defaults to
/// [`CustomerStatus::Active`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    #[default]
    Active,
    Inactive,
    Lead,
    Prospect,
    Customer,
    Vip,
}

impl CustomerStatus {
    /// Every legal status, in the order the import contract documents them.
    pub const ALL: [CustomerStatus; 6] = [
        CustomerStatus::Active,
        CustomerStatus::Inactive,
        CustomerStatus::Lead,
        CustomerStatus::Prospect,
        CustomerStatus::Customer,
        CustomerStatus::Vip,
    ];

    /// Lowercase submission value.
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerStatus::Active => "active",
            CustomerStatus::Inactive => "inactive",
            CustomerStatus::Lead => "lead",
            CustomerStatus::Prospect => "prospect",
            CustomerStatus::Customer => "customer",
            CustomerStatus::Vip => "vip",
        }
    }

    /// The legal set rendered for error messages: `active, inactive, ...`.
    pub fn legal_values() -> String {
        let names: Vec<&str> = Self::ALL.iter().map(CustomerStatus::as_str).collect();
        names.join(", ")
    }
}

impl fmt::Display for CustomerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CustomerStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(trimmed))
            .copied()
            .ok_or_else(|| format!("Unknown customer status: {trimmed}"))
    }
}
