//! Shared primitive types used across the entire desk.
//!
//! Every enum here is a closed set. `label()` is the display form used by
//! views and the CSV export; `FromStr` accepts the label, the serde name,
//! and any case variation of either.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique application identifier, e.g. `USR1003`.
pub type ApplicationId = String;

/// Master seed for a session's synthetic dataset.
pub type Seed = u64;

/// Lowercase and strip spaces/underscores so "Personal Loan",
/// "personal_loan" and "PERSONALLOAN" all compare equal.
pub(crate) fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

macro_rules! closed_enum {
    (
        $name:ident, $what:literal {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = crate::error::DeskError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = normalize(s);
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| normalize(v.label()) == wanted)
                    .ok_or_else(|| crate::error::DeskError::UnknownVariant {
                        kind:  $what,
                        value: s.to_string(),
                    })
            }
        }
    };
}

// ── Credit products ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Product {
    Bnpl,
    PersonalLoan,
    LineOfCredit,
}

closed_enum!(Product, "product" {
    Bnpl         => "BNPL",
    PersonalLoan => "Personal Loan",
    LineOfCredit => "Line of Credit",
});

// ── Risk bands (also used as cohort keys) ────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

closed_enum!(RiskLevel, "risk level" {
    Low    => "Low",
    Medium => "Medium",
    High   => "High",
});

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Approved,
    Rejected,
    Pending,
}

closed_enum!(ApplicationStatus, "application status" {
    Approved => "Approved",
    Rejected => "Rejected",
    Pending  => "Pending",
});

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
}

closed_enum!(Quarter, "quarter" {
    Q1 => "Q1",
    Q2 => "Q2",
    Q3 => "Q3",
});

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Country {
    Uae,
    Ksa,
    Egypt,
}

closed_enum!(Country, "country" {
    Uae   => "UAE",
    Ksa   => "KSA",
    Egypt => "Egypt",
});

/// Scoring rule versions offered by the governance panel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleVersion {
    #[serde(rename = "v1.0")]
    V1_0,
    #[serde(rename = "v1.1")]
    V1_1,
    #[serde(rename = "v2.0")]
    V2_0,
}

closed_enum!(RuleVersion, "rule version" {
    V1_0 => "v1.0",
    V1_1 => "v1.1",
    V2_0 => "v2.0",
});

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    Active,
    Inactive,
}

closed_enum!(ProductStatus, "product status" {
    Active   => "Active",
    Inactive => "Inactive",
});
