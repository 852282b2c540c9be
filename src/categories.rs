// Copyright (c) 2025 FinSmart contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// Closed set of transaction categories. Ids are the persisted/CLI spelling;
/// parsing an id outside the set is a validation error, never a silent
/// fallback.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Salary,
    Investment,
    Food,
    Rent,
    Utilities,
    Transport,
    Shopping,
    Entertainment,
    Healthcare,
    Other,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Salary,
        Category::Investment,
        Category::Food,
        Category::Rent,
        Category::Utilities,
        Category::Transport,
        Category::Shopping,
        Category::Entertainment,
        Category::Healthcare,
        Category::Other,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Category::Salary => "salary",
            Category::Investment => "investment",
            Category::Food => "food",
            Category::Rent => "rent",
            Category::Utilities => "utilities",
            Category::Transport => "transport",
            Category::Shopping => "shopping",
            Category::Entertainment => "entertainment",
            Category::Healthcare => "healthcare",
            Category::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Salary => "Salary",
            Category::Investment => "Investment",
            Category::Food => "Food & Dining",
            Category::Rent => "Rent",
            Category::Utilities => "Utilities",
            Category::Transport => "Transportation",
            Category::Shopping => "Shopping",
            Category::Entertainment => "Entertainment",
            Category::Healthcare => "Healthcare",
            Category::Other => "Other",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Category::Salary => "#22C55E",
            Category::Investment => "#3B82F6",
            Category::Food => "#F59E0B",
            Category::Rent => "#EC4899",
            Category::Utilities => "#8B5CF6",
            Category::Transport => "#10B981",
            Category::Shopping => "#6366F1",
            Category::Entertainment => "#F97316",
            Category::Healthcare => "#14B8A6",
            Category::Other => "#6B7280",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Category::ALL
            .iter()
            .find(|c| c.id() == s)
            .copied()
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
