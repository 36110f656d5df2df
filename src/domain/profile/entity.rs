use serde::{Deserialize, Serialize};

/// The author behind the portfolio
/// A single record, built once and never mutated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name
    pub name: String,

    /// One-line headline under the name
    pub headline: String,

    /// Summary paragraph
    pub summary: String,

    /// Ordered strength statements
    pub strengths: Vec<String>,

    /// Ordered metric badges
    pub metrics: Vec<String>,

    /// Ordered stack/tool names
    pub stack: Vec<String>,

    /// Ordered availability statements
    pub availability: Vec<String>,

    /// External profile links, each optional on its own
    pub links: ProfileLinks,
}

/// Optional-field link bundle
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileLinks {
    /// Code-hosting profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,

    /// Game-platform profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roblox: Option<String>,

    /// Résumé document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cv: Option<String>,
}

impl ProfileLinks {
    /// Present links paired with their display labels, in fixed order
    pub fn labeled(&self) -> Vec<(&'static str, &str)> {
        [
            ("GitHub profile", self.github.as_deref()),
            ("Roblox profile", self.roblox.as_deref()),
            ("Résumé", self.cv.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, href)| href.map(|h| (label, h)))
        .collect()
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
