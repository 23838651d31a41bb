use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Impact {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Timeframe {
    Immediate,
    #[serde(rename = "Long-term")]
    LongTerm,
}

impl Timeframe {
    /// Heading of the category grouping recommendations with this timeframe.
    pub fn category_title(&self) -> &'static str {
        match self {
            Self::Immediate => "Immediate Actions",
            Self::LongTerm => "Long-term Strategies",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Complex,
    None,
}

/// A static piece of tax-saving advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub title: &'static str,
    pub description: &'static str,
    pub impact: Impact,
    pub timeframe: Timeframe,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationCategory {
    pub title: &'static str,
    pub recommendations: Vec<Recommendation>,
}
