use tracing::debug;

use super::catalog::{BASELINE, JURISDICTIONS, REGIONAL};
use crate::models::{Recommendation, RecommendationCategory, Timeframe};

/// Category order in the grouped output.
const TIMEFRAMES: [Timeframe; 2] = [Timeframe::Immediate, Timeframe::LongTerm];

/// Returns the recommendations for a jurisdiction, in listing order:
/// baseline advice, then jurisdiction advice, then advice scoped to
/// `region`.
///
/// `jurisdiction_name` must match a catalog name exactly; unknown names
/// yield the baseline advice only.
pub fn applicable_recommendations(
    jurisdiction_name: &str,
    region: Option<&str>,
) -> Vec<Recommendation> {
    let mut recommendations = BASELINE.to_vec();

    match JURISDICTIONS
        .iter()
        .find(|entry| entry.jurisdictions.iter().any(|name| *name == jurisdiction_name))
    {
        Some(entry) => recommendations.extend_from_slice(entry.recommendations),
        None => debug!(
            jurisdiction = jurisdiction_name,
            "no jurisdiction-specific recommendations"
        ),
    }

    if let Some(region) = region {
        let region = region.trim().to_ascii_uppercase();
        REGIONAL
            .iter()
            .filter(|entry| {
                entry.jurisdiction == jurisdiction_name
                    && entry.regions.iter().any(|code| *code == region)
            })
            .for_each(|entry| recommendations.extend_from_slice(entry.recommendations));
    }

    recommendations
}

/// Groups [`applicable_recommendations`] into "Immediate Actions" and
/// "Long-term Strategies", preserving listing order within each group.
///
/// Both categories are always returned, possibly empty.
pub fn recommend(
    jurisdiction_name: &str,
    region: Option<&str>,
) -> Vec<RecommendationCategory> {
    let all = applicable_recommendations(jurisdiction_name, region);

    TIMEFRAMES
        .iter()
        .map(|timeframe| RecommendationCategory {
            title: timeframe.category_title(),
            recommendations: all
                .iter()
                .filter(|rec| rec.timeframe == *timeframe)
                .copied()
                .collect(),
        })
        .collect()
}
