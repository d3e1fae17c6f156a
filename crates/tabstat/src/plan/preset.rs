//! Built-in plans for the known social-media datasets.

use serde::{Deserialize, Serialize};

use super::AnalysisPlan;
use crate::error::TabstatError;

/// A known dataset layout with its grouping plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Preset {
    /// Facebook ads, keyed by page and ad.
    #[serde(rename = "fb-ads", alias = "facebook-ads")]
    FacebookAds,
    /// Facebook posts, keyed by account and post.
    #[serde(rename = "fb-posts", alias = "facebook-posts")]
    FacebookPosts,
    /// Twitter posts, keyed by source and tweet id.
    #[serde(rename = "tw-posts", alias = "twitter-posts")]
    TwitterPosts,
}

impl Preset {
    /// All presets.
    pub fn all() -> [Preset; 3] {
        [Preset::FacebookAds, Preset::FacebookPosts, Preset::TwitterPosts]
    }

    /// The grouping plan for this dataset.
    pub fn plan(&self) -> AnalysisPlan {
        match self {
            Preset::FacebookAds => AnalysisPlan::new()
                .with_grouping(["page_id"])
                .with_grouping(["page_id", "ad_id"])
                .with_designated("estimated_audience_size")
                .with_designated("estimated_impressions")
                .with_designated("estimated_spend"),
            Preset::FacebookPosts => AnalysisPlan::new()
                .with_grouping(["Facebook_Id"])
                .with_grouping(["Facebook_Id", "post_id"])
                .with_designated("Total Interactions")
                .with_designated("Likes")
                .with_designated("Comments")
                .with_designated("Shares")
                .with_designated("Post Views"),
            Preset::TwitterPosts => AnalysisPlan::new()
                .with_grouping(["source"])
                .with_grouping(["source", "id"])
                .with_designated("retweetCount")
                .with_designated("replyCount")
                .with_designated("likeCount")
                .with_designated("quoteCount")
                .with_designated("viewCount")
                .with_designated("bookmarkCount"),
        }
    }

    /// Prefix for the default output file name.
    pub fn output_prefix(&self) -> &'static str {
        match self {
            Preset::FacebookAds => "fb_ads",
            Preset::FacebookPosts => "fb_posts",
            Preset::TwitterPosts => "tw_posts",
        }
    }
}

impl std::str::FromStr for Preset {
    type Err = TabstatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "fb-ads" | "facebook-ads" => Ok(Preset::FacebookAds),
            "fb-posts" | "facebook-posts" => Ok(Preset::FacebookPosts),
            "tw-posts" | "twitter-posts" => Ok(Preset::TwitterPosts),
            _ => Err(TabstatError::Config(format!(
                "unknown preset '{}', use fb-ads, fb-posts or tw-posts",
                s
            ))),
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Preset::FacebookAds => write!(f, "fb-ads"),
            Preset::FacebookPosts => write!(f, "fb-posts"),
            Preset::TwitterPosts => write!(f, "tw-posts"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        for preset in Preset::all() {
            let parsed: Preset = preset.to_string().parse().unwrap();
            assert_eq!(parsed, preset);
        }
        assert_eq!("FB_ADS".parse::<Preset>().unwrap(), Preset::FacebookAds);
        assert!(matches!(
            "instagram".parse::<Preset>(),
            Err(TabstatError::Config(_))
        ));
    }

    #[test]
    fn test_serde_names_match_display() {
        let json = serde_json::to_string(&Preset::TwitterPosts).unwrap();
        assert_eq!(json, "\"tw-posts\"");
        let parsed: Preset = serde_json::from_str("\"facebook-ads\"").unwrap();
        assert_eq!(parsed, Preset::FacebookAds);
    }

    #[test]
    fn test_fb_ads_plan() {
        let plan = Preset::FacebookAds.plan();
        let labels: Vec<String> = plan.group_by.iter().map(|g| g.label()).collect();
        assert_eq!(labels, vec!["page_id", "page_id_ad_id"]);
        assert_eq!(plan.designated_numeric_columns.len(), 3);
        assert_eq!(Preset::FacebookAds.output_prefix(), "fb_ads");
    }

    #[test]
    fn test_presets_group_by_named_columns() {
        for preset in Preset::all() {
            let plan = preset.plan();
            assert!(plan.group_by.iter().all(|g| !g.columns.is_empty()));
        }
    }
}
