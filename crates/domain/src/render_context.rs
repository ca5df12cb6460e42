//! Per-render derived identifiers.
//!
//! Many independent game instances can coexist on one exported page.
//! Every DOM id and global function name for one instance is built from
//! the values derived here; no other collision defense exists.

use serde::{Deserialize, Serialize};

use crate::activity::GamificationActivity;

/// CSS class consumed by the host page's progression tracker.
pub const TRACKING_CLASS: &str = "trackable-activity";

/// Identifiers derived once per render call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderContext {
    /// The activity id, used verbatim as a DOM-id suffix.
    pub activity_id: String,
    /// The activity id reduced to a valid JS identifier suffix.
    pub unique_id: String,
    /// When true, completing the activity gates course progression.
    pub required: bool,
    /// Applied to the outer container only when `required` is true.
    pub tracking_class: String,
}

impl RenderContext {
    pub fn new(activity: &GamificationActivity, required: bool) -> Self {
        Self {
            activity_id: activity.id().to_string(),
            unique_id: js_identifier_suffix(activity.id()),
            required,
            tracking_class: if required {
                TRACKING_CLASS.to_string()
            } else {
                String::new()
            },
        }
    }
}

/// Reduce an activity id to characters legal inside a JS identifier.
///
/// Alphanumerics and underscores survive; every other character maps to
/// an underscore rather than being dropped, so upstream-unique ids stay
/// distinct (dropping would collapse `a-b` and `ab`).
pub fn js_identifier_suffix(activity_id: &str) -> String {
    activity_id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::GameType;
    use serde_json::json;

    fn activity(id: &str) -> GamificationActivity {
        GamificationActivity::new(id, GameType::Battleships, json!({}))
    }

    #[test]
    fn unique_id_replaces_separators() {
        assert_eq!(js_identifier_suffix("act-12.3:x"), "act_12_3_x");
    }

    #[test]
    fn distinct_ids_stay_distinct() {
        assert_ne!(js_identifier_suffix("a-b"), js_identifier_suffix("ab"));
    }

    #[test]
    fn tracking_class_only_when_required() {
        let required = RenderContext::new(&activity("a1"), true);
        assert_eq!(required.tracking_class, TRACKING_CLASS);

        let optional = RenderContext::new(&activity("a1"), false);
        assert!(optional.tracking_class.is_empty());
    }

    #[test]
    fn derivation_is_idempotent() {
        let once = js_identifier_suffix("unit-3/quiz");
        assert_eq!(js_identifier_suffix(&once), once);
    }
}
