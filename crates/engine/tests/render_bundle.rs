//! Bundle-level rendering tests.
//!
//! These exercise the public facade the way a static exporter would:
//! render several activities onto one "page" and check the bundles
//! stay self-contained and collision-free.

use ludopack_domain::games::battleships::Fleet;
use ludopack_domain::{GameType, GamificationActivity};
use ludopack_engine::{render_activity, render_activity_with_theme, RenderError, SystemRandom};
use serde_json::json;

fn activity(id: &str, game_type: GameType, config: serde_json::Value) -> GamificationActivity {
    GamificationActivity::new(id, game_type, config)
}

/// Every `id="..."` attribute value in a bundle.
fn dom_ids(html: &str) -> Vec<String> {
    html.split("id=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .map(str::to_string)
        .collect()
}

/// Every `window['...']` global a bundle installs.
fn window_globals(html: &str) -> Vec<String> {
    html.split("window['")
        .skip(1)
        .filter_map(|rest| rest.split('\'').next())
        .map(str::to_string)
        .collect()
}

#[test]
fn two_instances_share_no_dom_ids_or_globals() {
    let first = render_activity(&activity("unit-1-bs", GameType::Battleships, json!({}))).unwrap();
    let second = render_activity(&activity("unit-2-bs", GameType::Battleships, json!({}))).unwrap();

    let first_ids = dom_ids(&first);
    let second_ids = dom_ids(&second);
    assert!(!first_ids.is_empty());
    for id in &first_ids {
        assert!(!second_ids.contains(id), "id {id} collides across bundles");
    }

    let first_globals = window_globals(&first);
    let second_globals = window_globals(&second);
    assert!(!first_globals.is_empty());
    for name in &first_globals {
        assert!(
            !second_globals.contains(name),
            "global {name} collides across bundles"
        );
    }
}

#[test]
fn mixed_game_types_coexist_on_one_page() {
    let bs = render_activity(&activity("act-1", GameType::Battleships, json!({}))).unwrap();
    let uno = render_activity(&activity("act-2", GameType::QuizUno, json!({}))).unwrap();

    let bs_ids = dom_ids(&bs);
    for id in dom_ids(&uno) {
        assert!(!bs_ids.contains(&id), "id {id} collides across game types");
    }
}

#[test]
fn bundle_contains_markup_data_script_and_style_in_order() {
    let html = render_activity(&activity("bs-1", GameType::Battleships, json!({}))).unwrap();
    let div = html.find("<div id=\"activity-bs-1\"").unwrap();
    let data = html.find("<script type=\"application/json\"").unwrap();
    let script = html.find("<script>").unwrap();
    let style = html.find("<style>").unwrap();
    assert!(div < data && data < script && script < style);
}

#[test]
fn theme_css_is_scoped_by_class_prefix() {
    let html = render_activity(&activity("bs-1", GameType::Battleships, json!({}))).unwrap();
    // The default battleships theme scopes every rule under "bs-".
    assert!(html.contains(".bs-wrap"));
    assert!(html.contains("class=\"bs-bs-1 bs-wrap\""));
}

#[test]
fn named_theme_changes_the_prefix() {
    let default = render_activity_with_theme(
        &activity("bs-1", GameType::Battleships, json!({})),
        Some("naval"),
    )
    .unwrap();
    let alt = render_activity_with_theme(
        &activity("bs-1", GameType::Battleships, json!({})),
        Some("crt"),
    )
    .unwrap();
    assert!(default.contains(".bs-wrap"));
    assert!(alt.contains(".bsc-wrap"));
    assert_ne!(default, alt);
}

#[test]
fn required_activities_carry_the_tracking_class() {
    let tracked = render_activity(&activity(
        "uno-1",
        GameType::QuizUno,
        json!({"required": true}),
    ))
    .unwrap();
    let untracked =
        render_activity(&activity("uno-1", GameType::QuizUno, json!({}))).unwrap();
    assert!(tracked.contains("trackable-activity"));
    assert!(!untracked.contains("trackable-activity"));
}

#[test]
fn authored_markup_in_questions_cannot_break_out_of_the_json_block() {
    let html = render_activity(&activity(
        "bs-1",
        GameType::Battleships,
        json!({"questions": [{
            "question": "Sneaky </script><script>alert(1)</script>",
            "answers": ["a", "b"],
            "correctIndex": 0
        }]}),
    ))
    .unwrap();
    assert!(!html.contains("</script><script>alert(1)"));
    assert!(html.contains("\\u003c/script\\u003e"));
}

#[test]
fn unsupported_types_fail_with_a_typed_error() {
    for game_type in [
        GameType::MemoryMatch,
        GameType::WordSearch,
        GameType::Millionaire,
        GameType::TheChase,
        GameType::NeonDefender,
        GameType::KnowledgeTetris,
    ] {
        let result = render_activity(&activity("x-1", game_type, json!({})));
        assert_eq!(result, Err(RenderError::UnsupportedGameType(game_type)));
    }
}

#[test]
fn auto_placement_terminates_under_real_randomness() {
    // The standard fleet on the default 8x8 grid. The bounded draw
    // loop must land every ship across many fresh boards.
    let mut rng = SystemRandom::new();
    for _ in 0..200 {
        let mut fleet = Fleet::new(8, &[5, 4, 3, 2]);
        fleet.auto_place(&mut rng);
        assert!(fleet.all_placed());
    }
}

#[test]
fn rendering_is_deterministic_for_the_same_activity() {
    let activity = activity("bs-7", GameType::Battleships, json!({"gridSize": 9}));
    assert_eq!(
        render_activity(&activity).unwrap(),
        render_activity(&activity).unwrap()
    );
}
