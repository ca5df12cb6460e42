//! Battleships bundle assembly.
//!
//! The renderer only lays out screens and controls; every rule lives in
//! the generated script. The question bank ships as a JSON script block
//! so authored text never touches JS source.

use ludopack_domain::{bank_or_placeholder, BattleshipsConfig, RenderContext};

use crate::embed::json_for_inline_script;
use crate::themes::GameTheme;

use super::script::generate_game_script;

/// Assemble the complete HTML+CSS+JS bundle for one instance.
pub fn render(context: &RenderContext, config: &BattleshipsConfig, theme: &GameTheme) -> String {
    let game_id = context.activity_id.as_str();
    let unique_id = context.unique_id.as_str();
    let prefix = theme.class_prefix();

    let questions = bank_or_placeholder(&config.questions);
    let bank = json_for_inline_script(&questions);
    let markup = game_markup(game_id, unique_id, prefix);
    let script = generate_game_script(game_id, unique_id, config, prefix);

    let mut classes = format!("{}-{} {}-wrap", prefix, game_id, prefix);
    if context.required {
        classes.push(' ');
        classes.push_str(&context.tracking_class);
    }

    format!(
        "<div id=\"activity-{game_id}\" class=\"{classes}\" data-game-type=\"battleships\">\n\
         {markup}\n\
         </div>\n\
         <script type=\"application/json\" id=\"question-bank-{game_id}\">{bank}</script>\n\
         <script>{script}</script>\n\
         <style>{css}</style>",
        css = theme.css(),
    )
}

fn game_markup(game_id: &str, unique_id: &str, prefix: &str) -> String {
    format!(
        r#"<div id="start-screen-{game_id}" class="{prefix}-screen active">
  <h2>Naval Engagement</h2>
  <p>Deploy your fleet, then sink the enemy before they sink you. Answer intel questions to unlock cluster barrages and radar pings.</p>
  <button class="{prefix}-btn" onclick="startGame_{unique_id}()">Begin deployment</button>
</div>
<div id="deploy-screen-{game_id}" class="{prefix}-screen">
  <h3>Position your fleet</h3>
  <div id="ship-dock-{game_id}" class="{prefix}-dock"></div>
  <div id="deploy-grid-{game_id}" class="{prefix}-grid"></div>
  <button class="{prefix}-btn" onclick="rotateShip_{unique_id}()">Rotate</button>
  <button class="{prefix}-btn" onclick="autoPlace_{unique_id}()">Auto-place</button>
  <button id="confirm-deploy-{game_id}" class="{prefix}-btn" disabled onclick="confirmDeploy_{unique_id}()">Confirm deployment</button>
</div>
<div id="game-screen-{game_id}" class="{prefix}-screen">
  <div id="status-{game_id}" class="{prefix}-status"></div>
  <div class="{prefix}-grids">
    <div class="{prefix}-board">
      <h4>Your waters</h4>
      <div id="player-grid-{game_id}" class="{prefix}-grid"></div>
    </div>
    <div class="{prefix}-board">
      <h4>Enemy waters</h4>
      <div id="enemy-grid-{game_id}" class="{prefix}-grid"></div>
    </div>
  </div>
  <div id="streak-{game_id}" class="{prefix}-streak"></div>
  <button id="weapon-standard-{game_id}" class="{prefix}-btn" onclick="selectWeapon_{unique_id}('standard')">Standard shot</button>
  <button id="weapon-cluster-{game_id}" class="{prefix}-btn" onclick="selectWeapon_{unique_id}('cluster')">Cluster barrage</button>
  <button id="radar-btn-{game_id}" class="{prefix}-btn" disabled onclick="radarPing_{unique_id}()">Radar ping</button>
</div>
<div id="end-screen-{game_id}" class="{prefix}-screen">
  <h3 id="end-verdict-{game_id}"></h3>
  <div id="intel-log-{game_id}" class="{prefix}-debrief"></div>
  <button class="{prefix}-btn" onclick="restart_{unique_id}()">Play again</button>
</div>
<div id="quiz-modal-{game_id}" class="{prefix}-modal">
  <div class="{prefix}-modal-card">
    <h4>Intel check</h4>
    <p id="quiz-question-{game_id}"></p>
    <div id="quiz-answers-{game_id}"></div>
  </div>
</div>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::{ThemeRegistry, BATTLESHIPS_DEFAULT_THEME};
    use ludopack_domain::{GameType, GamificationActivity};
    use serde_json::json;

    fn bundle(id: &str, required: bool) -> String {
        let activity = GamificationActivity::new(
            id,
            GameType::Battleships,
            json!({"required": required, "questions": [
                {"question": "2+2?", "answers": ["3", "4"], "correctIndex": 1}
            ]}),
        );
        let config = BattleshipsConfig::from_activity(&activity);
        let context = RenderContext::new(&activity, config.required);
        let registry = ThemeRegistry::builtin();
        let theme = registry
            .get_game_theme(GameType::Battleships, Some(BATTLESHIPS_DEFAULT_THEME))
            .unwrap();
        render(&context, &config, theme)
    }

    #[test]
    fn bundle_has_div_json_script_and_style() {
        let html = bundle("bs-9", false);
        assert!(html.contains("<div id=\"activity-bs-9\""));
        assert!(html.contains("<script type=\"application/json\" id=\"question-bank-bs-9\">"));
        assert!(html.contains("<script>"));
        assert!(html.contains("<style>"));
    }

    #[test]
    fn tracking_class_only_when_required() {
        assert!(bundle("bs-9", true).contains("trackable-activity"));
        assert!(!bundle("bs-9", false).contains("trackable-activity"));
    }

    #[test]
    fn all_interior_ids_carry_the_game_id() {
        let html = bundle("bs-9", false);
        for id in [
            "start-screen",
            "deploy-screen",
            "game-screen",
            "end-screen",
            "quiz-modal",
            "deploy-grid",
            "player-grid",
            "enemy-grid",
            "ship-dock",
            "confirm-deploy",
            "status",
            "streak",
            "radar-btn",
            "intel-log",
        ] {
            assert!(
                html.contains(&format!("id=\"{id}-bs-9\"")),
                "missing namespaced id {id}"
            );
        }
    }

    #[test]
    fn board_labels_and_theme_rules_agree_on_heading_level() {
        let registry = ThemeRegistry::builtin();
        for theme_id in ["naval", "crt"] {
            let theme = registry
                .get_game_theme(GameType::Battleships, Some(theme_id))
                .unwrap();
            let prefix = theme.class_prefix();
            assert!(
                theme.css().contains(&format!(".{prefix}-board h4")),
                "{theme_id} skin does not style the board label"
            );
            assert!(!theme.css().contains(&format!(".{prefix}-board h3")));
        }
        let html = bundle("bs-9", false);
        assert!(html.contains("<h4>Your waters</h4>"));
        assert!(html.contains("<h4>Enemy waters</h4>"));
    }

    #[test]
    fn question_bank_is_json_not_markup() {
        let activity = GamificationActivity::new(
            "bs-x",
            GameType::Battleships,
            json!({"questions": [
                {"question": "Is <b>bold</b> safe?", "answers": ["yes"], "correctIndex": 0}
            ]}),
        );
        let config = BattleshipsConfig::from_activity(&activity);
        let context = RenderContext::new(&activity, config.required);
        let registry = ThemeRegistry::builtin();
        let theme = registry
            .get_game_theme(GameType::Battleships, None)
            .unwrap();
        let html = render(&context, &config, theme);
        assert!(html.contains("\\u003cb\\u003e"));
    }
}
