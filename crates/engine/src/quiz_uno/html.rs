//! Quiz Uno bundle assembly.

use ludopack_domain::{bank_or_placeholder, QuizUnoConfig, RenderContext};

use crate::embed::json_for_inline_script;
use crate::themes::GameTheme;

use super::script::generate_game_script;

/// Assemble the complete HTML+CSS+JS bundle for one instance.
pub fn render(context: &RenderContext, config: &QuizUnoConfig, theme: &GameTheme) -> String {
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
        "<div id=\"activity-{game_id}\" class=\"{classes}\" data-game-type=\"quiz_uno\">\n\
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
  <h2>Quiz Uno</h2>
  <p>Empty your hand before the bot does. Attack and wild cards put a quiz between you and their effect; pass the mark to make your win count.</p>
  <button class="{prefix}-btn" onclick="startGame_{unique_id}()">Deal me in</button>
</div>
<div id="game-screen-{game_id}" class="{prefix}-screen">
  <div id="bot-hand-{game_id}" class="{prefix}-hand"></div>
  <div class="{prefix}-table">
    <div class="{prefix}-pile">
      <div id="discard-{game_id}" class="{prefix}-card"></div>
      <span id="color-badge-{game_id}" class="{prefix}-badge"></span>
    </div>
    <div class="{prefix}-pile">
      <button class="{prefix}-card {prefix}-back" onclick="drawCard_{unique_id}()"></button>
      <span id="pile-count-{game_id}" class="{prefix}-count"></span>
      <button class="{prefix}-btn" onclick="passTurn_{unique_id}()">Pass</button>
    </div>
  </div>
  <div id="status-{game_id}" class="{prefix}-status"></div>
  <div id="player-hand-{game_id}" class="{prefix}-hand"></div>
</div>
<div id="end-screen-{game_id}" class="{prefix}-screen">
  <h3 id="end-verdict-{game_id}" class="{prefix}-verdict"></h3>
  <p id="end-detail-{game_id}" class="{prefix}-result"></p>
  <button class="{prefix}-btn" onclick="restart_{unique_id}()">Play again</button>
</div>
<div id="quiz-modal-{game_id}" class="{prefix}-modal">
  <div class="{prefix}-modal-card">
    <h4>Quiz gate</h4>
    <p id="quiz-question-{game_id}"></p>
    <div id="quiz-answers-{game_id}"></div>
  </div>
</div>
<div id="color-picker-{game_id}" class="{prefix}-modal">
  <div class="{prefix}-modal-card">
    <h4>Pick a color</h4>
    <div id="color-swatches-{game_id}" class="{prefix}-colors"></div>
  </div>
</div>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::ThemeRegistry;
    use ludopack_domain::{GameType, GamificationActivity};
    use serde_json::json;

    fn bundle(id: &str, config: serde_json::Value) -> String {
        let activity = GamificationActivity::new(id, GameType::QuizUno, config);
        let config = QuizUnoConfig::from_activity(&activity);
        let context = RenderContext::new(&activity, config.required);
        let registry = ThemeRegistry::builtin();
        let theme = registry.get_game_theme(GameType::QuizUno, None).unwrap();
        render(&context, &config, theme)
    }

    #[test]
    fn bundle_has_div_json_script_and_style() {
        let html = bundle("uno-9", json!({}));
        assert!(html.contains("<div id=\"activity-uno-9\""));
        assert!(html.contains("<script type=\"application/json\" id=\"question-bank-uno-9\">"));
        assert!(html.contains("<style>"));
        // Empty bank ships the placeholder question.
        assert!(html.contains("Which option is correct?"));
    }

    #[test]
    fn all_interior_ids_carry_the_game_id() {
        let html = bundle("uno-9", json!({}));
        for id in [
            "start-screen",
            "game-screen",
            "end-screen",
            "quiz-modal",
            "color-picker",
            "player-hand",
            "bot-hand",
            "discard",
            "pile-count",
            "color-badge",
            "status",
            "end-verdict",
            "end-detail",
        ] {
            assert!(
                html.contains(&format!("id=\"{id}-uno-9\"")),
                "missing namespaced id {id}"
            );
        }
    }

    #[test]
    fn tracking_class_follows_required_flag() {
        assert!(bundle("uno-9", json!({"required": true})).contains("trackable-activity"));
        assert!(!bundle("uno-9", json!({})).contains("trackable-activity"));
    }
}
