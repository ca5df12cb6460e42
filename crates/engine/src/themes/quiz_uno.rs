//! Built-in Quiz Uno skins.

use super::GameTheme;

pub const QUIZ_UNO_DEFAULT_THEME: &str = "carte";

/// Theme set for Quiz Uno; the first entry is the default.
pub fn quiz_uno_themes() -> Vec<GameTheme> {
    vec![carte(), noir()]
}

fn carte() -> GameTheme {
    GameTheme::new("carte", "Card Table", "carte", CARTE_CSS)
}

fn noir() -> GameTheme {
    GameTheme::new("noir", "Table Noir", "cnoir", NOIR_CSS)
}

const CARTE_CSS: &str = r#"
.carte-wrap { font-family: 'Segoe UI', system-ui, sans-serif; background: #1d5c3a; color: #f2efe6; border-radius: 12px; padding: 18px; max-width: 880px; margin: 0 auto; position: relative; }
.carte-wrap h2 { margin: 0 0 10px; font-size: 18px; letter-spacing: 1px; }
.carte-table { display: flex; flex-direction: column; gap: 14px; align-items: center; }
.carte-row { display: flex; gap: 14px; align-items: center; justify-content: center; }
.carte-hand { display: flex; gap: 6px; flex-wrap: wrap; justify-content: center; min-height: 96px; }
.carte-card { width: 62px; height: 92px; border-radius: 8px; border: 2px solid #fff; display: flex; align-items: center; justify-content: center; font-size: 22px; font-weight: 700; cursor: pointer; user-select: none; box-shadow: 0 2px 5px rgba(0,0,0,0.35); transition: transform 0.12s; }
.carte-card:hover { transform: translateY(-6px); }
.carte-card.carte-back { background: repeating-linear-gradient(45deg, #27364b, #27364b 6px, #1b2737 6px, #1b2737 12px); cursor: default; }
.carte-card.carte-red { background: #c0392b; }
.carte-card.carte-yellow { background: #d9a62a; color: #2b2b2b; }
.carte-card.carte-green { background: #27ae60; }
.carte-card.carte-blue { background: #2980b9; }
.carte-card.carte-wild { background: conic-gradient(#c0392b 0 25%, #d9a62a 0 50%, #27ae60 0 75%, #2980b9 0); }
.carte-card.carte-unplayable { opacity: 0.55; cursor: default; }
.carte-pile { position: relative; }
.carte-count { text-align: center; font-size: 12px; margin-top: 4px; color: #cfe6d8; }
.carte-btn { background: #14432a; color: #f2efe6; border: 1px solid #2d7a4f; border-radius: 6px; padding: 8px 18px; cursor: pointer; font-size: 14px; margin: 4px; }
.carte-btn:hover { background: #1a5635; }
.carte-btn:disabled { opacity: 0.4; cursor: default; }
.carte-status { min-height: 22px; text-align: center; font-size: 14px; color: #cfe6d8; margin: 6px 0; }
.carte-badge { display: inline-block; padding: 2px 10px; border-radius: 10px; background: #14432a; font-size: 12px; margin-left: 8px; }
.carte-screen { display: none; }
.carte-screen.active { display: block; }
.carte-modal { position: absolute; inset: 0; background: rgba(8, 26, 16, 0.9); display: none; align-items: center; justify-content: center; border-radius: 12px; z-index: 5; }
.carte-modal.active { display: flex; }
.carte-modal-card { background: #14432a; border: 1px solid #2d7a4f; border-radius: 10px; padding: 20px; max-width: 480px; width: 90%; }
.carte-answer { display: block; width: 100%; text-align: left; margin: 6px 0; }
.carte-colors { display: flex; gap: 10px; justify-content: center; }
.carte-color-swatch { width: 44px; height: 44px; border-radius: 8px; border: 2px solid #fff; cursor: pointer; }
.carte-result { text-align: center; }
.carte-result .carte-verdict { font-size: 22px; margin: 10px 0; }
"#;

const NOIR_CSS: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Oswald:wght@400;600&display=swap');
.cnoir-wrap { font-family: 'Oswald', sans-serif; background: #121212; color: #e8e2d5; border: 1px solid #3c3428; border-radius: 8px; padding: 18px; max-width: 880px; margin: 0 auto; position: relative; }
.cnoir-wrap h2 { margin: 0 0 10px; font-size: 19px; letter-spacing: 3px; text-transform: uppercase; color: #c9a437; }
.cnoir-table { display: flex; flex-direction: column; gap: 14px; align-items: center; }
.cnoir-row { display: flex; gap: 14px; align-items: center; justify-content: center; }
.cnoir-hand { display: flex; gap: 6px; flex-wrap: wrap; justify-content: center; min-height: 96px; }
.cnoir-card { width: 60px; height: 90px; border-radius: 4px; border: 1px solid #c9a437; display: flex; align-items: center; justify-content: center; font-size: 21px; font-weight: 600; cursor: pointer; user-select: none; transition: transform 0.12s; }
.cnoir-card:hover { transform: translateY(-5px); }
.cnoir-card.cnoir-back { background: #1e1a12; cursor: default; }
.cnoir-card.cnoir-red { background: #7a1f1f; }
.cnoir-card.cnoir-yellow { background: #8a6d1c; }
.cnoir-card.cnoir-green { background: #1f5c32; }
.cnoir-card.cnoir-blue { background: #1f3d6e; }
.cnoir-card.cnoir-wild { background: linear-gradient(135deg, #7a1f1f, #8a6d1c, #1f5c32, #1f3d6e); }
.cnoir-card.cnoir-unplayable { opacity: 0.45; cursor: default; }
.cnoir-pile { position: relative; }
.cnoir-count { text-align: center; font-size: 12px; margin-top: 4px; color: #9a927f; }
.cnoir-btn { background: #1e1a12; color: #e8e2d5; border: 1px solid #3c3428; border-radius: 3px; padding: 8px 18px; cursor: pointer; font-size: 14px; margin: 4px; letter-spacing: 1px; }
.cnoir-btn:hover { border-color: #c9a437; }
.cnoir-btn:disabled { opacity: 0.35; cursor: default; }
.cnoir-status { min-height: 22px; text-align: center; font-size: 14px; color: #9a927f; margin: 6px 0; }
.cnoir-badge { display: inline-block; padding: 2px 10px; background: #1e1a12; border: 1px solid #3c3428; font-size: 12px; margin-left: 8px; }
.cnoir-screen { display: none; }
.cnoir-screen.active { display: block; }
.cnoir-modal { position: absolute; inset: 0; background: rgba(8, 8, 8, 0.93); display: none; align-items: center; justify-content: center; z-index: 5; }
.cnoir-modal.active { display: flex; }
.cnoir-modal-card { background: #1e1a12; border: 1px solid #c9a437; padding: 20px; max-width: 470px; width: 90%; }
.cnoir-answer { display: block; width: 100%; text-align: left; margin: 6px 0; }
.cnoir-colors { display: flex; gap: 10px; justify-content: center; }
.cnoir-color-swatch { width: 42px; height: 42px; border: 1px solid #c9a437; cursor: pointer; }
.cnoir-result { text-align: center; }
.cnoir-result .cnoir-verdict { font-size: 22px; margin: 10px 0; color: #c9a437; }
"#;
