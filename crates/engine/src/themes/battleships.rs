//! Built-in Battleships skins.
//!
//! CSS is opaque to the engine; every selector is namespaced by the
//! theme's class prefix so instances with different skins can share a
//! page.

use super::GameTheme;

pub const BATTLESHIPS_DEFAULT_THEME: &str = "naval";

/// Theme set for Battleships; the first entry is the default.
pub fn battleships_themes() -> Vec<GameTheme> {
    vec![naval(), crt()]
}

fn naval() -> GameTheme {
    GameTheme::new("naval", "Naval Command", "bs", NAVAL_CSS)
}

fn crt() -> GameTheme {
    GameTheme::new("crt", "Sonar CRT", "bsc", CRT_CSS)
}

const NAVAL_CSS: &str = r#"
.bs-wrap { font-family: 'Segoe UI', system-ui, sans-serif; background: #0b1d2a; color: #d7e3ec; border-radius: 10px; padding: 18px; max-width: 920px; margin: 0 auto; }
.bs-wrap h2 { margin: 0 0 10px; color: #7fc4e8; letter-spacing: 2px; text-transform: uppercase; font-size: 18px; }
.bs-screen { display: none; }
.bs-screen.active { display: block; }
.bs-grids { display: flex; gap: 24px; flex-wrap: wrap; justify-content: center; }
.bs-board { text-align: center; }
.bs-board h4 { color: #9fb6c4; font-size: 13px; margin: 6px 0; }
.bs-grid { display: grid; gap: 2px; background: #10293a; padding: 6px; border-radius: 6px; border: 1px solid #1d3d54; }
.bs-cell { width: 32px; height: 32px; background: #16374e; border-radius: 3px; cursor: pointer; transition: background 0.15s; }
.bs-cell:hover { background: #1f4c6b; }
.bs-cell.bs-ship { background: #3d6b8a; }
.bs-cell.bs-hit { background: #c0392b; }
.bs-cell.bs-miss { background: #24506e; box-shadow: inset 0 0 0 3px #10293a; }
.bs-cell.bs-reveal { background: #e0a438; animation: bs-pulse 0.6s ease-in-out 4; }
.bs-cell.bs-preview-ok { background: #2e8b57; }
.bs-cell.bs-preview-bad { background: #8b2e2e; }
@keyframes bs-pulse { 50% { filter: brightness(1.6); } }
.bs-dock { display: flex; gap: 10px; justify-content: center; margin: 12px 0; flex-wrap: wrap; }
.bs-dock-ship { display: flex; gap: 2px; padding: 4px; border: 1px solid #1d3d54; border-radius: 4px; cursor: pointer; }
.bs-dock-ship.bs-selected { border-color: #7fc4e8; }
.bs-dock-ship.bs-placed { opacity: 0.55; }
.bs-dock-seg { width: 18px; height: 18px; background: #3d6b8a; border-radius: 2px; }
.bs-btn { background: #1f4c6b; color: #d7e3ec; border: 1px solid #2d6288; border-radius: 5px; padding: 8px 18px; cursor: pointer; font-size: 14px; margin: 4px; }
.bs-btn:hover { background: #2d6288; }
.bs-btn:disabled { opacity: 0.4; cursor: default; }
.bs-btn.bs-armed { background: #a86d14; border-color: #e0a438; }
.bs-btn.bs-weapon-active { outline: 2px solid #7fc4e8; }
.bs-status { min-height: 22px; text-align: center; color: #9fb6c4; font-size: 14px; margin: 8px 0; }
.bs-streak { text-align: center; font-size: 12px; color: #e0a438; letter-spacing: 1px; }
.bs-modal { position: absolute; inset: 0; background: rgba(4, 12, 18, 0.88); display: none; align-items: center; justify-content: center; border-radius: 10px; z-index: 5; }
.bs-modal.active { display: flex; }
.bs-modal-card { background: #10293a; border: 1px solid #2d6288; border-radius: 8px; padding: 20px; max-width: 480px; width: 90%; }
.bs-modal-card p { margin: 0 0 12px; }
.bs-answer { display: block; width: 100%; text-align: left; margin: 6px 0; }
.bs-debrief { background: #10293a; border-radius: 6px; padding: 10px 14px; margin-top: 10px; font-size: 13px; text-align: left; }
.bs-debrief li { margin: 4px 0; color: #9fb6c4; }
"#;

const CRT_CSS: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=VT323&display=swap');
.bsc-wrap { font-family: 'VT323', monospace; background: #020a04; color: #48f06a; border: 2px solid #1a5c2c; border-radius: 4px; padding: 16px; max-width: 920px; margin: 0 auto; text-shadow: 0 0 4px rgba(72, 240, 106, 0.6); }
.bsc-wrap h2 { margin: 0 0 8px; font-size: 22px; animation: bsc-flicker 4s infinite; }
@keyframes bsc-flicker { 92% { opacity: 1; } 93% { opacity: 0.6; } 94% { opacity: 1; } }
.bsc-screen { display: none; }
.bsc-screen.active { display: block; }
.bsc-grids { display: flex; gap: 20px; flex-wrap: wrap; justify-content: center; }
.bsc-board h4 { font-size: 15px; margin: 4px 0; }
.bsc-grid { display: grid; gap: 1px; background: #04140a; padding: 5px; border: 1px solid #1a5c2c; }
.bsc-cell { width: 30px; height: 30px; background: #06200e; cursor: pointer; }
.bsc-cell:hover { background: #0c3a1a; }
.bsc-cell.bsc-ship { background: #15662c; }
.bsc-cell.bsc-hit { background: #f04848; box-shadow: 0 0 6px #f04848; }
.bsc-cell.bsc-miss { background: #0a2c14; }
.bsc-cell.bsc-reveal { background: #f0e048; animation: bsc-ping 0.5s ease-in-out 5; }
.bsc-cell.bsc-preview-ok { background: #1c8a3a; }
.bsc-cell.bsc-preview-bad { background: #8a1c1c; }
@keyframes bsc-ping { 50% { filter: brightness(1.8); } }
.bsc-dock { display: flex; gap: 8px; justify-content: center; margin: 10px 0; flex-wrap: wrap; }
.bsc-dock-ship { display: flex; gap: 1px; padding: 3px; border: 1px dashed #1a5c2c; cursor: pointer; }
.bsc-dock-ship.bsc-selected { border-color: #48f06a; }
.bsc-dock-ship.bsc-placed { opacity: 0.5; }
.bsc-dock-seg { width: 16px; height: 16px; background: #15662c; }
.bsc-btn { background: #04140a; color: #48f06a; border: 1px solid #1a5c2c; padding: 7px 16px; cursor: pointer; font-family: inherit; font-size: 16px; margin: 3px; }
.bsc-btn:hover { background: #0c3a1a; }
.bsc-btn:disabled { opacity: 0.35; cursor: default; }
.bsc-btn.bsc-armed { color: #f0e048; border-color: #f0e048; }
.bsc-btn.bsc-weapon-active { outline: 1px solid #48f06a; }
.bsc-status { min-height: 20px; text-align: center; font-size: 16px; margin: 6px 0; }
.bsc-streak { text-align: center; font-size: 14px; color: #f0e048; }
.bsc-modal { position: absolute; inset: 0; background: rgba(1, 6, 2, 0.92); display: none; align-items: center; justify-content: center; z-index: 5; }
.bsc-modal.active { display: flex; }
.bsc-modal-card { background: #04140a; border: 1px solid #1a5c2c; padding: 18px; max-width: 460px; width: 90%; }
.bsc-answer { display: block; width: 100%; text-align: left; margin: 5px 0; }
.bsc-debrief { border: 1px dashed #1a5c2c; padding: 8px 12px; margin-top: 8px; font-size: 14px; text-align: left; }
"#;
