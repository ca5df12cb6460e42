//! Battleships runtime script generation.
//!
//! Emits one self-executing closure per instance. Every DOM id and
//! window-exposed function name is namespaced with the instance's
//! game id / unique id; the question bank arrives through a sibling
//! JSON script block, never spliced into JS source. All DOM access is
//! null-guarded so host-page teardown mid-timer can never throw, and
//! timers are tracked and cleared on restart.

use ludopack_domain::BattleshipsConfig;

/// Build the runtime script for one Battleships instance.
pub fn generate_game_script(
    game_id: &str,
    unique_id: &str,
    config: &BattleshipsConfig,
    class_prefix: &str,
) -> String {
    let ship_sizes =
        serde_json::to_string(&config.ship_sizes).unwrap_or_else(|_| "[5,4,3,2]".to_string());
    RUNTIME_TEMPLATE
        .replace("__GRID__", &config.grid_size.to_string())
        .replace("__SHIPS__", &ship_sizes)
        .replace("__GID__", game_id)
        .replace("__UID__", unique_id)
        .replace("__P__", class_prefix)
}

const RUNTIME_TEMPLATE: &str = r#"
(function () {
  'use strict';
  var GRID = __GRID__;
  var SHIP_SIZES = __SHIPS__;
  var RADAR_STREAK = 3;

  function el(name) { return document.getElementById(name + '-__GID__'); }
  var root = el('activity');
  if (!root) { return; }

  var questions = [];
  try {
    var bank = el('question-bank');
    questions = JSON.parse(bank ? bank.textContent : '[]');
  } catch (err) { questions = []; }
  if (!questions.length) {
    questions = [{ question: 'Which option is correct?', answers: ['Option A', 'Option B', 'Option C'], correctIndex: 0, explanation: 'This activity has no authored questions yet.' }];
  }

  var timers = [];
  function later(fn, ms) { timers.push(setTimeout(fn, ms)); }
  function clearTimers() { while (timers.length) { clearTimeout(timers.pop()); } }

  function blankGrid() {
    var g = [];
    for (var r = 0; r < GRID; r++) {
      var row = [];
      for (var c = 0; c < GRID; c++) { row.push({ hasShip: false, hit: false, shipId: null }); }
      g.push(row);
    }
    return g;
  }

  function freshShips() {
    return SHIP_SIZES.map(function (size) {
      return { size: size, hits: 0, row: 0, col: 0, horizontal: true, placed: false };
    });
  }

  function footprint(size, row, col, horizontal) {
    var cells = [];
    for (var i = 0; i < size; i++) {
      cells.push(horizontal ? [row, col + i] : [row + i, col]);
    }
    return cells;
  }

  function canPlace(grid, size, row, col, horizontal, exclude) {
    var cells = footprint(size, row, col, horizontal);
    for (var i = 0; i < cells.length; i++) {
      var r = cells[i][0], c = cells[i][1];
      if (r >= GRID || c >= GRID) { return false; }
      var id = grid[r][c].shipId;
      if (id !== null && id !== exclude) { return false; }
    }
    return true;
  }

  function liftShip(board, shipId) {
    var ship = board.ships[shipId];
    if (!ship.placed) { return; }
    footprint(ship.size, ship.row, ship.col, ship.horizontal).forEach(function (rc) {
      var cell = board.grid[rc[0]][rc[1]];
      if (cell.shipId === shipId) { cell.hasShip = false; cell.shipId = null; }
    });
    ship.placed = false;
  }

  function placeShip(board, shipId, row, col, horizontal) {
    var ship = board.ships[shipId];
    if (!canPlace(board.grid, ship.size, row, col, horizontal, shipId)) { return false; }
    liftShip(board, shipId);
    ship.row = row; ship.col = col; ship.horizontal = horizontal; ship.placed = true;
    footprint(ship.size, row, col, horizontal).forEach(function (rc) {
      var cell = board.grid[rc[0]][rc[1]];
      cell.hasShip = true; cell.shipId = shipId;
    });
    return true;
  }

  // Up to 100 random draws per ship; a failed ship keeps its spot.
  function autoPlace(board) {
    for (var s = 0; s < board.ships.length; s++) {
      for (var attempt = 0; attempt < 100; attempt++) {
        var row = Math.floor(Math.random() * GRID);
        var col = Math.floor(Math.random() * GRID);
        var horizontal = Math.random() < 0.5;
        if (placeShip(board, s, row, col, horizontal)) { break; }
      }
    }
  }

  function allPlaced(board) {
    return board.ships.every(function (s) { return s.placed; });
  }

  function allSunk(board) {
    return board.ships.every(function (s) { return s.hits >= s.size; });
  }

  function fireAt(board, row, col) {
    var cell = board.grid[row][col];
    if (cell.hit) { return 'already'; }
    cell.hit = true;
    if (cell.shipId === null) { return 'miss'; }
    var ship = board.ships[cell.shipId];
    ship.hits += 1;
    return ship.hits >= ship.size ? 'sunk' : 'hit';
  }

  var state = null;
  var deploy = null;

  function showScreen(name) {
    ['start-screen', 'deploy-screen', 'game-screen', 'end-screen'].forEach(function (id) {
      var screen = el(id);
      if (screen) { screen.classList.toggle('active', id === name + '-screen'); }
    });
  }

  function setStatus(text) {
    var status = el('status');
    if (status) { status.textContent = text; }
  }

  // ---- deployment -------------------------------------------------

  function startDeployment() {
    deploy = {
      board: { grid: blankGrid(), ships: freshShips() },
      selected: null,
      horizontal: true
    };
    showScreen('deploy');
    renderDock();
    renderDeployGrid();
    updateConfirm();
  }

  function renderDock() {
    var dock = el('ship-dock');
    if (!dock) { return; }
    dock.innerHTML = '';
    deploy.board.ships.forEach(function (ship, idx) {
      var chip = document.createElement('div');
      chip.className = '__P__-dock-ship' +
        (idx === deploy.selected ? ' __P__-selected' : '') +
        (ship.placed ? ' __P__-placed' : '');
      for (var i = 0; i < ship.size; i++) {
        var seg = document.createElement('div');
        seg.className = '__P__-dock-seg';
        chip.appendChild(seg);
      }
      chip.addEventListener('click', function () { selectShip(idx); });
      dock.appendChild(chip);
    });
  }

  function selectShip(idx) {
    deploy.selected = idx;
    var ship = deploy.board.ships[idx];
    if (ship.placed) { deploy.horizontal = ship.horizontal; }
    renderDock();
  }

  function renderDeployGrid(previewCells, previewValid) {
    var container = el('deploy-grid');
    if (!container) { return; }
    container.innerHTML = '';
    container.style.gridTemplateColumns = 'repeat(' + GRID + ', auto)';
    var preview = {};
    (previewCells || []).forEach(function (rc) { preview[rc[0] + ':' + rc[1]] = true; });
    for (var r = 0; r < GRID; r++) {
      for (var c = 0; c < GRID; c++) {
        (function (row, col) {
          var cell = document.createElement('div');
          cell.className = '__P__-cell';
          var data = deploy.board.grid[row][col];
          if (data.hasShip) { cell.classList.add('__P__-ship'); }
          if (preview[row + ':' + col]) {
            cell.classList.add(previewValid ? '__P__-preview-ok' : '__P__-preview-bad');
          }
          cell.addEventListener('click', function () { deployClick(row, col); });
          cell.addEventListener('mouseenter', function () { deployHover(row, col); });
          container.appendChild(cell);
        })(r, c);
      }
    }
  }

  function deployClick(row, col) {
    var data = deploy.board.grid[row][col];
    if (data.shipId !== null) { selectShip(data.shipId); return; }
    if (deploy.selected === null) { return; }
    if (placeShip(deploy.board, deploy.selected, row, col, deploy.horizontal)) {
      renderDock();
      renderDeployGrid();
      updateConfirm();
    }
  }

  // Recomputed on every hover; never mutates the grid.
  function deployHover(row, col) {
    if (deploy.selected === null) { return; }
    var ship = deploy.board.ships[deploy.selected];
    var cells = footprint(ship.size, row, col, deploy.horizontal).filter(function (rc) {
      return rc[0] < GRID && rc[1] < GRID;
    });
    var valid = canPlace(deploy.board.grid, ship.size, row, col, deploy.horizontal, deploy.selected);
    renderDeployGrid(cells, valid);
  }

  function rotateShip() {
    var next = !deploy.horizontal;
    if (deploy.selected !== null) {
      var ship = deploy.board.ships[deploy.selected];
      if (ship.placed) {
        // Rotate in place only when the rotated footprint fits.
        if (placeShip(deploy.board, deploy.selected, ship.row, ship.col, next)) {
          deploy.horizontal = next;
          renderDeployGrid();
        }
        return;
      }
    }
    deploy.horizontal = next;
  }

  function updateConfirm() {
    var button = el('confirm-deploy');
    if (button) { button.disabled = !allPlaced(deploy.board); }
  }

  function confirmDeployment() {
    if (!allPlaced(deploy.board)) { return; }
    var enemy = { grid: blankGrid(), ships: freshShips() };
    autoPlace(enemy);
    state = {
      player: deploy.board,
      enemy: enemy,
      playerTurn: true,
      weapon: 'standard',
      streak: 0,
      radarReady: false,
      qIdx: 0,
      pendingTarget: null,
      intelLog: [],
      completed: false,
      over: false
    };
    deploy = null;
    showScreen('game');
    renderBoards();
    updateHud();
    setStatus('Your move, commander.');
  }

  // ---- combat -----------------------------------------------------

  function renderBoards() {
    renderBoard('player-grid', state.player, true);
    renderBoard('enemy-grid', state.enemy, false);
  }

  function renderBoard(name, board, reveal) {
    var container = el(name);
    if (!container) { return; }
    container.innerHTML = '';
    container.style.gridTemplateColumns = 'repeat(' + GRID + ', auto)';
    for (var r = 0; r < GRID; r++) {
      for (var c = 0; c < GRID; c++) {
        (function (row, col) {
          var cell = document.createElement('div');
          cell.className = '__P__-cell';
          var data = board.grid[row][col];
          if (reveal && data.hasShip) { cell.classList.add('__P__-ship'); }
          if (data.hit) { cell.classList.add(data.hasShip ? '__P__-hit' : '__P__-miss'); }
          if (!reveal) {
            cell.addEventListener('click', function () { playerFire(row, col); });
          }
          container.appendChild(cell);
        })(r, c);
      }
    }
  }

  function updateHud() {
    var streak = el('streak');
    if (streak) { streak.textContent = 'Signal streak: ' + state.streak + ' / ' + RADAR_STREAK; }
    var radar = el('radar-btn');
    if (radar) {
      radar.disabled = !state.radarReady;
      radar.classList.toggle('__P__-armed', state.radarReady);
    }
    ['standard', 'cluster'].forEach(function (weapon) {
      var button = el('weapon-' + weapon);
      if (button) { button.classList.toggle('__P__-weapon-active', state.weapon === weapon); }
    });
  }

  function playerFire(row, col) {
    if (!state || state.over || !state.playerTurn || state.pendingTarget) { return; }
    if (state.weapon === 'cluster') {
      state.pendingTarget = [row, col];
      openQuiz();
      return;
    }
    if (state.enemy.grid[row][col].hit) { return; }
    var result = fireAt(state.enemy, row, col);
    setStatus(result === 'miss' ? 'Splash. Nothing there.' :
      result === 'sunk' ? 'Enemy vessel destroyed!' : 'Direct hit!');
    renderBoards();
    afterPlayerShot();
  }

  function clusterCells(row, col) {
    var cells = [[row, col]];
    if (row > 0) { cells.push([row - 1, col]); }
    if (row + 1 < GRID) { cells.push([row + 1, col]); }
    if (col > 0) { cells.push([row, col - 1]); }
    if (col + 1 < GRID) { cells.push([row, col + 1]); }
    return cells;
  }

  function openQuiz() {
    var q = questions[state.qIdx % questions.length];
    var modal = el('quiz-modal');
    var prompt = el('quiz-question');
    var answers = el('quiz-answers');
    if (!modal || !prompt || !answers) { return; }
    prompt.textContent = q.question;
    answers.innerHTML = '';
    (q.answers || []).forEach(function (answer, idx) {
      var button = document.createElement('button');
      button.className = '__P__-btn __P__-answer';
      button.textContent = answer;
      button.addEventListener('click', function () { resolveQuiz(idx); });
      answers.appendChild(button);
    });
    modal.classList.add('active');
  }

  function resolveQuiz(chosen) {
    var modal = el('quiz-modal');
    if (modal) { modal.classList.remove('active'); }
    if (!state.pendingTarget) { return; }
    var target = state.pendingTarget;
    state.pendingTarget = null;
    var q = questions[state.qIdx % questions.length];
    state.qIdx = (state.qIdx + 1) % questions.length;

    if (chosen === q.correctIndex) {
      state.streak += 1;
      if (state.streak >= RADAR_STREAK) { state.radarReady = true; }
      var hits = 0;
      clusterCells(target[0], target[1]).forEach(function (rc) {
        if (!state.enemy.grid[rc[0]][rc[1]].hit) {
          var result = fireAt(state.enemy, rc[0], rc[1]);
          if (result === 'hit' || result === 'sunk') { hits += 1; }
        }
      });
      setStatus(hits ? 'Cluster barrage: ' + hits + ' hit(s)!' : 'Cluster barrage missed.');
    } else {
      // Forfeit the shot; the board is untouched.
      state.streak = 0;
      state.intelLog.push({
        question: q.question,
        answer: (q.answers || [])[q.correctIndex] || '',
        explanation: q.explanation || ''
      });
      setStatus('Wrong answer. The barrage was aborted.');
    }
    renderBoards();
    updateHud();
    afterPlayerShot();
  }

  function afterPlayerShot() {
    if (allSunk(state.enemy)) { endGame(true); return; }
    state.playerTurn = false;
    later(botTurn, 800);
  }

  // Hunt-and-target: pop queued neighbors first, then random search.
  var botStack = [];

  function botTurn() {
    if (!state || state.over || !el('game-screen')) { return; }
    var target = null;
    while (botStack.length) {
      var candidate = botStack.pop();
      if (!state.player.grid[candidate[0]][candidate[1]].hit) { target = candidate; break; }
    }
    if (!target) {
      for (var attempt = 0; attempt < 100; attempt++) {
        var row = Math.floor(Math.random() * GRID);
        var col = Math.floor(Math.random() * GRID);
        if (!state.player.grid[row][col].hit) { target = [row, col]; break; }
      }
    }
    if (!target) {
      outer:
      for (var r = 0; r < GRID; r++) {
        for (var c = 0; c < GRID; c++) {
          if (!state.player.grid[r][c].hit) { target = [r, c]; break outer; }
        }
      }
    }
    if (!target) { return; }
    var result = fireAt(state.player, target[0], target[1]);
    if (result === 'hit') {
      [[-1, 0], [1, 0], [0, -1], [0, 1]].forEach(function (d) {
        var nr = target[0] + d[0], nc = target[1] + d[1];
        if (nr >= 0 && nr < GRID && nc >= 0 && nc < GRID && !state.player.grid[nr][nc].hit) {
          botStack.push([nr, nc]);
        }
      });
    }
    renderBoards();
    if (allSunk(state.player)) { endGame(false); return; }
    state.playerTurn = true;
    setStatus(result === 'miss' ? 'Enemy salvo missed. Your move.' :
      result === 'sunk' ? 'They sank one of your ships!' : 'Your fleet took a hit!');
  }

  function radarPing() {
    if (!state || !state.radarReady || state.over) { return; }
    var candidates = [];
    for (var r = 0; r < GRID; r++) {
      for (var c = 0; c < GRID; c++) {
        var cell = state.enemy.grid[r][c];
        if (cell.hasShip && !cell.hit) { candidates.push([r, c]); }
      }
    }
    state.radarReady = false;
    state.streak = 0;
    updateHud();
    if (!candidates.length) { return; }
    var pick = candidates[Math.floor(Math.random() * candidates.length)];
    var container = el('enemy-grid');
    if (!container) { return; }
    var node = container.children[pick[0] * GRID + pick[1]];
    if (!node) { return; }
    node.classList.add('__P__-reveal');
    setStatus('Radar uplink: contact revealed.');
    later(function () {
      if (node.isConnected) { node.classList.remove('__P__-reveal'); }
    }, 2500);
  }

  // ---- end of game ------------------------------------------------

  function endGame(playerWon) {
    state.over = true;
    showScreen('end');
    var verdict = el('end-verdict');
    if (verdict) {
      verdict.textContent = playerWon ? 'Operation successful!' : 'Fleet lost. Operation failed.';
    }
    renderDebrief();
    if (playerWon) { signalComplete(); }
  }

  function renderDebrief() {
    var debrief = el('intel-log');
    if (!debrief) { return; }
    debrief.innerHTML = '';
    if (!state.intelLog.length) {
      debrief.textContent = 'No intel losses. Every gate answered correctly.';
      return;
    }
    var list = document.createElement('ul');
    state.intelLog.forEach(function (entry) {
      var item = document.createElement('li');
      item.textContent = entry.question + ' — correct answer: ' + entry.answer;
      if (entry.explanation) { item.textContent += ' (' + entry.explanation + ')'; }
      list.appendChild(item);
    });
    debrief.appendChild(list);
  }

  function signalComplete() {
    if (state.completed) { return; }
    state.completed = true;
    var domId = 'activity-__GID__';
    if (typeof window.completeGamificationActivity === 'function') {
      window.completeGamificationActivity(domId);
    } else if (typeof window.markActivityComplete === 'function') {
      window.markActivityComplete(domId);
    }
  }

  // ---- instance entry points --------------------------------------

  window['startGame___UID__'] = function () {
    clearTimers();
    botStack = [];
    state = null;
    startDeployment();
  };
  window['rotateShip___UID__'] = rotateShip;
  window['autoPlace___UID__'] = function () {
    if (!deploy) { return; }
    autoPlace(deploy.board);
    renderDock();
    renderDeployGrid();
    updateConfirm();
  };
  window['confirmDeploy___UID__'] = confirmDeployment;
  window['selectWeapon___UID__'] = function (weapon) {
    if (!state || state.over) { return; }
    state.weapon = weapon;
    updateHud();
  };
  window['radarPing___UID__'] = radarPing;
  window['restart___UID__'] = function () {
    // New operation reenters the start screen with a fresh deployment.
    clearTimers();
    botStack = [];
    state = null;
    showScreen('start');
  };
})();
"#;
