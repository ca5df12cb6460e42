//! Quiz Uno runtime script generation.
//!
//! One self-executing closure per instance, namespaced like the
//! Battleships runtime. The quiz layer gates the learner's plays only;
//! the bot plays ungated. Win and pass-mark are independent outcomes
//! and the completion callback fires only when both hold.

use ludopack_domain::{BotDifficulty, QuizUnoConfig};

/// Build the runtime script for one Quiz Uno instance.
pub fn generate_game_script(
    game_id: &str,
    unique_id: &str,
    config: &QuizUnoConfig,
    class_prefix: &str,
) -> String {
    let difficulty = match config.difficulty {
        BotDifficulty::Easy => "easy",
        BotDifficulty::Medium => "medium",
        BotDifficulty::Hard => "hard",
    };
    RUNTIME_TEMPLATE
        .replace("__HAND__", &config.hand_size.to_string())
        .replace("__PASS__", &config.pass_mark.to_string())
        .replace("__DIFF__", difficulty)
        .replace("__GID__", game_id)
        .replace("__UID__", unique_id)
        .replace("__P__", class_prefix)
}

const RUNTIME_TEMPLATE: &str = r#"
(function () {
  'use strict';
  var HAND_SIZE = __HAND__;
  var PASS_MARK = __PASS__;
  var DIFFICULTY = '__DIFF__';
  var BONUS_GATE_PERCENT = 30;
  var COLORS = ['red', 'yellow', 'green', 'blue'];

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

  // ---- cards ------------------------------------------------------

  function isWild(card) { return card.rank === 'wild' || card.rank === 'wild_draw_four'; }
  function isAttack(card) { return card.rank === 'draw_two' || card.rank === 'wild_draw_four'; }
  function penalty(card) {
    return card.rank === 'draw_two' ? 2 : card.rank === 'wild_draw_four' ? 4 : 0;
  }
  function matches(card, top, activeColor) {
    if (isWild(card)) { return true; }
    return card.color === activeColor || card.rank === top.rank;
  }

  function buildDeck() {
    var deck = [];
    COLORS.forEach(function (color) {
      for (var n = 0; n < 10; n++) { deck.push({ color: color, rank: n }); }
      for (var i = 0; i < 2; i++) {
        deck.push({ color: color, rank: 'skip' });
        deck.push({ color: color, rank: 'draw_two' });
      }
    });
    for (var w = 0; w < 4; w++) {
      deck.push({ color: null, rank: 'wild' });
      deck.push({ color: null, rank: 'wild_draw_four' });
    }
    shuffle(deck);
    return deck;
  }

  function shuffle(items) {
    for (var i = items.length - 1; i > 0; i--) {
      var j = Math.floor(Math.random() * (i + 1));
      var tmp = items[i]; items[i] = items[j]; items[j] = tmp;
    }
  }

  // ---- state ------------------------------------------------------

  var state = null;
  var pendingGate = null;
  var pendingWildIndex = null;
  var completedOnce = false;

  function deal() {
    var drawPile = buildDeck();
    var playerHand = drawPile.splice(-HAND_SIZE);
    var botHand = drawPile.splice(-HAND_SIZE);
    var starter = drawPile.pop() || { color: 'red', rank: 0 };
    var activeColor = starter.color || COLORS[Math.floor(Math.random() * COLORS.length)];
    state = {
      drawPile: drawPile,
      discard: [starter],
      playerHand: playerHand,
      botHand: botHand,
      activeColor: activeColor,
      playerTurn: true,
      drawnThisTurn: false,
      gatedTotal: 0,
      gatedCorrect: 0,
      qIdx: 0,
      winner: null
    };
    pendingGate = null;
    pendingWildIndex = null;
  }

  function topCard() { return state.discard[state.discard.length - 1]; }

  // Reshuffle the discard (minus its top) when the pile runs dry;
  // recycled wilds go back colorless.
  function drawFromPile() {
    if (!state.drawPile.length && state.discard.length > 1) {
      var top = state.discard.pop();
      state.drawPile = state.discard;
      state.discard = [top];
      state.drawPile.forEach(function (card) {
        if (isWild(card)) { card.color = null; }
      });
      shuffle(state.drawPile);
    }
    return state.drawPile.pop() || null;
  }

  function forceDraw(hand, count) {
    var drawn = 0;
    for (var i = 0; i < count; i++) {
      var card = drawFromPile();
      if (!card) { break; }
      hand.push(card);
      drawn += 1;
    }
    return drawn;
  }

  // ---- player turn ------------------------------------------------

  function attemptPlay(handIndex, chosenColor) {
    if (!state || state.winner || !state.playerTurn || pendingGate) { return; }
    var card = state.playerHand[handIndex];
    if (!card || !matches(card, topCard(), state.activeColor)) { return; }
    if (isWild(card) && !chosenColor) {
      pendingWildIndex = handIndex;
      openColorPicker();
      return;
    }
    var kind = null;
    if (isAttack(card)) { kind = 'atk'; }
    else if (isWild(card)) { kind = 'wild'; }
    else if (Math.random() * 100 < BONUS_GATE_PERCENT) { kind = 'bonus'; }

    if (kind) {
      pendingGate = { handIndex: handIndex, kind: kind, chosenColor: chosenColor || null, questionIndex: state.qIdx };
      openQuiz();
      return;
    }
    completePlayerPlay(handIndex, chosenColor || null, true, false);
  }

  function resolveGate(chosen) {
    var modal = el('quiz-modal');
    if (modal) { modal.classList.remove('active'); }
    if (!pendingGate) { return; }
    var gate = pendingGate;
    pendingGate = null;
    var q = questions[gate.questionIndex % questions.length];
    var correct = chosen === q.correctIndex;
    state.gatedTotal += 1;
    if (correct) { state.gatedCorrect += 1; }
    state.qIdx = (gate.questionIndex + 1) % questions.length;

    var chosenColor = gate.chosenColor;
    if (gate.kind === 'wild' && !correct) {
      // A fumbled wild hands the color choice to chance.
      chosenColor = COLORS[Math.floor(Math.random() * COLORS.length)];
      setStatus('Wrong. The wild color was drawn at random: ' + chosenColor + '.');
    } else {
      setStatus(correct ? 'Correct!' : 'Wrong answer.');
    }
    var effectOk = gate.kind === 'atk' ? correct : gate.kind === 'wild';
    var bonusDraw = gate.kind === 'bonus' && correct;
    completePlayerPlay(gate.handIndex, chosenColor, effectOk, bonusDraw);
  }

  function completePlayerPlay(handIndex, chosenColor, effectOk, bonusDraw) {
    var card = state.playerHand.splice(handIndex, 1)[0];
    if (!card) { return; }
    state.activeColor = card.color || chosenColor || state.activeColor;
    if (isWild(card)) { card.color = state.activeColor; }
    state.discard.push(card);

    var skipped = false;
    if (effectOk && isAttack(card)) {
      forceDraw(state.botHand, penalty(card));
      skipped = true;
    }
    if (card.rank === 'skip') { skipped = true; }
    if (bonusDraw) { forceDraw(state.botHand, 1); }

    state.drawnThisTurn = false;
    if (!state.playerHand.length) {
      endGame('player');
      return;
    }
    render();
    if (skipped) {
      setStatus('The bot is skipped. Play again.');
      return;
    }
    state.playerTurn = false;
    later(botTurn, 900);
  }

  function drawCard() {
    if (!state || state.winner || !state.playerTurn || pendingGate || state.drawnThisTurn) { return; }
    var card = drawFromPile();
    if (!card) { return; }
    state.playerHand.push(card);
    state.drawnThisTurn = true;
    setStatus(matches(card, topCard(), state.activeColor)
      ? 'You drew a playable card.'
      : 'Nothing playable. Pass when ready.');
    render();
  }

  function passTurn() {
    if (!state || state.winner || !state.playerTurn || pendingGate || !state.drawnThisTurn) { return; }
    state.playerTurn = false;
    state.drawnThisTurn = false;
    render();
    later(botTurn, 900);
  }

  // ---- bot turn ---------------------------------------------------

  // Difficulty is only an ordering policy over the legal candidates.
  function orderCandidates(candidates) {
    if (DIFFICULTY === 'easy') { shuffle(candidates); }
    else if (DIFFICULTY === 'hard') {
      candidates.sort(function (a, b) { return attackWeight(a) - attackWeight(b); });
    }
    return candidates;
  }

  function attackWeight(idx) {
    var rank = state.botHand[idx].rank;
    return rank === 'wild_draw_four' ? 0 : rank === 'draw_two' ? 1 : 2;
  }

  function botColorChoice() {
    var best = COLORS[Math.floor(Math.random() * COLORS.length)];
    var bestCount = 0;
    COLORS.forEach(function (color) {
      var count = state.botHand.filter(function (c) { return c.color === color; }).length;
      if (count > bestCount) { best = color; bestCount = count; }
    });
    return best;
  }

  function botTurn() {
    if (!state || state.winner || !el('game-screen')) { return; }
    var top = topCard();
    var candidates = [];
    state.botHand.forEach(function (card, idx) {
      if (matches(card, top, state.activeColor)) { candidates.push(idx); }
    });
    orderCandidates(candidates);

    var playIdx = candidates.length ? candidates[0] : -1;
    if (playIdx < 0) {
      var drawn = drawFromPile();
      if (drawn) {
        state.botHand.push(drawn);
        if (matches(drawn, topCard(), state.activeColor)) {
          playIdx = state.botHand.length - 1;
        }
      }
    }
    if (playIdx < 0) {
      state.playerTurn = true;
      setStatus('The bot passes. Your turn.');
      render();
      return;
    }

    var card = state.botHand.splice(playIdx, 1)[0];
    state.activeColor = card.color || botColorChoice();
    if (isWild(card)) { card.color = state.activeColor; }
    state.discard.push(card);

    var skipped = false;
    if (isAttack(card)) {
      forceDraw(state.playerHand, penalty(card));
      skipped = true;
      setStatus('The bot attacks: draw ' + penalty(card) + '!');
    } else if (card.rank === 'skip') {
      skipped = true;
      setStatus('The bot skips your turn.');
    } else {
      setStatus('Your turn.');
    }

    if (!state.botHand.length) {
      endGame('bot');
      return;
    }
    render();
    if (skipped) {
      later(botTurn, 900);
      return;
    }
    state.playerTurn = true;
  }

  // ---- modals -----------------------------------------------------

  function openQuiz() {
    var q = questions[pendingGate.questionIndex % questions.length];
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
      button.addEventListener('click', function () { resolveGate(idx); });
      answers.appendChild(button);
    });
    modal.classList.add('active');
  }

  function openColorPicker() {
    var picker = el('color-picker');
    var swatches = el('color-swatches');
    if (!picker || !swatches) { return; }
    swatches.innerHTML = '';
    COLORS.forEach(function (color) {
      var swatch = document.createElement('button');
      swatch.className = '__P__-color-swatch __P__-' + color;
      swatch.addEventListener('click', function () {
        picker.classList.remove('active');
        var idx = pendingWildIndex;
        pendingWildIndex = null;
        if (idx !== null) { attemptPlay(idx, color); }
      });
      swatches.appendChild(swatch);
    });
    picker.classList.add('active');
  }

  // ---- rendering --------------------------------------------------

  function showScreen(name) {
    ['start-screen', 'game-screen', 'end-screen'].forEach(function (id) {
      var screen = el(id);
      if (screen) { screen.classList.toggle('active', id === name + '-screen'); }
    });
  }

  function setStatus(text) {
    var status = el('status');
    if (status) { status.textContent = text; }
  }

  function cardLabel(card) {
    if (card.rank === 'skip') { return '⦸'; }
    if (card.rank === 'draw_two') { return '+2'; }
    if (card.rank === 'wild') { return 'W'; }
    if (card.rank === 'wild_draw_four') { return '+4'; }
    return String(card.rank);
  }

  function cardClasses(card) {
    var classes = '__P__-card';
    if (card.color) { classes += ' __P__-' + card.color; }
    if (isWild(card)) { classes += ' __P__-wild'; }
    return classes;
  }

  function render() {
    if (!state) { return; }
    var hand = el('player-hand');
    if (hand) {
      hand.innerHTML = '';
      var top = topCard();
      state.playerHand.forEach(function (card, idx) {
        var node = document.createElement('button');
        node.className = cardClasses(card);
        if (!(state.playerTurn && matches(card, top, state.activeColor))) {
          node.classList.add('__P__-unplayable');
        }
        node.textContent = cardLabel(card);
        node.addEventListener('click', function () { attemptPlay(idx, null); });
        hand.appendChild(node);
      });
    }
    var botHand = el('bot-hand');
    if (botHand) {
      botHand.innerHTML = '';
      for (var i = 0; i < state.botHand.length; i++) {
        var back = document.createElement('div');
        back.className = '__P__-card __P__-back';
        botHand.appendChild(back);
      }
    }
    var discard = el('discard');
    if (discard) {
      var top2 = topCard();
      discard.className = cardClasses(top2);
      discard.textContent = cardLabel(top2);
    }
    var count = el('pile-count');
    if (count) { count.textContent = String(state.drawPile.length); }
    var badge = el('color-badge');
    if (badge) {
      badge.className = '__P__-badge __P__-' + state.activeColor;
      badge.textContent = state.activeColor;
    }
  }

  // ---- end of game ------------------------------------------------

  function endGame(winner) {
    state.winner = winner;
    var percent = state.gatedTotal
      ? Math.floor(state.gatedCorrect * 100 / state.gatedTotal)
      : 100;
    var passed = percent >= PASS_MARK;
    var completed = winner === 'player' && passed;
    showScreen('end');
    var verdict = el('end-verdict');
    if (verdict) {
      verdict.textContent = (winner === 'player' ? 'Victory' : 'Defeat') +
        ' · ' + (passed ? 'Passed' : 'Not passed');
    }
    var result = el('end-detail');
    if (result) {
      result.textContent = state.gatedTotal
        ? 'Quiz gates: ' + state.gatedCorrect + ' / ' + state.gatedTotal +
          ' correct (' + percent + '%, pass mark ' + PASS_MARK + '%).'
        : 'No quiz gates fired this round.';
    }
    if (completed) { signalComplete(); }
  }

  function signalComplete() {
    if (completedOnce) { return; }
    completedOnce = true;
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
    deal();
    showScreen('game');
    setStatus('Your turn. Match the color or the rank.');
    render();
  };
  window['drawCard___UID__'] = drawCard;
  window['passTurn___UID__'] = passTurn;
  window['restart___UID__'] = function () {
    clearTimers();
    state = null;
    pendingGate = null;
    pendingWildIndex = null;
    showScreen('start');
  };
})();
"#;
