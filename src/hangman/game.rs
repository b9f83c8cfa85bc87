use tracing::{debug, info};

use crate::core::surface::Surface;
use crate::core::words::{Difficulty, WordProvider};
use crate::error::{FetchError, GameError, Result};
use crate::hangman::gallows;

pub const MAX_WRONG_GUESSES: u8 = 6;

/// Monotonic identifier of a round, bumped on every round start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct RoundId(u64);

impl RoundId {
    fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Proof that a word fetch belongs to a particular round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundTicket {
    pub id: RoundId,
    pub difficulty: Difficulty,
}

/// What happened to a word handed to [`HangmanEngine::accept_word`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// The word was stored and the round is playable
    Ready,
    /// A newer round has started since this fetch was issued; the word was dropped
    Stale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct,
    Wrong,
}

/// Authoritative state of one hangman round. Pure game logic - the drawing
/// surface and the word source are handed in by the caller.
#[derive(Debug, Default)]
pub struct HangmanEngine {
    secret_word: String,
    guessed: Vec<char>,
    wrong_guesses: u8,
    is_over: bool,
    did_win: bool,
    round: RoundId,
    ready: bool,
}

impl HangmanEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a round and wait for its word. Resolves once the round is playable.
    pub async fn start_round<P, S>(&mut self, provider: &P, difficulty: &Difficulty, surface: &mut S) -> Result<()>
    where
        P: WordProvider + ?Sized,
        S: Surface + ?Sized,
    {
        let ticket = self.begin_round(difficulty, surface);
        let word = provider.fetch_word(&ticket.difficulty).await?;
        self.accept_word(&ticket, &word)?;
        Ok(())
    }

    /// Reset for a new round and draw the empty gallows. The returned ticket
    /// must accompany the word once it has been fetched.
    pub fn begin_round<S: Surface + ?Sized>(&mut self, difficulty: &Difficulty, surface: &mut S) -> RoundTicket {
        surface.clear();
        gallows::draw_base(surface);

        self.secret_word.clear();
        self.guessed.clear();
        self.wrong_guesses = 0;
        self.is_over = false;
        self.did_win = false;
        self.ready = false;
        self.round = self.round.next();

        info!(round = ?self.round, %difficulty, "round started");
        RoundTicket { id: self.round, difficulty: difficulty.clone() }
    }

    /// Store the fetched word if the ticket still belongs to the current round.
    pub fn accept_word(&mut self, ticket: &RoundTicket, word: &str) -> std::result::Result<Delivery, FetchError> {
        if ticket.id != self.round {
            debug!(ticket = ?ticket.id, current = ?self.round, "discarding word for an old round");
            return Ok(Delivery::Stale);
        }

        let word = normalize_word(word)?;
        debug!(round = ?self.round, len = word.len(), "word accepted");
        self.secret_word = word;
        self.ready = true;
        Ok(Delivery::Ready)
    }

    /// Evaluate one guess. Rejected guesses leave every field untouched.
    pub fn submit_guess<S: Surface + ?Sized>(&mut self, input: &str, surface: &mut S) -> Result<GuessOutcome> {
        if !self.ready {
            return Err(GameError::RoundNotReady);
        }
        if self.is_over {
            return Err(GameError::GameOver);
        }

        let letter = parse_letter(input)?;
        if self.guessed.contains(&letter) {
            return Err(GameError::DuplicateGuess(letter));
        }

        self.guessed.push(letter);

        if !self.secret_word.contains(letter) {
            self.wrong_guesses += 1;
            if let Some(part) = gallows::draw_step(self.wrong_guesses, surface) {
                debug!(part = part.name(), wrong = self.wrong_guesses, "gallows step");
            }
            if self.wrong_guesses == MAX_WRONG_GUESSES {
                self.is_over = true;
                self.did_win = false;
                info!(round = ?self.round, "round lost");
            }
            return Ok(GuessOutcome::Wrong);
        }

        if self.is_word_complete() {
            self.did_win = true;
            self.is_over = true;
            info!(round = ?self.round, wrong = self.wrong_guesses, "round won");
        }
        Ok(GuessOutcome::Correct)
    }

    fn is_word_complete(&self) -> bool {
        self.secret_word.chars().all(|c| self.guessed.contains(&c))
    }

    /// `_ O O _` style placeholder for the secret word
    pub fn word_display(&self) -> String {
        self.secret_word
            .chars()
            .map(|c| {
                let shown = if self.guessed.contains(&c) { c } else { '_' };
                shown.to_string()
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// `(Guesses: A, B, C)` in the order the letters were guessed
    pub fn guesses_display(&self) -> String {
        let letters = self.guessed.iter().map(char::to_string).collect::<Vec<_>>();
        format!("(Guesses: {})", letters.join(", "))
    }

    /// Paint the current picture from scratch onto `surface`
    pub fn redraw<S: Surface + ?Sized>(&self, surface: &mut S) {
        gallows::redraw(self.wrong_guesses, surface);
    }

    pub fn secret_word(&self) -> &str {
        &self.secret_word
    }

    pub fn guessed_letters(&self) -> &[char] {
        &self.guessed
    }

    pub fn wrong_guesses(&self) -> u8 {
        self.wrong_guesses
    }

    pub fn remaining_guesses(&self) -> u8 {
        MAX_WRONG_GUESSES - self.wrong_guesses
    }

    pub fn max_wrong_guesses(&self) -> u8 {
        MAX_WRONG_GUESSES
    }

    pub fn is_over(&self) -> bool {
        self.is_over
    }

    pub fn did_win(&self) -> bool {
        self.did_win
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn round_id(&self) -> RoundId {
        self.round
    }
}

/// Trim and uppercase a fetched word. Anything but ASCII letters is rejected.
pub fn normalize_word(word: &str) -> std::result::Result<String, FetchError> {
    let word = word.trim().to_ascii_uppercase();
    if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(FetchError::MalformedWord(word));
    }
    Ok(word)
}

fn parse_letter(input: &str) -> Result<char> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Ok(c.to_ascii_uppercase()),
        _ => Err(GameError::InvalidGuess(input.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::surface::{DisplayList, DrawOp};
    use crate::hangman::gallows::{SURFACE_HEIGHT, SURFACE_WIDTH};

    fn surface() -> DisplayList {
        DisplayList::new(SURFACE_WIDTH, SURFACE_HEIGHT)
    }

    fn engine_with(word: &str, surface: &mut DisplayList) -> HangmanEngine {
        let mut engine = HangmanEngine::new();
        let ticket = engine.begin_round(&Difficulty::easy(), surface);
        assert_eq!(engine.accept_word(&ticket, word).unwrap(), Delivery::Ready);
        engine
    }

    #[test]
    fn parse_letter_accepts_single_ascii_letters() {
        assert_eq!(parse_letter("a").unwrap(), 'A');
        assert_eq!(parse_letter("Z").unwrap(), 'Z');
        for bad in ["", "ab", "1", " ", "é", "-"] {
            assert!(matches!(parse_letter(bad), Err(GameError::InvalidGuess(_))), "{bad:?}");
        }
    }

    #[test]
    fn normalize_word_rejects_non_letters() {
        assert_eq!(normalize_word("  Tokio\n").unwrap(), "TOKIO");
        for bad in ["", "   ", "two words", "caf\u{e9}", "r2d2"] {
            assert!(matches!(normalize_word(bad), Err(FetchError::MalformedWord(_))), "{bad:?}");
        }
    }

    #[test]
    fn word_is_normalized_to_uppercase() {
        let mut s = surface();
        let engine = engine_with(" book\n", &mut s);
        assert_eq!(engine.secret_word(), "BOOK");
        assert!(engine.is_ready());
    }

    #[test]
    fn malformed_word_keeps_round_unready() {
        let mut s = surface();
        let mut engine = HangmanEngine::new();
        let ticket = engine.begin_round(&Difficulty::easy(), &mut s);

        for bad in ["", "two words", "r2d2"] {
            assert!(matches!(engine.accept_word(&ticket, bad), Err(FetchError::MalformedWord(_))));
        }
        assert!(!engine.is_ready());
        assert!(matches!(engine.submit_guess("a", &mut s), Err(GameError::RoundNotReady)));
    }

    #[test]
    fn begin_round_draws_only_the_base() {
        let mut s = surface();
        s.fill_rect(0.0, 0.0, 5.0, 5.0);
        HangmanEngine::new().begin_round(&Difficulty::easy(), &mut s);
        assert_eq!(s.ops().len(), 4);
    }

    #[test]
    fn wrong_guess_emits_exactly_one_step() {
        let mut s = surface();
        let mut engine = engine_with("CAT", &mut s);
        let before = s.ops().len();

        assert_eq!(engine.submit_guess("z", &mut s).unwrap(), GuessOutcome::Wrong);
        assert_eq!(s.ops().len(), before + 1);
        assert!(matches!(s.ops().last(), Some(DrawOp::StrokeArc { .. })));

        assert_eq!(engine.submit_guess("c", &mut s).unwrap(), GuessOutcome::Correct);
        assert_eq!(s.ops().len(), before + 1);
    }

    #[test]
    fn incremental_drawing_matches_redraw() {
        let mut s = surface();
        let mut engine = engine_with("DOG", &mut s);
        for letter in ["q", "w", "o", "e"] {
            engine.submit_guess(letter, &mut s).unwrap();
        }

        let mut replayed = surface();
        engine.redraw(&mut replayed);
        assert_eq!(s, replayed);
    }

    #[test]
    fn rejected_guesses_do_not_draw() {
        let mut s = surface();
        let mut engine = engine_with("CAT", &mut s);
        engine.submit_guess("z", &mut s).unwrap();
        let snapshot = s.clone();

        assert!(engine.submit_guess("Z", &mut s).is_err());
        assert!(engine.submit_guess("zz", &mut s).is_err());
        assert_eq!(s, snapshot);
    }

    #[test]
    fn remaining_guesses_counts_down() {
        let mut s = surface();
        let mut engine = engine_with("CAT", &mut s);
        assert_eq!(engine.remaining_guesses(), 6);
        engine.submit_guess("x", &mut s).unwrap();
        engine.submit_guess("y", &mut s).unwrap();
        assert_eq!(engine.remaining_guesses(), 4);
    }
}
