//! Difficulty classification for reviewed cards.
//!
//! A card's review statistics are mapped to one of five labels by an ordered,
//! short-circuiting decision table:
//! - VeryHard and Hard are OR-rules (either many lapses or a low ease factor is
//!   enough on its own) and are checked first, so a frequently forgotten card is
//!   never labeled easy no matter how large its interval has grown.
//! - VeryEasy is an OR-rule checked before Easy, so a card meeting both ends up
//!   with the stronger label.
//! - Easy is an AND-rule: all three of its bounds must hold.
//! - Medium is the fall-through.
//!
//! Threshold ease values are configured as whole percentages and scaled by 10
//! before comparison against the card's stored factor (250% -> 2500).

use crate::config::Thresholds;
use crate::model::Difficulty;

/// Stored ease factors are 10x the displayed percentage.
const EASE_SCALE: u64 = 10;

/// Map one card's (lapses, interval, ease) to a difficulty label.
///
/// Total and deterministic: any inputs yield exactly one label, and exactly one
/// rule fires. Scaled percentage bounds are compared in u64 so an extreme
/// configured percentage cannot overflow.
pub fn classify(lapses: u32, interval: u32, ease: u32, cfg: &Thresholds) -> Difficulty {
    let ease = u64::from(ease);

    if lapses >= cfg.very_hard_lapses_min || ease < u64::from(cfg.very_hard_ease_max_pct) * EASE_SCALE
    {
        return Difficulty::VeryHard;
    }

    if lapses >= cfg.hard_lapses_min || ease < u64::from(cfg.hard_ease_max_pct) * EASE_SCALE {
        return Difficulty::Hard;
    }

    if interval >= cfg.very_easy_ivl_min
        || ease >= u64::from(cfg.very_easy_ease_min_pct) * EASE_SCALE
    {
        return Difficulty::VeryEasy;
    }

    if lapses <= cfg.easy_lapses_max
        && interval >= cfg.easy_ivl_min
        && ease >= u64::from(cfg.easy_ease_min_pct) * EASE_SCALE
    {
        return Difficulty::Easy;
    }

    Difficulty::Medium
}
