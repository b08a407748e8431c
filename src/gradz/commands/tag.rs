//! The tag reconciler.
//!
//! Maps every matched, reviewed card to a difficulty label and rewrites each
//! owning note's tag set so it carries exactly one label from the vocabulary.
//! Unrelated tags are left alone. Running the command twice over an unchanged
//! collection yields the same tag assignment.

use crate::classify::classify;
use crate::commands::{CmdMessage, CmdResult};
use crate::config::Thresholds;
use crate::error::Result;
use crate::model::{Difficulty, NoteId};
use crate::store::CollectionStore;
use std::collections::HashMap;

pub fn run<S: CollectionStore>(
    store: &mut S,
    query: &str,
    cfg: &Thresholds,
) -> Result<CmdResult> {
    let card_ids = store.find_cards(query)?;
    if card_ids.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("No cards matched the search."));
        return Ok(result);
    }

    // 1. Judge difficulty per card. Never-reviewed cards carry no signal and
    // are skipped. When a note has several cards the last one in query order
    // wins.
    let mut order: Vec<NoteId> = Vec::new();
    let mut labels: HashMap<NoteId, Difficulty> = HashMap::new();
    for card_id in card_ids {
        let card = store.get_card(card_id)?;
        if card.reps == 0 {
            continue;
        }

        let label = classify(card.lapses, card.interval, card.ease, cfg);
        if labels.insert(card.note_id, label).is_none() {
            order.push(card.note_id);
        }
    }

    // 2. Apply tags per note: strip the whole vocabulary, then append the
    // computed label. This keeps at most one difficulty tag per note even if
    // something else attached several.
    let mut affected = Vec::new();
    for note_id in order {
        let mut note = store.get_note(note_id)?;
        note.tags.retain(|t| !Difficulty::is_difficulty_tag(t));
        note.tags.push(labels[&note_id].tag().to_string());

        store.update_note(&note)?;
        affected.push(note);
    }

    let mut result = CmdResult::default().with_affected_notes(affected);
    if result.processed == 0 {
        result.add_message(CmdMessage::info("No cards matched the search."));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Assigned difficulty tags to {} note{}.",
            result.processed,
            if result.processed == 1 { "" } else { "s" }
        )));
    }
    Ok(result)
}
