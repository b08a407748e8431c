use crate::commands::{CmdResult, NoteOverview};
use crate::error::Result;
use crate::store::CollectionStore;

/// Overview of every note: current difficulty tag, decks, and card count.
pub fn run<S: CollectionStore>(store: &S) -> Result<CmdResult> {
    let notes = store.list_notes()?;
    let cards = store.list_cards()?;

    let listed = notes
        .into_iter()
        .map(|note| {
            let mut decks: Vec<String> = cards
                .iter()
                .filter(|c| c.note_id == note.id)
                .map(|c| c.deck.clone())
                .collect();
            let count = decks.len();
            decks.sort();
            decks.dedup();

            NoteOverview {
                difficulty: note.difficulty(),
                decks,
                cards: count,
                note,
            }
        })
        .collect();

    Ok(CmdResult::default().with_listed(listed))
}
