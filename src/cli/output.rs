//! Output formatting utilities

use crate::domain::Note;

/// Format a list of notes for display
pub fn format_note_list(notes: &[Note]) -> String {
    if notes.is_empty() {
        return "No notes found".to_string();
    }

    let mut output = String::new();
    for note in notes {
        output.push_str(&format!(
            "{}  {}\n",
            note.created_at.format("%d-%m-%Y %H:%M"),
            note.title
        ));
    }
    output
}
