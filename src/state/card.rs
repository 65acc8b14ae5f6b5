//! Business-Card Edit Lifecycle
//!
//! VIEW -> EDIT -> {SAVE -> VIEW, CANCEL -> VIEW}. Entering edit mode copies
//! the committed record into an independent buffer; field edits touch only
//! the buffer; SAVE replaces the committed record, CANCEL discards the
//! buffer. The commit is purely in-memory and lost on reload.

use crate::model::BusinessCard;

/// Addressable fields of the business card, for keyed buffer updates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardField {
    Name,
    Title,
    Hospital,
    Address,
    Phone,
    Email,
    Website,
    Hours,
    About,
    Education,
    Certifications,
}

/// Buffered editor around the committed business-card record.
#[derive(Clone, Debug, PartialEq)]
pub struct CardEditor {
    committed: BusinessCard,
    buffer: BusinessCard,
    editing: bool,
}

impl CardEditor {
    pub fn new(card: BusinessCard) -> Self {
        Self {
            buffer: card.clone(),
            committed: card,
            editing: false,
        }
    }

    pub fn committed(&self) -> &BusinessCard {
        &self.committed
    }

    pub fn buffer(&self) -> &BusinessCard {
        &self.buffer
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Enter edit mode with a fresh copy of the committed record.
    pub fn begin_edit(&mut self) {
        self.buffer = self.committed.clone();
        self.editing = true;
    }

    /// Current buffer value of a single field.
    pub fn buffer_field(&self, field: CardField) -> &str {
        match field {
            CardField::Name => &self.buffer.name,
            CardField::Title => &self.buffer.title,
            CardField::Hospital => &self.buffer.hospital,
            CardField::Address => &self.buffer.address,
            CardField::Phone => &self.buffer.phone,
            CardField::Email => &self.buffer.email,
            CardField::Website => &self.buffer.website,
            CardField::Hours => &self.buffer.hours,
            CardField::About => &self.buffer.about,
            CardField::Education => &self.buffer.education,
            CardField::Certifications => &self.buffer.certifications,
        }
    }

    /// Keyed update of a single buffer field. The committed record is
    /// untouched until [`CardEditor::save`].
    pub fn set_field(&mut self, field: CardField, value: &str) {
        let slot = match field {
            CardField::Name => &mut self.buffer.name,
            CardField::Title => &mut self.buffer.title,
            CardField::Hospital => &mut self.buffer.hospital,
            CardField::Address => &mut self.buffer.address,
            CardField::Phone => &mut self.buffer.phone,
            CardField::Email => &mut self.buffer.email,
            CardField::Website => &mut self.buffer.website,
            CardField::Hours => &mut self.buffer.hours,
            CardField::About => &mut self.buffer.about,
            CardField::Education => &mut self.buffer.education,
            CardField::Certifications => &mut self.buffer.certifications,
        };
        *slot = value.to_string();
    }

    /// Commit the buffer and leave edit mode.
    pub fn save(&mut self) {
        self.committed = self.buffer.clone();
        self.editing = false;
    }

    /// Discard the buffer and leave edit mode.
    pub fn cancel(&mut self) {
        self.buffer = self.committed.clone();
        self.editing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    #[test]
    fn test_cancel_restores_committed_record() {
        let mut editor = CardEditor::new(data::business_card());
        let before = editor.committed().clone();

        editor.begin_edit();
        editor.set_field(CardField::Name, "Dr. Nobody");
        editor.set_field(CardField::Phone, "000");
        editor.set_field(CardField::About, "scratch");
        editor.cancel();

        assert_eq!(editor.committed(), &before);
        assert_eq!(editor.buffer(), &before);
        assert!(!editor.is_editing());
    }

    #[test]
    fn test_save_commits_only_edited_field() {
        let mut editor = CardEditor::new(data::business_card());
        let before = editor.committed().clone();

        editor.begin_edit();
        editor.set_field(CardField::Name, "X");
        editor.save();

        let after = editor.committed();
        assert_eq!(after.name, "X");
        assert_eq!(after.title, before.title);
        assert_eq!(after.hospital, before.hospital);
        assert_eq!(after.address, before.address);
        assert_eq!(after.phone, before.phone);
        assert_eq!(after.email, before.email);
        assert_eq!(after.website, before.website);
        assert_eq!(after.hours, before.hours);
        assert_eq!(after.about, before.about);
        assert_eq!(after.education, before.education);
        assert_eq!(after.certifications, before.certifications);
        assert!(!editor.is_editing());
    }

    #[test]
    fn test_buffer_edits_do_not_leak_before_save() {
        let mut editor = CardEditor::new(data::business_card());
        let before = editor.committed().clone();

        editor.begin_edit();
        editor.set_field(CardField::Email, "elsewhere@example.com");

        assert_eq!(editor.committed(), &before);
        assert_eq!(editor.buffer().email, "elsewhere@example.com");
        assert!(editor.is_editing());
    }
}
