use unicode_segmentation::UnicodeSegmentation;

/// A half-open range `[start, end)` of grapheme indices into the editor's text.
#[derive(Default, Copy, Clone, PartialEq, Eq, Debug)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// The document being edited together with its current selection.
#[derive(Default, Debug)]
pub struct Editor {
    /// Full document content
    text: String,
    /// Current selection, always within `[0, len]`
    selection: Selection,
}

impl Editor {
    /// Constructs an [Editor] holding `text` with an empty selection at the start.
    ///
    /// # Arguments
    ///
    /// * `text` - the initial document content
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            selection: Selection::default(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the whole document, keeping the selection clamped to the new length.
    pub fn set_text(&mut self, text: String) {
        self.text = text;
        let len = self.len();
        self.selection.start = self.selection.start.min(len);
        self.selection.end = self.selection.end.clamp(self.selection.start, len);
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Number of grapheme clusters in the document.
    pub fn len(&self) -> usize {
        self.text.graphemes(true).count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Sets the selection, clamping out-of-range bounds instead of rejecting them.
    ///
    /// # Arguments
    ///
    /// * `start` - clamped to `[0, len]`
    /// * `end` - clamped to `[start, len]`
    pub fn set_selection(&mut self, start: isize, end: isize) {
        let len = self.len();
        let clamp = |at: isize| usize::try_from(at).unwrap_or(0).min(len);

        let start = clamp(start);
        let end = clamp(end).max(start);
        self.selection = Selection { start, end };
    }

    /// Returns the currently selected text.
    pub fn get_selection(&self) -> &str {
        let (from, to) = self.selection_bytes();
        &self.text[from..to]
    }

    /// Removes the selected text and collapses the selection at its start.
    pub fn delete_selection(&mut self) {
        self.replace_selection("");
    }

    /// Replaces the selected text with `new_text`; the selection then wraps the
    /// inserted text, extended to whole graphemes if it merged with a neighbor.
    ///
    /// # Arguments
    ///
    /// * `new_text` - the text spliced in place of the selection
    pub fn replace_selection(&mut self, new_text: &str) {
        let (from, to) = self.selection_bytes();
        self.text.replace_range(from..to, new_text);

        let len = self.len();
        let start = self.selection.start.min(len);
        let end = self.grapheme_index(from + new_text.len()).clamp(start, len);
        self.selection = Selection { start, end };
    }

    /// Byte offsets of the selection bounds.
    fn selection_bytes(&self) -> (usize, usize) {
        let Selection { start, end } = self.selection;
        (self.byte_offset(start), self.byte_offset(end))
    }

    /// Number of graphemes that start before byte offset `at`.
    fn grapheme_index(&self, at: usize) -> usize {
        self.text
            .grapheme_indices(true)
            .take_while(|(index, _)| *index < at)
            .count()
    }

    fn byte_offset(&self, at: usize) -> usize {
        self.text
            .grapheme_indices(true)
            .nth(at)
            .map_or(self.text.len(), |(index, _)| index)
    }
}
