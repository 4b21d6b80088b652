//! Single-line text inputs of the form.

use unicode_width::UnicodeWidthChar;

/// Which input has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Range lower bound.
    RangeMin,
    /// Range upper bound.
    RangeMax,
    /// Point list.
    #[default]
    Points,
    /// Vector list.
    Vectors,
    /// Equation.
    Equation,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::RangeMin,
        Focus::RangeMax,
        Focus::Points,
        Focus::Vectors,
        Focus::Equation,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Get the next input in tab order.
    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    /// Get the previous input in tab order.
    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Editable text with the cursor kept at the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputField {
    label: &'static str,
    buffer: String,
}

impl InputField {
    /// Create a field with initial text.
    pub fn new(label: &'static str, text: impl Into<String>) -> Self {
        Self {
            label,
            buffer: text.into(),
        }
    }

    /// Field title.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Current contents.
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Add a character.
    pub fn input(&mut self, c: char) {
        self.buffer.push(c);
    }

    /// Remove the last character.
    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Longest suffix that fits in `width` terminal columns.
    ///
    /// Editing happens at the end, so the tail is what needs to stay visible.
    pub fn visible_tail(&self, width: usize) -> &str {
        let mut used = 0;
        let mut start = self.buffer.len();
        for (idx, c) in self.buffer.char_indices().rev() {
            let w = c.width().unwrap_or(0);
            if used + w > width {
                break;
            }
            used += w;
            start = idx;
        }
        &self.buffer[start..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing() {
        let mut field = InputField::new("Points", "(1,2");
        field.input(')');
        assert_eq!(field.text(), "(1,2)");
        field.backspace();
        field.backspace();
        assert_eq!(field.text(), "(1,");
        field.clear();
        assert_eq!(field.text(), "");
        field.backspace();
        assert_eq!(field.text(), "");
    }

    #[test]
    fn visible_tail_respects_width() {
        let field = InputField::new("Equation", "sin(x) + cos(x)");
        assert_eq!(field.visible_tail(6), "cos(x)");
        assert_eq!(field.visible_tail(100), "sin(x) + cos(x)");
        assert_eq!(field.visible_tail(0), "");
    }

    #[test]
    fn visible_tail_counts_wide_chars() {
        let field = InputField::new("Points", "ab日本");
        assert_eq!(field.visible_tail(4), "日本");
        assert_eq!(field.visible_tail(3), "本");
    }

    #[test]
    fn focus_cycles_both_ways() {
        assert_eq!(Focus::Equation.next(), Focus::RangeMin);
        assert_eq!(Focus::RangeMin.prev(), Focus::Equation);
        assert_eq!(Focus::Points.next().prev(), Focus::Points);
    }
}
