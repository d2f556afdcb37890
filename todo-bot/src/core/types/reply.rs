//! Outbound reply: text, formatting, and an optional inline keyboard.

use super::callback::CallbackAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextFormat {
    #[default]
    Plain,
    Html,
}

/// One inline button; pressing it sends `action` back as callback data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub action: CallbackAction,
}

impl Button {
    pub fn new(label: impl Into<String>, action: CallbackAction) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }
}

/// A message to send to the chat. `keyboard` is a grid of rows; empty means no markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub format: TextFormat,
    pub keyboard: Vec<Vec<Button>>,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: TextFormat::Plain,
            keyboard: Vec::new(),
        }
    }

    /// Text with HTML markup. Caller escapes user content.
    pub fn html(text: impl Into<String>) -> Self {
        Self {
            format: TextFormat::Html,
            ..Self::text(text)
        }
    }

    /// Text with one button per row.
    pub fn with_buttons(text: impl Into<String>, buttons: impl IntoIterator<Item = Button>) -> Self {
        Self {
            keyboard: buttons.into_iter().map(|b| vec![b]).collect(),
            ..Self::text(text)
        }
    }

    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.keyboard.iter().flatten()
    }

    /// Splits the keyboard into replies of at most `max_rows` rows each, repeating the text.
    /// A reply that already fits comes back unchanged.
    pub fn pages(self, max_rows: usize) -> Vec<Reply> {
        if max_rows == 0 || self.keyboard.len() <= max_rows {
            return vec![self];
        }

        let Reply {
            text,
            format,
            keyboard,
        } = self;
        keyboard
            .chunks(max_rows)
            .map(|rows| Reply {
                text: text.clone(),
                format,
                keyboard: rows.to_vec(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_buttons_puts_one_button_per_row() {
        let reply = Reply::with_buttons(
            "pick",
            vec![
                Button::new("a", CallbackAction::Show("1".into())),
                Button::new("b", CallbackAction::Show("2".into())),
            ],
        );
        assert_eq!(reply.keyboard.len(), 2);
        assert!(reply.keyboard.iter().all(|row| row.len() == 1));
        assert_eq!(reply.buttons().count(), 2);
        assert_eq!(reply.format, TextFormat::Plain);
    }

    #[test]
    fn test_html_has_no_keyboard() {
        let reply = Reply::html("<b>x</b>");
        assert_eq!(reply.format, TextFormat::Html);
        assert!(reply.keyboard.is_empty());
    }

    #[test]
    fn test_pages_splits_long_keyboards() {
        let buttons =
            (0..250).map(|i| Button::new(i.to_string(), CallbackAction::Delete(i.to_string())));
        let pages = Reply::with_buttons("pick", buttons).pages(100);

        let sizes: Vec<usize> = pages.iter().map(|p| p.keyboard.len()).collect();
        assert_eq!(sizes, vec![100, 100, 50]);
        assert!(pages.iter().all(|p| p.text == "pick"));
        assert_eq!(pages[2].buttons().last().map(|b| b.label.as_str()), Some("249"));
    }

    #[test]
    fn test_pages_keeps_small_replies_whole() {
        let reply = Reply::with_buttons(
            "pick",
            vec![Button::new("a", CallbackAction::Show("1".into()))],
        );
        assert_eq!(reply.clone().pages(100), vec![reply]);
        assert_eq!(Reply::text("hi").pages(100).len(), 1);
    }
}
