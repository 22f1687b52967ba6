//! Contact form state.
//!
//! Submissions are validated and logged. There is no delivery channel.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::info;

/// Form fields in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Email => "your@email.com",
            Field::Subject => "Project Inquiry",
            Field::Message => "Tell me about your project...",
        }
    }

    fn next(self) -> Self {
        Self::ALL[(self as usize + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Self {
        Self::ALL[(self as usize + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Outcome of the last submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStatus {
    Sent,
    Invalid(&'static str),
}

/// Editable contact form.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    values: [String; 4],
    focus: Option<Field>,
    status: Option<SubmitStatus>,
}

impl ContactForm {
    pub fn is_editing(&self) -> bool {
        self.focus.is_some()
    }

    pub fn focus(&self) -> Option<Field> {
        self.focus
    }

    pub fn status(&self) -> Option<&SubmitStatus> {
        self.status.as_ref()
    }

    pub fn value(&self, field: Field) -> &str {
        &self.values[field as usize]
    }

    /// Start editing at the first field.
    pub fn begin_editing(&mut self) {
        self.focus = Some(Field::Name);
        self.status = None;
    }

    pub fn stop_editing(&mut self) {
        self.focus = None;
    }

    /// Feed a key press while editing. Ignored when not editing.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let Some(field) = self.focus else {
            return;
        };
        match key.code {
            KeyCode::Esc => self.stop_editing(),
            KeyCode::Tab => self.focus = Some(field.next()),
            KeyCode::BackTab => self.focus = Some(field.prev()),
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.values[field as usize].pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.values[field as usize].push(c);
            }
            _ => {}
        }
    }

    /// Validate and "send". Every field is required.
    pub fn submit(&mut self) {
        let trimmed = |field: Field| self.value(field).trim();
        let status = if trimmed(Field::Name).is_empty() {
            SubmitStatus::Invalid("Please enter your name.")
        } else if !is_plausible_email(trimmed(Field::Email)) {
            SubmitStatus::Invalid("Please enter a valid email address.")
        } else if trimmed(Field::Subject).is_empty() {
            SubmitStatus::Invalid("Please enter a subject.")
        } else if trimmed(Field::Message).is_empty() {
            SubmitStatus::Invalid("Please enter a message.")
        } else {
            SubmitStatus::Sent
        };

        if status == SubmitStatus::Sent {
            info!(
                name = trimmed(Field::Name),
                email = trimmed(Field::Email),
                subject = trimmed(Field::Subject),
                message_chars = trimmed(Field::Message).chars().count(),
                "contact form submitted"
            );
            self.values = Default::default();
            self.focus = None;
        }
        self.status = Some(status);
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(form: &mut ContactForm, code: KeyCode) {
        form.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(form: &mut ContactForm, text: &str) {
        for c in text.chars() {
            press(form, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_keys_ignored_when_not_editing() {
        let mut form = ContactForm::default();
        type_text(&mut form, "hi");
        assert_eq!(form.value(Field::Name), "");
    }

    #[test]
    fn test_tab_cycles_fields() {
        let mut form = ContactForm::default();
        form.begin_editing();
        type_text(&mut form, "Ada");
        press(&mut form, KeyCode::Tab);
        assert_eq!(form.focus(), Some(Field::Email));
        press(&mut form, KeyCode::BackTab);
        press(&mut form, KeyCode::BackTab);
        assert_eq!(form.focus(), Some(Field::Message));
        press(&mut form, KeyCode::Backspace);
        assert_eq!(form.value(Field::Name), "Ada");
    }

    #[test]
    fn test_submit_requires_every_field() {
        let mut form = ContactForm::default();
        form.begin_editing();
        type_text(&mut form, "Ada");
        press(&mut form, KeyCode::Tab);
        type_text(&mut form, "ada@example");
        press(&mut form, KeyCode::Enter);
        assert_eq!(
            form.status(),
            Some(&SubmitStatus::Invalid("Please enter a valid email address."))
        );
        assert!(form.is_editing());
    }

    #[test]
    fn test_successful_submit_clears_form() {
        let mut form = ContactForm::default();
        form.begin_editing();
        for text in ["Ada", "ada@example.com", "Launch film", "Thirty seconds, moody."] {
            type_text(&mut form, text);
            press(&mut form, KeyCode::Tab);
        }
        press(&mut form, KeyCode::Enter);
        assert_eq!(form.status(), Some(&SubmitStatus::Sent));
        assert!(!form.is_editing());
        assert!(Field::ALL.iter().all(|f| form.value(*f).is_empty()));
    }

    #[test]
    fn test_email_plausibility() {
        assert!(is_plausible_email("a@b.co"));
        assert!(!is_plausible_email("@b.co"));
        assert!(!is_plausible_email("a@b."));
        assert!(!is_plausible_email("ab.co"));
    }
}
