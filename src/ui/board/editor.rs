use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorFieldId {
    Title,
    Description,
}

#[derive(Debug, Clone)]
pub struct EditorField {
    pub id: EditorFieldId,
    pub label: &'static str,
    pub value: String,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSubmit {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    None,
    Cancel,
    Submit,
}

/// The add-task form.
#[derive(Debug, Clone)]
pub struct EditorState {
    fields: Vec<EditorField>,
    active: usize,
    error: Option<String>,
}

impl EditorState {
    pub fn new_task() -> Self {
        Self {
            fields: vec![
                EditorField {
                    id: EditorFieldId::Title,
                    label: "Title",
                    value: String::new(),
                    required: true,
                },
                EditorField {
                    id: EditorFieldId::Description,
                    label: "Description",
                    value: String::new(),
                    required: false,
                },
            ],
            active: 0,
            error: None,
        }
    }

    pub fn fields(&self) -> &[EditorField] {
        &self.fields
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> EditorAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('u') {
            if let Some(field) = self.fields.get_mut(self.active) {
                field.value.clear();
            }
            self.error = None;
            return EditorAction::None;
        }

        match key.code {
            KeyCode::Esc => return EditorAction::Cancel,
            KeyCode::Tab | KeyCode::Down => self.move_active(1),
            KeyCode::BackTab | KeyCode::Up => self.move_active(-1),
            KeyCode::Enter => {
                if self.active + 1 >= self.fields.len() {
                    return match self.validate() {
                        Ok(()) => EditorAction::Submit,
                        Err(err) => {
                            self.error = Some(err);
                            EditorAction::None
                        }
                    };
                }
                self.move_active(1);
            }
            KeyCode::Backspace => {
                if let Some(field) = self.fields.get_mut(self.active) {
                    field.value.pop();
                }
            }
            KeyCode::Char(ch) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return EditorAction::None;
                }
                if !ch.is_control() {
                    if let Some(field) = self.fields.get_mut(self.active) {
                        field.value.push(ch);
                    }
                }
            }
            _ => {}
        }

        self.error = None;
        EditorAction::None
    }

    pub fn build_submit(&self) -> Result<EditorSubmit, String> {
        self.validate()?;
        Ok(EditorSubmit {
            title: self.field_value(EditorFieldId::Title).trim().to_string(),
            description: self.field_value(EditorFieldId::Description).trim().to_string(),
        })
    }

    fn validate(&self) -> Result<(), String> {
        if self.field_value(EditorFieldId::Title).trim().is_empty() {
            return Err("title is required".to_string());
        }
        Ok(())
    }

    fn field_value(&self, id: EditorFieldId) -> &str {
        self.fields
            .iter()
            .find(|field| field.id == id)
            .map(|field| field.value.as_str())
            .unwrap_or("")
    }

    fn move_active(&mut self, delta: isize) {
        let len = self.fields.len() as isize;
        if len == 0 {
            self.active = 0;
            return;
        }
        self.active = (self.active as isize + delta).rem_euclid(len) as usize;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(editor: &mut EditorState, text: &str) {
        for ch in text.chars() {
            editor.handle_key(key(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn enter_on_last_field_submits() {
        let mut editor = EditorState::new_task();
        type_text(&mut editor, "Buy milk");
        assert_eq!(editor.handle_key(key(KeyCode::Enter)), EditorAction::None);
        assert_eq!(editor.active_index(), 1);
        type_text(&mut editor, "2% milk");
        assert_eq!(editor.handle_key(key(KeyCode::Enter)), EditorAction::Submit);
        assert_eq!(
            editor.build_submit().expect("submit"),
            EditorSubmit {
                title: "Buy milk".to_string(),
                description: "2% milk".to_string(),
            }
        );
    }

    #[test]
    fn blank_title_blocks_submit() {
        let mut editor = EditorState::new_task();
        type_text(&mut editor, "   ");
        editor.handle_key(key(KeyCode::Tab));
        assert_eq!(editor.handle_key(key(KeyCode::Enter)), EditorAction::None);
        assert_eq!(editor.error(), Some("title is required"));
    }

    #[test]
    fn tab_wraps_and_backspace_edits_active_field() {
        let mut editor = EditorState::new_task();
        editor.handle_key(key(KeyCode::BackTab));
        assert_eq!(editor.active_index(), 1);
        type_text(&mut editor, "abc");
        editor.handle_key(key(KeyCode::Backspace));
        assert_eq!(editor.fields()[1].value, "ab");
        assert!(editor.fields()[0].value.is_empty());
    }

    #[test]
    fn ctrl_u_clears_field() {
        let mut editor = EditorState::new_task();
        type_text(&mut editor, "oops");
        editor.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert!(editor.fields()[0].value.is_empty());
    }

    #[test]
    fn escape_cancels() {
        let mut editor = EditorState::new_task();
        assert_eq!(editor.handle_key(key(KeyCode::Esc)), EditorAction::Cancel);
    }
}
