use unicode_width::UnicodeWidthStr;

/// Single-line text input with a character-indexed cursor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextInput {
    pub value: String,
    cursor: usize,
}

impl TextInput {
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    fn byte_index(&self, chars: usize) -> usize {
        self.value.chars().take(chars).map(|c| c.len_utf8()).sum()
    }

    pub fn insert(&mut self, c: char) {
        let byte_index = self.byte_index(self.cursor);
        self.value.insert(byte_index, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let byte_index = self.byte_index(self.cursor - 1);
            self.value.remove(byte_index);
            self.cursor -= 1;
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.value.chars().count() {
            self.cursor += 1;
        }
    }

    /// Terminal columns before the cursor; wide glyphs take two.
    pub fn cursor_column(&self) -> u16 {
        let prefix = &self.value[..self.byte_index(self.cursor)];
        prefix.width() as u16
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub label: String,
    pub input: TextInput,
}

impl Field {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            input: TextInput::default(),
        }
    }

    pub fn with_value(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            input: TextInput::with_value(value),
        }
    }
}

/// Labeled fields with one focused at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct Form {
    pub title: String,
    pub fields: Vec<Field>,
    pub focus: usize,
    /// Last rejection, shown under the fields until the next submit.
    pub error: Option<String>,
}

impl Form {
    pub fn new(title: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            title: title.into(),
            fields,
            focus: 0,
            error: None,
        }
    }

    pub fn value(&self, index: usize) -> &str {
        self.fields.get(index).map(|f| f.input.value.as_str()).unwrap_or("")
    }

    pub fn focused(&mut self) -> Option<&mut TextInput> {
        self.fields.get_mut(self.focus).map(|f| &mut f.input)
    }

    pub fn next_field(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
        }
    }

    pub fn previous_field(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
        }
    }
}

/// Leading fields of the class form; meeting-day rows follow in triples.
pub const CLASS_HEADER_FIELDS: usize = 3;

pub fn class_form() -> Form {
    let mut form = Form::new(
        "Add New Class",
        vec![
            Field::new("Class Name"),
            Field::new("Start Date (YYYY-MM-DD)"),
            Field::new("End Date (YYYY-MM-DD)"),
        ],
    );
    add_day_row(&mut form);
    form
}

pub fn day_rows(form: &Form) -> usize {
    form.fields.len().saturating_sub(CLASS_HEADER_FIELDS) / 3
}

pub fn add_day_row(form: &mut Form) {
    let row = day_rows(form) + 1;
    form.fields.push(Field::new(format!("Day {}", row)));
    form.fields.push(Field::new(format!("Time {}", row)));
    form.fields.push(Field::new(format!("Location {}", row)));
}

/// Drops the last meeting-day row; the first row always stays.
pub fn drop_day_row(form: &mut Form) -> bool {
    if day_rows(form) <= 1 {
        return false;
    }
    let len = form.fields.len();
    form.fields.truncate(len - 3);
    if form.focus >= form.fields.len() {
        form.focus = form.fields.len() - 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_input_editing() {
        let mut input = TextInput::default();
        for c in "Hall".chars() {
            input.insert(c);
        }
        input.move_left();
        input.move_left();
        input.insert('-');
        assert_eq!(input.value, "Ha-ll");
        assert_eq!(input.cursor, 3);

        input.backspace();
        input.backspace();
        assert_eq!(input.value, "Hll");

        input.move_right();
        input.move_right();
        input.move_right();
        assert_eq!(input.cursor, 3);
    }

    #[test]
    fn test_cursor_column_counts_wide_chars() {
        let input = TextInput::with_value("数学A");
        assert_eq!(input.cursor, 3);
        assert_eq!(input.cursor_column(), 5);
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = Form::new("t", vec![Field::new("a"), Field::new("b")]);
        form.previous_field();
        assert_eq!(form.focus, 1);
        form.next_field();
        assert_eq!(form.focus, 0);
    }

    #[test]
    fn test_class_form_rows() {
        let mut form = class_form();
        assert_eq!(day_rows(&form), 1);
        assert!(!drop_day_row(&mut form));

        add_day_row(&mut form);
        assert_eq!(day_rows(&form), 2);
        assert_eq!(form.fields.last().unwrap().label, "Location 2");

        form.focus = form.fields.len() - 1;
        assert!(drop_day_row(&mut form));
        assert_eq!(day_rows(&form), 1);
        assert_eq!(form.focus, form.fields.len() - 1);
    }
}
