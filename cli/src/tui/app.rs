use kata_core::FileRevenueRepository;
use ratatui::widgets::TableState;

use crate::exercise::Exercise;

pub enum InputMode {
    Normal,
    Editing,
}

pub struct App {
    pub repo: FileRevenueRepository,
    pub exercises: Vec<Exercise>,
    pub state: TableState,
    pub input: String,
    pub input_mode: InputMode,
    /// Cursor position in chars, not bytes.
    pub cursor_position: usize,
    pub output: Vec<String>,
    pub output_is_error: bool,
}

impl App {
    pub fn new(repo: FileRevenueRepository) -> App {
        let mut state = TableState::default();
        state.select(Some(0));
        App {
            repo,
            exercises: Exercise::ALL.to_vec(),
            state,
            input: String::new(),
            input_mode: InputMode::Normal,
            cursor_position: 0,
            output: Vec::new(),
            output_is_error: false,
        }
    }

    pub fn selected(&self) -> Option<Exercise> {
        self.state.selected().and_then(|i| self.exercises.get(i).copied())
    }

    pub fn next(&mut self) {
        if self.exercises.is_empty() { return; }

        let i = match self.state.selected() {
            Some(i) if i >= self.exercises.len() - 1 => 0,
            Some(i) => i + 1,
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        if self.exercises.is_empty() { return; }

        let i = match self.state.selected() {
            Some(0) => self.exercises.len() - 1,
            Some(i) => i - 1,
            None => 0,
        };
        self.state.select(Some(i));
    }

    /// Runs the selected exercise, or asks for its input first.
    pub fn activate(&mut self) {
        let Some(exercise) = self.selected() else { return };
        if exercise.prompt().is_some() {
            self.input.clear();
            self.cursor_position = 0;
            self.input_mode = InputMode::Editing;
        } else {
            self.run_selected("");
        }
    }

    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input);
        self.cursor_position = 0;
        self.input_mode = InputMode::Normal;
        self.run_selected(&input);
    }

    pub fn exit_input_mode(&mut self) {
        self.input.clear();
        self.cursor_position = 0;
        self.input_mode = InputMode::Normal;
    }

    fn run_selected(&mut self, input: &str) {
        let Some(exercise) = self.selected() else { return };
        match exercise.run(self.repo.clone(), input) {
            Ok(lines) => {
                self.output = lines;
                self.output_is_error = false;
            }
            Err(err) => {
                tracing::warn!(exercise = exercise.title(), error = %err, "exercise failed");
                self.output = vec![format!("Error: {:#}", err)];
                self.output_is_error = true;
            }
        }
    }

    pub fn input_char(&mut self, c: char) {
        let idx = self.byte_index();
        self.input.insert(idx, c);
        self.cursor_position += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position == 0 { return; }
        self.cursor_position -= 1;
        let idx = self.byte_index();
        self.input.remove(idx);
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            self.cursor_position += 1;
        }
    }

    pub fn byte_index(&self) -> usize {
        self.input
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor_position)
            .unwrap_or(self.input.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn app() -> (App, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let repo = FileRevenueRepository::new(Some(dir.path().to_path_buf())).unwrap();
        (App::new(repo), dir)
    }

    #[test]
    fn test_navigation_wraps() {
        let (mut app, _dir) = app();
        app.previous();
        assert_eq!(app.selected(), Some(Exercise::Reverse));
        app.next();
        assert_eq!(app.selected(), Some(Exercise::Triangular));
    }

    #[test]
    fn test_editing_multibyte_input() {
        let (mut app, _dir) = app();
        for c in "açb".chars() {
            app.input_char(c);
        }
        app.move_cursor_left();
        app.delete_char();
        assert_eq!(app.input, "ab");
        assert_eq!(app.cursor_position, 1);
    }

    #[test]
    fn test_run_with_input() {
        let (mut app, _dir) = app();
        app.next(); // Fibonacci
        app.activate();
        assert!(matches!(app.input_mode, InputMode::Editing));
        for c in "21".chars() {
            app.input_char(c);
        }
        app.submit_input();

        assert!(matches!(app.input_mode, InputMode::Normal));
        assert!(!app.output_is_error);
        assert!(app.output[0].contains("BELONGS"));
    }

    #[test]
    fn test_errors_are_shown_not_raised() {
        let (mut app, _dir) = app();
        app.state.select(Some(2)); // daily revenue, no file in temp dir
        app.activate();

        assert!(app.output_is_error);
        assert!(app.output[0].starts_with("Error:"));
    }

    #[test]
    fn test_state_shares_use_sample_when_file_missing() {
        let (mut app, _dir) = app();
        app.state.select(Some(3));
        app.activate();

        assert!(!app.output_is_error);
        assert_eq!(app.output.last().unwrap(), "Total revenue: R$ 180.759,98");
    }
}
