use crate::app::App;
use crate::models::ChatRequest;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Routes one key event into the controller. Returns a request when the
/// current input should be sent; the event loop owns the dispatch.
pub fn handle_key(key: KeyEvent, app: &mut App) -> Option<ChatRequest> {
    match key.code {
        KeyCode::Enter => return app.submit(),
        KeyCode::Tab => app.persona.cycle(),
        KeyCode::Esc => app.should_quit = true,
        KeyCode::PageUp => app.scroll_up(),
        KeyCode::PageDown => app.scroll_down(),
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'c' => app.should_quit = true,
                    'u' => app.scroll_up(),
                    'd' => app.scroll_down(),
                    _ => {}
                }
            } else {
                app.input.push(c);
            }
        }
        _ => {}
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typed_characters_land_in_the_input_buffer() {
        let mut app = App::new("kind_ta");
        for c in "hi".chars() {
            handle_key(key(KeyCode::Char(c)), &mut app);
        }
        assert_eq!(app.input, "hi");

        handle_key(key(KeyCode::Backspace), &mut app);
        assert_eq!(app.input, "h");
    }

    #[test]
    fn enter_sends_the_current_input() {
        let mut app = App::new("kind_ta");
        app.input = "hello".to_string();

        let request = handle_key(key(KeyCode::Enter), &mut app).unwrap();
        assert_eq!(request.message, "hello");
    }

    #[test]
    fn enter_is_a_no_op_while_a_request_is_pending() {
        let mut app = App::new("kind_ta");
        app.input = "first".to_string();
        assert!(handle_key(key(KeyCode::Enter), &mut app).is_some());

        app.input = "second".to_string();
        assert!(handle_key(key(KeyCode::Enter), &mut app).is_none());
    }

    #[test]
    fn tab_cycles_the_persona() {
        let mut app = App::new("kind_ta");
        handle_key(key(KeyCode::Tab), &mut app);
        assert_eq!(app.persona.current().key, "cold_engineer");
    }

    #[test]
    fn ctrl_c_requests_quit() {
        let mut app = App::new("kind_ta");
        handle_key(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &mut app,
        );
        assert!(app.should_quit);
    }
}
