use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
        app.request_quit();
        return;
    }

    app.on_key(key);
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::path::PathBuf;

    fn app() -> App {
        App::new(Config::default(), PathBuf::from("."))
    }

    #[test]
    fn quit_keys() {
        for key in [
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            let mut app = app();
            handle_key(&mut app, key);
            assert!(app.should_quit());
        }
    }

    #[test]
    fn other_keys_reach_the_page() {
        let mut app = app();
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('v'), KeyModifiers::NONE));
        assert!(!app.should_quit());
        assert_eq!(app.gallery_view(), crate::ui::gallery::GalleryView::Desktop);
    }
}
