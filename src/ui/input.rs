use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    event::events::Event,
    spa::routes::{Direction, Route},
};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(key: KeyEvent, text_entry: bool) -> Option<Event> {
        if text_entry {
            // A focused text field swallows everything except quit.
            return match (key.code, key.modifiers) {
                (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(Event::Quit),
                _ => None,
            };
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(Event::Quit),
            (KeyCode::Char('q'), _) => Some(Event::Quit),
            (KeyCode::Backspace, _) => Some(Event::Navigate(Route::Home, Direction::Backward)),
            (KeyCode::Char('1'), _) => Some(Event::Navigate(Route::Home, Direction::Forward)),
            (KeyCode::Char('2'), _) => Some(Event::Navigate(Route::Pie, Direction::Forward)),
            (KeyCode::Char('3'), _) => Some(Event::Navigate(Route::Map, Direction::Forward)),
            (KeyCode::Char('4'), _) => Some(Event::Navigate(Route::Relation, Direction::Forward)),
            (KeyCode::Char('5'), _) => Some(Event::Navigate(Route::Music, Direction::Forward)),
            (KeyCode::Char('v'), _) | (KeyCode::Enter, _) => Some(Event::ToggleView),
            (KeyCode::Char(' '), _) => Some(Event::TogglePlayPause),
            (KeyCode::Char('n'), _) => Some(Event::NextSong),
            (KeyCode::Char('p'), _) => Some(Event::PreviousSong),
            (KeyCode::Char('+'), _) | (KeyCode::Char('='), _) => Some(Event::VolumeUp(5)),
            (KeyCode::Char('-'), _) => Some(Event::VolumeDown(5)),
            (KeyCode::Char('m'), _) => Some(Event::ToggleMute),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn backspace_goes_home() {
        assert!(matches!(
            InputHandler::handle_key(key(KeyCode::Backspace), false),
            Some(Event::Navigate(Route::Home, Direction::Backward))
        ));
    }

    #[test]
    fn text_entry_swallows_navigation() {
        assert!(InputHandler::handle_key(key(KeyCode::Backspace), true).is_none());
        assert!(InputHandler::handle_key(key(KeyCode::Char('5')), true).is_none());
        assert!(matches!(
            InputHandler::handle_key(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                true
            ),
            Some(Event::Quit)
        ));
    }
}
