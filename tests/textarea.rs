//! Integration tests for the multi-line area.

mod common;

use std::cell::Cell;
use std::rc::Rc;

use common::{RecordingNav, ctrl, key};
use tui_edit::{
    Event, Grid, KeyCode, MouseButton, MouseEvent, Rect, TextArea, TextAreaOptions,
    TextAttributes,
};

fn type_str(
    area: &mut TextArea,
    content: &mut String,
    options: &mut TextAreaOptions,
    nav: &mut RecordingNav,
    s: &str,
) {
    for c in s.chars() {
        assert!(area.on_event(&Event::char(c), content, options, nav));
    }
}

fn cursor(options: &TextAreaOptions) -> (usize, usize) {
    (options.cursor_line, options.cursor_column)
}

#[test]
fn typing_and_return_build_lines() {
    let mut area = TextArea::new();
    let mut content = String::new();
    let mut options = TextAreaOptions::default();
    let mut nav = RecordingNav::focused();

    type_str(&mut area, &mut content, &mut options, &mut nav, "ab");
    assert!(area.on_event(&key(KeyCode::Enter), &mut content, &mut options, &mut nav));
    type_str(&mut area, &mut content, &mut options, &mut nav, "c");

    assert_eq!(content, "ab\nc");
    assert_eq!(cursor(&options), (1, 1));

    let mut grid = Grid::new(10, 2);
    grid.render(&area.render(&content, &mut options, &nav));
    assert_eq!(grid.symbol(0, 0), "a");
    assert_eq!(grid.symbol(1, 0), "b");
    assert_eq!(grid.symbol(0, 1), "c");
}

#[test]
fn return_splits_line_and_roundtrips() {
    let mut area = TextArea::new();
    let mut content = String::from("one\ntwo");
    let mut options = TextAreaOptions::default();
    let mut nav = RecordingNav::focused();

    // Enter at end of line 0 adds a line and moves to its start
    options.cursor_line = 0;
    options.cursor_column = 3;
    assert!(area.on_event(&key(KeyCode::Enter), &mut content, &mut options, &mut nav));
    assert_eq!(content, "one\n\ntwo");
    assert_eq!(cursor(&options), (1, 0));
    assert_eq!(content.split('\n').count(), 3);

    // Enter mid-line splits it
    options.cursor_line = 2;
    options.cursor_column = 1;
    assert!(area.on_event(&key(KeyCode::Enter), &mut content, &mut options, &mut nav));
    assert_eq!(content, "one\n\nt\nwo");
    assert_eq!(cursor(&options), (3, 0));
    assert_eq!(content.split('\n').collect::<Vec<_>>().join("\n"), content);
}

#[test]
fn backspace_merges_lines_at_column_zero() {
    let mut area = TextArea::new();
    let mut content = String::from("ab\ncd");
    let mut options = TextAreaOptions::default();
    let mut nav = RecordingNav::focused();

    options.cursor_line = 1;
    options.cursor_column = 0;
    assert!(area.on_event(&key(KeyCode::Backspace), &mut content, &mut options, &mut nav));
    assert_eq!(content, "abcd");
    assert_eq!(cursor(&options), (0, 2));
}

#[test]
fn backspace_at_buffer_start_is_not_handled() {
    let mut area = TextArea::new();
    let mut content = String::from("ab\ncd");
    let mut options = TextAreaOptions::default();
    let mut nav = RecordingNav::focused();

    assert!(!area.on_event(&key(KeyCode::Backspace), &mut content, &mut options, &mut nav));
    assert_eq!(content, "ab\ncd");
    assert_eq!(cursor(&options), (0, 0));
}

#[test]
fn delete_merges_next_line_at_line_end() {
    let mut area = TextArea::new();
    let mut content = String::from("ab\ncd");
    let mut options = TextAreaOptions::default();
    let mut nav = RecordingNav::focused();

    options.cursor_column = 2;
    assert!(area.on_event(&key(KeyCode::Delete), &mut content, &mut options, &mut nav));
    assert_eq!(content, "abcd");
    assert_eq!(cursor(&options), (0, 2));
}

#[test]
fn delete_at_buffer_end_is_not_handled() {
    let mut area = TextArea::new();
    let mut content = String::from("ab\ncd");
    let mut options = TextAreaOptions::default();
    let mut nav = RecordingNav::focused();

    options.cursor_line = 1;
    options.cursor_column = 2;
    assert!(!area.on_event(&key(KeyCode::Delete), &mut content, &mut options, &mut nav));
    assert_eq!(content, "ab\ncd");
}

#[test]
fn up_and_down_clamp_without_wraparound() {
    let mut area = TextArea::new();
    let mut content = String::from("ab\ncd\nef");
    let mut options = TextAreaOptions::default();
    let mut nav = RecordingNav::focused();

    assert!(!area.on_event(&key(KeyCode::Up), &mut content, &mut options, &mut nav));
    assert!(area.on_event(&key(KeyCode::Down), &mut content, &mut options, &mut nav));
    assert!(area.on_event(&key(KeyCode::Down), &mut content, &mut options, &mut nav));
    assert_eq!(options.cursor_line, 2);
    assert!(!area.on_event(&key(KeyCode::Down), &mut content, &mut options, &mut nav));
    assert_eq!(options.cursor_line, 2);
}

#[test]
fn left_and_right_roll_over_line_boundaries() {
    let mut area = TextArea::new();
    let mut content = String::from("ab\ncd");
    let mut options = TextAreaOptions::default();
    let mut nav = RecordingNav::focused();

    options.cursor_line = 1;
    options.cursor_column = 0;
    assert!(area.on_event(&key(KeyCode::Left), &mut content, &mut options, &mut nav));
    assert_eq!(cursor(&options), (0, 2));

    assert!(area.on_event(&key(KeyCode::Right), &mut content, &mut options, &mut nav));
    assert_eq!(cursor(&options), (1, 0));

    // at the very start/end the move is not handled
    options.cursor_line = 0;
    options.cursor_column = 0;
    assert!(!area.on_event(&key(KeyCode::Left), &mut content, &mut options, &mut nav));
    options.cursor_line = 1;
    options.cursor_column = 2;
    assert!(!area.on_event(&key(KeyCode::Right), &mut content, &mut options, &mut nav));
}

#[test]
fn home_and_end_stay_on_the_current_line() {
    let mut area = TextArea::new();
    let mut content = String::from("ab\ncde");
    let mut options = TextAreaOptions::default();
    let mut nav = RecordingNav::focused();

    options.cursor_line = 1;
    options.cursor_column = 1;
    assert!(area.on_event(&key(KeyCode::End), &mut content, &mut options, &mut nav));
    assert_eq!(cursor(&options), (1, 3));
    assert!(area.on_event(&key(KeyCode::Home), &mut content, &mut options, &mut nav));
    assert_eq!(cursor(&options), (1, 0));
}

#[test]
fn ctrl_arrows_cross_line_boundaries_as_single_steps() {
    let mut area = TextArea::new();
    let mut content = String::from("ab cd\nxy");
    let mut options = TextAreaOptions::default();
    let mut nav = RecordingNav::focused();

    // word-left within the line
    options.cursor_column = 5;
    assert!(area.on_event(&ctrl(KeyCode::Left), &mut content, &mut options, &mut nav));
    assert_eq!(cursor(&options), (0, 3));

    // at column 0 of a later line, one step to the previous line end
    options.cursor_line = 1;
    options.cursor_column = 0;
    assert!(area.on_event(&ctrl(KeyCode::Left), &mut content, &mut options, &mut nav));
    assert_eq!(cursor(&options), (0, 5));

    // at end of line, one step to the next line start
    assert!(area.on_event(&ctrl(KeyCode::Right), &mut content, &mut options, &mut nav));
    assert_eq!(cursor(&options), (1, 0));

    // word-right within the line, then not handled at the buffer end
    assert!(area.on_event(&ctrl(KeyCode::Right), &mut content, &mut options, &mut nav));
    assert_eq!(cursor(&options), (1, 2));
    assert!(!area.on_event(&ctrl(KeyCode::Right), &mut content, &mut options, &mut nav));

    // not handled at the buffer start
    options.cursor_line = 0;
    options.cursor_column = 0;
    assert!(!area.on_event(&ctrl(KeyCode::Left), &mut content, &mut options, &mut nav));
}

#[test]
fn trailing_newline_keeps_an_empty_last_line() {
    let mut area = TextArea::new();
    let mut content = String::from("ab\n");
    let mut options = TextAreaOptions::default();
    let nav = RecordingNav::focused();

    options.cursor_line = 99;
    options.cursor_column = 99;
    let mut grid = Grid::new(10, 2);
    grid.render(&area.render(&content, &mut options, &nav));
    assert_eq!(cursor(&options), (1, 0));

    // the empty trailing line is editable
    let mut nav = RecordingNav::focused();
    type_str(&mut area, &mut content, &mut options, &mut nav, "c");
    assert_eq!(content, "ab\nc");
}

#[test]
fn change_callback_fires_on_line_merges() {
    let mut area = TextArea::new();
    let mut content = String::from("ab\ncd");
    let changes = Rc::new(Cell::new(0));
    let counter = Rc::clone(&changes);
    let mut options = TextAreaOptions::default().on_change(move || counter.set(counter.get() + 1));
    let mut nav = RecordingNav::focused();

    options.cursor_line = 1;
    assert!(area.on_event(&key(KeyCode::Backspace), &mut content, &mut options, &mut nav));
    assert_eq!(changes.get(), 1);

    options.cursor_line = 0;
    options.cursor_column = 2;
    assert!(area.on_event(&key(KeyCode::Enter), &mut content, &mut options, &mut nav));
    assert_eq!(changes.get(), 2);

    assert!(area.on_event(&key(KeyCode::Delete), &mut content, &mut options, &mut nav));
    assert_eq!(changes.get(), 3);

    // pure navigation never fires it
    assert!(area.on_event(&key(KeyCode::Up), &mut content, &mut options, &mut nav));
    assert_eq!(changes.get(), 3);
}

#[test]
fn render_highlights_cursor_line_span() {
    let area = TextArea::new();
    let content = String::from("ab\ncd");
    let mut options = TextAreaOptions::default();
    options.cursor_line = 1;
    options.cursor_column = 1;
    let nav = RecordingNav::focused();

    let mut grid = Grid::new(10, 2);
    grid.render(&area.render(&content, &mut options, &nav));
    assert_eq!(grid.to_lines(), vec!["ab", "cd"]);
    assert!(grid.attrs(1, 1).contains(TextAttributes::INVERSE | TextAttributes::BLINK));
    assert!(!grid.attrs(0, 0).contains(TextAttributes::INVERSE));
    assert_eq!(area.cursor_area(), Rect::new(1, 1, 1, 1));
    assert_eq!(area.area(), Rect::new(0, 0, 10, 2));
}

#[test]
fn render_unfocused_has_no_cursor_highlight() {
    let area = TextArea::new();
    let content = String::from("ab");
    let mut options = TextAreaOptions::default();
    let nav = RecordingNav::default();

    let mut grid = Grid::new(10, 1);
    grid.render(&area.render(&content, &mut options, &nav));
    assert!(grid.attrs(0, 0).is_empty());
}

#[test]
fn render_placeholder_when_empty() {
    let area = TextArea::new();
    let content = String::new();
    let mut options = TextAreaOptions::default().with_placeholder("notes...");
    let nav = RecordingNav::default();

    let mut grid = Grid::new(12, 1);
    grid.render(&area.render(&content, &mut options, &nav));
    assert_eq!(grid.row_text(0), "notes...");
    assert!(grid.attrs(0, 0).contains(TextAttributes::DIM));
}

#[test]
fn mouse_click_resolves_row_then_column() {
    let mut area = TextArea::new();
    let mut content = String::from("abc\ndefgh");
    let changes = Rc::new(Cell::new(0));
    let counter = Rc::clone(&changes);
    let mut options = TextAreaOptions::default().on_change(move || counter.set(counter.get() + 1));
    let mut nav = RecordingNav::focused();

    options.cursor_line = 0;
    options.cursor_column = 1;
    let mut grid = Grid::new(10, 2);
    grid.render(&area.render(&content, &mut options, &nav));

    let click = Event::Mouse(MouseEvent::press(3, 1, MouseButton::Left));
    assert!(area.on_event(&click, &mut content, &mut options, &mut nav));
    assert_eq!(cursor(&options), (1, 3));
    assert_eq!(changes.get(), 1);
    assert_eq!(nav.take_focus_calls, 1);
}

#[test]
fn mouse_click_clamps_row_and_column() {
    let mut area = TextArea::new();
    let mut content = String::from("abc\nd");
    let mut options = TextAreaOptions::default();
    let mut nav = RecordingNav::focused();

    let mut grid = Grid::new(10, 2);
    grid.render(&area.render(&content, &mut options, &nav));

    // click far right on the short line clamps to its length
    let click = Event::Mouse(MouseEvent::press(7, 1, MouseButton::Left));
    assert!(area.on_event(&click, &mut content, &mut options, &mut nav));
    assert_eq!(cursor(&options), (1, 1));
}

#[test]
fn mouse_click_on_cursor_position_is_not_handled() {
    let mut area = TextArea::new();
    let mut content = String::from("abc");
    let changes = Rc::new(Cell::new(0));
    let counter = Rc::clone(&changes);
    let mut options = TextAreaOptions::default().on_change(move || counter.set(counter.get() + 1));
    let mut nav = RecordingNav::focused();

    let mut grid = Grid::new(10, 1);
    grid.render(&area.render(&content, &mut options, &nav));

    let click = Event::Mouse(MouseEvent::press(0, 0, MouseButton::Left));
    assert!(!area.on_event(&click, &mut content, &mut options, &mut nav));
    assert_eq!(cursor(&options), (0, 0));
    assert_eq!(changes.get(), 0);
}

#[test]
fn mouse_outside_is_not_handled() {
    let mut area = TextArea::new();
    let mut content = String::from("abc");
    let mut options = TextAreaOptions::default();
    let mut nav = RecordingNav::focused();

    let mut grid = Grid::new(10, 1);
    grid.render(&area.render(&content, &mut options, &nav));

    let miss = Event::Mouse(MouseEvent::press(3, 5, MouseButton::Left));
    assert!(!area.on_event(&miss, &mut content, &mut options, &mut nav));
    assert!(!area.hovered());
}

#[test]
fn custom_event_is_not_handled() {
    let mut area = TextArea::new();
    let mut content = String::from("abc");
    let mut options = TextAreaOptions::default();
    let mut nav = RecordingNav::focused();

    assert!(!area.on_event(&Event::Custom, &mut content, &mut options, &mut nav));
}
