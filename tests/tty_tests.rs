//! Line editor state machine tests
//!
//! Drives the Tty byte by byte through a String sink, the way the console
//! loop does over the UART.

use rshell_arm::ShellResult;
use rshell_arm::config::PROMPT;
use rshell_arm::console::line_buffer::LineBuffer;
use rshell_arm::console::tty::Tty;
use rshell_arm::drivers::mailbox::{BoardQuery, PropertyTag, PropertyWords};

struct NullBoard;

impl BoardQuery for NullBoard {
    fn query(&mut self, _tag: PropertyTag, _args: &[u32]) -> ShellResult<PropertyWords> {
        anyhow::bail!("no board under test")
    }
}

fn feed(tty: &mut Tty, out: &mut String, bytes: &[u8]) {
    let mut board = NullBoard;
    for &b in bytes {
        tty.handle_byte(b, out, &mut board);
    }
}

const UP: &[u8] = b"\x1b[A";
const DOWN: &[u8] = b"\x1b[B";

#[test]
fn test_printable_bytes_accumulate_and_echo() {
    let mut tty = Tty::new();
    let mut out = String::new();
    feed(&mut tty, &mut out, b"help");
    assert_eq!(tty.line(), "help");
    assert_eq!(out, "help");
}

#[test]
fn test_prompt_emitted_once_per_line() {
    let mut tty = Tty::new();
    let mut out = String::new();

    tty.prompt_if_needed(&mut out);
    assert_eq!(out, PROMPT);

    // Mid-line, no re-emission.
    tty.prompt_if_needed(&mut out);
    assert_eq!(out, PROMPT);

    feed(&mut tty, &mut out, b"\r");
    out.clear();
    tty.prompt_if_needed(&mut out);
    assert_eq!(out, PROMPT);
}

#[test]
fn test_buffer_full_drops_bytes_without_echo() {
    let mut tty = Tty::new();
    let mut out = String::new();
    let long = vec![b'a'; LineBuffer::CAPACITY + 50];
    feed(&mut tty, &mut out, &long);

    assert_eq!(tty.line().len(), LineBuffer::CAPACITY);
    assert_eq!(out.matches('a').count(), LineBuffer::CAPACITY);
}

#[test]
fn test_backspace_erases_one_cell() {
    let mut tty = Tty::new();
    let mut out = String::new();
    feed(&mut tty, &mut out, b"ab\x7f");
    assert_eq!(tty.line(), "a");
    assert_eq!(out, "ab\x08 \x08");
}

#[test]
fn test_backspace_on_empty_line_is_a_noop() {
    let mut tty = Tty::new();
    let mut out = String::new();
    feed(&mut tty, &mut out, &[0x08, 0x08, 0x7F]);
    assert_eq!(tty.line(), "");
    assert!(out.is_empty());
}

#[test]
fn test_submit_dispatches_and_resets() {
    let mut tty = Tty::new();
    let mut out = String::new();
    feed(&mut tty, &mut out, b"help\r");

    assert!(out.contains("Available commands"));
    assert_eq!(tty.line(), "");
    assert_eq!(tty.history().len(), 1);
}

#[test]
fn test_empty_submission_still_occupies_a_history_slot() {
    let mut tty = Tty::new();
    let mut out = String::new();
    feed(&mut tty, &mut out, b"\r");

    assert_eq!(tty.history().len(), 1);
    let all: Vec<&str> = tty.history().entries().collect();
    assert_eq!(all, [""]);
}

#[test]
fn test_unknown_command_keeps_the_loop_alive() {
    let mut tty = Tty::new();
    let mut out = String::new();
    feed(&mut tty, &mut out, b"bogus\r");
    assert!(out.contains("Unknown command: bogus"));

    out.clear();
    feed(&mut tty, &mut out, b"help\r");
    assert!(out.contains("Available commands"));
}

#[test]
fn test_handler_failure_leaves_editor_usable() {
    let mut tty = Tty::new();
    let mut out = String::new();
    // NullBoard fails the query; the error is reported, not fatal.
    feed(&mut tty, &mut out, b"showinfo\r");

    out.clear();
    feed(&mut tty, &mut out, b"help\r");
    assert!(out.contains("Available commands"));
}

#[test]
fn test_up_arrow_recalls_previous_line() {
    let mut tty = Tty::new();
    let mut out = String::new();
    feed(&mut tty, &mut out, b"history\r");

    out.clear();
    feed(&mut tty, &mut out, UP);
    assert_eq!(tty.line(), "history");
    assert!(out.ends_with("history"));
}

#[test]
fn test_arrows_walk_older_then_back_to_empty() {
    let mut tty = Tty::new();
    let mut out = String::new();
    for line in [&b"one\r"[..], b"two\r", b"three\r"] {
        feed(&mut tty, &mut out, line);
    }

    feed(&mut tty, &mut out, UP);
    assert_eq!(tty.line(), "three");
    feed(&mut tty, &mut out, UP);
    assert_eq!(tty.line(), "two");
    feed(&mut tty, &mut out, UP);
    assert_eq!(tty.line(), "one");
    // At the oldest entry the position pins.
    feed(&mut tty, &mut out, UP);
    assert_eq!(tty.line(), "one");

    feed(&mut tty, &mut out, DOWN);
    assert_eq!(tty.line(), "two");
    feed(&mut tty, &mut out, DOWN);
    assert_eq!(tty.line(), "three");
    // Past the newest entry the line clears.
    feed(&mut tty, &mut out, DOWN);
    assert_eq!(tty.line(), "");
}

#[test]
fn test_down_arrow_without_browsing_is_a_noop() {
    let mut tty = Tty::new();
    let mut out = String::new();
    feed(&mut tty, &mut out, b"help\r");

    out.clear();
    feed(&mut tty, &mut out, DOWN);
    assert_eq!(tty.line(), "");
    assert!(out.is_empty());
}

#[test]
fn test_recall_replaces_partial_input() {
    let mut tty = Tty::new();
    let mut out = String::new();
    feed(&mut tty, &mut out, b"setcolor -t red\r");

    feed(&mut tty, &mut out, b"hel");
    out.clear();
    feed(&mut tty, &mut out, UP);
    assert_eq!(tty.line(), "setcolor -t red");
    // The repaint erases the three old cells before printing.
    assert!(out.starts_with("\x08\x08\x08   \x08\x08\x08"));
}

#[test]
fn test_typing_resets_the_browse_position() {
    let mut tty = Tty::new();
    let mut out = String::new();
    for line in [&b"first\r"[..], b"second\r"] {
        feed(&mut tty, &mut out, line);
    }

    feed(&mut tty, &mut out, UP);
    assert_eq!(tty.line(), "second");
    feed(&mut tty, &mut out, b"x");

    // Browsing starts over from the newest entry.
    feed(&mut tty, &mut out, UP);
    assert_eq!(tty.line(), "second");
}

#[test]
fn test_tab_completes_first_prefix_match() {
    let mut tty = Tty::new();
    let mut out = String::new();
    feed(&mut tty, &mut out, b"he\t");
    assert_eq!(tty.line(), "help");
    assert_eq!(tty.line().len(), 4);
}

#[test]
fn test_tab_with_no_match_changes_nothing() {
    let mut tty = Tty::new();
    let mut out = String::new();
    feed(&mut tty, &mut out, b"zz");
    out.clear();
    feed(&mut tty, &mut out, b"\t");
    assert_eq!(tty.line(), "zz");
    assert!(out.is_empty());
}

#[test]
fn test_tab_on_empty_line_selects_first_registry_entry() {
    let mut tty = Tty::new();
    let mut out = String::new();
    feed(&mut tty, &mut out, b"\t");
    assert_eq!(tty.line(), "help");
}

#[test]
fn test_completed_line_dispatches() {
    let mut tty = Tty::new();
    let mut out = String::new();
    feed(&mut tty, &mut out, b"cl\t\r");
    assert!(out.contains("\x1b[2J"));
}

#[test]
fn test_stray_escape_swallows_one_byte() {
    let mut tty = Tty::new();
    let mut out = String::new();
    // ESC followed by something other than '[' cancels the sequence; the
    // following byte is consumed by the decoder.
    feed(&mut tty, &mut out, b"\x1bXab");
    assert_eq!(tty.line(), "ab");
}

#[test]
fn test_greeting_banner() {
    let tty = Tty::new();
    let mut out = String::new();
    tty.greet(&mut out);
    assert!(out.contains("help"));
}
