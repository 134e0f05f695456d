//! HTML pages
//!
//! Pages are built with maud. Puzzle and index bodies come from the puzzle
//! authors and are inserted as-is; everything else is escaped.

use crate::catalog::Catalog;
use crate::puzzle::Puzzle;
use maud::{html, Markup, PreEscaped, DOCTYPE};

/// Stylesheet served at `/main.css`
pub const MAIN_CSS: &str = include_str!("../assets/main.css");

/// Client script served at `/main.js`
pub const MAIN_JS: &str = include_str!("../assets/main.js");

const SITE_TITLE: &str = "Poozles";

fn layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                link rel="stylesheet" href="/main.css";
            }
            body {
                header {
                    a href="/" { (SITE_TITLE) }
                }
                main { (content) }
                script src="/main.js" {}
            }
        }
    }
}

/// Landing page
pub fn index_page(catalog: &Catalog) -> Markup {
    layout(SITE_TITLE, html! { (PreEscaped(catalog.index())) })
}

/// Page of a single puzzle, served at `/puzzles/<id>/`
pub fn puzzle_page(puzzle: &Puzzle) -> Markup {
    puzzle_markup(puzzle, true)
}

/// Puzzle page for a static export, without the guess form, hints or logs
pub fn static_puzzle_page(puzzle: &Puzzle) -> Markup {
    puzzle_markup(puzzle, false)
}

fn puzzle_markup(puzzle: &Puzzle, live: bool) -> Markup {
    let content = html! {
        h1 { (puzzle.title()) }
        article id="content" { (PreEscaped(&puzzle.content)) }
        @if !puzzle.files.is_empty() {
            section class="files" {
                h2 { "Files" }
                ul {
                    @for file in &puzzle.files {
                        li { a href=(file) download { (file) } }
                    }
                }
            }
        }
        @if live {
            form id="input" method="post" action="/guess" {
                input type="hidden" name="puzzle" value=(puzzle.id);
                input type="text" name="guess" autocomplete="off" autofocus;
                button type="submit" { "Guess" }
            }
            @if !puzzle.metadata.hints.is_empty() {
                section class="hints" {
                    h2 { "Hints" }
                    ol id="hints" {
                        @for i in 0..puzzle.metadata.hint_count() {
                            li { "Reveal hint " (i + 1) }
                        }
                    }
                }
            }
            section class="log" {
                h2 { "Unlocks" }
                div id="unlocks" {}
                h2 { "Guesses" }
                div id="guesses" {}
            }
        } @else {
            p class="offline" { "Guessing and hints need the live server." }
        }
    };
    layout(puzzle.title(), content)
}

/// Page for unknown routes, puzzles and files
pub fn not_found_page() -> Markup {
    layout(
        "Not found",
        html! {
            h1 { "Not found" }
            p { "There is nothing here. " a href="/" { "Back to the start" } "." }
        },
    )
}
