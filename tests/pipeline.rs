//! End-to-end conversions through the facade

use rulebook::{build, convert, convert_with, BuildError, FormatRegistry, HtmlOptions, ParserError};
use std::fs;
use std::io::{self, Cursor, Write};
use std::path::PathBuf;

fn sample(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("docs")
        .join("samples")
        .join(name);
    fs::read_to_string(path).expect("Failed to read sample document")
}

fn no_toc() -> HtmlOptions {
    HtmlOptions {
        table_of_contents: false,
        ..Default::default()
    }
}

#[test]
fn test_kitchensink() {
    let html = convert(&sample("kitchensink.rulebook"), &no_toc()).unwrap();
    insta::assert_snapshot!(html, @r"
    <p>
    Welcome to <strong>Dungeon Rules</strong>. Read <a href='#combat'>the combat chapter</a> first.
    </p>
    <h3><a name='conventions'></a>Conventions</h3>
    <p class='indent'>
    Dice are written <em>d6</em> or <em>d20</em>.
    </p>
    <h2><a id='combat'></a>I - Combat</h2>
    <p class='indent'>
    Each round:
    </p>
    <ol class='roman'>

    <li>
    <p>
    roll initiative
    </p>

    </li>

    <li>
    <p>
    act in <strong>order</strong>
    </p>

    </li>
    </ol>

    <img class='illustration float-right' src='images/sword.png' alt='A sword' width='120'/><table>
    <thead>
    <tr>
    <th colspan='3'>Weapons</th>
    </tr>
    </thead>
    <tbody>
    <tr>
    <td class='head'>Weapon</td>
    <td class='head'>Damage</td>
    <td class='head'>Weight</td>
    </tr>
    <tr>
    <td class='head'>Sword</td>
    <td class='lead'>d8</td>
    <td class='lead'>3</td>
    </tr>
    <tr>
    <td class='head'>Dagger</td>
    <td class='lead'>d4</td>
    <td class='lead'>1</td>
    </tr>
    </tbody>
    </table>
    <h3><a name='damage'></a>Damage</h3>
    <p class='indent'>
    Subtract from <span style='color: #cc0000'>hit points</span>.
    </p>
    <div class='annex'>
    <h2><a name='annex-spell-list'></a>Annexe A: Spell List</h2>
    <p class='indent'>
    Fireball and <em>Frost</em>.
    </p>
    </div>
    ");
}

#[test]
fn test_kitchensink_summary() {
    let html = convert(&sample("kitchensink.rulebook"), &HtmlOptions::default()).unwrap();
    assert!(html.starts_with("<div id='summary'>\n<h3>Table des matières</h3>\n"));
    assert!(html.contains("<li><a href='#conventions'>Conventions</a></li>\n"));
    assert!(html.contains(
        "<li><strong>I</strong> - <a href='#combat'>Combat</a></li>\n\
         <ol class='roman'>\n\
         <li><a href='#damage'>Damage</a></li>\n\
         </ol>\n"
    ));
    assert!(html.contains(
        "<li><strong>Annexe A</strong>: <a href='#annex-spell-list'>Spell List</a></li>\n"
    ));
}

#[test]
fn test_chapter_example() {
    let html = convert("#Intro\nHello *world*.\n", &no_toc()).unwrap();
    assert_eq!(
        html,
        "<h2><a id='intro'></a>I - Intro</h2>\n<p class='indent'>\nHello <strong>world</strong>.\n</p>\n"
    );
}

#[test]
fn test_image_example() {
    let html = convert("\\img(pic.png, A cat, left, w200)", &no_toc()).unwrap();
    assert_eq!(
        html,
        "<img class='illustration float-left' src='pic.png' alt='A cat' width='200'/>"
    );
}

#[test]
fn test_unclosed_command_is_a_parse_error() {
    let err = convert("Intro\n\\img(pic.png, A cat", &no_toc()).unwrap_err();
    match err {
        BuildError::Parse(ParserError::Lex { line, .. }) => assert_eq!(line, 2),
        other => panic!("Expected a lexing error, got {other:?}"),
    }
}

#[test]
fn test_build_writes_the_whole_document() {
    let mut output = Vec::new();
    build(Cursor::new("Hello"), &mut output, &no_toc()).unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), "<p>\nHello\n</p>\n");
}

#[test]
fn test_build_writes_nothing_on_lex_error() {
    let mut output = Vec::new();
    let result = build(Cursor::new("Hello\n[broken"), &mut output, &no_toc());
    assert!(matches!(result, Err(BuildError::Parse(_))));
    assert!(output.is_empty());
}

#[test]
fn test_build_replaces_invalid_utf8() {
    let mut output = Vec::new();
    build(Cursor::new(&b"Caf\xe9 au lait"[..]), &mut output, &no_toc()).unwrap();
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "<p>\nCaf\u{FFFD} au lait\n</p>\n"
    );
}

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_build_surfaces_sink_errors() {
    let result = build(Cursor::new("Hello"), BrokenPipe, &no_toc());
    assert!(matches!(result, Err(BuildError::Io(_))));
}

#[test]
fn test_convert_with_registry_formats() {
    let registry = FormatRegistry::with_defaults();

    let tag = convert_with("#Combat\n", "tag", &registry).unwrap();
    assert!(tag.starts_with("<document>\n  <chapter>Combat\n"));

    let err = convert_with("#Combat\n", "pdf", &registry).unwrap_err();
    assert_eq!(err.to_string(), "Format 'pdf' not found");
}
