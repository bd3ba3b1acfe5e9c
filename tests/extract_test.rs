use tracklift::scrape::{
    ColumnMap, ScrapeConfig, ScrapeError, Tokenizer, clean_text, extract_table, extract_tracks,
};
use tracklift::types::Track;

fn config() -> ScrapeConfig {
    ScrapeConfig::default()
}

// Helper to build one track row in the observed page layout: spacer,
// title, duration, filler, bold artist.
fn track_row(title: &str, duration: &str, artist: &str) -> String {
    format!(
        "<tr>\n<td rowspan=\"12\"><img src=\"cover.jpg\"></td>\n\
         <td>{}</td>\n<td>{}</td>\n<td></td>\n<td><b>{}</b></td>\n</tr>\n",
        title, duration, artist
    )
}

fn inner_table(rows: &str) -> String {
    format!("<table cellspacing=\"0\">\n{}</table>\n", rows)
}

fn page(body: &str) -> String {
    format!(
        "<html><body>\n<table cellspacing=\"2\">\n<tr><td>\n{}</td></tr>\n</table>\n</body></html>",
        body
    )
}

#[test]
fn test_extracts_qualifying_rows_in_document_order() {
    let rows = format!(
        "{}{}",
        track_row("1. Song One", "03:21", "Band A"),
        track_row("2. Song Two", "04:10", "Band B")
    );
    let html = page(&inner_table(&rows));

    let tracks = extract_tracks(&html, &config()).unwrap();

    assert_eq!(
        tracks,
        vec![
            Track {
                title: "Song One".to_string(),
                artist: "Band A".to_string(),
                duration: "03:21".to_string(),
            },
            Track {
                title: "Song Two".to_string(),
                artist: "Band B".to_string(),
                duration: "04:10".to_string(),
            },
        ]
    );
}

#[test]
fn test_no_inner_table_yields_no_table_found() {
    let html = "<html><body><table cellspacing=\"2\"><tr><td>layout only</td></tr></table></body></html>";
    let result = extract_tracks(html, &config());
    assert!(matches!(result, Err(ScrapeError::NoTableFound)));
}

#[test]
fn test_document_without_tables_yields_no_table_found() {
    let html = "<html><body><p>nothing here</p></body></html>";
    let result = extract_tracks(html, &config());
    assert!(matches!(result, Err(ScrapeError::NoTableFound)));
}

#[test]
fn test_album_header_row_is_never_emitted() {
    let rows = format!(
        "<tr class=\"album\"><td colspan=\"5\"><b>Various - Compilation</b></td></tr>\n{}",
        track_row("1. Song One", "03:21", "Band A")
    );
    let html = page(&inner_table(&rows));

    let tracks = extract_tracks(&html, &config()).unwrap();

    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].title, "Song One");
}

#[test]
fn test_album_only_table_yields_no_rows() {
    // Positioned just after the inner table's start tag, the row
    // extractor reports the empty table itself.
    let mut tokenizer = Tokenizer::new(
        "<tr class=\"album\"><td colspan=\"5\"><b>Some Album</b></td></tr></table>",
    );
    let result = extract_table(&mut tokenizer, &config());
    assert!(matches!(result, Err(ScrapeError::NoRowsInTable)));
}

#[test]
fn test_row_without_title_is_skipped() {
    // No "." separator in the first column means no title.
    let rows = format!(
        "{}{}",
        track_row("Intermission", "01:00", "Band X"),
        track_row("2. Song Two", "04:10", "Band B")
    );
    let html = page(&inner_table(&rows));

    let tracks = extract_tracks(&html, &config()).unwrap();

    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].title, "Song Two");
    assert_eq!(tracks[0].artist, "Band B");
}

#[test]
fn test_row_without_artist_is_skipped() {
    let rows = format!(
        "{}{}",
        track_row("1. Song One", "03:21", ""),
        track_row("2. Song Two", "04:10", "Band B")
    );
    let html = page(&inner_table(&rows));

    let tracks = extract_tracks(&html, &config()).unwrap();

    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].title, "Song Two");
}

#[test]
fn test_spacer_cell_does_not_advance_columns() {
    // Same row with and without the rowspan spacer must map columns
    // identically.
    let with_spacer = page(&inner_table(&track_row("1. Song One", "03:21", "Band A")));
    let without_spacer = page(&inner_table(
        "<tr><td>1. Song One</td><td>03:21</td><td></td><td><b>Band A</b></td></tr>",
    ));

    let a = extract_tracks(&with_spacer, &config()).unwrap();
    let b = extract_tracks(&without_spacer, &config()).unwrap();

    assert_eq!(a, b);
}

#[test]
fn test_nested_table_does_not_terminate_outer_table() {
    let rows = format!(
        "<tr class=\"album\"><td><table><tr><td><img src=\"badge.gif\"></td></tr></table></td></tr>\n{}{}",
        track_row("1. Song One", "03:21", "Band A"),
        track_row("2. Song Two", "04:10", "Band B")
    );
    let html = page(&inner_table(&rows));

    let tracks = extract_tracks(&html, &config()).unwrap();

    // Both rows after the nested table survive; the outer table only
    // ends at its own end tag.
    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[1].title, "Song Two");
}

#[test]
fn test_sibling_inner_tables_are_concatenated() {
    let body = format!(
        "{}{}",
        inner_table(&track_row("1. Song One", "03:21", "Band A")),
        inner_table(&track_row("1. Opening", "02:45", "Band C"))
    );
    let html = page(&body);

    let tracks = extract_tracks(&html, &config()).unwrap();

    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0].artist, "Band A");
    assert_eq!(tracks[1].artist, "Band C");
}

#[test]
fn test_failing_table_does_not_abort_siblings() {
    // First inner table has no rows at all; the second still yields
    // its track.
    let body = format!(
        "<table cellspacing=\"0\"></table>\n{}",
        inner_table(&track_row("1. Song One", "03:21", "Band A"))
    );
    let html = page(&body);

    let tracks = extract_tracks(&html, &config()).unwrap();

    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].title, "Song One");
}

#[test]
fn test_duration_without_colon_is_ignored() {
    let html = page(&inner_table(&track_row("1. Song One", "345", "Band A")));

    let tracks = extract_tracks(&html, &config()).unwrap();

    assert_eq!(tracks[0].duration, "");
}

#[test]
fn test_entities_are_decoded_in_fields() {
    let html = page(&inner_table(&track_row(
        "3. Caf&eacute; Bleu",
        "02:58",
        "Beyonc&eacute;",
    )));

    let tracks = extract_tracks(&html, &config()).unwrap();

    assert_eq!(tracks[0].title, "Café Bleu");
    assert_eq!(tracks[0].artist, "Beyoncé");
}

#[test]
fn test_truncated_table_returns_partial_rows() {
    // Stream dies after one complete row; that row is kept.
    let html = format!(
        "<table cellspacing=\"0\">\n{}",
        track_row("1. Song One", "03:21", "Band A")
    );

    let tracks = extract_tracks(&html, &config()).unwrap();

    assert_eq!(tracks.len(), 1);
}

#[test]
fn test_truncated_table_with_no_rows_is_no_table_found() {
    let html = "<table cellspacing=\"0\"><tr><td>";
    let result = extract_tracks(html, &config());
    assert!(matches!(result, Err(ScrapeError::NoTableFound)));
}

#[test]
fn test_column_map_can_be_retargeted() {
    // Synthetic layout: junk column first, then title/duration/artist.
    let cfg = ScrapeConfig {
        columns: ColumnMap {
            title: 2,
            duration: 3,
            artist: 4,
        },
        verbose: false,
    };
    let html = page(&inner_table(
        "<tr><td>junk</td><td>7. Tune</td><td>02:02</td><td><b>Someone</b></td></tr>",
    ));

    let tracks = extract_tracks(&html, &cfg).unwrap();

    assert_eq!(
        tracks,
        vec![Track {
            title: "Tune".to_string(),
            artist: "Someone".to_string(),
            duration: "02:02".to_string(),
        }]
    );
}

#[test]
fn test_clean_text_decodes_and_trims() {
    assert_eq!(clean_text("  1. Caf&eacute;  "), "1. Café");
    assert_eq!(clean_text("&#233;"), "é");
    assert_eq!(clean_text("&#xE9;"), "é");
    assert_eq!(clean_text("Band&nbsp;A"), "Band\u{a0}A");
    assert_eq!(clean_text("&unknown;"), "&unknown;");
    assert_eq!(clean_text("A &amp; B"), "A & B");
}

#[test]
fn test_clean_text_is_idempotent() {
    let inputs = [
        "  1. Caf&eacute;  ",
        "Beyonc&eacute;",
        "plain text",
        "A &amp; B",
        "  padded  ",
        "",
    ];
    for input in inputs {
        let once = clean_text(input);
        let twice = clean_text(&once);
        assert_eq!(once, twice, "normalizing {:?} twice changed the result", input);
    }
}
