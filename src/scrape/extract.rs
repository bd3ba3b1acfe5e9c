//! Table-depth scanning and per-row track extraction.
//!
//! The scanner walks the whole document once, counting `<table>`
//! nesting and handing each inner (track-listing) table to the row
//! extractor. The extractor is a small explicit state machine: a row
//! is either being assembled or it is not, and a per-row column counter
//! decides which field a cell's text lands in. The column→field
//! assignment is carried as data in [`ColumnMap`] so the extractor can
//! be pointed at a different layout without touching the state machine.

use crate::{info, types::Track, warning};

use super::ScrapeError;
use super::text::clean_text;
use super::tokenizer::{Token, TokenError, Tokenizer};

/// 1-indexed data-column positions of the track fields. Spacer cells
/// (`rowspan`) do not count as data columns.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    pub title: usize,
    pub duration: usize,
    pub artist: usize,
}

impl Default for ColumnMap {
    /// The observed page layout: title, duration, two decorative
    /// columns with the artist in the fourth.
    fn default() -> Self {
        ColumnMap {
            title: 1,
            duration: 2,
            artist: 4,
        }
    }
}

/// Extraction settings threaded through the scan. `verbose` turns on
/// a step-by-step trace of the table walk.
#[derive(Debug, Clone, Default)]
pub struct ScrapeConfig {
    pub columns: ColumnMap,
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum RowState {
    Idle,
    InRow,
}

/// Scans a whole HTML document and collects tracks from every inner
/// table, in document order.
///
/// A failing inner table is logged and skipped; sibling tables are
/// still scanned. Reaching the end of input with nothing collected is
/// [`ScrapeError::NoTableFound`]. A token-level fault is fatal.
pub fn extract_tracks(html: &str, cfg: &ScrapeConfig) -> Result<Vec<Track>, ScrapeError> {
    let mut tokenizer = Tokenizer::new(html);
    let mut all_tracks: Vec<Track> = Vec::new();
    let mut depth: usize = 0;

    loop {
        match tokenizer.next_token() {
            Ok(None) => {
                if cfg.verbose {
                    info!("Reached end of document, found {} tracks", all_tracks.len());
                }
                if all_tracks.is_empty() {
                    return Err(ScrapeError::NoTableFound);
                }
                return Ok(all_tracks);
            }
            Err(e) => return Err(ScrapeError::Stream(e)),
            Ok(Some(Token::StartTag { name, attrs })) if name == "table" => {
                depth += 1;
                if cfg.verbose {
                    info!("Found table at depth {}", depth);
                }
                if is_inner_table(&attrs) {
                    match extract_table(&mut tokenizer, cfg) {
                        Ok(tracks) => {
                            if cfg.verbose {
                                info!("Found {} tracks in table", tracks.len());
                            }
                            all_tracks.extend(tracks);
                        }
                        Err(e) => warning!("Skipping table: {}", e),
                    }
                    // The extractor consumed this table's end tag.
                    depth = depth.saturating_sub(1);
                }
            }
            Ok(Some(Token::EndTag { name })) if name == "table" => {
                // Clamped; malformed input may close more than it opened.
                depth = depth.saturating_sub(1);
            }
            Ok(Some(_)) => {}
        }
    }
}

/// An inner table is recognized by `cellspacing="0"`, the one marker
/// that separates track listings from the page-layout tables around
/// them.
fn is_inner_table(attrs: &[(String, String)]) -> bool {
    attr_value(attrs, "cellspacing") == Some("0")
}

/// Consumes tokens from just after an inner table's start tag through
/// its matching end tag, assembling one `Track` per qualifying row.
///
/// Tables nested inside a cell raise the local depth so their end tags
/// cannot terminate the scan early. If the stream dies mid-table the
/// rows gathered so far are returned rather than thrown away.
pub fn extract_table(
    tokenizer: &mut Tokenizer,
    cfg: &ScrapeConfig,
) -> Result<Vec<Track>, ScrapeError> {
    let mut tracks: Vec<Track> = Vec::new();
    let mut current = Track::default();
    let mut state = RowState::Idle;
    let mut column: usize = 0;
    let mut depth: usize = 1;

    while depth > 0 {
        let token = match tokenizer.next_token() {
            Ok(Some(token)) => token,
            Ok(None) => {
                if !tracks.is_empty() {
                    return Ok(tracks);
                }
                return Err(ScrapeError::Stream(TokenError::UnexpectedEof {
                    context: "table",
                }));
            }
            Err(e) => {
                if !tracks.is_empty() {
                    return Ok(tracks);
                }
                return Err(ScrapeError::Stream(e));
            }
        };

        match token {
            Token::StartTag { name, attrs } => match name.as_str() {
                "table" => depth += 1,
                "tr" => {
                    // Album header rows never carry track data.
                    if !has_class(&attrs, "album") {
                        column = 0;
                        state = RowState::InRow;
                        current = Track::default();
                    }
                }
                "td" => {
                    if state != RowState::InRow {
                        continue;
                    }
                    // Spacer cells span rows and carry no column data.
                    if has_attr(&attrs, "rowspan") {
                        continue;
                    }

                    column += 1;

                    if column == cfg.columns.artist {
                        if let Some(text) = text_inside_bold(tokenizer) {
                            current.artist = clean_text(&text);
                            if cfg.verbose {
                                info!("Found artist: {}", current.artist);
                            }
                        }
                        continue;
                    }

                    // Missing text is a local condition: the field is
                    // simply left empty.
                    let Some(text) = next_text(tokenizer) else {
                        continue;
                    };
                    let text = clean_text(&text);

                    if column == cfg.columns.title {
                        if let Some((_, rest)) = text.split_once('.') {
                            current.title = clean_text(rest);
                            if cfg.verbose {
                                info!("Found title: {}", current.title);
                            }
                        }
                    } else if column == cfg.columns.duration && text.contains(':') {
                        current.duration = text;
                    }
                }
                _ => {}
            },
            Token::EndTag { name } => match name.as_str() {
                "table" => {
                    depth -= 1;
                    if depth == 0 {
                        if tracks.is_empty() {
                            return Err(ScrapeError::NoRowsInTable);
                        }
                        return Ok(tracks);
                    }
                }
                "tr" => {
                    if state == RowState::InRow
                        && !current.title.is_empty()
                        && !current.artist.is_empty()
                    {
                        tracks.push(current.clone());
                    }
                    state = RowState::Idle;
                }
                _ => {}
            },
            Token::Text(_) => {}
        }
    }

    Ok(tracks)
}

/// Skips forward to the next `<b>` start tag and reads the text inside
/// it. Gives up at end of stream.
fn text_inside_bold(tokenizer: &mut Tokenizer) -> Option<String> {
    loop {
        match tokenizer.next_token() {
            Ok(Some(Token::StartTag { name, .. })) if name == "b" => {
                return next_text(tokenizer);
            }
            Ok(Some(_)) => {}
            Ok(None) | Err(_) => return None,
        }
    }
}

/// Reads the immediately following token as text. Anything else means
/// the expected content is absent.
fn next_text(tokenizer: &mut Tokenizer) -> Option<String> {
    match tokenizer.next_token() {
        Ok(Some(Token::Text(text))) => Some(text),
        _ => None,
    }
}

fn attr_value<'a>(attrs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    attrs
        .iter()
        .find(|(attr, _)| attr == name)
        .map(|(_, value)| value.as_str())
}

fn has_attr(attrs: &[(String, String)], name: &str) -> bool {
    attrs.iter().any(|(attr, _)| attr == name)
}

fn has_class(attrs: &[(String, String)], class: &str) -> bool {
    attr_value(attrs, "class") == Some(class)
}
