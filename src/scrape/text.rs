//! Text normalization for extracted cell content.
//!
//! Cell text arrives raw from the tokenizer: HTML character references
//! are still encoded and the surrounding markup usually leaves stray
//! whitespace. [`clean_text`] is the single normalization point applied
//! to every value before it is stored on a `Track`.

/// Decodes HTML character references, then trims surrounding whitespace.
///
/// Pure and deterministic. Re-applying it to already-normalized text is
/// a no-op, so callers may normalize defensively at more than one layer.
pub fn clean_text(text: &str) -> String {
    decode_entities(text).trim().to_string()
}

/// Replaces named (`&eacute;`) and numeric (`&#233;`, `&#xE9;`) character
/// references with their characters. Unknown or malformed references are
/// passed through untouched.
fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let bytes = text.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'&' {
            let ch = text[i..].chars().next().unwrap_or('\u{fffd}');
            out.push(ch);
            i += ch.len_utf8();
            continue;
        }

        // A reference is at most a short run ending in ';'.
        let rest = &text[i + 1..];
        let semi = rest
            .char_indices()
            .take(32)
            .find(|&(_, c)| c == ';')
            .map(|(idx, _)| idx);

        match semi {
            Some(end) => {
                let name = &rest[..end];
                match decode_reference(name) {
                    Some(ch) => {
                        out.push(ch);
                        i += 1 + end + 1;
                    }
                    None => {
                        out.push('&');
                        i += 1;
                    }
                }
            }
            None => {
                out.push('&');
                i += 1;
            }
        }
    }

    out
}

fn decode_reference(name: &str) -> Option<char> {
    if let Some(num) = name.strip_prefix('#') {
        let code = if let Some(hex) = num.strip_prefix('x').or_else(|| num.strip_prefix('X')) {
            u32::from_str_radix(hex, 16).ok()?
        } else {
            num.parse::<u32>().ok()?
        };
        return char::from_u32(code);
    }
    named_entity(name)
}

/// The named references seen on the target page plus the usual suspects.
/// Not a full HTML5 entity table; unknown names fall through undecoded.
fn named_entity(name: &str) -> Option<char> {
    let ch = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        "copy" => '©',
        "reg" => '®',
        "trade" => '™',
        "hellip" => '…',
        "ndash" => '–',
        "mdash" => '—',
        "lsquo" => '\u{2018}',
        "rsquo" => '\u{2019}',
        "ldquo" => '\u{201c}',
        "rdquo" => '\u{201d}',
        "agrave" => 'à',
        "aacute" => 'á',
        "acirc" => 'â',
        "atilde" => 'ã',
        "auml" => 'ä',
        "aring" => 'å',
        "aelig" => 'æ',
        "ccedil" => 'ç',
        "egrave" => 'è',
        "eacute" => 'é',
        "ecirc" => 'ê',
        "euml" => 'ë',
        "igrave" => 'ì',
        "iacute" => 'í',
        "icirc" => 'î',
        "iuml" => 'ï',
        "ntilde" => 'ñ',
        "ograve" => 'ò',
        "oacute" => 'ó',
        "ocirc" => 'ô',
        "otilde" => 'õ',
        "ouml" => 'ö',
        "oslash" => 'ø',
        "ugrave" => 'ù',
        "uacute" => 'ú',
        "ucirc" => 'û',
        "uuml" => 'ü',
        "yacute" => 'ý',
        "yuml" => 'ÿ',
        "szlig" => 'ß',
        "Agrave" => 'À',
        "Aacute" => 'Á',
        "Auml" => 'Ä',
        "Aring" => 'Å',
        "AElig" => 'Æ',
        "Ccedil" => 'Ç',
        "Egrave" => 'È',
        "Eacute" => 'É',
        "Ntilde" => 'Ñ',
        "Ouml" => 'Ö',
        "Oslash" => 'Ø',
        "Uuml" => 'Ü',
        _ => return None,
    };
    Some(ch)
}
