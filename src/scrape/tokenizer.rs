//! A minimal pull-based HTML tokenizer.
//!
//! This is not a general HTML5 parser. It produces just enough of a
//! forward-only token stream (start tags with attributes, end tags,
//! and text runs) for the table scanner to walk one document in a
//! single pass with O(depth) memory. Comments, doctypes and processing
//! instructions are skipped. `<script>` and `<style>` bodies are
//! treated as raw text so markup-looking content inside them cannot be
//! mistaken for tags. Character references are left encoded; decoding
//! is the normalizer's job.

/// One unit of the token stream. Owned per iteration; the tokenizer
/// keeps no backing tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    StartTag {
        name: String,
        attrs: Vec<(String, String)>,
    },
    EndTag {
        name: String,
    },
    Text(String),
}

/// A construct the scan cannot get past. Clean end of input is not an
/// error; `next_token` signals it with `Ok(None)`.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenError {
    UnexpectedEof { context: &'static str },
}

impl std::fmt::Display for TokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenError::UnexpectedEof { context } => {
                write!(f, "unexpected end of input inside {}", context)
            }
        }
    }
}

impl std::error::Error for TokenError {}

pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
    /// Set after emitting the start tag of a raw-text element; the next
    /// call returns its body verbatim.
    rawtext: Option<String>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Tokenizer {
            input,
            pos: 0,
            rawtext: None,
        }
    }

    /// Pulls the next token. Returns `Ok(None)` once the input is
    /// exhausted.
    pub fn next_token(&mut self) -> Result<Option<Token>, TokenError> {
        if let Some(element) = self.rawtext.take() {
            if let Some(text) = self.rawtext_body(&element) {
                return Ok(Some(Token::Text(text)));
            }
        }

        loop {
            if self.pos >= self.input.len() {
                return Ok(None);
            }

            let rest = &self.input[self.pos..];
            if !rest.starts_with('<') {
                return Ok(Some(Token::Text(self.text_run())));
            }

            if rest.starts_with("<!--") {
                self.skip_comment()?;
                continue;
            }
            if rest.starts_with("<!") || rest.starts_with("<?") {
                self.skip_declaration();
                continue;
            }
            if rest.starts_with("</") {
                return self.end_tag().map(Some);
            }

            let after = rest[1..].chars().next();
            if after.is_some_and(|c| c.is_ascii_alphabetic()) {
                return self.start_tag().map(Some);
            }

            // A lone '<' that opens nothing is part of the text.
            return Ok(Some(Token::Text(self.text_run_from_lt())));
        }
    }

    fn text_run(&mut self) -> String {
        let rest = &self.input[self.pos..];
        let end = rest.find('<').unwrap_or(rest.len());
        let text = rest[..end].to_string();
        self.pos += end;
        text
    }

    fn text_run_from_lt(&mut self) -> String {
        let rest = &self.input[self.pos..];
        let end = rest[1..].find('<').map(|i| i + 1).unwrap_or(rest.len());
        let text = rest[..end].to_string();
        self.pos += end;
        text
    }

    fn skip_comment(&mut self) -> Result<(), TokenError> {
        let rest = &self.input[self.pos + 4..];
        match rest.find("-->") {
            Some(end) => {
                self.pos += 4 + end + 3;
                Ok(())
            }
            None => {
                self.pos = self.input.len();
                Err(TokenError::UnexpectedEof { context: "comment" })
            }
        }
    }

    fn skip_declaration(&mut self) {
        let rest = &self.input[self.pos..];
        match rest.find('>') {
            Some(end) => self.pos += end + 1,
            None => self.pos = self.input.len(),
        }
    }

    fn end_tag(&mut self) -> Result<Token, TokenError> {
        let rest = &self.input[self.pos + 2..];
        match rest.find('>') {
            Some(end) => {
                let name = lower(rest[..end].trim());
                self.pos += 2 + end + 1;
                Ok(Token::EndTag { name })
            }
            None => {
                self.pos = self.input.len();
                Err(TokenError::UnexpectedEof { context: "end tag" })
            }
        }
    }

    fn start_tag(&mut self) -> Result<Token, TokenError> {
        let bytes = self.input.as_bytes();
        let mut i = self.pos + 1;

        let name_start = i;
        while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'-') {
            i += 1;
        }
        let name = lower(&self.input[name_start..i]);

        let mut attrs: Vec<(String, String)> = Vec::new();
        let mut self_closing = false;

        loop {
            while i < bytes.len() && (bytes[i].is_ascii_whitespace() || bytes[i] == b'/') {
                if bytes[i] == b'/' {
                    self_closing = true;
                }
                i += 1;
            }
            if i >= bytes.len() {
                self.pos = self.input.len();
                return Err(TokenError::UnexpectedEof { context: "tag" });
            }
            if bytes[i] == b'>' {
                i += 1;
                break;
            }

            self_closing = false;
            let attr_start = i;
            while i < bytes.len()
                && !bytes[i].is_ascii_whitespace()
                && bytes[i] != b'='
                && bytes[i] != b'>'
                && bytes[i] != b'/'
            {
                i += 1;
            }
            let attr_name = lower(&self.input[attr_start..i]);

            while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                i += 1;
            }

            let mut value = String::new();
            if i < bytes.len() && bytes[i] == b'=' {
                i += 1;
                while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                    i += 1;
                }
                if i < bytes.len() && (bytes[i] == b'"' || bytes[i] == b'\'') {
                    let quote = bytes[i];
                    i += 1;
                    let value_start = i;
                    while i < bytes.len() && bytes[i] != quote {
                        i += 1;
                    }
                    if i >= bytes.len() {
                        self.pos = self.input.len();
                        return Err(TokenError::UnexpectedEof { context: "attribute" });
                    }
                    value = self.input[value_start..i].to_string();
                    i += 1;
                } else {
                    let value_start = i;
                    while i < bytes.len()
                        && !bytes[i].is_ascii_whitespace()
                        && bytes[i] != b'>'
                    {
                        i += 1;
                    }
                    value = self.input[value_start..i].to_string();
                }
            }

            if !attr_name.is_empty() {
                attrs.push((attr_name, value));
            }
        }

        self.pos = i;

        if !self_closing && (name == "script" || name == "style") {
            self.rawtext = Some(name.clone());
        }

        Ok(Token::StartTag { name, attrs })
    }

    /// Consumes up to the matching close tag of a raw-text element and
    /// returns the body, or `None` when the body is empty. The close tag
    /// itself is left in the stream for the next call.
    fn rawtext_body(&mut self, element: &str) -> Option<String> {
        let rest = &self.input[self.pos..];
        let needle = format!("</{}", element);
        let haystack = rest.to_ascii_lowercase();
        let end = haystack.find(&needle).unwrap_or(rest.len());
        let body = rest[..end].to_string();
        self.pos += end;
        if body.is_empty() { None } else { Some(body) }
    }
}

fn lower(s: &str) -> String {
    s.to_ascii_lowercase()
}
