use tracklift::scrape::{Token, TokenError, Tokenizer};

fn collect(input: &str) -> Vec<Token> {
    let mut tokenizer = Tokenizer::new(input);
    let mut tokens = Vec::new();
    while let Ok(Some(token)) = tokenizer.next_token() {
        tokens.push(token);
    }
    tokens
}

fn start_tag(name: &str, attrs: &[(&str, &str)]) -> Token {
    Token::StartTag {
        name: name.to_string(),
        attrs: attrs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    }
}

fn end_tag(name: &str) -> Token {
    Token::EndTag {
        name: name.to_string(),
    }
}

fn text(content: &str) -> Token {
    Token::Text(content.to_string())
}

#[test]
fn test_tags_and_text() {
    let tokens = collect("<p class=\"x\">Hi</p>");
    assert_eq!(
        tokens,
        vec![start_tag("p", &[("class", "x")]), text("Hi"), end_tag("p")]
    );
}

#[test]
fn test_attribute_quoting_variants() {
    let tokens = collect("<td rowspan='2' colspan=3 nowrap>");
    assert_eq!(
        tokens,
        vec![start_tag(
            "td",
            &[("rowspan", "2"), ("colspan", "3"), ("nowrap", "")]
        )]
    );
}

#[test]
fn test_names_are_lowercased() {
    let tokens = collect("<TABLE CELLSPACING=\"0\"></TABLE>");
    assert_eq!(
        tokens,
        vec![start_tag("table", &[("cellspacing", "0")]), end_tag("table")]
    );
}

#[test]
fn test_comments_are_skipped() {
    let tokens = collect("a<!-- <table> ignore -->b");
    assert_eq!(tokens, vec![text("a"), text("b")]);
}

#[test]
fn test_doctype_is_skipped() {
    let tokens = collect("<!DOCTYPE html><p>");
    assert_eq!(tokens, vec![start_tag("p", &[])]);
}

#[test]
fn test_script_body_is_raw_text() {
    let tokens = collect("<script>var t = \"<table cellspacing=0>\";</script><td>");
    assert_eq!(
        tokens,
        vec![
            start_tag("script", &[]),
            text("var t = \"<table cellspacing=0>\";"),
            end_tag("script"),
            start_tag("td", &[]),
        ]
    );
}

#[test]
fn test_self_closing_tag() {
    let tokens = collect("<img src=\"x.gif\"/><br/>");
    assert_eq!(
        tokens,
        vec![start_tag("img", &[("src", "x.gif")]), start_tag("br", &[])]
    );
}

#[test]
fn test_lone_angle_bracket_is_text() {
    let tokens = collect("a < b <i>");
    assert_eq!(tokens, vec![text("a "), text("< b "), start_tag("i", &[])]);
}

#[test]
fn test_end_tag_with_whitespace() {
    let tokens = collect("</table >");
    assert_eq!(tokens, vec![end_tag("table")]);
}

#[test]
fn test_entities_stay_encoded() {
    // Decoding belongs to the normalizer, not the tokenizer.
    let tokens = collect("<td>Caf&eacute;</td>");
    assert_eq!(
        tokens,
        vec![start_tag("td", &[]), text("Caf&eacute;"), end_tag("td")]
    );
}

#[test]
fn test_unterminated_tag_is_an_error() {
    let mut tokenizer = Tokenizer::new("<td class=");
    let result = tokenizer.next_token();
    assert!(matches!(
        result,
        Err(TokenError::UnexpectedEof { .. })
    ));
    // The stream is exhausted afterwards.
    assert_eq!(tokenizer.next_token(), Ok(None));
}

#[test]
fn test_clean_eof_is_not_an_error() {
    let mut tokenizer = Tokenizer::new("text");
    assert_eq!(tokenizer.next_token(), Ok(Some(text("text"))));
    assert_eq!(tokenizer.next_token(), Ok(None));
    assert_eq!(tokenizer.next_token(), Ok(None));
}
