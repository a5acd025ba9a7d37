// src/utils/html.rs

use ammonia::Builder;

/// Strips every HTML tag from user-supplied text before it is handed to a display client.
///
/// Player names and question text come straight from submitters and admins, so
/// anything tag-shaped is removed while the inner text is kept (the contents of
/// `<script>`/`<style>` are dropped entirely). Surrounding whitespace is trimmed.
///
/// The result is plain text, not HTML: the entities ammonia writes while
/// serializing are decoded again, so `"Tom & Jerry"` stays `"Tom & Jerry"`.
pub fn strip_markup(input: &str) -> String {
    let mut builder = Builder::empty();
    builder.clean_content_tags(["script", "style"].into_iter().collect());
    let serialized = builder.clean(input).to_string();
    decode_text_entities(&serialized).trim().to_string()
}

/// Reverses the escaping html5ever applies to text nodes.
/// `&amp;` goes last so an escaped entity such as `&amp;lt;` decodes to `&lt;`, not `<`.
fn decode_text_entities(serialized: &str) -> String {
    serialized
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&nbsp;", "\u{a0}")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
}
