use crate::paste_ref::{PasteRef, parse_paste_ref};

fn slug_only(slug: &str) -> PasteRef {
    PasteRef {
        slug: slug.to_string(),
        server: None,
    }
}

#[test]
fn given_plain_slug_when_parsed_then_used_as_is() {
    assert_eq!(parse_paste_ref("abc"), slug_only("abc"));
    assert_eq!(parse_paste_ref(" abc \n"), slug_only("abc"));
}

/// **VALUE**: Verifies highlighting extensions are dropped from the slug.
///
/// **WHY THIS MATTERS**: Hastebin links are shared as `abc.rs`; the document is `abc`.
#[test]
fn given_slug_with_extension_when_parsed_then_extension_dropped() {
    assert_eq!(parse_paste_ref("abc.rs"), slug_only("abc"));
    assert_eq!(parse_paste_ref("/abc.tar.gz"), slug_only("abc"));
}

/// **VALUE**: Verifies a pasted link yields its slug and its server.
///
/// **BUG THIS CATCHES**: Would catch a link to hastebin being fetched from the configured
/// dogbin server instead.
#[test]
fn given_link_when_parsed_then_slug_and_origin_extracted() {
    assert_eq!(
        parse_paste_ref("del.dog/abc"),
        PasteRef {
            slug: String::from("abc"),
            server: Some(String::from("https://del.dog")),
        }
    );
    assert_eq!(
        parse_paste_ref("https://hastebin.com/xyz.py"),
        PasteRef {
            slug: String::from("xyz"),
            server: Some(String::from("https://hastebin.com")),
        }
    );
    assert_eq!(
        parse_paste_ref("http://localhost:7777/raw/abc"),
        PasteRef {
            slug: String::from("abc"),
            server: Some(String::from("http://localhost:7777")),
        }
    );
}

#[test]
fn given_link_without_path_when_parsed_then_empty_slug() {
    let parsed = parse_paste_ref("https://del.dog/");

    assert_eq!(parsed.slug, "");
    assert_eq!(parsed.server.as_deref(), Some("https://del.dog"));
}
