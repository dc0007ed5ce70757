//! Title and body text extraction from article HTML.
//!
//! # Title
//!
//! Candidates are the `<title>` element, the `og:title` meta property and the
//! longest `<h1>`. Page titles usually carry the site name
//! (`"Headline | Der Spiegel"`); when a headline candidate matches one
//! segment of the title, that candidate wins, otherwise the longest segment
//! is kept.
//!
//! # Body text
//!
//! Every `<p>`, `<pre>` and `<td>` with more than two stopwords and a low link
//! density votes for its parent (full score) and grandparent (half score).
//! The node with the most votes is the article body, and its paragraphs are
//! joined with blank lines.

use super::language::Language;
use super::stopwords;
use crate::models::ExtractedArticle;
use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Node, Selector};

static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("title").expect("valid selector"));
static H1: Lazy<Selector> = Lazy::new(|| Selector::parse("h1").expect("valid selector"));
static OG_TITLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"meta[property="og:title"]"#).expect("valid selector"));
static BLOCKS: Lazy<Selector> = Lazy::new(|| Selector::parse("p, pre, td").expect("valid selector"));
static LINKS: Lazy<Selector> = Lazy::new(|| Selector::parse("a").expect("valid selector"));

/// Separators between a headline and the site name in `<title>`.
static TITLE_SPLITTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+[|\-–—»:]\s+").expect("valid regex"));

/// Elements whose text is never visible.
const HIDDEN_TAGS: &[&str] = &["script", "style", "noscript"];
const BLOCK_TAGS: &[&str] = &["p", "pre", "td"];

/// Blocks with fewer stopwords than this are not considered prose.
const MIN_STOPWORDS: usize = 3;

/// Parse `html` into an [`ExtractedArticle`].
///
/// Never fails; missing parts come back as empty strings.
pub fn parse_article(html: &str, language: Language) -> ExtractedArticle {
    let document = Html::parse_document(html);
    ExtractedArticle {
        title: extract_title(&document),
        text: extract_text(&document, language),
    }
}

fn extract_title(document: &Html) -> String {
    let title = document
        .select(&TITLE)
        .next()
        .map(visible_text)
        .unwrap_or_default();
    let og_title = document
        .select(&OG_TITLE)
        .next()
        .and_then(|meta| meta.value().attr("content"))
        .map(|content| content.split_whitespace().join(" "))
        .unwrap_or_default();
    let h1 = document
        .select(&H1)
        .map(visible_text)
        .max_by_key(|text| text.chars().count())
        .unwrap_or_default();

    if title.is_empty() {
        return if og_title.is_empty() { h1 } else { og_title };
    }

    let headlines = [&h1, &og_title];
    let segments: Vec<&str> = TITLE_SPLITTER.split(&title).map(str::trim).collect();

    for headline in headlines.iter().filter(|h| !h.is_empty()) {
        let wanted = normalize(headline);
        if normalize(&title) == wanted || segments.iter().any(|s| normalize(s) == wanted) {
            return headline.to_string();
        }
    }

    if segments.len() > 1 {
        if let Some(longest) = segments.iter().max_by_key(|s| s.chars().count()) {
            return longest.to_string();
        }
    }
    title
}

fn extract_text(document: &Html, language: Language) -> String {
    let mut scores: Vec<(ElementRef<'_>, f64)> = Vec::new();

    for block in document.select(&BLOCKS) {
        let text = visible_text(block);
        if text.is_empty() {
            continue;
        }
        let stopword_count = stopwords::count(&text, language);
        if stopword_count < MIN_STOPWORDS || is_high_link_density(block, &text) {
            continue;
        }

        let score = stopword_count as f64;
        let parent = block.parent().and_then(ElementRef::wrap);
        let grandparent = parent.and_then(|p| p.parent()).and_then(ElementRef::wrap);
        if let Some(parent) = parent {
            add_score(&mut scores, parent, score);
        }
        if let Some(grandparent) = grandparent {
            add_score(&mut scores, grandparent, score / 2.0);
        }
    }

    let Some(top) = scores
        .iter()
        .fold(None::<&(ElementRef<'_>, f64)>, |best, candidate| match best {
            Some(b) if b.1 >= candidate.1 => Some(b),
            _ => Some(candidate),
        })
        .map(|(node, _)| *node)
    else {
        return String::new();
    };

    top.select(&BLOCKS)
        .filter(|block| !has_block_ancestor(*block, top))
        .map(|block| (block, visible_text(block)))
        .filter(|(block, text)| !text.is_empty() && !is_high_link_density(*block, text))
        .map(|(_, text)| text)
        .join("\n\n")
}

fn add_score<'a>(scores: &mut Vec<(ElementRef<'a>, f64)>, node: ElementRef<'a>, score: f64) {
    match scores.iter_mut().find(|(existing, _)| existing.id() == node.id()) {
        Some((_, total)) => *total += score,
        None => scores.push((node, score)),
    }
}

/// Whether `block` is nested in another block below `top`; its text is
/// already part of that outer block.
fn has_block_ancestor(block: ElementRef<'_>, top: ElementRef<'_>) -> bool {
    block
        .ancestors()
        .take_while(|a| a.id() != top.id())
        .filter_map(ElementRef::wrap)
        .any(|a| BLOCK_TAGS.contains(&a.value().name()))
}

/// Links make up most of the text: navigation, tag clouds, "read more" lists.
fn is_high_link_density(element: ElementRef<'_>, text: &str) -> bool {
    let words = text.split_whitespace().count();
    let links: Vec<ElementRef<'_>> = element.select(&LINKS).collect();
    if words == 0 || links.is_empty() {
        return false;
    }
    let link_words: usize = links
        .iter()
        .map(|a| visible_text(*a).split_whitespace().count())
        .sum();
    (link_words as f64 / words as f64) * links.len() as f64 > 1.0
}

/// Text under `element` with scripts and styles skipped and whitespace collapsed.
fn visible_text(element: ElementRef<'_>) -> String {
    let mut raw = String::new();
    for node in element.descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let hidden = node
            .ancestors()
            .filter_map(ElementRef::wrap)
            .take_while(|a| a.id() != element.id())
            .any(|a| HIDDEN_TAGS.contains(&a.value().name()));
        if !hidden {
            raw.push_str(text);
        }
    }
    raw.split_whitespace().join(" ")
}

fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}
