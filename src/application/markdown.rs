//! Line-oriented renderer for the markdown subset used by blog bodies.

use once_cell::sync::Lazy;
use regex::Regex;

const H1_CLASS: &str = "text-4xl font-bold text-gray-900 mb-6 mt-8 first:mt-0";
const H2_CLASS: &str = "text-3xl font-bold text-gray-900 mb-4 mt-8";
const H3_CLASS: &str = "text-2xl font-bold text-gray-900 mb-4 mt-6";
const UL_CLASS: &str = "list-disc list-inside mb-6 space-y-2 ml-4";
const LI_CLASS: &str = "mb-2";
const P_CLASS: &str = "text-lg text-gray-700 leading-relaxed mb-6";

static BOLD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("bold pattern compiles"));
static ITALIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*(.+?)\*").expect("italic pattern compiles"));

enum Block<'a> {
    Heading(u8, &'a str),
    Item(&'a str),
    Paragraph(&'a str),
    Blank,
}

fn classify(line: &str) -> Block<'_> {
    if line.trim().is_empty() {
        Block::Blank
    } else if let Some(text) = line.strip_prefix("### ") {
        Block::Heading(3, text)
    } else if let Some(text) = line.strip_prefix("## ") {
        Block::Heading(2, text)
    } else if let Some(text) = line.strip_prefix("# ") {
        Block::Heading(1, text)
    } else if let Some(text) = line.strip_prefix("- ") {
        Block::Item(text)
    } else {
        Block::Paragraph(line)
    }
}

pub fn render_markdown(source: &str) -> String {
    let mut html = String::with_capacity(source.len() * 2);
    let mut in_list = false;

    for line in source.lines() {
        let block = classify(line.trim_end());

        let is_item = matches!(block, Block::Item(_));
        if in_list && !is_item {
            html.push_str("</ul>\n");
            in_list = false;
        }

        match block {
            Block::Blank => {}
            Block::Heading(level, text) => {
                let class = match level {
                    1 => H1_CLASS,
                    2 => H2_CLASS,
                    _ => H3_CLASS,
                };
                html.push_str(&format!(
                    "<h{level} class=\"{class}\">{}</h{level}>\n",
                    inline(text)
                ));
            }
            Block::Item(text) => {
                if !in_list {
                    html.push_str(&format!("<ul class=\"{UL_CLASS}\">\n"));
                    in_list = true;
                }
                html.push_str(&format!("<li class=\"{LI_CLASS}\">{}</li>\n", inline(text)));
            }
            Block::Paragraph(text) => {
                html.push_str(&format!("<p class=\"{P_CLASS}\">{}</p>\n", inline(text)));
            }
        }
    }

    if in_list {
        html.push_str("</ul>\n");
    }

    html
}

fn inline(text: &str) -> String {
    let escaped = escape_html(text);
    let bold = BOLD.replace_all(&escaped, r#"<strong class="font-semibold">$1</strong>"#);
    ITALIC
        .replace_all(&bold, r#"<em class="italic">$1</em>"#)
        .into_owned()
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_map_to_levels() {
        insta::assert_snapshot!(render_markdown("# One\n## Two\n### Three").trim_end(), @r#"
        <h1 class="text-4xl font-bold text-gray-900 mb-6 mt-8 first:mt-0">One</h1>
        <h2 class="text-3xl font-bold text-gray-900 mb-4 mt-8">Two</h2>
        <h3 class="text-2xl font-bold text-gray-900 mb-4 mt-6">Three</h3>
        "#);
    }

    #[test]
    fn consecutive_items_share_one_list() {
        let html = render_markdown("Intro\n\n- first\n- second\n\nOutro\n- third");

        assert_eq!(html.matches("<ul ").count(), 2);
        assert_eq!(html.matches("<li class=\"mb-2\">").count(), 3);
        insta::assert_snapshot!(html.trim_end(), @r#"
        <p class="text-lg text-gray-700 leading-relaxed mb-6">Intro</p>
        <ul class="list-disc list-inside mb-6 space-y-2 ml-4">
        <li class="mb-2">first</li>
        <li class="mb-2">second</li>
        </ul>
        <p class="text-lg text-gray-700 leading-relaxed mb-6">Outro</p>
        <ul class="list-disc list-inside mb-6 space-y-2 ml-4">
        <li class="mb-2">third</li>
        </ul>
        "#);
    }

    #[test]
    fn bold_is_applied_before_italic() {
        let html = render_markdown("A **bold** and *soft* word");
        assert_eq!(
            html,
            "<p class=\"text-lg text-gray-700 leading-relaxed mb-6\">A <strong class=\"font-semibold\">bold</strong> and <em class=\"italic\">soft</em> word</p>\n"
        );
    }

    #[test]
    fn emphasis_inside_list_items_and_headings() {
        let html = render_markdown("## Why **now**\n- *always* rebalance");
        assert!(html.contains("Why <strong class=\"font-semibold\">now</strong></h2>"));
        assert!(html.contains("<li class=\"mb-2\"><em class=\"italic\">always</em> rebalance</li>"));
    }

    #[test]
    fn markup_in_source_is_escaped() {
        let html = render_markdown("<script>alert('x')</script> & more");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; more"));
    }

    #[test]
    fn blank_input_renders_nothing() {
        assert_eq!(render_markdown("\n  \n"), "");
    }

    #[test]
    fn hash_without_space_is_a_paragraph() {
        let html = render_markdown("#hashtag");
        assert!(html.starts_with("<p "));
    }
}
