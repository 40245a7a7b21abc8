//! Article body assembly.
//!
//! The body is built as a small section tree, adjusted until it satisfies the
//! keyword-density and word-count floors of the [`GeneratorConfig`], numbered
//! with citation markers, and only then rendered to HTML. Every step is
//! deterministic: the same inputs always produce the same body.

use std::fmt::Write;

use serde::Serialize;

use crate::chart::{ChartSpec, DataPoints, render_chart};
use crate::config::GeneratorConfig;
use crate::html::{collapse_whitespace, count_words, escape_html};
use crate::keyword::{Keyword, clean_secondary, topic_terms};
use crate::links::is_authoritative;
use crate::parse::HtmlPage;
use crate::templates::{self, TOPICAL_SECTIONS, fill};
use crate::{PostsmithError, Result};

const TOPIC_TERM_LIMIT: usize = 5;

/// A rendered article body with the measurements taken from its visible text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleBody {
    pub html: String,
    pub word_count: usize,
    pub keyword_occurrences: usize,
    /// Terms drawn from the reference material, if any was supplied.
    pub topic_terms: Vec<String>,
}

#[derive(Debug, Default)]
struct Section {
    heading: String,
    paragraphs: Vec<String>,
    subsections: Vec<(String, Vec<String>)>,
}

struct Outline {
    h1: String,
    intro: String,
    sections: Vec<Section>,
    chart_html: String,
    chart_before: usize,
    conclusion: Section,
    references: Vec<String>,
}

/// Builds the article body for `keyword`.
///
/// The result has one `<h1>` containing the keyword, `h2_count` second-level
/// headings (topical sections, a conclusion and a references section),
/// `h3_count` subsections, one internal link, the configured authoritative
/// external links, an inline chart and `citation_count` numbered citations.
/// Takeaway paragraphs are added until the keyword occurs
/// `min_keyword_occurrences` times, and keyword-free filler paragraphs until
/// the visible text reaches `min_word_count` words.
///
/// The first paragraph reaches the keyword within `intro_keyword_window`
/// words; when the stock introduction does not, a bolded keyword lead is
/// prepended.
///
/// # Errors
///
/// Returns [`PostsmithError::InsufficientContent`] if the keyword is blank and
/// [`PostsmithError::Config`] if the configuration fails
/// [`GeneratorConfig::validate`] or the intro window is too small to hold the
/// keyword.
///
/// # Example
///
/// ```rust
/// use postsmith_core::{GeneratorConfig, assemble};
///
/// let config = GeneratorConfig::default();
/// let body = assemble("heat pumps", &[], None, None, &config).unwrap();
/// assert!(body.word_count >= config.min_word_count);
/// assert!(body.keyword_occurrences >= config.min_keyword_occurrences);
/// ```
pub fn assemble(
    keyword: &str, secondary_keywords: &[String], reference: Option<&str>, data_points: Option<&DataPoints>,
    config: &GeneratorConfig,
) -> Result<ArticleBody> {
    let keyword = Keyword::new(keyword).map_err(|_| PostsmithError::InsufficientContent)?;
    config.validate()?;
    let kw = escape_html(keyword.as_str());

    let terms = reference.map(|text| topic_terms(text, &keyword, TOPIC_TERM_LIMIT)).unwrap_or_default();
    let mut outline = build_outline(&keyword, &kw, secondary_keywords, &terms, data_points, config);
    ensure_intro_keyword(&mut outline, &keyword, &kw, config.intro_keyword_window)?;

    let mut text = visible_text(&outline);
    let occurrences = keyword.occurrences_in(&text);
    if occurrences < config.min_keyword_occurrences {
        let missing = config.min_keyword_occurrences - occurrences;
        tracing::debug!(occurrences, missing, "adding keyword takeaways");
        let count = outline.sections.len();
        for i in 0..missing {
            let takeaway = fill(templates::TAKEAWAYS[i % templates::TAKEAWAYS.len()], &kw);
            outline.sections[i % count].paragraphs.push(takeaway);
        }
        text = visible_text(&outline);
    }

    let mut words = count_words(&text);
    let mut added = 0;
    while words < config.min_word_count {
        let filler = templates::FILLER[added % templates::FILLER.len()];
        let count = outline.sections.len();
        outline.sections[added % count].paragraphs.push(filler.to_string());
        words += count_words(filler);
        added += 1;
    }
    if added > 0 {
        tracing::debug!(added, words, "expanded body with supporting paragraphs");
    }

    add_citations(&mut outline, config.citation_count);

    let html = render(&outline);
    let text = HtmlPage::parse_fragment(&html).visible_text();
    let body = ArticleBody {
        word_count: count_words(&text),
        keyword_occurrences: keyword.occurrences_in(&text),
        topic_terms: terms,
        html,
    };

    tracing::debug!(
        words = body.word_count,
        keyword_occurrences = body.keyword_occurrences,
        sections = outline.sections.len(),
        "assembled article body"
    );
    Ok(body)
}

fn build_outline(
    keyword: &Keyword, kw: &str, secondary_keywords: &[String], terms: &[String], data_points: Option<&DataPoints>,
    config: &GeneratorConfig,
) -> Outline {
    let section_count = config.topical_section_count();
    let h3_total = config.h3_count;

    let mut sections: Vec<Section> = TOPICAL_SECTIONS
        .iter()
        .take(section_count)
        .enumerate()
        .map(|(index, template)| {
            let h3s = h3_total / section_count + usize::from(index < h3_total % section_count);
            Section {
                heading: fill(template.heading, kw),
                paragraphs: vec![fill(template.lead, kw)],
                subsections: template
                    .subsections
                    .iter()
                    .take(h3s)
                    .map(|sub| (sub.heading.to_string(), vec![fill(sub.body, kw)]))
                    .collect(),
            }
        })
        .collect();

    for (i, term) in clean_secondary(secondary_keywords).iter().enumerate() {
        let sentence = templates::SECONDARY_SENTENCES[i % templates::SECONDARY_SENTENCES.len()];
        sections[i % section_count].paragraphs.push(sentence.replace("{term}", &escape_html(term)));
    }

    if !terms.is_empty() {
        let escaped: Vec<String> = terms.iter().map(|t| escape_html(t)).collect();
        let paragraph = fill(templates::TOPIC_TERMS, kw).replace("{terms}", &join_terms(&escaped));
        sections[0].paragraphs.push(paragraph);
    }

    let internal = templates::INTERNAL_LINK
        .replace("{href}", &escape_html(&config.internal_link.href))
        .replace("{anchor}", &escape_html(&config.internal_link.anchor));
    sections[2.min(section_count - 1)].paragraphs.push(internal);

    let external_at = 4.min(section_count - 1);
    for link in &config.external_links {
        if !is_authoritative(&link.href, &config.authority_allow_list) {
            tracing::warn!(href = %link.href, "skipping external link without an authoritative domain");
            continue;
        }
        let paragraph = templates::EXTERNAL_LINK
            .replace("{href}", &escape_html(&link.href))
            .replace("{anchor}", &escape_html(&link.anchor));
        sections[external_at].paragraphs.push(paragraph);
    }

    let chart = match data_points {
        Some(points) if !points.is_empty() => {
            ChartSpec { title: format!("{} Data Visualization", keyword), points: points.clone() }
        }
        _ => config.default_chart.clone(),
    };

    let references = (0..config.citation_count)
        .map(|i| fill(templates::REFERENCES[i % templates::REFERENCES.len()], kw))
        .collect();

    Outline {
        h1: fill(templates::H1, kw),
        intro: fill(templates::INTRO, kw),
        chart_before: section_count / 2,
        chart_html: render_chart(&chart),
        sections,
        conclusion: Section {
            heading: fill(templates::CONCLUSION_HEADING, kw),
            paragraphs: templates::CONCLUSION.iter().map(|p| fill(p, kw)).collect(),
            subsections: Vec::new(),
        },
        references,
    }
}

/// Prepends the keyword lead when the introduction does not mention the
/// keyword within the first `window` words.
fn ensure_intro_keyword(outline: &mut Outline, keyword: &Keyword, kw: &str, window: usize) -> Result<()> {
    let within = |intro: &str| {
        let text = HtmlPage::parse_fragment(intro).visible_text();
        keyword_reach(&text, keyword).is_some_and(|reach| reach <= window)
    };
    if within(&outline.intro) {
        return Ok(());
    }

    tracing::debug!(window, "keyword outside the intro window, adding a lead");
    outline.intro = format!("{} {}", fill(templates::INTRO_LEAD, kw), outline.intro);
    if within(&outline.intro) {
        return Ok(());
    }
    Err(PostsmithError::Config(format!(
        "intro_keyword_window {window} is too small for the {}-word keyword",
        count_words(keyword.as_str())
    )))
}

/// Number of words up to and including the first keyword occurrence.
fn keyword_reach(text: &str, keyword: &Keyword) -> Option<usize> {
    let haystack = collapse_whitespace(text).to_lowercase();
    let needle = collapse_whitespace(keyword.as_str()).to_lowercase();
    let start = haystack.find(&needle)?;
    Some(count_words(&haystack[..start]) + count_words(&needle))
}

/// "a", "a and b", "a, b and c".
fn join_terms(terms: &[String]) -> String {
    match terms {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

/// Appends markers `[1]..[count]` spread evenly over the paragraphs in
/// document order.
fn add_citations(outline: &mut Outline, count: usize) {
    let mut paragraphs: Vec<&mut String> = std::iter::once(&mut outline.intro)
        .chain(outline.sections.iter_mut().flat_map(|section| {
            section
                .paragraphs
                .iter_mut()
                .chain(section.subsections.iter_mut().flat_map(|(_, body)| body.iter_mut()))
        }))
        .chain(outline.conclusion.paragraphs.iter_mut())
        .collect();

    let total = paragraphs.len();
    for number in 1..=count {
        let index = (number * total / (count + 1)).min(total - 1);
        let _ = write!(paragraphs[index], " <a href=\"#citation-{number}\" class=\"citation\">[{number}]</a>");
    }
}

fn visible_text(outline: &Outline) -> String {
    HtmlPage::parse_fragment(&render(outline)).visible_text()
}

fn render(outline: &Outline) -> String {
    let mut html = String::new();
    html.push_str("<article class=\"post-content\">\n<header>\n");
    let _ = writeln!(html, "<h1>{}</h1>", outline.h1);
    let _ = writeln!(html, "<p class=\"intro\">{}</p>", outline.intro);
    html.push_str("</header>\n");

    for (index, section) in outline.sections.iter().enumerate() {
        if index == outline.chart_before {
            html.push_str(&outline.chart_html);
        }
        render_section(&mut html, section, None);
    }

    render_section(&mut html, &outline.conclusion, Some("conclusion"));

    html.push_str("<section class=\"references\">\n");
    let _ = writeln!(html, "<h2>{}</h2>", templates::REFERENCES_HEADING);
    html.push_str("<ol>\n");
    for (i, reference) in outline.references.iter().enumerate() {
        let _ = writeln!(html, "<li id=\"citation-{}\">{}</li>", i + 1, reference);
    }
    html.push_str("</ol>\n</section>\n</article>\n");
    html
}

fn render_section(html: &mut String, section: &Section, class: Option<&str>) {
    match class {
        Some(class) => {
            let _ = writeln!(html, "<section class=\"{class}\">");
        }
        None => html.push_str("<section>\n"),
    }
    let _ = writeln!(html, "<h2>{}</h2>", section.heading);
    for paragraph in &section.paragraphs {
        let _ = writeln!(html, "<p>{paragraph}</p>");
    }
    for (heading, paragraphs) in &section.subsections {
        let _ = writeln!(html, "<h3>{heading}</h3>");
        for paragraph in paragraphs {
            let _ = writeln!(html, "<p>{paragraph}</p>");
        }
    }
    html.push_str("</section>\n");
}
