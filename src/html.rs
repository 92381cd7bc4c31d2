//! HTML tag cloud document output.

use crate::render::{RenderedWord, Report};
use std::fmt;
use std::io::{self, Write};

/// Stylesheets linked from the document head when none are configured.
pub const DEFAULT_STYLESHEETS: [&str; 2] = [
    "https://cse22x1.engineering.osu.edu/2231/web-sw2/assignments/projects/tag-cloud-generator/data/tagcloud.css",
    "tagcloud.css",
];

/// Escapes text for use in element content and double-quoted attributes.
pub struct Escaped<'a>(pub &'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.0;
        while let Some(pos) = rest.find(['&', '<', '>', '"']) {
            f.write_str(&rest[..pos])?;
            f.write_str(match rest.as_bytes()[pos] {
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                _ => "&quot;",
            })?;
            rest = &rest[pos + 1..];
        }
        f.write_str(rest)
    }
}

/// Page title, e.g. `Top 10 words in input.txt`.
pub fn title(num_words: usize, source_name: &str) -> String {
    format!("Top {num_words} words in {source_name}")
}

pub fn write_header<W: Write>(out: &mut W, title: &str, stylesheets: &[String]) -> io::Result<()> {
    let title = Escaped(title);
    writeln!(out, "<html>")?;
    writeln!(out, "<head>")?;
    writeln!(out, "<title>{title}</title>")?;
    for href in stylesheets {
        writeln!(
            out,
            "<link href=\"{}\" rel=\"stylesheet\" type=\"text/css\">",
            Escaped(href)
        )?;
    }
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, "<h1>{title}</h1>")?;
    writeln!(out, "<hr>")?;
    writeln!(out, "<div class=\"cdiv\">")?;
    writeln!(out, "<p class=\"cbox\">")
}

pub fn write_word<W: Write>(out: &mut W, word: &RenderedWord) -> io::Result<()> {
    writeln!(
        out,
        "<span style=\"cursor:default\" class=\"f{}\" title=\"count: {}\">{}</span>",
        word.font_size,
        word.count,
        Escaped(&word.word)
    )
}

pub fn write_footer<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "</p>")?;
    writeln!(out, "</div>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "<hr>")?;
    writeln!(out, "</html>")
}

/// Writes the whole document, consuming `report`. Returns the number of spans written.
pub fn write_document<W: Write>(
    out: &mut W,
    source_name: &str,
    report: Report,
    stylesheets: &[String],
) -> io::Result<usize> {
    write_header(out, &title(report.len(), source_name), stylesheets)?;
    let mut written = 0;
    for word in report {
        write_word(out, &word)?;
        written += 1;
    }
    write_footer(out)?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::WordTable;
    use crate::font::ScaleMode;
    use crate::select::trim;

    fn render(text: &str, n: usize) -> String {
        let mut table = WordTable::new();
        table.extend(text.split(' ').filter(|w| !w.is_empty()));
        let report = Report::new(trim(table, n), ScaleMode::Shift);
        let stylesheets: Vec<String> = DEFAULT_STYLESHEETS.iter().map(|s| s.to_string()).collect();
        let mut out = Vec::new();
        write_document(&mut out, "in.txt", report, &stylesheets).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            Escaped("a<b>&\"c\"").to_string(),
            "a&lt;b&gt;&amp;&quot;c&quot;"
        );
        assert_eq!(Escaped("plain").to_string(), "plain");
        assert_eq!(Escaped("").to_string(), "");
    }

    #[test]
    fn document_for_example_sentence() {
        let html = render("the cat the dog the cat", 2);
        let expected = "\
<html>
<head>
<title>Top 2 words in in.txt</title>
<link href=\"https://cse22x1.engineering.osu.edu/2231/web-sw2/assignments/projects/tag-cloud-generator/data/tagcloud.css\" rel=\"stylesheet\" type=\"text/css\">
<link href=\"tagcloud.css\" rel=\"stylesheet\" type=\"text/css\">
</head>
<body>
<h1>Top 2 words in in.txt</h1>
<hr>
<div class=\"cdiv\">
<p class=\"cbox\">
<span style=\"cursor:default\" class=\"f13\" title=\"count: 2\">cat</span>
<span style=\"cursor:default\" class=\"f14\" title=\"count: 3\">the</span>
</p>
</div>
</body>
<hr>
</html>
";
        assert_eq!(html, expected);
    }

    #[test]
    fn empty_report_has_no_spans() {
        let html = render("", 5);
        assert!(html.contains("<title>Top 0 words in in.txt</title>"));
        assert!(!html.contains("<span"));
        assert!(html.ends_with("</html>\n"));
    }

    #[test]
    fn words_are_escaped_in_spans() {
        let html = render("<b>", 1);
        assert!(html.contains(">&lt;b&gt;</span>"));
    }
}
