//! Word-level text wrapping, used by every multi-line field on the invoice.

use crate::font::Face;
use crate::surface::Surface;
use crate::units::Pt;

/// Greedy word-level wrapping: split `text` into lines that each measure at
/// most `max_width` under the given face and size.
///
/// Newlines are treated as ordinary whitespace (multi-line source fields are
/// split into lines *before* wrapping). Words are never broken apart: a
/// single token wider than `max_width` is emitted on its own, overflowing
/// line rather than split mid-word.
///
/// Empty input produces an empty vec; a string that already fits comes back
/// as that one line.
pub fn wrap<S: Surface + ?Sized>(
    surface: &S,
    text: &str,
    face: Face,
    size: Pt,
    max_width: Pt,
) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let tentative = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if surface.text_width(&tentative, face, size) <= max_width {
            current = tentative;
        } else {
            if !current.is_empty() {
                lines.push(current);
            }
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingSurface;

    // RecordingSurface measures every char at size/2, so at size 10 a
    // max_width of 50 fits exactly ten characters per line.

    #[test]
    fn empty_input_yields_no_lines() {
        let surface = RecordingSurface::new();
        assert!(wrap(&surface, "", Face::Regular, Pt(10.0), Pt(50.0)).is_empty());
        assert!(wrap(&surface, "   \n  ", Face::Regular, Pt(10.0), Pt(50.0)).is_empty());
    }

    #[test]
    fn short_line_passes_through_unchanged() {
        let surface = RecordingSurface::new();
        let lines = wrap(&surface, "short", Face::Regular, Pt(10.0), Pt(50.0));
        assert_eq!(lines, vec!["short".to_string()]);

        // re-wrapping the produced line is a fixed point
        let again = wrap(&surface, &lines[0], Face::Regular, Pt(10.0), Pt(50.0));
        assert_eq!(again, lines);
    }

    #[test]
    fn wraps_greedily_at_word_boundaries() {
        let surface = RecordingSurface::new();
        let lines = wrap(
            &surface,
            "aaa bbb ccc ddd",
            Face::Regular,
            Pt(10.0),
            Pt(40.0),
        );
        // 8 chars per line: "aaa bbb" fits, "aaa bbb ccc" does not
        assert_eq!(lines, vec!["aaa bbb".to_string(), "ccc ddd".to_string()]);
    }

    #[test]
    fn every_line_fits_except_overlong_tokens() {
        let surface = RecordingSurface::new();
        let max = Pt(50.0);
        let text = "one two three four five six seven eight nine ten";
        for line in wrap(&surface, text, Face::Regular, Pt(10.0), max) {
            assert!(surface.text_width(&line, Face::Regular, Pt(10.0)) <= max);
            assert!(!line.is_empty());
        }
    }

    #[test]
    fn overlong_token_is_emitted_unsplit() {
        let surface = RecordingSurface::new();
        let lines = wrap(
            &surface,
            "a incomprehensibilities b",
            Face::Regular,
            Pt(10.0),
            Pt(50.0),
        );
        assert_eq!(
            lines,
            vec![
                "a".to_string(),
                "incomprehensibilities".to_string(),
                "b".to_string(),
            ]
        );
    }

    #[test]
    fn newlines_are_normalized_to_spaces() {
        let surface = RecordingSurface::new();
        let lines = wrap(&surface, "aaa\nbbb", Face::Regular, Pt(10.0), Pt(50.0));
        assert_eq!(lines, vec!["aaa bbb".to_string()]);
    }
}
