use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

use super::model::{Coordinates, TokenGroup};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// A token group that cannot become a coordinate pair.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("fragment {fragment}: '{token}' is not a number")]
    InvalidNumber { fragment: usize, token: String },

    #[error("fragment {fragment}: x value '{x}' has no matching y value")]
    MissingY { fragment: usize, x: String },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read the whole coordinate file as text.
pub fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("reading coordinate file {}", path.display()))
}

/// Split raw text into token groups.
///
/// Layout accepted: any number of `[x,y]` groups, possibly nested in an outer
/// list and spread over several lines:
///
/// ```text
/// [[0, 0],
///  [85, 9.6], [170, 9.9]]
/// ```
///
/// Newlines and spaces are removed, the text is split on `[`, each fragment
/// is split on `,` and stripped of brackets. Fragments left with no tokens
/// (a blank prefix before the first `[`, stray `]` or `,`) produce no group.
///
/// Nested or unbalanced brackets are not validated: `[[1,2]` groups exactly
/// as the splitting rules above dictate.
pub fn token_groups(text: &str) -> Vec<TokenGroup> {
    let normalized = text.replace(['\n', ' '], "");

    normalized
        .split('[')
        .enumerate()
        .filter_map(|(fragment, frag)| {
            let tokens: Vec<String> = frag
                .split(',')
                .map(|tok| tok.replace([']', '['], ""))
                .filter(|tok| !tok.is_empty())
                .collect();
            (!tokens.is_empty()).then_some(TokenGroup { fragment, tokens })
        })
        .collect()
}

/// Convert token groups into coordinates, in order.
///
/// The first token of a group is x and the second is y; any further tokens
/// are ignored. x is converted before y is looked up, so `[a]` reports the
/// bad number rather than the missing y. Groups without tokens are skipped.
pub fn to_coordinates(groups: &[TokenGroup]) -> Result<Coordinates, ParseError> {
    let mut coords = Coordinates::with_capacity(groups.len());

    for group in groups {
        let Some(x_tok) = group.tokens.first() else {
            continue;
        };
        let x = parse_number(x_tok, group.fragment)?;
        let y_tok = group.tokens.get(1).ok_or_else(|| ParseError::MissingY {
            fragment: group.fragment,
            x: x_tok.clone(),
        })?;
        let y = parse_number(y_tok, group.fragment)?;
        coords.push(x, y);
    }

    Ok(coords)
}

/// Tokenize and convert in one step.
pub fn parse_coordinates(text: &str) -> Result<Coordinates, ParseError> {
    to_coordinates(&token_groups(text))
}

// -- helpers --

/// Surrounding whitespace (tabs, `\r`) survives normalization, so it is
/// trimmed here rather than rejected.
fn parse_number(token: &str, fragment: usize) -> Result<f64, ParseError> {
    token
        .trim()
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidNumber {
            fragment,
            token: token.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use proptest::prelude::*;
    use rstest::rstest;

    use super::*;

    fn tokens(groups: &[TokenGroup]) -> Vec<Vec<&str>> {
        groups
            .iter()
            .map(|g| g.tokens.iter().map(String::as_str).collect())
            .collect()
    }

    #[test]
    fn single_group() {
        let coords = parse_coordinates("[1.0,2.0]").unwrap();
        assert_eq!(coords.xs(), &[1.0]);
        assert_eq!(coords.ys(), &[2.0]);
    }

    #[test]
    fn nested_list_over_several_lines() {
        let text = "[[0, 0],\n [85, 9.6], [170,\n 9.9]]\n";
        let coords = parse_coordinates(text).unwrap();
        assert_eq!(coords.xs(), &[0.0, 85.0, 170.0]);
        assert_eq!(coords.ys(), &[0.0, 9.6, 9.9]);
    }

    #[test]
    fn blank_leading_fragment_is_skipped() {
        let groups = token_groups("  \n[1,2][3,4]");
        assert_eq!(tokens(&groups), vec![vec!["1", "2"], vec!["3", "4"]]);
        assert_eq!(groups[0].fragment, 1);

        let coords = to_coordinates(&groups).unwrap();
        assert_eq!(coords.xs(), &[1.0, 3.0]);
        assert_eq!(coords.ys(), &[2.0, 4.0]);
    }

    #[test]
    fn leading_text_with_content_is_a_group() {
        let groups = token_groups("result:[1,2]");
        assert_eq!(tokens(&groups), vec![vec!["result:"], vec!["1", "2"]]);
        assert_eq!(groups[0].fragment, 0);
        assert!(to_coordinates(&groups).is_err());
    }

    #[test]
    fn leading_separators_are_skipped() {
        let coords = parse_coordinates(",,,[5,6],[7,8],").unwrap();
        assert_eq!(coords.xs(), &[5.0, 7.0]);
        assert_eq!(coords.ys(), &[6.0, 8.0]);
    }

    #[rstest]
    #[case::empty("", 0)]
    #[case::only_whitespace(" \n \n", 0)]
    #[case::only_brackets("[][[]]", 0)]
    #[case::trailing_junk("[1,2]]]", 1)]
    #[case::flat_pairs("[0,0][1,1][2,2]", 3)]
    #[case::outer_list("[[0,0],[1,1],[2,2]]", 3)]
    fn group_counts(#[case] text: &str, #[case] expected: usize) {
        assert_eq!(token_groups(text).len(), expected);
    }

    #[test]
    fn extra_tokens_are_ignored() {
        let coords = parse_coordinates("[1,2,3]").unwrap();
        assert_eq!(coords.xs(), &[1.0]);
        assert_eq!(coords.ys(), &[2.0]);
    }

    #[test]
    fn carriage_returns_and_tabs_are_tolerated() {
        let coords = parse_coordinates("[1,\t2]\r\n[3,4\r]").unwrap();
        assert_eq!(coords.xs(), &[1.0, 3.0]);
        assert_eq!(coords.ys(), &[2.0, 4.0]);
    }

    #[test]
    fn non_numeric_token_fails() {
        let err = parse_coordinates("[0,0][a,2]").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidNumber {
                fragment: 2,
                token: "a".into()
            }
        );
    }

    #[test]
    fn non_numeric_y_fails() {
        let err = parse_coordinates("[1,b]").unwrap_err();
        assert!(matches!(err, ParseError::InvalidNumber { ref token, .. } if token == "b"));
    }

    #[test]
    fn missing_y_fails() {
        let err = parse_coordinates("[1,2][3]").unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingY {
                fragment: 2,
                x: "3".into()
            }
        );
    }

    #[test]
    fn bad_x_is_reported_before_missing_y() {
        let err = parse_coordinates("[a]").unwrap_err();
        assert!(matches!(err, ParseError::InvalidNumber { .. }));
    }

    #[test]
    fn unbalanced_brackets_follow_splitting_rules() {
        // "[[1,2]" splits into "", "", "1,2]" → one group.
        let groups = token_groups("[[1,2]");
        assert_eq!(tokens(&groups), vec![vec!["1", "2"]]);

        // "[1,2[3,4]" splits into "", "1,2", "3,4]" → two groups.
        let groups = token_groups("[1,2[3,4]");
        assert_eq!(tokens(&groups), vec![vec!["1", "2"], vec!["3", "4"]]);
    }

    #[test]
    fn read_text_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.txt");
        let err = read_text(&path).unwrap_err();
        assert!(format!("{err:#}").contains("output.txt"));
    }

    #[test]
    fn reading_a_file_twice_is_deterministic() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[[0, 1.5],\n[2, -3e2],\n[4.25, 7]]").unwrap();

        let first = parse_coordinates(&read_text(file.path()).unwrap()).unwrap();
        let second = parse_coordinates(&read_text(file.path()).unwrap()).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.xs(), &[0.0, 2.0, 4.25]);
        assert_eq!(first.ys(), &[1.5, -300.0, 7.0]);
    }

    fn render(points: &[(f64, f64)], sep: &str) -> String {
        let body: Vec<String> = points
            .iter()
            .map(|(x, y)| format!("[{x:?}, {y:?}]"))
            .collect();
        format!("[{}]", body.join(sep))
    }

    proptest! {
        #[test]
        fn n_pairs_parse_to_n_points_in_order(
            points in prop::collection::vec((-1e9f64..1e9, -1e9f64..1e9), 0..64),
            sep in prop::sample::select(vec![",", ",\n", ", ", ",\n  "]),
        ) {
            let text = render(&points, sep);
            let coords = parse_coordinates(&text).unwrap();

            prop_assert_eq!(coords.len(), points.len());
            let xs: Vec<f64> = points.iter().map(|p| p.0).collect();
            let ys: Vec<f64> = points.iter().map(|p| p.1).collect();
            prop_assert_eq!(coords.xs(), xs.as_slice());
            prop_assert_eq!(coords.ys(), ys.as_slice());

            prop_assert_eq!(parse_coordinates(&text).unwrap(), coords);
        }
    }
}
