//! Vocabulary ingestion.
//!
//! Reads plain-text token lists produced by upstream normalization and feeds
//! them into prefix indexes. Two line formats are understood:
//!
//! - term lists: one term per line
//! - posting lists: `term<TAB>id` per line
//!
//! Blank lines and lines starting with `#` are skipped in both.

use std::io::BufRead;

use crate::data_structures::prefix_trie::{
    ExistenceIndex, PostingId, PostingIndex, PrefixIndex, TrieConfig,
};
use crate::error::{LexikonError, LexikonResult};

/// Yields `(line_number, trimmed_line)` for every line carrying data.
fn data_lines<R: BufRead>(reader: R) -> impl Iterator<Item = LexikonResult<(usize, String)>> {
    reader
        .lines()
        .enumerate()
        .filter_map(|(index, line)| match line {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() || trimmed.starts_with('#') {
                    None
                } else {
                    Some(Ok((index + 1, trimmed.to_string())))
                }
            }
            Err(e) => Some(Err(LexikonError::Io(e))),
        })
}

/// Reads a term list.
pub fn read_terms<R: BufRead>(reader: R) -> LexikonResult<Vec<String>> {
    data_lines(reader)
        .map(|line| line.map(|(_, term)| term))
        .collect()
}

/// Reads a `term<TAB>id` posting list.
pub fn read_postings<R: BufRead>(reader: R) -> LexikonResult<Vec<(String, PostingId)>> {
    data_lines(reader)
        .map(|line| {
            let (number, record) = line?;
            parse_posting(&record).map_err(|reason| LexikonError::Vocabulary {
                line: number,
                reason,
            })
        })
        .collect()
}

fn parse_posting(record: &str) -> Result<(String, PostingId), String> {
    let (term, id) = record
        .split_once('\t')
        .ok_or_else(|| "expected `term<TAB>id`".to_string())?;
    let term = term.trim();
    if term.is_empty() {
        return Err("empty term".to_string());
    }
    let id = id
        .trim()
        .parse::<PostingId>()
        .map_err(|e| format!("invalid id {:?}: {e}", id.trim()))?;
    Ok((term.to_string(), id))
}

/// Builds an existence index from a term list.
pub fn build_existence_index<R: BufRead>(
    reader: R,
    config: TrieConfig,
) -> LexikonResult<ExistenceIndex> {
    let mut index = ExistenceIndex::with_config(config)?;
    index.extend(read_terms(reader)?);
    tracing::info!(stats = ?index.stats(), "Existence index built");
    Ok(index)
}

/// Builds a posting index from a `term<TAB>id` list.
pub fn build_posting_index<R: BufRead>(
    reader: R,
    config: TrieConfig,
) -> LexikonResult<PostingIndex> {
    let mut index = PostingIndex::with_config(config)?;
    for (term, id) in read_postings(reader)? {
        index.add(&term, id);
    }
    tracing::info!(stats = ?index.stats(), "Posting index built");
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_terms_skips_blank_and_comment_lines() {
        let input = "# greetings\nAloha\n\n  mahalo  \n#skip\nhale\n";
        let terms = read_terms(Cursor::new(input)).unwrap();
        assert_eq!(terms, vec!["Aloha", "mahalo", "hale"]);
    }

    #[test]
    fn test_read_postings() {
        let input = "cat\t5\ncatalog\t 7 \n\n# comment\n";
        let postings = read_postings(Cursor::new(input)).unwrap();
        assert_eq!(
            postings,
            vec![("cat".to_string(), 5), ("catalog".to_string(), 7)]
        );
    }

    #[test]
    fn test_read_postings_reports_line_numbers() {
        let input = "cat\t5\n\ndog 6\n";
        match read_postings(Cursor::new(input)) {
            Err(LexikonError::Vocabulary { line, reason }) => {
                assert_eq!(line, 3);
                assert!(reason.contains("term<TAB>id"));
            }
            other => panic!("unexpected result: {other:?}"),
        }

        let input = "cat\tmany\n";
        assert!(matches!(
            read_postings(Cursor::new(input)),
            Err(LexikonError::Vocabulary { line: 1, .. })
        ));

        let input = " \t4\n";
        assert!(matches!(
            read_postings(Cursor::new(input)),
            Err(LexikonError::Vocabulary { line: 1, .. })
        ));
    }

    #[test]
    fn test_build_indexes() {
        let index =
            build_existence_index(Cursor::new("cat\ncar\ncard\ndog\n"), TrieConfig::new()).unwrap();
        assert_eq!(index.search_prefix("ca"), vec!["car", "card", "cat"]);

        let index =
            build_posting_index(Cursor::new("cat\t1\ncar\t2\ncat\t3\n"), TrieConfig::new()).unwrap();
        assert_eq!(index.search_prefix_for_indexes("ca"), vec![2, 1, 3]);
    }

    #[test]
    fn test_build_rejects_invalid_config() {
        let config = TrieConfig::new().with_max_results(0);
        assert!(matches!(
            build_existence_index(Cursor::new("cat\n"), config),
            Err(LexikonError::Index(_))
        ));
    }
}
