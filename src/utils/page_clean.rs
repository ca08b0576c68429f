// Heuristic cleanup of per-page PDF text: strips repeated headers/footers
// and lines too short or too numeric to be prose.

use std::collections::HashSet;

/// Detects lines that repeat across a strict majority of pages, which in
/// practice are running headers and footers.
///
/// Candidates are enumerated from a reference page: the shortest page by
/// character count excluding the first, since cover pages usually differ
/// while headers settle in from page two. Ties keep the earliest page.
/// Each candidate is counted across the whole document, first page
/// included, and qualifies once it appears on at least
/// `total_pages / 2 + 1` pages.
///
/// Returns an empty set for documents with fewer than two pages; callers
/// skip detection entirely in that case.
pub fn detect_boilerplate(pages: &[String]) -> HashSet<&str> {
    let Some(reference) = pages.iter().skip(1).min_by_key(|page| page.chars().count()) else {
        return HashSet::new();
    };

    let threshold = pages.len() / 2 + 1;
    let mut boilerplate = HashSet::new();

    for candidate in reference.split('\n') {
        let mut hits = 0;
        for page in pages {
            if page.split('\n').any(|line| line == candidate) {
                hits += 1;
                // No need to scan further pages once the majority is met.
                if hits >= threshold {
                    break;
                }
            }
        }
        if hits >= threshold {
            boilerplate.insert(candidate);
        }
    }

    boilerplate
}

/// Removes boilerplate and low-information lines from every page.
///
/// A line is dropped when it matches the boilerplate set (multi-page
/// documents only), when it has two or fewer non-space characters, or
/// when at most half of its non-space characters are alphabetic. The
/// length rule runs before the ratio rule, so an all-space line never
/// reaches the division. Page count and the order of surviving lines are
/// preserved; a page whose lines are all removed becomes an empty string.
///
/// Cleaning is defined for a single pass over freshly extracted pages.
/// Re-cleaning already cleaned pages may pick a different reference page
/// and is not a supported use.
pub fn clean_pages(pages: &[String]) -> Vec<String> {
    let boilerplate = if pages.len() > 1 {
        detect_boilerplate(pages)
    } else {
        HashSet::new()
    };

    pages
        .iter()
        .map(|page| {
            let kept: Vec<&str> = page
                .split('\n')
                .filter(|line| !boilerplate.contains(line))
                .filter(|line| is_content_line(line))
                .collect();
            kept.join("\n")
        })
        .collect()
}

/// A content line has more than two non-space characters and is mostly
/// alphabetic. Only the ASCII space counts as spacing here; tabs and
/// other whitespace are treated as content characters.
fn is_content_line(line: &str) -> bool {
    let non_space = line.chars().filter(|&c| c != ' ').count();
    if non_space <= 2 {
        return false;
    }
    let alphabetic = line.chars().filter(|c| c.is_alphabetic()).count();
    // Integer form of `alphabetic / non_space > 0.5`.
    alphabetic * 2 > non_space
}
