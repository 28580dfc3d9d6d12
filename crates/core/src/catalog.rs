//! Catalog listing rules: title search, genre/author filters and card text.
//!
//! The listing page filters the full movie list it fetched, so these helpers
//! work on any slice of [`CatalogItem`] and never touch the store.

use indexmap::IndexSet;

// ---------------------------------------------------------------------------
// Presentation constants
// ---------------------------------------------------------------------------

/// Number of synopsis characters shown on a catalog card.
pub const SYNOPSIS_PREVIEW_CHARS: usize = 100;

/// Suffix appended to every synopsis preview, whether or not it was cut.
pub const SYNOPSIS_PREVIEW_SUFFIX: &str = "...";

/// Image shown when a movie has no picture.
pub const PLACEHOLDER_PICTURE: &str = "https://via.placeholder.com/400";

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Fields the catalog filters on.
pub trait CatalogItem {
    fn title(&self) -> &str;
    fn genre(&self) -> &str;
    fn author(&self) -> &str;
}

/// The listing page's filter state.
///
/// An empty `genre` or `author` means "no filter", same as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    pub search: String,
    pub genre: Option<String>,
    pub author: Option<String>,
}

impl CatalogFilter {
    /// Whether `item` passes all three conditions.
    ///
    /// Title search is a case-insensitive substring match; genre and author
    /// must match exactly.
    pub fn matches<T: CatalogItem + ?Sized>(&self, item: &T) -> bool {
        let search = self.search.to_lowercase();
        item.title().to_lowercase().contains(&search)
            && exact_or_unset(self.genre.as_deref(), item.genre())
            && exact_or_unset(self.author.as_deref(), item.author())
    }

    /// Keep the items that pass the filter, in their original order.
    pub fn apply<'a, T: CatalogItem>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.matches(*item)).collect()
    }
}

fn exact_or_unset(filter: Option<&str>, value: &str) -> bool {
    match filter {
        Some(wanted) if !wanted.is_empty() => wanted == value,
        _ => true,
    }
}

/// Distinct genres in first-seen order.
///
/// Always computed over the unfiltered list, so the options do not shrink
/// as other filters are applied.
pub fn distinct_genres<T: CatalogItem>(items: &[T]) -> Vec<String> {
    distinct(items.iter().map(CatalogItem::genre))
}

/// Distinct authors in first-seen order. See [`distinct_genres`].
pub fn distinct_authors<T: CatalogItem>(items: &[T]) -> Vec<String> {
    distinct(items.iter().map(CatalogItem::author))
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .collect::<IndexSet<&str>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

// ---------------------------------------------------------------------------
// Card text
// ---------------------------------------------------------------------------

/// Synopsis text for a catalog card.
///
/// Takes the first [`SYNOPSIS_PREVIEW_CHARS`] characters and always appends
/// [`SYNOPSIS_PREVIEW_SUFFIX`], even when nothing was cut. A missing synopsis
/// yields just the suffix.
///
/// ```
/// use cineteca_core::catalog::synopsis_preview;
/// assert_eq!(synopsis_preview(Some("Short")), "Short...");
/// assert_eq!(synopsis_preview(None), "...");
/// ```
pub fn synopsis_preview(synopsis: Option<&str>) -> String {
    let mut preview: String = synopsis
        .unwrap_or_default()
        .chars()
        .take(SYNOPSIS_PREVIEW_CHARS)
        .collect();
    preview.push_str(SYNOPSIS_PREVIEW_SUFFIX);
    preview
}

/// The picture URL to render, falling back to [`PLACEHOLDER_PICTURE`] when
/// the movie has none or it is empty.
pub fn picture_or_placeholder(picture: Option<&str>) -> &str {
    match picture {
        Some(url) if !url.is_empty() => url,
        _ => PLACEHOLDER_PICTURE,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    struct Entry {
        title: &'static str,
        genre: &'static str,
        author: &'static str,
    }

    impl CatalogItem for Entry {
        fn title(&self) -> &str {
            self.title
        }
        fn genre(&self) -> &str {
            self.genre
        }
        fn author(&self) -> &str {
            self.author
        }
    }

    fn sample() -> Vec<Entry> {
        vec![
            Entry {
                title: "Dune",
                genre: "SciFi",
                author: "X",
            },
            Entry {
                title: "Jaws",
                genre: "Horror",
                author: "Y",
            },
        ]
    }

    fn titles(items: &[&Entry]) -> Vec<&'static str> {
        items.iter().map(|e| e.title).collect()
    }

    // -- CatalogFilter -------------------------------------------------------

    #[test]
    fn empty_filter_keeps_everything() {
        let movies = sample();
        let filtered = CatalogFilter::default().apply(&movies);
        assert_eq!(titles(&filtered), vec!["Dune", "Jaws"]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let movies = sample();
        let filter = CatalogFilter {
            search: "du".into(),
            ..Default::default()
        };
        assert_eq!(titles(&filter.apply(&movies)), vec!["Dune"]);

        let filter = CatalogFilter {
            search: "AW".into(),
            ..Default::default()
        };
        assert_eq!(titles(&filter.apply(&movies)), vec!["Jaws"]);
    }

    #[test]
    fn genre_filter_with_empty_search() {
        let movies = sample();
        let filter = CatalogFilter {
            genre: Some("Horror".into()),
            ..Default::default()
        };
        assert_eq!(titles(&filter.apply(&movies)), vec!["Jaws"]);
    }

    #[test]
    fn genre_filter_is_exact() {
        let movies = sample();
        let filter = CatalogFilter {
            genre: Some("horror".into()),
            ..Default::default()
        };
        assert!(filter.apply(&movies).is_empty());
    }

    #[test]
    fn empty_filter_values_mean_unset() {
        let movies = sample();
        let filter = CatalogFilter {
            search: String::new(),
            genre: Some(String::new()),
            author: Some(String::new()),
        };
        assert_eq!(filter.apply(&movies).len(), 2);
    }

    #[test]
    fn conditions_are_combined() {
        let movies = sample();
        let filter = CatalogFilter {
            search: "dune".into(),
            genre: Some("SciFi".into()),
            author: Some("Y".into()),
        };
        assert!(filter.apply(&movies).is_empty());
    }

    // -- distinct options ----------------------------------------------------

    #[test]
    fn distinct_options_keep_first_seen_order() {
        let movies = vec![
            Entry {
                title: "A",
                genre: "Drama",
                author: "Z",
            },
            Entry {
                title: "B",
                genre: "Comedy",
                author: "Z",
            },
            Entry {
                title: "C",
                genre: "Drama",
                author: "W",
            },
        ];
        assert_eq!(distinct_genres(&movies), vec!["Drama", "Comedy"]);
        assert_eq!(distinct_authors(&movies), vec!["Z", "W"]);
    }

    // -- synopsis_preview ----------------------------------------------------

    #[test]
    fn long_synopsis_is_cut_at_100_chars() {
        let synopsis = "a".repeat(150);
        let preview = synopsis_preview(Some(&synopsis));
        assert_eq!(preview, format!("{}...", "a".repeat(100)));
    }

    #[test]
    fn short_synopsis_still_gets_ellipsis() {
        assert_eq!(synopsis_preview(Some("A desert planet.")), "A desert planet....");
    }

    #[test]
    fn exactly_100_chars_gets_ellipsis() {
        let synopsis = "b".repeat(100);
        assert_eq!(synopsis_preview(Some(&synopsis)), format!("{synopsis}..."));
    }

    #[test]
    fn preview_counts_characters_not_bytes() {
        let synopsis = "ñ".repeat(120);
        let preview = synopsis_preview(Some(&synopsis));
        assert_eq!(preview.chars().count(), 103);
    }

    // -- picture_or_placeholder ----------------------------------------------

    #[test]
    fn missing_or_empty_picture_uses_placeholder() {
        assert_eq!(picture_or_placeholder(None), PLACEHOLDER_PICTURE);
        assert_eq!(picture_or_placeholder(Some("")), PLACEHOLDER_PICTURE);
        assert_eq!(
            picture_or_placeholder(Some("https://img.example/dune.jpg")),
            "https://img.example/dune.jpg"
        );
    }
}
