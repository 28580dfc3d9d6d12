//! Catalog listing page: every movie as a card, with title search and
//! genre/author filters applied to the fetched list.

use cineteca_core::catalog::{
    distinct_authors, distinct_genres, picture_or_placeholder, synopsis_preview, CatalogFilter,
};
use serde::Deserialize;

use crate::api::{Movie, MovieApi};
use crate::html::{detail_path, document, escape};

/// Filter state carried in the query string (`?search=&genre=&author=`).
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    #[serde(default)]
    pub search: String,
    pub genre: Option<String>,
    pub author: Option<String>,
}

impl From<CatalogQuery> for CatalogFilter {
    fn from(query: CatalogQuery) -> Self {
        CatalogFilter {
            search: query.search,
            genre: query.genre,
            author: query.author,
        }
    }
}

/// Local state of the listing page.
#[derive(Debug, Default)]
pub struct CatalogPage {
    pub movies: Vec<Movie>,
    pub filter: CatalogFilter,
    pub error: Option<String>,
}

impl CatalogPage {
    pub fn new(filter: CatalogFilter) -> Self {
        Self {
            filter,
            ..Default::default()
        }
    }

    /// Fetch the full list once. A failure leaves the list empty and
    /// records the error for display.
    pub async fn load(&mut self, api: &MovieApi) {
        match api.list().await {
            Ok(movies) => self.movies = movies,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch movie list");
                self.error = Some(e.to_string());
            }
        }
    }

    /// Movies passing the current filter.
    pub fn visible(&self) -> Vec<&Movie> {
        self.filter.apply(&self.movies)
    }

    pub fn render(&self) -> String {
        let genres = distinct_genres(&self.movies);
        let authors = distinct_authors(&self.movies);

        let mut body = String::from("<h1>Movie Catalog</h1>\n");

        if let Some(error) = &self.error {
            body.push_str(&format!(
                "<p class=\"error\">Could not load movies: {}</p>\n",
                escape(error)
            ));
        }

        body.push_str("<form method=\"get\" action=\"/\" class=\"filters\">\n");
        body.push_str(&format!(
            "<input type=\"text\" name=\"search\" placeholder=\"Search by title...\" value=\"{}\">\n",
            escape(&self.filter.search)
        ));
        body.push_str(&select(
            "genre",
            "All genres",
            &genres,
            self.filter.genre.as_deref(),
        ));
        body.push_str(&select(
            "author",
            "All authors",
            &authors,
            self.filter.author.as_deref(),
        ));
        body.push_str("<button type=\"submit\">Filter</button>\n</form>\n");

        body.push_str("<div class=\"grid\">\n");
        for movie in self.visible() {
            body.push_str(&card(movie));
        }
        body.push_str("</div>\n");

        document("Movie Catalog", &body)
    }
}

fn select(name: &str, all_label: &str, options: &[String], selected: Option<&str>) -> String {
    let mut html = format!("<select name=\"{name}\">\n<option value=\"\">{all_label}</option>\n");
    for option in options {
        let marker = if selected == Some(option.as_str()) {
            " selected"
        } else {
            ""
        };
        let value = escape(option);
        html.push_str(&format!(
            "<option value=\"{value}\"{marker}>{value}</option>\n"
        ));
    }
    html.push_str("</select>\n");
    html
}

fn card(movie: &Movie) -> String {
    format!(
        r#"<div class="card">
<img src="{picture}" alt="{title}">
<h3>{title}</h3>
<p>Author: {author}</p>
<p>Genre: {genre}</p>
<p>{synopsis}</p>
<a href="{href}">View more</a>
</div>
"#,
        picture = escape(picture_or_placeholder(movie.picture.as_deref())),
        title = escape(&movie.title),
        author = escape(&movie.author),
        genre = escape(&movie.genre),
        synopsis = escape(&synopsis_preview(movie.synopsis.as_deref())),
        href = detail_path(&movie.id),
    )
}
