//! Create and edit forms.
//!
//! Both pages share one form: the required checks run first, then the form
//! is sent to the API and the browser is redirected to the movie's detail
//! page.

use validator::Validate;

use crate::api::{MovieApi, MovieForm};
use crate::html::{document, edit_path, escape};

/// Which movie the form writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

/// Local state of a create or edit page.
#[derive(Debug)]
pub struct FormPage {
    pub mode: FormMode,
    pub form: MovieForm,
    /// Messages for required fields left empty.
    pub field_errors: Vec<String>,
    /// A failure talking to the API.
    pub notice: Option<String>,
}

/// Outcome of submitting a form page.
#[derive(Debug)]
pub enum Submission {
    /// Navigate to the detail page of this movie.
    Redirect(String),
    /// Show the form again with its errors.
    Retry(FormPage),
}

impl FormPage {
    pub fn new(mode: FormMode, form: MovieForm) -> Self {
        Self {
            mode,
            form,
            field_errors: Vec::new(),
            notice: None,
        }
    }

    /// Check the required fields, then create or update through the API.
    ///
    /// On create the response status is ignored; the page only needs an
    /// `_id` in the body to move on.
    pub async fn submit(mut self, api: &MovieApi) -> Submission {
        self.field_errors = required_field_errors(&self.form);
        if !self.field_errors.is_empty() {
            return Submission::Retry(self);
        }

        match self.mode.clone() {
            FormMode::Create => match api.create(&self.form).await {
                Ok(body) => match body.get("_id").and_then(|id| id.as_str()) {
                    Some(id) => {
                        tracing::info!(movie_id = %id, "Movie created from form");
                        Submission::Redirect(id.to_string())
                    }
                    None => {
                        tracing::warn!(%body, "Create response carried no _id");
                        self.notice = Some("The movie could not be saved.".to_string());
                        Submission::Retry(self)
                    }
                },
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to create movie");
                    self.notice = Some(e.to_string());
                    Submission::Retry(self)
                }
            },
            FormMode::Edit { id } => match api.update(&id, &self.form).await {
                Ok(movie) => Submission::Redirect(movie.id),
                Err(e) => {
                    tracing::warn!(movie_id = %id, error = %e, "Failed to update movie");
                    self.notice = Some(e.to_string());
                    Submission::Retry(self)
                }
            },
        }
    }

    pub fn render(&self) -> String {
        let (heading, action, button) = match &self.mode {
            FormMode::Create => (
                "Create New Movie".to_string(),
                "/create".to_string(),
                "Save Movie",
            ),
            FormMode::Edit { id } => ("Edit Movie".to_string(), edit_path(id), "Save Changes"),
        };

        let mut body = format!("<h1>{heading}</h1>\n");

        if let Some(notice) = &self.notice {
            body.push_str(&format!("<p class=\"error\">Error: {}</p>\n", escape(notice)));
        }
        if !self.field_errors.is_empty() {
            body.push_str("<ul class=\"errors\">\n");
            for message in &self.field_errors {
                body.push_str(&format!("<li>{}</li>\n", escape(message)));
            }
            body.push_str("</ul>\n");
        }

        body.push_str(&format!("<form method=\"post\" action=\"{action}\">\n"));
        body.push_str(&input("title", "Title", &self.form.title, true));
        body.push_str(&input("author", "Author", &self.form.author, true));
        body.push_str(&input("genre", "Genre", &self.form.genre, true));
        body.push_str(&format!(
            "<label for=\"synopsis\">Synopsis</label>\n\
             <textarea id=\"synopsis\" name=\"synopsis\" placeholder=\"Synopsis\" rows=\"4\">{}</textarea>\n",
            escape(&self.form.synopsis)
        ));
        body.push_str(&input("picture", "Image URL", &self.form.picture, false));
        body.push_str(&format!("<button type=\"submit\">{button}</button>\n</form>\n"));

        document(&heading, &body)
    }
}

/// Messages for the required fields that are empty, in form order.
fn required_field_errors(form: &MovieForm) -> Vec<String> {
    let Err(errors) = form.validate() else {
        return Vec::new();
    };
    let fields = errors.field_errors();

    ["title", "author", "genre"]
        .into_iter()
        .filter_map(|field| fields.get(field))
        .flat_map(|errs| errs.iter())
        .map(|err| {
            err.message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{} is invalid", err.code))
        })
        .collect()
}

fn input(name: &str, label: &str, value: &str, required: bool) -> String {
    let required = if required { " required" } else { "" };
    format!(
        "<label for=\"{name}\">{label}</label>\n\
         <input type=\"text\" id=\"{name}\" name=\"{name}\" placeholder=\"{label}\" value=\"{value}\"{required}>\n",
        value = escape(value),
    )
}
