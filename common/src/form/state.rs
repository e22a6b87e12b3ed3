use std::collections::HashSet;

use crate::model::site::Site;

use super::draft::{Draft, Field, FieldErrors, FormMode, ImageFile, Submission};

/// Why `SiteForm::begin_submit` did not produce a request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// A request for this form is still pending.
    InFlight,
    /// The last submission succeeded and the form is about to be left.
    Completed,
    /// Validation failed; the errors are now visible on every field.
    Invalid(FieldErrors),
}

/// Controller behind the create/update screen.
///
/// Errors are computed on every change but only shown for touched fields
/// or after a submit attempt, so a fresh create form starts without error
/// text and with an enabled submit button.
#[derive(Clone, Debug)]
pub struct SiteForm<F> {
    draft: Draft<F>,
    errors: FieldErrors,
    touched: HashSet<Field>,
    submit_attempted: bool,
    submitting: bool,
    completed: bool,
}

impl<F: ImageFile> SiteForm<F> {
    pub fn create() -> Self {
        let draft = Draft::create();
        let errors = draft.validate().err().unwrap_or_default();
        Self {
            draft,
            errors,
            touched: HashSet::new(),
            submit_attempted: false,
            submitting: false,
            completed: false,
        }
    }

    /// Edit form populated from a fetched record. Every field counts as
    /// touched so the hydrated values are validated right away.
    pub fn hydrate(site: &Site) -> Self {
        let mut form = Self {
            draft: Draft::hydrate(site),
            errors: FieldErrors::default(),
            touched: Field::ALL.into_iter().collect(),
            submit_attempted: false,
            submitting: false,
            completed: false,
        };
        form.revalidate();
        form
    }

    pub fn draft(&self) -> &Draft<F> {
        &self.draft
    }

    pub fn mode(&self) -> FormMode {
        self.draft.mode()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set_text(&mut self, field: Field, value: String) {
        self.draft.fields_mut().set_text(field, value);
        self.touch(field);
    }

    pub fn set_trending(&mut self, value: bool) {
        self.draft.fields_mut().is_trending = value;
        self.touch(Field::IsTrending);
    }

    pub fn select_image(&mut self, file: F) {
        self.draft.select_image(file);
        self.touch(Field::Image);
    }

    /// Error text to render under `field`, if any.
    pub fn visible_error(&self, field: Field) -> Option<&'static str> {
        if self.submit_attempted || self.touched.contains(&field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    fn has_visible_errors(&self) -> bool {
        Field::ALL
            .into_iter()
            .any(|field| self.visible_error(field).is_some())
    }

    pub fn can_submit(&self) -> bool {
        !self.submitting && !self.completed && !self.has_visible_errors()
    }

    /// Validates and, if the draft is acceptable, marks the form in flight.
    /// Returns the single request to send for this click.
    pub fn begin_submit(&mut self) -> Result<Submission, SubmitBlocked> {
        if self.submitting {
            return Err(SubmitBlocked::InFlight);
        }
        if self.completed {
            return Err(SubmitBlocked::Completed);
        }

        self.submit_attempted = true;
        match self.draft.submission() {
            Ok(submission) => {
                self.errors = FieldErrors::default();
                self.submitting = true;
                Ok(submission)
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(SubmitBlocked::Invalid(errors))
            }
        }
    }

    /// Records the outcome of the request started by `begin_submit`.
    ///
    /// Success empties the draft; failure leaves it as typed for a retry.
    pub fn finish_submit(&mut self, succeeded: bool) {
        self.submitting = false;
        if succeeded {
            self.draft.reset();
            self.touched.clear();
            self.submit_attempted = false;
            self.errors = FieldErrors::default();
            self.completed = true;
        }
    }

    fn touch(&mut self, field: Field) {
        self.touched.insert(field);
        self.revalidate();
    }

    fn revalidate(&mut self) {
        self.errors = self.draft.validate().err().unwrap_or_default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{DESCRIPTION_REQUIRED, IMAGE_REQUIRED, TITLE_REQUIRED};

    #[derive(Clone, Debug, PartialEq)]
    struct Picked(String);

    impl ImageFile for Picked {
        fn file_name(&self) -> String {
            self.0.clone()
        }
    }

    fn filled_create_form() -> SiteForm<Picked> {
        let mut form = SiteForm::create();
        form.set_text(Field::Title, "A".into());
        form.set_text(Field::Description, "B".into());
        form.select_image(Picked("a.png".into()));
        form
    }

    #[test]
    fn fresh_create_form_shows_no_errors() {
        let form = SiteForm::<Picked>::create();
        assert_eq!(form.mode(), FormMode::Create);
        assert!(form.can_submit());
        for field in Field::ALL {
            assert_eq!(form.visible_error(field), None);
        }
    }

    #[test]
    fn submit_without_title_is_blocked_locally() {
        let mut form = SiteForm::create();
        form.set_text(Field::Description, "B".into());
        form.select_image(Picked("a.png".into()));

        let blocked = form.begin_submit().unwrap_err();
        assert!(matches!(blocked, SubmitBlocked::Invalid(_)));
        assert_eq!(form.visible_error(Field::Title), Some(TITLE_REQUIRED));
        assert!(!form.is_submitting());
        assert!(!form.can_submit());
    }

    #[test]
    fn submit_without_image_is_blocked_locally() {
        let mut form = SiteForm::<Picked>::create();
        form.set_text(Field::Title, "A".into());
        form.set_text(Field::Description, "B".into());

        assert!(form.begin_submit().is_err());
        assert_eq!(form.visible_error(Field::Image), Some(IMAGE_REQUIRED));
    }

    #[test]
    fn errors_only_show_for_touched_fields() {
        let mut form = SiteForm::<Picked>::create();
        form.set_text(Field::Title, String::new());

        assert_eq!(form.visible_error(Field::Title), Some(TITLE_REQUIRED));
        assert_eq!(form.visible_error(Field::Description), None);

        form.set_text(Field::Description, "x".into());
        form.set_text(Field::Description, String::new());
        assert_eq!(form.visible_error(Field::Description), Some(DESCRIPTION_REQUIRED));
    }

    #[test]
    fn one_request_per_click_while_in_flight() {
        let mut form = filled_create_form();

        let first = form.begin_submit().unwrap();
        assert!(matches!(first, Submission::Create(_)));
        assert!(form.is_submitting());
        assert!(!form.can_submit());

        assert_eq!(form.begin_submit(), Err(SubmitBlocked::InFlight));
    }

    #[test]
    fn failed_request_keeps_draft_for_retry() {
        let mut form = filled_create_form();
        form.begin_submit().unwrap();
        form.finish_submit(false);

        assert!(form.can_submit());
        assert_eq!(form.draft().fields().title, "A");
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn successful_request_resets_and_locks_the_form() {
        let mut form = filled_create_form();
        form.begin_submit().unwrap();
        form.finish_submit(true);

        assert_eq!(form.draft().fields().title, "");
        assert!(form.draft().selected_image().is_none());
        assert!(!form.can_submit());
        assert_eq!(form.begin_submit(), Err(SubmitBlocked::Completed));
    }

    #[test]
    fn hydration_copies_every_field() {
        let site = Site {
            id: "id-1".into(),
            title: "A".into(),
            description: "B".into(),
            image: "cover.png".into(),
            url: Some("https://a.example".into()),
            author: Some("me".into()),
            is_trending: false,
            updated_at: Some("2024-01-01".into()),
        };

        let form = SiteForm::<Picked>::hydrate(&site);
        let fields = form.draft().fields();
        assert_eq!(form.mode(), FormMode::Edit);
        assert_eq!(fields.title, "A");
        assert_eq!(fields.description, "B");
        assert_eq!(fields.url, "https://a.example");
        assert_eq!(fields.author, "me");
        assert!(!fields.is_trending);
        assert_eq!(form.draft().image_display_name().as_deref(), Some("cover.png"));
        assert!(form.can_submit());
    }

    #[test]
    fn hydrated_invalid_record_shows_errors_immediately() {
        let site = Site {
            id: "id-2".into(),
            title: String::new(),
            description: "B".into(),
            image: "cover.png".into(),
            url: None,
            author: None,
            is_trending: true,
            updated_at: None,
        };

        let form = SiteForm::<Picked>::hydrate(&site);
        assert_eq!(form.visible_error(Field::Title), Some(TITLE_REQUIRED));
        assert!(!form.can_submit());
    }

    #[test]
    fn created_record_round_trips_into_edit_mode() {
        let mut form = SiteForm::create();
        form.set_text(Field::Title, "A".into());
        form.set_text(Field::Description, "B".into());
        form.set_trending(true);
        form.select_image(Picked("photo.jpg".into()));

        let Ok(Submission::Create(payload)) = form.begin_submit() else {
            panic!("expected a create submission");
        };

        // What the backend would hand back for the new record.
        let stored = Site {
            id: "new-id".into(),
            title: payload.title,
            description: payload.description,
            image: payload.image,
            url: Some(payload.url),
            author: Some(payload.author),
            is_trending: payload.is_trending,
            updated_at: None,
        };

        let edit = SiteForm::<Picked>::hydrate(&stored);
        assert_eq!(edit.draft().fields().title, "A");
        assert_eq!(edit.draft().fields().description, "B");
        assert!(edit.draft().fields().is_trending);
        assert_eq!(edit.draft().image_display_name().as_deref(), Some("photo.jpg"));
    }
}
