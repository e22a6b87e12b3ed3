use crate::model::site::Site;
use crate::requests::SitePayload;

pub const TITLE_REQUIRED: &str = "Title is required";
pub const DESCRIPTION_REQUIRED: &str = "Description is required";
pub const IMAGE_REQUIRED: &str = "Image is required";

/// A file picked by the user. Only its name is sent to the backend.
pub trait ImageFile: Clone {
    fn file_name(&self) -> String;
}

/// Form inputs, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Description,
    Image,
    Url,
    Author,
    IsTrending,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Title,
        Field::Description,
        Field::Image,
        Field::Url,
        Field::Author,
        Field::IsTrending,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// Inputs shared by both draft variants.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DraftFields {
    pub title: String,
    pub description: String,
    pub url: String,
    pub author: String,
    pub is_trending: bool,
}

impl DraftFields {
    fn from_site(site: &Site) -> Self {
        Self {
            title: site.title.clone(),
            description: site.description.clone(),
            url: site.url.clone().unwrap_or_default(),
            author: site.author.clone().unwrap_or_default(),
            is_trending: site.is_trending,
        }
    }

    /// Writes a text input. `IsTrending` and `Image` are not text and are ignored.
    pub fn set_text(&mut self, field: Field, value: String) {
        match field {
            Field::Title => self.title = value,
            Field::Description => self.description = value,
            Field::Url => self.url = value,
            Field::Author => self.author = value,
            Field::Image | Field::IsTrending => {}
        }
    }

    fn check(&self, errors: &mut FieldErrors) {
        if self.title.trim().is_empty() {
            errors.title = Some(TITLE_REQUIRED);
        }
        if self.description.trim().is_empty() {
            errors.description = Some(DESCRIPTION_REQUIRED);
        }
    }

    fn payload(&self, image: String) -> SitePayload {
        SitePayload {
            title: self.title.clone(),
            description: self.description.clone(),
            image,
            url: self.url.clone(),
            author: self.author.clone(),
            is_trending: self.is_trending,
        }
    }
}

/// Draft of a record that does not exist yet. An image must be picked.
#[derive(Clone, Debug)]
pub struct CreateDraft<F> {
    pub fields: DraftFields,
    pub image: Option<F>,
}

impl<F> Default for CreateDraft<F> {
    fn default() -> Self {
        Self {
            fields: DraftFields::default(),
            image: None,
        }
    }
}

impl<F: ImageFile> CreateDraft<F> {
    pub fn validate(&self) -> Result<SitePayload, FieldErrors> {
        let mut errors = FieldErrors::default();
        self.fields.check(&mut errors);
        let image = self.image.as_ref().map(ImageFile::file_name);
        if image.as_deref().is_none_or(str::is_empty) {
            errors.image = Some(IMAGE_REQUIRED);
        }

        match image {
            Some(image) if errors.is_empty() => Ok(self.fields.payload(image)),
            _ => Err(errors),
        }
    }
}

/// Draft hydrated from an existing record. Leaving the image untouched keeps
/// the stored reference.
#[derive(Clone, Debug)]
pub struct EditDraft<F> {
    pub id: String,
    pub fields: DraftFields,
    pub stored_image: String,
    pub replacement: Option<F>,
}

impl<F: ImageFile> EditDraft<F> {
    pub fn validate(&self) -> Result<SitePayload, FieldErrors> {
        let mut errors = FieldErrors::default();
        self.fields.check(&mut errors);
        if !errors.is_empty() {
            return Err(errors);
        }

        let image = match &self.replacement {
            Some(file) => file.file_name(),
            None => self.stored_image.clone(),
        };
        Ok(self.fields.payload(image))
    }
}

/// In-progress record, keyed by mode so each mode validates its own way.
#[derive(Clone, Debug)]
pub enum Draft<F> {
    Create(CreateDraft<F>),
    Edit(EditDraft<F>),
}

/// What an accepted submit sends.
#[derive(Clone, Debug, PartialEq)]
pub enum Submission {
    /// `POST /admin/site`
    Create(SitePayload),
    /// `PUT /admin/site/{id}`
    Update { id: String, payload: SitePayload },
}

impl<F: ImageFile> Draft<F> {
    pub fn create() -> Self {
        Draft::Create(CreateDraft::default())
    }

    pub fn hydrate(site: &Site) -> Self {
        Draft::Edit(EditDraft {
            id: site.id.clone(),
            fields: DraftFields::from_site(site),
            stored_image: site.image.clone(),
            replacement: None,
        })
    }

    pub fn mode(&self) -> FormMode {
        match self {
            Draft::Create(_) => FormMode::Create,
            Draft::Edit(_) => FormMode::Edit,
        }
    }

    pub fn fields(&self) -> &DraftFields {
        match self {
            Draft::Create(draft) => &draft.fields,
            Draft::Edit(draft) => &draft.fields,
        }
    }

    pub fn fields_mut(&mut self) -> &mut DraftFields {
        match self {
            Draft::Create(draft) => &mut draft.fields,
            Draft::Edit(draft) => &mut draft.fields,
        }
    }

    pub fn select_image(&mut self, file: F) {
        match self {
            Draft::Create(draft) => draft.image = Some(file),
            Draft::Edit(draft) => draft.replacement = Some(file),
        }
    }

    /// The file the user picked in this session, if any.
    pub fn selected_image(&self) -> Option<&F> {
        match self {
            Draft::Create(draft) => draft.image.as_ref(),
            Draft::Edit(draft) => draft.replacement.as_ref(),
        }
    }

    /// Name shown next to the file input: the picked file, else the stored image.
    pub fn image_display_name(&self) -> Option<String> {
        if let Some(file) = self.selected_image() {
            return Some(file.file_name());
        }
        match self {
            Draft::Edit(draft) if !draft.stored_image.is_empty() => {
                Some(draft.stored_image.clone())
            }
            _ => None,
        }
    }

    pub fn validate(&self) -> Result<SitePayload, FieldErrors> {
        match self {
            Draft::Create(draft) => draft.validate(),
            Draft::Edit(draft) => draft.validate(),
        }
    }

    pub fn submission(&self) -> Result<Submission, FieldErrors> {
        let payload = self.validate()?;
        Ok(match self {
            Draft::Create(_) => Submission::Create(payload),
            Draft::Edit(draft) => Submission::Update {
                id: draft.id.clone(),
                payload,
            },
        })
    }

    /// Clears every input. An edit draft stays bound to its record.
    pub fn reset(&mut self) {
        match self {
            Draft::Create(draft) => *draft = CreateDraft::default(),
            Draft::Edit(draft) => {
                draft.fields = DraftFields::default();
                draft.stored_image.clear();
                draft.replacement = None;
            }
        }
    }
}

/// Per-field validation messages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub title: Option<&'static str>,
    pub description: Option<&'static str>,
    pub image: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.image.is_none()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Title => self.title,
            Field::Description => self.description,
            Field::Image => self.image,
            Field::Url | Field::Author | Field::IsTrending => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Picked(&'static str);

    impl ImageFile for Picked {
        fn file_name(&self) -> String {
            self.0.to_string()
        }
    }

    fn stored_site() -> Site {
        Site {
            id: "abc".into(),
            title: "Rust".into(),
            description: "Systems language".into(),
            image: "rust.png".into(),
            url: None,
            author: Some("ferris".into()),
            is_trending: false,
            updated_at: None,
        }
    }

    #[test]
    fn create_without_title_or_image_reports_both() {
        let mut draft = Draft::<Picked>::create();
        draft.fields_mut().description = "B".into();

        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.title, Some(TITLE_REQUIRED));
        assert_eq!(errors.description, None);
        assert_eq!(errors.image, Some(IMAGE_REQUIRED));
    }

    #[test]
    fn blank_text_counts_as_missing() {
        let mut draft = Draft::<Picked>::create();
        draft.fields_mut().title = "   ".into();
        draft.fields_mut().description = "\n".into();
        draft.select_image(Picked("a.png"));

        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.get(Field::Title), Some(TITLE_REQUIRED));
        assert_eq!(errors.get(Field::Description), Some(DESCRIPTION_REQUIRED));
        assert_eq!(errors.get(Field::Image), None);
    }

    #[test]
    fn valid_create_posts_filename() {
        let mut draft = Draft::create();
        draft.fields_mut().title = "A".into();
        draft.fields_mut().description = "B".into();
        draft.fields_mut().is_trending = true;
        draft.select_image(Picked("cover.jpg"));

        let submission = draft.submission().unwrap();
        let Submission::Create(payload) = submission else {
            panic!("expected a create submission");
        };
        assert_eq!(payload.image, "cover.jpg");
        assert!(payload.is_trending);
        assert_eq!(payload.url, "");
    }

    #[test]
    fn edit_without_new_image_keeps_stored_reference() {
        let draft = Draft::<Picked>::hydrate(&stored_site());

        assert_eq!(draft.mode(), FormMode::Edit);
        assert_eq!(draft.image_display_name().as_deref(), Some("rust.png"));
        match draft.submission().unwrap() {
            Submission::Update { id, payload } => {
                assert_eq!(id, "abc");
                assert_eq!(payload.image, "rust.png");
                assert_eq!(payload.author, "ferris");
                assert_eq!(payload.url, "");
            }
            other => panic!("expected update, got {:?}", other),
        }
    }

    #[test]
    fn edit_with_replacement_sends_new_filename() {
        let mut draft = Draft::hydrate(&stored_site());
        draft.select_image(Picked("new.png"));

        assert_eq!(draft.image_display_name().as_deref(), Some("new.png"));
        let payload = draft.validate().unwrap();
        assert_eq!(payload.image, "new.png");
    }

    #[test]
    fn edit_still_requires_title() {
        let mut draft = Draft::<Picked>::hydrate(&stored_site());
        draft.fields_mut().set_text(Field::Title, String::new());

        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.title, Some(TITLE_REQUIRED));
        assert_eq!(errors.image, None);
    }

    #[test]
    fn reset_clears_inputs_but_keeps_mode() {
        let mut draft = Draft::hydrate(&stored_site());
        draft.select_image(Picked("new.png"));
        draft.reset();

        assert_eq!(draft.mode(), FormMode::Edit);
        assert_eq!(draft.fields(), &DraftFields::default());
        assert!(draft.selected_image().is_none());
        assert_eq!(draft.image_display_name(), None);
    }
}
