//! Page-level UI state.
//!
//! Every UI event goes through [`update`], which returns the next snapshot.
//! Admin mode only decides which controls are shown; it is not an access
//! check, and the remote store has to enforce its own authorization.

use crate::portfolio::{Category, Notice, PortfolioDraft, StoreError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    Gallery,
    Services,
    Blog,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Self::Home,
        Self::Gallery,
        Self::Services,
        Self::Blog,
        Self::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Gallery => "Gallery",
            Self::Services => "Services",
            Self::Blog => "Blog",
            Self::Contact => "Contact",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub section: Section,
    pub style: Category,
    pub admin_mode: bool,
    pub upload_open: bool,
    /// A create request is in flight.
    pub uploading: bool,
    pub draft: PortfolioDraft,
    /// Item waiting for the user to confirm its deletion.
    pub pending_delete: Option<i64>,
    pub notice: Option<Notice>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftEdit {
    Title(String),
    Category(Category),
    Description(String),
    Image(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Navigate(Section),
    SelectStyle(Category),
    ToggleAdmin,
    OpenUpload,
    CloseUpload,
    EditDraft(DraftEdit),
    SubmitUpload,
    UploadFinished(Result<(), StoreError>),
    RequestDelete(i64),
    CancelDelete,
    ConfirmDelete,
    DeleteFinished(Result<(), StoreError>),
    DismissNotice,
}

pub fn update(state: ViewState, event: UiEvent) -> ViewState {
    let mut next = state;
    match event {
        UiEvent::Navigate(section) => next.section = section,
        UiEvent::SelectStyle(style) => next.style = style,
        UiEvent::ToggleAdmin => {
            next.admin_mode = !next.admin_mode;
            if !next.admin_mode {
                next.upload_open = false;
                next.pending_delete = None;
            }
        }
        UiEvent::OpenUpload => next.upload_open = next.admin_mode,
        UiEvent::CloseUpload => next.upload_open = false,
        UiEvent::EditDraft(edit) => match edit {
            DraftEdit::Title(title) => next.draft.title = title,
            DraftEdit::Category(category) => next.draft.category = category,
            DraftEdit::Description(description) => next.draft.description = description,
            DraftEdit::Image(image_url) => next.draft.image_url = image_url,
        },
        UiEvent::SubmitUpload => {
            if next.admin_mode && next.upload_open {
                next.uploading = true;
            }
        }
        UiEvent::UploadFinished(result) => {
            next.uploading = false;
            next.notice = Some(Notice::created(&result));
            if result.is_ok() {
                next.upload_open = false;
                next.draft = PortfolioDraft::default();
            }
        }
        UiEvent::RequestDelete(id) => {
            if next.admin_mode {
                next.pending_delete = Some(id);
            }
        }
        UiEvent::CancelDelete | UiEvent::ConfirmDelete => next.pending_delete = None,
        UiEvent::DeleteFinished(result) => next.notice = Some(Notice::deleted(&result)),
        UiEvent::DismissNotice => next.notice = None,
    }
    next
}
