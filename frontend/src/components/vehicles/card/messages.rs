use crate::api::ApiError;

pub enum Msg {
    /// The card's single action button.
    PrimaryAction,
    CloseDialog,
    SetPersonName(String),
    SetEstimatedDate(String),
    Submit,
    SubmitFailed(ApiError),
    RemoveFailed(ApiError),
    Updated,
    ImageFailed,
}
