use crate::api::ApiError;

pub enum Msg {
    SetField(&'static str, String),
    Submit,
    SaveDone(Result<(), ApiError>),
    Cancel,
}
