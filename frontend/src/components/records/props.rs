use yew::prelude::*;

use crate::entities::EntityKind;
use crate::session::Session;

/// Properties of the generic record list view.
///
/// The session is injected by the root component; a changed session (tenant
/// switch) resets pagination and refetches. `on_unauthorized` bubbles a 401
/// up so the whole app falls back to the login gate.
#[derive(Properties, PartialEq)]
pub struct RecordListProps {
    pub entity: EntityKind,
    pub session: Session,
    pub on_unauthorized: Callback<()>,
}
