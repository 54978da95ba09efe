use yew::prelude::*;

use common::model::record::Record;
use common::model::reference::ReferenceItem;

use crate::entities::EntityKind;
use crate::session::Session;

/// Properties for the record form dialog.
///
/// `record` decides the mode: `Some` opens an edit draft cloned from that
/// row, `None` a create draft seeded from the entity's defaults. The parent
/// list view wires `on_saved` to close-and-refetch and `on_close` to a plain
/// close; neither fires on a failed save.
#[derive(Properties, PartialEq)]
pub struct RecordFormProps {
    pub entity: EntityKind,
    pub session: Session,
    #[prop_or_default]
    pub record: Option<Record>,
    #[prop_or_default]
    pub referral_types: Vec<ReferenceItem>,
    #[prop_or_default]
    pub referral_statuses: Vec<ReferenceItem>,
    pub on_saved: Callback<()>,
    pub on_close: Callback<()>,
    pub on_unauthorized: Callback<()>,
}
