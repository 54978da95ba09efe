use common::model::page::Page;
use common::model::record::Record;
use common::model::reference::ReferenceItem;

use crate::api::ApiError;

pub enum Msg {
    SetSearchText(String),
    SubmitSearch,
    SetFilter(&'static str, String),
    ClearFilters,
    ToggleFilters,
    PrevPage,
    NextPage,
    Refresh,
    Fetch,
    FetchDone {
        seq: u32,
        result: Result<Page<Record>, ApiError>,
    },
    ReferenceDone {
        types: Vec<ReferenceItem>,
        statuses: Vec<ReferenceItem>,
    },
    ToggleSelect(String),
    ToggleSelectAll,
    BulkDelete(Vec<String>),
    BulkDeleteDone {
        failures: Vec<(String, ApiError)>,
    },
    Export,
    ExportDone(Result<String, ApiError>),
    OpenCreate,
    OpenEdit(Record),
    CloseForm,
    Saved,
}
