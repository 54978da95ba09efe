//! Update function for the record form dialog.
//!
//! A submit validates required fields locally, then delegates to the API
//! gateway: `update` when the draft came from an existing record, `create`
//! otherwise. A failed save keeps the dialog open with the entered data
//! intact; only a successful save notifies the parent.

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{ApiClient, ApiError};

use super::messages::Msg;
use super::state::RecordFormComponent;

pub fn update(
    component: &mut RecordFormComponent,
    ctx: &Context<RecordFormComponent>,
    msg: Msg,
) -> bool {
    let descriptor = component.entity.descriptor();

    match msg {
        Msg::SetField(key, value) => {
            component.draft.insert(key, value);
            true
        }
        Msg::Submit => {
            if component.saving {
                return false;
            }
            let payload = match component.build_payload() {
                Ok(payload) => payload,
                Err(missing) => {
                    component.missing = missing;
                    component.error = Some("Please fill in the required fields".to_string());
                    return true;
                }
            };

            component.saving = true;
            component.missing.clear();
            component.error = None;

            let api = ApiClient::new(ctx.props().session.clone());
            let slug = descriptor.slug;
            let record_id = component.record_id.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = match record_id {
                    Some(id) => api.update(slug, &id, &payload).await.map(|_| ()),
                    None => api.create(slug, &payload).await.map(|_| ()),
                };
                link.send_message(Msg::SaveDone(result));
            });
            true
        }
        Msg::SaveDone(Ok(())) => {
            ctx.props().on_saved.emit(());
            false
        }
        Msg::SaveDone(Err(ApiError::Unauthorized)) => {
            ctx.props().on_unauthorized.emit(());
            false
        }
        Msg::SaveDone(Err(err)) => {
            component.saving = false;
            component.error = Some(format!("Failed to save {}: {}", descriptor.singular, err));
            true
        }
        Msg::Cancel => {
            ctx.props().on_close.emit(());
            false
        }
    }
}
