//! Update function for the record list component.
//!
//! Elm-style: receives the current state, the component `Context`, and a
//! `Msg`, mutates the state, and returns whether to re-render. Every network
//! call is spawned here and resolves into another `Msg`; a 401 from any call
//! escapes through the `on_unauthorized` prop instead of being rendered.

use futures::join;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{ApiClient, ApiError};

use super::helpers::{confirm_delete, download_csv, show_toast, title_case};
use super::messages::Msg;
use super::state::{FormTarget, RecordListComponent};

pub fn update(
    component: &mut RecordListComponent,
    ctx: &Context<RecordListComponent>,
    msg: Msg,
) -> bool {
    let descriptor = component.entity.descriptor();

    match msg {
        Msg::SetSearchText(text) => {
            component.search_input = text;
            true
        }
        Msg::SubmitSearch => {
            component.query.set_search(component.search_input.clone());
            ctx.link().send_message(Msg::Fetch);
            false
        }
        Msg::SetFilter(key, value) => {
            component.query.set_filter(key, value);
            ctx.link().send_message(Msg::Fetch);
            true
        }
        Msg::ClearFilters => {
            component.query.clear_filters();
            ctx.link().send_message(Msg::Fetch);
            true
        }
        Msg::ToggleFilters => {
            component.filters_open = !component.filters_open;
            true
        }
        Msg::PrevPage => {
            if component.has_previous && component.go_to_page(component.query.page - 1) {
                ctx.link().send_message(Msg::Fetch);
            }
            false
        }
        Msg::NextPage => {
            if component.has_next && component.go_to_page(component.query.page + 1) {
                ctx.link().send_message(Msg::Fetch);
            }
            false
        }
        Msg::Refresh => {
            ctx.link().send_message(Msg::Fetch);
            false
        }
        Msg::Fetch => {
            let seq = component.begin_fetch();
            let api = api(ctx);
            let slug = descriptor.slug;
            let query = component.query.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api.list(slug, &query).await;
                link.send_message(Msg::FetchDone { seq, result });
            });
            true
        }
        Msg::FetchDone { seq, result } => match result {
            Ok(page) => component.apply_page(seq, page),
            Err(ApiError::Unauthorized) => {
                ctx.props().on_unauthorized.emit(());
                false
            }
            Err(err) => component.fetch_failed(
                seq,
                format!("Failed to fetch {}s: {}", descriptor.singular, err),
            ),
        },
        Msg::ReferenceDone { types, statuses } => {
            component.referral_types = types;
            component.referral_statuses = statuses;
            true
        }
        Msg::ToggleSelect(id) => {
            component.toggle_select(id);
            true
        }
        Msg::ToggleSelectAll => {
            component.toggle_select_all();
            true
        }
        Msg::BulkDelete(ids) => {
            if ids.is_empty() || !confirm_delete(ids.len(), descriptor.singular) {
                return false;
            }
            let api = api(ctx);
            let slug = descriptor.slug;
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcomes = api.bulk_delete(slug, &ids).await;
                let failures = outcomes
                    .into_iter()
                    .filter_map(|(id, result)| result.err().map(|err| (id, err)))
                    .collect();
                link.send_message(Msg::BulkDeleteDone { failures });
            });
            false
        }
        Msg::BulkDeleteDone { failures } => {
            component.selection.clear();
            if failures
                .iter()
                .any(|(_, err)| matches!(err, ApiError::Unauthorized))
            {
                ctx.props().on_unauthorized.emit(());
                return false;
            }
            if !failures.is_empty() {
                for (id, err) in &failures {
                    gloo_console::error!(format!(
                        "Delete failed for {} {}: {}",
                        descriptor.singular, id, err
                    ));
                }
                component.error = Some(format!("Failed to delete {}s", descriptor.singular));
            }
            // The refetch, not the per-call outcomes, decides what remains.
            ctx.link().send_message(Msg::Fetch);
            true
        }
        Msg::Export => {
            let api = api(ctx);
            let slug = descriptor.slug;
            let query = component.query.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api.export(slug, &query).await;
                link.send_message(Msg::ExportDone(result));
            });
            false
        }
        Msg::ExportDone(Ok(csv)) => {
            download_csv(&format!("{}.csv", descriptor.slug), &csv);
            false
        }
        Msg::ExportDone(Err(ApiError::Unauthorized)) => {
            ctx.props().on_unauthorized.emit(());
            false
        }
        Msg::ExportDone(Err(err)) => {
            component.error = Some(format!("Failed to export {}s: {}", descriptor.singular, err));
            true
        }
        Msg::OpenCreate => {
            component.form = FormTarget::Create;
            true
        }
        Msg::OpenEdit(record) => {
            component.form = FormTarget::Edit(record);
            true
        }
        Msg::CloseForm => {
            component.form = FormTarget::Closed;
            true
        }
        Msg::Saved => {
            component.form = FormTarget::Closed;
            show_toast(&format!("{} saved", title_case(descriptor.singular)));
            ctx.link().send_message(Msg::Fetch);
            true
        }
    }
}

/// Loads the referral reference lists concurrently. Failures only log: the
/// selects degrade to empty option lists and the page stays usable.
pub fn load_reference_data(ctx: &Context<RecordListComponent>) {
    let api = api(ctx);
    let link = ctx.link().clone();
    spawn_local(async move {
        let (types, statuses) = join!(
            api.reference_list("referral-types"),
            api.reference_list("referral-status")
        );
        let types = types.unwrap_or_else(|err| {
            gloo_console::error!(format!("Failed to fetch referral types: {}", err));
            Vec::new()
        });
        let statuses = statuses.unwrap_or_else(|err| {
            gloo_console::error!(format!("Failed to fetch referral statuses: {}", err));
            Vec::new()
        });
        link.send_message(Msg::ReferenceDone { types, statuses });
    });
}

fn api(ctx: &Context<RecordListComponent>) -> ApiClient {
    ApiClient::new(ctx.props().session.clone())
}
