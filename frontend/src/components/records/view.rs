//! View rendering for the record list component.
//!
//! Layout per entity page: header with the create button, bulk-action
//! toolbar (visible only with a selection), search/filter bar, error banner,
//! the table itself, pagination footer, and the form dialog when open. The
//! loading row, the "no records" row, and the error banner are mutually
//! exclusive: a fetch clears the banner, and the empty row only renders once
//! loading has finished.

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use common::model::record::Record;
use common::model::reference::ReferenceItem;

use crate::entities::{CellKind, EntityDescriptor, FilterDef, FilterKind, ReferenceList};

use super::dialogs::form::RecordFormComponent;
use super::helpers::{format_phone, title_case};
use super::messages::Msg;
use super::state::{FormTarget, RecordListComponent};

pub fn view(component: &RecordListComponent, ctx: &Context<RecordListComponent>) -> Html {
    let link = ctx.link();
    let descriptor = component.entity.descriptor();

    html! {
        <div class="management-page">
            { build_header(descriptor, link) }
            { build_bulk_toolbar(component, descriptor, link) }
            { build_search_bar(component, descriptor, link) }
            {
                if component.filters_open {
                    build_filters_panel(component, descriptor, link)
                } else {
                    html! {}
                }
            }
            {
                if let Some(error) = &component.error {
                    html! { <div class="error-banner">{ error.clone() }</div> }
                } else {
                    html! {}
                }
            }
            <div class="table-card">
                { build_table(component, descriptor, link) }
                { build_pagination(component, link) }
            </div>
            { build_form_dialog(component, ctx) }
        </div>
    }
}

fn build_header(descriptor: &'static EntityDescriptor, link: &Scope<RecordListComponent>) -> Html {
    html! {
        <div class="page-header">
            <div>
                <h2>{ descriptor.title }</h2>
                <p class="page-description">{ descriptor.description }</p>
            </div>
            <button class="btn-primary" onclick={link.callback(|_| Msg::OpenCreate)}>
                { format!("Add {}", title_case(descriptor.singular)) }
            </button>
        </div>
    }
}

/// Toolbar over the table once rows are selected: selection count, export,
/// and bulk delete.
fn build_bulk_toolbar(
    component: &RecordListComponent,
    descriptor: &'static EntityDescriptor,
    link: &Scope<RecordListComponent>,
) -> Html {
    if component.selection.is_empty() {
        return html! {};
    }
    let selected = component.selected_ids();
    let count = selected.len();
    html! {
        <div class="bulk-toolbar">
            <span>{ format!("{} {}(s) selected", count, descriptor.singular) }</span>
            <div class="bulk-actions">
                <button class="btn-export" onclick={link.callback(|_| Msg::Export)}>
                    {"Export"}
                </button>
                <button
                    class="btn-danger"
                    onclick={link.callback(move |_| Msg::BulkDelete(selected.clone()))}
                >
                    {"Delete Selected"}
                </button>
            </div>
        </div>
    }
}

fn build_search_bar(
    component: &RecordListComponent,
    descriptor: &'static EntityDescriptor,
    link: &Scope<RecordListComponent>,
) -> Html {
    let on_input = link.callback(|event: InputEvent| {
        let input: HtmlInputElement = event.target_unchecked_into();
        Msg::SetSearchText(input.value())
    });
    let on_keydown = link
        .batch_callback(|event: KeyboardEvent| (event.key() == "Enter").then_some(Msg::SubmitSearch));

    html! {
        <div class="search-bar">
            <input
                type="text"
                class="search-input"
                placeholder={format!("Search {}s...", descriptor.singular)}
                value={component.search_input.clone()}
                oninput={on_input}
                onkeydown={on_keydown}
            />
            <button class="btn-primary" onclick={link.callback(|_| Msg::SubmitSearch)}>
                {"Search"}
            </button>
            <button class="btn-secondary" onclick={link.callback(|_| Msg::ToggleFilters)}>
                {
                    if component.query.filters.is_empty() {
                        "Advanced Filters".to_string()
                    } else {
                        format!("Advanced Filters ({})", component.query.filters.len())
                    }
                }
            </button>
            <button class="btn-secondary" title="Refresh" onclick={link.callback(|_| Msg::Refresh)}>
                {"Refresh"}
            </button>
        </div>
    }
}

fn build_filters_panel(
    component: &RecordListComponent,
    descriptor: &'static EntityDescriptor,
    link: &Scope<RecordListComponent>,
) -> Html {
    html! {
        <div class="filters-panel">
            <div class="filters-header">
                <h3>{"Filter Options"}</h3>
                <button class="btn-link" onclick={link.callback(|_| Msg::ClearFilters)}>
                    {"Reset All"}
                </button>
            </div>
            <div class="filters-grid">
                { for descriptor.filters.iter().map(|filter| build_filter_input(component, filter, link)) }
            </div>
        </div>
    }
}

fn build_filter_input(
    component: &RecordListComponent,
    filter: &'static FilterDef,
    link: &Scope<RecordListComponent>,
) -> Html {
    let current = component
        .query
        .filters
        .get(filter.key)
        .cloned()
        .unwrap_or_default();

    let key = filter.key;
    let control = match &filter.kind {
        FilterKind::Select(options) => {
            let on_change = link.callback(move |event: Event| {
                let select: HtmlSelectElement = event.target_unchecked_into();
                Msg::SetFilter(key, select.value())
            });
            html! {
                <select onchange={on_change}>
                    <option value="" selected={current.is_empty()}>{"All"}</option>
                    { for options.iter().map(|option| html! {
                        <option value={option.value} selected={current == option.value}>
                            { option.label }
                        </option>
                    }) }
                </select>
            }
        }
        FilterKind::Reference(list) => {
            let items = reference_items(component, *list);
            let on_change = link.callback(move |event: Event| {
                let select: HtmlSelectElement = event.target_unchecked_into();
                Msg::SetFilter(key, select.value())
            });
            html! {
                <select onchange={on_change}>
                    <option value="" selected={current.is_empty()}>{"All"}</option>
                    { for items.iter().map(|item| {
                        let id = item.id_string();
                        html! {
                            <option value={id.clone()} selected={current == id}>
                                { item.name.clone() }
                            </option>
                        }
                    }) }
                </select>
            }
        }
        FilterKind::Number | FilterKind::Date => {
            let input_type = if matches!(filter.kind, FilterKind::Number) {
                "number"
            } else {
                "date"
            };
            let on_change = link.callback(move |event: Event| {
                let input: HtmlInputElement = event.target_unchecked_into();
                Msg::SetFilter(key, input.value())
            });
            html! {
                <input
                    type={input_type}
                    value={current}
                    onchange={on_change}
                />
            }
        }
    };

    html! {
        <div class="filter-field">
            <label>{ filter.label }</label>
            { control }
        </div>
    }
}

fn build_table(
    component: &RecordListComponent,
    descriptor: &'static EntityDescriptor,
    link: &Scope<RecordListComponent>,
) -> Html {
    let column_span = (descriptor.columns.len() + 2).to_string();

    let body = if component.loading {
        html! {
            <tr>
                <td colspan={column_span} class="table-status">{"Loading..."}</td>
            </tr>
        }
    } else if component.items.is_empty() {
        html! {
            <tr>
                <td colspan={column_span} class="table-status">
                    { format!("No {}s found", descriptor.singular) }
                </td>
            </tr>
        }
    } else {
        component
            .items
            .iter()
            .map(|record| build_row(component, descriptor, record, link))
            .collect::<Html>()
    };

    html! {
        <table class="record-table">
            <thead>
                <tr>
                    <th>
                        <input
                            type="checkbox"
                            checked={component.all_selected()}
                            onchange={link.callback(|_| Msg::ToggleSelectAll)}
                        />
                    </th>
                    { for descriptor.columns.iter().map(|column| html! { <th>{ column.label }</th> }) }
                    <th>{"Actions"}</th>
                </tr>
            </thead>
            <tbody>{ body }</tbody>
        </table>
    }
}

fn build_row(
    component: &RecordListComponent,
    descriptor: &'static EntityDescriptor,
    record: &Record,
    link: &Scope<RecordListComponent>,
) -> Html {
    let identity = descriptor.identity_of(record);

    let select_cell = match &identity {
        Some(id) => {
            let id = id.clone();
            html! {
                <input
                    type="checkbox"
                    checked={component.selection.contains(&id)}
                    onchange={link.callback(move |_| Msg::ToggleSelect(id.clone()))}
                />
            }
        }
        // A row the descriptor cannot identify cannot be selected or acted on.
        None => html! {},
    };

    let actions = match &identity {
        Some(id) => {
            let edit_record = record.clone();
            let delete_id = id.clone();
            html! {
                <div class="row-actions">
                    <button
                        class="btn-link"
                        onclick={link.callback(move |_| Msg::OpenEdit(edit_record.clone()))}
                    >
                        {"Edit"}
                    </button>
                    <button
                        class="btn-link danger"
                        onclick={link.callback(move |_| Msg::BulkDelete(vec![delete_id.clone()]))}
                    >
                        {"Delete"}
                    </button>
                </div>
            }
        }
        None => html! {},
    };

    html! {
        <tr>
            <td>{ select_cell }</td>
            { for descriptor.columns.iter().map(|column| {
                let text = record.display(column.key);
                let text = match column.cell {
                    CellKind::Phone => format_phone(&text),
                    CellKind::Text => text,
                };
                html! { <td>{ text }</td> }
            }) }
            <td>{ actions }</td>
        </tr>
    }
}

fn build_pagination(component: &RecordListComponent, link: &Scope<RecordListComponent>) -> Html {
    let total_pages = component.total_pages();
    if total_pages <= 1 {
        return html! {};
    }
    html! {
        <div class="pagination">
            <p>
                { format!("Page {} of {}", component.query.page, total_pages) }
            </p>
            <div class="pagination-controls">
                <button
                    disabled={!component.has_previous}
                    onclick={link.callback(|_| Msg::PrevPage)}
                >
                    {"Previous"}
                </button>
                <button
                    disabled={!component.has_next}
                    onclick={link.callback(|_| Msg::NextPage)}
                >
                    {"Next"}
                </button>
            </div>
        </div>
    }
}

fn build_form_dialog(component: &RecordListComponent, ctx: &Context<RecordListComponent>) -> Html {
    let link = ctx.link();
    let record = match &component.form {
        FormTarget::Closed => return html! {},
        FormTarget::Create => None,
        FormTarget::Edit(record) => Some(record.clone()),
    };
    html! {
        <RecordFormComponent
            entity={component.entity}
            session={ctx.props().session.clone()}
            record={record}
            referral_types={component.referral_types.clone()}
            referral_statuses={component.referral_statuses.clone()}
            on_saved={link.callback(|_| Msg::Saved)}
            on_close={link.callback(|_| Msg::CloseForm)}
            on_unauthorized={ctx.props().on_unauthorized.clone()}
        />
    }
}

fn reference_items(component: &RecordListComponent, list: ReferenceList) -> &[ReferenceItem] {
    match list {
        ReferenceList::ReferralTypes => &component.referral_types,
        ReferenceList::ReferralStatuses => &component.referral_statuses,
    }
}
