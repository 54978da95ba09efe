//! View rendering for the record form dialog.
//!
//! Fields render grouped by their descriptor section, with a heading each
//! time the section changes (sections are contiguous in the tables).
//! Required fields carry a marker; fields the last submit found empty are
//! flagged inline.

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use common::model::reference::ReferenceItem;

use crate::entities::{FieldDef, FieldKind, ReferenceList};

use crate::components::records::helpers::title_case;
use super::messages::Msg;
use super::state::RecordFormComponent;

pub fn view(component: &RecordFormComponent, ctx: &Context<RecordFormComponent>) -> Html {
    let link = ctx.link();
    let descriptor = component.entity.descriptor();

    let title = if component.is_edit() {
        format!("Edit {}", title_case(descriptor.singular))
    } else {
        format!("Create {}", title_case(descriptor.singular))
    };

    let mut sections: Vec<Html> = Vec::new();
    let mut current_section = "";
    for field in descriptor.fields {
        if field.section != current_section {
            current_section = field.section;
            sections.push(html! { <h4 class="form-section">{ field.section }</h4> });
        }
        sections.push(build_field(component, ctx, field, link));
    }

    html! {
        <div class="modal-overlay">
            <div class="modal-card">
                <h3>{ title }</h3>

                {
                    if let Some(error) = &component.error {
                        html! { <div class="error-banner">{ error.clone() }</div> }
                    } else {
                        html! {}
                    }
                }

                <div class="form-body">
                    { sections.into_iter().collect::<Html>() }
                </div>

                <div class="form-footer">
                    <button
                        class="btn-secondary"
                        onclick={link.callback(|_| Msg::Cancel)}
                        disabled={component.saving}
                    >
                        {"Cancel"}
                    </button>
                    <button
                        class="btn-primary"
                        onclick={link.callback(|_| Msg::Submit)}
                        disabled={component.saving}
                    >
                        { if component.saving { "Saving..." } else { "Save" } }
                    </button>
                </div>
            </div>
        </div>
    }
}

fn build_field(
    component: &RecordFormComponent,
    ctx: &Context<RecordFormComponent>,
    field: &'static FieldDef,
    link: &Scope<RecordFormComponent>,
) -> Html {
    let key = field.key;
    let value = component.value(key).to_string();
    let flagged = component.missing.contains(&field.label);

    let control = match &field.kind {
        FieldKind::Checkbox => {
            let on_change = link.callback(move |event: Event| {
                let input: HtmlInputElement = event.target_unchecked_into();
                Msg::SetField(key, input.checked().to_string())
            });
            html! {
                <input
                    type="checkbox"
                    checked={value == "true"}
                    onchange={on_change}
                />
            }
        }
        FieldKind::TextArea => {
            let on_input = link.callback(move |event: InputEvent| {
                let area: HtmlTextAreaElement = event.target_unchecked_into();
                Msg::SetField(key, area.value())
            });
            html! {
                <textarea rows="3" value={value} oninput={on_input} />
            }
        }
        FieldKind::Select(options) => {
            let on_change = link.callback(move |event: Event| {
                let select: HtmlSelectElement = event.target_unchecked_into();
                Msg::SetField(key, select.value())
            });
            html! {
                <select onchange={on_change}>
                    <option value="" selected={value.is_empty()}>
                        { format!("Select {}", field.label) }
                    </option>
                    { for options.iter().map(|option| html! {
                        <option value={option.value} selected={value == option.value}>
                            { option.label }
                        </option>
                    }) }
                </select>
            }
        }
        FieldKind::Reference(list) => {
            let items = reference_items(ctx, *list);
            let on_change = link.callback(move |event: Event| {
                let select: HtmlSelectElement = event.target_unchecked_into();
                Msg::SetField(key, select.value())
            });
            html! {
                <select onchange={on_change}>
                    <option value="" selected={value.is_empty()}>
                        { format!("Select {}", field.label) }
                    </option>
                    { for items.iter().map(|item| {
                        let id = item.id_string();
                        html! {
                            <option value={id.clone()} selected={value == id}>
                                { item.name.clone() }
                            </option>
                        }
                    }) }
                </select>
            }
        }
        other => {
            let input_type = match other {
                FieldKind::Email => "email",
                FieldKind::Phone => "tel",
                FieldKind::Date => "date",
                FieldKind::Number => "number",
                _ => "text",
            };
            let on_input = link.callback(move |event: InputEvent| {
                let input: HtmlInputElement = event.target_unchecked_into();
                Msg::SetField(key, input.value())
            });
            html! {
                <input type={input_type} value={value} oninput={on_input} />
            }
        }
    };

    html! {
        <div class={if flagged { "form-field invalid" } else { "form-field" }}>
            <label>
                { field.label }
                { if field.required { " *" } else { "" } }
            </label>
            { control }
            {
                if flagged {
                    html! { <span class="field-error">{ format!("{} is required", field.label) }</span> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn reference_items(ctx: &Context<RecordFormComponent>, list: ReferenceList) -> Vec<ReferenceItem> {
    match list {
        ReferenceList::ReferralTypes => ctx.props().referral_types.clone(),
        ReferenceList::ReferralStatuses => ctx.props().referral_statuses.clone(),
    }
}
