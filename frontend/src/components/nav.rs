//! Navigation shell: entity menu, tenant switcher, logout.
//!
//! Pure presentation: the only local state is whether the tenant dropdown
//! is open. Every selection is routed upward through the prop callbacks.

use yew::prelude::*;

use common::model::tenant::Tenant;

use crate::entities::EntityKind;

pub struct NavComponent {
    tenant_dropdown_open: bool,
}

pub enum Msg {
    ToggleTenantDropdown,
    PickTenant(String),
    PickEntity(EntityKind),
    Logout,
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub active: EntityKind,
    pub tenants: Vec<Tenant>,
    pub selected_tenant: String,
    pub on_select_entity: Callback<EntityKind>,
    pub on_select_tenant: Callback<String>,
    pub on_logout: Callback<()>,
}

impl Component for NavComponent {
    type Message = Msg;
    type Properties = NavProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            tenant_dropdown_open: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ToggleTenantDropdown => {
                self.tenant_dropdown_open = !self.tenant_dropdown_open;
                true
            }
            Msg::PickTenant(tenant_id) => {
                self.tenant_dropdown_open = false;
                ctx.props().on_select_tenant.emit(tenant_id);
                true
            }
            Msg::PickEntity(kind) => {
                ctx.props().on_select_entity.emit(kind);
                false
            }
            Msg::Logout => {
                ctx.props().on_logout.emit(());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let props = ctx.props();

        let selected_name = props
            .tenants
            .iter()
            .find(|tenant| tenant.id == props.selected_tenant)
            .map(|tenant| tenant.name.clone())
            .unwrap_or_else(|| props.selected_tenant.clone());

        html! {
            <nav class="sidebar">
                <div class="sidebar-header">
                    <h1>{"homealign"}</h1>
                    <p>{"Admin Portal"}</p>
                </div>

                <div class="tenant-selector">
                    <button
                        class="tenant-toggle"
                        onclick={link.callback(|_| Msg::ToggleTenantDropdown)}
                    >
                        { format!("DB: {}", selected_name) }
                    </button>
                    {
                        if self.tenant_dropdown_open {
                            html! {
                                <div class="tenant-dropdown">
                                    { for props.tenants.iter().map(|tenant| {
                                        let id = tenant.id.clone();
                                        html! {
                                            <button
                                                class="tenant-option"
                                                onclick={link.callback(move |_| Msg::PickTenant(id.clone()))}
                                            >
                                                { tenant.name.clone() }
                                            </button>
                                        }
                                    }) }
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>

                <ul class="nav-menu">
                    { for EntityKind::ALL.iter().map(|kind| {
                        let kind = *kind;
                        let descriptor = kind.descriptor();
                        let class = if props.active == kind { "nav-item active" } else { "nav-item" };
                        html! {
                            <li>
                                <button
                                    class={class}
                                    onclick={link.callback(move |_| Msg::PickEntity(kind))}
                                >
                                    { descriptor.title }
                                </button>
                            </li>
                        }
                    }) }
                </ul>

                <div class="sidebar-footer">
                    <button class="nav-item" onclick={link.callback(|_| Msg::Logout)}>
                        {"Logout"}
                    </button>
                </div>
            </nav>
        }
    }
}
