//! Root component: session gate and view routing.
//!
//! Renders the login form until a session exists, then the navigation shell
//! plus the active entity view. The session is owned here and injected into
//! children by prop; the only mutations flow back through the callbacks
//! wired below (login, logout, tenant switch). A 401 surfaced by any child
//! lands on `Msg::Logout`.

use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::tenant::Tenant;

use crate::api::{ApiClient, ApiError};
use crate::components::login::LoginComponent;
use crate::components::nav::NavComponent;
use crate::components::records::RecordListComponent;
use crate::config::fallback_tenants;
use crate::entities::EntityKind;
use crate::session::Session;

pub struct App {
    session: Session,
    active: EntityKind,
    tenants: Vec<Tenant>,
}

pub enum Msg {
    LoggedIn,
    Logout,
    SelectEntity(EntityKind),
    SelectTenant(String),
    TenantsLoaded(Vec<Tenant>),
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            session: Session::load(),
            active: EntityKind::Patients,
            tenants: Vec::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::LoggedIn => {
                self.session = Session::load();
                load_tenants(ctx, self.session.clone());
                true
            }
            Msg::Logout => {
                self.session.logout();
                self.tenants.clear();
                self.active = EntityKind::Patients;
                true
            }
            Msg::SelectEntity(kind) => {
                self.active = kind;
                true
            }
            Msg::SelectTenant(tenant_id) => {
                // Takes effect on the next API call; the active list view
                // observes the session change and refetches from page 1.
                self.session.set_selected_tenant(&tenant_id);
                true
            }
            Msg::TenantsLoaded(tenants) => {
                self.tenants = tenants;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        if !self.session.is_authenticated() {
            return html! {
                <LoginComponent on_login={link.callback(|_| Msg::LoggedIn)} />
            };
        }

        let descriptor = self.active.descriptor();
        html! {
            <div class="app-shell">
                <NavComponent
                    active={self.active}
                    tenants={self.tenants.clone()}
                    selected_tenant={self.session.selected_tenant.clone()}
                    on_select_entity={link.callback(Msg::SelectEntity)}
                    on_select_tenant={link.callback(Msg::SelectTenant)}
                    on_logout={link.callback(|_| Msg::Logout)}
                />
                <main class="app-main">
                    // Keyed by slug so switching entities mounts a fresh view
                    // with clean pagination and selection state.
                    <RecordListComponent
                        key={descriptor.slug}
                        entity={self.active}
                        session={self.session.clone()}
                        on_unauthorized={link.callback(|_| Msg::Logout)}
                    />
                </main>
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && self.session.is_authenticated() {
            load_tenants(ctx, self.session.clone());
        }
    }
}

/// Loads the tenant list for the switcher. The endpoint is authoritative;
/// the built-in list keeps the switcher usable when it is missing or down.
fn load_tenants(ctx: &Context<App>, session: Session) {
    let link = ctx.link().clone();
    spawn_local(async move {
        let message = match ApiClient::new(session).tenants().await {
            Ok(tenants) if !tenants.is_empty() => Msg::TenantsLoaded(tenants),
            Ok(_) => Msg::TenantsLoaded(fallback_tenants()),
            Err(ApiError::Unauthorized) => Msg::Logout,
            Err(err) => {
                gloo_console::error!(format!("Failed to fetch tenants: {}", err));
                Msg::TenantsLoaded(fallback_tenants())
            }
        };
        link.send_message(message);
    });
}
