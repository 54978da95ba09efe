//! Login form shown while no session exists.
//!
//! Both credential and network failures collapse to the same inline message;
//! retrying is always a user action. On success the parent is notified and
//! swaps in the authenticated shell.

use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::session::Session;

pub struct LoginComponent {
    username: String,
    password: String,
    error: Option<String>,
    busy: bool,
}

pub enum Msg {
    SetUsername(String),
    SetPassword(String),
    Submit,
    Done(bool),
}

#[derive(Properties, PartialEq)]
pub struct LoginProps {
    pub on_login: Callback<()>,
}

impl Component for LoginComponent {
    type Message = Msg;
    type Properties = LoginProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            error: None,
            busy: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetUsername(value) => {
                self.username = value;
                true
            }
            Msg::SetPassword(value) => {
                self.password = value;
                true
            }
            Msg::Submit => {
                if self.busy || self.username.is_empty() {
                    return false;
                }
                self.busy = true;
                self.error = None;

                let username = self.username.clone();
                let password = self.password.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let mut session = Session::load();
                    let ok = session.login(&username, &password).await;
                    link.send_message(Msg::Done(ok));
                });
                true
            }
            Msg::Done(true) => {
                ctx.props().on_login.emit(());
                false
            }
            Msg::Done(false) => {
                self.busy = false;
                self.error = Some("Invalid username or password".to_string());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        let on_username = link.callback(|event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            Msg::SetUsername(input.value())
        });
        let on_password = link.callback(|event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            Msg::SetPassword(input.value())
        });
        let on_keydown = link
            .batch_callback(|event: KeyboardEvent| (event.key() == "Enter").then_some(Msg::Submit));

        html! {
            <div class="login-screen">
                <div class="login-card">
                    <h1>{"homealign"}</h1>
                    <p class="login-subtitle">{"Admin Portal"}</p>

                    {
                        if let Some(error) = &self.error {
                            html! { <div class="error-banner">{ error.clone() }</div> }
                        } else {
                            html! {}
                        }
                    }

                    <label>{"Username"}</label>
                    <input
                        type="text"
                        value={self.username.clone()}
                        oninput={on_username}
                        disabled={self.busy}
                    />

                    <label>{"Password"}</label>
                    <input
                        type="password"
                        value={self.password.clone()}
                        oninput={on_password}
                        onkeydown={on_keydown}
                        disabled={self.busy}
                    />

                    <button
                        class="btn-primary"
                        onclick={link.callback(|_| Msg::Submit)}
                        disabled={self.busy}
                    >
                        { if self.busy { "Signing in..." } else { "Sign In" } }
                    </button>
                </div>
            </div>
        }
    }
}
